//! Free-form backend console. Sends the entered text through the serverless
//! proxy and prints whatever message comes back.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::i18n;
use crate::net::functions;
use crate::state::settings::SettingsState;

#[component]
pub fn AdvancedPage() -> impl IntoView {
    let settings = expect_context::<RwSignal<SettingsState>>();
    let t = move |key: &'static str| i18n::translate(settings.get().lang, key);

    let text = RwSignal::new(String::new());
    let output = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let send = move |_| {
        if loading.get_untracked() || text.get_untracked().trim().is_empty() {
            return;
        }
        loading.set(true);
        error.set(None);
        output.set(None);
        leptos::task::spawn_local(async move {
            match functions::call_advanced(text.get_untracked().trim(), "advanced").await {
                Ok(message) => {
                    output.try_set(Some(message));
                }
                Err(e) => {
                    error.try_set(Some(e));
                }
            }
            loading.try_set(false);
        });
    };

    view! {
        <div class="advanced-layout stack">
            <div class="row">
                <A href="/profile">"← " {move || t("btn.back")}</A>
            </div>
            <div class="card">
                <h2>{move || t("advanced.title")}</h2>
                <textarea
                    rows=6
                    placeholder=move || t("advanced.placeholder")
                    prop:value=move || text.get()
                    on:input=move |ev| text.set(event_target_value(&ev))
                ></textarea>
                <button
                    class="btn primary"
                    disabled=move || loading.get() || text.get().trim().is_empty()
                    on:click=send
                >
                    {move || t("advanced.send")}
                </button>
            </div>
            <Show when=move || error.get().is_some()>
                <div class="card error" role="alert">{move || error.get()}</div>
            </Show>
            <Show when=move || output.get().is_some()>
                <div class="card">
                    <label>{move || t("advanced.output")}</label>
                    <pre>{move || output.get()}</pre>
                </div>
            </Show>
        </div>
    }
}
