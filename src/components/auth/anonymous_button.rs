//! Guest entry point: creates an anonymous identity + session in one step.

use leptos::prelude::*;

use crate::i18n;
use crate::net::api;
use crate::net::types::ApiError;
use crate::state::settings::SettingsState;

#[component]
pub fn AnonymousButton(on_success: Callback<()>, on_error: Callback<ApiError>) -> impl IntoView {
    let settings = expect_context::<RwSignal<SettingsState>>();
    let t = move |key: &'static str| i18n::translate(settings.get().lang, key);
    let loading = RwSignal::new(false);

    let go = move |_| {
        if loading.get_untracked() {
            return;
        }
        loading.set(true);
        leptos::task::spawn_local(async move {
            // A leftover session would block anonymous creation; drop it
            // first so the guest starts clean.
            if api::get_account().await.is_ok() {
                if let Err(e) = api::delete_session_current().await {
                    leptos::logging::warn!("failed to drop leftover session: {e}");
                }
            }
            match api::create_anonymous_session().await {
                Ok(_) => {
                    loading.try_set(false);
                    on_success.run(());
                }
                Err(e) => {
                    loading.try_set(false);
                    on_error.run(e);
                }
            }
        });
    };

    view! {
        <button class="btn provider guest" disabled=move || loading.get() on:click=go>
            <span class="label">{move || t("btn.continueGuest")}</span>
        </button>
    }
}
