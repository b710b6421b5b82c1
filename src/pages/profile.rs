//! Authenticated branch: identity summary, session controls, and account
//! settings. Visitors without a session are bounced back to the sign-in
//! flow after the mount-time identity check.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::auth::profile_settings::ProfileSettings;
use crate::components::auth::session_controls::SessionControls;
use crate::i18n;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::settings::SettingsState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let settings = expect_context::<RwSignal<SettingsState>>();
    let t = move |key: &'static str| i18n::translate(settings.get().lang, key);

    let checked = RwSignal::new(false);
    let bootstrapped = StoredValue::new(false);

    let navigate = use_navigate();
    let navigate_out = navigate.clone();
    Effect::new(move || {
        if bootstrapped.get_value() {
            return;
        }
        bootstrapped.set_value(true);
        let navigate = navigate_out.clone();
        leptos::task::spawn_local(async move {
            let result = api::get_account().await;
            let ok = result.is_ok();
            auth.try_update(|s| s.probe_finished(result));
            checked.try_set(true);
            if !ok {
                navigate(
                    "/",
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
        });
    });

    let refetch = Callback::new(move |()| {
        leptos::task::spawn_local(async move {
            let result = api::get_account().await;
            auth.try_update(|s| s.probe_finished(result));
        });
    });

    let navigate_signed_out = navigate.clone();
    let on_signed_out = Callback::new(move |()| {
        auth.update(AuthState::signed_out);
        navigate_signed_out(
            "/",
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });

    let on_session_error = Callback::new(move |e: crate::net::types::ApiError| {
        auth.update(|s| s.collector_failed(&e));
    });

    view! {
        <div class="profile-layout">
            <Show
                when=move || checked.get() && auth.get().is_authenticated()
                fallback=move || view! { <div class="card">{move || t("msg.checking")}</div> }
            >
                <div class="stack">
                    <div class="card">
                        <h2>
                            {move || t("msg.signedInAs")} " "
                            <strong>
                                {move || auth.get().identity.map(|i| i.label()).unwrap_or_default()}
                            </strong>
                        </h2>
                    </div>

                    <Show when=move || auth.get().banner.is_some()>
                        <div class="card error" role="alert">
                            <span>{move || auth.get().banner}</span>
                            <button
                                class="btn"
                                on:click=move |_| auth.update(AuthState::dismiss_banner)
                            >
                                "×"
                            </button>
                        </div>
                    </Show>

                    <SessionControls on_signed_out=on_signed_out on_error=on_session_error/>
                    <ProfileSettings on_change=refetch/>

                    <div class="card">
                        <A href="/advanced">{move || t("advanced.title")}</A>
                    </div>
                </div>
            </Show>
        </div>
    }
}
