//! Auth orchestrator page.
//!
//! Owns the Identity/Auth-Mode pair and renders exactly one credential
//! collector at a time. On mount it consumes the one-shot location callback
//! (challenge pair or federated error flag) and runs the initial identity
//! probe; collectors and the callback flow report upward and the re-fetch
//! they trigger is what moves the mode to `Authenticated`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth::anonymous_button::AnonymousButton;
use crate::components::auth::email_form::EmailForm;
use crate::components::auth::password_reset::RecoveryConfirm;
use crate::components::auth::provider_buttons::ProviderButtons;
use crate::components::legal::LegalModal;
use crate::i18n::{self, LangCode};
use crate::net::api;
use crate::net::types::ApiError;
use crate::state::auth::{AuthMode, AuthState, EmailMode};
use crate::state::settings::SettingsState;
use crate::util::location::LegalDoc;
use crate::util::theme::{self, Theme};

#[cfg(feature = "hydrate")]
use crate::util::location::{self, CallbackIntent};

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let settings = expect_context::<RwSignal<SettingsState>>();
    let t = move |key: &'static str| i18n::translate(settings.get().lang, key);

    let email_mode = RwSignal::new(EmailMode::Login);
    let legal_open = RwSignal::new(None::<LegalDoc>);
    // A recovery pair from an emailed link, held until the new password is
    // confirmed or the visitor backs out.
    let recovery = RwSignal::new(None::<(String, String)>);
    let bootstrapped = StoredValue::new(false);

    let probe = move || {
        leptos::task::spawn_local(async move {
            let result = api::get_account().await;
            auth.try_update(|s| s.probe_finished(result));
        });
    };

    // Any collector success re-fetches the identity; the mode flips to
    // `Authenticated` only through that fetch.
    let on_auth_success = Callback::new(move |()| probe());
    let on_collector_error =
        Callback::new(move |e: ApiError| auth.update(|s| s.collector_failed(&e)));

    // One-shot bootstrap: interpret the incoming location, then probe.
    Effect::new(move || {
        if bootstrapped.get_value() {
            return;
        }
        bootstrapped.set_value(true);

        #[cfg(feature = "hydrate")]
        {
            let pairs = location::parse_query(&location::read_query());
            if let Some(doc) = location::parse_legal(&pairs) {
                legal_open.set(Some(doc));
            }
            let intent = location::parse_callback(&pairs);
            // Consume the parameters before the attempt so a refresh can
            // never replay them, success or failure.
            location::strip_from_location(intent.consumed_keys());
            match intent {
                CallbackIntent::ProviderError { provider } => {
                    auth.update(|s| s.set_banner(location::provider_error_message(&provider)));
                }
                CallbackIntent::SessionToken { user_id, secret } => {
                    leptos::task::spawn_local(async move {
                        match api::create_session_token(&user_id, &secret).await {
                            Ok(_) => on_auth_success.run(()),
                            Err(e) => {
                                auth.try_update(|s| s.collector_failed(&e));
                            }
                        }
                    });
                }
                CallbackIntent::Recovery { user_id, secret } => {
                    recovery.set(Some((user_id, secret)));
                }
                CallbackIntent::None => {}
            }
        }

        probe();
    });

    // Post-login destination: leave the auth flow once authenticated.
    let navigate = use_navigate();
    Effect::new(move || {
        if auth.get().is_authenticated() {
            navigate(
                "/profile",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    let close_legal = move |_| {
        legal_open.set(None);
        #[cfg(feature = "hydrate")]
        location::strip_from_location(&["legal"]);
    };
    let open_legal = move |doc: LegalDoc| {
        legal_open.set(Some(doc));
        #[cfg(feature = "hydrate")]
        location::set_legal_param(doc);
    };

    let landing = move || {
        view! {
            <div class="landing-controls">
                <div class="title">{move || t("title.signIn")}</div>
                <div class="selects">
                    <label>
                        {move || t("label.language")}
                        <select on:change=move |ev| {
                            if let Some(lang) = LangCode::from_code(&event_target_value(&ev)) {
                                settings.update(|s| s.lang = lang);
                                i18n::persist(lang);
                            }
                        }>
                            {LangCode::ALL
                                .iter()
                                .map(|lang| {
                                    let lang = *lang;
                                    view! {
                                        <option
                                            value=lang.as_str()
                                            prop:selected=move || settings.get().lang == lang
                                        >
                                            {lang.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label>
                        {move || t("label.theme")}
                        <select on:change=move |ev| {
                            if let Some(theme) = Theme::from_str(&event_target_value(&ev)) {
                                settings.update(|s| s.theme = theme);
                                theme::persist(theme);
                            }
                        }>
                            <option
                                value="dark"
                                prop:selected=move || settings.get().theme == Theme::Dark
                            >
                                {move || t("theme.dark")}
                            </option>
                            <option
                                value="light"
                                prop:selected=move || settings.get().theme == Theme::Light
                            >
                                {move || t("theme.light")}
                            </option>
                        </select>
                    </label>
                </div>
            </div>
            <div class="centered-sheet">
                <div class="sheet">
                    <div class="provider-row">
                        <button
                            class="btn provider email"
                            on:click=move |_| {
                                email_mode.set(EmailMode::Login);
                                auth.update(|s| s.choose_email(EmailMode::Login));
                            }
                        >
                            <span class="label">{move || t("btn.continueEmail")}</span>
                        </button>
                        <AnonymousButton
                            on_success=on_auth_success
                            on_error=on_collector_error
                        />
                    </div>
                    <ProviderButtons on_error=on_collector_error/>
                </div>
            </div>
        }
    };

    let email_sheet = move || {
        view! {
            <div class="stack">
                <button class="btn" on:click=move |_| auth.update(AuthState::back_to_landing)>
                    "← " {move || t("btn.back")}
                </button>
                <div class="card">
                    <div class="row" role="radiogroup">
                        <label>
                            <input
                                type="radio"
                                name="emailMode"
                                prop:checked=move || email_mode.get() == EmailMode::Login
                                on:change=move |_| email_mode.set(EmailMode::Login)
                            />
                            " "
                            {move || t("emailOpt.login")}
                        </label>
                        <label>
                            <input
                                type="radio"
                                name="emailMode"
                                prop:checked=move || email_mode.get() == EmailMode::Register
                                on:change=move |_| email_mode.set(EmailMode::Register)
                            />
                            " "
                            {move || t("emailOpt.register")}
                        </label>
                    </div>
                </div>
                <EmailForm
                    mode=Signal::derive(move || email_mode.get())
                    on_success=on_auth_success
                    on_error=on_collector_error
                />
            </div>
        }
    };

    view! {
        <div class="auth-layout">
            <Show when=move || auth.get().banner.is_some()>
                <div class="card error banner" role="alert">
                    <span>{move || auth.get().banner}</span>
                    <button class="btn" on:click=move |_| auth.update(AuthState::dismiss_banner)>
                        "×"
                    </button>
                </div>
            </Show>

            {move || {
                if let Some((user_id, secret)) = recovery.get() {
                    return view! {
                        <RecoveryConfirm
                            user_id=user_id
                            secret=secret
                            on_done=Callback::new(move |()| recovery.set(None))
                        />
                    }
                    .into_any();
                }
                match auth.get().mode {
                    AuthMode::Checking | AuthMode::Authenticated => {
                        view! { <div class="card">{move || t("msg.checking")}</div> }.into_any()
                    }
                    AuthMode::Landing => landing().into_any(),
                    AuthMode::Email(_) => email_sheet().into_any(),
                }
            }}

            <footer>
                <a
                    class="linklike"
                    href="?legal=privacy"
                    on:click=move |ev| {
                        ev.prevent_default();
                        open_legal(LegalDoc::Privacy);
                    }
                >
                    {move || t("footer.privacy")}
                </a>
                <span class="muted">"·"</span>
                <a
                    class="linklike"
                    href="?legal=tos"
                    on:click=move |ev| {
                        ev.prevent_default();
                        open_legal(LegalDoc::Tos);
                    }
                >
                    {move || t("footer.tos")}
                </a>
            </footer>

            {move || {
                legal_open
                    .get()
                    .map(|doc| {
                        view! {
                            <LegalModal doc=doc on_close=Callback::new(close_legal)/>
                        }
                    })
            }}
        </div>
    }
}
