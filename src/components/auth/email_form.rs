//! Email credential collector: password login/registration, one-time code
//! (delivered by email or phone), and magic-link methods behind a single
//! form, plus the signed-out entry point for password recovery.
//!
//! The form validates locally (identifier shape, secret length) before any
//! backend call, keeps one in-flight call at a time, and reports outcomes
//! upward through callbacks. Failures are shown inline and never change the
//! orchestrator's mode.

use leptos::prelude::*;

use crate::i18n;
use crate::net::api;
use crate::net::types::ApiError;
use crate::state::auth::{EmailMode, email_valid, password_valid, phone_valid};
use crate::state::otp::OtpFlow;
use crate::state::settings::SettingsState;

/// How a returning visitor proves control of their identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum LoginMethod {
    #[default]
    Code,
    Password,
    Link,
}

/// Where a one-time code is delivered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum OtpChannel {
    #[default]
    Email,
    Phone,
}

#[component]
pub fn EmailForm(
    #[prop(into)] mode: Signal<EmailMode>,
    on_success: Callback<()>,
    on_error: Callback<ApiError>,
) -> impl IntoView {
    let settings = expect_context::<RwSignal<SettingsState>>();
    let t = move |key: &'static str| i18n::translate(settings.get().lang, key);

    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let method = RwSignal::new(LoginMethod::default());
    let channel = RwSignal::new(OtpChannel::default());
    let otp = RwSignal::new(OtpFlow::default());
    let otp_secret = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let show_pwd = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    // Notices are i18n keys so they re-render in the active locale.
    let notice = RwSignal::new(None::<&'static str>);

    let email_ok = move || email_valid(email.get().trim());
    let phone_ok = move || phone_valid(phone.get().trim());
    let code_method = move || mode.get() == EmailMode::Login && method.get() == LoginMethod::Code;
    let phone_channel = move || code_method() && channel.get() == OtpChannel::Phone;
    let identifier_ok = move || if phone_channel() { phone_ok() } else { email_ok() };
    let pwd_ok = move || password_valid(&password.get());
    let needs_password = move || {
        mode.get() == EmailMode::Register
            || (mode.get() == EmailMode::Login && method.get() == LoginMethod::Password)
    };
    // The primary button honors the same cooldown as the resend action once
    // a challenge exists.
    let submit_disabled = move || {
        loading.get()
            || !identifier_ok()
            || (needs_password() && !pwd_ok())
            || (code_method() && !otp.get().send_allowed())
    };

    let finish_err = move |e: ApiError| {
        error.try_set(Some(e.to_string()));
        loading.try_set(false);
        on_error.run(e);
    };

    let register = move || {
        loading.set(true);
        error.set(None);
        notice.set(None);
        leptos::task::spawn_local(async move {
            let addr = email.get_untracked().trim().to_owned();
            let pwd = password.get_untracked();
            let result = async {
                api::create_account(&addr, &pwd).await?;
                api::create_email_password_session(&addr, &pwd).await
            }
            .await;
            match result {
                Ok(_) => {
                    loading.try_set(false);
                    on_success.run(());
                }
                Err(e) => finish_err(e),
            }
        });
    };

    let login_password = move || {
        loading.set(true);
        error.set(None);
        notice.set(None);
        leptos::task::spawn_local(async move {
            let addr = email.get_untracked().trim().to_owned();
            let pwd = password.get_untracked();
            match api::create_email_password_session(&addr, &pwd).await {
                Ok(_) => {
                    loading.try_set(false);
                    on_success.run(());
                }
                Err(e) => finish_err(e),
            }
        });
    };

    // Two-phase code flow, step one: request a challenge on the selected
    // channel. Also used by the resend button once its cooldown reaches zero.
    let send_code = move || {
        loading.set(true);
        error.set(None);
        notice.set(None);
        leptos::task::spawn_local(async move {
            let (result, sent_key) = match channel.get_untracked() {
                OtpChannel::Email => (
                    api::create_email_token(email.get_untracked().trim()).await,
                    "otp.sentEmail",
                ),
                OtpChannel::Phone => (
                    api::create_phone_token(phone.get_untracked().trim()).await,
                    "otp.sentPhone",
                ),
            };
            match result {
                Ok(token) => {
                    if let Some(epoch) = otp.try_update(|flow| flow.challenge_sent(token.user_id))
                    {
                        spawn_cooldown_ticker(otp, epoch);
                    }
                    notice.try_set(Some(sent_key));
                    loading.try_set(false);
                }
                Err(e) => finish_err(e),
            }
        });
    };

    // Step two: redeem the challenge. On failure the challenge id is kept so
    // the visitor can retry with another code.
    let verify_code = move || {
        let Some(challenge_id) = otp.get_untracked().challenge_id else {
            return;
        };
        loading.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::create_session_token(&challenge_id, otp_secret.get_untracked().trim()).await
            {
                Ok(_) => {
                    loading.try_set(false);
                    on_success.run(());
                }
                Err(e) => finish_err(e),
            }
        });
    };

    let send_link = move || {
        loading.set(true);
        error.set(None);
        notice.set(None);
        leptos::task::spawn_local(async move {
            let return_url = origin_url();
            match api::create_magic_url_token(email.get_untracked().trim(), &return_url).await {
                Ok(_) => {
                    notice.try_set(Some("link.sent"));
                    loading.try_set(false);
                }
                Err(e) => finish_err(e),
            }
        });
    };

    // Signed-out recovery entry: emails a reset link whose return URL routes
    // through the callback interpreter's recovery branch.
    let forgot_password = move || {
        loading.set(true);
        error.set(None);
        notice.set(None);
        leptos::task::spawn_local(async move {
            let return_url = api::recovery_return_url(&origin_url());
            match api::create_recovery(email.get_untracked().trim(), &return_url).await {
                Ok(()) => {
                    notice.try_set(Some("link.sent"));
                    loading.try_set(false);
                }
                Err(e) => finish_err(e),
            }
        });
    };

    let submit = move |_| {
        if submit_disabled() {
            return;
        }
        match (mode.get_untracked(), method.get_untracked()) {
            (EmailMode::Register, _) => register(),
            (EmailMode::Login, LoginMethod::Password) => login_password(),
            (EmailMode::Login, LoginMethod::Code) => send_code(),
            (EmailMode::Login, LoginMethod::Link) => send_link(),
        }
    };

    let method_radio = move |m: LoginMethod, key: &'static str| {
        view! {
            <label>
                <input
                    type="radio"
                    name="loginMethod"
                    prop:checked=move || method.get() == m
                    on:change=move |_| method.set(m)
                />
                " "
                {move || t(key)}
            </label>
        }
    };

    let channel_radio = move |c: OtpChannel, key: &'static str| {
        view! {
            <label>
                <input
                    type="radio"
                    name="otpChannel"
                    prop:checked=move || channel.get() == c
                    on:change=move |_| channel.set(c)
                />
                " "
                {move || t(key)}
            </label>
        }
    };

    let submit_label = move || {
        if loading.get() {
            return "…".to_owned();
        }
        match (mode.get(), method.get()) {
            (EmailMode::Register, _) => t("btn.register").to_owned(),
            (EmailMode::Login, LoginMethod::Password) => t("btn.login").to_owned(),
            (EmailMode::Login, LoginMethod::Code) => {
                if otp.get().challenge_id.is_some() {
                    t("otp.resend").to_owned()
                } else {
                    t("otp.send").to_owned()
                }
            }
            (EmailMode::Login, LoginMethod::Link) => t("login.method.link").to_owned(),
        }
    };

    view! {
        <div class="card email-form">
            <div class="form-grid">
                <Show when=move || !phone_channel()>
                    <div class="field">
                        <input
                            type="email"
                            placeholder=move || t("label.email")
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <Show when=move || !email.get().is_empty() && !email_ok()>
                            <div class="hint error-inline">{move || t("error.emailInvalid")}</div>
                        </Show>
                    </div>
                </Show>
                <Show when=phone_channel>
                    <div class="field">
                        <input
                            type="tel"
                            placeholder=move || t("label.phone")
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                        <Show when=move || !phone.get().is_empty() && !phone_ok()>
                            <div class="hint error-inline">{move || t("error.phoneInvalid")}</div>
                        </Show>
                    </div>
                </Show>

                <Show when=move || mode.get() == EmailMode::Login>
                    <div class="row" role="radiogroup">
                        {method_radio(LoginMethod::Code, "login.method.code")}
                        {method_radio(LoginMethod::Password, "login.method.password")}
                        {method_radio(LoginMethod::Link, "login.method.link")}
                    </div>
                </Show>

                <Show when=code_method>
                    <div class="row" role="radiogroup">
                        {channel_radio(OtpChannel::Email, "otp.channelEmail")}
                        {channel_radio(OtpChannel::Phone, "otp.channelPhone")}
                    </div>
                </Show>

                <Show when=needs_password>
                    <div class="field password-field">
                        <input
                            type=move || if show_pwd.get() { "text" } else { "password" }
                            placeholder=move || t("label.password")
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="btn icon"
                            on:click=move |_| show_pwd.update(|v| *v = !*v)
                        >
                            {move || if show_pwd.get() { "🙈" } else { "👁" }}
                        </button>
                        <Show when=move || !password.get().is_empty() && !pwd_ok()>
                            <div class="hint error-inline">
                                {move || t("error.passwordTooShort")}
                            </div>
                        </Show>
                    </div>
                </Show>

                <Show when=move || code_method() && otp.get().challenge_id.is_none()>
                    <div class="hint">
                        {move || {
                            t(if phone_channel() { "otp.helperPhone" } else { "otp.helperEmail" })
                        }}
                    </div>
                </Show>

                <div class="row">
                    <button class="btn primary" disabled=submit_disabled on:click=submit>
                        {submit_label}
                    </button>
                    <Show when=move || {
                        mode.get() == EmailMode::Login && method.get() == LoginMethod::Password
                    }>
                        <button
                            type="button"
                            class="btn linklike"
                            disabled=move || loading.get() || !email_ok()
                            on:click=move |_| forgot_password()
                        >
                            {move || t("reset.forgot")}
                        </button>
                    </Show>
                </div>
            </div>

            <Show when=move || code_method() && otp.get().challenge_id.is_some()>
                <div class="form-grid">
                    <div class="field">
                        <input
                            type="text"
                            placeholder=move || t("otp.secretPlaceholder")
                            prop:value=move || otp_secret.get()
                            on:input=move |ev| otp_secret.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="row">
                        <button
                            class="btn"
                            disabled=move || {
                                loading.get() || !identifier_ok() || otp.get().resend_blocked()
                            }
                            on:click=move |_| send_code()
                        >
                            {move || {
                                let remaining = otp.get().resend_remaining();
                                if remaining > 0 {
                                    format!("{} ({remaining})", t("otp.resend"))
                                } else {
                                    t("otp.resend").to_owned()
                                }
                            }}
                        </button>
                        <button
                            class="btn primary"
                            disabled=move || loading.get() || otp_secret.get().trim().is_empty()
                            on:click=move |_| verify_code()
                        >
                            {move || t("otp.verify")}
                        </button>
                    </div>
                </div>
            </Show>

            <Show when=move || error.get().is_some()>
                <div class="card error" role="alert">{move || error.get()}</div>
            </Show>
            <Show when=move || notice.get().is_some()>
                <div class="card" role="status">{move || notice.get().map(t)}</div>
            </Show>
        </div>
    }
}

/// One countdown task per challenge send; a stale task stops on the first
/// tick after a newer send bumps the epoch, and `try_update` returning `None`
/// stops it when the owning component unmounts.
fn spawn_cooldown_ticker(otp: RwSignal<OtpFlow>, epoch: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
            let mut keep_going = false;
            if otp.try_update(|flow| keep_going = flow.tick(epoch)).is_none() || !keep_going {
                break;
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (otp, epoch);
    }
}

/// Return target for emailed links: the page origin, so the callback
/// interpreter sees the challenge pair on the next load.
fn origin_url() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
