//! Password recovery modal: request a reset link, then confirm with the
//! emailed secret and a new password.
//!
//! Mismatched or short passwords are rejected locally and never sent to the
//! backend.

use leptos::prelude::*;

use crate::i18n;
use crate::net::api;
use crate::state::auth::password_valid;
use crate::state::settings::SettingsState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Request,
    Confirm,
}

#[component]
pub fn PasswordResetModal(
    /// Identity the recovery is for; its id pairs with the emailed secret.
    identity_id: String,
    email: String,
    on_close: Callback<()>,
    on_success: Callback<()>,
) -> impl IntoView {
    let settings = expect_context::<RwSignal<SettingsState>>();
    let t = move |key: &'static str| i18n::translate(settings.get().lang, key);

    let step = RwSignal::new(Step::Request);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<&'static str>);
    let secret = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    let request_email = email.clone();
    let request_reset = move |_| {
        if loading.get_untracked() {
            return;
        }
        loading.set(true);
        error.set(None);
        let email = request_email.clone();
        leptos::task::spawn_local(async move {
            match api::create_recovery(&email, &api::recovery_return_url(&origin_url())).await {
                Ok(()) => {
                    notice.try_set(Some("link.sent"));
                    step.try_set(Step::Confirm);
                }
                Err(e) => {
                    error.try_set(Some(e.to_string()));
                }
            }
            loading.try_set(false);
        });
    };

    let confirm_id = identity_id.clone();
    let confirm_reset = move |_| {
        if loading.get_untracked() {
            return;
        }
        let pwd = new_password.get_untracked();
        if pwd != confirm.get_untracked() {
            error.set(Some(t("error.passwordMismatch").to_owned()));
            return;
        }
        if !password_valid(&pwd) {
            error.set(Some(t("error.passwordTooShort").to_owned()));
            return;
        }
        loading.set(true);
        error.set(None);
        let user_id = confirm_id.clone();
        leptos::task::spawn_local(async move {
            match api::confirm_recovery(&user_id, secret.get_untracked().trim(), &pwd).await {
                Ok(()) => {
                    notice.try_set(Some("reset.success"));
                    loading.try_set(false);
                    on_success.run(());
                }
                Err(e) => {
                    error.try_set(Some(e.to_string()));
                    loading.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop" role="dialog">
            <div class="modal">
                <div class="modal-header">
                    <h3>{move || t("reset.title")}</h3>
                    <button class="btn" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <div class="modal-body">
                    <Show when=move || step.get() == Step::Request>
                        <p>{move || t("reset.prompt")} " " <b>{email.clone()}</b> "?"</p>
                        <button
                            class="btn primary"
                            disabled=move || loading.get()
                            on:click=request_reset.clone()
                        >
                            {move || t("reset.sendLink")}
                        </button>
                    </Show>
                    <Show when=move || step.get() == Step::Confirm>
                        <div class="form-grid">
                            <input
                                type="text"
                                placeholder=move || t("reset.secret")
                                prop:value=move || secret.get()
                                on:input=move |ev| secret.set(event_target_value(&ev))
                            />
                            <input
                                type="password"
                                placeholder=move || t("reset.new")
                                prop:value=move || new_password.get()
                                on:input=move |ev| new_password.set(event_target_value(&ev))
                            />
                            <input
                                type="password"
                                placeholder=move || t("reset.confirm")
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                        </div>
                        <button
                            class="btn primary"
                            disabled=move || loading.get()
                            on:click=confirm_reset.clone()
                        >
                            {move || t("reset.submit")}
                        </button>
                    </Show>
                    <Show when=move || error.get().is_some()>
                        <div class="card error" role="alert">{move || error.get()}</div>
                    </Show>
                    <Show when=move || notice.get().is_some()>
                        <div class="card" role="status">{move || notice.get().map(t)}</div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

/// Confirmation form for a recovery link opened while signed out. The
/// `userId`/`secret` pair comes from the link; only the new password is
/// typed here.
#[component]
pub fn RecoveryConfirm(
    user_id: String,
    secret: String,
    on_done: Callback<()>,
) -> impl IntoView {
    let settings = expect_context::<RwSignal<SettingsState>>();
    let t = move |key: &'static str| i18n::translate(settings.get().lang, key);

    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let done = RwSignal::new(false);
    let pair = StoredValue::new((user_id, secret));

    let submit = move |_| {
        if loading.get_untracked() {
            return;
        }
        let pwd = new_password.get_untracked();
        if pwd != confirm.get_untracked() {
            error.set(Some(t("error.passwordMismatch").to_owned()));
            return;
        }
        if !password_valid(&pwd) {
            error.set(Some(t("error.passwordTooShort").to_owned()));
            return;
        }
        loading.set(true);
        error.set(None);
        let (user_id, secret) = pair.get_value();
        leptos::task::spawn_local(async move {
            match api::confirm_recovery(&user_id, secret.trim(), &pwd).await {
                Ok(()) => {
                    done.try_set(true);
                }
                Err(e) => {
                    error.try_set(Some(e.to_string()));
                }
            }
            loading.try_set(false);
        });
    };

    view! {
        <div class="card recovery-confirm">
            <h3>{move || t("reset.title")}</h3>
            <Show
                when=move || done.get()
                fallback=move || {
                    view! {
                        <div class="form-grid">
                            <input
                                type="password"
                                placeholder=move || t("reset.new")
                                prop:value=move || new_password.get()
                                on:input=move |ev| new_password.set(event_target_value(&ev))
                            />
                            <input
                                type="password"
                                placeholder=move || t("reset.confirm")
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                            <button
                                class="btn primary"
                                disabled=move || loading.get()
                                on:click=submit
                            >
                                {move || t("reset.submit")}
                            </button>
                        </div>
                    }
                }
            >
                <div class="card" role="status">{move || t("reset.success")}</div>
                <button class="btn" on:click=move |_| on_done.run(())>
                    {move || t("btn.back")}
                </button>
            </Show>
            <Show when=move || error.get().is_some()>
                <div class="card error" role="alert">{move || error.get()}</div>
            </Show>
        </div>
    }
}

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
