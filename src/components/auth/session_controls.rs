//! Session monitor and logout with guest safeguard.
//!
//! The displayed expiry always comes from the last successful session fetch;
//! extending re-fetches rather than projecting a new expiry locally. Logout
//! re-checks the identity first: a guest (no email, no phone) gets a
//! blocking confirmation because guest data is destroyed with the session.
//! If that identity check fails, logout fails closed and surfaces the error.

#[cfg(test)]
#[path = "session_controls_test.rs"]
mod session_controls_test;

use leptos::prelude::*;

use crate::i18n;
use crate::net::api;
use crate::net::types::{ApiError, Identity};
use crate::state::session::SessionState;
use crate::state::settings::SettingsState;
#[cfg(feature = "hydrate")]
use crate::util::location;

/// Decision for a logout request, based on the freshest identity fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogoutGate {
    /// Persistent identity: destroy the session immediately.
    Proceed,
    /// Guest identity: block until the visitor confirms the data loss.
    ConfirmGuest,
    /// The identity check failed: do not touch the session.
    Blocked(String),
}

/// Fail-closed classification: an unreadable identity blocks logout instead
/// of assuming guest or proceeding blind.
pub fn classify_logout(fresh: &Result<Identity, ApiError>) -> LogoutGate {
    match fresh {
        Ok(identity) if identity.is_guest() => LogoutGate::ConfirmGuest,
        Ok(_) => LogoutGate::Proceed,
        Err(e) => LogoutGate::Blocked(e.to_string()),
    }
}

#[component]
pub fn SessionControls(on_signed_out: Callback<()>, on_error: Callback<ApiError>) -> impl IntoView {
    let settings = expect_context::<RwSignal<SettingsState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let t = move |key: &'static str| i18n::translate(settings.get().lang, key);

    let show_guest_prompt = RwSignal::new(false);
    let logout_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let refresh = move || {
        session.update(|s| s.busy = true);
        leptos::task::spawn_local(async move {
            let result = api::get_session_current().await;
            session.try_update(|s| s.refresh_finished(result));
        });
    };

    let extend = move |_| {
        if session.get_untracked().busy {
            return;
        }
        session.update(|s| s.busy = true);
        leptos::task::spawn_local(async move {
            match api::extend_session_current().await {
                Ok(_) => {
                    // The new expiry reaches the display only through a
                    // fresh fetch.
                    let result = api::get_session_current().await;
                    session.try_update(|s| s.refresh_finished(result));
                }
                Err(e) => {
                    session.try_update(|s| s.extend_failed(&e));
                }
            }
        });
    };

    // One fetch on mount; the effect has no reactive dependencies.
    Effect::new(move || refresh());

    let do_logout = move || {
        leptos::task::spawn_local(async move {
            match api::delete_session_current().await {
                Ok(()) => {
                    #[cfg(feature = "hydrate")]
                    location::strip_from_location(&["legal"]);
                    busy.try_set(false);
                    on_signed_out.run(());
                }
                Err(e) => {
                    let prefix =
                        i18n::translate(settings.get_untracked().lang, "logout.failed");
                    logout_error.try_set(Some(format!("{prefix}: {e}")));
                    busy.try_set(false);
                    on_error.run(e);
                }
            }
        });
    };

    let request_logout = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        leptos::task::spawn_local(async move {
            let fresh = api::get_account().await;
            match classify_logout(&fresh) {
                LogoutGate::Proceed => do_logout(),
                LogoutGate::ConfirmGuest => {
                    busy.try_set(false);
                    show_guest_prompt.try_set(true);
                }
                LogoutGate::Blocked(message) => {
                    busy.try_set(false);
                    logout_error.try_set(Some(message));
                }
            }
        });
    };

    let confirm_guest_logout = move |_| {
        show_guest_prompt.set(false);
        busy.set(true);
        do_logout();
    };

    view! {
        <div class="card session-controls">
            <p class="session-expiry">
                {move || t("session.expires")}
                ": "
                {move || {
                    session
                        .get()
                        .expires_at
                        .unwrap_or_else(|| t("session.none").to_owned())
                }}
            </p>
            <Show when=move || session.get().error.is_some()>
                <div class="card error" role="alert">{move || session.get().error}</div>
            </Show>
            <div class="row">
                <button
                    class="btn"
                    disabled=move || session.get().busy
                    on:click=move |_| refresh()
                >
                    {move || t("session.refresh")}
                </button>
                <button class="btn" disabled=move || session.get().busy on:click=extend>
                    {move || t("session.extend")}
                </button>
                <button class="btn danger" disabled=move || busy.get() on:click=request_logout>
                    {move || t("btn.logout")}
                </button>
            </div>
        </div>

        <Show when=move || show_guest_prompt.get()>
            <div class="modal-backdrop" role="dialog">
                <div class="modal">
                    <div class="modal-header">
                        <h3>{move || t("logout.guestWarningTitle")}</h3>
                    </div>
                    <div class="modal-body">
                        <p>{move || t("logout.guestWarningBody")}</p>
                    </div>
                    <div class="modal-actions">
                        // Cancelling leaves the session and identity untouched.
                        <button class="btn" on:click=move |_| show_guest_prompt.set(false)>
                            {move || t("btn.cancel")}
                        </button>
                        <button class="btn danger" on:click=confirm_guest_logout>
                            {move || t("logout.logoutAnyway")}
                        </button>
                    </div>
                </div>
            </div>
        </Show>

        <Show when=move || logout_error.get().is_some()>
            <div class="modal-backdrop" role="dialog">
                <div class="modal">
                    <div class="modal-header">
                        <h3>{move || t("error.title")}</h3>
                    </div>
                    <div class="modal-body">
                        <p>{move || logout_error.get()}</p>
                    </div>
                    <div class="modal-actions">
                        <button class="btn" on:click=move |_| logout_error.set(None)>
                            {move || t("btn.close")}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
