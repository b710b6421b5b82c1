//! Account settings for the authenticated branch: display name, email,
//! password change, API-key preference, and provider linking.
//!
//! Every save goes through the backend and then asks the orchestrator to
//! re-fetch the identity; nothing here mutates auth state directly.

use leptos::prelude::*;

use crate::components::auth::password_reset::PasswordResetModal;
use crate::components::auth::provider_buttons::ProviderButtons;
use crate::i18n;
use crate::net::api;
use crate::net::types::ApiError;
use crate::state::auth::AuthState;
use crate::state::settings::SettingsState;
use crate::util::storage;

#[component]
pub fn ProfileSettings(on_change: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let settings = expect_context::<RwSignal<SettingsState>>();
    let t = move |key: &'static str| i18n::translate(settings.get().lang, key);

    let name = RwSignal::new(String::new());
    let name_edit = RwSignal::new(false);
    let email = RwSignal::new(String::new());
    let email_password = RwSignal::new(String::new());
    let email_edit = RwSignal::new(false);
    let api_key = RwSignal::new(String::new());
    let api_key_edit = RwSignal::new(false);
    let show_pwd_reset = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<&'static str>);

    // Seed drafts from the identity and preferences once on mount; edits in
    // progress must not be clobbered by later identity refreshes.
    Effect::new(move || {
        if let Some(identity) = auth.get_untracked().identity {
            name.set(identity.name);
            email.set(identity.email);
        }
        leptos::task::spawn_local(async move {
            if let Ok(prefs) = api::get_prefs().await {
                if let Some(key) = prefs.get("apiKey").and_then(|v| v.as_str()) {
                    api_key.try_set(key.to_owned());
                    settings.try_update(|s| s.api_key = key.to_owned());
                    storage::set(storage::API_KEY, key);
                }
            }
        });
    });

    let save_name = move |_| {
        loading.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::update_name(name.get_untracked().trim()).await {
                Ok(_) => {
                    notice.try_set(Some("setup.nameUpdated"));
                    name_edit.try_set(false);
                    on_change.run(());
                }
                Err(e) => {
                    error.try_set(Some(e.to_string()));
                }
            }
            loading.try_set(false);
        });
    };

    let save_email = move |_| {
        loading.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            let mut pwd = email_password.get_untracked();
            let identity = auth.get_untracked().identity;
            // A guest upgrading to an email account has no password yet;
            // generate a strong random one the reset flow can replace later.
            if pwd.is_empty() && identity.as_ref().is_some_and(|i| i.email.is_empty()) {
                pwd = uuid::Uuid::new_v4().simple().to_string();
            }
            match api::update_email(email.get_untracked().trim(), &pwd).await {
                Ok(_) => {
                    notice.try_set(Some("setup.emailUpdated"));
                    email_edit.try_set(false);
                    email_password.try_set(String::new());
                    on_change.run(());
                }
                Err(e) => {
                    error.try_set(Some(e.to_string()));
                }
            }
            loading.try_set(false);
        });
    };

    let save_api_key = move |_| {
        loading.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            let key = api_key.get_untracked().trim().to_owned();
            // Merge with existing preferences so unrelated keys survive.
            let result = async {
                let mut prefs = api::get_prefs().await?;
                prefs.insert("apiKey".to_owned(), serde_json::Value::String(key.clone()));
                api::update_prefs(prefs).await
            }
            .await;
            match result {
                Ok(()) => {
                    notice.try_set(Some("setup.apiKeyUpdated"));
                    api_key_edit.try_set(false);
                    settings.try_update(|s| s.api_key = key.clone());
                    storage::set(storage::API_KEY, &key);
                }
                Err(e) => {
                    error.try_set(Some(e.to_string()));
                }
            }
            loading.try_set(false);
        });
    };

    let inline_field = move |label_key: &'static str,
                            draft: RwSignal<String>,
                            editing: RwSignal<bool>,
                            save: Callback<()>| {
        view! {
            <div class="field">
                <label>{move || t(label_key)}</label>
                <Show
                    when=move || editing.get()
                    fallback=move || {
                        view! {
                            <div class="row">
                                <span>
                                    {move || {
                                        let v = draft.get();
                                        if v.is_empty() { t("setup.notSet").to_owned() } else { v }
                                    }}
                                </span>
                                <button
                                    class="btn"
                                    on:click=move |_| {
                                        editing.set(true);
                                        error.set(None);
                                    }
                                >
                                    {move || t("btn.edit")}
                                </button>
                            </div>
                        }
                    }
                >
                    <div class="row">
                        <input
                            prop:value=move || draft.get()
                            on:input=move |ev| draft.set(event_target_value(&ev))
                        />
                        <button
                            class="btn primary"
                            disabled=move || loading.get()
                            on:click=move |_| save.run(())
                        >
                            {move || t("btn.save")}
                        </button>
                        <button
                            class="btn"
                            on:click=move |_| {
                                editing.set(false);
                                error.set(None);
                            }
                        >
                            {move || t("btn.cancel")}
                        </button>
                    </div>
                </Show>
            </div>
        }
    };

    let on_provider_error =
        Callback::new(move |e: ApiError| error.set(Some(e.to_string())));

    view! {
        <div class="card profile-settings">
            <Show when=move || notice.get().is_some()>
                <div class="card" role="status">{move || notice.get().map(t)}</div>
            </Show>
            <Show when=move || error.get().is_some()>
                <div class="card error" role="alert">{move || error.get()}</div>
            </Show>

            {inline_field("label.name", name, name_edit, Callback::new(move |()| save_name(())))}
            {inline_field("label.email", email, email_edit, Callback::new(move |()| save_email(())))}

            <Show when=move || email_edit.get()>
                <div class="field">
                    <input
                        type="password"
                        placeholder=move || t("label.password")
                        prop:value=move || email_password.get()
                        on:input=move |ev| email_password.set(event_target_value(&ev))
                    />
                </div>
            </Show>

            <div class="field">
                <label>{move || t("label.password")}</label>
                <div class="row">
                    <span>"••••••••"</span>
                    <button class="btn" on:click=move |_| show_pwd_reset.set(true)>
                        {move || t("btn.edit")}
                    </button>
                </div>
            </div>

            {inline_field(
                "label.apiKey",
                api_key,
                api_key_edit,
                Callback::new(move |()| save_api_key(())),
            )}

            <div class="field">
                <label>{move || t("profile.linkProviders")}</label>
                <ProviderButtons on_error=on_provider_error/>
            </div>

            <Show when=move || show_pwd_reset.get()>
                {move || {
                    let identity = auth.get().identity.unwrap_or_default();
                    view! {
                        <PasswordResetModal
                            identity_id=identity.id
                            email=identity.email
                            on_close=Callback::new(move |()| show_pwd_reset.set(false))
                            on_success=Callback::new(move |()| {
                                show_pwd_reset.set(false);
                                on_change.run(());
                            })
                        />
                    }
                }}
            </Show>
        </div>
    }
}
