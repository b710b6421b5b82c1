//! Federated login buttons.
//!
//! Each button constructs a provider redirect with embedded success/failure
//! return targets and hands control to the browser. Resumption is handled by
//! the callback interpreter on the next page load, never here.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::ApiError;

/// Providers enabled in this deployment.
pub const ENABLED_PROVIDERS: &[&str] = &["github", "discord", "google"];

#[component]
pub fn ProviderButtons(on_error: Callback<ApiError>) -> impl IntoView {
    view! {
        <div class="provider-grid">
            {ENABLED_PROVIDERS
                .iter()
                .map(|provider| {
                    let label = provider_label(provider);
                    view! {
                        <button
                            class=format!("btn provider {provider}")
                            on:click=move |_| {
                                if let Err(e) = api::begin_oauth_redirect(provider) {
                                    on_error.run(e);
                                }
                            }
                        >
                            <span class="label">{label}</span>
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

fn provider_label(provider: &str) -> String {
    let mut chars = provider.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    format!("Continue with {capitalized}")
}
