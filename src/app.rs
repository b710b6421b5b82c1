//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::i18n;
use crate::pages::{advanced::AdvancedPage, auth::AuthPage, profile::ProfilePage};
use crate::state::{auth::AuthState, session::SessionState, settings::SettingsState};
use crate::util::{storage, theme};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let session = RwSignal::new(SessionState::default());
    let settings = RwSignal::new(SettingsState::default());

    provide_context(auth);
    provide_context(session);
    provide_context(settings);

    // Pick up persisted language/theme/API-key once the browser is available.
    Effect::new(move || {
        let lang = i18n::detect();
        let chosen = theme::detect();
        settings.set(SettingsState {
            lang,
            theme: chosen,
            api_key: storage::get(storage::API_KEY).unwrap_or_default(),
        });
        i18n::persist(lang);
        theme::apply(chosen);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/auth-portal.css"/>
        <Title text="Sign in"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AuthPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("advanced") view=AdvancedPage/>
            </Routes>
        </Router>
    }
}
