//! Root application component with routing and the dashboard shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is rendered by the Axum host for SSR; `App` is hydrated in the
//! browser. The only shared context is `RwSignal<UiState>`; each page owns
//! its own data and polling.
//!
//! DESIGN
//! ======
//! The active tab follows the URL: `LocationSync` maps every path change to
//! a `Tab`, and sidebar clicks navigate rather than set the tab alone. The
//! bare root redirects to `/dashboard`.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::components::{header::Header, sidebar::Sidebar};
use crate::pages::{
    audit::AuditPage, dashboard::DashboardPage, documents::DocumentsPage, rules::RulesPage,
    settings::SettingsPage, violations::ViolationsPage,
};
use crate::state::ui::UiState;
use crate::util::dark_mode;

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
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    Effect::new(move || dark_mode::apply(ui.get().dark_mode));

    view! {
        <Stylesheet id="leptos" href="/pkg/compliance-dashboard.css"/>
        <Title text="Compliance Dashboard"/>

        <Router>
            <LocationSync/>
            <div class="layout">
                <Sidebar/>
                <div class="layout__main">
                    <Header/>
                    <main class="layout__content">
                        <Routes fallback=|| view! { <p class="muted">"Page not found."</p> }>
                            <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
                            <Route path=StaticSegment("dashboard") view=DashboardPage/>
                            <Route path=StaticSegment("documents") view=DocumentsPage/>
                            <Route path=StaticSegment("rules") view=RulesPage/>
                            <Route path=StaticSegment("violations") view=ViolationsPage/>
                            <Route path=StaticSegment("audit") view=AuditPage/>
                            <Route path=StaticSegment("settings") view=SettingsPage/>
                        </Routes>
                    </main>
                    <footer class="layout__footer">
                        {format!("Compliance Dashboard v{}", env!("CARGO_PKG_VERSION"))}
                    </footer>
                </div>
            </div>
        </Router>
    }
}

/// Keeps `UiState::active_tab` in step with the router's pathname.
#[component]
fn LocationSync() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    Effect::new(move || {
        let path = location.pathname.get();
        ui.maybe_update(|u| u.sync_from_path(&path));
    });
}
