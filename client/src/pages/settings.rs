//! Settings page: read-only service endpoints, refresh intervals, and theme.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::net::endpoints::{Service, endpoints};
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::poll::{DASHBOARD_INTERVAL, DOCUMENTS_INTERVAL, MAX_BACKOFF, RULES_INTERVAL, VIOLATIONS_INTERVAL};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let services = Service::ALL
        .into_iter()
        .map(|service| {
            view! {
                <dt>{service.label()}</dt>
                <dd><code>{endpoints().base(service).to_owned()}</code></dd>
            }
        })
        .collect::<Vec<_>>();

    let intervals = [
        ("Dashboard", interval_label(DASHBOARD_INTERVAL)),
        ("Documents", interval_label(DOCUMENTS_INTERVAL)),
        ("Rules", interval_label(RULES_INTERVAL)),
        ("Violations", interval_label(VIOLATIONS_INTERVAL)),
        ("Longest retry delay", retry_cap_label(MAX_BACKOFF)),
    ]
    .into_iter()
    .map(|(name, label)| view! { <dt>{name}</dt><dd>{label}</dd> })
    .collect::<Vec<_>>();

    view! {
        <div class="settings-page">
            <section class="settings-page__section">
                <h2>"Services"</h2>
                <dl class="settings-page__list">{services}</dl>
                <p class="muted">"Endpoints are fixed when the client is built."</p>
            </section>
            <section class="settings-page__section">
                <h2>"Refresh"</h2>
                <dl class="settings-page__list">{intervals}</dl>
            </section>
            <section class="settings-page__section">
                <h2>"Appearance"</h2>
                <label class="settings-page__toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || ui.get().dark_mode
                        on:change=move |_| {
                            let next = dark_mode::toggle(ui.get_untracked().dark_mode);
                            ui.update(|u| u.dark_mode = next);
                        }
                    />
                    "Dark mode"
                </label>
            </section>
        </div>
    }
}

pub fn interval_label(every: Duration) -> String {
    format!("every {}s", every.as_secs())
}

/// Label for the backoff ceiling.
pub fn retry_cap_label(cap: Duration) -> String {
    format!("up to {}s", cap.as_secs())
}
