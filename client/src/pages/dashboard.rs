//! Dashboard page: headline counts, service health, and recent violations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route. Every `DASHBOARD_INTERVAL` it fetches documents, rules, and
//! violations in parallel and probes each service's `/health`. Counts update
//! only when all three lists arrive; a partial failure keeps the previous
//! numbers on screen.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::badges::{SeverityBadge, StatusBadge};
use crate::components::stats_card::StatsCard;
use crate::net::api;
use crate::net::endpoints::{Service, ViolationFilter};
use crate::state::dashboard::DashboardState;
use crate::util::format::format_time_of_day;
use crate::util::notify;
use crate::util::poll::{DASHBOARD_INTERVAL, poll_while_mounted};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = RwSignal::new(DashboardState::default());
    poll_while_mounted("dashboard", DASHBOARD_INTERVAL, move || refresh(state));

    let stats = move || state.get().stats;
    let documents = Signal::derive(move || stats().documents.to_string());
    let rules = Signal::derive(move || stats().rules.to_string());
    let open = Signal::derive(move || stats().open_violations.to_string());
    let score = Signal::derive(move || format!("{}%", stats().compliance_score));
    let has_open = Signal::derive(move || stats().open_violations > 0);
    let no_alert = Signal::derive(|| false);

    view! {
        <div class="dashboard-page">
            <section class="dashboard-page__stats">
                <StatsCard
                    title="Policy Documents"
                    value=documents
                    trend=Signal::derive(|| "Uploaded for review".to_owned())
                    tone="blue"
                    alert=no_alert
                />
                <StatsCard
                    title="Active Rules"
                    value=rules
                    trend=Signal::derive(|| "Extracted from policies".to_owned())
                    tone="purple"
                    alert=no_alert
                />
                <StatsCard
                    title="Open Violations"
                    value=open
                    trend=Signal::derive(move || {
                        if has_open.get() { "Needs attention".to_owned() } else { "All clear".to_owned() }
                    })
                    tone="red"
                    alert=has_open
                />
                <StatsCard
                    title="Compliance Score"
                    value=score
                    trend=Signal::derive(|| "Based on open violations".to_owned())
                    tone="green"
                    alert=no_alert
                />
            </section>

            <section class="dashboard-page__health">
                <span
                    class="health-dot"
                    class:health-dot--ok=move || state.get().health.is_operational()
                    class:health-dot--degraded=move || {
                        let health = state.get().health;
                        health.checked && !health.is_operational()
                    }
                ></span>
                <span class="dashboard-page__health-label">
                    "System health: " {move || state.get().health.label()}
                </span>
                <ul class="dashboard-page__services">
                    {Service::ALL
                        .into_iter()
                        .map(|service| {
                            view! {
                                <li
                                    class="service-chip"
                                    class:service-chip--down=move || {
                                        let health = state.get().health;
                                        health.checked && !health.reachable.contains(&service)
                                    }
                                >
                                    {service.label()}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </section>

            <section class="dashboard-page__recent">
                <h2>"Recent Violations"</h2>
                <Show
                    when=move || !state.get().loading
                    fallback=|| view! { <p class="muted">"Loading..."</p> }
                >
                    <Show
                        when=move || !state.get().recent.is_empty()
                        fallback=|| view! { <p class="muted">"No violations detected."</p> }
                    >
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Rule"</th>
                                    <th>"Severity"</th>
                                    <th>"Status"</th>
                                    <th>"Detected"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    state
                                        .get()
                                        .recent
                                        .into_iter()
                                        .map(|v| {
                                            view! {
                                                <tr>
                                                    <td>{v.rule_name}</td>
                                                    <td><SeverityBadge severity=v.severity /></td>
                                                    <td><StatusBadge status=v.status /></td>
                                                    <td>{format_time_of_day(&v.created_at)}</td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                    </Show>
                </Show>
            </section>
        </div>
    }
}

/// One dashboard tick. Returns `true` when all three lists were fetched.
///
/// Writes go through `try_update`, so a tick that lands after the page has
/// unmounted is a no-op.
pub async fn refresh(state: RwSignal<DashboardState>) -> bool {
    let filter = ViolationFilter::default();
    let (documents, rules, violations) =
        futures::join!(api::list_documents(), api::list_rules(), api::list_violations(&filter));
    let probes = Service::ALL.map(|service| async move { api::check_health(service).await.ok().map(|_| service) });
    let reachable = futures::future::join_all(probes).await.into_iter().flatten().collect::<Vec<_>>();

    let ok = match (documents, rules, violations) {
        (Ok(documents), Ok(rules), Ok(violations)) => {
            state.try_update(|s| s.apply_snapshot(&documents, &rules, &violations));
            true
        }
        (documents, rules, violations) => {
            for err in [documents.err(), rules.err(), violations.err()].into_iter().flatten() {
                notify::refresh_failed("dashboard", &err);
            }
            false
        }
    };
    state.try_update(|s| {
        s.apply_health(reachable);
        s.loading = false;
    });
    ok
}
