//! Violations page: grouped findings with search, severity filter, scans,
//! and resolve/ignore actions.
//!
//! DESIGN
//! ======
//! Violations are grouped by rule name (see `util::grouping`). Resolving is
//! optimistic: the local status is patched before the scanner is called and
//! is not rolled back on failure; the next poll reconciles. Bulk actions
//! resolve the group's open members one at a time and stop at the first
//! failure, raising a single alert.

#[cfg(test)]
#[path = "violations_test.rs"]
mod violations_test;

use leptos::prelude::*;

use crate::components::violation_group::ViolationGroupCard;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{ResolutionTarget, Severity};
use crate::state::violations::{Pending, ViolationsState};
use crate::util::notify;
use crate::util::poll::{SCAN_REFRESH_DELAY, VIOLATIONS_INTERVAL, poll_while_mounted};
use crate::util::task;

#[component]
pub fn ViolationsPage() -> impl IntoView {
    let state = RwSignal::new(ViolationsState::default());
    poll_while_mounted("violations", VIOLATIONS_INTERVAL, move || refresh(state));

    let on_scan = move |_| {
        if state.get_untracked().scanning {
            return;
        }
        state.update(|s| s.scanning = true);
        task::spawn(async move {
            let result = api::trigger_scan().await;
            state.try_update(|s| s.scanning = false);
            match result {
                Ok(receipt) => {
                    log::info!("scan finished: {} violation(s) found", receipt.violations_found);
                    task::sleep(SCAN_REFRESH_DELAY).await;
                    refresh(state).await;
                }
                Err(err) => notify::action_failed("Scan", &err),
            }
        });
    };

    let on_search = move |ev: leptos::ev::Event| {
        let query = event_target_value(&ev);
        state.update(|s| s.query = query);
    };

    let on_severity = move |ev: leptos::ev::Event| {
        let severity = Severity::parse(&event_target_value(&ev));
        state.update(|s| s.severity = severity);
        task::spawn(async move {
            refresh(state).await;
        });
    };

    let on_resolve = Callback::new(move |(violation_id, target): (String, ResolutionTarget)| {
        if state.get_untracked().pending.is_some() {
            return;
        }
        state.update(|s| s.pending = Some(Pending::Violation(violation_id.clone())));
        task::spawn(async move {
            if let Err(err) = resolve_one(state, &violation_id, target).await {
                notify::action_failed("Updating the violation", &err);
            }
            state.try_update(|s| s.pending = None);
        });
    });

    let on_resolve_group = Callback::new(move |(rule_name, target): (String, ResolutionTarget)| {
        if state.get_untracked().pending.is_some() {
            return;
        }
        state.update(|s| s.pending = Some(Pending::Group(rule_name.clone())));
        task::spawn(async move {
            match resolve_group(state, &rule_name, target).await {
                Ok(count) => log::info!("{} {count} violation(s) for {rule_name}", target.as_str()),
                Err(err) => notify::action_failed("Bulk update", &err),
            }
            state.try_update(|s| s.pending = None);
        });
    });

    let severity_options = Severity::ALL
        .into_iter()
        .map(|severity| {
            view! {
                <option value=severity.as_str() selected=move || state.get().severity == Some(severity)>
                    {severity.as_str()}
                </option>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="violations-page">
            <section class="violations-page__toolbar">
                <input
                    class="input violations-page__search"
                    type="search"
                    placeholder="Search violations..."
                    prop:value=move || state.get().query
                    on:input=on_search
                />
                <select class="select" on:change=on_severity>
                    <option value="" selected=move || state.get().severity.is_none()>"All severities"</option>
                    {severity_options}
                </select>
                <button class="btn btn--primary" disabled=move || state.get().scanning on:click=on_scan>
                    {move || if state.get().scanning { "Scanning..." } else { "Run Full Scan" }}
                </button>
            </section>

            <p class="violations-page__summary">
                {move || {
                    let current = state.get();
                    format!("{} open of {} total", current.open_count(), current.items.len())
                }}
            </p>

            <Show
                when=move || !state.get().loading
                fallback=|| view! { <p class="muted">"Loading violations..."</p> }
            >
                <Show
                    when=move || !state.get().items.is_empty()
                    fallback=move || {
                        let (title, body) = state.get().empty_notice();
                        view! {
                            <div class="empty-state">
                                <span class="empty-state__icon" aria-hidden="true">"✓"</span>
                                <h2>{title}</h2>
                                <p>{body}</p>
                            </div>
                        }
                    }
                >
                    <div class="violations-page__groups">
                        {move || {
                            let groups = state.get().groups();
                            if groups.is_empty() {
                                return vec![view! { <p class="muted">"No violations match your search."</p> }.into_any()];
                            }
                            groups
                                .into_iter()
                                .map(|group| {
                                    view! {
                                        <ViolationGroupCard
                                            group=group
                                            state=state
                                            on_resolve=on_resolve
                                            on_resolve_group=on_resolve_group
                                        />
                                    }
                                    .into_any()
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}

/// One violations tick, honoring the current severity filter.
pub async fn refresh(state: RwSignal<ViolationsState>) -> bool {
    let Some(filter) = state.try_with_untracked(ViolationsState::filter) else {
        return false;
    };
    match api::list_violations(&filter).await {
        Ok(list) => {
            state.try_update(|s| s.apply_list(list.violations));
            true
        }
        Err(err) => {
            notify::refresh_failed("violations", &err);
            state.try_update(|s| s.loading = false);
            false
        }
    }
}

/// Patch the violation locally, then ask the scanner to persist it.
///
/// # Errors
///
/// Returns the scanner's error. The local patch is kept either way.
pub async fn resolve_one(
    state: RwSignal<ViolationsState>,
    violation_id: &str,
    target: ResolutionTarget,
) -> Result<(), ApiError> {
    state.try_update(|s| s.apply_resolution(violation_id, target));
    api::resolve_violation(violation_id, target).await
}

/// Resolve every open violation in the named group, in order.
///
/// Returns how many were updated.
///
/// # Errors
///
/// Stops at the first failure; members after it are left untouched.
pub async fn resolve_group(
    state: RwSignal<ViolationsState>,
    rule_name: &str,
    target: ResolutionTarget,
) -> Result<usize, ApiError> {
    let ids = state
        .try_with_untracked(|s| {
            s.groups()
                .into_iter()
                .find(|g| g.rule_name == rule_name)
                .map(|g| g.open_ids())
                .unwrap_or_default()
        })
        .unwrap_or_default();
    let mut done = 0;
    for id in ids {
        resolve_one(state, &id, target).await?;
        done += 1;
    }
    Ok(done)
}
