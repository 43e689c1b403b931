//! Grouped violation card with bulk and per-row actions.
//!
//! DESIGN
//! ======
//! One card per rule name. The header carries the bulk buttons, which act on
//! every open member of the group; expanding reveals the member rows with
//! their own resolve/ignore buttons. Buttons are disabled while any resolve
//! action is in flight so bulk and single updates never interleave.

use leptos::prelude::*;

use crate::components::badges::{SeverityBadge, StatusBadge};
use crate::net::types::{ResolutionTarget, Violation};
use crate::state::violations::{ViolationsState, evidence_summary};
use crate::util::format::format_timestamp;
use crate::util::grouping::ViolationGroup;

/// Card for one `ViolationGroup`.
///
/// `on_resolve` receives a single violation id; `on_resolve_group` receives
/// the group's rule name.
#[component]
pub fn ViolationGroupCard(
    group: ViolationGroup,
    state: RwSignal<ViolationsState>,
    on_resolve: Callback<(String, ResolutionTarget)>,
    on_resolve_group: Callback<(String, ResolutionTarget)>,
) -> impl IntoView {
    let rule_name = group.rule_name.clone();
    let has_open = group.has_open();
    let open_count = group.open_count;
    let total = group.total();
    let rows = group.violations;
    let busy = move || state.get().pending.is_some();

    let toggle_name = rule_name.clone();
    let expanded_name = rule_name.clone();
    let icon_name = rule_name.clone();
    let resolve_name = rule_name.clone();
    let ignore_name = rule_name.clone();

    view! {
        <article class="violation-group" class:violation-group--clear=!has_open>
            <header class="violation-group__header">
                <button
                    class="violation-group__toggle"
                    title="Show violations"
                    on:click=move |_| state.update(|s| s.toggle_expanded(&toggle_name))
                >
                    {move || if state.get().is_expanded(&icon_name) { "▾" } else { "▸" }}
                </button>
                <SeverityBadge severity=group.severity />
                <div class="violation-group__title">
                    <span class="violation-group__name">{rule_name}</span>
                    <span class="violation-group__type">{group.rule_type}</span>
                </div>
                <span class="violation-group__counts">
                    {format!("{open_count} open / {total} total")}
                </span>
                <Show when=move || has_open>
                    <div class="violation-group__actions">
                        <button
                            class="btn btn--primary"
                            disabled=busy
                            on:click={
                                let name = resolve_name.clone();
                                move |_| on_resolve_group.run((name.clone(), ResolutionTarget::Resolved))
                            }
                        >
                            "Resolve all"
                        </button>
                        <button
                            class="btn"
                            disabled=busy
                            on:click={
                                let name = ignore_name.clone();
                                move |_| on_resolve_group.run((name.clone(), ResolutionTarget::Ignored))
                            }
                        >
                            "Ignore all"
                        </button>
                    </div>
                </Show>
            </header>
            <Show when=move || state.get().is_expanded(&expanded_name)>
                <ul class="violation-group__rows">
                    {rows
                        .clone()
                        .into_iter()
                        .map(|violation| {
                            view! { <ViolationRow violation=violation state=state on_resolve=on_resolve /> }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </Show>
        </article>
    }
}

#[component]
fn ViolationRow(
    violation: Violation,
    state: RwSignal<ViolationsState>,
    on_resolve: Callback<(String, ResolutionTarget)>,
) -> impl IntoView {
    let is_open = violation.is_open();
    let evidence = evidence_summary(&violation);
    let detected = format_timestamp(&violation.created_at);
    let resolve_id = violation.violation_id.clone();
    let ignore_id = violation.violation_id.clone();
    let busy = move || state.get().pending.is_some();

    view! {
        <li class="violation-row">
            <div class="violation-row__meta">
                <StatusBadge status=violation.status />
                <span class="violation-row__time">{detected}</span>
            </div>
            <p class="violation-row__explanation">{violation.explanation}</p>
            <Show when={
                let has_evidence = !evidence.is_empty();
                move || has_evidence
            }>
                <code class="violation-row__evidence">{evidence.clone()}</code>
            </Show>
            <Show when=move || is_open>
                <div class="violation-row__actions">
                    <button
                        class="btn btn--small btn--primary"
                        disabled=busy
                        on:click={
                            let id = resolve_id.clone();
                            move |_| on_resolve.run((id.clone(), ResolutionTarget::Resolved))
                        }
                    >
                        "Resolve"
                    </button>
                    <button
                        class="btn btn--small"
                        disabled=busy
                        on:click={
                            let id = ignore_id.clone();
                            move |_| on_resolve.run((id.clone(), ResolutionTarget::Ignored))
                        }
                    >
                        "Ignore"
                    </button>
                </div>
            </Show>
        </li>
    }
}
