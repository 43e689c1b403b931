//! Audit Trail page: searchable activity feed with CSV export.
//!
//! The feed is a fixed sample; no service records audit events yet.

use leptos::prelude::*;

use crate::state::audit::{AuditState, to_csv};
use crate::util::{download, notify};

pub const EXPORT_FILENAME: &str = "audit-trail.csv";

#[component]
pub fn AuditPage() -> impl IntoView {
    let state = RwSignal::new(AuditState::default());

    let on_export = move |_| {
        let csv = to_csv(&state.get_untracked().events());
        if !download::save_text(EXPORT_FILENAME, "text/csv", &csv) {
            notify::alert("Export is only available in the browser.");
        }
    };

    view! {
        <div class="audit-page">
            <section class="audit-page__toolbar">
                <input
                    class="input"
                    type="search"
                    placeholder="Filter by user, action, or target..."
                    prop:value=move || state.get().query
                    on:input=move |ev| {
                        let query = event_target_value(&ev);
                        state.update(|s| s.query = query);
                    }
                />
                <button class="btn" on:click=on_export>"Export CSV"</button>
            </section>
            <Show
                when=move || !state.get().events().is_empty()
                fallback=|| view! { <p class="muted">"No events match your filter."</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Time"</th>
                            <th>"User"</th>
                            <th>"Action"</th>
                            <th>"Target"</th>
                            <th>"Origin"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            state
                                .get()
                                .events()
                                .into_iter()
                                .map(|event| {
                                    view! {
                                        <tr class="audit-row" class:audit-row--system=event.is_system()>
                                            <td>{event.timestamp}</td>
                                            <td class="audit-row__user">{event.user}</td>
                                            <td>{event.action}</td>
                                            <td>{event.target}</td>
                                            <td class="muted">{event.origin}</td>
                                            <td>{event.status}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
