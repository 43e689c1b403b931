//! Left navigation rail.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders one entry per `Tab` and the theme toggle. Clicking an entry
//! updates `UiState::active_tab` and pushes the matching path so the router
//! and the highlighted tab never disagree.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::ui::{Tab, UiState};
use crate::util::dark_mode;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let items = Tab::ALL
        .into_iter()
        .map(|tab| {
            let navigate = navigate.clone();
            view! {
                <button
                    class="sidebar__item"
                    class:sidebar__item--active=move || ui.get().active_tab == tab
                    title=tab.label()
                    on:click=move |_| {
                        ui.update(|u| u.active_tab = tab);
                        navigate(&tab.path(), NavigateOptions::default());
                    }
                >
                    <span class="sidebar__icon" aria-hidden="true">{tab_icon(tab)}</span>
                    <span class="sidebar__label">{tab.label()}</span>
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__logo" aria-hidden="true">"◆"</span>
                <span class="sidebar__title">"Compliance"</span>
            </div>
            <div class="sidebar__items">{items}</div>
            <span class="sidebar__spacer"></span>
            <button
                class="sidebar__item sidebar__theme"
                title="Toggle dark mode"
                on:click=move |_| {
                    let next = dark_mode::toggle(ui.get_untracked().dark_mode);
                    ui.update(|u| u.dark_mode = next);
                }
            >
                <span class="sidebar__icon" aria-hidden="true">
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </span>
                <span class="sidebar__label">
                    {move || if ui.get().dark_mode { "Light mode" } else { "Dark mode" }}
                </span>
            </button>
        </nav>
    }
}

fn tab_icon(tab: Tab) -> &'static str {
    match tab {
        Tab::Dashboard => "▦",
        Tab::Documents => "▤",
        Tab::Rules => "§",
        Tab::Violations => "⚠",
        Tab::Audit => "☰",
        Tab::Settings => "⚙",
    }
}
