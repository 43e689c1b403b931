//! Summary tile used on the dashboard.

use leptos::prelude::*;

/// A labelled metric with a secondary trend line.
///
/// `tone` selects the accent color (`blue`, `purple`, `red`, `green`);
/// `alert` switches the tile to its warning treatment.
#[component]
pub fn StatsCard(
    title: &'static str,
    value: Signal<String>,
    trend: Signal<String>,
    tone: &'static str,
    alert: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class=format!("stats-card stats-card--{tone}") class:stats-card--alert=move || alert.get()>
            <span class="stats-card__title">{title}</span>
            <span class="stats-card__value">{move || value.get()}</span>
            <span class="stats-card__trend">{move || trend.get()}</span>
        </div>
    }
}
