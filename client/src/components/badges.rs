//! Small status pills shared by the dashboard, rules, and violation views.

use leptos::prelude::*;

use crate::net::types::{Severity, ViolationStatus};
use crate::util::format::{ConfidenceLevel, confidence_percent};

#[component]
pub fn SeverityBadge(severity: Severity) -> impl IntoView {
    let name = severity.as_str();
    view! { <span class=format!("badge badge--severity badge--{name}")>{name}</span> }
}

#[component]
pub fn StatusBadge(status: ViolationStatus) -> impl IntoView {
    let name = status.as_str();
    view! { <span class=format!("badge badge--status badge--{name}")>{name.replace('_', " ")}</span> }
}

/// Extraction confidence, colored by `ConfidenceLevel`.
#[component]
pub fn ConfidenceBadge(score: f64) -> impl IntoView {
    let level = ConfidenceLevel::from_score(score);
    view! {
        <span class=format!("badge badge--confidence badge--{}", level.css_modifier())>
            {format!("{}% confidence", confidence_percent(score))}
        </span>
    }
}
