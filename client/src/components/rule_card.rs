//! Card for one extracted rule.

use leptos::prelude::*;

use crate::components::badges::ConfidenceBadge;
use crate::net::types::Rule;
use crate::state::rules::parameters_json;

#[component]
pub fn RuleCard(rule: Rule) -> impl IntoView {
    let parameters = parameters_json(&rule);
    let source = rule.source_document.clone();
    let snippet = rule.source_text_snippet.clone();

    view! {
        <article class="rule-card">
            <header class="rule-card__header">
                <span class="rule-card__type">{rule.rule_type}</span>
                <ConfidenceBadge score=rule.confidence_score />
            </header>
            <h3 class="rule-card__name">{rule.rule_name}</h3>
            <p class="rule-card__description">{rule.description}</p>
            <pre class="rule-card__parameters">{parameters}</pre>
            {snippet.map(|text| view! { <blockquote class="rule-card__snippet">{text}</blockquote> })}
            {source.map(|doc| view! { <span class="rule-card__source">{format!("Source: {doc}")}</span> })}
            // Review workflow is not wired to the extractor yet.
            <footer class="rule-card__actions">
                <button class="btn btn--small" disabled=true title="Not available yet">
                    "Approve"
                </button>
                <button class="btn btn--small" disabled=true title="Not available yet">
                    "Edit"
                </button>
            </footer>
        </article>
    }
}
