//! Rules Engine page: extracted rules as cards with a type filter.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use leptos::prelude::*;

use crate::components::rule_card::RuleCard;
use crate::net::api;
use crate::state::rules::RulesState;
use crate::util::notify;
use crate::util::poll::{RULES_INTERVAL, poll_while_mounted};
use crate::util::task;

#[component]
pub fn RulesPage() -> impl IntoView {
    let state = RwSignal::new(RulesState::default());
    poll_while_mounted("rules", RULES_INTERVAL, move || refresh(state));

    let on_refresh = move |_| {
        task::spawn(async move {
            refresh(state).await;
        });
    };

    let on_filter = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        state.update(|s| s.type_filter = (!value.is_empty()).then_some(value));
    };

    view! {
        <div class="rules-page">
            <section class="rules-page__toolbar">
                <select class="select" on:change=on_filter>
                    <option value="" selected=move || state.get().type_filter.is_none()>"All types"</option>
                    {move || {
                        let current = state.get();
                        current
                            .rule_types()
                            .into_iter()
                            .map(|rule_type| {
                                let selected = current.type_filter.as_ref() == Some(&rule_type);
                                view! {
                                    <option value=rule_type.clone() selected=selected>{rule_type.clone()}</option>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <button class="btn" on:click=on_refresh>"Refresh"</button>
                <span class="rules-page__count">
                    {move || format!("{} rule(s)", state.get().visible().len())}
                </span>
            </section>

            <Show
                when=move || !state.get().loading
                fallback=|| view! { <p class="muted">"Loading rules..."</p> }
            >
                <Show
                    when=move || !state.get().items.is_empty()
                    fallback=|| {
                        view! {
                            <p class="muted">"No rules extracted yet. Extract rules from a processed document."</p>
                        }
                    }
                >
                    <div class="rules-page__grid">
                        {move || {
                            state
                                .get()
                                .visible()
                                .into_iter()
                                .map(|rule| view! { <RuleCard rule=rule /> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}

/// One rules tick. Returns `false` and keeps the current list on failure.
pub async fn refresh(state: RwSignal<RulesState>) -> bool {
    match api::list_rules().await {
        Ok(list) => {
            state.try_update(|s| s.apply_list(list.rules));
            true
        }
        Err(err) => {
            notify::refresh_failed("rules", &err);
            state.try_update(|s| s.loading = false);
            false
        }
    }
}
