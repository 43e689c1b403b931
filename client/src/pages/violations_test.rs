use super::*;

use futures::executor::block_on;

use crate::net::types::{Violation, ViolationStatus};

fn violation(id: &str, rule: &str) -> Violation {
    Violation {
        violation_id: id.to_owned(),
        severity: Severity::Critical,
        status: ViolationStatus::Open,
        evidence: serde_json::Value::Null,
        explanation: String::new(),
        created_at: "2026-02-12T09:12:05".to_owned(),
        rule_name: rule.to_owned(),
        rule_type: "retention".to_owned(),
    }
}

fn loaded(items: Vec<Violation>) -> RwSignal<ViolationsState> {
    let mut s = ViolationsState::default();
    s.apply_list(items);
    RwSignal::new(s)
}

fn status_of(state: RwSignal<ViolationsState>, id: &str) -> ViolationStatus {
    state
        .get_untracked()
        .items
        .into_iter()
        .find(|v| v.violation_id == id)
        .map(|v| v.status)
        .unwrap()
}

#[test]
fn resolve_one_patches_locally_before_the_call_fails() {
    let state = loaded(vec![violation("v1", "Retention")]);

    let result = block_on(resolve_one(state, "v1", ResolutionTarget::Ignored));

    assert_eq!(result, Err(ApiError::Unavailable));
    assert_eq!(status_of(state, "v1"), ViolationStatus::Ignored);
}

#[test]
fn resolve_group_stops_at_first_failure() {
    let state = loaded(vec![violation("v1", "Retention"), violation("v2", "Retention"), violation("v3", "Other")]);

    let result = block_on(resolve_group(state, "Retention", ResolutionTarget::Resolved));

    assert!(result.is_err());
    assert_eq!(status_of(state, "v1"), ViolationStatus::Resolved);
    assert_eq!(status_of(state, "v2"), ViolationStatus::Open);
    assert_eq!(status_of(state, "v3"), ViolationStatus::Open);
}

#[test]
fn resolve_group_with_no_open_members_is_a_no_op() {
    let state = loaded(vec![violation("v1", "Retention")]);

    assert_eq!(block_on(resolve_group(state, "Missing", ResolutionTarget::Resolved)), Ok(0));
    assert_eq!(status_of(state, "v1"), ViolationStatus::Open);
}

#[test]
fn failed_refresh_keeps_items() {
    let state = loaded(vec![violation("v1", "Retention")]);
    assert!(!block_on(refresh(state)));
    assert_eq!(state.get_untracked().items.len(), 1);
}
