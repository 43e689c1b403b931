use super::*;
use crate::net::types::{Severity, ViolationStatus};

fn violation(id: usize, status: ViolationStatus) -> Violation {
    Violation {
        violation_id: id.to_string(),
        severity: Severity::High,
        status,
        evidence: serde_json::Value::Null,
        explanation: format!("violation {id}"),
        created_at: "2026-02-12T09:12:05".to_owned(),
        rule_name: "Retention".to_owned(),
        rule_type: "retention".to_owned(),
    }
}

#[test]
fn default_state_is_loading_with_perfect_score() {
    let s = DashboardState::default();
    assert!(s.loading);
    assert_eq!(s.stats.compliance_score, 100);
    assert!(s.recent.is_empty());
    assert_eq!(s.health.label(), "Checking");
}

#[test]
fn compliance_score_deducts_five_per_open_violation() {
    assert_eq!(compliance_score(0), 100);
    assert_eq!(compliance_score(3), 85);
    assert_eq!(compliance_score(20), 0);
    assert_eq!(compliance_score(21), 0);
    assert_eq!(compliance_score(usize::MAX), 0);
}

#[test]
fn apply_snapshot_counts_only_open_violations() {
    let mut s = DashboardState::default();
    let violations = ViolationList {
        count: 3,
        violations: vec![
            violation(1, ViolationStatus::Open),
            violation(2, ViolationStatus::Resolved),
            violation(3, ViolationStatus::Open),
        ],
    };
    s.apply_snapshot(&DocumentList { count: 4, documents: vec![] }, &RuleList { count: 7, rules: vec![] }, &violations);

    assert_eq!(s.stats.documents, 4);
    assert_eq!(s.stats.rules, 7);
    assert_eq!(s.stats.open_violations, 2);
    assert_eq!(s.stats.compliance_score, 90);
}

#[test]
fn apply_snapshot_keeps_five_most_recent() {
    let mut s = DashboardState::default();
    let violations = ViolationList {
        count: 8,
        violations: (0..8).map(|i| violation(i, ViolationStatus::Open)).collect(),
    };
    s.apply_snapshot(&DocumentList::default(), &RuleList::default(), &violations);

    let ids: Vec<_> = s.recent.iter().map(|v| v.violation_id.as_str()).collect();
    assert_eq!(ids, vec!["0", "1", "2", "3", "4"]);
}

#[test]
fn health_label_reports_degraded_services() {
    let mut s = DashboardState::default();
    s.apply_health(vec![Service::Documents, Service::Scanner]);
    assert!(!s.health.is_operational());
    assert_eq!(s.health.label(), "Degraded (2/3 services)");

    s.apply_health(Service::ALL.to_vec());
    assert!(s.health.is_operational());
    assert_eq!(s.health.label(), "Operational");
}
