use super::*;
use crate::net::types::ViolationStatus;

fn violation(id: &str, rule: &str, status: ViolationStatus) -> Violation {
    Violation {
        violation_id: id.to_owned(),
        severity: Severity::Medium,
        status,
        evidence: serde_json::Value::Null,
        explanation: String::new(),
        created_at: "2026-02-12T09:12:05".to_owned(),
        rule_name: rule.to_owned(),
        rule_type: format!("{rule}_type"),
    }
}

#[test]
fn empty_input_yields_no_groups() {
    assert!(group_violations(&[]).is_empty());
}

#[test]
fn groups_by_rule_and_counts_open_members() {
    let input = vec![
        violation("1", "A", ViolationStatus::Open),
        violation("2", "A", ViolationStatus::Resolved),
        violation("3", "B", ViolationStatus::Open),
    ];
    let groups = group_violations(&input);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].rule_name, "A");
    assert_eq!(groups[0].open_count, 1);
    assert_eq!(groups[0].total(), 2);
    assert_eq!(groups[1].rule_name, "B");
    assert_eq!(groups[1].open_count, 1);
    assert_eq!(groups[1].total(), 1);
}

#[test]
fn sorts_by_open_count_descending() {
    let input = vec![
        violation("1", "quiet", ViolationStatus::Ignored),
        violation("2", "loud", ViolationStatus::Open),
        violation("3", "loud", ViolationStatus::Open),
        violation("4", "middle", ViolationStatus::Open),
    ];
    let names: Vec<_> = group_violations(&input).into_iter().map(|g| g.rule_name).collect();
    assert_eq!(names, vec!["loud", "middle", "quiet"]);
}

#[test]
fn every_violation_lands_in_exactly_one_group() {
    let input: Vec<_> = (0..20)
        .map(|i| {
            let status = if i % 3 == 0 { ViolationStatus::Open } else { ViolationStatus::Resolved };
            violation(&i.to_string(), &format!("rule-{}", i % 4), status)
        })
        .collect();
    let groups = group_violations(&input);

    let total: usize = groups.iter().map(ViolationGroup::total).sum();
    assert_eq!(total, input.len());
    for v in &input {
        let owners = groups
            .iter()
            .filter(|g| g.violations.iter().any(|m| m.violation_id == v.violation_id))
            .count();
        assert_eq!(owners, 1);
    }
    for g in &groups {
        assert!(g.violations.iter().all(|m| m.rule_name == g.rule_name));
        assert_eq!(g.open_count, g.violations.iter().filter(|m| m.is_open()).count());
    }
    for pair in groups.windows(2) {
        assert!(pair[0].open_count >= pair[1].open_count);
    }
}

#[test]
fn first_seen_severity_and_type_win() {
    let mut first = violation("1", "A", ViolationStatus::Open);
    first.severity = Severity::Low;
    let mut second = violation("2", "A", ViolationStatus::Open);
    second.severity = Severity::Critical;
    second.rule_type = "other".to_owned();

    let groups = group_violations(&[first, second]);
    assert_eq!(groups[0].severity, Severity::Low);
    assert_eq!(groups[0].rule_type, "A_type");
}

#[test]
fn open_ids_preserve_member_order() {
    let input = vec![
        violation("1", "A", ViolationStatus::Open),
        violation("2", "A", ViolationStatus::Resolved),
        violation("3", "A", ViolationStatus::Open),
    ];
    let groups = group_violations(&input);
    assert_eq!(groups[0].open_ids(), vec!["1".to_owned(), "3".to_owned()]);
    assert!(groups[0].has_open());
}
