//! Violation grouping by rule.
//!
//! DESIGN
//! ======
//! Groups are derived data: they are rebuilt from the full violation list on
//! every state change and never stored. Grouping is a single pass keyed by
//! rule name; the first violation seen for a rule fixes the group's rule type
//! and display severity. Later members never update either, even when their
//! severity differs.

#[cfg(test)]
#[path = "grouping_test.rs"]
mod grouping_test;

use std::collections::HashMap;

use crate::net::types::{Severity, Violation};

/// Violations sharing one rule name.
#[derive(Clone, Debug, PartialEq)]
pub struct ViolationGroup {
    pub rule_name: String,
    pub rule_type: String,
    /// Severity of the first member encountered.
    pub severity: Severity,
    /// Members in encounter order.
    pub violations: Vec<Violation>,
    pub open_count: usize,
}

impl ViolationGroup {
    pub fn total(&self) -> usize {
        self.violations.len()
    }

    pub fn has_open(&self) -> bool {
        self.open_count > 0
    }

    /// Ids of open members, in encounter order.
    pub fn open_ids(&self) -> Vec<String> {
        self.violations
            .iter()
            .filter(|v| v.is_open())
            .map(|v| v.violation_id.clone())
            .collect()
    }
}

/// Group a flat violation list by rule name.
///
/// Output is sorted by open count descending; the sort is stable so groups
/// with equal open counts keep their encounter order.
pub fn group_violations(violations: &[Violation]) -> Vec<ViolationGroup> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<ViolationGroup> = Vec::new();

    for violation in violations {
        let slot = *index.entry(violation.rule_name.as_str()).or_insert_with(|| {
            groups.push(ViolationGroup {
                rule_name: violation.rule_name.clone(),
                rule_type: violation.rule_type.clone(),
                severity: violation.severity,
                violations: Vec::new(),
                open_count: 0,
            });
            groups.len() - 1
        });
        let group = &mut groups[slot];
        if violation.is_open() {
            group.open_count += 1;
        }
        group.violations.push(violation.clone());
    }

    groups.sort_by(|a, b| b.open_count.cmp(&a.open_count));
    groups
}
