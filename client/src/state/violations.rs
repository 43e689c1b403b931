//! Violations view state.
//!
//! DESIGN
//! ======
//! Resolution is optimistic: the local status is patched before the resolve
//! call is sent and is never rolled back if the call fails. The next poll
//! brings the list back in line with the scanner.

#[cfg(test)]
#[path = "violations_test.rs"]
mod violations_test;

use crate::net::endpoints::ViolationFilter;
use crate::net::types::{ResolutionTarget, Severity, Violation};
use crate::util::grouping::{ViolationGroup, group_violations};

/// What a resolve action is currently working on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pending {
    Violation(String),
    Group(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViolationsState {
    pub items: Vec<Violation>,
    pub loading: bool,
    pub scanning: bool,
    pub pending: Option<Pending>,
    /// Case-insensitive search over rule name, type, and explanation.
    pub query: String,
    /// Server-side severity filter.
    pub severity: Option<Severity>,
    /// Rule names whose member list is expanded.
    pub expanded: Vec<String>,
}

impl Default for ViolationsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            scanning: false,
            pending: None,
            query: String::new(),
            severity: None,
            expanded: Vec::new(),
        }
    }
}

impl ViolationsState {
    pub fn apply_list(&mut self, violations: Vec<Violation>) {
        self.items = violations;
        self.loading = false;
    }

    pub fn filter(&self) -> ViolationFilter {
        ViolationFilter { severity: self.severity, status: None }
    }

    /// Patch one violation's status locally. Returns `true` if it was found.
    pub fn apply_resolution(&mut self, violation_id: &str, target: ResolutionTarget) -> bool {
        match self.items.iter_mut().find(|v| v.violation_id == violation_id) {
            Some(v) => {
                v.status = target.status();
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self, pending: &Pending) -> bool {
        self.pending.as_ref() == Some(pending)
    }

    /// Violations matching the search query, in server order.
    pub fn visible(&self) -> Vec<Violation> {
        let needle = self.query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|v| matches_query(v, &needle))
            .cloned()
            .collect()
    }

    /// Groups of the visible violations, most open first.
    pub fn groups(&self) -> Vec<ViolationGroup> {
        group_violations(&self.visible())
    }

    pub fn open_count(&self) -> usize {
        self.items.iter().filter(|v| v.is_open()).count()
    }

    /// Heading and body for an empty list. A severity filter that matches
    /// nothing is not the same as having no violations at all.
    pub fn empty_notice(&self) -> (&'static str, &'static str) {
        if self.severity.is_some() {
            ("No matches", "No violations at this severity.")
        } else {
            ("All clear", "No violations found. Run a scan to check your data against the active rules.")
        }
    }

    pub fn toggle_expanded(&mut self, rule_name: &str) {
        if let Some(pos) = self.expanded.iter().position(|r| r == rule_name) {
            self.expanded.remove(pos);
        } else {
            self.expanded.push(rule_name.to_owned());
        }
    }

    pub fn is_expanded(&self, rule_name: &str) -> bool {
        self.expanded.iter().any(|r| r == rule_name)
    }
}

/// `needle` must already be trimmed and lowercased. Empty matches everything.
fn matches_query(violation: &Violation, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [&violation.rule_name, &violation.rule_type, &violation.explanation]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Compact single-line rendering of opaque evidence.
pub fn evidence_summary(violation: &Violation) -> String {
    if violation.evidence.is_null() {
        return String::new();
    }
    violation.evidence.to_string()
}
