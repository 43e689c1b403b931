//! Dashboard overview state: headline counts, recent violations, health.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::endpoints::Service;
use crate::net::types::{DocumentList, RuleList, Violation, ViolationList};

/// Number of violations shown in the recent feed.
pub const RECENT_VIOLATIONS: usize = 5;

/// Points deducted from the compliance score per open violation.
pub const SCORE_PENALTY: usize = 5;

/// Headline numbers for the stats cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub documents: usize,
    pub rules: usize,
    pub open_violations: usize,
    pub compliance_score: u32,
}

/// Reachability of the three backend services.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceHealth {
    pub reachable: Vec<Service>,
    pub checked: bool,
}

impl ServiceHealth {
    pub fn is_operational(&self) -> bool {
        Service::ALL.iter().all(|s| self.reachable.contains(s))
    }

    pub fn label(&self) -> String {
        if !self.checked {
            return "Checking".to_owned();
        }
        if self.is_operational() {
            "Operational".to_owned()
        } else {
            format!("Degraded ({}/{} services)", self.reachable.len(), Service::ALL.len())
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub stats: DashboardStats,
    pub recent: Vec<Violation>,
    pub health: ServiceHealth,
    pub loading: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            stats: DashboardStats { compliance_score: 100, ..DashboardStats::default() },
            recent: Vec::new(),
            health: ServiceHealth::default(),
            loading: true,
        }
    }
}

impl DashboardState {
    /// Replace counts and the recent feed from one successful fetch of all
    /// three services.
    pub fn apply_snapshot(&mut self, documents: &DocumentList, rules: &RuleList, violations: &ViolationList) {
        let open = violations.violations.iter().filter(|v| v.is_open()).count();
        self.stats = DashboardStats {
            documents: documents.count.max(documents.documents.len()),
            rules: rules.count.max(rules.rules.len()),
            open_violations: open,
            compliance_score: compliance_score(open),
        };
        self.recent = violations.violations.iter().take(RECENT_VIOLATIONS).cloned().collect();
    }

    pub fn apply_health(&mut self, reachable: Vec<Service>) {
        self.health = ServiceHealth { reachable, checked: true };
    }
}

/// `100 - 5 * open`, floored at zero.
pub fn compliance_score(open_violations: usize) -> u32 {
    let penalty = open_violations.saturating_mul(SCORE_PENALTY);
    u32::try_from(100_usize.saturating_sub(penalty)).unwrap_or(0)
}
