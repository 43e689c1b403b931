//! Audit Trail view state.
//!
//! No backend serves audit events yet; the view renders a fixed sample feed
//! that can be filtered and exported as CSV.

#[cfg(test)]
#[path = "audit_test.rs"]
mod audit_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditEvent {
    pub id: u32,
    pub user: &'static str,
    pub action: &'static str,
    pub target: &'static str,
    pub timestamp: &'static str,
    pub origin: &'static str,
    pub status: &'static str,
}

impl AuditEvent {
    pub fn is_system(&self) -> bool {
        self.user.starts_with("system.")
    }
}

const SAMPLE_EVENTS: [AuditEvent; 5] = [
    AuditEvent {
        id: 1,
        user: "alex.compliance",
        action: "Approved Rule #102",
        target: "User Age Restriction",
        timestamp: "2026-02-12 10:45:21",
        origin: "192.168.1.45",
        status: "Success",
    },
    AuditEvent {
        id: 2,
        user: "system.engine",
        action: "Detected Violation",
        target: "users_table (id: 4521)",
        timestamp: "2026-02-12 09:12:05",
        origin: "internal",
        status: "Logged",
    },
    AuditEvent {
        id: 3,
        user: "sarah.engineer",
        action: "Modified Policy",
        target: "Data_Retention_v3.pdf",
        timestamp: "2026-02-11 16:30:12",
        origin: "10.0.4.12",
        status: "Success",
    },
    AuditEvent {
        id: 4,
        user: "alex.compliance",
        action: "Exported Compliance Report",
        target: "Q1_Audit_Report.xlsx",
        timestamp: "2026-02-11 14:20:00",
        origin: "192.168.1.45",
        status: "Success",
    },
    AuditEvent {
        id: 5,
        user: "system.engine",
        action: "Full Database Scan",
        target: "Prod_DB_Cluster_01",
        timestamp: "2026-02-11 00:00:00",
        origin: "internal",
        status: "Completed",
    },
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuditState {
    pub query: String,
}

impl AuditState {
    pub fn events(&self) -> Vec<AuditEvent> {
        filter_events(&SAMPLE_EVENTS, &self.query)
    }
}

/// Case-insensitive substring match over user, action, and target.
pub fn filter_events(events: &[AuditEvent], query: &str) -> Vec<AuditEvent> {
    let needle = query.trim().to_lowercase();
    events
        .iter()
        .filter(|e| {
            needle.is_empty()
                || [e.user, e.action, e.target]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

const CSV_HEADER: [&str; 6] = ["timestamp", "user", "action", "target", "origin", "status"];

/// Render events as RFC 4180 CSV with a header row and CRLF line endings.
pub fn to_csv(events: &[AuditEvent]) -> String {
    let mut out = CSV_HEADER.join(",");
    out.push_str("\r\n");
    for e in events {
        let row = [e.timestamp, e.user, e.action, e.target, e.origin, e.status]
            .iter()
            .map(|field| csv_field(field))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&row);
        out.push_str("\r\n");
    }
    out
}

fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_owned()
    }
}
