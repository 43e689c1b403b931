use super::*;

#[test]
fn refresh_intervals_read_as_a_cadence() {
    assert_eq!(interval_label(DOCUMENTS_INTERVAL), "every 5s");
    assert_eq!(interval_label(DASHBOARD_INTERVAL), "every 10s");
}

#[test]
fn retry_cap_reads_as_a_bound() {
    assert_eq!(retry_cap_label(MAX_BACKOFF), "up to 60s");
}
