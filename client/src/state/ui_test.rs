use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_tab_is_dashboard() {
    assert_eq!(UiState::default().active_tab, Tab::Dashboard);
}

// =============================================================
// Tab <-> path
// =============================================================

#[test]
fn every_tab_round_trips_through_its_path() {
    for tab in Tab::ALL {
        assert_eq!(Tab::from_path(&tab.path()), Some(tab));
    }
}

#[test]
fn root_and_empty_paths_are_dashboard() {
    assert_eq!(Tab::from_path("/"), Some(Tab::Dashboard));
    assert_eq!(Tab::from_path(""), Some(Tab::Dashboard));
}

#[test]
fn nested_and_trailing_slash_paths_use_first_segment() {
    assert_eq!(Tab::from_path("/violations/"), Some(Tab::Violations));
    assert_eq!(Tab::from_path("/documents/abc"), Some(Tab::Documents));
}

#[test]
fn unknown_path_maps_to_none() {
    assert_eq!(Tab::from_path("/nope"), None);
}

#[test]
fn tab_labels_match_sidebar() {
    assert_eq!(Tab::Rules.label(), "Rules Engine");
    assert_eq!(Tab::Audit.label(), "Audit Trail");
    assert_eq!(Tab::Rules.path(), "/rules");
}

// =============================================================
// sync_from_path
// =============================================================

#[test]
fn sync_from_path_updates_tab() {
    let mut ui = UiState::default();
    assert!(ui.sync_from_path("/rules"));
    assert_eq!(ui.active_tab, Tab::Rules);
    assert!(!ui.sync_from_path("/rules"));
}

#[test]
fn sync_from_unknown_path_keeps_tab() {
    let mut ui = UiState { active_tab: Tab::Audit, ..UiState::default() };
    assert!(!ui.sync_from_path("/missing"));
    assert_eq!(ui.active_tab, Tab::Audit);
}
