//! Shell chrome state: active navigation tab and theme.
//!
//! DESIGN
//! ======
//! The active tab mirrors the URL path in both directions: the sidebar
//! navigates, and a location watcher in the app shell writes the tab back.
//! The theme is process-lifetime only and starts light.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level views reachable from the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Dashboard,
    Documents,
    Rules,
    Violations,
    Audit,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 6] = [Tab::Dashboard, Tab::Documents, Tab::Rules, Tab::Violations, Tab::Audit, Tab::Settings];

    /// URL segment for the tab (without the leading slash).
    pub fn slug(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Documents => "documents",
            Self::Rules => "rules",
            Self::Violations => "violations",
            Self::Audit => "audit",
            Self::Settings => "settings",
        }
    }

    pub fn path(self) -> String {
        format!("/{}", self.slug())
    }

    /// Map a location path to a tab. The root path is the dashboard; unknown
    /// paths map to `None` so the current tab is kept.
    pub fn from_path(path: &str) -> Option<Self> {
        let slug = path.trim_matches('/');
        let slug = slug.split('/').next().unwrap_or_default();
        if slug.is_empty() {
            return Some(Self::Dashboard);
        }
        Self::ALL.into_iter().find(|tab| tab.slug() == slug)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Documents => "Documents",
            Self::Rules => "Rules Engine",
            Self::Violations => "Violations",
            Self::Audit => "Audit Trail",
            Self::Settings => "Settings",
        }
    }

    /// Short description shown under the header title.
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Dashboard => "Real-time monitoring of your data infrastructure policies.",
            Self::Documents => "Upload and track the policy documents rules are extracted from.",
            Self::Rules => "Rules extracted from your policy documents.",
            Self::Violations => "Detected issues across your database infrastructure.",
            Self::Audit => "Who did what, and when.",
            Self::Settings => "Service endpoints and display preferences.",
        }
    }
}

/// UI state shared through context.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub active_tab: Tab,
}

impl UiState {
    /// Sync the active tab from a location path. Returns `true` on change.
    pub fn sync_from_path(&mut self, path: &str) -> bool {
        match Tab::from_path(path) {
            Some(tab) if tab != self.active_tab => {
                self.active_tab = tab;
                true
            }
            _ => false,
        }
    }
}
