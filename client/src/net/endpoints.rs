//! Base URLs of the backend services and builders for every route consumed.
//!
//! CONFIGURATION
//! =============
//! The three services default to fixed localhost ports. Each base URL can be
//! overridden when the WASM bundle is built:
//!
//! - `COMPLIANCE_DOCUMENTS_URL` (default `http://localhost:8081`)
//! - `COMPLIANCE_RULES_URL` (default `http://localhost:8082`)
//! - `COMPLIANCE_SCANNER_URL` (default `http://localhost:8083`)

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use std::sync::OnceLock;

use super::types::{DocumentStatus, ResolutionTarget, Severity, ViolationStatus};

pub const DEFAULT_DOCUMENTS_URL: &str = "http://localhost:8081";
pub const DEFAULT_RULES_URL: &str = "http://localhost:8082";
pub const DEFAULT_SCANNER_URL: &str = "http://localhost:8083";

/// One of the three backend collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Service {
    Documents,
    Rules,
    Scanner,
}

impl Service {
    pub const ALL: [Service; 3] = [Service::Documents, Service::Rules, Service::Scanner];

    pub fn label(self) -> &'static str {
        match self {
            Self::Documents => "Document Processor",
            Self::Rules => "Rule Extractor",
            Self::Scanner => "Violation Scanner",
        }
    }
}

/// Optional server-side filters for `GET /violations`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViolationFilter {
    pub severity: Option<Severity>,
    pub status: Option<ViolationStatus>,
}

/// Resolved base URLs for the three services.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceEndpoints {
    documents: String,
    rules: String,
    scanner: String,
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self::new(DEFAULT_DOCUMENTS_URL, DEFAULT_RULES_URL, DEFAULT_SCANNER_URL)
    }
}

impl ServiceEndpoints {
    /// Build endpoints from explicit base URLs. Trailing slashes are dropped.
    pub fn new(documents: &str, rules: &str, scanner: &str) -> Self {
        Self {
            documents: normalize_base(documents),
            rules: normalize_base(rules),
            scanner: normalize_base(scanner),
        }
    }

    /// Endpoints baked in at build time, falling back to the localhost defaults.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("COMPLIANCE_DOCUMENTS_URL").unwrap_or(DEFAULT_DOCUMENTS_URL),
            option_env!("COMPLIANCE_RULES_URL").unwrap_or(DEFAULT_RULES_URL),
            option_env!("COMPLIANCE_SCANNER_URL").unwrap_or(DEFAULT_SCANNER_URL),
        )
    }

    pub fn base(&self, service: Service) -> &str {
        match service {
            Service::Documents => &self.documents,
            Service::Rules => &self.rules,
            Service::Scanner => &self.scanner,
        }
    }

    pub fn health(&self, service: Service) -> String {
        format!("{}/health", self.base(service))
    }

    // ---- document processor ----

    pub fn documents(&self, status: Option<DocumentStatus>) -> String {
        match status {
            Some(status) => format!("{}/documents?status={}", self.documents, status.as_str()),
            None => format!("{}/documents", self.documents),
        }
    }

    pub fn document(&self, document_id: &str) -> String {
        format!("{}/documents/{document_id}", self.documents)
    }

    pub fn process(&self) -> String {
        format!("{}/process", self.documents)
    }

    pub fn document_folder_scan(&self) -> String {
        format!("{}/scan", self.documents)
    }

    // ---- rule extractor ----

    pub fn rules(&self) -> String {
        format!("{}/rules", self.rules)
    }

    pub fn extract(&self, document_id: &str) -> String {
        format!("{}/extract/{document_id}", self.rules)
    }

    // ---- violation scanner ----

    pub fn violations(&self, filter: &ViolationFilter) -> String {
        let mut params = Vec::new();
        if let Some(severity) = filter.severity {
            params.push(format!("severity={}", severity.as_str()));
        }
        if let Some(status) = filter.status {
            params.push(format!("status={}", status.as_str()));
        }
        if params.is_empty() {
            format!("{}/violations", self.scanner)
        } else {
            format!("{}/violations?{}", self.scanner, params.join("&"))
        }
    }

    pub fn scan(&self) -> String {
        format!("{}/scan", self.scanner)
    }

    pub fn resolve(&self, violation_id: &str, target: ResolutionTarget) -> String {
        format!(
            "{}/violations/{violation_id}/resolve?status={}",
            self.scanner,
            target.as_str()
        )
    }
}

/// Process-wide endpoints, resolved once from the build environment.
pub fn endpoints() -> &'static ServiceEndpoints {
    static ENDPOINTS: OnceLock<ServiceEndpoints> = OnceLock::new();
    ENDPOINTS.get_or_init(ServiceEndpoints::from_build_env)
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
