//! Wire DTOs for the three backend services.
//!
//! DESIGN
//! ======
//! Field names mirror the JSON emitted by the services so serde can decode
//! responses directly. Identifiers are normalized to strings (documents use
//! UUIDs, rules and violations use serial integers) and unrecognized enum
//! values decode to `Unknown` so one odd row never fails a whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// DOCUMENTS
// =============================================================================

/// Processing status of an uploaded document. Set only by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

impl DocumentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Unknown => "unknown",
        }
    }
}

/// A policy document known to the document processor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(deserialize_with = "deserialize_id")]
    pub document_id: String,
    pub filename: String,
    /// The processor emits `uploaded_at`; older builds emitted `created_at`.
    #[serde(alias = "uploaded_at", default)]
    pub created_at: String,
    #[serde(default)]
    pub processed_at: Option<String>,
    #[serde(default)]
    pub file_size: u64,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// One text chunk produced while processing a document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentChunk {
    #[serde(deserialize_with = "deserialize_id")]
    pub chunk_id: String,
    pub chunk_index: u32,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Response of `GET /documents/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentDetail {
    pub document: Document,
    #[serde(default)]
    pub chunks: Vec<DocumentChunk>,
    #[serde(default)]
    pub chunk_count: usize,
}

/// Response of `GET /documents`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentList {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub documents: Vec<Document>,
}

/// Response of `POST /process`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    #[serde(deserialize_with = "deserialize_id")]
    pub document_id: String,
    pub filename: String,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub message: String,
}

/// Response of `POST /scan` on the document processor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderScanReceipt {
    #[serde(default)]
    pub files_found: usize,
    #[serde(default)]
    pub queued_for_processing: usize,
    #[serde(default)]
    pub message: String,
}

// =============================================================================
// RULES
// =============================================================================

/// A compliance rule extracted from a policy document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(deserialize_with = "deserialize_id")]
    pub rule_id: String,
    pub rule_name: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub rule_type: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub description: String,
    #[serde(default)]
    pub parameters: serde_json::Value,
    /// Extractor confidence in `0.0..=1.0`.
    #[serde(default)]
    pub confidence_score: f64,
    /// Not returned by every extractor build.
    #[serde(default)]
    pub source_text_snippet: Option<String>,
    #[serde(default)]
    pub source_document: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub status: String,
}

/// Response of `GET /rules`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleList {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

/// A rule summary returned by an extraction run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRule {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
}

/// Response of `POST /extract/{documentId}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionReceipt {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub extracted_count: usize,
    #[serde(default)]
    pub rules: Vec<ExtractedRule>,
}

// =============================================================================
// VIOLATIONS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    #[default]
    Low,
    #[serde(other)]
    Unknown,
}

impl Severity {
    pub const ALL: [Severity; 4] = [Severity::Critical, Severity::High, Severity::Medium, Severity::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Unknown => "unknown",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationStatus {
    #[default]
    Open,
    Resolved,
    Ignored,
    FalsePositive,
    #[serde(other)]
    Unknown,
}

impl ViolationStatus {
    pub const ALL: [ViolationStatus; 4] = [
        ViolationStatus::Open,
        ViolationStatus::Resolved,
        ViolationStatus::Ignored,
        ViolationStatus::FalsePositive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Resolved => "resolved",
            Self::Ignored => "ignored",
            Self::FalsePositive => "false_positive",
            Self::Unknown => "unknown",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// Status a user may move an open violation to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolutionTarget {
    Resolved,
    Ignored,
}

impl ResolutionTarget {
    pub fn as_str(self) -> &'static str {
        self.status().as_str()
    }

    pub fn status(self) -> ViolationStatus {
        match self {
            Self::Resolved => ViolationStatus::Resolved,
            Self::Ignored => ViolationStatus::Ignored,
        }
    }
}

/// A detected policy violation joined with its rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    #[serde(deserialize_with = "deserialize_id")]
    pub violation_id: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub status: ViolationStatus,
    #[serde(default)]
    pub evidence: serde_json::Value,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub explanation: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub rule_name: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub rule_type: String,
}

impl Violation {
    pub fn is_open(&self) -> bool {
        self.status == ViolationStatus::Open
    }
}

/// Response of `GET /violations`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViolationList {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub violations: Vec<Violation>,
}

/// Response of `POST /scan` on the scanner.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReceipt {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub violations_found: usize,
}

// =============================================================================
// SHARED
// =============================================================================

/// Response of `GET /health` on any service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub service: String,
}

/// FastAPI error body. `detail` is a string for `HTTPException` and a list of
/// objects for validation errors.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: serde_json::Value,
}

impl ErrorBody {
    pub fn message(&self) -> String {
        match &self.detail {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or integer id")),
    }
}

fn deserialize_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
