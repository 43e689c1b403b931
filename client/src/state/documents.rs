//! Documents view state.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use std::cmp::Reverse;

use crate::net::error::ApiError;
use crate::net::types::{Document, DocumentDetail, DocumentStatus};
use crate::util::format::parse_timestamp;

/// File-type hint for the upload input.
pub const UPLOAD_ACCEPT: &str = ".pdf";

#[derive(Clone, Debug, PartialEq)]
pub struct DocumentsState {
    /// Newest first.
    pub items: Vec<Document>,
    pub loading: bool,
    pub uploading: bool,
    pub scanning_folder: bool,
    /// Document whose rule extraction is in flight.
    pub extracting: Option<String>,
    pub detail: Option<DocumentDetail>,
    pub detail_loading: bool,
}

impl Default for DocumentsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            uploading: false,
            scanning_folder: false,
            extracting: None,
            detail: None,
            detail_loading: false,
        }
    }
}

impl DocumentsState {
    /// Replace the list with a fresh fetch, sorted newest first.
    ///
    /// Unparseable timestamps sort after every parseable one.
    pub fn apply_list(&mut self, mut documents: Vec<Document>) {
        documents.sort_by_key(|d| Reverse(parse_timestamp(&d.created_at)));
        self.items = documents;
        self.loading = false;
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
        self.detail_loading = false;
    }
}

/// Extraction is offered only once processing has completed.
pub fn can_extract(document: &Document) -> bool {
    document.status == DocumentStatus::Completed
}

/// Client-side check mirroring the processor's own `.pdf` filename rule.
///
/// # Errors
///
/// Returns `ApiError::Rejected` for anything not named `*.pdf`.
pub fn validate_upload(filename: &str) -> Result<(), ApiError> {
    let name = filename.trim();
    let is_pdf = name.len() > UPLOAD_ACCEPT.len()
        && name
            .get(name.len() - UPLOAD_ACCEPT.len()..)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(UPLOAD_ACCEPT));
    if is_pdf {
        Ok(())
    } else {
        Err(ApiError::Rejected("Only PDF files can be uploaded.".to_owned()))
    }
}

/// CSS modifier for a status pill.
pub fn status_modifier(status: DocumentStatus) -> &'static str {
    match status {
        DocumentStatus::Completed => "ok",
        DocumentStatus::Processing => "busy",
        DocumentStatus::Pending | DocumentStatus::Unknown => "idle",
        DocumentStatus::Failed => "error",
    }
}
