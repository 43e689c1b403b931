//! REST calls to the document processor, rule extractor, and scanner.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call resolves to
//! `ApiError::Unavailable`, since these services are only reachable from the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx responses carry the
//! service's `detail` message when the body has one. Nothing here retries;
//! the caller decides whether to log, alert, or back off.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::endpoints::{Service, ViolationFilter, endpoints};
use super::error::ApiError;
use super::types::{
    DocumentDetail, DocumentList, ExtractionReceipt, FolderScanReceipt, HealthStatus, ResolutionTarget,
    RuleList, ScanReceipt, ViolationList,
};
#[cfg(feature = "hydrate")]
use super::types::{ErrorBody, UploadReceipt};

// =============================================================================
// DOCUMENT PROCESSOR
// =============================================================================

/// `GET /documents`.
pub async fn list_documents() -> Result<DocumentList, ApiError> {
    get_json(&endpoints().documents(None)).await
}

/// `GET /documents/{id}` with chunks.
pub async fn get_document(document_id: &str) -> Result<DocumentDetail, ApiError> {
    get_json(&endpoints().document(document_id)).await
}

/// `POST /process` with the file as the multipart `file` field.
///
/// The browser sets the multipart boundary, so no content type is forced.
#[cfg(feature = "hydrate")]
pub async fn upload_document(file: &web_sys::File) -> Result<UploadReceipt, ApiError> {
    let url = endpoints().process();
    let form = web_sys::FormData::new().map_err(|e| transport(&url, &format!("{e:?}")))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| transport(&url, &format!("{e:?}")))?;
    let resp = gloo_net::http::Request::post(&url)
        .body(form)
        .map_err(|e| transport(&url, &e.to_string()))?
        .send()
        .await
        .map_err(|e| transport(&url, &e.to_string()))?;
    decode(&url, resp).await
}

/// `POST /scan` on the processor: queue PDFs dropped into its folder.
pub async fn scan_document_folder() -> Result<FolderScanReceipt, ApiError> {
    post_json(&endpoints().document_folder_scan()).await
}

// =============================================================================
// RULE EXTRACTOR
// =============================================================================

/// `GET /rules`.
pub async fn list_rules() -> Result<RuleList, ApiError> {
    get_json(&endpoints().rules()).await
}

/// `POST /extract/{documentId}`.
pub async fn extract_rules(document_id: &str) -> Result<ExtractionReceipt, ApiError> {
    post_json(&endpoints().extract(document_id)).await
}

// =============================================================================
// SCANNER
// =============================================================================

/// `GET /violations`, optionally filtered server-side.
pub async fn list_violations(filter: &ViolationFilter) -> Result<ViolationList, ApiError> {
    get_json(&endpoints().violations(filter)).await
}

/// `POST /scan` on the scanner.
pub async fn trigger_scan() -> Result<ScanReceipt, ApiError> {
    post_json(&endpoints().scan()).await
}

/// `POST /violations/{id}/resolve?status=...`. The response body is ignored.
pub async fn resolve_violation(violation_id: &str, target: ResolutionTarget) -> Result<(), ApiError> {
    post_empty(&endpoints().resolve(violation_id, target)).await
}

// =============================================================================
// SHARED
// =============================================================================

/// `GET /health` on one service.
pub async fn check_health(service: Service) -> Result<HealthStatus, ApiError> {
    get_json(&endpoints().health(service)).await
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(any(test, feature = "hydrate"))]
fn transport(url: &str, message: &str) -> ApiError {
    ApiError::Transport { url: url.to_owned(), message: message.to_owned() }
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(url: &str, status: u16, detail: Option<String>) -> ApiError {
    ApiError::Status { url: url.to_owned(), status, detail: detail.filter(|d| !d.trim().is_empty()) }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| transport(url, &e.to_string()))?;
        decode(url, resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

async fn post_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .send()
            .await
            .map_err(|e| transport(url, &e.to_string()))?;
        decode(url, resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

async fn post_empty(url: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .send()
            .await
            .map_err(|e| transport(url, &e.to_string()))?;
        if !resp.ok() {
            return Err(failed_status(url, resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(url: &str, resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(failed_status(url, resp).await);
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode { url: url.to_owned(), message: e.to_string() })
}

#[cfg(feature = "hydrate")]
async fn failed_status(url: &str, resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let detail = resp.json::<ErrorBody>().await.ok().map(|body| body.message());
    status_error(url, status, detail)
}
