//! Error type shared by every backend call.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a call to one of the backend services.
///
/// No distinction is drawn between transient and permanent failures; callers
/// log every variant and alert on user-initiated ones.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS).
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The service answered with a non-2xx status.
    #[error("{url} responded with status {status}{}", detail_suffix(.detail))]
    Status { url: String, status: u16, detail: Option<String> },

    /// The response body did not match the expected JSON shape.
    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },

    /// The request was refused before being sent.
    #[error("{0}")]
    Rejected(String),

    /// HTTP is only performed from the browser; server rendering gets this.
    #[error("backend requests are only available in the browser")]
    Unavailable,
}

impl ApiError {
    /// Short text suitable for an alert dialog.
    ///
    /// Prefers the service's own `detail` message when one was returned.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { detail: Some(detail), .. } => detail.clone(),
            Self::Status { status, .. } => format!("The service responded with status {status}."),
            Self::Transport { .. } => "The service could not be reached.".to_owned(),
            Self::Decode { .. } => "The service returned an unexpected response.".to_owned(),
            Self::Rejected(message) => message.clone(),
            Self::Unavailable => self.to_string(),
        }
    }
}

#[allow(clippy::ref_option)]
fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}
