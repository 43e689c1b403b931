//! User-facing failure reporting.
//!
//! ERROR HANDLING
//! ==============
//! Every backend failure is logged. Failures of user-initiated actions also
//! raise a blocking `window.alert`; background refresh failures stay in the
//! log only.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use crate::net::error::ApiError;

/// Show a blocking alert dialog (logged only outside the browser).
pub fn alert(message: &str) {
    log::info!("alert: {message}");
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// Log and alert the failure of a user-initiated action.
pub fn action_failed(action: &str, err: &ApiError) {
    log::error!("{action} failed: {err}");
    alert(&failure_message(action, err));
}

/// Log the failure of a background refresh. Prior state is left untouched.
pub fn refresh_failed(what: &str, err: &ApiError) {
    log::warn!("failed to refresh {what}: {err}");
}

pub fn failure_message(action: &str, err: &ApiError) -> String {
    format!("{action} failed. {}", err.user_message())
}
