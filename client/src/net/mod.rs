//! Networking modules for the three backend services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `endpoints` resolves service base URLs and routes, `api` performs the HTTP
//! calls, `types` defines the JSON shapes, and `error` is the shared failure
//! type.

pub mod api;
pub mod endpoints;
pub mod error;
pub mod types;
