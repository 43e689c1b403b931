//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (alerts, downloads,
//! timers, theme) and pure derivations (grouping, formatting) from page and
//! component logic to improve reuse and testability.

pub mod dark_mode;
pub mod download;
pub mod format;
pub mod grouping;
pub mod notify;
pub mod poll;
pub mod task;
