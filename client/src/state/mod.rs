//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by view (`dashboard`, `documents`, `rules`, `violations`,
//! `audit`) plus shell chrome (`ui`). Each container holds plain data with
//! pure update methods; pages wrap them in `RwSignal`s and own the polling
//! that feeds them.

pub mod audit;
pub mod dashboard;
pub mod documents;
pub mod rules;
pub mod ui;
pub mod violations;
