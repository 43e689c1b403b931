//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its view state in a local `RwSignal`, runs its own poller
//! while mounted, and delegates rendering details to `components`.

pub mod audit;
pub mod dashboard;
pub mod documents;
pub mod rules;
pub mod settings;
pub mod violations;
