//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shell chrome (sidebar, header) and the cards and
//! pills the pages compose. Shell components read `UiState` from context;
//! everything else takes its data through props.

pub mod badges;
pub mod document_detail;
pub mod header;
pub mod rule_card;
pub mod sidebar;
pub mod stats_card;
pub mod violation_group;
