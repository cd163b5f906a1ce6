//! Output formatting for reliability analysis results.
//!
//! Two surfaces:
//! - JSON: machine-readable serialization for the service layer
//! - Terminal: human-readable rendering with colors and box drawing

mod json;
mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::format_report;
