//! JSON serialization for analysis results.
//!
//! Works over any result type in the crate ([`crate::FactorReport`],
//! [`crate::DescriptiveSummary`], [`crate::AnalysisOutput`], ...).
//! Undefined statistics (NaN) serialize as `null`, which upstream layers
//! render as "N/A".

use serde::Serialize;

/// Serialize a result to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for the
/// crate's result types).
pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Serialize a result to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for the
/// crate's result types).
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
