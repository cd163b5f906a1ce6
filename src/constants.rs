//! Shared constants for the reliability engine.

/// Minimum number of items (columns) required for reliability analysis.
///
/// Cronbach's alpha is undefined for a single item: the k/(k-1) factor
/// degenerates and there is no "rest" to correlate against.
pub const MIN_ITEMS: usize = 2;

/// Minimum number of complete observations required after dropping rows
/// with missing values. Sample variance needs at least two data points.
pub const MIN_OBSERVATIONS: usize = 2;

/// Decimal digits Cronbach's alpha is rounded to at the output boundary.
///
/// Intermediate computation stays at full f64 precision; only the final
/// coefficient is rounded.
pub const ALPHA_DECIMALS: u32 = 3;

/// Item-rest correlation below this value flags an item as weak.
///
/// 0.30 is the conventional screening threshold for "this statement does
/// not measure the same construct as the rest of the scale".
pub const WEAK_ITEM_THRESHOLD: f64 = 0.30;
