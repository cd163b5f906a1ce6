//! Statistical primitives over dense sample slices.
//!
//! This module provides the low-level building blocks for the reliability
//! engine:
//! - Central tendency and dispersion (mean, median, sample variance)
//! - Distribution shape (bias-adjusted skewness and excess kurtosis)
//! - Pairwise linear association (Pearson correlation)
//!
//! All functions take cleaned data: slices with no missing values. Where
//! a statistic is mathematically undefined for the given sample (too few
//! points, zero variance), they return `f64::NAN` rather than panicking,
//! so callers can surface "not computable" per value.

mod correlation;
mod descriptive;

pub use correlation::pearson;
pub use descriptive::{
    kurtosis, max, mean, median, min, sample_std_dev, sample_variance, skewness,
};
