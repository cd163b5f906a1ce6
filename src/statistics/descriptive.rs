//! Descriptive statistics: central tendency, dispersion, and shape.
//!
//! Estimator conventions match the usual dataframe-library defaults:
//! - Variance and standard deviation use the unbiased n−1 denominator.
//! - Skewness is the adjusted Fisher-Pearson coefficient G1.
//! - Kurtosis is the bias-adjusted *excess* kurtosis G2 (normal = 0).
//!
//! Undefined cases return `f64::NAN`: the empty sample for all of them,
//! n < 2 for variance, n < 3 for skewness, n < 4 for kurtosis, and zero
//! variance for both shape statistics.

/// Arithmetic mean. Returns NaN for an empty slice.
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Median: middle value, or the average of the two middle values for an
/// even-sized sample. Returns NaN for an empty slice.
pub fn median(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    let mut sorted = xs.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Sample variance with the unbiased n−1 denominator.
///
/// ```text
/// s^2 = Σ(x_i − x̄)^2 / (n − 1)
/// ```
///
/// Returns NaN for fewer than two samples.
pub fn sample_variance(xs: &[f64]) -> f64 {
    if xs.len() < 2 {
        return f64::NAN;
    }
    let m = mean(xs);
    let sum_sq: f64 = xs.iter().map(|x| (x - m).powi(2)).sum();
    sum_sq / (xs.len() - 1) as f64
}

/// Sample standard deviation: square root of [`sample_variance`].
pub fn sample_std_dev(xs: &[f64]) -> f64 {
    sample_variance(xs).sqrt()
}

/// Smallest value. Returns NaN for an empty slice.
pub fn min(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    xs.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Largest value. Returns NaN for an empty slice.
pub fn max(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    xs.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Bias-adjusted sample skewness (Fisher-Pearson G1).
///
/// ```text
/// G1 = n / ((n−1)(n−2)) * Σ(x_i − x̄)^3 / s^3
/// ```
///
/// where s is the sample standard deviation. Returns NaN for n < 3 or a
/// zero-variance sample.
pub fn skewness(xs: &[f64]) -> f64 {
    let n = xs.len();
    if n < 3 {
        return f64::NAN;
    }
    let m = mean(xs);
    let sum_sq: f64 = xs.iter().map(|x| (x - m).powi(2)).sum();
    if sum_sq == 0.0 {
        return f64::NAN;
    }
    let sum_cube: f64 = xs.iter().map(|x| (x - m).powi(3)).sum();

    let nf = n as f64;
    let s = (sum_sq / (nf - 1.0)).sqrt();
    nf / ((nf - 1.0) * (nf - 2.0)) * sum_cube / s.powi(3)
}

/// Bias-adjusted sample excess kurtosis (G2). A normal distribution
/// scores 0; heavy tails score positive.
///
/// ```text
/// G2 = n(n+1) / ((n−1)(n−2)(n−3)) * Σ(x_i − x̄)^4 / s^4
///      − 3(n−1)^2 / ((n−2)(n−3))
/// ```
///
/// Returns NaN for n < 4 or a zero-variance sample.
pub fn kurtosis(xs: &[f64]) -> f64 {
    let n = xs.len();
    if n < 4 {
        return f64::NAN;
    }
    let m = mean(xs);
    let sum_sq: f64 = xs.iter().map(|x| (x - m).powi(2)).sum();
    if sum_sq == 0.0 {
        return f64::NAN;
    }
    let sum_quart: f64 = xs.iter().map(|x| (x - m).powi(4)).sum();

    let nf = n as f64;
    let s2 = sum_sq / (nf - 1.0);
    let term = nf * (nf + 1.0) / ((nf - 1.0) * (nf - 2.0) * (nf - 3.0));
    term * sum_quart / (s2 * s2) - 3.0 * (nf - 1.0).powi(2) / ((nf - 2.0) * (nf - 3.0))
}
