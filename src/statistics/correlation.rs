//! Pearson product-moment correlation.

/// Pearson correlation coefficient between two equal-length samples.
///
/// ```text
/// r = Σ(x_i − x̄)(y_i − ȳ) / sqrt(Σ(x_i − x̄)^2 · Σ(y_i − ȳ)^2)
/// ```
///
/// The result is clamped to [−1, 1] to absorb floating-point drift on
/// perfectly collinear inputs.
///
/// Returns NaN when the coefficient is undefined: fewer than two samples,
/// or zero variance in either input. Callers surface that per value
/// instead of failing a whole batch.
///
/// # Panics
///
/// Panics if the slices have different lengths.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(
        x.len(),
        y.len(),
        "correlation requires equal-length samples"
    );

    let n = x.len();
    if n < 2 {
        return f64::NAN;
    }

    let mx = x.iter().sum::<f64>() / n as f64;
    let my = y.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for i in 0..n {
        let dx = x[i] - mx;
        let dy = y[i] - my;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }

    (cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0)
}
