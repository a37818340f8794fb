//! Numeric guards shared by every formula.
//!
//! Two rules keep all outputs finite:
//! - any non-finite input is read as `0.0`
//! - any denominator that is `<= 0` (or non-finite) is replaced by `1.0`

/// Normalize NaN and infinities to zero
#[inline]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Denominator guard: `max(d, 1)` semantics for non-positive values
#[inline]
pub fn guard_denominator(denominator: f64) -> f64 {
    let d = finite_or_zero(denominator);
    if d <= 0.0 {
        1.0
    } else {
        d
    }
}

/// Division with both guards applied
#[inline]
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    finite_or_zero(numerator) / guard_denominator(denominator)
}

/// Copy a series with every non-finite point replaced by zero.
///
/// Returns the sanitized values and the number of points replaced.
pub fn sanitize_series(data: &[f64]) -> (Vec<f64>, usize) {
    let mut replaced = 0;
    let values = data
        .iter()
        .map(|&v| {
            if v.is_finite() {
                v
            } else {
                replaced += 1;
                0.0
            }
        })
        .collect();
    (values, replaced)
}

/// Arithmetic mean; `0.0` for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance around `mean`
pub fn variance(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}
