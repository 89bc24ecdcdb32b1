// `Iterator::sum` starts floats at -0.0, so the empty sum would be negative zero.
pub fn fold_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(0.0, |acc, v| acc + v)
}

/// `multiplier * fold_sum(values)` over a stream, for boundaries that
/// convert values one at a time.
pub fn scale_fold<I>(multiplier: i64, values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    multiplier as f64 * fold_sum(values)
}

/// NaN and infinities propagate, so `scale_sum(0, &[f64::INFINITY])` is NaN.
pub fn scale_sum(multiplier: i64, values: &[f64]) -> f64 {
    scale_fold(multiplier, values.iter().copied())
}
