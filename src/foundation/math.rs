/// Remap a value from an unpadded `[0, 1]` column into a column inset by `padding` on both ends.
pub(crate) fn apply_padding(value: f64, padding: f64) -> f64 {
    value * (1.0 - padding * 2.0) + padding
}

/// `100 * value / reference`, rounded half away from zero.
pub(crate) fn rounded_percent(value: f64, reference: f64) -> i64 {
    (100.0 * value / reference).round() as i64
}

pub(crate) fn percent_label(value: f64, reference: f64) -> String {
    format!("{}%", rounded_percent(value, reference))
}

pub(crate) fn is_finite_non_negative(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
