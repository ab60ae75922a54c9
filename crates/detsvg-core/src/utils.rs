//! Small shared helpers: attribute reference strings and label formatting.

/// Returns the `url(#id)` reference form used by attributes that point at a
/// definition node (masks, gradients).
#[inline]
pub fn id_to_url(id: &str) -> String {
    format!("url(#{id})")
}

/// Decimal string form for numeric labels.
///
/// Prints up to three fractional digits and trims trailing zeros, so axis
/// labels read `0`, `1.5`, `-2.75` rather than `1.500`.
pub fn to_decimal_string(value: f32) -> String {
    let mut s = format!("{value:.3}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    // Normalize the negative-zero artifact of rounding.
    if s == "-0" { "0".to_owned() } else { s }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_reference_form() {
        assert_eq!(id_to_url("m0_mask"), "url(#m0_mask)");
    }

    #[test]
    fn trims_trailing_zeros() {
        assert_eq!(to_decimal_string(0.0), "0");
        assert_eq!(to_decimal_string(1.5), "1.5");
        assert_eq!(to_decimal_string(-2.75), "-2.75");
        assert_eq!(to_decimal_string(2.0), "2");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(to_decimal_string(-0.0), "0");
        assert_eq!(to_decimal_string(-0.0001), "0");
    }
}
