//! Number formatting shared by every token generator
//!
//! Token values are CSS strings, so numbers must render the same way on
//! every run: shortest round-trip decimal, no exponent, and never `-0`.

/// Format a number the way CSS token values expect it.
///
/// Integral values drop the fractional part (`4.0` -> `"4"`), everything
/// else uses the shortest representation that round-trips.
pub fn fmt_num(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }
    format!("{value}")
}

/// Round to the nearest integer with halves going towards positive
/// infinity (`-0.5` -> `0`, `2.5` -> `3`).
pub fn round_half_up(value: f64) -> f64 {
    let rounded = (value + 0.5).floor();
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Round to a fixed number of decimal places, used for alpha values.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(fmt_num(4.0), "4");
        assert_eq!(fmt_num(999.0), "999");
        assert_eq!(fmt_num(-3.0), "-3");
    }

    #[test]
    fn fractions_use_shortest_form() {
        assert_eq!(fmt_num(4.5), "4.5");
        assert_eq!(fmt_num(0.57), "0.57");
        assert_eq!(fmt_num(1.5 * 3.0), "4.5");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(f64::NAN), "0");
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-1.5), -1.0);
        assert_eq!(round_half_up(1.49), 1.0);
    }

    #[test]
    fn round_to_places() {
        assert_eq!(round_to(0.501_960_784, 3), 0.502);
        assert_eq!(round_to(0.21, 3), 0.21);
    }
}
