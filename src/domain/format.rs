//! Number rendering for the overview panel and record list.

/// Two decimal places, with exact ties rounded away from zero
/// (`2.125` prints as `2.13`). Negative zero prints as `0.00`; non-finite
/// values print as `NaN`, `Infinity` or `-Infinity`.
pub fn fixed2(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        format!("{:.2}", round_half_away(value) + 0.0)
    }
}

/// `{:.2}` rounds exact ties to even. A tie at the third decimal is exactly
/// representable only as an odd multiple of 1/8; those are rounded away from
/// zero here and everything else is left for the formatter.
fn round_half_away(value: f64) -> f64 {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        (value * 100.0).round() / 100.0
    } else {
        value
    }
}

/// Currency amount, symbol first: `$12.50`, `$-3.00`.
pub fn money(value: f64, symbol: &str) -> String {
    format!("{}{}", symbol, fixed2(value))
}

pub fn percent(value: f64) -> String {
    format!("{}%", fixed2(value))
}

/// Capital gain percentage with an explicit `+` for non-negative values.
pub fn signed_percent(gain: f64) -> String {
    if gain >= 0.0 {
        format!("+{}%", fixed2(gain))
    } else {
        percent(gain)
    }
}

/// Shortest natural rendering of a price: `5`, `5.5`, `0.125`.
pub fn plain_number(value: f64) -> String {
    if !value.is_finite() {
        return fixed2(value);
    }
    format!("{}", value + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed2_rounds_to_two_places() {
        assert_eq!(fixed2(0.0), "0.00");
        assert_eq!(fixed2(20.0), "20.00");
        assert_eq!(fixed2(1.005e2), "100.50");
        assert_eq!(fixed2(-3.14159), "-3.14");
    }

    #[test]
    fn fixed2_rounds_exact_ties_away_from_zero() {
        assert_eq!(fixed2(0.125), "0.13");
        assert_eq!(fixed2(2.125), "2.13");
        assert_eq!(fixed2(10.625), "10.63");
        assert_eq!(fixed2(-0.375), "-0.38");
        assert_eq!(fixed2(0.25), "0.25");
        // 1.005 is stored just below the tie
        assert_eq!(fixed2(1.005), "1.00");
    }

    #[test]
    fn fixed2_normalizes_negative_zero() {
        assert_eq!(fixed2(-0.0), "0.00");
    }

    #[test]
    fn fixed2_non_finite() {
        assert_eq!(fixed2(f64::NAN), "NaN");
        assert_eq!(fixed2(f64::INFINITY), "Infinity");
        assert_eq!(fixed2(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn money_puts_symbol_first() {
        assert_eq!(money(5.0, "$"), "$5.00");
        assert_eq!(money(-1.0, "$"), "$-1.00");
        assert_eq!(money(2.5, "€"), "€2.50");
    }

    #[test]
    fn signed_percent_adds_plus_for_gains() {
        assert_eq!(signed_percent(20.0), "+20.00%");
        assert_eq!(signed_percent(0.0), "+0.00%");
        assert_eq!(signed_percent(-12.3456), "-12.35%");
    }

    #[test]
    fn signed_percent_non_finite() {
        assert_eq!(signed_percent(f64::NAN), "NaN%");
        assert_eq!(signed_percent(f64::INFINITY), "+Infinity%");
        assert_eq!(signed_percent(f64::NEG_INFINITY), "-Infinity%");
    }

    #[test]
    fn plain_number_drops_trailing_zeros() {
        assert_eq!(plain_number(5.0), "5");
        assert_eq!(plain_number(5.5), "5.5");
        assert_eq!(plain_number(0.125), "0.125");
        assert_eq!(plain_number(-0.0), "0");
        assert_eq!(plain_number(-2.0), "-2");
    }
}
