/// Converts a base-currency amount to the display currency using fixed
/// rates. Unknown codes yield `f64::NAN`; callers render a placeholder
/// instead of failing the page. No rounding or locale formatting happens
/// here.
pub fn convert_from_usd(amount: f64, currency: &str) -> f64 {
    match currency {
        "USD" => amount,
        "GBP" => amount * 0.6,
        "BTC" => amount * 0.0023707918444761,
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_is_identity() {
        assert_eq!(convert_from_usd(0.0, "USD"), 0.0);
        assert_eq!(convert_from_usd(99.95, "USD"), 99.95);
        assert_eq!(convert_from_usd(12345.0, "USD"), 12345.0);
    }

    #[test]
    fn fixed_rates() {
        assert_eq!(convert_from_usd(100.0, "GBP"), 60.0);
        assert!((convert_from_usd(100.0, "BTC") - 0.23707918444761).abs() < 1e-12);
    }

    #[test]
    fn unknown_code_is_nan() {
        assert!(convert_from_usd(100.0, "XYZ").is_nan());
        assert!(convert_from_usd(100.0, "").is_nan());
        assert!(convert_from_usd(100.0, "usd").is_nan());
    }
}
