use crate::config::STAKE_UNIT_USD;

// Unparseable text becomes NaN so validation rejects it instead of
// silently treating it as zero.
pub fn parse_number(s: &str) -> f64 {
    let s = s.trim().replace(',', "");
    if s.is_empty() { return f64::NAN; }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

pub fn base_amount_preview(rate: &str) -> Option<f64> {
    let r = parse_number(rate);
    if r.is_finite() { Some(r * STAKE_UNIT_USD) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("1.65"), 1.65);
        assert_eq!(parse_number("  2.00 "), 2.0);
        assert_eq!(parse_number("1,082.50"), 1082.5);
        assert_eq!(parse_number("-3"), -3.0);
        assert!(parse_number("").is_nan());
        assert!(parse_number("   ").is_nan());
        assert!(parse_number("abc").is_nan());
        assert!(parse_number("1.6.5").is_nan());
    }

    #[test]
    fn test_base_amount_preview() {
        assert_eq!(base_amount_preview("82.50"), Some(2062.5));
        assert_eq!(base_amount_preview("0"), Some(0.0));
        assert_eq!(base_amount_preview(""), None);
        assert_eq!(base_amount_preview("inf"), None);
    }
}
