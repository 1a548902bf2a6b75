use crate::config::STAKE_UNIT_USD;
use crate::parse::base_amount_preview;

pub fn format_inr(amount: f64) -> String { format!("{:.2} INR", amount) }

pub fn format_odd(odd: f64) -> String { format!("{:.2}", odd) }

/// Live hint under the rate field, e.g. `Base amount: $25 × 82.50 INR = 2062.50 INR`.
pub fn format_base_hint(rate: &str) -> String {
    let total = base_amount_preview(rate).map(format_inr).unwrap_or_else(|| "—".to_string());
    format!("Base amount: ${} × {} INR = {}", STAKE_UNIT_USD, rate.trim(), total)
}

/// Breakdown shown under the total stake, e.g. `Base amount: 2062.50 INR ($25 × 82.50)`.
pub fn format_base_breakdown(base_amount: f64) -> String {
    let rate = base_amount / STAKE_UNIT_USD;
    format!("Base amount: {} (${} × {:.2})", format_inr(base_amount), STAKE_UNIT_USD, rate)
}

pub fn outcome_verdict(amount: f64) -> &'static str {
    if amount >= 0.0 { "✨ Profit" } else { "📉 Loss" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amounts() {
        assert_eq!(format_inr(-218.75), "-218.75 INR");
        assert_eq!(format_inr(1843.754), "1843.75 INR");
        assert_eq!(format_odd(2.0), "2.00");
    }

    #[test]
    fn test_base_hint() {
        assert_eq!(format_base_hint("82.50"), "Base amount: $25 × 82.50 INR = 2062.50 INR");
        assert_eq!(format_base_hint("x"), "Base amount: $25 × x INR = —");
    }

    #[test]
    fn test_base_breakdown() {
        assert_eq!(format_base_breakdown(2062.5), "Base amount: 2062.50 INR ($25 × 82.50)");
    }

    #[test]
    fn test_verdict() {
        assert_eq!(outcome_verdict(0.0), "✨ Profit");
        assert_eq!(outcome_verdict(-0.01), "📉 Loss");
    }
}
