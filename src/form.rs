//! View-model for the calculator page: the raw text the user typed plus the
//! team labels, turned into a core calculation on submit.

use crate::config::DEFAULT_USD_RATE;
use crate::parse::parse_number;
use crate::strategy::{compute, CalculationInput, StakeResult, ValidationFailure};
use crate::teams::{DEFAULT_TEAM_A, DEFAULT_TEAM_B};

#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorForm {
    pub odd_a: String,
    pub odd_b: String,
    pub team_a: String,
    pub team_b: String,
    pub usd_rate: String,
}

impl Default for CalculatorForm {
    fn default() -> Self {
        Self {
            odd_a: String::new(),
            odd_b: String::new(),
            team_a: DEFAULT_TEAM_A.into(),
            team_b: DEFAULT_TEAM_B.into(),
            usd_rate: DEFAULT_USD_RATE.into(),
        }
    }
}

/// A core result with team labels attached. Labels never feed the math.
#[derive(Clone, Debug, PartialEq)]
pub struct Strategy {
    pub bonus_team: String,
    pub hedge_team: String,
    pub result: StakeResult,
}

impl CalculatorForm {
    pub fn input(&self) -> CalculationInput {
        CalculationInput {
            odds_a: parse_number(&self.odd_a),
            odds_b: parse_number(&self.odd_b),
            conversion_rate: parse_number(&self.usd_rate),
        }
    }

    pub fn submit(&self) -> Result<Strategy, ValidationFailure> {
        let result = compute(self.input())?;
        let side = result.bonus_eligible_side;
        Ok(Strategy {
            bonus_team: side.pick(&self.team_a, &self.team_b).clone(),
            hedge_team: side.hedge().pick(&self.team_a, &self.team_b).clone(),
            result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Side;

    fn form(odd_a: &str, odd_b: &str, rate: &str) -> CalculatorForm {
        CalculatorForm {
            odd_a: odd_a.into(),
            odd_b: odd_b.into(),
            usd_rate: rate.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let f = CalculatorForm::default();
        assert_eq!(f.usd_rate, "82.50");
        assert_eq!(f.team_a, "Mumbai Indians");
        assert_eq!(f.team_b, "Chennai Super Kings");
        assert!(f.odd_a.is_empty() && f.odd_b.is_empty());
    }

    #[test]
    fn test_empty_odds_report_odds_first() {
        assert_eq!(CalculatorForm::default().submit(), Err(ValidationFailure::InvalidOdd));
        assert_eq!(form("", "2.0", "").submit(), Err(ValidationFailure::InvalidOdd));
    }

    #[test]
    fn test_blank_rate() {
        assert_eq!(form("1.65", "2.00", " ").submit(), Err(ValidationFailure::InvalidRate));
    }

    #[test]
    fn test_labels_follow_bonus_side() {
        let s = form("2.10", "1.80", "83").submit().unwrap();
        assert_eq!(s.result.bonus_eligible_side, Side::B);
        assert_eq!(s.bonus_team, "Chennai Super Kings");
        assert_eq!(s.hedge_team, "Mumbai Indians");

        let s = form("1.80", "2.10", "83").submit().unwrap();
        assert_eq!(s.bonus_team, "Mumbai Indians");
        assert_eq!(s.hedge_team, "Chennai Super Kings");
    }

    #[test]
    fn test_labels_do_not_change_numbers() {
        let plain = form("1.65", "2.00", "82.50").submit().unwrap();
        let renamed = CalculatorForm {
            team_a: "Gujarat Titans".into(),
            team_b: "Gujarat Titans".into(),
            ..form("1.65", "2.00", "82.50")
        }
        .submit()
        .unwrap();
        assert_eq!(plain.result, renamed.result);
        assert_eq!(renamed.bonus_team, "Gujarat Titans");
    }
}
