//! Bonus-hedge stake split for a two-outcome market.
//!
//! The lower-priced side is the bonus-eligible leg: it gets enough stake to
//! return one base amount, and the other leg is hedged so both payouts stay
//! in the same ratio as their odds. The result carries the three outcomes the
//! promotion can produce (no bonus, one bonus, both bonuses), each as a net
//! amount against the total staked.

use thiserror::Error;

use crate::config::STAKE_UNIT_USD;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculationInput {
    pub odds_a: f64,
    pub odds_b: f64,
    /// Local currency units per USD.
    pub conversion_rate: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side { A, B }

impl Side {
    pub fn hedge(self) -> Self {
        match self { Side::A => Side::B, Side::B => Side::A }
    }

    /// Picks the value labelled with this side.
    pub fn pick<T>(self, a: T, b: T) -> T {
        match self { Side::A => a, Side::B => b }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StakeResult {
    pub bonus_eligible_side: Side,
    pub bonus_eligible_odd: f64,
    pub hedge_odd: f64,
    pub bonus_stake: f64,
    pub hedge_stake: f64,
    pub total_stake: f64,
    pub base_amount: f64,
    pub normal_outcome: f64,
    pub single_bonus_outcome: f64,
    pub both_bonus_outcome: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScenarioKind { Normal, SingleBonus, BothBonus }

impl ScenarioKind {
    pub fn title(self) -> &'static str {
        match self {
            ScenarioKind::Normal => "Normal Outcome",
            ScenarioKind::SingleBonus => "Single Bonus",
            ScenarioKind::BothBonus => "Both Bonus",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub amount: f64,
}

impl Scenario {
    // Break-even reads as a profit.
    pub fn is_profit(&self) -> bool { self.amount >= 0.0 }
}

impl StakeResult {
    pub fn hedge_side(&self) -> Side { self.bonus_eligible_side.hedge() }

    pub fn scenarios(&self) -> [Scenario; 3] {
        [
            Scenario { kind: ScenarioKind::Normal, amount: self.normal_outcome },
            Scenario { kind: ScenarioKind::SingleBonus, amount: self.single_bonus_outcome },
            Scenario { kind: ScenarioKind::BothBonus, amount: self.both_bonus_outcome },
        ]
    }
}

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("Please enter valid positive odds for both teams.")]
    InvalidOdd,
    #[error("Please enter a valid USD to INR rate.")]
    InvalidRate,
}

impl ValidationFailure {
    pub fn message(&self) -> String { self.to_string() }
}

fn is_positive(v: f64) -> bool { v.is_finite() && v > 0.0 }

/// Splits the stake between the bonus-eligible and hedge legs.
///
/// Odds are checked before the rate, so bad input in both reports
/// [`ValidationFailure::InvalidOdd`]. On equal odds side A takes the bonus.
pub fn compute(input: CalculationInput) -> Result<StakeResult, ValidationFailure> {
    let CalculationInput { odds_a, odds_b, conversion_rate } = input;
    if !is_positive(odds_a) || !is_positive(odds_b) {
        return Err(ValidationFailure::InvalidOdd);
    }
    if !is_positive(conversion_rate) {
        return Err(ValidationFailure::InvalidRate);
    }

    let base_amount = conversion_rate * STAKE_UNIT_USD;
    let (side, bonus_odd, hedge_odd) = if odds_a <= odds_b {
        (Side::A, odds_a, odds_b)
    } else {
        (Side::B, odds_b, odds_a)
    };

    let x = base_amount / bonus_odd;
    let y = (bonus_odd / hedge_odd) * x;
    let total = x + y;

    Ok(StakeResult {
        bonus_eligible_side: side,
        bonus_eligible_odd: bonus_odd,
        hedge_odd,
        bonus_stake: x,
        hedge_stake: y,
        total_stake: total,
        base_amount,
        normal_outcome: base_amount - total,
        single_bonus_outcome: 2.0 * base_amount - total,
        both_bonus_outcome: 3.0 * base_amount - total,
    })
}
