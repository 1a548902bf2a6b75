/// Fixed stake unit in USD that the bookmaker promotion is built around.
pub const STAKE_UNIT_USD: f64 = 25.0;

/// Prefilled USD→INR rate shown when the page loads.
pub const DEFAULT_USD_RATE: &str = "82.50";

/// Pause before revealing a result, purely cosmetic.
pub const RESULT_DELAY_MS: u32 = 800;
