pub mod app;
pub mod components;
pub mod config;
pub mod form;
pub mod format;
pub mod parse;
pub mod strategy;
pub mod teams;

pub use strategy::{compute, CalculationInput, Side, StakeResult, ValidationFailure};
