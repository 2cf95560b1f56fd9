//! Big-number calculator engine with K/M/G/T/P/E shorthand.

pub mod calculator;
pub mod config;
pub mod session;

pub use calculator::{CalcError, CalcResult, Calculator, Operation};
pub use config::Config;
