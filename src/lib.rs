/// Value-function update rules: tabular TD(0), every-visit Monte Carlo, TD(λ), and linear TD(λ)
pub mod algo;

/// Error types
pub mod error;

/// Time-varying step sizes
pub mod schedule;

/// Transition and episode records
pub mod trajectory;

mod util;

pub use error::{Error, Result};
