use crate::{ensure_interval, error::Result};

pub mod linear;
pub mod tabular;

pub use linear::{FeatureExtractor, LinearTDLambda, OneHot};
pub use tabular::{EveryVisitMC, TDLambda, TD0};

/// Step size and discount shared by every update rule
///
/// Neither value is constrained by the update rules themselves; use [`StepConfig::validate`]
/// to reject values outside the conventional `[0,1]` range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepConfig {
    /// The step size, α
    ///
    /// **Default**: `0.05`
    pub alpha: f32,
    /// The discount factor, γ
    ///
    /// **Default**: `1.0`
    pub gamma: f32,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            gamma: 1.0,
        }
    }
}

impl StepConfig {
    pub fn new(alpha: f32, gamma: f32) -> Self {
        Self { alpha, gamma }
    }

    /// The same config with a different step size, e.g. one produced by a
    /// [`StepSchedule`](crate::schedule::StepSchedule)
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    /// Check that `alpha` and `gamma` both lie in `[0,1]`
    pub fn validate(&self) -> Result<()> {
        ensure_interval!(self.alpha, 0.0, 1.0);
        ensure_interval!(self.gamma, 0.0, 1.0);
        Ok(())
    }
}
