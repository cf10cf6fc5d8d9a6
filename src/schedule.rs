use crate::{ensure_interval, error::Result};

/// A step size that varies with time `t` (an episode or visit count chosen by the caller)
///
/// Schedules are evaluated by the caller and fed into the estimators through
/// [`StepConfig::with_alpha`](crate::algo::StepConfig::with_alpha) between calls.
pub trait StepSchedule {
    /// Step size at time `t`
    fn evaluate(&self, t: f32) -> f32;
}

/// A fixed step size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant(pub f32);

impl StepSchedule for Constant {
    fn evaluate(&self, _t: f32) -> f32 {
        self.0
    }
}

/// Search-then-converge: α(t) = α<sub>0</sub> / (1 + t/τ)
///
/// Stays near α<sub>0</sub> for the first τ episodes, then falls off like 1/t, so the sum of steps diverges
/// while the sum of squares does not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseTime {
    alpha0: f32,
    tau: f32,
}

impl InverseTime {
    /// **Errors** with [`InvalidArgument`](crate::error::Error::InvalidArgument) unless
    /// `alpha0` is in `[0,1]` and `tau` is positive
    pub fn new(alpha0: f32, tau: f32) -> Result<Self> {
        ensure_interval!(alpha0, 0.0, 1.0);
        ensure_interval!(tau, f32::MIN_POSITIVE, f32::INFINITY);
        Ok(Self { alpha0, tau })
    }
}

impl StepSchedule for InverseTime {
    fn evaluate(&self, t: f32) -> f32 {
        self.alpha0 / (1.0 + t / self.tau)
    }
}

/// α(n) = 1 / n
///
/// With `n` the number of updates a state has received (counting from 1), every-visit Monte Carlo
/// under this schedule keeps each estimate equal to the sample average of its observed returns.
/// `n < 1` is treated as `1`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Harmonic;

impl StepSchedule for Harmonic {
    fn evaluate(&self, n: f32) -> f32 {
        1.0 / n.max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn constant_step() {
        let x = Constant(0.05);
        assert_eq!(x.evaluate(0.0), 0.05);
        assert_eq!(x.evaluate(100.0), 0.05);
    }

    #[test]
    fn inverse_time_step() {
        let x = InverseTime::new(0.5, 10.0).unwrap();
        assert_eq!(x.evaluate(0.0), 0.5);
        assert_eq!(x.evaluate(10.0), 0.25);
        assert_eq!(x.evaluate(30.0), 0.125);
    }

    #[test]
    fn inverse_time_rejects_bad_parameters() {
        assert!(matches!(
            InverseTime::new(1.5, 10.0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            InverseTime::new(0.5, 0.0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn harmonic_step() {
        assert_eq!(Harmonic.evaluate(1.0), 1.0);
        assert_eq!(Harmonic.evaluate(4.0), 0.25);
        assert_eq!(Harmonic.evaluate(0.0), 1.0);
    }
}
