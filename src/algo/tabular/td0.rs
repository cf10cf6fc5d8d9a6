use log::trace;

use crate::{algo::StepConfig, error::Result, trajectory::Transition};

use super::{lookup, lookup_mut, Hashable, ValueTable};

/// One-step temporal-difference prediction
///
/// After each transition the estimate of the state just left is moved toward the bootstrapped target:
///
/// V(S<sub>t</sub>) ← V(S<sub>t</sub>) + α(R<sub>t+1</sub> + γV(S<sub>t+1</sub>) - V(S<sub>t</sub>))
///
/// Only V(S<sub>t</sub>) is written; the next state's estimate is read, never changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TD0 {
    alpha: f32,
    gamma: f32,
}

impl Default for TD0 {
    fn default() -> Self {
        Self::new(StepConfig::default())
    }
}

impl TD0 {
    pub fn new(config: StepConfig) -> Self {
        Self {
            alpha: config.alpha,
            gamma: config.gamma,
        }
    }

    /// Apply one TD(0) step for the transition `state --reward--> next_state`
    ///
    /// **Errors** with [`LookupFailure`](crate::error::Error::LookupFailure) if either state is
    /// missing from `values`, in which case `values` is left untouched.
    pub fn update<S: Hashable>(
        &self,
        state: S,
        reward: f32,
        next_state: S,
        values: &mut ValueTable<S>,
    ) -> Result<()> {
        let next_value = lookup(values, &next_state)?;
        let value = lookup_mut(values, &state)?;

        let delta = reward + self.gamma * next_value - *value;
        trace!("td(0) error {delta}");

        *value += self.alpha * delta;

        Ok(())
    }

    /// [`update`](Self::update) from a [`Transition`] record
    pub fn update_transition<S: Hashable>(
        &self,
        transition: &Transition<S>,
        values: &mut ValueTable<S>,
    ) -> Result<()> {
        let &Transition {
            state,
            reward,
            next_state,
        } = transition;
        self.update(state, reward, next_state, values)
    }
}
