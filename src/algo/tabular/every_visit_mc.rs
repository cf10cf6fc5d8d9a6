use log::{debug, trace};

use crate::{
    algo::StepConfig,
    error::{Error, Result},
    trajectory::Episode,
};

use super::{lookup_mut, Hashable, ValueTable};

/// Every-visit Monte Carlo prediction
///
/// Runs once per completed episode. Returns are accumulated in a single backward pass,
/// G<sub>t</sub> = R<sub>t+1</sub> + γG<sub>t+1</sub>, and every occurrence of a state is moved toward the
/// return observed from that occurrence:
///
/// V(S<sub>t</sub>) ← V(S<sub>t</sub>) + α(G<sub>t</sub> - V(S<sub>t</sub>))
///
/// A state visited several times receives one update per visit, latest visit first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EveryVisitMC {
    alpha: f32,
    gamma: f32,
}

impl Default for EveryVisitMC {
    fn default() -> Self {
        Self::new(StepConfig::default())
    }
}

impl EveryVisitMC {
    pub fn new(config: StepConfig) -> Self {
        Self {
            alpha: config.alpha,
            gamma: config.gamma,
        }
    }

    /// Update `values` from one episode given as aligned `states` (X<sub>0</sub>..X<sub>T-1</sub>)
    /// and `rewards` (R<sub>1</sub>..R<sub>T</sub>)
    ///
    /// **Errors**
    /// - [`InvalidArgument`](Error::InvalidArgument) if the two sequences differ in length
    /// - [`LookupFailure`](Error::LookupFailure) if any visited state is missing from `values`
    ///
    /// Both checks run before the first write.
    pub fn update<S: Hashable>(
        &self,
        states: &[S],
        rewards: &[f32],
        values: &mut ValueTable<S>,
    ) -> Result<()> {
        if states.len() != rewards.len() {
            debug!(
                "rejected episode: {} states but {} rewards",
                states.len(),
                rewards.len()
            );
            return Err(Error::InvalidArgument(format!(
                "episode has {} states but {} rewards",
                states.len(),
                rewards.len()
            )));
        }
        if !states.iter().all(|s| values.contains_key(s)) {
            debug!("rejected episode: visits a state outside the value domain");
            return Err(Error::LookupFailure);
        }

        let mut ret = 0.0;
        for (state, &reward) in states.iter().zip(rewards).rev() {
            ret = reward + self.gamma * ret;
            let v = lookup_mut(values, state)?;
            *v += self.alpha * (ret - *v);
        }
        trace!("monte carlo episode of {} steps, return {ret}", states.len());

        Ok(())
    }

    /// [`update`](Self::update) from a recorded [`Episode`]
    pub fn update_episode<S: Hashable>(
        &self,
        episode: &Episode<S>,
        values: &mut ValueTable<S>,
    ) -> Result<()> {
        self.update(episode.states(), episode.rewards(), values)
    }
}
