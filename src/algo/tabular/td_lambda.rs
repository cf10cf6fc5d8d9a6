use log::{debug, trace};

use crate::{
    algo::StepConfig,
    ensure_interval,
    error::{Error, Result},
    trajectory::Transition,
};

use super::{lookup, Hashable, TraceTable, ValueTable};

/// Tabular TD(λ) with replacing eligibility traces
///
/// Each transition computes a single TD error from the pre-update estimates,
///
/// δ = R<sub>t+1</sub> + γV(S<sub>t+1</sub>) - V(S<sub>t</sub>)
///
/// then sweeps the whole domain: every trace decays by γλ, the trace of S<sub>t</sub> is replaced by `1`,
/// and every state moves by αδz(s). Cost is O(|states|) per transition.
///
/// `lambda = 0` reduces to TD(0) on the visited state; `lambda` near `1` approaches every-visit Monte Carlo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TDLambda {
    lambda: f32,
    alpha: f32,
    gamma: f32,
}

impl TDLambda {
    /// Initialize with trace decay `lambda`; no range checks are applied
    pub fn new(lambda: f32, config: StepConfig) -> Self {
        Self {
            lambda,
            alpha: config.alpha,
            gamma: config.gamma,
        }
    }

    /// Like [`new`](Self::new), but rejects `lambda`, `alpha` or `gamma` outside `[0,1]`
    pub fn try_new(lambda: f32, config: StepConfig) -> Result<Self> {
        ensure_interval!(lambda, 0.0, 1.0);
        config.validate()?;
        Ok(Self::new(lambda, config))
    }

    pub fn lambda(&self) -> f32 {
        self.lambda
    }

    /// Zero every trace, typically at the start of an episode
    pub fn reset_traces<S: Hashable>(traces: &mut TraceTable<S>) {
        traces.values_mut().for_each(|z| *z = 0.0);
    }

    /// Apply one TD(λ) step for the transition `state --reward--> next_state`
    ///
    /// **Errors**
    /// - [`DomainMismatch`](Error::DomainMismatch) if `traces` and `values` are not keyed by the same states
    /// - [`LookupFailure`](Error::LookupFailure) if either state is missing from `values`
    ///
    /// Neither table is modified when an error is returned.
    pub fn update<S: Hashable>(
        &self,
        state: S,
        reward: f32,
        next_state: S,
        values: &mut ValueTable<S>,
        traces: &mut TraceTable<S>,
    ) -> Result<()> {
        check_domain(values, traces)?;
        let value = lookup(values, &state)?;
        let next_value = lookup(values, &next_state)?;

        let delta = reward + self.gamma * next_value - value;
        trace!("td(λ) error {delta}");

        let decay = self.gamma * self.lambda;
        for (s, v) in values.iter_mut() {
            let Some(z) = traces.get_mut(s) else {
                continue;
            };
            *z = if *s == state { 1.0 } else { decay * *z };
            *v += self.alpha * delta * *z;
        }

        Ok(())
    }

    /// [`update`](Self::update) from a [`Transition`] record
    pub fn update_transition<S: Hashable>(
        &self,
        transition: &Transition<S>,
        values: &mut ValueTable<S>,
        traces: &mut TraceTable<S>,
    ) -> Result<()> {
        let &Transition {
            state,
            reward,
            next_state,
        } = transition;
        self.update(state, reward, next_state, values, traces)
    }
}

fn check_domain<S: Hashable>(values: &ValueTable<S>, traces: &TraceTable<S>) -> Result<()> {
    if values.len() == traces.len() && values.keys().all(|s| traces.contains_key(s)) {
        Ok(())
    } else {
        debug!(
            "rejected update: {} traces for {} values",
            traces.len(),
            values.len()
        );
        Err(Error::DomainMismatch {
            values: values.len(),
            traces: traces.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::tabular::{filled, zeros};

    #[test]
    fn replacing_trace() {
        let td = TDLambda::new(0.9, StepConfig::new(0.1, 1.0));
        let mut v = zeros(['a', 'b']);
        let mut z = zeros(['a', 'b']);
        z.insert('a', 5.0);

        td.update('a', 1.0, 'b', &mut v, &mut z).unwrap();

        assert_eq!(z[&'a'], 1.0);
        assert_eq!(v[&'a'], 0.1);
    }

    #[test]
    fn lambda_zero_reduces_to_td0() {
        let td = TDLambda::new(0.0, StepConfig::new(0.5, 0.9));
        let mut v = filled(['a', 'b', 'c'], 1.0);
        let mut z = filled(['a', 'b', 'c'], 0.3);

        td.update('b', 2.0, 'c', &mut v, &mut z).unwrap();

        // delta = 2 + 0.9 * 1 - 1 = 1.9
        assert_eq!(z[&'a'], 0.0);
        assert_eq!(z[&'b'], 1.0);
        assert_eq!(z[&'c'], 0.0);
        assert_eq!(v[&'a'], 1.0);
        assert_eq!(v[&'b'], 1.0 + 0.5 * (2.0 + 0.9 * 1.0 - 1.0));
        assert_eq!(v[&'c'], 1.0);
    }

    #[test]
    fn credit_flows_back_along_traces() {
        let td = TDLambda::new(1.0, StepConfig::new(0.5, 1.0));
        let mut v = zeros([0, 1, 2]);
        let mut z = zeros([0, 1, 2]);

        td.update(0, 0.0, 1, &mut v, &mut z).unwrap();
        td.update(1, 1.0, 2, &mut v, &mut z).unwrap();

        assert_eq!(v[&0], 0.5);
        assert_eq!(v[&1], 0.5);
        assert_eq!(v[&2], 0.0);
        assert_eq!(z[&0], 1.0);
        assert_eq!(z[&1], 1.0);
    }

    #[test]
    fn traces_decay_by_gamma_lambda() {
        let td = TDLambda::new(0.5, StepConfig::new(0.1, 0.5));
        let mut v = zeros(['a', 'b', 'c']);
        let mut z = zeros(['a', 'b', 'c']);

        td.update('a', 0.0, 'b', &mut v, &mut z).unwrap();
        td.update('b', 0.0, 'c', &mut v, &mut z).unwrap();

        assert_eq!(z[&'a'], 0.25);
        assert_eq!(z[&'b'], 1.0);
        assert_eq!(z[&'c'], 0.0);
    }

    #[test]
    fn domain_mismatch() {
        let td = TDLambda::new(0.5, StepConfig::default());
        let mut v = zeros(['a', 'b']);
        let before = v.clone();

        let mut missing = zeros(['a']);
        assert_eq!(
            td.update('a', 1.0, 'b', &mut v, &mut missing),
            Err(Error::DomainMismatch {
                values: 2,
                traces: 1
            })
        );
        assert_eq!(missing, zeros(['a']));

        let mut different = filled(['a', 'c'], 0.5);
        assert!(matches!(
            td.update('a', 1.0, 'b', &mut v, &mut different),
            Err(Error::DomainMismatch { .. })
        ));
        assert_eq!(different, filled(['a', 'c'], 0.5));
        assert_eq!(v, before);
    }

    #[test]
    fn unknown_state_is_lookup_failure() {
        let td = TDLambda::new(0.5, StepConfig::default());
        let mut v = zeros(['a', 'b']);
        let mut z = filled(['a', 'b'], 0.5);

        assert_eq!(
            td.update('a', 1.0, 'x', &mut v, &mut z),
            Err(Error::LookupFailure)
        );
        assert_eq!(z, filled(['a', 'b'], 0.5));
        assert_eq!(v, zeros(['a', 'b']));
    }

    #[test]
    fn reset_and_transition_record() {
        let td = TDLambda::new(1.0, StepConfig::new(1.0, 1.0));
        let mut v = zeros([0, 1]);
        let mut z = filled([0, 1], 0.7);

        TDLambda::reset_traces(&mut z);
        assert!(z.values().all(|&x| x == 0.0));

        td.update_transition(&Transition::new(0, 2.0, 1), &mut v, &mut z)
            .unwrap();
        assert_eq!(v[&0], 2.0);
        assert_eq!(v[&1], 0.0);
    }

    #[test]
    fn try_new_validates() {
        assert!(TDLambda::try_new(0.9, StepConfig::default()).is_ok());
        assert!(matches!(
            TDLambda::try_new(1.5, StepConfig::default()),
            Err(Error::InvalidArgument(_))
        ));
        assert!(TDLambda::try_new(0.9, StepConfig::new(0.1, -1.0)).is_err());
        assert_eq!(TDLambda::new(1.5, StepConfig::default()).lambda(), 1.5);
    }

    #[test]
    fn deterministic() {
        let td = TDLambda::new(0.7, StepConfig::new(0.1, 0.9));
        let steps = [(0, 0.5, 1), (1, -1.0, 2), (2, 0.25, 1), (1, 1.0, 3), (3, 0.0, 0)];

        // separately built tables, each with its own hash order
        let mut v1 = zeros(0..4);
        let mut z1 = zeros(0..4);
        let mut v2 = zeros((0..4).rev());
        let mut z2 = zeros([2, 0, 3, 1]);

        for _ in 0..3 {
            for (s, r, s2) in steps {
                td.update(s, r, s2, &mut v1, &mut z1).unwrap();
                td.update(s, r, s2, &mut v2, &mut z2).unwrap();
            }
        }

        for s in 0..4 {
            assert_eq!(v1[&s].to_bits(), v2[&s].to_bits(), "value of {s}");
            assert_eq!(z1[&s].to_bits(), z2[&s].to_bits(), "trace of {s}");
        }
    }
}
