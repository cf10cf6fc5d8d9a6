use burn::tensor::{backend::Backend, ElementConversion, Tensor};
use log::{debug, trace};

use crate::{
    algo::StepConfig,
    ensure_interval,
    error::{Error, Result},
};

use super::FeatureExtractor;

/// TD(λ) with linear function approximation and accumulating traces
///
/// The estimate of a state is v̂(s) = w<sup>T</sup>f(s). For a transition `s --r--> s'`:
///
/// - δ = r + γw<sup>T</sup>f(s') - w<sup>T</sup>f(s)
/// - z ← f(s) + γλz
/// - w ← w + αδz
///
/// The trace is a single vector of the parameters' dimension, so nothing here grows with the
/// state space. Features are added to the trace rather than replacing it, because there is no
/// discrete state identity to replace on.
///
/// ### Generics
/// - `F` - The [`FeatureExtractor`] shared by every update; it is only ever read
#[derive(Debug, Clone)]
pub struct LinearTDLambda<F> {
    extractor: F,
    lambda: f32,
    alpha: f32,
    gamma: f32,
}

impl<F> LinearTDLambda<F> {
    /// Initialize with a feature extractor and trace decay `lambda`; no range checks are applied
    pub fn new(extractor: F, lambda: f32, config: StepConfig) -> Self {
        Self {
            extractor,
            lambda,
            alpha: config.alpha,
            gamma: config.gamma,
        }
    }

    /// Like [`new`](Self::new), but rejects `lambda`, `alpha` or `gamma` outside `[0,1]`
    pub fn try_new(extractor: F, lambda: f32, config: StepConfig) -> Result<Self> {
        ensure_interval!(lambda, 0.0, 1.0);
        config.validate()?;
        Ok(Self::new(extractor, lambda, config))
    }

    pub fn extractor(&self) -> &F {
        &self.extractor
    }

    pub fn lambda(&self) -> f32 {
        self.lambda
    }

    /// Replace the trace with a zero vector of the same dimension, typically at the start of an episode
    pub fn reset_traces<B: Backend>(traces: &mut Tensor<B, 1>) {
        *traces = Tensor::zeros(traces.dims(), &traces.device());
    }

    /// Current estimate w<sup>T</sup>f(state)
    ///
    /// **Errors** with [`DimensionMismatch`](Error::DimensionMismatch) if the features of `state`
    /// do not have the dimension of `weights`.
    pub fn value<B, S>(&self, state: &S, weights: &Tensor<B, 1>) -> Result<f32>
    where
        B: Backend,
        F: FeatureExtractor<B, S>,
    {
        let features = self.extractor.features(state, &weights.device());
        check_dim(weights, &features)?;
        Ok(dot(weights, &features))
    }

    /// Apply one TD(λ) step for the transition `state --reward--> next_state`
    ///
    /// **Errors** with [`DimensionMismatch`](Error::DimensionMismatch) if either state's features or
    /// `traces` do not have the dimension of `weights`, in which case neither tensor is replaced.
    pub fn update<B, S>(
        &self,
        state: &S,
        reward: f32,
        next_state: &S,
        weights: &mut Tensor<B, 1>,
        traces: &mut Tensor<B, 1>,
    ) -> Result<()>
    where
        B: Backend,
        F: FeatureExtractor<B, S>,
    {
        let device = weights.device();
        let f_x = self.extractor.features(state, &device);
        let f_y = self.extractor.features(next_state, &device);
        check_dim(weights, &f_x)?;
        check_dim(weights, &f_y)?;
        check_dim(weights, traces)?;

        let delta = reward + self.gamma * dot(weights, &f_y) - dot(weights, &f_x);
        trace!("linear td(λ) error {delta}");

        *traces = f_x + traces.clone().mul_scalar(self.gamma * self.lambda);
        *weights = weights.clone() + traces.clone().mul_scalar(self.alpha * delta);

        Ok(())
    }
}

fn dot<B: Backend>(a: &Tensor<B, 1>, b: &Tensor<B, 1>) -> f32 {
    (a.clone() * b.clone()).sum().into_scalar().elem()
}

fn check_dim<B: Backend>(weights: &Tensor<B, 1>, other: &Tensor<B, 1>) -> Result<()> {
    let [expected] = weights.dims();
    let [actual] = other.dims();
    if expected == actual {
        Ok(())
    } else {
        debug!("rejected update: vector of dimension {actual} against {expected} parameters");
        Err(Error::DimensionMismatch { expected, actual })
    }
}
