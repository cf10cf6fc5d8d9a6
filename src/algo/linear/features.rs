use std::collections::HashMap;

use burn::tensor::{backend::Backend, Data, Shape, Tensor};

use crate::algo::tabular::Hashable;

/// Maps a state to its feature vector
///
/// Implementations must be pure and return the same dimension for every state; the update rules
/// reject any feature vector whose length differs from the parameter vector's.
///
/// Any `Fn(&S, &B::Device) -> Tensor<B, 1>` is a feature extractor.
pub trait FeatureExtractor<B: Backend, S> {
    fn features(&self, state: &S, device: &B::Device) -> Tensor<B, 1>;
}

impl<B, S, F> FeatureExtractor<B, S> for F
where
    B: Backend,
    F: Fn(&S, &B::Device) -> Tensor<B, 1>,
{
    fn features(&self, state: &S, device: &B::Device) -> Tensor<B, 1> {
        self(state, device)
    }
}

/// Build a 1-D tensor from raw feature values
pub fn feature_vector<B: Backend>(values: Vec<f32>, device: &B::Device) -> Tensor<B, 1> {
    let len = values.len();
    Tensor::from_floats(Data::new(values, Shape::new([len])), device)
}

/// One-hot features over an enumerable state space
///
/// The state-to-index bijection is fixed at construction. Linear TD(λ) over these features behaves
/// like tabular TD(λ) with accumulating traces. States that were not enumerated map to the zero
/// vector, which is the usual encoding of a terminal state.
///
/// That fallback is silent: a mistyped or unexpected state reads as value `0` and receives no update.
/// Use [`index_of`](Self::index_of) to confirm membership when a state might come from outside the
/// enumerated space.
#[derive(Debug, Clone)]
pub struct OneHot<S: Hashable> {
    index: HashMap<S, usize>,
}

impl<S: Hashable> OneHot<S> {
    /// Enumerate `states`; repeated states keep the index of their first occurrence
    pub fn new(states: impl IntoIterator<Item = S>) -> Self {
        let mut index = HashMap::new();
        for state in states {
            let next = index.len();
            index.entry(state).or_insert(next);
        }
        Self { index }
    }

    /// Feature dimension, the number of distinct enumerated states
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Position of `state`'s unit feature, or `None` for a state that will map to the zero vector
    pub fn index_of(&self, state: &S) -> Option<usize> {
        self.index.get(state).copied()
    }
}

impl<B: Backend, S: Hashable> FeatureExtractor<B, S> for OneHot<S> {
    fn features(&self, state: &S, device: &B::Device) -> Tensor<B, 1> {
        let mut values = vec![0.0; self.len()];
        if let Some(i) = self.index_of(state) {
            values[i] = 1.0;
        }
        feature_vector(values, device)
    }
}
