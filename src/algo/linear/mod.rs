//! Linear function approximation
//!
//! Parameters, traces, and features are 1-D float tensors of one fixed dimension `p`, so memory and
//! per-step cost depend on `p` rather than on the size of the state space. The estimate of a state is
//! `dot(w, f(state))`.

pub mod features;
pub mod td_lambda;

pub use features::{feature_vector, FeatureExtractor, OneHot};
pub use td_lambda::LinearTDLambda;
