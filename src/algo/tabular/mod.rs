use std::collections::HashMap;

use log::debug;

use crate::error::{Error, Result};

pub mod every_visit_mc;
pub mod td0;
pub mod td_lambda;

pub use every_visit_mc::EveryVisitMC;
pub use td0::TD0;
pub use td_lambda::TDLambda;

/// A trait for state types that can be used as keys in a [`HashMap`]
pub trait Hashable: Copy + Eq + std::hash::Hash {}

impl<T> Hashable for T where T: Copy + Eq + std::hash::Hash {}

/// State value estimates V, keyed by every state in the known domain
pub type ValueTable<S> = HashMap<S, f32>;

/// Eligibility traces z, keyed by the same states as the [`ValueTable`] they accompany
pub type TraceTable<S> = HashMap<S, f32>;

/// Seed a table with `value` for every state in the domain
pub fn filled<S: Hashable>(states: impl IntoIterator<Item = S>, value: f32) -> HashMap<S, f32> {
    states.into_iter().map(|s| (s, value)).collect()
}

/// Seed a table with `0.0` for every state in the domain
pub fn zeros<S: Hashable>(states: impl IntoIterator<Item = S>) -> HashMap<S, f32> {
    filled(states, 0.0)
}

/// Current estimate for `state`, or [`Error::LookupFailure`] if it is outside the domain
fn lookup<S: Hashable>(values: &ValueTable<S>, state: &S) -> Result<f32> {
    values.get(state).copied().ok_or_else(outside_domain)
}

/// Mutable estimate for `state`, or [`Error::LookupFailure`] if it is outside the domain
fn lookup_mut<'a, S: Hashable>(values: &'a mut ValueTable<S>, state: &S) -> Result<&'a mut f32> {
    values.get_mut(state).ok_or_else(outside_domain)
}

fn outside_domain() -> Error {
    debug!("rejected update: state outside the value domain");
    Error::LookupFailure
}
