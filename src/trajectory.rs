/// A single observed step of interaction under the evaluated policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition<S> {
    /// The state the step started from
    pub state: S,
    /// The reward received for the step
    pub reward: f32,
    /// The state the step ended in
    pub next_state: S,
}

impl<S> Transition<S> {
    pub fn new(state: S, reward: f32, next_state: S) -> Self {
        Self {
            state,
            reward,
            next_state,
        }
    }
}

/// A completed episode, stored as two aligned sequences
///
/// `states[t]` is X<sub>t</sub> and `rewards[t]` is R<sub>t+1</sub>, the reward received on leaving it.
/// The fields are private so the two sequences can never drift apart in length.
#[derive(Debug, Clone, PartialEq)]
pub struct Episode<S> {
    states: Vec<S>,
    rewards: Vec<f32>,
}

impl<S> Default for Episode<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Episode<S> {
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            rewards: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            states: Vec::with_capacity(capacity),
            rewards: Vec::with_capacity(capacity),
        }
    }

    /// Record that `state` was left with `reward`
    pub fn push(&mut self, state: S, reward: f32) {
        self.states.push(state);
        self.rewards.push(reward);
    }

    /// Number of steps T
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// States visited, X<sub>0</sub>..X<sub>T-1</sub>
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// Rewards received, R<sub>1</sub>..R<sub>T</sub>
    pub fn rewards(&self) -> &[f32] {
        &self.rewards
    }

    /// Forget all recorded steps, keeping the allocation
    pub fn clear(&mut self) {
        self.states.clear();
        self.rewards.clear();
    }
}

impl<S> FromIterator<Transition<S>> for Episode<S> {
    /// Unzip consecutive transitions into an episode; each transition's `next_state` is implied by the one after it
    fn from_iter<I: IntoIterator<Item = Transition<S>>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let episode = Self::with_capacity(iter.size_hint().0);

        iter.fold(episode, |mut ep, t| {
            ep.push(t.state, t.reward);
            ep
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn episode_from_transitions() {
        let transitions = [
            Transition::new('a', 1.0, 'b'),
            Transition::new('b', 2.0, 'a'),
            Transition::new('a', 3.0, 'z'),
        ];
        let episode: Episode<char> = transitions.into_iter().collect();

        assert_eq!(episode.len(), 3);
        assert_eq!(episode.states(), ['a', 'b', 'a']);
        assert_eq!(episode.rewards(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn episode_push_and_clear() {
        let mut episode = Episode::new();
        assert!(episode.is_empty());

        episode.push(0, -1.0);
        episode.push(1, 0.5);
        assert_eq!(episode.len(), 2);
        assert_eq!(episode.states().len(), episode.rewards().len());

        episode.clear();
        assert!(episode.is_empty());
        assert!(episode.rewards().is_empty());
    }
}
