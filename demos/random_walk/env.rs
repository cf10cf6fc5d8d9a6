use rand::seq::IteratorRandom;
use strum::VariantArray;

pub type Pos = i32;

/// Stands in for both ends of the walk in the value tables
pub const TERMINAL: Pos = -1;

#[derive(VariantArray, Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
}

/// Sutton & Barto's random walk over positions `0..LEN`
///
/// Stepping off the left end ends the episode with reward 0, off the right end with reward 1.
pub struct RandomWalk<const LEN: i32> {
    pos: Pos,
    pub steps: u32,
}

impl<const LEN: i32> RandomWalk<LEN> {
    pub fn new() -> Self {
        Self {
            pos: LEN / 2,
            steps: 0,
        }
    }

    pub fn states() -> impl Iterator<Item = Pos> {
        0..LEN
    }

    /// v(s) = (s + 1) / (LEN + 1)
    pub fn true_value(pos: Pos) -> f32 {
        (pos + 1) as f32 / (LEN + 1) as f32
    }

    pub fn step(&mut self, action: Action) -> (Option<Pos>, f32) {
        self.steps += 1;
        self.pos += match action {
            Action::Left => -1,
            Action::Right => 1,
        };

        if self.pos < 0 {
            (None, 0.0)
        } else if self.pos >= LEN {
            (None, 1.0)
        } else {
            (Some(self.pos), 0.0)
        }
    }

    pub fn reset(&mut self) -> Pos {
        self.pos = LEN / 2;
        self.steps = 0;
        self.pos
    }

    /// The evaluated policy: left or right with equal probability
    pub fn random_action(&self) -> Action {
        Action::VARIANTS
            .iter()
            .copied()
            .choose(&mut rand::thread_rng())
            .expect("Action has variants")
    }
}
