use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How the trainer reorders samples at the start of every epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShuffleMode {
    /// Walks forward and swaps item `i` with an item drawn from `[0, i]`.
    #[default]
    Prefix,
    /// `rand`'s slice shuffle.
    Uniform,
}

/// Reorders `items` in place. The multiset of items never changes.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], mode: ShuffleMode, rng: &mut R) {
    match mode {
        ShuffleMode::Prefix => {
            for i in 0..items.len() {
                let j = rng.gen_range(0..=i);
                items.swap(i, j);
            }
        }
        ShuffleMode::Uniform => items.shuffle(rng),
    }
}
