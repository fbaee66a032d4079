use serde::{Deserialize, Serialize};

/// The rules that decide when a match ends, plus the shuffling seed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// A player reaching this many points starts the last round.
    pub score_threshold: u32,
    /// Play one more full round after the round in which the end was triggered.
    pub extra_round: bool,
    /// Seed for all decks. Without it, every match is shuffled differently.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            score_threshold: 20,
            extra_round: false,
            seed: None,
        }
    }
}

impl GameConfig {
    /// A seed for one of the match's dealers, distinct per dealer.
    pub(crate) fn dealer_seed(&self, dealer: u64) -> Option<u64> {
        self.seed
            .map(|seed| seed.wrapping_add(dealer.wrapping_mul(0x9E3779B97F4A7C15)))
    }
}
