use serde::{Deserialize, Serialize};

use crate::{Board, CardId};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    Red,
    Blue,
    Green,
    Yellow,
}

impl PlayerColor {
    /// Colors in the order in which they are handed out.
    pub const ALL: [PlayerColor; 4] = [
        PlayerColor::Red,
        PlayerColor::Blue,
        PlayerColor::Green,
        PlayerColor::Yellow,
    ];
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Points from placed cards.
    pub cards: u32,
    /// Points from objectives, only known at the end of the match.
    pub objectives: u32,
}

impl Score {
    pub fn total(&self) -> u32 {
        self.cards + self.objectives
    }
}

/// The state for a single player during one match.
#[derive(Clone, Debug)]
pub struct PlayerState {
    pub nickname: String,
    pub color: PlayerColor,
    pub hand: Vec<CardId>,
    pub board: Board,
    pub score: Score,
    /// The starter card dealt to this player.
    pub starter: CardId,
    /// The two objectives to choose the secret one from.
    pub offered_objectives: [usize; 2],
    pub secret_objective: Option<usize>,
}

impl PlayerState {
    pub fn new(
        nickname: String,
        color: PlayerColor,
        starter: CardId,
        hand: Vec<CardId>,
        offered_objectives: [usize; 2],
    ) -> Self {
        Self {
            nickname,
            color,
            hand,
            board: Board::new(),
            score: Score::default(),
            starter,
            offered_objectives,
            secret_objective: None,
        }
    }

    pub fn starter_placed(&self) -> bool {
        !self.board.is_empty()
    }

    /// Does this player have anything to place, and anywhere to place it?
    pub fn can_place(&self) -> bool {
        !self.hand.is_empty() && !self.board.available_slots().is_empty()
    }
}
