use serde::{Deserialize, Serialize};

use crate::{
    Board, CardId, FaceId, ItemCounter, Kingdom, Phase, PlayerColor, PlayerState, ResourceCounter,
    Score, Slot,
};

/// One of the two draw piles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckKind {
    Resource,
    Gold,
}

impl DeckKind {
    pub fn other(self) -> DeckKind {
        match self {
            DeckKind::Resource => DeckKind::Gold,
            DeckKind::Gold => DeckKind::Resource,
        }
    }
}

/// How a match ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Outcome {
    /// The last round was played. Several winners share a tie.
    Finished { winners: Vec<String> },
    /// Too few players were left to go on. Nobody wins.
    Abandoned { left: String },
}

/// A single placement, as reported in the snapshot after it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub player: String,
    pub slot: Slot,
    pub face: FaceId,
    pub points: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedCardView {
    pub slot: Slot,
    pub face: FaceId,
}

/// What everybody can see of a player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub nickname: String,
    pub color: PlayerColor,
    pub score: Score,
    pub hand_size: usize,
    pub objective_chosen: bool,
    /// In placement order.
    pub cards: Vec<PlacedCardView>,
    pub available_slots: Vec<Slot>,
    pub resources: ResourceCounter,
    pub items: ItemCounter,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckView {
    pub remaining: usize,
    /// The kingdom on the back of the top card.
    pub top_kingdom: Option<Kingdom>,
    pub face_up: [Option<CardId>; 2],
}

/// The public state of a match, returned by every command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub current_player: Option<String>,
    pub turn: u32,
    pub last_round: bool,
    pub players: Vec<PlayerView>,
    pub resource_deck: DeckView,
    pub gold_deck: DeckView,
    pub common_objectives: [usize; 2],
    pub last_placement: Option<Placement>,
    pub outcome: Option<Outcome>,
}

impl PlayerView {
    pub fn new(player: &PlayerState) -> Self {
        let board: &Board = &player.board;
        Self {
            nickname: player.nickname.clone(),
            color: player.color,
            score: player.score,
            hand_size: player.hand.len(),
            objective_chosen: player.secret_objective.is_some(),
            cards: board
                .covered_slots()
                .filter_map(|slot| {
                    board.card_at(slot).map(|placed| PlacedCardView {
                        slot,
                        face: placed.face_id,
                    })
                })
                .collect(),
            available_slots: board.available_slots().iter().copied().collect(),
            resources: board.resources(),
            items: board.items(),
        }
    }
}
