use crate::{CardId, DeckKind, FaceId, Phase, ResourceCounter, Slot};

/// The error type for [`Slot::new()`], for a coordinate pair of mixed parity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidSlot {
    pub h: i32,
    pub v: i32,
}

impl std::error::Error for InvalidSlot {}

impl std::fmt::Display for InvalidSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) is not a slot, both coordinates must be even or both odd",
            self.h, self.v
        )
    }
}

/// The error type for [`Board::place()`](crate::Board::place).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalPlacement {
    AlreadyOccupied {
        slot: Slot,
    },
    NotAvailable {
        slot: Slot,
    },
    Unaffordable {
        required: ResourceCounter,
        visible: ResourceCounter,
    },
}

impl std::error::Error for IllegalPlacement {}

impl std::fmt::Display for IllegalPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlacement::AlreadyOccupied { slot } =>
                write!(f, "There is already a card at {}", slot),
            IllegalPlacement::NotAvailable { slot } =>
                write!(f, "No card can be placed at {}", slot),
            IllegalPlacement::Unaffordable { required, visible } =>
                write!(f, "The card requires resources {:?}, but only {:?} are visible", required.counts(), visible.counts()),
        }
    }
}

/// Returned when drawing from an exhausted [`Dealer`](crate::Dealer).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyDealer;

impl std::error::Error for EmptyDealer {}

impl std::fmt::Display for EmptyDealer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tried to draw from an empty dealer")
    }
}

/// A board counter went below zero. This is a bug, not a bad move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NegativeCounters;

impl std::error::Error for NegativeCounters {}

impl std::fmt::Display for NegativeCounters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "A board holds a negative resource or item count")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownObjective {
    pub id: usize,
}

impl std::error::Error for UnknownObjective {}

impl std::fmt::Display for UnknownObjective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "There is no objective with id {}", self.id)
    }
}

/// The error type for all commands on a [`Game`](crate::Game).
///
/// A command that fails leaves the game untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    InvalidPlayerCount { count: usize },
    DuplicatePlayer { nickname: String },
    UnknownPlayer { nickname: String },
    IncorrectPhase { phase: Phase },
    NotYourTurn,
    UnknownCard { card: CardId },
    CardNotInHand { card: CardId },
    InvalidFace { card: CardId, face: FaceId },
    IllegalPlacement(IllegalPlacement),
    EmptyDealer { deck: DeckKind },
    CardNotFaceUp { card: CardId },
    UnknownObjective(UnknownObjective),
    ObjectiveNotOffered { id: usize },
    ObjectiveAlreadyChosen,
    StarterNotPlaced,
    StarterAlreadyPlaced,
    NegativeCounters(NegativeCounters),
    /// A dealer ran out while dealing the opening hands.
    SetupExhausted,
}

impl GameError {
    /// Is this an internal invariant violation, after which the match
    /// should be aborted instead of just rejecting the command?
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GameError::NegativeCounters(_) | GameError::SetupExhausted
        )
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IllegalPlacement(err) => Some(err),
            GameError::UnknownObjective(err) => Some(err),
            GameError::NegativeCounters(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidPlayerCount { count } => {
                write!(f, "A game needs 2 to 4 players, got {}", count)
            }
            GameError::DuplicatePlayer { nickname } => {
                write!(f, "The nickname '{}' is used twice", nickname)
            }
            GameError::UnknownPlayer { nickname } => {
                write!(f, "There is no player called '{}' in this game", nickname)
            }
            GameError::IncorrectPhase { phase } => {
                write!(f, "This action is not allowed during the {:?} phase", phase)
            }
            GameError::NotYourTurn => write!(f, "It is another player's turn"),
            GameError::UnknownCard { card } => write!(f, "There is no card {}", card),
            GameError::CardNotInHand { card } => {
                write!(f, "Tried to play card {}, which is not in the player's hand", card)
            }
            GameError::InvalidFace { card, face } => {
                write!(f, "Face {} does not belong to card {}", face, card)
            }
            GameError::IllegalPlacement(_) => write!(f, "The card cannot be placed there"),
            GameError::EmptyDealer { deck } => write!(f, "The {:?} deck is empty", deck),
            GameError::CardNotFaceUp { card } => {
                write!(f, "Card {} is not face up on the table", card)
            }
            GameError::UnknownObjective(_) => write!(f, "Unknown objective"),
            GameError::ObjectiveNotOffered { id } => {
                write!(f, "Objective {} was not offered to this player", id)
            }
            GameError::ObjectiveAlreadyChosen => {
                write!(f, "The secret objective has already been chosen")
            }
            GameError::StarterNotPlaced => {
                write!(f, "The starter card must be placed before choosing an objective")
            }
            GameError::StarterAlreadyPlaced => write!(f, "The starter card was already placed"),
            GameError::NegativeCounters(_) => write!(f, "Scoring failed on a corrupted board"),
            GameError::SetupExhausted => write!(f, "Not enough cards to deal to every player"),
        }
    }
}

impl From<IllegalPlacement> for GameError {
    fn from(err: IllegalPlacement) -> Self {
        GameError::IllegalPlacement(err)
    }
}

impl From<UnknownObjective> for GameError {
    fn from(err: UnknownObjective) -> Self {
        GameError::UnknownObjective(err)
    }
}

impl From<NegativeCounters> for GameError {
    fn from(err: NegativeCounters) -> Self {
        GameError::NegativeCounters(err)
    }
}
