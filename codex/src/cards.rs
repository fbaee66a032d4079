use serde::{Deserialize, Serialize};

use crate::{
    Direction, Item, ItemCounter, Kingdom, Resource, ResourceCounter, GOLD_CARDS, RESOURCE_CARDS,
    STARTER_CARDS,
};

/// Identifies a card of the catalog.
///
/// Resource cards are numbered 1 to 40, gold cards 41 to 80 and starter
/// cards 81 to 86.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

/// What is printed on one corner of a card face.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    /// The corner is cut off. Nothing can ever be placed over it.
    Absent,
    /// The corner exists but shows no symbol.
    Empty,
    Resource(Resource),
    Item(Item),
}

/// How many points a face is worth when it is placed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointRule {
    None,
    Flat(u32),
    /// Points for every corner of other cards covered by this placement.
    PerCoveredCorner(u32),
    /// Points for every visible item of this kind, counted after placement.
    PerItem { points: u32, item: Item },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Resource,
    Gold,
    Starter,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Front,
    Back,
}

/// Names one face of one card.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceId {
    pub card: CardId,
    pub side: Side,
}

/// One side of a card, with everything the board needs to know about it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardFace {
    /// `None` for starter cards.
    pub kingdom: Option<Kingdom>,
    /// Indexed like [`Direction::DIAGONALS`]: top-left, top-right, bottom-left, bottom-right.
    pub corners: [Corner; 4],
    /// Resources in the center of the face, which can never be covered.
    pub permanent: ResourceCounter,
    /// Resources that must be visible on the board before this face may be placed.
    pub requirement: ResourceCounter,
    pub points: PointRule,
}

/// A card from the catalog.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub kind: CardKind,
    pub front: CardFace,
    pub back: CardFace,
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let side = match self.side {
            Side::Front => "front",
            Side::Back => "back",
        };
        write!(f, "{} ({})", self.card, side)
    }
}

impl CardId {
    /// Looks the card up in the catalog.
    pub fn card(self) -> Option<&'static Card> {
        let idx = self.0 as usize;
        match self.0 {
            1..=40 => RESOURCE_CARDS.get(idx - 1),
            41..=80 => GOLD_CARDS.get(idx - 41),
            81..=86 => STARTER_CARDS.get(idx - 81),
            _ => None,
        }
    }

    pub fn front(self) -> FaceId {
        FaceId {
            card: self,
            side: Side::Front,
        }
    }

    pub fn back(self) -> FaceId {
        FaceId {
            card: self,
            side: Side::Back,
        }
    }
}

impl Corner {
    pub fn is_absent(self) -> bool {
        self == Corner::Absent
    }

    /// What this corner adds to the board's counters while it is visible.
    pub fn contribution(self) -> (ResourceCounter, ItemCounter) {
        match self {
            Corner::Resource(r) => (ResourceCounter::single(r, 1), ItemCounter::zero()),
            Corner::Item(i) => (ResourceCounter::zero(), ItemCounter::single(i, 1)),
            Corner::Absent | Corner::Empty => (ResourceCounter::zero(), ItemCounter::zero()),
        }
    }
}

impl CardFace {
    /// The corner pointing in a diagonal direction.
    ///
    /// Straight directions have no corner and are reported as absent.
    pub fn corner(&self, direction: Direction) -> Corner {
        direction
            .corner_index()
            .map_or(Corner::Absent, |idx| self.corners[idx])
    }

    /// The back of a resource or gold card of the given kingdom.
    pub const fn back_of(kingdom: Kingdom) -> Self {
        Self {
            kingdom: Some(kingdom),
            corners: [Corner::Empty; 4],
            permanent: ResourceCounter::single(kingdom.resource(), 1),
            requirement: ResourceCounter::zero(),
            points: PointRule::None,
        }
    }
}

impl Card {
    pub fn face(&self, side: Side) -> &CardFace {
        match side {
            Side::Front => &self.front,
            Side::Back => &self.back,
        }
    }

    /// The kingdom of the card, as shown on its back.
    pub fn kingdom(&self) -> Option<Kingdom> {
        self.back.kingdom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_covers_the_whole_catalog() {
        for id in 1..=86 {
            let card = CardId(id).card().expect("card should exist");
            assert_eq!(card.id, CardId(id));
            let expected_kind = match id {
                1..=40 => CardKind::Resource,
                41..=80 => CardKind::Gold,
                _ => CardKind::Starter,
            };
            assert_eq!(card.kind, expected_kind);
        }
        assert!(CardId(0).card().is_none());
        assert!(CardId(87).card().is_none());
    }

    #[test]
    fn backs_carry_one_kingdom_resource() {
        for id in 1..=80 {
            let card = CardId(id).card().unwrap();
            let kingdom = card.kingdom().unwrap();
            assert_eq!(card.back, CardFace::back_of(kingdom));
            assert_eq!(card.front.kingdom, Some(kingdom));
        }
    }

    #[test]
    fn only_gold_fronts_have_requirements() {
        for id in 1..=86 {
            let card = CardId(id).card().unwrap();
            assert!(card.back.requirement.is_zero());
            assert_eq!(card.kind == CardKind::Gold, !card.front.requirement.is_zero());
        }
    }

    #[test]
    fn corner_lookup_by_direction() {
        let face = CardId(1).card().unwrap().front;
        for (idx, direction) in Direction::DIAGONALS.into_iter().enumerate() {
            assert_eq!(face.corner(direction), face.corners[idx]);
        }
        assert_eq!(face.corner(Direction::North), Corner::Absent);
    }
}
