use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::{
    CardFace, CardId, Direction, FaceId, IllegalPlacement, ItemCounter, Kingdom, PointRule,
    ResourceCounter, Side, Slot,
};

/// A card lying on a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PlacedCard {
    pub face_id: FaceId,
    pub face: CardFace,
    /// Which corners are hidden under a later card, indexed like [`Direction::DIAGONALS`].
    covered: [bool; 4],
}

/// The personal playing area of one player.
///
/// Starts out empty with only the root slot available. Every placement
/// opens the slots diagonally next to the new card, except where the card's
/// corner is absent: such a slot is blocked and never opens again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cards: HashMap<Slot, PlacedCard>,
    /// Slots in the order in which they were filled.
    order: Vec<Slot>,
    resources: ResourceCounter,
    items: ItemCounter,
    /// Unoccupied slots that touch an occupied one and are not blocked.
    available: BTreeSet<Slot>,
    blocked: BTreeSet<Slot>,
}

impl PlacedCard {
    pub fn card(&self) -> CardId {
        self.face_id.card
    }

    pub fn side(&self) -> Side {
        self.face_id.side
    }

    pub fn kingdom(&self) -> Option<Kingdom> {
        self.face.kingdom
    }

    pub fn is_covered(&self, corner: Direction) -> bool {
        corner.corner_index().is_some_and(|idx| self.covered[idx])
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cards: HashMap::new(),
            order: Vec::new(),
            resources: ResourceCounter::zero(),
            items: ItemCounter::zero(),
            available: BTreeSet::from([Slot::ROOT]),
            blocked: BTreeSet::new(),
        }
    }

    /// Places a face at a slot and returns the points it scores.
    ///
    /// The new card lies on top of its neighbors: it hides the neighbors'
    /// corners that it overlaps, and all of its own corners stay visible.
    ///
    /// If an error is returned, the board is unmodified.
    pub fn place(
        &mut self,
        slot: Slot,
        face_id: FaceId,
        face: &CardFace,
    ) -> Result<u32, IllegalPlacement> {
        if self.cards.contains_key(&slot) {
            return Err(IllegalPlacement::AlreadyOccupied { slot });
        }
        if !self.available.contains(&slot) {
            return Err(IllegalPlacement::NotAvailable { slot });
        }
        if !self.resources.covers(&face.requirement) {
            return Err(IllegalPlacement::Unaffordable {
                required: face.requirement,
                visible: self.resources,
            });
        }

        // Hide the corners of the cards underneath
        let mut covered_corners = 0;
        for (direction, neighbor_slot) in slot.diagonal_neighbors() {
            if let Some(neighbor) = self.cards.get_mut(&neighbor_slot) {
                let facing = direction.opposite();
                let Some(idx) = facing.corner_index() else {
                    continue;
                };
                if neighbor.covered[idx] {
                    continue;
                }
                neighbor.covered[idx] = true;
                let (resources, items) = neighbor.face.corners[idx].contribution();
                self.resources -= resources;
                self.items -= items;
                covered_corners += 1;
            }
        }

        self.resources += face.permanent;
        for corner in face.corners {
            let (resources, items) = corner.contribution();
            self.resources += resources;
            self.items += items;
        }

        self.cards.insert(
            slot,
            PlacedCard {
                face_id,
                face: *face,
                covered: [false; 4],
            },
        );
        self.order.push(slot);
        self.available.remove(&slot);

        for (direction, neighbor_slot) in slot.diagonal_neighbors() {
            if self.cards.contains_key(&neighbor_slot) {
                continue;
            }
            if face.corner(direction).is_absent() {
                self.blocked.insert(neighbor_slot);
                self.available.remove(&neighbor_slot);
            } else if !self.blocked.contains(&neighbor_slot) {
                self.available.insert(neighbor_slot);
            }
        }

        Ok(self.points_for(face, covered_corners))
    }

    // Evaluated after the counters include the new card.
    fn points_for(&self, face: &CardFace, covered_corners: u32) -> u32 {
        match face.points {
            PointRule::None => 0,
            PointRule::Flat(points) => points,
            PointRule::PerCoveredCorner(points) => points * covered_corners,
            PointRule::PerItem { points, item } => {
                points * u32::try_from(self.items.get(item)).unwrap_or(0)
            }
        }
    }

    /// The slots where the next card may be placed.
    pub fn available_slots(&self) -> &BTreeSet<Slot> {
        &self.available
    }

    /// The slots holding a card, in placement order.
    pub fn covered_slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.order.iter().copied()
    }

    pub fn card_at(&self, slot: Slot) -> Option<&PlacedCard> {
        self.cards.get(&slot)
    }

    /// The slots holding a card of the given kingdom.
    pub fn kingdom_slots(&self, kingdom: Kingdom) -> BTreeSet<Slot> {
        self.cards
            .iter()
            .filter(|(_, placed)| placed.kingdom() == Some(kingdom))
            .map(|(&slot, _)| slot)
            .collect()
    }

    /// Visible resources, from uncovered corners and card centers.
    pub fn resources(&self) -> ResourceCounter {
        self.resources
    }

    /// Visible items on uncovered corners.
    pub fn items(&self) -> ItemCounter {
        self.items
    }

    pub fn placement_order(&self) -> &[Slot] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
