use serde::Serialize;

use crate::{
    Board, Direction, ItemCounter, Kingdom, NegativeCounters, Pattern, Resource,
    ResourceCounter, UnknownObjective,
};

/// An objective card: points for every occurrence of a pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Objective {
    pub id: usize,
    /// Points per occurrence.
    pub bonus: u32,
    pub pattern: Pattern,
}

const fn diagonal(id: usize, kingdom: Kingdom, direction: Direction) -> Objective {
    Objective {
        id,
        bonus: 2,
        pattern: Pattern::Diagonal { kingdom, direction },
    }
}

const fn tower(id: usize, tower_kingdom: Kingdom, base_kingdom: Kingdom, base_corner: Direction) -> Objective {
    Objective {
        id,
        bonus: 3,
        pattern: Pattern::Tower {
            tower_kingdom,
            base_kingdom,
            base_corner,
        },
    }
}

const fn resource_set(id: usize, resource: Resource) -> Objective {
    Objective {
        id,
        bonus: 2,
        pattern: Pattern::Resources(ResourceCounter::single(resource, 3)),
    }
}

const fn item_set(id: usize, bonus: u32, required: [i32; 3]) -> Objective {
    Objective {
        id,
        bonus,
        pattern: Pattern::Items(ItemCounter::new(required)),
    }
}

#[rustfmt::skip]
pub static OBJECTIVES: [Objective; 16] = [
    diagonal(0, Kingdom::Fungi, Direction::NorthEast),
    diagonal(1, Kingdom::Plant, Direction::NorthWest),
    diagonal(2, Kingdom::Animal, Direction::NorthEast),
    diagonal(3, Kingdom::Insect, Direction::NorthWest),
    tower(4, Kingdom::Fungi, Kingdom::Plant, Direction::SouthEast),
    tower(5, Kingdom::Plant, Kingdom::Insect, Direction::SouthWest),
    tower(6, Kingdom::Animal, Kingdom::Fungi, Direction::NorthEast),
    tower(7, Kingdom::Insect, Kingdom::Animal, Direction::NorthWest),
    resource_set(8, Resource::Fungi),
    resource_set(9, Resource::Plant),
    resource_set(10, Resource::Animal),
    resource_set(11, Resource::Insect),
    // Item counters are ordered quill, inkwell, manuscript
    item_set(12, 3, [1, 1, 1]),
    item_set(13, 2, [0, 0, 2]),
    item_set(14, 2, [0, 2, 0]),
    item_set(15, 2, [2, 0, 0]),
];

impl Objective {
    pub fn by_id(id: usize) -> Result<&'static Objective, UnknownObjective> {
        OBJECTIVES.get(id).ok_or(UnknownObjective { id })
    }

    /// The points this objective is worth on the board.
    pub fn score(&self, board: &Board) -> Result<u32, NegativeCounters> {
        Ok(self.bonus * self.pattern.count(board)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tests::face;
    use crate::{CardId, Slot};

    #[test]
    fn ids_match_positions() {
        for (idx, objective) in OBJECTIVES.iter().enumerate() {
            assert_eq!(objective.id, idx);
            assert_eq!(Objective::by_id(idx), Ok(objective));
        }
        assert_eq!(Objective::by_id(16), Err(UnknownObjective { id: 16 }));
    }

    #[test]
    fn score_multiplies_bonus() {
        let mut board = Board::new();
        let mut starter = face(None, [crate::Corner::Empty; 4]);
        starter.permanent = ResourceCounter::new([0, 0, 7, 0]);
        board.place(Slot::ROOT, CardId(81).front(), &starter).unwrap();
        assert_eq!(Objective::by_id(8).unwrap().score(&board), Ok(4));
        assert_eq!(Objective::by_id(9).unwrap().score(&board), Ok(0));
        assert_eq!(Objective::by_id(12).unwrap().score(&board), Ok(0));
    }
}
