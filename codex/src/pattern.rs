use std::collections::BTreeSet;

use serde::Serialize;

use crate::{Board, Direction, ItemCounter, Kingdom, NegativeCounters, ResourceCounter, Slot};

/// A shape or symbol set that an objective rewards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Pattern {
    /// Three cards of one kingdom in a line, counted per full group of three.
    Diagonal {
        kingdom: Kingdom,
        direction: Direction,
    },
    /// Two cards of one kingdom stacked vertically, with a card of another
    /// kingdom at one corner of the stack's end.
    Tower {
        tower_kingdom: Kingdom,
        base_kingdom: Kingdom,
        base_corner: Direction,
    },
    Resources(ResourceCounter),
    Items(ItemCounter),
}

/// Finds a line of neighboring candidates along `direction`.
///
/// Starts from the first candidate, walks backwards to the start of its
/// line, then collects the whole line going forwards. If the line is shorter
/// than two, returns just the first candidate, so that the caller can discard
/// it and go on. Returns an empty list for no candidates.
pub fn find_aligned_run(candidates: &BTreeSet<Slot>, direction: Direction) -> Vec<Slot> {
    let Some(&first) = candidates.first() else {
        return Vec::new();
    };

    let backwards = direction.opposite();
    let mut start = first;
    while candidates.contains(&start.neighbor(backwards)) {
        start = start.neighbor(backwards);
    }

    let mut run = vec![start];
    let mut cursor = start.neighbor(direction);
    while candidates.contains(&cursor) {
        run.push(cursor);
        cursor = cursor.neighbor(direction);
    }

    if run.len() >= 2 {
        run
    } else {
        vec![first]
    }
}

impl Pattern {
    /// How many times the pattern occurs on the board.
    ///
    /// No card is used twice for the same pattern.
    pub fn count(&self, board: &Board) -> Result<u32, NegativeCounters> {
        match *self {
            Pattern::Diagonal { kingdom, direction } => Ok(count_diagonals(board, kingdom, direction)),
            Pattern::Tower {
                tower_kingdom,
                base_kingdom,
                base_corner,
            } => Ok(count_towers(board, tower_kingdom, base_kingdom, base_corner)),
            Pattern::Resources(required) => board.resources().times_contained(&required),
            Pattern::Items(required) => board.items().times_contained(&required),
        }
    }
}

fn count_diagonals(board: &Board, kingdom: Kingdom, direction: Direction) -> u32 {
    let mut candidates = board.kingdom_slots(kingdom);
    let mut count = 0;
    while !candidates.is_empty() {
        let run = find_aligned_run(&candidates, direction);
        for slot in &run {
            candidates.remove(slot);
        }
        count += (run.len() / 3) as u32;
    }
    count
}

fn count_towers(
    board: &Board,
    tower_kingdom: Kingdom,
    base_kingdom: Kingdom,
    base_corner: Direction,
) -> u32 {
    // Walk the stack towards the base, so that the base hangs off the second card
    let axis = match base_corner {
        Direction::SouthEast | Direction::SouthWest => Direction::South,
        _ => Direction::North,
    };

    let mut candidates = board.kingdom_slots(tower_kingdom);
    let mut count = 0;
    while !candidates.is_empty() {
        let run = find_aligned_run(&candidates, axis);
        let mut roof = 0;
        while roof + 1 < run.len() {
            let base = run[roof + 1].neighbor(base_corner);
            let has_base = board
                .card_at(base)
                .is_some_and(|placed| placed.kingdom() == Some(base_kingdom));
            if has_base {
                count += 1;
                roof += 2;
            } else {
                roof += 1;
            }
        }
        for slot in &run {
            candidates.remove(slot);
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::board::tests::{face, slot};
    use crate::{CardId, Corner, Item, Resource};

    const E: Corner = Corner::Empty;

    fn set(slots: &[(i32, i32)]) -> BTreeSet<Slot> {
        slots.iter().map(|&(h, v)| slot(h, v)).collect()
    }

    /// A board with an empty starter at the root and the given cards, placed in order.
    fn board_with(cards: &[(i32, i32, Kingdom)]) -> Board {
        let mut board = Board::new();
        board.place(Slot::ROOT, CardId(81).front(), &face(None, [E; 4])).unwrap();
        for (n, &(h, v, kingdom)) in cards.iter().enumerate() {
            board
                .place(slot(h, v), CardId(n as u32 + 1).front(), &face(Some(kingdom), [E; 4]))
                .unwrap();
        }
        board
    }

    #[test]
    fn straight_run_is_found_whole() {
        let candidates = set(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
        let run = find_aligned_run(&candidates, Direction::NorthEast);
        assert_eq!(run, vec![slot(0, 0), slot(1, 1), slot(2, 2), slot(3, 3), slot(4, 4)]);

        let run = find_aligned_run(&candidates, Direction::SouthWest);
        assert_eq!(run.len(), 5);
        assert_eq!(run[0], slot(4, 4));
    }

    #[test]
    fn run_starts_before_first_candidate() {
        let candidates = set(&[(-1, 1), (0, 0), (1, -1), (5, 5)]);
        let run = find_aligned_run(&candidates, Direction::NorthWest);
        assert_eq!(run, vec![slot(1, -1), slot(0, 0), slot(-1, 1)]);
    }

    #[test]
    fn isolated_slots_give_a_sentinel() {
        let candidates = set(&[(0, 0), (4, 4), (-2, 2)]);
        let run = find_aligned_run(&candidates, Direction::NorthEast);
        assert_eq!(run, vec![slot(-2, 2)]);
        assert!(find_aligned_run(&BTreeSet::new(), Direction::North).is_empty());
    }

    quickcheck! {
        fn runs_consume_every_candidate_once(slots: Vec<Slot>, direction: Direction) -> bool {
            let mut candidates: BTreeSet<Slot> = slots.into_iter().collect();
            let total = candidates.len();
            let mut consumed = 0;
            while !candidates.is_empty() {
                let run = find_aligned_run(&candidates, direction);
                for pair in run.windows(2) {
                    if pair[0].neighbor(direction) != pair[1] {
                        return false;
                    }
                }
                for slot in &run {
                    if !candidates.remove(slot) {
                        return false;
                    }
                }
                consumed += run.len();
            }
            consumed == total
        }
    }

    #[test]
    fn six_in_a_row_make_two_diagonals() {
        let cards: Vec<_> = (1..=6).map(|i| (i, i, Kingdom::Fungi)).collect();
        let board = board_with(&cards);
        let pattern = Pattern::Diagonal {
            kingdom: Kingdom::Fungi,
            direction: Direction::NorthEast,
        };
        assert_eq!(pattern.count(&board), Ok(2));

        let other_way = Pattern::Diagonal {
            kingdom: Kingdom::Fungi,
            direction: Direction::NorthWest,
        };
        assert_eq!(other_way.count(&board), Ok(0));
    }

    #[test]
    fn diagonal_ignores_other_kingdoms() {
        let board = board_with(&[
            (1, 1, Kingdom::Plant),
            (2, 2, Kingdom::Plant),
            (3, 3, Kingdom::Animal),
            (4, 4, Kingdom::Plant),
            (-1, -1, Kingdom::Plant),
        ]);
        let pattern = Pattern::Diagonal {
            kingdom: Kingdom::Plant,
            direction: Direction::NorthEast,
        };
        // (-1, -1), (1, 1), (2, 2) are not contiguous through the root
        assert_eq!(pattern.count(&board), Ok(0));
    }

    #[test]
    fn tower_with_base_at_bottom_right() {
        let board = board_with(&[
            (1, 1, Kingdom::Fungi),
            (1, -1, Kingdom::Fungi),
            (2, -2, Kingdom::Plant),
        ]);
        let pattern = Pattern::Tower {
            tower_kingdom: Kingdom::Fungi,
            base_kingdom: Kingdom::Plant,
            base_corner: Direction::SouthEast,
        };
        assert_eq!(pattern.count(&board), Ok(1));

        let wrong_corner = Pattern::Tower {
            tower_kingdom: Kingdom::Fungi,
            base_kingdom: Kingdom::Plant,
            base_corner: Direction::SouthWest,
        };
        assert_eq!(wrong_corner.count(&board), Ok(0));
    }

    #[test]
    fn tower_window_slides_past_misses() {
        // A stack of three: only the lower pair has its base
        let board = board_with(&[
            (1, 1, Kingdom::Insect),
            (0, 2, Kingdom::Plant),
            (1, 3, Kingdom::Insect),
            (1, -1, Kingdom::Insect),
            (0, -2, Kingdom::Animal),
        ]);
        let pattern = Pattern::Tower {
            tower_kingdom: Kingdom::Insect,
            base_kingdom: Kingdom::Animal,
            base_corner: Direction::SouthWest,
        };
        assert_eq!(pattern.count(&board), Ok(1));
    }

    #[test]
    fn tower_cards_are_not_shared() {
        // Both pairs of the column have a base, but the middle card can only be used once
        let board = board_with(&[
            (1, 1, Kingdom::Fungi),
            (1, -1, Kingdom::Fungi),
            (2, -2, Kingdom::Plant),
            (1, -3, Kingdom::Fungi),
            (2, -4, Kingdom::Plant),
        ]);
        let pattern = Pattern::Tower {
            tower_kingdom: Kingdom::Fungi,
            base_kingdom: Kingdom::Plant,
            base_corner: Direction::SouthEast,
        };
        assert_eq!(pattern.count(&board), Ok(1));
    }

    #[test]
    fn tower_with_base_on_top() {
        let board = board_with(&[
            (-1, -1, Kingdom::Animal),
            (-1, 1, Kingdom::Animal),
            (0, 2, Kingdom::Fungi),
        ]);
        let pattern = Pattern::Tower {
            tower_kingdom: Kingdom::Animal,
            base_kingdom: Kingdom::Fungi,
            base_corner: Direction::NorthEast,
        };
        assert_eq!(pattern.count(&board), Ok(1));
    }

    #[test]
    fn resource_and_item_sets() {
        let mut board = Board::new();
        let quill = Corner::Item(Item::Quill);
        let mut starter = face(
            None,
            [quill, Corner::Item(Item::Inkwell), Corner::Item(Item::Manuscript), quill],
        );
        starter.permanent = ResourceCounter::single(Resource::Fungi, 7);
        board.place(Slot::ROOT, CardId(81).front(), &starter).unwrap();

        let three_fungi = Pattern::Resources(ResourceCounter::single(Resource::Fungi, 3));
        assert_eq!(three_fungi.count(&board), Ok(2));
        assert_eq!(Pattern::Items(ItemCounter::new([1, 1, 1])).count(&board), Ok(1));
        assert_eq!(Pattern::Items(ItemCounter::single(Item::Quill, 2)).count(&board), Ok(1));
        assert_eq!(Pattern::Items(ItemCounter::single(Item::Inkwell, 2)).count(&board), Ok(0));
    }
}
