//! The fixed set of playing cards.

use crate::{
    Card, CardFace, CardId, CardKind, Corner, Item, Kingdom, PointRule, Resource,
    ResourceCounter,
};

const X: Corner = Corner::Absent;
const E: Corner = Corner::Empty;
const P: Corner = Corner::Resource(Resource::Plant);
const A: Corner = Corner::Resource(Resource::Animal);
const F: Corner = Corner::Resource(Resource::Fungi);
const I: Corner = Corner::Resource(Resource::Insect);
const Q: Corner = Corner::Item(Item::Quill);
const K: Corner = Corner::Item(Item::Inkwell);
const M: Corner = Corner::Item(Item::Manuscript);

const PLANT: Kingdom = Kingdom::Plant;
const ANIMAL: Kingdom = Kingdom::Animal;
const FUNGI: Kingdom = Kingdom::Fungi;
const INSECT: Kingdom = Kingdom::Insect;

const fn resource_card(id: u32, kingdom: Kingdom, corners: [Corner; 4], points: u32) -> Card {
    Card {
        id: CardId(id),
        kind: CardKind::Resource,
        front: CardFace {
            kingdom: Some(kingdom),
            corners,
            permanent: ResourceCounter::zero(),
            requirement: ResourceCounter::zero(),
            points: if points == 0 {
                PointRule::None
            } else {
                PointRule::Flat(points)
            },
        },
        back: CardFace::back_of(kingdom),
    }
}

/// `requirement` is ordered plant, animal, fungi, insect.
const fn gold_card(
    id: u32,
    kingdom: Kingdom,
    corners: [Corner; 4],
    requirement: [i32; 4],
    points: PointRule,
) -> Card {
    Card {
        id: CardId(id),
        kind: CardKind::Gold,
        front: CardFace {
            kingdom: Some(kingdom),
            corners,
            permanent: ResourceCounter::zero(),
            requirement: ResourceCounter::new(requirement),
            points,
        },
        back: CardFace::back_of(kingdom),
    }
}

/// `permanent` is ordered plant, animal, fungi, insect.
const fn starter_card(
    id: u32,
    front_corners: [Corner; 4],
    permanent: [i32; 4],
    back_corners: [Corner; 4],
) -> Card {
    Card {
        id: CardId(id),
        kind: CardKind::Starter,
        front: CardFace {
            kingdom: None,
            corners: front_corners,
            permanent: ResourceCounter::new(permanent),
            requirement: ResourceCounter::zero(),
            points: PointRule::None,
        },
        back: CardFace {
            kingdom: None,
            corners: back_corners,
            permanent: ResourceCounter::zero(),
            requirement: ResourceCounter::zero(),
            points: PointRule::None,
        },
    }
}

const fn per_item(item: Item) -> PointRule {
    PointRule::PerItem { points: 1, item }
}

const COVERED: PointRule = PointRule::PerCoveredCorner(2);

#[rustfmt::skip]
pub static RESOURCE_CARDS: [Card; 40] = [
    resource_card(1, FUNGI, [F, E, F, X], 0),
    resource_card(2, FUNGI, [F, F, X, E], 0),
    resource_card(3, FUNGI, [X, E, F, F], 0),
    resource_card(4, FUNGI, [E, X, F, F], 0),
    resource_card(5, FUNGI, [X, Q, P, F], 0),
    resource_card(6, FUNGI, [K, F, X, A], 0),
    resource_card(7, FUNGI, [F, X, M, I], 0),
    resource_card(8, FUNGI, [E, F, E, X], 1),
    resource_card(9, FUNGI, [F, X, E, E], 1),
    resource_card(10, FUNGI, [X, E, E, F], 1),
    resource_card(11, PLANT, [P, E, P, X], 0),
    resource_card(12, PLANT, [P, P, X, E], 0),
    resource_card(13, PLANT, [X, E, P, P], 0),
    resource_card(14, PLANT, [E, X, P, P], 0),
    resource_card(15, PLANT, [X, P, I, Q], 0),
    resource_card(16, PLANT, [F, X, K, P], 0),
    resource_card(17, PLANT, [M, P, A, X], 0),
    resource_card(18, PLANT, [E, P, E, X], 1),
    resource_card(19, PLANT, [P, X, E, E], 1),
    resource_card(20, PLANT, [X, E, E, P], 1),
    resource_card(21, ANIMAL, [A, E, A, X], 0),
    resource_card(22, ANIMAL, [A, A, X, E], 0),
    resource_card(23, ANIMAL, [X, E, A, A], 0),
    resource_card(24, ANIMAL, [E, X, A, A], 0),
    resource_card(25, ANIMAL, [X, I, A, K], 0),
    resource_card(26, ANIMAL, [M, X, F, A], 0),
    resource_card(27, ANIMAL, [A, Q, X, P], 0),
    resource_card(28, ANIMAL, [E, A, E, X], 1),
    resource_card(29, ANIMAL, [A, X, E, E], 1),
    resource_card(30, ANIMAL, [X, E, E, A], 1),
    resource_card(31, INSECT, [I, E, I, X], 0),
    resource_card(32, INSECT, [I, I, X, E], 0),
    resource_card(33, INSECT, [X, E, I, I], 0),
    resource_card(34, INSECT, [E, X, I, I], 0),
    resource_card(35, INSECT, [Q, X, I, A], 0),
    resource_card(36, INSECT, [X, F, K, I], 0),
    resource_card(37, INSECT, [I, M, P, X], 0),
    resource_card(38, INSECT, [E, I, E, X], 1),
    resource_card(39, INSECT, [I, X, E, E], 1),
    resource_card(40, INSECT, [X, E, E, I], 1),
];

#[rustfmt::skip]
pub static GOLD_CARDS: [Card; 40] = [
    gold_card(41, FUNGI, [X, E, Q, E], [0, 1, 2, 0], per_item(Item::Quill)),
    gold_card(42, FUNGI, [E, K, E, X], [1, 0, 2, 0], per_item(Item::Inkwell)),
    gold_card(43, FUNGI, [M, E, X, E], [0, 0, 2, 1], per_item(Item::Manuscript)),
    gold_card(44, FUNGI, [E, E, E, X], [0, 1, 3, 0], COVERED),
    gold_card(45, FUNGI, [E, E, X, E], [1, 0, 3, 0], COVERED),
    gold_card(46, FUNGI, [E, X, E, E], [0, 0, 3, 1], COVERED),
    gold_card(47, FUNGI, [Q, X, X, E], [0, 0, 3, 0], PointRule::Flat(3)),
    gold_card(48, FUNGI, [X, K, E, X], [0, 0, 3, 0], PointRule::Flat(3)),
    gold_card(49, FUNGI, [X, X, E, M], [0, 0, 3, 0], PointRule::Flat(3)),
    gold_card(50, FUNGI, [E, X, X, E], [0, 0, 5, 0], PointRule::Flat(5)),
    gold_card(51, PLANT, [X, E, Q, E], [2, 0, 0, 1], per_item(Item::Quill)),
    gold_card(52, PLANT, [E, K, E, X], [2, 0, 1, 0], per_item(Item::Inkwell)),
    gold_card(53, PLANT, [M, E, X, E], [2, 1, 0, 0], per_item(Item::Manuscript)),
    gold_card(54, PLANT, [E, E, E, X], [3, 0, 0, 1], COVERED),
    gold_card(55, PLANT, [E, E, X, E], [3, 0, 1, 0], COVERED),
    gold_card(56, PLANT, [E, X, E, E], [3, 1, 0, 0], COVERED),
    gold_card(57, PLANT, [Q, X, X, E], [3, 0, 0, 0], PointRule::Flat(3)),
    gold_card(58, PLANT, [X, K, E, X], [3, 0, 0, 0], PointRule::Flat(3)),
    gold_card(59, PLANT, [X, X, E, M], [3, 0, 0, 0], PointRule::Flat(3)),
    gold_card(60, PLANT, [E, X, X, E], [5, 0, 0, 0], PointRule::Flat(5)),
    gold_card(61, ANIMAL, [X, E, Q, E], [0, 2, 0, 1], per_item(Item::Quill)),
    gold_card(62, ANIMAL, [E, K, E, X], [0, 2, 1, 0], per_item(Item::Inkwell)),
    gold_card(63, ANIMAL, [M, E, X, E], [1, 2, 0, 0], per_item(Item::Manuscript)),
    gold_card(64, ANIMAL, [E, E, E, X], [0, 3, 0, 1], COVERED),
    gold_card(65, ANIMAL, [E, E, X, E], [0, 3, 1, 0], COVERED),
    gold_card(66, ANIMAL, [E, X, E, E], [1, 3, 0, 0], COVERED),
    gold_card(67, ANIMAL, [Q, X, X, E], [0, 3, 0, 0], PointRule::Flat(3)),
    gold_card(68, ANIMAL, [X, K, E, X], [0, 3, 0, 0], PointRule::Flat(3)),
    gold_card(69, ANIMAL, [X, X, E, M], [0, 3, 0, 0], PointRule::Flat(3)),
    gold_card(70, ANIMAL, [E, X, X, E], [0, 5, 0, 0], PointRule::Flat(5)),
    gold_card(71, INSECT, [X, E, Q, E], [0, 1, 0, 2], per_item(Item::Quill)),
    gold_card(72, INSECT, [E, K, E, X], [1, 0, 0, 2], per_item(Item::Inkwell)),
    gold_card(73, INSECT, [M, E, X, E], [0, 0, 1, 2], per_item(Item::Manuscript)),
    gold_card(74, INSECT, [E, E, E, X], [0, 1, 0, 3], COVERED),
    gold_card(75, INSECT, [E, E, X, E], [1, 0, 0, 3], COVERED),
    gold_card(76, INSECT, [E, X, E, E], [0, 0, 1, 3], COVERED),
    gold_card(77, INSECT, [Q, X, X, E], [0, 0, 0, 3], PointRule::Flat(3)),
    gold_card(78, INSECT, [X, K, E, X], [0, 0, 0, 3], PointRule::Flat(3)),
    gold_card(79, INSECT, [X, X, E, M], [0, 0, 0, 3], PointRule::Flat(3)),
    gold_card(80, INSECT, [E, X, X, E], [0, 0, 0, 5], PointRule::Flat(5)),
];

#[rustfmt::skip]
pub static STARTER_CARDS: [Card; 6] = [
    starter_card(81, [E, P, I, E], [0, 0, 0, 1], [F, P, I, A]),
    starter_card(82, [A, E, E, F], [0, 0, 1, 0], [P, A, F, I]),
    starter_card(83, [E, E, E, E], [1, 0, 1, 0], [I, A, F, P]),
    starter_card(84, [E, E, E, E], [0, 1, 0, 1], [P, I, A, F]),
    starter_card(85, [E, E, X, X], [1, 1, 1, 0], [I, A, F, P]),
    starter_card(86, [E, E, X, X], [1, 1, 0, 1], [F, A, P, I]),
];

pub fn resource_card_ids() -> Vec<CardId> {
    RESOURCE_CARDS.iter().map(|card| card.id).collect()
}

pub fn gold_card_ids() -> Vec<CardId> {
    GOLD_CARDS.iter().map(|card| card.id).collect()
}

pub fn starter_card_ids() -> Vec<CardId> {
    STARTER_CARDS.iter().map(|card| card.id).collect()
}
