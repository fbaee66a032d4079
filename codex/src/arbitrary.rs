use crate::{Direction, Slot};

impl quickcheck::Arbitrary for Slot {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // A small area, so that neighboring slots are common
        let h = i32::from(u8::arbitrary(g) % 9) - 4;
        let v = i32::from(u8::arbitrary(g) % 9) - 4;
        if h.rem_euclid(2) == v.rem_euclid(2) {
            Slot { h, v }
        } else {
            Slot { h, v: v + 1 }
        }
    }
}

impl quickcheck::Arbitrary for Direction {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&Direction::ALL).unwrap()
    }
}
