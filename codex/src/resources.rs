use serde::{Deserialize, Serialize};

use crate::NegativeCounters;

/// The suit of a card.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Kingdom {
    Plant,
    Animal,
    Fungi,
    Insect,
}

/// A resource symbol, shown on corners or in the center of a card.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Resource {
    Plant,
    Animal,
    Fungi,
    Insect,
}

/// An item symbol, only ever shown on corners.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Item {
    Quill,
    Inkwell,
    Manuscript,
}

impl Kingdom {
    /// The resource that a card of this kingdom carries on its back.
    pub const fn resource(self) -> Resource {
        match self {
            Kingdom::Plant => Resource::Plant,
            Kingdom::Animal => Resource::Animal,
            Kingdom::Fungi => Resource::Fungi,
            Kingdom::Insect => Resource::Insect,
        }
    }
}

/// Macro to define a fixed-size counter indexed by a symbol enum.
///
/// Counts are signed so that scoring can subtract past zero and notice.
/// A board never holds negative counts.
macro_rules! counter_type {
    ($name:ident, $key:ident, $len:literal) => {
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name {
            counts: [i32; $len],
        }

        impl $name {
            pub const fn new(counts: [i32; $len]) -> Self {
                Self { counts }
            }

            pub const fn zero() -> Self {
                Self { counts: [0; $len] }
            }

            /// A counter holding `n` of a single symbol.
            pub const fn single(key: $key, n: i32) -> Self {
                let mut counts = [0; $len];
                counts[key as usize] = n;
                Self { counts }
            }

            pub const fn get(&self, key: $key) -> i32 {
                self.counts[key as usize]
            }

            pub fn counts(&self) -> [i32; $len] {
                self.counts
            }

            pub fn is_zero(&self) -> bool {
                self.counts.iter().all(|&c| c == 0)
            }

            pub fn any_negative(&self) -> bool {
                self.counts.iter().any(|&c| c < 0)
            }

            /// Does this counter hold at least as much as `other` of every symbol?
            pub fn covers(&self, other: &Self) -> bool {
                self.counts.iter().zip(other.counts.iter()).all(|(a, b)| a >= b)
            }

            /// How many times `required` can be taken out of this counter.
            ///
            /// This subtracts `required` over and over and stops as soon as any
            /// count would drop below zero. An empty requirement is never
            /// satisfied, since it would be contained infinitely often.
            pub fn times_contained(&self, required: &Self) -> Result<u32, NegativeCounters> {
                if self.any_negative() {
                    return Err(NegativeCounters);
                }
                if required.is_zero() {
                    return Ok(0);
                }
                let mut remaining = *self;
                let mut times = 0;
                loop {
                    remaining -= *required;
                    if remaining.any_negative() {
                        break Ok(times);
                    }
                    times += 1;
                }
            }
        }

        impl std::ops::AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                for (a, b) in self.counts.iter_mut().zip(rhs.counts) {
                    *a += b;
                }
            }
        }

        impl std::ops::SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                for (a, b) in self.counts.iter_mut().zip(rhs.counts) {
                    *a -= b;
                }
            }
        }
    };
}

counter_type!(ResourceCounter, Resource, 4);
counter_type!(ItemCounter, Item, 3);
