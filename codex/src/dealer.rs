use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::EmptyDealer;

/// A pile of items that is shuffled once and then drawn from the top.
///
/// A dealer with a seed always produces the same order: two dealers built
/// from the same items and seed, each shuffled once, draw item-for-item
/// identical sequences. Without a seed the order comes from the OS entropy
/// source.
#[derive(Clone, Debug)]
pub struct Dealer<T> {
    items: Vec<T>,
    remaining: usize,
    seed: Option<u64>,
    shuffled: bool,
}

impl<T: Clone> Dealer<T> {
    pub fn new(items: &[T], seed: Option<u64>) -> Self {
        Self {
            items: items.to_vec(),
            remaining: items.len(),
            seed,
            shuffled: false,
        }
    }

    /// Puts all items back into a uniformly random order.
    ///
    /// On a seeded dealer, every call after the first does nothing, so the
    /// order is fixed for the dealer's lifetime.
    pub fn shuffle(&mut self) {
        if self.shuffled && self.seed.is_some() {
            return;
        }
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        // Draw without replacement: pick the k-th not yet consumed item.
        let n = self.items.len();
        let mut consumed = vec![false; n];
        let mut order = Vec::with_capacity(n);
        for left in (1..=n).rev() {
            let mut k = rng.gen_range(0..left);
            let idx = consumed
                .iter()
                .position(|&taken| {
                    if taken {
                        return false;
                    }
                    if k == 0 {
                        return true;
                    }
                    k -= 1;
                    false
                })
                .unwrap_or(n - 1);
            consumed[idx] = true;
            order.push(self.items[idx].clone());
        }

        self.items = order;
        self.remaining = n;
        self.shuffled = true;
    }

    /// Takes the next item off the pile.
    pub fn draw(&mut self) -> Result<T, EmptyDealer> {
        let item = self.peek().cloned().ok_or(EmptyDealer)?;
        self.remaining -= 1;
        Ok(item)
    }

    /// The item that [`Self::draw()`] would return next.
    pub fn peek(&self) -> Option<&T> {
        if self.remaining == 0 {
            None
        } else {
            self.items.get(self.items.len() - self.remaining)
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn has_next(&self) -> bool {
        self.remaining > 0
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    fn drain<T: Clone>(dealer: &mut Dealer<T>) -> Vec<T> {
        let mut drawn = Vec::new();
        while dealer.has_next() {
            drawn.push(dealer.draw().unwrap());
        }
        drawn
    }

    quickcheck! {
        fn same_seed_same_order(items: Vec<u16>, seed: u64) -> bool {
            let mut first = Dealer::new(&items, Some(seed));
            let mut second = Dealer::new(&items, Some(seed));
            first.shuffle();
            second.shuffle();
            drain(&mut first) == drain(&mut second)
        }

        fn shuffle_is_a_permutation(items: Vec<u16>, seed: Option<u64>) -> bool {
            let mut dealer = Dealer::new(&items, seed);
            dealer.shuffle();
            let mut drawn = drain(&mut dealer);
            let mut expected = items.clone();
            drawn.sort();
            expected.sort();
            drawn == expected
        }
    }

    #[test]
    fn seeded_reshuffle_is_a_no_op() {
        let items: Vec<u32> = (0..30).collect();
        let mut dealer = Dealer::new(&items, Some(7));
        dealer.shuffle();
        let first = dealer.peek().copied();
        dealer.draw().unwrap();
        dealer.shuffle();
        assert_eq!(dealer.remaining(), 29);
        assert_ne!(dealer.peek().copied(), first);

        let mut fresh = Dealer::new(&items, Some(7));
        fresh.shuffle();
        fresh.shuffle();
        assert_eq!(fresh.draw().ok(), first);
    }

    #[test]
    fn unseeded_reshuffle_refills() {
        let items: Vec<u32> = (0..5).collect();
        let mut dealer = Dealer::new(&items, None);
        dealer.shuffle();
        dealer.draw().unwrap();
        dealer.draw().unwrap();
        dealer.shuffle();
        assert_eq!(dealer.remaining(), 5);
    }

    #[test]
    fn exhausted_dealer_fails() {
        let mut dealer = Dealer::new(&['a', 'b'], Some(1));
        dealer.shuffle();
        assert!(dealer.draw().is_ok());
        assert!(dealer.draw().is_ok());
        assert!(!dealer.has_next());
        assert_eq!(dealer.peek(), None);
        assert_eq!(dealer.draw(), Err(EmptyDealer));
    }
}
