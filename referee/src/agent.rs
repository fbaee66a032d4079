use codex::{CardId, DeckKind, FaceId, Game, PlayerState, Side, Slot};
use rand::rngs::StdRng;
use rand::seq::{IteratorRandom, SliceRandom};
use rand::{Rng, SeedableRng};

/// Where a player takes a card from at the end of their turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawChoice {
    Deck(DeckKind),
    FaceUp { card: CardId, deck: DeckKind },
}

/// An agent that picks uniformly among legal choices.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn choose_starter_face(&mut self, starter: CardId) -> FaceId {
        if self.rng.gen::<bool>() {
            starter.front()
        } else {
            starter.back()
        }
    }

    pub fn choose_objective(&mut self, offered: [usize; 2]) -> usize {
        offered[self.rng.gen_range(0..2)]
    }

    /// A random card from the hand on a random available slot.
    ///
    /// Gold fronts the board cannot pay for are swapped for the back.
    pub fn choose_placement(&mut self, player: &PlayerState) -> Option<(CardId, FaceId, Slot)> {
        let card = *player.hand.choose(&mut self.rng)?;
        let slot = *player.board.available_slots().iter().choose(&mut self.rng)?;
        let side = if self.rng.gen::<bool>() {
            Side::Front
        } else {
            Side::Back
        };
        let affordable = card.card().is_some_and(|definition| {
            player
                .board
                .resources()
                .covers(&definition.face(side).requirement)
        });
        let face = if affordable { FaceId { card, side } } else { card.back() };
        Some((card, face, slot))
    }

    pub fn choose_draw(&mut self, game: &Game) -> Option<DrawChoice> {
        let mut choices = Vec::new();
        for deck in [DeckKind::Resource, DeckKind::Gold] {
            if game.deck_remaining(deck) > 0 {
                choices.push(DrawChoice::Deck(deck));
            }
            for card in game.face_up_cards(deck).into_iter().flatten() {
                choices.push(DrawChoice::FaceUp { card, deck });
            }
        }
        choices.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use codex::{GameConfig, Phase};

    use super::*;

    #[test]
    fn placements_are_always_legal() {
        let mut agent = RandomAgent::new(5);
        for seed in 0..20 {
            let config = GameConfig {
                seed: Some(seed),
                ..GameConfig::default()
            };
            let mut game = Game::new(&["ann", "ben"], config).unwrap();
            for nickname in ["ann", "ben"] {
                let starter = game.player(nickname).unwrap().starter;
                let face = agent.choose_starter_face(starter);
                game.place_starter_card(nickname, starter, face).unwrap();
                let offered = game.player(nickname).unwrap().offered_objectives;
                let objective = agent.choose_objective(offered);
                game.choose_objective(nickname, objective).unwrap();
            }
            assert_eq!(game.phase(), Phase::Placing);

            let (card, face, slot) = agent.choose_placement(game.player("ann").unwrap()).unwrap();
            game.place_card("ann", card, face, slot).unwrap();
            let draw = agent.choose_draw(&game).unwrap();
            match draw {
                DrawChoice::Deck(deck) => game.draw_from_deck("ann", deck).unwrap(),
                DrawChoice::FaceUp { card, deck } => game.take_face_up_card("ann", card, deck).unwrap(),
            };
            assert_eq!(game.current_player(), Some("ben"));
        }
    }
}
