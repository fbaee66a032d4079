use tracing::{debug, info};

use crate::{
    gold_card_ids, resource_card_ids, starter_card_ids, CardId, Dealer, DeckKind, DeckView,
    FaceId, GameConfig, GameError, Objective, Outcome, Phase, Placement, PlayerColor,
    PlayerState, PlayerView, Slot, Snapshot, Trigger, OBJECTIVES,
};

/// A draw pile with the two cards lying face up next to it.
#[derive(Clone, Debug)]
struct Deck {
    dealer: Dealer<CardId>,
    face_up: [Option<CardId>; 2],
}

/// How far the match is from its end.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum LastRound {
    NotTriggered,
    /// The end was triggered during the current round.
    Triggered,
    /// The extra round after the trigger is being played.
    Final,
}

/// One match, from dealing the starter cards to the final scores.
///
/// All commands validate their input completely before changing anything,
/// so a command that returns an error leaves the match as it was.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    players: Vec<PlayerState>,
    resource_deck: Deck,
    gold_deck: Deck,
    common_objectives: [usize; 2],
    phase: Phase,
    current: usize,
    turn: u32,
    last_round: LastRound,
    last_placement: Option<Placement>,
    outcome: Option<Outcome>,
}

impl Deck {
    fn new(cards: &[CardId], seed: Option<u64>) -> Result<Self, GameError> {
        let mut dealer = Dealer::new(cards, seed);
        dealer.shuffle();
        let face_up = [dealer.draw().ok(), dealer.draw().ok()];
        if face_up.iter().any(Option::is_none) {
            return Err(GameError::SetupExhausted);
        }
        Ok(Self { dealer, face_up })
    }

    fn is_exhausted(&self) -> bool {
        !self.dealer.has_next() && self.face_up.iter().all(Option::is_none)
    }

    fn view(&self) -> DeckView {
        DeckView {
            remaining: self.dealer.remaining(),
            top_kingdom: self
                .dealer
                .peek()
                .and_then(|id| id.card())
                .and_then(|card| card.kingdom()),
            face_up: self.face_up,
        }
    }
}

fn deal<T: Clone>(dealer: &mut Dealer<T>) -> Result<T, GameError> {
    dealer.draw().map_err(|_| GameError::SetupExhausted)
}

impl Game {
    /// Sets up a match: shuffles all decks and deals every player a starter
    /// card, a hand and two objectives to choose from.
    ///
    /// Players take turns in the given order.
    pub fn new(nicknames: &[&str], config: GameConfig) -> Result<Self, GameError> {
        if !(2..=4).contains(&nicknames.len()) {
            return Err(GameError::InvalidPlayerCount {
                count: nicknames.len(),
            });
        }
        for (idx, nickname) in nicknames.iter().enumerate() {
            if nicknames[..idx].contains(nickname) {
                return Err(GameError::DuplicatePlayer {
                    nickname: nickname.to_string(),
                });
            }
        }

        let mut resource_deck = Deck::new(&resource_card_ids(), config.dealer_seed(1))?;
        let mut gold_deck = Deck::new(&gold_card_ids(), config.dealer_seed(2))?;
        let mut starters = Dealer::new(&starter_card_ids(), config.dealer_seed(3));
        starters.shuffle();
        let objective_ids: Vec<usize> = OBJECTIVES.iter().map(|objective| objective.id).collect();
        let mut objectives = Dealer::new(&objective_ids, config.dealer_seed(4));
        objectives.shuffle();

        let common_objectives = [deal(&mut objectives)?, deal(&mut objectives)?];

        let mut players = Vec::with_capacity(nicknames.len());
        for (&nickname, color) in nicknames.iter().zip(PlayerColor::ALL) {
            let starter = deal(&mut starters)?;
            let hand = vec![
                deal(&mut resource_deck.dealer)?,
                deal(&mut resource_deck.dealer)?,
                deal(&mut gold_deck.dealer)?,
            ];
            let offered = [deal(&mut objectives)?, deal(&mut objectives)?];
            players.push(PlayerState::new(
                nickname.to_string(),
                color,
                starter,
                hand,
                offered,
            ));
        }

        debug!(players = ?nicknames, seed = ?config.seed, "New game");
        Ok(Self {
            config,
            players,
            resource_deck,
            gold_deck,
            common_objectives,
            phase: Phase::Init,
            current: 0,
            turn: 0,
            last_round: LastRound::NotTriggered,
            last_placement: None,
            outcome: None,
        })
    }

    /// Places the player's starter card at the root of their board.
    pub fn place_starter_card(
        &mut self,
        nickname: &str,
        card: CardId,
        face: FaceId,
    ) -> Result<Snapshot, GameError> {
        let idx = self.player_idx(nickname)?;
        self.phase.require(Phase::Init)?;
        let player = &mut self.players[idx];
        if player.starter_placed() {
            return Err(GameError::StarterAlreadyPlaced);
        }
        if card != player.starter {
            return Err(GameError::CardNotInHand { card });
        }
        if face.card != card {
            return Err(GameError::InvalidFace { card, face });
        }
        let definition = card.card().ok_or(GameError::UnknownCard { card })?;
        player
            .board
            .place(Slot::ROOT, face, definition.face(face.side))?;
        debug!(player = nickname, %face, "Starter card placed");
        Ok(self.snapshot())
    }

    /// Picks the secret objective among the two offered ones.
    ///
    /// The match starts once every player has chosen.
    pub fn choose_objective(&mut self, nickname: &str, objective: usize) -> Result<Snapshot, GameError> {
        let idx = self.player_idx(nickname)?;
        self.phase.require(Phase::Init)?;
        let player = &mut self.players[idx];
        if !player.starter_placed() {
            return Err(GameError::StarterNotPlaced);
        }
        if player.secret_objective.is_some() {
            return Err(GameError::ObjectiveAlreadyChosen);
        }
        Objective::by_id(objective)?;
        if !player.offered_objectives.contains(&objective) {
            return Err(GameError::ObjectiveNotOffered { id: objective });
        }
        player.secret_objective = Some(objective);
        debug!(player = nickname, objective, "Objective chosen");

        self.start_if_ready()?;
        Ok(self.snapshot())
    }

    /// Places a card from the current player's hand on their board.
    pub fn place_card(
        &mut self,
        nickname: &str,
        card: CardId,
        face: FaceId,
        slot: Slot,
    ) -> Result<Snapshot, GameError> {
        let idx = self.player_idx(nickname)?;
        self.phase.require(Phase::Placing)?;
        if idx != self.current {
            return Err(GameError::NotYourTurn);
        }
        let player = &mut self.players[idx];
        let hand_idx = player
            .hand
            .iter()
            .position(|&c| c == card)
            .ok_or(GameError::CardNotInHand { card })?;
        if face.card != card {
            return Err(GameError::InvalidFace { card, face });
        }
        let definition = card.card().ok_or(GameError::UnknownCard { card })?;
        let points = player.board.place(slot, face, definition.face(face.side))?;

        player.hand.remove(hand_idx);
        player.score.cards += points;
        debug!(player = nickname, %face, %slot, points, "Card placed");
        self.last_placement = Some(Placement {
            player: nickname.to_string(),
            slot,
            face,
            points,
        });
        self.phase = self.phase.transition(Trigger::CardPlaced)?;

        // Nothing left to draw: the turn ends right away
        if self.resource_deck.is_exhausted() && self.gold_deck.is_exhausted() {
            self.current += 1;
            self.settle_turn()?;
        }
        Ok(self.snapshot())
    }

    /// Draws the top card of a deck into the current player's hand.
    pub fn draw_from_deck(&mut self, nickname: &str, deck: DeckKind) -> Result<Snapshot, GameError> {
        let idx = self.player_idx(nickname)?;
        self.phase.require(Phase::Drawing)?;
        if idx != self.current {
            return Err(GameError::NotYourTurn);
        }
        let card = self
            .deck_mut(deck)
            .dealer
            .draw()
            .map_err(|_| GameError::EmptyDealer { deck })?;
        self.players[idx].hand.push(card);
        debug!(player = nickname, ?deck, "Card drawn");

        self.current += 1;
        self.settle_turn()?;
        Ok(self.snapshot())
    }

    /// Takes one of the face-up cards of a deck and refills its place, from
    /// the same deck if possible or else from the other one.
    pub fn take_face_up_card(
        &mut self,
        nickname: &str,
        card: CardId,
        deck: DeckKind,
    ) -> Result<Snapshot, GameError> {
        let idx = self.player_idx(nickname)?;
        self.phase.require(Phase::Drawing)?;
        if idx != self.current {
            return Err(GameError::NotYourTurn);
        }
        let position = self
            .deck_mut(deck)
            .face_up
            .iter()
            .position(|&c| c == Some(card))
            .ok_or(GameError::CardNotFaceUp { card })?;

        let refill = match self.deck_mut(deck).dealer.draw() {
            Ok(refill) => Some(refill),
            Err(_) => self.deck_mut(deck.other()).dealer.draw().ok(),
        };
        self.deck_mut(deck).face_up[position] = refill;
        self.players[idx].hand.push(card);
        debug!(player = nickname, %card, ?deck, "Face-up card taken");

        self.current += 1;
        self.settle_turn()?;
        Ok(self.snapshot())
    }

    /// Removes a player from the match.
    ///
    /// If fewer than two players remain, the match ends without a winner.
    pub fn leave(&mut self, nickname: &str) -> Result<Snapshot, GameError> {
        let idx = self.player_idx(nickname)?;
        if self.phase == Phase::End {
            return Err(GameError::IncorrectPhase { phase: self.phase });
        }
        self.players.remove(idx);
        info!(player = nickname, "Player left");

        if self.players.len() < 2 {
            self.phase = self.phase.transition(Trigger::TooFewPlayers)?;
            self.outcome = Some(Outcome::Abandoned {
                left: nickname.to_string(),
            });
            info!(player = nickname, "Game abandoned");
            return Ok(self.snapshot());
        }

        match self.phase {
            Phase::Init => self.start_if_ready()?,
            _ if idx < self.current => self.current -= 1,
            // The next player moved into the leaver's place
            _ if idx == self.current => self.settle_turn()?,
            _ => {}
        }
        Ok(self.snapshot())
    }

    /// The public state of the match.
    pub fn snapshot(&self) -> Snapshot {
        let in_turn = matches!(self.phase, Phase::Placing | Phase::Drawing);
        Snapshot {
            phase: self.phase,
            current_player: in_turn.then(|| self.players[self.current].nickname.clone()),
            turn: self.turn,
            last_round: self.last_round != LastRound::NotTriggered,
            players: self.players.iter().map(PlayerView::new).collect(),
            resource_deck: self.resource_deck.view(),
            gold_deck: self.gold_deck.view(),
            common_objectives: self.common_objectives,
            last_placement: self.last_placement.clone(),
            outcome: self.outcome.clone(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The player whose turn it is, outside of the init and end phases.
    pub fn current_player(&self) -> Option<&str> {
        matches!(self.phase, Phase::Placing | Phase::Drawing)
            .then(|| self.players[self.current].nickname.as_str())
    }

    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    /// The full state of one player, including their hand and secret objective.
    pub fn player(&self, nickname: &str) -> Result<&PlayerState, GameError> {
        self.player_idx(nickname).map(|idx| &self.players[idx])
    }

    pub fn hand(&self, nickname: &str) -> Result<&[CardId], GameError> {
        self.player(nickname).map(|player| player.hand.as_slice())
    }

    pub fn secret_objective(&self, nickname: &str) -> Result<Option<usize>, GameError> {
        self.player(nickname).map(|player| player.secret_objective)
    }

    pub fn common_objectives(&self) -> [usize; 2] {
        self.common_objectives
    }

    pub fn face_up_cards(&self, deck: DeckKind) -> [Option<CardId>; 2] {
        match deck {
            DeckKind::Resource => self.resource_deck.face_up,
            DeckKind::Gold => self.gold_deck.face_up,
        }
    }

    pub fn deck_remaining(&self, deck: DeckKind) -> usize {
        match deck {
            DeckKind::Resource => self.resource_deck.dealer.remaining(),
            DeckKind::Gold => self.gold_deck.dealer.remaining(),
        }
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    fn player_idx(&self, nickname: &str) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|player| player.nickname == nickname)
            .ok_or_else(|| GameError::UnknownPlayer {
                nickname: nickname.to_string(),
            })
    }

    fn deck_mut(&mut self, deck: DeckKind) -> &mut Deck {
        match deck {
            DeckKind::Resource => &mut self.resource_deck,
            DeckKind::Gold => &mut self.gold_deck,
        }
    }

    fn start_if_ready(&mut self) -> Result<(), GameError> {
        if self
            .players
            .iter()
            .all(|player| player.secret_objective.is_some())
        {
            self.phase = self.phase.transition(Trigger::AllObjectivesChosen)?;
            self.current = 0;
            debug!("All objectives chosen, game starts");
        }
        Ok(())
    }

    fn end_triggered(&self) -> bool {
        !self.resource_deck.dealer.has_next()
            || !self.gold_deck.dealer.has_next()
            || self
                .players
                .iter()
                .any(|player| player.score.total() >= self.config.score_threshold)
    }

    /// Called when a round is complete. Returns whether the match is over.
    fn finish_round(&mut self) -> bool {
        match self.last_round {
            LastRound::NotTriggered => false,
            LastRound::Triggered if self.config.extra_round => {
                self.last_round = LastRound::Final;
                false
            }
            LastRound::Triggered | LastRound::Final => true,
        }
    }

    /// Hands the turn to the player at `self.current`, which may be one past
    /// the last player. Players who cannot place any card are skipped.
    fn settle_turn(&mut self) -> Result<(), GameError> {
        if self.last_round == LastRound::NotTriggered && self.end_triggered() {
            info!(turn = self.turn, "Last round triggered");
            self.last_round = LastRound::Triggered;
        }

        let mut skipped = 0;
        let game_over = loop {
            if self.current >= self.players.len() {
                self.current = 0;
                self.turn += 1;
                if self.finish_round() {
                    break true;
                }
            }
            if self.players[self.current].can_place() {
                break false;
            }
            skipped += 1;
            if skipped > self.players.len() {
                // Nobody can move any more
                break true;
            }
            debug!(player = %self.players[self.current].nickname, "Player cannot place a card, skipped");
            self.current += 1;
        };

        self.phase = self.phase.transition(Trigger::TurnPassed { game_over })?;
        if game_over {
            self.finish()?;
        }
        Ok(())
    }

    /// Adds the objective points and decides the winners.
    fn finish(&mut self) -> Result<(), GameError> {
        let mut objective_scores = Vec::with_capacity(self.players.len());
        for player in &self.players {
            let mut points = 0;
            let ids = self
                .common_objectives
                .iter()
                .chain(player.secret_objective.iter());
            for &id in ids {
                points += Objective::by_id(id)?.score(&player.board)?;
            }
            objective_scores.push(points);
        }
        for (player, points) in self.players.iter_mut().zip(objective_scores) {
            player.score.objectives = points;
        }

        let best = self
            .players
            .iter()
            .map(|player| (player.score.total(), player.score.objectives))
            .max();
        let winners: Vec<String> = self
            .players
            .iter()
            .filter(|player| Some((player.score.total(), player.score.objectives)) == best)
            .map(|player| player.nickname.clone())
            .collect();
        info!(?winners, turn = self.turn, "Game over");
        self.outcome = Some(Outcome::Finished { winners });
        Ok(())
    }
}
