//! The La Chouine rules engine.
//!
//! `ChouineRules` owns every state transition of a game:
//! - Dealing (`new_game`)
//! - The seven-of-trumps exchange
//! - Card play, announcements and trick resolution
//! - Drawing, the switch to strict play and end-of-game scoring
//!
//! Every operation either applies completely and returns a structured
//! outcome, or is rejected with an `EngineError` and leaves the state
//! untouched.
//!
//! The `RulesEngine` trait is the narrow action-level surface used by agents
//! and the self-play runner.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::announce::{self, Announcement};
use super::error::EngineError;
use super::outcome::{
    CardPlayed, DealSummary, DrawnCards, ExchangeResult, GameEnd, GameOverResult, Outcome,
    PlayOutcome, TrickResolution,
};
use super::trick;
use crate::core::{
    generate_seed, Action, Card, ConfigError, GameConfig, GameState, Hand, Phase, Rank, Seed,
    Side, SideMap, Suit, Talon, MAX_HAND_SIZE,
};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    /// Single winner.
    Winner(Side),
    /// Equal final scores.
    Tie,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameResult::Winner(side) => Some(*side),
            GameResult::Tie => None,
        }
    }
}

/// Action-level rules surface.
///
/// ## Implementation Notes
///
/// - `legal_actions`: empty if the side can't act right now
/// - `apply_action`: deterministic; a rejected action leaves the state as it was
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Enumerate all legal actions for a side.
    fn legal_actions(&self, state: &GameState, side: Side) -> Vec<Action>;

    /// Apply an action to the game state.
    fn apply_action(
        &self,
        state: &mut GameState,
        side: Side,
        action: Action,
    ) -> Result<Outcome, EngineError>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;
}

/// Rules of La Chouine.
#[derive(Clone, Debug, Default)]
pub struct ChouineRules {
    config: GameConfig,
}

impl ChouineRules {
    /// Create an engine for a validated configuration.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    // === Dealing ===

    /// Deal a fresh game.
    ///
    /// Scores, hands, tricks and claims are reset; match wins carry over.
    /// The deal alternates: the first game is dealt by `Ai` so `Human`
    /// leads, and each later game swaps the dealer. A missing seed is drawn
    /// from entropy and reported back.
    pub fn new_game(&self, state: &mut GameState, seed: Option<Seed>) -> DealSummary {
        let dealer = state.dealer.map_or(Side::Ai, Side::opponent);
        self.deal(state, seed.unwrap_or_else(generate_seed), dealer)
    }

    /// Deal a game from `seed` with an explicit dealer.
    ///
    /// Same reset rules as `new_game`. Replays use this to reproduce a
    /// recorded deal exactly.
    pub fn deal(&self, state: &mut GameState, seed: Seed, dealer: Side) -> DealSummary {
        let leader = dealer.opponent();

        for (_, player) in state.players.iter_mut() {
            player.reset_for_game();
        }

        // Two hands of at most MAX_HAND_SIZE leave a full deck with a card
        // to turn up.
        let hand_size = self.config.hand_size.min(MAX_HAND_SIZE);
        let mut talon = Talon::shuffled(seed);
        for _ in 0..hand_size {
            for side in Side::ALL {
                if let Some(card) = talon.draw() {
                    state.players[side].hand.push(card);
                }
            }
        }
        let trump_card = talon
            .draw()
            .expect("at most MAX_HAND_SIZE cards per hand leaves a trump card");

        state.talon = talon;
        state.trump_card = Some(trump_card);
        state.trump_suit = Some(trump_card.suit);
        state.trick = Default::default();
        state.current_player = leader;
        state.dealer = Some(dealer);
        state.phase = Phase::Free;
        state.seven_exchanged = false;
        state.trick_awaiting_clear = false;
        state.last_trick_winner = Some(leader);
        state.tricks_played = 0;
        state.result = None;
        state.seed = Some(seed);
        state.dealt = true;
        state.history.clear();

        debug!(seed, %dealer, %trump_card, talon = state.talon.len(), "dealt new game");

        DealSummary {
            seed,
            dealer,
            leader,
            trump_card,
            talon_size: state.talon.len(),
        }
    }

    // === Exchange ===

    /// Whether `side` may exchange the seven of trumps now.
    #[must_use]
    pub fn can_exchange_seven(&self, state: &GameState, side: Side) -> bool {
        state.can_exchange_seven(side)
    }

    /// Swap the seven of trumps in `side`'s hand for the face-up trump card.
    ///
    /// Not tied to turn order; the taken card lands where the seven was.
    pub fn exchange_seven(
        &self,
        state: &mut GameState,
        side: Side,
    ) -> Result<ExchangeResult, EngineError> {
        if !state.can_exchange_seven(side) {
            return Err(EngineError::InvalidExchange { side });
        }
        let (Some(taken_card), Some(trump)) = (state.trump_card, state.trump_suit) else {
            return Err(EngineError::InvalidExchange { side });
        };
        let seven = Card::new(trump, Rank::Seven);
        let hand = &mut state.players[side].hand;
        let Some(pos) = hand.iter().position(|&c| c == seven) else {
            return Err(EngineError::InvalidExchange { side });
        };

        hand[pos] = taken_card;
        state.trump_card = Some(seven);
        state.seven_exchanged = true;
        state.record(side, Action::ExchangeSeven);

        debug!(%side, %taken_card, "exchanged seven of trumps");

        Ok(ExchangeResult {
            side,
            taken_card,
            new_trump_card: seven,
        })
    }

    // === Play ===

    /// Whether `side` may play `card` into the current trick.
    #[must_use]
    pub fn is_legal_play(&self, state: &GameState, side: Side, card: Card) -> bool {
        state.is_legal_play(side, card)
    }

    /// All cards `side` may play into the current trick, in hand order.
    #[must_use]
    pub fn legal_cards(&self, state: &GameState, side: Side) -> Hand {
        state.legal_cards(side)
    }

    /// Play `card` from `side`'s hand.
    ///
    /// Checks, in order: an active game, no resolved trick left on the
    /// table, `side`'s turn, card held, card legal.
    pub fn play_card(
        &self,
        state: &mut GameState,
        side: Side,
        card: Card,
    ) -> Result<PlayOutcome, EngineError> {
        let Some(trump) = state.trump_suit.filter(|_| state.is_active()) else {
            return Err(EngineError::NoActiveGame);
        };
        if state.trick_awaiting_clear {
            return Err(EngineError::TrickAwaitingClear);
        }
        if state.current_player != side {
            return Err(EngineError::NotYourTurn { side });
        }
        if !state.hand(side).contains(&card) {
            return Err(EngineError::CardNotInHand { side, card });
        }
        if !state.is_legal_play(side, card) {
            trace!(
                %side,
                %card,
                led = ?state.led_card_for(side),
                hand = ?state.hand(side),
                phase = state.phase.number(),
                "rejected illegal play"
            );
            return Err(EngineError::IllegalPlay { side, card });
        }

        state.remove_from_hand(side, card);
        let player = &mut state.players[side];
        let announcement = announce::detect(
            &player.hand,
            card,
            trump,
            player.announced,
            self.config.quinte_threshold,
        );
        if let Some(found) = announcement {
            if let Some(key) = found.key() {
                player.announced.claim(key);
            }
            player.score += found.points;
            player.announcements.push(found);
            debug!(%side, announcement = %found, "announcement");
        }

        state.trick.place(side, card);
        state.record(side, Action::Play(card));
        trace!(%side, %card, "card played");

        if let Some(found) = announcement.filter(Announcement::is_instant_win) {
            return Ok(PlayOutcome::GameOver(self.finish(
                state,
                GameEnd::Chouine { side, card },
                Some(found),
                Some(side),
            )));
        }

        if let Some(led) = state.trick.card(side.opponent()) {
            return Ok(self.resolve_trick(state, side.opponent(), led, card, trump, announcement));
        }

        let next_player = side.opponent();
        state.current_player = next_player;
        Ok(PlayOutcome::Waiting(CardPlayed {
            side,
            card,
            announcement,
            next_player,
        }))
    }

    /// Take a resolved trick off the table.
    pub fn clear_trick(&self, state: &mut GameState) -> Result<(), EngineError> {
        if !state.trick_awaiting_clear {
            return Err(EngineError::NoTrickToClear);
        }
        state.trick = Default::default();
        state.trick_awaiting_clear = false;
        Ok(())
    }

    fn resolve_trick(
        &self,
        state: &mut GameState,
        leader: Side,
        led: Card,
        reply: Card,
        trump: Suit,
        announcement: Option<Announcement>,
    ) -> PlayOutcome {
        let mut cards = SideMap::with_value(led);
        cards[leader.opponent()] = reply;

        let winner = trick::trick_winner(leader, led, reply, trump);
        let points = trick::trick_points(&[cards[Side::Human], cards[Side::Ai]]);

        let won = &mut state.players[winner];
        won.tricks.extend([cards[Side::Human], cards[Side::Ai]]);
        won.score += points;
        state.last_trick_winner = Some(winner);
        state.tricks_played += 1;
        state.trick_awaiting_clear = true;
        state.current_player = winner;

        let drawn = (state.phase == Phase::Free).then(|| self.draw_after_trick(state, winner));

        let resolution = TrickResolution {
            cards,
            leader,
            winner,
            points,
            announcement,
            drawn,
            phase: state.phase,
        };
        debug!(
            %winner,
            points,
            talon = state.talon.len(),
            phase = state.phase.number(),
            "trick resolved"
        );

        if state.hand(Side::Human).is_empty() && state.hand(Side::Ai).is_empty() {
            let bonus = self.config.last_trick_bonus;
            state.players[winner].score += bonus;
            let result = Self::compare_scores(state);
            return PlayOutcome::GameOver(self.finish(
                state,
                GameEnd::LastTrick {
                    trick: resolution,
                    bonus_to: winner,
                    bonus,
                },
                announcement,
                result.winner(),
            ));
        }

        PlayOutcome::TrickResolved(resolution)
    }

    /// Winner draws first; when the talon can't cover the loser, the loser
    /// takes the face-up trump card and play turns strict.
    fn draw_after_trick(&self, state: &mut GameState, winner: Side) -> DrawnCards {
        let loser = winner.opponent();
        let mut drawn = DrawnCards {
            cards: SideMap::with_default(),
            trump_taken_by: None,
        };

        if let Some(card) = state.talon.draw() {
            state.players[winner].hand.push(card);
            drawn.cards[winner] = Some(card);
        }

        if let Some(card) = state.talon.draw() {
            state.players[loser].hand.push(card);
            drawn.cards[loser] = Some(card);
        } else {
            if let Some(card) = state.trump_card.take() {
                state.players[loser].hand.push(card);
                drawn.cards[loser] = Some(card);
                drawn.trump_taken_by = Some(loser);
            }
            state.phase = Phase::Strict;
            debug!(%loser, "talon exhausted, strict play begins");
        }

        drawn
    }

    fn compare_scores(state: &GameState) -> GameResult {
        let human = state.score(Side::Human);
        let ai = state.score(Side::Ai);
        match human.cmp(&ai) {
            std::cmp::Ordering::Greater => GameResult::Winner(Side::Human),
            std::cmp::Ordering::Less => GameResult::Winner(Side::Ai),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }

    fn finish(
        &self,
        state: &mut GameState,
        end: GameEnd,
        announcement: Option<Announcement>,
        winner: Option<Side>,
    ) -> GameOverResult {
        let result = winner.map_or(GameResult::Tie, GameResult::Winner);
        if let Some(side) = winner {
            state.players[side].game_wins += 1;
        }
        state.result = Some(result);

        let scores = state.scores();
        debug!(
            ?result,
            human = scores[Side::Human],
            ai = scores[Side::Ai],
            "game over"
        );

        GameOverResult {
            end,
            announcement,
            result,
            scores,
            game_wins: state.players.map(|_, p| p.game_wins),
        }
    }
}

impl RulesEngine for ChouineRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState, side: Side) -> Vec<Action> {
        let mut actions = Vec::new();
        if state.can_exchange_seven(side) {
            actions.push(Action::ExchangeSeven);
        }
        if state.is_active() && !state.trick_awaiting_clear && state.current_player == side {
            actions.extend(state.legal_cards(side).into_iter().map(Action::Play));
        }
        actions
    }

    fn apply_action(
        &self,
        state: &mut GameState,
        side: Side,
        action: Action,
    ) -> Result<Outcome, EngineError> {
        match action {
            Action::ExchangeSeven => self.exchange_seven(state, side).map(Outcome::Exchanged),
            Action::Play(card) => self.play_card(state, side, card).map(Outcome::Played),
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.result
    }
}
