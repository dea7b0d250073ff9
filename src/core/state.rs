//! Game state: the aggregate root for one La Chouine match.
//!
//! ## GameState
//!
//! Complete table state:
//! - Both sides' hands, won cards, scores, match wins and claimed combinations
//! - The talon and the face-up trump card
//! - The trick on the table and whose turn it is
//! - Phase, exchange flag, pending-clear flag and the game result
//! - The action history of the current game
//!
//! The state is plain data. `ChouineRules` (in `rules`) is the only thing
//! that mutates it during play; readers use the query methods here or take a
//! `PlayerView` with [`GameState::view`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::ActionRecord;
use super::card::{Card, Rank, Suit, DECK_SIZE};
use super::rng::{GameRng, Seed};
use super::side::{Side, SideMap};
use crate::rules::announce::{AnnouncedCombos, Announcement};
use crate::rules::engine::GameResult;
use crate::rules::legality;

/// A hand of cards. Hands never exceed a handful of cards, so they live inline.
pub type Hand = SmallVec<[Card; 8]>;

/// Play phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Talon still has cards: any card may be played.
    #[default]
    Free,
    /// Talon exhausted: follow suit, else trump.
    Strict,
}

impl Phase {
    /// Phase number as shown at the table (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Phase::Free => 1,
            Phase::Strict => 2,
        }
    }
}

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// No game has been dealt yet.
    Dealing,
    /// A side may play (or exchange).
    Playing(Phase),
    /// Both cards of a resolved trick are still on the table.
    TrickPendingClear,
    /// The game has a result.
    GameOver,
}

/// The face-down draw pile. The top of the talon is the end of the vec.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talon {
    cards: Vec<Card>,
}

impl Talon {
    /// A fresh 32-card talon shuffled from `seed`.
    #[must_use]
    pub fn shuffled(seed: Seed) -> Self {
        let mut cards = Card::full_deck();
        GameRng::new(seed).shuffle(&mut cards);
        Self { cards }
    }

    /// A talon with an explicit order (top = last).
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Per-side state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Cards in hand, in the order they were received.
    pub hand: Hand,
    /// Cards won in tricks.
    pub tricks: Vec<Card>,
    /// Points banked this game.
    pub score: u32,
    /// Games won this match.
    pub game_wins: u32,
    /// Combination keys already claimed this game.
    pub announced: AnnouncedCombos,
    /// Announcements scored this game, in order.
    pub announcements: Vec<Announcement>,
}

impl PlayerState {
    /// Clear everything except the match tally.
    pub(crate) fn reset_for_game(&mut self) {
        let game_wins = self.game_wins;
        *self = Self {
            game_wins,
            ..Self::default()
        };
    }
}

/// The trick on the table: at most one card per side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    cards: SideMap<Option<Card>>,
    leader: Option<Side>,
}

impl Trick {
    /// The card `side` has on the table.
    #[must_use]
    pub fn card(&self, side: Side) -> Option<Card> {
        self.cards[side]
    }

    /// The side that played first, if anyone has played.
    #[must_use]
    pub fn leader(&self) -> Option<Side> {
        self.leader
    }

    /// The led card `side` must answer, if the other side already played.
    #[must_use]
    pub fn led_card_for(&self, side: Side) -> Option<Card> {
        self.cards[side.opponent()]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leader.is_none()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(|(_, c)| c.is_some())
    }

    /// Number of cards on the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.iter().filter(|(_, c)| c.is_some()).count()
    }

    pub(crate) fn place(&mut self, side: Side, card: Card) {
        if self.leader.is_none() {
            self.leader = Some(side);
        }
        self.cards[side] = Some(card);
    }
}

/// Card conservation was violated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("expected 32 cards in play, found {found}")]
pub struct CardConservationError {
    pub found: usize,
}

/// Full game state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) players: SideMap<PlayerState>,
    pub(crate) talon: Talon,
    pub(crate) trump_card: Option<Card>,
    pub(crate) trump_suit: Option<Suit>,
    pub(crate) trick: Trick,
    pub(crate) current_player: Side,
    pub(crate) dealer: Option<Side>,
    pub(crate) phase: Phase,
    pub(crate) seven_exchanged: bool,
    pub(crate) trick_awaiting_clear: bool,
    pub(crate) last_trick_winner: Option<Side>,
    pub(crate) tricks_played: u32,
    pub(crate) result: Option<GameResult>,
    pub(crate) seed: Option<Seed>,
    pub(crate) dealt: bool,
    pub(crate) history: Vec<ActionRecord>,
}

impl GameState {
    /// An empty table, waiting for the first deal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Per-side queries ===

    #[must_use]
    pub fn player(&self, side: Side) -> &PlayerState {
        &self.players[side]
    }

    #[must_use]
    pub fn hand(&self, side: Side) -> &[Card] {
        &self.players[side].hand
    }

    #[must_use]
    pub fn tricks(&self, side: Side) -> &[Card] {
        &self.players[side].tricks
    }

    #[must_use]
    pub fn score(&self, side: Side) -> u32 {
        self.players[side].score
    }

    #[must_use]
    pub fn scores(&self) -> SideMap<u32> {
        self.players.map(|_, p| p.score)
    }

    #[must_use]
    pub fn game_wins(&self, side: Side) -> u32 {
        self.players[side].game_wins
    }

    #[must_use]
    pub fn announced_combos(&self, side: Side) -> AnnouncedCombos {
        self.players[side].announced
    }

    // === Table queries ===

    #[must_use]
    pub fn trump_card(&self) -> Option<Card> {
        self.trump_card
    }

    #[must_use]
    pub fn trump_suit(&self) -> Option<Suit> {
        self.trump_suit
    }

    #[must_use]
    pub fn current_trick(&self) -> &Trick {
        &self.trick
    }

    #[must_use]
    pub fn current_player(&self) -> Side {
        self.current_player
    }

    /// Dealer of the current game; `None` before the first deal.
    #[must_use]
    pub fn dealer(&self) -> Option<Side> {
        self.dealer
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn talon(&self) -> &Talon {
        &self.talon
    }

    #[must_use]
    pub fn talon_size(&self) -> usize {
        self.talon.len()
    }

    /// True once the last talon card and the trump card have been taken.
    #[must_use]
    pub fn talon_empty(&self) -> bool {
        self.phase == Phase::Strict
    }

    #[must_use]
    pub fn seven_exchanged(&self) -> bool {
        self.seven_exchanged
    }

    #[must_use]
    pub fn trick_awaiting_clear(&self) -> bool {
        self.trick_awaiting_clear
    }

    #[must_use]
    pub fn last_trick_winner(&self) -> Option<Side> {
        self.last_trick_winner
    }

    /// Tricks resolved so far this game.
    #[must_use]
    pub fn tricks_played(&self) -> u32 {
        self.tricks_played
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn game_result(&self) -> Option<GameResult> {
        self.result
    }

    /// Seed of the current deal (`None` for hand-built positions).
    #[must_use]
    pub fn seed(&self) -> Option<Seed> {
        self.seed
    }

    /// Actions taken this game, in order.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// A game has been dealt and has no result yet.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.dealt && self.result.is_none()
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        if !self.dealt {
            Stage::Dealing
        } else if self.result.is_some() {
            Stage::GameOver
        } else if self.trick_awaiting_clear {
            Stage::TrickPendingClear
        } else {
            Stage::Playing(self.phase)
        }
    }

    // === Rules queries ===

    /// Whether `side` may swap the seven of trumps for the trump card now.
    #[must_use]
    pub fn can_exchange_seven(&self, side: Side) -> bool {
        if !self.is_active() || self.seven_exchanged || self.phase != Phase::Free {
            return false;
        }
        if self.talon.is_empty() || self.trump_card.is_none() {
            return false;
        }
        match self.trump_suit {
            Some(trump) => self.hand(side).contains(&Card::new(trump, Rank::Seven)),
            None => false,
        }
    }

    /// Card `side` must answer, if any. A resolved trick waiting to be
    /// cleared asks nothing of anyone: the next leader answers no card.
    #[must_use]
    pub fn led_card_for(&self, side: Side) -> Option<Card> {
        if self.trick_awaiting_clear {
            None
        } else {
            self.trick.led_card_for(side)
        }
    }

    /// Whether `side` may play `card` into the current trick.
    ///
    /// Only the card rules are checked here; turn order and the pending-clear
    /// state are enforced by `ChouineRules::play_card`. While a resolved
    /// trick waits to be cleared, cards are judged as leads.
    #[must_use]
    pub fn is_legal_play(&self, side: Side, card: Card) -> bool {
        match self.trump_suit {
            Some(trump) => legality::is_legal_play(
                self.hand(side),
                card,
                self.led_card_for(side),
                trump,
                self.phase,
            ),
            None => false,
        }
    }

    /// All cards `side` could legally play into the current trick.
    #[must_use]
    pub fn legal_cards(&self, side: Side) -> Hand {
        match self.trump_suit {
            Some(trump) => legality::legal_cards(
                self.hand(side),
                self.led_card_for(side),
                trump,
                self.phase,
            ),
            None => Hand::new(),
        }
    }

    // === Invariants ===

    /// Cards currently accounted for across talon, trump card, hands, won
    /// tricks and any unresolved card on the table.
    ///
    /// A resolved trick's cards are already in the winner's tricks while they
    /// wait on the table, so they are only counted once.
    #[must_use]
    pub fn accounted_cards(&self) -> usize {
        let on_table = if self.trick_awaiting_clear { 0 } else { self.trick.len() };
        let held: usize = self
            .players
            .iter()
            .map(|(_, p)| p.hand.len() + p.tricks.len())
            .sum();
        self.talon.len() + usize::from(self.trump_card.is_some()) + held + on_table
    }

    /// Check that all 32 cards are accounted for. Always holds outside of
    /// [`Stage::Dealing`].
    pub fn check_card_conservation(&self) -> Result<(), CardConservationError> {
        let found = self.accounted_cards();
        if found == DECK_SIZE {
            Ok(())
        } else {
            Err(CardConservationError { found })
        }
    }

    // === Mutation helpers (engine only) ===

    /// Remove a card from a hand, keeping the order of the rest.
    pub(crate) fn remove_from_hand(&mut self, side: Side, card: Card) -> bool {
        let hand = &mut self.players[side].hand;
        if let Some(pos) = hand.iter().position(|&c| c == card) {
            hand.remove(pos);
            true
        } else {
            false
        }
    }

    pub(crate) fn record(&mut self, side: Side, action: super::action::Action) {
        let sequence = self.history.len() as u32;
        self.history
            .push(ActionRecord::new(side, action, self.tricks_played, sequence));
    }
}
