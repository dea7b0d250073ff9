//! Explicit position setup.
//!
//! `GameStateBuilder` places cards by hand instead of dealing from a seed.
//! Drivers use it for puzzles and endgame studies; tests use it to reach a
//! specific position directly.
//!
//! ```
//! use la_chouine::core::{parse_cards, Card, GameState, Side};
//!
//! let state = GameState::builder()
//!     .hand(Side::Human, parse_cards(["A♥", "K♠"]).unwrap())
//!     .hand(Side::Ai, parse_cards(["10♥", "7♠"]).unwrap())
//!     .trump_card("9♣".parse().unwrap())
//!     .talon(parse_cards(["Q♦", "J♦"]).unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert!(state.check_card_conservation().is_ok());
//! assert_eq!(state.tricks(Side::Human).len(), 25);
//! ```

use super::card::{Card, Suit, DECK_SIZE};
use super::config::MAX_HAND_SIZE;
use super::side::{Side, SideMap};
use super::state::{GameState, Phase, Talon};

/// Invalid explicit position.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("{0} is placed more than once")]
    DuplicateCard(Card),

    #[error("no trump card or trump suit given")]
    MissingTrump,

    #[error("trump card {card} does not match trump suit {suit}")]
    TrumpMismatch { card: Card, suit: Suit },

    #[error("{side} holds {size} cards, more than {max}", max = MAX_HAND_SIZE)]
    HandTooLarge { side: Side, size: usize },

    #[error("hands of {human} and {ai} cards differ by more than one")]
    UnevenHands { human: usize, ai: usize },

    #[error("trump card {0} is face up but the talon is empty")]
    TrumpWithoutTalon(Card),
}

/// Builder for a `GameState` in an arbitrary mid-game position.
#[derive(Clone, Debug, Default)]
pub struct GameStateBuilder {
    hands: SideMap<Vec<Card>>,
    trump_card: Option<Card>,
    trump_suit: Option<Suit>,
    talon: Vec<Card>,
    current_player: Side,
    dealer: Option<Side>,
    phase: Option<Phase>,
    scores: SideMap<u32>,
    game_wins: SideMap<u32>,
    seven_exchanged: bool,
    leftover_to: Side,
}

impl GameState {
    /// Start building an explicit position.
    #[must_use]
    pub fn builder() -> GameStateBuilder {
        GameStateBuilder::default()
    }
}

impl GameStateBuilder {
    /// Set a side's hand, in order.
    #[must_use]
    pub fn hand(mut self, side: Side, cards: Vec<Card>) -> Self {
        self.hands[side] = cards;
        self
    }

    /// Set the face-up trump card. Also fixes the trump suit.
    #[must_use]
    pub fn trump_card(mut self, card: Card) -> Self {
        self.trump_card = Some(card);
        self
    }

    /// Set the trump suit without a face-up card (after the talon ran out).
    #[must_use]
    pub fn trump_suit(mut self, suit: Suit) -> Self {
        self.trump_suit = Some(suit);
        self
    }

    /// Set the talon; the last card is the top.
    #[must_use]
    pub fn talon(mut self, cards: Vec<Card>) -> Self {
        self.talon = cards;
        self
    }

    #[must_use]
    pub fn current_player(mut self, side: Side) -> Self {
        self.current_player = side;
        self
    }

    #[must_use]
    pub fn dealer(mut self, side: Side) -> Self {
        self.dealer = Some(side);
        self
    }

    /// Force the phase. By default the phase is strict exactly when the talon
    /// is empty.
    #[must_use]
    pub fn phase(mut self, phase: Phase) -> Self {
        self.phase = Some(phase);
        self
    }

    #[must_use]
    pub fn score(mut self, side: Side, score: u32) -> Self {
        self.scores[side] = score;
        self
    }

    #[must_use]
    pub fn game_wins(mut self, side: Side, wins: u32) -> Self {
        self.game_wins[side] = wins;
        self
    }

    #[must_use]
    pub fn seven_exchanged(mut self, exchanged: bool) -> Self {
        self.seven_exchanged = exchanged;
        self
    }

    /// Side whose won tricks receive every card not placed elsewhere.
    #[must_use]
    pub fn leftover_to(mut self, side: Side) -> Self {
        self.leftover_to = side;
        self
    }

    /// Validate and build the position.
    pub fn build(self) -> Result<GameState, SetupError> {
        let trump_suit = match (self.trump_card, self.trump_suit) {
            (Some(card), Some(suit)) if card.suit != suit => {
                return Err(SetupError::TrumpMismatch { card, suit });
            }
            (Some(card), _) => card.suit,
            (None, Some(suit)) => suit,
            (None, None) => return Err(SetupError::MissingTrump),
        };

        for (side, hand) in self.hands.iter() {
            if hand.len() > MAX_HAND_SIZE {
                return Err(SetupError::HandTooLarge {
                    side,
                    size: hand.len(),
                });
            }
        }

        let (human, ai) = (self.hands[Side::Human].len(), self.hands[Side::Ai].len());
        if human.abs_diff(ai) > 1 {
            return Err(SetupError::UnevenHands { human, ai });
        }

        // The loser of the trick that empties the talon takes the trump card.
        match self.trump_card {
            Some(card) if self.talon.is_empty() => return Err(SetupError::TrumpWithoutTalon(card)),
            _ => {}
        }

        let mut placed: Vec<Card> = Vec::with_capacity(DECK_SIZE);
        let all_placed = self
            .hands
            .iter()
            .flat_map(|(_, hand)| hand.iter())
            .chain(self.talon.iter())
            .chain(self.trump_card.iter());
        for &card in all_placed {
            if placed.contains(&card) {
                return Err(SetupError::DuplicateCard(card));
            }
            placed.push(card);
        }

        let phase = self.phase.unwrap_or(if self.talon.is_empty() {
            Phase::Strict
        } else {
            Phase::Free
        });

        let mut state = GameState::new();
        for side in Side::ALL {
            let player = &mut state.players[side];
            player.hand = self.hands[side].iter().copied().collect();
            player.score = self.scores[side];
            player.game_wins = self.game_wins[side];
        }
        state.players[self.leftover_to].tricks = Card::full_deck()
            .into_iter()
            .filter(|card| !placed.contains(card))
            .collect();

        state.talon = Talon::from_cards(self.talon);
        state.trump_card = self.trump_card;
        state.trump_suit = Some(trump_suit);
        state.current_player = self.current_player;
        state.dealer = Some(self.dealer.unwrap_or(self.current_player.opponent()));
        state.phase = phase;
        state.seven_exchanged = self.seven_exchanged;
        state.last_trick_winner = Some(self.current_player);
        state.dealt = true;

        Ok(state)
    }
}
