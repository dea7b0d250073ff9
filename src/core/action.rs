//! Action representation.
//!
//! A side can do exactly two things at the table: swap the seven of trumps
//! for the face-up trump card, or play a card from hand. Clearing a resolved
//! trick is a table operation, not a side's action, and is not recorded.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::side::Side;

/// A move made by one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "card", rename_all = "snake_case")]
pub enum Action {
    /// Take the face-up trump card in exchange for the seven of trumps.
    ExchangeSeven,
    /// Play a card from hand into the current trick.
    Play(Card),
}

impl Action {
    /// The card played, if this is a play.
    #[must_use]
    pub fn card(&self) -> Option<Card> {
        match self {
            Action::Play(card) => Some(*card),
            Action::ExchangeSeven => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::ExchangeSeven => f.write_str("exchange seven"),
            Action::Play(card) => write!(f, "play {card}"),
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for:
/// - Replaying a seeded game exactly
/// - Debugging and self-play statistics
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The side that acted.
    pub side: Side,

    /// The action taken.
    pub action: Action,

    /// Zero-based index of the trick the action belongs to.
    pub trick: u32,

    /// Position of the action in the game's history.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(side: Side, action: Action, trick: u32, sequence: u32) -> Self {
        Self {
            side,
            action,
            trick,
            sequence,
        }
    }
}
