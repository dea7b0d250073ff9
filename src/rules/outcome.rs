//! Structured results of successful engine operations.
//!
//! Each operation reports what changed so a driver can present it without
//! diffing the state.

use serde::{Deserialize, Serialize};

use super::announce::Announcement;
use super::engine::GameResult;
use crate::core::{Card, Phase, Seed, Side, SideMap};

/// Result of `new_game`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealSummary {
    pub seed: Seed,
    pub dealer: Side,
    /// Side to lead the first trick.
    pub leader: Side,
    pub trump_card: Card,
    pub talon_size: usize,
}

/// Result of a seven-of-trumps exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeResult {
    pub side: Side,
    /// The old face-up card, now in `side`'s hand.
    pub taken_card: Card,
    /// The seven, now face-up as the trump card.
    pub new_trump_card: Card,
}

/// A card was played and the trick is still open.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPlayed {
    pub side: Side,
    pub card: Card,
    pub announcement: Option<Announcement>,
    /// The side now expected to play.
    pub next_player: Side,
}

/// Cards drawn after a trick while the talon lasts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCards {
    pub cards: SideMap<Option<Card>>,
    /// The side that took the face-up trump card, if the talon ran out.
    pub trump_taken_by: Option<Side>,
}

/// A completed trick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickResolution {
    pub cards: SideMap<Card>,
    pub leader: Side,
    pub winner: Side,
    pub points: u32,
    /// Announcement made by the card that completed the trick.
    pub announcement: Option<Announcement>,
    pub drawn: Option<DrawnCards>,
    /// Phase after any draw. Switches to `Strict` when the talon runs out.
    pub phase: Phase,
}

/// How a game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEnd {
    /// A side played into a chouine.
    Chouine { side: Side, card: Card },
    /// Both hands ran out. The final trick winner took the bonus.
    LastTrick {
        trick: TrickResolution,
        bonus_to: Side,
        bonus: u32,
    },
}

/// Final state of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverResult {
    pub end: GameEnd,
    pub announcement: Option<Announcement>,
    pub result: GameResult,
    pub scores: SideMap<u32>,
    pub game_wins: SideMap<u32>,
}

impl GameOverResult {
    #[must_use]
    pub fn is_instant_win(&self) -> bool {
        matches!(self.end, GameEnd::Chouine { .. })
    }
}

/// Result of `play_card`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// Waiting for the other side to play.
    Waiting(CardPlayed),
    /// The trick is complete; it stays on the table until cleared.
    TrickResolved(TrickResolution),
    GameOver(GameOverResult),
}

impl PlayOutcome {
    /// Announcement made by this play, if any.
    #[must_use]
    pub fn announcement(&self) -> Option<Announcement> {
        match self {
            PlayOutcome::Waiting(played) => played.announcement,
            PlayOutcome::TrickResolved(trick) => trick.announcement,
            PlayOutcome::GameOver(over) => over.announcement,
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, PlayOutcome::GameOver(_))
    }
}

/// Result of `apply_action`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Exchanged(ExchangeResult),
    Played(PlayOutcome),
}
