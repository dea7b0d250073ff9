//! Errors returned by rejected engine operations.
//!
//! A rejected operation never changes the game state.

use crate::core::{Card, Side};

/// Why the engine refused an operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("{side} does not hold {card}")]
    CardNotInHand { side: Side, card: Card },

    #[error("{side} may not play {card} into this trick")]
    IllegalPlay { side: Side, card: Card },

    #[error("{side} cannot exchange the seven of trumps now")]
    InvalidExchange { side: Side },

    #[error("no game in progress")]
    NoActiveGame,

    #[error("the previous trick must be cleared first")]
    TrickAwaitingClear,

    #[error("it is not {side}'s turn")]
    NotYourTurn { side: Side },

    #[error("there is no resolved trick to clear")]
    NoTrickToClear,
}
