//! Rules of La Chouine.
//!
//! - `engine`: `ChouineRules`, the only thing that mutates a `GameState`
//! - `legality`: which cards may be played
//! - `trick`: who takes a trick
//! - `announce`: combination detection and claims
//! - `outcome`: structured results of successful operations
//! - `error`: rejected operations

pub mod announce;
pub mod engine;
pub mod error;
pub mod legality;
pub mod outcome;
pub mod trick;

pub use announce::{AnnouncedCombos, Announcement, ComboKey, Combination};
pub use engine::{ChouineRules, GameResult, RulesEngine};
pub use error::EngineError;
pub use outcome::{
    CardPlayed, DealSummary, DrawnCards, ExchangeResult, GameEnd, GameOverResult, Outcome,
    PlayOutcome, TrickResolution,
};
