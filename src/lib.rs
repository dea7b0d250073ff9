//! # la-chouine
//!
//! Rules engine and heuristic opponent for La Chouine, a two-player
//! trick-taking game of the Belote family played with a 32-card deck.
//!
//! ## Design Principles
//!
//! 1. **One owner of state**: `ChouineRules` performs every transition on a
//!    `GameState`. Operations apply completely or are rejected with an
//!    `EngineError` and change nothing.
//!
//! 2. **Reproducible deals**: a `u32` seed fixes the shuffle bit for bit, so
//!    any game can be replayed from its seed and action history.
//!
//! 3. **Agents see views**: an `Agent` decides from a `PlayerView`, never
//!    from the opponent's hand or the talon order.
//!
//! ## Modules
//!
//! - `core`: sides, cards, RNG, configuration, actions, state, setup
//! - `rules`: the engine, legality, tricks, announcements, outcomes, errors
//! - `agent`: the `Agent` trait and `HeuristicAgent`
//! - `sim`: self-play matches and replay
//!
//! ## Example
//!
//! ```
//! use la_chouine::{ChouineRules, GameState, Side};
//!
//! let rules = ChouineRules::default();
//! let mut state = GameState::new();
//! let deal = rules.new_game(&mut state, Some(1));
//!
//! assert_eq!(deal.leader, Side::Human);
//! assert_eq!(state.talon_size(), 21);
//!
//! let card = state.legal_cards(Side::Human)[0];
//! rules.play_card(&mut state, Side::Human, card).unwrap();
//! assert_eq!(state.current_player(), Side::Ai);
//! ```

pub mod agent;
pub mod core;
pub mod rules;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Card, GameConfig, GameRng, GameState, GameStateBuilder, Phase,
    PlayerView, Rank, Seed, SeedStream, Side, SideMap, Stage, Suit,
};

pub use crate::rules::{
    Announcement, ChouineRules, Combination, EngineError, GameResult, Outcome, PlayOutcome,
    RulesEngine,
};

pub use crate::agent::{decide, Agent, AgentConfig, Decision, HeuristicAgent};

pub use crate::sim::{replay, GameRecord, MatchSummary, SelfPlay, SelfPlayConfig};
