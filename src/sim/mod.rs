//! Self-play matches between agents, and replay of recorded games.

pub mod self_play;

pub use self_play::{replay, GameRecord, MatchSummary, SelfPlay, SelfPlayConfig, SelfPlayError};
