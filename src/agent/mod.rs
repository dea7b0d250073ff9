//! Agents that pick moves from a `PlayerView`.
//!
//! - `Agent`: the decision trait
//! - `HeuristicAgent`: deterministic, threshold-driven baseline
//! - `decide`: choose for a side and apply through the engine

pub mod config;
pub mod decision;
pub mod heuristic;

pub use config::AgentConfig;
pub use decision::{decide, Agent, Decision};
pub use heuristic::HeuristicAgent;
