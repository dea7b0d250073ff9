//! Heuristic agent thresholds.
//!
//! Defaults give the standard opponent. Every threshold compares
//! against card point values, not powers.

use serde::{Deserialize, Serialize};

/// Thresholds for `HeuristicAgent`.
///
/// Missing JSON fields fall back to the defaults:
/// ```
/// use la_chouine::agent::AgentConfig;
///
/// let config: AgentConfig = serde_json::from_str(r#"{"phase2_win_threshold": 4}"#).unwrap();
/// assert_eq!(config.phase2_win_threshold, 4);
/// assert_eq!(config.min_announcement_points, 20);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Smallest announcement worth leading for.
    pub min_announcement_points: u32,

    /// Brisques needed for the agent to count a quinte in hand.
    pub quinte_threshold: usize,

    /// Phase 1: led value at which the agent wins with its weakest winner.
    pub phase1_win_threshold: u32,

    /// Phase 1: most a winning card may be worth to win a cheap trick.
    pub phase1_cheap_max_value: u32,

    /// Phase 2: led value at which the agent wins with its weakest winner.
    pub phase2_win_threshold: u32,

    /// Phase 2: most a winning card may be worth to win a cheap trick.
    pub phase2_cheap_max_value: u32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            min_announcement_points: 20,
            quinte_threshold: 5,
            phase1_win_threshold: 10,
            phase1_cheap_max_value: 0,
            phase2_win_threshold: 3,
            phase2_cheap_max_value: 2,
        }
    }
}

impl AgentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_min_announcement_points(mut self, points: u32) -> Self {
        self.min_announcement_points = points;
        self
    }

    #[must_use]
    pub fn with_quinte_threshold(mut self, brisques: usize) -> Self {
        self.quinte_threshold = brisques;
        self
    }

    /// Set the phase 1 win threshold and cheap-win ceiling.
    #[must_use]
    pub fn with_phase1(mut self, win_threshold: u32, cheap_max_value: u32) -> Self {
        self.phase1_win_threshold = win_threshold;
        self.phase1_cheap_max_value = cheap_max_value;
        self
    }

    /// Set the phase 2 win threshold and cheap-win ceiling.
    #[must_use]
    pub fn with_phase2(mut self, win_threshold: u32, cheap_max_value: u32) -> Self {
        self.phase2_win_threshold = win_threshold;
        self.phase2_cheap_max_value = cheap_max_value;
        self
    }
}
