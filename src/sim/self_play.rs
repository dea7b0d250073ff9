//! Agent-vs-agent matches and exact replay.
//!
//! A match is a sequence of games on one `GameState`, so match wins carry
//! over and the deal alternates. Per-game seeds come from a `SeedStream`
//! over the match seed, which makes a whole match reproducible from one
//! number.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::agent::{decide, Agent, Decision, HeuristicAgent};
use crate::core::{ActionRecord, GameState, Seed, SeedStream, Side, SideMap};
use crate::rules::{ChouineRules, EngineError, GameResult, PlayOutcome, RulesEngine};

/// Configuration for self-play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelfPlayConfig {
    /// Number of games in the match.
    pub games: usize,

    /// Seed the per-game seeds are derived from.
    pub match_seed: u64,

    /// Maximum engine steps per game (plays, exchanges and clears).
    pub max_actions: usize,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 100,
            match_seed: 0,
            max_actions: 200,
        }
    }
}

impl SelfPlayConfig {
    /// Create a new self-play config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    #[must_use]
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set the match seed.
    #[must_use]
    pub fn with_match_seed(mut self, seed: u64) -> Self {
        self.match_seed = seed;
        self
    }

    /// Set the per-game step guard.
    #[must_use]
    pub fn with_max_actions(mut self, max: usize) -> Self {
        self.max_actions = max;
        self
    }
}

/// Failures while running or replaying games.
#[derive(Debug, thiserror::Error)]
pub enum SelfPlayError {
    #[error("engine rejected a move: {0}")]
    Engine(#[from] EngineError),

    #[error("game {game} did not finish within {limit} steps")]
    ActionLimit { game: usize, limit: usize },

    #[error("replay of seed {seed} ended differently from its record")]
    ReplayMismatch { seed: Seed },
}

/// Everything needed to reproduce one finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Position of the game in its match.
    pub index: usize,
    pub seed: Seed,
    pub dealer: Side,
    pub actions: Vec<ActionRecord>,
    pub result: GameResult,
    pub scores: SideMap<u32>,
    /// The game ended on a chouine.
    pub chouine: bool,
}

/// Aggregate results of a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub match_seed: u64,
    pub games: usize,
    pub wins: SideMap<u32>,
    pub ties: u32,
    pub chouines: u32,
    pub average_scores: SideMap<f64>,
}

impl MatchSummary {
    /// Summarize finished games.
    #[must_use]
    pub fn from_records(match_seed: u64, records: &[GameRecord]) -> Self {
        let mut wins: SideMap<u32> = SideMap::with_default();
        let mut ties = 0;
        let mut chouines = 0;
        let mut totals: SideMap<u64> = SideMap::with_default();

        for record in records {
            match record.result {
                GameResult::Winner(side) => wins[side] += 1,
                GameResult::Tie => ties += 1,
            }
            if record.chouine {
                chouines += 1;
            }
            for (side, &score) in record.scores.iter() {
                totals[side] += u64::from(score);
            }
        }

        let games = records.len();
        let average_scores = totals.map(|_, &total| {
            if games == 0 {
                0.0
            } else {
                total as f64 / games as f64
            }
        });

        Self {
            match_seed,
            games,
            wins,
            ties,
            chouines,
            average_scores,
        }
    }
}

/// Runs complete games between two agents.
pub struct SelfPlay {
    rules: ChouineRules,
    agents: SideMap<Box<dyn Agent>>,
    config: SelfPlayConfig,
}

impl SelfPlay {
    /// Heuristic agents with default thresholds on both sides.
    pub fn new(rules: ChouineRules, config: SelfPlayConfig) -> Self {
        Self::with_agents(
            rules,
            config,
            Box::new(HeuristicAgent::default()),
            Box::new(HeuristicAgent::default()),
        )
    }

    pub fn with_agents(
        rules: ChouineRules,
        config: SelfPlayConfig,
        human: Box<dyn Agent>,
        ai: Box<dyn Agent>,
    ) -> Self {
        Self {
            rules,
            agents: SideMap::from_pair(human, ai),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }

    /// Play the configured number of games.
    pub fn run(&self) -> Result<(Vec<GameRecord>, MatchSummary), SelfPlayError> {
        let mut seeds = SeedStream::new(self.config.match_seed);
        let mut state = GameState::new();
        let mut records = Vec::with_capacity(self.config.games);

        for index in 0..self.config.games {
            let record = self.play_game(&mut state, index, seeds.next_seed())?;
            records.push(record);
        }

        let summary = MatchSummary::from_records(self.config.match_seed, &records);
        debug!(
            games = summary.games,
            human_wins = summary.wins[Side::Human],
            ai_wins = summary.wins[Side::Ai],
            ties = summary.ties,
            "match finished"
        );
        Ok((records, summary))
    }

    /// Deal and play one game to the end on `state`.
    pub fn play_game(
        &self,
        state: &mut GameState,
        index: usize,
        seed: Seed,
    ) -> Result<GameRecord, SelfPlayError> {
        let deal = self.rules.new_game(state, Some(seed));
        let mut chouine = false;

        for _ in 0..self.config.max_actions {
            if let Some(result) = self.rules.is_terminal(state) {
                debug!(index, seed, ?result, chouine, "game finished");
                return Ok(GameRecord {
                    index,
                    seed,
                    dealer: deal.dealer,
                    actions: state.history().to_vec(),
                    result,
                    scores: state.scores(),
                    chouine,
                });
            }

            if state.trick_awaiting_clear() {
                self.rules.clear_trick(state)?;
                continue;
            }

            let side = state.current_player();
            let decision = decide(self.agents[side].as_ref(), &self.rules, state, side)?;
            if let Decision::Play {
                outcome: PlayOutcome::GameOver(over),
                ..
            } = &decision
            {
                chouine = over.is_instant_win();
            }
        }

        Err(SelfPlayError::ActionLimit {
            game: index,
            limit: self.config.max_actions,
        })
    }
}

/// Re-run a recorded game from its seed and dealer.
///
/// Returns the final state, or `ReplayMismatch` if the result or scores
/// differ from the record.
pub fn replay(rules: &ChouineRules, record: &GameRecord) -> Result<GameState, SelfPlayError> {
    let mut state = GameState::new();
    rules.deal(&mut state, record.seed, record.dealer);

    for entry in &record.actions {
        if state.trick_awaiting_clear() {
            rules.clear_trick(&mut state)?;
        }
        rules.apply_action(&mut state, entry.side, entry.action)?;
    }

    if rules.is_terminal(&state) != Some(record.result) || state.scores() != record.scores {
        return Err(SelfPlayError::ReplayMismatch { seed: record.seed });
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = SelfPlayConfig::new()
            .with_games(3)
            .with_match_seed(9)
            .with_max_actions(50);

        assert_eq!(config.games, 3);
        assert_eq!(config.match_seed, 9);
        assert_eq!(config.max_actions, 50);
    }

    #[test]
    fn test_summary_of_nothing() {
        let summary = MatchSummary::from_records(1, &[]);

        assert_eq!(summary.games, 0);
        assert_eq!(summary.ties, 0);
        assert_eq!(summary.average_scores[Side::Human], 0.0);
    }

    #[test]
    fn test_summary_counts() {
        let record = |result, chouine, scores: (u32, u32)| GameRecord {
            index: 0,
            seed: 0,
            dealer: Side::Ai,
            actions: Vec::new(),
            result,
            scores: SideMap::from_pair(scores.0, scores.1),
            chouine,
        };
        let records = vec![
            record(GameResult::Winner(Side::Human), false, (80, 50)),
            record(GameResult::Winner(Side::Ai), true, (10, 0)),
            record(GameResult::Tie, false, (60, 60)),
        ];

        let summary = MatchSummary::from_records(5, &records);

        assert_eq!(summary.wins, SideMap::from_pair(1, 1));
        assert_eq!(summary.ties, 1);
        assert_eq!(summary.chouines, 1);
        assert_eq!(summary.average_scores[Side::Human], 50.0);
        assert_eq!(summary.average_scores[Side::Ai], 110.0 / 3.0);
    }

    #[test]
    fn test_step_guard() {
        let selfplay = SelfPlay::new(
            ChouineRules::default(),
            SelfPlayConfig::new().with_games(1).with_max_actions(3),
        );

        let err = selfplay.run().unwrap_err();
        assert!(matches!(err, SelfPlayError::ActionLimit { game: 0, limit: 3 }));
    }
}
