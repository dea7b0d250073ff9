//! Agent trait and the choose-then-apply step.

use tracing::warn;

use crate::core::{Action, Card, GameState, PlayerView, Side};
use crate::rules::{ChouineRules, EngineError, ExchangeResult, PlayOutcome};

/// Something that picks moves for one side.
///
/// Implementations see only a `PlayerView` and must return an action that
/// is legal in it, or `None` when the side has nothing to do.
pub trait Agent: Send + Sync {
    /// Short name for logs and reports.
    fn name(&self) -> &str;

    /// Choose the next action.
    fn choose(&self, view: &PlayerView<'_>) -> Option<Action>;
}

/// An agent's move after the engine applied it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// The agent exchanged the seven of trumps. It has not played yet.
    Exchange { result: ExchangeResult },
    Play { card: Card, outcome: PlayOutcome },
}

/// Let `agent` choose for `side` and apply the choice.
///
/// Errors are the engine's: if the agent has nothing to do, the error says
/// why the side cannot act; if the engine rejects the choice, the rejection
/// is logged and returned unchanged.
pub fn decide<A: Agent + ?Sized>(
    agent: &A,
    rules: &ChouineRules,
    state: &mut GameState,
    side: Side,
) -> Result<Decision, EngineError> {
    let Some(action) = agent.choose(&state.view(side)) else {
        return Err(idle_reason(state, side));
    };

    let applied = match action {
        Action::ExchangeSeven => rules
            .exchange_seven(state, side)
            .map(|result| Decision::Exchange { result }),
        Action::Play(card) => rules
            .play_card(state, side, card)
            .map(|outcome| Decision::Play { card, outcome }),
    };

    applied.map_err(|err| {
        warn!(agent = agent.name(), %side, %action, %err, "engine rejected agent action");
        err
    })
}

fn idle_reason(state: &GameState, side: Side) -> EngineError {
    if !state.is_active() {
        EngineError::NoActiveGame
    } else if state.trick_awaiting_clear() {
        EngineError::TrickAwaitingClear
    } else {
        EngineError::NotYourTurn { side }
    }
}
