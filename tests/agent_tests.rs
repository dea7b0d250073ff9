//! Heuristic agent integration tests.

use la_chouine::agent::{decide, Agent, AgentConfig, Decision, HeuristicAgent};
use la_chouine::core::{parse_cards, Card, GameState, Side};
use la_chouine::rules::{ChouineRules, EngineError, PlayOutcome};
use la_chouine::Action;

fn card(token: &str) -> Card {
    token.parse().unwrap()
}

fn cards(tokens: &[&str]) -> Vec<Card> {
    parse_cards(tokens).unwrap()
}

/// Human leads `led`; the ai then holds `ai_hand`. Phase 1, clubs trump.
fn ai_following(led: &str, ai_hand: &[&str]) -> (ChouineRules, GameState) {
    let rules = ChouineRules::default();
    let mut state = GameState::builder()
        .hand(Side::Human, vec![card(led), card("7♦")])
        .hand(Side::Ai, cards(ai_hand))
        .trump_card(card("9♣"))
        .talon(cards(&["8♦", "9♦"]))
        .build()
        .unwrap();
    rules.play_card(&mut state, Side::Human, card(led)).unwrap();
    (rules, state)
}

// =============================================================================
// Following
// =============================================================================

#[test]
fn test_lowest_power_winner_against_ten() {
    // Both the ace of hearts and the eight of trumps take the ten; the trump
    // eight has the lower power.
    let (_, state) = ai_following("10♥", &["A♥", "8♣", "K♠"]);
    let agent = HeuristicAgent::default();

    assert_eq!(agent.choose(&state.view(Side::Ai)), Some(Action::Play(card("8♣"))));
}

#[test]
fn test_equal_power_winners_keep_hand_order() {
    let (_, state) = ai_following("10♥", &["A♥", "A♣", "K♠"]);
    let agent = HeuristicAgent::default();

    // A♥ and A♣ tie on power: the first in hand wins.
    assert_eq!(agent.choose(&state.view(Side::Ai)), Some(Action::Play(card("A♥"))));
}

#[test]
fn test_takes_cheap_lead_with_zero_value_winner() {
    let (_, state) = ai_following("8♥", &["K♥", "9♥", "7♠"]);
    let agent = HeuristicAgent::default();

    // K♥ and 9♥ both win; only the nine is worth nothing.
    assert_eq!(agent.choose(&state.view(Side::Ai)), Some(Action::Play(card("9♥"))));
}

#[test]
fn test_plays_weakest_when_nothing_wins() {
    let (_, state) = ai_following("A♥", &["K♠", "J♦", "Q♠"]);
    let agent = HeuristicAgent::default();

    assert_eq!(agent.choose(&state.view(Side::Ai)), Some(Action::Play(card("J♦"))));
}

#[test]
fn test_phase_two_follow_thresholds() {
    let rules = ChouineRules::default();
    let mut state = GameState::builder()
        .hand(Side::Human, cards(&["Q♥", "7♦"]))
        .hand(Side::Ai, cards(&["A♥", "K♥", "8♥"]))
        .trump_suit(la_chouine::Suit::Clubs)
        .build()
        .unwrap();
    rules.play_card(&mut state, Side::Human, card("Q♥")).unwrap();

    // Queen is worth 3: win with the weakest winner.
    let agent = HeuristicAgent::default();
    assert_eq!(agent.choose(&state.view(Side::Ai)), Some(Action::Play(card("K♥"))));

    // Raise the bar and the agent plays low instead.
    let timid = HeuristicAgent::new(AgentConfig::new().with_phase2(4, 2));
    assert_eq!(timid.choose(&state.view(Side::Ai)), Some(Action::Play(card("8♥"))));
}

// =============================================================================
// decide
// =============================================================================

#[test]
fn test_decide_exchanges_then_plays() {
    let rules = ChouineRules::default();
    let mut state = GameState::builder()
        .hand(Side::Human, cards(&["9♦", "J♣", "Q♣"]))
        .hand(Side::Ai, cards(&["7♠", "8♥", "9♥"]))
        .trump_card(card("A♠"))
        .talon(cards(&["8♦", "7♦"]))
        .current_player(Side::Ai)
        .build()
        .unwrap();
    let agent = HeuristicAgent::default();

    let first = decide(&agent, &rules, &mut state, Side::Ai).unwrap();
    assert!(matches!(first, Decision::Exchange { ref result } if result.taken_card == card("A♠")));
    assert_eq!(state.current_player(), Side::Ai);

    // No plain brisque left, so the trump ace leads.
    let second = decide(&agent, &rules, &mut state, Side::Ai).unwrap();
    assert!(matches!(second, Decision::Play { card: c, .. } if c == card("A♠")));
}

#[test]
fn test_decide_reports_why_side_is_idle() {
    let rules = ChouineRules::default();
    let agent = HeuristicAgent::default();
    let mut state = GameState::new();

    assert_eq!(
        decide(&agent, &rules, &mut state, Side::Ai),
        Err(EngineError::NoActiveGame)
    );

    rules.new_game(&mut state, Some(1));
    assert_eq!(
        decide(&agent, &rules, &mut state, Side::Ai),
        Err(EngineError::NotYourTurn { side: Side::Ai })
    );
}

#[test]
fn test_agents_finish_many_games_without_rejections() {
    let rules = ChouineRules::default();
    let agent = HeuristicAgent::default();

    for seed in 0..200 {
        let mut state = GameState::new();
        rules.new_game(&mut state, Some(seed));

        while !state.is_game_over() {
            if state.trick_awaiting_clear() {
                rules.clear_trick(&mut state).unwrap();
                continue;
            }
            let side = state.current_player();
            let decision = decide(&agent, &rules, &mut state, side)
                .unwrap_or_else(|err| panic!("seed {seed}: {err}"));
            if let Decision::Play { outcome: PlayOutcome::GameOver(_), .. } = decision {
                break;
            }
        }

        assert!(state.is_game_over(), "seed {seed}");
        state.check_card_conservation().unwrap();
    }
}

#[test]
fn test_agent_is_object_safe() {
    let agents: Vec<Box<dyn Agent>> = vec![Box::new(HeuristicAgent::default())];

    assert_eq!(agents[0].name(), "heuristic");
}
