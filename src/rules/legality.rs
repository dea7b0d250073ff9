//! Card-play legality.
//!
//! Phase 1 (talon not exhausted): anything in hand may be played.
//!
//! Phase 2, when following:
//! - holding the led suit: must play that suit
//! - void in the led suit: must trump when able
//! - otherwise anything goes
//!
//! There is no obligation to beat the led card. A trump lead falls under the
//! follow-suit rule, so holding any trump satisfies it.
//!
//! The leader may always play any card in hand.

use crate::core::{Card, Hand, Phase, Suit};

/// Whether `card`, held in `hand`, may be played against `led`.
///
/// `led` is `None` when leading the trick.
#[must_use]
pub fn is_legal_play(
    hand: &[Card],
    card: Card,
    led: Option<Card>,
    trump: Suit,
    phase: Phase,
) -> bool {
    if !hand.contains(&card) {
        return false;
    }
    let Some(led) = led else {
        return true;
    };
    if phase == Phase::Free {
        return true;
    }

    if hand.iter().any(|c| c.suit == led.suit) {
        return card.suit == led.suit;
    }

    let holds_trump = hand.iter().any(|c| c.suit == trump);
    !holds_trump || card.suit == trump
}

/// The cards of `hand` that may be played against `led`, in hand order.
#[must_use]
pub fn legal_cards(hand: &[Card], led: Option<Card>, trump: Suit, phase: Phase) -> Hand {
    hand.iter()
        .copied()
        .filter(|&c| is_legal_play(hand, c, led, trump, phase))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_cards;

    fn hand(tokens: &[&str]) -> Vec<Card> {
        parse_cards(tokens).unwrap()
    }

    fn card(token: &str) -> Card {
        token.parse().unwrap()
    }

    #[test]
    fn test_phase_one_allows_anything() {
        let h = hand(&["A♥", "7♠", "9♣"]);

        for &c in &h {
            assert!(is_legal_play(&h, c, Some(card("K♥")), Suit::Clubs, Phase::Free));
        }
    }

    #[test]
    fn test_card_must_be_in_hand() {
        let h = hand(&["A♥"]);
        assert!(!is_legal_play(&h, card("7♠"), None, Suit::Clubs, Phase::Free));
    }

    #[test]
    fn test_leader_plays_freely_in_phase_two() {
        let h = hand(&["A♥", "7♠", "9♣"]);
        assert_eq!(legal_cards(&h, None, Suit::Clubs, Phase::Strict).len(), 3);
    }

    #[test]
    fn test_must_follow_suit() {
        let h = hand(&["J♥", "A♥", "7♣", "8♠"]);
        let legal = legal_cards(&h, Some(card("K♥")), Suit::Clubs, Phase::Strict);

        assert_eq!(legal.as_slice(), &[card("J♥"), card("A♥")]);
    }

    #[test]
    fn test_must_trump_when_void() {
        let h = hand(&["7♣", "A♠", "10♣"]);
        let legal = legal_cards(&h, Some(card("K♥")), Suit::Clubs, Phase::Strict);

        assert_eq!(legal.as_slice(), &[card("7♣"), card("10♣")]);
    }

    #[test]
    fn test_discard_when_void_and_no_trump() {
        let h = hand(&["A♠", "9♦"]);
        let legal = legal_cards(&h, Some(card("K♥")), Suit::Clubs, Phase::Strict);

        assert_eq!(legal.as_slice(), h.as_slice());
    }

    #[test]
    fn test_trump_lead_needs_any_trump() {
        let h = hand(&["8♣", "A♣", "A♥"]);
        let legal = legal_cards(&h, Some(card("J♣")), Suit::Clubs, Phase::Strict);

        assert_eq!(legal.as_slice(), &[card("8♣"), card("A♣")]);
    }
}
