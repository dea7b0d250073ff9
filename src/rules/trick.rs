//! Trick resolution.

use crate::core::{Card, Side, Suit};

/// Whether `challenger` takes a trick led with `led`.
///
/// Same suit: higher power wins. A trump beats any non-trump. Anything else
/// loses to the led card.
#[must_use]
pub fn beats(challenger: Card, led: Card, trump: Suit) -> bool {
    if challenger.suit == led.suit {
        challenger.power() > led.power()
    } else {
        challenger.suit == trump
    }
}

/// Winner of a two-card trick.
#[must_use]
pub fn trick_winner(leader: Side, led: Card, reply: Card, trump: Suit) -> Side {
    if beats(reply, led, trump) {
        leader.opponent()
    } else {
        leader
    }
}

/// Card points in a trick.
#[must_use]
pub fn trick_points(cards: &[Card]) -> u32 {
    cards.iter().map(|c| c.value()).sum()
}
