//! Combination detection and announcement bookkeeping.
//!
//! When a side plays a card, the cards it held just before the play (hand
//! after removal plus the played card) are checked, in order:
//!
//! 1. Chouine (A, 10, K, Q, J) in the played card's suit: instant win.
//! 2. Quinte (five brisques, any suits), once per game.
//! 3. Quarteron, tierce, mariage in the played card's suit, once per suit.
//!
//! The first match is the announcement. Claimed keys live in
//! [`AnnouncedCombos`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Card, Rank, Suit};

/// A scoring combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combination {
    Chouine,
    Quinte,
    Quarteron,
    Tierce,
    Mariage,
}

impl Combination {
    /// Suit combinations, most valuable first.
    pub const SUIT_ORDER: [Combination; 4] = [
        Combination::Chouine,
        Combination::Quarteron,
        Combination::Tierce,
        Combination::Mariage,
    ];

    /// Points declared for this combination. A chouine wins the game outright
    /// and declares nothing.
    #[must_use]
    pub const fn points(self, in_trump: bool) -> u32 {
        match (self, in_trump) {
            (Combination::Chouine, _) => 0,
            (Combination::Quinte, _) => 100,
            (Combination::Quarteron, true) => 80,
            (Combination::Quarteron, false) => 40,
            (Combination::Tierce, true) => 60,
            (Combination::Tierce, false) => 30,
            (Combination::Mariage, true) => 40,
            (Combination::Mariage, false) => 20,
        }
    }

    /// Ranks that must all be present in one suit. Empty for the quinte.
    #[must_use]
    pub const fn ranks(self) -> &'static [Rank] {
        match self {
            Combination::Chouine => &[Rank::Ace, Rank::Ten, Rank::King, Rank::Queen, Rank::Jack],
            Combination::Quarteron => &[Rank::Ace, Rank::King, Rank::Queen, Rank::Jack],
            Combination::Tierce => &[Rank::King, Rank::Queen, Rank::Jack],
            Combination::Mariage => &[Rank::King, Rank::Queen],
            Combination::Quinte => &[],
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Combination::Chouine => "chouine",
            Combination::Quinte => "quinte",
            Combination::Quarteron => "quarteron",
            Combination::Tierce => "tierce",
            Combination::Mariage => "mariage",
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A combination declared by a play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Announcement {
    pub combination: Combination,
    /// Suit of the combination; `None` for a quinte.
    pub suit: Option<Suit>,
    pub points: u32,
}

impl Announcement {
    #[must_use]
    pub fn is_instant_win(&self) -> bool {
        self.combination == Combination::Chouine
    }

    /// The key this announcement claims. A chouine claims nothing.
    #[must_use]
    pub fn key(&self) -> Option<ComboKey> {
        match (self.combination, self.suit) {
            (Combination::Chouine, _) => None,
            (Combination::Quinte, _) => Some(ComboKey::Quinte),
            (_, Some(suit)) => Some(ComboKey::Suit(suit)),
            (_, None) => None,
        }
    }
}

impl fmt::Display for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suit {
            Some(suit) => write!(f, "{} in {} ({} pts)", self.combination, suit, self.points),
            None => write!(f, "{} ({} pts)", self.combination, self.points),
        }
    }
}

/// Claim key: one per suit plus one for the quinte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComboKey {
    Suit(Suit),
    Quinte,
}

impl ComboKey {
    const fn bit(self) -> u8 {
        match self {
            ComboKey::Suit(suit) => 1 << suit.index(),
            ComboKey::Quinte => 1 << 4,
        }
    }
}

/// Set of claimed combination keys for one side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnnouncedCombos {
    bits: u8,
}

impl AnnouncedCombos {
    #[must_use]
    pub fn contains(self, key: ComboKey) -> bool {
        self.bits & key.bit() != 0
    }

    /// Claim a key. Returns false if it was already claimed.
    pub fn claim(&mut self, key: ComboKey) -> bool {
        let fresh = !self.contains(key);
        self.bits |= key.bit();
        fresh
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Claimed keys: suits in canonical order, then the quinte.
    pub fn iter(self) -> impl Iterator<Item = ComboKey> {
        Suit::ALL
            .into_iter()
            .map(ComboKey::Suit)
            .chain(std::iter::once(ComboKey::Quinte))
            .filter(move |&key| self.contains(key))
    }
}

/// Whether `cards` hold every rank of `combination` in `suit`.
#[must_use]
pub fn holds(cards: &[Card], suit: Suit, combination: Combination) -> bool {
    combination
        .ranks()
        .iter()
        .all(|&rank| cards.contains(&Card::new(suit, rank)))
}

/// The most valuable suit combination (chouine included) held in `suit`.
#[must_use]
pub fn best_in_suit(cards: &[Card], suit: Suit) -> Option<Combination> {
    Combination::SUIT_ORDER
        .into_iter()
        .find(|&combination| holds(cards, suit, combination))
}

#[must_use]
pub fn count_brisques(cards: &[Card]) -> usize {
    cards.iter().filter(|c| c.is_brisque()).count()
}

/// Detect the announcement made by playing `played`.
///
/// `remaining` is the hand after the card left it. Nothing is claimed here;
/// the caller records the returned key.
#[must_use]
pub fn detect(
    remaining: &[Card],
    played: Card,
    trump: Suit,
    claimed: AnnouncedCombos,
    quinte_threshold: usize,
) -> Option<Announcement> {
    let mut cards: Vec<Card> = remaining.to_vec();
    cards.push(played);
    let suit = played.suit;

    if holds(&cards, suit, Combination::Chouine) {
        return Some(Announcement {
            combination: Combination::Chouine,
            suit: Some(suit),
            points: 0,
        });
    }

    if !claimed.contains(ComboKey::Quinte) && count_brisques(&cards) >= quinte_threshold {
        return Some(Announcement {
            combination: Combination::Quinte,
            suit: None,
            points: Combination::Quinte.points(false),
        });
    }

    if claimed.contains(ComboKey::Suit(suit)) {
        return None;
    }
    [Combination::Quarteron, Combination::Tierce, Combination::Mariage]
        .into_iter()
        .find(|&combination| holds(&cards, suit, combination))
        .map(|combination| Announcement {
            combination,
            suit: Some(suit),
            points: combination.points(suit == trump),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_cards;

    fn cards(tokens: &[&str]) -> Vec<Card> {
        parse_cards(tokens).unwrap()
    }

    fn card(token: &str) -> Card {
        token.parse().unwrap()
    }

    #[test]
    fn test_points_table() {
        assert_eq!(Combination::Quarteron.points(true), 80);
        assert_eq!(Combination::Quarteron.points(false), 40);
        assert_eq!(Combination::Tierce.points(true), 60);
        assert_eq!(Combination::Tierce.points(false), 30);
        assert_eq!(Combination::Mariage.points(true), 40);
        assert_eq!(Combination::Mariage.points(false), 20);
        assert_eq!(Combination::Quinte.points(true), 100);
        assert_eq!(Combination::Chouine.points(true), 0);
    }

    #[test]
    fn test_claims_are_once_only() {
        let mut combos = AnnouncedCombos::default();

        assert!(combos.claim(ComboKey::Suit(Suit::Hearts)));
        assert!(!combos.claim(ComboKey::Suit(Suit::Hearts)));
        assert!(combos.claim(ComboKey::Quinte));

        assert_eq!(combos.len(), 2);
        assert_eq!(
            combos.iter().collect::<Vec<_>>(),
            vec![ComboKey::Suit(Suit::Hearts), ComboKey::Quinte]
        );
    }

    #[test]
    fn test_mariage_in_plain_suit() {
        let hand = cards(&["Q♥", "7♠"]);
        let found = detect(&hand, card("K♥"), Suit::Clubs, AnnouncedCombos::default(), 5);

        assert_eq!(
            found,
            Some(Announcement {
                combination: Combination::Mariage,
                suit: Some(Suit::Hearts),
                points: 20,
            })
        );
    }

    #[test]
    fn test_trump_tierce_beats_mariage() {
        let hand = cards(&["Q♣", "J♣"]);
        let found = detect(&hand, card("K♣"), Suit::Clubs, AnnouncedCombos::default(), 5);

        assert_eq!(found.map(|a| (a.combination, a.points)), Some((Combination::Tierce, 60)));
    }

    #[test]
    fn test_only_played_suit_counts() {
        let hand = cards(&["K♥", "Q♥"]);
        assert_eq!(detect(&hand, card("7♠"), Suit::Clubs, AnnouncedCombos::default(), 5), None);
    }

    #[test]
    fn test_claimed_suit_is_not_rescored() {
        let mut claimed = AnnouncedCombos::default();
        claimed.claim(ComboKey::Suit(Suit::Hearts));

        let hand = cards(&["Q♥", "J♥", "A♥"]);
        assert_eq!(detect(&hand, card("K♥"), Suit::Clubs, claimed, 5), None);
    }

    #[test]
    fn test_chouine_ignores_claims() {
        let mut claimed = AnnouncedCombos::default();
        claimed.claim(ComboKey::Suit(Suit::Spades));
        claimed.claim(ComboKey::Quinte);

        let hand = cards(&["A♠", "10♠", "K♠", "Q♠"]);
        let found = detect(&hand, card("J♠"), Suit::Spades, claimed, 5).unwrap();

        assert!(found.is_instant_win());
        assert_eq!(found.points, 0);
        assert_eq!(found.key(), None);
    }

    #[test]
    fn test_quinte_preempts_suit_combinations() {
        let hand = cards(&["A♥", "10♥", "A♠", "10♠", "A♣", "Q♦"]);
        let found = detect(&hand, card("K♦"), Suit::Clubs, AnnouncedCombos::default(), 5).unwrap();

        assert_eq!(found.combination, Combination::Quinte);
        assert_eq!(found.key(), Some(ComboKey::Quinte));

        // Once the quinte is claimed the mariage is reported instead.
        let mut claimed = AnnouncedCombos::default();
        claimed.claim(ComboKey::Quinte);
        let found = detect(&hand, card("K♦"), Suit::Clubs, claimed, 5).unwrap();
        assert_eq!(found.combination, Combination::Mariage);
    }

    #[test]
    fn test_best_in_suit() {
        let hand = cards(&["A♦", "K♦", "Q♦", "J♦", "7♣"]);

        assert_eq!(best_in_suit(&hand, Suit::Diamonds), Some(Combination::Quarteron));
        assert_eq!(best_in_suit(&hand, Suit::Clubs), None);
        assert_eq!(count_brisques(&hand), 1);
    }
}
