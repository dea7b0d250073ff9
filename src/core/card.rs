//! Card catalogue: suits, ranks and the 32-card piquet deck.
//!
//! A `Card` is a plain `(suit, rank)` value. Its identity is the pair, so two
//! `Card`s compare equal exactly when they name the same physical card.
//!
//! ## Rank tables
//!
//! | Rank  | Power | Value |
//! |-------|-------|-------|
//! | 7     | 1     | 0     |
//! | 8     | 2     | 0     |
//! | 9     | 3     | 0     |
//! | J     | 4     | 2     |
//! | Q     | 5     | 3     |
//! | K     | 6     | 4     |
//! | 10    | 7     | 10    |
//! | A     | 8     | 11    |
//!
//! Aces and tens are *brisques*.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of cards in a La Chouine deck.
pub const DECK_SIZE: usize = 32;

/// Sum of the point values of all 32 cards.
pub const TOTAL_CARD_POINTS: u32 = 120;

/// One of the four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// Suits in canonical deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Raw suit index in canonical order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }

    fn from_name(name: &str) -> Option<Suit> {
        Suit::ALL.into_iter().find(|s| s.name() == name)
    }

    fn from_symbol(symbol: char) -> Option<Suit> {
        Suit::ALL.into_iter().find(|s| s.symbol() == symbol)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One of the eight piquet ranks, declared in trick-taking order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Seven,
    Eight,
    Nine,
    Jack,
    Queen,
    King,
    Ten,
    Ace,
}

impl Rank {
    /// Ranks in canonical deck-building order (highest first).
    pub const DECK_ORDER: [Rank; 8] = [
        Rank::Ace,
        Rank::Ten,
        Rank::King,
        Rank::Queen,
        Rank::Jack,
        Rank::Nine,
        Rank::Eight,
        Rank::Seven,
    ];

    /// Trick-taking power, 1 (seven) through 8 (ace).
    #[must_use]
    pub const fn power(self) -> u8 {
        self as u8 + 1
    }

    /// Card points scored when the card is won in a trick.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Rank::Seven | Rank::Eight | Rank::Nine => 0,
            Rank::Jack => 2,
            Rank::Queen => 3,
            Rank::King => 4,
            Rank::Ten => 10,
            Rank::Ace => 11,
        }
    }

    #[must_use]
    pub const fn is_brisque(self) -> bool {
        matches!(self, Rank::Ten | Rank::Ace)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Seven => "seven",
            Rank::Eight => "eight",
            Rank::Nine => "nine",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
            Rank::Ten => "ten",
            Rank::Ace => "ace",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ten => "10",
            Rank::Ace => "A",
        }
    }

    fn from_name(name: &str) -> Option<Rank> {
        Rank::DECK_ORDER.into_iter().find(|r| r.name() == name)
    }

    fn from_symbol(symbol: &str) -> Option<Rank> {
        Rank::DECK_ORDER.into_iter().find(|r| r.symbol() == symbol)
    }
}

/// A playing card.
///
/// ```
/// use la_chouine::core::{Card, Rank, Suit};
///
/// let card: Card = "ten_spades".parse().unwrap();
/// assert_eq!(card, Card::new(Suit::Spades, Rank::Ten));
/// assert_eq!(card.value(), 10);
/// assert!(card.is_brisque());
/// assert_eq!(card.to_string(), "10♠");
/// assert_eq!("10♠".parse::<Card>().unwrap(), card);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    #[must_use]
    pub const fn power(self) -> u8 {
        self.rank.power()
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.rank.value()
    }

    #[must_use]
    pub const fn is_brisque(self) -> bool {
        self.rank.is_brisque()
    }

    /// Stable textual id, e.g. `ace_hearts`.
    #[must_use]
    pub fn id(self) -> String {
        format!("{}_{}", self.rank.name(), self.suit.name())
    }

    /// The 32 cards in canonical, unshuffled order (suit-major).
    #[must_use]
    pub fn full_deck() -> Vec<Card> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::DECK_ORDER.into_iter().map(move |rank| Card::new(suit, rank)))
            .collect()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// Failure to parse a card from its id or display form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse card from {input:?}")]
pub struct ParseCardError {
    pub input: String,
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Accepts either the id form (`queen_clubs`) or the display form (`Q♣`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCardError {
            input: s.to_string(),
        };

        if let Some((rank, suit)) = s.split_once('_') {
            let rank = Rank::from_name(rank).ok_or_else(err)?;
            let suit = Suit::from_name(suit).ok_or_else(err)?;
            return Ok(Card::new(suit, rank));
        }

        let symbol = s.chars().last().ok_or_else(err)?;
        let suit = Suit::from_symbol(symbol).ok_or_else(err)?;
        let rank = Rank::from_symbol(&s[..s.len() - symbol.len_utf8()]).ok_or_else(err)?;
        Ok(Card::new(suit, rank))
    }
}

/// Parse a list of card tokens, failing on the first invalid one.
pub fn parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, ParseCardError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens.into_iter().map(|s| s.as_ref().parse()).collect()
}
