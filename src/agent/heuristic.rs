//! Heuristic: the deterministic baseline opponent.
//!
//! Exchange:
//! - Take the face-up trump card when it is a brisque, or a king/queen whose
//!   partner is already in hand.
//!
//! Leading, phase 1:
//! - Play into the best announcement still available (a chouine at once).
//! - Else the strongest non-trump brisque, else the strongest brisque.
//! - Else the strongest card.
//!
//! Leading, phase 2:
//! - The first non-trump brisque in hand, else the weakest card.
//!
//! Following:
//! - Winners are the legal cards that would take the trick.
//! - Win with the weakest winner when the led card is worth enough.
//! - Otherwise win only with a winner worth next to nothing.
//! - Otherwise play low.
//!
//! No randomness. Among equal-power cards the first in hand order is chosen.

use tracing::trace;

use super::config::AgentConfig;
use super::decision::Agent;
use crate::core::{Action, Card, Phase, PlayerView, Rank, Suit};
use crate::rules::announce::{self, ComboKey, Combination};
use crate::rules::trick;

#[derive(Clone, Debug, Default)]
pub struct HeuristicAgent {
    config: AgentConfig,
}

impl HeuristicAgent {
    pub const NAME: &'static str = "heuristic";

    pub fn new(config: AgentConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    // ---------- Utilities ----------

    /// Highest power; the first card wins ties.
    fn strongest(cards: impl IntoIterator<Item = Card>) -> Option<Card> {
        cards
            .into_iter()
            .fold(None, |best: Option<Card>, c| match best {
                Some(b) if c.power() <= b.power() => Some(b),
                _ => Some(c),
            })
    }

    /// Lowest power; the first card wins ties.
    fn weakest(cards: impl IntoIterator<Item = Card>) -> Option<Card> {
        cards
            .into_iter()
            .fold(None, |best: Option<Card>, c| match best {
                Some(b) if c.power() >= b.power() => Some(b),
                _ => Some(c),
            })
    }

    // ---------- Exchange ----------

    /// Whether taking `face_up` in exchange for the seven is worthwhile.
    pub fn should_exchange(&self, hand: &[Card], face_up: Card) -> bool {
        if face_up.is_brisque() {
            return true;
        }
        let partner = match face_up.rank {
            Rank::King => Rank::Queen,
            Rank::Queen => Rank::King,
            _ => return false,
        };
        hand.contains(&Card::new(face_up.suit, partner))
    }

    // ---------- Leading ----------

    /// The card to lead for the most valuable announcement, if it clears
    /// `min_announcement_points`.
    pub fn announcement_lead(&self, view: &PlayerView<'_>, trump: Suit) -> Option<Card> {
        let hand = view.hand;
        let mut best: Option<(Card, u32)> = None;

        for &card in hand {
            let suit = card.suit;
            if announce::holds(hand, suit, Combination::Chouine) {
                trace!(%card, "leading into chouine");
                return Some(card);
            }
            if view.announced.contains(ComboKey::Suit(suit)) {
                continue;
            }
            let points = announce::best_in_suit(hand, suit)
                .map_or(0, |combination| combination.points(suit == trump));
            if points > best.map_or(0, |(_, p)| p) {
                best = Some((card, points));
            }
        }

        if !view.announced.contains(ComboKey::Quinte)
            && announce::count_brisques(hand) >= self.config.quinte_threshold
        {
            if let Some(&first) = hand.iter().find(|c| c.is_brisque()) {
                best = Some((first, Combination::Quinte.points(false)));
            }
        }

        best.filter(|&(_, points)| points >= self.config.min_announcement_points)
            .map(|(card, points)| {
                trace!(%card, points, "leading for announcement");
                card
            })
    }

    fn lead(&self, view: &PlayerView<'_>, trump: Suit) -> Option<Card> {
        let hand = view.hand.iter().copied();

        if view.phase == Phase::Strict {
            return hand
                .clone()
                .find(|c| c.is_brisque() && c.suit != trump)
                .or_else(|| Self::weakest(hand));
        }

        if let Some(card) = self.announcement_lead(view, trump) {
            return Some(card);
        }
        Self::strongest(hand.clone().filter(|c| c.is_brisque() && c.suit != trump))
            .or_else(|| Self::strongest(hand.clone().filter(|c| c.is_brisque())))
            .or_else(|| Self::strongest(hand.clone()))
    }

    // ---------- Following ----------

    fn follow(&self, view: &PlayerView<'_>, led: Card, trump: Suit) -> Option<Card> {
        let legal = view.legal_cards.iter().copied();
        let winners: Vec<Card> = legal.clone().filter(|&c| trick::beats(c, led, trump)).collect();

        let (win_threshold, cheap_max) = match view.phase {
            Phase::Free => (self.config.phase1_win_threshold, self.config.phase1_cheap_max_value),
            Phase::Strict => (self.config.phase2_win_threshold, self.config.phase2_cheap_max_value),
        };

        if !winners.is_empty() {
            if led.value() >= win_threshold {
                trace!(%led, "winning valuable trick cheaply");
                return Self::weakest(winners.iter().copied());
            }
            if let Some(&cheap) = winners.iter().find(|c| c.value() <= cheap_max) {
                trace!(%led, card = %cheap, "winning with a cheap card");
                return Some(cheap);
            }
            if view.phase == Phase::Free {
                let losers = legal.clone().filter(|c| !winners.contains(c));
                if let Some(card) = Self::weakest(losers) {
                    trace!(%led, %card, "ducking");
                    return Some(card);
                }
            }
        }

        Self::weakest(legal)
    }
}

impl Agent for HeuristicAgent {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn choose(&self, view: &PlayerView<'_>) -> Option<Action> {
        if !view.to_play {
            return None;
        }
        let trump = view.trump_suit?;

        if view.can_exchange {
            if let Some(face_up) = view.trump_card {
                if self.should_exchange(view.hand, face_up) {
                    trace!(%face_up, "exchanging seven of trumps");
                    return Some(Action::ExchangeSeven);
                }
            }
        }

        let card = match view.led_card {
            None => self.lead(view, trump),
            Some(led) => self.follow(view, led, trump),
        }?;
        Some(Action::Play(card))
    }
}
