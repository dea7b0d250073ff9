//! What one side is allowed to see.

use serde::Serialize;

use super::card::{Card, Suit};
use super::side::{Side, SideMap};
use super::state::{GameState, Hand, Phase, Trick};
use crate::rules::announce::AnnouncedCombos;

/// A side's view of the table: its own hand plus public information.
///
/// The opponent's hand and the talon order are hidden.
#[derive(Clone, Debug, Serialize)]
pub struct PlayerView<'a> {
    pub side: Side,
    pub hand: &'a [Card],
    pub opponent_hand_size: usize,
    pub trump_card: Option<Card>,
    pub trump_suit: Option<Suit>,
    pub trick: &'a Trick,
    /// The opponent's card on the table, if this side is following.
    pub led_card: Option<Card>,
    pub phase: Phase,
    pub talon_size: usize,
    /// Combination keys this side has already claimed.
    pub announced: AnnouncedCombos,
    pub scores: SideMap<u32>,
    pub can_exchange: bool,
    /// Cards this side may play into the current trick.
    pub legal_cards: Hand,
    /// True when it is this side's turn and a card can be played.
    pub to_play: bool,
}

impl PlayerView<'_> {
    #[must_use]
    pub fn is_leading(&self) -> bool {
        self.led_card.is_none()
    }
}

impl GameState {
    /// The view of the table available to `side`.
    #[must_use]
    pub fn view(&self, side: Side) -> PlayerView<'_> {
        let to_play = self.is_active() && !self.trick_awaiting_clear && self.current_player == side;
        PlayerView {
            side,
            hand: self.hand(side),
            opponent_hand_size: self.hand(side.opponent()).len(),
            trump_card: self.trump_card,
            trump_suit: self.trump_suit,
            trick: &self.trick,
            led_card: self.led_card_for(side),
            phase: self.phase,
            talon_size: self.talon.len(),
            announced: self.announced_combos(side),
            scores: self.scores(),
            can_exchange: self.can_exchange_seven(side),
            legal_cards: if to_play { self.legal_cards(side) } else { Hand::new() },
            to_play,
        }
    }
}
