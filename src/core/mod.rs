//! Core types: sides, cards, dealing RNG, configuration, actions and state.
//!
//! Nothing here decides what a move does. State transitions live in
//! `rules::ChouineRules`.

pub mod action;
pub mod card;
pub mod config;
pub mod rng;
pub mod setup;
pub mod side;
pub mod state;
pub mod view;

pub use action::{Action, ActionRecord};
pub use card::{parse_cards, Card, ParseCardError, Rank, Suit, DECK_SIZE, TOTAL_CARD_POINTS};
pub use config::{ConfigError, GameConfig, MAX_HAND_SIZE};
pub use rng::{generate_seed, GameRng, Mulberry32, Seed, SeedStream, MAX_GENERATED_SEED};
pub use setup::{GameStateBuilder, SetupError};
pub use side::{Side, SideMap};
pub use state::{CardConservationError, GameState, Hand, Phase, PlayerState, Stage, Talon, Trick};
pub use view::PlayerView;
