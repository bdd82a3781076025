//! # bluff-duel
//!
//! A rules engine for a two-seat bluffing card game built on claims.
//! Playing a card means *claiming* a rank; the opponent either accepts
//! the claim, blocks it with a counter-claim, or calls the bluff and
//! forces a showdown against the actual hand.
//!
//! ## Design Principles
//!
//! 1. **Authoritative State**: The engine owns the deck, hands, money
//!    and score. Agents see only redacted `PlayerInfo` snapshots and can
//!    never corrupt a match, no matter what they return.
//!
//! 2. **Normalize, Never Reject**: An illegal move request becomes a
//!    `Forfeit`; an impossible discard becomes the `Any` forfeit signal.
//!    The driver never retries a decision-maker.
//!
//! 3. **Deterministic Replay**: All randomness flows through a seeded
//!    `GameRng`, so a match replays exactly from its seed and scripts.
//!
//! ## Modules
//!
//! - `core`: Cards, moves, seats, seeded RNG
//! - `deck`: Draw/discard piles and the card economy
//! - `inventory`: Per-seat hand and money, legality derivation
//! - `state`: Authoritative round state, claim stack, redacted views
//! - `agent`: The decision-maker trait plus console and scripted agents
//! - `game`: The per-step protocol driver and claim resolution

pub mod agent;
pub mod core;
pub mod deck;
pub mod game;
pub mod inventory;
pub mod state;

// Re-export commonly used types
pub use crate::core::{Card, GameRng, Move, Seat, SeatMap};

pub use crate::deck::CardDeck;

pub use crate::inventory::{
    Inventory, AFFAIR_COST, FORCED_AFFAIR_AT, JACK_COST, STARTING_MONEY,
};

pub use crate::state::{ClaimStack, GameState, PlayerInfo};

pub use crate::agent::{Agent, ConsoleAgent, ScriptedAgent};

pub use crate::game::{Forfeits, Game, RoundStatus, OPENING_HAND};
