//! The decision-maker boundary.
//!
//! The driver consults exactly one agent at a time, always through a
//! redacted `PlayerInfo` snapshot, and accepts whatever comes back:
//! illegal moves are normalized to `Forfeit` and impossible discards to
//! the `Any` forfeit signal, never rejected as errors. An agent can
//! therefore be trusted with nothing and still not corrupt a match.

pub mod console;
pub mod scripted;

pub use console::ConsoleAgent;
pub use scripted::ScriptedAgent;

use crate::core::{Card, Move};
use crate::state::PlayerInfo;

/// A decision-maker for one seat.
///
/// Both methods are synchronous and total; the driver blocks on them.
/// Implementations may keep state across calls (script queues, learned
/// policies, a console session).
pub trait Agent {
    /// Choose the next move for the position in `view`.
    fn choose_move(&mut self, view: &PlayerInfo) -> Move;

    /// Choose a card to surrender. `preference` is the rank the rules
    /// demand, or `Card::Any` for a free choice.
    fn choose_discard(&mut self, view: &PlayerInfo, preference: Card) -> Card;
}
