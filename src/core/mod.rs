//! Core vocabulary: cards, protocol moves, seats, RNG.
//!
//! These are the leaf types everything else is built from; none of them
//! know about game state or resolution.

pub mod card;
pub mod moves;
pub mod rng;
pub mod seat;

pub use card::Card;
pub use moves::Move;
pub use rng::GameRng;
pub use seat::{Seat, SeatMap};
