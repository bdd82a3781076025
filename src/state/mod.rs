//! Authoritative match state and the redacted snapshot.
//!
//! `GameState` is created once per match and `reset` at every round
//! boundary; the cross-round score and the RNG are the only survivors
//! of a reset. Decision-makers never see a `GameState` — they get a
//! `PlayerInfo` copy.

pub mod claims;
pub mod info;

pub use claims::ClaimStack;
pub use info::PlayerInfo;

use crate::core::{GameRng, Move, Seat, SeatMap};
use crate::deck::CardDeck;
use crate::inventory::Inventory;

/// Authoritative per-round state plus the cross-round score.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Per-seat private resources.
    pub seats: SeatMap<Inventory>,
    /// Seat that opened the current claim.
    pub initial_player: Seat,
    /// Seat that must act next.
    pub turn_player: Seat,
    /// The shared card supply.
    pub deck: CardDeck,
    /// Pending claims.
    pub claims: ClaimStack,
    /// Cross-round score; survives `reset`.
    pub score: SeatMap<u32>,
    /// Match RNG; survives `reset`.
    pub rng: GameRng,
}

impl GameState {
    /// Create match state with a zeroed score and a first fresh round.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seats: SeatMap::new(|_| Inventory::new()),
            initial_player: Seat::First,
            turn_player: Seat::First,
            deck: CardDeck::new(),
            claims: ClaimStack::new(),
            score: SeatMap::with_value(0),
            rng: GameRng::new(seed),
        };
        state.reset();
        state
    }

    /// Reinitialize for a fresh round: fresh inventories, a new shuffled
    /// deck, a uniformly random opening seat, an empty claim stack.
    /// Score and RNG carry over.
    pub fn reset(&mut self) {
        self.seats = SeatMap::new(|_| Inventory::new());
        self.deck = CardDeck::shuffled(&mut self.rng);
        self.initial_player = self.rng.pick_seat();
        self.turn_player = self.initial_player;
        self.claims.clear();
    }

    /// Top of the claim stack, or `Move::Ok` when a fresh claim is due.
    #[must_use]
    pub fn claim_top(&self) -> Move {
        self.claims.top().unwrap_or(Move::Ok)
    }
}
