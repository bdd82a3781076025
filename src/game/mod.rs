//! The per-step protocol driver.
//!
//! One `step` consults exactly one decision-maker through a snapshot,
//! normalizes its request against the derived legality, feeds the move
//! into the state machine and, if the round ended, deals a fresh one.
//! The host owns the match loop: it calls `step` until the per-seat
//! score satisfies whatever threshold it cares about.

pub mod resolve;

use crate::agent::Agent;
use crate::core::{Move, Seat, SeatMap};
use crate::state::{GameState, PlayerInfo};

/// Whether a processed move ended the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    Continues,
    Ended,
}

/// Which resolution roles forfeited the round.
///
/// Resolution reports in initiator/responder terms; `Game::settle` maps
/// that onto seats and the score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Forfeits {
    pub initiator: bool,
    pub responder: bool,
}

impl Forfeits {
    /// Did either role forfeit?
    #[must_use]
    pub fn any(self) -> bool {
        self.initiator || self.responder
    }

    /// Union of two outcomes.
    #[must_use]
    pub fn merge(self, other: Forfeits) -> Forfeits {
        Forfeits {
            initiator: self.initiator || other.initiator,
            responder: self.responder || other.responder,
        }
    }
}

/// Cards dealt to each seat at the start of a round.
pub const OPENING_HAND: usize = 2;

/// A match: two decision-makers and the authoritative state.
pub struct Game {
    pub agents: SeatMap<Box<dyn Agent>>,
    pub state: GameState,
}

impl Game {
    /// Create a match from two decision-makers and deal the first round.
    #[must_use]
    pub fn new(agents: [Box<dyn Agent>; 2], seed: u64) -> Self {
        let mut game = Self {
            agents: SeatMap::from(agents),
            state: GameState::new(seed),
        };
        game.deal_opening_hands();
        game
    }

    /// Current score of a seat.
    #[must_use]
    pub fn score(&self, seat: Seat) -> u32 {
        self.state.score[seat]
    }

    /// Advance the match by one protocol step.
    ///
    /// Consults the acting seat's agent, applies its (normalized)
    /// decision and starts a fresh round if this one ended.
    pub fn step(&mut self) {
        let mv = self.take_move(self.state.turn_player);
        if self.make_move(mv) == RoundStatus::Ended {
            self.new_round();
        }
    }

    /// Begin a fresh round: reset the state, deal opening hands.
    pub fn new_round(&mut self) {
        self.state.reset();
        self.deal_opening_hands();
    }

    fn deal_opening_hands(&mut self) {
        for _ in 0..OPENING_HAND {
            for seat in Seat::BOTH {
                let card = self.state.deck.draw(&mut self.state.rng);
                self.state.seats[seat].give_card(card);
            }
        }
    }

    /// Ask a seat for its move, normalizing illegal requests to
    /// `Forfeit`. The driver never retries: a bad request is scored
    /// against the seat that made it.
    fn take_move(&mut self, seat: Seat) -> Move {
        let view = PlayerInfo::snapshot(&self.state, seat);
        let requested = self.agents[seat].choose_move(&view);

        let legal = self.state.seats[seat].legal_moves(self.state.claim_top());
        if legal.contains(&requested) {
            requested
        } else {
            Move::Forfeit
        }
    }

    /// Apply one already-normalized move to the state machine.
    pub fn make_move(&mut self, mv: Move) -> RoundStatus {
        match mv {
            Move::Forfeit => {
                self.state.score[self.state.turn_player.other()] += 1;
                RoundStatus::Ended
            }
            Move::Ok => {
                let outcome = self.resolve_claims();
                self.settle(outcome)
            }
            Move::CallBluff => {
                let outcome = self.adjudicate_bluff();
                self.settle(outcome)
            }
            claim => {
                self.state.claims.push(claim);
                self.state.turn_player = self.state.turn_player.other();
                RoundStatus::Continues
            }
        }
    }

    /// Book resolution forfeits into the score, then either end the
    /// round or pass the opening to the other seat.
    fn settle(&mut self, outcome: Forfeits) -> RoundStatus {
        if outcome.responder {
            self.state.score[self.state.initial_player] += 1;
        }
        if outcome.initiator {
            self.state.score[self.state.initial_player.other()] += 1;
        }
        if outcome.any() {
            return RoundStatus::Ended;
        }

        self.state.initial_player = self.state.initial_player.other();
        self.state.turn_player = self.state.initial_player;
        self.state.claims.clear();
        RoundStatus::Continues
    }
}
