//! Redacted snapshot handed to decision-makers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::claims::ClaimStack;
use super::GameState;
use crate::core::{Seat, SeatMap};
use crate::inventory::Inventory;

/// What one seat is allowed to see, copied at the instant its
/// decision-maker is consulted.
///
/// The viewer gets its own inventory in full; for every seat it gets
/// only the hand size and money. Opponent card identities never cross
/// this boundary, and since the snapshot owns all of its data a
/// decision-maker can never observe live state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerInfo {
    /// The viewing seat's own resources.
    pub inventory: Inventory,
    /// Which seat is viewing.
    pub seat: Seat,
    /// Who opened the current claim.
    pub initial_player: Seat,
    /// The pending claims.
    pub claims: ClaimStack,
    /// Hand size of every seat.
    pub hand_sizes: SeatMap<usize>,
    /// Money of every seat.
    pub money: SeatMap<u32>,
    /// Cross-round score.
    pub score: SeatMap<u32>,
}

impl PlayerInfo {
    /// Take a snapshot of `state` as seen from `seat`.
    #[must_use]
    pub fn snapshot(state: &GameState, seat: Seat) -> Self {
        Self {
            inventory: state.seats[seat].clone(),
            seat,
            initial_player: state.initial_player,
            claims: state.claims.clone(),
            hand_sizes: SeatMap::new(|s| state.seats[s].cards.len()),
            money: SeatMap::new(|s| state.seats[s].money),
            score: state.score.clone(),
        }
    }
}

impl fmt::Display for PlayerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "you are {}, hand [", self.seat)?;
        for (i, card) in self.inventory.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "], {} coins", self.inventory.money)?;

        match (self.claims.action(), self.claims.response()) {
            (None, _) => write!(f, "; fresh claim due")?,
            (Some(action), None) => {
                write!(f, "; pending {action} by {}", self.initial_player)?
            }
            (Some(action), Some(block)) => write!(
                f,
                "; pending {action} by {} blocked with {block}",
                self.initial_player
            )?,
        }

        let other = self.seat.other();
        write!(
            f,
            "; opponent holds {} cards and {} coins; score {}-{}",
            self.hand_sizes[other],
            self.money[other],
            self.score[self.seat],
            self.score[other],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, Move};

    fn sample_state() -> GameState {
        let mut state = GameState::new(42);
        state.seats[Seat::First].cards.clear();
        state.seats[Seat::First].give_card(Card::King);
        state.seats[Seat::Second].cards.clear();
        state.seats[Seat::Second].give_card(Card::Queen);
        state.seats[Seat::Second].give_card(Card::Two);
        state.seats[Seat::Second].money = 5;
        state
    }

    #[test]
    fn test_snapshot_redacts_opponent_hand() {
        let state = sample_state();
        let info = PlayerInfo::snapshot(&state, Seat::First);

        assert_eq!(info.seat, Seat::First);
        assert_eq!(info.inventory.cards.as_slice(), &[Card::King]);
        // Opponent only appears as counts.
        assert_eq!(info.hand_sizes[Seat::Second], 2);
        assert_eq!(info.money[Seat::Second], 5);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut state = sample_state();
        let info = PlayerInfo::snapshot(&state, Seat::First);

        state.seats[Seat::First].give_card(Card::Ace);
        state.claims.push(Move::PlayKing);
        state.score[Seat::Second] += 1;

        assert_eq!(info.inventory.cards.as_slice(), &[Card::King]);
        assert!(info.claims.is_empty());
        assert_eq!(info.score[Seat::Second], 0);
    }

    #[test]
    fn test_display_mentions_pending_claim() {
        let mut state = sample_state();
        state.claims.push(Move::PlayTwo);
        state.claims.push(Move::BlockTwoWithAce);

        let rendered = PlayerInfo::snapshot(&state, Seat::Second).to_string();
        assert!(rendered.contains("p2"));
        assert!(rendered.contains("b2wa"));
    }
}
