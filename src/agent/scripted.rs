//! Scripted agent for tests and simulations.

use std::collections::VecDeque;

use super::Agent;
use crate::core::{Card, Move};
use crate::state::PlayerInfo;

/// Replays queued moves and discards in order.
///
/// An exhausted move queue concedes (`Forfeit`); an exhausted discard
/// queue signals a forced forfeit (`Any`). Both are ordinary protocol
/// outcomes, so a short script ends a round instead of breaking the
/// match.
#[derive(Clone, Debug, Default)]
pub struct ScriptedAgent {
    moves: VecDeque<Move>,
    discards: VecDeque<Card>,
}

impl ScriptedAgent {
    /// Create an agent from a move script and a discard script.
    pub fn new(
        moves: impl IntoIterator<Item = Move>,
        discards: impl IntoIterator<Item = Card>,
    ) -> Self {
        Self {
            moves: moves.into_iter().collect(),
            discards: discards.into_iter().collect(),
        }
    }

    /// Queue another move at the end of the script.
    pub fn push_move(&mut self, mv: Move) {
        self.moves.push_back(mv);
    }

    /// Queue another discard at the end of the script.
    pub fn push_discard(&mut self, card: Card) {
        self.discards.push_back(card);
    }
}

impl Agent for ScriptedAgent {
    fn choose_move(&mut self, _view: &PlayerInfo) -> Move {
        self.moves.pop_front().unwrap_or(Move::Forfeit)
    }

    fn choose_discard(&mut self, _view: &PlayerInfo, _preference: Card) -> Card {
        self.discards.pop_front().unwrap_or(Card::Any)
    }
}
