//! One seat's private resources and the legality derivation.
//!
//! Legality is a pure function of money and the top of the claim stack.
//! Hand contents never gate legality: any claim can be bluffed, and only
//! a challenge punishes lying.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::core::{Card, Move};

/// Money each seat starts a round with.
pub const STARTING_MONEY: u32 = 2;

/// Money a `PlayJack` claim costs (and requires).
pub const JACK_COST: u32 = 3;

/// Money a `PlayAffair` claim costs (and requires).
pub const AFFAIR_COST: u32 = 7;

/// At this much money the only legal opening is `PlayAffair`.
pub const FORCED_AFFAIR_AT: u32 = 10;

/// Hand storage; bounded well below the 15-card economy.
pub type Hand = SmallVec<[Card; 8]>;

/// Set of legal moves for one position; at most seven entries.
pub type MoveSet = SmallVec<[Move; 8]>;

/// A seat's private resources: money and held cards.
///
/// Mutated only through the Game-mediated transfer operations, never
/// directly by a decision-maker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub money: u32,
    pub cards: Hand,
}

impl Inventory {
    /// Fresh round inventory: starting money, empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self {
            money: STARTING_MONEY,
            cards: Hand::new(),
        }
    }

    /// Whether at least one copy of `card` is held. Always false for
    /// the `Any` sentinel.
    #[must_use]
    pub fn has(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Whether the hand has been emptied.
    #[must_use]
    pub fn hand_is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Add a card to the hand.
    pub fn give_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove one copy of `card`. Returns false if it was not held.
    pub fn remove_card(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(i) => {
                self.cards.remove(i);
                true
            }
            None => false,
        }
    }

    /// Unconditionally credit money.
    pub fn give_money(&mut self, income: u32) {
        self.money += income;
    }

    /// Debit up to `cost`, returning what was actually paid. Payment is
    /// capped at the current balance; no debt is ever created.
    pub fn take_money(&mut self, cost: u32) -> u32 {
        let paid = cost.min(self.money);
        self.money -= paid;
        paid
    }

    /// Legal moves for this seat given the top of the claim stack.
    ///
    /// Pass `Move::Ok` when the stack is empty (a fresh claim is due).
    pub fn legal_moves(&self, top: Move) -> MoveSet {
        match top {
            // Opening a fresh claim.
            Move::Ok | Move::CallBluff => {
                if self.money >= FORCED_AFFAIR_AT {
                    return smallvec![Move::PlayAffair];
                }

                let mut moves: MoveSet = smallvec![
                    Move::PlayAce,
                    Move::PlayKing,
                    Move::PlayTwo,
                    Move::PlayPlusOne,
                    Move::PlayPlusTwo,
                ];
                if self.money >= JACK_COST {
                    moves.push(Move::PlayJack);
                }
                if self.money >= AFFAIR_COST {
                    moves.push(Move::PlayAffair);
                }
                moves
            }

            // Claims with no dedicated block: accept or dispute.
            Move::PlayAce
            | Move::PlayKing
            | Move::BlockJackWithQueen
            | Move::BlockTwoWithAce
            | Move::BlockTwoWithTwo
            | Move::BlockPlusTwoWithKing => smallvec![Move::Ok, Move::CallBluff],

            Move::PlayJack => smallvec![Move::Ok, Move::CallBluff, Move::BlockJackWithQueen],

            Move::PlayTwo => smallvec![
                Move::Ok,
                Move::CallBluff,
                Move::BlockTwoWithAce,
                Move::BlockTwoWithTwo,
            ],

            // Not challengeable, only blockable.
            Move::PlayPlusTwo => smallvec![Move::Ok, Move::BlockPlusTwoWithKing],

            Move::PlayPlusOne | Move::PlayAffair => smallvec![Move::Ok],

            Move::Forfeit => MoveSet::new(),
        }
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
