//! The in-progress claim stack.
//!
//! A round never has more than two claims pending: an action and at most
//! one block on top of it. The stack is therefore a fixed pair of slots
//! rather than a growable list — over-deep stacks are unrepresentable,
//! and pushing into a full stack is a contract violation, not a state.

use serde::{Deserialize, Serialize};

use crate::core::Move;

/// Bounded claim stack: one action claim, optionally one block claim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimStack {
    action: Option<Move>,
    response: Option<Move>,
}

impl ClaimStack {
    /// An empty stack (fresh claim due).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The opening action claim, if any.
    #[must_use]
    pub fn action(&self) -> Option<Move> {
        self.action
    }

    /// The block claim stacked on the action, if any.
    #[must_use]
    pub fn response(&self) -> Option<Move> {
        self.response
    }

    /// The most recent claim.
    #[must_use]
    pub fn top(&self) -> Option<Move> {
        self.response.or(self.action)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.action.is_none()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.action.is_some() as usize + self.response.is_some() as usize
    }

    /// Push a claim.
    ///
    /// Panics on a terminal move, on a block claim opening the stack, on
    /// an action claim stacked as a response, or on a full stack. All of
    /// these are unreachable under correct legality gating upstream.
    pub fn push(&mut self, claim: Move) {
        assert!(
            !claim.is_terminal(),
            "terminal move {claim:?} pushed onto the claim stack"
        );

        if self.action.is_none() {
            assert!(
                claim.is_action_claim(),
                "block claim {claim:?} cannot open a claim stack"
            );
            self.action = Some(claim);
        } else if self.response.is_none() {
            assert!(
                claim.is_block_claim(),
                "action claim {claim:?} cannot respond to another action"
            );
            self.response = Some(claim);
        } else {
            panic!("claim stack overflow: {claim:?} pushed onto a full stack");
        }
    }

    /// Remove and return the most recent claim (strikes a caught bluff).
    pub fn pop(&mut self) -> Option<Move> {
        self.response.take().or_else(|| self.action.take())
    }

    /// Empty the stack.
    pub fn clear(&mut self) {
        self.action = None;
        self.response = None;
    }
}
