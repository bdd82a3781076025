//! Protocol tokens exchanged between the driver and decision-makers.
//!
//! Moves partition into three groups:
//! - terminal responses: `Ok`, `CallBluff`, `Forfeit`
//! - action claims: `PlayAce` .. `PlayAffair`, opening a claim stack
//! - block claims: counters stacked on top of a specific action claim
//!
//! A claim may assert possession of a rank (`claimed_card`); exactly
//! those claims can be disputed with `CallBluff`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::card::Card;

/// A protocol token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Accept the pending claims and let them resolve.
    Ok,
    /// Dispute the most recent claim.
    CallBluff,
    /// Concede the round.
    Forfeit,
    PlayAce,
    PlayKing,
    PlayJack,
    PlayTwo,
    PlayPlusOne,
    PlayPlusTwo,
    PlayAffair,
    BlockJackWithQueen,
    BlockTwoWithAce,
    BlockTwoWithTwo,
    BlockPlusTwoWithKing,
}

impl Move {
    /// Terminal moves end the current exchange instead of extending the
    /// claim stack.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Move::Ok | Move::CallBluff | Move::Forfeit)
    }

    /// Claims that open a claim stack.
    #[must_use]
    pub fn is_action_claim(self) -> bool {
        matches!(
            self,
            Move::PlayAce
                | Move::PlayKing
                | Move::PlayJack
                | Move::PlayTwo
                | Move::PlayPlusOne
                | Move::PlayPlusTwo
                | Move::PlayAffair
        )
    }

    /// Claims that counter a pending action claim.
    #[must_use]
    pub fn is_block_claim(self) -> bool {
        matches!(
            self,
            Move::BlockJackWithQueen
                | Move::BlockTwoWithAce
                | Move::BlockTwoWithTwo
                | Move::BlockPlusTwoWithKing
        )
    }

    /// The rank this claim asserts possession of, or `None` for moves
    /// that name no card (`PlayPlusOne`, `PlayPlusTwo`, `PlayAffair`
    /// and the terminal moves).
    #[must_use]
    pub fn claimed_card(self) -> Option<Card> {
        match self {
            Move::PlayAce | Move::BlockTwoWithAce => Some(Card::Ace),
            Move::PlayKing | Move::BlockPlusTwoWithKing => Some(Card::King),
            Move::BlockJackWithQueen => Some(Card::Queen),
            Move::PlayJack => Some(Card::Jack),
            Move::PlayTwo | Move::BlockTwoWithTwo => Some(Card::Two),
            _ => None,
        }
    }

    /// Whether `CallBluff` is a meaningful response to this claim.
    #[must_use]
    pub fn is_challengeable(self) -> bool {
        self.claimed_card().is_some()
    }

    /// Short console mnemonic, as accepted by `FromStr`.
    #[must_use]
    pub fn mnemonic(self) -> &'static str {
        match self {
            Move::Ok => "ok",
            Move::CallBluff => "cb",
            Move::Forfeit => "ff",
            Move::PlayAce => "pa",
            Move::PlayKing => "pk",
            Move::PlayJack => "pj",
            Move::PlayTwo => "p2",
            Move::PlayPlusOne => "+1",
            Move::PlayPlusTwo => "+2",
            Move::PlayAffair => "a",
            Move::BlockJackWithQueen => "bjwq",
            Move::BlockTwoWithAce => "b2wa",
            Move::BlockTwoWithTwo => "b2w2",
            Move::BlockPlusTwoWithKing => "bp2wk",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

impl FromStr for Move {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ok" => Ok(Move::Ok),
            "cb" => Ok(Move::CallBluff),
            "ff" => Ok(Move::Forfeit),
            "pa" => Ok(Move::PlayAce),
            "pk" => Ok(Move::PlayKing),
            "pj" => Ok(Move::PlayJack),
            "p2" => Ok(Move::PlayTwo),
            "+1" => Ok(Move::PlayPlusOne),
            "+2" => Ok(Move::PlayPlusTwo),
            "a" => Ok(Move::PlayAffair),
            "bjwq" => Ok(Move::BlockJackWithQueen),
            "b2wa" => Ok(Move::BlockTwoWithAce),
            "b2w2" => Ok(Move::BlockTwoWithTwo),
            "bp2wk" => Ok(Move::BlockPlusTwoWithKing),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Move; 14] = [
        Move::Ok,
        Move::CallBluff,
        Move::Forfeit,
        Move::PlayAce,
        Move::PlayKing,
        Move::PlayJack,
        Move::PlayTwo,
        Move::PlayPlusOne,
        Move::PlayPlusTwo,
        Move::PlayAffair,
        Move::BlockJackWithQueen,
        Move::BlockTwoWithAce,
        Move::BlockTwoWithTwo,
        Move::BlockPlusTwoWithKing,
    ];

    #[test]
    fn test_partition_is_total_and_disjoint() {
        for mv in ALL {
            let groups = [mv.is_terminal(), mv.is_action_claim(), mv.is_block_claim()];
            assert_eq!(
                groups.iter().filter(|&&g| g).count(),
                1,
                "{mv:?} must be in exactly one group"
            );
        }
    }

    #[test]
    fn test_claimed_cards() {
        assert_eq!(Move::PlayAce.claimed_card(), Some(Card::Ace));
        assert_eq!(Move::PlayKing.claimed_card(), Some(Card::King));
        assert_eq!(Move::PlayJack.claimed_card(), Some(Card::Jack));
        assert_eq!(Move::PlayTwo.claimed_card(), Some(Card::Two));
        assert_eq!(Move::BlockJackWithQueen.claimed_card(), Some(Card::Queen));
        assert_eq!(Move::BlockTwoWithAce.claimed_card(), Some(Card::Ace));
        assert_eq!(Move::BlockTwoWithTwo.claimed_card(), Some(Card::Two));
        assert_eq!(Move::BlockPlusTwoWithKing.claimed_card(), Some(Card::King));

        assert_eq!(Move::PlayPlusOne.claimed_card(), None);
        assert_eq!(Move::PlayPlusTwo.claimed_card(), None);
        assert_eq!(Move::PlayAffair.claimed_card(), None);
        assert_eq!(Move::Ok.claimed_card(), None);
    }

    #[test]
    fn test_plus_two_not_challengeable() {
        // Blockable with a king, but never disputable directly.
        assert!(!Move::PlayPlusTwo.is_challengeable());
        assert!(Move::BlockPlusTwoWithKing.is_challengeable());
    }

    #[test]
    fn test_mnemonic_round_trip() {
        for mv in ALL {
            assert_eq!(mv.mnemonic().parse::<Move>(), Ok(mv));
        }
        assert!("".parse::<Move>().is_err());
        assert!("xyz".parse::<Move>().is_err());
    }
}
