//! Card ranks and the fixed deck composition.
//!
//! The supply is a closed 15-card multiset: three copies of each of the
//! five real ranks. `Card::Any` is a sentinel that never sits in a hand
//! or a pile — as a discard *request* it means "any card", as a discard
//! *response* it signals a forced forfeit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A card rank, plus the `Any` sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    Ace,
    King,
    Queen,
    Jack,
    Two,
    /// Sentinel: "any card" as a request, forced forfeit as a response.
    Any,
}

impl Card {
    /// The five real ranks, excluding the `Any` sentinel.
    pub const RANKS: [Card; 5] = [Card::Ace, Card::King, Card::Queen, Card::Jack, Card::Two];

    /// Copies of each rank in a fresh deck.
    pub const COPIES: usize = 3;

    /// Whether this is a real rank (not the sentinel).
    #[must_use]
    pub fn is_rank(self) -> bool {
        self != Card::Any
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Card::Ace => "ace",
            Card::King => "king",
            Card::Queen => "queen",
            Card::Jack => "jack",
            Card::Two => "two",
            Card::Any => "any",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Card {
    type Err = ();

    /// Parses the console mnemonics. Anything unrecognized is an error;
    /// interactive callers translate that into the `Any` forfeit signal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ace" => Ok(Card::Ace),
            "king" => Ok(Card::King),
            "queen" => Ok(Card::Queen),
            "jack" => Ok(Card::Jack),
            "two" => Ok(Card::Two),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_exclude_sentinel() {
        assert_eq!(Card::RANKS.len(), 5);
        assert!(Card::RANKS.iter().all(|c| c.is_rank()));
        assert!(!Card::Any.is_rank());
    }

    #[test]
    fn test_parse_round_trip() {
        for card in Card::RANKS {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Card>().is_err());
        assert!("any".parse::<Card>().is_err());
        assert!("joker".parse::<Card>().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Card::Queen).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Card::Queen);
    }
}
