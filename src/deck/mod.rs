//! The shared card supply: draw and discard piles.
//!
//! The deck is a closed economy. Every card is always in exactly one of
//! three places: the draw pile, the discard pile, or a seat's hand.
//! Replenishment happens *before* exhaustion: the draw that leaves a
//! single card behind folds the discard pile back in and reshuffles, so
//! a panic on an empty pile means an invariant was broken upstream, not
//! that the game ran long.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Card, GameRng};

/// Pile storage; never exceeds the 15 cards of the full deck.
pub type Pile = SmallVec<[Card; 16]>;

/// Finite card supply split into an ordered draw pile (tail = draw end)
/// and an unordered discard pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDeck {
    pub draw_pile: Pile,
    pub discard_pile: Pile,
}

impl CardDeck {
    /// A full 15-card deck, unshuffled, with an empty discard pile.
    #[must_use]
    pub fn new() -> Self {
        let mut draw_pile = Pile::new();
        for _ in 0..Card::COPIES {
            draw_pile.extend(Card::RANKS);
        }
        Self {
            draw_pile,
            discard_pile: Pile::new(),
        }
    }

    /// A full deck, shuffled.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Randomize the draw pile order in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.draw_pile);
    }

    /// Remove and return the card at the draw end.
    ///
    /// If exactly one card remains afterwards, the discard pile is
    /// merged into the draw pile, the combined pile is shuffled and the
    /// discard pile is cleared.
    ///
    /// Panics if the draw pile is empty: legal play cannot reach that
    /// state.
    pub fn draw(&mut self, rng: &mut GameRng) -> Card {
        let Some(card) = self.draw_pile.pop() else {
            panic!("draw pile exhausted; the card economy invariant is broken");
        };

        if self.draw_pile.len() == 1 {
            self.draw_pile.append(&mut self.discard_pile);
            self.shuffle(rng);
        }

        card
    }

    /// Put a surrendered card on the discard pile.
    ///
    /// The `Any` sentinel is a forfeit signal, not a card: the piles are
    /// left untouched and `true` is returned for the caller to act on.
    pub fn discard(&mut self, card: Card) -> bool {
        if card == Card::Any {
            return true;
        }
        self.discard_pile.push(card);
        false
    }
}

impl Default for CardDeck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn counts(cards: &[Card]) -> FxHashMap<Card, usize> {
        let mut map = FxHashMap::default();
        for &card in cards {
            *map.entry(card).or_insert(0) += 1;
        }
        map
    }

    #[test]
    fn test_new_deck_composition() {
        let deck = CardDeck::new();
        assert_eq!(deck.draw_pile.len(), 15);
        assert!(deck.discard_pile.is_empty());

        let by_rank = counts(&deck.draw_pile);
        for rank in Card::RANKS {
            assert_eq!(by_rank[&rank], Card::COPIES);
        }
    }

    #[test]
    fn test_shuffle_keeps_composition() {
        let mut rng = GameRng::new(42);
        let mut deck = CardDeck::new();
        let before = counts(&deck.draw_pile);

        deck.shuffle(&mut rng);

        assert_eq!(counts(&deck.draw_pile), before);
    }

    #[test]
    fn test_draw_takes_from_tail() {
        let mut rng = GameRng::new(42);
        let mut deck = CardDeck::shuffled(&mut rng);
        let expected_first = *deck.draw_pile.last().unwrap();
        let expected_second = deck.draw_pile[deck.draw_pile.len() - 2];

        assert_eq!(deck.draw(&mut rng), expected_first);
        assert_eq!(deck.draw(&mut rng), expected_second);
    }

    #[test]
    fn test_replenish_when_one_card_remains() {
        let mut rng = GameRng::new(42);
        let mut deck = CardDeck {
            draw_pile: Pile::from_slice(&[Card::King, Card::Queen]),
            discard_pile: Pile::from_slice(&[Card::Ace, Card::Two]),
        };

        let drawn = deck.draw(&mut rng);
        assert_eq!(drawn, Card::Queen);

        // The discard pile was folded back in before exhaustion.
        assert!(deck.discard_pile.is_empty());
        assert_eq!(deck.draw_pile.len(), 3);

        // Subsequent draws keep working.
        deck.draw(&mut rng);
        deck.draw(&mut rng);
    }

    #[test]
    #[should_panic(expected = "draw pile exhausted")]
    fn test_draw_from_empty_pile_panics() {
        let mut rng = GameRng::new(42);
        let mut deck = CardDeck {
            draw_pile: Pile::new(),
            discard_pile: Pile::new(),
        };
        deck.draw(&mut rng);
    }

    #[test]
    fn test_discard() {
        let mut deck = CardDeck::new();

        assert!(!deck.discard(Card::King));
        assert!(deck.discard(Card::Any));

        assert_eq!(deck.discard_pile.as_slice(), &[Card::King]);
    }
}
