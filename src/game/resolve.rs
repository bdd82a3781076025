//! Claim resolution and bluff adjudication.
//!
//! Resolution runs when the acting seat accepts (`Ok`) or disputes
//! (`CallBluff`) the pending claims. Each action claim has one resolver;
//! a resolver applies the claim's effects for the recorded response and
//! reports which role forfeited, derived from discard forfeit signals
//! and hand-emptied checks. Bluff adjudication consults actual card
//! possession and may re-enter resolution once, on the stack shortened
//! by the struck claim.
//!
//! Snapshots for every decision-maker consultation are taken before the
//! step mutates anything, so a view reflects all completed steps and
//! none of the in-flight effects.

use super::{Forfeits, Game};
use crate::agent::Agent;
use crate::core::{Card, GameRng, Move, Seat};
use crate::deck::CardDeck;
use crate::inventory::{Inventory, AFFAIR_COST, JACK_COST};
use crate::state::PlayerInfo;

/// One role in a resolution: mutable access to the seat's inventory and
/// agent, plus the snapshot taken before the step's effects.
struct Side<'a> {
    inv: &'a mut Inventory,
    agent: &'a mut dyn Agent,
    view: PlayerInfo,
}

/// Ask a side to surrender a card.
///
/// The named card must actually be held, and a held preferred card may
/// not be dodged: naming something else while holding the preference
/// (for a non-`Any` preference) normalizes to the `Any` forfeit signal
/// with no hand change. An honest mismatch — the preference is not held
/// — is honored. The returned card is always exactly what left the
/// hand, or `Any` for nothing.
fn surrender(side: &mut Side<'_>, preference: Card) -> Card {
    let choice = side.agent.choose_discard(&side.view, preference);

    let dodged = preference != Card::Any && choice != preference && side.inv.has(preference);
    if dodged || !side.inv.has(choice) {
        return Card::Any;
    }

    side.inv.remove_card(choice);
    choice
}

/// True iff the claim's author cannot back it with the required card.
///
/// Panics for claims that assert no card; legality gating keeps
/// `CallBluff` away from those.
fn has_bluffed(claim: Move, inv: &Inventory) -> bool {
    match claim.claimed_card() {
        Some(card) => !inv.has(card),
        None => panic!("bluff called on unchallengeable {claim:?}"),
    }
}

/// PLAY_ACE: show an ace, draw three, give two back freely. Never
/// solicits a response. Each failed surrender compounds the forfeit.
fn resolve_ace(
    deck: &mut CardDeck,
    rng: &mut GameRng,
    initiator: &mut Side<'_>,
    response: Option<Move>,
) -> Forfeits {
    if let Some(r) = response {
        panic!("invalid response {r:?} to PLAY_ACE");
    }

    let mut initiator_forfeit = deck.discard(surrender(initiator, Card::Ace));
    for _ in 0..3 {
        let card = deck.draw(rng);
        initiator.inv.give_card(card);
    }
    initiator_forfeit |= deck.discard(surrender(initiator, Card::Any));
    initiator_forfeit |= deck.discard(surrender(initiator, Card::Any));

    Forfeits {
        initiator: initiator_forfeit,
        responder: false,
    }
}

/// PLAY_KING: +3 money, show a king, redraw.
fn resolve_king(
    deck: &mut CardDeck,
    rng: &mut GameRng,
    initiator: &mut Side<'_>,
    response: Option<Move>,
) -> Forfeits {
    if let Some(r) = response {
        panic!("invalid response {r:?} to PLAY_KING");
    }

    initiator.inv.give_money(3);
    let initiator_forfeit = deck.discard(surrender(initiator, Card::King));
    let card = deck.draw(rng);
    initiator.inv.give_card(card);

    Forfeits {
        initiator: initiator_forfeit,
        responder: false,
    }
}

/// PLAY_JACK: pay 3, show a jack and redraw, then take one of the
/// responder's cards for good — unless blocked with a queen, in which
/// case both sides show and redraw their claimed card and no money
/// moves.
fn resolve_jack(
    deck: &mut CardDeck,
    rng: &mut GameRng,
    initiator: &mut Side<'_>,
    responder: &mut Side<'_>,
    response: Option<Move>,
) -> Forfeits {
    match response {
        Some(Move::BlockJackWithQueen) => {
            let initiator_forfeit = deck.discard(surrender(initiator, Card::Jack));
            let card = deck.draw(rng);
            initiator.inv.give_card(card);

            let responder_forfeit = deck.discard(surrender(responder, Card::Queen));
            let card = deck.draw(rng);
            responder.inv.give_card(card);

            Forfeits {
                initiator: initiator_forfeit,
                responder: responder_forfeit,
            }
        }
        None => {
            initiator.inv.take_money(JACK_COST);

            let initiator_forfeit = deck.discard(surrender(initiator, Card::Jack));
            let card = deck.draw(rng);
            initiator.inv.give_card(card);

            // The victim's card is not replaced.
            let mut responder_forfeit = deck.discard(surrender(responder, Card::Any));
            responder_forfeit |= responder.inv.hand_is_empty();

            Forfeits {
                initiator: initiator_forfeit,
                responder: responder_forfeit,
            }
        }
        Some(r) => panic!("invalid response {r:?} to PLAY_JACK"),
    }
}

/// PLAY_TWO: +2 money, the responder pays 2 (capped) — unless blocked,
/// in which case both sides show and redraw their claimed card and no
/// money moves. The unblocked branch moves no cards.
fn resolve_two(
    deck: &mut CardDeck,
    rng: &mut GameRng,
    initiator: &mut Side<'_>,
    responder: &mut Side<'_>,
    response: Option<Move>,
) -> Forfeits {
    let block_card = match response {
        Some(Move::BlockTwoWithAce) => Some(Card::Ace),
        Some(Move::BlockTwoWithTwo) => Some(Card::Two),
        None => None,
        Some(r) => panic!("invalid response {r:?} to PLAY_TWO"),
    };

    match block_card {
        Some(block) => {
            let initiator_forfeit = deck.discard(surrender(initiator, Card::Two));
            let card = deck.draw(rng);
            initiator.inv.give_card(card);

            let responder_forfeit = deck.discard(surrender(responder, block));
            let card = deck.draw(rng);
            responder.inv.give_card(card);

            Forfeits {
                initiator: initiator_forfeit,
                responder: responder_forfeit,
            }
        }
        None => {
            initiator.inv.give_money(2);
            responder.inv.take_money(2);
            Forfeits::default()
        }
    }
}

/// PLAY_PLUS_ONE: +1 money, nothing else. Never solicits a response.
fn resolve_plus_one(initiator: &mut Side<'_>, response: Option<Move>) -> Forfeits {
    if let Some(r) = response {
        panic!("invalid response {r:?} to PLAY_PLUS_ONE");
    }

    initiator.inv.give_money(1);
    Forfeits::default()
}

/// PLAY_PLUS_TWO: +2 money — unless blocked with a king, in which case
/// the responder shows and redraws the king and the initiator gets
/// nothing.
fn resolve_plus_two(
    deck: &mut CardDeck,
    rng: &mut GameRng,
    initiator: &mut Side<'_>,
    responder: &mut Side<'_>,
    response: Option<Move>,
) -> Forfeits {
    match response {
        Some(Move::BlockPlusTwoWithKing) => {
            let responder_forfeit = deck.discard(surrender(responder, Card::King));
            let card = deck.draw(rng);
            responder.inv.give_card(card);

            Forfeits {
                initiator: false,
                responder: responder_forfeit,
            }
        }
        None => {
            initiator.inv.give_money(2);
            Forfeits::default()
        }
        Some(r) => panic!("invalid response {r:?} to PLAY_PLUS_TWO"),
    }
}

/// PLAY_AFFAIR: pay 7 (capped), then take one of the responder's cards
/// for good. Never solicits a response.
fn resolve_affair(
    deck: &mut CardDeck,
    initiator: &mut Side<'_>,
    responder: &mut Side<'_>,
    response: Option<Move>,
) -> Forfeits {
    if let Some(r) = response {
        panic!("invalid response {r:?} to PLAY_AFFAIR");
    }

    initiator.inv.take_money(AFFAIR_COST);

    let mut responder_forfeit = deck.discard(surrender(responder, Card::Any));
    responder_forfeit |= responder.inv.hand_is_empty();

    Forfeits {
        initiator: false,
        responder: responder_forfeit,
    }
}

impl Game {
    /// Resolve the pending claim stack.
    ///
    /// Dispatches on the opening action claim; the recorded block claim
    /// (if any) selects the branch inside each resolver. Panics on an
    /// empty stack or a response outside the claim's permitted set —
    /// both mean legality gating was bypassed upstream.
    pub(crate) fn resolve_claims(&mut self) -> Forfeits {
        let Some(action) = self.state.claims.action() else {
            panic!("resolving an empty claim stack");
        };
        let response = self.state.claims.response();
        let initiator_seat = self.state.initial_player;

        let initiator_view = PlayerInfo::snapshot(&self.state, initiator_seat);
        let responder_view = PlayerInfo::snapshot(&self.state, initiator_seat.other());

        let Game { agents, state } = self;
        let (initiator_agent, responder_agent) = agents.split_mut(initiator_seat);
        let (initiator_inv, responder_inv) = state.seats.split_mut(initiator_seat);
        let deck = &mut state.deck;
        let rng = &mut state.rng;

        let mut initiator = Side {
            inv: initiator_inv,
            agent: initiator_agent.as_mut(),
            view: initiator_view,
        };
        let mut responder = Side {
            inv: responder_inv,
            agent: responder_agent.as_mut(),
            view: responder_view,
        };

        match action {
            Move::PlayAce => resolve_ace(deck, rng, &mut initiator, response),
            Move::PlayKing => resolve_king(deck, rng, &mut initiator, response),
            Move::PlayJack => resolve_jack(deck, rng, &mut initiator, &mut responder, response),
            Move::PlayTwo => resolve_two(deck, rng, &mut initiator, &mut responder, response),
            Move::PlayPlusOne => resolve_plus_one(&mut initiator, response),
            Move::PlayPlusTwo => {
                resolve_plus_two(deck, rng, &mut initiator, &mut responder, response)
            }
            Move::PlayAffair => resolve_affair(deck, &mut initiator, &mut responder, response),
            other => panic!("unresolvable claim {other:?} at the bottom of the stack"),
        }
    }

    /// Adjudicate a `CallBluff` against the most recent claim.
    ///
    /// The accused is the author of the stack top — the seat *not*
    /// currently acting. Confirmed bluff: the claim is struck; a claim
    /// beneath it still resolves (short-circuiting on its forfeits),
    /// then the accused surrenders a free-choice card and loses the
    /// round if the surrender fails or empties the hand. Wrong call:
    /// the stack resolves exactly as if accepted, then the challenger
    /// pays the same penalty.
    pub(crate) fn adjudicate_bluff(&mut self) -> Forfeits {
        let Some(challenged) = self.state.claims.top() else {
            panic!("adjudicating a bluff over an empty claim stack");
        };
        let challenger = self.state.turn_player;
        let accused = challenger.other();

        let challenger_view = PlayerInfo::snapshot(&self.state, challenger);
        let accused_view = PlayerInfo::snapshot(&self.state, accused);

        if has_bluffed(challenged, &self.state.seats[accused]) {
            self.state.claims.pop();

            if !self.state.claims.is_empty() {
                let resolved = self.resolve_claims();
                if resolved.any() {
                    return resolved;
                }
            }

            let lost = self.penalize(accused, accused_view);
            self.role_forfeits(accused, lost)
        } else {
            let resolved = self.resolve_claims();
            let lost = self.penalize(challenger, challenger_view);
            resolved.merge(self.role_forfeits(challenger, lost))
        }
    }

    /// Take one free-choice card from `seat` as a challenge penalty.
    ///
    /// Returns true if the seat thereby lost the round: the surrender
    /// failed, or it emptied the hand.
    fn penalize(&mut self, seat: Seat, view: PlayerInfo) -> bool {
        let Game { agents, state } = self;
        let (inv, _) = state.seats.split_mut(seat);
        let (agent, _) = agents.split_mut(seat);

        let mut side = Side {
            inv,
            agent: agent.as_mut(),
            view,
        };
        let failed = state.deck.discard(surrender(&mut side, Card::Any));

        failed || side.inv.hand_is_empty()
    }

    /// Map a per-seat round loss onto initiator/responder roles.
    fn role_forfeits(&self, seat: Seat, lost: bool) -> Forfeits {
        if !lost {
            return Forfeits::default();
        }
        if seat == self.state.initial_player {
            Forfeits {
                initiator: true,
                responder: false,
            }
        } else {
            Forfeits {
                initiator: false,
                responder: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::ScriptedAgent;
    use crate::inventory::Hand;
    use crate::state::GameState;

    fn inv_with(cards: &[Card]) -> Inventory {
        Inventory {
            money: 2,
            cards: Hand::from_slice(cards),
        }
    }

    fn any_view() -> PlayerInfo {
        PlayerInfo::snapshot(&GameState::new(1), Seat::First)
    }

    fn surrender_once(inv: &mut Inventory, choice: Card, preference: Card) -> Card {
        let mut agent = ScriptedAgent::new([], [choice]);
        let mut side = Side {
            inv,
            agent: &mut agent,
            view: any_view(),
        };
        surrender(&mut side, preference)
    }

    #[test]
    fn test_surrender_honors_preferred_card() {
        let mut inv = inv_with(&[Card::King, Card::Queen]);
        let got = surrender_once(&mut inv, Card::King, Card::King);

        assert_eq!(got, Card::King);
        assert_eq!(inv.cards.as_slice(), &[Card::Queen]);
    }

    #[test]
    fn test_surrender_rejects_fabrication() {
        // Naming a card that is not held removes nothing.
        let mut inv = inv_with(&[Card::Queen]);
        let got = surrender_once(&mut inv, Card::King, Card::King);

        assert_eq!(got, Card::Any);
        assert_eq!(inv.cards.as_slice(), &[Card::Queen]);
    }

    #[test]
    fn test_surrender_rejects_dodge() {
        // Holding the preferred card but naming another is a dodge.
        let mut inv = inv_with(&[Card::King, Card::Queen]);
        let got = surrender_once(&mut inv, Card::Queen, Card::King);

        assert_eq!(got, Card::Any);
        assert_eq!(inv.cards.len(), 2);
    }

    #[test]
    fn test_surrender_honors_honest_mismatch() {
        // Preference not held: any held card is an honest answer.
        let mut inv = inv_with(&[Card::Queen]);
        let got = surrender_once(&mut inv, Card::Queen, Card::King);

        assert_eq!(got, Card::Queen);
        assert!(inv.hand_is_empty());
    }

    #[test]
    fn test_surrender_free_choice() {
        let mut inv = inv_with(&[Card::Two, Card::Jack]);
        let got = surrender_once(&mut inv, Card::Jack, Card::Any);

        assert_eq!(got, Card::Jack);
        assert_eq!(inv.cards.as_slice(), &[Card::Two]);
    }

    #[test]
    fn test_surrender_from_empty_hand_forfeits() {
        let mut inv = inv_with(&[]);
        let got = surrender_once(&mut inv, Card::Any, Card::Any);

        assert_eq!(got, Card::Any);
    }

    #[test]
    fn test_has_bluffed() {
        let holds_king = inv_with(&[Card::King]);
        assert!(!has_bluffed(Move::PlayKing, &holds_king));
        assert!(has_bluffed(Move::PlayTwo, &holds_king));
        assert!(has_bluffed(Move::BlockJackWithQueen, &holds_king));
        assert!(!has_bluffed(Move::BlockPlusTwoWithKing, &holds_king));
    }

    #[test]
    #[should_panic(expected = "unchallengeable")]
    fn test_has_bluffed_rejects_unchallengeable() {
        has_bluffed(Move::PlayPlusOne, &inv_with(&[]));
    }
}
