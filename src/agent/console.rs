//! Interactive console agent.

use std::io::{self, BufRead, Write};

use super::Agent;
use crate::core::{Card, Move};
use crate::state::PlayerInfo;

/// Plays over a line-based text session: prints the redacted view and
/// the legal menu, reads one mnemonic per decision.
///
/// Unparsable input is not retried — it becomes `Forfeit` for a move and
/// the `Any` forfeit signal for a discard, exactly the normalization the
/// driver would apply anyway.
pub struct ConsoleAgent<R, W> {
    input: R,
    output: W,
}

impl ConsoleAgent<io::BufReader<io::Stdin>, io::Stdout> {
    /// An agent talking over stdin/stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleAgent<R, W> {
    /// An agent over arbitrary line-based streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self) -> String {
        let mut line = String::new();
        // EOF or a broken stream reads as empty, which parses as a
        // concession below.
        let _ = self.input.read_line(&mut line);
        line.trim().to_string()
    }
}

impl<R: BufRead, W: Write> Agent for ConsoleAgent<R, W> {
    fn choose_move(&mut self, view: &PlayerInfo) -> Move {
        let menu = view.inventory.legal_moves(view.claims.top().unwrap_or(Move::Ok));

        let _ = writeln!(self.output, "{view}");
        let _ = write!(self.output, "choose a move:");
        for mv in &menu {
            let _ = write!(self.output, " {mv}");
        }
        let _ = writeln!(self.output);
        let _ = self.output.flush();

        self.read_line().parse().unwrap_or(Move::Forfeit)
    }

    fn choose_discard(&mut self, view: &PlayerInfo, preference: Card) -> Card {
        let _ = writeln!(self.output, "{view}");
        let _ = writeln!(self.output, "surrender a card (requested: {preference})");
        let _ = self.output.flush();

        self.read_line().parse().unwrap_or(Card::Any)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Seat;
    use crate::state::GameState;

    fn agent_with_input(input: &str) -> ConsoleAgent<&[u8], Vec<u8>> {
        ConsoleAgent::new(input.as_bytes(), Vec::new())
    }

    fn any_view() -> PlayerInfo {
        PlayerInfo::snapshot(&GameState::new(1), Seat::First)
    }

    #[test]
    fn test_parses_move_mnemonics() {
        let view = any_view();
        assert_eq!(agent_with_input("pk\n").choose_move(&view), Move::PlayKing);
        assert_eq!(agent_with_input("  cb \n").choose_move(&view), Move::CallBluff);
    }

    #[test]
    fn test_garbage_move_concedes() {
        let view = any_view();
        assert_eq!(agent_with_input("nonsense\n").choose_move(&view), Move::Forfeit);
        assert_eq!(agent_with_input("").choose_move(&view), Move::Forfeit);
    }

    #[test]
    fn test_parses_discard() {
        let view = any_view();
        let mut agent = agent_with_input("queen\n");
        assert_eq!(agent.choose_discard(&view, Card::Any), Card::Queen);
    }

    #[test]
    fn test_garbage_discard_forfeits() {
        let view = any_view();
        let mut agent = agent_with_input("\n");
        assert_eq!(agent.choose_discard(&view, Card::King), Card::Any);
    }

    #[test]
    fn test_prompt_lists_legal_menu() {
        let view = any_view();
        let mut agent = agent_with_input("ok\n");
        agent.choose_move(&view);

        let prompt = String::from_utf8(agent.output).unwrap();
        // Fresh claim: the base openings must be offered.
        assert!(prompt.contains("pa"));
        assert!(prompt.contains("pk"));
        assert!(prompt.contains("+1"));
    }
}
