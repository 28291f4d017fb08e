//! Move sources for the two sides of a game.
//!
//! A [`Player`] produces moves for one color. The automated variant asks
//! the search engine and plays the answer immediately; the human variant
//! buffers one move handed over by the command interpreter and plays it
//! when the session asks for it.

use crate::board::{Board, Color, MoveError};
use crate::defaults::WIN_VALUE;
use crate::search::select_move;

/// A source of moves for one color.
pub trait Player {
    /// The side this player moves for.
    fn color(&self) -> Color;

    /// Compute and apply this player's next move on `board`.
    ///
    /// Returns the square that was played, or `Ok(None)` when no move is
    /// available yet (a human with nothing buffered). On an error the board
    /// is untouched. The returned square is exactly the square that was
    /// played, so callers may announce it as the move made.
    fn make_move(&mut self, board: &mut Board) -> Result<Option<usize>, MoveError>;

    /// Hand this player a move read from the command stream. Returns false
    /// if this player does not take commanded moves.
    fn offer(&mut self, n: usize) -> bool {
        let _ = n;
        false
    }

    /// True for players whose moves the session announces.
    fn automated(&self) -> bool {
        false
    }
}

/// An automated player driven by the bounded search engine.
pub struct AiPlayer {
    color: Color,
    depth: u32,
}

impl AiPlayer {
    pub fn new(color: Color, depth: u32) -> AiPlayer {
        AiPlayer { color, depth }
    }
}

impl Player for AiPlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn make_move(&mut self, board: &mut Board) -> Result<Option<usize>, MoveError> {
        let choice = select_move(self.color, board, self.depth, WIN_VALUE);
        match choice.square {
            Some(n) => {
                board.add_spot(self.color, n);
                Ok(Some(n))
            }
            None => Ok(None),
        }
    }

    fn automated(&self) -> bool {
        true
    }
}

/// A command-driven player holding at most one buffered move.
pub struct HumanPlayer {
    color: Color,
    pending: Option<usize>,
}

impl HumanPlayer {
    pub fn new(color: Color) -> HumanPlayer {
        HumanPlayer {
            color,
            pending: None,
        }
    }
}

impl Player for HumanPlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn make_move(&mut self, board: &mut Board) -> Result<Option<usize>, MoveError> {
        match self.pending.take() {
            None => Ok(None),
            Some(n) => {
                if board.is_legal(self.color, n) {
                    board.add_spot(self.color, n);
                    Ok(Some(n))
                } else {
                    Err(MoveError::Occupied)
                }
            }
        }
    }

    fn offer(&mut self, n: usize) -> bool {
        self.pending = Some(n);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_applies_the_move_it_reports() {
        let mut board = Board::new(2);
        let mut ai = AiPlayer::new(Color::Red, 2);
        let played = ai.make_move(&mut board).unwrap();
        let n = played.expect("a move exists on an empty board");
        assert_eq!(board.color(n), Some(Color::Red));
        assert_eq!(board.spots(n), 1);
        assert_eq!(board.num_moves(), 1);
    }

    #[test]
    fn test_human_waits_without_a_buffered_move() {
        let mut board = Board::new(2);
        let mut human = HumanPlayer::new(Color::Red);
        assert_eq!(human.make_move(&mut board), Ok(None));
        assert_eq!(board.num_moves(), 0);
    }

    #[test]
    fn test_human_plays_the_buffered_move() {
        let mut board = Board::new(2);
        let mut human = HumanPlayer::new(Color::Red);
        assert!(human.offer(3));
        assert_eq!(human.make_move(&mut board), Ok(Some(3)));
        assert_eq!(board.color(3), Some(Color::Red));
        // The buffer is consumed.
        assert_eq!(human.make_move(&mut board), Ok(None));
    }

    #[test]
    fn test_human_rejects_an_illegal_move() {
        let mut board = Board::new(2);
        board.add_spot(Color::Blue, 3);
        let saved = board.clone();
        let mut human = HumanPlayer::new(Color::Red);
        human.offer(3);
        assert_eq!(human.make_move(&mut board), Err(MoveError::Occupied));
        assert_eq!(board, saved, "a rejected move leaves the board alone");
    }

    #[test]
    fn test_ai_ignores_offers() {
        let mut ai = AiPlayer::new(Color::Blue, 2);
        assert!(!ai.offer(0));
    }
}
