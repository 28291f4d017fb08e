//! Depth-bounded adversarial move selection.
//!
//! The engine runs a negamax search over the legal moves of a player. The
//! board itself is the shared scratch space for the whole exploration: each
//! candidate is played with [`Board::add_spot`], evaluated recursively, and
//! taken back with [`Board::undo`] before the next candidate, so no position
//! is ever copied per branch. A recursive result is valued from the side it
//! searched for and negated by the caller.
//!
//! The search is fully deterministic: the chosen move depends only on the
//! position, the depth, and the cutoff.

use crate::board::{Board, Color};
use crate::defaults::{LOSS_VALUE, WIN_VALUE};

/// A candidate move paired with its search value.
///
/// `square` is `None` when no move was chosen: a terminal evaluation (won
/// board or zero depth) or a position offering no legal move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub square: Option<usize>,
    pub value: i32,
}

/// Find the best move for `player`, searching `depth` plies ahead; depth 0
/// evaluates the position as it stands. Scanning stops early once the best
/// value reaches `cutoff`. The observable position of `board` is unchanged
/// on return.
///
/// Candidates are scanned in increasing square order, and a later candidate
/// that ties the current best replaces it, so among equal-valued moves the
/// last one in row-major order wins.
pub fn select_move(player: Color, board: &mut Board, depth: u32, cutoff: i32) -> ScoredMove {
    if board.won() || depth == 0 {
        return ScoredMove {
            square: None,
            value: static_eval(player, board),
        };
    }
    let mut best = ScoredMove {
        square: None,
        value: LOSS_VALUE,
    };
    for n in 0..board.size() * board.size() {
        if !board.is_legal(player, n) {
            continue;
        }
        board.add_spot(player, n);
        let response = select_move(player.opposite(), board, depth - 1, -best.value);
        board.undo();
        let value = -response.value;
        if value >= best.value {
            best = ScoredMove {
                square: Some(n),
                value,
            };
            if best.value >= cutoff {
                break;
            }
        }
    }
    best
}

/// Material evaluation of `board` for `player`: the winning bound on a
/// decided board, otherwise the difference in squares owned. Higher is
/// better for `player`.
pub fn static_eval(player: Color, board: &Board) -> i32 {
    if let Some(winner) = board.winner() {
        return if winner == player { WIN_VALUE } else { LOSS_VALUE };
    }
    board.num_of_color(player) as i32 - board.num_of_color(player.opposite()) as i32
}
