//! Collected default values for boards, sessions, and the search engine.

// =============================================================================
// Board and session
// =============================================================================

/// Default number of rows (and columns) of the playing board.
pub const BOARD_SIZE: usize = 6;

// =============================================================================
// Search
// =============================================================================

/// Default game-tree depth for automated players.
pub const SEARCH_DEPTH: u32 = 4;

/// Value of a position the evaluated player has won.
pub const WIN_VALUE: i32 = i32::MAX;

/// Value of a position the opponent has won. This is the negation of
/// [`WIN_VALUE`] rather than `i32::MIN`, so search values always negate
/// without overflow.
pub const LOSS_VALUE: i32 = -i32::MAX;
