//! Jump61: a chain-reaction board game engine.
//!
//! Two players alternately add spots to the squares of an N x N board. A
//! square holding more spots than it has grid neighbors sends one spot to
//! each neighbor and takes ownership of them, which can cascade across the
//! board. The first player to own every square wins.
//!
//! ## Modules
//!
//! - [`defaults`] - Collected default values and search bounds
//! - [`board`] - Board state, legality, cascades, one-level undo
//! - [`search`] - Depth-bounded negamax move selection
//! - [`player`] - Human and automated move sources
//! - [`game`] - Interactive command-driven session
//!
//! ## Example
//!
//! ```
//! use jump61::board::{Board, Color};
//! use jump61::defaults::WIN_VALUE;
//! use jump61::search::select_move;
//!
//! // Red opens in the center of a 3x3 board.
//! let mut board = Board::new(3);
//! board.add_spot(Color::Red, 4);
//!
//! // Ask the engine for blue's reply, two plies deep.
//! let reply = select_move(Color::Blue, &mut board, 2, WIN_VALUE);
//! assert!(reply.square.is_some());
//! ```

pub mod board;
pub mod defaults;
pub mod game;
pub mod player;
pub mod search;
