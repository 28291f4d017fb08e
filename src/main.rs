//! Jump61: the chain-reaction spot game.
//!
//! ## Usage
//!
//! - `jump61` - Interactive session on the default board
//! - `jump61 play --size 4 --depth 2` - Interactive session with custom
//!   board size and engine depth
//! - `jump61 demo` - Show a cascade and an engine move on a small board

use std::io;

use clap::{Parser, Subcommand};

use jump61::board::{Board, Color};
use jump61::defaults::{BOARD_SIZE, SEARCH_DEPTH, WIN_VALUE};
use jump61::game::Game;
use jump61::search::select_move;

/// Jump61: the chain-reaction spot game
#[derive(Parser)]
#[command(name = "jump61")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (red manual and blue automated to start)
    Play {
        /// Number of rows and columns of the board
        #[arg(long, default_value_t = BOARD_SIZE)]
        size: usize,
        /// Search depth for automated players
        #[arg(long, default_value_t = SEARCH_DEPTH)]
        depth: u32,
    },
    /// Show a cascade and an engine move on a small board
    Demo,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play { size, depth }) => run_session(size, depth),
        Some(Commands::Demo) => {
            run_demo();
            Ok(())
        }
        None => run_session(BOARD_SIZE, SEARCH_DEPTH),
    }
}

fn run_session(size: usize, depth: u32) -> anyhow::Result<()> {
    anyhow::ensure!(size >= 1, "board size must be at least 1");
    let stdin = io::stdin();
    Game::with_config(size, depth).run(stdin.lock(), io::stdout(), io::stderr())
}

fn run_demo() {
    println!("Jump61: chain-reaction board game\n");

    // Overload a corner until it spills onto its neighbors.
    let mut board = Board::new(3);
    board.add_spot(Color::Red, 0);
    board.add_spot(Color::Blue, 8);
    board.add_spot(Color::Red, 0);
    board.add_spot(Color::Blue, 8);
    board.add_spot(Color::Red, 0);
    println!("After red overloads the top-left corner:");
    println!("{board}\n");

    // Ask the engine what blue should do about it.
    let choice = select_move(Color::Blue, &mut board, SEARCH_DEPTH, WIN_VALUE);
    if let Some(n) = choice.square {
        println!(
            "Engine reply for blue: {} {} (value {})",
            board.row(n),
            board.col(n),
            choice.value
        );
    }
}
