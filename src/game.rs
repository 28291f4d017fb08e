//! Interactive Jump61 session.
//!
//! The session owns the authoritative board and one move source per color,
//! and runs a line-oriented command loop against a pair of output streams.
//! Between commands it lets automated players move until the game needs
//! human input or someone has won.
//!
//! ## Commands
//!
//! - `R C` - add a spot for the player on the move (rows and columns count
//!   from 1)
//! - `start` - begin or resume play from the current position
//! - `clear` - stop play and empty the board
//! - `size <n>` - stop play and switch to an empty n x n board
//! - `move <n>` - stop play and set the move number
//! - `set <r> <c> <spots> <color>` - stop play and override one square
//! - `auto <color>` / `manual <color>` - switch a side's move source
//! - `seed <n>` - reseed the session's random number generator
//! - `dump` - print the board in canonical format
//! - `help` - print a summary of commands
//! - `quit` - exit
//!
//! Lines starting with `#` and blank lines are ignored. Malformed input is
//! reported on the error stream and the session keeps going.

use std::io::{BufRead, Write};

use anyhow::{Result, anyhow, bail};

use crate::board::{Board, Color};
use crate::defaults::{BOARD_SIZE, SEARCH_DEPTH};
use crate::player::{AiPlayer, HumanPlayer, Player};

/// Help text for the `help` command.
const HELP: &str = "\
Commands, where R and C are row and column numbers counted from 1:
  R C           add a spot for the player on the move
  start         begin or resume playing from the current position
  clear         stop play and empty the board
  size N        stop play and switch to an empty N x N board
  move N        stop play and set the move number to N
  set R C S P   stop play, put S spots of color P (r or b) on square R C
  auto P        let the machine play color P (red or blue)
  manual P      take color P's moves from this input
  seed N        seed the session's random number generator
  dump          print the board in standard format
  help          print this message
  quit          exit the program";

/// What the command loop should do after executing one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Continue,
    Quit,
}

/// A playing session: the authoritative board, a move source per color, and
/// the session services (random numbers, play state).
pub struct Game {
    board: Board,
    players: [Box<dyn Player>; 2],
    rng: fastrand::Rng,
    depth: u32,
    playing: bool,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// A session on the default board: red taking moves from the input,
    /// blue automated at the default depth.
    pub fn new() -> Game {
        Game::with_config(BOARD_SIZE, SEARCH_DEPTH)
    }

    /// A session on a `size` x `size` board whose automated players search
    /// to `depth`.
    pub fn with_config(size: usize, depth: u32) -> Game {
        Game {
            board: Board::new(size),
            players: [
                Box::new(HumanPlayer::new(Color::Red)),
                Box::new(AiPlayer::new(Color::Blue, depth)),
            ],
            rng: fastrand::Rng::new(),
            depth,
            playing: false,
        }
    }

    /// Read-only view of the session board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// A uniform random integer in `[0, n)` from the session generator.
    /// Requires `n > 0`.
    pub fn rand_int(&mut self, n: usize) -> usize {
        self.rng.usize(..n)
    }

    /// Run the session: commands from `input`, normal output and prompts on
    /// `out`, recoverable errors on `err`.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        input: R,
        mut out: W,
        mut err: E,
    ) -> Result<()> {
        writeln!(out, "Welcome to jump61 {}", env!("CARGO_PKG_VERSION"))?;
        let mut lines = input.lines();
        loop {
            self.drive(&mut out, &mut err)?;
            self.prompt(&mut out)?;
            let Some(line) = lines.next() else { break };
            let line = line?;
            match self.command(line.trim(), &mut out) {
                Ok(Status::Quit) => break,
                Ok(Status::Continue) => {}
                Err(e) => writeln!(err, "Error: {e}")?,
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Let players move until the game needs human input or ends. Automated
    /// moves are announced; a decided board stops play with a win message.
    fn drive<W: Write, E: Write>(&mut self, out: &mut W, err: &mut E) -> Result<()> {
        while self.playing {
            if let Some(winner) = self.board.winner() {
                writeln!(out, "{} wins.", winner.capitalized())?;
                self.playing = false;
                break;
            }
            let turn = self.board.whose_move();
            let player = &mut self.players[turn as usize];
            let automated = player.automated();
            match player.make_move(&mut self.board) {
                Ok(Some(n)) => {
                    if automated {
                        let (r, c) = (self.board.row(n), self.board.col(n));
                        writeln!(out, "{turn} moves {r} {c}.")?;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    writeln!(err, "Error: {e}")?;
                    break;
                }
            }
        }
        Ok(())
    }

    /// Print the input prompt: the color on the move during play, a bare
    /// `>` otherwise.
    fn prompt<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.playing {
            write!(out, "{}> ", self.board.whose_move())?;
        } else {
            write!(out, "> ")?;
        }
        out.flush()?;
        Ok(())
    }

    /// Execute one command line. Malformed input and illegal requests come
    /// back as errors for the caller to report; the session stays usable.
    fn command<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Status> {
        let mut words = line.split_whitespace();
        let Some(cmd) = words.next() else {
            return Ok(Status::Continue);
        };
        let args: Vec<&str> = words.collect();
        if cmd.starts_with('#') {
            return Ok(Status::Continue);
        }
        if cmd.chars().all(|ch| ch.is_ascii_digit()) {
            let r = parse_num(cmd)?;
            let c = match args.first() {
                Some(word) => parse_num(word)?,
                None => bail!("enter both a row and a column for a move"),
            };
            self.save_move(r, c)?;
            return Ok(Status::Continue);
        }
        match cmd {
            "help" => writeln!(out, "{HELP}")?,
            "clear" => {
                self.playing = false;
                self.board.clear(self.board.size());
            }
            "start" => self.playing = true,
            "quit" => return Ok(Status::Quit),
            "auto" => {
                let color = parse_color_name(arg(&args, 0)?)?;
                self.players[color as usize] = Box::new(AiPlayer::new(color, self.depth));
            }
            "manual" => {
                let color = parse_color_name(arg(&args, 0)?)?;
                self.players[color as usize] = Box::new(HumanPlayer::new(color));
            }
            "size" => {
                let n: usize = parse_num(arg(&args, 0)?)?;
                if n < 1 {
                    bail!("size must be at least 1");
                }
                self.playing = false;
                self.board.clear(n);
            }
            "move" => {
                let n: u32 = parse_num(arg(&args, 0)?)?;
                if n < 1 {
                    bail!("move number must be at least 1");
                }
                self.playing = false;
                self.board.set_moves(n);
            }
            "set" => {
                let r: usize = parse_num(arg(&args, 0)?)?;
                let c: usize = parse_num(arg(&args, 1)?)?;
                let spots: u32 = parse_num(arg(&args, 2)?)?;
                let color = parse_color_letter(arg(&args, 3)?)?;
                if !self.board.exists(r, c) {
                    bail!("square {r} {c} out of bounds");
                }
                self.playing = false;
                self.board.set_at(r, c, spots, color);
            }
            "dump" => writeln!(out, "{}", self.board)?,
            "seed" => {
                let seed: u64 = parse_num(arg(&args, 0)?)?;
                self.rng.seed(seed);
            }
            _ => bail!("bad command: '{cmd}'"),
        }
        Ok(Status::Continue)
    }

    /// Route a move at row `r`, column `c` to the player on the move.
    fn save_move(&mut self, r: usize, c: usize) -> Result<()> {
        if !self.playing {
            bail!("no game in progress");
        }
        if !self.board.exists(r, c) {
            bail!("move {r} {c} out of bounds");
        }
        let n = self.board.sq_num(r, c);
        let turn = self.board.whose_move();
        if !self.players[turn as usize].offer(n) {
            bail!("{turn} is not a manual player");
        }
        Ok(())
    }
}

fn arg<'a>(args: &[&'a str], i: usize) -> Result<&'a str> {
    args.get(i).copied().ok_or_else(|| anyhow!("missing argument"))
}

fn parse_num<T: std::str::FromStr>(word: &str) -> Result<T> {
    word.parse()
        .map_err(|_| anyhow!("'{word}' is not a valid number"))
}

fn parse_color_name(word: &str) -> Result<Color> {
    match word.to_ascii_lowercase().as_str() {
        "red" => Ok(Color::Red),
        "blue" => Ok(Color::Blue),
        _ => bail!("player must be either red or blue"),
    }
}

fn parse_color_letter(word: &str) -> Result<Color> {
    match word {
        "r" => Ok(Color::Red),
        "b" => Ok(Color::Blue),
        _ => bail!("color must be either r or b"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Run a scripted session and capture its normal and error output.
    fn run_script(game: &mut Game, script: &str) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        game.run(Cursor::new(script), &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_welcome_and_prompt() {
        let mut game = Game::with_config(3, 1);
        let (out, err) = run_script(&mut game, "");
        assert!(out.starts_with("Welcome to jump61"));
        assert!(out.ends_with("> "));
        assert!(err.is_empty());
    }

    #[test]
    fn test_bad_command_is_reported() {
        let mut game = Game::with_config(3, 1);
        let (_, err) = run_script(&mut game, "frobnicate\nquit\n");
        assert!(err.contains("bad command: 'frobnicate'"));
    }

    #[test]
    fn test_dump_empty_board() {
        let mut game = Game::with_config(2, 1);
        let (out, _) = run_script(&mut game, "dump\nquit\n");
        assert!(out.contains("===\n    -- --\n    -- --\n===\n"));
    }

    #[test]
    fn test_comments_and_blank_lines_are_ignored() {
        let mut game = Game::with_config(3, 1);
        let (_, err) = run_script(&mut game, "# a comment\n\n   \nquit\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_move_requires_a_game() {
        let mut game = Game::with_config(3, 1);
        let (_, err) = run_script(&mut game, "1 1\nquit\n");
        assert!(err.contains("no game in progress"));
    }

    #[test]
    fn test_move_out_of_bounds() {
        let mut game = Game::with_config(3, 1);
        let (_, err) = run_script(&mut game, "manual blue\nstart\n7 7\nquit\n");
        assert!(err.contains("move 7 7 out of bounds"));
        assert_eq!(game.board().num_moves(), 0);
    }

    #[test]
    fn test_human_move_applies() {
        let mut game = Game::with_config(6, 1);
        let (out, err) = run_script(&mut game, "manual blue\nstart\n1 1\ndump\nquit\n");
        assert!(err.is_empty());
        assert!(out.contains("    1r -- -- -- -- --\n"));
        assert_eq!(game.board().num_moves(), 1);
    }

    #[test]
    fn test_illegal_move_is_rejected_without_mutation() {
        let mut game = Game::with_config(6, 1);
        let (_, err) = run_script(&mut game, "manual blue\nstart\n1 1\n1 1\nquit\n");
        assert!(err.contains("not a legal move"));
        // Red's spot is still there and it is still blue's turn.
        assert_eq!(game.board().num_moves(), 1);
        assert_eq!(game.board().spots(0), 1);
        assert_eq!(game.board().whose_move(), Color::Blue);
    }

    #[test]
    fn test_engine_answers_a_human_move() {
        let mut game = Game::with_config(3, 2);
        let (out, err) = run_script(&mut game, "start\n2 2\nquit\n");
        assert!(err.is_empty());
        assert!(out.contains("blue moves"));
        assert_eq!(game.board().num_moves(), 2);
    }

    #[test]
    fn test_rigged_win_is_announced() {
        let mut game = Game::with_config(2, 1);
        let script = "manual blue\n\
                      set 1 1 2 r\n\
                      set 1 2 2 r\n\
                      set 2 1 2 r\n\
                      set 2 2 1 b\n\
                      move 2\n\
                      start\n\
                      1 1\n\
                      quit\n";
        let (out, _) = run_script(&mut game, script);
        assert!(out.contains("Red wins."));
        assert!(game.board().won());
        assert_eq!(game.board().winner(), Some(Color::Red));
    }

    #[test]
    fn test_auto_vs_auto_plays_to_the_end() {
        let mut game = Game::with_config(2, 1);
        let (out, err) = run_script(&mut game, "auto red\nstart\nquit\n");
        assert!(err.is_empty());
        assert!(out.contains("red moves"));
        assert!(out.contains("blue moves"));
        assert!(out.contains(" wins."));
        assert!(game.board().won());
    }

    #[test]
    fn test_size_resets_the_board() {
        let mut game = Game::with_config(6, 1);
        let (out, _) = run_script(&mut game, "size 2\ndump\nquit\n");
        assert!(out.contains("===\n    -- --\n    -- --\n===\n"));
    }

    #[test]
    fn test_size_zero_is_rejected() {
        let mut game = Game::with_config(3, 1);
        let (_, err) = run_script(&mut game, "size 0\nquit\n");
        assert!(err.contains("size must be at least 1"));
        assert_eq!(game.board().size(), 3);
    }

    #[test]
    fn test_seed_makes_rand_int_reproducible() {
        let mut a = Game::with_config(3, 1);
        let mut b = Game::with_config(3, 1);
        run_script(&mut a, "seed 42\nquit\n");
        run_script(&mut b, "seed 42\nquit\n");
        for _ in 0..16 {
            assert_eq!(a.rand_int(1000), b.rand_int(1000));
        }
    }

    #[test]
    fn test_help_lists_commands() {
        let mut game = Game::with_config(3, 1);
        let (out, _) = run_script(&mut game, "help\nquit\n");
        for word in ["start", "clear", "size", "auto", "manual", "dump"] {
            assert!(out.contains(word), "help should mention '{word}'");
        }
    }
}
