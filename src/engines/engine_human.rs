//! Interactive mover reading algebraic notation, one line per attempt.
//!
//! Input goes through the notation decoder, so only legal moves ever leave
//! this mover. `help` lists the legal moves and shows the board.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::trace;

use crate::engines::engine_trait::Mover;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::utils::move_notation::{move_to_algebraic, try_parse_algebraic};
use crate::utils::render_game_state::render_board;

const MOVES_PER_HELP_ROW: usize = 5;

pub struct HumanMover<R, W> {
    input: R,
    output: W,
}

impl HumanMover<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanMover<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn print_help(&mut self, board: &Board, legal: &[Move]) -> ChessResult<()> {
        let names: Vec<String> = legal.iter().map(|mv| move_to_algebraic(board, *mv)).collect();
        writeln!(self.output, "legal moves:")?;
        for row in names.chunks(MOVES_PER_HELP_ROW) {
            let padded: Vec<String> = row.iter().map(|name| format!("{name:<8}")).collect();
            writeln!(self.output, "{}", padded.join("").trim_end())?;
        }
        writeln!(self.output, "{}", render_board(board))?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Mover for HumanMover<R, W> {
    fn name(&self) -> &str {
        "human"
    }

    fn choose_move(&mut self, board: &Board) -> ChessResult<Option<Move>> {
        let legal = legal_moves(board);
        if legal.is_empty() {
            return Ok(None);
        }

        loop {
            write!(self.output, "{} to move (or 'help'): ", board.side_to_move)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ChessError::InputClosed);
            }
            let entry = line.trim();
            trace!(entry, "human input");

            if entry.eq_ignore_ascii_case("help") {
                self.print_help(board, &legal)?;
                continue;
            }

            match try_parse_algebraic(board, entry) {
                Ok(mv) => return Ok(Some(mv)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }
}
