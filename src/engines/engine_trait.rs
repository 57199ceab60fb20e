//! The mover abstraction.
//!
//! A mover is any strategy that picks one move for the side to move. The
//! match harness treats human, random and search-driven movers alike behind
//! this single trait.

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;

pub trait Mover {
    fn name(&self) -> &str;

    /// Pick a move for the side to move. `Ok(None)` means there is no legal
    /// move to pick; errors are reserved for the mover itself failing.
    fn choose_move(&mut self, board: &Board) -> ChessResult<Option<Move>>;
}
