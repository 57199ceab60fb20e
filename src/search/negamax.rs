//! Fixed-depth negamax without pruning.
//!
//! Each child position is an owned copy of its parent with one move applied;
//! nothing is undone on the way back up. Cost grows exponentially with depth,
//! so callers keep it at one or two plies.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::search::board_scoring::{BoardScorer, MATE_SCORE};

/// Score of `board` for the side to move, searched `depth` plies deep.
///
/// A side with no legal moves scores `-MATE_SCORE` when in check and zero
/// when stalemated.
pub fn negamax<S: BoardScorer + ?Sized>(board: &Board, depth: u8, scorer: &S) -> i32 {
    if depth == 0 {
        return board.side_to_move.sign() * scorer.score(board);
    }

    let moves = legal_moves(board);
    if moves.is_empty() {
        return if board.in_check() { -MATE_SCORE } else { 0 };
    }

    moves
        .into_iter()
        .map(|mv| -negamax(&apply_move(board, mv), depth - 1, scorer))
        .fold(-MATE_SCORE, i32::max)
}

/// The first legal move with the best negamax score, searching `depth`
/// plies in total (at least one). `None` when there is no legal move.
pub fn best_move<S: BoardScorer + ?Sized>(board: &Board, depth: u8, scorer: &S) -> Option<(Move, i32)> {
    let child_depth = depth.max(1) - 1;
    let mut best: Option<(Move, i32)> = None;

    for mv in legal_moves(board) {
        let score = -negamax(&apply_move(board, mv), child_depth, scorer);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }
    best
}
