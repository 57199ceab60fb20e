//! Perft node counting.
//!
//! Walks the legal-move tree to a fixed depth, copying the board at every ply,
//! and counts the leaves. Comparing against published counts exercises move
//! generation and move application together.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::legal_moves;

pub fn perft(board: &Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(board);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| perft(&apply_move(board, mv), depth - 1))
        .sum()
}

/// Per-root-move leaf counts, handy when hunting a generator bug.
pub fn perft_divide(board: &Board, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    legal_moves(board)
        .into_iter()
        .map(|mv| (mv, perft(&apply_move(board, mv), depth - 1)))
        .collect()
}
