//! Attack unions and check detection.
//!
//! Everything here is computed from White's point of view on an oriented
//! board (see `Board::oriented_for`) and mapped back, so the same generators
//! answer "what does Black attack" as well.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Union of every square the white-layer side of `view` attacks.
///
/// Pawns contribute captures only; pushes never threaten anything.
pub fn standard_attacks(view: &Board) -> u64 {
    let occupied = view.occupied();
    let allies = occupied & view.whites;
    let enemies = occupied & !view.whites;

    pawn_attacks(view.pawns & allies, enemies)
        | knight_attacks(view.knights & allies, allies)
        | bishop_attacks(view.bishops & allies, enemies, allies)
        | rook_attacks(view.rooks & allies, enemies, allies)
        | queen_attacks(view.queens & allies, enemies, allies)
        | king_attacks(view.kings & allies, allies)
}

/// Squares attacked by `color`, in absolute coordinates.
pub fn attacks_by(board: &Board, color: Color) -> u64 {
    color.orient(standard_attacks(&board.oriented_for(color)))
}

/// Whether `color`'s king stands on a square the other side attacks.
#[inline]
pub fn is_king_attacked(board: &Board, color: Color) -> bool {
    let king = board.kings & board.pieces_of(color);
    attacks_by(board, color.opposite()) & king != 0
}

impl Board {
    /// Whether the side to move is in check.
    #[inline]
    pub fn in_check(&self) -> bool {
        is_king_attacked(self, self.side_to_move)
    }
}
