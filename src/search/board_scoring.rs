//! Pluggable board evaluation interface and the static evaluation.
//!
//! Search delegates static position scoring to [`BoardScorer`], so alternate
//! heuristics can be swapped without touching the search code.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::bit_plane::{file_rank_mask, shift_n, shift_s};

/// Score of a side that has been checkmated, from its own point of view
/// (negated). Larger than any material swing.
pub const MATE_SCORE: i32 = 30000;

pub trait BoardScorer {
    /// Score from White's point of view, in tenths of a pawn. Higher is
    /// better for White.
    fn score(&self, board: &Board) -> i32;
}

/// Material, mobility and pawn-structure heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticEvaluation;

const MOBILITY_WEIGHT: i32 = 1;
const PAWN_WEAKNESS_PENALTY: i32 = 5;

impl StaticEvaluation {
    #[inline]
    pub const fn piece_value(kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => 10,
            PieceKind::Knight => 30,
            PieceKind::Bishop => 30,
            PieceKind::Rook => 50,
            PieceKind::Queen => 80,
            PieceKind::King => 2000,
        }
    }

    pub fn material(board: &Board) -> i32 {
        PieceKind::ALL
            .into_iter()
            .map(|kind| {
                let white = board.squares_with(Piece::new(Color::White, kind)).count_ones() as i32;
                let black = board.squares_with(Piece::new(Color::Black, kind)).count_ones() as i32;
                (white - black) * Self::piece_value(kind)
            })
            .sum()
    }

    /// Legal moves `color` would have if it were on move in this position.
    pub fn mobility(board: &Board, color: Color) -> i32 {
        let mut view = *board;
        if view.side_to_move != color {
            view.side_to_move = color;
            view.en_passant = 0;
        }
        legal_moves(&view).len() as i32
    }

    /// Pawns whose square straight ahead is occupied.
    pub fn blocked_pawns(board: &Board, color: Color) -> i32 {
        let pawns = board.squares_with(Piece::new(color, PieceKind::Pawn));
        let ahead = match color {
            Color::White => shift_n(pawns),
            Color::Black => shift_s(pawns),
        };
        (ahead & board.occupied()).count_ones() as i32
    }

    /// Extra pawns sharing a file: two on one file count once.
    pub fn doubled_pawns(board: &Board, color: Color) -> i32 {
        let pawns = board.squares_with(Piece::new(color, PieceKind::Pawn));
        (0..8u8)
            .map(|file| {
                let file_mask = (0..8u8).fold(0u64, |mask, rank| mask | file_rank_mask(file, rank));
                ((pawns & file_mask).count_ones() as i32 - 1).max(0)
            })
            .sum()
    }
}

impl BoardScorer for StaticEvaluation {
    fn score(&self, board: &Board) -> i32 {
        let mobility = Self::mobility(board, Color::White) - Self::mobility(board, Color::Black);
        let blocked = Self::blocked_pawns(board, Color::White) - Self::blocked_pawns(board, Color::Black);
        let doubled = Self::doubled_pawns(board, Color::White) - Self::doubled_pawns(board, Color::Black);

        Self::material(board) + MOBILITY_WEIGHT * mobility - PAWN_WEAKNESS_PENALTY * (blocked + doubled)
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardScorer, StaticEvaluation};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Color;

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).expect("test FEN should parse")
    }

    #[test]
    fn start_position_is_balanced() {
        assert_eq!(StaticEvaluation.score(&Board::new_game()), 0);
    }

    #[test]
    fn missing_black_queen_favours_white() {
        let position = board("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(StaticEvaluation::material(&position), 80);
        // Black's king also gains d8, one move of mobility.
        assert_eq!(StaticEvaluation::mobility(&position, Color::Black), 21);
        assert_eq!(StaticEvaluation.score(&position), 79);
    }

    #[test]
    fn doubled_and_blocked_pawns_are_penalised() {
        let position = board("4k3/8/8/8/8/4P3/4P3/4K3 w - - 0 1");
        assert_eq!(StaticEvaluation::doubled_pawns(&position, Color::White), 1);
        assert_eq!(StaticEvaluation::blocked_pawns(&position, Color::White), 1);
        assert_eq!(StaticEvaluation::mobility(&position, Color::White), 5);
        assert_eq!(StaticEvaluation::mobility(&position, Color::Black), 5);
        assert_eq!(StaticEvaluation.score(&position), 20 - 5 - 5);
    }

    #[test]
    fn black_pawns_block_southwards() {
        let position = board("4k3/4p3/4N3/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(StaticEvaluation::blocked_pawns(&position, Color::Black), 1);
        assert_eq!(StaticEvaluation::blocked_pawns(&position, Color::White), 0);
    }
}
