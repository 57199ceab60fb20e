//! Move application.
//!
//! Applying a move never fails: the same routine serves the legality filter
//! (on throwaway copies) and real play (after validation in [`Board::play`]).

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::castling_path;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::bit_plane::{shift_n, shift_s};
use crate::utils::algebraic::bitboard_to_algebraic;

/// The position after `mv`, leaving `board` untouched.
#[inline]
pub fn apply_move(board: &Board, mv: Move) -> Board {
    let mut next = *board;
    apply_move_in_place(&mut next, mv);
    next
}

/// Apply `mv` for the side to move. A move whose source square is empty is
/// ignored.
pub fn apply_move_in_place(board: &mut Board, mv: Move) {
    let Some(moved) = board.kind_at(mv.src) else {
        return;
    };
    let mover = board.side_to_move;

    let captured = board.remove_piece(mv.dst);
    board.remove_piece(mv.src);
    let placed = mv.special.promotion().unwrap_or(moved);
    board.add_piece(Piece::new(mover, placed), mv.dst);

    match mv.special {
        Special::KingSideCastle | Special::QueenSideCastle => {
            if let Some(side) = mv.special.castle_side() {
                let path = castling_path(mover, side);
                board.remove_piece(path.rook_from);
                board.add_piece(Piece::new(mover, PieceKind::Rook), path.rook_to);
            }
        }
        Special::EnPassant => {
            let victim = match mover {
                Color::White => shift_s(mv.dst),
                Color::Black => shift_n(mv.dst),
            };
            board.remove_piece(victim);
        }
        _ => {}
    }

    update_castling_rights(board, mover, moved, mv);

    // Only a two-square pawn push leaves a capturable square behind.
    let double_push = moved == PieceKind::Pawn && (mv.src >> 16 == mv.dst || mv.src << 16 == mv.dst);
    board.en_passant = match (double_push, mover) {
        (false, _) => 0,
        (true, Color::White) => shift_n(mv.src),
        (true, Color::Black) => shift_s(mv.src),
    };

    if moved == PieceKind::Pawn || captured.is_some() || mv.special == Special::EnPassant {
        board.halfmove_clock = 0;
    } else {
        board.halfmove_clock = board.halfmove_clock.saturating_add(1);
    }
    if mover == Color::Black {
        board.fullmove_number = board.fullmove_number.saturating_add(1);
    }
    board.side_to_move = mover.opposite();
}

fn update_castling_rights(board: &mut Board, mover: Color, moved: PieceKind, mv: Move) {
    if moved == PieceKind::King {
        board.castling_rights.revoke_all(mover);
    }

    // A rook leaving home, or anything landing there, ends that right.
    let touched = mv.src | mv.dst;
    for color in [Color::White, Color::Black] {
        for side in [CastleSide::KingSide, CastleSide::QueenSide] {
            if castling_path(color, side).rook_from & touched != 0 {
                board.castling_rights.revoke(color, side);
            }
        }
    }
}

impl Board {
    /// Play `mv` if it is in the legal-move list of this position.
    pub fn play(&mut self, mv: Move) -> ChessResult<()> {
        if !legal_moves(self).contains(&mv) {
            return Err(ChessError::IllegalMove {
                src: bitboard_to_algebraic(mv.src).unwrap_or_else(|_| "-".to_owned()),
                dst: bitboard_to_algebraic(mv.dst).unwrap_or_else(|_| "-".to_owned()),
            });
        }
        apply_move_in_place(self, mv);
        Ok(())
    }
}
