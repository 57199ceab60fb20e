//! Canonical chess-rule constants.
//!
//! This module stores the standard starting position (both as FEN and as the
//! seven bitboard layers it decodes to) and the fixed squares involved in
//! castling.

use crate::game_state::chess_types::{CastleSide, Color};
use crate::moves::bit_plane::square_mask;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const START_PAWNS: u64 = 0x00FF_0000_0000_FF00;
pub const START_KNIGHTS: u64 = 0x4200_0000_0000_0042;
pub const START_BISHOPS: u64 = 0x2400_0000_0000_0024;
pub const START_ROOKS: u64 = 0x8100_0000_0000_0081;
pub const START_QUEENS: u64 = 0x1000_0000_0000_0010;
pub const START_KINGS: u64 = 0x0800_0000_0000_0008;
pub const START_WHITES: u64 = 0xFFFF_0000_0000_0000;

/// Half-move clock value at which the fifty-move rule ends the game.
pub const FIFTY_MOVE_HALFMOVES: u16 = 100;

const A1: u8 = 0;
const B1: u8 = 1;
const C1: u8 = 2;
const D1: u8 = 3;
const E1: u8 = 4;
const F1: u8 = 5;
const G1: u8 = 6;
const H1: u8 = 7;
const RANK_8_OFFSET: u8 = 56;

/// Squares touched by one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingPath {
    pub king_from: u64,
    pub king_to: u64,
    pub rook_from: u64,
    pub rook_to: u64,
    /// Squares between king and rook that must be empty.
    pub between: u64,
    /// Squares the king stands on or crosses, none of which may be attacked.
    pub king_walk: u64,
}

pub const fn castling_path(color: Color, side: CastleSide) -> CastlingPath {
    let offset = match color {
        Color::White => 0,
        Color::Black => RANK_8_OFFSET,
    };
    match side {
        CastleSide::KingSide => CastlingPath {
            king_from: square_mask(E1 + offset),
            king_to: square_mask(G1 + offset),
            rook_from: square_mask(H1 + offset),
            rook_to: square_mask(F1 + offset),
            between: square_mask(F1 + offset) | square_mask(G1 + offset),
            king_walk: square_mask(E1 + offset) | square_mask(F1 + offset) | square_mask(G1 + offset),
        },
        CastleSide::QueenSide => CastlingPath {
            king_from: square_mask(E1 + offset),
            king_to: square_mask(C1 + offset),
            rook_from: square_mask(A1 + offset),
            rook_to: square_mask(D1 + offset),
            between: square_mask(B1 + offset) | square_mask(C1 + offset) | square_mask(D1 + offset),
            king_walk: square_mask(E1 + offset) | square_mask(D1 + offset) | square_mask(C1 + offset),
        },
    }
}
