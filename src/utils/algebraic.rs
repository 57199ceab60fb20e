//! Square and bitboard conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! square/bitboard representations reused by the FEN and move-notation codecs.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;
use crate::moves::bit_plane::{bit_index, square_mask};

/// Convert a coordinate (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// Convert a coordinate (for example: "e4") to a one-hot bitboard.
#[inline]
pub fn algebraic_to_bitboard(square: &str) -> ChessResult<u64> {
    Ok(square_mask(algebraic_to_square(square)?))
}

/// Union of several coordinates.
pub fn squares_to_bitboard(squares: &[&str]) -> ChessResult<u64> {
    squares
        .iter()
        .try_fold(0u64, |acc, name| Ok(acc | algebraic_to_bitboard(name)?))
}

#[inline]
pub fn file_char(square: Square) -> char {
    char::from(b'a' + square % 8)
}

#[inline]
pub fn rank_char(square: Square) -> char {
    char::from(b'1' + square / 8)
}

/// Convert a square index (`0..=63`) to its coordinate (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let square = square & 63;
    format!("{}{}", file_char(square), rank_char(square))
}

/// Convert a one-hot bitboard to its coordinate (for example: "e4").
pub fn bitboard_to_algebraic(bitboard: u64) -> ChessResult<String> {
    if bitboard.count_ones() != 1 {
        return Err(ChessError::NotOneSquare(bitboard));
    }
    Ok(square_to_algebraic(bit_index(bitboard)))
}
