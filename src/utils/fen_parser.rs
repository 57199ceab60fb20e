//! FEN-to-Board parser.
//!
//! The piece-placement field is parsed strictly: a malformed placement is an
//! error and never yields a half-built board. The remaining fields are
//! lenient; anything missing or unrecognised keeps its default (White to
//! move, no castling rights, no en-passant square, clocks 0 and 1).

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bit_plane::{file_rank_mask, shift_n, shift_s, RANK_3, RANK_6};
use crate::utils::algebraic::algebraic_to_bitboard;

pub fn parse_fen(fen: &str) -> ChessResult<Board> {
    let mut parts = fen.split_whitespace();

    let placement = parts.next().ok_or(ChessError::MissingPlacement)?;
    let mut board = parse_placement(placement)?;

    if let Some(side) = parts.next() {
        board.side_to_move = parse_side_to_move(side);
    }
    if let Some(castling) = parts.next() {
        board.castling_rights = parse_castling_rights(castling);
    }
    if let Some(en_passant) = parts.next() {
        let target = algebraic_to_bitboard(en_passant).unwrap_or(0);
        board.en_passant = checked_en_passant(&board, target);
    }
    if let Some(halfmove) = parts.next().and_then(|field| field.parse().ok()) {
        board.halfmove_clock = halfmove;
    }
    if let Some(fullmove) = parts.next().and_then(|field| field.parse().ok()) {
        board.fullmove_number = fullmove;
    }

    Ok(board)
}

/// Ranks 8 down to 1, files a to h; digits skip empty squares.
fn parse_placement(placement: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::RankCount(ranks.len()));
    }

    let mut board = Board::empty();

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as u8;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidEmptyCount(ch));
                }
                file += empty_count as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or(ChessError::InvalidPiece(ch))?;
            if file >= 8 {
                return Err(ChessError::RankWidth {
                    rank: rank + 1,
                    files: file + 1,
                });
            }

            board.add_piece(piece, file_rank_mask(file as u8, rank));
            file += 1;
        }

        if file != 8 {
            return Err(ChessError::RankWidth {
                rank: rank + 1,
                files: file,
            });
        }
    }

    Ok(board)
}

/// Keep an en-passant target only where an enemy pawn can just have
/// double-pushed past it: the mover's sixth rank, empty, with that pawn one
/// step beyond.
fn checked_en_passant(board: &Board, target: u64) -> u64 {
    let (target_rank, victim) = match board.side_to_move {
        Color::White => (RANK_6, shift_s(target)),
        Color::Black => (RANK_3, shift_n(target)),
    };
    let enemy_pawns = board.pawns & board.pieces_of(board.side_to_move.opposite());

    if target & target_rank != 0 && target & board.occupied() == 0 && victim & enemy_pawns != 0 {
        target
    } else {
        0
    }
}

fn parse_side_to_move(side: &str) -> Color {
    if side == "b" {
        Color::Black
    } else {
        Color::White
    }
}

fn parse_castling_rights(castling: &str) -> CastlingRights {
    let mut rights = CastlingRights::NONE;
    for ch in castling.chars() {
        match ch {
            'K' => rights.white_king_side = true,
            'Q' => rights.white_queen_side = true,
            'k' => rights.black_king_side = true,
            'q' => rights.black_queen_side = true,
            _ => {}
        }
    }
    rights
}
