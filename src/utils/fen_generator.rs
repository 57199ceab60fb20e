use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::bitboard_to_algebraic;

/// Six-field FEN for `board`. Fields the board cannot represent exactly (a
/// malformed en-passant layer) are written as `-`.
pub fn generate_fen(board: &Board) -> String {
    let placement = generate_placement_field(board);
    let side_to_move = match board.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(board.castling_rights);
    let en_passant = bitboard_to_algebraic(board.en_passant).unwrap_or_else(|_| "-".to_owned());

    format!(
        "{} {} {} {} {} {}",
        placement, side_to_move, castling, en_passant, board.halfmove_clock, board.fullmove_number
    )
}

fn generate_placement_field(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match board.piece_at(rank * 8 + file) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();
    if rights.white_king_side {
        out.push('K');
    }
    if rights.white_queen_side {
        out.push('Q');
    }
    if rights.black_king_side {
        out.push('k');
    }
    if rights.black_queen_side {
        out.push('q');
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}
