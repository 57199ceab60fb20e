//! Plain-text Unicode board renderer.
//!
//! Draws the position rank 8 at the top, from the occupancy snapshot, for the
//! human mover's `help` output and for debugging.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

const FILE_LABELS: &str = "  a b c d e f g h";

pub fn render_board(board: &Board) -> String {
    let snapshot = board.snapshot();
    let mut out = String::new();

    out.push_str(FILE_LABELS);
    out.push('\n');

    for rank in (0..8usize).rev() {
        let rank_label = char::from(b'1' + rank as u8);
        out.push(rank_label);
        out.push(' ');

        for file in 0..8usize {
            out.push(snapshot[rank * 8 + file].map_or('·', piece_glyph));
            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_label);
        out.push('\n');
    }

    out.push_str(FILE_LABELS);
    out
}

fn piece_glyph(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
