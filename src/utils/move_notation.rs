//! Standard algebraic notation (SAN-like) encoding and decoding.
//!
//! Decoding resolves notation against the legal moves of a position, so a
//! decoded move is always legal. Input that names more than one candidate is
//! reported as ambiguous instead of being guessed.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::{legal_moves, source_squares};
use crate::moves::bit_plane::{bit_index, file_rank_mask, population_count, set_bits, FILE_A, RANK_8};
use crate::utils::algebraic::{bitboard_to_algebraic, file_char, rank_char};

const KING_SIDE_CASTLE: &str = "0-0";
const QUEEN_SIDE_CASTLE: &str = "0-0-0";

/// Lenient decoder: the null move stands in for anything that does not
/// resolve to exactly one legal move.
#[inline]
pub fn parse_algebraic(board: &Board, notation: &str) -> Move {
    try_parse_algebraic(board, notation).unwrap_or(Move::NULL)
}

/// Decode `notation` for the side to move.
///
/// The body is scanned right to left: the first rank digit and file letter
/// seen form the destination, a second of either narrows the source square.
/// An uppercase piece letter selects the moving piece (pawn when absent).
/// Characters outside that alphabet (`x`, `+`, `#`, ...) are skipped.
pub fn try_parse_algebraic(board: &Board, notation: &str) -> ChessResult<Move> {
    let trimmed = notation.trim();
    if trimmed.is_empty() {
        return Err(ChessError::EmptyNotation);
    }

    let legal = legal_moves(board);

    if let Some(special) = castle_special(trimmed) {
        return legal
            .into_iter()
            .find(|mv| mv.special == special)
            .ok_or_else(|| ChessError::NoMatchingMove(trimmed.to_owned()));
    }

    let (body, suffix) = split_promotion(trimmed);
    let wanted_promotion = match suffix {
        None => Special::PromoteQueen,
        Some(suffix) => suffix
            .chars()
            .next()
            .and_then(PieceKind::from_letter)
            .and_then(Special::promote_to)
            .ok_or_else(|| ChessError::NoMatchingMove(trimmed.to_owned()))?,
    };

    let mut kind = PieceKind::Pawn;
    let mut dst_file = None;
    let mut dst_rank = None;
    let mut src_file = None;
    let mut src_rank = None;

    for ch in body.chars().rev() {
        match ch {
            '1'..='8' => {
                let rank = ch as u8 - b'1';
                if dst_rank.is_none() {
                    dst_rank = Some(rank);
                } else if src_rank.is_none() {
                    src_rank = Some(rank);
                }
            }
            'a'..='h' => {
                let file = ch as u8 - b'a';
                if dst_file.is_none() {
                    dst_file = Some(file);
                } else if src_file.is_none() {
                    src_file = Some(file);
                }
            }
            'P' | 'N' | 'B' | 'R' | 'Q' | 'K' => {
                if let Some(letter_kind) = PieceKind::from_letter(ch) {
                    kind = letter_kind;
                }
            }
            _ => {}
        }
    }

    let (Some(file), Some(rank)) = (dst_file, dst_rank) else {
        return Err(ChessError::MissingDestination(trimmed.to_owned()));
    };
    let target = file_rank_mask(file, rank);

    let sources = source_squares(board, target, kind) & source_filter(src_file, src_rank);
    match population_count(sources) {
        0 => Err(ChessError::NoMatchingMove(trimmed.to_owned())),
        1 => legal
            .into_iter()
            .find(|mv| {
                mv.src == sources
                    && mv.dst == target
                    && (mv.special.promotion().is_none() || mv.special == wanted_promotion)
            })
            .ok_or_else(|| ChessError::NoMatchingMove(trimmed.to_owned())),
        count => Err(ChessError::Ambiguous {
            notation: trimmed.to_owned(),
            candidates: count,
        }),
    }
}

/// Squares on the given source file and rank; an absent coordinate allows all.
fn source_filter(file: Option<u8>, rank: Option<u8>) -> u64 {
    let files = file.map_or(!0, |file| FILE_A >> file);
    let ranks = rank.map_or(!0, |rank| RANK_8 << (8 * (7 - u32::from(rank))));
    files & ranks
}

fn castle_special(notation: &str) -> Option<Special> {
    match notation.trim_end_matches(['+', '#']) {
        "0-0" | "O-O" => Some(Special::KingSideCastle),
        "0-0-0" | "O-O-O" => Some(Special::QueenSideCastle),
        _ => None,
    }
}

/// Split off a trailing `=X` promotion suffix (check marks may follow it).
fn split_promotion(notation: &str) -> (&str, Option<&str>) {
    match notation.rfind('=') {
        Some(idx) => (&notation[..idx], Some(&notation[idx + 1..])),
        None => (notation, None),
    }
}

/// Encode `mv`, which must be legal in `board`. Castling is written with
/// zeros. Anything that does not name a piece on a single square encodes as
/// `--`.
pub fn move_to_algebraic(board: &Board, mv: Move) -> String {
    match mv.special.castle_side() {
        Some(CastleSide::KingSide) => return KING_SIDE_CASTLE.to_owned(),
        Some(CastleSide::QueenSide) => return QUEEN_SIDE_CASTLE.to_owned(),
        None => {}
    }

    if mv.src.count_ones() != 1 {
        return "--".to_owned();
    }
    let (Some(kind), Ok(destination)) = (board.kind_at(mv.src), bitboard_to_algebraic(mv.dst)) else {
        return "--".to_owned();
    };

    let mut out = String::new();
    if kind != PieceKind::Pawn {
        out.push(kind.letter());
    }
    push_disambiguation(&mut out, board, mv, kind);

    let src_square = bit_index(mv.src);
    let dst_square = bit_index(mv.dst);
    let is_capture = board.occupied() & mv.dst != 0
        || mv.special == Special::EnPassant
        || (kind == PieceKind::Pawn && src_square % 8 != dst_square % 8);
    if is_capture {
        out.push('x');
    }

    out.push_str(&destination);

    if let Some(promoted) = mv.special.promotion() {
        out.push('=');
        out.push(promoted.letter());
    }
    out
}

/// File, rank or both of the source square, whichever separates it from
/// every other like piece that can legally reach the same destination.
fn push_disambiguation(out: &mut String, board: &Board, mv: Move, kind: PieceKind) {
    let rivals = legal_moves(board)
        .into_iter()
        .filter(|other| other.dst == mv.dst && other.src != mv.src && board.kind_at(other.src) == Some(kind))
        .fold(0u64, |acc, other| acc | other.src);
    if rivals == 0 {
        return;
    }

    let square = bit_index(mv.src);
    let rival_squares: Vec<Square> = set_bits(rivals).map(bit_index).collect();
    let file_unique = rival_squares.iter().all(|rival| rival % 8 != square % 8);
    let rank_unique = rival_squares.iter().all(|rival| rival / 8 != square / 8);

    if file_unique {
        out.push(file_char(square));
    } else if rank_unique {
        out.push(rank_char(square));
    } else {
        out.push(file_char(square));
        out.push(rank_char(square));
    }
}
