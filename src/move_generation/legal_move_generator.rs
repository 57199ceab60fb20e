//! Full legal move generation pipeline.
//!
//! Candidate moves are produced for the side to move on its oriented view
//! (pieces always advance northwards), mapped back to absolute squares, then
//! kept only if the mover's own king is safe after applying them to a copy.
//! Castling is generated separately with its own attacked-square test.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::castling_path;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_attacked;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::bit_plane::{set_bits, RANK_8};
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::{pawn_attacks, pawn_pushes};
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Whether the side to move has anything left to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

/// Every legal move for the side to move, castling included.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let side = board.side_to_move;
    let mut moves = Vec::with_capacity(64);

    for candidate in pseudo_legal_moves(board) {
        let next = apply_move(board, candidate);
        if !is_king_attacked(&next, side) {
            moves.push(candidate);
        }
    }

    moves.extend(castling_moves(board));
    moves
}

/// Moves that follow piece movement rules, whether or not they expose the
/// mover's own king. Castling is not included.
pub fn pseudo_legal_moves(board: &Board) -> Vec<Move> {
    let side = board.side_to_move;
    let view = board.oriented_for(side);
    let occupied = view.occupied();
    let allies = occupied & view.whites;
    let enemies = occupied & !view.whites;

    let mut moves = Vec::with_capacity(64);
    for kind in PieceKind::ALL {
        for origin in set_bits(view.layer(kind) & allies) {
            let targets = match kind {
                PieceKind::Pawn => {
                    pawn_pushes(origin, enemies, allies) | pawn_attacks(origin, enemies | view.en_passant)
                }
                PieceKind::Knight => knight_attacks(origin, allies),
                PieceKind::Bishop => bishop_attacks(origin, enemies, allies),
                PieceKind::Rook => rook_attacks(origin, enemies, allies),
                PieceKind::Queen => queen_attacks(origin, enemies, allies),
                PieceKind::King => king_attacks(origin, allies),
            };

            let src = side.orient(origin);
            for target in set_bits(targets) {
                let dst = side.orient(target);
                if kind != PieceKind::Pawn {
                    moves.push(Move::new(src, dst, Special::None));
                } else if target & RANK_8 != 0 {
                    moves.extend(Special::PROMOTIONS.map(|special| Move::new(src, dst, special)));
                } else if target == view.en_passant {
                    moves.push(Move::new(src, dst, Special::EnPassant));
                } else {
                    moves.push(Move::new(src, dst, Special::None));
                }
            }
        }
    }
    moves
}

/// Castling moves available to the side to move.
///
/// The right must still be held, king and rook must stand on their home
/// squares, every square between them must be empty, and none of the squares
/// the king starts on, crosses or lands on may be attacked.
pub fn castling_moves(board: &Board) -> Vec<Move> {
    let side = board.side_to_move;
    let own = board.pieces_of(side);
    let occupied = board.occupied();
    let mut moves = Vec::new();

    for (castle_side, special) in [
        (CastleSide::KingSide, Special::KingSideCastle),
        (CastleSide::QueenSide, Special::QueenSideCastle),
    ] {
        if !board.castling_rights.allows(side, castle_side) {
            continue;
        }
        let path = castling_path(side, castle_side);
        if board.kings & own & path.king_from == 0 || board.rooks & own & path.rook_from == 0 {
            continue;
        }
        if occupied & path.between != 0 {
            continue;
        }
        let walk_is_safe = set_bits(path.king_walk).all(|square| {
            let mut probe = *board;
            probe.remove_piece(path.king_from);
            probe.add_piece(Piece::new(side, PieceKind::King), square);
            !is_king_attacked(&probe, side)
        });
        if walk_is_safe {
            moves.push(Move::new(path.king_from, path.king_to, special));
        }
    }
    moves
}

/// Squares from which a `kind` of the side to move can legally reach
/// `target`; attack generation run in reverse.
pub fn source_squares(board: &Board, target: u64, kind: PieceKind) -> u64 {
    legal_moves(board)
        .into_iter()
        .filter(|mv| mv.dst == target && board.kind_at(mv.src) == Some(kind))
        .fold(0, |sources, mv| sources | mv.src)
}

/// True when the side to move has at least one legal move.
#[inline]
pub fn can_escape_check(board: &Board) -> bool {
    !legal_moves(board).is_empty()
}

pub fn game_status(board: &Board) -> GameStatus {
    if can_escape_check(board) {
        GameStatus::Ongoing
    } else if board.in_check() {
        GameStatus::Checkmate
    } else {
        GameStatus::Stalemate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::{algebraic_to_bitboard, squares_to_bitboard};

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).expect("test FEN should parse")
    }

    fn m(name: &str) -> u64 {
        algebraic_to_bitboard(name).expect("test square should parse")
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        assert_eq!(legal_moves(&Board::new_game()).len(), 20);

        let after_e4 = board("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
        assert_eq!(legal_moves(&after_e4).len(), 20);
    }

    #[test]
    fn king_can_flee_check() {
        assert!(can_escape_check(&board("8/8/8/8/3K4/8/8/qk6 w - - 0 1")));
    }

    #[test]
    fn trapped_king_is_checkmated() {
        let position = board("8/8/1k6/4b3/4b3/8/P7/K7 w - - 0 1");
        assert!(!can_escape_check(&position));
        assert_eq!(game_status(&position), GameStatus::Checkmate);
    }

    #[test]
    fn knight_interposes_to_escape() {
        assert!(can_escape_check(&board("8/8/1pk5/8/3B4/N7/PP5Q/K4r2 w - - 0 1")));
    }

    #[test]
    fn pawn_captures_the_checker() {
        assert!(can_escape_check(&board("8/8/2k5/8/p3b3/1np5/P7/K7 w - - 0 1")));
    }

    #[test]
    fn pinned_pawn_cannot_capture_the_checker() {
        let position = board("8/8/2k5/8/r3b3/1np5/P7/K7 w - - 0 1");
        assert!(!can_escape_check(&position));
        assert_eq!(game_status(&position), GameStatus::Checkmate);
    }

    #[test]
    fn cornered_king_without_moves_is_stalemated() {
        let position = board("k7/2Q5/1K6/8/8/8/8/8 b - - 0 1");
        assert!(!position.in_check());
        assert_eq!(game_status(&position), GameStatus::Stalemate);
    }

    #[test]
    fn single_castling_move_is_offered() {
        let position = board("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQK2R w KQkq - 0 1");
        let castles = castling_moves(&position);
        assert_eq!(castles, vec![Move::new(m("e1"), m("g1"), Special::KingSideCastle)]);

        let all = legal_moves(&position);
        assert_eq!(all.iter().filter(|mv| mv.special.castle_side().is_some()).count(), 1);

        let after = apply_move(&position, castles[0]);
        assert_eq!(
            after.rooks,
            squares_to_bitboard(&["a8", "h8", "a1", "f1"]).expect("test squares should parse")
        );
        assert!(!after.castling_rights.white_king_side);
        assert!(!after.castling_rights.white_queen_side);
    }

    #[test]
    fn both_sides_castle_when_the_back_rank_is_clear() {
        assert_eq!(castling_moves(&board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")).len(), 2);
        assert_eq!(castling_moves(&board("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1")).len(), 2);
    }

    #[test]
    fn king_may_not_castle_through_an_attacked_square() {
        // The rook on f2 covers f1, so only the long castle survives.
        let castles = castling_moves(&board("r3k2r/8/8/8/8/8/5r2/R3K2R w KQkq - 0 1"));
        assert_eq!(castles, vec![Move::new(m("e1"), m("c1"), Special::QueenSideCastle)]);
    }

    #[test]
    fn king_in_check_may_not_castle() {
        let castles = castling_moves(&board("r3k2r/8/8/8/8/8/4r3/R3K2R w KQkq - 0 1"));
        assert!(castles.is_empty());
    }

    #[test]
    fn en_passant_capture_is_generated_for_both_pawns() {
        let position = board("rnbqkbnr/pp1ppppp/8/1PpP4/8/8/P1P1PPPP/RNBQKBNR w KQkq c6 0 4");
        let captures: Vec<Move> = legal_moves(&position)
            .into_iter()
            .filter(|mv| mv.special == Special::EnPassant)
            .collect();
        assert_eq!(captures.len(), 2);
        assert!(captures.iter().all(|mv| mv.dst == m("c6")));
    }

    #[test]
    fn promotion_yields_four_choices() {
        let position = board("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let promotions: Vec<Move> = legal_moves(&position)
            .into_iter()
            .filter(|mv| mv.src == m("a7"))
            .collect();
        // a8 push plus the b8 capture, four pieces each.
        assert_eq!(promotions.len(), 8);
        assert_eq!(promotions.iter().filter(|mv| mv.dst == m("b8")).count(), 4);
    }

    #[test]
    fn source_squares_find_both_knights() {
        let position = board("1R4QQ/R1R4Q/8/6pP/5P1P/8/NK1k4/1N1N4 w - - 0 1");
        assert_eq!(
            source_squares(&position, m("c3"), PieceKind::Knight),
            squares_to_bitboard(&["a2", "b1", "d1"]).expect("test squares should parse")
        );
    }
}
