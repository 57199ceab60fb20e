//! Small value types shared by every layer of the engine.
//!
//! Colors and piece kinds are kept separate from the board layers: a piece's
//! kind is recovered from the six piece-type bitboards and its color from the
//! white-occupied bitboard.

use std::fmt;

use crate::moves::bit_plane::rotate_180;

/// Board square index (`0..=63`), `a1 == 0`, `h1 == 7`, `h8 == 63`.
pub type Square = u8;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Score sign for the zero-sum convention: `+1` for White, `-1` for Black.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Map a layer between absolute coordinates and this color's oriented
    /// view (see `Board::oriented_for`). The mapping is its own inverse.
    #[inline]
    pub const fn orient(self, layer: u64) -> u64 {
        match self {
            Color::White => layer,
            Color::Black => rotate_180(layer),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind (color is represented separately by the white-occupied layer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Uppercase letter used by FEN and algebraic notation.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Inverse of [`PieceKind::letter`], case-insensitive.
    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A colored piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN character: uppercase for White, lowercase for Black.
    pub fn fen_char(self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let kind = PieceKind::from_letter(ch)?;
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self { color, kind })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// Four independent castling-rights flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_king_side: true,
        white_queen_side: true,
        black_king_side: true,
        black_queen_side: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        white_king_side: false,
        white_queen_side: false,
        black_king_side: false,
        black_queen_side: false,
    };

    #[inline]
    pub const fn allows(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => self.white_king_side,
            (Color::White, CastleSide::QueenSide) => self.white_queen_side,
            (Color::Black, CastleSide::KingSide) => self.black_king_side,
            (Color::Black, CastleSide::QueenSide) => self.black_queen_side,
        }
    }

    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => self.white_king_side = false,
            (Color::White, CastleSide::QueenSide) => self.white_queen_side = false,
            (Color::Black, CastleSide::KingSide) => self.black_king_side = false,
            (Color::Black, CastleSide::QueenSide) => self.black_queen_side = false,
        }
    }

    pub fn revoke_all(&mut self, color: Color) {
        self.revoke(color, CastleSide::KingSide);
        self.revoke(color, CastleSide::QueenSide);
    }

    /// Rights as seen after swapping the roles of the two colors.
    pub const fn swapped(self) -> Self {
        Self {
            white_king_side: self.black_king_side,
            white_queen_side: self.black_queen_side,
            black_king_side: self.white_king_side,
            black_queen_side: self.white_queen_side,
        }
    }
}

/// Extra behaviour attached to a move beyond "lift the piece, drop it".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Special {
    #[default]
    None,
    KingSideCastle,
    QueenSideCastle,
    EnPassant,
    PromoteQueen,
    PromoteRook,
    PromoteKnight,
    PromoteBishop,
}

impl Special {
    /// Promotion tags in the order they are generated.
    pub const PROMOTIONS: [Special; 4] = [
        Special::PromoteQueen,
        Special::PromoteRook,
        Special::PromoteKnight,
        Special::PromoteBishop,
    ];

    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        match self {
            Special::PromoteQueen => Some(PieceKind::Queen),
            Special::PromoteRook => Some(PieceKind::Rook),
            Special::PromoteKnight => Some(PieceKind::Knight),
            Special::PromoteBishop => Some(PieceKind::Bishop),
            _ => None,
        }
    }

    pub const fn promote_to(kind: PieceKind) -> Option<Special> {
        match kind {
            PieceKind::Queen => Some(Special::PromoteQueen),
            PieceKind::Rook => Some(Special::PromoteRook),
            PieceKind::Knight => Some(Special::PromoteKnight),
            PieceKind::Bishop => Some(Special::PromoteBishop),
            PieceKind::Pawn | PieceKind::King => None,
        }
    }

    #[inline]
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self {
            Special::KingSideCastle => Some(CastleSide::KingSide),
            Special::QueenSideCastle => Some(CastleSide::QueenSide),
            _ => None,
        }
    }
}

/// A move as a pair of single-square masks plus a special tag.
///
/// The all-zero move is the non-move used to signal ambiguous or
/// unresolvable notation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Move {
    pub src: u64,
    pub dst: u64,
    pub special: Special,
}

impl Move {
    pub const NULL: Move = Move {
        src: 0,
        dst: 0,
        special: Special::None,
    };

    #[inline]
    pub const fn new(src: u64, dst: u64, special: Special) -> Self {
        Self { src, dst, special }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        self.src == 0 && self.dst == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_chars_round_trip_through_piece() {
        for ch in ['P', 'n', 'B', 'r', 'Q', 'k'] {
            let piece = Piece::from_fen_char(ch).expect("valid FEN piece char");
            assert_eq!(piece.fen_char(), ch);
        }
        assert_eq!(Piece::from_fen_char('x'), None);
    }

    #[test]
    fn swapped_rights_exchange_colors() {
        let rights = CastlingRights {
            white_king_side: true,
            ..CastlingRights::NONE
        };
        let swapped = rights.swapped();
        assert!(swapped.allows(Color::Black, CastleSide::KingSide));
        assert!(!swapped.allows(Color::White, CastleSide::KingSide));
    }

    #[test]
    fn null_move_is_recognised() {
        assert!(Move::NULL.is_null());
        assert!(Move::default().is_null());
        assert!(!Move::new(1, 2, Special::None).is_null());
    }
}
