//! The position model: seven bitboard layers plus turn and rule state.
//!
//! `Board` is a small `Copy` value. Every hypothetical continuation (legality
//! filtering, castling probes, search) works on its own copy, so nothing ever
//! has to be undone.

use crate::errors::ChessResult;
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::moves::bit_plane::{rotate_180, set_bits, square_mask};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    // One layer per piece kind, colors share a layer.
    pub pawns: u64,
    pub knights: u64,
    pub bishops: u64,
    pub rooks: u64,
    pub queens: u64,
    pub kings: u64,
    /// Squares holding a white man; always a subset of the six layers' union.
    pub whites: u64,

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Zero or one bit: the square a pawn may capture onto en passant.
    pub en_passant: u64,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            pawns: 0,
            knights: 0,
            bishops: 0,
            rooks: 0,
            queens: 0,
            kings: 0,
            whites: 0,

            side_to_move: Color::White,
            castling_rights: CastlingRights::NONE,
            en_passant: 0,

            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new_game() -> Self {
        Self {
            pawns: START_PAWNS,
            knights: START_KNIGHTS,
            bishops: START_BISHOPS,
            rooks: START_ROOKS,
            queens: START_QUEENS,
            kings: START_KINGS,
            whites: START_WHITES,
            castling_rights: CastlingRights::ALL,
            ..Self::default()
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub const fn layer(&self, kind: PieceKind) -> u64 {
        match kind {
            PieceKind::Pawn => self.pawns,
            PieceKind::Knight => self.knights,
            PieceKind::Bishop => self.bishops,
            PieceKind::Rook => self.rooks,
            PieceKind::Queen => self.queens,
            PieceKind::King => self.kings,
        }
    }

    #[inline]
    pub fn layer_mut(&mut self, kind: PieceKind) -> &mut u64 {
        match kind {
            PieceKind::Pawn => &mut self.pawns,
            PieceKind::Knight => &mut self.knights,
            PieceKind::Bishop => &mut self.bishops,
            PieceKind::Rook => &mut self.rooks,
            PieceKind::Queen => &mut self.queens,
            PieceKind::King => &mut self.kings,
        }
    }

    #[inline]
    pub const fn occupied(&self) -> u64 {
        self.pawns | self.knights | self.bishops | self.rooks | self.queens | self.kings
    }

    #[inline]
    pub const fn pieces_of(&self, color: Color) -> u64 {
        match color {
            Color::White => self.occupied() & self.whites,
            Color::Black => self.occupied() & !self.whites,
        }
    }

    /// Squares holding `piece` (kind and color both matching).
    #[inline]
    pub const fn squares_with(&self, piece: Piece) -> u64 {
        self.layer(piece.kind) & self.pieces_of(piece.color)
    }

    /// Piece kind on the square(s) of `mask`, tested layer by layer.
    pub fn kind_at(&self, mask: u64) -> Option<PieceKind> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| self.layer(*kind) & mask != 0)
    }

    pub fn color_at(&self, mask: u64) -> Option<Color> {
        if self.occupied() & mask == 0 {
            None
        } else if self.whites & mask != 0 {
            Some(Color::White)
        } else {
            Some(Color::Black)
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let mask = square_mask(square);
        let kind = self.kind_at(mask)?;
        let color = self.color_at(mask)?;
        Some(Piece::new(color, kind))
    }

    /// Place `piece` on the square(s) of `target`, replacing anything there.
    pub fn add_piece(&mut self, piece: Piece, target: u64) {
        self.remove_piece(target);
        *self.layer_mut(piece.kind) |= target;
        match piece.color {
            Color::White => self.whites |= target,
            Color::Black => self.whites &= !target,
        }
    }

    /// Blank the square(s) of `target`, returning the kind that was removed.
    pub fn remove_piece(&mut self, target: u64) -> Option<PieceKind> {
        let removed = self.kind_at(target);
        for kind in PieceKind::ALL {
            *self.layer_mut(kind) &= !target;
        }
        self.whites &= !target;
        removed
    }

    /// Per-square occupancy indexed by square number, ready for rendering.
    pub fn snapshot(&self) -> [Option<Piece>; 64] {
        let mut squares = [None; 64];
        for bit in set_bits(self.occupied()) {
            let square = bit.leading_zeros() as usize;
            if let (Some(kind), Some(color)) = (self.kind_at(bit), self.color_at(bit)) {
                squares[square] = Some(Piece::new(color, kind));
            }
        }
        squares
    }

    /// Every layer (including the en-passant square) turned 180 degrees.
    /// Colors, rights, turn and clocks are left alone.
    pub fn rotated_180(&self) -> Self {
        Self {
            pawns: rotate_180(self.pawns),
            knights: rotate_180(self.knights),
            bishops: rotate_180(self.bishops),
            rooks: rotate_180(self.rooks),
            queens: rotate_180(self.queens),
            kings: rotate_180(self.kings),
            whites: rotate_180(self.whites),
            en_passant: rotate_180(self.en_passant),
            ..*self
        }
    }

    /// The position as seen by `color`: its men occupy the white layer and
    /// advance northwards.
    ///
    /// For Black this is the whole-board rotation with the color layer
    /// complemented (within the occupied squares), castling rights swapped and
    /// the turn flipped, so the same white-centric generators serve both sides.
    /// Layers computed on the view map back with [`Color::orient`].
    pub fn oriented_for(&self, color: Color) -> Self {
        match color {
            Color::White => *self,
            Color::Black => {
                let mut view = self.rotated_180();
                view.whites = view.occupied() & !view.whites;
                view.castling_rights = self.castling_rights.swapped();
                view.side_to_move = self.side_to_move.opposite();
                view
            }
        }
    }
}
