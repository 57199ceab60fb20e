//! Pawn pushes and captures, always oriented northwards.
//!
//! Black pawns are handled by rotating the position 180 degrees first (see
//! `Board::oriented_for`), so only the white direction is implemented here.

use crate::moves::bit_plane::{shift_n, shift_ne, shift_nw, RANK_3};

/// One step forward onto an empty square, two from the starting rank when
/// both squares ahead are empty.
#[inline]
pub const fn pawn_pushes(pawns: u64, enemies: u64, allies: u64) -> u64 {
    let empty = !(enemies | allies);
    let single = shift_n(pawns) & empty;
    let double = shift_n(single & RANK_3) & empty;
    single | double
}

/// Diagonal-forward squares, only where `targets` has a piece to take.
///
/// Callers add the en-passant square to `targets` when generating moves.
#[inline]
pub const fn pawn_attacks(pawns: u64, targets: u64) -> u64 {
    (shift_ne(pawns) | shift_nw(pawns)) & targets
}

#[cfg(test)]
mod tests {
    use super::{pawn_attacks, pawn_pushes};
    use crate::utils::algebraic::squares_to_bitboard;

    fn bb(names: &[&str]) -> u64 {
        squares_to_bitboard(names).expect("test squares should parse")
    }

    #[test]
    fn unobstructed_pawns_advance_one_or_two() {
        assert_eq!(pawn_pushes(bb(&["a2", "b3"]), 0, 0), bb(&["a3", "a4", "b4"]));
    }

    #[test]
    fn blocked_pawns_stop_short() {
        assert_eq!(pawn_pushes(bb(&["a2"]), bb(&["a4"]), 0), bb(&["a3"]));
        assert_eq!(pawn_pushes(bb(&["a2"]), 0, bb(&["a3"])), 0);
    }

    #[test]
    fn pawns_capture_diagonally_onto_enemies_only() {
        assert_eq!(pawn_attacks(bb(&["b2", "c2"]), bb(&["c3", "e3"])), bb(&["c3"]));
        assert_eq!(pawn_attacks(bb(&["a7"]), bb(&["b8"])), bb(&["b8"]));
        assert_eq!(pawn_attacks(bb(&["h4"]), bb(&["g5", "a6"])), bb(&["g5"]));
    }
}
