use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Queen targets are the union of rook and bishop rays.
#[inline]
pub fn queen_attacks(queens: u64, enemies: u64, allies: u64) -> u64 {
    rook_attacks(queens, enemies, allies) | bishop_attacks(queens, enemies, allies)
}
