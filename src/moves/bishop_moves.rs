//! Bishop targets: diagonal rays with blocking.

use crate::moves::bit_plane::{shift_ne, shift_nw, shift_se, shift_sw};
use crate::moves::sliding::slide_all;

pub const BISHOP_DIRECTIONS: [fn(u64) -> u64; 4] = [shift_ne, shift_nw, shift_se, shift_sw];

#[inline]
pub fn bishop_attacks(bishops: u64, enemies: u64, allies: u64) -> u64 {
    slide_all(&BISHOP_DIRECTIONS, bishops, enemies, allies)
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks;
    use crate::utils::algebraic::squares_to_bitboard;

    fn bb(names: &[&str]) -> u64 {
        squares_to_bitboard(names).expect("test squares should parse")
    }

    #[test]
    fn corner_bishop_sees_the_long_diagonal() {
        let attacks = bishop_attacks(bb(&["a1"]), 0, 0);
        assert_eq!(attacks, bb(&["b2", "c3", "d4", "e5", "f6", "g7", "h8"]));
    }

    #[test]
    fn bishop_from_d4_has_thirteen_targets() {
        assert_eq!(bishop_attacks(bb(&["d4"]), 0, 0).count_ones(), 13);
    }

    #[test]
    fn bishop_captures_first_enemy_only() {
        let attacks = bishop_attacks(bb(&["c1"]), bb(&["e3", "f4"]), bb(&["b2"]));
        assert_eq!(attacks, bb(&["d2", "e3"]));
    }
}
