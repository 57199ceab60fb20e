//! Rook targets: orthogonal rays with blocking.

use crate::moves::bit_plane::{shift_e, shift_n, shift_s, shift_w};
use crate::moves::sliding::slide_all;

pub const ROOK_DIRECTIONS: [fn(u64) -> u64; 4] = [shift_n, shift_e, shift_s, shift_w];

#[inline]
pub fn rook_attacks(rooks: u64, enemies: u64, allies: u64) -> u64 {
    slide_all(&ROOK_DIRECTIONS, rooks, enemies, allies)
}
