//! King targets: the eight neighbouring squares.
//!
//! Castling is not a king attack; it is generated with the legality checks in
//! `move_generation::legal_move_generator`.

use crate::moves::bit_plane::{shift_e, shift_n, shift_ne, shift_nw, shift_s, shift_se, shift_sw, shift_w};

#[inline]
pub const fn king_attacks(kings: u64, allies: u64) -> u64 {
    let mut moves = shift_n(kings) | shift_ne(kings) | shift_e(kings);
    moves |= shift_se(kings) | shift_s(kings) | shift_sw(kings);
    moves |= shift_w(kings) | shift_nw(kings);
    moves & !allies
}
