//! Bit-plane primitives over 64-bit board layers.
//!
//! Square `s = rank * 8 + file` lives at bit `63 - s`, so a1 is the most
//! significant bit and h8 the least. Moving north one rank is therefore a
//! right shift by 8; east/west shifts are masked against the edge file first
//! so no bit wraps onto the neighbouring rank.

use crate::game_state::chess_types::Square;

pub const EMPTY_BOARD: u64 = 0;

pub const FILE_A: u64 = 0x8080_8080_8080_8080;
pub const FILE_H: u64 = 0x0101_0101_0101_0101;
pub const FILE_AB: u64 = 0xC0C0_C0C0_C0C0_C0C0;
pub const FILE_GH: u64 = 0x0303_0303_0303_0303;

pub const RANK_3: u64 = 0x0000_FF00_0000_0000;
pub const RANK_6: u64 = 0x0000_0000_00FF_0000;
pub const RANK_8: u64 = 0x0000_0000_0000_00FF;

/// Layer with exactly the bit for `square` set.
#[inline]
pub const fn square_mask(square: Square) -> u64 {
    1u64 << (63 - (square as u32 & 63))
}

/// Mask for a (file, rank) pair, both zero-based.
#[inline]
pub const fn file_rank_mask(file: u8, rank: u8) -> u64 {
    square_mask(rank * 8 + file)
}

/// Inverse of [`square_mask`]. Only meaningful when exactly one bit is set.
#[inline]
pub fn bit_index(single_bit: u64) -> Square {
    debug_assert_eq!(single_bit.count_ones(), 1, "bit_index needs a one-hot layer");
    single_bit.leading_zeros() as Square
}

#[inline]
pub const fn population_count(layer: u64) -> u32 {
    layer.count_ones()
}

/// Split off the lowest-indexed set bit: `(remaining_layer, extracted_bit)`.
#[inline]
pub const fn extract_least_square(layer: u64) -> (u64, u64) {
    let remaining = layer & layer.wrapping_sub(1);
    (remaining, layer ^ remaining)
}

/// Mirror the board through its centre: a8 <-> h1, e1 <-> d8.
#[inline]
pub const fn rotate_180(layer: u64) -> u64 {
    layer.reverse_bits()
}

#[inline]
pub const fn shift_n(layer: u64) -> u64 {
    layer >> 8
}

#[inline]
pub const fn shift_s(layer: u64) -> u64 {
    layer << 8
}

#[inline]
pub const fn shift_e(layer: u64) -> u64 {
    (layer & !FILE_H) >> 1
}

#[inline]
pub const fn shift_w(layer: u64) -> u64 {
    (layer & !FILE_A) << 1
}

#[inline]
pub const fn shift_ne(layer: u64) -> u64 {
    (layer & !FILE_H) >> 9
}

#[inline]
pub const fn shift_nw(layer: u64) -> u64 {
    (layer & !FILE_A) >> 7
}

#[inline]
pub const fn shift_se(layer: u64) -> u64 {
    (layer & !FILE_H) << 7
}

#[inline]
pub const fn shift_sw(layer: u64) -> u64 {
    (layer & !FILE_A) << 9
}

/// Iterate the set bits of a layer as one-hot masks, lowest bit first.
///
/// The iterator is `Copy`, so restarting is just reusing the original value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetBits(u64);

#[inline]
pub const fn set_bits(layer: u64) -> SetBits {
    SetBits(layer)
}

impl Iterator for SetBits {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        if self.0 == 0 {
            return None;
        }
        let (remaining, bit) = extract_least_square(self.0);
        self.0 = remaining;
        Some(bit)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SetBits {}
