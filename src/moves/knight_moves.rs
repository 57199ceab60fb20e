//! Knight targets from fixed L-shaped offsets.
//!
//! Each offset is masked against the files it would wrap across before the
//! shift. Enemies do not matter to a knight; allies are never targets.

use crate::moves::bit_plane::{FILE_A, FILE_AB, FILE_GH, FILE_H};

#[inline]
pub const fn knight_attacks(knights: u64, allies: u64) -> u64 {
    let mut moves = (knights & !FILE_H) >> 17; // north-north-east
    moves |= (knights & !FILE_GH) >> 10; // east-north-east
    moves |= (knights & !FILE_GH) << 6; // east-south-east
    moves |= (knights & !FILE_H) << 15; // south-south-east
    moves |= (knights & !FILE_A) << 17; // south-south-west
    moves |= (knights & !FILE_AB) << 10; // west-south-west
    moves |= (knights & !FILE_AB) >> 6; // west-north-west
    moves |= (knights & !FILE_A) >> 15; // north-north-west
    moves & !allies
}
