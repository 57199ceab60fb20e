//! Ray tracing shared by the sliding pieces.

/// Slide every attacker along one compass direction until it is blocked.
///
/// Squares holding an ally are never targets and stop the ray; an enemy square
/// is the last target on its ray (a capture).
#[inline]
pub fn sliding_attack(step: fn(u64) -> u64, attackers: u64, enemies: u64, allies: u64) -> u64 {
    let mut moves = 0u64;
    let mut frontier = attackers;
    while frontier != 0 {
        frontier = step(frontier);
        moves |= frontier & !allies;
        frontier &= !(allies | enemies);
    }
    moves
}

/// Union of [`sliding_attack`] over several directions.
#[inline]
pub fn slide_all(directions: &[fn(u64) -> u64], attackers: u64, enemies: u64, allies: u64) -> u64 {
    directions
        .iter()
        .fold(0u64, |acc, step| acc | sliding_attack(*step, attackers, enemies, allies))
}
