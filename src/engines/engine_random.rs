//! Random-move mover.
//!
//! Selects uniformly from the legal moves. Used for smoke-testing games end to
//! end and as the weakest opponent.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::engines::engine_trait::Mover;
use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;
use crate::move_generation::legal_move_generator::legal_moves;

pub struct RandomMover {
    rng: StdRng,
}

impl RandomMover {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic sequence of choices for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomMover {
    fn default() -> Self {
        Self::new()
    }
}

impl Mover for RandomMover {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, board: &Board) -> ChessResult<Option<Move>> {
        let legal = legal_moves(board);
        let picked = legal.as_slice().choose(&mut self.rng).copied();
        debug!(candidates = legal.len(), picked = ?picked, "random mover chose");
        Ok(picked)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomMover;
    use crate::engines::engine_trait::Mover;
    use crate::game_state::board::Board;
    use crate::move_generation::legal_move_generator::legal_moves;

    #[test]
    fn picks_a_legal_move() {
        let board = Board::new_game();
        let mut mover = RandomMover::with_seed(7);
        for _ in 0..10 {
            let mv = mover
                .choose_move(&board)
                .expect("random mover does not fail")
                .expect("start position has moves");
            assert!(legal_moves(&board).contains(&mv));
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let board = Board::new_game();
        let mut first = RandomMover::with_seed(42);
        let mut second = RandomMover::with_seed(42);
        for _ in 0..5 {
            assert_eq!(
                first.choose_move(&board).expect("no failure"),
                second.choose_move(&board).expect("no failure")
            );
        }
    }

    #[test]
    fn no_move_when_mated() {
        let mated = Board::from_fen("8/8/1k6/4b3/4b3/8/P7/K7 w - - 0 1").expect("FEN should parse");
        let mut mover = RandomMover::with_seed(1);
        assert_eq!(mover.choose_move(&mated).expect("no failure"), None);
    }
}
