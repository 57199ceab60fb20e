//! Search-driven mover: plays the move whose resulting position is worst for
//! the opponent under fixed-depth negamax.

use tracing::debug;

use crate::engines::engine_trait::Mover;
use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;
use crate::search::board_scoring::{BoardScorer, StaticEvaluation};
use crate::search::negamax::best_move;

pub const DEFAULT_NEGAMAX_DEPTH: u8 = 2;

pub struct NegamaxMover<S = StaticEvaluation> {
    depth: u8,
    scorer: S,
}

impl NegamaxMover {
    pub fn new(depth: u8) -> Self {
        Self::with_scorer(depth, StaticEvaluation)
    }
}

impl<S: BoardScorer> NegamaxMover<S> {
    pub fn with_scorer(depth: u8, scorer: S) -> Self {
        Self {
            depth: depth.max(1),
            scorer,
        }
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl Default for NegamaxMover {
    fn default() -> Self {
        Self::new(DEFAULT_NEGAMAX_DEPTH)
    }
}

impl<S: BoardScorer> Mover for NegamaxMover<S> {
    fn name(&self) -> &str {
        "negamax"
    }

    fn choose_move(&mut self, board: &Board) -> ChessResult<Option<Move>> {
        let Some((mv, score)) = best_move(board, self.depth, &self.scorer) else {
            return Ok(None);
        };
        debug!(depth = self.depth, score, "negamax mover chose {:?}", mv);
        Ok(Some(mv))
    }
}
