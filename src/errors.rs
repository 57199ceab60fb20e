//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type returned by parsing, move validation
//! and the movers. Malformed input is reported here; ambiguous notation is
//! reported here too by the strict decoder, while the lenient decoder turns it
//! into the null move.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChessError {
    #[error("FEN is missing its piece placement field")]
    MissingPlacement,

    #[error("FEN piece placement must contain 8 ranks, found {0}")]
    RankCount(usize),

    #[error("FEN rank {rank} describes {files} files instead of 8")]
    RankWidth { rank: u8, files: usize },

    #[error("invalid piece character '{0}' in FEN piece placement")]
    InvalidPiece(char),

    #[error("invalid empty-square count '{0}' in FEN piece placement")]
    InvalidEmptyCount(char),

    #[error("invalid square name: {0}")]
    InvalidSquare(String),

    #[error("bitboard {0:#018x} does not hold exactly one square")]
    NotOneSquare(u64),

    #[error("empty move notation")]
    EmptyNotation,

    #[error("no destination square in move notation '{0}'")]
    MissingDestination(String),

    #[error("move '{notation}' is ambiguous: {candidates} pieces can make it")]
    Ambiguous { notation: String, candidates: u32 },

    #[error("no legal move matches '{0}'")]
    NoMatchingMove(String),

    #[error("illegal move {src} to {dst}")]
    IllegalMove { src: String, dst: String },

    #[error("move input closed")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type ChessResult<T> = Result<T, ChessError>;
