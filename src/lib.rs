//! Crate root module declarations for the bitboard chess engine.
//!
//! Exposes the position model, the per-piece attack generators, legal-move
//! generation, notation codecs, evaluation and search, and the movers that
//! the match harness and the command-line driver play against each other.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod bit_plane;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod negamax;
}

pub mod engines {
    pub mod engine_human;
    pub mod engine_negamax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod move_notation;
    pub mod render_game_state;
}
