//! Head-to-head match harness.
//!
//! Alternates two movers from a configured start position until the game
//! ends, re-validating every move they return against the legal-move list,
//! and records the game for a PGN-style transcript.

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::engines::engine_trait::Mover;
use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{FIFTY_MOVE_HALFMOVES, STARTING_POSITION_FEN};
use crate::game_state::chess_types::{Color, Move};
use crate::move_generation::legal_move_generator::{game_status, GameStatus};
use crate::utils::move_notation::move_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawFiftyMoveRule,
    DrawMoveCap,
}

impl MatchOutcome {
    /// PGN result token.
    pub const fn result_tag(self) -> &'static str {
        match self {
            MatchOutcome::WhiteWinCheckmate => "1-0",
            MatchOutcome::BlackWinCheckmate => "0-1",
            MatchOutcome::DrawStalemate | MatchOutcome::DrawFiftyMoveRule | MatchOutcome::DrawMoveCap => {
                "1/2-1/2"
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Full moves (one move by each side) before the game is called a draw.
    pub max_moves: u16,
    pub fifty_move_rule: bool,
    pub start_fen: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_moves: 100,
            fifty_move_rule: true,
            start_fen: STARTING_POSITION_FEN.to_owned(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub start_board: Board,
    pub final_board: Board,
    /// Every move in algebraic notation, in the order played.
    pub played_moves: Vec<String>,
    pub white_name: String,
    pub black_name: String,
    pub date: NaiveDate,
}

impl MatchResult {
    /// Headers followed by numbered movetext, ending with the result token.
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("[Date \"{}\"]\n", self.date.format("%Y.%m.%d")));
        out.push_str(&format!("[White \"{}\"]\n", self.white_name));
        out.push_str(&format!("[Black \"{}\"]\n", self.black_name));
        let start_fen = self.start_board.to_fen();
        if start_fen != STARTING_POSITION_FEN {
            out.push_str("[SetUp \"1\"]\n");
            out.push_str(&format!("[FEN \"{start_fen}\"]\n"));
        }
        out.push_str(&format!("[Result \"{}\"]\n\n", self.outcome.result_tag()));

        let mut movetext_parts = Vec::<String>::with_capacity(self.played_moves.len() + 1);
        let mut move_number = self.start_board.fullmove_number;
        let mut side = self.start_board.side_to_move;
        for (ply, notation) in self.played_moves.iter().enumerate() {
            match side {
                Color::White => movetext_parts.push(format!("{move_number}. {notation}")),
                Color::Black if ply == 0 => movetext_parts.push(format!("{move_number}... {notation}")),
                Color::Black => movetext_parts.push(notation.clone()),
            }
            if side == Color::Black {
                move_number = move_number.saturating_add(1);
            }
            side = side.opposite();
        }
        movetext_parts.push(self.outcome.result_tag().to_owned());

        out.push_str(&movetext_parts.join(" "));
        out.push('\n');
        out
    }
}

/// Play one game, `white` moving for White and `black` for Black.
pub fn play_match(white: &mut dyn Mover, black: &mut dyn Mover, config: &MatchConfig) -> ChessResult<MatchResult> {
    let start_board = Board::from_fen(&config.start_fen)?;
    let mut board = start_board;
    let mut played_moves = Vec::<String>::new();
    let ply_cap = usize::from(config.max_moves) * 2;

    info!(white = white.name(), black = black.name(), fen = %config.start_fen, "match started");

    let outcome = loop {
        match game_status(&board) {
            GameStatus::Checkmate => {
                break match board.side_to_move {
                    Color::White => MatchOutcome::BlackWinCheckmate,
                    Color::Black => MatchOutcome::WhiteWinCheckmate,
                };
            }
            GameStatus::Stalemate => break MatchOutcome::DrawStalemate,
            GameStatus::Ongoing => {}
        }
        if config.fifty_move_rule && board.halfmove_clock >= FIFTY_MOVE_HALFMOVES {
            break MatchOutcome::DrawFiftyMoveRule;
        }
        if played_moves.len() >= ply_cap {
            break MatchOutcome::DrawMoveCap;
        }

        let mover: &mut dyn Mover = match board.side_to_move {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };
        // A mover with nothing to offer is handed to validation as the null
        // move, which no position accepts.
        let mv = mover.choose_move(&board)?.unwrap_or(Move::NULL);
        let notation = move_to_algebraic(&board, mv);
        board.play(mv)?;

        debug!(ply = played_moves.len() + 1, mover = mover.name(), notation = %notation, "move played");
        played_moves.push(notation);
    };

    info!(outcome = ?outcome, plies = played_moves.len(), "match finished");

    Ok(MatchResult {
        outcome,
        start_board,
        final_board: board,
        played_moves,
        white_name: white.name().to_owned(),
        black_name: black.name().to_owned(),
        date: Local::now().date_naive(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_negamax::NegamaxMover;
    use crate::engines::engine_random::RandomMover;
    use crate::errors::ChessError;

    /// Replays a fixed list of moves, then runs out.
    struct ScriptedMover {
        moves: std::vec::IntoIter<Move>,
    }

    impl Mover for ScriptedMover {
        fn name(&self) -> &str {
            "scripted"
        }

        fn choose_move(&mut self, _board: &Board) -> ChessResult<Option<Move>> {
            Ok(self.moves.next())
        }
    }

    #[test]
    fn game_already_over_records_no_moves() {
        let config = MatchConfig {
            start_fen: "8/8/1k6/4b3/4b3/8/P7/K7 w - - 0 1".to_owned(),
            ..MatchConfig::default()
        };
        let mut white = RandomMover::with_seed(1);
        let mut black = RandomMover::with_seed(2);
        let result = play_match(&mut white, &mut black, &config).expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::BlackWinCheckmate);
        assert!(result.played_moves.is_empty());
        assert!(result.transcript().contains("[FEN \"8/8/1k6/4b3/4b3/8/P7/K7 w - - 0 1\"]"));
    }

    #[test]
    fn negamax_mates_on_the_back_rank() {
        let config = MatchConfig {
            start_fen: "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1".to_owned(),
            ..MatchConfig::default()
        };
        let mut white = NegamaxMover::new(2);
        let mut black = RandomMover::with_seed(3);
        let result = play_match(&mut white, &mut black, &config).expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::WhiteWinCheckmate);
        assert_eq!(result.played_moves, vec!["Ra8".to_owned()]);
        assert!(result.transcript().ends_with("1. Ra8 1-0\n"));
    }

    #[test]
    fn move_cap_ends_the_game() {
        let config = MatchConfig {
            max_moves: 3,
            ..MatchConfig::default()
        };
        let mut white = RandomMover::with_seed(11);
        let mut black = RandomMover::with_seed(12);
        let result = play_match(&mut white, &mut black, &config).expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::DrawMoveCap);
        assert_eq!(result.played_moves.len(), 6);
        assert_eq!(result.final_board.fullmove_number, 4);
    }

    #[test]
    fn fifty_move_rule_is_optional() {
        let fen = "4k3/8/8/8/8/8/8/R3K3 w - - 100 80".to_owned();
        let config = MatchConfig {
            start_fen: fen.clone(),
            ..MatchConfig::default()
        };
        let mut white = RandomMover::with_seed(5);
        let mut black = RandomMover::with_seed(6);
        let result = play_match(&mut white, &mut black, &config).expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::DrawFiftyMoveRule);

        let capped = MatchConfig {
            start_fen: fen,
            fifty_move_rule: false,
            max_moves: 1,
        };
        let result = play_match(&mut white, &mut black, &capped).expect("match should run");
        assert_ne!(result.outcome, MatchOutcome::DrawFiftyMoveRule);
    }

    #[test]
    fn transcript_numbers_moves_from_a_black_start() {
        let start = Board::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
            .expect("FEN should parse");
        let result = MatchResult {
            outcome: MatchOutcome::DrawMoveCap,
            start_board: start,
            final_board: start,
            played_moves: vec!["e5".to_owned(), "Nf3".to_owned(), "Nc6".to_owned()],
            white_name: "human".to_owned(),
            black_name: "random".to_owned(),
            date: NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date"),
        };
        let transcript = result.transcript();
        assert!(transcript.starts_with("[Date \"2024.03.09\"]\n"));
        assert!(transcript.ends_with("1... e5 2. Nf3 Nc6 1/2-1/2\n"));
    }

    #[test]
    fn illegal_scripted_move_is_rejected() {
        let e2 = crate::utils::algebraic::algebraic_to_bitboard("e2").expect("e2 should parse");
        let e5 = crate::utils::algebraic::algebraic_to_bitboard("e5").expect("e5 should parse");
        let mut white = ScriptedMover {
            moves: vec![Move::new(e2, e5, crate::game_state::chess_types::Special::None)].into_iter(),
        };
        let mut black = RandomMover::with_seed(9);
        let err = play_match(&mut white, &mut black, &MatchConfig::default()).expect_err("e2-e5 is illegal");
        assert!(matches!(err, ChessError::IllegalMove { .. }));
    }

    #[test]
    fn silent_mover_is_rejected() {
        let mut white = ScriptedMover {
            moves: Vec::new().into_iter(),
        };
        let mut black = RandomMover::with_seed(9);
        let err = play_match(&mut white, &mut black, &MatchConfig::default()).expect_err("no move offered");
        assert!(matches!(err, ChessError::IllegalMove { .. }));
    }
}
