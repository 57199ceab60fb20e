//! Command-line match driver: two movers play one game in the terminal.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use bitboard_chess::engines::engine_human::HumanMover;
use bitboard_chess::engines::engine_negamax::{NegamaxMover, DEFAULT_NEGAMAX_DEPTH};
use bitboard_chess::engines::engine_random::RandomMover;
use bitboard_chess::engines::engine_trait::Mover;
use bitboard_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use bitboard_chess::utils::engine_match_harness::{play_match, MatchConfig};
use bitboard_chess::utils::render_game_state::render_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MoverKind {
    Human,
    Random,
    Negamax,
}

#[derive(Parser, Debug)]
#[command(about = "Play a game of chess between two movers", author, version)]
struct Args {
    /// Who plays White
    #[arg(long, value_enum, default_value_t = MoverKind::Negamax)]
    white: MoverKind,

    /// Who plays Black
    #[arg(long, value_enum, default_value_t = MoverKind::Human)]
    black: MoverKind,

    /// Negamax search depth in plies
    #[arg(long, default_value_t = DEFAULT_NEGAMAX_DEPTH)]
    depth: u8,

    /// Full moves before the game is called a draw
    #[arg(long, default_value_t = 100)]
    max_moves: u16,

    /// Start position
    #[arg(long, value_name = "FEN", default_value = STARTING_POSITION_FEN)]
    fen: String,

    /// Seed for the random mover, for reproducible games
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn build_mover(kind: MoverKind, args: &Args, seed_offset: u64) -> Box<dyn Mover> {
    match kind {
        MoverKind::Human => Box::new(HumanMover::stdio()),
        MoverKind::Random => match args.seed {
            Some(seed) => Box::new(RandomMover::with_seed(seed.wrapping_add(seed_offset))),
            None => Box::new(RandomMover::new()),
        },
        MoverKind::Negamax => Box::new(NegamaxMover::new(args.depth)),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut white = build_mover(args.white, &args, 0);
    let mut black = build_mover(args.black, &args, 1);

    let config = MatchConfig {
        max_moves: args.max_moves,
        start_fen: args.fen.clone(),
        ..MatchConfig::default()
    };

    let result = play_match(white.as_mut(), black.as_mut(), &config).context("match aborted")?;

    println!("{}", render_board(&result.final_board));
    println!();
    println!("{}", result.transcript());
    Ok(())
}
