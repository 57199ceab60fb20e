use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use bitboard_chess::game_state::board::Board;
use bitboard_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use bitboard_chess::move_generation::legal_move_generator::legal_moves;
use bitboard_chess::move_generation::perft::perft;
use bitboard_chess::search::board_scoring::{BoardScorer, StaticEvaluation};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [u64],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTING_POSITION_FEN,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "rook_endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected_nodes: &[14, 191, 2812],
    },
];

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let board = Board::from_fen(case.fen).expect("benchmark FEN should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            assert_eq!(
                perft(&board, depth),
                *expected_nodes,
                "node mismatch for {} depth {}",
                case.name,
                depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                &depth,
                |b, depth| b.iter(|| black_box(perft(black_box(&board), *depth))),
            );
        }
    }

    group.finish();
}

fn bench_move_list_and_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_position");
    for case in CASES {
        let board = Board::from_fen(case.fen).expect("benchmark FEN should parse");
        group.bench_with_input(BenchmarkId::new("legal_moves", case.name), &board, |b, board| {
            b.iter(|| black_box(legal_moves(black_box(board))))
        });
        group.bench_with_input(BenchmarkId::new("static_eval", case.name), &board, |b, board| {
            b.iter(|| black_box(StaticEvaluation.score(black_box(board))))
        });
    }
    group.finish();
}

criterion_group!(movegen_benches, bench_perft, bench_move_list_and_eval);
criterion_main!(movegen_benches);
