use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use fourth::search::{SearchConfig, Searcher};
use fourth::{Board, Phase, Pos, Side, DEFAULT_ROSTER};

/// Opening position: Red has placed one piece
fn placement_board() -> Board {
    let mut board = Board::new(5, &DEFAULT_ROSTER);
    board.place(Side::Red, 0, Pos::new(2, 2)).expect("legal setup");
    board
}

/// Every piece on the board, nobody has four in a row
fn movement_board() -> Board {
    let mut board = Board::new(5, &DEFAULT_ROSTER);
    let red = [(0, 0), (0, 2), (1, 1), (2, 3), (3, 0)];
    let blue = [(0, 4), (1, 3), (2, 1), (3, 2), (4, 4)];
    for (i, &(r, c)) in red.iter().enumerate() {
        board.place(Side::Red, i, Pos::new(r, c)).expect("legal setup");
    }
    for (i, &(r, c)) in blue.iter().enumerate() {
        board.place(Side::Blue, i, Pos::new(r, c)).expect("legal setup");
    }
    board
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_best_move");
    group.sample_size(10);

    let cases = [
        ("placement", placement_board(), Side::Blue, Phase::Placement),
        ("movement", movement_board(), Side::Red, Phase::Movement),
    ];
    for (name, board, side, phase) in cases {
        for depth in [2u32, 3] {
            group.bench_with_input(BenchmarkId::new(name, depth), &depth, |b, &depth| {
                let mut searcher = Searcher::new(SearchConfig::default());
                let mut board = board.clone();
                b.iter(|| black_box(searcher.find_best_move(&mut board, side, phase, depth)));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
