use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_minesweeper::core::{Board, GameConfig};
use tui_minesweeper::input::{Decoder, PushbackReader};
use tui_minesweeper::term::BoardView;

fn bench_generate(c: &mut Criterion) {
    let config = GameConfig::new(30, 16, 99).unwrap();
    let mut seed = 0u64;

    c.bench_function("generate_30x16_99", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let mut board = Board::with_seed(config, seed);
            board.generate(black_box(15), black_box(8));
            board
        })
    });
}

fn bench_flood_reveal(c: &mut Criterion) {
    // One corner mine leaves a single zero region covering the board.
    let template = Board::with_mines(200, 200, &[(199, 199)]).unwrap();

    c.bench_function("flood_200x200", |b| {
        b.iter(|| {
            let mut board = template.clone();
            board.open(black_box(0), black_box(0))
        })
    });
}

fn bench_decode(c: &mut Criterion) {
    let input: Vec<u8> = b"12l\x1b[A\x1b[1;5Cf j\x1bxq"
        .iter()
        .copied()
        .cycle()
        .take(4096)
        .collect();

    c.bench_function("decode_4k_bytes", |b| {
        b.iter(|| {
            let mut decoder = Decoder::new(PushbackReader::new(black_box(input.as_slice())));
            let mut n = 0usize;
            while decoder.decode().is_ok() {
                n += 1;
            }
            n
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut board = Board::with_mines(30, 16, &[(29, 15), (0, 15)]).unwrap();
    board.open(0, 0);
    let snap = board.snapshot();
    let view = BoardView::new();

    c.bench_function("render_30x16", |b| {
        b.iter(|| view.render(black_box(&snap)))
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_flood_reveal,
    bench_decode,
    bench_render
);
criterion_main!(benches);
