use gomoku::board::color::Color;
use gomoku::board::Board;
use gomoku::evaluate;
use gomoku::gomoku_position;

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("evaluate all empty cells", |b| {
        b.iter(evaluate_midgame_cells)
    });
    c.bench_function("board potential", |b| b.iter(score_midgame_position));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn midgame_position() -> Board {
    gomoku_position! {
        ...............
        ...............
        ...............
        ...............
        ...............
        ......o........
        ......xo.......
        .....oxxx......
        ......o.x......
        .........o.....
        ...............
        ...............
        ...............
        ...............
        ...............
    }
}

fn evaluate_midgame_cells() {
    let board = midgame_position();
    for coord in board.empty_cells() {
        evaluate::evaluate_cell(&board, coord, Color::Black);
    }
}

fn score_midgame_position() {
    let board = midgame_position();
    evaluate::board_potential(&board, Color::Black);
}
