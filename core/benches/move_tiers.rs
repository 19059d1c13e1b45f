use blokburst_core::{
    has_any_valid_move, Board, Choice, ChoiceId, ColorTag, GameConfig, RandomChoiceGenerator,
    Session, Shape, ShapeKind,
};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

/// 10x10 board with scattered holes and no full line, the worst case for the
/// terminal scan.
fn near_full_board() -> Board {
    let mut board = Board::new(10);
    let single = Shape::new(ShapeKind::Single);
    for row in 0..10u8 {
        for col in 0..10u8 {
            if (row + col) % 3 != 0 {
                board.place(&single, (row, col), ColorTag(0));
            }
        }
    }
    board
}

fn rack() -> Vec<Choice> {
    [ShapeKind::Square2x2, ShapeKind::HLine4, ShapeKind::Tee]
        .into_iter()
        .enumerate()
        .map(|(i, kind)| Choice {
            id: ChoiceId(i as u64),
            shape: Shape::new(kind),
            color: ColorTag(0),
        })
        .collect()
}

fn terminal_scan(c: &mut Criterion) {
    let board = near_full_board();
    let choices = rack();

    c.bench_function("terminal_scan_10x10", |b| {
        b.iter(|| has_any_valid_move(black_box(&board), black_box(&choices)))
    });
}

fn full_move(c: &mut Criterion) {
    let mut generator = RandomChoiceGenerator::new(1);
    let session = Session::new(GameConfig::default(), &mut generator).unwrap();

    c.bench_function("apply_move_8x8", |b| {
        b.iter_batched(
            || (session.clone(), generator.clone()),
            |(mut session, mut generator)| {
                let id = session.choices()[0].id;
                session.apply_move(&mut generator, id, (4, 4)).unwrap();
                session
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, terminal_scan, full_move);
criterion_main!(benches);
