use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockbattle_bot::core::{Field, Shape};
use blockbattle_bot::protocol::{Bot, BotState, RandomBot};
use blockbattle_bot::types::PieceKind;

fn bench_field_parse(c: &mut Criterion) {
    let payload = (0..20)
        .map(|_| vec!["0"; 10].join(","))
        .collect::<Vec<_>>()
        .join(";");

    c.bench_function("field_parse_10x20", |b| {
        b.iter(|| Field::parse(black_box(10), black_box(20), black_box(&payload)))
    });
}

fn bench_rotation_cycle(c: &mut Criterion) {
    c.bench_function("rotate_all_kinds_full_cycle", |b| {
        b.iter(|| {
            for kind in PieceKind::ALL {
                let mut shape = Shape::new(kind, (3, 0));
                for _ in 0..4 {
                    shape.turn_right();
                }
                black_box(shape.blocks());
            }
        })
    });
}

fn bench_shift_and_project(c: &mut Criterion) {
    let mut shape = Shape::new(PieceKind::I, (3, 0));

    c.bench_function("shift_down", |b| {
        b.iter(|| {
            shape.one_down();
            black_box(shape.location());
        })
    });
}

fn bench_random_moves(c: &mut Criterion) {
    let mut bot = RandomBot::new(12345);
    let state = BotState::new();

    c.bench_function("random_move_sequence", |b| {
        b.iter(|| black_box(bot.choose_moves(&state)))
    });
}

criterion_group!(
    benches,
    bench_field_parse,
    bench_rotation_cycle,
    bench_shift_and_project,
    bench_random_moves
);
criterion_main!(benches);
