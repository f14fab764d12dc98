use criterion::{black_box, criterion_group, criterion_main, Criterion};
use brickfall::core::{Board, SimConfig, Simulation, Transform};
use brickfall::types::{CellState, Command, Direction, PieceKind};

fn falling(kind: PieceKind) -> Simulation {
    let mut sim = Simulation::new(SimConfig::default().with_spawn(4, 10)).unwrap();
    sim.set_next_kind(kind);
    sim.gravity_tick();
    sim
}

fn bench_fixed_update(c: &mut Criterion) {
    let mut sim = Simulation::new(SimConfig::default().with_speed(9)).unwrap();

    c.bench_function("fixed_update", |b| {
        b.iter(|| {
            if sim.fixed_update().is_none() && sim.is_game_over() {
                sim.reset();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::default();
            // Fill bottom 4 rows
            for y in 0..4 {
                for x in 0..10 {
                    board.set_state(x, y, CellState::Locked);
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_shift(c: &mut Criterion) {
    let mut sim = falling(PieceKind::T);
    let mut direction = Direction::Left;

    c.bench_function("try_transform_shift", |b| {
        b.iter(|| {
            if !sim.try_transform(black_box(Transform::Shift(direction))) {
                direction = match direction {
                    Direction::Left => Direction::Right,
                    _ => Direction::Left,
                };
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut sim = falling(PieceKind::L);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            sim.apply(black_box(Command::Rotate));
        })
    });
}

fn bench_drop_to_floor(c: &mut Criterion) {
    c.bench_function("drop_to_floor", |b| {
        b.iter(|| {
            let mut sim = falling(PieceKind::I);
            while sim.apply(Command::GravityTick) && sim.active().is_some() {}
            black_box(sim.board().count(CellState::Locked));
        })
    });
}

criterion_group!(
    benches,
    bench_fixed_update,
    bench_line_clear,
    bench_shift,
    bench_rotate,
    bench_drop_to_floor
);
criterion_main!(benches);
