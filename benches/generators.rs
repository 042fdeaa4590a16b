use criterion::{criterion_group, criterion_main, Criterion};
use mazewalk::{
    cells::MoveDirection,
    generators,
    maze::Maze,
    units::{Height, Width},
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn bench_recursive_backtracker_maze_32(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(32);
    c.bench_function("recursive_backtracker_maze_32", move |b| {
        b.iter(|| generators::recursive_backtracker(Width(32), Height(32), &mut rng))
    });
}

fn bench_recursive_backtracker_maze_256(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(256);
    c.bench_function("recursive_backtracker_maze_256", move |b| {
        b.iter(|| generators::recursive_backtracker(Width(256), Height(256), &mut rng))
    });
}

fn bench_attempt_move_32(c: &mut Criterion) {
    let grid = generators::generate_seeded(Width(32), Height(32), 1).unwrap();
    let maze = Maze::from_grid(grid, 20.0).unwrap();
    let start = maze.start_position();
    c.bench_function("attempt_move_32", move |b| {
        b.iter(|| {
            MoveDirection::ALL
                .iter()
                .map(|dir| maze.attempt_move(start, *dir))
                .count()
        })
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_32,
    bench_recursive_backtracker_maze_256,
    bench_attempt_move_32
);
criterion_main!(benches);
