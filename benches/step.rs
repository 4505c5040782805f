use criterion::{criterion_group, criterion_main, Criterion};
use lifelike::{Grid, Rule};

const N: usize = 256;
const SEED: u64 = 42;
const DENSITY: f64 = 30.0;

fn step_moore(c: &mut Criterion) {
    let rule = Rule::life();
    let grid = Grid::random(N, N, Some(SEED), DENSITY);
    c.bench_function("step_moore", |b| b.iter(|| grid.step(&rule)));
}

fn step_von_neumann(c: &mut Criterion) {
    let rule: Rule = "B2/S2V".parse().unwrap();
    let grid = Grid::random(N, N, Some(SEED), DENSITY);
    c.bench_function("step_von_neumann", |b| b.iter(|| grid.step(&rule)));
}

criterion_group!(benches, step_moore, step_von_neumann);
criterion_main!(benches);
