//! Benchmarks for the tape engine.
//!
//! Run with: `cargo bench` in the core/ directory.
//!
//! Benchmark groups:
//! 1. nested_loops: Execution of pre-validated programs with loops nested `n` deep
//! 2. validate: Decoding and bracket validation alone, for comparison

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tapevm_core::{
    Program,
    api::{Capture, Engine, NoopObserver, RunOptions, ScriptedInput},
};

/// Generate `depth` nested counting loops, each running `width` times.
///
/// Cell `i` holds the counter of loop `i`; the innermost body increments the
/// cell past the last counter.
fn generate_nested_loops(depth: usize, width: usize) -> String {
    let mut source = String::new();
    for _ in 0..depth {
        source.push_str(&"+".repeat(width));
        source.push_str("[>");
    }
    source.push('+');
    for _ in 0..depth {
        source.push_str("<-]");
    }
    source
}

fn bench_nested_loops(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_loops");
    let engine = Engine::new(RunOptions::default());

    for depth in [1, 2, 3] {
        let source = generate_nested_loops(depth, 20);
        let program = engine.compile(&source).expect("valid program");
        group.throughput(Throughput::Elements(program.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(depth), &program, |b, program| {
            b.iter(|| {
                engine
                    .execute(
                        black_box(program),
                        &mut Capture::new(),
                        &mut ScriptedInput::default(),
                        &mut NoopObserver,
                    )
                    .expect("run failed")
            });
        });
    }

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    for depth in [10, 100, 1000] {
        let source = generate_nested_loops(depth, 1);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &source, |b, source| {
            b.iter(|| Program::parse(black_box(source)).expect("valid program"));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_nested_loops, bench_validate);
criterion_main!(benches);
