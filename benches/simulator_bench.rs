//! Benchmarks for the meter simulator
//!
//! Run with: cargo bench

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use powergrid::telemetry::{simulated_reading, Simulator};

fn bench_reading(c: &mut Criterion) {
    let now = Utc::now();

    c.bench_function("simulated_reading", |b| {
        b.iter(|| simulated_reading(black_box("METER-001"), black_box(&now)))
    });
}

fn bench_cycle(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("simulation_cycle");

    for meters in [50, 1000, 10000] {
        let simulator = Simulator::new();
        rt.block_on(simulator.generate(meters));

        group.throughput(Throughput::Elements(meters as u64));

        group.bench_function(format!("generate_{}", meters), |b| {
            b.iter(|| rt.block_on(simulator.generate(black_box(meters))))
        });

        group.bench_function(format!("snapshot_json_{}", meters), |b| {
            b.iter(|| {
                let readings = rt.block_on(simulator.readings());
                serde_json::to_vec(black_box(&readings)).unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reading, bench_cycle);
criterion_main!(benches);
