use core_sim::SimulationState;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ui::chart::FinanceChart;

const HISTORY_LENGTHS: [u64; 3] = [100, 10_000, 100_000];

fn state_with_updates(updates: u64) -> SimulationState {
    let mut state = SimulationState::default();
    for step in 0..updates as i64 {
        state.apply_update(50_000 + step, 30_000 - step, 10_000);
    }
    state
}

fn bench_chart_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart_rebuild");

    for updates in HISTORY_LENGTHS {
        let state = state_with_updates(updates);
        group.throughput(Throughput::Elements(updates + 1));
        group.bench_with_input(
            BenchmarkId::new("from_history", updates),
            &state,
            |b, state| {
                b.iter(|| FinanceChart::from_history(state.history(), 1));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_chart_rebuild);
criterion_main!(benches);
