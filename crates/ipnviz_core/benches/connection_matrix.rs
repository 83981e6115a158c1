use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ipnviz_core::composer::Component;
use ipnviz_core::connections::{ConnectionMarkers, ConnectionMatrix};
use ipnviz_core::marker::MarkerContext;
use ipnviz_core::Scene;
use ipnviz_data::{NodePair, Point3, TickSnapshot};

const NODES: usize = 200;

fn ring_tick(offset: usize) -> TickSnapshot {
    let mut tick = TickSnapshot::at_positions(
        (0..NODES).map(|i| Point3::new(i as f64 * 1e9, 0.0, 0.0)),
    );
    tick.connectable_node_indices = (0..NODES)
        .map(|i| NodePair::new(i, (i + 1 + offset) % NODES))
        .collect();
    tick.sending_node_indices = tick.connectable_node_indices.iter().step_by(7).copied().collect();
    tick
}

fn bench_get_or_create(c: &mut Criterion) {
    c.bench_function("connection_matrix_fill_200", |b| {
        b.iter(|| {
            let mut scene = Scene::new();
            let mut matrix = ConnectionMatrix::new();
            for i in 0..NODES {
                for j in (i + 1)..NODES.min(i + 10) {
                    matrix.get_or_create(&mut scene, j, i);
                }
            }
            black_box(matrix.len())
        })
    });
}

fn bench_tick_reconcile(c: &mut Criterion) {
    let ctx = MarkerContext::default();
    let mut scene = Scene::new();
    let mut connections = ConnectionMarkers::new();
    let ticks: Vec<TickSnapshot> = (0..8).map(ring_tick).collect();
    for tick in &ticks {
        connections.update(&mut scene, &ctx, tick);
    }

    c.bench_function("connection_tick_200_nodes", |b| {
        let mut index = 0;
        b.iter(|| {
            connections.update(&mut scene, &ctx, &ticks[index % ticks.len()]);
            index += 1;
            black_box(connections.matrix().len())
        })
    });
}

criterion_group!(benches, bench_get_or_create, bench_tick_reconcile);
criterion_main!(benches);
