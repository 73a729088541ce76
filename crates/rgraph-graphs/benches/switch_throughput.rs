use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rgraph_core::{ChainRng, SwitchState};
use rgraph_graphs::greedy_bipartite;

fn switch_bench(c: &mut Criterion) {
    let dx = vec![4usize; 500];
    let dy = vec![4usize; 500];
    let graph = greedy_bipartite(&dx, &dy).unwrap();

    c.bench_function("bipartite_switch", |b| {
        let mut rng = ChainRng::from_seed(7);
        let mut state = graph.clone();
        b.iter(|| {
            black_box(state.switch(&mut rng));
        });
    });

    c.bench_function("edges_snapshot", |b| {
        b.iter(|| {
            black_box(graph.edges());
        });
    });
}

criterion_group!(benches, switch_bench);
criterion_main!(benches);
