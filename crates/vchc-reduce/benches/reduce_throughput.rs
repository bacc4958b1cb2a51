use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vchc_core::rng::RngHandle;
use vchc_graph::gen_random_source_graph;
use vchc_reduce::{ReductionSession, Reducer};

fn reduce_bench(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(11);
    let source = gen_random_source_graph(120, 360, 12, &mut rng).unwrap();
    let reducer = Reducer::default();

    c.bench_function("reduce_120_vertices", |b| {
        b.iter(|| black_box(reducer.reduce(&source).unwrap()));
    });

    let mut session = ReductionSession::new(source);
    c.bench_function("session_reduce_and_validate", |b| {
        b.iter(|| {
            session.perform_reduction().unwrap();
            black_box(session.validate().unwrap());
        });
    });
}

criterion_group!(benches, reduce_bench);
criterion_main!(benches);
