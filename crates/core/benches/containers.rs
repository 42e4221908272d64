use std::collections::{BTreeSet, HashSet, LinkedList};

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ctbench_core::{
    Dataset, InsertTarget, Position, time_insertion, time_linear_lookup, time_native_lookup,
};

const SIZE: usize = 10_000;

fn dataset() -> Option<Dataset> {
    Dataset::shuffled(SIZE, Some(0x5EED)).ok()
}

fn fill<C: InsertTarget + Default>(dataset: &Dataset, position: Position) -> C {
    let mut target = C::default();
    black_box(time_insertion(dataset, &mut target, position));
    target
}

pub fn benchmark_insert(c: &mut Criterion) {
    let Some(dataset) = dataset() else {
        return;
    };
    let mut group = c.benchmark_group("insert");

    for (name, position) in [("back", Position::Back), ("front", Position::Front)] {
        group.bench_with_input(BenchmarkId::new("vec", name), &position, |b, &p| {
            b.iter(|| black_box(fill::<Vec<i32>>(&dataset, p)));
        });
        group.bench_with_input(BenchmarkId::new("linked_list", name), &position, |b, &p| {
            b.iter(|| black_box(fill::<LinkedList<i32>>(&dataset, p)));
        });
        group.bench_with_input(BenchmarkId::new("btree_set", name), &position, |b, &p| {
            b.iter(|| black_box(fill::<BTreeSet<i32>>(&dataset, p)));
        });
        group.bench_with_input(BenchmarkId::new("hash_set", name), &position, |b, &p| {
            b.iter(|| black_box(fill::<HashSet<i32>>(&dataset, p)));
        });
    }

    group.finish();
}

pub fn benchmark_lookup(c: &mut Criterion) {
    let Some(dataset) = dataset() else {
        return;
    };
    let vector: Vec<i32> = fill(&dataset, Position::Front);
    let list: LinkedList<i32> = fill(&dataset, Position::Front);
    let set: BTreeSet<i32> = fill(&dataset, Position::Front);
    let unordered: HashSet<i32> = fill(&dataset, Position::Front);

    let mut group = c.benchmark_group("lookup");
    group.sample_size(10);
    group.bench_function("vec", |b| b.iter(|| black_box(time_linear_lookup(&vector))));
    group.bench_function("linked_list", |b| {
        b.iter(|| black_box(time_linear_lookup(&list)))
    });
    group.bench_function("btree_set", |b| b.iter(|| black_box(time_native_lookup(&set))));
    group.bench_function("hash_set", |b| {
        b.iter(|| black_box(time_native_lookup(&unordered)))
    });
    group.finish();
}

criterion_group!(benches, benchmark_insert, benchmark_lookup);
criterion_main!(benches);
