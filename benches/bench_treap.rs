use criterion::{black_box, criterion_group, criterion_main, Criterion};
use merge_treap::{Mergeable, Treap};
use rand::Rng;
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 100;

#[derive(Eq, Ord, PartialEq, PartialOrd)]
struct Key(u32);

impl Mergeable for Key {
    fn merge(&mut self, _other: Key) {}
}

fn bench_btreemap_insert(c: &mut Criterion) {
    c.bench_function("bench btreemap insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut map = BTreeMap::new();
            for _ in 0..NUM_OF_OPERATIONS {
                *map.entry(rng.next_u32()).or_insert(0) += 1;
            }
        })
    });
}

fn bench_btreemap_neighbors(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = BTreeMap::new();
    let mut probes = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        map.insert(rng.next_u32(), 1);
        probes.push(rng.next_u32());
    }

    c.bench_function("bench btreemap neighbors", move |b| {
        b.iter(|| {
            for probe in &probes {
                black_box(map.range(..=probe).next_back());
                black_box(map.range(probe..).next());
            }
        })
    });
}

fn bench_treap_insert(c: &mut Criterion) {
    c.bench_function("bench treap insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut treap = Treap::new();
            for _ in 0..NUM_OF_OPERATIONS {
                treap.insert(Key(rng.next_u32()));
            }
        })
    });
}

fn bench_treap_neighbors(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut treap = Treap::new();
    let mut probes = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        treap.insert(Key(rng.next_u32()));
        probes.push(Key(rng.next_u32()));
    }

    c.bench_function("bench treap neighbors", move |b| {
        b.iter(|| {
            for probe in &probes {
                black_box(treap.neighbors(probe));
            }
        })
    });
}

fn bench_treap_successor(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut treap = Treap::new();
    for _ in 0..NUM_OF_OPERATIONS {
        treap.insert(Key(rng.next_u32()));
    }

    c.bench_function("bench treap successor", move |b| {
        b.iter(|| {
            let mut curr = treap.min();
            while let Some(node) = curr {
                curr = black_box(node.successor());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_btreemap_insert,
    bench_btreemap_neighbors,
    bench_treap_insert,
    bench_treap_neighbors,
    bench_treap_successor,
);
criterion_main!(benches);
