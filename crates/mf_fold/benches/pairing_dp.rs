use std::hint::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use mf_fold::Base;
use mf_fold::NucleotideVec;
use mf_fold::PairingDP;
use mf_fold::WeightedPolicy;

fn random_sequence(len: usize, seed: u64) -> NucleotideVec {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| Base::ALL[rng.random_range(0..Base::ALL.len())])
        .collect::<Vec<_>>()
        .into()
}

pub fn pairing_dp(c: &mut Criterion) {
    let mut group = c.benchmark_group("PairingDP");
    let model = WeightedPolicy::default();

    for len in [100, 250, 500] {
        let sequence = random_sequence(len, 42);

        group.bench_function(format!("serial fill, length {len}"), |b| {
            b.iter(|| PairingDP::fill(black_box(&sequence), &model).unwrap());
        });

        group.bench_function(format!("parallel fill, length {len}"), |b| {
            b.iter(|| PairingDP::fill_parallel(black_box(&sequence), &model).unwrap());
        });

        let dp = PairingDP::fill(&sequence, &model).unwrap();
        group.bench_function(format!("traceback, length {len}"), |b| {
            b.iter(|| black_box(&dp).traceback().unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, pairing_dp);
criterion_main!(benches);
