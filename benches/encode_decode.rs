use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};

/// Random bytes over a small alphabet with a skewed distribution,
/// so the codes have varying lengths.
fn skewed_data(rng: &mut rand::rngs::SmallRng, len: usize) -> Vec<u8> {
    (0..len)
        .map(|_| {
            let a: u8 = rng.gen_range(0..64);
            let b: u8 = rng.gen_range(0..64);
            a.min(b)
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(0xDEADBEEF);

    let mut group = c.benchmark_group("huffpack");
    for size in [4 * 1024, 256 * 1024, 1024 * 1024] {
        let data = skewed_data(&mut rng, size);
        let encoded = huffpack::encode(&data);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("encode", size), &data, |b, data| {
            b.iter(|| huffpack::encode(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            b.iter(|| huffpack::decode(black_box(encoded)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
