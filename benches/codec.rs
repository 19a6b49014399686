use cint32::{decode, encode};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::hint::black_box;

fn workload(name: &str, len: usize) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| match name {
            "small" => rng.gen_range(-126..=127),
            "mixed" => match rng.gen_range(0..10) {
                0..=6 => rng.gen_range(-126..=127),
                7 | 8 => rng.gen_range(-32767..=32767),
                _ => rng.gen(),
            },
            _ => rng.gen(),
        })
        .collect()
}

fn bench_codec(c: &mut Criterion) {
    let len = 64 * 1024;
    let mut group = c.benchmark_group("cint32");

    for name in ["small", "mixed", "large"] {
        let values = workload(name, len);
        let bytes = encode(&values);

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("encode", name), &values, |b, v| {
            b.iter(|| encode(black_box(v)))
        });
        group.bench_with_input(BenchmarkId::new("decode", name), &bytes, |b, d| {
            b.iter(|| decode(black_box(d)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
