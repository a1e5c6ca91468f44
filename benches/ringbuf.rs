#[cfg(feature = "benchmark")]
criterion::criterion_group!(
    benches,
    benches::criterion_bench_push_overwrite,
    benches::criterion_bench_push_pop,
    benches::criterion_bench_raw_push_pop
);
#[cfg(feature = "benchmark")]
criterion::criterion_main!(benches);

#[cfg(feature = "benchmark")]
pub mod benches {
    use std::hint::black_box;

    use criterion::Criterion;
    use slot_ringbuf::RawRingbuf;
    use slot_ringbuf::Ringbuf;
    use slot_ringbuf::Status;

    const CAPACITY: usize = 1024;

    fn bench_push_overwrite(ringbuf: &mut Ringbuf<u64, Vec<u64>>) {
        for i in 0..(CAPACITY as u64 * 4) {
            let _ = black_box(ringbuf.push(i));
        }
    }

    fn bench_push_pop(ringbuf: &mut Ringbuf<u64, Vec<u64>>) {
        for i in 0..CAPACITY as u64 {
            let _ = ringbuf.push(i);
        }
        while let Some(v) = ringbuf.pop() {
            black_box(v);
        }
    }

    fn bench_raw_push_pop(ringbuf: &mut RawRingbuf<'_>) {
        let mut out = [0u8; 32];
        for i in 0..CAPACITY {
            let _ = ringbuf.push(&[i as u8; 32]);
        }
        while let Ok(Status::Ok) = ringbuf.pop(&mut out) {
            black_box(&out);
        }
    }

    pub fn criterion_bench_push_overwrite(c: &mut Criterion) {
        let mut ringbuf = Ringbuf::new(vec![0u64; CAPACITY]).unwrap();
        c.bench_function("push_overwrite", |b| {
            b.iter(|| bench_push_overwrite(&mut ringbuf))
        });
    }

    pub fn criterion_bench_push_pop(c: &mut Criterion) {
        let mut ringbuf = Ringbuf::new(vec![0u64; CAPACITY]).unwrap();
        c.bench_function("push_pop", |b| {
            b.iter(|| bench_push_pop(&mut ringbuf))
        });
    }

    pub fn criterion_bench_raw_push_pop(c: &mut Criterion) {
        let mut storage = vec![0u8; CAPACITY * 32];
        let mut ringbuf = RawRingbuf::new(&mut storage, 32).unwrap();
        c.bench_function("raw_push_pop", |b| {
            b.iter(|| bench_raw_push_pop(&mut ringbuf))
        });
    }
}

#[cfg(not(feature = "benchmark"))]
fn main() {
    // Benchmarks are disabled. Enable the 'benchmark' feature to run benchmarks.
}
