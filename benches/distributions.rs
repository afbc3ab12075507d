use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sortbench::{Distribution, SIZE_TO};

fn benchmark_generation(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);
    let mut data = vec![0; SIZE_TO];
    for distribution in Distribution::ALL {
        c.bench_function(&format!("generate {} 100k", distribution), |b| {
            b.iter(|| {
                distribution.generate(&mut rng, black_box(&mut data));
            })
        });
    }
}

criterion_group!(benches, benchmark_generation);
criterion_main!(benches);
