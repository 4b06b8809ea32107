use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ecdsa::{Ecdsa, PrivateKey, Signature, supported_curves};
use rand::SeedableRng;
use rand::rngs::StdRng;

const MESSAGE: &[u8] = b"This is a benchmark message";

fn bench_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdsa_sign");
    let mut rng = StdRng::seed_from_u64(42);
    let engine = Ecdsa::new();

    for curve in supported_curves() {
        let sk = PrivateKey::random(curve, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(curve.name()), &sk, |bencher, sk| {
            bencher.iter(|| {
                let sig = engine.sign(black_box(MESSAGE), sk, &mut rng).expect("sign");
                black_box(sig);
            })
        });
    }
    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdsa_verify");
    let mut rng = StdRng::seed_from_u64(42);
    let engine = Ecdsa::new();

    for curve in supported_curves() {
        let sk = PrivateKey::random(curve, &mut rng);
        let pk = sk.public_key();
        let sig = engine.sign(MESSAGE, &sk, &mut rng).expect("sign");

        group.bench_function(BenchmarkId::from_parameter(curve.name()), |bencher| {
            bencher.iter(|| {
                let ok = engine
                    .verify(black_box(MESSAGE), black_box(&sig), &pk)
                    .expect("verify");
                black_box(ok);
            })
        });
    }
    group.finish();
}

fn bench_signature_der(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = PrivateKey::random(supported_curves()[0], &mut rng);
    let der = sk.sign(&mut rng, MESSAGE).expect("sign").to_der().expect("der");

    c.bench_function("signature_from_der", |bencher| {
        bencher.iter(|| black_box(Signature::from_der(black_box(&der)).expect("decode")))
    });
}

criterion_group!(benches, bench_sign, bench_verify, bench_signature_der);
criterion_main!(benches);
