use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use birdolcrypt::{utils, CryptoProvider, KeyVariant};

const MESSAGE: &str = "The quick brown fox jumps over the lazy dog";

fn key_generation_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_generation");
    group.sample_size(10);

    for variant in [KeyVariant::Rsa1024, KeyVariant::Rsa2048, KeyVariant::Ecdsa].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(variant.name()),
            variant,
            |b, &variant| b.iter(|| CryptoProvider::generate(variant)),
        );
    }

    group.finish();
}

fn signature_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("signature");

    for variant in KeyVariant::SIGNING_VARIANTS.iter() {
        let provider = CryptoProvider::generate(*variant).unwrap();
        let signature = provider.sign_hex(MESSAGE).unwrap();

        group.bench_with_input(BenchmarkId::new("sign", variant.name()), variant, |b, _| {
            b.iter(|| provider.sign(MESSAGE))
        });
        group.bench_with_input(BenchmarkId::new("verify", variant.name()), variant, |b, _| {
            b.iter(|| provider.verify(MESSAGE, &signature))
        });
    }

    group.finish();
}

fn codec_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let rsa = CryptoProvider::generate(KeyVariant::Rsa2048).unwrap();
    let rsa_private = rsa.private_file_bytes().unwrap();
    group.bench_function("rsa_2048_import_private", |b| {
        b.iter(|| CryptoProvider::import_private(KeyVariant::Rsa2048, &rsa_private))
    });

    let ecdsa = CryptoProvider::generate(KeyVariant::Ecdsa).unwrap();
    let ecdsa_private = ecdsa.private_file_bytes().unwrap();
    group.bench_function("ecdsa_import_private", |b| {
        b.iter(|| CryptoProvider::import_private(KeyVariant::Ecdsa, &ecdsa_private))
    });

    let data = vec![0xa5u8; 512];
    let hex = utils::to_hex(&data);
    group.bench_function("to_hex_512", |b| b.iter(|| utils::to_hex(&data)));
    group.bench_function("from_hex_512", |b| b.iter(|| utils::from_hex(&hex)));

    group.finish();
}

criterion_group!(
    benches,
    key_generation_benchmarks,
    signature_benchmarks,
    codec_benchmarks
);
criterion_main!(benches);
