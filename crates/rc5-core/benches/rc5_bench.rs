use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lehmer_gen::{LehmerGenerator, LehmerParams};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use rc5_core::{encrypt_block, expand_key, Rc5Cipher};

fn bench_block(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let mut key = [0u8; 16];
    rng.fill_bytes(&mut key);

    let mut group = c.benchmark_group("block");
    group.bench_function("expand_key_32_12_16", |b| {
        b.iter(|| expand_key::<u32>(black_box(&key), 12));
    });

    let t16 = expand_key::<u16>(&key, 12);
    let t32 = expand_key::<u32>(&key, 12);
    let t64 = expand_key::<u64>(&key, 12);
    group.bench_function("encrypt_block_16", |b| {
        let mut block = [0u8; 4];
        b.iter(|| encrypt_block(black_box(&mut block), &t16));
    });
    group.bench_function("encrypt_block_32", |b| {
        let mut block = [0u8; 8];
        b.iter(|| encrypt_block(black_box(&mut block), &t32));
    });
    group.bench_function("encrypt_block_64", |b| {
        let mut block = [0u8; 16];
        b.iter(|| encrypt_block(black_box(&mut block), &t64));
    });
    group.finish();
}

fn bench_message(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([4u8; 32]);
    let mut data = vec![0u8; 16 * 1024];
    rng.fill_bytes(&mut data);
    let key = rc5_core::derive_key(b"bench", 16);

    let mut group = c.benchmark_group("message_16k");
    group.sample_size(20);
    for bits in [16, 32, 64] {
        let cipher = Rc5Cipher::with_params(bits, 12, 16).expect("valid parameters");
        let encoded = cipher.encode(&data, &key);
        group.bench_function(format!("encode_{bits}"), |b| {
            b.iter(|| cipher.encode(black_box(&data), &key));
        });
        group.bench_function(format!("decode_{bits}"), |b| {
            b.iter(|| cipher.decode(black_box(&encoded), &key));
        });
    }
    group.bench_function("md5", |b| {
        b.iter(|| md5_core::digest(black_box(&data)));
    });
    group.finish();
}

fn bench_lehmer(c: &mut Criterion) {
    let gen = LehmerGenerator::new(LehmerParams {
        a: 48271,
        c: 0,
        m: i32::MAX as u64,
        x0: 1,
        count: 100_000,
    })
    .expect("non-zero modulus");
    c.bench_function("lehmer_generate_100k", |b| b.iter(|| gen.generate()));
}

criterion_group!(benches, bench_block, bench_message, bench_lehmer);
criterion_main!(benches);
