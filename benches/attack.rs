use fixed_nonce_ctr::{
    aes128, break_many_time_pad, ctr_encrypt, random_bytes_with_seed, score_english_by_frequency,
};

use criterion::{criterion_group, criterion_main, Criterion};

const TEXT: &[u8] = b"there was bread on the table and milk in the jug, \
    she had walked the long road home from the fair with a basket of apples";

pub fn scoring_text_as_english_by_letter_frequency(c: &mut Criterion) {
    c.bench_function("score_english_by_frequency", |b| {
        b.iter(|| score_english_by_frequency(TEXT))
    });
}

pub fn breaking_fixed_nonce_ctr(c: &mut Criterion) {
    let cipher = aes128(&random_bytes_with_seed::<16>(101));
    let ciphertexts: Vec<Vec<u8>> = TEXT
        .chunks(24)
        .cycle()
        .take(40)
        .map(|plaintext| ctr_encrypt(&cipher, &[0; 16], plaintext).unwrap())
        .collect();
    c.bench_function("break_many_time_pad", |b| {
        b.iter(|| break_many_time_pad(&ciphertexts))
    });
}

criterion_group!(
    benches,
    scoring_text_as_english_by_letter_frequency,
    breaking_fixed_nonce_ctr,
);
criterion_main!(benches);
