//! Benchmarks for rune encoding, decoding and counting.

use utf8_runes::{decode, encode, iterate, rune_count};

fn main() {
    divan::main();
}

const MIXED: &str = "Hello, 世界! naïve café プログラム 🎉 and some plain ASCII to finish";

#[divan::bench]
fn bench_encode_ascii(bencher: divan::Bencher) {
    bencher.bench_local(|| divan::black_box(encode(divan::black_box(0x41))));
}

#[divan::bench]
fn bench_encode_four_bytes(bencher: divan::Bencher) {
    bencher.bench_local(|| divan::black_box(encode(divan::black_box(0x1F600))));
}

#[divan::bench]
fn bench_decode_three_bytes(bencher: divan::Bencher) {
    let buf = "世".as_bytes();
    bencher.bench_local(|| divan::black_box(decode(divan::black_box(buf), 0)));
}

#[divan::bench]
fn bench_rune_count_mixed(bencher: divan::Bencher) {
    let buf = MIXED.repeat(64);
    bencher.bench_local(|| divan::black_box(rune_count(divan::black_box(buf.as_bytes()))));
}

#[divan::bench]
fn bench_rune_count_malformed(bencher: divan::Bencher) {
    let mut buf = [0u8; 4096];
    // Fill with varied bytes so most sequences are invalid
    for (i, b) in buf.iter_mut().enumerate() {
        *b = ((i * 7 + 13) % 256) as u8;
    }
    bencher.bench_local(|| divan::black_box(rune_count(divan::black_box(&buf))));
}

#[divan::bench]
fn bench_iterate_mixed(bencher: divan::Bencher) {
    let buf = MIXED.repeat(64);
    bencher.bench_local(|| {
        iterate(divan::black_box(buf.as_bytes()))
            .map(|(_, r)| r)
            .fold(0u32, u32::wrapping_add)
    });
}
