//! Benchmarks for prefix, suffix and substring search.

use utf8_runes::{contains, contains_rune, has_prefix, has_suffix};

fn main() {
    divan::main();
}

const TEXT: &str = "UTF-8 is a prefix code, so searching for a rune is just searching for its bytes. 世界";

#[divan::bench]
fn bench_has_prefix(bencher: divan::Bencher) {
    let s = TEXT.as_bytes();
    bencher.bench_local(|| {
        divan::black_box(has_prefix(divan::black_box(s), divan::black_box(b"UTF-8 is")))
    });
}

#[divan::bench]
fn bench_has_suffix(bencher: divan::Bencher) {
    let s = TEXT.as_bytes();
    let suffix = "世界".as_bytes();
    bencher.bench_local(|| {
        divan::black_box(has_suffix(divan::black_box(s), divan::black_box(suffix)))
    });
}

#[divan::bench]
fn bench_contains_hit(bencher: divan::Bencher) {
    let s = TEXT.repeat(32);
    bencher.bench_local(|| {
        divan::black_box(contains(
            divan::black_box(s.as_bytes()),
            divan::black_box("bytes. 世".as_bytes()),
        ))
    });
}

#[divan::bench]
fn bench_contains_miss(bencher: divan::Bencher) {
    let s = TEXT.repeat(32);
    bencher.bench_local(|| {
        divan::black_box(contains(
            divan::black_box(s.as_bytes()),
            divan::black_box(b"not present"),
        ))
    });
}

#[divan::bench]
fn bench_contains_rune(bencher: divan::Bencher) {
    let s = TEXT.repeat(32);
    bencher.bench_local(|| {
        divan::black_box(contains_rune(divan::black_box(s.as_bytes()), 0x754C))
    });
}
