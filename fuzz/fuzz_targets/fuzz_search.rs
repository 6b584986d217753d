#![no_main]

use libfuzzer_sys::fuzz_target;
use utf8_runes::{contains, find, has_prefix, has_suffix};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // Split data into haystack and needle
    let mid = data[0] as usize % data.len();
    let hay = &data[..mid];
    let needle = &data[mid..];

    let naive = needle.is_empty() || hay.windows(needle.len()).any(|w| w == needle);
    assert_eq!(contains(hay, needle), naive);
    if let Some(i) = find(hay, needle) {
        assert!(has_prefix(&hay[i..], needle));
    }

    for k in 0..=hay.len() {
        assert!(has_prefix(hay, &hay[..k]));
        assert!(has_suffix(hay, &hay[k..]));
    }
});
