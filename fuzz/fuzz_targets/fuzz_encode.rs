#![no_main]

use libfuzzer_sys::fuzz_target;
use utf8_runes::{REPLACEMENT_CHAR, decode, encode, from_rune_sequence, is_valid_rune, to_rune_sequence};

fuzz_target!(|data: &[u8]| {
    let runes: Vec<u32> = data
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]) % 0x11_4000)
        .collect();

    for &r in &runes {
        let enc = encode(r);
        let expected = if is_valid_rune(r) { r } else { REPLACEMENT_CHAR };
        assert_eq!(decode(&enc, 0), (expected, enc.len()));
    }

    // Encoding a decoded buffer reproduces it
    let bytes = from_rune_sequence(runes.iter().copied());
    assert_eq!(from_rune_sequence(to_rune_sequence(&bytes)), bytes);
});
