#![no_main]

use libfuzzer_sys::fuzz_target;
use utf8_runes::{REPLACEMENT_CHAR, decode, is_valid_rune, iterate, rune_count, validate};

fuzz_target!(|data: &[u8]| {
    // Every decode step must advance and yield a scalar value
    let mut offset = 0;
    let mut steps = 0;
    while offset < data.len() {
        let (r, size) = decode(data, offset);
        assert!((1..=4).contains(&size));
        assert!(is_valid_rune(r));
        if r == REPLACEMENT_CHAR && size == 1 {
            assert!(data[offset] >= 0x80);
        }
        offset += size;
        steps += 1;
    }

    assert_eq!(steps, rune_count(data));
    assert_eq!(steps, iterate(data).count());

    // Agree with core on well-formedness
    assert_eq!(validate(data).is_ok(), core::str::from_utf8(data).is_ok());
});
