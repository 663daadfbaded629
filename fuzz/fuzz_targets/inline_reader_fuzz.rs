#![no_main]
use libfuzzer_sys::fuzz_target;
use svbyte::quad::{self, InlineReader};

fuzz_target!(|data: &[u8]| {
    // The reader and the buffer decoder must agree on every complete quad.
    let mut buffered = Vec::new();
    let buffered_ok = quad::decode_inline_all(data, true, &mut buffered).is_ok();

    let mut streamed = Vec::new();
    let mut streamed_ok = true;
    for item in InlineReader::new(data, true) {
        match item {
            Ok(q) => streamed.push(q),
            Err(_) => streamed_ok = false,
        }
    }

    assert_eq!(buffered, streamed);
    assert_eq!(buffered_ok, streamed_ok);
});
