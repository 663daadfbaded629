#![no_main]
use libfuzzer_sys::fuzz_target;
use svbyte::quad;

fuzz_target!(|data: &[u8]| {
    // Checked decoding must never panic on arbitrary input, only report
    // insufficiency.
    let Some((&control, rest)) = data.split_first() else {
        return;
    };
    for diff in [false, true] {
        let buffered = quad::decode(control, rest, diff);
        let mut reader = rest;
        let streamed = quad::decode_from(control, &mut reader, diff);
        match (buffered, streamed) {
            (Ok((a, n)), Ok(b)) => {
                assert_eq!(a, b);
                assert_eq!(quad::decoder::decode_reference(control, rest, diff), Some(a));
                assert_eq!(n, quad::data_len(control));
            }
            (Err(a), Err(_)) => {
                assert!(a.is_insufficient());
                assert_eq!(quad::decoder::decode_reference(control, rest, diff), None);
            }
            (a, b) => panic!("decode paths disagree: {a:?} vs {b:?}"),
        }
    }

    let mut out = Vec::new();
    let _ = quad::decode_inline_all(data, false, &mut out);
});
