#![no_main]
use libfuzzer_sys::fuzz_target;
use svbyte::quad::{self, MAX_DATA_LEN};

fuzz_target!(|data: &[u8]| {
    if data.len() < 17 {
        return;
    }

    // First byte selects diff mode, next sixteen form the quad.
    let diff = data[0] & 1 != 0;
    let q: [u32; 4] = std::array::from_fn(|i| {
        let b = &data[1 + 4 * i..5 + 4 * i];
        u32::from_le_bytes([b[0], b[1], b[2], b[3]])
    });

    let mut buf = [0u8; MAX_DATA_LEN];
    let (control, n) = quad::encode(q, diff, &mut buf).unwrap();
    let (back, consumed) = quad::decode(control, &buf[..n], diff).unwrap();
    assert_eq!(back, q);
    assert_eq!(consumed, n);
});
