use svbyte::quad::{self, MAX_DATA_LEN, QuadError};

#[derive(Debug)]
struct Vector {
    name: &'static str,
    values: [u32; 4],
    diff: bool,
    control: u8,
    data: &'static [u8],
}

// Figure 3 of the Stream VByte paper plus boundary quads.
const VECTORS: &[Vector] = &[
    Vector {
        name: "paper_mixed_widths",
        values: [1024, 12, 10, 1_073_741_824],
        diff: false,
        control: 0x43,
        data: &[0x04, 0x00, 0x0c, 0x0a, 0x40, 0x00, 0x00, 0x00],
    },
    Vector {
        name: "paper_small",
        values: [1, 2, 3, 1024],
        diff: false,
        control: 0x01,
        data: &[0x01, 0x02, 0x03, 0x04, 0x00],
    },
    Vector {
        name: "paper_mixed_widths_diff",
        values: [1024, 1036, 1046, 1_073_742_870],
        diff: true,
        control: 0x43,
        data: &[0x04, 0x00, 0x0c, 0x0a, 0x40, 0x00, 0x00, 0x00],
    },
    Vector {
        name: "paper_small_diff",
        values: [1, 3, 6, 1030],
        diff: true,
        control: 0x01,
        data: &[0x01, 0x02, 0x03, 0x04, 0x00],
    },
    Vector {
        name: "all_zero",
        values: [0, 0, 0, 0],
        diff: false,
        control: 0x00,
        data: &[0, 0, 0, 0],
    },
    Vector {
        name: "smallest_full_width_diff",
        values: [1 << 24, 2 << 24, 3 << 24, 4 << 24],
        diff: true,
        control: 0xff,
        data: &[1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0],
    },
    Vector {
        name: "width_boundaries",
        values: [255, 256, 65_536, 16_777_216],
        diff: false,
        control: 0x1b, // 00 | 01 | 10 | 11
        data: &[0xff, 0x01, 0x00, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00],
    },
    Vector {
        name: "max_values",
        values: [u32::MAX; 4],
        diff: false,
        control: 0xff,
        data: &[0xff; 16],
    },
];

#[test]
fn encode_matches_vectors() {
    for v in VECTORS {
        let mut buf = [0u8; MAX_DATA_LEN];
        let (control, n) = quad::encode(v.values, v.diff, &mut buf).unwrap();
        assert_eq!(control, v.control, "vector {}", v.name);
        assert_eq!(&buf[..n], v.data, "vector {}", v.name);
    }
}

#[test]
fn decode_matches_vectors() {
    for v in VECTORS {
        let (values, n) = quad::decode(v.control, v.data, v.diff).unwrap();
        assert_eq!(values, v.values, "vector {}", v.name);
        assert_eq!(n, v.data.len(), "vector {}", v.name);

        let (values, n) = quad::decode_unchecked(v.control, v.data, v.diff);
        assert_eq!(values, v.values, "vector {}", v.name);
        assert_eq!(n, v.data.len(), "vector {}", v.name);

        let mut reader = v.data;
        let values = quad::decode_from(v.control, &mut reader, v.diff).unwrap();
        assert_eq!(values, v.values, "vector {}", v.name);
        assert!(reader.is_empty(), "vector {}", v.name);
    }
}

#[test]
fn diff_vector_decodes_to_deltas_without_diff() {
    // The bitstream carries no diff flag: decoding the diff vector plainly
    // yields the stored deltas.
    let data = [0x04, 0x00, 0x0c, 0x0a, 0x40, 0x00, 0x00, 0x00];
    let (values, _) = quad::decode(0x43, &data, false).unwrap();
    assert_eq!(values, [1024, 12, 10, 1_073_741_824]);
}

#[test]
fn every_truncation_is_insufficient() {
    for v in VECTORS {
        for cut in 0..v.data.len() {
            match quad::decode(v.control, &v.data[..cut], v.diff) {
                Err(QuadError::Insufficient { needed, available }) => {
                    assert_eq!(needed, v.data.len(), "vector {}", v.name);
                    assert_eq!(available, cut, "vector {}", v.name);
                }
                other => panic!("vector {} cut {cut}: {other:?}", v.name),
            }
        }
    }
}
