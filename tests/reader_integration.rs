use std::fs::File;
use std::io::{BufReader, ErrorKind, Write};

use svbyte::quad::{self, InlineReader, QuadError};
use tempfile::tempdir;

fn sample(n: u32) -> Vec<[u32; 4]> {
    (0..n)
        .map(|i| [i, i * 3, i.wrapping_mul(40_503), i << 20])
        .map(|mut q| {
            q.sort_unstable();
            q
        })
        .collect()
}

#[test]
fn inline_stream_through_a_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quads.svb");

    let quads = sample(2_000);
    let mut bytes = Vec::new();
    quad::encode_inline_all(&quads, true, &mut bytes);
    File::create(&path).unwrap().write_all(&bytes).unwrap();

    let reader = InlineReader::new(BufReader::new(File::open(&path).unwrap()), true);
    let decoded: Vec<[u32; 4]> = reader.collect::<Result<_, _>>().unwrap();
    assert_eq!(decoded, quads);
}

#[test]
fn truncated_file_reports_eof_after_complete_quads() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("short.svb");

    let quads = sample(10);
    let mut bytes = Vec::new();
    quad::encode_inline_all(&quads, false, &mut bytes);
    bytes.pop();
    std::fs::write(&path, &bytes).unwrap();

    let mut reader = InlineReader::new(File::open(&path).unwrap(), false);
    let mut ok = Vec::new();
    let mut err = None;
    for item in reader.by_ref() {
        match item {
            Ok(q) => ok.push(q),
            Err(e) => err = Some(e),
        }
    }
    assert_eq!(ok, quads[..9]);
    assert_eq!(reader.quads_read(), 9);
    match err {
        Some(QuadError::Io(e)) => assert_eq!(e.kind(), ErrorKind::UnexpectedEof),
        other => panic!("expected EOF, got {other:?}"),
    }
}

#[test]
fn empty_file_yields_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.svb");
    std::fs::write(&path, b"").unwrap();

    let mut reader = InlineReader::new(File::open(&path).unwrap(), false);
    assert!(reader.next().is_none());
}
