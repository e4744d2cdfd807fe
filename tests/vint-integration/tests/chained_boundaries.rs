//! Bit-exact chained-codec vectors at the 7-bit group boundaries.

use vint_codec::{chained_len, get_chained, put_chained};

fn encode(v: u64) -> Vec<u8> {
    let mut buf = [0u8; 9];
    let n = put_chained(&mut buf, v).unwrap();
    buf[..n].to_vec()
}

#[test]
fn group_boundary_vectors() {
    assert_eq!(encode(127), [0x7F]);
    assert_eq!(encode(128), [0x81, 0x00]);
    assert_eq!(encode(16383), [0xFF, 0x7F]);
    assert_eq!(encode(16384), [0x81, 0x80, 0x00]);
}

#[test]
fn full_range_round_trip() {
    for shift in 0..64u32 {
        for &v in &[1u64 << shift, (1u64 << shift) - 1, (1u64 << shift) | 1] {
            let bytes = encode(v);
            assert_eq!(bytes.len(), chained_len(v));
            assert_eq!(get_chained(&bytes).unwrap(), (v, bytes.len()), "value {v:#x}");
        }
    }
    assert_eq!(get_chained(&encode(u64::MAX)).unwrap(), (u64::MAX, 9));
}

#[test]
fn truncated_encodings_report_short_input() {
    for &v in &[128u64, 16384, 1 << 50, u64::MAX] {
        let bytes = encode(v);
        for cut in 0..bytes.len() {
            assert!(
                get_chained(&bytes[..cut]).is_err(),
                "value {v} truncated to {cut} bytes"
            );
        }
    }
}
