//! Frame-of-Reference end-to-end: clustered sequences compress to
//! single-byte offsets and support O(1) random access.

use vint_codec::{for_get_at, get_for, put_for};

#[test]
fn clustered_hundred_values() {
    let values: Vec<u64> = (0..100).map(|i| 1_000_000 + i).collect();
    let mut buf = [0u8; 256];

    let (written, meta) = put_for(&mut buf, &values).unwrap();
    assert_eq!(meta.offset_width.bytes(), 1);
    assert!(written <= 120, "encoded {written} bytes");

    assert_eq!(for_get_at(&buf[..written], 42).unwrap(), 1_000_042);

    let (decoded, consumed) = get_for(&buf[..written]).unwrap();
    assert_eq!(consumed, written);
    assert_eq!(decoded, values);
}

#[test]
fn random_access_agrees_with_full_decode() {
    let values: Vec<u64> = (0..257).map(|i| 3_000_000_000 + i * 7).collect();
    let mut buf = vec![0u8; 4096];
    let (written, _) = put_for(&mut buf, &values).unwrap();
    let (decoded, _) = get_for(&buf[..written]).unwrap();
    for (i, &v) in decoded.iter().enumerate() {
        assert_eq!(for_get_at(&buf[..written], i).unwrap(), v, "index {i}");
    }
}

#[test]
fn all_equal_input_gives_zero_offsets() {
    let values = [42u64; 50];
    let mut buf = [0u8; 128];
    let (written, meta) = put_for(&mut buf, &values).unwrap();
    assert_eq!(meta.offset_width.bytes(), 1);
    assert_eq!(meta.range, 0);
    let payload = &buf[written - 50..written];
    assert!(payload.iter().all(|&b| b == 0));

    let (decoded, _) = get_for(&buf[..written]).unwrap();
    assert_eq!(decoded, values);
}
