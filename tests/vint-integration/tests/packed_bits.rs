//! Packed-array and bitstream end-to-end behavior.

use vint_pack::{bitstream, PackedArray};

#[test]
fn twelve_bit_scenario() {
    // Zeroed store holding a dozen 12-bit elements.
    let mut array: PackedArray<u64> = PackedArray::zeroed(12, 12).unwrap();
    array.set(0, 0xABC).unwrap();
    array.set(1, 0x123).unwrap();
    array.set(2, 0xFFF).unwrap();

    assert_eq!(array.get(0).unwrap(), 0xABC);
    assert_eq!(array.get(1).unwrap(), 0x123);
    assert_eq!(array.get(2).unwrap(), 0xFFF);
    assert_eq!(array.get(3).unwrap(), 0);
}

#[test]
fn same_layout_across_slot_widths() {
    // The logical element sequence is identical regardless of slot word.
    let values: Vec<u64> = (0..64).map(|i| (i * 37) % 1024).collect();

    let mut a8: PackedArray<u8> = PackedArray::new(10).unwrap();
    let mut a16: PackedArray<u16> = PackedArray::new(10).unwrap();
    let mut a32: PackedArray<u32> = PackedArray::new(10).unwrap();
    let mut a64: PackedArray<u64> = PackedArray::new(10).unwrap();
    for &v in &values {
        a8.append(v).unwrap();
        a16.append(v).unwrap();
        a32.append(v).unwrap();
        a64.append(v).unwrap();
    }
    for (i, &v) in values.iter().enumerate() {
        assert_eq!(a8.get(i).unwrap(), v);
        assert_eq!(a16.get(i).unwrap(), v);
        assert_eq!(a32.get(i).unwrap(), v);
        assert_eq!(a64.get(i).unwrap(), v);
    }
}

#[test]
fn straddling_cells_leave_neighbors_intact() {
    // 13-bit cells over u16 slots straddle on most offsets.
    let mut slots = [0u16; 8];
    let cells = [(0usize, 0x1AAA_u64), (13, 0x0555), (26, 0x1FFF), (39, 0x0001)];
    for &(offset, value) in &cells {
        bitstream::set(&mut slots, offset, 13, value).unwrap();
    }
    for &(offset, value) in &cells {
        assert_eq!(bitstream::get(&slots, offset, 13).unwrap(), value);
    }

    // Rewriting one cell disturbs no other.
    bitstream::set(&mut slots, 13, 13, 0x0123).unwrap();
    assert_eq!(bitstream::get(&slots, 0, 13).unwrap(), 0x1AAA);
    assert_eq!(bitstream::get(&slots, 13, 13).unwrap(), 0x0123);
    assert_eq!(bitstream::get(&slots, 26, 13).unwrap(), 0x1FFF);
    assert_eq!(bitstream::get(&slots, 39, 13).unwrap(), 0x0001);
}

#[test]
fn sorted_insertion_and_search() {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    let mut rng = StdRng::seed_from_u64(7);
    let mut array: PackedArray<u64> = PackedArray::new(20).unwrap();
    let mut shadow: Vec<u64> = Vec::new();

    for _ in 0..300 {
        let v = rng.gen_range(0..1 << 20);
        array.insert_sorted(v).unwrap();
        let at = shadow.partition_point(|&x| x < v);
        shadow.insert(at, v);
    }

    let collected: Vec<u64> = array.iter().collect();
    assert_eq!(collected, shadow);

    for probe in [0u64, 1, 1 << 10, (1 << 20) - 1] {
        assert_eq!(
            array.binary_search(probe),
            shadow.partition_point(|&x| x < probe),
            "probe {probe}"
        );
    }
}

#[test]
fn signed_cells_through_packed_store() {
    let mut slots = [0u32; 4];
    for (i, v) in [-5i64, 5, -1, 0, 127, -128].iter().enumerate() {
        let raw = bitstream::prepare_signed(*v, 8).unwrap();
        bitstream::set(&mut slots, i * 8, 8, raw).unwrap();
    }
    for (i, v) in [-5i64, 5, -1, 0, 127, -128].iter().enumerate() {
        let raw = bitstream::get(&slots, i * 8, 8).unwrap();
        assert_eq!(bitstream::restore_signed(raw, 8).unwrap(), *v);
    }
}
