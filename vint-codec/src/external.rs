//! Externally-tagged fixed-width integer codec.
//!
//! Values are stored as their low 1-8 bytes in little-endian order; the
//! width itself lives out-of-band in an outer header. This is the compact
//! inner codec used by FOR offsets, the Split codec's tail, and the
//! dimension descriptor. The in-memory layout is little-endian on every
//! host: stores go through `to_le_bytes`, so big-endian machines produce
//! byte-identical output.

use vint_types::{ErrorCode, VintError, Width};

/// Smallest width (1..=8 bytes) that can hold `v`.
#[inline]
pub fn width_of_unsigned(v: u64) -> Width {
    let bits = 64 - v.leading_zeros();
    let bytes = bits.div_ceil(8).max(1) as u8;
    Width::from_raw(bytes)
}

/// Smallest width that can hold the signed value `v`.
///
/// # Errors
///
/// `ValueOutOfRange` for negative values; the External format carries
/// unsigned payloads only.
#[inline]
pub fn width_of_signed(v: i64) -> Result<Width, VintError> {
    if v < 0 {
        return Err(VintError::Code(ErrorCode::ValueOutOfRange));
    }
    Ok(width_of_unsigned(v as u64))
}

/// Write the low `width` bytes of `v` into `dst`, little-endian.
///
/// A zero width is a no-op permitted only for `v == 0` (an absent field,
/// e.g. the dimension descriptor's vector form).
///
/// # Errors
///
/// - `InvalidWidth` if `width` is not 0..=8.
/// - `ValueOutOfRange` if `v` does not fit in `width` bytes.
/// - `BufferTooSmall` if `dst` is shorter than `width` bytes.
pub fn put_fixed(dst: &mut [u8], v: u64, width: Width) -> Result<usize, VintError> {
    if !width.is_valid() {
        return Err(VintError::Code(ErrorCode::InvalidWidth));
    }
    let n = width.bytes();
    if n == 0 {
        if v != 0 {
            return Err(VintError::Code(ErrorCode::ValueOutOfRange));
        }
        return Ok(0);
    }
    if n < 8 && v >> (n * 8) != 0 {
        return Err(VintError::Code(ErrorCode::ValueOutOfRange));
    }
    if dst.len() < n {
        return Err(VintError::Code(ErrorCode::BufferTooSmall));
    }
    dst[..n].copy_from_slice(&v.to_le_bytes()[..n]);
    Ok(n)
}

/// Read a `width`-byte little-endian value from `src`.
///
/// Returns `(value, bytes_consumed)`.
///
/// # Errors
///
/// - `InvalidWidth` if `width` is not 0..=8.
/// - `BufferTooSmall` if `src` is shorter than `width` bytes.
pub fn get_fixed(src: &[u8], width: Width) -> Result<(u64, usize), VintError> {
    if !width.is_valid() {
        return Err(VintError::Code(ErrorCode::InvalidWidth));
    }
    let n = width.bytes();
    if src.len() < n {
        return Err(VintError::Code(ErrorCode::BufferTooSmall));
    }
    let mut le = [0u8; 8];
    le[..n].copy_from_slice(&src[..n]);
    Ok((u64::from_le_bytes(le), n))
}

/// Signed store: rejects negative values, otherwise identical to
/// [`put_fixed`].
pub fn put_fixed_signed(dst: &mut [u8], v: i64, width: Width) -> Result<usize, VintError> {
    if v < 0 {
        return Err(VintError::Code(ErrorCode::ValueOutOfRange));
    }
    put_fixed(dst, v as u64, width)
}

/// Signed load: the stored payload must fit in the non-negative i64 range.
pub fn get_fixed_signed(src: &[u8], width: Width) -> Result<(i64, usize), VintError> {
    let (v, n) = get_fixed(src, width)?;
    if v > i64::MAX as u64 {
        return Err(VintError::Code(ErrorCode::ValueOutOfRange));
    }
    Ok((v as i64, n))
}
