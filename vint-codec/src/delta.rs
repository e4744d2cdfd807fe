//! Delta + ZigZag array codec.
//!
//! A sequence is stored as its first value followed by the differences
//! between consecutive values. Differences are ZigZag-mapped so that small
//! magnitudes of either sign get small encodings, then written through the
//! External codec as `[width_byte][payload]` pairs:
//!
//! ```text
//! [w(base)][base][w(z1)][z1][w(z2)][z2]...
//! ```
//!
//! The signed stream stores the base as its two's-complement bit pattern
//! (a negative base therefore takes the full 8 bytes); the unsigned stream
//! stores `v0` directly. Deltas are ZigZag in both variants, since even
//! unsigned sequences may decrease.
//!
//! Decoding is strictly sequential; reconstruction uses checked arithmetic
//! so malformed streams surface `Overflow` instead of wrapping.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::arith;
use crate::external::{get_fixed, put_fixed, width_of_unsigned};
use vint_types::{ErrorCode, VintError, Width};

/// ZigZag mapping: 0 → 0, -1 → 1, 1 → 2, -2 → 3, 2 → 4, ...
///
/// Interleaves negative and positive integers so small-magnitude signed
/// values get small unsigned encodings.
#[inline]
pub fn zigzag(v: i64) -> u64 {
    ((v as u64) << 1) ^ ((v >> 63) as u64)
}

/// Inverse of [`zigzag`].
#[inline]
pub fn unzigzag(z: u64) -> i64 {
    ((z >> 1) as i64) ^ -((z & 1) as i64)
}

/// Upper bound on the encoded size of `count` values: one 9-byte
/// `[width][payload]` pair per value.
pub fn delta_max_encoded_len(count: usize) -> usize {
    count * 9
}

/// Encode one signed delta as `[width][zigzag payload]`.
pub fn put_delta_one(dst: &mut [u8], delta: i64) -> Result<usize, VintError> {
    let z = zigzag(delta);
    put_width_prefixed(dst, z)
}

/// Decode one signed delta. Returns `(delta, bytes_consumed)`.
pub fn get_delta_one(src: &[u8]) -> Result<(i64, usize), VintError> {
    let (z, n) = get_width_prefixed(src)?;
    Ok((unzigzag(z), n))
}

/// Encode a signed sequence as base + ZigZag deltas.
///
/// Returns the number of bytes written; zero for an empty sequence.
///
/// # Errors
///
/// - `BufferTooSmall` if `dst` fills up.
/// - `Overflow` if a consecutive difference exceeds the i64 range.
pub fn put_delta(dst: &mut [u8], values: &[i64]) -> Result<usize, VintError> {
    let Some((&base, rest)) = values.split_first() else {
        return Ok(0);
    };
    let mut offset = put_width_prefixed(dst, base as u64)?;
    let mut prev = base;
    for &v in rest {
        let delta = v
            .checked_sub(prev)
            .ok_or(VintError::Code(ErrorCode::Overflow))?;
        offset += put_delta_one(&mut dst[offset..], delta)?;
        prev = v;
    }
    Ok(offset)
}

/// Decode `count` signed values. Returns `(values, bytes_consumed)`.
pub fn get_delta(src: &[u8], count: usize) -> Result<(Vec<i64>, usize), VintError> {
    let mut values = Vec::with_capacity(count);
    if count == 0 {
        return Ok((values, 0));
    }
    let (base, mut offset) = get_width_prefixed(src)?;
    let mut prev = base as i64;
    values.push(prev);
    for _ in 1..count {
        let (delta, n) = get_delta_one(&src[offset..])?;
        offset += n;
        prev = arith::checked_add_signed(prev, delta)?;
        values.push(prev);
    }
    Ok((values, offset))
}

/// Encode an unsigned sequence: `v0` then ZigZag deltas.
pub fn put_delta_unsigned(dst: &mut [u8], values: &[u64]) -> Result<usize, VintError> {
    let Some((&base, rest)) = values.split_first() else {
        return Ok(0);
    };
    let mut offset = put_width_prefixed(dst, base)?;
    let mut prev = base;
    for &v in rest {
        offset += put_delta_one(&mut dst[offset..], signed_diff(v, prev)?)?;
        prev = v;
    }
    Ok(offset)
}

/// Decode `count` unsigned values. Returns `(values, bytes_consumed)`.
pub fn get_delta_unsigned(src: &[u8], count: usize) -> Result<(Vec<u64>, usize), VintError> {
    let mut values = Vec::with_capacity(count);
    if count == 0 {
        return Ok((values, 0));
    }
    let (base, mut offset) = get_width_prefixed(src)?;
    let mut prev = base;
    values.push(prev);
    for _ in 1..count {
        let (delta, n) = get_delta_one(&src[offset..])?;
        offset += n;
        prev = prev
            .checked_add_signed(delta)
            .ok_or(VintError::Code(ErrorCode::Overflow))?;
        values.push(prev);
    }
    Ok((values, offset))
}

/// `a - b` as a signed delta, or `Overflow` if the gap exceeds i64.
fn signed_diff(a: u64, b: u64) -> Result<i64, VintError> {
    if a >= b {
        i64::try_from(a - b).map_err(|_| VintError::Code(ErrorCode::Overflow))
    } else {
        let magnitude = b - a;
        if magnitude > i64::MAX as u64 + 1 {
            return Err(VintError::Code(ErrorCode::Overflow));
        }
        Ok((magnitude as i64).wrapping_neg())
    }
}

fn put_width_prefixed(dst: &mut [u8], v: u64) -> Result<usize, VintError> {
    let width = width_of_unsigned(v);
    if dst.is_empty() {
        return Err(VintError::Code(ErrorCode::BufferTooSmall));
    }
    dst[0] = width.raw();
    let n = put_fixed(&mut dst[1..], v, width)?;
    Ok(1 + n)
}

fn get_width_prefixed(src: &[u8]) -> Result<(u64, usize), VintError> {
    let Some(&raw) = src.first() else {
        return Err(VintError::Code(ErrorCode::BufferTooSmall));
    };
    let width = Width::from_raw(raw);
    if !width.is_payload() {
        return Err(VintError::Code(ErrorCode::InvalidWidth));
    }
    let (v, n) = get_fixed(&src[1..], width)?;
    Ok((v, 1 + n))
}
