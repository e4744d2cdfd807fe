//! Frame-of-Reference (FOR) array codec.
//!
//! Clustered sequences are stored as a minimum value plus fixed-width
//! offsets from it:
//!
//! ```text
//! [min: tagged][offset_width: 1 byte][count: tagged][offset1]...[offsetN]
//! ```
//!
//! All offsets share one width (`width_of_unsigned(max - min)`), which makes
//! the payload SIMD-friendly and gives O(1) random access: element `i`
//! starts at `header_len + i * offset_width`. An all-equal input degenerates
//! to `offset_width = 1` with zero-valued offsets.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::arith;
use crate::external::{get_fixed, put_fixed, width_of_unsigned};
use crate::tagged::{get_tagged, put_tagged, tagged_len};
use vint_types::{ErrorCode, VintError, Width};

/// Encoding metadata: the analysis pass result, also recoverable from an
/// encoded header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForMeta {
    /// Minimum value in the sequence.
    pub min: u64,
    /// Maximum value in the sequence (min when recovered from a header).
    pub max: u64,
    /// `max - min`.
    pub range: u64,
    /// Number of encoded values.
    pub count: usize,
    /// Bytes per offset (1..=8).
    pub offset_width: Width,
    /// Total encoded size in bytes.
    pub encoded_len: usize,
}

impl ForMeta {
    /// Byte length of the header preceding the offset payload.
    pub fn header_len(&self) -> usize {
        tagged_len(self.min) + 1 + tagged_len(self.count as u64)
    }
}

/// Analyze a sequence: min, max, range, offset width, encoded size.
///
/// # Errors
///
/// `NullInput` for an empty sequence.
pub fn analyze(values: &[u64]) -> Result<ForMeta, VintError> {
    let Some(&first) = values.first() else {
        return Err(VintError::Code(ErrorCode::NullInput));
    };
    let mut min = first;
    let mut max = first;
    for &v in &values[1..] {
        min = min.min(v);
        max = max.max(v);
    }
    let range = max - min;
    let offset_width = width_of_unsigned(range);
    let mut meta = ForMeta {
        min,
        max,
        range,
        count: values.len(),
        offset_width,
        encoded_len: 0,
    };
    meta.encoded_len = for_len(&meta);
    Ok(meta)
}

/// Total encoded size implied by `meta`.
pub fn for_len(meta: &ForMeta) -> usize {
    meta.header_len() + meta.count * meta.offset_width.bytes()
}

/// Encode a sequence, returning `(bytes_written, meta)`.
///
/// # Errors
///
/// - `NullInput` for an empty sequence.
/// - `BufferTooSmall` if `dst` cannot hold the encoding.
pub fn put_for(dst: &mut [u8], values: &[u64]) -> Result<(usize, ForMeta), VintError> {
    let meta = analyze(values)?;
    if dst.len() < meta.encoded_len {
        return Err(VintError::Code(ErrorCode::BufferTooSmall));
    }
    let mut offset = put_tagged(dst, meta.min)?;
    dst[offset] = meta.offset_width.raw();
    offset += 1;
    offset += put_tagged(&mut dst[offset..], meta.count as u64)?;
    for &v in values {
        offset += put_fixed(&mut dst[offset..], v - meta.min, meta.offset_width)?;
    }
    Ok((offset, meta))
}

/// Read the header of an encoded sequence. Returns `(meta, header_len)`;
/// `max` and `range` are not recorded on the wire and are reported as
/// `min` and 0.
///
/// # Errors
///
/// - Decode errors from the tagged header fields.
/// - `InvalidWidth` if the offset-width byte is outside 1..=8.
pub fn read_meta(src: &[u8]) -> Result<(ForMeta, usize), VintError> {
    let (min, min_len) = get_tagged(src)?;
    let Some(&width_raw) = src.get(min_len) else {
        return Err(VintError::Code(ErrorCode::BufferTooSmall));
    };
    let offset_width = Width::from_raw(width_raw);
    if !offset_width.is_payload() {
        return Err(VintError::Code(ErrorCode::InvalidWidth));
    }
    let (count, count_len) = get_tagged(&src[min_len + 1..])?;
    let header_len = min_len + 1 + count_len;
    let count = usize::try_from(count).map_err(|_| VintError::Code(ErrorCode::Overflow))?;
    let encoded_len = count
        .checked_mul(offset_width.bytes())
        .and_then(|payload| payload.checked_add(header_len))
        .ok_or(VintError::Code(ErrorCode::Overflow))?;
    let meta = ForMeta {
        min,
        max: min,
        range: 0,
        count,
        offset_width,
        encoded_len,
    };
    Ok((meta, header_len))
}

/// Decode an entire encoded sequence. Returns `(values, bytes_consumed)`.
///
/// # Errors
///
/// - Header errors from [`read_meta`].
/// - `BufferTooSmall` if the payload is truncated.
/// - `Overflow` if `min + offset` escapes the u64 domain.
pub fn get_for(src: &[u8]) -> Result<(Vec<u64>, usize), VintError> {
    let (meta, header_len) = read_meta(src)?;
    if src.len() < meta.encoded_len {
        return Err(VintError::Code(ErrorCode::BufferTooSmall));
    }
    let mut values = Vec::with_capacity(meta.count);
    let mut offset = header_len;
    for _ in 0..meta.count {
        let (o, n) = get_fixed(&src[offset..], meta.offset_width)?;
        offset += n;
        values.push(arith::checked_add(meta.min, o)?);
    }
    Ok((values, offset))
}

/// Random access: decode only element `index`.
///
/// # Errors
///
/// - Header errors from [`read_meta`].
/// - `ValueOutOfRange` if `index >= count`.
pub fn for_get_at(src: &[u8], index: usize) -> Result<u64, VintError> {
    let (meta, header_len) = read_meta(src)?;
    if index >= meta.count {
        return Err(VintError::Code(ErrorCode::ValueOutOfRange));
    }
    let at = header_len + index * meta.offset_width.bytes();
    let (o, _) = get_fixed(src.get(at..).unwrap_or(&[]), meta.offset_width)?;
    arith::checked_add(meta.min, o)
}

/// Minimum value recorded in an encoded header.
pub fn for_min(src: &[u8]) -> Result<u64, VintError> {
    Ok(get_tagged(src)?.0)
}

/// Element count recorded in an encoded header.
pub fn for_count(src: &[u8]) -> Result<usize, VintError> {
    Ok(read_meta(src)?.0.count)
}

/// Offset width recorded in an encoded header.
pub fn for_offset_width(src: &[u8]) -> Result<Width, VintError> {
    Ok(read_meta(src)?.0.offset_width)
}
