//! Three-level self-describing integer codec, forward and reversed.
//!
//! The top two bits of the lead byte select the level; the remaining six
//! bits participate in the value:
//!
//! - `00xxxxxx`: 1 byte, values 0..=63.
//! - `01xxxxxx bbbbbbbb`: 2 bytes, `v = ((x << 8) | b) + 64`, values
//!   64..=16446.
//! - `10xxxxxx`: `x = payload width - 1`; followed by `x + 1`
//!   External-encoded (little-endian) bytes of `v - 16447`. The payload is
//!   stored at the full value's width, so this level is always 3..=9 bytes.
//! - `11xxxxxx`: reserved; rejected on decode.
//!
//! The offsets 64 and 16447 are cumulative: the encoder subtracts, the
//! decoder adds, and the band boundaries are contiguous.
//!
//! The reversed variant supports back-to-front parsing of value streams:
//! the encoding ends at the slice end, lead byte last, payload at
//! descending offsets before it.

use crate::arith;
use crate::external::{get_fixed, put_fixed, width_of_unsigned};
use vint_types::{ErrorCode, VintError, Width};

/// Values 0..=63 fit the one-byte level.
const LEVEL1_MAX: u64 = 63;
/// Values 64..=16446 fit the two-byte level.
const LEVEL2_MAX: u64 = 16446;
/// Cumulative offset applied at the two-byte level.
const LEVEL2_BIAS: u64 = 64;
/// Cumulative offset applied at the variable-width level.
const LEVEL3_BIAS: u64 = 16447;

/// Number of bytes `v` occupies when split-encoded.
pub fn split_len(v: u64) -> usize {
    if v <= LEVEL1_MAX {
        1
    } else if v <= LEVEL2_MAX {
        2
    } else {
        1 + width_of_unsigned(v).bytes()
    }
}

/// Encode `v` into the front of `dst`, returning the number of bytes
/// written.
///
/// # Errors
///
/// `BufferTooSmall` if `dst` cannot hold the required width.
pub fn put_split(dst: &mut [u8], v: u64) -> Result<usize, VintError> {
    let len = split_len(v);
    if dst.len() < len {
        return Err(VintError::Code(ErrorCode::BufferTooSmall));
    }
    if v <= LEVEL1_MAX {
        dst[0] = v as u8;
    } else if v <= LEVEL2_MAX {
        let r = v - LEVEL2_BIAS;
        dst[0] = 0x40 | (r >> 8) as u8;
        dst[1] = (r & 0xFF) as u8;
    } else {
        let width = width_of_unsigned(v);
        dst[0] = 0x80 | (width.raw() - 1);
        put_fixed(&mut dst[1..], v - LEVEL3_BIAS, width)?;
    }
    Ok(len)
}

/// Decode a split value from the front of `src`, returning
/// `(value, bytes_consumed)`.
///
/// # Errors
///
/// - `BufferTooSmall` on empty or truncated input.
/// - `InvalidFormat` for the reserved `11xxxxxx` lead.
/// - `Overflow` if the biased payload exceeds 2^64-1.
pub fn get_split(src: &[u8]) -> Result<(u64, usize), VintError> {
    let Some(&lead) = src.first() else {
        return Err(VintError::Code(ErrorCode::BufferTooSmall));
    };
    match lead >> 6 {
        0b00 => Ok((lead as u64, 1)),
        0b01 => {
            if src.len() < 2 {
                return Err(VintError::Code(ErrorCode::BufferTooSmall));
            }
            let v = (((lead & 0x3F) as u64) << 8 | src[1] as u64) + LEVEL2_BIAS;
            Ok((v, 2))
        }
        0b10 => {
            let width = Width::from_raw((lead & 0x3F) + 1);
            if !width.is_payload() {
                return Err(VintError::Code(ErrorCode::InvalidWidth));
            }
            let (r, n) = get_fixed(&src[1..], width)?;
            Ok((arith::checked_add(r, LEVEL3_BIAS)?, 1 + n))
        }
        _ => Err(VintError::Code(ErrorCode::InvalidFormat)),
    }
}

/// Encode `v` so the encoding ends at the end of `dst`: lead byte at
/// `dst[dst.len()-1]`, payload immediately before it.
///
/// Returns the number of bytes written.
pub fn put_split_reversed(dst: &mut [u8], v: u64) -> Result<usize, VintError> {
    let len = split_len(v);
    let end = dst.len();
    if end < len {
        return Err(VintError::Code(ErrorCode::BufferTooSmall));
    }
    if v <= LEVEL1_MAX {
        dst[end - 1] = v as u8;
    } else if v <= LEVEL2_MAX {
        let r = v - LEVEL2_BIAS;
        dst[end - 1] = 0x40 | (r >> 8) as u8;
        dst[end - 2] = (r & 0xFF) as u8;
    } else {
        let width = width_of_unsigned(v);
        dst[end - 1] = 0x80 | (width.raw() - 1);
        put_fixed(&mut dst[end - 1 - width.bytes()..end - 1], v - LEVEL3_BIAS, width)?;
    }
    Ok(len)
}

/// Decode a split value whose encoding ends at the end of `src`.
///
/// Returns `(value, bytes_consumed)` counting back from the slice end.
pub fn get_split_reversed(src: &[u8]) -> Result<(u64, usize), VintError> {
    let end = src.len();
    let Some(&lead) = src.last() else {
        return Err(VintError::Code(ErrorCode::BufferTooSmall));
    };
    match lead >> 6 {
        0b00 => Ok((lead as u64, 1)),
        0b01 => {
            if end < 2 {
                return Err(VintError::Code(ErrorCode::BufferTooSmall));
            }
            let v = (((lead & 0x3F) as u64) << 8 | src[end - 2] as u64) + LEVEL2_BIAS;
            Ok((v, 2))
        }
        0b10 => {
            let width = Width::from_raw((lead & 0x3F) + 1);
            if !width.is_payload() {
                return Err(VintError::Code(ErrorCode::InvalidWidth));
            }
            let n = width.bytes();
            if end < 1 + n {
                return Err(VintError::Code(ErrorCode::BufferTooSmall));
            }
            let (r, _) = get_fixed(&src[end - 1 - n..end - 1], width)?;
            Ok((arith::checked_add(r, LEVEL3_BIAS)?, 1 + n))
        }
        _ => Err(VintError::Code(ErrorCode::InvalidFormat)),
    }
}

/// No-zero forward encode: value 0 is disallowed and all encodings shift
/// down by one, so the smallest legal value costs a single byte of 0x00.
pub fn put_split_no_zero(dst: &mut [u8], v: u64) -> Result<usize, VintError> {
    if v == 0 {
        return Err(VintError::Code(ErrorCode::ValueOutOfRange));
    }
    put_split(dst, v - 1)
}

/// No-zero forward decode.
pub fn get_split_no_zero(src: &[u8]) -> Result<(u64, usize), VintError> {
    let (v, n) = get_split(src)?;
    Ok((arith::checked_add(v, 1)?, n))
}

/// No-zero reversed encode.
pub fn put_split_no_zero_reversed(dst: &mut [u8], v: u64) -> Result<usize, VintError> {
    if v == 0 {
        return Err(VintError::Code(ErrorCode::ValueOutOfRange));
    }
    put_split_reversed(dst, v - 1)
}

/// No-zero reversed decode.
pub fn get_split_no_zero_reversed(src: &[u8]) -> Result<(u64, usize), VintError> {
    let (v, n) = get_split_reversed(src)?;
    Ok((arith::checked_add(v, 1)?, n))
}
