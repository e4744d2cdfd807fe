//! Sort-preserving self-describing integer codec.
//!
//! A single lead byte determines the total length; payload bytes are stored
//! big-endian so that lexicographic comparison of encoded strings equals
//! numeric comparison of the values. That property is the reason this codec
//! exists: it lets ordered key stores compare encoded keys with `memcmp`.
//!
//! Length bands (the lead byte table is the authoritative wire contract):
//!
//! | Lead byte L | Length | Value range                           |
//! |-------------|--------|---------------------------------------|
//! | 0..=240     | 1      | 0..=240 (`v = L`)                     |
//! | 241..=248   | 2      | 241..=2287 (`v = (L-241)*256+b1+240`) |
//! | 249         | 3      | 2288..=67823 (`v = b1*256+b2+2288`)   |
//! | 250         | 4      | up to 2^24-1, 3-byte BE payload       |
//! | 251..=255   | L-246  | up to 2^64-1, (L-247)-byte BE payload |

use crate::arith;
use vint_types::{ErrorCode, VintError};

/// Number of bytes `v` occupies when tagged-encoded (1..=9).
pub fn tagged_len(v: u64) -> usize {
    if v <= 240 {
        1
    } else if v <= 2287 {
        2
    } else if v <= 67823 {
        3
    } else if v <= 0x00FF_FFFF {
        4
    } else if v <= 0xFFFF_FFFF {
        5
    } else if v <= 0xFF_FFFF_FFFF {
        6
    } else if v <= 0xFFFF_FFFF_FFFF {
        7
    } else if v <= 0xFF_FFFF_FFFF_FFFF {
        8
    } else {
        9
    }
}

/// Total encoded length implied by a lead byte. Pure function of the first
/// byte; never touches payload.
#[inline]
pub fn length_of_lead(lead: u8) -> usize {
    match lead {
        0..=240 => 1,
        241..=248 => 2,
        249 => 3,
        250 => 4,
        l => l as usize - 246,
    }
}

/// Encode `v` into `dst`, returning the number of bytes written.
///
/// # Errors
///
/// `BufferTooSmall` if `dst` cannot hold the required width.
pub fn put_tagged(dst: &mut [u8], v: u64) -> Result<usize, VintError> {
    let len = tagged_len(v);
    if dst.len() < len {
        return Err(VintError::Code(ErrorCode::BufferTooSmall));
    }
    match len {
        1 => dst[0] = v as u8,
        2 => {
            let r = v - 240;
            dst[0] = 241 + (r >> 8) as u8;
            dst[1] = (r & 0xFF) as u8;
        }
        3 => {
            let r = v - 2288;
            dst[0] = 249;
            dst[1] = (r >> 8) as u8;
            dst[2] = (r & 0xFF) as u8;
        }
        n => {
            let payload = n - 1;
            dst[0] = (246 + n) as u8;
            dst[1..n].copy_from_slice(&v.to_be_bytes()[8 - payload..]);
        }
    }
    Ok(len)
}

/// Decode a tagged value from `src`, returning `(value, bytes_consumed)`.
///
/// # Errors
///
/// `BufferTooSmall` if `src` is empty or shorter than the lead byte
/// declares.
pub fn get_tagged(src: &[u8]) -> Result<(u64, usize), VintError> {
    let Some(&lead) = src.first() else {
        return Err(VintError::Code(ErrorCode::BufferTooSmall));
    };
    let len = length_of_lead(lead);
    if src.len() < len {
        return Err(VintError::Code(ErrorCode::BufferTooSmall));
    }
    let v = match lead {
        0..=240 => lead as u64,
        241..=248 => (lead as u64 - 241) * 256 + src[1] as u64 + 240,
        249 => ((src[1] as u64) << 8) + src[2] as u64 + 2288,
        _ => {
            let payload = len - 1;
            let mut be = [0u8; 8];
            be[8 - payload..].copy_from_slice(&src[1..len]);
            u64::from_be_bytes(be)
        }
    };
    Ok((v, len))
}

/// Add `delta` to the tagged value at the start of `buf`, re-encoding in
/// place.
///
/// Returns the encoded length on success. The sum must fit the same encoded
/// width as the original value; a wider result is reported as `Overflow`
/// rather than shifting the caller's layout.
///
/// # Errors
///
/// - Any decode error from [`get_tagged`].
/// - `Overflow` if the sum exceeds 2^64-1 or needs a wider encoding.
pub fn tagged_add(buf: &mut [u8], delta: u64) -> Result<usize, VintError> {
    let (v, len) = get_tagged(buf)?;
    let sum = arith::checked_add(v, delta)?;
    if tagged_len(sum) != len {
        return Err(VintError::Code(ErrorCode::Overflow));
    }
    put_tagged(&mut buf[..len], sum)
}
