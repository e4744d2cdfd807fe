//! VINT codec implementations.
//!
//! This crate implements the byte-level encoding and decoding for the VINT
//! family: the four primitive integer codecs (External, Tagged, Split,
//! Chained), the array-level Delta and Frame-of-Reference codecs, and the
//! one-byte dimension descriptor used by matrix headers.
//!
//! Every codec operates on caller-provided contiguous byte slices and never
//! allocates; the array codecs allocate only for their own decoded output.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod arith;
pub mod chained;
pub mod delta;
pub mod dimension;
pub mod external;
pub mod frame;
pub mod split;
pub mod tagged;

pub use chained::{chained_len, get_chained, put_chained};
pub use delta::{
    delta_max_encoded_len, get_delta, get_delta_one, get_delta_unsigned, put_delta, put_delta_one,
    put_delta_unsigned, unzigzag, zigzag,
};
pub use dimension::{get_dimensions, put_dimensions, Dimensions};
pub use external::{
    get_fixed, get_fixed_signed, put_fixed, put_fixed_signed, width_of_signed, width_of_unsigned,
};
pub use frame::{
    analyze, for_count, for_get_at, for_len, for_min, for_offset_width, get_for, put_for,
    read_meta, ForMeta,
};
pub use split::{
    get_split, get_split_no_zero, get_split_no_zero_reversed, get_split_reversed, put_split,
    put_split_no_zero, put_split_no_zero_reversed, put_split_reversed, split_len,
};
pub use tagged::{get_tagged, length_of_lead, put_tagged, tagged_add, tagged_len};

use vint_types::{VintError, Width, MAX_CHAINED_LEN, MAX_SPLIT_LEN, MAX_TAGGED_LEN};

/// A selectable single-value codec.
///
/// The codec kind plus its out-of-band parameters; dispatch is a plain match,
/// no trait objects. `External` carries the fixed width the caller has agreed
/// on out-of-band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Codec {
    /// Sort-preserving self-describing codec (1-9 bytes).
    Tagged,
    /// Fixed-width little-endian codec; width known out-of-band.
    External(Width),
    /// Three-level self-describing codec (1, 2, or 3-9 bytes).
    Split,
    /// 7-bit continuation codec, SQLite3-compatible (1-9 bytes).
    Chained,
}

impl Codec {
    /// Upper bound on the encoded size of any value under this codec.
    pub fn max_len(&self) -> usize {
        match self {
            Codec::Tagged => MAX_TAGGED_LEN,
            Codec::External(w) => w.bytes(),
            Codec::Split => MAX_SPLIT_LEN,
            Codec::Chained => MAX_CHAINED_LEN,
        }
    }

    /// Encode `v` into `dst`, returning the number of bytes written.
    pub fn encode(&self, dst: &mut [u8], v: u64) -> Result<usize, VintError> {
        match self {
            Codec::Tagged => put_tagged(dst, v),
            Codec::External(w) => put_fixed(dst, v, *w),
            Codec::Split => put_split(dst, v),
            Codec::Chained => put_chained(dst, v),
        }
    }

    /// Decode a value from `src`, returning `(value, bytes_consumed)`.
    pub fn decode(&self, src: &[u8]) -> Result<(u64, usize), VintError> {
        match self {
            Codec::Tagged => get_tagged(src),
            Codec::External(w) => get_fixed(src, *w),
            Codec::Split => get_split(src),
            Codec::Chained => get_chained(src),
        }
    }
}
