//! Bit-level containers for the VINT codecs.
//!
//! Two layers: free-function bitstream cells (read or write an
//! arbitrary-width value at an arbitrary bit offset inside a slot array,
//! disturbing nothing else), and [`PackedArray`], a homogeneous N-bit
//! element array built on the same layout with indexed access, insertion,
//! and binary search.
//!
//! Bits are LSB-first within each slot; a value that crosses a slot
//! boundary puts its low part in the current slot and its high part in the
//! next. The slot word size (u8/u16/u32/u64) is a type parameter, standing
//! in for per-width generated variants.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod bitstream;
pub mod packed;
pub mod slot;

pub use bitstream::{get, prepare_signed, restore_signed, set};
pub use packed::PackedArray;
pub use slot::Slot;
