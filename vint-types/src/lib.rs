//! Core types for the VINT variable-length integer codecs.
//!
//! This crate provides the foundational types shared across all VINT crates:
//! byte widths, error codes, the host endianness probe, and format constants.
//!
//! All types are `no_std` compatible by default.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constants;
pub mod endian;
pub mod error;
pub mod width;

pub use constants::*;
pub use endian::{host_endian, Endian, HOST};
pub use error::{ErrorCode, VintError};
pub use width::Width;
