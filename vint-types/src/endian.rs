//! Host byte-order probe.
//!
//! All multi-byte payloads in the External, FOR, Packed, and Bitstream
//! formats are little-endian in memory on every host; the codecs go through
//! `to_le_bytes`/`from_le_bytes` so no runtime branching is needed. The
//! probe exists so callers can observe the host order (e.g. when choosing a
//! zero-copy path for memory-mapped data).

/// Byte order of a machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endian {
    Little,
    Big,
}

/// Byte order of the compilation target, resolved at compile time.
pub const HOST: Endian = if cfg!(target_endian = "big") {
    Endian::Big
} else {
    Endian::Little
};

/// Report the host byte order.
#[inline]
pub const fn host_endian() -> Endian {
    HOST
}
