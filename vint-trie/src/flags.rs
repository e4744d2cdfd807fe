//! Node flags byte for the serialized trie.

use crate::pattern::SegmentKind;
use vint_types::VintError;

/// Bitfield wrapper around the one-byte node flags.
///
/// Bit 0 is the terminal marker, bits 1-2 hold the segment kind, bits 3-7
/// are reserved. Readers ignore the reserved bits for forward
/// compatibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct NodeFlags(u8);

impl NodeFlags {
    /// The node completes a pattern and carries subscribers.
    pub const TERMINAL: u8 = 0x01;

    const KIND_SHIFT: u32 = 1;
    const KIND_MASK: u8 = 0b0000_0110;

    /// Mask for all defined flag bits.
    const KNOWN_MASK: u8 = 0b0000_0111;

    /// Build the flags byte for a node.
    #[inline]
    pub const fn new(terminal: bool, kind: SegmentKind) -> Self {
        let mut bits = (kind as u8) << Self::KIND_SHIFT;
        if terminal {
            bits |= Self::TERMINAL;
        }
        Self(bits)
    }

    /// Create flags from a raw byte. Reserved bits are masked off.
    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw & Self::KNOWN_MASK)
    }

    /// Return the raw byte representation.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn terminal(self) -> bool {
        self.0 & Self::TERMINAL != 0
    }

    /// Decode the segment kind bits.
    ///
    /// # Errors
    ///
    /// `InvalidEnumValue` for the unassigned kind value 3.
    pub fn kind(self) -> Result<SegmentKind, VintError> {
        SegmentKind::from_raw((self.0 & Self::KIND_MASK) >> Self::KIND_SHIFT)
    }
}
