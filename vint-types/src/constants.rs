//! Magic numbers, maximum encoding lengths, and grammar limits for the
//! VINT codecs and the pattern-trie envelope.

/// Trie envelope magic: "TRIE" in ASCII.
pub const TRIE_MAGIC: [u8; 4] = *b"TRIE";

/// Current trie envelope version.
pub const TRIE_VERSION: u8 = 1;

/// Maximum number of bytes a tagged varint can occupy (lead byte + 8 payload).
pub const MAX_TAGGED_LEN: usize = 9;

/// Maximum number of bytes a chained varint can occupy (8 continuation
/// bytes + one 8-bit tail byte).
pub const MAX_CHAINED_LEN: usize = 9;

/// Maximum number of bytes a split varint can occupy (lead byte + 8 payload).
pub const MAX_SPLIT_LEN: usize = 9;

/// Maximum total length of a routing pattern, in bytes.
pub const MAX_PATTERN_LEN: usize = 255;

/// Maximum length of a single pattern segment, in bytes.
pub const MAX_SEGMENT_LEN: usize = 63;

/// Default bound on subscribers per pattern. This is a resource-control
/// default, not a wire constant; tries may be configured with another bound.
pub const DEFAULT_MAX_SUBSCRIBERS: usize = 256;
