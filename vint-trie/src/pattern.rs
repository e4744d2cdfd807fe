//! Routing-pattern grammar.
//!
//! A pattern is `.`-separated segments. A segment is exactly `*` (one
//! segment wildcard), exactly `#` (zero-or-more wildcard), or a literal of
//! 1..=63 bytes from `[A-Za-z0-9_-]`. Total pattern length is capped at
//! 255 bytes. The empty pattern is legal and parses to zero segments (it
//! addresses the trie root).

use vint_types::{ErrorCode, VintError, MAX_PATTERN_LEN, MAX_SEGMENT_LEN};

/// Classification of one pattern segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum SegmentKind {
    /// Plain text; matches only itself.
    Literal = 0,
    /// `*`: matches exactly one input segment.
    Star = 1,
    /// `#`: matches zero or more input segments.
    Hash = 2,
}

impl SegmentKind {
    /// Decode a kind from its wire representation.
    pub fn from_raw(raw: u8) -> Result<Self, VintError> {
        match raw {
            0 => Ok(Self::Literal),
            1 => Ok(Self::Star),
            2 => Ok(Self::Hash),
            _ => Err(VintError::InvalidEnumValue {
                type_name: "SegmentKind",
                value: raw as u64,
            }),
        }
    }

    /// True for `*` and `#`.
    pub fn is_wildcard(self) -> bool {
        !matches!(self, Self::Literal)
    }
}

/// One parsed pattern segment. Wildcards keep their literal spelling in
/// `text` so paths can be reassembled.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

impl Segment {
    fn literal(text: &str) -> Self {
        Self {
            kind: SegmentKind::Literal,
            text: text.to_owned(),
        }
    }
}

fn is_literal_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

/// Parse and validate a pattern (or routing key) into segments.
///
/// # Errors
///
/// `InvalidFormat` if the pattern exceeds 255 bytes, contains an empty
/// segment, an over-long segment, or a character outside the grammar.
pub fn parse_pattern(input: &str) -> Result<Vec<Segment>, VintError> {
    if input.len() > MAX_PATTERN_LEN {
        return Err(VintError::Code(ErrorCode::InvalidFormat));
    }
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let mut segments = Vec::new();
    for part in input.split('.') {
        if part.is_empty() || part.len() > MAX_SEGMENT_LEN {
            return Err(VintError::Code(ErrorCode::InvalidFormat));
        }
        let segment = match part {
            "*" => Segment {
                kind: SegmentKind::Star,
                text: part.to_owned(),
            },
            "#" => Segment {
                kind: SegmentKind::Hash,
                text: part.to_owned(),
            },
            _ => {
                if !part.bytes().all(is_literal_byte) {
                    return Err(VintError::Code(ErrorCode::InvalidFormat));
                }
                Segment::literal(part)
            }
        };
        segments.push(segment);
    }
    Ok(segments)
}
