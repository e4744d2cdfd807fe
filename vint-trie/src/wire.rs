//! Self-describing serialized form of the trie.
//!
//! Envelope:
//!
//! ```text
//! "TRIE"            4-byte magic
//! version = 1       1 byte
//! pattern_count     tagged
//! node_count        tagged
//! subscriber_count  tagged
//! <node>            recursive, preorder
//! ```
//!
//! Node layout: one flags byte (bit 0 terminal, bits 1-2 kind, bits 3-7
//! reserved and ignored on read), the segment as a tagged length plus raw
//! bytes, the subscriber list (tagged count, then per subscriber a tagged
//! id, tagged name length, raw name bytes), and the tagged child count
//! followed by the children.
//!
//! Serialization writes into a caller-sized buffer and fails with
//! `BufferTooSmall` rather than reallocating; deserialization validates
//! magic, version, and the header counters against the rebuilt tree.

use crate::flags::NodeFlags;
use crate::node::TrieNode;
use crate::trie::{PatternTrie, Subscriber};
use vint_codec::tagged::{get_tagged, put_tagged, tagged_len};
use vint_types::{ErrorCode, VintError, MAX_SEGMENT_LEN, TRIE_MAGIC, TRIE_VERSION};

/// Recursion guard for hostile child-count nesting. Far above any depth a
/// legal pattern (at most 128 segments) can produce.
const MAX_NODE_DEPTH: usize = 256;

/// Exact number of bytes [`serialize_into`] will write for `trie`.
pub fn serialized_len(trie: &PatternTrie) -> usize {
    TRIE_MAGIC.len()
        + 1
        + tagged_len(trie.pattern_count as u64)
        + tagged_len(trie.node_count as u64)
        + tagged_len(trie.subscriber_count as u64)
        + node_len(&trie.root)
}

fn node_len(node: &TrieNode) -> usize {
    let mut len = 1 + tagged_len(node.segment.len() as u64) + node.segment.len();
    len += tagged_len(node.subscribers.len() as u64);
    for sub in &node.subscribers {
        len += tagged_len(sub.id as u64) + tagged_len(sub.name.len() as u64) + sub.name.len();
    }
    len += tagged_len(node.children.len() as u64);
    for child in &node.children {
        len += node_len(child);
    }
    len
}

/// Serialize `trie` into `dst`, returning the bytes written.
///
/// # Errors
///
/// `BufferTooSmall` if `dst` cannot hold the full envelope.
pub fn serialize_into(trie: &PatternTrie, dst: &mut [u8]) -> Result<usize, VintError> {
    if dst.len() < serialized_len(trie) {
        return Err(VintError::Code(ErrorCode::BufferTooSmall));
    }
    dst[..4].copy_from_slice(&TRIE_MAGIC);
    dst[4] = TRIE_VERSION;
    let mut offset = 5;
    offset += put_tagged(&mut dst[offset..], trie.pattern_count as u64)?;
    offset += put_tagged(&mut dst[offset..], trie.node_count as u64)?;
    offset += put_tagged(&mut dst[offset..], trie.subscriber_count as u64)?;
    offset += put_node(&trie.root, &mut dst[offset..])?;
    Ok(offset)
}

/// Serialize `trie` into a fresh buffer.
pub fn serialize(trie: &PatternTrie) -> Vec<u8> {
    let mut buf = vec![0u8; serialized_len(trie)];
    let written = serialize_into(trie, &mut buf)
        .expect("sized buffer cannot be too small");
    debug_assert_eq!(written, buf.len());
    buf
}

fn put_node(node: &TrieNode, dst: &mut [u8]) -> Result<usize, VintError> {
    dst[0] = NodeFlags::new(node.terminal, node.kind).bits();
    let mut offset = 1;

    offset += put_tagged(&mut dst[offset..], node.segment.len() as u64)?;
    dst[offset..offset + node.segment.len()].copy_from_slice(node.segment.as_bytes());
    offset += node.segment.len();

    offset += put_tagged(&mut dst[offset..], node.subscribers.len() as u64)?;
    for sub in &node.subscribers {
        offset += put_tagged(&mut dst[offset..], sub.id as u64)?;
        offset += put_tagged(&mut dst[offset..], sub.name.len() as u64)?;
        dst[offset..offset + sub.name.len()].copy_from_slice(sub.name.as_bytes());
        offset += sub.name.len();
    }

    offset += put_tagged(&mut dst[offset..], node.children.len() as u64)?;
    for child in &node.children {
        offset += put_node(child, &mut dst[offset..])?;
    }
    Ok(offset)
}

/// Rebuild a trie from its serialized form. Returns
/// `(trie, bytes_consumed)`.
///
/// Reserved flag bits are ignored for forward compatibility. The header
/// counters must agree with the reconstructed tree.
///
/// # Errors
///
/// - `NullInput` for an empty buffer.
/// - `BadMagic` / `UnsupportedVersion` for a foreign or newer envelope.
/// - `BufferTooSmall` for structural truncation.
/// - `InvalidFormat` for malformed structure or counter mismatches.
pub fn deserialize(src: &[u8]) -> Result<(PatternTrie, usize), VintError> {
    if src.is_empty() {
        return Err(VintError::Code(ErrorCode::NullInput));
    }
    if src.len() < 5 {
        return Err(VintError::Code(ErrorCode::BufferTooSmall));
    }
    if src[..4] != TRIE_MAGIC {
        return Err(VintError::BadMagic {
            expected: TRIE_MAGIC,
            got: [src[0], src[1], src[2], src[3]],
        });
    }
    if src[4] != TRIE_VERSION {
        return Err(VintError::UnsupportedVersion(src[4]));
    }

    let mut offset = 5;
    let (pattern_count, n) = get_tagged(&src[offset..])?;
    offset += n;
    let (node_count, n) = get_tagged(&src[offset..])?;
    offset += n;
    let (subscriber_count, n) = get_tagged(&src[offset..])?;
    offset += n;

    let (root, n) = get_node(&src[offset..], 0)?;
    offset += n;

    let mut census = Census::default();
    census.visit(&root);
    if census.nodes as u64 != node_count
        || census.terminals as u64 != pattern_count
        || census.subscribers as u64 != subscriber_count
    {
        return Err(VintError::Code(ErrorCode::InvalidFormat));
    }

    tracing::debug!(
        patterns = census.terminals,
        nodes = census.nodes,
        subscribers = census.subscribers,
        "trie deserialized"
    );
    let trie = PatternTrie::from_parts(
        root,
        census.terminals,
        census.nodes,
        census.subscribers,
    );
    Ok((trie, offset))
}

#[derive(Default)]
struct Census {
    nodes: usize,
    terminals: usize,
    subscribers: usize,
}

impl Census {
    fn visit(&mut self, node: &TrieNode) {
        self.nodes += 1;
        if node.terminal {
            self.terminals += 1;
        }
        self.subscribers += node.subscribers.len();
        for child in &node.children {
            self.visit(child);
        }
    }
}

fn get_node(src: &[u8], depth: usize) -> Result<(TrieNode, usize), VintError> {
    if depth > MAX_NODE_DEPTH {
        return Err(VintError::Code(ErrorCode::InvalidFormat));
    }
    let Some(&flags_raw) = src.first() else {
        return Err(VintError::Code(ErrorCode::BufferTooSmall));
    };
    let flags = NodeFlags::from_raw(flags_raw);
    let kind = flags.kind()?;
    let mut offset = 1;

    let segment = get_string(src, &mut offset, MAX_SEGMENT_LEN)?;
    let mut node = TrieNode::new(segment, kind);
    node.terminal = flags.terminal();

    let (sub_count, n) = get_tagged(&src[offset..])?;
    offset += n;
    for _ in 0..sub_count {
        let (id, n) = get_tagged(&src[offset..])?;
        offset += n;
        let id = u32::try_from(id).map_err(|_| VintError::Code(ErrorCode::InvalidFormat))?;
        let name = get_string(src, &mut offset, usize::MAX)?;
        node.subscribers.push(Subscriber { id, name });
    }

    let (child_count, n) = get_tagged(&src[offset..])?;
    offset += n;
    for _ in 0..child_count {
        let (child, n) = get_node(&src[offset..], depth + 1)?;
        offset += n;
        if node.find_child(child.kind, &child.segment).is_some() {
            // Duplicate (kind, segment) children violate the tree invariant.
            return Err(VintError::Code(ErrorCode::InvalidFormat));
        }
        node.children.push(child);
    }
    Ok((node, offset))
}

fn get_string(src: &[u8], offset: &mut usize, max_len: usize) -> Result<String, VintError> {
    let (len, n) = get_tagged(&src[*offset..])?;
    *offset += n;
    let len = usize::try_from(len).map_err(|_| VintError::Code(ErrorCode::InvalidFormat))?;
    if len > max_len {
        return Err(VintError::Code(ErrorCode::InvalidFormat));
    }
    let end = offset
        .checked_add(len)
        .ok_or(VintError::Code(ErrorCode::BufferTooSmall))?;
    let Some(bytes) = src.get(*offset..end) else {
        return Err(VintError::Code(ErrorCode::BufferTooSmall));
    };
    *offset = end;
    String::from_utf8(bytes.to_vec()).map_err(|_| VintError::Code(ErrorCode::InvalidFormat))
}
