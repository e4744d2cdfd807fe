//! Trie node internals.

use crate::pattern::SegmentKind;
use crate::trie::Subscriber;

/// One trie node. Children are unique by `(kind, segment)`; subscribers by
/// id. The tree is singly owned from the root, so destruction is the
/// ordinary recursive drop.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TrieNode {
    pub segment: String,
    pub kind: SegmentKind,
    pub terminal: bool,
    pub subscribers: Vec<Subscriber>,
    pub children: Vec<TrieNode>,
}

impl TrieNode {
    pub fn new(segment: impl Into<String>, kind: SegmentKind) -> Self {
        Self {
            segment: segment.into(),
            kind,
            terminal: false,
            subscribers: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn root() -> Self {
        Self::new("", SegmentKind::Literal)
    }

    pub fn find_child(&self, kind: SegmentKind, segment: &str) -> Option<usize> {
        self.children
            .iter()
            .position(|c| c.kind == kind && c.segment == segment)
    }

    pub fn has_subscriber(&self, id: u32) -> bool {
        self.subscribers.iter().any(|s| s.id == id)
    }

    /// A node that terminates no pattern and leads nowhere can be pruned.
    pub fn is_prunable(&self) -> bool {
        !self.terminal && self.children.is_empty()
    }
}
