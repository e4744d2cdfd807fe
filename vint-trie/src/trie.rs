//! The pattern trie: insert, remove, match, list, stats.

use std::collections::VecDeque;

use crate::node::TrieNode;
use crate::pattern::{parse_pattern, Segment, SegmentKind};
use vint_types::{ErrorCode, VintError, DEFAULT_MAX_SUBSCRIBERS};

/// A routing subscription: an id unique within its pattern, plus a
/// human-readable name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subscriber {
    pub id: u32,
    pub name: String,
}

/// Structural counters gathered by [`PatternTrie::stats`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrieStats {
    pub total_nodes: usize,
    pub terminal_nodes: usize,
    pub wildcard_nodes: usize,
    pub max_depth: usize,
}

/// Wildcard-routing trie over `.`-separated patterns.
///
/// Invariants: children of a node are unique by `(kind, segment)`;
/// `pattern_count` equals the number of terminal nodes; `subscriber_count`
/// is the sum of subscriber-list lengths over terminals. Interior nodes
/// that stop terminating any pattern and have no children are pruned
/// eagerly on removal.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternTrie {
    pub(crate) root: TrieNode,
    pub(crate) pattern_count: usize,
    pub(crate) node_count: usize,
    pub(crate) subscriber_count: usize,
    max_subscribers: usize,
}

impl Default for PatternTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternTrie {
    /// An empty trie (one root node) with the default subscriber bound.
    pub fn new() -> Self {
        Self::with_max_subscribers(DEFAULT_MAX_SUBSCRIBERS)
    }

    /// An empty trie with a custom per-pattern subscriber bound.
    pub fn with_max_subscribers(max_subscribers: usize) -> Self {
        Self {
            root: TrieNode::root(),
            pattern_count: 0,
            node_count: 1,
            subscriber_count: 0,
            max_subscribers,
        }
    }

    pub(crate) fn from_parts(
        root: TrieNode,
        pattern_count: usize,
        node_count: usize,
        subscriber_count: usize,
    ) -> Self {
        Self {
            root,
            pattern_count,
            node_count,
            subscriber_count,
            max_subscribers: DEFAULT_MAX_SUBSCRIBERS,
        }
    }

    /// Number of distinct patterns (terminal nodes).
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Total subscriptions across all patterns.
    pub fn subscriber_count(&self) -> usize {
        self.subscriber_count
    }

    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }

    /// Per-pattern subscriber bound.
    pub fn max_subscribers(&self) -> usize {
        self.max_subscribers
    }

    /// Subscribe `(id, name)` to `pattern`, creating trie nodes as needed.
    ///
    /// Returns `Ok(true)` for a new subscription, `Ok(false)` when the id
    /// was already subscribed to this pattern.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` for a pattern violating the grammar.
    /// - `ValueOutOfRange` when the pattern's subscriber bound is reached.
    pub fn insert(&mut self, pattern: &str, id: u32, name: &str) -> Result<bool, VintError> {
        let segments = parse_pattern(pattern)?;
        let mut current = &mut self.root;
        for seg in &segments {
            let idx = match current.find_child(seg.kind, &seg.text) {
                Some(idx) => idx,
                None => {
                    current
                        .children
                        .push(TrieNode::new(seg.text.clone(), seg.kind));
                    self.node_count += 1;
                    current.children.len() - 1
                }
            };
            current = &mut current.children[idx];
        }

        if current.has_subscriber(id) {
            return Ok(false);
        }
        if current.subscribers.len() >= self.max_subscribers {
            return Err(VintError::Code(ErrorCode::ValueOutOfRange));
        }

        let was_terminal = current.terminal;
        current.subscribers.push(Subscriber {
            id,
            name: name.to_owned(),
        });
        current.terminal = true;
        if !was_terminal {
            self.pattern_count += 1;
        }
        self.subscriber_count += 1;
        tracing::debug!(pattern, id, "pattern subscription added");
        Ok(true)
    }

    /// Remove a whole pattern: all its subscribers and its terminal mark.
    ///
    /// Returns `Ok(false)` if the pattern was not present.
    pub fn remove_pattern(&mut self, pattern: &str) -> Result<bool, VintError> {
        let segments = parse_pattern(pattern)?;
        let mut removed_subs = 0;
        let mut pruned = 0;
        let found = remove_pattern_rec(&mut self.root, &segments, &mut removed_subs, &mut pruned);
        if found {
            self.pattern_count -= 1;
            self.subscriber_count -= removed_subs;
            self.node_count -= pruned;
            tracing::debug!(pattern, removed_subs, pruned, "pattern removed");
        }
        Ok(found)
    }

    /// Remove one subscriber from a pattern. An emptied pattern stops being
    /// terminal and its dead branch is pruned.
    ///
    /// Returns `Ok(false)` if the pattern or id was not present.
    pub fn remove_subscriber(&mut self, pattern: &str, id: u32) -> Result<bool, VintError> {
        let segments = parse_pattern(pattern)?;
        let mut cleared_pattern = false;
        let mut pruned = 0;
        let found = remove_subscriber_rec(
            &mut self.root,
            &segments,
            id,
            &mut cleared_pattern,
            &mut pruned,
        );
        if found {
            self.subscriber_count -= 1;
            if cleared_pattern {
                self.pattern_count -= 1;
            }
            self.node_count -= pruned;
            tracing::debug!(pattern, id, "subscriber removed");
        }
        Ok(found)
    }

    /// Collect every subscriber whose pattern accepts `input`.
    ///
    /// Results are deduplicated by id in first-encountered order. Invalid
    /// input yields an empty result; matching never errors.
    pub fn matches(&self, input: &str) -> Vec<Subscriber> {
        let mut out = Vec::new();
        let Ok(segments) = parse_pattern(input) else {
            return out;
        };
        let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
        walk(&self.root, &texts, 0, &mut out);
        out
    }

    /// Like [`matches`](Self::matches), ids only.
    pub fn match_ids(&self, input: &str) -> Vec<u32> {
        self.matches(input).into_iter().map(|s| s.id).collect()
    }

    /// Reassemble every stored pattern, in depth-first child order.
    pub fn list_patterns(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut path = String::new();
        list_rec(&self.root, &mut path, &mut out);
        out
    }

    /// Breadth-first structural census.
    pub fn stats(&self) -> TrieStats {
        let mut stats = TrieStats::default();
        let mut queue = VecDeque::new();
        queue.push_back((&self.root, 0));
        while let Some((node, depth)) = queue.pop_front() {
            stats.total_nodes += 1;
            if node.terminal {
                stats.terminal_nodes += 1;
            }
            if node.kind.is_wildcard() {
                stats.wildcard_nodes += 1;
            }
            stats.max_depth = stats.max_depth.max(depth);
            for child in &node.children {
                queue.push_back((child, depth + 1));
            }
        }
        stats
    }
}

fn remove_pattern_rec(
    node: &mut TrieNode,
    segments: &[Segment],
    removed_subs: &mut usize,
    pruned: &mut usize,
) -> bool {
    let Some((seg, rest)) = segments.split_first() else {
        if !node.terminal {
            return false;
        }
        *removed_subs = node.subscribers.len();
        node.subscribers.clear();
        node.terminal = false;
        return true;
    };
    let Some(idx) = node.find_child(seg.kind, &seg.text) else {
        return false;
    };
    let found = remove_pattern_rec(&mut node.children[idx], rest, removed_subs, pruned);
    if found && node.children[idx].is_prunable() {
        node.children.remove(idx);
        *pruned += 1;
    }
    found
}

fn remove_subscriber_rec(
    node: &mut TrieNode,
    segments: &[Segment],
    id: u32,
    cleared_pattern: &mut bool,
    pruned: &mut usize,
) -> bool {
    let Some((seg, rest)) = segments.split_first() else {
        if !node.terminal {
            return false;
        }
        let Some(pos) = node.subscribers.iter().position(|s| s.id == id) else {
            return false;
        };
        node.subscribers.remove(pos);
        if node.subscribers.is_empty() {
            node.terminal = false;
            *cleared_pattern = true;
        }
        return true;
    };
    let Some(idx) = node.find_child(seg.kind, &seg.text) else {
        return false;
    };
    let found =
        remove_subscriber_rec(&mut node.children[idx], rest, id, cleared_pattern, pruned);
    if found && node.children[idx].is_prunable() {
        node.children.remove(idx);
        *pruned += 1;
    }
    found
}

fn walk(node: &TrieNode, segments: &[&str], i: usize, out: &mut Vec<Subscriber>) {
    if i == segments.len() {
        if node.terminal {
            collect(node, out);
        }
        // A trailing # can still match zero remaining segments.
        for child in &node.children {
            if child.kind == SegmentKind::Hash {
                walk(child, segments, i, out);
            }
        }
        return;
    }

    for child in &node.children {
        match child.kind {
            SegmentKind::Literal => {
                if child.segment == segments[i] {
                    walk(child, segments, i + 1, out);
                }
            }
            SegmentKind::Star => walk(child, segments, i + 1, out),
            SegmentKind::Hash => {
                // Zero segments, then every non-empty tail.
                walk(child, segments, i, out);
                for j in i..segments.len() {
                    walk(child, segments, j + 1, out);
                }
            }
        }
    }
}

fn collect(node: &TrieNode, out: &mut Vec<Subscriber>) {
    for sub in &node.subscribers {
        if !out.iter().any(|s| s.id == sub.id) {
            out.push(sub.clone());
        }
    }
}

fn list_rec(node: &TrieNode, path: &mut String, out: &mut Vec<String>) {
    if node.terminal {
        out.push(path.clone());
    }
    for child in &node.children {
        let saved = path.len();
        if !path.is_empty() {
            path.push('.');
        }
        path.push_str(&child.segment);
        list_rec(child, path, out);
        path.truncate(saved);
    }
}
