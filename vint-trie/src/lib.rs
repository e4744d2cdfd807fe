//! AMQP-style pattern-matching trie.
//!
//! Routing patterns are `.`-separated segments where `*` matches exactly
//! one segment and `#` matches zero or more. Patterns carry subscribers
//! (id + name pairs); matching an input key collects every subscriber
//! whose pattern accepts it, deduplicated by id.
//!
//! The trie serializes to a self-describing envelope (`"TRIE"` magic +
//! version) built from the VINT tagged codec; see [`wire`].
//!
//! Readers (`matches`, `list_patterns`, `stats`, serialization) may run
//! concurrently; mutators require exclusive access. No locks are embedded;
//! the caller chooses a discipline.

mod node;

pub mod flags;
pub mod pattern;
pub mod trie;
pub mod wire;

pub use flags::NodeFlags;
pub use pattern::{parse_pattern, Segment, SegmentKind};
pub use trie::{PatternTrie, Subscriber, TrieStats};
pub use wire::{deserialize, serialize, serialize_into, serialized_len};
