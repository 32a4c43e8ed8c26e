//! Structured metadata attached to log records
//!
//! Metadata is an insertion-ordered mapping from string keys to values. It is
//! rendered as `key = value` pairs joined by single spaces.
//!
//! Key features:
//! - Ordered: rendering follows insertion order, re-inserting a key keeps its slot
//! - Nested values: strings, arrays and dictionaries
//! - Cached rendering for per-handler accumulated metadata

mod cache;
mod types;

pub use cache::MetadataCache;
pub use types::{Metadata, MetadataValue};
