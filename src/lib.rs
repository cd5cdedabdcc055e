//! chained-hashmap: a fixed-bucket hash map that resolves collisions by
//! separate chaining.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: the smallest useful associative container whose interesting
//!   behavior is its own hashing, bucket placement, and chain scans.
//! - Layers:
//!   - Entry<K, V>: an immutable key/value pair tagged with the
//!     precomputed hash of its key; equality is by key only, so a new
//!     entry can displace an older one sharing the same key.
//!   - ChainedHashMap<K, V, S>: a fixed-length vector of bucket chains;
//!     routes every operation through `hash(key) % bucket_count`.
//!
//! Constraints
//! - The bucket count is chosen at construction (default 10) and never
//!   changes: no growth, no rehashing, no load-factor policy. Chains grow
//!   without bound instead.
//! - At most one entry per key exists at any time. An overwrite removes
//!   the old entry from its chain and appends the new one at the end.
//! - Single-threaded: a plain owned value mutated through `&mut self`;
//!   callers wanting shared access synchronize externally.
//! - No removal by key and no iteration; `Display` renders the bucket
//!   layout for diagnostics.
//!
//! Hasher and lookup invariants
//! - Each entry stores the `u64` hash computed when it was inserted;
//!   stored keys are never rehashed. Lookups hash the query with the same
//!   `BuildHasher`, so insert and lookup always agree on a bucket.
//! - Lookups scan the whole chain and keep the last key match. Insert
//!   keeps chains duplicate-free, so at most one match exists; the
//!   scan-to-end policy mirrors the overwrite ordering rather than adding
//!   semantics of its own.
//!
//! Failure model
//! - `get` (and the indexed read) is the only fallible operation: it
//!   returns `KeyNotFound` carrying the queried key. `insert` always
//!   succeeds; construction only rejects a zero bucket count.

mod entry;
mod table;

// Public surface
pub use entry::Entry;
pub use table::{ChainedHashMap, KeyNotFound};
