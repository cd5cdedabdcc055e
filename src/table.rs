//! ChainedHashMap: fixed-bucket storage, routing, and chain scans.

use crate::entry::Entry;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::ops::Index;
use std::collections::hash_map::RandomState;
use thiserror::Error;

/// Lookup failure: the queried key has no entry in its computed bucket.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("key not found: {key}")]
pub struct KeyNotFound {
    key: String,
}

impl KeyNotFound {
    fn new<Q>(key: &Q) -> Self
    where
        Q: ?Sized + fmt::Debug,
    {
        Self {
            key: format!("{:?}", key),
        }
    }

    /// The queried key, debug-rendered.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A hash map with a bucket count fixed at construction, resolving
/// collisions by chaining.
///
/// Every operation routes through `hash(key) % bucket_count`; a bucket is
/// an ordered chain of [`Entry`] values that grows without bound. There is
/// no rehashing, no removal by key, and no iteration; overwriting a key
/// removes its old entry and appends the new one to the end of its chain.
#[derive(Clone, Debug)]
pub struct ChainedHashMap<K, V, S = RandomState> {
    hasher: S,
    buckets: Vec<Vec<Entry<K, V>>>,
    len: usize,
}

impl<K, V> ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    /// Create a map with [`Self::DEFAULT_BUCKET_COUNT`] buckets.
    pub fn new() -> Self {
        Self::with_buckets(Self::DEFAULT_BUCKET_COUNT)
    }

    /// Create a map with `bucket_count` empty buckets.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero.
    pub fn with_buckets(bucket_count: usize) -> Self {
        Self::with_buckets_and_hasher(bucket_count, RandomState::new())
    }
}

impl<K, V> Default for ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Bucket count used by [`Self::new`] and [`Self::with_hasher`].
    pub const DEFAULT_BUCKET_COUNT: usize = 10;

    /// Create a map with the default bucket count and the given hasher.
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_buckets_and_hasher(Self::DEFAULT_BUCKET_COUNT, hasher)
    }

    /// Create a map with `bucket_count` empty buckets and the given hasher.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero.
    pub fn with_buckets_and_hasher(bucket_count: usize, hasher: S) -> Self {
        assert!(bucket_count > 0, "bucket count must be positive");
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, Vec::new);
        Self {
            hasher,
            buckets,
            len: 0,
        }
    }

    fn make_hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets, fixed since construction.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Borrow the map's hasher.
    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// The bucket `key` routes to: `hash(key) % bucket_count`.
    ///
    /// Insert and lookup both route through this computation, so the
    /// result is stable for the lifetime of the map.
    pub fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash,
    {
        (self.make_hash(key) % self.buckets.len() as u64) as usize
    }

    /// Borrow the chain stored in bucket `index`. Read-only introspection
    /// for diagnostics and tests.
    ///
    /// # Panics
    ///
    /// Panics if `index >= bucket_count()`.
    pub fn bucket(&self, index: usize) -> &[Entry<K, V>] {
        &self.buckets[index]
    }

    /// Insert `key -> value`, overwriting any existing entry for the key.
    ///
    /// The old entry, if any, is removed from its chain and the new one is
    /// appended to the end, so an overwritten key moves to the back of its
    /// bucket. Returns the displaced value on overwrite.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.make_hash(&key);
        let index = (hash % self.buckets.len() as u64) as usize;
        let candidate = Entry::new(hash, key, value);

        let bucket = &mut self.buckets[index];
        let displaced = bucket
            .iter()
            .position(|e| e.hash() == hash && *e == candidate)
            .map(|at| bucket.remove(at).into_value());
        bucket.push(candidate);

        if displaced.is_none() {
            self.len += 1;
        }
        displaced
    }

    /// Look up the value for `key`, failing with [`KeyNotFound`] when the
    /// key has no entry in its bucket.
    ///
    /// Accepts any borrowed form of the key type, as long as it hashes and
    /// compares like the stored key.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq + fmt::Debug,
    {
        let bucket = &self.buckets[self.bucket_index(key)];
        // Forward scan keeping the last key match. Chains are kept
        // duplicate-free by insert, so at most one entry can match.
        let mut found = None;
        for entry in bucket {
            if entry.key().borrow() == key {
                found = Some(entry.value());
            }
        }
        found.ok_or_else(|| KeyNotFound::new(key))
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let bucket = &self.buckets[self.bucket_index(key)];
        bucket.iter().any(|e| e.key().borrow() == key)
    }
}

impl<K, V, Q, S> Index<&Q> for ChainedHashMap<K, V, S>
where
    K: Eq + Hash + Borrow<Q>,
    Q: ?Sized + Hash + Eq + fmt::Debug,
    S: BuildHasher,
{
    type Output = V;

    /// Indexed read, equivalent to [`ChainedHashMap::get`].
    ///
    /// # Panics
    ///
    /// Panics with the [`KeyNotFound`] message if the key is absent.
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

/// One line per bucket, in bucket order: `<index>: [<entries>]`.
impl<K, V, S> fmt::Display for ChainedHashMap<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bucket) in self.buckets.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}: [", i)?;
            for (at, entry) in bucket.iter().enumerate() {
                if at > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", entry)?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}
