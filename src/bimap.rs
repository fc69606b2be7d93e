//! Insertion-ordered bimap implementation.
//!
//! This module provides the core [`UnorderedBimap`] type together with its
//! [`Cursor`]s and iterators. Every pair is stored once, in an arena of entries
//! chained in insertion order, and is reachable in O(1) on average both by its
//! key and by its value.
//!
//! # Examples
//!
//! ```
//! use unordered_bimap::UnorderedBimap;
//!
//! let mut bimap = UnorderedBimap::new();
//! bimap.insert("first", 1);
//! bimap.insert("second", 2);
//!
//! // A key or a value that is already present rejects the whole pair
//! assert!(bimap.insert("third", 1).is_end());
//!
//! // Iteration preserves insertion order
//! let pairs: Vec<_> = bimap.iter().collect();
//! assert_eq!(pairs, [(&"first", &1), (&"second", &2)]);
//! ```

use core::fmt;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::num::NonZeroUsize;

use crate::DEFAULT_BUCKET_COUNT;
use crate::DefaultHashBuilder;
use crate::Error;
use crate::Ptr;
use crate::Result;
use crate::arena::Arena;
use crate::arena::FreedSlot;
use crate::arena::LLSlot;
use crate::builder::Builder;
use crate::index::BucketIndex;

mod cursor;
mod iter;
#[cfg(test)]
mod proptests;

pub use cursor::Cursor;
pub use cursor::CursorMut;
pub use iter::IntoIter;
pub use iter::Iter;
pub use iter::Keys;
pub use iter::Values;

#[cold]
#[inline(never)]
fn erase_at_end() -> ! {
    panic!("Attempted to erase the end cursor");
}

#[cold]
#[inline(never)]
fn stale_cursor() -> ! {
    panic!("Cursor does not point to a live entry");
}

/// A map with unique keys and unique values, ordered by insertion.
///
/// Both sides are indexed by a fixed-size hash table of collision lists, so a
/// pair can be found in O(1) on average from its key or from its value. The
/// pairs themselves live in a single arena and are chained in the order they
/// were inserted; erasing an entry never reorders the others.
///
/// Because both the key and the value are indexed, neither can be mutated in
/// place. To change a pair, erase it and insert the new one.
///
/// The generic parameters are:
/// - `K`: Key type, must implement `Hash + Eq`
/// - `V`: Value type, must implement `Hash + Eq`
/// - `KS`: Hash builder for keys
/// - `VS`: Hash builder for values
///
/// # Examples
///
/// ```
/// use unordered_bimap::UnorderedBimap;
///
/// let mut bimap = UnorderedBimap::new();
/// bimap.insert(4, 10);
/// bimap.insert(10, 4);
///
/// assert_eq!(bimap.at_left(&10), Ok(&4));
/// let cursor = bimap.find_right(&4);
/// assert_eq!(bimap.key(cursor), Some(&10));
/// ```
pub struct UnorderedBimap<K, V, KS = DefaultHashBuilder, VS = DefaultHashBuilder> {
    head: Option<Ptr>,
    tail: Option<Ptr>,
    len: usize,
    nodes: Arena<K, V>,
    left: BucketIndex<KS>,
    right: BucketIndex<VS>,
}

impl<K, V> UnorderedBimap<K, V> {
    /// Creates an empty bimap with the default configuration.
    ///
    /// No memory is allocated until the first insert.
    ///
    /// # Examples
    ///
    /// ```
    /// use unordered_bimap::UnorderedBimap;
    ///
    /// let mut bimap: UnorderedBimap<&str, i32> = UnorderedBimap::new();
    /// assert!(bimap.is_empty());
    /// bimap.insert("key", 42);
    /// assert!(!bimap.is_empty());
    /// ```
    pub fn new() -> Self {
        Builder::new().build()
    }

    /// Creates an empty bimap with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Builder::new().with_capacity(capacity).build()
    }

    /// Returns a [`Builder`] for configuring bucket count and hashers.
    pub fn builder() -> Builder {
        Builder::new()
    }
}

impl<K, V, KS, VS> UnorderedBimap<K, V, KS, VS> {
    pub(crate) fn from_parts(
        bucket_count: NonZeroUsize,
        capacity: usize,
        key_hasher: KS,
        value_hasher: VS,
    ) -> Self {
        UnorderedBimap {
            head: None,
            tail: None,
            len: 0,
            nodes: Arena::with_capacity(capacity),
            left: BucketIndex::new(bucket_count, key_hasher),
            right: BucketIndex::new(bucket_count, value_hasher),
        }
    }

    /// Creates an empty bimap with the given hashers and the default bucket
    /// count.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::hash::RandomState;
    ///
    /// use unordered_bimap::bimap::UnorderedBimap;
    ///
    /// let mut bimap = UnorderedBimap::with_hashers(RandomState::new(), RandomState::new());
    /// bimap.insert("key", 42);
    /// assert_eq!(bimap.at_right(&42), Ok(&"key"));
    /// ```
    pub fn with_hashers(key_hasher: KS, value_hasher: VS) -> Self {
        Self::from_parts(DEFAULT_BUCKET_COUNT, 0, key_hasher, value_hasher)
    }

    /// Returns the number of buckets in each index.
    pub fn bucket_count(&self) -> NonZeroUsize {
        self.left.bucket_count()
    }

    /// Returns the hasher used for keys.
    pub fn key_hasher(&self) -> &KS {
        self.left.hasher()
    }

    /// Returns the hasher used for values.
    pub fn value_hasher(&self) -> &VS {
        self.right.hasher()
    }

    /// Returns the number of pairs in the bimap.
    ///
    /// # Examples
    ///
    /// ```
    /// use unordered_bimap::UnorderedBimap;
    ///
    /// let mut a = UnorderedBimap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the bimap contains no pairs.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a cursor at the first pair, or the end cursor if the bimap is
    /// empty.
    pub fn begin(&self) -> Cursor {
        Cursor { ptr: self.head }
    }

    /// Returns the end cursor, one past the last pair.
    ///
    /// The end cursor never names a pair. It is what lookups return on a miss
    /// and what [`insert`](Self::insert) returns on rejection.
    pub fn end(&self) -> Cursor {
        Cursor::END
    }

    fn live_links(&self, ptr: Ptr) -> &LLSlot<K, V> {
        if !self.nodes.is_occupied(ptr) {
            stale_cursor();
        }
        self.nodes.links(ptr)
    }

    /// Returns the cursor following `cursor` in insertion order.
    ///
    /// Advancing from the last pair gives the end cursor; advancing the end
    /// cursor leaves it at the end.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` names an erased entry.
    pub fn advance(&self, cursor: Cursor) -> Cursor {
        match cursor.ptr {
            Some(ptr) => Cursor {
                ptr: self.live_links(ptr).next(),
            },
            None => cursor,
        }
    }

    /// Returns the cursor preceding `cursor` in insertion order.
    ///
    /// Retreating from the end cursor moves to whatever pair is last *now*,
    /// so an end cursor obtained before further inserts still steps back onto
    /// the newest pair. Retreating from the first pair gives the end cursor.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` names an erased entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use unordered_bimap::UnorderedBimap;
    ///
    /// let mut bimap = UnorderedBimap::new();
    /// let end = bimap.end();
    /// bimap.insert(1, 'a');
    /// bimap.insert(2, 'b');
    ///
    /// let last = bimap.retreat(end);
    /// assert_eq!(bimap.get(last), Some((&2, &'b')));
    /// ```
    pub fn retreat(&self, cursor: Cursor) -> Cursor {
        match cursor.ptr {
            Some(ptr) => Cursor {
                ptr: self.live_links(ptr).prev(),
            },
            None => Cursor { ptr: self.tail },
        }
    }

    /// Returns the pair named by `cursor`, or `None` for the end cursor or a
    /// cursor whose entry has been erased.
    pub fn get(&self, cursor: Cursor) -> Option<(&K, &V)> {
        let ptr = cursor.ptr?;
        if !self.nodes.is_occupied(ptr) {
            return None;
        }
        let data = &self.nodes[ptr];
        Some((&data.key, &data.value))
    }

    /// Returns the key named by `cursor`.
    pub fn key(&self, cursor: Cursor) -> Option<&K> {
        self.get(cursor).map(|(k, _)| k)
    }

    /// Returns the value named by `cursor`.
    pub fn value(&self, cursor: Cursor) -> Option<&V> {
        self.get(cursor).map(|(_, v)| v)
    }

    /// Returns the oldest pair.
    pub fn front(&self) -> Option<(&K, &V)> {
        self.get(self.begin())
    }

    /// Returns the newest pair.
    pub fn back(&self) -> Option<(&K, &V)> {
        self.get(Cursor { ptr: self.tail })
    }

    /// Returns an iterator over the pairs in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use unordered_bimap::UnorderedBimap;
    ///
    /// let mut bimap = UnorderedBimap::new();
    /// bimap.insert("a", 1);
    /// bimap.insert("b", 2);
    /// bimap.insert("c", 3);
    ///
    /// let reversed: Vec<_> = bimap.iter().rev().map(|(k, _)| *k).collect();
    /// assert_eq!(reversed, ["c", "b", "a"]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            forward_ptr: self.head,
            reverse_ptr: self.tail,
            nodes: &self.nodes,
        }
    }

    /// Returns an iterator over the pairs from `cursor` (inclusive) to the
    /// end, in insertion order. The end cursor yields nothing.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` names an erased entry.
    pub fn iter_from(&self, cursor: Cursor) -> Iter<'_, K, V> {
        match cursor.ptr {
            Some(ptr) => {
                self.live_links(ptr);
                Iter {
                    forward_ptr: Some(ptr),
                    reverse_ptr: self.tail,
                    nodes: &self.nodes,
                }
            }
            None => Iter {
                forward_ptr: None,
                reverse_ptr: None,
                nodes: &self.nodes,
            },
        }
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { iter: self.iter() }
    }

    /// Returns an iterator over the values in insertion order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { iter: self.iter() }
    }

    /// Creates a mutable cursor positioned at `cursor`.
    ///
    /// # Examples
    ///
    /// ```
    /// use unordered_bimap::UnorderedBimap;
    ///
    /// let mut bimap: UnorderedBimap<i32, i32> = (0..6).map(|i| (i, i * 10)).collect();
    ///
    /// let begin = bimap.begin();
    /// let mut cursor = bimap.cursor_mut(begin);
    /// while let Some((key, _)) = cursor.current() {
    ///     if key % 2 == 0 {
    ///         cursor.remove_current();
    ///     } else {
    ///         cursor.move_next();
    ///     }
    /// }
    ///
    /// let keys: Vec<_> = bimap.keys().copied().collect();
    /// assert_eq!(keys, [1, 3, 5]);
    /// ```
    pub fn cursor_mut(&mut self, cursor: Cursor) -> CursorMut<'_, K, V, KS, VS> {
        CursorMut {
            cursor,
            bimap: self,
        }
    }

    /// Removes every pair.
    ///
    /// The arena keeps its allocation; bucket storage is released.
    pub fn clear(&mut self) {
        tracing::debug!(len = self.len, "clearing bimap");
        self.nodes.clear();
        self.left.clear();
        self.right.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Splices `ptr` out of the sequence and both indexes and frees it.
    ///
    /// Returns the cursor of the following entry and the removed pair.
    fn unlink_and_destroy(&mut self, ptr: Ptr) -> (Cursor, K, V) {
        let FreedSlot { data, next } = self.nodes.free(ptr);

        match data.prev {
            Some(prev) => *self.nodes.links_mut(prev).next_mut() = next,
            None => self.head = next,
        }
        match next {
            Some(next) => *self.nodes.links_mut(next).prev_mut() = data.prev,
            None => self.tail = data.prev,
        }

        self.left.unregister(data.key_hash, ptr);
        self.right.unregister(data.value_hash, ptr);
        self.len -= 1;
        tracing::trace!(len = self.len, "erased entry");

        (Cursor { ptr: next }, data.key, data.value)
    }

    /// Erases the pair at `cursor` and returns the cursor of the pair that
    /// followed it, or the end cursor if it was the last one.
    ///
    /// Only `cursor` itself is invalidated; cursors at other pairs stay valid.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` is the end cursor or names an erased entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use unordered_bimap::UnorderedBimap;
    ///
    /// let mut bimap = UnorderedBimap::new();
    /// let first = bimap.insert(1, 2);
    /// bimap.insert(5, 10);
    /// bimap.insert(100, 200);
    ///
    /// let next = bimap.erase(first);
    /// assert_eq!(bimap.get(next), Some((&5, &10)));
    /// assert_eq!(bimap.len(), 2);
    /// ```
    pub fn erase(&mut self, cursor: Cursor) -> Cursor {
        let Some(ptr) = cursor.ptr else {
            erase_at_end();
        };
        self.unlink_and_destroy(ptr).0
    }

    /// Erases the pairs in `[first, last)` and returns `last`.
    ///
    /// `last` is the fence: it is never erased by this call.
    ///
    /// # Panics
    ///
    /// Panics if `last` is not reachable by advancing from `first`; the
    /// pairs before the point of failure have already been erased by then.
    ///
    /// # Examples
    ///
    /// ```
    /// use unordered_bimap::UnorderedBimap;
    ///
    /// let mut bimap = UnorderedBimap::new();
    /// bimap.insert(1, 2);
    /// let first = bimap.insert(2, 3);
    /// bimap.insert(3, 4);
    /// let last = bimap.insert(4, 5);
    /// bimap.insert(5, 6);
    ///
    /// let at = bimap.erase_range(first, last);
    /// assert_eq!(bimap.key(at), Some(&4));
    /// assert_eq!(bimap.len(), 3);
    ///
    /// bimap.erase_range(bimap.begin(), bimap.end());
    /// assert!(bimap.is_empty());
    /// ```
    pub fn erase_range(&mut self, first: Cursor, last: Cursor) -> Cursor {
        let mut cursor = first;
        while cursor != last {
            cursor = self.erase(cursor);
        }
        cursor
    }

    /// Removes and returns the oldest pair.
    pub fn pop_front(&mut self) -> Option<(K, V)> {
        let head = self.head?;
        let (_, key, value) = self.unlink_and_destroy(head);
        Some((key, value))
    }

    /// Removes and returns the newest pair.
    pub fn pop_back(&mut self) -> Option<(K, V)> {
        let tail = self.tail?;
        let (_, key, value) = self.unlink_and_destroy(tail);
        Some((key, value))
    }

    /// Retains only the pairs for which `f` returns `true`, visiting them in
    /// insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use unordered_bimap::UnorderedBimap;
    ///
    /// let mut bimap: UnorderedBimap<i32, char> =
    ///     [(1, 'a'), (2, 'b'), (3, 'c'), (4, 'd')].into_iter().collect();
    /// bimap.retain(|k, _| k % 2 == 0);
    ///
    /// let pairs: Vec<_> = bimap.iter().collect();
    /// assert_eq!(pairs, [(&2, &'b'), (&4, &'d')]);
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        let mut cursor = self.head;
        while let Some(ptr) = cursor {
            cursor = self.nodes.links(ptr).next();
            let data = &self.nodes[ptr];
            if !f(&data.key, &data.value) {
                self.unlink_and_destroy(ptr);
            }
        }
    }

    /// Moves the contents out, leaving `self` empty but fully usable with the
    /// same bucket count and hashers.
    ///
    /// # Examples
    ///
    /// ```
    /// use unordered_bimap::UnorderedBimap;
    ///
    /// let mut donor = UnorderedBimap::new();
    /// donor.insert(1, 2);
    ///
    /// let taken = donor.take();
    /// assert_eq!(taken.at_left(&1), Ok(&2));
    /// assert!(donor.is_empty());
    ///
    /// donor.insert(1, 2);
    /// assert_eq!(donor, taken);
    /// ```
    pub fn take(&mut self) -> Self
    where
        KS: Clone,
        VS: Clone,
    {
        let empty = Self::from_parts(
            self.bucket_count(),
            0,
            self.left.hasher().clone(),
            self.right.hasher().clone(),
        );
        tracing::debug!(len = self.len, "moving bimap out");
        core::mem::replace(self, empty)
    }
}

impl<K, V, KS, VS> UnorderedBimap<K, V, KS, VS>
where
    K: Hash + Eq,
    V: Hash + Eq,
    KS: BuildHasher,
    VS: BuildHasher,
{
    fn locate_left(&self, hash: u64, key: &K) -> Option<Ptr> {
        self.left.locate(hash, |ptr| self.nodes[ptr].key == *key)
    }

    fn locate_right(&self, hash: u64, value: &V) -> Option<Ptr> {
        self.right.locate(hash, |ptr| self.nodes[ptr].value == *value)
    }

    fn find_left_ptr(&self, key: &K) -> Option<Ptr> {
        self.locate_left(self.left.hash(key), key)
    }

    fn find_right_ptr(&self, value: &V) -> Option<Ptr> {
        self.locate_right(self.right.hash(value), value)
    }

    fn insert_at_tail(&mut self, key: K, value: V, key_hash: u64, value_hash: u64) -> Cursor {
        let ptr = self.nodes.alloc(key, value, key_hash, value_hash, self.tail);
        match self.tail {
            Some(tail) => *self.nodes.links_mut(tail).next_mut() = Some(ptr),
            None => self.head = Some(ptr),
        }
        self.tail = Some(ptr);

        self.left.register(key_hash, ptr);
        self.right.register(value_hash, ptr);
        self.len += 1;

        Cursor::at(ptr)
    }

    /// Inserts a pair at the end of the bimap, unless its key or its value is
    /// already present.
    ///
    /// Returns a cursor at the new pair, or the end cursor if the pair was
    /// rejected. The return value does not say which side collided; the
    /// bimap is left untouched either way.
    ///
    /// # Examples
    ///
    /// ```
    /// use unordered_bimap::UnorderedBimap;
    ///
    /// let mut bimap = UnorderedBimap::new();
    /// bimap.insert(1, 2);
    /// bimap.insert(2, 3);
    ///
    /// assert_eq!(bimap.insert(2, -1), bimap.end());
    /// assert_eq!(bimap.insert(7, 3), bimap.end());
    /// assert_eq!(bimap.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Cursor {
        self.try_insert(key, value).unwrap_or(Cursor::END)
    }

    /// Inserts a pair at the end of the bimap, handing it back if its key or
    /// its value is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use unordered_bimap::UnorderedBimap;
    ///
    /// let mut bimap = UnorderedBimap::new();
    /// assert!(bimap.try_insert(String::from("a"), 1).is_ok());
    ///
    /// let rejected = bimap.try_insert(String::from("b"), 1).unwrap_err();
    /// assert_eq!(rejected, (String::from("b"), 1));
    /// ```
    pub fn try_insert(&mut self, key: K, value: V) -> Result<Cursor, (K, V)> {
        let key_hash = self.left.hash(&key);
        let value_hash = self.right.hash(&value);

        let key_taken = self.locate_left(key_hash, &key).is_some();
        let value_taken = self.locate_right(value_hash, &value).is_some();
        if key_taken || value_taken {
            tracing::trace!(key_taken, value_taken, "rejected duplicate pair");
            return Err((key, value));
        }

        Ok(self.insert_at_tail(key, value, key_hash, value_hash))
    }

    /// Returns a cursor at the pair with the given key, or the end cursor.
    pub fn find_left(&self, key: &K) -> Cursor {
        Cursor {
            ptr: self.find_left_ptr(key),
        }
    }

    /// Returns a cursor at the pair with the given value, or the end cursor.
    pub fn find_right(&self, value: &V) -> Cursor {
        Cursor {
            ptr: self.find_right_ptr(value),
        }
    }

    /// Returns the value paired with `key`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if no pair has this key.
    ///
    /// # Examples
    ///
    /// ```
    /// use unordered_bimap::Error;
    /// use unordered_bimap::UnorderedBimap;
    ///
    /// let mut bimap = UnorderedBimap::new();
    /// bimap.insert(4, 3);
    /// assert_eq!(bimap.at_left(&4), Ok(&3));
    /// assert_eq!(bimap.at_left(&1), Err(Error::KeyNotFound));
    /// ```
    pub fn at_left(&self, key: &K) -> Result<&V> {
        self.get_left(key).ok_or(Error::KeyNotFound)
    }

    /// Returns the key paired with `value`.
    ///
    /// # Errors
    ///
    /// [`Error::ValueNotFound`] if no pair has this value.
    pub fn at_right(&self, value: &V) -> Result<&K> {
        self.get_right(value).ok_or(Error::ValueNotFound)
    }

    /// Returns the value paired with `key`, if any.
    pub fn get_left(&self, key: &K) -> Option<&V> {
        self.find_left_ptr(key).map(|ptr| &self.nodes[ptr].value)
    }

    /// Returns the key paired with `value`, if any.
    pub fn get_right(&self, value: &V) -> Option<&K> {
        self.find_right_ptr(value).map(|ptr| &self.nodes[ptr].key)
    }

    /// Returns `true` if a pair has this key.
    pub fn present_left(&self, key: &K) -> bool {
        self.left
            .contains(self.left.hash(key), |ptr| self.nodes[ptr].key == *key)
    }

    /// Returns `true` if a pair has this value.
    pub fn present_right(&self, value: &V) -> bool {
        self.right.contains(self.right.hash(value), |ptr| {
            self.nodes[ptr].value == *value
        })
    }

    /// Erases the pair with the given key. Returns whether one was found.
    ///
    /// # Examples
    ///
    /// ```
    /// use unordered_bimap::UnorderedBimap;
    ///
    /// let mut bimap = UnorderedBimap::new();
    /// bimap.insert(111, 222);
    /// bimap.insert(333, 444);
    ///
    /// assert!(bimap.erase_left(&111));
    /// assert!(!bimap.erase_right(&333333));
    /// assert_eq!(bimap.len(), 1);
    /// ```
    pub fn erase_left(&mut self, key: &K) -> bool {
        self.remove_left(key).is_some()
    }

    /// Erases the pair with the given value. Returns whether one was found.
    pub fn erase_right(&mut self, value: &V) -> bool {
        self.remove_right(value).is_some()
    }

    /// Removes the pair with the given key and returns it.
    pub fn remove_left(&mut self, key: &K) -> Option<(K, V)> {
        let ptr = self.find_left_ptr(key)?;
        let (_, key, value) = self.unlink_and_destroy(ptr);
        Some((key, value))
    }

    /// Removes the pair with the given value and returns it.
    pub fn remove_right(&mut self, value: &V) -> Option<(K, V)> {
        let ptr = self.find_right_ptr(value)?;
        let (_, key, value) = self.unlink_and_destroy(ptr);
        Some((key, value))
    }
}

impl<K, V, KS, VS> Clone for UnorderedBimap<K, V, KS, VS>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    KS: BuildHasher + Clone,
    VS: BuildHasher + Clone,
{
    fn clone(&self) -> Self {
        let mut bimap = Self::from_parts(
            self.bucket_count(),
            self.len,
            self.left.hasher().clone(),
            self.right.hasher().clone(),
        );
        bimap.extend(self.iter());
        bimap
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.left = BucketIndex::new(source.bucket_count(), source.left.hasher().clone());
        self.right = BucketIndex::new(source.bucket_count(), source.right.hasher().clone());
        self.nodes.reserve(source.len);
        self.extend(source.iter());
    }
}

impl<K: fmt::Debug, V: fmt::Debug, KS, VS> fmt::Debug for UnorderedBimap<K, V, KS, VS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, KS: Default, VS: Default> Default for UnorderedBimap<K, V, KS, VS> {
    fn default() -> Self {
        Self::with_hashers(KS::default(), VS::default())
    }
}

/// Order-sensitive: two bimaps holding the same pairs in a different
/// insertion order are not equal.
impl<K, V, KS, VS> PartialEq for UnorderedBimap<K, V, KS, VS>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, KS, VS> Eq for UnorderedBimap<K, V, KS, VS> {}

impl<K, V, KS, VS> FromIterator<(K, V)> for UnorderedBimap<K, V, KS, VS>
where
    K: Hash + Eq,
    V: Hash + Eq,
    KS: BuildHasher + Default,
    VS: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bimap = Self::default();
        bimap.extend(iter);
        bimap
    }
}

/// Pairs whose key or value is already present are skipped.
impl<K, V, KS, VS> Extend<(K, V)> for UnorderedBimap<K, V, KS, VS>
where
    K: Hash + Eq,
    V: Hash + Eq,
    KS: BuildHasher,
    VS: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V, KS, VS> Extend<(&'a K, &'a V)> for UnorderedBimap<K, V, KS, VS>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    KS: BuildHasher,
    VS: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key.clone(), value.clone());
        }
    }
}

impl<K, V, KS, VS> IntoIterator for UnorderedBimap<K, V, KS, VS> {
    type IntoIter = IntoIter<K, V>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            nodes: self.nodes,
            forward_ptr: self.head,
            reverse_ptr: self.tail,
        }
    }
}

impl<'a, K, V, KS, VS> IntoIterator for &'a UnorderedBimap<K, V, KS, VS> {
    type IntoIter = Iter<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
