//! Fixed-size bucket index over arena handles.
//!
//! Each side of the bimap owns one [`BucketIndex`]. A bucket is a collision
//! list of [`Ptr`]s whose element hashed to that bucket; the real comparison
//! is done by the caller through the `eq` closure, the hash only routes.

use alloc::vec::Vec;
use core::hash::{
    BuildHasher,
    Hash,
};
use core::num::NonZeroUsize;

use crate::Ptr;

type Bucket = Vec<Ptr>;

#[derive(Debug, Clone)]
pub(crate) struct BucketIndex<S> {
    /// Empty until the first registration, then exactly `bucket_count` long.
    buckets: Vec<Bucket>,
    bucket_count: NonZeroUsize,
    hasher: S,
}

impl<S> BucketIndex<S> {
    pub(crate) fn new(bucket_count: NonZeroUsize, hasher: S) -> Self {
        BucketIndex {
            buckets: Vec::new(),
            bucket_count,
            hasher,
        }
    }

    pub(crate) fn bucket_count(&self) -> NonZeroUsize {
        self.bucket_count
    }

    pub(crate) fn hasher(&self) -> &S {
        &self.hasher
    }

    fn slot(&self, hash: u64) -> usize {
        (hash % self.bucket_count.get() as u64) as usize
    }

    pub(crate) fn hash<T: Hash + ?Sized>(&self, x: &T) -> u64
    where
        S: BuildHasher,
    {
        self.hasher.hash_one(x)
    }

    pub(crate) fn locate(&self, hash: u64, mut eq: impl FnMut(Ptr) -> bool) -> Option<Ptr> {
        self.buckets
            .get(self.slot(hash))?
            .iter()
            .copied()
            .find(|&ptr| eq(ptr))
    }

    pub(crate) fn contains(&self, hash: u64, eq: impl FnMut(Ptr) -> bool) -> bool {
        self.locate(hash, eq).is_some()
    }

    pub(crate) fn register(&mut self, hash: u64, ptr: Ptr) {
        if self.buckets.is_empty() {
            self.buckets.resize_with(self.bucket_count.get(), Vec::new);
        }
        let slot = self.slot(hash);
        self.buckets[slot].push(ptr);
    }

    pub(crate) fn unregister(&mut self, hash: u64, ptr: Ptr) {
        let slot = self.slot(hash);
        let bucket = &mut self.buckets[slot];
        match bucket.iter().position(|&p| p == ptr) {
            Some(pos) => {
                bucket.remove(pos);
            }
            None => {
                #[cold]
                #[inline(never)]
                fn die() -> ! {
                    panic!("Pointer not found in bucket");
                }
                die()
            }
        }
    }

    /// Drops every bucket. Storage is allocated again by the next
    /// registration.
    pub(crate) fn clear(&mut self) {
        self.buckets = Vec::new();
    }

    #[cfg(test)]
    pub(crate) fn bucket_len(&self, hash: u64) -> usize {
        self.buckets.get(self.slot(hash)).map_or(0, Vec::len)
    }
}
