#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

mod arena;
pub mod bimap;
mod builder;
mod error;
mod index;
#[cfg(test)]
mod test_util;

extern crate alloc;

use core::num::NonZeroU32;
use core::num::NonZeroUsize;

/// The hasher used on both sides when none is configured.
pub type DefaultHashBuilder = hashbrown::DefaultHashBuilder;

/// Number of buckets in each index unless configured otherwise. Prime, to
/// spread hashes that share common factors.
pub const DEFAULT_BUCKET_COUNT: NonZeroUsize = match NonZeroUsize::new(200_003) {
    Some(count) => count,
    None => panic!("bucket count must be non-zero"),
};

/// An insertion-ordered bimap using the default hasher on both sides.
///
/// This is the main type alias. For custom hashers, use
/// [`bimap::UnorderedBimap`] directly or go through a [`Builder`].
///
/// # Examples
///
/// ```
/// use unordered_bimap::UnorderedBimap;
///
/// let mut bimap = UnorderedBimap::new();
/// bimap.insert("a", 1);
/// bimap.insert("b", 2);
///
/// assert_eq!(bimap.at_left(&"b"), Ok(&2));
/// assert_eq!(bimap.at_right(&1), Ok(&"a"));
///
/// let pairs: Vec<_> = bimap.iter().collect();
/// assert_eq!(pairs, [(&"a", &1), (&"b", &2)]);
/// ```
pub type UnorderedBimap<K, V> =
    crate::bimap::UnorderedBimap<K, V, DefaultHashBuilder, DefaultHashBuilder>;

pub use bimap::Cursor;
pub use bimap::CursorMut;
pub use bimap::IntoIter;
pub use bimap::Iter;
pub use bimap::Keys;
pub use bimap::Values;
pub use builder::Builder;
pub use error::Error;
pub use error::Result;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
/// A handle identifying one entry of a bimap.
///
/// Handles are **non-generational**: once an entry is erased its slot may be
/// handed to a later insert, and an old handle will then name the new entry.
///
/// # Examples
///
/// ```
/// use unordered_bimap::UnorderedBimap;
///
/// let mut bimap = UnorderedBimap::new();
/// let cursor = bimap.insert("key", 42);
/// let ptr = cursor.ptr().unwrap();
/// assert_eq!(bimap.find_left(&"key").ptr(), Some(ptr));
/// ```
pub struct Ptr(NonZeroU32);

impl core::fmt::Debug for Ptr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Ptr({})", self.0.get() - 1)
    }
}

impl Ptr {
    pub(crate) fn unchecked_from(index: usize) -> Self {
        debug_assert!(
            index < u32::MAX as usize,
            "Index too large to fit in Ptr: {index}"
        );
        Ptr(NonZeroU32::MIN.saturating_add(index as u32))
    }

    pub(crate) fn unchecked_get(self) -> usize {
        self.0.get() as usize - 1
    }
}
