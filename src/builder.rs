use core::num::NonZeroUsize;

use crate::DEFAULT_BUCKET_COUNT;
use crate::DefaultHashBuilder;
use crate::bimap::UnorderedBimap;

/// Configures and creates an [`UnorderedBimap`].
///
/// Defaults: [`DEFAULT_BUCKET_COUNT`] buckets per side, no preallocated
/// entries and [`DefaultHashBuilder`] for both keys and values.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
///
/// use unordered_bimap::Builder;
///
/// let mut bimap = Builder::new()
///     .with_bucket_count(NonZeroUsize::new(101).unwrap())
///     .with_capacity(16)
///     .build();
/// bimap.insert(1, "one");
/// assert_eq!(bimap.bucket_count().get(), 101);
/// ```
#[derive(Debug, Clone)]
pub struct Builder<KS = DefaultHashBuilder, VS = DefaultHashBuilder> {
    bucket_count: NonZeroUsize,
    capacity: usize,
    key_hasher: KS,
    value_hasher: VS,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        Builder {
            bucket_count: DEFAULT_BUCKET_COUNT,
            capacity: 0,
            key_hasher: DefaultHashBuilder::default(),
            value_hasher: DefaultHashBuilder::default(),
        }
    }
}

impl<KS, VS> Builder<KS, VS> {
    /// Sets the number of buckets of both indexes. It never changes for the
    /// life of the bimap, so lookups degrade towards a linear scan once the
    /// entry count grows well past it.
    pub fn with_bucket_count(mut self, bucket_count: NonZeroUsize) -> Self {
        self.bucket_count = bucket_count;
        self
    }

    /// Preallocates room for `capacity` entries.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Replaces the hasher used for keys.
    pub fn with_key_hasher<KS2>(self, key_hasher: KS2) -> Builder<KS2, VS> {
        Builder {
            bucket_count: self.bucket_count,
            capacity: self.capacity,
            key_hasher,
            value_hasher: self.value_hasher,
        }
    }

    /// Replaces the hasher used for values.
    pub fn with_value_hasher<VS2>(self, value_hasher: VS2) -> Builder<KS, VS2> {
        Builder {
            bucket_count: self.bucket_count,
            capacity: self.capacity,
            key_hasher: self.key_hasher,
            value_hasher,
        }
    }

    /// Creates the empty bimap.
    pub fn build<K, V>(self) -> UnorderedBimap<K, V, KS, VS> {
        tracing::debug!(
            bucket_count = self.bucket_count.get(),
            capacity = self.capacity,
            "building bimap"
        );
        UnorderedBimap::from_parts(
            self.bucket_count,
            self.capacity,
            self.key_hasher,
            self.value_hasher,
        )
    }
}
