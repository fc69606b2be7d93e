/// Failure of a checked lookup.
///
/// Only [`at_left`](crate::bimap::UnorderedBimap::at_left) and
/// [`at_right`](crate::bimap::UnorderedBimap::at_right) report absence this
/// way; every other accessor returns `bool`, `Option` or the end cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// No entry has the requested key.
    #[error("key not present in bimap")]
    KeyNotFound,

    /// No entry has the requested value.
    #[error("value not present in bimap")]
    ValueNotFound,
}

/// Result type of the checked lookups.
pub type Result<T, E = Error> = core::result::Result<T, E>;
