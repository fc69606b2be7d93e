use crate::Ptr;
use crate::bimap::Iter;
use crate::bimap::UnorderedBimap;

/// A position in an [`UnorderedBimap`]: either one of its pairs or the end.
///
/// A `Cursor` is a plain handle. It borrows nothing, so it can be kept across
/// mutations of the bimap and handed back to it later, like the cursors
/// returned by [`insert`](UnorderedBimap::insert) and
/// [`find_left`](UnorderedBimap::find_left). Navigation and dereferencing go
/// through the bimap itself:
///
/// ```
/// use unordered_bimap::UnorderedBimap;
///
/// let mut bimap = UnorderedBimap::new();
/// let first = bimap.insert('a', 1);
/// bimap.insert('b', 2);
///
/// let second = bimap.advance(first);
/// assert_eq!(bimap.get(second), Some((&'b', &2)));
/// assert!(bimap.advance(second).is_end());
/// ```
///
/// A cursor stays valid until its own pair is erased. Erasing or inserting
/// other pairs does not affect it. The end cursor is always valid and never
/// names a pair.
///
/// Cursors are **non-generational**. Once its pair is erased, the cursor may
/// name whichever pair later reuses the slot; using it that way is a logic
/// error, though never undefined behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cursor {
    pub(crate) ptr: Option<Ptr>,
}

impl Cursor {
    pub(crate) const END: Cursor = Cursor { ptr: None };

    pub(crate) fn at(ptr: Ptr) -> Self {
        Cursor { ptr: Some(ptr) }
    }

    /// Returns `true` for the end cursor.
    pub fn is_end(self) -> bool {
        self.ptr.is_none()
    }

    /// Returns the handle of the slot this cursor names, or `None` at the end.
    pub fn ptr(self) -> Option<Ptr> {
        self.ptr
    }
}

/// A cursor holding a mutable borrow of its bimap.
///
/// A `CursorMut` is like an iterator, except that it can freely seek
/// back-and-forth and can remove pairs while walking. Moving past the last
/// pair reaches the end position; moving back from the end reaches the last
/// pair.
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
/// let start = bimap.find_left(&"b");
/// let mut cursor = bimap.cursor_mut(start);
/// assert_eq!(cursor.remove_prev(), Some(("a", 1)));
/// assert_eq!(cursor.remove_current(), Some(("b", 2)));
/// assert_eq!(cursor.current(), Some((&"c", &3)));
/// assert!(cursor.at_head());
/// ```
#[derive(Debug)]
pub struct CursorMut<'m, K, V, KS, VS> {
    pub(crate) cursor: Cursor,
    pub(crate) bimap: &'m mut UnorderedBimap<K, V, KS, VS>,
}

impl<'m, K, V, KS, VS> CursorMut<'m, K, V, KS, VS> {
    /// Returns the detached [`Cursor`] for the current position.
    pub fn position(&self) -> Cursor {
        self.cursor
    }

    /// Returns `true` if the cursor is at the end position.
    pub fn is_end(&self) -> bool {
        self.cursor.is_end()
    }

    /// Checks if the cursor is at the first pair.
    pub fn at_head(&self) -> bool {
        !self.cursor.is_end() && self.cursor.ptr == self.bimap.head
    }

    /// Checks if the cursor is at the last pair.
    pub fn at_tail(&self) -> bool {
        !self.cursor.is_end() && self.cursor.ptr == self.bimap.tail
    }

    /// Returns the pair at the cursor's current position.
    pub fn current(&self) -> Option<(&K, &V)> {
        self.bimap.get(self.cursor)
    }

    /// Returns the bimap this cursor borrows.
    pub fn bimap(&self) -> &UnorderedBimap<K, V, KS, VS> {
        self.bimap
    }

    /// Moves to the next pair, or to the end after the last one. Stays put
    /// at the end.
    pub fn move_next(&mut self) {
        self.cursor = self.bimap.advance(self.cursor);
    }

    /// Moves to the previous pair. From the end this is the last pair; from
    /// the first pair it is the end.
    pub fn move_prev(&mut self) {
        self.cursor = self.bimap.retreat(self.cursor);
    }

    /// Returns an iterator from the current position to the end.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.bimap.iter_from(self.cursor)
    }

    /// Removes the pair at the current position and moves to the pair that
    /// followed it.
    pub fn remove_current(&mut self) -> Option<(K, V)> {
        let ptr = self.cursor.ptr?;
        let (next, key, value) = self.bimap.unlink_and_destroy(ptr);
        self.cursor = next;
        Some((key, value))
    }

    /// Removes the pair before the current position. At the end this is the
    /// last pair.
    pub fn remove_prev(&mut self) -> Option<(K, V)> {
        let prev = self.bimap.retreat(self.cursor).ptr?;
        let (_, key, value) = self.bimap.unlink_and_destroy(prev);
        Some((key, value))
    }

    /// Removes the pair after the current position. There is none at the
    /// end.
    pub fn remove_next(&mut self) -> Option<(K, V)> {
        let next = self.bimap.advance(self.cursor).ptr?;
        let (_, key, value) = self.bimap.unlink_and_destroy(next);
        Some((key, value))
    }
}
