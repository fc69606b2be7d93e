use crate::Ptr;
use crate::arena::Arena;
use crate::arena::FreedSlot;

#[derive(Debug)]
/// An iterator over the pairs of an `UnorderedBimap`, in insertion order.
///
/// This struct is created by the [`iter`] and [`iter_from`] methods on
/// [`UnorderedBimap`]. See their documentation for more.
///
/// [`iter`]: crate::bimap::UnorderedBimap::iter
/// [`iter_from`]: crate::bimap::UnorderedBimap::iter_from
/// [`UnorderedBimap`]: crate::bimap::UnorderedBimap
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
/// for (key, value) in bimap.iter() {
///     println!("{key} <-> {value}");
/// }
/// ```
pub struct Iter<'a, K, V> {
    pub(crate) forward_ptr: Option<Ptr>,
    pub(crate) reverse_ptr: Option<Ptr>,
    pub(crate) nodes: &'a Arena<K, V>,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            forward_ptr: self.forward_ptr,
            reverse_ptr: self.reverse_ptr,
            nodes: self.nodes,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let ptr = self.forward_ptr?;
        if self.forward_ptr == self.reverse_ptr {
            self.forward_ptr = None;
            self.reverse_ptr = None;
        } else {
            self.forward_ptr = self.nodes.links(ptr).next();
        }

        let data = &self.nodes[ptr];
        Some((&data.key, &data.value))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let ptr = self.reverse_ptr?;
        if self.reverse_ptr == self.forward_ptr {
            self.reverse_ptr = None;
            self.forward_ptr = None;
        } else {
            self.reverse_ptr = self.nodes.links(ptr).prev();
        }

        let data = &self.nodes[ptr];
        Some((&data.key, &data.value))
    }
}

#[derive(Debug)]
/// An owning iterator over the pairs of an `UnorderedBimap`.
///
/// This struct is created by the [`into_iter`] method on
/// [`UnorderedBimap`](crate::bimap::UnorderedBimap) (provided by the
/// [`IntoIterator`] trait). Pairs that are not yielded are dropped with the
/// iterator.
///
/// [`into_iter`]: IntoIterator::into_iter
///
/// # Examples
///
/// ```
/// use unordered_bimap::UnorderedBimap;
///
/// let mut bimap = UnorderedBimap::new();
/// bimap.insert(String::from("a"), 1);
/// bimap.insert(String::from("b"), 2);
///
/// let keys: Vec<String> = bimap.into_iter().map(|(k, _)| k).collect();
/// assert_eq!(keys, ["a", "b"]);
/// ```
pub struct IntoIter<K, V> {
    pub(crate) nodes: Arena<K, V>,
    pub(crate) forward_ptr: Option<Ptr>,
    pub(crate) reverse_ptr: Option<Ptr>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let ptr = self.forward_ptr?;
        if self.forward_ptr == self.reverse_ptr {
            self.forward_ptr = None;
            self.reverse_ptr = None;
        } else {
            self.forward_ptr = self.nodes.links(ptr).next();
        }

        let FreedSlot { data, .. } = self.nodes.free(ptr);
        Some((data.key, data.value))
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let ptr = self.reverse_ptr?;
        if self.reverse_ptr == self.forward_ptr {
            self.reverse_ptr = None;
            self.forward_ptr = None;
        } else {
            self.reverse_ptr = self.nodes.links(ptr).prev();
        }

        let FreedSlot { data, .. } = self.nodes.free(ptr);
        Some((data.key, data.value))
    }
}

#[derive(Debug)]
/// An iterator over the keys of an `UnorderedBimap`, in insertion order.
///
/// Created by [`UnorderedBimap::keys`](crate::bimap::UnorderedBimap::keys).
pub struct Keys<'a, K, V> {
    pub(crate) iter: Iter<'a, K, V>,
}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(k, _)| k)
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|(k, _)| k)
    }
}

#[derive(Debug)]
/// An iterator over the values of an `UnorderedBimap`, in insertion order.
///
/// Created by
/// [`UnorderedBimap::values`](crate::bimap::UnorderedBimap::values).
pub struct Values<'a, K, V> {
    pub(crate) iter: Iter<'a, K, V>,
}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(_, v)| v)
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|(_, v)| v)
    }
}
