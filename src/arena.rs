use alloc::vec::Vec;
use core::ops::{
    Index,
    IndexMut,
};

use crate::Ptr;

#[cold]
#[inline(never)]
fn assert_free() -> ! {
    panic!("Attempted to access data of free slot");
}

/// The payload of an occupied slot: one stored pair, its cached hashes and the
/// backwards link of the insertion-order sequence.
#[derive(Debug, Clone)]
pub(crate) struct LLData<K, V> {
    pub(crate) prev: Option<Ptr>,
    pub(crate) key_hash: u64,
    pub(crate) value_hash: u64,
    pub(crate) key: K,
    pub(crate) value: V,
}

#[derive(Debug, Clone)]
enum DataOrFree<K, V> {
    Free,
    Data(LLData<K, V>),
}

/// A slot of the arena.
///
/// `next` is the forward link of the sequence while the slot is occupied and
/// the link of the free list once it has been released.
#[derive(Debug, Clone)]
pub(crate) struct LLSlot<K, V> {
    next: Option<Ptr>,
    data: DataOrFree<K, V>,
}

impl<K, V> LLSlot<K, V> {
    pub(crate) fn prev(&self) -> Option<Ptr> {
        match &self.data {
            DataOrFree::Data(data) => data.prev,
            DataOrFree::Free => assert_free(),
        }
    }

    pub(crate) fn prev_mut(&mut self) -> &mut Option<Ptr> {
        match &mut self.data {
            DataOrFree::Data(data) => &mut data.prev,
            DataOrFree::Free => assert_free(),
        }
    }

    pub(crate) fn next(&self) -> Option<Ptr> {
        self.next
    }

    pub(crate) fn next_mut(&mut self) -> &mut Option<Ptr> {
        &mut self.next
    }

    pub(crate) fn data(&self) -> &LLData<K, V> {
        match &self.data {
            DataOrFree::Data(data) => data,
            DataOrFree::Free => assert_free(),
        }
    }

    pub(crate) fn data_mut(&mut self) -> &mut LLData<K, V> {
        match &mut self.data {
            DataOrFree::Data(data) => data,
            DataOrFree::Free => assert_free(),
        }
    }

    fn into_data(self) -> LLData<K, V> {
        match self.data {
            DataOrFree::Data(data) => data,
            DataOrFree::Free => assert_free(),
        }
    }
}

/// What [`Arena::free`] hands back: the released payload together with the
/// forward link the slot held at the time.
#[derive(Debug)]
pub(crate) struct FreedSlot<K, V> {
    pub(crate) data: LLData<K, V>,
    pub(crate) next: Option<Ptr>,
}

/// Slab of entries addressed by [`Ptr`].
///
/// Released slots are chained through their `next` link and handed out again
/// by later allocations, most recently freed first. Nothing is ever moved, so
/// a `Ptr` stays valid until its slot is freed.
#[derive(Debug, Clone)]
pub(crate) struct Arena<K, V> {
    nodes: Vec<LLSlot<K, V>>,
    free_head: Option<Ptr>,
}

impl<K, V> Arena<K, V> {
    #[cfg(test)]
    pub(crate) fn new() -> Self {
        Arena {
            nodes: Vec::new(),
            free_head: None,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Arena {
            nodes: Vec::with_capacity(capacity),
            free_head: None,
        }
    }

    pub(crate) fn links(&self, ptr: Ptr) -> &LLSlot<K, V> {
        &self.nodes[ptr.unchecked_get()]
    }

    pub(crate) fn links_mut(&mut self, ptr: Ptr) -> &mut LLSlot<K, V> {
        &mut self.nodes[ptr.unchecked_get()]
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.free_head = None;
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    pub(crate) fn alloc(
        &mut self,
        key: K,
        value: V,
        key_hash: u64,
        value_hash: u64,
        prev: Option<Ptr>,
    ) -> Ptr {
        let slot = LLSlot {
            next: None,
            data: DataOrFree::Data(LLData {
                prev,
                key_hash,
                value_hash,
                key,
                value,
            }),
        };

        match self.free_head {
            Some(ptr) => {
                let old = core::mem::replace(&mut self.nodes[ptr.unchecked_get()], slot);
                self.free_head = old.next;
                ptr
            }
            None => {
                let ptr = Ptr::unchecked_from(self.nodes.len());
                self.nodes.push(slot);
                ptr
            }
        }
    }

    pub(crate) fn is_occupied(&self, ptr: Ptr) -> bool {
        self.nodes
            .get(ptr.unchecked_get())
            .is_some_and(|slot| matches!(slot.data, DataOrFree::Data(_)))
    }

    pub(crate) fn free(&mut self, ptr: Ptr) -> FreedSlot<K, V> {
        assert!(self.is_occupied(ptr), "Pointer to free must be occupied");
        let result = core::mem::replace(
            &mut self.nodes[ptr.unchecked_get()],
            LLSlot {
                next: self.free_head,
                data: DataOrFree::Free,
            },
        );
        self.free_head = Some(ptr);

        FreedSlot {
            next: result.next,
            data: result.into_data(),
        }
    }
}

impl<K, V> Index<Ptr> for Arena<K, V> {
    type Output = LLData<K, V>;

    fn index(&self, index: Ptr) -> &Self::Output {
        self.nodes[index.unchecked_get()].data()
    }
}

impl<K, V> IndexMut<Ptr> for Arena<K, V> {
    fn index_mut(&mut self, index: Ptr) -> &mut Self::Output {
        self.nodes[index.unchecked_get()].data_mut()
    }
}
