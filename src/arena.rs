//! Append-only typed storage for tree nodes.

use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A struct representing the location of an object inside of an `Arena<T>`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Slot {
    chunk_index: usize,
    block_index: usize,
}

/// A fast allocator for a single type of object that never frees individual objects.
///
/// Objects are stored in fixed size chunks so an allocation never moves an object that was
/// allocated before it. Every object is destroyed at once when the arena is cleared or dropped.
pub struct Arena<T> {
    chunks: Vec<Vec<T>>,
    chunk_size: usize,
    len: usize,
}

impl<T> Arena<T> {
    fn is_valid_slot(&self, slot: Slot) -> bool {
        slot.chunk_index < self.chunks.len()
            && slot.block_index < self.chunks[slot.chunk_index].len()
    }

    /// Constructs a new, empty `Arena<T>` that holds `chunk_size` objects per chunk.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "Error: chunk size must be positive.");
        Arena {
            chunks: Vec::new(),
            chunk_size,
            len: 0,
        }
    }

    /// Allocates an object in the arena and returns the slot it was placed in.
    pub fn allocate(&mut self, value: T) -> Slot {
        let needs_chunk = match self.chunks.last() {
            Some(chunk) => chunk.len() == self.chunk_size,
            None => true,
        };
        if needs_chunk {
            self.chunks.push(Vec::with_capacity(self.chunk_size));
        }
        self.len += 1;

        let chunk_index = self.chunks.len() - 1;
        let last_chunk = &mut self.chunks[chunk_index];
        last_chunk.push(value);
        Slot {
            chunk_index,
            block_index: last_chunk.len() - 1,
        }
    }

    /// Returns an immutable reference to an object in the arena, or `None` if the slot was not
    /// handed out by this arena.
    pub fn get(&self, slot: Slot) -> Option<&T> {
        if !self.is_valid_slot(slot) {
            return None;
        }
        Some(&self.chunks[slot.chunk_index][slot.block_index])
    }

    /// Returns a mutable reference to an object in the arena, or `None` if the slot was not
    /// handed out by this arena.
    pub fn get_mut(&mut self, slot: Slot) -> Option<&mut T> {
        if !self.is_valid_slot(slot) {
            return None;
        }
        Some(&mut self.chunks[slot.chunk_index][slot.block_index])
    }

    /// Returns the number of objects in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no objects.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Destroys every object in the arena. Previously issued slots become invalid and may be
    /// reused by later allocations.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.len = 0;
    }
}

impl<T> Index<Slot> for Arena<T> {
    type Output = T;

    fn index(&self, slot: Slot) -> &Self::Output {
        self.get(slot).expect("Error: slot out of bounds.")
    }
}

impl<T> IndexMut<Slot> for Arena<T> {
    fn index_mut(&mut self, slot: Slot) -> &mut Self::Output {
        self.get_mut(slot).expect("Error: slot out of bounds.")
    }
}

#[cfg(test)]
mod tests {
    use super::Arena;
    use super::Slot;

    #[test]
    #[should_panic]
    fn test_zero_chunk_size() {
        let _arena: Arena<u32> = Arena::new(0);
    }

    #[test]
    fn test_allocate() {
        let mut arena = Arena::new(1024);
        assert_eq!(
            arena.allocate(0),
            Slot {
                chunk_index: 0,
                block_index: 0
            },
        );
        assert_eq!(
            arena.allocate(0),
            Slot {
                chunk_index: 0,
                block_index: 1
            },
        );
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_allocate_multiple_chunks() {
        let mut arena = Arena::new(2);
        arena.allocate(0);
        arena.allocate(1);
        let slot = arena.allocate(2);
        assert_eq!(
            slot,
            Slot {
                chunk_index: 1,
                block_index: 0
            },
        );
        assert_eq!(arena[slot], 2);
    }

    #[test]
    fn test_get_invalid_slot() {
        let mut arena = Arena::new(1024);
        arena.allocate(0);
        assert_eq!(
            arena.get(Slot {
                chunk_index: 0,
                block_index: 1
            }),
            None,
        );
        assert_eq!(
            arena.get(Slot {
                chunk_index: 1,
                block_index: 0
            }),
            None,
        );
    }

    #[test]
    fn test_get_mut() {
        let mut arena = Arena::new(1024);
        let slot = arena.allocate(0);
        *arena.get_mut(slot).unwrap() = 1;
        assert_eq!(arena.get(slot), Some(&1));
        arena[slot] += 1;
        assert_eq!(arena[slot], 2);
    }

    #[test]
    #[should_panic]
    fn test_index_invalid_slot() {
        let arena: Arena<u32> = Arena::new(1024);
        assert_eq!(
            arena[Slot {
                chunk_index: 0,
                block_index: 0,
            }],
            0,
        );
    }

    #[test]
    fn test_clear() {
        let mut arena = Arena::new(2);
        let slot = arena.allocate(0);
        arena.allocate(1);
        arena.allocate(2);
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.get(slot), None);
        assert_eq!(arena.allocate(3), slot);
    }
}
