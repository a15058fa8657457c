//! Generation-tagged slot arena
//!
//! Records are stored in a dense `Vec`. Freed slots go on a free list and are
//! reused by later inserts; each reuse bumps the slot's generation so lookups
//! with an older generation miss. A slot whose generation is exhausted is
//! retired instead of recycled.

#[derive(Debug, Clone)]
struct Slot<T> {
    generation: u32,
    entry: Option<T>,
}

#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Arena {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }
}

impl<T> Arena<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Store `value`, reusing the most recently freed slot first
    pub(crate) fn insert(&mut self, value: T) -> (u32, u32) {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.entry = Some(value);
            return (index, slot.generation);
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            entry: Some(value),
        });
        (index, 0)
    }

    pub(crate) fn get(&self, index: usize, generation: u32) -> Option<&T> {
        self.slots
            .get(index)
            .filter(|slot| slot.generation == generation)
            .and_then(|slot| slot.entry.as_ref())
    }

    pub(crate) fn get_mut(&mut self, index: usize, generation: u32) -> Option<&mut T> {
        self.slots
            .get_mut(index)
            .filter(|slot| slot.generation == generation)
            .and_then(|slot| slot.entry.as_mut())
    }

    /// Take the value out and retire the generation
    pub(crate) fn remove(&mut self, index: usize, generation: u32) -> Option<T> {
        let slot = self.slots.get_mut(index)?;
        if slot.generation != generation {
            return None;
        }
        let value = slot.entry.take()?;
        self.len -= 1;
        // Never wrap: an old handle must not match a later occupant
        if let Some(next) = slot.generation.checked_add(1) {
            slot.generation = next;
            self.free.push(index as u32);
        }
        Some(value)
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut arena = Arena::default();
        let (a, ga) = arena.insert("a");
        let (b, gb) = arena.insert("b");
        assert_eq!((a, ga), (0, 0));
        assert_eq!((b, gb), (1, 0));
        assert_eq!(arena.get(0, 0), Some(&"a"));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_slot_reuse_bumps_generation() {
        let mut arena = Arena::with_capacity(4);
        let (index, generation) = arena.insert(10);
        assert_eq!(arena.remove(index as usize, generation), Some(10));
        assert!(arena.get(index as usize, generation).is_none());

        let (reused, next_generation) = arena.insert(20);
        assert_eq!(reused, index);
        assert_eq!(next_generation, generation + 1);
        assert!(arena.get(index as usize, generation).is_none());
        assert_eq!(arena.get(index as usize, next_generation), Some(&20));
    }

    #[test]
    fn test_exhausted_slot_is_retired() {
        let mut arena = Arena::default();
        let (index, _) = arena.insert("old");
        arena.slots[index as usize].generation = u32::MAX;

        assert_eq!(arena.remove(index as usize, u32::MAX), Some("old"));
        assert_eq!(arena.len(), 0);

        let (fresh, generation) = arena.insert("new");
        assert_ne!(fresh, index);
        assert_eq!(generation, 0);
        assert!(arena.get(index as usize, u32::MAX).is_none());
        assert!(arena.get(index as usize, 0).is_none());
        assert_eq!(arena.get(fresh as usize, 0), Some(&"new"));
    }

    #[test]
    fn test_double_remove() {
        let mut arena = Arena::default();
        let (index, generation) = arena.insert(1);
        assert!(arena.remove(index as usize, generation).is_some());
        assert!(arena.remove(index as usize, generation).is_none());
        assert_eq!(arena.len(), 0);
    }
}
