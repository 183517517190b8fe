//! Insertion-ordered store of live entities

/// Anything the registry can drop once it is finished
pub trait Mortal {
    fn is_dead(&self) -> bool;
}

/// Ordered collection advanced one pass per tick.
///
/// Entities live in a `Vec` in the order they were appended. Nothing hands
/// out references or indices that outlive a call, so compaction can never
/// leave a dangling handle behind.
pub struct Registry<T> {
    slots: Vec<T>,
}

impl<T: Mortal> Registry<T> {
    pub fn new() -> Self {
        Self { slots: Vec::with_capacity(256) }
    }

    pub fn append(&mut self, item: T) {
        self.slots.push(item);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter()
    }

    /// Visit every live entity once, in insertion order.
    ///
    /// `visit` may mutate the entity, mark it dead, or push new entities into
    /// the sprouts vector. Sprouts are appended right after the visit that
    /// produced them, so they are still ahead of the cursor and get their
    /// first turn later in this same pass. Dead entities are skipped and are
    /// compacted out once the pass is over; survivors keep their order.
    pub fn for_each_advancing<F>(&mut self, mut visit: F)
    where
        F: FnMut(&mut T, &mut Vec<T>),
    {
        let mut sprouts = Vec::new();
        let mut cursor = 0;

        // Length is re-read every step so sprouts are reached.
        while cursor < self.slots.len() {
            let item = &mut self.slots[cursor];
            if !item.is_dead() {
                visit(item, &mut sprouts);
                self.slots.append(&mut sprouts);
            }
            cursor += 1;
        }

        self.slots.retain(|item| !item.is_dead());
    }

    /// Remove everything, returning how many entities were still alive
    pub fn drain(&mut self) -> usize {
        let live = self.slots.iter().filter(|item| !item.is_dead()).count();
        self.slots.clear();
        live
    }
}

impl<T: Mortal> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}
