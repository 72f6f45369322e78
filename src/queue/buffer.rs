//! Circular buffer store
//!
//! Plain indexed storage with wraparound `front`/`rear` indices. It knows
//! nothing about locking; the monitor owns one and only touches it while
//! holding its mutex.

/// Fixed-capacity ring of item slots
///
/// The logical content is `len` items read from `front`, advancing
/// circularly. `rear` always equals `(front + len) % capacity`.
#[derive(Debug)]
pub struct CircularBuffer<T> {
    slots: Vec<Option<T>>,
    front: usize,
    rear: usize,
    count: usize,
}

impl<T> CircularBuffer<T> {
    /// Create an empty buffer with `capacity` slots
    ///
    /// Callers must pass a positive capacity; the monitor validates this
    /// before constructing the store.
    pub fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "circular buffer needs at least one slot");
        Self {
            slots: Self::empty_slots(capacity),
            front: 0,
            rear: 0,
            count: 0,
        }
    }

    fn empty_slots(capacity: usize) -> Vec<Option<T>> {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        slots
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    pub fn front(&self) -> usize {
        self.front
    }

    pub fn rear(&self) -> usize {
        self.rear
    }

    /// Write `item` at the rear slot
    ///
    /// Hands the item back if every slot is occupied.
    pub fn push_back(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        self.slots[self.rear] = Some(item);
        self.rear = (self.rear + 1) % self.capacity();
        self.count += 1;
        Ok(())
    }

    /// Remove the item at the front slot
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.front].take();
        self.front = (self.front + 1) % self.capacity();
        self.count -= 1;
        item
    }

    /// Reallocate to `new_capacity` slots, re-linearizing the content
    ///
    /// Items are moved in logical order into slots `0..len`, so afterwards
    /// `front == 0` and `rear == len % new_capacity`.
    pub fn relocate(&mut self, new_capacity: usize) {
        assert!(
            new_capacity >= self.count && new_capacity > 0,
            "cannot relocate {} items into {} slots",
            self.count,
            new_capacity
        );

        let old_capacity = self.capacity();
        let mut old_slots = std::mem::replace(&mut self.slots, Self::empty_slots(new_capacity));
        for offset in 0..self.count {
            self.slots[offset] = old_slots[(self.front + offset) % old_capacity].take();
        }

        self.front = 0;
        self.rear = self.count % new_capacity;
    }

    /// Iterate items from front to rear without removing them
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let capacity = self.capacity();
        (0..self.count).filter_map(move |offset| self.slots[(self.front + offset) % capacity].as_ref())
    }
}
