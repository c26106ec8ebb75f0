//! Storage and capacity management for [`SequenceContainer`].

use std::sync::atomic::{AtomicU64, Ordering};

use bochka_common::{Error, Result, verify_arg};

use crate::cursor::Cursor;
use crate::strategy::Natural;

/// Capacity allocated by the first automatic growth of an empty container.
pub const DEFAULT_CAPACITY: usize = 4;

/// Upper bound on the number of slots a container may hold.
pub const MAX_CAPACITY: usize = 0x7FFF_FFC7;

static NEXT_CONTAINER_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a container instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ContainerId(u64);

impl ContainerId {
    fn next() -> ContainerId {
        ContainerId(NEXT_CONTAINER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A mutable, ordered, index-addressable collection backed by one contiguous
/// growable buffer.
///
/// The container tracks its logical capacity separately from the allocation:
/// the buffer is only reallocated when an insert would exceed `capacity`, and
/// it is then grown according to a fixed policy (see [`DEFAULT_CAPACITY`]).
///
/// `E` and `O` are the element equality and ordering strategies used by
/// `index_of`, `contains`, `remove`, `equals`, `compare` and `hash_code`.
pub struct SequenceContainer<T, E = Natural, O = Natural> {
    /// Live elements. `items.capacity() >= capacity` always holds.
    pub(crate) items: Vec<T>,
    /// Logical capacity.
    pub(crate) capacity: usize,
    /// Modification counter, bumped by every length change or in-place replacement.
    pub(crate) version: u64,
    pub(crate) id: ContainerId,
    pub(crate) equality: E,
    pub(crate) ordering: O,
}

impl<T> SequenceContainer<T> {
    /// Creates an empty container without allocating.
    pub fn new() -> Self {
        Self::with_strategies(Natural, Natural)
    }

    /// Creates an empty container able to hold `capacity` elements before
    /// the first reallocation.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_capacity_and_strategies(capacity, Natural, Natural)
    }

    /// Creates a container holding a copy of `elements`, with the capacity set
    /// to exactly `elements.len()`.
    pub fn from_slice(elements: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from(elements.to_vec())
    }

    /// Creates a container by consuming `source` once, in order.
    ///
    /// When the source reports an exact length, exactly that capacity is
    /// allocated up front; otherwise the container grows while consuming it.
    pub fn from_source<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_source_with_strategies(source, Natural, Natural)
    }

    /// Same as [`SequenceContainer::from_source`], but an absent source is
    /// reported as `InvalidArgument`.
    pub fn try_from_source<I>(source: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        match source {
            Some(source) => Ok(Self::from_source(source)),
            None => Err(Error::invalid_arg("source", "source must be present")),
        }
    }
}

impl<T, E, O> SequenceContainer<T, E, O> {
    /// Creates an empty container with explicit element strategies.
    pub fn with_strategies(equality: E, ordering: O) -> Self {
        SequenceContainer {
            items: Vec::new(),
            capacity: 0,
            version: 0,
            id: ContainerId::next(),
            equality,
            ordering,
        }
    }

    /// Creates an empty container with explicit element strategies and an
    /// initial capacity.
    pub fn with_capacity_and_strategies(
        capacity: usize,
        equality: E,
        ordering: O,
    ) -> Result<Self> {
        verify_arg!(capacity, capacity <= MAX_CAPACITY);
        let mut container = Self::with_strategies(equality, ordering);
        if capacity != 0 {
            container.reallocate(capacity);
        }
        Ok(container)
    }

    /// Creates a container with explicit element strategies by consuming
    /// `source` once, in order.
    pub fn from_source_with_strategies<I>(source: I, equality: E, ordering: O) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let source = source.into_iter();
        let mut container = Self::with_strategies(equality, ordering);
        match source.size_hint() {
            (lower, Some(upper)) if lower == upper && lower != 0 && lower <= MAX_CAPACITY => {
                container.reallocate(lower);
            }
            _ => (),
        }
        // An inexact size hint is harmless: surplus elements take the
        // regular growth path.
        for item in source {
            container.append_slot(item);
        }
        container
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the container holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of elements the container can hold without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the current value of the modification counter.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns a borrowing iterator over the live elements.
    ///
    /// The borrow prevents any mutation while the iterator is alive. Use
    /// [`SequenceContainer::cursor`] for an enumeration that outlives
    /// intervening mutations and reports them.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the first element, or `None` if empty.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the last element, or `None` if empty.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Starts a new enumeration over the live elements.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.id, self.version, self.len())
    }

    pub fn equality(&self) -> &E {
        &self.equality
    }

    pub fn ordering(&self) -> &O {
        &self.ordering
    }

    /// Sets the capacity to exactly `capacity` slots.
    ///
    /// Fails with `InvalidArgument` if `capacity` is smaller than the number of
    /// live elements or larger than [`MAX_CAPACITY`]. Setting the current
    /// capacity is a no-op, and a capacity of zero releases the storage.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        verify_arg!(capacity, capacity >= self.len());
        verify_arg!(capacity, capacity <= MAX_CAPACITY);
        if capacity != self.capacity {
            self.reallocate(capacity);
        }
        Ok(())
    }

    /// Ensures there is room for at least `additional` more elements,
    /// growing by the regular policy if needed.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        let required = self.len().checked_add(additional);
        verify_arg!(additional, required.is_some_and(|r| r <= MAX_CAPACITY));
        self.ensure_capacity(self.len() + additional);
        Ok(())
    }

    /// Shrinks the capacity to the number of live elements, if less than 90%
    /// of the capacity is in use.
    pub fn trim_excess(&mut self) {
        let threshold = (self.capacity as u64 * 9 / 10) as usize;
        if self.len() < threshold {
            log::trace!(
                "trimming container {:?}: {} of {} slots in use",
                self.id,
                self.len(),
                self.capacity
            );
            self.reallocate(self.len());
        }
    }

    /// Appends `item` without touching the modification counter.
    #[inline]
    pub(crate) fn append_slot(&mut self, item: T) {
        if self.len() == self.capacity {
            self.ensure_capacity(self.len() + 1);
        }
        self.items.push(item);
    }

    #[inline]
    pub(crate) fn bump_version(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    /// Grows the capacity so that at least `min` elements fit.
    ///
    /// # Panics
    ///
    /// Panics if `min` exceeds [`MAX_CAPACITY`].
    pub(crate) fn ensure_capacity(&mut self, min: usize) {
        if self.capacity < min {
            assert!(min <= MAX_CAPACITY, "capacity overflow");
            self.reallocate(self.grown_capacity(min));
        }
    }

    /// Capacity picked by the growth policy when `min` slots are required.
    fn grown_capacity(&self, min: usize) -> usize {
        let doubled = if self.capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            self.capacity.saturating_mul(2)
        };
        doubled.min(MAX_CAPACITY).max(min)
    }

    /// Moves the live elements into a fresh buffer of exactly `capacity` slots.
    #[cold]
    fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len());
        log::trace!(
            "reallocating container {:?}: {} -> {} slots ({} live)",
            self.id,
            self.capacity,
            capacity,
            self.len()
        );
        let items = if capacity == 0 {
            Vec::new()
        } else {
            let mut items = Vec::with_capacity(capacity);
            items.append(&mut self.items);
            items
        };
        self.items = items;
        self.capacity = capacity;
    }
}

impl<T> Default for SequenceContainer<T> {
    fn default() -> Self {
        SequenceContainer::new()
    }
}

impl<T, E, O> Clone for SequenceContainer<T, E, O>
where
    T: Clone,
    E: Clone,
    O: Clone,
{
    /// Clones the live elements into a new container whose capacity is the
    /// element count. The clone has its own identity and a fresh counter.
    fn clone(&self) -> Self {
        let items = self.items.to_vec();
        SequenceContainer {
            capacity: items.len(),
            items,
            version: 0,
            id: ContainerId::next(),
            equality: self.equality.clone(),
            ordering: self.ordering.clone(),
        }
    }
}

impl<T> From<Vec<T>> for SequenceContainer<T> {
    fn from(items: Vec<T>) -> Self {
        SequenceContainer {
            capacity: items.len(),
            items,
            version: 0,
            id: ContainerId::next(),
            equality: Natural,
            ordering: Natural,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for SequenceContainer<T> {
    fn from(items: [T; N]) -> Self {
        SequenceContainer::from(Vec::from(items))
    }
}

impl<T: Clone> From<&[T]> for SequenceContainer<T> {
    fn from(items: &[T]) -> Self {
        SequenceContainer::from_slice(items)
    }
}

impl<T> FromIterator<T> for SequenceContainer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SequenceContainer::from_source(iter)
    }
}

impl<T, E, O> From<SequenceContainer<T, E, O>> for Vec<T> {
    fn from(container: SequenceContainer<T, E, O>) -> Self {
        container.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grown_capacity_policy() {
        let mut c = SequenceContainer::<u8>::new();
        assert_eq!(c.grown_capacity(1), DEFAULT_CAPACITY);
        assert_eq!(c.grown_capacity(9), 9);
        c.set_capacity(6).unwrap();
        assert_eq!(c.grown_capacity(7), 12);
        assert_eq!(c.grown_capacity(30), 30);
    }

    #[test]
    fn test_grown_capacity_clamps_to_max() {
        let mut c = SequenceContainer::<()>::new();
        c.capacity = MAX_CAPACITY / 2 + 10;
        assert_eq!(c.grown_capacity(c.capacity + 1), MAX_CAPACITY);
    }

    #[test]
    fn test_from_vec_keeps_exact_capacity() {
        let c = SequenceContainer::from(vec![1, 2, 3]);
        assert_eq!(c.capacity(), 3);
        assert_eq!(c.len(), 3);
        assert!(c.items.capacity() >= c.capacity());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = SequenceContainer::<i32>::new();
        let b = a.clone();
        assert_ne!(a.id, b.id);
    }
}
