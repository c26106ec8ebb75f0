//! Indexed access, list mutation and linear search.

use bochka_common::{Error, Result, verify_index};

use crate::container::SequenceContainer;
use crate::strategy::EqualityStrategy;

impl<T, E, O> SequenceContainer<T, E, O> {
    /// Returns a reference to the element at `index`.
    ///
    /// Fails with `IndexOutOfRange` unless `index < len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        verify_index!(index, self.len());
        Ok(&self.items[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// Handing out the reference counts as an in-place replacement and bumps
    /// the modification counter.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        verify_index!(index, self.len());
        self.bump_version();
        Ok(&mut self.items[index])
    }

    /// Replaces the element at `index` with `value`, returning the previous
    /// element.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        verify_index!(index, self.len());
        self.bump_version();
        Ok(std::mem::replace(&mut self.items[index], value))
    }

    /// Appends `item` at the end, growing the buffer if it is full.
    #[inline]
    pub fn add(&mut self, item: T) {
        self.bump_version();
        self.append_slot(item);
    }

    /// Inserts `item` at `index`, shifting all elements at or after `index`
    /// one position to the right. `index == len` appends.
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        verify_index!(index, self.len() + 1);
        self.bump_version();
        if self.len() == self.capacity {
            self.ensure_capacity(self.len() + 1);
        }
        self.items.insert(index, item);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting all following
    /// elements one position to the left.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        verify_index!(index, self.len());
        self.bump_version();
        Ok(self.items.remove(index))
    }

    /// Drops all live elements. The capacity is left unchanged.
    pub fn clear(&mut self) {
        self.bump_version();
        self.items.clear();
    }

    /// Clones the live elements into `destination`, starting at `offset`.
    ///
    /// Fails with `IndexOutOfRange` if `offset` lies beyond the end of
    /// `destination`, and with `InsufficientCapacity` if fewer than `len`
    /// slots remain after `offset`. Nothing is written on failure.
    pub fn copy_to(&self, destination: &mut [T], offset: usize) -> Result<()>
    where
        T: Clone,
    {
        verify_index!(offset, destination.len() + 1);
        let available = destination.len() - offset;
        if available < self.len() {
            return Err(Error::insufficient_capacity(self.len(), available));
        }
        destination[offset..offset + self.len()].clone_from_slice(&self.items);
        Ok(())
    }
}

impl<T, E, O> SequenceContainer<T, E, O>
where
    E: EqualityStrategy<T>,
{
    /// Returns the position of the first live element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items
            .iter()
            .position(|candidate| self.equality.equals(candidate, item))
    }

    /// Returns true if some live element equals `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Removes the first element equal to `item`.
    ///
    /// Returns `false` and leaves the container untouched if there is none.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.index_of(item) {
            Some(index) => {
                self.bump_version();
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<T, E, O> std::ops::Index<usize> for SequenceContainer<T, E, O> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<T, E, O> std::ops::IndexMut<usize> for SequenceContainer<T, E, O> {
    /// Bumps the modification counter; the bounds check panics like a slice's.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.len();
        assert!(
            index < len,
            "index out of bounds: the len is {len} but the index is {index}"
        );
        self.bump_version();
        &mut self.items[index]
    }
}

impl<T, E, O> Extend<T> for SequenceContainer<T, E, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T, E, O> IntoIterator for SequenceContainer<T, E, O> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, E, O> IntoIterator for &'a SequenceContainer<T, E, O> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
