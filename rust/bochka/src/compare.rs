//! Structural equality, lexicographic ordering and hashing.
//!
//! The contract lives in the named methods [`SequenceContainer::equals`],
//! [`SequenceContainer::compare`] and [`SequenceContainer::hash_code`]; the
//! `PartialEq`, `Ord` and `Hash` implementations forward to them. The free
//! functions in this module extend the comparisons to possibly absent
//! containers: two absent containers are equal, and an absent container
//! orders before any present one.

use std::any::Any;
use std::cmp::Ordering;
use std::hash::{BuildHasher, Hash, Hasher};

use xxhash_rust::xxh3::Xxh3Builder;

use crate::container::SequenceContainer;
use crate::strategy::{EqualityStrategy, HashStrategy, OrderingStrategy};

impl<T, E, O> SequenceContainer<T, E, O>
where
    E: EqualityStrategy<T>,
{
    /// Returns true if both containers have the same length and every pair of
    /// corresponding live elements is equal under the equality strategy.
    pub fn equals(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.len() == other.len()
            && self
                .items
                .iter()
                .zip(other.items.iter())
                .all(|(left, right)| self.equality.equals(left, right))
    }

    /// Equality against an arbitrary value. A missing value, or a value of any
    /// other type, is never equal.
    pub fn equals_any(&self, other: Option<&dyn Any>) -> bool
    where
        Self: 'static,
    {
        other
            .and_then(|other| other.downcast_ref::<Self>())
            .is_some_and(|other| self.equals(other))
    }
}

impl<T, E, O> SequenceContainer<T, E, O>
where
    O: OrderingStrategy<T>,
{
    /// Lexicographic comparison of the live elements.
    ///
    /// The first pair of elements that does not compare equal decides; if the
    /// shorter container is a prefix of the longer one, it sorts first.
    pub fn compare(&self, other: &Self) -> Ordering {
        for (left, right) in self.items.iter().zip(other.items.iter()) {
            match self.ordering.compare(left, right) {
                Ordering::Equal => (),
                ord => return ord,
            }
        }
        self.len().cmp(&other.len())
    }

    /// Compares against a possibly absent container, which sorts first.
    pub fn compare_to(&self, other: Option<&Self>) -> Ordering {
        match other {
            Some(other) => self.compare(other),
            None => Ordering::Greater,
        }
    }
}

impl<T, E, O> SequenceContainer<T, E, O>
where
    E: HashStrategy<T>,
{
    /// Combines the hashes of the live elements, in order, into one value.
    ///
    /// Containers that are [`equals`](Self::equals) produce the same hash code
    /// within a process.
    pub fn hash_code(&self) -> u64 {
        let mut hasher = Xxh3Builder::new().build_hasher();
        self.hash_elements(&mut hasher);
        hasher.finish()
    }

    fn hash_elements<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in &self.items {
            self.equality.hash(item, state);
        }
    }
}

impl<T, E, O> PartialEq for SequenceContainer<T, E, O>
where
    E: EqualityStrategy<T>,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T, E, O> Eq for SequenceContainer<T, E, O>
where
    T: Eq,
    E: EqualityStrategy<T>,
{
}

impl<T, E, O> PartialOrd for SequenceContainer<T, E, O>
where
    E: EqualityStrategy<T>,
    O: OrderingStrategy<T>,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<T, E, O> Ord for SequenceContainer<T, E, O>
where
    T: Eq,
    E: EqualityStrategy<T>,
    O: OrderingStrategy<T>,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<T, E, O> Hash for SequenceContainer<T, E, O>
where
    E: HashStrategy<T>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_elements(state)
    }
}

/// Equality of possibly absent containers.
pub fn eq<T, E, O>(
    left: Option<&SequenceContainer<T, E, O>>,
    right: Option<&SequenceContainer<T, E, O>>,
) -> bool
where
    E: EqualityStrategy<T>,
{
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => left.equals(right),
        _ => false,
    }
}

pub fn ne<T, E, O>(
    left: Option<&SequenceContainer<T, E, O>>,
    right: Option<&SequenceContainer<T, E, O>>,
) -> bool
where
    E: EqualityStrategy<T>,
{
    !eq(left, right)
}

/// Ordering of possibly absent containers; absent sorts first.
pub fn cmp<T, E, O>(
    left: Option<&SequenceContainer<T, E, O>>,
    right: Option<&SequenceContainer<T, E, O>>,
) -> Ordering
where
    O: OrderingStrategy<T>,
{
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(left), right) => left.compare_to(right),
    }
}

pub fn lt<T, E, O>(
    left: Option<&SequenceContainer<T, E, O>>,
    right: Option<&SequenceContainer<T, E, O>>,
) -> bool
where
    O: OrderingStrategy<T>,
{
    cmp(left, right) == Ordering::Less
}

pub fn gt<T, E, O>(
    left: Option<&SequenceContainer<T, E, O>>,
    right: Option<&SequenceContainer<T, E, O>>,
) -> bool
where
    O: OrderingStrategy<T>,
{
    cmp(left, right) == Ordering::Greater
}

pub fn le<T, E, O>(
    left: Option<&SequenceContainer<T, E, O>>,
    right: Option<&SequenceContainer<T, E, O>>,
) -> bool
where
    O: OrderingStrategy<T>,
{
    !gt(left, right)
}

pub fn ge<T, E, O>(
    left: Option<&SequenceContainer<T, E, O>>,
    right: Option<&SequenceContainer<T, E, O>>,
) -> bool
where
    O: OrderingStrategy<T>,
{
    !lt(left, right)
}
