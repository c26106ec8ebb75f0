//! Element equality, hashing and ordering strategies.
//!
//! A [`SequenceContainer`](crate::SequenceContainer) never calls `PartialEq`,
//! `Hash` or `Ord` on its elements directly; it goes through the strategies it
//! was created with. [`Natural`] forwards to the element type's own traits,
//! [`ByKey`] compares a projected key.
//!
//! Implementations must be consistent with each other: elements that are equal
//! under the equality strategy must hash identically and compare as
//! `Ordering::Equal` under the ordering strategy.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Decides whether two elements are equal.
pub trait EqualityStrategy<T: ?Sized> {
    fn equals(&self, left: &T, right: &T) -> bool;
}

/// Feeds an element into a hasher, consistently with [`EqualityStrategy::equals`].
pub trait HashStrategy<T: ?Sized>: EqualityStrategy<T> {
    fn hash<H: Hasher>(&self, value: &T, state: &mut H);
}

/// Totally orders elements.
pub trait OrderingStrategy<T: ?Sized> {
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

/// The element type's own `PartialEq`, `Hash` and `Ord`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<T: PartialEq + ?Sized> EqualityStrategy<T> for Natural {
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        left == right
    }
}

impl<T: PartialEq + Hash + ?Sized> HashStrategy<T> for Natural {
    #[inline]
    fn hash<H: Hasher>(&self, value: &T, state: &mut H) {
        value.hash(state)
    }
}

impl<T: Ord + ?Sized> OrderingStrategy<T> for Natural {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// Compares elements by a key extracted with `F`.
///
/// ```
/// use bochka::{ByKey, SequenceContainer};
///
/// let by_len = ByKey::new(|s: &&str| s.len());
/// let mut words = SequenceContainer::with_strategies(by_len.clone(), by_len);
/// words.add("pear");
/// assert!(words.contains(&"plum"));
/// ```
pub struct ByKey<F, K> {
    key: F,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> ByKey<F, K> {
    pub fn new<T: ?Sized>(key: F) -> ByKey<F, K>
    where
        F: Fn(&T) -> K,
    {
        ByKey {
            key,
            _key: PhantomData,
        }
    }
}

impl<F: Clone, K> Clone for ByKey<F, K> {
    fn clone(&self) -> Self {
        ByKey {
            key: self.key.clone(),
            _key: PhantomData,
        }
    }
}

impl<F: Copy, K> Copy for ByKey<F, K> {}

impl<F, K> std::fmt::Debug for ByKey<F, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByKey").finish_non_exhaustive()
    }
}

impl<T, F, K> EqualityStrategy<T> for ByKey<F, K>
where
    F: Fn(&T) -> K,
    K: PartialEq,
{
    fn equals(&self, left: &T, right: &T) -> bool {
        (self.key)(left) == (self.key)(right)
    }
}

impl<T, F, K> HashStrategy<T> for ByKey<F, K>
where
    F: Fn(&T) -> K,
    K: PartialEq + Hash,
{
    fn hash<H: Hasher>(&self, value: &T, state: &mut H) {
        (self.key)(value).hash(state)
    }
}

impl<T, F, K> OrderingStrategy<T> for ByKey<F, K>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.key)(left).cmp(&(self.key)(right))
    }
}
