//! A growable, index-addressable sequence container.
//!
//! [`SequenceContainer`] keeps its elements in one contiguous buffer and manages
//! the buffer's capacity itself: growth is geometric (starting at
//! [`DEFAULT_CAPACITY`] and doubling), and the buffer only shrinks on an explicit
//! [`SequenceContainer::set_capacity`] or [`SequenceContainer::trim_excess`].
//!
//! Every structural change bumps a modification counter. A detached [`Cursor`]
//! captures the counter when it is created and refuses to step once the
//! container has been modified behind its back.
//!
//! Equality, ordering and hashing are defined over the live elements only and
//! are driven by explicit element strategies (see [`strategy`]), which default
//! to the element type's own `PartialEq`, `Ord` and `Hash`.
//!
//! ```
//! use bochka::{bochka, SequenceContainer};
//!
//! let mut numbers: SequenceContainer<i32> = bochka![1, 2, 3, 4, 5];
//! numbers.add(6);
//! numbers.insert(3, 55).unwrap();
//! assert!(numbers.remove(&2));
//! assert_eq!(numbers.stringify(), "1 3 55 4 5 6");
//! ```

pub mod compare;
pub mod container;
pub mod cursor;
pub mod display;
pub mod ops;
pub mod strategy;
#[cfg(test)]
mod tests;

pub use bochka_common::{Error, ErrorKind, Result};
pub use container::{DEFAULT_CAPACITY, MAX_CAPACITY, SequenceContainer};
pub use cursor::Cursor;
pub use display::ElementDisplay;
pub use strategy::{ByKey, EqualityStrategy, HashStrategy, Natural, OrderingStrategy};

/// Creates a [`SequenceContainer`] holding the listed elements, with the
/// capacity set to exactly the number of elements.
///
/// ```
/// use bochka::{bochka, SequenceContainer};
///
/// let words: SequenceContainer<Option<&str>> = bochka![Some("apple"), None];
/// assert_eq!(words.stringify(), "apple null");
/// assert_eq!(words.capacity(), 2);
/// ```
#[macro_export]
macro_rules! bochka {
    () => {
        $crate::SequenceContainer::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::SequenceContainer::from([$($item),+])
    };
}
