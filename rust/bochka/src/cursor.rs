//! Forward enumeration that detects modification of the underlying container.

use bochka_common::{Error, Result};

use crate::container::{ContainerId, SequenceContainer};

/// A detached, forward-only cursor over a [`SequenceContainer`].
///
/// The cursor holds no reference to the container. It remembers which
/// container created it, the container's modification counter at that moment
/// and the length to enumerate; the container is passed in on every step.
/// Any mutation that bumps the counter (add, insert, remove, set, clear) makes
/// every later step fail with `ConcurrentModification`.
///
/// ```
/// use bochka::{bochka, SequenceContainer};
///
/// let mut c: SequenceContainer<i32> = bochka![1, 2, 3];
/// let mut cursor = c.cursor();
/// assert_eq!(cursor.move_next(&c).unwrap(), Some(&1));
/// c.add(4);
/// assert!(cursor.move_next(&c).unwrap_err().is_concurrent_modification());
/// ```
#[derive(Debug, Clone)]
pub struct Cursor {
    owner: ContainerId,
    version: u64,
    /// Length of the container when enumeration started.
    end: usize,
    /// Number of elements stepped over so far.
    position: usize,
    exhausted: bool,
}

impl Cursor {
    pub(crate) fn new(owner: ContainerId, version: u64, end: usize) -> Cursor {
        Cursor {
            owner,
            version,
            end,
            position: 0,
            exhausted: false,
        }
    }

    /// Advances to the next element and returns it, or `None` once all
    /// elements have been visited.
    pub fn move_next<'a, T, E, O>(
        &mut self,
        container: &'a SequenceContainer<T, E, O>,
    ) -> Result<Option<&'a T>> {
        self.validate(container)?;
        if self.position < self.end {
            let item = &container.items[self.position];
            self.position += 1;
            Ok(Some(item))
        } else {
            self.exhausted = true;
            Ok(None)
        }
    }

    /// Returns the element produced by the last successful
    /// [`Cursor::move_next`], or `None` before the first step and after the
    /// last one.
    pub fn current<'a, T, E, O>(
        &self,
        container: &'a SequenceContainer<T, E, O>,
    ) -> Result<Option<&'a T>> {
        self.validate(container)?;
        if self.position == 0 || self.exhausted {
            return Ok(None);
        }
        Ok(container.items.get(self.position - 1))
    }

    /// Rewinds the cursor to the start of the enumeration.
    pub fn reset<T, E, O>(&mut self, container: &SequenceContainer<T, E, O>) -> Result<()> {
        self.validate(container)?;
        self.position = 0;
        self.exhausted = false;
        Ok(())
    }

    /// Returns the number of elements not yet visited.
    pub fn remaining(&self) -> usize {
        self.end - self.position
    }

    fn validate<T, E, O>(&self, container: &SequenceContainer<T, E, O>) -> Result<()> {
        if self.owner != container.id {
            return Err(Error::invalid_arg(
                "container",
                "cursor was created by a different container",
            ));
        }
        if self.version != container.version {
            log::debug!(
                "container {:?} modified during enumeration (version {} -> {})",
                container.id,
                self.version,
                container.version
            );
            return Err(Error::concurrent_modification());
        }
        Ok(())
    }
}
