//! Text rendering of containers.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::container::SequenceContainer;

/// Renders a single element for [`SequenceContainer::stringify`].
///
/// Implemented for the primitive types, strings and smart pointers by
/// forwarding to `Display`, and for `Option<T>`, where `None` renders as
/// `null`.
pub trait ElementDisplay {
    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! impl_element_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ElementDisplay for $ty {
                #[inline]
                fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

impl_element_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String,
);

impl<T: ElementDisplay> ElementDisplay for Option<T> {
    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.fmt_element(f),
            None => f.write_str("null"),
        }
    }
}

impl<T: ElementDisplay + ?Sized> ElementDisplay for &T {
    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_element(f)
    }
}

impl<T: ElementDisplay + ?Sized> ElementDisplay for Box<T> {
    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_element(f)
    }
}

impl<T: ElementDisplay + ?Sized> ElementDisplay for Rc<T> {
    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_element(f)
    }
}

impl<T: ElementDisplay + ?Sized> ElementDisplay for Arc<T> {
    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_element(f)
    }
}

impl<T: ElementDisplay, E, O> SequenceContainer<T, E, O> {
    /// Renders the live elements in order, separated by single spaces.
    /// An empty container renders as an empty string.
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl<T: ElementDisplay, E, O> fmt::Display for SequenceContainer<T, E, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            item.fmt_element(f)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug, E, O> fmt::Debug for SequenceContainer<T, E, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceContainer")
            .field("count", &self.len())
            .field("capacity", &self.capacity())
            .field("items", &self.as_slice())
            .finish_non_exhaustive()
    }
}
