pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

/// Checks that `$index` falls within `0..$bound`, returning `IndexOutOfRange`
/// from the enclosing function otherwise.
#[macro_export]
macro_rules! verify_index {
    ($index:expr, $bound:expr) => {{
        $crate::result::verify_index($index, $bound, stringify!($index))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[inline]
pub fn verify_index(index: usize, bound: usize, name: &str) -> Result<()> {
    if index < bound {
        Ok(())
    } else {
        index_out_of_range(name, index, bound)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cold]
pub fn index_out_of_range(name: &str, index: usize, bound: usize) -> Result<()> {
    Err(crate::error::ErrorKind::IndexOutOfRange {
        name: name.to_string(),
        index,
        len: bound,
    }
    .into())
}
