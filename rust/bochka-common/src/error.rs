use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn index_out_of_range(name: impl Into<String>, index: usize, len: usize) -> Error {
        Error(
            ErrorKind::IndexOutOfRange {
                name: name.into(),
                index,
                len,
            }
            .into(),
        )
    }

    pub fn insufficient_capacity(required: usize, available: usize) -> Error {
        Error(
            ErrorKind::InsufficientCapacity {
                required,
                available,
            }
            .into(),
        )
    }

    pub fn concurrent_modification() -> Error {
        Error(ErrorKind::ConcurrentModification.into())
    }

    pub fn is_invalid_arg(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidArgument { .. })
    }

    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::IndexOutOfRange { .. })
    }

    pub fn is_insufficient_capacity(&self) -> bool {
        matches!(self.kind(), ErrorKind::InsufficientCapacity { .. })
    }

    pub fn is_concurrent_modification(&self) -> bool {
        matches!(self.kind(), ErrorKind::ConcurrentModification)
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("{name} {index} is out of range (valid range is bounded by {len})")]
    IndexOutOfRange {
        name: String,
        index: usize,
        len: usize,
    },

    #[error("destination is too small: {required} slots required, {available} available")]
    InsufficientCapacity { required: usize, available: usize },

    #[error("collection was modified during enumeration")]
    ConcurrentModification,
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
