use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    result, io
};
use crate::helper::range_helper::WindowField;

pub type Result<T> = result::Result<T, ErrorType>;

#[derive(Debug)]
/// Enum with all errors buffer and view operations can report.
pub enum ErrorType {
    IOError(io::Error),
    /// a view offset or size resolved to a negative value
    RangeError {
        field: WindowField,
        value: i64,
    },
    /// an absolute byte index is outside of the underlying buffer
    IndexError {
        index: usize,
        size: usize,
    },
    /// a window relative index is outside of the view, `limit` is the view length in bytes or bits
    WindowIndexError {
        index: usize,
        limit: usize,
    },
    InvalidEndianness(String),
    InvalidWidth(String),
    InvalidNumber(String),
}

impl Display for ErrorType {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::IOError(e) => write!(
                fmt,
                "An IO Error occurred, Reason: {:?}.",
                e
            ),
            ErrorType::RangeError { field, value } => write!(
                fmt,
                "calculated {} is negative: {}",
                field,
                value
            ),
            ErrorType::IndexError { index, size } => write!(
                fmt,
                "index out of bounds: {} (buffer size {})",
                index,
                size
            ),
            ErrorType::WindowIndexError { index, limit } => write!(
                fmt,
                "index out of bounds: {} (view limit {})",
                index,
                limit
            ),
            ErrorType::InvalidEndianness(value) => write!(
                fmt,
                "endianness must be either big or little, got '{}'",
                value
            ),
            ErrorType::InvalidWidth(value) => write!(
                fmt,
                "width must be one of u8, u16, u24 or u32, got '{}'",
                value
            ),
            ErrorType::InvalidNumber(value) => write!(
                fmt,
                "expected a number, got '{}'",
                value
            ),
        }
    }
}

impl Error for ErrorType {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ErrorType::IOError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ErrorType {
    fn from(inner: io::Error) -> ErrorType {
        ErrorType::IOError(inner)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorType;
    use crate::helper::range_helper::WindowField;

    #[test]
    fn range_error_names_resolved_value() {
        let error = ErrorType::RangeError { field: WindowField::Offset, value: -984 };
        assert_eq!(error.to_string(), "calculated offset is negative: -984");
        let error = ErrorType::RangeError { field: WindowField::Size, value: -3 };
        assert_eq!(error.to_string(), "calculated size is negative: -3");
    }

    #[test]
    fn index_errors_name_their_bound() {
        let error = ErrorType::IndexError { index: 14, size: 14 };
        assert_eq!(error.to_string(), "index out of bounds: 14 (buffer size 14)");
        let error = ErrorType::WindowIndexError { index: 5, limit: 2 };
        assert_eq!(error.to_string(), "index out of bounds: 5 (view limit 2)");
    }

    #[test]
    fn io_error_is_wrapped() {
        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: ErrorType = inner.into();
        assert!(matches!(error, ErrorType::IOError(_)));
        assert!(std::error::Error::source(&error).is_some());
    }
}
