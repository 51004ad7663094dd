use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::ops::Range;
use crate::helper::range_helper::RangeCompare::{LOWER, HIGHER, CONTAINED};
use crate::error::{Result, ErrorType};
use crate::field_types::RawWindowValue;

pub enum RangeCompare {
    /// value is lower than range
    LOWER,
    /// value is in range
    CONTAINED,
    /// value is higher than range
    HIGHER,
}

/// check if value is lower, contained or higher than the range
pub fn compare_range<T>(range: &Range<T>, value: T) -> RangeCompare
    where T: PartialOrd<T>
{
    if value < range.start {
        LOWER
    } else if value >= range.end {
        HIGHER
    } else {
        CONTAINED
    }
}

/// The view attribute a raw value is resolved for, used in error messages
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WindowField {
    Offset,
    Size,
}

impl Display for WindowField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            WindowField::Offset => f.write_str("offset"),
            WindowField::Size => f.write_str("size"),
        }
    }
}

/// Resolve a raw offset or size against the current buffer size.
///
/// Negative values count from the end of the buffer (`-1` is `size - 1`).
/// Only the lower bound is validated: a value that still resolves below zero
/// is a `RangeError`, a value beyond `size` is returned as is.
pub fn resolve_from_end(raw: RawWindowValue, size: usize, field: WindowField) -> Result<usize> {
    let resolved = if raw >= 0 {
        raw
    } else {
        i64::try_from(size).unwrap_or(i64::MAX).saturating_add(raw)
    };
    if resolved < 0 {
        return Err(ErrorType::RangeError { field, value: resolved });
    }
    Ok(usize::try_from(resolved).unwrap_or(usize::MAX))
}
