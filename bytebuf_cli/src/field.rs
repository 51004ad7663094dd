use std::fmt::{Display, Formatter};
use std::str::FromStr;
use bytebuf_lib::error::ErrorType;
use bytebuf_lib::view::Width;

/// A field the CLI can read or write through a view
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Field {
    /// a single bit, addressed by bit index
    Bit,
    /// an unsigned integer, addressed by byte index
    Uint(Width),
}

impl FromStr for Field {
    type Err = ErrorType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bit" => Ok(Field::Bit),
            width => Ok(Field::Uint(width.parse()?)),
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Bit => f.write_str("bit"),
            Field::Uint(width) => Display::fmt(width, f),
        }
    }
}
