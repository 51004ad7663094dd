use std::fmt::{Display, Formatter};
use std::str::FromStr;
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use crate::constants::DEFAULT_ENDIANNESS;
use crate::error::{Result, ErrorType};

/// Byte order used to compose and split multi byte fields
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// the first byte is the most significant one
    Big,
    /// the first byte is the least significant one
    Little,
}

impl Endianness {

    /// compose `bytes` (1 to 8 bytes) into an unsigned integer
    pub fn read_uint(self, bytes: &[u8]) -> u64 {
        match self {
            Endianness::Big => BigEndian::read_uint(bytes, bytes.len()),
            Endianness::Little => LittleEndian::read_uint(bytes, bytes.len()),
        }
    }

    /// split `value` into `bytes`, which must be wide enough to hold it
    pub fn write_uint(self, bytes: &mut [u8], value: u64) {
        let byte_count = bytes.len();
        match self {
            Endianness::Big => BigEndian::write_uint(bytes, value, byte_count),
            Endianness::Little => LittleEndian::write_uint(bytes, value, byte_count),
        }
    }
}

impl Default for Endianness {
    fn default() -> Self {
        DEFAULT_ENDIANNESS
    }
}

impl FromStr for Endianness {
    type Err = ErrorType;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "big" => Ok(Endianness::Big),
            "little" => Ok(Endianness::Little),
            other => Err(ErrorType::InvalidEndianness(other.to_string())),
        }
    }
}

impl Display for Endianness {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Endianness::Big => f.write_str("big"),
            Endianness::Little => f.write_str("little"),
        }
    }
}
