use std::fmt::{Display, Formatter};
use std::str::FromStr;
use crate::constants::{U8_MAX, U16_MAX, U24_MAX, U32_MAX};
use crate::error::{Result, ErrorType};
use crate::field_types::RawFieldValue;

/// All supported unsigned field widths, the discriminant is the byte count
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, FromPrimitive)]
pub enum Width {
    U8 = 1,
    U16 = 2,
    U24 = 3,
    U32 = 4,
}

impl Width {

    /// width from a byte count, None if no field has that many bytes
    pub fn from_byte_count(value: u8) -> Option<Width> {
        num::FromPrimitive::from_u8(value)
    }

    pub fn byte_count(self) -> usize {
        self as usize
    }

    /// 2^(8 * byte_count) - 1
    pub fn max_value(self) -> u32 {
        match self {
            Width::U8 => U8_MAX,
            Width::U16 => U16_MAX,
            Width::U24 => U24_MAX,
            Width::U32 => U32_MAX,
        }
    }

    /// clamp `value` to `0..=max_value`
    pub fn clamp(self, value: RawFieldValue) -> u32 {
        if value < 0 {
            0
        } else if value > i64::from(self.max_value()) {
            self.max_value()
        } else {
            value as u32
        }
    }
}

impl FromStr for Width {
    type Err = ErrorType;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "u8" => Ok(Width::U8),
            "u16" => Ok(Width::U16),
            "u24" => Ok(Width::U24),
            "u32" => Ok(Width::U32),
            other => Err(ErrorType::InvalidWidth(other.to_string())),
        }
    }
}

impl Display for Width {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Width::U8 => f.write_str("u8"),
            Width::U16 => f.write_str("u16"),
            Width::U24 => f.write_str("u24"),
            Width::U32 => f.write_str("u32"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::view::width::Width;
    use test_case::test_case;

    #[test_case(Width::U8, 1, 0xFF; "one byte")]
    #[test_case(Width::U16, 2, 0xFFFF; "two bytes")]
    #[test_case(Width::U24, 3, 0xFF_FFFF; "three bytes")]
    #[test_case(Width::U32, 4, 0xFFFF_FFFF; "four bytes")]
    fn dimensions(width: Width, byte_count: usize, max_value: u32) {
        assert_eq!(width.byte_count(), byte_count);
        assert_eq!(width.max_value(), max_value);
        assert_eq!(Width::from_byte_count(byte_count as u8), Some(width));
        assert_eq!(width.to_string().parse::<Width>().unwrap(), width);
    }

    #[test]
    fn unknown_byte_count() {
        assert_eq!(Width::from_byte_count(0), None);
        assert_eq!(Width::from_byte_count(5), None);
    }

    #[test]
    fn clamps() {
        assert_eq!(Width::U8.clamp(-1), 0);
        assert_eq!(Width::U8.clamp(256), 255);
        assert_eq!(Width::U16.clamp(12391), 12391);
        assert_eq!(Width::U32.clamp(i64::from(u32::MAX) + 1), u32::MAX);
        assert_eq!(Width::U32.clamp(i64::MIN), 0);
    }
}
