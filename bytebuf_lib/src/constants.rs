use crate::view::endianness::Endianness;

pub const BITS_PER_BYTE: usize = 8;

/// the widest unsigned field a view can read or write
pub const MAX_FIELD_BYTES: usize = 4;

pub const U8_MAX: u32 = 0xFF;
pub const U16_MAX: u32 = 0xFFFF;
pub const U24_MAX: u32 = 0xFF_FFFF;
pub const U32_MAX: u32 = 0xFFFF_FFFF;

/// byte order used when a view is created without an explicit endianness
pub const DEFAULT_ENDIANNESS: Endianness = Endianness::Big;
