/// absolute or window relative byte position
pub type ByteIndex = usize;
/// bit position, counted from the least significant bit of the first byte
pub type BitIndex = usize;

/// offset or size as passed by the caller, negative values count from the buffer end
pub type RawWindowValue = i64;

/// value passed to a width setter before clamping
pub type RawFieldValue = i64;

/// 3 byte fields are carried in the next wider primitive
pub type U24 = u32;

/// a single bit, either 0 or 1
pub type Bit = u8;
