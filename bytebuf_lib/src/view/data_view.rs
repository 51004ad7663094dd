use std::fmt::{Display, Formatter};
use std::rc::Rc;
use crate::buffer::SharedBuffer;
use crate::constants::{BITS_PER_BYTE, MAX_FIELD_BYTES};
use crate::error::{Result, ErrorType};
use crate::field_types::{BitIndex, ByteIndex, RawFieldValue, RawWindowValue, Bit, U24};
use crate::general::byte_storage::ByteStorage;
use crate::helper::range_helper::{resolve_from_end, WindowField};
use crate::view::endianness::Endianness;
use crate::view::width::Width;

/// A window into a shared buffer with endianness aware field access.
///
/// The view never copies the buffer. All indices passed to its accessors are
/// relative to `offset`. The first byte (or bit) an accessor addresses must lie
/// inside the window, otherwise a `WindowIndexError` is returned. The absolute
/// indices are then checked by the buffer itself, so a window reaching past the
/// end of the buffer only fails once a byte outside of the buffer is touched.
///
/// `offset` and `length` are resolved against the buffer size at the time they
/// are assigned. A later resize of the buffer does not change them.
pub struct DataView {
    buffer: SharedBuffer,
    offset: usize,
    length: usize,
    endianness: Endianness,
}

impl DataView {

    /// Create a view over `buffer`.
    ///
    /// * `offset` - defaults to 0, negative values count from the buffer end
    /// * `length` - defaults to the rest of the buffer after `offset`,
    ///   negative values count from the buffer end
    ///
    /// Fails with a `RangeError` if either value resolves below zero. An
    /// explicit length is resolved before the offset.
    pub fn new(buffer: SharedBuffer, offset: Option<RawWindowValue>, length: Option<RawWindowValue>, endianness: Endianness) -> Result<DataView> {
        let size = buffer.borrow().size();
        let explicit_length = match length {
            Some(raw) => Some(resolve_from_end(raw, size, WindowField::Size)?),
            None => None,
        };
        let offset = resolve_from_end(offset.unwrap_or(0), size, WindowField::Offset)?;
        let length = match explicit_length {
            Some(length) => length,
            None => Self::remainder(size, offset)?,
        };
        let view = DataView {
            buffer,
            offset,
            length,
            endianness,
        };
        log_view_created!(view);
        Ok(view)
    }

    /// view over the whole buffer in the default byte order
    pub fn with_defaults(buffer: SharedBuffer) -> Result<DataView> {
        Self::new(buffer, None, None, Endianness::default())
    }

    fn remainder(size: usize, offset: usize) -> Result<usize> {
        let remainder = size as i64 - offset as i64;
        if remainder < 0 {
            return Err(ErrorType::RangeError { field: WindowField::Size, value: remainder });
        }
        Ok(remainder as usize)
    }

    pub fn buffer(&self) -> &SharedBuffer {
        &self.buffer
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// re-resolve the offset against the current buffer size, the length is not changed
    pub fn set_offset(&mut self, offset: RawWindowValue) -> Result<()> {
        let size = self.buffer.borrow().size();
        self.offset = resolve_from_end(offset, size, WindowField::Offset)?;
        log_window_changed!(WindowField::Offset, Some(offset), self.offset);
        Ok(())
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// re-resolve the length against the current buffer size, `None` selects the rest of the buffer after `offset`
    pub fn set_length(&mut self, length: Option<RawWindowValue>) -> Result<()> {
        let size = self.buffer.borrow().size();
        self.length = match length {
            Some(raw) => resolve_from_end(raw, size, WindowField::Size)?,
            None => Self::remainder(size, self.offset)?,
        };
        log_window_changed!(WindowField::Size, length, self.length);
        Ok(())
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// true if both views operate on the same buffer
    pub fn shares_buffer_with(&self, other: &DataView) -> bool {
        Rc::ptr_eq(&self.buffer, &other.buffer)
    }

    /// window relative `index` to buffer index, `index` must be inside the window
    fn absolute_index(&self, index: ByteIndex) -> Result<ByteIndex> {
        if index >= self.length {
            return Err(ErrorType::WindowIndexError { index, limit: self.length });
        }
        Ok(self.offset.saturating_add(index))
    }

    fn bit_position(&self, bit_index: BitIndex) -> Result<(ByteIndex, u8)> {
        let bit_limit = self.length.saturating_mul(BITS_PER_BYTE);
        if bit_index >= bit_limit {
            return Err(ErrorType::WindowIndexError { index: bit_index, limit: bit_limit });
        }
        let byte_index = self.absolute_index(bit_index / BITS_PER_BYTE)?;
        let bit_mask = 1u8 << (bit_index % BITS_PER_BYTE);
        Ok((byte_index, bit_mask))
    }

    /// bit `bit_index % 8` (counted from the least significant bit) of byte `bit_index / 8`
    pub fn get_bit(&self, bit_index: BitIndex) -> Result<Bit> {
        let (byte_index, bit_mask) = self.bit_position(bit_index)?;
        let byte = self.buffer.borrow().get(byte_index)?;
        Ok(if byte & bit_mask != 0 { 1 } else { 0 })
    }

    /// same addressing as get_bit, the other 7 bits of the byte are kept
    pub fn set_bit(&mut self, bit_index: BitIndex, bit: bool) -> Result<()> {
        let (byte_index, bit_mask) = self.bit_position(bit_index)?;
        let mut buffer = self.buffer.borrow_mut();
        let byte = buffer.get(byte_index)?;
        let byte = if bit { byte | bit_mask } else { byte & !bit_mask };
        buffer.set(byte_index, byte)
    }

    /// Read an unsigned field of `width` bytes starting at `index`.
    ///
    /// Only the first byte has to be inside the window, the remaining bytes
    /// may reach past it as long as they are inside the buffer.
    pub fn get_uint(&self, width: Width, index: ByteIndex) -> Result<u32> {
        let start = self.absolute_index(index)?;
        let mut scratch = [0u8; MAX_FIELD_BYTES];
        let field = &mut scratch[..width.byte_count()];
        let buffer = self.buffer.borrow();
        for (i, byte) in field.iter_mut().enumerate() {
            *byte = buffer.get(start.saturating_add(i))?;
        }
        Ok(self.endianness.read_uint(field) as u32)
    }

    /// Write an unsigned field of `width` bytes starting at `index`.
    ///
    /// Values above the maximum of the width are written as the maximum,
    /// negative values as zero. Nothing is written if any byte of the field
    /// is outside of the buffer.
    pub fn set_uint(&mut self, width: Width, index: ByteIndex, value: RawFieldValue) -> Result<()> {
        let clamped = width.clamp(value);
        if i64::from(clamped) != value {
            log_value_clamped!(width, value, clamped);
        }
        let start = self.absolute_index(index)?;
        let mut buffer = self.buffer.borrow_mut();
        buffer.check_range(start, width.byte_count())?;
        let mut scratch = [0u8; MAX_FIELD_BYTES];
        let field = &mut scratch[..width.byte_count()];
        self.endianness.write_uint(field, u64::from(clamped));
        for (i, byte) in field.iter().enumerate() {
            buffer.set(start + i, *byte)?;
        }
        Ok(())
    }

    pub fn get_u8(&self, index: ByteIndex) -> Result<u8> {
        Ok(self.get_uint(Width::U8, index)? as u8)
    }

    pub fn get_u16(&self, index: ByteIndex) -> Result<u16> {
        Ok(self.get_uint(Width::U16, index)? as u16)
    }

    pub fn get_u24(&self, index: ByteIndex) -> Result<U24> {
        self.get_uint(Width::U24, index)
    }

    pub fn get_u32(&self, index: ByteIndex) -> Result<u32> {
        self.get_uint(Width::U32, index)
    }

    pub fn set_u8(&mut self, index: ByteIndex, value: RawFieldValue) -> Result<()> {
        self.set_uint(Width::U8, index, value)
    }

    pub fn set_u16(&mut self, index: ByteIndex, value: RawFieldValue) -> Result<()> {
        self.set_uint(Width::U16, index, value)
    }

    pub fn set_u24(&mut self, index: ByteIndex, value: RawFieldValue) -> Result<()> {
        self.set_uint(Width::U24, index, value)
    }

    pub fn set_u32(&mut self, index: ByteIndex, value: RawFieldValue) -> Result<()> {
        self.set_uint(Width::U32, index, value)
    }

    /// Copy `bytes` into the buffer starting at `index`.
    ///
    /// The whole destination range is checked before the first byte is written.
    pub fn set_bytes(&mut self, index: ByteIndex, bytes: &[u8]) -> Result<()> {
        let start = self.absolute_index(index)?;
        if bytes.is_empty() {
            return Ok(());
        }
        let mut buffer = self.buffer.borrow_mut();
        buffer.check_range(start, bytes.len())?;
        buffer.buf_mut()[start..start + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    /// Like `set_bytes`, every value is clamped to `0..=255` first.
    pub fn set_values(&mut self, index: ByteIndex, values: &[RawFieldValue]) -> Result<()> {
        let bytes: Vec<u8> = values.iter()
            .map(|value| {
                let clamped = Width::U8.clamp(*value);
                if i64::from(clamped) != *value {
                    log_value_clamped!(Width::U8, *value, clamped);
                }
                clamped as u8
            })
            .collect();
        self.set_bytes(index, &bytes)
    }

    /// Copy all bytes of `source` into this view starting at `index`.
    ///
    /// `source` may be the buffer of this view.
    pub fn copy_from_buffer(&mut self, index: ByteIndex, source: &SharedBuffer) -> Result<()> {
        let bytes = source.borrow().raw_bytes().to_vec();
        self.set_bytes(index, &bytes)
    }

    /// Copy the window of `source` into this view starting at `index`.
    ///
    /// The source window is taken as a snapshot first, so both views may share a buffer.
    pub fn copy_from(&mut self, index: ByteIndex, source: &DataView) -> Result<()> {
        let bytes = source.to_vec()?;
        self.set_bytes(index, &bytes)
    }

    /// snapshot of the `length` bytes starting at `offset`
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        if self.length == 0 {
            return Ok(Vec::new());
        }
        let buffer = self.buffer.borrow();
        buffer.check_range(self.offset, self.length)?;
        Ok(buffer.buf()[self.offset..self.offset + self.length].to_vec())
    }

    /// snapshot of the window clipped to the end of the buffer, never fails
    pub fn bytes_in_bounds(&self) -> Vec<u8> {
        let buffer = self.buffer.borrow();
        let start = self.offset.min(buffer.size());
        let end = self.offset.saturating_add(self.length).min(buffer.size());
        buffer.buf()[start..end].to_vec()
    }
}

impl Display for DataView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DataView {{ offset: {}, length: {}, endianness: {} }}",
            self.offset,
            self.length,
            self.endianness
        )
    }
}
