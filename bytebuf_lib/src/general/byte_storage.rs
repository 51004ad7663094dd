use crate::error::{Result, ErrorType};
use crate::field_types::ByteIndex;
use crate::helper::range_helper::{compare_range, RangeCompare};

/// Trait for types that own a contiguous block of raw bytes
///
/// Provides bounds checked single byte access on top of the raw slices.
/// Every index outside of `0..size` is an `IndexError`, never silently absorbed.
pub trait ByteStorage {
    /// get the byte buffer of the storage
    fn buf(&self) -> &[u8];
    /// get the mutable byte buffer of the storage
    fn buf_mut(&mut self) -> &mut [u8];

    /// number of bytes in the storage
    fn size(&self) -> usize {
        self.buf().len()
    }

    fn check_index(&self, index: ByteIndex) -> Result<()> {
        match compare_range(&(0..self.size()), index) {
            RangeCompare::CONTAINED => Ok(()),
            RangeCompare::LOWER | RangeCompare::HIGHER => Err(ErrorType::IndexError {
                index,
                size: self.size(),
            }),
        }
    }

    /// check that `count` bytes starting at `start` are all inside the storage
    fn check_range(&self, start: ByteIndex, count: usize) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        self.check_index(start)?;
        self.check_index(start.saturating_add(count - 1))
    }

    fn get(&self, index: ByteIndex) -> Result<u8> {
        self.check_index(index)?;
        Ok(self.buf()[index])
    }

    fn set(&mut self, index: ByteIndex, value: u8) -> Result<()> {
        self.check_index(index)?;
        self.buf_mut()[index] = value;
        Ok(())
    }
}
