use std::cell::RefCell;
use std::fmt::{Display, Formatter};
use std::io::Read;
use std::rc::Rc;
use crate::general::byte_storage::ByteStorage;
use crate::error::Result;

/// Handle through which views share a buffer.
///
/// Mutation through one handle is immediately visible through every other one.
pub type SharedBuffer = Rc<RefCell<Buffer>>;

/// A contiguous, zero initialized and resizable block of raw bytes
///
/// Single byte access is provided by the `ByteStorage` trait.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    storage: Vec<u8>,
}

impl Buffer {

    pub fn new(size: usize) -> Buffer {
        log_buffer_created!(size);
        Buffer {
            storage: vec![0u8; size]
        }
    }

    /// copy of the given bytes
    pub fn from_bytes(bytes: &[u8]) -> Buffer {
        Buffer {
            storage: bytes.to_vec()
        }
    }

    /// reads the reader until EOF
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Buffer> {
        let mut storage = Vec::new();
        reader.read_to_end(&mut storage)?;
        Ok(Buffer {
            storage
        })
    }

    /// wrap the buffer so views can share it
    pub fn into_shared(self) -> SharedBuffer {
        Rc::new(RefCell::new(self))
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Change the size of the buffer in place.
    ///
    /// The shared prefix is preserved, bytes added by growing are zero.
    pub fn resize(&mut self, new_size: usize) {
        let old_size = self.storage.len();
        if old_size == new_size {
            return;
        }
        self.storage.resize(new_size, 0);
        log_buffer_resized!(old_size, new_size);
    }

    /// the whole storage as uninterpreted bytes
    pub fn raw_bytes(&self) -> &[u8] {
        &self.storage
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.storage.iter()
    }
}

impl ByteStorage for Buffer {
    fn buf(&self) -> &[u8] {
        &self.storage
    }

    fn buf_mut(&mut self) -> &mut [u8] {
        &mut self.storage
    }
}

impl<'a> IntoIterator for &'a Buffer {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Buffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Buffer {{ size: {} }}", self.len())
    }
}
