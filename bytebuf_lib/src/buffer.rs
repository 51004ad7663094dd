pub use self::byte_buffer::{Buffer, SharedBuffer};

pub mod byte_buffer;
