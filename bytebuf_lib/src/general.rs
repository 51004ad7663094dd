pub mod byte_storage;
