pub mod range_helper;
pub mod sha256_helper;
