pub use self::data_view::DataView;
pub use self::endianness::Endianness;
pub use self::width::Width;

pub mod data_view;
pub mod endianness;
pub mod width;
