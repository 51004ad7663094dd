#[macro_use]
mod logger;

pub mod constants;
pub mod error;
pub mod field_types;
pub mod general;
pub mod buffer;
pub mod view;
pub mod helper;

#[macro_use]
extern crate num_derive;
