//! Error types

mod config;
mod field;
mod store;
mod submit;

pub use config::*;
pub use field::*;
pub use store::*;
pub use submit::*;
