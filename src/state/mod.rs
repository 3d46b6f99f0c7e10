//! Form state module

mod store;
mod values;

pub use store::*;
pub use values::*;
