//! Postal-code lookup module

mod client;
mod traits;

pub use client::{LookupError, ViaCepClient};
pub use traits::{Address, LookupResult, PostalLookup};

#[cfg(test)]
pub use traits::MockPostalLookup;
