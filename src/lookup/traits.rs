//! Trait abstraction for the postal-code lookup to enable mocking in tests

use async_trait::async_trait;

/// Address components returned by a successful lookup. Missing sub-fields
/// are empty strings, never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub district: String,
    pub city: String,
    pub state: String,
}

/// Tagged outcome of a lookup. Callers always receive one of these;
/// nothing throws past this boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    /// The directory knows the code and returned its address
    Found(Address),
    /// The directory answered but does not know the code
    NotFound,
    /// Network, HTTP, or parse failure; the reason is opaque
    TransportError(String),
}

/// Stateless async lookup from an 8-character postal code to an address.
///
/// The exact-length precondition is the caller's job; implementations may
/// be handed any string and still must only answer with a `LookupResult`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostalLookup: Send + Sync {
    async fn lookup(&self, code: &str) -> LookupResult;
}
