//! Account address handling.
//!
//! Addresses are opaque strings supplied by the caller, usually written with
//! a `0x` prefix. They are never derived from a public key.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::PrimitivesError;

/// Optional prefix in front of a hex-encoded address.
pub const ADDRESS_PREFIX: &str = "0x";

/// An account address as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Wrap an address string without validating it.
    pub fn new(address: impl Into<String>) -> Self {
        Address(address.into())
    }

    /// The address exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The address with a leading `0x` removed, if present.
    pub fn without_prefix(&self) -> &str {
        self.0.strip_prefix(ADDRESS_PREFIX).unwrap_or(&self.0)
    }

    /// Hex-decode the address (after stripping `0x`) into raw bytes.
    ///
    /// # Returns
    /// The raw address bytes, or `InvalidHex` if the remainder is not hex.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PrimitivesError> {
        Ok(hex::decode(self.without_prefix())?)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Address(s.to_string())
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Address(s)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
