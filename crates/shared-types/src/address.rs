//! # State Addressing
//!
//! Every record lives at `namespace_prefix || sha512(name)[..64]`, a
//! 70-hex-character address. The prefix is the first 6 hex characters of
//! SHA-512 over the namespace literal.
//!
//! Two names whose digests share the first 64 hex characters land on the same
//! address. That is accepted: the stored value at an address is a bucket that
//! can hold several records.

use std::fmt;

use shared_crypto::sha512_hex;

use crate::NAMESPACE_LITERAL;

/// Hex characters taken from the namespace digest.
pub const NAMESPACE_PREFIX_LEN: usize = 6;

/// Hex characters taken from the record-name digest.
pub const NAME_HASH_LEN: usize = 64;

/// Total address length in hex characters.
pub const ADDRESS_LEN: usize = NAMESPACE_PREFIX_LEN + NAME_HASH_LEN;

/// Namespace scoping all addresses of one transaction family.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Namespace {
    literal: String,
    prefix: String,
}

impl Namespace {
    /// Derive the namespace prefix from its literal. Computed once at startup.
    pub fn from_literal(literal: &str) -> Self {
        let digest = sha512_hex(literal.as_bytes());
        Self {
            literal: literal.to_string(),
            prefix: digest[..NAMESPACE_PREFIX_LEN].to_string(),
        }
    }

    /// Namespace of the `we` family.
    pub fn we() -> Self {
        Self::from_literal(NAMESPACE_LITERAL)
    }

    /// The 6-hex-character prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The literal the prefix was derived from.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Whether `address` falls inside this namespace.
    pub fn contains(&self, address: &StorageAddress) -> bool {
        address.as_str().starts_with(&self.prefix)
    }
}

/// A 70-hex-character state address.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StorageAddress(String);

impl StorageAddress {
    /// Wrap an address string received from the ledger.
    ///
    /// Returns `None` unless the value is exactly 70 lowercase hex characters.
    pub fn parse(value: &str) -> Option<Self> {
        let valid = value.len() == ADDRESS_LEN
            && value
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
        valid.then(|| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for StorageAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StorageAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Deterministic record-name to address mapping.
#[derive(Clone, Debug)]
pub struct AddressCodec {
    namespace: Namespace,
}

impl AddressCodec {
    pub fn new(namespace: &Namespace) -> Self {
        Self {
            namespace: namespace.clone(),
        }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Address of the bucket holding the record called `name`.
    pub fn address(&self, name: &str) -> StorageAddress {
        let digest = sha512_hex(name.as_bytes());
        let mut address = String::with_capacity(ADDRESS_LEN);
        address.push_str(self.namespace.prefix());
        address.push_str(&digest[..NAME_HASH_LEN]);
        StorageAddress(address)
    }
}

impl Default for AddressCodec {
    fn default() -> Self {
        Self::new(&Namespace::we())
    }
}
