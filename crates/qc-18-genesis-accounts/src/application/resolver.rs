//! # Address Resolver
//!
//! Turns user input into a canonical address. Literal addresses win; the key
//! store is consulted only when the input does not parse as one.

use shared_types::Address;

use crate::domain::GenesisAccountError;
use crate::ports::KeyStore;

/// Resolves an address-or-alias against the configured prefix.
pub struct AddressResolver<'a, K: KeyStore + ?Sized> {
    prefix: &'a str,
    keys: &'a K,
}

impl<'a, K: KeyStore + ?Sized> AddressResolver<'a, K> {
    pub fn new(prefix: &'a str, keys: &'a K) -> Self {
        Self { prefix, keys }
    }

    pub fn resolve(&self, input: &str) -> Result<Address, GenesisAccountError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(GenesisAccountError::AddressResolution {
                input: input.to_string(),
                reason: "empty input".to_string(),
            });
        }

        let parse_err = match Address::parse_with_prefix(input, self.prefix) {
            Ok(address) => return Ok(address),
            Err(e) => e,
        };

        let stored = self
            .keys
            .key_address(input)
            .map_err(|key_err| GenesisAccountError::AddressResolution {
                input: input.to_string(),
                reason: format!("not an address ({}) and {}", parse_err, key_err),
            })?;

        tracing::debug!(alias = input, address = %stored, "[qc-18] Resolved key alias");

        // Stored keys may have been created under another prefix.
        Address::from_bytes(self.prefix, stored.as_bytes()).map_err(|e| {
            GenesisAccountError::AddressResolution {
                input: input.to_string(),
                reason: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryKeyStore;
    use crate::domain::ErrorKind;

    fn addr(prefix: &str, n: u8) -> Address {
        Address::from_bytes(prefix, &[n; 20]).unwrap()
    }

    #[test]
    fn test_literal_address_skips_keystore() {
        let keys = MemoryKeyStore::unavailable();
        let resolver = AddressResolver::new("qc", &keys);

        let resolved = resolver.resolve(addr("qc", 1).as_str()).unwrap();
        assert_eq!(resolved, addr("qc", 1));
    }

    #[test]
    fn test_alias_resolved_through_keystore() {
        let keys = MemoryKeyStore::new().with_key("validator", addr("qc", 2));
        let resolver = AddressResolver::new("qc", &keys);

        assert_eq!(resolver.resolve("validator").unwrap(), addr("qc", 2));
    }

    #[test]
    fn test_alias_rendered_with_configured_prefix() {
        let keys = MemoryKeyStore::new().with_key("old", addr("cosmos", 3));
        let resolver = AddressResolver::new("qc", &keys);

        let resolved = resolver.resolve("old").unwrap();
        assert_eq!(resolved.prefix(), "qc");
        assert_eq!(resolved.as_bytes(), &[3u8; 20]);
    }

    #[test]
    fn test_unknown_alias_fails() {
        let keys = MemoryKeyStore::new();
        let resolver = AddressResolver::new("qc", &keys);

        let err = resolver.resolve("nobody").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AddressResolution);
        assert!(err.to_string().contains("nobody"));
    }

    #[test]
    fn test_unreachable_keystore_fails() {
        let keys = MemoryKeyStore::unavailable();
        let resolver = AddressResolver::new("qc", &keys);

        let err = resolver.resolve("validator").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AddressResolution);
    }

    #[test]
    fn test_foreign_prefix_literal_falls_back_to_alias() {
        let keys = MemoryKeyStore::new();
        let resolver = AddressResolver::new("qc", &keys);

        let err = resolver.resolve(addr("cosmos", 4).as_str()).unwrap_err();
        assert!(err.to_string().contains("invalid address prefix"));
    }

    #[test]
    fn test_empty_input_fails() {
        let keys = MemoryKeyStore::new();
        let resolver = AddressResolver::new("qc", &keys);
        assert_eq!(
            resolver.resolve("  ").unwrap_err().kind(),
            ErrorKind::AddressResolution
        );
    }
}
