//! In-memory keystore for development and testing.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;
use zeroize::Zeroizing;

use crate::crypto::keys::{KeyPair, KEY_SIZE};
use crate::crypto::password::{self, PasswordCipherRecord};
use crate::error::{Error, Result};
use crate::keystore::{DerivationScheme, KeyPath, KeyStore};

/// An in-memory [`KeyStore`]
///
/// Each private key is held as a password cipher record encrypted under
/// the wallet password, so keys are never resident in plaintext and a
/// wrong password fails authentication instead of yielding garbage.
/// Production wallets back this with a platform keychain; the interface
/// is the same.
pub struct MemoryKeyStore {
    /// Path scheme this wallet was created with
    scheme: DerivationScheme,

    /// Encrypted private keys by normalized path
    entries: RwLock<HashMap<KeyPath, PasswordCipherRecord>>,
}

impl MemoryKeyStore {
    /// Create an empty store for the given derivation scheme
    pub fn new(scheme: DerivationScheme) -> Self {
        Self {
            scheme,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Store a keypair's private half at `path`, encrypted under `password`
    pub fn insert(&self, path: &KeyPath, keypair: &KeyPair, password: &str) -> Result<()> {
        let secret = Zeroizing::new(keypair.secret_bytes());
        let record = password::encrypt(password, secret.as_slice())?;

        let path = self.scheme.normalize(path);
        debug!(%path, "storing encrypted private key");
        self.entries.write().insert(path, record);
        Ok(())
    }

    /// Check whether a key is stored at `path`
    pub fn contains(&self, path: &KeyPath) -> bool {
        self.entries.read().contains_key(&self.scheme.normalize(path))
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl KeyStore for MemoryKeyStore {
    async fn resolve_private_key(&self, path: &KeyPath, password: &str) -> Result<KeyPair> {
        let path = self.scheme.normalize(path);
        debug!(%path, "resolving private key");

        let record = self
            .entries
            .read()
            .get(&path)
            .cloned()
            .ok_or_else(|| Error::KeyRetrievalFailed(format!("no private key at {}", path)))?;

        let secret = Zeroizing::new(password::decrypt(password, &record).map_err(
            |err| match err {
                Error::BadPassword => {
                    Error::KeyRetrievalFailed("wrong wallet password".into())
                }
                other => Error::KeyRetrievalFailed(other.to_string()),
            },
        )?);

        let bytes: [u8; KEY_SIZE] = secret
            .as_slice()
            .try_into()
            .map_err(|_| Error::KeyRetrievalFailed("stored key has invalid length".into()))?;

        Ok(KeyPair::from_bytes(&bytes))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_resolve_round_trip() {
        let store = MemoryKeyStore::new(DerivationScheme::Hierarchical);
        let keypair = KeyPair::generate();
        let path = KeyPath::new(vec![0, 1, 2]);

        store.insert(&path, &keypair, "pw").unwrap();
        let resolved = store.resolve_private_key(&path, "pw").await.unwrap();

        assert_eq!(resolved.secret_bytes(), keypair.secret_bytes());
        assert_eq!(resolved.public_key(), keypair.public_key());
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let store = MemoryKeyStore::new(DerivationScheme::Hierarchical);
        let keypair = KeyPair::generate();
        let path = KeyPath::new(vec![0, 1, 2]);

        store.insert(&path, &keypair, "pw").unwrap();
        let result = store.resolve_private_key(&path, "not-pw").await;

        assert!(matches!(result, Err(Error::KeyRetrievalFailed(_))));
    }

    #[tokio::test]
    async fn test_missing_path() {
        let store = MemoryKeyStore::new(DerivationScheme::Hierarchical);

        let result = store
            .resolve_private_key(&KeyPath::new(vec![9, 9, 9]), "pw")
            .await;

        assert!(matches!(result, Err(Error::KeyRetrievalFailed(_))));
    }

    #[tokio::test]
    async fn test_legacy_paths_resolve_normalized() {
        let store = MemoryKeyStore::new(DerivationScheme::Legacy);
        let keypair = KeyPair::generate();

        // Inserted as legacy [branch, index] = [3, 7]
        store.insert(&KeyPath::new(vec![3, 7]), &keypair, "pw").unwrap();

        // Stored under the hierarchical form [1, 1, 7]
        assert!(store.contains(&KeyPath::new(vec![3, 7])));
        assert_eq!(store.len(), 1);

        let resolved = store
            .resolve_private_key(&KeyPath::new(vec![3, 7]), "pw")
            .await
            .unwrap();
        assert_eq!(resolved.secret_bytes(), keypair.secret_bytes());
    }

    #[test]
    fn test_len_and_empty() {
        let store = MemoryKeyStore::new(DerivationScheme::Hierarchical);
        assert!(store.is_empty());

        store
            .insert(&KeyPath::new(vec![0, 0, 0]), &KeyPair::generate(), "pw")
            .unwrap();
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
    }
}
