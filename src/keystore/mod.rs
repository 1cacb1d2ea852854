//! # Identity Keystore
//!
//! The boundary between the crypto core and the wallet's key storage.
//!
//! ## Design
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      KEYSTORE BOUNDARY                                  │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  KeyStore Trait                                                 │   │
//! │  │  ──────────────                                                  │   │
//! │  │                                                                 │   │
//! │  │  resolve_private_key(path, password) → KeyPair                 │   │
//! │  │                                                                 │   │
//! │  │  • async: resolution may be slow or need user interaction      │   │
//! │  │  • passed explicitly into every call — no ambient identity     │   │
//! │  │  • the returned future resolves exactly once                   │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  Implementations:                                                      │
//! │  ───────────────                                                        │
//! │                                                                         │
//! │  ┌───────────────┐  ┌───────────────────────────────────────────┐      │
//! │  │ MemoryKeyStore│  │ Platform wallets (HD keystores, hardware  │      │
//! │  │               │  │ devices) implement KeyStore themselves;   │      │
//! │  │ - development │  │ the core never sees how paths map to      │      │
//! │  │ - testing     │  │ scalars.                                  │      │
//! │  └───────────────┘  └───────────────────────────────────────────┘      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Older wallets address keys with two-component paths, current wallets
//! with three. [`DerivationScheme`] names that difference explicitly and
//! is chosen once when a store is constructed, instead of being decided
//! by inspecting wallet metadata at every call site.

mod memory;
mod path;

pub use memory::MemoryKeyStore;
pub use path::{DerivationScheme, KeyPath};

use async_trait::async_trait;

use crate::crypto::keys::KeyPair;
use crate::error::Result;

/// Capability handle for resolving wallet private keys
///
/// Implementations own the mapping from a [`KeyPath`] to a private
/// scalar, including any password-protected decryption or device
/// interaction that requires.
#[async_trait]
pub trait KeyStore: Send + Sync {
    /// Resolve the private key stored at `path`
    ///
    /// ## Errors
    ///
    /// Returns `KeyRetrievalFailed` when the key is unavailable: no key
    /// at the path, a wrong password, or a locked/unreachable backing
    /// store. Callers surface this as "wrong password or unavailable
    /// key".
    async fn resolve_private_key(&self, path: &KeyPath, password: &str) -> Result<KeyPair>;
}
