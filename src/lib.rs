//! # Shade Core
//!
//! Stealth messaging and key-management core for the Shade wallet:
//! encrypt a short message to another party's public key without any
//! prior shared secret, and encrypt sensitive wallet material at rest
//! under a user password.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         SHADE CORE MODULES                              │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐    │
//! │  │  crypto::stealth │   │ crypto::password │   │   crypto::tag    │    │
//! │  │                  │   │                  │   │                  │    │
//! │  │ - seal to pubkey │   │ - at-rest        │   │ - transaction-   │    │
//! │  │ - open envelope  │   │   encryption     │   │   matching       │    │
//! │  │ - identity keys  │   │ - password keys  │   │   fingerprints   │    │
//! │  └────────┬─────────┘   └────────┬─────────┘   └──────────────────┘    │
//! │           │                      │                                      │
//! │           └──────────┬───────────┘                                      │
//! │                      ▼                                                  │
//! │  ┌──────────────────────────────────────┐   ┌──────────────────────┐   │
//! │  │  crypto::kdf + crypto::keys          │   │      keystore        │   │
//! │  │                                      │   │                      │   │
//! │  │ - X25519 keypairs                    │◄──│ - KeyStore trait     │   │
//! │  │ - ECDH shared secrets (SHA-512)      │   │ - key paths/schemes  │   │
//! │  │ - PBKDF2 password stretching         │   │ - in-memory store    │   │
//! │  └──────────────────────────────────────┘   └──────────────────────┘   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Hierarchy
//!
//! - [`error`] - Error types for the entire library
//! - [`crypto`] - Keypairs, key derivation, envelopes, records, tags
//! - [`keystore`] - The async boundary to the wallet's key storage
//!
//! External collaborators — HD address derivation, blockchain scanning,
//! persistence, and UI — live outside this crate and reach it through
//! the functions re-exported below. The scanner consumes
//! [`crypto::message_tag`]; everything else consumes the envelope and
//! record codecs.
//!
//! ## Security Model
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          SECURITY LAYERS                                │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Stealth Messaging (X25519 + SHA-512 + AES-256-GCM)                    │
//! │  ──────────────────────────────────────────────────                     │
//! │  A fresh ephemeral keypair per message derives a one-time shared        │
//! │  secret with the recipient's long-term public key. No interactive      │
//! │  negotiation, no key reuse across messages.                            │
//! │                                                                         │
//! │  At-Rest Encryption (PBKDF2 + AES-256-GCM)                             │
//! │  ─────────────────────────────────────────                              │
//! │  Wallet secrets are encrypted under password-derived keys with         │
//! │  random salts and ivs, padded to mask plaintext length, and            │
//! │  authenticated so tampering and wrong passwords are detected           │
//! │  before any plaintext is released.                                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod crypto;
pub mod error;
pub mod keystore;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use crypto::{
    derive_key, derive_shared, derive_split_shared, message_tag, password, stealth, KeyPair,
    PasswordCipherRecord, PublicKey, SharedSecret, SplitSecret, StealthEnvelope,
};
pub use error::{Error, Result};
pub use keystore::{DerivationScheme, KeyPath, KeyStore, MemoryKeyStore};
