//! # Error Handling
//!
//! This module provides the error types for Shade Core.
//!
//! ## Error Hierarchy
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           ERROR HIERARCHY                               │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Error (top-level)                                                     │
//! │  │                                                                      │
//! │  ├── Key Errors                                                        │
//! │  │   ├── InvalidPoint          - Public key rejected by the curve      │
//! │  │   ├── InvalidKey            - Malformed key encoding/length         │
//! │  │   └── KeyDerivationFailed   - KDF rejected its inputs               │
//! │  │                                                                      │
//! │  ├── Cipher Errors                                                     │
//! │  │   ├── EncryptionFailed      - Encryption operation failed           │
//! │  │   ├── DecryptionFailed      - Structurally invalid ciphertext       │
//! │  │   └── BadPassword           - Authentication failed under the       │
//! │  │                               re-derived password key               │
//! │  │                                                                      │
//! │  ├── Keystore Errors                                                   │
//! │  │   └── KeyRetrievalFailed    - Identity keystore could not resolve   │
//! │  │                               the requested private key             │
//! │  │                                                                      │
//! │  └── Serialization Errors                                              │
//! │      └── SerializationFailed   - Envelope/record encoding failed       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Callers should surface `KeyRetrievalFailed` to users as "wrong password
//! or unavailable key" and `DecryptionFailed` as "message could not be
//! decrypted". Corrupted plaintext is never returned silently: every
//! decryption path authenticates before releasing bytes.

use thiserror::Error;

/// Result type alias for Shade Core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Shade Core
///
/// Errors are categorized by the layer that produced them so wallet
/// frontends can map them onto meaningful user messages.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Key Errors
    // ========================================================================

    /// Public key is not a usable curve point
    #[error("Invalid public key point: {0}")]
    InvalidPoint(String),

    /// Malformed key encoding or length
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Key derivation failed
    #[error("Failed to derive key: {0}")]
    KeyDerivationFailed(String),

    // ========================================================================
    // Cipher Errors
    // ========================================================================

    /// Encryption failed
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Structurally invalid ciphertext, wrong lengths, or padding mismatch
    #[error("Message could not be decrypted: {0}")]
    DecryptionFailed(String),

    /// The password-derived key failed to authenticate the ciphertext
    #[error("Wrong password: the data could not be authenticated.")]
    BadPassword,

    // ========================================================================
    // Keystore Errors
    // ========================================================================

    /// The identity keystore could not resolve the requested private key
    #[error("Wrong password or unavailable key: {0}")]
    KeyRetrievalFailed(String),

    // ========================================================================
    // Serialization Errors
    // ========================================================================

    /// Envelope or record encoding failed
    #[error("Serialization error: {0}")]
    SerializationFailed(String),
}

impl Error {
    /// Check if this error requires user action
    ///
    /// These are the failures a wallet resolves by re-prompting the user
    /// (typically for a password) rather than by retrying.
    pub fn requires_user_action(&self) -> bool {
        matches!(self, Error::BadPassword | Error::KeyRetrievalFailed(_))
    }
}

// ============================================================================
// ERROR CONVERSIONS
// ============================================================================

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationFailed(err.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_action_errors() {
        assert!(Error::BadPassword.requires_user_action());
        assert!(Error::KeyRetrievalFailed("locked".into()).requires_user_action());
        assert!(!Error::DecryptionFailed("garbage".into()).requires_user_action());
        assert!(!Error::InvalidPoint("identity".into()).requires_user_action());
    }

    #[test]
    fn test_serde_error_conversion() {
        let bad = serde_json::from_str::<serde_json::Value>("{not json");
        let err: Error = bad.unwrap_err().into();
        assert!(matches!(err, Error::SerializationFailed(_)));
    }
}
