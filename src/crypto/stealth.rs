//! # Stealth Envelopes
//!
//! Encrypt a short message to another party's public key with no prior
//! shared secret.
//!
//! ## Envelope Flow
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      STEALTH ENVELOPE FLOW                              │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  SENDER                                                                │
//! │  ──────                                                                 │
//! │                                                                         │
//! │  Step 1: Generate ephemeral keypair (fresh per message)                │
//! │                                                                         │
//! │  Step 2: Derive shared secret                                          │
//! │     ephemeral_private × recipient_public ──► DH point                  │
//! │     SHA-512(DH point) ──► 64-byte secret                               │
//! │                                                                         │
//! │  Step 3: Encrypt                                                       │
//! │     secret is the passphrase for a password cipher record              │
//! │     (fresh salt/iv drawn inside, AES-256-GCM, 64-byte padding)        │
//! │                                                                         │
//! │  Output: { ephemeral_public, record }                                  │
//! │                                                                         │
//! │  RECIPIENT                                                             │
//! │  ─────────                                                              │
//! │                                                                         │
//! │  recipient_private × ephemeral_public ──► SAME DH point                │
//! │  (privA·pubB == privB·pubA)                                            │
//! │           ↓                                                            │
//! │  same 64-byte secret ──► decrypt the record                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The ephemeral public key travels in the clear; it reveals nothing
//! about the recipient, and the corresponding private key is dropped as
//! soon as the envelope is built.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::crypto::kdf;
use crate::crypto::keys::{KeyPair, PublicKey};
use crate::crypto::password::{self, PasswordCipherRecord};
use crate::error::{Error, Result};
use crate::keystore::{KeyPath, KeyStore};

/// Current envelope format version
pub const ENVELOPE_VERSION: u32 = 1;

/// A sealed message addressed to a public key
///
/// Created per message by the sender, consumed once by the recipient,
/// never mutated. Serializes with named fields for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StealthEnvelope {
    /// Envelope format version
    pub version: u32,

    /// The sender's one-time public key
    pub ephemeral_public: PublicKey,

    /// The encrypted payload
    pub payload: PasswordCipherRecord,
}

/// Encrypt a message to a recipient's public key
///
/// Generates a fresh ephemeral keypair, derives the shared secret against
/// `recipient`, and seals the message with the secret as passphrase. The
/// only side effect is entropy consumption — nothing is persisted.
///
/// ## Errors
///
/// Returns `InvalidPoint` if `recipient` is a low-order point.
pub fn encrypt(recipient: &PublicKey, message: &[u8]) -> Result<StealthEnvelope> {
    let ephemeral = KeyPair::generate();
    let secret = kdf::derive_shared(&ephemeral, recipient)?;
    let payload = password::encrypt_with_passphrase(secret.as_bytes(), message)?;

    Ok(StealthEnvelope {
        version: ENVELOPE_VERSION,
        ephemeral_public: ephemeral.public_key(),
        payload,
    })
}

/// Decrypt an envelope with the recipient's private key
///
/// By DH symmetry, `recipient_private × ephemeral_public` reproduces the
/// sender's secret.
///
/// ## Errors
///
/// Returns `DecryptionFailed` if the payload is malformed or was not
/// encrypted to this keypair (wrong recipient key).
pub fn decrypt(recipient: &KeyPair, envelope: &StealthEnvelope) -> Result<Vec<u8>> {
    if envelope.version != ENVELOPE_VERSION {
        return Err(Error::DecryptionFailed(format!(
            "unsupported envelope version {}",
            envelope.version
        )));
    }

    let secret = kdf::derive_shared(recipient, &envelope.ephemeral_public)?;

    // No human password at this layer: an authentication failure means the
    // envelope was not addressed to this key (or was damaged in transit).
    password::decrypt_with_passphrase(secret.as_bytes(), &envelope.payload).map_err(
        |err| match err {
            Error::BadPassword => {
                Error::DecryptionFailed("envelope was not encrypted to this key".into())
            }
            other => other,
        },
    )
}

/// Decrypt an envelope for a wallet identity
///
/// Resolves the recipient's private key through the identity keystore —
/// a step that may be slow or require the user's password — then
/// decrypts. This is the system's one suspension point: no work happens
/// until the keystore resolves, and the future completes exactly once.
///
/// ## Errors
///
/// Keystore failures (wrong password, locked or missing key) propagate
/// as `KeyRetrievalFailed`; payload failures as in [`decrypt`].
pub async fn decrypt_for_identity(
    envelope: &StealthEnvelope,
    keystore: &dyn KeyStore,
    path: &KeyPath,
    password: &str,
) -> Result<Vec<u8>> {
    debug!(%path, "resolving identity key for stealth decryption");
    let recipient = keystore.resolve_private_key(path, password).await?;
    decrypt(&recipient, envelope)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keystore::{DerivationScheme, MemoryKeyStore};

    #[test]
    fn test_round_trip() {
        let recipient = KeyPair::generate();

        let envelope = encrypt(&recipient.public_key(), b"hello").unwrap();
        let plaintext = decrypt(&recipient, &envelope).unwrap();

        assert_eq!(plaintext, b"hello");
    }

    #[test]
    fn test_round_trip_empty_message() {
        let recipient = KeyPair::generate();

        let envelope = encrypt(&recipient.public_key(), b"").unwrap();
        assert_eq!(decrypt(&recipient, &envelope).unwrap(), b"");
    }

    #[test]
    fn test_round_trip_single_byte() {
        let recipient = KeyPair::generate();

        let envelope = encrypt(&recipient.public_key(), b"x").unwrap();
        assert_eq!(decrypt(&recipient, &envelope).unwrap(), b"x");
    }

    #[test]
    fn test_round_trip_large_message() {
        let recipient = KeyPair::generate();
        let message: Vec<u8> = (0..4096u32).map(|i| (i * 7 % 256) as u8).collect();

        let envelope = encrypt(&recipient.public_key(), &message).unwrap();
        assert_eq!(decrypt(&recipient, &envelope).unwrap(), message);
    }

    #[test]
    fn test_envelope_shape() {
        let recipient = KeyPair::generate();
        let envelope = encrypt(&recipient.public_key(), b"hello").unwrap();

        assert_eq!(envelope.version, ENVELOPE_VERSION);
        // 32-byte compressed point, hex form is 64 chars
        assert_eq!(envelope.ephemeral_public.to_hex().len(), 64);
    }

    #[test]
    fn test_ephemeral_key_is_fresh_per_envelope() {
        let recipient = KeyPair::generate();

        let e1 = encrypt(&recipient.public_key(), b"same").unwrap();
        let e2 = encrypt(&recipient.public_key(), b"same").unwrap();

        assert_ne!(e1.ephemeral_public, e2.ephemeral_public);
        assert_ne!(e1.payload.ciphertext, e2.payload.ciphertext);
    }

    #[test]
    fn test_wrong_recipient_key_fails() {
        let recipient = KeyPair::generate();
        let intruder = KeyPair::generate();

        let envelope = encrypt(&recipient.public_key(), b"hello").unwrap();
        let result = decrypt(&intruder, &envelope);

        assert!(matches!(result, Err(Error::DecryptionFailed(_))));
    }

    #[test]
    fn test_unknown_version_rejected() {
        let recipient = KeyPair::generate();
        let mut envelope = encrypt(&recipient.public_key(), b"hello").unwrap();
        envelope.version = 2;

        assert!(matches!(
            decrypt(&recipient, &envelope),
            Err(Error::DecryptionFailed(_))
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let recipient = KeyPair::generate();
        let envelope = encrypt(&recipient.public_key(), b"hello").unwrap();

        let json = serde_json::to_string(&envelope).unwrap();
        let restored: StealthEnvelope = serde_json::from_str(&json).unwrap();

        assert_eq!(envelope, restored);
        assert_eq!(decrypt(&recipient, &restored).unwrap(), b"hello");
        assert!(json.contains("\"ephemeral_public\""));
    }

    #[tokio::test]
    async fn test_decrypt_for_identity() {
        let store = MemoryKeyStore::new(DerivationScheme::Hierarchical);
        let recipient = KeyPair::generate();
        let path = KeyPath::new(vec![0, 0, 5]);
        store.insert(&path, &recipient, "wallet-password").unwrap();

        let envelope = encrypt(&recipient.public_key(), b"hello").unwrap();

        let plaintext = decrypt_for_identity(&envelope, &store, &path, "wallet-password")
            .await
            .unwrap();
        assert_eq!(plaintext, b"hello");
    }

    #[tokio::test]
    async fn test_decrypt_for_identity_wrong_password() {
        let store = MemoryKeyStore::new(DerivationScheme::Hierarchical);
        let recipient = KeyPair::generate();
        let path = KeyPath::new(vec![0, 0, 5]);
        store.insert(&path, &recipient, "wallet-password").unwrap();

        let envelope = encrypt(&recipient.public_key(), b"hello").unwrap();

        let result = decrypt_for_identity(&envelope, &store, &path, "guess").await;
        assert!(matches!(result, Err(Error::KeyRetrievalFailed(_))));
    }

    #[tokio::test]
    async fn test_decrypt_for_identity_missing_key() {
        let store = MemoryKeyStore::new(DerivationScheme::Hierarchical);
        let recipient = KeyPair::generate();

        let envelope = encrypt(&recipient.public_key(), b"hello").unwrap();

        let result = decrypt_for_identity(
            &envelope,
            &store,
            &KeyPath::new(vec![1, 0, 0]),
            "wallet-password",
        )
        .await;
        assert!(matches!(result, Err(Error::KeyRetrievalFailed(_))));
    }
}
