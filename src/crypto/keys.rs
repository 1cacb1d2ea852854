//! # Key Management
//!
//! X25519 keypairs for stealth messaging.
//!
//! ## Key Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          KEY TYPES                                      │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  KeyPair (X25519)                                               │   │
//! │  │  ────────────────                                                │   │
//! │  │                                                                  │   │
//! │  │  Purpose:                                                       │   │
//! │  │  • Recipient identity keys (held by the wallet keystore)        │   │
//! │  │  • Ephemeral sender keys (fresh per stealth envelope)           │   │
//! │  │  • ECDH shared-secret derivation                                │   │
//! │  │                                                                  │   │
//! │  │  Format:                                                        │   │
//! │  │  • Private key: 32 bytes (kept secret, zeroized on drop)       │   │
//! │  │  • Public key: 32 bytes (shared freely)                        │   │
//! │  │                                                                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  PublicKey                                                      │   │
//! │  │  ─────────                                                       │   │
//! │  │                                                                  │   │
//! │  │  The shareable half of a keypair. Serializes as hex so          │   │
//! │  │  envelopes and address books stay human-inspectable.            │   │
//! │  │                                                                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use x25519_dalek::{PublicKey as X25519PublicKey, StaticSecret};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};

/// Size of private and public keys in bytes
pub const KEY_SIZE: usize = 32;

/// X25519 keypair for stealth-address key exchange
///
/// ## Security
///
/// - The private half is zeroized when this struct is dropped
/// - Ephemeral keypairs must be generated fresh per encryption and
///   never persisted
#[derive(ZeroizeOnDrop)]
pub struct KeyPair {
    /// Private key (secret)
    #[zeroize(skip)] // x25519_dalek handles its own zeroization
    secret: StaticSecret,
    /// Public key (derived from secret)
    #[zeroize(skip)]
    public: X25519PublicKey,
}

impl KeyPair {
    /// Generate a new random keypair
    ///
    /// Uses the operating system's secure random number generator.
    pub fn generate() -> Self {
        let secret = StaticSecret::random_from_rng(OsRng);
        let public = X25519PublicKey::from(&secret);
        Self { secret, public }
    }

    /// Create a keypair from raw private key bytes
    pub fn from_bytes(bytes: &[u8; KEY_SIZE]) -> Self {
        let secret = StaticSecret::from(*bytes);
        let public = X25519PublicKey::from(&secret);
        Self { secret, public }
    }

    /// Derive a keypair from a 32-byte wallet master seed
    ///
    /// Deterministic: the same seed always produces the same keypair.
    /// The seed is stretched through HKDF with a versioned domain string
    /// so keys derived for other purposes from the same seed stay
    /// cryptographically independent.
    pub fn from_seed(seed: &[u8; 32]) -> Result<Self> {
        use hkdf::Hkdf;
        use sha2::Sha256;

        let hkdf = Hkdf::<Sha256>::new(None, seed);
        let mut key = [0u8; KEY_SIZE];
        hkdf.expand(crate::crypto::kdf::domain::STEALTH_KEY, &mut key)
            .map_err(|_| Error::KeyDerivationFailed("HKDF expansion failed".into()))?;

        let keypair = Self::from_bytes(&key);
        key.zeroize();
        Ok(keypair)
    }

    /// Get the secret key bytes (for keystore storage)
    ///
    /// ## Security Warning
    ///
    /// Only use this for secure storage. Never log or transmit these bytes.
    pub fn secret_bytes(&self) -> [u8; KEY_SIZE] {
        self.secret.to_bytes()
    }

    /// Get the public half of this keypair
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.public.to_bytes())
    }

    /// Perform Diffie-Hellman key exchange
    ///
    /// Returns the raw shared point that both parties can compute:
    /// - Sender: ephemeral_secret × recipient_public
    /// - Recipient: recipient_secret × ephemeral_public
    ///
    /// ## Errors
    ///
    /// Returns `InvalidPoint` if `their_public` is a small-order or
    /// identity point, in which case the exchange degenerates to an
    /// all-zero output and the "secret" would be attacker-chosen.
    pub fn diffie_hellman(&self, their_public: &PublicKey) -> Result<[u8; KEY_SIZE]> {
        let their_public = X25519PublicKey::from(their_public.0);
        let shared = self.secret.diffie_hellman(&their_public);
        if !shared.was_contributory() {
            return Err(Error::InvalidPoint(
                "public key is a low-order point, shared secret would be zero".into(),
            ));
        }
        Ok(shared.to_bytes())
    }
}

/// An X25519 public key that can be safely shared with anyone
///
/// Serializes as a hex string for envelopes, address books, and QR codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey(#[serde(with = "hex_bytes")] [u8; KEY_SIZE]);

impl PublicKey {
    /// Create a PublicKey from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }

    /// Encode as hex string (for display/QR codes)
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Decode from hex string
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)
            .map_err(|e| Error::InvalidKey(format!("Invalid hex: {}", e)))?;

        let bytes: [u8; KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| Error::InvalidKey("Public key must be 32 bytes".into()))?;

        Ok(Self(bytes))
    }
}

/// Serde helper for serializing byte arrays as hex
mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<[u8; 32], D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        bytes.try_into().map_err(|_| serde::de::Error::custom("Invalid length"))
    }
}

// ============================================================================
// TESTS
// ============================================================================
