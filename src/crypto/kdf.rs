//! # Key Derivation Functions
//!
//! Derivation of symmetric keys from passwords and from ECDH exchanges.
//!
//! ## Derivation Paths
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      KEY DERIVATION PATHS                               │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Password path (at-rest encryption)                                    │
//! │  ──────────────────────────────────                                     │
//! │                                                                         │
//! │  PBKDF2-HMAC-SHA256(                                                   │
//! │    password = user password,                                           │
//! │    salt     = 128-bit random salt (fresh per record),                  │
//! │    iterations = 1000 (default)                                         │
//! │  )                                                                     │
//! │           ↓                                                            │
//! │  256-bit AES key                                                       │
//! │                                                                         │
//! │  Stealth path (messaging)                                              │
//! │  ────────────────────────                                               │
//! │                                                                         │
//! │  X25519 DH: my_private × their_public ──► 32-byte shared point         │
//! │           ↓                                                            │
//! │  SHA-512(shared point)                                                 │
//! │           ↓                                                            │
//! │  64-byte SharedSecret ──┬── whole: passphrase for the envelope         │
//! │                         └── split: messageKey (first 32 bytes)         │
//! │                                    authKey    (last 32 bytes)          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The split gives two independent-looking keys from one DH operation
//! without a second point multiplication. Both sides of the exchange
//! derive byte-identical output: privA·pubB == privB·pubA.

use sha2::{Digest, Sha256, Sha512};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::keys::{KeyPair, PublicKey};
use crate::error::{Error, Result};

/// Default PBKDF2 iteration count for password-derived keys
pub const DEFAULT_KDF_ITERATIONS: u32 = 1000;

/// Size of a password-derived key in bytes (256 bits)
pub const DERIVED_KEY_SIZE: usize = 32;

/// Size of a derived shared secret in bytes (SHA-512 output)
pub const SHARED_SECRET_SIZE: usize = 64;

/// Domain separation strings for seed-derived keys
pub mod domain {
    /// Domain for deriving the wallet's stealth keypair from its master seed
    pub const STEALTH_KEY: &[u8] = b"shade-stealth-key-v1";
}

/// Derive a symmetric key from a password
///
/// PBKDF2-HMAC-SHA256 with a 256-bit output. Deterministic: identical
/// inputs always yield identical output. Larger iteration counts increase
/// brute-force cost linearly.
///
/// ## Errors
///
/// Returns `KeyDerivationFailed` if `iterations` is zero. An empty salt
/// is accepted but defeats the purpose of salting; callers should always
/// pass a fresh random salt.
pub fn derive_key(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
) -> Result<[u8; DERIVED_KEY_SIZE]> {
    if iterations == 0 {
        return Err(Error::KeyDerivationFailed(
            "iteration count must be positive".into(),
        ));
    }

    let mut key = [0u8; DERIVED_KEY_SIZE];
    pbkdf2::pbkdf2_hmac::<Sha256>(password, salt, iterations, &mut key);
    Ok(key)
}

/// A shared secret derived from an X25519 exchange
///
/// 64 bytes: the SHA-512 digest of the raw DH output. Consumed whole as
/// the passphrase for stealth envelopes, or split into two independent
/// halves via [`SharedSecret::split`].
///
/// Zeroized when dropped.
#[derive(ZeroizeOnDrop)]
pub struct SharedSecret {
    bytes: [u8; SHARED_SECRET_SIZE],
}

impl SharedSecret {
    /// Get the raw secret bytes (for use as a passphrase)
    pub fn as_bytes(&self) -> &[u8; SHARED_SECRET_SIZE] {
        &self.bytes
    }

    /// Split into message and authentication keys
    ///
    /// The two halves are disjoint: the message key is the first 32 bytes
    /// of the digest, the authentication key the last 32.
    pub fn split(&self) -> SplitSecret {
        let mut message_key = [0u8; 32];
        let mut auth_key = [0u8; 32];
        message_key.copy_from_slice(&self.bytes[..32]);
        auth_key.copy_from_slice(&self.bytes[32..]);
        SplitSecret {
            message_key,
            auth_key,
        }
    }
}

/// A shared secret partitioned into two purpose-bound keys
///
/// Zeroized when dropped.
#[derive(ZeroizeOnDrop)]
pub struct SplitSecret {
    message_key: [u8; 32],
    auth_key: [u8; 32],
}

impl SplitSecret {
    /// Key for encrypting message content
    pub fn message_key(&self) -> &[u8; 32] {
        &self.message_key
    }

    /// Key for authenticating ciphertext
    pub fn auth_key(&self) -> &[u8; 32] {
        &self.auth_key
    }
}

/// Derive the shared secret for a stealth exchange
///
/// Computes the X25519 DH point for `keypair.private × their_public` and
/// hashes it with SHA-512. By DH symmetry the recipient derives the same
/// secret from their private key and the sender's ephemeral public key.
///
/// ## Errors
///
/// Returns `InvalidPoint` if `their_public` is a low-order or identity
/// point (see [`KeyPair::diffie_hellman`]).
pub fn derive_shared(keypair: &KeyPair, their_public: &PublicKey) -> Result<SharedSecret> {
    let mut dh_output = keypair.diffie_hellman(their_public)?;

    let digest = Sha512::digest(&dh_output);
    dh_output.zeroize();

    let mut bytes = [0u8; SHARED_SECRET_SIZE];
    bytes.copy_from_slice(&digest);
    Ok(SharedSecret { bytes })
}

/// Derive a shared secret already split into message and auth keys
///
/// One DH operation, two independent-looking keys.
pub fn derive_split_shared(
    keypair: &KeyPair,
    their_public: &PublicKey,
) -> Result<SplitSecret> {
    Ok(derive_shared(keypair, their_public)?.split())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_key_deterministic() {
        let key1 = derive_key(b"hunter2", b"salt", 1000).unwrap();
        let key2 = derive_key(b"hunter2", b"salt", 1000).unwrap();

        assert_eq!(key1, key2);
    }

    #[test]
    fn test_derive_key_salt_sensitivity() {
        let key1 = derive_key(b"hunter2", b"salt-a", 1000).unwrap();
        let key2 = derive_key(b"hunter2", b"salt-b", 1000).unwrap();

        assert_ne!(key1, key2);
    }

    #[test]
    fn test_derive_key_iteration_sensitivity() {
        let key1 = derive_key(b"hunter2", b"salt", 1000).unwrap();
        let key2 = derive_key(b"hunter2", b"salt", 1001).unwrap();

        assert_ne!(key1, key2);
    }

    #[test]
    fn test_derive_key_rejects_zero_iterations() {
        let result = derive_key(b"hunter2", b"salt", 0);
        assert!(matches!(result, Err(Error::KeyDerivationFailed(_))));
    }

    #[test]
    fn test_derive_shared_symmetry() {
        let alice = KeyPair::generate();
        let bob = KeyPair::generate();

        let alice_secret = derive_shared(&alice, &bob.public_key()).unwrap();
        let bob_secret = derive_shared(&bob, &alice.public_key()).unwrap();

        assert_eq!(alice_secret.as_bytes(), bob_secret.as_bytes());
    }

    #[test]
    fn test_derive_shared_distinct_per_pair() {
        let alice = KeyPair::generate();
        let bob = KeyPair::generate();
        let carol = KeyPair::generate();

        let ab = derive_shared(&alice, &bob.public_key()).unwrap();
        let ac = derive_shared(&alice, &carol.public_key()).unwrap();

        assert_ne!(ab.as_bytes(), ac.as_bytes());
    }

    #[test]
    fn test_derive_shared_rejects_identity_point() {
        let alice = KeyPair::generate();
        let identity = PublicKey::from_bytes([0u8; 32]);

        let result = derive_shared(&alice, &identity);
        assert!(matches!(result, Err(Error::InvalidPoint(_))));
    }

    #[test]
    fn test_split_halves_partition_the_secret() {
        let alice = KeyPair::generate();
        let bob = KeyPair::generate();

        let whole = derive_shared(&alice, &bob.public_key()).unwrap();
        let split = whole.split();

        assert_eq!(&whole.as_bytes()[..32], split.message_key());
        assert_eq!(&whole.as_bytes()[32..], split.auth_key());
        assert_ne!(split.message_key(), split.auth_key());
    }

    #[test]
    fn test_derive_split_shared_matches_split() {
        let alice = KeyPair::generate();
        let bob = KeyPair::generate();

        let split = derive_split_shared(&alice, &bob.public_key()).unwrap();
        let whole = derive_shared(&bob, &alice.public_key()).unwrap();

        assert_eq!(split.message_key(), &whole.as_bytes()[..32]);
        assert_eq!(split.auth_key(), &whole.as_bytes()[32..]);
    }
}
