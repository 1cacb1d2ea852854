//! # Password Cipher Records
//!
//! At-rest encryption of sensitive wallet material under a user password.
//!
//! ## Record Format
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    PASSWORD CIPHER RECORD                               │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Encrypt:                                                              │
//! │                                                                         │
//! │  password ──► PBKDF2(password, salt, iterations) ──► 256-bit key       │
//! │                        ▲                                               │
//! │              128-bit random salt (fresh per record)                    │
//! │                                                                         │
//! │  plaintext ‖ 64 random padding bytes                                   │
//! │                        │                                               │
//! │                        ▼                                               │
//! │  AES-256-GCM(key, 96-bit random iv) ──► ciphertext ‖ 128-bit tag      │
//! │                                                                         │
//! │  Record: { version, ciphertext, iv, salt, iterations,                  │
//! │            key_size_bits, padding_length }                             │
//! │                                                                         │
//! │  Decrypt:                                                              │
//! │                                                                         │
//! │  1. Re-derive key from password + record.salt + record.iterations      │
//! │  2. AES-256-GCM verify + decrypt (wrong password → BadPassword)        │
//! │  3. Strip the trailing padding_length bytes                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The fixed-size random padding masks the true plaintext length; since
//! it is a suffix of known length, the original plaintext is always
//! `padded_length − padding_length` bytes, independent of content.
//!
//! The record is fully self-describing except for the password, which is
//! never stored. Fields are serialized by name (hex for byte fields) so
//! persisted records stay forward-compatible.
//!
//! ## Security Properties
//!
//! | Property | Guarantee |
//! |----------|-----------|
//! | Confidentiality | AES-256 under a PBKDF2-stretched key |
//! | Integrity | GCM tag verified before any plaintext is released |
//! | Password detection | Wrong password fails authentication |
//! | Length hiding | 64 random bytes appended before encryption |

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce as AesNonce,
};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, Zeroizing};

use crate::crypto::kdf::{self, DEFAULT_KDF_ITERATIONS};
use crate::error::{Error, Result};

/// Current record format version
pub const RECORD_VERSION: u32 = 1;

/// Size of the random salt in bytes (128 bits)
pub const SALT_SIZE: usize = 16;

/// Size of the AES-GCM iv in bytes (96 bits)
pub const IV_SIZE: usize = 12;

/// Size of the AES-GCM authentication tag in bytes (128 bits)
pub const TAG_SIZE: usize = 16;

/// Number of random padding bytes appended to every plaintext
pub const PADDING_SIZE: usize = 64;

/// Key size recorded in emitted records (AES-256)
pub const KEY_SIZE_BITS: u32 = 256;

/// An at-rest encryption record
///
/// Created on encrypt, consumed on decrypt; self-describing except for
/// the password. The ciphertext carries the GCM authentication tag as
/// its suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordCipherRecord {
    /// Record format version
    pub version: u32,

    /// Ciphertext including the trailing authentication tag
    #[serde(with = "hex_vec")]
    pub ciphertext: Vec<u8>,

    /// AES-GCM iv (96 bits, fresh per record)
    #[serde(with = "hex_vec")]
    pub iv: Vec<u8>,

    /// PBKDF2 salt (128 bits, fresh per record)
    #[serde(with = "hex_vec")]
    pub salt: Vec<u8>,

    /// PBKDF2 iteration count used to derive the key
    pub iterations: u32,

    /// Symmetric key size in bits
    pub key_size_bits: u32,

    /// Number of padding bytes appended before encryption
    pub padding_length: u32,
}

/// Encrypt plaintext under a user password
///
/// Draws a fresh random salt, iv, and padding block on every call;
/// reusing any of them under the same key would break GCM, so none of
/// them are caller-suppliable.
pub fn encrypt(password: &str, plaintext: &[u8]) -> Result<PasswordCipherRecord> {
    encrypt_with_passphrase(password.as_bytes(), plaintext)
}

/// Encrypt plaintext under a byte passphrase
///
/// Same construction as [`encrypt`]; used directly by the stealth codec,
/// where the passphrase is a derived shared secret rather than a human
/// password.
pub fn encrypt_with_passphrase(
    passphrase: &[u8],
    plaintext: &[u8],
) -> Result<PasswordCipherRecord> {
    let mut salt = [0u8; SALT_SIZE];
    rand::rngs::OsRng.fill_bytes(&mut salt);

    let mut key = kdf::derive_key(passphrase, &salt, DEFAULT_KDF_ITERATIONS)?;

    let mut iv = [0u8; IV_SIZE];
    rand::rngs::OsRng.fill_bytes(&mut iv);

    // plaintext ‖ 64 random bytes, so the record leaks only a padded length
    let mut padded = Zeroizing::new(Vec::with_capacity(plaintext.len() + PADDING_SIZE));
    padded.extend_from_slice(plaintext);
    let mut padding = [0u8; PADDING_SIZE];
    rand::rngs::OsRng.fill_bytes(&mut padding);
    padded.extend_from_slice(&padding);

    let cipher = Aes256Gcm::new_from_slice(&key)
        .map_err(|e| Error::EncryptionFailed(format!("Invalid key: {}", e)))?;

    let ciphertext = cipher
        .encrypt(AesNonce::from_slice(&iv), padded.as_slice())
        .map_err(|_| Error::EncryptionFailed("AES-GCM encryption failed".into()))?;

    key.zeroize();

    Ok(PasswordCipherRecord {
        version: RECORD_VERSION,
        ciphertext,
        iv: iv.to_vec(),
        salt: salt.to_vec(),
        iterations: DEFAULT_KDF_ITERATIONS,
        key_size_bits: KEY_SIZE_BITS,
        padding_length: PADDING_SIZE as u32,
    })
}

/// Decrypt a record under a user password
///
/// ## Errors
///
/// - `DecryptionFailed` if the record is structurally invalid: unknown
///   version, unsupported key size, wrong iv length, or a ciphertext too
///   short to contain its tag and padding
/// - `BadPassword` if authentication fails under the re-derived key —
///   a wrong password, or a tampered ciphertext
pub fn decrypt(password: &str, record: &PasswordCipherRecord) -> Result<Vec<u8>> {
    decrypt_with_passphrase(password.as_bytes(), record)
}

/// Decrypt a record under a byte passphrase
///
/// See [`decrypt`]; used directly by the stealth codec.
pub fn decrypt_with_passphrase(
    passphrase: &[u8],
    record: &PasswordCipherRecord,
) -> Result<Vec<u8>> {
    validate_record(record)?;

    let mut key = kdf::derive_key(passphrase, &record.salt, record.iterations)?;

    let cipher = Aes256Gcm::new_from_slice(&key)
        .map_err(|e| Error::DecryptionFailed(format!("Invalid key: {}", e)))?;

    let result = cipher.decrypt(AesNonce::from_slice(&record.iv), record.ciphertext.as_slice());
    key.zeroize();

    // Tag mismatch: either the password is wrong or the record was altered.
    let padded = Zeroizing::new(result.map_err(|_| Error::BadPassword)?);

    let padding = record.padding_length as usize;
    if padded.len() < padding {
        return Err(Error::DecryptionFailed(
            "plaintext shorter than its declared padding".into(),
        ));
    }

    Ok(padded[..padded.len() - padding].to_vec())
}

/// Structural checks that don't require the key
fn validate_record(record: &PasswordCipherRecord) -> Result<()> {
    if record.version != RECORD_VERSION {
        return Err(Error::DecryptionFailed(format!(
            "unsupported record version {}",
            record.version
        )));
    }
    if record.key_size_bits != KEY_SIZE_BITS {
        return Err(Error::DecryptionFailed(format!(
            "unsupported key size {} bits",
            record.key_size_bits
        )));
    }
    if record.iv.len() != IV_SIZE {
        return Err(Error::DecryptionFailed(format!(
            "iv must be {} bytes, got {}",
            IV_SIZE,
            record.iv.len()
        )));
    }
    if record.ciphertext.len() < TAG_SIZE + record.padding_length as usize {
        return Err(Error::DecryptionFailed(
            "ciphertext length inconsistent with its padding".into(),
        ));
    }
    Ok(())
}

/// Serde helper for serializing byte vectors as hex
mod hex_vec {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        hex::decode(&s).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// TESTS
// ============================================================================
