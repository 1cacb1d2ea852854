//! # Cryptography Module
//!
//! All cryptographic operations of the wallet core.
//!
//! ## Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CRYPTOGRAPHIC ARCHITECTURE                           │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 STEALTH MESSAGING                               │   │
//! │  ├─────────────────────────────────────────────────────────────────┤   │
//! │  │                                                                 │   │
//! │  │  1. Key Exchange: X25519 ECDH                                  │   │
//! │  │     ephemeral_private × recipient_public = shared point        │   │
//! │  │                                                                 │   │
//! │  │  2. Secret Derivation: SHA-512                                 │   │
//! │  │     shared point → 64-byte secret (whole, or split into        │   │
//! │  │     message/auth halves)                                       │   │
//! │  │                                                                 │   │
//! │  │  3. Sealing: password cipher with the secret as passphrase     │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 AT-REST ENCRYPTION                              │   │
//! │  ├─────────────────────────────────────────────────────────────────┤   │
//! │  │                                                                 │   │
//! │  │  PBKDF2-HMAC-SHA256 (1000 iterations, 128-bit salt)            │   │
//! │  │           ↓                                                     │   │
//! │  │  AES-256-GCM over plaintext ‖ 64 random padding bytes          │   │
//! │  │  • 96-bit iv (random per record)                               │   │
//! │  │  • 128-bit authentication tag (verified before release)        │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 MESSAGE TAGS                                    │   │
//! │  ├─────────────────────────────────────────────────────────────────┤   │
//! │  │                                                                 │   │
//! │  │  8 × SHA-512 → base64                                          │   │
//! │  │  Deterministic transaction-matching fingerprints               │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Algorithm Choices & Rationale
//!
//! | Algorithm | Purpose | Why Chosen |
//! |-----------|---------|------------|
//! | X25519 | Key Exchange | Fast ECDH, constant-time, small keys |
//! | SHA-512 | Secret derivation, tags | Wide digest, splits into two keys |
//! | PBKDF2-SHA256 | Password stretching | Deterministic, tunable cost |
//! | AES-256-GCM | Encryption | AEAD: tamper + wrong-password detection |
//! | HKDF-SHA256 | Seed → keypair | Industry standard, domain-separated |
//!
//! ## Security Considerations
//!
//! 1. **Key Zeroization**: secret keys and derived secrets are zeroized
//!    when dropped
//! 2. **Secure Random**: `rand::rngs::OsRng` for all randomness
//! 3. **No Reuse**: salts, ivs, padding, and ephemeral keys are drawn
//!    fresh inside each call — callers cannot supply them

pub mod kdf;
pub mod keys;
pub mod password;
pub mod stealth;
pub mod tag;

pub use kdf::{
    derive_key, derive_shared, derive_split_shared, SharedSecret, SplitSecret,
    DEFAULT_KDF_ITERATIONS,
};
pub use keys::{KeyPair, PublicKey, KEY_SIZE};
pub use password::PasswordCipherRecord;
pub use stealth::StealthEnvelope;
pub use tag::message_tag;
