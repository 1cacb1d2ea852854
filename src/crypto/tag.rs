//! # Message Tags
//!
//! Deterministic fingerprints derived from key material, used by the
//! blockchain scanner to recognize matching transactions: two parties
//! computing a tag from the same input independently arrive at the same
//! text.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use sha2::{Digest, Sha512};

/// Number of hash rounds applied to the input
const TAG_ROUNDS: usize = 8;

/// Derive a compact deterministic identifier from key material
///
/// SHA-512 applied eight times, final digest base64-encoded. Purely
/// deterministic and side-effect free; equality comparison is the tag's
/// only meaning.
///
/// The iteration raises brute-force cost by a constant factor only — it
/// is neither salted nor memory-hard and must not stand in for a
/// password KDF.
pub fn message_tag(input: &[u8]) -> String {
    let mut digest = Sha512::digest(input);
    for _ in 1..TAG_ROUNDS {
        digest = Sha512::digest(&digest);
    }
    BASE64.encode(digest)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_deterministic() {
        assert_eq!(message_tag(b"key material"), message_tag(b"key material"));
    }

    #[test]
    fn test_known_vectors() {
        // Eight rounds of SHA-512, base64
        assert_eq!(
            message_tag(b""),
            "tkcDU5iR8sAqrYANcpNKP3ucarpv3SiGOXa7WawfGZf9P99+D/lB1d+zLLxOotMUBUjZFOn8oqTyEnGAuAVK5A=="
        );
        assert_eq!(
            message_tag(b"hello"),
            "j4R1Su+L7r+ezV3wE0/+CR0zxnuf2wDCGOzsLmKp3KObR/xyJNSy0m5PSlaH8y0PpNpdIe+sRYJgReJq2HxgPA=="
        );
    }

    #[test]
    fn test_output_shape() {
        // 64-byte digest → 88 base64 chars
        assert_eq!(message_tag(b"anything").len(), 88);
    }

    #[test]
    fn test_no_collisions_in_sample() {
        let mut seen = HashSet::new();
        for i in 0..1000u32 {
            assert!(seen.insert(message_tag(&i.to_le_bytes())));
        }
    }
}
