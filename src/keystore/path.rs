//! Key paths and derivation schemes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A wallet key path: the sequence of child indices addressing one key
///
/// Hierarchical wallets use `[pocket, branch, index]`; legacy wallets
/// used `[branch, index]` with the pocket folded into the branch number.
/// Single-component paths address a pocket's master key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyPath(Vec<u32>);

impl KeyPath {
    /// Create a path from child indices
    pub fn new(indices: Vec<u32>) -> Self {
        Self(indices)
    }

    /// The child indices
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Number of components
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl From<&[u32]> for KeyPath {
    fn from(indices: &[u32]) -> Self {
        Self(indices.to_vec())
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for index in &self.0 {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

/// How a wallet's key paths map onto the key tree
///
/// Chosen once when a keystore is constructed. Legacy two-component
/// paths pack the pocket and chain into one branch number; normalizing
/// unpacks them so both generations of wallet address the same keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DerivationScheme {
    /// Two-component paths: `[branch, index]`, pocket = branch / 2
    Legacy,
    /// Three-component paths: `[pocket, branch, index]`
    Hierarchical,
}

impl DerivationScheme {
    /// Normalize a path to its hierarchical form
    ///
    /// Legacy `[branch, index]` becomes `[branch / 2, branch % 2, index]`;
    /// everything else is already canonical.
    pub fn normalize(&self, path: &KeyPath) -> KeyPath {
        match self {
            DerivationScheme::Hierarchical => path.clone(),
            DerivationScheme::Legacy => match *path.as_slice() {
                [branch, index] => KeyPath::new(vec![branch / 2, branch % 2, index]),
                _ => path.clone(),
            },
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(KeyPath::new(vec![0, 1, 5]).to_string(), "m/0/1/5");
        assert_eq!(KeyPath::new(vec![3]).to_string(), "m/3");
    }

    #[test]
    fn test_legacy_normalization() {
        let scheme = DerivationScheme::Legacy;

        // branch 3 = pocket 1, internal chain
        assert_eq!(
            scheme.normalize(&KeyPath::new(vec![3, 7])),
            KeyPath::new(vec![1, 1, 7])
        );
        // branch 4 = pocket 2, external chain
        assert_eq!(
            scheme.normalize(&KeyPath::new(vec![4, 0])),
            KeyPath::new(vec![2, 0, 0])
        );
    }

    #[test]
    fn test_legacy_leaves_other_depths_alone() {
        let scheme = DerivationScheme::Legacy;

        // pocket master path
        assert_eq!(
            scheme.normalize(&KeyPath::new(vec![2])),
            KeyPath::new(vec![2])
        );
        assert_eq!(
            scheme.normalize(&KeyPath::new(vec![0, 1, 5])),
            KeyPath::new(vec![0, 1, 5])
        );
    }

    #[test]
    fn test_hierarchical_is_identity() {
        let path = KeyPath::new(vec![3, 7]);
        assert_eq!(DerivationScheme::Hierarchical.normalize(&path), path);
    }
}
