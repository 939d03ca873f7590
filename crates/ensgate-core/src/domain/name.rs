//! Name encoding: the 32-byte node identifier and the DNS wire format.

use std::fmt;

use alloy_primitives::{Address, B256, Bytes, hex, keccak256};

use crate::error::{ResolveError, ResolveResult};

/// Namespace that holds reverse records for addresses.
pub const REVERSE_SUFFIX: &str = "addr.reverse";

/// Longest label the wire format can carry in a single length byte.
const MAX_LABEL_LEN: usize = 255;

// ============================================================================
// Node
// ============================================================================

/// Canonical 32-byte identifier of a name (EIP-137 namehash).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(B256);

impl Node {
    /// Identifier of the root name.
    pub const ROOT: Self = Self(B256::ZERO);

    /// Identifier of `label` directly under this node.
    #[must_use]
    pub fn child(self, label: &str) -> Self {
        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(self.0.as_slice());
        buf[32..].copy_from_slice(keccak256(label.as_bytes()).as_slice());
        Self(keccak256(buf))
    }

    /// The raw hash.
    pub const fn as_b256(&self) -> B256 {
        self.0
    }
}

impl From<Node> for B256 {
    fn from(node: Node) -> Self {
        node.0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_prefixed(self.0))
    }
}

// ============================================================================
// Wire name
// ============================================================================

/// A name as length-prefixed labels terminated by a zero-length label.
///
/// Only used as an argument to `resolve(bytes,bytes)`; never a storage key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireName(Bytes);

impl WireName {
    /// Encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume into the encoded bytes.
    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

// ============================================================================
// Name
// ============================================================================

/// A pre-normalized, dot-separated name.
///
/// Normalization is the caller's job. Parsing only rejects input that
/// visibly skipped it (uppercase ASCII, whitespace, empty labels).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Validate a normalized name. The empty string is the root.
    pub fn parse(name: &str) -> ResolveResult<Self> {
        let invalid = |reason: &str| ResolveError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Ok(Self(String::new()));
        }

        for label in name.split('.') {
            if label.is_empty() {
                return Err(invalid("empty label"));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(invalid("label longer than 255 bytes"));
            }
            if label.chars().any(|c| c.is_ascii_uppercase()) {
                return Err(invalid("name is not normalized (uppercase characters)"));
            }
            if label.chars().any(|c| c.is_whitespace() || c.is_control()) {
                return Err(invalid("name is not normalized (whitespace or control characters)"));
            }
        }

        Ok(Self(name.to_string()))
    }

    /// Reverse-record name for an address: `<lowercase hex>.addr.reverse`.
    pub fn reverse(address: Address) -> Self {
        Self(format!("{}.{REVERSE_SUFFIX}", hex::encode(address)))
    }

    /// The name text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the root name.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Labels from leftmost to rightmost.
    pub fn labels(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.0.split('.').filter(|label| !label.is_empty())
    }

    /// The name with its leftmost label removed, `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        Some(
            self.0
                .split_once('.')
                .map_or_else(|| Self(String::new()), |(_, rest)| Self(rest.to_string())),
        )
    }

    /// Compute the node by hashing labels from the right.
    pub fn node(&self) -> Node {
        self.labels().rev().fold(Node::ROOT, Node::child)
    }

    /// DNS wire encoding of the name.
    pub fn wire(&self) -> WireName {
        let mut out = Vec::with_capacity(self.0.len() + 2);
        for label in self.labels() {
            #[allow(clippy::cast_possible_truncation)] // labels are capped at 255 bytes by parse
            out.push(label.len() as u8);
            out.extend_from_slice(label.as_bytes());
        }
        out.push(0);
        WireName(Bytes::from(out))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("[root]")
        } else {
            f.write_str(&self.0)
        }
    }
}
