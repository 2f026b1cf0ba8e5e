//! Content-addressed blobs

use std::fmt;

use sha2::{Digest, Sha256};

/// Lowercase hex digest identifying a blob's content.
///
/// Blobs built in memory are hashed with SHA-256. Backends that already
/// address their objects (git) hand in their own ids via [`BlobId::from_hex`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlobId(String);

impl BlobId {
    /// Hash `data` into a content id.
    pub fn for_content(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self(format!("{:x}", hasher.finalize()))
    }

    /// Wrap an id computed elsewhere.
    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self(hex.into().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable file content together with its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    id: BlobId,
    data: Vec<u8>,
}

impl Blob {
    /// Create a blob, deriving its id from the content.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        let data = data.into();
        Self {
            id: BlobId::for_content(&data),
            data,
        }
    }

    /// Create a blob whose id was assigned by a storage backend.
    ///
    /// The caller guarantees that equal content maps to equal ids.
    pub fn with_id(id: BlobId, data: impl Into<Vec<u8>>) -> Self {
        Self {
            id,
            data: data.into(),
        }
    }

    pub fn id(&self) -> &BlobId {
        &self.id
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
