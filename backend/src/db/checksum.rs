//! Content checksums identifying a loaded snapshot.

use sha2::{Digest, Sha256};

/// SHA-256 of raw source bytes, hex encoded.
pub fn calculate_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}
