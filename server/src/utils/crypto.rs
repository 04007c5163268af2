//! Hashing helpers

use sha2::{Digest, Sha256};

/// SHA-256 of a UTF-8 string as lowercase hex (used for migration checksums)
pub fn sha256_hex(data: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data.as_bytes());
    hex::encode(hasher.finalize())
}
