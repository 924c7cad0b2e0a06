use std::fmt::Write;

use sha2::{Digest, Sha256};

/// First 8 bytes of the SHA-256 of `content`, hex encoded.
pub fn short_digest(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    let mut hex = String::with_capacity(16);
    for byte in digest.iter().take(8) {
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}
