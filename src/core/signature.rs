//! Record signing for the compliance encoders.
//!
//! This is a tamper-evidence checksum, not an HMAC: there is no key and no
//! salt, so it detects accidental or casual modification of a record but
//! gives no authenticity guarantee against a party willing to recompute the
//! hash. That is what the AFD layout asks for.

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 digest (64 characters) of the payload bytes.
pub fn sign(payload: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(payload);
    hex::encode(hasher.finalize())
}

/// Recompute and compare for exact equality.
pub fn verify(payload: &[u8], digest: &str) -> bool {
    sign(payload) == digest
}
