// src/crypto/hmac.rs

//! HMAC-SHA256 ciphertext authentication.

use crate::error::VaultError;
use hmac::{Hmac, Mac};
use sha2::Sha256;

pub type HmacSha256 = Hmac<Sha256>;

/// Recompute HMAC-SHA256 over `ciphertext` with `hmac_key` and compare it to
/// `expected` in constant time.
///
/// Must succeed before any decrypted byte is exposed to a caller; a mismatch
/// cannot distinguish a wrong password from a tampered ciphertext.
pub fn verify_hmac(hmac_key: &[u8], expected: &[u8], ciphertext: &[u8]) -> Result<(), VaultError> {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(hmac_key)
        .expect("HMAC-SHA256 accepts keys of any length");
    mac.update(ciphertext);
    mac.verify_slice(expected)
        .map_err(|_| VaultError::HmacMismatch)
}
