//! src/crypto/kdf.rs
//!
//! PBKDF2 key stretching into the vault's three key-material segments.

use crate::consts::{CIPHER_KEY_LEN, DERIVED_KEY_LEN, HMAC_KEY_LEN, IV_LEN, PBKDF2_ITERATIONS};
use crate::error::VaultError;

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Cipher key, HMAC key and IV for one vault.
///
/// Always derived together from a single 80-byte PBKDF2-HMAC-SHA256 output at
/// fixed offsets 0–31, 32–63 and 64–79. All bytes are wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKeys {
    cipher_key: [u8; CIPHER_KEY_LEN],
    hmac_key: [u8; HMAC_KEY_LEN],
    iv: [u8; IV_LEN],
}

impl DerivedKeys {
    /// Derive the key material for `password` and `salt`.
    ///
    /// Deterministic: identical inputs always yield identical keys. 10,000
    /// iterations and the 80-byte output length are fixed by the vault 1.1
    /// format. The intermediate stretch buffer is wiped before returning.
    ///
    /// # Errors
    ///
    /// [`VaultError::UnsupportedPlatform`] if the PBKDF2 primitive rejects
    /// the request; never retried.
    pub fn derive(password: &[u8], salt: &[u8]) -> Result<Self, VaultError> {
        let mut stretched = Zeroizing::new([0u8; DERIVED_KEY_LEN]);
        pbkdf2::<Hmac<Sha256>>(password, salt, PBKDF2_ITERATIONS, stretched.as_mut_slice())
            .map_err(|e| {
                VaultError::UnsupportedPlatform(format!("PBKDF2-HMAC-SHA256 failed: {e}"))
            })?;

        let mut keys = Self {
            cipher_key: [0u8; CIPHER_KEY_LEN],
            hmac_key: [0u8; HMAC_KEY_LEN],
            iv: [0u8; IV_LEN],
        };
        keys.cipher_key
            .copy_from_slice(&stretched[..CIPHER_KEY_LEN]);
        keys.hmac_key
            .copy_from_slice(&stretched[CIPHER_KEY_LEN..CIPHER_KEY_LEN + HMAC_KEY_LEN]);
        keys.iv
            .copy_from_slice(&stretched[CIPHER_KEY_LEN + HMAC_KEY_LEN..]);
        Ok(keys)
    }

    /// Key for AES-256-CTR payload decryption.
    pub fn cipher_key(&self) -> &[u8; CIPHER_KEY_LEN] {
        &self.cipher_key
    }

    /// Key for HMAC-SHA256 ciphertext authentication.
    pub fn hmac_key(&self) -> &[u8; HMAC_KEY_LEN] {
        &self.hmac_key
    }

    /// Initial counter value for CTR mode.
    pub fn iv(&self) -> &[u8; IV_LEN] {
        &self.iv
    }
}
