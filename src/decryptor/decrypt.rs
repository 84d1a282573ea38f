//! src/decryptor/decrypt.rs
//!
//! AES-256-CTR payload decryption and the crate-level facade.
//!
//! The full pipeline runs in a fixed order: parse the envelope, derive keys,
//! verify the ciphertext HMAC, decrypt. Verification happens strictly before
//! decryption so tampered input never discloses partial plaintext.

use crate::crypto::hmac::verify_hmac;
use crate::crypto::kdf::DerivedKeys;
use crate::decryptor::payload::DecryptedPayload;
use crate::envelope::VaultEnvelope;
use crate::error::VaultError;

use aes::cipher::{KeyIvInit, StreamCipher};
use aes::Aes256;
use std::io::{Read, Write};
use zeroize::Zeroizing;

type Aes256Ctr = ctr::Ctr128BE<Aes256>;

/// Decrypt an already integrity-verified ciphertext into its padded payload.
///
/// CTR is a stream-cipher mode, so the output buffer is exactly as long as
/// the ciphertext; the trailing padding becomes a logical length, it is not
/// stripped by the cipher.
pub(crate) fn decrypt_payload(keys: &DerivedKeys, ciphertext: &[u8]) -> DecryptedPayload {
    let mut buf = Zeroizing::new(ciphertext.to_vec());
    let mut cipher = Aes256Ctr::new(keys.cipher_key().into(), keys.iv().into());
    cipher.apply_keystream(&mut buf);
    DecryptedPayload::new(buf)
}

/// Run the whole pipeline over the armored text of one vault resource.
pub(crate) fn open_payload(raw: &str, password: &[u8]) -> Result<DecryptedPayload, VaultError> {
    let envelope = VaultEnvelope::parse(raw)?;
    let keys = DerivedKeys::derive(password, &envelope.salt)?;
    verify_hmac(keys.hmac_key(), &envelope.expected_hmac, &envelope.ciphertext)?;
    Ok(decrypt_payload(&keys, &envelope.ciphertext))
}

/// Decrypt a vault resource and write the plaintext to `output`.
pub fn decrypt<R: Read, W: Write>(
    password: &[u8],
    mut input: R,
    mut output: W,
) -> Result<(), VaultError> {
    let mut raw = Vec::new();
    input.read_to_end(&mut raw)?;
    let payload = open_payload(&String::from_utf8_lossy(&raw), password)?;
    output.write_all(payload.bytes())?;
    Ok(())
}

/// Report whether this runtime's cryptographic provider supports AES-256-CTR
/// at full key strength.
///
/// Callers should check this before attempting decryption and surface a clear
/// diagnostic when unmet, rather than let decryption fail opaquely on
/// runtimes that ship export-restricted cipher policies.
pub fn requirements_met() -> bool {
    Aes256Ctr::new_from_slices(&[0u8; 32], &[0u8; 16]).is_ok()
}
