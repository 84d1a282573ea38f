//! src/decryptor/payload.rs
//!
//! Decrypted payload buffer and the reference padding policy.

use crate::consts::AES_BLOCK_SIZE;
use zeroize::Zeroizing;

/// The decrypted buffer plus its logical length.
///
/// Trailing pad bytes are excluded from the logical length but stay in the
/// buffer until the payload is dropped, at which point every byte is
/// overwritten with zero.
pub(crate) struct DecryptedPayload {
    buf: Zeroizing<Vec<u8>>,
    len: usize,
}

impl DecryptedPayload {
    pub(crate) fn new(buf: Zeroizing<Vec<u8>>) -> Self {
        let len = unpadded_len(&buf);
        Self { buf, len }
    }

    /// The logical payload, trailing padding excluded.
    pub(crate) fn bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

/// Logical length after trailing-pad removal.
///
/// The encrypting tool writes a PKCS#7-style pad whose last byte is the pad
/// length N. N outside `1..=16` leaves the buffer untouched; existing vault
/// files depend on this exact interpretation, so it must not be "fixed" to
/// reject such buffers.
fn unpadded_len(buf: &[u8]) -> usize {
    match buf.last() {
        Some(&pad) if pad > 0 && pad as usize <= AES_BLOCK_SIZE => buf.len() - pad as usize,
        _ => buf.len(),
    }
}
