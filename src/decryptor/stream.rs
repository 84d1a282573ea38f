//! src/decryptor/stream.rs
//!
//! Forward-only view over the decrypted payload.
//!
//! Deliberately a plain buffer-plus-cursor value rather than a wrapper around
//! some generic stream type: a single read cursor that is never rewound, a
//! wipe-on-close guarantee, and nothing else. [`std::io::Read`] is
//! implemented by delegation for interop with readers of the plaintext
//! (config loaders, deserializers).

use crate::decryptor::decrypt::open_payload;
use crate::decryptor::payload::DecryptedPayload;
use crate::error::VaultError;
use std::io::Read;

/// Sequential, read-once byte source over a decrypted vault payload.
///
/// Construction runs the entire pipeline — parse, derive, verify, decrypt —
/// so a `VaultReader` only exists for input that passed integrity
/// verification. Dropping the reader wipes the payload; [`VaultReader::close`]
/// does so eagerly and is idempotent.
pub struct VaultReader {
    payload: Option<DecryptedPayload>,
    pos: usize,
}

impl std::fmt::Debug for VaultReader {
    /// The decrypted payload is never formatted; only its presence is shown.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultReader")
            .field("payload", &self.payload.as_ref().map(|_| "<redacted>"))
            .field("pos", &self.pos)
            .finish()
    }
}

impl VaultReader {
    /// Read the whole armored vault from `input` and decrypt it with
    /// `password`.
    ///
    /// The complete ciphertext is held in memory because integrity
    /// verification must see all of it before any plaintext is released.
    ///
    /// # Errors
    ///
    /// [`VaultError::Io`] for resource read failures, [`VaultError::Format`]
    /// for malformed container text, [`VaultError::HmacMismatch`] for a wrong
    /// password or tampered ciphertext, [`VaultError::UnsupportedPlatform`]
    /// if key derivation is unavailable. Any failure wipes all sensitive
    /// buffers allocated so far before it propagates.
    pub fn open<R: Read>(mut input: R, password: &[u8]) -> Result<Self, VaultError> {
        let mut raw = Vec::new();
        input.read_to_end(&mut raw)?;
        let payload = open_payload(&String::from_utf8_lossy(&raw), password)?;
        Ok(Self {
            payload: Some(payload),
            pos: 0,
        })
    }

    /// Next payload byte, or `None` at end-of-stream or after close.
    pub fn read_byte(&mut self) -> Option<u8> {
        let byte = *self.payload.as_ref()?.bytes().get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }

    /// The byte the next [`read_byte`](Self::read_byte) would return, without
    /// advancing the cursor.
    pub fn peek(&self) -> Option<u8> {
        self.payload.as_ref()?.bytes().get(self.pos).copied()
    }

    /// Copy up to `buf.len()` bytes into `buf` and advance the cursor.
    /// Returns the number of bytes copied; 0 means end-of-stream.
    pub fn read_into(&mut self, buf: &mut [u8]) -> usize {
        let Some(payload) = self.payload.as_ref() else {
            return 0;
        };
        let remaining = &payload.bytes()[self.pos..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.pos += n;
        n
    }

    /// Bytes left before end-of-stream.
    pub fn remaining(&self) -> usize {
        self.payload
            .as_ref()
            .map_or(0, |p| p.bytes().len() - self.pos)
    }

    /// Overwrite every byte of the decrypted buffer with zero and release it.
    ///
    /// Idempotent; all subsequent reads return end-of-stream rather than
    /// resurrecting state.
    pub fn close(&mut self) {
        // Zeroizing wipes the buffer as it drops.
        self.payload.take();
    }
}

impl Read for VaultReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        Ok(self.read_into(buf))
    }
}
