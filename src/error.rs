//! # Error Types
//!
//! This module defines the error types used throughout the library.
//! All operations return [`Result<T, VaultError>`](VaultError); no error kind
//! is representable as a successful result, and none is silently swallowed.

use thiserror::Error;

/// The error type for all vault read operations.
#[derive(Error, Debug)]
pub enum VaultError {
    /// I/O error while reading the underlying vault resource.
    ///
    /// Propagated unchanged; retry policy, if any, belongs to the caller that
    /// located the resource.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed container text.
    ///
    /// Covers a missing or wrong header, an unsupported version or cipher
    /// identifier, malformed hex, and a missing line terminator inside the
    /// armored body. Always raised at parse time, before any cryptographic
    /// operation is attempted.
    #[error("Format error: {0}")]
    Format(String),

    /// HMAC verification failed.
    ///
    /// A wrong password and a tampered ciphertext produce the same mismatch
    /// and are indistinguishable; the message deliberately does not guess.
    #[error("HMAC does not match, either the given password is invalid or the vault has been modified")]
    HmacMismatch,

    /// A required cryptographic primitive or key strength is unavailable on
    /// this platform. Check [`requirements_met`](crate::requirements_met)
    /// before decrypting to pre-empt this.
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// No password source yielded a vault password.
    #[error("unable to determine vault password, check environment variable '{0}'")]
    NoPassword(&'static str),
}
