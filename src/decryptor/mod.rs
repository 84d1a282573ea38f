// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: [`VaultReader::open`] for sequential reads over the plaintext,
//! or [`decrypt`] to recover the whole payload into a writer at once.
//! [`requirements_met`] probes the runtime's cipher support up front.

pub(crate) mod decrypt;
pub(crate) mod payload;
pub(crate) mod stream;

pub use decrypt::{decrypt, requirements_met};
pub use stream::VaultReader;
