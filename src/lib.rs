// src/lib.rs

//! Read-only decryption of Ansible Vault 1.1 (`AES256`) containers.
//!
//! A vault file is text-armored so it can live in version control; this crate
//! turns it back into plaintext bytes given the shared passphrase. The
//! pipeline is strictly verify-then-decrypt: the ciphertext HMAC must match
//! before a single payload byte becomes readable.

pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod envelope;
pub mod error;
pub mod hexlify;
pub mod password;

// High-level API — this is what most users import
pub use decryptor::{decrypt, requirements_met, VaultReader};
pub use error::VaultError;

pub use password::{resolve_password, PasswordSource};
