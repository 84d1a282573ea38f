// src/crypto/mod.rs

//! Cryptographic building blocks: key stretching and ciphertext
//! authentication. Decryption itself lives in [`crate::decryptor`].

pub mod hmac;
pub mod kdf;
