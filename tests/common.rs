//! tests/common.rs
//! Shared fixtures and constants for the integration tests
#![allow(dead_code)] // Not every test file uses every helper

use std::path::PathBuf;

/// Passphrase the known-good fixtures were encrypted with.
pub const DEMO_PASSWORD: &[u8] = b"demo";

pub const WRONG_PASSWORD: &[u8] = b"ThisPasswordIsWrong";

/// Plaintext of the vault_hello.yml fixture.
pub const HELLO_PLAINTEXT: &[u8] = b"Hello World!\n";

/// Load a fixture file from tests/test_data/.
pub fn fixture(name: &str) -> Vec<u8> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("test_data")
        .join(name);
    std::fs::read(&path).unwrap_or_else(|e| panic!("failed to read {name}: {e}"))
}
