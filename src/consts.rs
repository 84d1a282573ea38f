//! Constants of the Ansible Vault 1.1 container format.
//!
//! The format fixes every parameter; none of these are tunable without
//! breaking compatibility with files written by the reference tool.

/// Literal header prefix of every vault file.
pub const FORMAT_TAG: &str = "$ANSIBLE_VAULT;";

/// The only supported container version marker.
pub const VERSION_TAG: &str = "1.1;";

/// The only supported cipher identifier.
pub const CIPHER_NAME: &str = "AES256";

/// PBKDF2-HMAC-SHA256 iteration count fixed by the vault 1.1 format.
pub const PBKDF2_ITERATIONS: u32 = 10_000;

/// AES block size in bytes; also the upper bound for the trailing pad byte.
pub const AES_BLOCK_SIZE: usize = 16;

/// AES-256 cipher key length.
pub const CIPHER_KEY_LEN: usize = 32;

/// HMAC-SHA256 key length.
pub const HMAC_KEY_LEN: usize = 32;

/// CTR initialization vector length.
pub const IV_LEN: usize = 16;

/// Total key-stretch output: cipher key + HMAC key + IV.
pub const DERIVED_KEY_LEN: usize = CIPHER_KEY_LEN + HMAC_KEY_LEN + IV_LEN;
