//! Pluggable vault password sources.
//!
//! The decoding core only needs "a function that returns zero-or-one
//! passphrase". These are the two stock implementations living at that
//! boundary: an environment property and a password file. All vault files
//! read by one process must use the same password.

use crate::error::VaultError;
use std::fs;
use std::path::{Path, PathBuf};
use zeroize::{Zeroize, Zeroizing};

/// Environment variable consulted for the vault password. A plain value is
/// the password itself; a value of the form `@path` points at a password
/// file. Do not put the password itself under version control.
pub const VAULT_SECRET_VAR: &str = "ANSIBLE_VAULT_SECRET";

/// Default password file looked up in the current working directory.
pub const DEFAULT_PASSWORD_FILE: &str = "vault.secret";

/// A source that can yield zero or one vault password.
pub trait PasswordSource {
    /// The password, `None` when this source has nothing to offer.
    fn vault_password(&self) -> Result<Option<Zeroizing<String>>, VaultError>;
}

/// Password taken verbatim from [`VAULT_SECRET_VAR`].
///
/// A value starting with `@` is a file reference and is left for
/// [`FilePasswordSource`] to resolve.
pub struct PropertyPasswordSource;

impl PasswordSource for PropertyPasswordSource {
    fn vault_password(&self) -> Result<Option<Zeroizing<String>>, VaultError> {
        match std::env::var(VAULT_SECRET_VAR) {
            Ok(value) if !value.is_empty() && !value.starts_with('@') => {
                Ok(Some(Zeroizing::new(value)))
            }
            _ => Ok(None),
        }
    }
}

/// Password loaded from a text file: the `@path` form of
/// [`VAULT_SECRET_VAR`], or the default [`DEFAULT_PASSWORD_FILE`] when it
/// exists.
pub struct FilePasswordSource;

impl PasswordSource for FilePasswordSource {
    fn vault_password(&self) -> Result<Option<Zeroizing<String>>, VaultError> {
        if let Ok(value) = std::env::var(VAULT_SECRET_VAR) {
            if let Some(path) = value.strip_prefix('@') {
                if !path.is_empty() {
                    return load_password(Path::new(path));
                }
            }
        }

        let default = PathBuf::from(DEFAULT_PASSWORD_FILE);
        if default.exists() {
            return load_password(&default);
        }
        Ok(None)
    }
}

/// Read a password file, trimming surrounding whitespace.
///
/// An empty (or whitespace-only) file yields `None`. The raw file bytes are
/// wiped once the password string has been built.
pub fn load_password(path: &Path) -> Result<Option<Zeroizing<String>>, VaultError> {
    let mut raw = fs::read(path)?;
    let trimmed = trim_whitespace(&raw);
    let password = if trimmed.is_empty() {
        None
    } else {
        Some(Zeroizing::new(String::from_utf8_lossy(trimmed).into_owned()))
    };
    raw.zeroize();
    Ok(password)
}

/// Ask each source in order; the first password wins.
///
/// # Errors
///
/// [`VaultError::NoPassword`] naming [`VAULT_SECRET_VAR`] when no source
/// yields a password; I/O errors from password files propagate unchanged.
pub fn resolve_password(sources: &[&dyn PasswordSource]) -> Result<Zeroizing<String>, VaultError> {
    for source in sources {
        if let Some(password) = source.vault_password()? {
            return Ok(password);
        }
    }
    Err(VaultError::NoPassword(VAULT_SECRET_VAR))
}

/// Resolve through the stock source chain.
///
/// The file source runs first so the `@path` indirection takes precedence
/// over the property source's verbatim reading of the same variable.
pub fn resolve_default_password() -> Result<Zeroizing<String>, VaultError> {
    resolve_password(&[&FilePasswordSource, &PropertyPasswordSource])
}

// Bytes <= b' ' count as whitespace, matching the reference loader.
fn trim_whitespace(data: &[u8]) -> &[u8] {
    let start = data
        .iter()
        .position(|b| *b > b' ')
        .unwrap_or(data.len());
    let end = data
        .iter()
        .rposition(|b| *b > b' ')
        .map_or(start, |i| i + 1);
    &data[start..end]
}
