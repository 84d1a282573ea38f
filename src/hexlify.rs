//! Bytes ⇄ lowercase hexadecimal text.
//!
//! The vault armoring applies hex twice: an outer layer for fixed-width line
//! wrapping and an inner layer separating the salt, HMAC and ciphertext
//! fields. Decoding is case-insensitive; encoding always emits lowercase.

use crate::error::VaultError;

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Encode binary data to its hex representation, two lowercase characters per
/// byte, most-significant nibble first.
pub fn hexlify(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 2);
    for &byte in data {
        out.push(HEX_CHARS[(byte >> 4) as usize] as char);
        out.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
    }
    out
}

/// Decode hex text into bytes.
///
/// Fails with [`VaultError::Format`] if the length is odd or any character is
/// outside `0-9a-fA-F`.
///
/// # Example
///
/// ```
/// let bytes = ansible_vault_rs::hexlify::unhexlify("48656c6C6f")?;
/// assert_eq!(bytes, b"Hello");
/// # Ok::<(), ansible_vault_rs::VaultError>(())
/// ```
pub fn unhexlify(text: &str) -> Result<Vec<u8>, VaultError> {
    let data = text.as_bytes();
    if data.len() % 2 != 0 {
        return Err(VaultError::Format("hex input has odd length".into()));
    }

    let mut out = Vec::with_capacity(data.len() / 2);
    for pair in data.chunks_exact(2) {
        out.push((from_hex(pair[0])? << 4) | from_hex(pair[1])?);
    }
    Ok(out)
}

fn from_hex(chr: u8) -> Result<u8, VaultError> {
    match chr {
        b'0'..=b'9' => Ok(chr - b'0'),
        b'a'..=b'f' => Ok(10 + chr - b'a'),
        b'A'..=b'F' => Ok(10 + chr - b'A'),
        _ => Err(VaultError::Format(format!(
            "unexpected input: {}",
            chr as char
        ))),
    }
}
