//! # Envelope Parsing
//!
//! Splits the armored container text into its salt, expected HMAC and
//! ciphertext. The header line carries the format tag, version marker and
//! cipher name; everything after it is the body, hex-encoded twice — once for
//! line wrapping (the breaks carry no meaning) and once to separate the three
//! fields. No cryptographic work happens until parsing fully succeeds.

use crate::consts::{AES_BLOCK_SIZE, CIPHER_NAME, FORMAT_TAG, VERSION_TAG};
use crate::error::VaultError;
use crate::hexlify::unhexlify;

/// The parsed container: everything needed to derive keys, verify and decrypt.
#[derive(Debug)]
pub struct VaultEnvelope {
    /// KDF salt, stored in cleartext alongside the ciphertext.
    pub salt: Vec<u8>,
    /// HMAC-SHA256 over the ciphertext, as written by the encrypting tool.
    pub expected_hmac: Vec<u8>,
    /// AES-256-CTR ciphertext; always a positive multiple of the block size.
    pub ciphertext: Vec<u8>,
}

impl VaultEnvelope {
    /// Parse the full armored text of a vault resource.
    ///
    /// # Errors
    ///
    /// [`VaultError::Format`] for a missing header, an unsupported version or
    /// cipher identifier, malformed hex anywhere in the body, or a missing
    /// line terminator after the salt or HMAC fields.
    pub fn parse(text: &str) -> Result<Self, VaultError> {
        let mut cursor = TextCursor::new(text);

        if !cursor.expect(FORMAT_TAG) {
            return Err(VaultError::Format(format!("header {FORMAT_TAG} expected")));
        }
        if !cursor.expect(VERSION_TAG) {
            return Err(VaultError::Format(format!(
                "header version {VERSION_TAG} expected"
            )));
        }
        let algorithm = cursor
            .take_line()
            .ok_or_else(|| VaultError::Format("Crypto algorithm header not found".into()))?;
        if algorithm != CIPHER_NAME {
            return Err(VaultError::Format(format!(
                "Unsupported crypto algorithm: {algorithm}"
            )));
        }

        // Outer hex layer: the body is wrapped across fixed-width lines for
        // text transport only.
        let body = unhexlify(&cursor.take_rest_unwrapped())?;
        let body = String::from_utf8(body)
            .map_err(|_| VaultError::Format("vault body is not valid UTF-8".into()))?;

        let mut cursor = TextCursor::new(&body);
        let salt = unhexlify(
            cursor
                .take_line()
                .ok_or_else(|| VaultError::Format("cannot determine end of salt".into()))?,
        )?;
        let expected_hmac = unhexlify(
            cursor
                .take_line()
                .ok_or_else(|| VaultError::Format("cannot determine end of HMAC".into()))?,
        )?;
        let ciphertext = unhexlify(&cursor.take_rest_unwrapped())?;

        if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_SIZE != 0 {
            return Err(VaultError::Format(format!(
                "ciphertext length {} is not a positive multiple of {AES_BLOCK_SIZE}",
                ciphertext.len()
            )));
        }

        Ok(Self {
            salt,
            expected_hmac,
            ciphertext,
        })
    }
}

/// Forward-only cursor over the armored text.
struct TextCursor<'a> {
    rest: &'a str,
}

impl<'a> TextCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    /// Consume `expected` if the remaining text starts with it.
    fn expect(&mut self, expected: &str) -> bool {
        match self.rest.strip_prefix(expected) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    /// Consume and return everything up to the next line break, or `None`
    /// when no line terminator follows.
    fn take_line(&mut self) -> Option<&'a str> {
        let end = self.rest.find(&['\n', '\r'][..])?;
        let line = &self.rest[..end];
        self.rest = &self.rest[end + 1..];
        Some(line)
    }

    /// The remaining text with every line-break character removed.
    fn take_rest_unwrapped(&mut self) -> String {
        let unwrapped = self
            .rest
            .chars()
            .filter(|c| *c != '\n' && *c != '\r')
            .collect();
        self.rest = "";
        unwrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hexlify::hexlify;

    // Armors salt/hmac/ciphertext the way the reference tool does, without
    // the cosmetic 80-column wrapping.
    fn armor(salt: &[u8], hmac: &[u8], ciphertext: &[u8]) -> String {
        let inner = format!(
            "{}\n{}\n{}",
            hexlify(salt),
            hexlify(hmac),
            hexlify(ciphertext)
        );
        format!("$ANSIBLE_VAULT;1.1;AES256\n{}\n", hexlify(inner.as_bytes()))
    }

    #[test]
    fn parses_unwrapped_envelope() {
        let envelope =
            VaultEnvelope::parse(&armor(&[0x01; 32], &[0x02; 32], &[0x03; 48])).unwrap();
        assert_eq!(envelope.salt, [0x01; 32]);
        assert_eq!(envelope.expected_hmac, [0x02; 32]);
        assert_eq!(envelope.ciphertext, [0x03; 48]);
    }

    #[test]
    fn parses_wrapped_body() {
        let armored = armor(&[0x01; 32], &[0x02; 32], &[0x03; 16]);
        let (header, body) = armored.split_once('\n').unwrap();
        let wrapped: Vec<&str> = body
            .trim_end()
            .as_bytes()
            .chunks(80)
            .map(|c| std::str::from_utf8(c).unwrap())
            .collect();
        let rewrapped = format!("{header}\n{}\n", wrapped.join("\n"));

        let envelope = VaultEnvelope::parse(&rewrapped).unwrap();
        assert_eq!(envelope.ciphertext, [0x03; 16]);
    }

    #[test]
    fn rejects_missing_format_tag() {
        let err = VaultEnvelope::parse("PNG\n").unwrap_err();
        assert_eq!(err.to_string(), "Format error: header $ANSIBLE_VAULT; expected");
    }

    #[test]
    fn rejects_unsupported_version() {
        let err = VaultEnvelope::parse("$ANSIBLE_VAULT;1.2;AES256\n").unwrap_err();
        assert_eq!(err.to_string(), "Format error: header version 1.1; expected");
    }

    #[test]
    fn rejects_unsupported_cipher() {
        let err = VaultEnvelope::parse("$ANSIBLE_VAULT;1.1;BLOWFISH\n00\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Format error: Unsupported crypto algorithm: BLOWFISH"
        );
    }

    #[test]
    fn rejects_missing_cipher_line_terminator() {
        let err = VaultEnvelope::parse("$ANSIBLE_VAULT;1.1;AES256").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Format error: Crypto algorithm header not found"
        );
    }

    #[test]
    fn rejects_missing_salt_terminator() {
        // Inner text is a single hex token with no line break after it.
        let inner = hexlify(&[0x01; 32]);
        let armored = format!("$ANSIBLE_VAULT;1.1;AES256\n{}\n", hexlify(inner.as_bytes()));
        let err = VaultEnvelope::parse(&armored).unwrap_err();
        assert_eq!(err.to_string(), "Format error: cannot determine end of salt");
    }

    #[test]
    fn rejects_missing_hmac_terminator() {
        let inner = format!("{}\n{}", hexlify(&[0x01; 32]), hexlify(&[0x02; 32]));
        let armored = format!("$ANSIBLE_VAULT;1.1;AES256\n{}\n", hexlify(inner.as_bytes()));
        let err = VaultEnvelope::parse(&armored).unwrap_err();
        assert_eq!(err.to_string(), "Format error: cannot determine end of HMAC");
    }

    #[test]
    fn rejects_non_block_aligned_ciphertext() {
        let err = VaultEnvelope::parse(&armor(&[0x01; 32], &[0x02; 32], &[0x03; 15])).unwrap_err();
        assert!(matches!(err, VaultError::Format(_)));

        let err = VaultEnvelope::parse(&armor(&[0x01; 32], &[0x02; 32], &[])).unwrap_err();
        assert!(matches!(err, VaultError::Format(_)));
    }

    #[test]
    fn rejects_odd_length_body() {
        let armored = "$ANSIBLE_VAULT;1.1;AES256\nabc\n";
        let err = VaultEnvelope::parse(armored).unwrap_err();
        assert_eq!(err.to_string(), "Format error: hex input has odd length");
    }
}
