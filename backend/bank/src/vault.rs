//! # Vault
//!
//! Credentials are sealed before they reach storage. The only scheme shipped is
//! [`XorCipher`]: every byte XORed with the first byte of the key, then base64. It is
//! obfuscation, not encryption. Anything stronger plugs in behind [`Cipher`].
//!
//! Sealing XORs UTF-8 bytes. The browser dashboard XORed UTF-16 code units and could
//! only store Latin-1 text, so its ciphertext is the same as ours for ASCII credentials
//! only. Opening reads UTF-8 first and falls back to Latin-1, which covers both.

use base64::{Engine, engine::general_purpose::STANDARD};
use thiserror::Error;

pub const PLACEHOLDER_KEY: &str = "your-secure-key";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum VaultError {
    #[error("Vault key is empty")]
    EmptyKey,

    #[error("Credential is not valid base64")]
    Encoding,
}

pub trait Cipher {
    fn seal(&self, plaintext: &str) -> String;

    fn open(&self, sealed: &str) -> Result<String, VaultError>;
}

#[derive(Debug, Clone, Copy)]
pub struct XorCipher {
    key: u8,
}

impl XorCipher {
    pub fn from_key(key: &str) -> Result<Self, VaultError> {
        key.bytes()
            .next()
            .map(|key| Self { key })
            .ok_or(VaultError::EmptyKey)
    }

    fn apply(&self, bytes: &[u8]) -> Vec<u8> {
        bytes.iter().map(|byte| byte ^ self.key).collect()
    }
}

impl Cipher for XorCipher {
    fn seal(&self, plaintext: &str) -> String {
        STANDARD.encode(self.apply(plaintext.as_bytes()))
    }

    fn open(&self, sealed: &str) -> Result<String, VaultError> {
        let bytes = STANDARD.decode(sealed).map_err(|_| VaultError::Encoding)?;

        Ok(String::from_utf8(self.apply(&bytes))
            .unwrap_or_else(|e| e.into_bytes().into_iter().map(char::from).collect()))
    }
}
