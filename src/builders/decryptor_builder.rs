//! src/builders/decryptor_builder.rs
//! MediaDecryptor configuration

use crate::crypto::cbc::Padding;
use crate::crypto::kdf::hkdf::KeyVariant;
use crate::decryptor::{KeyMode, MediaDecryptor};

/// Builder for [`MediaDecryptor`].
///
/// Defaults: every key variant ([`KeyMode::Permissive`]), the unverified layout
/// allowed as a late fallback, PKCS#7 padding.
///
/// # Thread Safety
///
/// This type is **thread-safe** (`Send + Sync`) and the decryptor it builds holds
/// no mutable state.
#[derive(Debug, Clone)]
pub struct DecryptorBuilder {
    key_mode: KeyMode,
    allow_unverified: bool,
    padding: Padding,
}

impl DecryptorBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            key_mode: KeyMode::Permissive,
            allow_unverified: true,
            padding: Padding::Pkcs7,
        }
    }

    /// Set which key variants may be tried.
    #[must_use]
    pub fn with_key_mode(mut self, key_mode: KeyMode) -> Self {
        self.key_mode = key_mode;
        self
    }

    /// Shorthand for `with_key_mode(KeyMode::Strict(variant))`.
    #[must_use]
    pub fn strict(self, variant: KeyVariant) -> Self {
        self.with_key_mode(KeyMode::Strict(variant))
    }

    /// Allow or forbid the untagged layout. Forbidding it means every success
    /// has passed tag verification.
    #[must_use]
    pub fn with_unverified(mut self, allow: bool) -> Self {
        self.allow_unverified = allow;
        self
    }

    /// Padding expected on the final block.
    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub const fn key_mode(&self) -> KeyMode {
        self.key_mode
    }

    #[must_use]
    pub fn build(self) -> MediaDecryptor {
        MediaDecryptor {
            key_mode: self.key_mode,
            allow_unverified: self.allow_unverified,
            padding: self.padding,
        }
    }
}

impl Default for DecryptorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
