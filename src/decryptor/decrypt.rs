//! src/decryptor/decrypt.rs
//! Media decryption: ordered strategy fallback over secure-gate key material

use crate::aliases::{Iv16, MediaKey32};
use crate::builders::DecryptorBuilder;
use crate::category::MediaCategory;
use crate::consts::MIN_BLOB_LEN;
use crate::crypto::cbc::{decrypt_cbc, Padding};
use crate::crypto::hmac::verify_tag;
use crate::crypto::kdf::hkdf::{expand_media_key, ExpandedKeyMaterial, KeyVariant};
use crate::decryptor::diagnostics::{DiagnosticSink, TracingSink};
use crate::decryptor::strategy::{strategy_plan, KeyMode, Strategy};
use crate::error::{AttemptFailure, FailureReason, MediaCryptError};
use crate::frame::{parse, FrameLayout};
use crate::sniff::{detect, FormatTag};
use crate::utils::{decode_base64, decode_media_key};
use sha2::{Digest, Sha256};
use std::fmt;

/// Recovered plaintext plus what the engine learned while recovering it.
#[derive(Clone, PartialEq, Eq)]
pub struct DecryptedMedia {
    plaintext: Vec<u8>,
    format: FormatTag,
    strategy: Strategy,
    attempts: Vec<AttemptFailure>,
}

impl DecryptedMedia {
    #[must_use]
    pub fn plaintext(&self) -> &[u8] {
        &self.plaintext
    }

    #[must_use]
    pub fn into_plaintext(self) -> Vec<u8> {
        self.plaintext
    }

    #[must_use]
    pub fn format(&self) -> FormatTag {
        self.format
    }

    /// File extension of the detected format (`"pdf"`, `"png"`, …, `"bin"`).
    #[must_use]
    pub fn detected_format(&self) -> &'static str {
        self.format.extension()
    }

    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// The strategy that produced the plaintext.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Failures that preceded success, in order. Empty when the first strategy won.
    #[must_use]
    pub fn attempts(&self) -> &[AttemptFailure] {
        &self.attempts
    }

    /// `true` when the winning layout carried no tag, so integrity was not checked.
    #[must_use]
    pub fn is_unverified(&self) -> bool {
        !self.strategy.layout.is_authenticated()
    }

    /// SHA-256 of the plaintext, the digest webhooks carry as `fileSha256`.
    #[must_use]
    pub fn sha256(&self) -> [u8; 32] {
        Sha256::digest(&self.plaintext).into()
    }
}

impl fmt::Debug for DecryptedMedia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecryptedMedia")
            .field("len", &self.plaintext.len())
            .field("format", &self.format)
            .field("strategy", &self.strategy)
            .field("attempts", &self.attempts)
            .finish()
    }
}

/// The orchestrator. Immutable once built, so one instance can serve any number
/// of concurrent calls.
///
/// # Thread Safety
///
/// `MediaDecryptor` is `Send + Sync` and holds no per-call state. Every call
/// creates its own key material and plaintext buffer and drops the key material
/// before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaDecryptor {
    pub(crate) key_mode: KeyMode,
    pub(crate) allow_unverified: bool,
    pub(crate) padding: Padding,
}

impl Default for MediaDecryptor {
    fn default() -> Self {
        DecryptorBuilder::new().build()
    }
}

impl MediaDecryptor {
    #[must_use]
    pub fn builder() -> DecryptorBuilder {
        DecryptorBuilder::new()
    }

    #[must_use]
    pub const fn key_mode(&self) -> KeyMode {
        self.key_mode
    }

    #[must_use]
    pub const fn allows_unverified(&self) -> bool {
        self.allow_unverified
    }

    #[must_use]
    pub const fn padding(&self) -> Padding {
        self.padding
    }

    /// Strategies this decryptor tries, in priority order.
    #[must_use]
    pub fn plan(&self) -> Vec<Strategy> {
        strategy_plan(self.key_mode, self.allow_unverified)
    }

    /// Decrypt `blob` with a base64 media key, logging progress through `tracing`.
    ///
    /// # Errors
    ///
    /// - [`MediaCryptError::InvalidEncoding`] / [`MediaCryptError::InvalidKeyLength`]
    ///   for a bad key, before any cryptography runs
    /// - [`MediaCryptError::BlobTooShort`] for blobs under 26 bytes
    /// - [`MediaCryptError::DecryptionExhausted`] when no strategy applies
    pub fn decrypt(
        &self,
        blob: &[u8],
        media_key_b64: &str,
        category: MediaCategory,
    ) -> Result<DecryptedMedia, MediaCryptError> {
        self.decrypt_with_sink(blob, media_key_b64, category, &mut TracingSink)
    }

    /// As [`decrypt`](Self::decrypt), reporting each attempt to `sink`.
    pub fn decrypt_with_sink(
        &self,
        blob: &[u8],
        media_key_b64: &str,
        category: MediaCategory,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<DecryptedMedia, MediaCryptError> {
        let media_key = decode_media_key(media_key_b64)?;
        self.run(blob, &media_key, category, sink)
    }

    /// Decrypt with an already-decoded media key.
    pub fn decrypt_with_key(
        &self,
        blob: &[u8],
        media_key: &MediaKey32,
        category: MediaCategory,
    ) -> Result<DecryptedMedia, MediaCryptError> {
        self.decrypt_with_key_and_sink(blob, media_key, category, &mut TracingSink)
    }

    /// As [`decrypt_with_key`](Self::decrypt_with_key), reporting each attempt to `sink`.
    pub fn decrypt_with_key_and_sink(
        &self,
        blob: &[u8],
        media_key: &MediaKey32,
        category: MediaCategory,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<DecryptedMedia, MediaCryptError> {
        self.run(blob, media_key, category, sink)
    }

    /// Check SHA-256 of `blob` against the base64 `fileEncSha256` first, then decrypt.
    ///
    /// # Errors
    ///
    /// Everything [`decrypt`](Self::decrypt) returns, plus
    /// [`MediaCryptError::IntegrityMismatch`] when the digest differs and
    /// [`MediaCryptError::InvalidEncoding`] when `file_enc_sha256_b64` is not a
    /// base64 SHA-256 digest.
    pub fn decrypt_checked(
        &self,
        blob: &[u8],
        media_key_b64: &str,
        category: MediaCategory,
        file_enc_sha256_b64: &str,
    ) -> Result<DecryptedMedia, MediaCryptError> {
        self.decrypt_checked_with_sink(
            blob,
            media_key_b64,
            category,
            file_enc_sha256_b64,
            &mut TracingSink,
        )
    }

    /// As [`decrypt_checked`](Self::decrypt_checked), reporting each attempt to `sink`.
    /// A digest mismatch ends the call before any attempt is reported.
    pub fn decrypt_checked_with_sink(
        &self,
        blob: &[u8],
        media_key_b64: &str,
        category: MediaCategory,
        file_enc_sha256_b64: &str,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<DecryptedMedia, MediaCryptError> {
        let media_key = decode_media_key(media_key_b64)?;
        let expected = decode_base64(file_enc_sha256_b64)?;
        if expected.len() != 32 {
            return Err(MediaCryptError::InvalidEncoding(format!(
                "fileEncSha256 must decode to 32 bytes, got {}",
                expected.len()
            )));
        }
        if Sha256::digest(blob).as_slice() != expected.as_slice() {
            tracing::debug!(blob_len = blob.len(), "encrypted blob digest mismatch");
            return Err(MediaCryptError::IntegrityMismatch);
        }
        self.run(blob, &media_key, category, sink)
    }

    fn run(
        &self,
        blob: &[u8],
        media_key: &MediaKey32,
        category: MediaCategory,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<DecryptedMedia, MediaCryptError> {
        let span = tracing::debug_span!("media_decrypt", %category, blob_len = blob.len());
        let _enter = span.enter();

        if blob.len() < MIN_BLOB_LEN {
            return Err(MediaCryptError::BlobTooShort {
                len: blob.len(),
                min: MIN_BLOB_LEN,
            });
        }

        // Expanded lazily, once per variant, indexed in `KeyVariant::ALL` order.
        let mut key_slots: [Option<ExpandedKeyMaterial>; 3] = [None, None, None];
        let mut attempts = Vec::new();

        for strategy in self.plan() {
            let keys = key_slots[variant_slot(strategy.variant)]
                .get_or_insert_with(|| expand_media_key(media_key, category, strategy.variant));

            match try_strategy(blob, strategy.layout, keys, self.padding) {
                Ok(plaintext) => {
                    let format = detect(&plaintext);
                    sink.attempt_succeeded(strategy, format);
                    if !strategy.layout.is_authenticated() {
                        tracing::warn!(%strategy, "decrypted without tag verification");
                    }
                    return Ok(DecryptedMedia {
                        plaintext,
                        format,
                        strategy,
                        attempts,
                    });
                }
                Err(reason) => {
                    let failure = AttemptFailure { strategy, reason };
                    sink.attempt_failed(&failure);
                    attempts.push(failure);
                }
            }
        }

        tracing::debug!(attempts = attempts.len(), "all strategies exhausted");
        Err(MediaCryptError::DecryptionExhausted { attempts })
    }
}

#[inline(always)]
const fn variant_slot(variant: KeyVariant) -> usize {
    match variant {
        KeyVariant::Labeled => 0,
        KeyVariant::LabeledSplitMac => 1,
        KeyVariant::Salted => 2,
    }
}

/// Parse → verify (when the layout carries a tag) → decrypt.
fn try_strategy(
    blob: &[u8],
    layout: FrameLayout,
    keys: &ExpandedKeyMaterial,
    padding: Padding,
) -> Result<Vec<u8>, FailureReason> {
    let frame = parse(blob, layout)?;
    let iv = match frame.iv {
        Some(carried) => Iv16::new(*carried),
        None => Iv16::new(*keys.iv().expose_secret()),
    };

    if let Some(tag) = frame.tag {
        if !verify_tag(keys.mac_key(), &iv, frame.body, tag) {
            return Err(FailureReason::MacMismatch);
        }
    }

    Ok(decrypt_cbc(frame.body, keys.cipher_key(), &iv, padding)?)
}

/// Decrypt with the default decryptor (permissive, unverified layout allowed, PKCS#7).
pub fn decrypt_media(
    blob: &[u8],
    media_key_b64: &str,
    category: MediaCategory,
) -> Result<DecryptedMedia, MediaCryptError> {
    MediaDecryptor::default().decrypt(blob, media_key_b64, category)
}
