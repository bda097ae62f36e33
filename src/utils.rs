// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

use crate::aliases::{MediaKey32, SecretBytes};
use crate::consts::MEDIA_KEY_LEN;
use crate::error::MediaCryptError;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;

const LENIENT: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);

const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// Decodes base64 the way webhook payloads deliver it: standard alphabet first,
/// URL-safe second, padding optional, surrounding whitespace ignored.
pub fn decode_base64(input: &str) -> Result<Vec<u8>, MediaCryptError> {
    let trimmed = input.trim();
    STANDARD_LENIENT
        .decode(trimmed)
        .or_else(|_| URL_SAFE_LENIENT.decode(trimmed))
        .map_err(|e| MediaCryptError::InvalidEncoding(format!("not valid base64: {e}")))
}

/// Decodes a base64 media key into a secure 32-byte buffer.
///
/// # Errors
///
/// - [`MediaCryptError::InvalidEncoding`] if `encoded` is not base64
/// - [`MediaCryptError::InvalidKeyLength`] if it does not decode to exactly 32 bytes
pub fn decode_media_key(encoded: &str) -> Result<MediaKey32, MediaCryptError> {
    let decoded = decode_secret(encoded)?;
    let bytes = decoded.expose_secret();
    if bytes.len() != MEDIA_KEY_LEN {
        return Err(MediaCryptError::InvalidKeyLength(bytes.len()));
    }

    let mut key = MediaKey32::new([0u8; MEDIA_KEY_LEN]);
    key.expose_secret_mut().copy_from_slice(bytes);
    Ok(key)
}

/// Decodes base64 straight into a secure buffer, so the raw bytes are wiped
/// when it drops.
pub fn decode_secret(input: &str) -> Result<SecretBytes, MediaCryptError> {
    decode_base64(input).map(SecretBytes::new)
}

/// Encodes a media key with the standard padded alphabet, the form webhooks carry.
#[must_use]
pub fn encode_media_key(key: &MediaKey32) -> String {
    STANDARD.encode(key.expose_secret())
}

/// XORs two 16-byte blocks and writes the result to `output`.
///
/// # Panics (by contract)
///
/// Panics if any of the three slices is shorter than 16 bytes. All callers pass
/// AES blocks or `Iv16` contents, which are exactly 16 bytes.
#[inline(always)]
pub const fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    let mut i = 0;
    while i < 16 {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}
