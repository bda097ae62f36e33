//! src/crypto/kdf/hkdf.rs
//! Media-key expansion: HKDF-SHA256 into secure-gate buffers

use crate::aliases::{CipherKey32, Iv16, KeyStream112, MacKey32, MediaKey32};
use crate::category::MediaCategory;
use crate::consts::{
    CIPHER_KEY_RANGE, EXPANDED_KEY_LEN, IV_RANGE, KEY_LEN, MAC_KEY_RANGE, MEDIA_KEYS_SALT,
};
use hkdf::Hkdf;
use sha2::Sha256;
use std::fmt;

/// Key-derivation convention used to turn a media key into IV, cipher key and MAC key.
///
/// Nothing in a blob says which convention produced it, so the orchestrator tries
/// them in the order of [`KeyVariant::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyVariant {
    /// The media key is the HKDF PRK; one 112-byte expansion with the category's
    /// `"… Keys"` label yields IV `[0,16)`, cipher key `[16,48)`, MAC key `[48,80)`.
    Labeled,
    /// As `Labeled` for IV and cipher key, but the MAC key comes from a separate
    /// 32-byte expansion with the category's `"… MAC Keys"` label.
    LabeledSplitMac,
    /// HKDF extract with salt `"WhatsApp Media Keys"`, then a 112-byte expansion
    /// with empty info. Category-independent.
    Salted,
}

impl KeyVariant {
    pub const ALL: [KeyVariant; 3] = [
        KeyVariant::Labeled,
        KeyVariant::LabeledSplitMac,
        KeyVariant::Salted,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            KeyVariant::Labeled => "labeled",
            KeyVariant::LabeledSplitMac => "labeled-split-mac",
            KeyVariant::Salted => "salted",
        }
    }
}

impl fmt::Display for KeyVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// IV, cipher key and MAC key derived for one decryption call.
///
/// Every field is a secure-gate buffer; the material is dropped with the call.
pub struct ExpandedKeyMaterial {
    iv: Iv16,
    cipher_key: CipherKey32,
    mac_key: MacKey32,
}

impl ExpandedKeyMaterial {
    #[inline(always)]
    pub fn iv(&self) -> &Iv16 {
        &self.iv
    }

    #[inline(always)]
    pub fn cipher_key(&self) -> &CipherKey32 {
        &self.cipher_key
    }

    #[inline(always)]
    pub fn mac_key(&self) -> &MacKey32 {
        &self.mac_key
    }
}

impl fmt::Debug for ExpandedKeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ExpandedKeyMaterial([REDACTED])")
    }
}

/// Produce the raw 112-byte key stream for `variant`.
///
/// For [`KeyVariant::LabeledSplitMac`] this is the same stream as `Labeled`; the
/// separate MAC key is applied by [`expand_media_key`].
#[inline]
pub fn derive_key_stream(
    media_key: &MediaKey32,
    category: MediaCategory,
    variant: KeyVariant,
) -> KeyStream112 {
    let mut stream = KeyStream112::new([0u8; EXPANDED_KEY_LEN]);
    match variant {
        KeyVariant::Labeled | KeyVariant::LabeledSplitMac => hkdf_expand(
            media_key.expose_secret(),
            category.label(),
            stream.expose_secret_mut(),
        ),
        KeyVariant::Salted => hkdf_extract_expand(
            MEDIA_KEYS_SALT,
            media_key.expose_secret(),
            &[],
            stream.expose_secret_mut(),
        ),
    }
    stream
}

/// Derive the partitioned key material for one (category, variant) pair.
pub fn expand_media_key(
    media_key: &MediaKey32,
    category: MediaCategory,
    variant: KeyVariant,
) -> ExpandedKeyMaterial {
    let stream = derive_key_stream(media_key, category, variant);
    let bytes = stream.expose_secret();

    let mut material = ExpandedKeyMaterial {
        iv: Iv16::new([0u8; 16]),
        cipher_key: CipherKey32::new([0u8; KEY_LEN]),
        mac_key: MacKey32::new([0u8; KEY_LEN]),
    };
    material.iv.expose_secret_mut().copy_from_slice(&bytes[IV_RANGE]);
    material
        .cipher_key
        .expose_secret_mut()
        .copy_from_slice(&bytes[CIPHER_KEY_RANGE]);

    match variant {
        KeyVariant::LabeledSplitMac => hkdf_expand(
            media_key.expose_secret(),
            category.mac_label(),
            material.mac_key.expose_secret_mut(),
        ),
        KeyVariant::Labeled | KeyVariant::Salted => material
            .mac_key
            .expose_secret_mut()
            .copy_from_slice(&bytes[MAC_KEY_RANGE]),
    }

    material
}

/// HKDF-Expand with `prk` used directly as the pseudorandom key (no extract step).
#[inline(always)]
fn hkdf_expand(prk: &[u8; 32], info: &[u8], out: &mut [u8]) {
    Hkdf::<Sha256>::from_prk(prk)
        .expect("32-byte PRK is exactly the SHA-256 output length")
        .expand(info, out)
        .expect("output of at most 112 bytes is within the HKDF-SHA256 limit");
}

/// HKDF-Extract followed by HKDF-Expand.
#[inline(always)]
fn hkdf_extract_expand(salt: &[u8], ikm: &[u8], info: &[u8], out: &mut [u8]) {
    Hkdf::<Sha256>::new(Some(salt), ikm)
        .expand(info, out)
        .expect("112 bytes is within the HKDF-SHA256 output limit");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::HmacSha256;
    use hmac::Mac;

    /// T_i = HMAC(prk, T_{i-1} || info || i), concatenated and truncated.
    fn manual_expand(prk: &[u8], info: &[u8], len: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(len + 32);
        let mut previous: Vec<u8> = Vec::new();
        let mut counter = 1u8;
        while out.len() < len {
            let mut mac = <HmacSha256 as Mac>::new_from_slice(prk).unwrap();
            mac.update(&previous);
            mac.update(info);
            mac.update(&[counter]);
            previous = mac.finalize().into_bytes().to_vec();
            out.extend_from_slice(&previous);
            counter += 1;
        }
        out.truncate(len);
        out
    }

    fn key(byte: u8) -> MediaKey32 {
        MediaKey32::new([byte; 32])
    }

    #[test]
    fn labeled_stream_matches_block_construction() {
        let media_key = key(0x11);
        let stream = derive_key_stream(&media_key, MediaCategory::Image, KeyVariant::Labeled);
        let expected = manual_expand(&[0x11; 32], b"WhatsApp Image Keys", 112);
        assert_eq!(stream.expose_secret().as_slice(), expected.as_slice());
    }

    #[test]
    fn salted_stream_matches_extract_then_expand() {
        let media_key = key(0x22);
        let stream = derive_key_stream(&media_key, MediaCategory::Video, KeyVariant::Salted);

        let mut extract = <HmacSha256 as Mac>::new_from_slice(b"WhatsApp Media Keys").unwrap();
        extract.update(&[0x22; 32]);
        let prk = extract.finalize().into_bytes();
        let expected = manual_expand(&prk, b"", 112);

        assert_eq!(stream.expose_secret().as_slice(), expected.as_slice());
    }

    #[test]
    fn salted_variant_ignores_category() {
        let media_key = key(0x33);
        let a = derive_key_stream(&media_key, MediaCategory::Document, KeyVariant::Salted);
        let b = derive_key_stream(&media_key, MediaCategory::Audio, KeyVariant::Salted);
        assert_eq!(a.expose_secret(), b.expose_secret());
    }

    #[test]
    fn partitioning_follows_fixed_offsets() {
        let media_key = key(0x44);
        let stream = derive_key_stream(&media_key, MediaCategory::Document, KeyVariant::Labeled);
        let keys = expand_media_key(&media_key, MediaCategory::Document, KeyVariant::Labeled);
        let s = stream.expose_secret();
        assert_eq!(keys.iv().expose_secret().as_slice(), &s[0..16]);
        assert_eq!(keys.cipher_key().expose_secret().as_slice(), &s[16..48]);
        assert_eq!(keys.mac_key().expose_secret().as_slice(), &s[48..80]);
    }

    #[test]
    fn split_mac_variant_uses_mac_label() {
        let media_key = key(0x55);
        let labeled = expand_media_key(&media_key, MediaCategory::Audio, KeyVariant::Labeled);
        let split =
            expand_media_key(&media_key, MediaCategory::Audio, KeyVariant::LabeledSplitMac);

        assert_eq!(labeled.iv().expose_secret(), split.iv().expose_secret());
        assert_eq!(
            labeled.cipher_key().expose_secret(),
            split.cipher_key().expose_secret()
        );
        let expected_mac = manual_expand(&[0x55; 32], b"WhatsApp Audio MAC Keys", 32);
        assert_eq!(split.mac_key().expose_secret().as_slice(), expected_mac.as_slice());
        assert_ne!(labeled.mac_key().expose_secret(), split.mac_key().expose_secret());
    }

    #[test]
    fn debug_is_redacted() {
        let keys = expand_media_key(&key(0), MediaCategory::Document, KeyVariant::Labeled);
        assert_eq!(format!("{keys:?}"), "ExpandedKeyMaterial([REDACTED])");
    }
}
