//! src/encryptor/encrypt.rs
//! Media encryption: derive, CBC-encrypt, tag, frame

use crate::aliases::MediaKey32;
use crate::category::MediaCategory;
use crate::consts::{BLOCK_LEN, MAC_TAG_LEN};
use crate::crypto::cbc::encrypt_cbc_pkcs7;
use crate::crypto::hmac::compute_tag;
use crate::crypto::kdf::hkdf::{expand_media_key, KeyVariant};
use crate::error::MediaCryptError;
use crate::frame::FrameLayout;
use crate::utils::decode_media_key;

/// Encrypt `plaintext` into a blob with the given layout and key variant.
///
/// The IV is always the one derived from the media key; layouts that carry an
/// IV carry that one. PKCS#7 padding is always applied.
///
/// | layout | output |
/// |---|---|
/// | `Standard` | `IV ‖ ciphertext ‖ tag` |
/// | `DerivedIv` | `ciphertext ‖ tag` |
/// | `Unverified` | `IV ‖ ciphertext` |
/// | `MacPrefix` | `tag ‖ IV ‖ ciphertext` |
#[must_use]
pub fn encrypt_media(
    plaintext: &[u8],
    media_key: &MediaKey32,
    category: MediaCategory,
    variant: KeyVariant,
    layout: FrameLayout,
) -> Vec<u8> {
    let keys = expand_media_key(media_key, category, variant);
    let iv = keys.iv();
    let body = encrypt_cbc_pkcs7(plaintext, keys.cipher_key(), iv);
    let tag = compute_tag(keys.mac_key(), iv, &body);

    let mut blob = Vec::with_capacity(BLOCK_LEN + body.len() + MAC_TAG_LEN);
    match layout {
        FrameLayout::Standard => {
            blob.extend_from_slice(iv.expose_secret());
            blob.extend_from_slice(&body);
            blob.extend_from_slice(&tag);
        }
        FrameLayout::DerivedIv => {
            blob.extend_from_slice(&body);
            blob.extend_from_slice(&tag);
        }
        FrameLayout::Unverified => {
            blob.extend_from_slice(iv.expose_secret());
            blob.extend_from_slice(&body);
        }
        FrameLayout::MacPrefix => {
            blob.extend_from_slice(&tag);
            blob.extend_from_slice(iv.expose_secret());
            blob.extend_from_slice(&body);
        }
    }
    blob
}

/// As [`encrypt_media`], taking the media key in base64.
///
/// # Errors
///
/// [`MediaCryptError::InvalidEncoding`] / [`MediaCryptError::InvalidKeyLength`]
/// for a bad key.
pub fn encrypt_media_b64(
    plaintext: &[u8],
    media_key_b64: &str,
    category: MediaCategory,
    variant: KeyVariant,
    layout: FrameLayout,
) -> Result<Vec<u8>, MediaCryptError> {
    let media_key = decode_media_key(media_key_b64)?;
    Ok(encrypt_media(plaintext, &media_key, category, variant, layout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::parse;

    #[test]
    fn blob_sizes_follow_layout() {
        let key = MediaKey32::new([9u8; 32]);
        let sizes: Vec<usize> = [
            FrameLayout::Standard,
            FrameLayout::DerivedIv,
            FrameLayout::Unverified,
            FrameLayout::MacPrefix,
        ]
        .into_iter()
        .map(|layout| {
            encrypt_media(b"0123456789", &key, MediaCategory::Audio, KeyVariant::Labeled, layout)
                .len()
        })
        .collect();
        assert_eq!(sizes, vec![42, 26, 32, 42]);
    }

    #[test]
    fn carried_iv_is_the_derived_iv() {
        let key = MediaKey32::new([3u8; 32]);
        let keys = expand_media_key(&key, MediaCategory::Video, KeyVariant::Salted);
        let blob = encrypt_media(
            b"frame",
            &key,
            MediaCategory::Video,
            KeyVariant::Salted,
            FrameLayout::MacPrefix,
        );
        let frame = parse(&blob, FrameLayout::MacPrefix).unwrap();
        assert_eq!(frame.iv.unwrap(), keys.iv().expose_secret());
    }
}
