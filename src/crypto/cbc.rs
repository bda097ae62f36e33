//! src/crypto/cbc.rs
//! AES-256-CBC over in-memory buffers, with optional PKCS#7

use crate::aliases::{CipherKey32, Iv16};
use crate::consts::BLOCK_LEN;
use crate::error::CipherError;
use crate::utils::xor_blocks;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes256Dec, Aes256Enc, Block as AesBlock};

/// Padding applied to the last plaintext block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    /// PKCS#7: 1–16 bytes, each equal to the pad length.
    #[default]
    Pkcs7,
    /// No padding; plaintext is already block-aligned.
    None,
}

/// Decrypt `body` with AES-256-CBC.
///
/// Returns a freshly allocated plaintext buffer; `body` is not retained.
///
/// # Errors
///
/// - [`CipherError::UnalignedBody`] if `body.len()` is not a multiple of 16
/// - [`CipherError::Padding`] if PKCS#7 removal finds an invalid pad
///   (including an empty body, which has no final block to unpad)
pub fn decrypt_cbc(
    body: &[u8],
    cipher_key: &CipherKey32,
    iv: &Iv16,
    padding: Padding,
) -> Result<Vec<u8>, CipherError> {
    if body.len() % BLOCK_LEN != 0 {
        return Err(CipherError::UnalignedBody(body.len()));
    }

    let cipher = Aes256Dec::new(cipher_key.expose_secret().into());
    let mut plaintext = vec![0u8; body.len()];
    let mut previous: &[u8] = iv.expose_secret();

    for (chunk, out) in body
        .chunks_exact(BLOCK_LEN)
        .zip(plaintext.chunks_exact_mut(BLOCK_LEN))
    {
        let mut block = AesBlock::clone_from_slice(chunk);
        cipher.decrypt_block(&mut block);
        xor_blocks(block.as_slice(), previous, out);
        previous = chunk;
    }

    if padding == Padding::Pkcs7 {
        let unpadded = strip_pkcs7(&plaintext)?;
        plaintext.truncate(unpadded);
    }
    Ok(plaintext)
}

/// Encrypt `plaintext` with AES-256-CBC.
///
/// # Errors
///
/// [`CipherError::UnalignedBody`] when `padding` is [`Padding::None`] and the
/// plaintext is not block-aligned.
pub fn encrypt_cbc(
    plaintext: &[u8],
    cipher_key: &CipherKey32,
    iv: &Iv16,
    padding: Padding,
) -> Result<Vec<u8>, CipherError> {
    match padding {
        Padding::Pkcs7 => Ok(encrypt_cbc_pkcs7(plaintext, cipher_key, iv)),
        Padding::None if plaintext.len() % BLOCK_LEN != 0 => {
            Err(CipherError::UnalignedBody(plaintext.len()))
        }
        Padding::None => {
            let mut buffer = plaintext.to_vec();
            cbc_encrypt_in_place(&mut buffer, cipher_key, iv);
            Ok(buffer)
        }
    }
}

/// Encrypt with PKCS#7 padding, which always yields whole blocks.
#[must_use]
pub fn encrypt_cbc_pkcs7(plaintext: &[u8], cipher_key: &CipherKey32, iv: &Iv16) -> Vec<u8> {
    let pad = BLOCK_LEN - plaintext.len() % BLOCK_LEN;
    let mut buffer = Vec::with_capacity(plaintext.len() + pad);
    buffer.extend_from_slice(plaintext);
    buffer.resize(plaintext.len() + pad, pad as u8);
    cbc_encrypt_in_place(&mut buffer, cipher_key, iv);
    buffer
}

#[inline(always)]
fn cbc_encrypt_in_place(buffer: &mut [u8], cipher_key: &CipherKey32, iv: &Iv16) {
    let cipher = Aes256Enc::new(cipher_key.expose_secret().into());
    let mut previous: [u8; BLOCK_LEN] = *iv.expose_secret();

    for chunk in buffer.chunks_exact_mut(BLOCK_LEN) {
        let mut mixed = [0u8; BLOCK_LEN];
        xor_blocks(chunk, &previous, &mut mixed);
        let mut block = AesBlock::from(mixed);
        cipher.encrypt_block(&mut block);
        chunk.copy_from_slice(block.as_slice());
        previous.copy_from_slice(chunk);
    }
}

/// Validate PKCS#7 on the final block and return the unpadded length.
#[inline(always)]
fn strip_pkcs7(plaintext: &[u8]) -> Result<usize, CipherError> {
    let Some(last_block) = plaintext.last_chunk::<BLOCK_LEN>() else {
        return Err(CipherError::Padding);
    };
    let pad = last_block[BLOCK_LEN - 1];

    // Range check leaks only the pad byte, which is not secret once decrypted.
    if pad == 0 || pad as usize > BLOCK_LEN {
        return Err(CipherError::Padding);
    }

    let pad_start = BLOCK_LEN - pad as usize;
    let diff = last_block[pad_start..]
        .iter()
        .fold(0u8, |acc, &byte| acc | (byte ^ pad));
    if diff != 0 {
        return Err(CipherError::Padding);
    }

    Ok(plaintext.len() - pad as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> CipherKey32 {
        CipherKey32::new([0x2B; 32])
    }

    fn iv() -> Iv16 {
        Iv16::new(core::array::from_fn(|i| i as u8))
    }

    #[test]
    fn nist_sp800_38a_cbc_aes256_first_block() {
        // F.2.5 CBC-AES256.Decrypt, block #1
        let key_bytes =
            hex::decode("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4")
                .unwrap();
        let mut k = CipherKey32::new([0u8; 32]);
        k.expose_secret_mut().copy_from_slice(&key_bytes);
        let v = Iv16::new(core::array::from_fn(|i| i as u8));
        let ciphertext = hex::decode("f58c4c04d6e5f1ba779eabfb5f7bfbd6").unwrap();

        let plaintext = decrypt_cbc(&ciphertext, &k, &v, Padding::None).unwrap();
        assert_eq!(hex::encode(plaintext), "6bc1bee22e409f96e93d7e117393172a");
    }

    #[test]
    fn pkcs7_roundtrip_across_block_boundaries() {
        for len in [0usize, 1, 15, 16, 17, 31, 32, 100] {
            let data: Vec<u8> = (0..len).map(|i| (i * 7) as u8).collect();
            let ct = encrypt_cbc(&data, &key(), &iv(), Padding::Pkcs7).unwrap();
            assert_eq!(ct.len() % BLOCK_LEN, 0);
            assert!(ct.len() > data.len(), "len {len}: pad always added");
            assert_eq!(decrypt_cbc(&ct, &key(), &iv(), Padding::Pkcs7).unwrap(), data);
        }
    }

    #[test]
    fn no_padding_mode_keeps_full_blocks() {
        let data = [0x41u8; 32];
        let ct = encrypt_cbc(&data, &key(), &iv(), Padding::None).unwrap();
        assert_eq!(ct.len(), 32);
        assert_eq!(decrypt_cbc(&ct, &key(), &iv(), Padding::None).unwrap(), data);
    }

    #[test]
    fn no_padding_mode_rejects_unaligned_plaintext() {
        assert_eq!(
            encrypt_cbc(b"short", &key(), &iv(), Padding::None),
            Err(CipherError::UnalignedBody(5))
        );
    }

    #[test]
    fn unaligned_body_is_rejected() {
        assert_eq!(
            decrypt_cbc(&[0u8; 17], &key(), &iv(), Padding::Pkcs7),
            Err(CipherError::UnalignedBody(17))
        );
    }

    #[test]
    fn empty_body_has_no_padding_to_strip() {
        assert_eq!(
            decrypt_cbc(&[], &key(), &iv(), Padding::Pkcs7),
            Err(CipherError::Padding)
        );
        assert_eq!(decrypt_cbc(&[], &key(), &iv(), Padding::None), Ok(Vec::new()));
    }

    #[test]
    fn invalid_padding_is_padding_error() {
        // Full block of zeros encrypted without padding → final pad byte 0.
        let ct = encrypt_cbc(&[0u8; 16], &key(), &iv(), Padding::None).unwrap();
        assert_eq!(
            decrypt_cbc(&ct, &key(), &iv(), Padding::Pkcs7),
            Err(CipherError::Padding)
        );

        // Pad byte 3 but preceding pad bytes disagree.
        let mut block = [0u8; 16];
        block[13] = 9;
        block[14] = 3;
        block[15] = 3;
        let ct = encrypt_cbc(&block, &key(), &iv(), Padding::None).unwrap();
        assert_eq!(
            decrypt_cbc(&ct, &key(), &iv(), Padding::Pkcs7),
            Err(CipherError::Padding)
        );
    }

    #[test]
    fn strip_pkcs7_accepts_full_pad_block() {
        let mut data = vec![0xEEu8; 16];
        data.extend_from_slice(&[16u8; 16]);
        assert_eq!(strip_pkcs7(&data), Ok(16));
    }
}
