//! tests/common.rs
//! Common constants and helpers shared across test files

#![allow(dead_code)] // each test binary uses a different subset

use mediacrypt_rs::aliases::MediaKey32;

/// 32 zero bytes, base64 with padding.
pub const ZERO_KEY_B64: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";

/// A non-trivial key: bytes 0x00..=0x1F.
pub const COUNTING_KEY_B64: &str = "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8=";

pub const PDF_HEADER: &[u8] = b"%PDF-1.4";

/// Common plaintext lengths around the AES block boundary.
pub const PLAINTEXT_LENGTHS: &[usize] = &[0, 1, 15, 16, 17, 31, 32, 33, 1000, 4096];

pub fn zero_key() -> MediaKey32 {
    MediaKey32::new([0u8; 32])
}

pub fn counting_key() -> MediaKey32 {
    MediaKey32::new(core::array::from_fn(|i| i as u8))
}

/// Deterministic pseudo-random bytes.
pub fn sample_bytes(len: usize, seed: u8) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed))
        .collect()
}
