//! # Constants
//!
//! Sizes and domain-separation strings shared by key expansion, framing and
//! verification.

/// Size of the caller-supplied media key, in bytes.
pub const MEDIA_KEY_LEN: usize = 32;

/// Length of the full HKDF expansion.
///
/// Only the first 80 bytes are consumed (IV, cipher key, MAC key); the trailing
/// 32 bytes are produced for parity with the protocol's 112-byte stream.
pub const EXPANDED_KEY_LEN: usize = 112;

/// AES block size, also the IV size.
pub const BLOCK_LEN: usize = 16;

/// Derived AES-256 / HMAC key size.
pub const KEY_LEN: usize = 32;

/// Length of the truncated HMAC-SHA256 tag carried by a blob.
pub const MAC_TAG_LEN: usize = 10;

/// Smallest blob any layout can describe: 16-byte IV plus 10-byte tag, empty body.
pub const MIN_BLOB_LEN: usize = BLOCK_LEN + MAC_TAG_LEN;

/// Offsets of each sub-key inside the expanded stream.
pub const IV_RANGE: std::ops::Range<usize> = 0..16;
pub const CIPHER_KEY_RANGE: std::ops::Range<usize> = 16..48;
pub const MAC_KEY_RANGE: std::ops::Range<usize> = 48..80;

/// HKDF-extract salt for the unlabeled (salted) variant.
pub const MEDIA_KEYS_SALT: &[u8] = b"WhatsApp Media Keys";

/// Maximum number of leading bytes the format sniffer inspects.
pub const SNIFF_WINDOW: usize = 8;
