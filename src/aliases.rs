//! # Secure-Gate Type Aliases
//!
//! Fixed-size secret buffers used by the decryption engine, built on
//! [`secure-gate`](https://github.com/Slurp9187/secure-gate). Every secret must be
//! reached through `.expose_secret()` / `.expose_secret_mut()`, so nothing leaks
//! through `Debug` or an accidental copy.
//!
//! ## Type Categories
//!
//! ### HMAC Primitive
//! - [`HmacSha256`] - tag computation and HKDF blocks
//!
//! ### Generic Secure Buffers
//! - [`SpanBuffer<N>`] - secure stack buffer for any size `N`
//! - [`KeyStream112`] - the raw 112-byte HKDF output
//!
//! ### Dynamic Secrets
//! - [`SecretBytes`] - decoded key bytes of not-yet-validated length
//!
//! ### Fixed-Size Secrets
//! - [`MediaKey32`] - the 32-byte media key shared out-of-band
//! - [`CipherKey32`] - derived AES-256 key
//! - [`MacKey32`] - derived HMAC-SHA256 key
//! - [`Iv16`] - derived 16-byte CBC IV

use secure_gate::dynamic_alias;
use secure_gate::fixed_alias;

use hmac::Hmac;
use sha2::Sha256;

// ─────────────────────────────────────────────────────────────────────────────
// HMAC primitive
// ─────────────────────────────────────────────────────────────────────────────
pub type HmacSha256 = Hmac<Sha256>;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer: generic secure stack buffer (direct alias to secure-gate's Fixed)
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

pub type KeyStream112 = SpanBuffer<112>; // full HKDF expansion

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
dynamic_alias!(SecretBytes, Vec<u8>);

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size concrete secrets, alphabetical order
// ─────────────────────────────────────────────────────────────────────────────
fixed_alias!(CipherKey32, 32); // AES-256 key, bytes [16..48)
fixed_alias!(Iv16, 16); // CBC IV, bytes [0..16)
fixed_alias!(MacKey32, 32); // HMAC key, bytes [48..80) or its own expansion
fixed_alias!(MediaKey32, 32); // caller-supplied secret
