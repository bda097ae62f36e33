// src/crypto/mod.rs

//! Low-level crypto primitives: key expansion, tag verification, AES-256-CBC.
//!
//! HMAC types are defined in `aliases.rs`.

pub mod cbc;
pub mod hmac;
pub mod kdf;
#[cfg(feature = "rand")]
pub mod rng;
