// src/encryptor/mod.rs

//! Encryption facade, the inverse of the decryptor.
//!
//! Core API: `encrypt_media(plaintext, &key, category, variant, layout)` builds a
//! blob in any layout the decryptor understands.

pub(crate) mod encrypt;

pub use encrypt::{encrypt_media, encrypt_media_b64};
