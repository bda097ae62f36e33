//! # Key Derivation
//!
//! - [`hkdf`] - media-key expansion (labeled, split-MAC and salted variants)
//!
//! Most callers never touch this directly; [`MediaDecryptor`](crate::MediaDecryptor)
//! expands keys per strategy. It is public for tooling that needs the raw stream.

pub mod hkdf;
