//! # Builders
//!
//! - [`decryptor_builder`] - configuration for [`MediaDecryptor`](crate::MediaDecryptor)
//!
//! Builders provide a fluent API with safe defaults; the built value is immutable.

pub mod decryptor_builder;

pub use decryptor_builder::DecryptorBuilder;
