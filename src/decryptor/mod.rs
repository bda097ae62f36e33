// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `MediaDecryptor::decrypt(blob, media_key_b64, category)?`, or the
//! free [`decrypt_media`] with default settings.
//! Helpers: [`strategy_plan`] / [`STRATEGY_ORDER`] to audit the fallback order,
//! [`DiagnosticSink`] for per-call progress reporting.

pub(crate) mod decrypt;
pub(crate) mod diagnostics;
pub(crate) mod strategy;

pub use crate::crypto::kdf::hkdf::KeyVariant;
pub use crate::frame::FrameLayout;
pub use decrypt::{decrypt_media, DecryptedMedia, MediaDecryptor};
pub use diagnostics::{DiagnosticSink, TracingSink};
pub use strategy::{strategy_plan, KeyMode, Strategy, STRATEGY_ORDER};
