// src/lib.rs

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod category;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod frame;
pub mod sniff;
pub mod utils;

// High-level API
pub use decryptor::{decrypt_media, DecryptedMedia, MediaDecryptor};
pub use encryptor::{encrypt_media, encrypt_media_b64};
pub use error::MediaCryptError;

pub use builders::DecryptorBuilder;
pub use category::MediaCategory;
pub use crypto::cbc::Padding;
pub use decryptor::{
    DiagnosticSink, FrameLayout, KeyMode, KeyVariant, Strategy, TracingSink, STRATEGY_ORDER,
};
pub use error::{AttemptFailure, CipherError, FailureReason};
pub use sniff::{detect, FormatTag};

// Low-level primitives for callers assembling their own flows
pub use crypto::kdf::hkdf::{derive_key_stream, expand_media_key, ExpandedKeyMaterial};
pub use utils::{decode_media_key, encode_media_key};

#[cfg(feature = "rand")]
pub use crypto::rng::SecureRandomExt;

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, MediaJob};
