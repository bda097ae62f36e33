//! # Error Types
//!
//! [`MediaCryptError`] is the only error that crosses the engine boundary.
//! Per-attempt failures ([`FailureReason`], [`CipherError`]) stay inside the
//! orchestrator loop and surface only as the diagnostic list carried by
//! [`MediaCryptError::DecryptionExhausted`].

use crate::decryptor::Strategy;
use std::fmt;
use thiserror::Error;

/// The error type for all engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MediaCryptError {
    /// The media key (or a supplied digest) is not valid base64.
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// The decoded media key is not exactly 32 bytes.
    ///
    /// The contained value is the decoded length.
    #[error("Invalid key length: expected 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    /// The blob is smaller than the minimum frame any layout can describe.
    #[error("Blob too short: {len} bytes, need at least {min}")]
    BlobTooShort { len: usize, min: usize },

    /// SHA-256 of the encrypted blob does not match the expected digest.
    #[error("Integrity check failed: encrypted blob SHA-256 mismatch")]
    IntegrityMismatch,

    /// Every layout/key-variant combination failed.
    ///
    /// `attempts` lists each failure in the order it was tried.
    #[error("Decryption exhausted: {}", AttemptList(.attempts))]
    DecryptionExhausted { attempts: Vec<AttemptFailure> },
}

impl MediaCryptError {
    /// Whether this error stems from the caller's input (wrong key, corrupt blob,
    /// mismatched category) rather than an engine fault.
    ///
    /// Every variant that crosses the boundary is a client error; a transport
    /// layer should map them to a 4xx status.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        match self {
            MediaCryptError::InvalidEncoding(_)
            | MediaCryptError::InvalidKeyLength(_)
            | MediaCryptError::BlobTooShort { .. }
            | MediaCryptError::IntegrityMismatch
            | MediaCryptError::DecryptionExhausted { .. } => true,
        }
    }

    /// Per-attempt diagnostics, empty for every variant except `DecryptionExhausted`.
    #[must_use]
    pub fn attempts(&self) -> &[AttemptFailure] {
        match self {
            MediaCryptError::DecryptionExhausted { attempts } => attempts,
            _ => &[],
        }
    }
}

/// One failed strategy inside the orchestrator loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptFailure {
    pub strategy: Strategy,
    pub reason: FailureReason,
}

impl fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.strategy, self.reason)
    }
}

/// Why a single strategy did not apply. Never fatal on its own.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    #[error("frame too short ({len} bytes, layout needs {min})")]
    FrameTooShort { len: usize, min: usize },

    #[error("MAC mismatch")]
    MacMismatch,

    #[error(transparent)]
    Cipher(#[from] CipherError),
}

/// AES-256-CBC failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// Body length is not a multiple of the 16-byte block size.
    #[error("ciphertext length {0} is not a multiple of the AES block size")]
    UnalignedBody(usize),

    /// PKCS#7 padding removal found an invalid pad value.
    #[error("invalid PKCS#7 padding")]
    Padding,
}

struct AttemptList<'a>(&'a [AttemptFailure]);

impl fmt::Display for AttemptList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} strategies failed", self.0.len())?;
        for (i, attempt) in self.0.iter().enumerate() {
            let sep = if i == 0 { " [" } else { "; " };
            write!(f, "{sep}{attempt}")?;
        }
        if !self.0.is_empty() {
            f.write_str("]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decryptor::{FrameLayout, KeyVariant};

    #[test]
    fn exhausted_message_lists_attempts_in_order() {
        let err = MediaCryptError::DecryptionExhausted {
            attempts: vec![
                AttemptFailure {
                    strategy: Strategy::new(FrameLayout::Standard, KeyVariant::Labeled),
                    reason: FailureReason::MacMismatch,
                },
                AttemptFailure {
                    strategy: Strategy::new(FrameLayout::Unverified, KeyVariant::Labeled),
                    reason: CipherError::UnalignedBody(22).into(),
                },
            ],
        };
        assert_eq!(
            err.to_string(),
            "Decryption exhausted: 2 strategies failed [standard/labeled: MAC mismatch; \
             unverified/labeled: ciphertext length 22 is not a multiple of the AES block size]"
        );
        assert_eq!(err.attempts().len(), 2);
    }

    #[test]
    fn boundary_errors_are_client_errors() {
        assert!(MediaCryptError::InvalidKeyLength(16).is_client_error());
        assert!(MediaCryptError::BlobTooShort { len: 3, min: 26 }.is_client_error());
        assert!(MediaCryptError::InvalidKeyLength(16).attempts().is_empty());
    }
}
