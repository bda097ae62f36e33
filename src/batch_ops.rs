//! Parallel decryption of independent blobs (feature `batch-ops`).

use rayon::prelude::*;

use crate::category::MediaCategory;
use crate::decryptor::{DecryptedMedia, MediaDecryptor};
use crate::error::MediaCryptError;

/// One decryption request.
#[derive(Debug, Clone)]
pub struct MediaJob<'a> {
    pub blob: &'a [u8],
    pub media_key_b64: &'a str,
    pub category: MediaCategory,
}

/// Decrypt every job in parallel. Results keep the order of `jobs`; one failing
/// job does not affect the others.
pub fn decrypt_batch(
    decryptor: &MediaDecryptor,
    jobs: &[MediaJob<'_>],
) -> Vec<Result<DecryptedMedia, MediaCryptError>> {
    jobs.par_iter()
        .map(|job| decryptor.decrypt(job.blob, job.media_key_b64, job.category))
        .collect()
}
