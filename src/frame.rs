//! # Frame Parsing
//!
//! Splits a blob into IV, encrypted body and tag according to a [`FrameLayout`].
//! Pure slicing: no copies, no crypto.

use crate::consts::{BLOCK_LEN, MAC_TAG_LEN, MIN_BLOB_LEN};
use crate::error::FailureReason;
use std::fmt;

/// Positional convention for IV and tag inside a blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameLayout {
    /// `IV(16) ‖ body ‖ tag(10)`
    Standard,
    /// `body ‖ tag(10)`; the IV is the one derived from the media key.
    DerivedIv,
    /// `IV(16) ‖ body`; no tag, nothing is verified.
    Unverified,
    /// `tag(10) ‖ IV(16) ‖ body`
    MacPrefix,
}

impl FrameLayout {
    /// Smallest blob this layout can describe (empty body).
    #[must_use]
    pub const fn min_len(self) -> usize {
        match self {
            FrameLayout::Standard | FrameLayout::MacPrefix => MIN_BLOB_LEN,
            FrameLayout::DerivedIv => MAC_TAG_LEN,
            FrameLayout::Unverified => BLOCK_LEN,
        }
    }

    /// Whether the layout carries a tag that must verify before decryption.
    #[must_use]
    pub const fn is_authenticated(self) -> bool {
        !matches!(self, FrameLayout::Unverified)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FrameLayout::Standard => "standard",
            FrameLayout::DerivedIv => "derived-iv",
            FrameLayout::Unverified => "unverified",
            FrameLayout::MacPrefix => "mac-prefix",
        }
    }
}

impl fmt::Display for FrameLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A blob split according to one layout. Borrows from the caller's buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    /// IV carried in the blob; `None` means use the derived IV.
    pub iv: Option<&'a [u8; BLOCK_LEN]>,
    pub body: &'a [u8],
    /// Received tag; `None` for [`FrameLayout::Unverified`].
    pub tag: Option<&'a [u8; MAC_TAG_LEN]>,
}

/// Split `blob` according to `layout`.
///
/// # Errors
///
/// [`FailureReason::FrameTooShort`] if `blob` is shorter than [`FrameLayout::min_len`].
pub fn parse(blob: &[u8], layout: FrameLayout) -> Result<Frame<'_>, FailureReason> {
    let too_short = || FailureReason::FrameTooShort {
        len: blob.len(),
        min: layout.min_len(),
    };

    match layout {
        FrameLayout::Standard => {
            let (iv, rest) = blob.split_first_chunk::<BLOCK_LEN>().ok_or_else(too_short)?;
            let (body, tag) = rest.split_last_chunk::<MAC_TAG_LEN>().ok_or_else(too_short)?;
            Ok(Frame {
                iv: Some(iv),
                body,
                tag: Some(tag),
            })
        }
        FrameLayout::DerivedIv => {
            let (body, tag) = blob.split_last_chunk::<MAC_TAG_LEN>().ok_or_else(too_short)?;
            Ok(Frame {
                iv: None,
                body,
                tag: Some(tag),
            })
        }
        FrameLayout::Unverified => {
            let (iv, body) = blob.split_first_chunk::<BLOCK_LEN>().ok_or_else(too_short)?;
            Ok(Frame {
                iv: Some(iv),
                body,
                tag: None,
            })
        }
        FrameLayout::MacPrefix => {
            let (tag, rest) = blob.split_first_chunk::<MAC_TAG_LEN>().ok_or_else(too_short)?;
            let (iv, body) = rest.split_first_chunk::<BLOCK_LEN>().ok_or_else(too_short)?;
            Ok(Frame {
                iv: Some(iv),
                body,
                tag: Some(tag),
            })
        }
    }
}
