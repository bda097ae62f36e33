//! # Format Sniffing
//!
//! Classifies recovered plaintext by its leading magic bytes. Best effort only:
//! [`detect`] never fails and falls back to [`FormatTag::Bin`].

use crate::consts::SNIFF_WINDOW;
use std::fmt;

/// Detected file type, named by its usual extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatTag {
    Jpeg,
    Png,
    Gif,
    Pdf,
    /// ZIP container, including DOCX/XLSX/PPTX.
    Zip,
    /// Legacy OLE compound document (DOC/XLS/PPT).
    Doc,
    Mp3,
    Mp4,
    /// Nothing matched.
    Bin,
}

impl FormatTag {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            FormatTag::Jpeg => "jpg",
            FormatTag::Png => "png",
            FormatTag::Gif => "gif",
            FormatTag::Pdf => "pdf",
            FormatTag::Zip => "zip",
            FormatTag::Doc => "doc",
            FormatTag::Mp3 => "mp3",
            FormatTag::Mp4 => "mp4",
            FormatTag::Bin => "bin",
        }
    }

    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            FormatTag::Jpeg => "image/jpeg",
            FormatTag::Png => "image/png",
            FormatTag::Gif => "image/gif",
            FormatTag::Pdf => "application/pdf",
            FormatTag::Zip => "application/zip",
            FormatTag::Doc => "application/msword",
            FormatTag::Mp3 => "audio/mpeg",
            FormatTag::Mp4 => "video/mp4",
            FormatTag::Bin => "application/octet-stream",
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

struct Signature {
    offset: usize,
    magic: &'static [u8],
    tag: FormatTag,
}

const fn sig(offset: usize, magic: &'static [u8], tag: FormatTag) -> Signature {
    Signature { offset, magic, tag }
}

// Longest signatures first so a short prefix never shadows a specific one.
const SIGNATURES: &[Signature] = &[
    sig(4, b"ftyp", FormatTag::Mp4),
    sig(0, &[0x89, 0x50, 0x4E, 0x47], FormatTag::Png),
    sig(0, b"GIF8", FormatTag::Gif),
    sig(0, b"%PDF", FormatTag::Pdf),
    sig(0, &[0x50, 0x4B, 0x03, 0x04], FormatTag::Zip),
    sig(0, &[0x50, 0x4B, 0x05, 0x06], FormatTag::Zip),
    sig(0, &[0x50, 0x4B, 0x07, 0x08], FormatTag::Zip),
    sig(0, &[0xD0, 0xCF, 0x11, 0xE0], FormatTag::Doc),
    sig(0, b"ftyp", FormatTag::Mp4),
    sig(0, &[0x00, 0x00, 0x01, 0xBA], FormatTag::Mp4),
    sig(0, &[0x00, 0x00, 0x01, 0xB3], FormatTag::Mp4),
    sig(0, &[0xFF, 0xD8, 0xFF], FormatTag::Jpeg),
    sig(0, b"ID3", FormatTag::Mp3),
    sig(0, &[0xFF, 0xFB], FormatTag::Mp3),
];

/// Classify `plaintext` from at most its first 8 bytes.
#[must_use]
pub fn detect(plaintext: &[u8]) -> FormatTag {
    let window = &plaintext[..plaintext.len().min(SNIFF_WINDOW)];
    SIGNATURES
        .iter()
        .find(|s| {
            window
                .get(s.offset..s.offset + s.magic.len())
                .is_some_and(|bytes| bytes == s.magic)
        })
        .map_or(FormatTag::Bin, |s| s.tag)
}
