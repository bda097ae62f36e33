//! Media categories and the HKDF labels they select.

use std::fmt;

/// Selects the domain-separation label used in key expansion.
///
/// Defaults to [`MediaCategory::Document`] whenever a category is missing or
/// unrecognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MediaCategory {
    #[default]
    Document,
    Image,
    Video,
    Audio,
}

impl MediaCategory {
    pub const ALL: [MediaCategory; 4] = [
        MediaCategory::Document,
        MediaCategory::Image,
        MediaCategory::Video,
        MediaCategory::Audio,
    ];

    /// HKDF info string for the key stream, e.g. `"WhatsApp Image Keys"`.
    #[must_use]
    pub const fn label(self) -> &'static [u8] {
        match self {
            MediaCategory::Document => b"WhatsApp Document Keys",
            MediaCategory::Image => b"WhatsApp Image Keys",
            MediaCategory::Video => b"WhatsApp Video Keys",
            MediaCategory::Audio => b"WhatsApp Audio Keys",
        }
    }

    /// HKDF info string for the separately expanded MAC key.
    #[must_use]
    pub const fn mac_label(self) -> &'static [u8] {
        match self {
            MediaCategory::Document => b"WhatsApp Document MAC Keys",
            MediaCategory::Image => b"WhatsApp Image MAC Keys",
            MediaCategory::Video => b"WhatsApp Video MAC Keys",
            MediaCategory::Audio => b"WhatsApp Audio MAC Keys",
        }
    }

    /// Parses a category name, case-insensitively. Unknown names map to `Document`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "image" => MediaCategory::Image,
            "video" => MediaCategory::Video,
            "audio" => MediaCategory::Audio,
            _ => MediaCategory::Document,
        }
    }

    /// Picks a category from a MIME type (`image/*`, `video/*`, `audio/*`),
    /// falling back to `Document`.
    #[must_use]
    pub fn from_mimetype(mimetype: &str) -> Self {
        let top = mimetype.trim().split('/').next().unwrap_or_default();
        match top.to_ascii_lowercase().as_str() {
            "image" => MediaCategory::Image,
            "video" => MediaCategory::Video,
            "audio" => MediaCategory::Audio,
            _ => MediaCategory::Document,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MediaCategory::Document => "document",
            MediaCategory::Image => "image",
            MediaCategory::Video => "video",
            MediaCategory::Audio => "audio",
        }
    }
}

impl fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Option<&str>> for MediaCategory {
    fn from(name: Option<&str>) -> Self {
        name.map(MediaCategory::from_name).unwrap_or_default()
    }
}
