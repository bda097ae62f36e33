//! src/decryptor/strategy.rs
//! The ordered (layout, key variant) table the orchestrator walks

use crate::crypto::kdf::hkdf::KeyVariant;
use crate::frame::FrameLayout;
use std::fmt;

/// One candidate interpretation of a blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Strategy {
    pub layout: FrameLayout,
    pub variant: KeyVariant,
}

impl Strategy {
    #[must_use]
    pub const fn new(layout: FrameLayout, variant: KeyVariant) -> Self {
        Self { layout, variant }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.layout, self.variant)
    }
}

/// Which key variants the orchestrator may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyMode {
    /// Every variant, in [`KeyVariant::ALL`] order.
    #[default]
    Permissive,
    /// Only the variant matching a known protocol version.
    Strict(KeyVariant),
}

impl KeyMode {
    #[must_use]
    pub fn admits(self, variant: KeyVariant) -> bool {
        match self {
            KeyMode::Permissive => true,
            KeyMode::Strict(only) => only == variant,
        }
    }
}

use FrameLayout::{DerivedIv, MacPrefix, Standard, Unverified};
use KeyVariant::{Labeled, LabeledSplitMac, Salted};

/// Full priority order. MAC-verified layouts lead every variant group; the
/// unverified layout is never first.
pub const STRATEGY_ORDER: [Strategy; 12] = [
    Strategy::new(Standard, Labeled),
    Strategy::new(DerivedIv, Labeled),
    Strategy::new(Unverified, Labeled),
    Strategy::new(MacPrefix, Labeled),
    Strategy::new(Standard, LabeledSplitMac),
    Strategy::new(DerivedIv, LabeledSplitMac),
    Strategy::new(Unverified, LabeledSplitMac),
    Strategy::new(MacPrefix, LabeledSplitMac),
    Strategy::new(Standard, Salted),
    Strategy::new(DerivedIv, Salted),
    Strategy::new(Unverified, Salted),
    Strategy::new(MacPrefix, Salted),
];

/// The strategies a decryptor configured with `mode` / `allow_unverified` will try, in order.
///
/// In permissive mode `Unverified/LabeledSplitMac` is dropped: without a tag it
/// reads the blob exactly as `Unverified/Labeled` already did.
#[must_use]
pub fn strategy_plan(mode: KeyMode, allow_unverified: bool) -> Vec<Strategy> {
    STRATEGY_ORDER
        .iter()
        .copied()
        .filter(|s| mode.admits(s.variant))
        .filter(|s| allow_unverified || s.layout.is_authenticated())
        .filter(|s| !(mode == KeyMode::Permissive && repeats_labeled_unverified(*s)))
        .collect()
}

#[inline(always)]
fn repeats_labeled_unverified(strategy: Strategy) -> bool {
    strategy == Strategy::new(Unverified, LabeledSplitMac)
}
