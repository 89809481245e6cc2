//! Grapheme_Cluster_Break / Indic_Conjunct_Break property ranges.
//!
//! Encoded the same way `CharProperties::raw` is: the low nybble is the
//! `GCBProperty` value, bits `0x30` carry the `InCBProperty` value. A range
//! that needs both (e.g. a combining mark that's also `InCB=Extend`) just
//! ORs the two constants together when building the table.

use super::Range;
use crate::grapheme::{GCBProperty as G, InCBProperty as I};

const fn r(first: u32, last: u32, bits: u8) -> Range {
    Range {
        first,
        last,
        bits: bits as u32,
    }
}

/// Hangul syllables (U+AC00..=U+D7A3) follow a closed formula rather than an
/// enumerated table: every 28th syllable starting at the block base is an
/// LV (no trailing jamo), the rest are LVT.
pub(crate) fn hangul_syllable(cp: u32) -> Option<u8> {
    if (0xAC00..=0xD7A3).contains(&cp) {
        let index = cp - 0xAC00;
        Some(if index % 28 == 0 {
            G::LV as u8
        } else {
            G::LVT as u8
        })
    } else {
        None
    }
}

// Sorted ascending by `first` and non-overlapping: `trie::lookup` relies on
// both properties to binary search correctly.
pub(crate) static RANGES: &[Range] = &[
    r(0x09, 0x09, G::Control as u8), // TAB
    r(0x0A, 0x0A, G::LF as u8),
    r(0x0B, 0x0C, G::Control as u8),
    r(0x0D, 0x0D, G::CR as u8),
    r(0x0E, 0x1F, G::Control as u8),
    r(0x7F, 0x9F, G::Control as u8),
    r(0xAD, 0xAD, G::Control as u8), // soft hyphen
    r(0x0300, 0x036F, G::Extend as u8), // combining diacritical marks
    r(0x0483, 0x0489, G::Extend as u8),
    r(0x0591, 0x05BD, G::Extend as u8),
    r(0x05BF, 0x05BF, G::Extend as u8),
    r(0x05C1, 0x05C2, G::Extend as u8),
    r(0x0600, 0x0605, G::Prepend as u8),
    r(0x064B, 0x065F, G::Extend as u8),
    r(0x0670, 0x0670, G::Extend as u8),
    r(0x06DD, 0x06DD, G::Prepend as u8),
    r(0x070F, 0x070F, G::Prepend as u8),
    r(0x0711, 0x0711, G::Extend as u8),
    r(0x0730, 0x074A, G::Extend as u8),
    r(0x08E2, 0x08E2, G::Prepend as u8),
    r(0x0900, 0x0902, G::Extend as u8),
    r(0x0903, 0x0903, G::SpacingMark as u8),
    r(0x0915, 0x0939, I::Consonant as u8),
    r(0x093A, 0x093A, G::Extend as u8),
    r(0x093B, 0x093B, G::SpacingMark as u8),
    r(0x093C, 0x093C, G::Extend as u8),
    r(0x093E, 0x0940, G::SpacingMark as u8),
    r(0x0941, 0x0948, G::Extend as u8),
    r(0x0949, 0x094C, G::SpacingMark as u8),
    r(0x094D, 0x094D, (G::Extend as u8) | (I::Linker as u8)),
    r(0x0958, 0x095F, I::Consonant as u8),
    r(0x0B95, 0x0B95, I::Consonant as u8),
    r(0x0B99, 0x0B9A, I::Consonant as u8),
    r(0x0E31, 0x0E31, G::Extend as u8),
    r(0x0E34, 0x0E3A, G::Extend as u8),
    r(0x0E47, 0x0E4E, G::Extend as u8),
    r(0x1100, 0x115F, G::L as u8),
    r(0x1160, 0x11A7, G::V as u8),
    r(0x11A8, 0x11FF, G::T as u8),
    r(0x1AB0, 0x1AFF, G::Extend as u8),
    r(0x1DC0, 0x1DFF, G::Extend as u8),
    r(0x200C, 0x200C, (G::Extend as u8) | (I::Extend as u8)), // ZWNJ
    r(0x200D, 0x200D, G::ZWJ as u8),
    r(0x20D0, 0x20FF, G::Extend as u8),
    r(0x2600, 0x27BF, G::ExtendedPictographic as u8),
    r(0x2934, 0x2935, G::ExtendedPictographic as u8),
    r(0x2B05, 0x2B07, G::ExtendedPictographic as u8),
    r(0x302A, 0x302F, G::Extend as u8),
    r(0x3099, 0x309A, G::Extend as u8),
    r(0xA802, 0xA802, G::Extend as u8),
    r(0xA8E0, 0xA8F1, G::Extend as u8),
    r(0xFB1E, 0xFB1E, G::Extend as u8),
    r(0xFE00, 0xFE0F, G::Extend as u8), // variation selectors
    r(0xFE20, 0xFE2F, G::Extend as u8),
    r(0x1F1E6, 0x1F1FF, G::RegionalIndicator as u8),
    r(0x1F300, 0x1F3FA, G::ExtendedPictographic as u8),
    r(0x1F3FB, 0x1F3FF, G::Extend as u8), // emoji skin-tone modifiers
    r(0x1F400, 0x1FAFF, G::ExtendedPictographic as u8),
    r(0xE0020, 0xE007F, G::Extend as u8), // tag characters
    r(0xE0100, 0xE01EF, G::Extend as u8), // variation selectors supplement
];
