//! Word_Break property bits (component A, word flavor).
//!
//! Unlike the grapheme property (one GCB value per code point, packed into a
//! byte), every rule in §4.D tests a *set* of properties at once (`AHLetter`,
//! `MidNumLetQ`, `Ignore`, ...), so here each property gets its own bit and
//! rule checks become a single `current & target != 0` mask test. This is
//! also what the phrase engine in [`crate::phrase`] widens to add
//! `WSegSpace` and `ExtendedPictographic` to the letter class.

pub(crate) const NONE: u32 = 0;
pub(crate) const CR: u32 = 1 << 0;
pub(crate) const LF: u32 = 1 << 1;
pub(crate) const NEWLINE: u32 = 1 << 2;
pub(crate) const ALETTER: u32 = 1 << 3;
pub(crate) const HEBREW_LETTER: u32 = 1 << 4;
pub(crate) const NUMERIC: u32 = 1 << 5;
pub(crate) const KATAKANA: u32 = 1 << 6;
pub(crate) const EXTEND_NUM_LET: u32 = 1 << 7;
pub(crate) const MID_LETTER: u32 = 1 << 8;
pub(crate) const MID_NUM: u32 = 1 << 9;
pub(crate) const MID_NUM_LET: u32 = 1 << 10;
pub(crate) const SINGLE_QUOTE: u32 = 1 << 11;
pub(crate) const DOUBLE_QUOTE: u32 = 1 << 12;
pub(crate) const REGIONAL_INDICATOR: u32 = 1 << 13;
pub(crate) const EXTEND: u32 = 1 << 14;
pub(crate) const FORMAT: u32 = 1 << 15;
pub(crate) const ZWJ: u32 = 1 << 16;
pub(crate) const WSEGSPACE: u32 = 1 << 17;
pub(crate) const EXTENDED_PICTOGRAPHIC: u32 = 1 << 18;

/// `ALetter | HebrewLetter`, the combined "is alphabetic" class used by
/// WB5-WB7c.
pub(crate) const AHLETTER: u32 = ALETTER | HEBREW_LETTER;
/// `MidNumLet | SingleQuote`, the separator class shared by WB6/WB7.
pub(crate) const MID_NUM_LET_Q: u32 = MID_NUM_LET | SINGLE_QUOTE;
/// Properties skipped by the seek helpers when scanning for word-boundary
/// context (§4.B).
pub(crate) const IGNORE: u32 = EXTEND | FORMAT | ZWJ;

/// Looks up the Word_Break property bit for a code point, unioned with the
/// `BleveIdeographic` extension (Han + Hiragana folded into `Katakana`, per
/// §4.A) that this crate's Katakana class also carries.
pub(crate) fn lookup(cp: u32) -> u32 {
    crate::trie::lookup(crate::trie::word::RANGES, cp)
}
