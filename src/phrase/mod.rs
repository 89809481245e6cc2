//! Phrase segmentation: component E.
//!
//! A phrase is "a series of words separated only by spaces" (§4.E): the
//! same Word_Break engine as [`crate::word`], but with the letter class
//! widened so a run of spaces between word-class runs doesn't itself force
//! a break. Concretely that means two changes from the word engine's rule
//! set, both expressed as [`crate::word::LetterClasses`]:
//!
//! 1. `AHLetter` is widened to include `ExtendedPictographic`, so an emoji
//!    glues to an adjacent word instead of splitting it off.
//! 2. The combined letter-or-numeric class used by WB5/WB8/WB9/WB10 is
//!    further widened to include `WSegSpace`.
//!
//! Every other WB rule — including WB3a/3b's break around Newline/CR/LF,
//! and WB999's fallback break on anything else — is untouched, so a phrase
//! still ends at the first punctuation mark, line terminator, or other
//! non-letter/non-space content.

use crate::word::{self, Joiners, LetterClasses};
use crate::word::props as p;

const CLASSES: LetterClasses = LetterClasses {
    ahletter: p::AHLETTER | p::EXTENDED_PICTOGRAPHIC,
    extra_letter_or_numeric: p::WSEGSPACE,
};

/// The pure split predicate for phrases (§6), with no custom joiners.
pub fn split(data: &[u8], at_eof: bool) -> usize {
    split_with(data, at_eof, &Joiners::default())
}

/// Like [`split`], but enriching the property lookup with `joiners` before
/// rule evaluation, same as [`crate::word::split_with`].
pub fn split_with(data: &[u8], at_eof: bool, joiners: &Joiners) -> usize {
    word::split_with_classes(data, at_eof, joiners, &CLASSES)
}

/// Engine configuration for the iterator shells (§4.H). A newtype over
/// [`Joiners`] rather than reusing it directly, since `Joiners` already
/// has an [`Engine`](crate::iter::Engine) impl bound to the word engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config(pub Joiners);

impl crate::iter::Engine for Config {
    fn split(&self, data: &[u8], at_eof: bool) -> usize {
        split_with(data, at_eof, &self.0)
    }
}

/// Byte-slice iterator over phrases (§6 `from_bytes`).
pub type Phrases<'a> = crate::iter::ByteIterator<'a, Config>;
/// `&str` iterator over phrases (§6 `from_string`).
pub type StrPhrases<'a> = crate::iter::StrIterator<'a, Config>;
/// Reader-backed phrase scanner (§6 `from_reader`).
pub type Scanner<R> = crate::iter::Scanner<R, Config>;

/// Iterates `data` as phrases, with no custom joiners.
pub fn from_bytes(data: &[u8]) -> Phrases<'_> {
    from_bytes_with(data, Joiners::default())
}

/// Like [`from_bytes`], enriching lookup with `joiners` (§4.D).
pub fn from_bytes_with(data: &[u8], joiners: Joiners) -> Phrases<'_> {
    Phrases::new(data, Config(joiners))
}

/// Iterates `text` as phrases, with no custom joiners.
pub fn from_string(text: &str) -> StrPhrases<'_> {
    from_string_with(text, Joiners::default())
}

/// Like [`from_string`], enriching lookup with `joiners` (§4.D).
pub fn from_string_with(text: &str, joiners: Joiners) -> StrPhrases<'_> {
    StrPhrases::new(text, Config(joiners))
}

/// Scans a streaming byte source for phrases, with no custom joiners.
pub fn from_reader<R: std::io::Read>(reader: R) -> Scanner<R> {
    from_reader_with(reader, Joiners::default())
}

/// Like [`from_reader`], enriching lookup with `joiners` (§4.D).
pub fn from_reader_with<R: std::io::Read>(reader: R, joiners: Joiners) -> Scanner<R> {
    Scanner::new(reader, Config(joiners))
}
