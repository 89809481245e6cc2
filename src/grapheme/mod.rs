//! Grapheme cluster segmentation: component C (the GB rule engine) plus the
//! optional ANSI escape recognizer (component G) consulted ahead of it.
//!
//! [`split`] is the pure predicate described in §6; [`Graphemes`],
//! [`StrGraphemes`], and [`Scanner`] are the iterator shells built on top
//! of it, specializing the generic shells in [`crate::iter`] to this
//! mode's [`AnsiOptions`] configuration.

mod ansi;
mod properties;
mod state;

pub use properties::{CharProperties, GCBProperty, InCBProperty};

use crate::utf8::{self, Decoded};
use state::State;

/// Which ANSI escape forms [`split_with`] should recognize as a single
/// grapheme cluster (§4.G). Both default to disabled, matching plain UAX #29
/// behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnsiOptions {
    /// Recognize 7-bit (`ESC`-prefixed) escape sequences.
    pub seven_bit: bool,
    /// Recognize 8-bit C1 control sequences (`0x80..=0x9F`).
    pub eight_bit: bool,
}

impl AnsiOptions {
    /// Both forms disabled; plain UAX #29 grapheme segmentation.
    pub const NONE: Self = Self {
        seven_bit: false,
        eight_bit: false,
    };
    /// Both forms enabled.
    pub const ALL: Self = Self {
        seven_bit: true,
        eight_bit: true,
    };
}

fn none_props() -> CharProperties {
    CharProperties::new(GCBProperty::None, InCBProperty::None)
}

enum Step {
    Props(CharProperties, usize),
    NeedMore,
}

/// Decodes one character's properties at the start of `data`, treating
/// malformed UTF-8 as a single byte with no tracked property (§4.C
/// "Failure semantics"). Incomplete sequences request more input unless
/// `at_eof`, in which case they're treated as malformed too.
fn decode_one(data: &[u8], at_eof: bool) -> Step {
    match utf8::decode(data) {
        Decoded::Valid { cp, width } => Step::Props(CharProperties::for_cp(cp), width as usize),
        Decoded::Incomplete => {
            if at_eof {
                Step::Props(none_props(), 1)
            } else {
                Step::NeedMore
            }
        }
        Decoded::Invalid => Step::Props(none_props(), 1),
    }
}

/// The pure split predicate for grapheme clusters (§6), with the ANSI
/// recognizer disabled.
pub fn split(data: &[u8], at_eof: bool) -> usize {
    split_with(data, at_eof, AnsiOptions::NONE)
}

/// Like [`split`], but first lets the ANSI recognizer (§4.G) claim the
/// whole segment if `data` opens with a recognized escape sequence.
pub fn split_with(data: &[u8], at_eof: bool, ansi: AnsiOptions) -> usize {
    if data.is_empty() {
        return 0;
    }
    if ansi.seven_bit || ansi.eight_bit {
        match ansi::recognize(data, at_eof, ansi) {
            ansi::Recognized::Matched(len) => return len,
            ansi::Recognized::NeedMore => return 0,
            ansi::Recognized::NotRecognized => {}
        }
    }

    let mut pos;
    let mut prev = match decode_one(data, at_eof) {
        Step::Props(props, width) => {
            pos = width;
            props
        }
        Step::NeedMore => return 0,
    };
    let mut state = State::Base;
    loop {
        if pos >= data.len() {
            return if at_eof { pos } else { 0 };
        }
        let (next, width) = match decode_one(&data[pos..], at_eof) {
            Step::Props(props, width) => (props, width),
            Step::NeedMore => return 0,
        };
        let (boundary, next_state) = state.transition(prev, next);
        if boundary {
            return pos;
        }
        pos += width;
        prev = next;
        state = next_state;
    }
}

impl crate::iter::Engine for AnsiOptions {
    fn split(&self, data: &[u8], at_eof: bool) -> usize {
        split_with(data, at_eof, *self)
    }
}

/// Byte-slice iterator over grapheme clusters (§6 `from_bytes`).
pub type Graphemes<'a> = crate::iter::ByteIterator<'a, AnsiOptions>;
/// `&str` iterator over grapheme clusters (§6 `from_string`).
pub type StrGraphemes<'a> = crate::iter::StrIterator<'a, AnsiOptions>;
/// Reader-backed grapheme cluster scanner (§6 `from_reader`).
pub type Scanner<R> = crate::iter::Scanner<R, AnsiOptions>;

/// Iterates `data` as grapheme clusters, with the ANSI recognizer disabled.
pub fn from_bytes(data: &[u8]) -> Graphemes<'_> {
    from_bytes_with(data, AnsiOptions::NONE)
}

/// Like [`from_bytes`], recognizing ANSI escape sequences per `ansi`.
pub fn from_bytes_with(data: &[u8], ansi: AnsiOptions) -> Graphemes<'_> {
    Graphemes::new(data, ansi)
}

/// Iterates `text` as grapheme clusters, with the ANSI recognizer disabled.
pub fn from_string(text: &str) -> StrGraphemes<'_> {
    from_string_with(text, AnsiOptions::NONE)
}

/// Like [`from_string`], recognizing ANSI escape sequences per `ansi`.
pub fn from_string_with(text: &str, ansi: AnsiOptions) -> StrGraphemes<'_> {
    StrGraphemes::new(text, ansi)
}

/// Scans a streaming byte source for grapheme clusters, with the ANSI
/// recognizer disabled.
pub fn from_reader<R: std::io::Read>(reader: R) -> Scanner<R> {
    from_reader_with(reader, AnsiOptions::NONE)
}

/// Like [`from_reader`], recognizing ANSI escape sequences per `ansi`.
pub fn from_reader_with<R: std::io::Read>(reader: R, ansi: AnsiOptions) -> Scanner<R> {
    Scanner::new(reader, ansi)
}

#[cfg(test)]
mod tests;
