//! Sentence segmentation: component F (the Sentence_Break rule engine).
//!
//! Most rules only need the immediately adjacent pair plus the cheap
//! `last_ex_ignore`/`last_last_ex_ignore` memory also used by
//! [`crate::word`]. SB8 through SB11 are different: they test whether a
//! terminator lies some variable distance behind the cursor, skipping over
//! `Close`/`Sp` runs, and whether a lowercase letter lies some variable
//! distance ahead, skipping over anything that isn't itself a letter or
//! terminator. Those look-arounds go straight through [`crate::seek`] (for
//! the bounded `Close`/`Sp` skip) or a purpose-built scan (for SB8's
//! "anything but a stop class" skip, which doesn't fit the seek helpers'
//! fixed-whitelist shape).

mod props;

use crate::seek;
use crate::utf8::{self, Decoded};
use props as p;

enum Step {
    Props(u32, usize),
    NeedMore,
}

fn decode_one(data: &[u8], at_eof: bool) -> Step {
    match utf8::decode(data) {
        Decoded::Valid { cp, width } => Step::Props(p::lookup(cp), width as usize),
        Decoded::Incomplete => {
            if at_eof {
                Step::Props(p::NONE, 1)
            } else {
                Step::NeedMore
            }
        }
        Decoded::Invalid => Step::Props(p::NONE, 1),
    }
}

enum Ahead {
    Found,
    NotFound,
    NeedMore,
}

/// SB8's forward half: skip a run of characters that are not
/// `OLetter|Upper|Lower|ParaSep|SATerm`, then report whether the first one
/// that is belongs to `Lower`.
fn sb8_lower_ahead(data: &[u8], at_eof: bool) -> Ahead {
    let mut pos = 0usize;
    loop {
        if pos >= data.len() {
            return if at_eof { Ahead::NotFound } else { Ahead::NeedMore };
        }
        match utf8::decode(&data[pos..]) {
            Decoded::Valid { cp, width } => {
                let prop = p::lookup(cp);
                if prop & p::LETTER_OR_BREAK == 0 {
                    pos += width as usize;
                    continue;
                }
                return if prop & p::LOWER != 0 {
                    Ahead::Found
                } else {
                    Ahead::NotFound
                };
            }
            Decoded::Incomplete => {
                return if at_eof {
                    Ahead::NotFound
                } else {
                    Ahead::NeedMore
                };
            }
            Decoded::Invalid => return Ahead::NotFound,
        }
    }
}

enum Decision {
    Break,
    Continue,
    NeedMore,
}

/// Decides whether to break between `prev` (just consumed) and `next` (at
/// `data[pos..]`), given the cheap single-step lookbehind state and full
/// access to `data` for the variable-distance SB8-SB11 look-arounds.
fn sentence_continues(
    prev: u32,
    next: u32,
    last_ex_ignore: u32,
    last_last_ex_ignore: u32,
    data: &[u8],
    pos: usize,
    at_eof: bool,
) -> Decision {
    // SB3
    if prev & p::CR != 0 && next & p::LF != 0 {
        return Decision::Continue;
    }
    // SB4: always break after a paragraph separator.
    if prev & p::PARA_SEP != 0 {
        return Decision::Break;
    }
    // SB5: Extend | Format is transparent to everything below.
    if next & p::IGNORE != 0 {
        return Decision::Continue;
    }

    let eff_prev = last_ex_ignore;

    // SB6
    if eff_prev & p::ATERM != 0 && next & p::NUMERIC != 0 {
        return Decision::Continue;
    }
    // SB7
    if eff_prev & p::ATERM != 0
        && next & p::UPPER != 0
        && last_last_ex_ignore & (p::UPPER | p::LOWER) != 0
    {
        return Decision::Continue;
    }
    // SB8: ATerm Close* Sp* × (not a letter/terminator)* Lower.
    if seek::previous(p::ATERM, p::CLOSE | p::SP, &data[..pos], p::lookup) {
        match sb8_lower_ahead(&data[pos..], at_eof) {
            Ahead::Found => return Decision::Continue,
            Ahead::NeedMore => return Decision::NeedMore,
            Ahead::NotFound => {}
        }
    }
    // SB8a: SContinue | SATerm after (ATerm|STerm) Close* Sp*.
    if next & (p::SCONTINUE | p::SATERM) != 0
        && seek::previous(p::SATERM, p::CLOSE | p::SP, &data[..pos], p::lookup)
    {
        return Decision::Continue;
    }
    // SB9: Close | Sp | ParaSep after SATerm Close*.
    if next & (p::CLOSE | p::SP | p::PARA_SEP) != 0
        && seek::previous(p::SATERM, p::CLOSE, &data[..pos], p::lookup)
    {
        return Decision::Continue;
    }
    // SB10: Sp | ParaSep after SATerm Close* Sp*.
    if next & (p::SP | p::PARA_SEP) != 0
        && seek::previous(p::SATERM, p::CLOSE | p::SP, &data[..pos], p::lookup)
    {
        return Decision::Continue;
    }
    // SB11: break after SATerm Close* Sp* (an absorbed trailing separator
    // was already folded in by SB9/SB10 above).
    if seek::previous(p::SATERM, p::CLOSE | p::SP, &data[..pos], p::lookup) {
        return Decision::Break;
    }

    // SB998: sentences are long by default.
    Decision::Continue
}

/// The pure split predicate for sentences (§6).
///
/// As an optimization, a caller that wants to skip straight past runs of
/// plain ASCII text may do so at the iterator level (§4.F
/// "Optimization"); this function itself always runs the full rule set and
/// is the ground truth those shortcuts must agree with.
pub fn split(data: &[u8], at_eof: bool) -> usize {
    if data.is_empty() {
        return 0;
    }

    let mut pos;
    let mut prev = match decode_one(data, at_eof) {
        Step::Props(props, width) => {
            pos = width;
            props
        }
        Step::NeedMore => return 0,
    };

    let mut last_ex_ignore = if prev & p::IGNORE != 0 { p::NONE } else { prev };
    let mut last_last_ex_ignore = p::NONE;

    loop {
        if pos >= data.len() {
            return if at_eof { pos } else { 0 };
        }
        let (next, width) = match decode_one(&data[pos..], at_eof) {
            Step::Props(props, width) => (props, width),
            Step::NeedMore => return 0,
        };

        match sentence_continues(prev, next, last_ex_ignore, last_last_ex_ignore, data, pos, at_eof) {
            Decision::Break => return pos,
            Decision::NeedMore => return 0,
            Decision::Continue => {}
        }

        if next & p::IGNORE == 0 {
            last_last_ex_ignore = last_ex_ignore;
            last_ex_ignore = next;
        }
        prev = next;
        pos += width;
    }
}

/// Byte-slice iterator over sentences (§6 `from_bytes`).
pub type Sentences<'a> = crate::iter::ByteIterator<'a, fn(&[u8], bool) -> usize>;
/// `&str` iterator over sentences (§6 `from_string`).
pub type StrSentences<'a> = crate::iter::StrIterator<'a, fn(&[u8], bool) -> usize>;
/// Reader-backed sentence scanner (§6 `from_reader`).
pub type Scanner<R> = crate::iter::Scanner<R, fn(&[u8], bool) -> usize>;

/// Iterates `data` as sentences.
pub fn from_bytes(data: &[u8]) -> Sentences<'_> {
    Sentences::new(data, split)
}

/// Iterates `text` as sentences.
pub fn from_string(text: &str) -> StrSentences<'_> {
    StrSentences::new(text, split)
}

/// Scans a streaming byte source for sentences.
pub fn from_reader<R: std::io::Read>(reader: R) -> Scanner<R> {
    Scanner::new(reader, split)
}

#[cfg(test)]
mod tests;
