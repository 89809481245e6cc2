//! Word segmentation: component D (the Word_Break rule engine).
//!
//! The loop shape mirrors [`crate::grapheme`]: decode one character at a
//! time, decide whether to continue past it, and return as soon as a rule
//! says to break. What's different here is that several WB rules need to
//! see past the immediately adjacent character (WB6/WB7b/WB12), which is
//! what [`crate::seek::subsequent`] is for, and a couple of others
//! (WB7/WB7c/WB11) need to remember the non-ignored character *before* the
//! one just consumed, which `last_ex_ignore`/`last_last_ex_ignore` track as
//! the loop runs.

pub(crate) mod props;

use crate::seek::{self, Subsequent};
use crate::utf8::{self, Decoded};
use props as p;

/// Custom joiner configuration (§6). Runes in `leading` attach to a
/// following letter when they open a segment, so a leading `#` or `.`
/// doesn't get split off of `#hashtag` or `.com`. Runes in `middle` behave
/// like `MidNumLet` wherever they appear, so `foo@example.biz`,
/// `super-cool`, and `3/4` stay whole. `.` and `'` are already mid-class in
/// UAX #29, so listing them in `middle` would be redundant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Joiners {
    pub leading: Vec<char>,
    pub middle: Vec<char>,
}

impl Joiners {
    fn enrich(&self, cp: u32, props: u32, at_segment_start: bool) -> u32 {
        let mut props = props;
        if at_segment_start && self.leading.iter().any(|&c| c as u32 == cp) {
            props |= p::AHLETTER;
        }
        if self.middle.iter().any(|&c| c as u32 == cp) {
            props |= p::MID_NUM_LET;
        }
        props
    }
}

enum Step {
    Props(u32, usize),
    NeedMore,
}

fn decode_one(data: &[u8], at_eof: bool, at_segment_start: bool, joiners: &Joiners) -> Step {
    match utf8::decode(data) {
        Decoded::Valid { cp, width } => {
            let raw = p::lookup(cp);
            Step::Props(joiners.enrich(cp, raw, at_segment_start), width as usize)
        }
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

enum Decision {
    Break,
    Continue,
    NeedMore,
}

/// What counts as a "letter" varies between [`crate::word`] and
/// [`crate::phrase`]: phrases fold emoji into `AHLetter` and let
/// `WSegSpace` sit inside a run of letters/numbers without breaking it.
/// `ahletter` is substituted everywhere the rules reference `AHLetter`;
/// `extra_letter_or_numeric` is OR'd into the combined class WB5/8/9/10
/// test on top of `Numeric | ahletter`.
pub(crate) struct LetterClasses {
    pub ahletter: u32,
    pub extra_letter_or_numeric: u32,
}

impl LetterClasses {
    pub(crate) const WORD: Self = Self {
        ahletter: p::AHLETTER,
        extra_letter_or_numeric: 0,
    };
}

/// Decides whether to break between `prev` (the character just consumed)
/// and `next` (the one at the cursor), given the rolling lookbehind state.
/// `after_next` is everything past `next`, used by the rules that need to
/// peek ahead.
#[allow(clippy::too_many_arguments)]
fn word_continues(
    prev: u32,
    next: u32,
    last_ex_ignore: u32,
    last_last_ex_ignore: u32,
    ri_pending: bool,
    after_next: &[u8],
    at_eof: bool,
    classes: &LetterClasses,
) -> Decision {
    // WB3
    if prev & p::CR != 0 && next & p::LF != 0 {
        return Decision::Continue;
    }
    // WB3a/WB3b: break around Newline | CR | LF on either side.
    if prev & (p::NEWLINE | p::CR | p::LF) != 0 {
        return Decision::Break;
    }
    if next & (p::NEWLINE | p::CR | p::LF) != 0 {
        return Decision::Break;
    }
    // WB3c
    if prev & p::ZWJ != 0 && next & p::EXTENDED_PICTOGRAPHIC != 0 {
        return Decision::Continue;
    }
    // WB3d
    if prev & p::WSEGSPACE != 0 && next & p::WSEGSPACE != 0 {
        return Decision::Continue;
    }
    // WB4: Extend | Format | ZWJ is always transparent to what follows.
    if next & p::IGNORE != 0 {
        return Decision::Continue;
    }

    // From here `next` is never Extend|Format|ZWJ, and `last_ex_ignore` is
    // the effective previous character for all of the remaining rules.
    let eff_prev = last_ex_ignore;

    // WB5/WB8/WB9/WB10
    let letter_or_numeric = p::NUMERIC | classes.ahletter | classes.extra_letter_or_numeric;
    if eff_prev & letter_or_numeric != 0 && next & letter_or_numeric != 0 {
        return Decision::Continue;
    }
    // WB6
    if eff_prev & classes.ahletter != 0 && next & (p::MID_LETTER | p::MID_NUM_LET_Q) != 0 {
        match seek::subsequent(classes.ahletter, p::IGNORE, after_next, at_eof, p::lookup) {
            Subsequent::Found(_) => return Decision::Continue,
            Subsequent::NeedMore => return Decision::NeedMore,
            Subsequent::NotFound => {}
        }
    }
    // WB7
    if eff_prev & (p::MID_LETTER | p::MID_NUM_LET_Q) != 0
        && next & classes.ahletter != 0
        && last_last_ex_ignore & classes.ahletter != 0
    {
        return Decision::Continue;
    }
    // WB7a
    if eff_prev & p::HEBREW_LETTER != 0 && next & p::SINGLE_QUOTE != 0 {
        return Decision::Continue;
    }
    // WB7b
    if eff_prev & p::HEBREW_LETTER != 0 && next & p::DOUBLE_QUOTE != 0 {
        match seek::subsequent(p::HEBREW_LETTER, p::IGNORE, after_next, at_eof, p::lookup) {
            Subsequent::Found(_) => return Decision::Continue,
            Subsequent::NeedMore => return Decision::NeedMore,
            Subsequent::NotFound => {}
        }
    }
    // WB7c
    if eff_prev & p::DOUBLE_QUOTE != 0
        && next & p::HEBREW_LETTER != 0
        && last_last_ex_ignore & p::HEBREW_LETTER != 0
    {
        return Decision::Continue;
    }
    // WB11
    if eff_prev & (p::MID_NUM | p::MID_NUM_LET_Q) != 0
        && next & p::NUMERIC != 0
        && last_last_ex_ignore & p::NUMERIC != 0
    {
        return Decision::Continue;
    }
    // WB12
    if eff_prev & p::NUMERIC != 0 && next & (p::MID_NUM | p::MID_NUM_LET_Q) != 0 {
        match seek::subsequent(p::NUMERIC, p::IGNORE, after_next, at_eof, p::lookup) {
            Subsequent::Found(_) => return Decision::Continue,
            Subsequent::NeedMore => return Decision::NeedMore,
            Subsequent::NotFound => {}
        }
    }
    // WB13
    if eff_prev & p::KATAKANA != 0 && next & p::KATAKANA != 0 {
        return Decision::Continue;
    }
    // WB13a
    if eff_prev & (classes.ahletter | p::NUMERIC | p::KATAKANA | p::EXTEND_NUM_LET) != 0
        && next & p::EXTEND_NUM_LET != 0
    {
        return Decision::Continue;
    }
    // WB13b
    if eff_prev & p::EXTEND_NUM_LET != 0
        && next & (classes.ahletter | p::NUMERIC | p::KATAKANA) != 0
    {
        return Decision::Continue;
    }
    // WB15/WB16: pair up Regional Indicators two at a time.
    if eff_prev & p::REGIONAL_INDICATOR != 0 && next & p::REGIONAL_INDICATOR != 0 {
        return if ri_pending {
            Decision::Continue
        } else {
            Decision::Break
        };
    }

    // WB999
    Decision::Break
}

/// The pure split predicate for words (§6), with no custom joiners.
pub fn split(data: &[u8], at_eof: bool) -> usize {
    split_with(data, at_eof, &Joiners::default())
}

/// Like [`split`], but enriching the property lookup with `joiners` before
/// rule evaluation (§4.D "Custom joiners").
pub fn split_with(data: &[u8], at_eof: bool, joiners: &Joiners) -> usize {
    split_with_classes(data, at_eof, joiners, &LetterClasses::WORD)
}

/// Shared by [`split_with`] and [`crate::phrase`], which only differs in
/// which properties count as a "letter" (§4.E).
pub(crate) fn split_with_classes(
    data: &[u8],
    at_eof: bool,
    joiners: &Joiners,
    classes: &LetterClasses,
) -> usize {
    if data.is_empty() {
        return 0;
    }

    let mut pos;
    let mut prev = match decode_one(data, at_eof, true, joiners) {
        Step::Props(props, width) => {
            pos = width;
            props
        }
        Step::NeedMore => return 0,
    };

    let mut last_ex_ignore = if prev & p::IGNORE != 0 { p::NONE } else { prev };
    let mut last_last_ex_ignore = p::NONE;
    let mut ri_pending = last_ex_ignore & p::REGIONAL_INDICATOR != 0;

    loop {
        if pos >= data.len() {
            return if at_eof { pos } else { 0 };
        }
        let (next, width) = match decode_one(&data[pos..], at_eof, false, joiners) {
            Step::Props(props, width) => (props, width),
            Step::NeedMore => return 0,
        };

        let decision = word_continues(
            prev,
            next,
            last_ex_ignore,
            last_last_ex_ignore,
            ri_pending,
            &data[pos + width..],
            at_eof,
            classes,
        );
        match decision {
            Decision::Break => return pos,
            Decision::NeedMore => return 0,
            Decision::Continue => {}
        }

        let paired = next & p::REGIONAL_INDICATOR != 0
            && last_ex_ignore & p::REGIONAL_INDICATOR != 0
            && ri_pending;
        if next & p::IGNORE == 0 {
            last_last_ex_ignore = last_ex_ignore;
            last_ex_ignore = next;
        }
        ri_pending = next & p::REGIONAL_INDICATOR != 0 && !paired;

        prev = next;
        pos += width;
    }
}

impl crate::iter::Engine for Joiners {
    fn split(&self, data: &[u8], at_eof: bool) -> usize {
        split_with(data, at_eof, self)
    }
}

/// Byte-slice iterator over words (§6 `from_bytes`).
pub type Words<'a> = crate::iter::ByteIterator<'a, Joiners>;
/// `&str` iterator over words (§6 `from_string`).
pub type StrWords<'a> = crate::iter::StrIterator<'a, Joiners>;
/// Reader-backed word scanner (§6 `from_reader`).
pub type Scanner<R> = crate::iter::Scanner<R, Joiners>;

/// Iterates `data` as words, with no custom joiners.
pub fn from_bytes(data: &[u8]) -> Words<'_> {
    from_bytes_with(data, Joiners::default())
}

/// Like [`from_bytes`], enriching lookup with `joiners` (§4.D).
pub fn from_bytes_with(data: &[u8], joiners: Joiners) -> Words<'_> {
    Words::new(data, joiners)
}

/// Iterates `text` as words, with no custom joiners.
pub fn from_string(text: &str) -> StrWords<'_> {
    from_string_with(text, Joiners::default())
}

/// Like [`from_string`], enriching lookup with `joiners` (§4.D).
pub fn from_string_with(text: &str, joiners: Joiners) -> StrWords<'_> {
    StrWords::new(text, joiners)
}

/// Scans a streaming byte source for words, with no custom joiners.
pub fn from_reader<R: std::io::Read>(reader: R) -> Scanner<R> {
    from_reader_with(reader, Joiners::default())
}

/// Like [`from_reader`], enriching lookup with `joiners` (§4.D).
pub fn from_reader_with<R: std::io::Read>(reader: R, joiners: Joiners) -> Scanner<R> {
    Scanner::new(reader, joiners)
}
