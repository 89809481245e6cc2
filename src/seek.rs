//! Seek helpers (component B): lookbehind/lookahead over a byte slice that
//! skip a configurable "ignore" property set.
//!
//! These back the lookaround rules in the word and sentence engines (WB6/7,
//! WB7b/7c, WB12, SB8/8a/9/10/11) that need to know about a neighbour beyond
//! the immediately adjacent character. Graphemes never need this: every GB
//! rule only examines the immediately adjacent pair plus bounded state.

use crate::utf8::{self, Decoded};

/// Outcome of scanning forward past an ignored run looking for the next
/// non-ignored character's property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Subsequent {
    /// The first non-ignored character starts at this offset into `data`
    /// and its property intersects `target`.
    Found(usize),
    /// A non-ignored character was found but didn't match `target`, or we
    /// hit end-of-input with nothing left to match.
    NotFound,
    /// The scan ran off the end of `data` while still skipping ignored
    /// characters, and more input could change the answer.
    NeedMore,
}

/// Scans backward from the end of `data`, skipping any trailing run of
/// characters whose property intersects `ignore`, and reports whether the
/// first non-ignored character found intersects `target`.
///
/// Returns `false` if `data` is empty or consists entirely of ignored
/// characters (there is no preceding context to match).
pub(crate) fn previous(
    target: u32,
    ignore: u32,
    data: &[u8],
    prop_of: impl Fn(u32) -> u32,
) -> bool {
    previous_index(target, ignore, data, prop_of).is_some()
}

/// Like [`previous`], but returns the byte offset where the matched
/// character starts, or `None` if there was no match.
pub(crate) fn previous_index(
    target: u32,
    ignore: u32,
    data: &[u8],
    prop_of: impl Fn(u32) -> u32,
) -> Option<usize> {
    let mut end = data.len();
    loop {
        let (cp, width) = utf8::decode_back(data, end)?;
        let prop = prop_of(cp);
        if prop & ignore != 0 {
            end -= width as usize;
            if end == 0 {
                return None;
            }
            continue;
        }
        return if prop & target != 0 {
            Some(end - width as usize)
        } else {
            None
        };
    }
}

/// Scans forward from the start of `data`, skipping a leading run of
/// characters whose property intersects `ignore`, and reports whether the
/// first non-ignored character matches `target`.
///
/// `at_eof` must be true when `data` holds all remaining input; otherwise a
/// scan that runs off the end of `data` returns [`Subsequent::NeedMore`]
/// rather than guessing.
pub(crate) fn subsequent(
    target: u32,
    ignore: u32,
    data: &[u8],
    at_eof: bool,
    prop_of: impl Fn(u32) -> u32,
) -> Subsequent {
    let mut pos = 0usize;
    loop {
        if pos >= data.len() {
            return if at_eof {
                Subsequent::NotFound
            } else {
                Subsequent::NeedMore
            };
        }
        match utf8::decode(&data[pos..]) {
            Decoded::Valid { cp, width } => {
                let prop = prop_of(cp);
                if prop & ignore != 0 {
                    pos += width as usize;
                    continue;
                }
                return if prop & target != 0 {
                    Subsequent::Found(pos)
                } else {
                    Subsequent::NotFound
                };
            }
            Decoded::Incomplete => {
                return if at_eof {
                    Subsequent::NotFound
                } else {
                    Subsequent::NeedMore
                };
            }
            Decoded::Invalid => return Subsequent::NotFound,
        }
    }
}
