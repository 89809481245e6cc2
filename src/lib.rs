//! An implementation of [UAX #29: Unicode Text Segmentation](https://www.unicode.org/reports/tr29/)
//! that prioritizes streaming-friendliness and simplicity over raw throughput.
//!
//! This library implements the segmentation algorithm as of Unicode 15.1,
//! using character database tables curated (not mechanically generated)
//! from that release — see the "important caveat" below.
//!
//! Four segmentation modes are provided, one module each:
//!
//! - [`grapheme`] — grapheme clusters (UAX #29 §3), plus an optional
//!   recognizer that folds a terminal ANSI escape sequence into the
//!   cluster it's attached to.
//! - [`word`] — words (UAX #29 §4), with optional custom joiner runes.
//! - [`phrase`] — a non-standard variant of words where internal spaces
//!   don't themselves force a break, so a "phrase" runs until the first
//!   punctuation mark or line terminator.
//! - [`sentence`] — sentences (UAX #29 §5).
//!
//! Each mode exposes the same shape of API (§6 of the accompanying design
//! notes): a pure `split(data, at_eof) -> usize` predicate that returns
//! the byte length of the next complete segment, or `0` to request more
//! input; and three iterator shells built on top of it —
//! `from_bytes`/`from_string` for in-memory input, and `from_reader` for
//! a streaming [`std::io::Read`] source.
//!
//! The `split` predicate is the thing to reach for if you're integrating
//! with a generic scanner framework of your own; the iterator shells are
//! the thing to reach for otherwise.
//!
//! ```
//! let mut words = unicode_segments::word::from_string("Hello, world!");
//! let mut out = Vec::new();
//! while words.next() {
//!     out.push(words.value());
//! }
//! assert_eq!(out, ["Hello", ",", " ", "world", "!"]);
//! ```
//!
//! None of the engines in this crate ever return an error. Malformed
//! UTF-8 and incomplete sequences at end-of-input are passed through
//! verbatim as one-byte segments ("garbage in, garbage out"); the
//! concatenation of all segments always equals the input byte-for-byte.
//!
//! ---
//!
//! The canonical Rust library for UAX #29 is
//! [`unicode_segmentation`](https://docs.rs/unicode-segmentation/latest/unicode_segmentation/),
//! and so that's probably what you should use in most cases. This library
//! has the following main distinctions (as of `unicode_segmentation`
//! v1.12.0):
//!
//! - `unicode_segmentation`'s primary entry points expect the whole text
//!   to be in memory as a single buffer, with `GraphemeCursor` offered
//!   separately for non-contiguous buffers, at the cost of a rather
//!   challenging API that still requires the caller to supply earlier
//!   context to help it make a decision.
//!
//!   By contrast every engine in this library is a pure function from
//!   "bytes seen so far, plus whether there might be more" to "how much
//!   of that forms a complete segment", with no requirement for the
//!   caller to buffer anything beyond the current segment in progress.
//!   `sentence::split` can legitimately need to see arbitrarily far ahead
//!   (SB8), and it still only ever asks for more bytes rather than more
//!   context.
//!
//! - This library also segments words, phrases, and sentences, which
//!   `unicode_segmentation` does not attempt.
//!
//! - `unicode_segmentation` finds character properties by binary search
//!   over tables indexed by [`char`]. This library instead looks them up
//!   from the raw UTF-8 byte sequence via a trie, so it never needs to
//!   decode a code point before knowing a property of it.
//!
//!   (Whether that's actually faster depends on your input and your
//!   build. Measure it yourself if performance matters to you.)
//!
//! Unless you have a good reason to prefer this library, it's probably
//! better to use
//! [`unicode_segmentation`](https://docs.rs/unicode-segmentation/latest/unicode_segmentation/)
//! because it's widely used, well-maintained by an established team, and
//! not subject to the caveat below.
//!
//! # An important caveat
//!
//! The property tables in this crate are a curated approximation of the
//! Unicode Character Database, not the output of a table generator run
//! against the UCD data files. They cover the ranges that matter for the
//! rules implemented here and are believed correct for those ranges, but
//! they are not a verbatim transcription of `GraphemeBreakProperty.txt`,
//! `WordBreakProperty.txt`, or `SentenceBreakProperty.txt`. If exact
//! conformance with the UCD tables for every assigned code point matters
//! to you, use `unicode_segmentation` instead.

mod iter;
mod seek;
mod trie;
mod utf8;

pub mod grapheme;
pub mod phrase;
pub mod sentence;
pub mod word;

pub use grapheme::{CharProperties, GCBProperty, InCBProperty};
