//! Iterator shell: component H.
//!
//! This is the only layer in the crate that owns a cursor. Every engine
//! (C/D/E/F) exposes a pure `split(data, at_eof) -> usize` predicate;
//! [`ByteIterator`], [`StrIterator`], and [`Scanner`] are the three ways
//! §4.H drives one of those predicates over a byte source and hands back
//! successive segments. The byte and string shells share one
//! implementation by zero-copy reinterpretation of the string's bytes
//! (`str::as_bytes`); the reader-backed shell is the only one that owns a
//! buffer, since its source isn't available as a single contiguous slice
//! up front.
//!
//! [`Engine`] is what lets the three shells stay generic across modes: it
//! wraps a mode's split predicate (and whatever configuration it closed
//! over — `AnsiOptions`, `Joiners`, or nothing) behind one method.

use std::io::{self, Read};

/// A mode's split predicate, plus whatever configuration it was built
/// with. Each mode implements this once for its own configuration type
/// (or, for a configuration-free mode, hands back a plain function
/// pointer — see the blanket impl below) and the shells in this module
/// stay oblivious to which mode they're driving.
pub trait Engine {
    fn split(&self, data: &[u8], at_eof: bool) -> usize;
}

impl Engine for fn(&[u8], bool) -> usize {
    fn split(&self, data: &[u8], at_eof: bool) -> usize {
        self(data, at_eof)
    }
}

/// Drives an engine over an in-memory byte slice (§4.H, §6 `from_bytes`).
pub struct ByteIterator<'a, E> {
    data: &'a [u8],
    cursor: usize,
    start: usize,
    end: usize,
    engine: E,
}

impl<'a, E: Engine> ByteIterator<'a, E> {
    pub fn new(data: &'a [u8], engine: E) -> Self {
        ByteIterator {
            data,
            cursor: 0,
            start: 0,
            end: 0,
            engine,
        }
    }

    /// Advances to the next segment. Returns `false` once the cursor has
    /// reached the end of `data`.
    pub fn next(&mut self) -> bool {
        if self.cursor >= self.data.len() {
            return false;
        }
        self.start = self.cursor;
        let advance = self.engine.split(&self.data[self.cursor..], true);
        assert!(
            advance > 0,
            "segmentation engine returned a zero-length segment at end of input"
        );
        self.cursor += advance;
        self.end = self.cursor;
        true
    }

    /// The current segment. Only meaningful after a call to [`Self::next`]
    /// that returned `true`.
    pub fn value(&self) -> &'a [u8] {
        &self.data[self.start..self.end]
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Resets the cursor to the start of a new input, reusing the engine
    /// configuration.
    pub fn set_text(&mut self, data: &'a [u8]) {
        self.data = data;
        self.cursor = 0;
        self.start = 0;
        self.end = 0;
    }
}

/// Drives an engine over a `&str` (§4.H, §6 `from_string`), reusing
/// [`ByteIterator`] over the string's bytes and handing back `&str`
/// subranges. A segment can never split a code point here because the
/// input is already known-valid UTF-8, so the re-decode in [`Self::value`]
/// cannot fail.
pub struct StrIterator<'a, E> {
    inner: ByteIterator<'a, E>,
}

impl<'a, E: Engine> StrIterator<'a, E> {
    pub fn new(text: &'a str, engine: E) -> Self {
        StrIterator {
            inner: ByteIterator::new(text.as_bytes(), engine),
        }
    }

    pub fn next(&mut self) -> bool {
        self.inner.next()
    }

    pub fn value(&self) -> &'a str {
        std::str::from_utf8(self.inner.value())
            .expect("segment of a &str input is always valid UTF-8")
    }

    pub fn start(&self) -> usize {
        self.inner.start()
    }

    pub fn end(&self) -> usize {
        self.inner.end()
    }

    pub fn set_text(&mut self, text: &'a str) {
        self.inner.set_text(text.as_bytes());
    }
}

const DEFAULT_CAPACITY: usize = 64 * 1024;

/// Drives an engine over a streaming [`Read`] source (§4.H, §6
/// `from_reader`), with a single growable buffer (default 64 KiB) instead
/// of requiring the whole input up front. [`Self::next`] only blocks on
/// the reader when the engine has asked for more bytes than the buffer
/// currently holds and the source isn't yet known to be exhausted.
pub struct Scanner<R, E> {
    reader: R,
    engine: E,
    buf: Vec<u8>,
    filled: usize,
    seg_end: usize,
    source_eof: bool,
    base_offset: usize,
    cur_start: usize,
    cur_end: usize,
}

impl<R: Read, E: Engine> Scanner<R, E> {
    pub fn new(reader: R, engine: E) -> Self {
        Self::with_capacity(reader, engine, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(reader: R, engine: E, capacity: usize) -> Self {
        Scanner {
            reader,
            engine,
            buf: vec![0u8; capacity.max(1)],
            filled: 0,
            seg_end: 0,
            source_eof: false,
            base_offset: 0,
            cur_start: 0,
            cur_end: 0,
        }
    }

    /// Advances to the next segment, reading from the underlying source as
    /// needed. Returns `Ok(false)` once the source is exhausted and no
    /// partial segment remains.
    pub fn next(&mut self) -> io::Result<bool> {
        if self.seg_end > 0 {
            self.buf.copy_within(self.seg_end..self.filled, 0);
            self.filled -= self.seg_end;
            self.base_offset += self.seg_end;
            self.seg_end = 0;
        }
        loop {
            let advance = self.engine.split(&self.buf[..self.filled], self.source_eof);
            if advance > 0 {
                self.cur_start = self.base_offset;
                self.cur_end = self.base_offset + advance;
                self.seg_end = advance;
                return Ok(true);
            }
            if self.source_eof {
                return Ok(false);
            }
            if self.filled == self.buf.len() {
                let grow = self.buf.len().max(DEFAULT_CAPACITY);
                self.buf.resize(self.buf.len() + grow, 0);
            }
            let n = self.reader.read(&mut self.buf[self.filled..])?;
            if n == 0 {
                self.source_eof = true;
            } else {
                self.filled += n;
            }
        }
    }

    pub fn value(&self) -> &[u8] {
        &self.buf[..self.seg_end]
    }

    pub fn start(&self) -> usize {
        self.cur_start
    }

    pub fn end(&self) -> usize {
        self.cur_end
    }
}
