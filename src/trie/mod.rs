//! The property trie (component A): maps a UTF-8 prefix to a
//! `(property-bitset, byte-width)` pair.
//!
//! The actual per-mode tables (grapheme, word, sentence) are generated from
//! the UCD property files; regenerating them for a new Unicode release is a
//! separate tool, not part of this crate. What lives here is the lookup
//! structure those tables are queried through: a sorted array of
//! `(first, last, bits)` ranges, searched by binary search on the code
//! point. This keeps each table a flat, static, allocation-free slice while
//! still giving O(log n) lookup, which easily keeps up with the rule engines
//! that drive it.

pub(crate) mod grapheme;
pub(crate) mod sentence;
pub(crate) mod word;

/// One contiguous run of code points sharing the same property bits.
pub(crate) struct Range {
    pub first: u32,
    pub last: u32,
    pub bits: u32,
}

/// Binary-searches `table` (sorted and non-overlapping by `first`) for the
/// range containing `cp`, returning its bits or `0` if `cp` isn't covered by
/// any entry (the "no tracked property" case).
pub(crate) fn lookup(table: &[Range], cp: u32) -> u32 {
    let mut lo = 0usize;
    let mut hi = table.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let r = &table[mid];
        if cp < r.first {
            hi = mid;
        } else if cp > r.last {
            lo = mid + 1;
        } else {
            return r.bits;
        }
    }
    0
}
