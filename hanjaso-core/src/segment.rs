//! Syllable boundary segmentation
//!
//! Splits a jaso sequence into syllable candidates following an L+V+T*
//! pattern over the raw letter classes. Whether a candidate really
//! composes is decided later by the converter.

use crate::class::{is_leading, is_trailing, is_vowel};
use crate::constants::{Codepoint, TERMINATOR};

/// Whether `prev` and `next` belong to different syllables
///
/// Leading may be followed by leading or vowel, vowel by vowel or
/// trailing, trailing by trailing. Every other pair is a boundary.
#[inline]
pub fn is_syllable_boundary(prev: Codepoint, next: Codepoint) -> bool {
    if is_leading(prev) {
        !(is_leading(next) || is_vowel(next))
    } else if is_vowel(prev) {
        !(is_vowel(next) || is_trailing(next))
    } else if is_trailing(prev) {
        !is_trailing(next)
    } else {
        true
    }
}

/// Number of codepoints at the start of `seq` that form one syllable
///
/// Reads at most `max_len` codepoints and stops at a terminator. Returns 0
/// when nothing can be read, 1 when the first codepoint is not a jaso.
pub fn syllable_span_len(seq: &[Codepoint], max_len: usize) -> usize {
    let limit = max_len.min(seq.len());
    if limit == 0 || seq[0] == TERMINATOR {
        return 0;
    }

    let mut len = 1;
    while len < limit {
        let next = seq[len];
        if next == TERMINATOR || is_syllable_boundary(seq[len - 1], next) {
            break;
        }
        len += 1;
    }

    len
}

/// Iterator over successive syllable candidates
#[derive(Clone, Debug)]
pub struct Spans<'a> {
    rest: &'a [Codepoint],
}

impl<'a> Iterator for Spans<'a> {
    type Item = &'a [Codepoint];

    fn next(&mut self) -> Option<Self::Item> {
        let len = syllable_span_len(self.rest, self.rest.len());
        if len == 0 {
            return None;
        }

        let (span, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some(span)
    }
}

/// Split `seq` into syllable candidates, stopping at a terminator
pub fn spans(seq: &[Codepoint]) -> Spans<'_> {
    Spans { rest: seq }
}
