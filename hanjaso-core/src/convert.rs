//! Jaso sequence to syllable sequence conversion
//!
//! Each syllable candidate found by the segmenter is reduced to a single
//! (leading, vowel, trailing) triple through the cluster compressor and
//! composed. A candidate that cannot be composed is copied verbatim, so
//! conversion never fails and never loses text.

use crate::class::{is_leading_conjoinable, is_trailing_conjoinable, is_vowel_conjoinable};
use crate::cluster::{Cluster, ClusterKind};
use crate::constants::{Codepoint, TERMINATOR};
use crate::segment::syllable_span_len;
use crate::syllable::compose;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// How much of the source a bounded conversion may read
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceLen {
    /// Read at most this many codepoints
    Exact(usize),
    /// Read up to the first terminator, which is not converted
    Terminated,
}

impl SourceLen {
    fn resolve(self, src: &[Codepoint]) -> &[Codepoint] {
        match self {
            SourceLen::Exact(len) => &src[..len.min(src.len())],
            SourceLen::Terminated => {
                let end = src
                    .iter()
                    .position(|&c| c == TERMINATOR)
                    .unwrap_or(src.len());
                &src[..end]
            }
        }
    }
}

/// Outcome of a bounded conversion
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    /// Codepoints written to the destination
    pub written: usize,
    /// Source codepoints accounted for by what was written
    pub consumed: usize,
}

/// Fold a run of conjoinable letters of one class, advancing `pos`
fn fold_run(
    span: &[Codepoint],
    pos: &mut usize,
    kind: ClusterKind,
    accepts: fn(Codepoint) -> bool,
) -> Option<Option<Codepoint>> {
    let mut cluster = Cluster::new(kind);
    while let Some(&c) = span.get(*pos).filter(|&&c| accepts(c)) {
        if !cluster.push(c) {
            return None;
        }
        *pos += 1;
    }
    Some(cluster.value())
}

/// Reduce one syllable candidate to a single syllable block
///
/// Returns `None` if a run fails to compress, letters are left over after
/// the trailing run, or the resulting triple does not compose.
pub fn build_syllable(span: &[Codepoint]) -> Option<Codepoint> {
    let mut pos = 0;
    let leading = fold_run(span, &mut pos, ClusterKind::Leading, is_leading_conjoinable)?;
    let vowel = fold_run(span, &mut pos, ClusterKind::Vowel, is_vowel_conjoinable)?;
    let trailing = fold_run(span, &mut pos, ClusterKind::Trailing, is_trailing_conjoinable)?;

    if pos < span.len() {
        return None;
    }

    compose(leading?, vowel?, trailing)
}

/// Convert into a caller buffer, reporting both written and consumed counts
///
/// Stops when the source, the destination or a terminator is reached. A
/// candidate that does not compose is copied truncated to the remaining
/// capacity; only the copied part counts as consumed.
pub fn jaso_to_syllables_progress(
    dest: &mut [Codepoint],
    src: &[Codepoint],
    src_len: SourceLen,
) -> Progress {
    let src = src_len.resolve(src);
    let mut progress = Progress::default();

    while progress.written < dest.len() {
        let rest = &src[progress.consumed..];
        let len = syllable_span_len(rest, rest.len());
        if len == 0 {
            break;
        }

        let span = &rest[..len];
        match build_syllable(span) {
            Some(syllable) => {
                dest[progress.written] = syllable;
                progress.written += 1;
                progress.consumed += len;
            }
            None => {
                let copied = len.min(dest.len() - progress.written);
                dest[progress.written..progress.written + copied].copy_from_slice(&span[..copied]);
                progress.written += copied;
                progress.consumed += copied;
            }
        }
    }

    progress
}

/// Convert into a caller buffer, returning the number of codepoints written
///
/// The output is not terminated; append a terminator yourself if needed.
pub fn jaso_to_syllables_into(
    dest: &mut [Codepoint],
    src: &[Codepoint],
    src_len: SourceLen,
) -> usize {
    jaso_to_syllables_progress(dest, src, src_len).written
}

/// Append the conversion of one span to `out`
#[cfg(feature = "alloc")]
fn push_span(out: &mut Vec<Codepoint>, span: &[Codepoint]) {
    match build_syllable(span) {
        Some(syllable) => out.push(syllable),
        None => out.extend_from_slice(span),
    }
}

/// Convert a whole sequence into a fresh buffer
///
/// Terminators inside `src` are copied through and split syllables like
/// any other non-jaso codepoint.
#[cfg(feature = "alloc")]
pub fn jaso_to_syllables(src: &[Codepoint]) -> Vec<Codepoint> {
    let mut out = Vec::with_capacity(src.len());
    let mut rest = src;

    while let Some((&first, tail)) = rest.split_first() {
        if first == TERMINATOR {
            out.push(first);
            rest = tail;
            continue;
        }

        let len = syllable_span_len(rest, rest.len());
        let (span, tail) = rest.split_at(len);
        push_span(&mut out, span);
        rest = tail;
    }

    out
}

/// Decompose every syllable block into its jaso, copying everything else
#[cfg(feature = "alloc")]
pub fn syllables_to_jaso(src: &[Codepoint]) -> Vec<Codepoint> {
    let mut out = Vec::with_capacity(src.len() * 2);
    for &c in src {
        match crate::syllable::decompose(c) {
            Some(jaso) => out.extend(jaso.iter()),
            None => out.push(c),
        }
    }
    out
}

/// Convert to syllables, then show leftover modern jaso as compatibility letters
#[cfg(feature = "alloc")]
pub fn jaso_to_compat_letters(src: &[Codepoint]) -> Vec<Codepoint> {
    let mut out = jaso_to_syllables(src);
    for c in out.iter_mut() {
        *c = crate::compat::to_compat_letter(*c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_syllable() {
        assert_eq!(build_syllable(&[0x1100, 0x1161]), Some(0xAC00));
        assert_eq!(build_syllable(&[0x1107, 0x116E, 0x1165, 0x11AF]), Some(0xBDA4));
        // ㅃ ㅞ ㄺ
        assert_eq!(
            build_syllable(&[0x1107, 0x1107, 0x116E, 0x1166, 0x11AF, 0x11A8]),
            compose(0x1108, 0x1170, Some(0x11B0))
        );
    }

    #[test]
    fn test_build_syllable_failures() {
        assert_eq!(build_syllable(&[0x11A8]), None);
        assert_eq!(build_syllable(&[0x1100]), None);
        assert_eq!(build_syllable(&[0x1161]), None);
        // ㄴ ㄴ does not merge
        assert_eq!(build_syllable(&[0x1102, 0x1102, 0x1161]), None);
        // archaic leading consonant is not conjoinable
        assert_eq!(build_syllable(&[0x1113, 0x1161]), None);
        assert_eq!(build_syllable(&[]), None);
    }

    #[test]
    fn test_bounded_basic() {
        let mut dest = [0; 8];
        let n = jaso_to_syllables_into(&mut dest, &[0x1100, 0x1161], SourceLen::Exact(2));
        assert_eq!(&dest[..n], &[0xAC00]);
    }

    #[test]
    fn test_bounded_terminated_source() {
        let src = [0x1100, 0x1161, 0x11A8, 0x1102, 0x1161, 0, 0x1100, 0x1161];
        let mut dest = [0; 8];
        let n = jaso_to_syllables_into(&mut dest, &src, SourceLen::Terminated);
        assert_eq!(&dest[..n], &[0xAC01, 0xB098]);
    }

    #[test]
    fn test_bounded_verbatim_copy_is_truncated() {
        let src = [0x41, 0x1102, 0x1102, 0x1102];
        let mut dest = [0; 3];
        let progress = jaso_to_syllables_progress(&mut dest, &src, SourceLen::Exact(4));
        assert_eq!(progress, Progress { written: 3, consumed: 3 });
        assert_eq!(dest, [0x41, 0x1102, 0x1102]);
    }

    #[test]
    fn test_bounded_zero_capacity() {
        let mut dest: [Codepoint; 0] = [];
        assert_eq!(
            jaso_to_syllables_into(&mut dest, &[0x1100, 0x1161], SourceLen::Terminated),
            0
        );
    }

    #[test]
    fn test_bounded_length_clamped_to_source() {
        let mut dest = [0; 4];
        let n = jaso_to_syllables_into(&mut dest, &[0x1100, 0x1161], SourceLen::Exact(100));
        assert_eq!(n, 1);
    }

    #[test]
    fn test_owned_copies_terminators() {
        let src = [0x1100, 0x1161, 0, 0x1100, 0x1161];
        assert_eq!(jaso_to_syllables(&src), vec![0xAC00, 0, 0xAC00]);
    }

    #[test]
    fn test_owned_mixed_text() {
        // "ㄱ" compatibility letter, space, 한
        let src = [0x3131, 0x20, 0x1112, 0x1161, 0x11AB];
        assert_eq!(jaso_to_syllables(&src), vec![0x3131, 0x20, 0xD55C]);
    }

    #[test]
    fn test_syllables_to_jaso() {
        assert_eq!(
            syllables_to_jaso(&[0xD55C, 0x20, 0xAC00]),
            vec![0x1112, 0x1161, 0x11AB, 0x20, 0x1100, 0x1161]
        );
    }

    #[test]
    fn test_compat_rendering() {
        // lone trailing kiyeok and lone vowel a next to a composed 가
        let src = [0x11A8, 0x20, 0x1100, 0x1161, 0x20, 0x1161];
        assert_eq!(
            jaso_to_compat_letters(&src),
            vec![0x3131, 0x20, 0xAC00, 0x20, 0x314F]
        );
    }
}
