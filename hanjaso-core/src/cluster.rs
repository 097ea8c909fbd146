//! Cluster compression
//!
//! Folds two adjacent letters of the same class into one compound letter,
//! e.g. two kiyeok into ssangkiyeok or o + a into wa. Only the pairs listed
//! in the tables merge; any other pair fails.

use crate::constants::Codepoint;

/// (first, second, merged)
type PairTable = [(Codepoint, Codepoint, Codepoint)];

const LEADING_PAIRS: &PairTable = &[
    (0x1100, 0x1100, 0x1101), // kiyeok + kiyeok
    (0x1103, 0x1103, 0x1104), // tikeut + tikeut
    (0x1107, 0x1107, 0x1108), // pieup + pieup
    (0x1109, 0x1109, 0x110A), // sios + sios
    (0x110C, 0x110C, 0x110D), // cieuc + cieuc
];

const VOWEL_PAIRS: &PairTable = &[
    (0x1169, 0x1161, 0x116A), // o + a
    (0x1169, 0x1162, 0x116B), // o + ae
    (0x1169, 0x1175, 0x116C), // o + i
    (0x116E, 0x1165, 0x116F), // u + eo
    (0x116E, 0x1166, 0x1170), // u + e
    (0x116E, 0x1175, 0x1171), // u + i
    (0x1173, 0x1175, 0x1174), // eu + i
    (0x1161, 0x1175, 0x1162), // a + i
    (0x1163, 0x1175, 0x1164), // ya + i
    (0x1165, 0x1175, 0x1166), // eo + i
    (0x1167, 0x1175, 0x1168), // yeo + i
];

const TRAILING_PAIRS: &PairTable = &[
    (0x11A8, 0x11A8, 0x11A9), // kiyeok + kiyeok
    (0x11A8, 0x11BA, 0x11AA), // kiyeok + sios
    (0x11AB, 0x11B0, 0x11AB), // nieun + rieul-kiyeok, yields nieun unchanged
    (0x11AB, 0x11C2, 0x11AD), // nieun + hieuh
    (0x11AF, 0x11A8, 0x11B0), // rieul + kiyeok
    (0x11AF, 0x11B7, 0x11B1), // rieul + mieum
    (0x11AF, 0x11B8, 0x11B2), // rieul + pieup
    (0x11AF, 0x11BA, 0x11B3), // rieul + sios
    (0x11AF, 0x11C0, 0x11B4), // rieul + thieuth
    (0x11AF, 0x11C1, 0x11B5), // rieul + phieuph
    (0x11AF, 0x11C2, 0x11B6), // rieul + hieuh
    (0x11B8, 0x11BA, 0x11B9), // pieup + sios
    (0x11BA, 0x11BA, 0x11BB), // sios + sios
];

/// Letter class a cluster is built from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClusterKind {
    /// Leading consonants
    Leading,
    /// Vowels
    Vowel,
    /// Trailing consonants
    Trailing,
}

impl ClusterKind {
    fn pairs(self) -> &'static PairTable {
        match self {
            ClusterKind::Leading => LEADING_PAIRS,
            ClusterKind::Vowel => VOWEL_PAIRS,
            ClusterKind::Trailing => TRAILING_PAIRS,
        }
    }

    /// Merge `next` into the accumulated letter
    ///
    /// An empty accumulator takes `next` as is.
    pub fn compress(self, acc: Option<Codepoint>, next: Codepoint) -> Option<Codepoint> {
        match acc {
            None => Some(next),
            Some(first) => self
                .pairs()
                .iter()
                .find(|&&(a, b, _)| a == first && b == next)
                .map(|&(_, _, merged)| merged),
        }
    }
}

/// Merge two leading consonants
#[inline]
pub fn compress_leading(acc: Option<Codepoint>, next: Codepoint) -> Option<Codepoint> {
    ClusterKind::Leading.compress(acc, next)
}

/// Merge two vowels
#[inline]
pub fn compress_vowel(acc: Option<Codepoint>, next: Codepoint) -> Option<Codepoint> {
    ClusterKind::Vowel.compress(acc, next)
}

/// Merge two trailing consonants
#[inline]
pub fn compress_trailing(acc: Option<Codepoint>, next: Codepoint) -> Option<Codepoint> {
    ClusterKind::Trailing.compress(acc, next)
}

/// Accumulator folding a run of same-class letters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cluster {
    kind: ClusterKind,
    value: Option<Codepoint>,
}

impl Cluster {
    /// Create an empty cluster
    pub fn new(kind: ClusterKind) -> Self {
        Self { kind, value: None }
    }

    /// Fold one more letter in; a failed merge leaves the cluster unchanged
    pub fn push(&mut self, c: Codepoint) -> bool {
        match self.kind.compress(self.value, c) {
            Some(merged) => {
                self.value = Some(merged);
                true
            }
            None => false,
        }
    }

    /// Letter accumulated so far
    pub fn value(&self) -> Option<Codepoint> {
        self.value
    }

    /// Class the cluster is built from
    pub fn kind(&self) -> ClusterKind {
        self.kind
    }

    /// Whether nothing has been pushed yet
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}
