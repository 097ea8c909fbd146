//! Syllable composition and decomposition
//!
//! The arithmetic bijection between (leading, vowel, trailing) and the
//! precomposed syllable blocks U+AC00..=U+D7A3.

use crate::class::{
    is_leading_conjoinable, is_syllable, is_trailing_conjoinable, is_vowel_conjoinable,
};
use crate::constants::*;

/// The jaso making up one syllable block
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Jaso {
    /// Leading consonant, U+1100..=U+1112
    pub leading: Codepoint,
    /// Vowel, U+1161..=U+1175
    pub vowel: Codepoint,
    /// Trailing consonant, U+11A8..=U+11C2, or `None`
    pub trailing: Option<Codepoint>,
}

impl Jaso {
    /// Compose the block
    pub fn compose(&self) -> Option<Codepoint> {
        compose(self.leading, self.vowel, self.trailing)
    }

    /// Number of letters present (2 or 3)
    pub fn len(&self) -> usize {
        if self.trailing.is_some() {
            3
        } else {
            2
        }
    }

    /// Always false: a syllable has at least a leading consonant and a vowel
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Present letters in order
    pub fn iter(&self) -> impl Iterator<Item = Codepoint> {
        [Some(self.leading), Some(self.vowel), self.trailing]
            .into_iter()
            .flatten()
    }
}

/// Compose a syllable block
///
/// `trailing` of `None` and the explicit filler U+11A7 both mean "no
/// trailing consonant". Returns `None` if any letter lies outside its
/// conjoinable range.
pub fn compose(
    leading: Codepoint,
    vowel: Codepoint,
    trailing: Option<Codepoint>,
) -> Option<Codepoint> {
    let trailing = trailing.unwrap_or(TRAILING_FILLER);

    if !is_leading_conjoinable(leading)
        || !is_vowel_conjoinable(vowel)
        || !is_trailing_conjoinable(trailing)
    {
        return None;
    }

    let l = leading - LEADING_BASE;
    let v = vowel - VOWEL_BASE;
    let t = trailing - TRAILING_BASE;

    Some((l * VOWEL_COUNT + v) * TRAILING_COUNT + t + SYLLABLE_BASE)
}

/// Decompose a syllable block; `None` for anything else
pub fn decompose(syllable: Codepoint) -> Option<Jaso> {
    if !is_syllable(syllable) {
        return None;
    }

    let index = syllable - SYLLABLE_BASE;
    let t = index % TRAILING_COUNT;
    let v = (index / TRAILING_COUNT) % VOWEL_COUNT;
    let l = index / BLOCK_COUNT;

    Some(Jaso {
        leading: LEADING_BASE + l,
        vowel: VOWEL_BASE + v,
        trailing: (t != 0).then_some(TRAILING_BASE + t),
    })
}
