//! Codepoint classification
//!
//! Pure range tests. Every codepoint falls in exactly one [`LetterClass`];
//! the conjoinable predicates narrow the three jaso classes down to the
//! modern letters the composition arithmetic accepts.

use crate::constants::*;

/// Classification of a codepoint for composition purposes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LetterClass {
    /// Leading consonant (choseong), U+1100..=U+1159
    Leading,
    /// Vowel (jungseong), U+1161..=U+11A2
    Vowel,
    /// Trailing consonant (jongseong), U+11A8..=U+11F9
    Trailing,
    /// Precomposed syllable block, U+AC00..=U+D7A3
    Syllable,
    /// Compatibility letter, U+3131..=U+318E
    CompatibilityLetter,
    /// Anything else
    Other,
}

impl LetterClass {
    /// Classify a codepoint
    pub fn of(c: Codepoint) -> Self {
        if is_leading(c) {
            LetterClass::Leading
        } else if is_vowel(c) {
            LetterClass::Vowel
        } else if is_trailing(c) {
            LetterClass::Trailing
        } else if is_syllable(c) {
            LetterClass::Syllable
        } else if is_compat_letter(c) {
            LetterClass::CompatibilityLetter
        } else {
            LetterClass::Other
        }
    }

    /// Leading, vowel or trailing
    pub fn is_jaso(self) -> bool {
        matches!(
            self,
            LetterClass::Leading | LetterClass::Vowel | LetterClass::Trailing
        )
    }

    /// Stable lowercase name
    pub fn name(self) -> &'static str {
        match self {
            LetterClass::Leading => "leading",
            LetterClass::Vowel => "vowel",
            LetterClass::Trailing => "trailing",
            LetterClass::Syllable => "syllable",
            LetterClass::CompatibilityLetter => "compatibility",
            LetterClass::Other => "other",
        }
    }

    /// Inclusive codepoint range of the class, `None` for [`LetterClass::Other`]
    pub fn range(self) -> Option<(Codepoint, Codepoint)> {
        match self {
            LetterClass::Leading => Some((LEADING_FIRST, LEADING_LAST)),
            LetterClass::Vowel => Some((VOWEL_FIRST, VOWEL_LAST)),
            LetterClass::Trailing => Some((TRAILING_FIRST, TRAILING_LAST)),
            LetterClass::Syllable => Some((SYLLABLE_BASE, SYLLABLE_LAST)),
            LetterClass::CompatibilityLetter => Some((COMPAT_FIRST, COMPAT_LAST)),
            LetterClass::Other => None,
        }
    }

    /// All classes, in range order
    pub const ALL: [LetterClass; 6] = [
        LetterClass::Leading,
        LetterClass::Vowel,
        LetterClass::Trailing,
        LetterClass::Syllable,
        LetterClass::CompatibilityLetter,
        LetterClass::Other,
    ];
}

/// Classify a codepoint
#[inline]
pub fn classify(c: Codepoint) -> LetterClass {
    LetterClass::of(c)
}

/// Leading consonant, archaic letters included
#[inline]
pub fn is_leading(c: Codepoint) -> bool {
    (LEADING_FIRST..=LEADING_LAST).contains(&c)
}

/// Vowel, archaic letters included
#[inline]
pub fn is_vowel(c: Codepoint) -> bool {
    (VOWEL_FIRST..=VOWEL_LAST).contains(&c)
}

/// Trailing consonant, archaic letters included
///
/// The filler U+11A7 is not a trailing consonant.
#[inline]
pub fn is_trailing(c: Codepoint) -> bool {
    (TRAILING_FIRST..=TRAILING_LAST).contains(&c)
}

/// Leading consonant usable in syllable composition
#[inline]
pub fn is_leading_conjoinable(c: Codepoint) -> bool {
    (LEADING_BASE..=LEADING_CONJOINABLE_LAST).contains(&c)
}

/// Vowel usable in syllable composition
#[inline]
pub fn is_vowel_conjoinable(c: Codepoint) -> bool {
    (VOWEL_BASE..=VOWEL_CONJOINABLE_LAST).contains(&c)
}

/// Trailing consonant usable in syllable composition, filler included
#[inline]
pub fn is_trailing_conjoinable(c: Codepoint) -> bool {
    (TRAILING_BASE..=TRAILING_CONJOINABLE_LAST).contains(&c)
}

/// Precomposed syllable block
#[inline]
pub fn is_syllable(c: Codepoint) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&c)
}

/// Leading consonant, vowel or trailing consonant
#[inline]
pub fn is_jaso(c: Codepoint) -> bool {
    is_leading(c) || is_vowel(c) || is_trailing(c)
}

/// Compatibility letter
#[inline]
pub fn is_compat_letter(c: Codepoint) -> bool {
    (COMPAT_FIRST..=COMPAT_LAST).contains(&c)
}
