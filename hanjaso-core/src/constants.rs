//! Codepoint bases, counts and ranges shared by every component
//!
//! The counts are fixed by the script and match the Unicode Hangul
//! syllable composition algorithm.

/// A single Unicode scalar value
pub type Codepoint = u32;

/// First precomposed syllable block (가)
pub const SYLLABLE_BASE: Codepoint = 0xAC00;
/// Last precomposed syllable block (힣)
pub const SYLLABLE_LAST: Codepoint = 0xD7A3;

/// First leading consonant (choseong kiyeok)
pub const LEADING_BASE: Codepoint = 0x1100;
/// First vowel (jungseong a)
pub const VOWEL_BASE: Codepoint = 0x1161;
/// Trailing consonant base; the base itself is the "no trailing" filler
pub const TRAILING_BASE: Codepoint = 0x11A7;
/// Filler standing for an absent trailing consonant
pub const TRAILING_FILLER: Codepoint = TRAILING_BASE;

/// Number of leading consonants usable in composition
pub const LEADING_COUNT: u32 = 19;
/// Number of vowels usable in composition
pub const VOWEL_COUNT: u32 = 21;
/// Number of trailing slots, the filler included
pub const TRAILING_COUNT: u32 = 28;
/// Syllables sharing one leading consonant
pub const BLOCK_COUNT: u32 = VOWEL_COUNT * TRAILING_COUNT;
/// Number of precomposed syllable blocks
pub const SYLLABLE_COUNT: u32 = LEADING_COUNT * BLOCK_COUNT;

// raw class ranges, archaic letters included
pub(crate) const LEADING_FIRST: Codepoint = 0x1100;
pub(crate) const LEADING_LAST: Codepoint = 0x1159;
pub(crate) const VOWEL_FIRST: Codepoint = 0x1161;
pub(crate) const VOWEL_LAST: Codepoint = 0x11A2;
pub(crate) const TRAILING_FIRST: Codepoint = 0x11A8;
pub(crate) const TRAILING_LAST: Codepoint = 0x11F9;
pub(crate) const COMPAT_FIRST: Codepoint = 0x3131;
pub(crate) const COMPAT_LAST: Codepoint = 0x318E;

// modern letters accepted by the composition arithmetic
pub(crate) const LEADING_CONJOINABLE_LAST: Codepoint = LEADING_BASE + LEADING_COUNT - 1;
pub(crate) const VOWEL_CONJOINABLE_LAST: Codepoint = VOWEL_BASE + VOWEL_COUNT - 1;
pub(crate) const TRAILING_CONJOINABLE_LAST: Codepoint = TRAILING_BASE + TRAILING_COUNT - 1;

/// Terminator ending a codepoint sequence of unspecified length
pub const TERMINATOR: Codepoint = 0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_counts() {
        assert_eq!(BLOCK_COUNT, 588);
        assert_eq!(SYLLABLE_COUNT, 11172);
        assert_eq!(SYLLABLE_BASE + SYLLABLE_COUNT - 1, SYLLABLE_LAST);
    }

    #[test]
    fn test_conjoinable_bounds() {
        assert_eq!(LEADING_CONJOINABLE_LAST, 0x1112);
        assert_eq!(VOWEL_CONJOINABLE_LAST, 0x1175);
        assert_eq!(TRAILING_CONJOINABLE_LAST, 0x11C2);
    }
}
