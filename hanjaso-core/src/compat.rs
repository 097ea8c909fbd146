//! Compatibility letters and leading/trailing cross mapping
//!
//! All lookups are fixed tables indexed by the offset from the class base.

use crate::constants::{Codepoint, LEADING_BASE, VOWEL_BASE};

/// First trailing consonant with a table entry (jongseong kiyeok)
const TRAILING_TABLE_BASE: Codepoint = 0x11A8;

/// Leading consonant U+1100..=U+1112 -> compatibility letter
const LEADING_COMPAT: [Codepoint; 19] = [
    0x3131, 0x3132, 0x3134, 0x3137, 0x3138, 0x3139, 0x3141, 0x3142, 0x3143, 0x3145,
    0x3146, 0x3147, 0x3148, 0x3149, 0x314A, 0x314B, 0x314C, 0x314D, 0x314E,
];

/// Vowel U+1161..=U+1175 -> compatibility letter
const VOWEL_COMPAT: [Codepoint; 21] = [
    0x314F, 0x3150, 0x3151, 0x3152, 0x3153, 0x3154, 0x3155, 0x3156, 0x3157, 0x3158,
    0x3159, 0x315A, 0x315B, 0x315C, 0x315D, 0x315E, 0x315F, 0x3160, 0x3161, 0x3162,
    0x3163,
];

/// Trailing consonant U+11A8..=U+11C2 -> compatibility letter
const TRAILING_COMPAT: [Codepoint; 27] = [
    0x3131, 0x3132, 0x3133, 0x3134, 0x3135, 0x3136, 0x3137, 0x3139, 0x313A, 0x313B,
    0x313C, 0x313D, 0x313E, 0x313F, 0x3140, 0x3141, 0x3142, 0x3144, 0x3145, 0x3146,
    0x3147, 0x3148, 0x314A, 0x314B, 0x314C, 0x314D, 0x314E,
];

/// Leading consonant -> trailing consonant, 0 where no single trailing letter exists
const LEADING_TO_TRAILING: [Codepoint; 19] = [
    0x11A8, // kiyeok
    0x11A9, // ssangkiyeok
    0x11AB, // nieun
    0x11AE, // tikeut
    0,      // ssangtikeut
    0x11AF, // rieul
    0x11B7, // mieum
    0x11B8, // pieup
    0,      // ssangpieup
    0x11BA, // sios
    0x11BB, // ssangsios
    0x11BC, // ieung
    0x11BD, // cieuc
    0,      // ssangcieuc
    0x11BE, // chieuch
    0x11BF, // khieukh
    0x11C0, // thieuth
    0x11C1, // phieuph
    0x11C2, // hieuh
];

/// Trailing consonant -> leading consonant; clusters map to their last letter
const TRAILING_TO_LEADING: [Codepoint; 27] = [
    0x1100, // kiyeok
    0x1101, // ssangkiyeok
    0x1109, // kiyeok-sios
    0x1102, // nieun
    0x110C, // nieun-cieuc
    0x1112, // nieun-hieuh
    0x1103, // tikeut
    0x1105, // rieul
    0x1100, // rieul-kiyeok
    0x1106, // rieul-mieum
    0x1107, // rieul-pieup
    0x1109, // rieul-sios
    0x1110, // rieul-thieuth
    0x1111, // rieul-phieuph
    0x1112, // rieul-hieuh
    0x1106, // mieum
    0x1107, // pieup
    0x1109, // pieup-sios
    0x1109, // sios
    0x110A, // ssangsios
    0x110B, // ieung
    0x110C, // cieuc
    0x110E, // chieuch
    0x110F, // khieukh
    0x1110, // thieuth
    0x1111, // phieuph
    0x1112, // hieuh
];

/// Trailing consonant -> (letter left behind, leading letter moved out)
const TRAILING_SPLIT: [(Codepoint, Codepoint); 27] = [
    (0, 0x1100),      // kiyeok
    (0x11A8, 0x1100), // ssangkiyeok   = kiyeok + kiyeok
    (0x11A8, 0x1109), // kiyeok-sios   = kiyeok + sios
    (0, 0x1102),      // nieun
    (0x11AB, 0x110C), // nieun-cieuc   = nieun + cieuc
    (0x11AB, 0x1112), // nieun-hieuh   = nieun + hieuh
    (0, 0x1103),      // tikeut
    (0, 0x1105),      // rieul
    (0x11AF, 0x1100), // rieul-kiyeok  = rieul + kiyeok
    (0x11AF, 0x1106), // rieul-mieum   = rieul + mieum
    (0x11AF, 0x1107), // rieul-pieup   = rieul + pieup
    (0x11AF, 0x1109), // rieul-sios    = rieul + sios
    (0x11AF, 0x1110), // rieul-thieuth = rieul + thieuth
    (0x11AF, 0x1111), // rieul-phieuph = rieul + phieuph
    (0x11AF, 0x1112), // rieul-hieuh   = rieul + hieuh
    (0, 0x1106),      // mieum
    (0, 0x1107),      // pieup
    (0x11B8, 0x1109), // pieup-sios    = pieup + sios
    (0, 0x1109),      // sios
    (0x11BA, 0x1109), // ssangsios     = sios + sios
    (0, 0x110B),      // ieung
    (0, 0x110C),      // cieuc
    (0, 0x110E),      // chieuch
    (0, 0x110F),      // khieukh
    (0, 0x1110),      // thieuth
    (0, 0x1111),      // phieuph
    (0, 0x1112),      // hieuh
];

/// A trailing consonant split across a syllable boundary
///
/// When an editor moves the last consonant of a block into the next
/// syllable, `remaining` stays behind as the new trailing consonant (absent
/// for a simple consonant) and `leading` starts the next syllable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrailingSplit {
    /// Trailing consonant left in the original syllable
    pub remaining: Option<Codepoint>,
    /// Leading consonant carried to the next syllable
    pub leading: Codepoint,
}

#[inline]
fn lookup<T: Copy>(table: &[T], base: Codepoint, c: Codepoint) -> Option<T> {
    let index = c.checked_sub(base)? as usize;
    table.get(index).copied()
}

#[inline]
fn non_zero(c: Codepoint) -> Option<Codepoint> {
    (c != 0).then_some(c)
}

/// Convert a modern jaso to its compatibility letter
///
/// Returns `c` unchanged for anything that has no compatibility form,
/// archaic jaso and the trailing filler included.
pub fn to_compat_letter(c: Codepoint) -> Codepoint {
    lookup(&LEADING_COMPAT, LEADING_BASE, c)
        .or_else(|| lookup(&VOWEL_COMPAT, VOWEL_BASE, c))
        .or_else(|| lookup(&TRAILING_COMPAT, TRAILING_TABLE_BASE, c))
        .unwrap_or(c)
}

/// Trailing consonant sounding like the given leading consonant
///
/// `None` outside U+1100..=U+1112 and for the doubles that only exist in
/// leading position (ssangtikeut, ssangpieup, ssangcieuc).
pub fn trailing_from_leading(c: Codepoint) -> Option<Codepoint> {
    lookup(&LEADING_TO_TRAILING, LEADING_BASE, c).and_then(non_zero)
}

/// Leading consonant sounding like the given trailing consonant
///
/// Many-to-one: a two-letter cluster maps to its last letter, so callers
/// must not expect `trailing_from_leading` to invert it.
pub fn leading_from_trailing(c: Codepoint) -> Option<Codepoint> {
    lookup(&TRAILING_TO_LEADING, TRAILING_TABLE_BASE, c)
}

/// Split a modern trailing consonant for key-by-key editing
pub fn split_trailing_cluster(c: Codepoint) -> Option<TrailingSplit> {
    lookup(&TRAILING_SPLIT, TRAILING_TABLE_BASE, c).map(|(remaining, leading)| TrailingSplit {
        remaining: non_zero(remaining),
        leading,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_compat_letter() {
        assert_eq!(to_compat_letter(0x1100), 0x3131); // ㄱ
        assert_eq!(to_compat_letter(0x1112), 0x314E); // ㅎ
        assert_eq!(to_compat_letter(0x1161), 0x314F); // ㅏ
        assert_eq!(to_compat_letter(0x1175), 0x3163); // ㅣ
        assert_eq!(to_compat_letter(0x11A8), 0x3131); // ㄱ
        assert_eq!(to_compat_letter(0x11AA), 0x3133); // ㄳ
        assert_eq!(to_compat_letter(0x11C2), 0x314E); // ㅎ
    }

    #[test]
    fn test_to_compat_letter_identity_fallback() {
        for c in [0x0041, 0x1113, 0x1176, 0x11A7, 0x11C3, 0xAC00, 0x3131] {
            assert_eq!(to_compat_letter(c), c);
        }
    }

    #[test]
    fn test_trailing_from_leading() {
        assert_eq!(trailing_from_leading(0x1100), Some(0x11A8));
        assert_eq!(trailing_from_leading(0x110A), Some(0x11BB));
        assert_eq!(trailing_from_leading(0x1104), None);
        assert_eq!(trailing_from_leading(0x1108), None);
        assert_eq!(trailing_from_leading(0x110D), None);
        assert_eq!(trailing_from_leading(0x1113), None);
        assert_eq!(trailing_from_leading(0x11A8), None);
    }

    #[test]
    fn test_leading_from_trailing() {
        assert_eq!(leading_from_trailing(0x11A8), Some(0x1100));
        assert_eq!(leading_from_trailing(0x11AA), Some(0x1109));
        assert_eq!(leading_from_trailing(0x11BB), Some(0x110A));
        assert_eq!(leading_from_trailing(0x11C2), Some(0x1112));
        assert_eq!(leading_from_trailing(0x11A7), None);
        assert_eq!(leading_from_trailing(0x11C3), None);
    }

    #[test]
    fn test_simple_consonants_round_trip() {
        for lead in 0x1100..=0x1112 {
            if let Some(trail) = trailing_from_leading(lead) {
                assert_eq!(leading_from_trailing(trail), Some(lead));
            }
        }
    }

    #[test]
    fn test_split_trailing_cluster() {
        assert_eq!(
            split_trailing_cluster(0x11A8),
            Some(TrailingSplit {
                remaining: None,
                leading: 0x1100
            })
        );
        assert_eq!(
            split_trailing_cluster(0x11AA),
            Some(TrailingSplit {
                remaining: Some(0x11A8),
                leading: 0x1109
            })
        );
        assert_eq!(
            split_trailing_cluster(0x11B6),
            Some(TrailingSplit {
                remaining: Some(0x11AF),
                leading: 0x1112
            })
        );
        assert_eq!(split_trailing_cluster(0x11A7), None);
        assert_eq!(split_trailing_cluster(0x1100), None);
    }

    #[test]
    fn test_split_leading_matches_cross_mapping() {
        for c in 0x11A8..=0x11C2 {
            let split = split_trailing_cluster(c).unwrap();
            assert_eq!(
                Some(split.leading),
                leading_from_trailing(c).map(|l| match (c, l) {
                    // the doubles split into two single letters
                    (0x11A9, _) => 0x1100,
                    (0x11BB, _) => 0x1109,
                    _ => l,
                })
            );
        }
    }
}
