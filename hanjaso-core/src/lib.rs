//! Hangul jaso classification and syllable composition
//!
//! This crate converts between decomposed Hangul letters (jaso: leading
//! consonant, vowel, trailing consonant) and precomposed syllable blocks.
//! Everything here is a pure function over constant tables; there is no
//! state, no allocation outside the owned converters, and no I/O.
//!
//! # Architecture
//!
//! Components are layered leaf-first:
//! - **Classifier**: codepoint range tests ([`class`])
//! - **Compatibility mapper**: isolated-letter forms and leading/trailing
//!   cross mapping ([`compat`])
//! - **Cluster compressor**: merging two letters into a compound letter
//!   ([`cluster`])
//! - **Composer**: the syllable arithmetic ([`syllable`])
//! - **Segmenter**: syllable candidate boundaries ([`segment`])
//! - **Converter**: whole-sequence conversion ([`convert`])
//!
//! # Example
//!
//! ```rust
//! use hanjaso_core::{compose, decompose, jaso_to_syllables};
//!
//! // ㅎ ㅏ ㄴ ㄱ ㅡ ㄹ
//! let jaso = [0x1112, 0x1161, 0x11AB, 0x1100, 0x1173, 0x11AF];
//! assert_eq!(jaso_to_syllables(&jaso), vec![0xD55C, 0xAE00]); // 한글
//!
//! assert_eq!(compose(0x1100, 0x1161, None), Some(0xAC00));
//! assert_eq!(decompose(0xAC00).map(|j| j.vowel), Some(0x1161));
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod class;
pub mod cluster;
pub mod compat;
pub mod constants;
pub mod convert;
pub mod segment;
pub mod syllable;

// Re-export key types
pub use class::{
    classify, is_compat_letter, is_jaso, is_leading, is_leading_conjoinable, is_syllable,
    is_trailing, is_trailing_conjoinable, is_vowel, is_vowel_conjoinable, LetterClass,
};
pub use cluster::{compress_leading, compress_trailing, compress_vowel, Cluster, ClusterKind};
pub use compat::{
    leading_from_trailing, split_trailing_cluster, to_compat_letter, trailing_from_leading,
    TrailingSplit,
};
pub use constants::Codepoint;
pub use convert::{
    build_syllable, jaso_to_syllables_into, jaso_to_syllables_progress, Progress, SourceLen,
};
#[cfg(feature = "alloc")]
pub use convert::{jaso_to_compat_letters, jaso_to_syllables, syllables_to_jaso};
pub use segment::{is_syllable_boundary, spans, syllable_span_len, Spans};
pub use syllable::{compose, decompose, Jaso};
