//! Text-level Hangul jaso/syllable conversion
//!
//! This crate applies the `hanjaso-core` algorithms to whole strings,
//! files and streams. Input is converted to codepoints, optionally split
//! into chunks at syllable boundaries, converted sequentially or in
//! parallel, and mapped back into text.
//!
//! ```rust
//! use hanjaso_engine::{Direction, HangulConverter, Input};
//!
//! let converter = HangulConverter::new();
//! let output = converter.convert(Input::from("\u{1112}\u{1161}\u{11AB}")).unwrap();
//! assert_eq!(output.text, "한");
//!
//! let decomposer = HangulConverter::builder()
//!     .direction(Direction::Decompose)
//!     .build()
//!     .unwrap();
//! assert_eq!(decomposer.convert_text("한").unwrap().text.chars().count(), 3);
//! ```

#![warn(missing_docs)]

pub mod chunker;
pub mod config;
pub mod error;
pub mod executor;
pub mod input;
pub mod processor;

// Re-export key types
pub use chunker::ChunkManager;
pub use config::{ChunkPolicy, Direction, EngineConfig};
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor};
pub use input::Input;
pub use processor::{HangulConverter, HangulConverterBuilder, Metadata, Output};

// Re-export from core for convenience
pub use hanjaso_core::{Codepoint, LetterClass};
