//! Engine error types

use thiserror::Error;

/// Errors raised while converting text
#[derive(Error, Debug)]
pub enum EngineError {
    /// I/O error while reading an input source
    #[error("I/O error: {0}")]
    IoError(String),

    /// Input bytes were not valid UTF-8
    #[error("encoding error: {0}")]
    EncodingError(String),

    /// A converted codepoint is not a Unicode scalar value
    #[error("invalid codepoint U+{value:04X} at position {position}")]
    InvalidCodepoint {
        /// The offending value
        value: u32,
        /// Index in the converted codepoint sequence
        position: usize,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// No valid chunk boundary could be found
    #[error("invalid chunk boundary at position {position}")]
    InvalidChunkBoundary {
        /// The codepoint position where chunking stalled
        position: usize,
    },

    /// Parallel execution error
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    ParallelError(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for EngineError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        EngineError::EncodingError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_codepoint_message() {
        let err = EngineError::InvalidCodepoint {
            value: 0xD800,
            position: 3,
        };
        assert_eq!(err.to_string(), "invalid codepoint U+D800 at position 3");
    }

    #[test]
    fn test_from_utf8_error() {
        let err: EngineError = String::from_utf8(vec![0xFF]).unwrap_err().into();
        assert!(matches!(err, EngineError::EncodingError(_)));
    }
}
