//! Error types for entry encoding and decoding.

use thiserror::Error;

/// Errors that can occur while encoding or decoding an entry.
#[derive(Debug, Error)]
pub enum EntryError {
    /// Fewer bytes were available than a fixed or declared-length field requires.
    #[error("truncated input: {field} needs {needed} bytes, only {available} available")]
    TruncatedInput {
        field: &'static str,
        needed: usize,
        available: usize,
    },

    /// The declared ExtIDs block size does not partition into whole
    /// (length prefix, payload) pairs.
    #[error(
        "malformed ExtID block: item at block offset {offset} needs {needed} bytes, \
         {remaining} left in block"
    )]
    MalformedExtIdBlock {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// A length does not fit in its wire field.
    #[error("{field} length {len} exceeds maximum of {max}")]
    ValueTooLarge {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// The byte sink rejected a write.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl EntryError {
    /// Whether the error came from malformed or short input bytes.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            EntryError::TruncatedInput { .. } | EntryError::MalformedExtIdBlock { .. }
        )
    }
}

/// Result type for entry operations.
pub type Result<T> = std::result::Result<T, EntryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_display_reports_counts() {
        let err = EntryError::TruncatedInput {
            field: "chain_id",
            needed: 32,
            available: 5,
        };
        assert_eq!(
            err.to_string(),
            "truncated input: chain_id needs 32 bytes, only 5 available"
        );
        assert!(err.is_decode_error());
    }

    #[test]
    fn test_value_too_large_is_not_decode_error() {
        let err = EntryError::ValueTooLarge {
            field: "ext_id",
            len: 70_000,
            max: 65_535,
        };
        assert!(!err.is_decode_error());
        assert!(err.to_string().contains("70000"));
    }
}
