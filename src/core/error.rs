use thiserror::Error;

/// Why a candidate identifier was rejected.
///
/// The boolean `is_valid_*` functions collapse all of these into `false`;
/// the `parse_*` functions return them for callers that want the reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SsnError {
    /// Nothing left after stripping separators.
    #[error("identifier is empty")]
    Empty,

    /// Wrong number of characters after normalization.
    #[error("expected {expected} characters, got {actual}")]
    InvalidLength {
        /// Required length for this identifier.
        expected: usize,
        /// Length of the normalized input.
        actual: usize,
    },

    /// Wrong character class or missing mandatory prefix.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// A character that can never appear in this slot.
    #[error("invalid character '{found}' at position {position}")]
    InvalidCharacter {
        /// 0-indexed position in the normalized identifier.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// Structure is fine but the check character/digits do not match.
    #[error("checksum mismatch: expected {expected}, found {found}")]
    ChecksumMismatch {
        /// Check value computed from the payload.
        expected: String,
        /// Check value present in the input.
        found: String,
    },
}

/// A single validation failure reported by [`SsnValidator`](crate::validator::SsnValidator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the validated field (e.g. "ssn" or "employees[2].ssn").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    /// Create a validation error for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
