//! Error types for prop reading and declaration parsing.
//!
//! The resolution pipeline itself never fails. Errors only surface at the
//! edges: decoding prop-bag text, the strict prop reader, and parsing
//! declaration blocks back into pairs.

use thiserror::Error;

/// Errors reported while reading a prop bag.
///
/// The lenient reader only produces [`PropsError::Parse`]; every other
/// variant comes from the strict reader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropsError {
    /// The input text is not valid JSON or YAML.
    #[error("failed to parse props: {message}")]
    Parse { message: String },

    /// The prop bag is not a mapping.
    #[error("props must be a mapping, got {found}")]
    NotAMapping { found: &'static str },

    /// A gap or spacing size is not an integer in `0..=6`.
    #[error("invalid gap size {value} for '{field}' (expected an integer 0-6)")]
    InvalidGapSize { field: String, value: String },

    /// A field holds a value of the wrong kind.
    #[error("invalid value for '{field}': expected {expected}, got {found}")]
    InvalidValue {
        field: String,
        expected: &'static str,
        found: String,
    },

    /// A spacing definition contains a key other than the seven spacing fields.
    #[error("unknown spacing key '{key}' in '{field}'")]
    UnknownSpacingKey { field: String, key: String },

    /// A per-breakpoint mapping contains a key other than `sm`, `md` or `lg`.
    #[error("unknown breakpoint '{key}' in '{field}'")]
    UnknownBreakpoint { field: String, key: String },

    /// The `type` prop is neither `padding` nor `margin`.
    #[error("unknown spacing type '{value}' (expected padding or margin)")]
    UnknownSpacingType { value: String },
}

/// Result type for prop reading.
pub type Result<T> = std::result::Result<T, PropsError>;

/// Error returned when a declaration block is not valid CSS.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    /// The tokenizer rejected a declaration.
    #[error("invalid declaration on line {line}: {message}")]
    Syntax { line: u32, message: String },
}
