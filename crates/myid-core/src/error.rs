//! # Error Types: Structured Error Hierarchy
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Lenient constructors never produce errors; a structural mismatch is
//!   an ordinary invalid value.
//! - Strict constructors report [`FormatError`] with the offending input.
//! - Decoding a stored field mapping reports [`CodecError`]. A malformed
//!   mapping never degrades into a silently invalid value.

use thiserror::Error;

/// Strict-mode parse failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The input does not have the `YYMMDD-PB-###G` shape.
    #[error("not a valid identity number: {0:?}")]
    InvalidIdentityNumber(String),

    /// The embedded birth date is not a real calendar date.
    #[error("identity number {input:?} carries an impossible birth date {digits:?}")]
    InvalidBirthDate {
        /// The full input string.
        input: String,
        /// The six `YYMMDD` digits that failed calendar validation.
        digits: String,
    },

    /// The input does not match the plate number grammar.
    #[error("not a valid plate number: {0:?}")]
    InvalidPlateNumber(String),

    /// The plate number is outside the range its prefix family allows.
    #[error("plate number {number} is outside {min}..={max} for prefix {prefix:?}")]
    NumberOutOfRange {
        /// Normalized prefix.
        prefix: String,
        /// Parsed number.
        number: u16,
        /// Lowest number the family issues.
        min: u16,
        /// Highest number the family issues.
        max: u16,
    },

    /// The suffix is not one the prefix family issues.
    #[error("suffix {suffix:?} is not issued for prefix {prefix:?}")]
    SuffixNotAllowed {
        /// Normalized prefix.
        prefix: String,
        /// Normalized suffix.
        suffix: String,
    },

    /// The name does not identify a plate prefix family.
    #[error("unknown plate family: {0:?}")]
    UnknownPlateFamily(String),
}

/// Error while encoding or decoding a persisted field mapping.
#[derive(Error, Debug)]
pub enum CodecError {
    /// JSON serialization or deserialization failed.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The encoded value is not a JSON object.
    #[error("expected a flat field mapping, got {0}")]
    NotAMapping(&'static str),

    /// A field holds a nested object, an array, or a float.
    #[error("field {key:?} must hold a string, an integer, or null")]
    NotFlat {
        /// Name of the offending field.
        key: String,
    },

    /// The mapping decoded, but a field holds a value that cannot be
    /// rebuilt into the value type.
    #[error("invalid field {field}: {reason}")]
    InvalidField {
        /// Name of the offending field as it appears in the mapping.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}
