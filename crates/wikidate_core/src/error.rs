//! Error types for the calendar-title codecs

use chrono::NaiveDate;
use thiserror::Error;

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, DateError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// Input text does not match the compiled pattern
    #[error("'{text}' does not match pattern '{pattern}'")]
    PatternMismatch { pattern: String, text: String },

    /// Text matched, but the decoded value renders differently
    #[error("'{text}' decodes to {value}, which renders as '{rendered}'")]
    RoundTripMismatch {
        text: String,
        value: i64,
        rendered: String,
    },

    /// Captured numbers are too large to compute a value from
    #[error("'{text}' decodes to a value beyond the 64-bit range")]
    Overflow { text: String },

    #[error("value {value} is outside the valid range {min}..{max}")]
    OutOfRange { value: i64, min: i64, max: i64 },

    #[error("format '{kind}' has no entry for language '{lang}'")]
    UnknownLanguage { kind: String, lang: String },

    #[error("unknown format kind '{0}'")]
    UnknownFormatKind(String),

    /// Encoder produced a different number of values than the pattern has slots
    #[error("pattern '{pattern}' has {expected} placeholder(s) but the encoder produced {actual}")]
    ArityMismatch {
        pattern: String,
        expected: usize,
        actual: usize,
    },

    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("'{text}' is not a valid {system} numeral")]
    InvalidNumeral { system: &'static str, text: String },

    #[error("{value} cannot be written with {system} numerals")]
    UnrepresentableValue { system: &'static str, value: i64 },

    #[error("no branch decodes '{text}'")]
    NoMatchingBranch { text: String },

    #[error("no branch accepts value {value}")]
    NoBranchForValue { value: i64 },

    #[error("'{text}' is not a known name")]
    UnknownName { text: String },

    #[error("invalid month number {0}")]
    InvalidMonth(u32),

    #[error("shifting {date} by {months} month(s) leaves the supported calendar")]
    CalendarOverflow { date: NaiveDate, months: i64 },
}

impl DateError {
    /// True for errors that only mean "this codec does not apply to the input".
    ///
    /// Auto-detection and multi-branch decoding swallow these and move on to
    /// the next candidate. Everything else points at a caller or data bug.
    pub fn is_no_match(&self) -> bool {
        matches!(
            self,
            Self::PatternMismatch { .. }
                | Self::RoundTripMismatch { .. }
                | Self::Overflow { .. }
                | Self::OutOfRange { .. }
                | Self::InvalidNumeral { .. }
                | Self::UnrepresentableValue { .. }
                | Self::NoMatchingBranch { .. }
                | Self::NoBranchForValue { .. }
                | Self::UnknownName { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::DateError;

    #[test]
    fn mismatch_errors_are_recoverable() {
        let error = DateError::PatternMismatch {
            pattern: "%d BC".to_string(),
            text: "hello".to_string(),
        };
        assert!(error.is_no_match());
        assert_eq!(error.to_string(), "'hello' does not match pattern '%d BC'");
    }

    #[test]
    fn data_errors_are_not_recoverable() {
        let error = DateError::ArityMismatch {
            pattern: "%d-%d".to_string(),
            expected: 2,
            actual: 1,
        };
        assert!(!error.is_no_match());
        assert!(!DateError::UnknownFormatKind("Eon".to_string()).is_no_match());
    }
}
