use panchang_search::SearchError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Unified error type for the panchang facade and CLI.
///
/// Mirrors the three-kind taxonomy of the engine: malformed input,
/// astronomical non-computability, and internal invariant violations.
/// Each variant carries the process exit code the CLI uses for it.
#[derive(Debug, Clone, PartialEq)]
pub enum PanchangError {
    /// Malformed CLI input or out-of-range year/month/day/location. Exit 1.
    ArgumentError(String),
    /// Sunrise/sunset not computable at the given location and date (polar
    /// day/night). Exit 2.
    AstronomicalFailure(String),
    /// Bisection failed to converge, a series produced a non-finite value,
    /// or a round-trip invariant was violated. Indicates an implementation
    /// bug; never retried. Exit 3.
    InternalInvariantViolation(String),
}

impl PanchangError {
    /// The process exit code the CLI reports for this error kind.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ArgumentError(_) => 1,
            Self::AstronomicalFailure(_) => 2,
            Self::InternalInvariantViolation(_) => 3,
        }
    }
}

impl Display for PanchangError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArgumentError(msg) => write!(f, "argument error: {msg}"),
            Self::AstronomicalFailure(msg) => write!(f, "astronomical failure: {msg}"),
            Self::InternalInvariantViolation(msg) => {
                write!(f, "internal invariant violation: {msg}")
            }
        }
    }
}

impl Error for PanchangError {}

impl From<SearchError> for PanchangError {
    fn from(e: SearchError) -> Self {
        Self::InternalInvariantViolation(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_match_spec() {
        assert_eq!(PanchangError::ArgumentError("x".into()).exit_code(), 1);
        assert_eq!(PanchangError::AstronomicalFailure("x".into()).exit_code(), 2);
        assert_eq!(
            PanchangError::InternalInvariantViolation("x".into()).exit_code(),
            3
        );
    }

    #[test]
    fn display_includes_message() {
        let e = PanchangError::ArgumentError("month out of range".into());
        assert!(e.to_string().contains("month out of range"));
    }
}
