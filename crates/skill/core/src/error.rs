//! Common error infrastructure for skill-core.
//!
//! This module provides shared types and traits used across all error types in
//! the crate. Domain-specific errors (e.g. [`crate::tag::TagError`],
//! [`crate::formula::FormulaError`]) are defined in their respective modules
//! alongside the operations they validate.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: Temporary conditions; the same call may succeed later
/// - **Validation**: Invalid input or configuration, should not retry unchanged
/// - **Internal**: Unexpected inconsistencies that require investigation
/// - **Fatal**: Missing wiring; the resolver cannot operate at all
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the condition may clear within the same session.
    ///
    /// Examples: a participant is currently outside the active party
    Recoverable,

    /// Validation error - invalid skill data, should not retry without changes.
    ///
    /// Examples: malformed combination tag, unknown skill name
    Validation,

    /// Internal error - unexpected inconsistency inside the resolver.
    ///
    /// Examples: a formula slot resolved past the participant bound
    Internal,

    /// Fatal error - a required collaborator is missing from the environment.
    ///
    /// Examples: no skill catalog injected, no roster injected
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug or broken wiring.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait implemented by all error types in skill-core.
///
/// Provides uniform severity classification and stable error codes so hosts
/// can log, aggregate, and react to resolver failures without matching on
/// every concrete error enum.
pub trait ResolverError: std::error::Error {
    /// Returns the severity classification of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a stable, machine-readable error code.
    ///
    /// Codes are SCREAMING_SNAKE_CASE and never change once shipped, making
    /// them safe to use in log filters and telemetry.
    fn error_code(&self) -> &'static str;
}
