//! Oracle access errors.

use crate::error::{ErrorSeverity, ResolverError};

/// Errors that occur when accessing collaborator oracles.
///
/// A missing oracle means the host wired the environment incompletely; the
/// resolver cannot invent a catalog or a roster, so these are fatal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// SkillOracle is not available in the environment.
    #[error("SkillOracle not available")]
    SkillsNotAvailable,

    /// RosterOracle is not available in the environment.
    #[error("RosterOracle not available")]
    RosterNotAvailable,

    /// RuleOracle is not available in the environment.
    #[error("RuleOracle not available")]
    RulesNotAvailable,

    /// VarsOracle is not available in the environment.
    #[error("VarsOracle not available")]
    VarsNotAvailable,
}

impl ResolverError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            SkillsNotAvailable => "ORACLE_SKILLS_NOT_AVAILABLE",
            RosterNotAvailable => "ORACLE_ROSTER_NOT_AVAILABLE",
            RulesNotAvailable => "ORACLE_RULES_NOT_AVAILABLE",
            VarsNotAvailable => "ORACLE_VARS_NOT_AVAILABLE",
        }
    }
}
