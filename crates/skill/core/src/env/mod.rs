//! Traits describing the host collaborators the resolver reads.
//!
//! Oracles expose the skill catalog, the character roster, the plain
//! single-actor rule set, and the shared variable store. The [`Env`]
//! aggregate bundles them so resolver operations can access everything they
//! need without hard coupling to concrete host implementations.
mod catalog;
mod error;
mod roster;
mod rules;
mod vars;

pub use catalog::SkillOracle;
pub use error::OracleError;
pub use roster::{Combatant, RosterOracle};
pub use rules::{CostHost, RuleOracle};
pub use vars::VarsOracle;

/// Aggregates the read-only oracles required by resolver operations.
///
/// Every field is optional so hosts and tests can wire only what an operation
/// actually touches; accessing a missing oracle yields a fatal
/// [`OracleError`].
#[derive(Clone, Copy)]
pub struct Env<'a> {
    skills: Option<&'a dyn SkillOracle>,
    roster: Option<&'a dyn RosterOracle>,
    rules: Option<&'a dyn RuleOracle>,
    vars: Option<&'a dyn VarsOracle>,
}

impl<'a> Env<'a> {
    pub fn new(
        skills: Option<&'a dyn SkillOracle>,
        roster: Option<&'a dyn RosterOracle>,
        rules: Option<&'a dyn RuleOracle>,
        vars: Option<&'a dyn VarsOracle>,
    ) -> Self {
        Self {
            skills,
            roster,
            rules,
            vars,
        }
    }

    pub fn with_all(
        skills: &'a dyn SkillOracle,
        roster: &'a dyn RosterOracle,
        rules: &'a dyn RuleOracle,
        vars: &'a dyn VarsOracle,
    ) -> Self {
        Self::new(Some(skills), Some(roster), Some(rules), Some(vars))
    }

    pub fn empty() -> Self {
        Self {
            skills: None,
            roster: None,
            rules: None,
            vars: None,
        }
    }

    /// Returns the SkillOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SkillsNotAvailable` if no catalog was provided.
    pub fn skills(&self) -> Result<&'a dyn SkillOracle, OracleError> {
        self.skills.ok_or(OracleError::SkillsNotAvailable)
    }

    /// Returns the RosterOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RosterNotAvailable` if no roster was provided.
    pub fn roster(&self) -> Result<&'a dyn RosterOracle, OracleError> {
        self.roster.ok_or(OracleError::RosterNotAvailable)
    }

    /// Returns the RuleOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RulesNotAvailable` if no rule set was provided.
    pub fn rules(&self) -> Result<&'a dyn RuleOracle, OracleError> {
        self.rules.ok_or(OracleError::RulesNotAvailable)
    }

    /// Returns the VarsOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::VarsNotAvailable` if no variable store was provided.
    pub fn vars(&self) -> Result<&'a dyn VarsOracle, OracleError> {
        self.vars.ok_or(OracleError::VarsNotAvailable)
    }
}

impl std::fmt::Debug for Env<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Env")
            .field("skills", &self.skills.is_some())
            .field("roster", &self.roster.is_some())
            .field("rules", &self.rules.is_some())
            .field("vars", &self.vars.is_some())
            .finish()
    }
}
