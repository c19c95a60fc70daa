//! Resolver facade over the plain single-actor rule set.
//!
//! [`Resolver`] owns the session [`SpecCache`] and decorates the host's
//! injected rules: skills without a combination tag delegate wholesale to the
//! plain rule set, tagged skills route through the combination algorithms in
//! [`crate::combat`]. A skill whose tag fails to parse is reported unusable
//! and otherwise behaves as a plain skill: configuration mistakes degrade;
//! they never crash an encounter.

use crate::combat::{
    combination_usable, evaluate_damage, evaluate_hit_chance, settle_combination_cost,
};
use crate::env::{Combatant, CostHost, Env, OracleError, SkillOracle};
use crate::error::{ErrorSeverity, ResolverError};
use crate::tag::{CombinationSpec, SpecCache, TagError};
use crate::types::{ActorId, SkillDef};

/// Errors surfaced by [`Resolver::spec`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The skill's combination tag is malformed.
    #[error(transparent)]
    Tag(#[from] TagError),

    /// A required collaborator is missing from the environment.
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl ResolverError for ResolveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Tag(err) => err.severity(),
            Self::Oracle(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Tag(err) => err.error_code(),
            Self::Oracle(err) => err.error_code(),
        }
    }
}

/// Stateful entry point for combination-skill resolution.
///
/// One resolver per battle session. All calls are synchronous and assume the
/// host's turn loop serializes them; the cache is the only state and is
/// populated atomically per skill id on first access.
#[derive(Debug, Default)]
pub struct Resolver {
    cache: SpecCache,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// The parsed combination spec for `skill`, if it has one.
    ///
    /// Display layers use this to render per-participant costs and icons; the
    /// returned spec is stable for the session.
    ///
    /// # Errors
    ///
    /// [`ResolveError::Tag`] for malformed tags, [`ResolveError::Oracle`]
    /// when no catalog is available to resolve name tokens.
    pub fn spec(
        &mut self,
        skill: &SkillDef,
        env: &Env<'_>,
    ) -> Result<Option<&CombinationSpec>, ResolveError> {
        let skills = env.skills()?;
        Ok(self.cache.get_or_parse(skill, skills)?)
    }

    /// Whether `invoker` can use `skill` right now.
    ///
    /// Untagged skills defer to the plain rule; malformed tags answer `false`
    /// (a broken combination must never appear usable).
    ///
    /// # Errors
    ///
    /// Only [`OracleError`] for missing collaborators.
    pub fn is_usable(
        &mut self,
        skill: &SkillDef,
        invoker: ActorId,
        env: &Env<'_>,
    ) -> Result<bool, OracleError> {
        let skills = env.skills()?;
        match self.cache.get_or_parse(skill, skills) {
            Ok(Some(spec)) => combination_usable(skill, spec, invoker, env),
            Ok(None) => Ok(env.rules()?.meets_skill_conditions(invoker, skill)),
            Err(_) => Ok(false),
        }
    }

    /// Applies the full cost of invoking `skill`.
    ///
    /// Settlement mutates roster state through `host`, so this call takes the
    /// catalog directly instead of a read-only environment: the caller must
    /// hold exclusive access to the roster for the duration (the resolver
    /// performs no locking). Must run exactly once per invocation.
    ///
    /// Untagged and malformed skills charge the invoker the plain cost.
    pub fn settle_cost(
        &mut self,
        skill: &SkillDef,
        invoker: ActorId,
        skills: &dyn SkillOracle,
        host: &mut dyn CostHost,
    ) -> Result<(), OracleError> {
        match self.cache.get_or_parse(skill, skills) {
            Ok(Some(spec)) => settle_combination_cost(skill, spec, invoker, skills, host),
            Ok(None) | Err(_) => {
                host.pay_skill_cost(invoker, skill);
                Ok(())
            }
        }
    }

    /// Damage for one invocation of `skill` against `target`.
    ///
    /// Total: every failure mode (malformed tag, formula error, missing
    /// oracle) collapses to `0.0`.
    pub fn damage(
        &mut self,
        skill: &SkillDef,
        invoker: &dyn Combatant,
        target: &dyn Combatant,
        env: &Env<'_>,
    ) -> f64 {
        let spec = self.cached_spec(skill, env);
        evaluate_damage(skill, spec, invoker, target, env)
    }

    /// Hit chance for one invocation of `skill`, as a fraction.
    pub fn hit_chance(
        &mut self,
        skill: &SkillDef,
        invoker: &dyn Combatant,
        env: &Env<'_>,
    ) -> f64 {
        let spec = self.cached_spec(skill, env);
        evaluate_hit_chance(skill, spec, invoker, env)
    }

    /// Forgets every cached spec. Call only after a skill-table reload.
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }

    /// Cached spec if the skill has a well-formed tag, `None` otherwise.
    fn cached_spec(&mut self, skill: &SkillDef, env: &Env<'_>) -> Option<&CombinationSpec> {
        let skills = env.skills().ok()?;
        self.cache.get_or_parse(skill, skills).ok().flatten()
    }
}
