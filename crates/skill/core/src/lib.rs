//! Combination-skill resolution rules shared across hosts.
//!
//! `skill-core` defines the canonical rules for multi-character combination
//! skills: the tag descriptor parser, the eligibility check, cumulative cost
//! settlement, and damage/hit-chance evaluation. The crate is a pure decision
//! module; every piece of host data (skill catalog, roster, the plain
//! single-actor rule set, the shared variable store) is injected through the
//! oracle traits in [`env`], and the [`resolver::Resolver`] facade decorates
//! those injected rules rather than replacing them.
pub mod combat;
pub mod env;
pub mod error;
pub mod formula;
pub mod resolver;
pub mod tag;
pub mod types;

pub use combat::{combination_usable, evaluate_damage, evaluate_hit_chance, settle_combination_cost};
pub use env::{
    Combatant, CostHost, Env, OracleError, RosterOracle, RuleOracle, SkillOracle, VarsOracle,
};
pub use error::{ErrorSeverity, ResolverError};
pub use formula::{Bindings, Expr, FormulaError, eval_formula};
pub use resolver::{ResolveError, Resolver};
pub use tag::{AccuracyPolicy, CombinationSpec, MAX_PARTICIPANTS, Participant, SpecCache, TagError};
pub use types::{
    ActorId, DamageKind, DamageSpec, HitKind, SkillDef, SkillId, SkillTypeId, StatKind,
    WeaponTypeId,
};

#[cfg(test)]
pub(crate) mod testkit;
