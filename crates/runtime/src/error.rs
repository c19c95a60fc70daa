//! Runtime orchestration errors.

use skill_core::{ActorId, OracleError, SkillId};

/// Convenient result alias for runtime operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Errors surfaced by [`crate::BattleRuntime`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// The requested skill id is not in the catalog.
    #[error("{0} is not in the catalog")]
    UnknownSkill(SkillId),

    /// The requested actor id is not in the roster.
    #[error("{0} is not in the roster")]
    UnknownActor(ActorId),

    /// The invocation was rejected by the eligibility check.
    #[error("{invoker} cannot use {skill} right now")]
    NotUsable { invoker: ActorId, skill: SkillId },

    /// A collaborator was missing; indicates broken runtime wiring.
    #[error(transparent)]
    Oracle(#[from] OracleError),
}
