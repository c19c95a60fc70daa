//! Read-only access to the host's skill catalog.

use crate::types::{SkillDef, SkillId};

/// Lookup into the static skill catalog.
///
/// Skill definitions are assumed immutable for the session; the spec cache
/// relies on that (see [`crate::tag::SpecCache`]).
pub trait SkillOracle {
    /// Returns the skill with the given id, if it exists.
    fn skill(&self, id: SkillId) -> Option<&SkillDef>;

    /// Returns the skill whose name matches `name` exactly.
    ///
    /// Combination tags may reference component skills by display name; the
    /// parser resolves those here. When several skills share a name, the
    /// lowest id wins.
    fn skill_by_name(&self, name: &str) -> Option<&SkillDef>;
}
