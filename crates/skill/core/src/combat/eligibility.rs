//! Combination eligibility.

use crate::env::{Env, OracleError};
use crate::tag::CombinationSpec;
use crate::types::{ActorId, SkillDef};

/// Decides whether `invoker` can currently use the combination skill.
///
/// The check short-circuits: the first missing or ineligible participant
/// fails the whole combination without evaluating the rest. Duplicate
/// participant entries are each checked independently.
///
/// An invoker listed among the participants must additionally pass the
/// invoker-specific usage gates for the combination skill itself (usable-item
/// conditions, weapon type, both seals). An invoker *not* listed falls back
/// to the plain single-actor rule for the combination skill, which is how a
/// character outside the declared pair uses it as an effective N+1-tech.
///
/// # Errors
///
/// Only [`OracleError`] when the environment is missing the roster, rule set,
/// or catalog; eligibility itself never fails, it answers `false`.
pub fn combination_usable(
    skill: &SkillDef,
    spec: &CombinationSpec,
    invoker: ActorId,
    env: &Env<'_>,
) -> Result<bool, OracleError> {
    let roster = env.roster()?;
    let rules = env.rules()?;
    let skills = env.skills()?;

    // Hostile and otherwise non-player-controlled units never combine.
    if !roster.is_player_controlled(invoker) {
        return Ok(false);
    }

    let mut invoker_listed = false;
    for participant in spec.participants() {
        if !roster.is_in_party(participant.actor) {
            return Ok(false);
        }

        // The participant must satisfy the plain rule for their own component
        // skill; whether they know the combination skill itself is irrelevant.
        let Some(component) = skills.skill(participant.skill) else {
            return Ok(false);
        };
        if !rules.meets_skill_conditions(participant.actor, component) {
            return Ok(false);
        }

        if participant.actor == invoker {
            invoker_listed = true;
            if !(rules.meets_item_conditions(invoker, skill)
                && rules.is_weapon_type_ok(invoker, skill)
                && !rules.is_skill_sealed(invoker, skill.id)
                && !rules.is_skill_type_sealed(invoker, skill.skill_type))
            {
                return Ok(false);
            }
        }
    }

    if invoker_listed {
        Ok(true)
    } else {
        Ok(rules.meets_skill_conditions(invoker, skill))
    }
}
