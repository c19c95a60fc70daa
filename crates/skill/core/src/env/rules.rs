//! The plain single-actor rule set.
//!
//! These traits are the extension point the resolver decorates: the host's
//! ordinary eligibility and cost rules, untouched by any combination logic.
//! The read side lives in [`RuleOracle`] and travels inside the environment;
//! the mutating side is [`CostHost`], passed `&mut` only to cost settlement.

use crate::types::{ActorId, SkillDef, SkillId, SkillTypeId};

/// The host's baseline usability rules for one character and one skill.
pub trait RuleOracle {
    /// Full plain-skill eligibility: the character knows the skill, can pay
    /// its cost, and passes every usage gate.
    fn meets_skill_conditions(&self, actor: ActorId, skill: &SkillDef) -> bool;

    /// Usable-item conditions gate (the character can act, is not muted for
    /// this kind of skill, and so on).
    fn meets_item_conditions(&self, actor: ActorId, skill: &SkillDef) -> bool;

    /// Weapon-type gate: the character's equipped weapon satisfies the
    /// skill's requirement.
    fn is_weapon_type_ok(&self, actor: ActorId, skill: &SkillDef) -> bool;

    /// Returns true if this specific skill is sealed for the character.
    fn is_skill_sealed(&self, actor: ActorId, skill: SkillId) -> bool;

    /// Returns true if the whole skill-type group is sealed for the character.
    fn is_skill_type_sealed(&self, actor: ActorId, skill_type: SkillTypeId) -> bool;
}

/// The host's baseline cost-payment rule.
///
/// Settlement calls this once per participant with that participant's own
/// component skill, so each character pays in whatever resource their
/// component declares (HP, MP, TP, items, custom currencies).
pub trait CostHost {
    /// Deducts `skill`'s declared cost from `actor`.
    ///
    /// Must apply whatever the host's plain rule would deduct for a normal
    /// single-actor use of `skill` by `actor`.
    fn pay_skill_cost(&mut self, actor: ActorId, skill: &SkillDef);
}
