//! The baseline single-actor rule set.
//!
//! [`RuleBook`] is the plain eligibility rule the resolver decorates; it
//! knows nothing about combinations. [`CostBook`] is its mutating
//! counterpart: it applies plain skill costs to party state and keeps a
//! record of every payment for reporting.

use serde::{Deserialize, Serialize};
use skill_core::{ActorId, CostHost, RuleOracle, SkillDef, SkillId, SkillTypeId};

use crate::party::{ActorState, PartyState};

/// Read-only plain rules over a borrowed party.
pub struct RuleBook<'a> {
    party: &'a PartyState,
}

impl<'a> RuleBook<'a> {
    pub fn new(party: &'a PartyState) -> Self {
        Self { party }
    }

    fn can_pay(state: &ActorState, skill: &SkillDef) -> bool {
        state.mp.current >= skill.mp_cost && state.tp.current >= skill.tp_cost
    }
}

impl RuleOracle for RuleBook<'_> {
    fn meets_skill_conditions(&self, actor: ActorId, skill: &SkillDef) -> bool {
        let Some(state) = self.party.actor(actor) else {
            return false;
        };
        state.knows(skill.id)
            && Self::can_pay(state, skill)
            && self.meets_item_conditions(actor, skill)
            && self.is_weapon_type_ok(actor, skill)
            && !self.is_skill_sealed(actor, skill.id)
            && !self.is_skill_type_sealed(actor, skill.skill_type)
    }

    fn meets_item_conditions(&self, actor: ActorId, _skill: &SkillDef) -> bool {
        // A downed character cannot act at all.
        self.party
            .actor(actor)
            .is_some_and(|state| state.hp.current > 0)
    }

    fn is_weapon_type_ok(&self, actor: ActorId, skill: &SkillDef) -> bool {
        if skill.required_weapon_types.is_empty() {
            return true;
        }
        self.party.actor(actor).is_some_and(|state| {
            state
                .weapon_type
                .is_some_and(|wtype| skill.required_weapon_types.contains(&wtype))
        })
    }

    fn is_skill_sealed(&self, actor: ActorId, skill: SkillId) -> bool {
        self.party
            .actor(actor)
            .is_some_and(|state| state.sealed_skills.contains(&skill))
    }

    fn is_skill_type_sealed(&self, actor: ActorId, skill_type: SkillTypeId) -> bool {
        self.party
            .actor(actor)
            .is_some_and(|state| state.sealed_skill_types.contains(&skill_type))
    }
}

/// One applied cost deduction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Who paid.
    pub actor: ActorId,
    /// Which skill's declared cost was charged.
    pub skill: SkillId,
    pub mp: u32,
    pub tp: u32,
}

/// Mutating plain cost rule over an exclusively borrowed party.
///
/// Payments deduct MP then TP per the paid skill's declaration and are
/// recorded in order; [`CostBook::into_payments`] hands the record back for
/// the resolution report.
pub struct CostBook<'a> {
    party: &'a mut PartyState,
    payments: Vec<Payment>,
}

impl<'a> CostBook<'a> {
    pub fn new(party: &'a mut PartyState) -> Self {
        Self {
            party,
            payments: Vec::new(),
        }
    }

    pub fn into_payments(self) -> Vec<Payment> {
        self.payments
    }
}

impl CostHost for CostBook<'_> {
    fn pay_skill_cost(&mut self, actor: ActorId, skill: &SkillDef) {
        if let Some(state) = self.party.actor_mut(actor) {
            state.mp.spend(skill.mp_cost);
            state.tp.spend(skill.tp_cost);
            self.payments.push(Payment {
                actor,
                skill: skill.id,
                mp: skill.mp_cost,
                tp: skill.tp_cost,
            });
        }
    }
}
