//! Stub collaborators shared by the crate's unit tests.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::env::{Combatant, CostHost, RosterOracle, RuleOracle, SkillOracle, VarsOracle};
use crate::types::{
    ActorId, DamageKind, DamageSpec, HitKind, SkillDef, SkillId, SkillTypeId, StatKind,
};

/// A minimal plain skill definition.
pub fn skill(id: u32, name: &str) -> SkillDef {
    SkillDef {
        id: SkillId(id),
        name: name.to_string(),
        skill_type: SkillTypeId(1),
        hit_kind: HitKind::Physical,
        success_rate: 100,
        damage: DamageSpec {
            kind: DamageKind::HpDamage,
            formula: "a.atk * 4 - b.def * 2".to_string(),
        },
        mp_cost: 0,
        tp_cost: 0,
        required_weapon_types: Vec::new(),
        combination_tag: None,
    }
}

/// A skill carrying a combination tag.
pub fn skill_with_tag(id: u32, tag: &str) -> SkillDef {
    let mut def = skill(id, "Combination");
    def.combination_tag = Some(tag.to_string());
    def
}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Default)]
pub struct StubCatalog {
    skills: Vec<SkillDef>,
}

impl StubCatalog {
    pub fn with_skills(items: impl IntoIterator<Item = (u32, &'static str)>) -> Self {
        Self {
            skills: items.into_iter().map(|(id, name)| skill(id, name)).collect(),
        }
    }

    pub fn push(&mut self, def: SkillDef) {
        self.skills.push(def);
    }
}

impl SkillOracle for StubCatalog {
    fn skill(&self, id: SkillId) -> Option<&SkillDef> {
        self.skills.iter().find(|s| s.id == id)
    }

    fn skill_by_name(&self, name: &str) -> Option<&SkillDef> {
        self.skills
            .iter()
            .filter(|s| s.name == name)
            .min_by_key(|s| s.id)
    }
}

// ============================================================================
// Roster
// ============================================================================

#[derive(Default)]
pub struct StubActor {
    stats: HashMap<StatKind, f64>,
}

impl StubActor {
    pub fn with(mut self, stat: StatKind, value: f64) -> Self {
        self.stats.insert(stat, value);
        self
    }
}

impl Combatant for StubActor {
    fn stat(&self, stat: StatKind) -> f64 {
        self.stats.get(&stat).copied().unwrap_or(0.0)
    }
}

#[derive(Default)]
pub struct StubRoster {
    actors: BTreeMap<ActorId, StubActor>,
    party: BTreeSet<ActorId>,
    npcs: BTreeSet<ActorId>,
}

impl StubRoster {
    /// A roster whose actors are all party members under player control.
    pub fn with_party(ids: impl IntoIterator<Item = u32>) -> Self {
        let mut roster = Self::default();
        for id in ids {
            roster.actors.insert(ActorId(id), StubActor::default());
            roster.party.insert(ActorId(id));
        }
        roster
    }

    pub fn set_actor(&mut self, id: u32, actor: StubActor) {
        self.actors.insert(ActorId(id), actor);
        self.party.insert(ActorId(id));
    }

    pub fn remove_from_party(&mut self, id: u32) {
        self.party.remove(&ActorId(id));
    }

    pub fn mark_npc(&mut self, id: u32) {
        self.npcs.insert(ActorId(id));
    }
}

impl RosterOracle for StubRoster {
    fn actor(&self, id: ActorId) -> Option<&dyn Combatant> {
        self.actors.get(&id).map(|a| a as &dyn Combatant)
    }

    fn is_in_party(&self, id: ActorId) -> bool {
        self.party.contains(&id)
    }

    fn is_player_controlled(&self, id: ActorId) -> bool {
        self.actors.contains_key(&id) && !self.npcs.contains(&id)
    }
}

// ============================================================================
// Plain rule set
// ============================================================================

/// Rule stub where everything passes unless a pair was explicitly blocked.
#[derive(Default)]
pub struct StubRules {
    ineligible: BTreeSet<(ActorId, SkillId)>,
    item_blocked: BTreeSet<ActorId>,
    wrong_weapon: BTreeSet<ActorId>,
    sealed: BTreeSet<(ActorId, SkillId)>,
    type_sealed: BTreeSet<(ActorId, SkillTypeId)>,
}

impl StubRules {
    pub fn block(&mut self, actor: u32, skill: u32) {
        self.ineligible.insert((ActorId(actor), SkillId(skill)));
    }

    pub fn block_items(&mut self, actor: u32) {
        self.item_blocked.insert(ActorId(actor));
    }

    pub fn wrong_weapon(&mut self, actor: u32) {
        self.wrong_weapon.insert(ActorId(actor));
    }

    pub fn seal(&mut self, actor: u32, skill: u32) {
        self.sealed.insert((ActorId(actor), SkillId(skill)));
    }

    pub fn seal_type(&mut self, actor: u32, skill_type: u32) {
        self.type_sealed.insert((ActorId(actor), SkillTypeId(skill_type)));
    }
}

impl RuleOracle for StubRules {
    fn meets_skill_conditions(&self, actor: ActorId, skill: &SkillDef) -> bool {
        !self.ineligible.contains(&(actor, skill.id))
    }

    fn meets_item_conditions(&self, actor: ActorId, _skill: &SkillDef) -> bool {
        !self.item_blocked.contains(&actor)
    }

    fn is_weapon_type_ok(&self, actor: ActorId, _skill: &SkillDef) -> bool {
        !self.wrong_weapon.contains(&actor)
    }

    fn is_skill_sealed(&self, actor: ActorId, skill: SkillId) -> bool {
        self.sealed.contains(&(actor, skill))
    }

    fn is_skill_type_sealed(&self, actor: ActorId, skill_type: SkillTypeId) -> bool {
        self.type_sealed.contains(&(actor, skill_type))
    }
}

/// Cost host that records payments instead of mutating anything.
#[derive(Default)]
pub struct RecordingHost {
    pub payments: Vec<(ActorId, SkillId)>,
}

impl CostHost for RecordingHost {
    fn pay_skill_cost(&mut self, actor: ActorId, skill: &SkillDef) {
        self.payments.push((actor, skill.id));
    }
}

// ============================================================================
// Variable store
// ============================================================================

#[derive(Default)]
pub struct StubVars {
    values: HashMap<usize, f64>,
}

impl StubVars {
    pub fn with(mut self, index: usize, value: f64) -> Self {
        self.values.insert(index, value);
        self
    }
}

impl VarsOracle for StubVars {
    fn value(&self, index: usize) -> Option<f64> {
        self.values.get(&index).copied()
    }
}
