//! Mutable roster state.
//!
//! [`PartyState`] owns every known character and tracks which of them are in
//! the active party. It implements the resolver's read-only roster oracle;
//! mutation happens through [`PartyState::actor_mut`], which cost settlement
//! reaches via [`crate::rules::CostBook`].

use std::collections::{BTreeMap, BTreeSet};

use skill_content::{ActorRecord, RosterData, StatSheet};
use skill_core::{ActorId, Combatant, RosterOracle, SkillId, SkillTypeId, StatKind, WeaponTypeId};

/// Integer resource meter (HP, MP, TP) tracked per character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    /// A meter at its maximum.
    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    /// Deducts up to `amount`, saturating at zero.
    pub fn spend(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// Restores `amount`, capped at the maximum.
    pub fn restore(&mut self, amount: u32) {
        self.current = (self.current + amount).min(self.maximum);
    }
}

/// One character's live battle state.
#[derive(Clone, Debug)]
pub struct ActorState {
    pub id: ActorId,
    pub name: String,
    pub stats: StatSheet,
    pub hp: ResourceMeter,
    pub mp: ResourceMeter,
    pub tp: ResourceMeter,
    pub known_skills: BTreeSet<SkillId>,
    pub sealed_skills: BTreeSet<SkillId>,
    pub sealed_skill_types: BTreeSet<SkillTypeId>,
    pub weapon_type: Option<WeaponTypeId>,
    pub player_controlled: bool,
}

impl ActorState {
    /// Builds battle state from a loaded roster record, meters full.
    pub fn from_record(record: &ActorRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            stats: record.stats.clone(),
            hp: ResourceMeter::full(record.stats.mhp),
            mp: ResourceMeter::full(record.stats.mmp),
            tp: ResourceMeter::new(0, 100),
            known_skills: record.known_skills.iter().copied().collect(),
            sealed_skills: record.sealed_skills.iter().copied().collect(),
            sealed_skill_types: record.sealed_skill_types.iter().copied().collect(),
            weapon_type: record.weapon_type,
            player_controlled: record.player_controlled,
        }
    }

    /// Returns true if the character has learned the skill.
    pub fn knows(&self, skill: SkillId) -> bool {
        self.known_skills.contains(&skill)
    }

    /// Learns a skill in place (used for N+1-tech setups).
    pub fn learn(&mut self, skill: SkillId) {
        self.known_skills.insert(skill);
    }
}

impl Combatant for ActorState {
    fn stat(&self, stat: StatKind) -> f64 {
        match stat {
            StatKind::Mhp => f64::from(self.stats.mhp),
            StatKind::Mmp => f64::from(self.stats.mmp),
            StatKind::Hp => f64::from(self.hp.current),
            StatKind::Mp => f64::from(self.mp.current),
            StatKind::Tp => f64::from(self.tp.current),
            StatKind::Atk => f64::from(self.stats.atk),
            StatKind::Def => f64::from(self.stats.def),
            StatKind::Mat => f64::from(self.stats.mat),
            StatKind::Mdf => f64::from(self.stats.mdf),
            StatKind::Agi => f64::from(self.stats.agi),
            StatKind::Luk => f64::from(self.stats.luk),
            StatKind::Level => f64::from(self.stats.level),
            StatKind::Hit => self.stats.hit,
            StatKind::Eva => self.stats.eva,
            StatKind::Cri => self.stats.cri,
        }
    }
}

/// Every known character plus the active-party membership.
#[derive(Clone, Debug, Default)]
pub struct PartyState {
    actors: BTreeMap<ActorId, ActorState>,
    members: Vec<ActorId>,
}

impl PartyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a party from loaded roster data; every record starts active.
    pub fn from_roster(data: &RosterData) -> Self {
        let mut party = Self::new();
        for record in &data.members {
            party.add_member(ActorState::from_record(record));
        }
        party
    }

    /// Registers a character and puts them in the active party.
    pub fn add_member(&mut self, state: ActorState) {
        if !self.members.contains(&state.id) {
            self.members.push(state.id);
        }
        self.actors.insert(state.id, state);
    }

    /// Removes a character from the active party, keeping their state.
    pub fn remove_from_party(&mut self, id: ActorId) {
        self.members.retain(|member| *member != id);
    }

    /// Returns a character to the active party.
    pub fn return_to_party(&mut self, id: ActorId) {
        if self.actors.contains_key(&id) && !self.members.contains(&id) {
            self.members.push(id);
        }
    }

    pub fn actor(&self, id: ActorId) -> Option<&ActorState> {
        self.actors.get(&id)
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut ActorState> {
        self.actors.get_mut(&id)
    }

    /// Active party members in join order.
    pub fn members(&self) -> &[ActorId] {
        &self.members
    }
}

impl RosterOracle for PartyState {
    fn actor(&self, id: ActorId) -> Option<&dyn Combatant> {
        self.actors.get(&id).map(|state| state as &dyn Combatant)
    }

    fn is_in_party(&self, id: ActorId) -> bool {
        self.members.contains(&id)
    }

    fn is_player_controlled(&self, id: ActorId) -> bool {
        self.actors
            .get(&id)
            .is_some_and(|state| state.player_controlled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32) -> ActorRecord {
        ActorRecord {
            id: ActorId(id),
            name: format!("Actor {id}"),
            stats: StatSheet {
                mhp: 100,
                mmp: 40,
                ..StatSheet::default()
            },
            known_skills: vec![SkillId(3)],
            sealed_skills: Vec::new(),
            sealed_skill_types: Vec::new(),
            weapon_type: None,
            player_controlled: true,
        }
    }

    #[test]
    fn meters_start_full_and_clamp() {
        let mut state = ActorState::from_record(&record(1));
        assert_eq!(state.hp.current, 100);
        assert_eq!(state.mp.current, 40);

        state.mp.spend(55);
        assert_eq!(state.mp.current, 0);
        state.hp.spend(30);
        state.hp.restore(999);
        assert_eq!(state.hp.current, 100);
    }

    #[test]
    fn party_membership_is_separate_from_existence() {
        let mut party = PartyState::new();
        party.add_member(ActorState::from_record(&record(1)));
        party.add_member(ActorState::from_record(&record(2)));

        party.remove_from_party(ActorId(2));
        assert!(party.actor(ActorId(2)).is_some());
        assert!(!party.is_in_party(ActorId(2)));
        assert!(party.is_player_controlled(ActorId(2)));

        party.return_to_party(ActorId(2));
        assert!(party.is_in_party(ActorId(2)));
    }

    #[test]
    fn combatant_stats_read_meters_for_current_resources() {
        let mut state = ActorState::from_record(&record(1));
        state.mp.spend(10);
        assert_eq!(state.stat(StatKind::Mp), 30.0);
        assert_eq!(state.stat(StatKind::Mhp), 100.0);
    }
}
