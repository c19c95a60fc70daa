//! Concrete skill-catalog oracle.

use std::collections::BTreeMap;

use skill_core::{SkillDef, SkillId, SkillOracle};

/// In-memory skill catalog serving the resolver's lookups.
#[derive(Clone, Debug, Default)]
pub struct SkillCatalog {
    skills: BTreeMap<SkillId, SkillDef>,
}

impl SkillCatalog {
    /// Builds a catalog from loaded definitions. Later duplicates of an id
    /// replace earlier ones.
    pub fn from_defs(defs: impl IntoIterator<Item = SkillDef>) -> Self {
        Self {
            skills: defs.into_iter().map(|def| (def.id, def)).collect(),
        }
    }

    pub fn get(&self, id: SkillId) -> Option<&SkillDef> {
        self.skills.get(&id)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl SkillOracle for SkillCatalog {
    fn skill(&self, id: SkillId) -> Option<&SkillDef> {
        self.skills.get(&id)
    }

    fn skill_by_name(&self, name: &str) -> Option<&SkillDef> {
        // BTreeMap iterates in id order, so name collisions resolve to the
        // lowest id.
        self.skills.values().find(|def| def.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skill_core::{DamageSpec, HitKind, SkillTypeId};

    fn def(id: u32, name: &str) -> SkillDef {
        SkillDef {
            id: SkillId(id),
            name: name.into(),
            skill_type: SkillTypeId(1),
            hit_kind: HitKind::Certain,
            success_rate: 100,
            damage: DamageSpec::default(),
            mp_cost: 0,
            tp_cost: 0,
            required_weapon_types: Vec::new(),
            combination_tag: None,
        }
    }

    #[test]
    fn name_lookup_prefers_the_lowest_id() {
        let catalog = SkillCatalog::from_defs([def(8, "Slash"), def(2, "Slash")]);
        assert_eq!(catalog.skill_by_name("Slash").unwrap().id, SkillId(2));
        assert!(catalog.skill_by_name("Missing").is_none());
    }
}
