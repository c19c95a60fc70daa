//! Roster loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use skill_core::{ActorId, SkillId, SkillTypeId, WeaponTypeId};

use crate::loaders::{LoadResult, read_file};

/// Numeric attribute sheet for one character record.
///
/// Field names match [`skill_core::StatKind`] spellings so content, formulas,
/// and logs agree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatSheet {
    pub mhp: u32,
    pub mmp: u32,
    pub atk: u32,
    pub def: u32,
    pub mat: u32,
    pub mdf: u32,
    pub agi: u32,
    pub luk: u32,
    pub level: u32,
    pub hit: f64,
    pub eva: f64,
    pub cri: f64,
}

impl Default for StatSheet {
    fn default() -> Self {
        Self {
            mhp: 1,
            mmp: 0,
            atk: 1,
            def: 1,
            mat: 1,
            mdf: 1,
            agi: 1,
            luk: 1,
            level: 1,
            hit: 0.95,
            eva: 0.05,
            cri: 0.04,
        }
    }
}

/// One character record in a roster file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorRecord {
    pub id: ActorId,
    pub name: String,
    #[serde(default)]
    pub stats: StatSheet,
    #[serde(default)]
    pub known_skills: Vec<SkillId>,
    #[serde(default)]
    pub sealed_skills: Vec<SkillId>,
    #[serde(default)]
    pub sealed_skill_types: Vec<SkillTypeId>,
    #[serde(default)]
    pub weapon_type: Option<WeaponTypeId>,
    #[serde(default = "default_player_controlled")]
    pub player_controlled: bool,
}

fn default_player_controlled() -> bool {
    true
}

/// Roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterData {
    pub members: Vec<ActorRecord>,
}

/// Loader for rosters from RON files.
pub struct ActorLoader;

impl ActorLoader {
    /// Load a roster from a RON file.
    pub fn load(path: &Path) -> LoadResult<RosterData> {
        let content = read_file(path)?;
        Self::load_str(&content)
    }

    /// Parse a roster from RON source.
    pub fn load_str(content: &str) -> LoadResult<RosterData> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))
    }

    /// Load the embedded sample roster.
    pub fn load_embedded() -> LoadResult<RosterData> {
        Self::load_str(include_str!("../../data/actors.ron"))
    }
}
