//! Skill catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use skill_core::SkillDef;

use crate::loaders::{LoadResult, read_file};

/// Skill catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCatalog {
    pub skills: Vec<SkillDef>,
}

/// Loader for skill catalogs from RON files.
pub struct SkillLoader;

impl SkillLoader {
    /// Load a skill catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a SkillCatalog
    ///
    /// # Returns
    ///
    /// Returns a Vec of SkillDefs in file order.
    pub fn load(path: &Path) -> LoadResult<Vec<SkillDef>> {
        let content = read_file(path)?;
        Self::load_str(&content)
    }

    /// Parse a skill catalog from RON source.
    pub fn load_str(content: &str) -> LoadResult<Vec<SkillDef>> {
        let catalog: SkillCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skill catalog RON: {}", e))?;
        Ok(catalog.skills)
    }

    /// Load the embedded sample catalog.
    pub fn load_embedded() -> LoadResult<Vec<SkillDef>> {
        Self::load_str(include_str!("../../data/skills.ron"))
    }
}
