//! Content factory for loading a whole data directory.

use std::path::{Path, PathBuf};

use skill_core::SkillDef;

use crate::loaders::{ActorLoader, LoadResult, RosterData, SkillLoader};

/// Content factory that loads resolver data from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── skills.ron
/// └── actors.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the skill catalog from `skills.ron`.
    pub fn load_skills(&self) -> LoadResult<Vec<SkillDef>> {
        SkillLoader::load(&self.data_dir.join("skills.ron"))
    }

    /// Load the roster from `actors.ron`.
    pub fn load_roster(&self) -> LoadResult<RosterData> {
        ActorLoader::load(&self.data_dir.join("actors.ron"))
    }

    /// The directory this factory reads from.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
