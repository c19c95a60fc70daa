//! Content loaders for reading skill and roster data from files.
//!
//! All loaders consume RON and hand back plain data; wiring the data into
//! oracle implementations is the host's job.

pub mod actors;
pub mod factory;
pub mod skills;

pub use actors::{ActorLoader, ActorRecord, RosterData, StatSheet};
pub use factory::ContentFactory;
pub use skills::{SkillCatalog, SkillLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
