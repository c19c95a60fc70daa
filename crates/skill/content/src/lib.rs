//! Data-file loading for the combination-skill resolver.
//!
//! `skill-content` turns RON files into the catalog and roster data that
//! host-side oracle implementations serve to the resolver. The crate also
//! embeds a small sample data set used by the runtime's defaults and by
//! integration tests.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ActorLoader, ActorRecord, ContentFactory, RosterData, SkillCatalog, SkillLoader, StatSheet,
};
