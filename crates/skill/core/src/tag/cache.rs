//! Per-skill memoization of parsed combination specs.

use std::collections::HashMap;

use crate::env::SkillOracle;
use crate::tag::{CombinationSpec, TagError, parse_tag};
use crate::types::{SkillDef, SkillId};

/// Session cache of parse results keyed by skill id.
///
/// Caching is sound because skill definitions are static for the session;
/// reloading the skill table invalidates the cache wholesale via
/// [`SpecCache::clear`]. Parse failures are cached too, so a malformed tag is
/// diagnosed once instead of on every menu refresh.
#[derive(Debug, Default)]
pub struct SpecCache {
    specs: HashMap<SkillId, Result<Option<CombinationSpec>, TagError>>,
}

impl SpecCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the parsed spec for `skill`, parsing on first access.
    ///
    /// `Ok(None)` means the skill carries no combination tag and follows the
    /// plain single-actor rules.
    ///
    /// # Errors
    ///
    /// Returns the (cached) [`TagError`] when the skill's tag is malformed.
    pub fn get_or_parse(
        &mut self,
        skill: &SkillDef,
        skills: &dyn SkillOracle,
    ) -> Result<Option<&CombinationSpec>, TagError> {
        self.specs
            .entry(skill.id)
            .or_insert_with(|| match &skill.combination_tag {
                Some(tag) => parse_tag(tag, skills).map(Some),
                None => Ok(None),
            })
            .as_ref()
            .map(Option::as_ref)
            .map_err(Clone::clone)
    }

    /// Drops every cached entry. Call after a skill-table reload.
    pub fn clear(&mut self) {
        self.specs.clear();
    }

    /// Number of skills with a cached parse result.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns true if nothing has been parsed yet.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{StubCatalog, skill_with_tag};

    #[test]
    fn parses_once_and_returns_equal_specs() {
        let catalog = StubCatalog::with_skills([(3, "Cross Cut"), (5, "Gale Slash")]);
        let skill = skill_with_tag(9, "1,3,2,5,highest");

        let mut cache = SpecCache::new();
        let first = cache.get_or_parse(&skill, &catalog).unwrap().unwrap().clone();
        let second = cache.get_or_parse(&skill, &catalog).unwrap().unwrap().clone();

        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn untagged_skills_cache_as_plain() {
        let catalog = StubCatalog::default();
        let mut plain = skill_with_tag(4, "unused");
        plain.combination_tag = None;

        let mut cache = SpecCache::new();
        assert!(cache.get_or_parse(&plain, &catalog).unwrap().is_none());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn parse_failures_are_cached() {
        let catalog = StubCatalog::default();
        let skill = skill_with_tag(9, "1,Moonfall");

        let mut cache = SpecCache::new();
        let first = cache.get_or_parse(&skill, &catalog).unwrap_err();
        let second = cache.get_or_parse(&skill, &catalog).unwrap_err();
        assert_eq!(first, second);
    }

    #[test]
    fn clear_forgets_cached_entries() {
        let catalog = StubCatalog::default();
        let skill = skill_with_tag(9, "1,2");

        let mut cache = SpecCache::new();
        cache.get_or_parse(&skill, &catalog).unwrap();
        cache.clear();
        assert!(cache.is_empty());
    }
}
