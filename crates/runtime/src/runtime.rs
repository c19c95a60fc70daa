//! High-level battle runtime orchestrator.
//!
//! The runtime owns the catalog, party, variable store, and a
//! [`Resolver`], and exposes a builder-based API for hosts to drive
//! skill-use resolution. Calls are synchronous and must come from one
//! sequential turn loop; cost settlement takes exclusive access to party
//! state for its duration.

use serde::{Deserialize, Serialize};
use skill_core::{
    ActorId, Combatant, CombinationSpec, Env, Resolver, SkillDef, SkillId,
};

use crate::catalog::SkillCatalog;
use crate::error::{Result, RuntimeError};
use crate::party::{ActorState, PartyState};
use crate::rules::{CostBook, Payment, RuleBook};
use crate::vars::VariableStore;

/// Report of one resolved skill use.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillUse {
    pub skill: SkillId,
    pub invoker: ActorId,
    /// Chance to connect, as a fraction in [0, 1].
    pub hit_chance: f64,
    /// Evaluated damage (positive for recovery kinds too; the kind decides
    /// how the host applies it).
    pub damage: f64,
    /// Every cost deduction, in settlement order.
    pub payments: Vec<Payment>,
}

/// Main runtime that orchestrates combination-skill resolution.
///
/// Design: the runtime owns all host-side state and hands the resolver a
/// fresh oracle environment per call, so the borrow checker enforces the
/// read/settle phase split the resolver documents.
pub struct BattleRuntime {
    catalog: SkillCatalog,
    party: PartyState,
    vars: VariableStore,
    resolver: Resolver,
}

impl BattleRuntime {
    /// Create a new runtime builder.
    pub fn builder() -> BattleRuntimeBuilder {
        BattleRuntimeBuilder::new()
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    pub fn party(&self) -> &PartyState {
        &self.party
    }

    pub fn party_mut(&mut self) -> &mut PartyState {
        &mut self.party
    }

    pub fn vars_mut(&mut self) -> &mut VariableStore {
        &mut self.vars
    }

    /// The skill definition for `id`.
    ///
    /// # Errors
    ///
    /// `RuntimeError::UnknownSkill` if the catalog has no such id.
    pub fn skill(&self, id: SkillId) -> Result<&SkillDef> {
        self.catalog.get(id).ok_or(RuntimeError::UnknownSkill(id))
    }

    /// The parsed combination spec for `id`, cloned for display layers.
    ///
    /// Returns `None` for plain skills and for skills whose tag is malformed
    /// (those render and behave as plain, unusable skills).
    pub fn combination_spec(&mut self, id: SkillId) -> Result<Option<CombinationSpec>> {
        let skill = self.catalog.get(id).ok_or(RuntimeError::UnknownSkill(id))?;
        let rules = RuleBook::new(&self.party);
        let env = Env::with_all(&self.catalog, &self.party, &rules, &self.vars);
        Ok(self.resolver.spec(skill, &env).ok().flatten().cloned())
    }

    /// Whether `invoker` can use skill `id` right now.
    pub fn can_use(&mut self, invoker: ActorId, id: SkillId) -> Result<bool> {
        let skill = self.catalog.get(id).ok_or(RuntimeError::UnknownSkill(id))?;
        if self.party.actor(invoker).is_none() {
            return Err(RuntimeError::UnknownActor(invoker));
        }
        let rules = RuleBook::new(&self.party);
        let env = Env::with_all(&self.catalog, &self.party, &rules, &self.vars);
        let usable = self.resolver.is_usable(skill, invoker, &env)?;
        tracing::debug!(%invoker, skill = %id, usable, "eligibility checked");
        Ok(usable)
    }

    /// Skill ids `invoker` has learned and can use right now, in id order.
    pub fn usable_skills(&mut self, invoker: ActorId) -> Result<Vec<SkillId>> {
        let known: Vec<SkillId> = self
            .party
            .actor(invoker)
            .ok_or(RuntimeError::UnknownActor(invoker))?
            .known_skills
            .iter()
            .copied()
            .collect();

        let mut usable = Vec::new();
        for id in known {
            if self.catalog.get(id).is_none() {
                tracing::warn!(%invoker, skill = %id, "known skill missing from catalog");
                continue;
            }
            if self.can_use(invoker, id)? {
                usable.push(id);
            }
        }
        Ok(usable)
    }

    /// Resolves one full skill use: eligibility, cost settlement, outcome.
    ///
    /// Costs are settled exactly once, before outcome evaluation, matching
    /// the engine's use-then-resolve order.
    ///
    /// # Errors
    ///
    /// `RuntimeError::NotUsable` when the eligibility check rejects the
    /// invocation; unknown ids surface as their own errors. Outcome
    /// evaluation itself cannot fail; bad formulas resolve to zero damage.
    pub fn use_skill(
        &mut self,
        invoker: ActorId,
        id: SkillId,
        target: &dyn Combatant,
    ) -> Result<SkillUse> {
        if !self.can_use(invoker, id)? {
            tracing::warn!(%invoker, skill = %id, "skill use rejected");
            return Err(RuntimeError::NotUsable { invoker, skill: id });
        }

        // Settlement mutates party state, so it runs without the read-only
        // environment; the catalog alone resolves component costs.
        let skill = self.catalog.get(id).ok_or(RuntimeError::UnknownSkill(id))?;
        let mut costs = CostBook::new(&mut self.party);
        self.resolver
            .settle_cost(skill, invoker, &self.catalog, &mut costs)?;
        let payments = costs.into_payments();
        tracing::debug!(%invoker, skill = %id, paid = payments.len(), "costs settled");

        let rules = RuleBook::new(&self.party);
        let env = Env::with_all(&self.catalog, &self.party, &rules, &self.vars);
        let invoker_state: &ActorState = self
            .party
            .actor(invoker)
            .ok_or(RuntimeError::UnknownActor(invoker))?;
        let damage = self.resolver.damage(skill, invoker_state, target, &env);
        let hit_chance = self.resolver.hit_chance(skill, invoker_state, &env);
        tracing::debug!(%invoker, skill = %id, damage, hit_chance, "outcome evaluated");

        Ok(SkillUse {
            skill: id,
            invoker,
            hit_chance,
            damage,
            payments,
        })
    }

    /// Drops cached combination specs. Call only after replacing the catalog
    /// via [`BattleRuntimeBuilder`]-style reloads.
    pub fn invalidate_specs(&mut self) {
        self.resolver.invalidate();
    }
}

/// Builder wiring catalog, roster, and variables into a [`BattleRuntime`].
#[derive(Default)]
pub struct BattleRuntimeBuilder {
    skills: Vec<SkillDef>,
    actors: Vec<ActorState>,
    vars: VariableStore,
}

impl BattleRuntimeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds skill definitions to the catalog.
    pub fn with_skills(mut self, defs: impl IntoIterator<Item = SkillDef>) -> Self {
        self.skills.extend(defs);
        self
    }

    /// Adds every member of loaded roster data to the party.
    pub fn with_roster(mut self, data: &skill_content::RosterData) -> Self {
        self.actors
            .extend(data.members.iter().map(ActorState::from_record));
        self
    }

    /// Adds a single prepared actor to the party.
    pub fn with_actor(mut self, state: ActorState) -> Self {
        self.actors.push(state);
        self
    }

    /// Seeds one shared variable.
    pub fn with_variable(mut self, index: usize, value: f64) -> Self {
        self.vars.set(index, value);
        self
    }

    pub fn build(self) -> BattleRuntime {
        let mut party = PartyState::new();
        for state in self.actors {
            party.add_member(state);
        }
        BattleRuntime {
            catalog: SkillCatalog::from_defs(self.skills),
            party,
            vars: self.vars,
            resolver: Resolver::new(),
        }
    }
}
