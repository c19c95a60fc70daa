//! Damage and hit-chance resolution.

use crate::env::{Combatant, Env};
use crate::formula::{Bindings, eval_formula};
use crate::tag::{AccuracyPolicy, CombinationSpec};
use crate::types::{SkillDef, StatKind};

/// Evaluates the skill's damage formula for one invocation.
///
/// Bindings: invoker → `a`, target → `b`, participants in tag order →
/// `c`..`l`, shared variables → `v`. Only the combination skill's own formula
/// runs; component formulas never contribute. Recovery-kind formulas are
/// negated before the clamp, and the result never goes below zero.
///
/// Fails closed: any formula error (unbound slot, malformed expression,
/// missing variable, non-finite value) yields `0.0` rather than aborting the
/// turn. Pass `spec: None` for plain skills; `a`, `b` and `v` still bind.
pub fn evaluate_damage(
    skill: &SkillDef,
    spec: Option<&CombinationSpec>,
    invoker: &dyn Combatant,
    target: &dyn Combatant,
    env: &Env<'_>,
) -> f64 {
    let mut bindings = Bindings::new(invoker, target);
    if let Ok(vars) = env.vars() {
        bindings = bindings.with_vars(vars);
    }
    if let (Some(spec), Ok(roster)) = (spec, env.roster()) {
        for participant in spec.participants() {
            bindings.bind_participant(roster.actor(participant.actor));
        }
    }

    let raw = match eval_formula(&skill.damage.formula, &bindings) {
        Ok(value) => value,
        Err(_) => return 0.0,
    };

    let signed = if skill.damage.kind.is_recovery() { -raw } else { raw };
    signed.max(0.0)
}

/// Resolves the chance for the skill to connect, as a fraction.
///
/// Non-physical skills ignore the accuracy policy entirely:
/// `success_rate * 0.01`. Physical skills scale that by a hit stat chosen by
/// the spec's policy; plain skills and the `Invoker` policy use the invoker's
/// own hit. `ParticipantAt` past the declared count, or a participant the
/// roster cannot resolve, falls back to the invoker's hit.
pub fn evaluate_hit_chance(
    skill: &SkillDef,
    spec: Option<&CombinationSpec>,
    invoker: &dyn Combatant,
    env: &Env<'_>,
) -> f64 {
    let rate = f64::from(skill.success_rate) * 0.01;
    if !skill.hit_kind.is_physical() {
        return rate;
    }
    rate * hit_source(spec, invoker, env)
}

/// Picks the hit stat the accuracy policy names.
fn hit_source(spec: Option<&CombinationSpec>, invoker: &dyn Combatant, env: &Env<'_>) -> f64 {
    let invoker_hit = invoker.stat(StatKind::Hit);
    let (Some(spec), Ok(roster)) = (spec, env.roster()) else {
        return invoker_hit;
    };

    let participant_hits = || {
        spec.participants()
            .iter()
            .filter_map(|p| roster.actor(p.actor))
            .map(move |combatant| combatant.stat(StatKind::Hit))
    };

    match spec.accuracy() {
        AccuracyPolicy::Invoker => invoker_hit,
        AccuracyPolicy::ParticipantAt(index) => spec
            .participants()
            .get(index)
            .and_then(|p| roster.actor(p.actor))
            .map_or(invoker_hit, |combatant| combatant.stat(StatKind::Hit)),
        AccuracyPolicy::Highest => participant_hits()
            .fold(None, |best: Option<f64>, hit| {
                Some(best.map_or(hit, |b| b.max(hit)))
            })
            .unwrap_or(invoker_hit),
        AccuracyPolicy::Lowest => participant_hits()
            .fold(None, |worst: Option<f64>, hit| {
                Some(worst.map_or(hit, |w| w.min(hit)))
            })
            .unwrap_or(invoker_hit),
    }
}
