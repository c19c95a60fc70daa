//! Cumulative cost settlement.

use crate::env::{CostHost, OracleError, SkillOracle};
use crate::tag::CombinationSpec;
use crate::types::{ActorId, SkillDef};

/// Settles the cumulative cost of a combination invocation.
///
/// Every participant pays the plain single-actor cost of their own component
/// skill, so each character pays in whatever resource their component
/// declares. If the invoker is among the participants that loop already
/// covered their share; otherwise the invoker additionally pays the plain
/// cost of the combination skill itself. The invoker's self-payment is
/// skipped whenever they appear as a participant; never double-pay.
///
/// Universal costs (items, gold, party-wide gauges) must be declared on at
/// most one component skill across the combination, or they are paid once per
/// declaring component; this is a documented data constraint, not something
/// the settler cross-checks.
///
/// Must run exactly once per invocation; the settler itself performs no
/// bookkeeping to prevent a second call.
///
/// # Errors
///
/// Only [`OracleError`] when no skill catalog is available.
pub fn settle_combination_cost(
    skill: &SkillDef,
    spec: &CombinationSpec,
    invoker: ActorId,
    skills: &dyn SkillOracle,
    host: &mut dyn CostHost,
) -> Result<(), OracleError> {
    let mut invoker_paid = false;
    for participant in spec.participants() {
        if let Some(component) = skills.skill(participant.skill) {
            host.pay_skill_cost(participant.actor, component);
        }
        if participant.actor == invoker {
            invoker_paid = true;
        }
    }

    if !invoker_paid {
        host.pay_skill_cost(invoker, skill);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::parse_tag;
    use crate::testkit::{RecordingHost, StubCatalog, skill_with_tag};
    use crate::types::SkillId;

    #[test]
    fn each_participant_pays_their_own_component() {
        let catalog = StubCatalog::with_skills([(3, "Cross Cut"), (5, "Gale Slash")]);
        let skill = skill_with_tag(9, "1,3,2,5");
        let spec = parse_tag("1,3,2,5", &catalog).unwrap();

        let mut host = RecordingHost::default();
        settle_combination_cost(&skill, &spec, ActorId(1), &catalog, &mut host).unwrap();

        assert_eq!(
            host.payments,
            vec![
                (ActorId(1), SkillId(3)),
                (ActorId(2), SkillId(5)),
            ]
        );
    }

    #[test]
    fn listed_invoker_is_never_charged_the_combination_itself() {
        let catalog = StubCatalog::with_skills([(3, "Cross Cut"), (5, "Gale Slash")]);
        let skill = skill_with_tag(9, "1,3,2,5");
        let spec = parse_tag("1,3,2,5", &catalog).unwrap();

        let mut host = RecordingHost::default();
        settle_combination_cost(&skill, &spec, ActorId(2), &catalog, &mut host).unwrap();

        assert!(host.payments.iter().all(|(_, paid)| *paid != SkillId(9)));
        assert_eq!(host.payments.len(), 2);
    }

    #[test]
    fn unlisted_invoker_pays_the_combination_cost_on_top() {
        let catalog = StubCatalog::with_skills([(3, "Cross Cut"), (5, "Gale Slash")]);
        let skill = skill_with_tag(9, "1,3,2,5");
        let spec = parse_tag("1,3,2,5", &catalog).unwrap();

        let mut host = RecordingHost::default();
        settle_combination_cost(&skill, &spec, ActorId(4), &catalog, &mut host).unwrap();

        assert_eq!(
            host.payments,
            vec![
                (ActorId(1), SkillId(3)),
                (ActorId(2), SkillId(5)),
                (ActorId(4), SkillId(9)),
            ]
        );
    }

    #[test]
    fn self_component_charges_the_combination_cost_through_the_loop() {
        // A participant whose component is the combination itself pays the
        // combination's own declared cost, once.
        let mut catalog = StubCatalog::with_skills([(5, "Gale Slash")]);
        let skill = skill_with_tag(9, "1,9,2,5");
        catalog.push(skill.clone());
        let spec = parse_tag("1,9,2,5", &catalog).unwrap();

        let mut host = RecordingHost::default();
        settle_combination_cost(&skill, &spec, ActorId(1), &catalog, &mut host).unwrap();

        assert_eq!(
            host.payments,
            vec![
                (ActorId(1), SkillId(9)),
                (ActorId(2), SkillId(5)),
            ]
        );
    }

    #[test]
    fn duplicate_participants_pay_twice() {
        let catalog = StubCatalog::with_skills([(3, "Cross Cut")]);
        let skill = skill_with_tag(9, "1,3,1,3");
        let spec = parse_tag("1,3,1,3", &catalog).unwrap();

        let mut host = RecordingHost::default();
        settle_combination_cost(&skill, &spec, ActorId(1), &catalog, &mut host).unwrap();

        assert_eq!(
            host.payments,
            vec![
                (ActorId(1), SkillId(3)),
                (ActorId(1), SkillId(3)),
            ]
        );
    }
}
