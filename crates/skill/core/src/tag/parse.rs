//! Tag tokenization and policy-token recognition.

use arrayvec::ArrayVec;

use crate::env::SkillOracle;
use crate::error::{ErrorSeverity, ResolverError};
use crate::tag::{AccuracyPolicy, CombinationSpec, MAX_PARTICIPANTS, Participant};
use crate::types::{ActorId, SkillId};

// ============================================================================
// Parse Errors
// ============================================================================

/// Errors raised while parsing a combination tag.
///
/// All of these are surfaced at parse time and make the skill's combination
/// behavior permanently invalid for the session: the skill must be treated as
/// unusable rather than crashing the encounter.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagError {
    /// The tag contains no participant pairs.
    #[error("combination tag has no participant pairs")]
    Empty,

    /// An actor token is not an integer id.
    #[error("actor token `{0}` is not an integer id")]
    InvalidActorId(String),

    /// A skill-name token does not resolve in the catalog.
    #[error("no skill named `{0}` in the catalog")]
    UnknownSkillName(String),

    /// The tag lists more participants than there are formula slots.
    #[error("combination tag lists {0} participants, more than the {MAX_PARTICIPANTS} slots")]
    TooManyParticipants(usize),
}

impl ResolverError for TagError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use TagError::*;
        match self {
            Empty => "TAG_EMPTY",
            InvalidActorId(_) => "TAG_INVALID_ACTOR_ID",
            UnknownSkillName(_) => "TAG_UNKNOWN_SKILL_NAME",
            TooManyParticipants(_) => "TAG_TOO_MANY_PARTICIPANTS",
        }
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parses a raw combination tag into a [`CombinationSpec`].
///
/// Tokens are comma-separated. An even token count means every token belongs
/// to an `(actor id, skill ref)` pair; an odd count means the final token is
/// the accuracy-policy selector. Skill refs are integer ids (taken as-is; a
/// dangling id surfaces later as ineligibility) or exact catalog names
/// (resolved here against `skills`).
///
/// Unrecognized trailing policy tokens still count as policy selectors and
/// fall through to [`AccuracyPolicy::Invoker`]; historical skill data relies
/// on that leniency.
///
/// # Errors
///
/// Returns a [`TagError`] when the pair tokens cannot form 1 to
/// [`MAX_PARTICIPANTS`] participants.
pub fn parse_tag(tag: &str, skills: &dyn SkillOracle) -> Result<CombinationSpec, TagError> {
    let tokens: Vec<&str> = tag.split(',').map(str::trim).collect();

    let (pair_tokens, accuracy) = match tokens.split_last() {
        // An odd token count means the final token selects the policy.
        Some((policy, pairs)) if tokens.len() % 2 == 1 => (pairs, parse_policy_token(policy)),
        _ => (&tokens[..], AccuracyPolicy::default()),
    };

    let pair_count = pair_tokens.len() / 2;
    if pair_count == 0 {
        return Err(TagError::Empty);
    }
    if pair_count > MAX_PARTICIPANTS {
        return Err(TagError::TooManyParticipants(pair_count));
    }

    let mut participants: ArrayVec<Participant, MAX_PARTICIPANTS> = ArrayVec::new();
    for pair in pair_tokens.chunks_exact(2) {
        let actor = pair[0]
            .parse::<u32>()
            .map(ActorId)
            .map_err(|_| TagError::InvalidActorId(pair[0].to_string()))?;
        let skill = parse_skill_ref(pair[1], skills)?;
        participants.push(Participant { actor, skill });
    }

    Ok(CombinationSpec::new(participants, accuracy))
}

/// Resolves a skill-ref token: integer id, or exact catalog name.
fn parse_skill_ref(token: &str, skills: &dyn SkillOracle) -> Result<SkillId, TagError> {
    if let Ok(id) = token.parse::<u32>() {
        return Ok(SkillId(id));
    }
    skills
        .skill_by_name(token)
        .map(|def| def.id)
        .ok_or_else(|| TagError::UnknownSkillName(token.to_string()))
}

/// Maps a trailing policy token onto an [`AccuracyPolicy`].
///
/// Anything unrecognized (including an `actorN` outside 1..=10) falls through
/// to the invoker default.
fn parse_policy_token(token: &str) -> AccuracyPolicy {
    match token {
        "user" => AccuracyPolicy::Invoker,
        "first" => AccuracyPolicy::ParticipantAt(0),
        "second" => AccuracyPolicy::ParticipantAt(1),
        "higher" | "highest" | "max" => AccuracyPolicy::Highest,
        "lower" | "lowest" | "min" => AccuracyPolicy::Lowest,
        _ => match token.strip_prefix("actor").and_then(|n| n.parse::<usize>().ok()) {
            Some(n @ 1..=MAX_PARTICIPANTS) => AccuracyPolicy::ParticipantAt(n - 1),
            _ => AccuracyPolicy::Invoker,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::StubCatalog;

    fn catalog() -> StubCatalog {
        StubCatalog::with_skills([(3, "Cross Cut"), (5, "Gale Slash"), (7, "Ember")])
    }

    #[test]
    fn even_token_count_defaults_to_invoker_policy() {
        let spec = parse_tag("1,3,2,5", &catalog()).unwrap();
        assert_eq!(
            spec.participants(),
            &[
                Participant { actor: ActorId(1), skill: SkillId(3) },
                Participant { actor: ActorId(2), skill: SkillId(5) },
            ]
        );
        assert_eq!(spec.accuracy(), AccuracyPolicy::Invoker);
    }

    #[test]
    fn odd_token_count_takes_last_token_as_policy() {
        let spec = parse_tag("1,3,2,5,highest", &catalog()).unwrap();
        assert_eq!(spec.participants().len(), 2);
        assert_eq!(spec.accuracy(), AccuracyPolicy::Highest);
    }

    #[test]
    fn three_pairs_with_first_policy() {
        let spec = parse_tag("1,3,2,5,2,7,first", &catalog()).unwrap();
        assert_eq!(spec.participants().len(), 3);
        assert_eq!(spec.accuracy(), AccuracyPolicy::ParticipantAt(0));
    }

    #[test]
    fn skill_names_resolve_through_the_catalog() {
        let spec = parse_tag("1,Cross Cut,2,Gale Slash", &catalog()).unwrap();
        assert_eq!(spec.participants()[0].skill, SkillId(3));
        assert_eq!(spec.participants()[1].skill, SkillId(5));
    }

    #[test]
    fn unknown_skill_name_is_rejected() {
        let err = parse_tag("1,Moonfall", &catalog()).unwrap_err();
        assert_eq!(err, TagError::UnknownSkillName("Moonfall".into()));
    }

    #[test]
    fn non_integer_actor_id_is_rejected() {
        let err = parse_tag("one,3", &catalog()).unwrap_err();
        assert_eq!(err, TagError::InvalidActorId("one".into()));
    }

    #[test]
    fn empty_tag_is_rejected() {
        assert_eq!(parse_tag("", &catalog()).unwrap_err(), TagError::Empty);
        assert_eq!(parse_tag("highest", &catalog()).unwrap_err(), TagError::Empty);
    }

    #[test]
    fn eleven_pairs_overflow_the_slot_alphabet() {
        let tag = (1..=11).map(|i| format!("{i},3")).collect::<Vec<_>>().join(",");
        assert_eq!(
            parse_tag(&tag, &catalog()).unwrap_err(),
            TagError::TooManyParticipants(11)
        );
    }

    #[test]
    fn actor_n_tokens_are_zero_indexed_policies() {
        let spec = parse_tag("1,3,2,5,actor2", &catalog()).unwrap();
        assert_eq!(spec.accuracy(), AccuracyPolicy::ParticipantAt(1));
        let spec = parse_tag("1,3,2,5,actor10", &catalog()).unwrap();
        assert_eq!(spec.accuracy(), AccuracyPolicy::ParticipantAt(9));
    }

    #[test]
    fn unrecognized_policy_token_falls_back_to_invoker() {
        for token in ["sideways", "actor11", "actor0", "MAX"] {
            let spec = parse_tag(&format!("1,3,2,5,{token}"), &catalog()).unwrap();
            assert_eq!(spec.accuracy(), AccuracyPolicy::Invoker, "token {token}");
        }
    }

    #[test]
    fn tokens_are_trimmed() {
        let spec = parse_tag(" 1 , Cross Cut , 2 , 5 , lowest ", &catalog()).unwrap();
        assert_eq!(spec.participants()[0].skill, SkillId(3));
        assert_eq!(spec.accuracy(), AccuracyPolicy::Lowest);
    }
}
