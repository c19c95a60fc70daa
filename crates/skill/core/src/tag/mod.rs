//! Combination descriptors parsed from skill tag data.
//!
//! A combination tag names up to ten `(character, component skill)` pairs and
//! an optional trailing accuracy-policy token. Parsing happens once per skill
//! id and the result is cached for the session; specs are immutable after
//! construction.

mod cache;
mod parse;

pub use cache::SpecCache;
pub use parse::{TagError, parse_tag};

use arrayvec::ArrayVec;

use crate::types::{ActorId, SkillId};

/// Maximum number of participants in one combination.
///
/// Bounded by the formula slot alphabet: participants bind to `c`..`l`.
pub const MAX_PARTICIPANTS: usize = 10;

/// One `(character, required component skill)` pair of a combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Participant {
    /// The character that must be present and eligible.
    pub actor: ActorId,
    /// The component skill that character must satisfy.
    pub skill: SkillId,
}

/// Which battler's hit stat feeds a physical combination's hit chance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccuracyPolicy {
    /// The invoking character's own hit stat (also the fallback for
    /// unrecognized policy tokens).
    #[default]
    Invoker,
    /// A specific participant's hit stat, by 0-based spec order.
    ParticipantAt(usize),
    /// The best hit stat among all participants.
    Highest,
    /// The worst hit stat among all participants.
    Lowest,
}

/// Parsed, immutable form of a combination tag.
///
/// Participant order is semantically significant: it fixes the formula slot
/// each participant binds to (`c`, `d`, ...) and the index space of
/// [`AccuracyPolicy::ParticipantAt`]. Duplicate participants are legal and
/// are checked independently during eligibility.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombinationSpec {
    participants: ArrayVec<Participant, MAX_PARTICIPANTS>,
    accuracy: AccuracyPolicy,
}

impl CombinationSpec {
    /// Builds a spec directly, bypassing the tag parser.
    ///
    /// # Panics
    ///
    /// Panics if `participants` holds more than [`MAX_PARTICIPANTS`] entries.
    pub fn new(
        participants: impl IntoIterator<Item = Participant>,
        accuracy: AccuracyPolicy,
    ) -> Self {
        Self {
            participants: participants.into_iter().collect(),
            accuracy,
        }
    }

    /// The participants in tag order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// The accuracy policy for physical hit-chance resolution.
    pub fn accuracy(&self) -> AccuracyPolicy {
        self.accuracy
    }

    /// Returns true if `actor` appears among the participants.
    pub fn lists(&self, actor: ActorId) -> bool {
        self.participants.iter().any(|p| p.actor == actor)
    }
}
