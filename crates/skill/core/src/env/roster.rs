//! Read-only access to the host's character roster.

use crate::types::{ActorId, StatKind};

/// A battler whose stats can be read by formulas and the accuracy policy.
///
/// Both roster members and opposing units implement this; the resolver never
/// distinguishes beyond what [`StatKind`] exposes.
pub trait Combatant {
    /// Returns the current value of the given stat.
    fn stat(&self, stat: StatKind) -> f64;
}

/// Lookup into the roster of playable characters.
///
/// The roster is owned by the host. The resolver only reads it; mutation
/// happens exclusively through [`crate::env::CostHost`] during settlement.
pub trait RosterOracle {
    /// Returns the character with the given id, if the roster knows it.
    fn actor(&self, id: ActorId) -> Option<&dyn Combatant>;

    /// Returns true if the character is currently in the active party.
    fn is_in_party(&self, id: ActorId) -> bool;

    /// Returns true if the character is under player control.
    ///
    /// Combination skills are categorically unusable by non-player-controlled
    /// units; an id the roster does not know is not player-controlled.
    fn is_player_controlled(&self, id: ActorId) -> bool;
}
