//! Shared identifier newtypes and the skill-catalog row consumed by the
//! resolver.
//!
//! These types mirror what the host's skill catalog stores; the resolver never
//! mutates them. String-backed enums use `strum` so formulas, content files,
//! and logs share one spelling.

use std::fmt;

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a playable character in the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// Unique identifier for a skill in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SkillId(pub u32);

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skill#{}", self.0)
    }
}

/// Identifier for a skill-type group (the host's `stypeId`), used by the
/// type-seal gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SkillTypeId(pub u32);

impl fmt::Display for SkillTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stype#{}", self.0)
    }
}

/// Identifier for a weapon-type group, used by the weapon gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WeaponTypeId(pub u32);

impl fmt::Display for WeaponTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wtype#{}", self.0)
    }
}

// ============================================================================
// Stats
// ============================================================================

/// Named numeric attribute of a combatant, addressable from damage formulas
/// (`a.atk`, `d.mat`, ...) and by the hit-chance policy (`hit`).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StatKind {
    /// Maximum hit points.
    Mhp,
    /// Maximum magic points.
    Mmp,
    /// Current hit points.
    Hp,
    /// Current magic points.
    Mp,
    /// Current technical points.
    Tp,
    /// Physical attack.
    Atk,
    /// Physical defense.
    Def,
    /// Magic attack.
    Mat,
    /// Magic defense.
    Mdf,
    /// Agility.
    Agi,
    /// Luck.
    Luk,
    /// Character level.
    Level,
    /// Hit rate as a fraction in [0, 1].
    Hit,
    /// Evasion rate as a fraction in [0, 1].
    Eva,
    /// Critical rate as a fraction in [0, 1].
    Cri,
}

// ============================================================================
// Skill Definition
// ============================================================================

/// How a skill's chance to connect is determined.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum HitKind {
    /// Always connects; hit chance is the success rate alone.
    #[default]
    Certain,
    /// Physical delivery; hit chance scales with a hit stat.
    Physical,
    /// Magical delivery; hit chance is the success rate alone.
    Magical,
}

impl HitKind {
    /// Returns true if the accuracy policy applies to this skill.
    pub const fn is_physical(self) -> bool {
        matches!(self, Self::Physical)
    }
}

/// What a skill's damage formula produces.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DamageKind {
    /// No damage component.
    #[default]
    None,
    /// Subtracts hit points.
    HpDamage,
    /// Subtracts magic points.
    MpDamage,
    /// Restores hit points.
    HpRecover,
    /// Restores magic points.
    MpRecover,
    /// Subtracts hit points and restores the invoker's.
    HpDrain,
    /// Subtracts magic points and restores the invoker's.
    MpDrain,
}

impl DamageKind {
    /// Returns true for the recovery kinds, which flip the formula's sign
    /// before the floor-at-zero clamp.
    pub const fn is_recovery(self) -> bool {
        matches!(self, Self::HpRecover | Self::MpRecover)
    }
}

/// Damage component of a skill: a formula over the slot bindings plus the
/// kind that decides sign handling.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DamageSpec {
    pub kind: DamageKind,
    /// Expression over the slot bindings, e.g. `a.atk * 4 - b.def * 2`.
    pub formula: String,
}

impl Default for DamageSpec {
    fn default() -> Self {
        Self {
            kind: DamageKind::None,
            formula: "0".to_string(),
        }
    }
}

/// A skill-catalog row.
///
/// Skill definitions are static for a session; the resolver caches parsed
/// combination specs keyed by [`SkillDef::id`] on that assumption.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDef {
    pub id: SkillId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skill_type: SkillTypeId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hit_kind: HitKind,
    /// Base success chance in percent (90 means 90%).
    #[cfg_attr(feature = "serde", serde(default = "default_success_rate"))]
    pub success_rate: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage: DamageSpec,
    /// MP deducted by the plain cost rule.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mp_cost: u32,
    /// TP deducted by the plain cost rule.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tp_cost: u32,
    /// Weapon types that satisfy the weapon gate; empty means unrestricted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub required_weapon_types: Vec<WeaponTypeId>,
    /// Raw combination descriptor, e.g. `"1,Cross Cut,2,Gale Slash,highest"`.
    /// `None` for plain single-actor skills.
    #[cfg_attr(feature = "serde", serde(default))]
    pub combination_tag: Option<String>,
}

#[cfg(feature = "serde")]
fn default_success_rate() -> u32 {
    100
}
