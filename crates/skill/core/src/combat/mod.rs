//! Combination-skill battle rules.
//!
//! Free functions implementing the three runtime-facing responsibilities over
//! an already-parsed [`crate::tag::CombinationSpec`]: the eligibility check,
//! cumulative cost settlement, and damage/hit-chance evaluation. The
//! plain-skill fallbacks (no tag, malformed tag) live in
//! [`crate::resolver::Resolver`], which owns the spec cache.

mod cost;
mod eligibility;
mod outcome;

pub use cost::settle_combination_cost;
pub use eligibility::combination_usable;
pub use outcome::{evaluate_damage, evaluate_hit_chance};
