//! Formula evaluation over an explicit binding table.

use crate::env::{Combatant, VarsOracle};
use crate::formula::{BinOp, Expr, FormulaError, Func, Slot, UnaryOp};
use crate::tag::MAX_PARTICIPANTS;

/// The per-invocation binding table mapping formula slots to combatants.
///
/// Built fresh for every evaluation and discarded afterwards. Participant
/// slots are pushed in tag order; a declared participant that the roster
/// cannot produce is bound as absent, which only matters if the formula
/// actually references that slot.
pub struct Bindings<'a> {
    invoker: &'a dyn Combatant,
    target: &'a dyn Combatant,
    participants: Vec<Option<&'a dyn Combatant>>,
    vars: Option<&'a dyn VarsOracle>,
}

impl<'a> Bindings<'a> {
    /// Binds `a` and `b`; participant slots start empty.
    pub fn new(invoker: &'a dyn Combatant, target: &'a dyn Combatant) -> Self {
        Self {
            invoker,
            target,
            participants: Vec::new(),
            vars: None,
        }
    }

    /// Binds the next participant slot (`c` first, then `d`, ...).
    ///
    /// Pass `None` for a declared participant the roster cannot resolve; the
    /// slot then fails closed if referenced. Slots past
    /// [`MAX_PARTICIPANTS`] are ignored; the parser already rejects tags
    /// that long.
    pub fn bind_participant(&mut self, combatant: Option<&'a dyn Combatant>) {
        if self.participants.len() < MAX_PARTICIPANTS {
            self.participants.push(combatant);
        }
    }

    /// Attaches the shared variable store for `v[n]` reads.
    pub fn with_vars(mut self, vars: &'a dyn VarsOracle) -> Self {
        self.vars = Some(vars);
        self
    }

    fn slot(&self, slot: Slot) -> Result<&'a dyn Combatant, FormulaError> {
        match slot {
            Slot::Invoker => Ok(self.invoker),
            Slot::Target => Ok(self.target),
            Slot::Participant(index) => self
                .participants
                .get(index)
                .copied()
                .flatten()
                .ok_or(FormulaError::UnboundSlot(slot.letter())),
        }
    }
}

/// Evaluates an expression against the bindings.
///
/// # Errors
///
/// - `UnboundSlot` for participant slots past the declared count
/// - `MissingVariable` / `InvalidVariableIndex` for bad `v[...]` reads
///
/// Intermediate values are plain `f64` arithmetic; non-finite results are
/// rejected by [`crate::formula::eval_formula`] after the fold.
pub fn evaluate(expr: &Expr, bindings: &Bindings<'_>) -> Result<f64, FormulaError> {
    match expr {
        Expr::Number(value) => Ok(*value),

        Expr::Stat { slot, stat } => Ok(bindings.slot(*slot)?.stat(*stat)),

        Expr::Var(index) => {
            let raw = evaluate(index, bindings)?;
            if raw < 0.0 || raw.fract() != 0.0 || raw > usize::MAX as f64 {
                return Err(FormulaError::InvalidVariableIndex);
            }
            let index = raw as usize;
            bindings
                .vars
                .and_then(|vars| vars.value(index))
                .ok_or(FormulaError::MissingVariable(index))
        }

        Expr::Unary { op, expr } => {
            let value = evaluate(expr, bindings)?;
            match op {
                UnaryOp::Neg => Ok(-value),
            }
        }

        Expr::Binary { op, lhs, rhs } => {
            let lhs = evaluate(lhs, bindings)?;
            let rhs = evaluate(rhs, bindings)?;
            Ok(match op {
                BinOp::Add => lhs + rhs,
                BinOp::Sub => lhs - rhs,
                BinOp::Mul => lhs * rhs,
                BinOp::Div => lhs / rhs,
                BinOp::Rem => lhs % rhs,
            })
        }

        Expr::Call { func, args } => {
            let mut values = Vec::with_capacity(args.len());
            for arg in args {
                values.push(evaluate(arg, bindings)?);
            }
            Ok(match func {
                Func::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
                Func::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
                Func::Floor => values[0].floor(),
                Func::Abs => values[0].abs(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::eval_formula;
    use crate::testkit::{StubActor, StubVars};
    use crate::types::StatKind;

    fn fighter(atk: f64) -> StubActor {
        StubActor::default().with(StatKind::Atk, atk).with(StatKind::Def, 10.0)
    }

    #[test]
    fn evaluates_invoker_and_target_stats() {
        let invoker = fighter(50.0);
        let target = fighter(30.0);
        let bindings = Bindings::new(&invoker, &target);
        assert_eq!(
            eval_formula("a.atk * 4 - b.def * 2", &bindings).unwrap(),
            180.0
        );
    }

    #[test]
    fn participant_slots_bind_in_order() {
        let invoker = fighter(1.0);
        let target = fighter(1.0);
        let first = StubActor::default().with(StatKind::Mat, 20.0);
        let second = StubActor::default().with(StatKind::Mat, 30.0);

        let mut bindings = Bindings::new(&invoker, &target);
        bindings.bind_participant(Some(&first));
        bindings.bind_participant(Some(&second));

        assert_eq!(eval_formula("(c.mat + d.mat) * 2", &bindings).unwrap(), 100.0);
    }

    #[test]
    fn slot_past_participant_count_is_unbound() {
        let invoker = fighter(1.0);
        let target = fighter(1.0);
        let only = StubActor::default();

        let mut bindings = Bindings::new(&invoker, &target);
        bindings.bind_participant(Some(&only));

        assert_eq!(
            eval_formula("d.atk", &bindings).unwrap_err(),
            FormulaError::UnboundSlot('d')
        );
    }

    #[test]
    fn unresolved_participant_is_unbound_even_when_declared() {
        let invoker = fighter(1.0);
        let target = fighter(1.0);

        let mut bindings = Bindings::new(&invoker, &target);
        bindings.bind_participant(None);

        assert_eq!(
            eval_formula("c.atk", &bindings).unwrap_err(),
            FormulaError::UnboundSlot('c')
        );
    }

    #[test]
    fn variable_reads_hit_the_store() {
        let invoker = fighter(1.0);
        let target = fighter(1.0);
        let vars = StubVars::default().with(12, 7.0);
        let bindings = Bindings::new(&invoker, &target).with_vars(&vars);

        assert_eq!(eval_formula("v[12] * 3", &bindings).unwrap(), 21.0);
        assert_eq!(
            eval_formula("v[99]", &bindings).unwrap_err(),
            FormulaError::MissingVariable(99)
        );
    }

    #[test]
    fn variable_reads_without_a_store_fail() {
        let invoker = fighter(1.0);
        let target = fighter(1.0);
        let bindings = Bindings::new(&invoker, &target);
        assert_eq!(
            eval_formula("v[3]", &bindings).unwrap_err(),
            FormulaError::MissingVariable(3)
        );
    }

    #[test]
    fn fractional_variable_index_is_invalid() {
        let invoker = fighter(1.0);
        let target = fighter(1.0);
        let vars = StubVars::default();
        let bindings = Bindings::new(&invoker, &target).with_vars(&vars);
        assert_eq!(
            eval_formula("v[0.5]", &bindings).unwrap_err(),
            FormulaError::InvalidVariableIndex
        );
    }

    #[test]
    fn division_by_zero_is_non_finite() {
        let invoker = fighter(1.0);
        let target = fighter(1.0);
        let bindings = Bindings::new(&invoker, &target);
        assert_eq!(
            eval_formula("1 / 0", &bindings).unwrap_err(),
            FormulaError::NonFinite
        );
    }

    #[test]
    fn unary_minus_and_calls_compose() {
        let invoker = fighter(40.0);
        let target = fighter(1.0);
        let bindings = Bindings::new(&invoker, &target);
        assert_eq!(eval_formula("-a.atk * 2", &bindings).unwrap(), -80.0);
        assert_eq!(eval_formula("max(-5, 1, 3)", &bindings).unwrap(), 3.0);
        assert_eq!(eval_formula("floor(7.9)", &bindings).unwrap(), 7.0);
        assert_eq!(eval_formula("abs(0 - 9)", &bindings).unwrap(), 9.0);
        assert_eq!(eval_formula("min(10, a.atk % 7)", &bindings).unwrap(), 5.0);
    }
}
