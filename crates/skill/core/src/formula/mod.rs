//! Sandboxed damage-formula evaluation.
//!
//! Damage formulas are short arithmetic expressions stored in skill data,
//! written over a fixed slot alphabet: `a` the invoker, `b` the target,
//! `c`..`l` the combination participants in tag order, and `v[n]` the shared
//! variable store. This module replaces the host's free-form expression
//! engine with a closed evaluator: tokenize, parse to a small AST, then fold
//! the AST over an explicit [`Bindings`] table. Undefined identifiers,
//! unbound slots, and non-finite results are typed errors, never
//! language-level faults.
//!
//! ## Examples
//!
//! ```ignore
//! // 4x invoker attack, shredded by target defense
//! "a.atk * 4 - b.def * 2"
//!
//! // both participants contribute magic attack, scaled by a story variable
//! "(c.mat + d.mat) * v[12]"
//!
//! // never below a flat 50
//! "max(a.atk * 2 - b.def, 50)"
//! ```

pub mod evaluate;
pub mod lexer;
pub mod parse;

pub use evaluate::{Bindings, evaluate};

use std::str::FromStr;

use crate::error::{ErrorSeverity, ResolverError};
use crate::tag::MAX_PARTICIPANTS;
use crate::types::StatKind;

/// Evaluates formula source against the given bindings.
///
/// This is the one entry point the outcome evaluator uses: lex, parse,
/// evaluate, and reject non-finite results in a single call.
///
/// # Errors
///
/// Any [`FormulaError`]; callers on the damage path convert every error to a
/// zero result rather than propagating.
pub fn eval_formula(source: &str, bindings: &Bindings<'_>) -> Result<f64, FormulaError> {
    let tokens = lexer::tokenize(source)?;
    let expr = parse::parse(&tokens)?;
    let value = evaluate(&expr, bindings)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FormulaError::NonFinite)
    }
}

// ============================================================================
// Formula Errors
// ============================================================================

/// Errors raised while lexing, parsing, or evaluating a formula.
///
/// These never cross the resolver boundary: the outcome evaluator converts
/// them to a zero-damage result so a bad formula cannot abort a turn.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FormulaError {
    /// A character outside the formula grammar.
    #[error("unexpected character `{0}` in formula")]
    UnexpectedChar(char),

    /// A number literal that does not scan.
    #[error("malformed number literal `{0}`")]
    InvalidNumber(String),

    /// A token that cannot start or continue an expression here.
    #[error("unexpected token `{0}`")]
    UnexpectedToken(String),

    /// The formula ended mid-expression.
    #[error("formula ended unexpectedly")]
    UnexpectedEnd,

    /// Leftover tokens after a complete expression.
    #[error("trailing input after expression")]
    TrailingInput,

    /// An identifier that is neither a slot, `v`, nor a known function.
    #[error("unknown identifier `{0}`")]
    UnknownIdentifier(String),

    /// A slot referenced without a stat access (`c` instead of `c.atk`).
    #[error("slot `{0}` must be followed by a stat access")]
    MissingStatAccess(char),

    /// A stat name no combatant exposes.
    #[error("unknown stat `{0}`")]
    UnknownStat(String),

    /// A function name the evaluator does not provide.
    #[error("unknown function `{0}`")]
    UnknownFunction(String),

    /// A known function called with the wrong number of arguments.
    #[error("function `{func}` cannot take {found} arguments")]
    WrongArity { func: &'static str, found: usize },

    /// A participant slot past the declared participant count, or a declared
    /// participant missing from the roster.
    #[error("slot `{0}` has no bound combatant")]
    UnboundSlot(char),

    /// A `v[n]` reference with no variable store or no value at `n`.
    #[error("variable v[{0}] is not set")]
    MissingVariable(usize),

    /// A `v[...]` index that is negative or fractional.
    #[error("variable index is not a non-negative integer")]
    InvalidVariableIndex,

    /// The expression produced NaN or an infinity.
    #[error("formula produced a non-finite value")]
    NonFinite,
}

impl ResolverError for FormulaError {
    fn severity(&self) -> ErrorSeverity {
        use FormulaError::*;
        match self {
            UnboundSlot(_) | MissingVariable(_) | InvalidVariableIndex | NonFinite => {
                ErrorSeverity::Recoverable
            }
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use FormulaError::*;
        match self {
            UnexpectedChar(_) => "FORMULA_UNEXPECTED_CHAR",
            InvalidNumber(_) => "FORMULA_INVALID_NUMBER",
            UnexpectedToken(_) => "FORMULA_UNEXPECTED_TOKEN",
            UnexpectedEnd => "FORMULA_UNEXPECTED_END",
            TrailingInput => "FORMULA_TRAILING_INPUT",
            UnknownIdentifier(_) => "FORMULA_UNKNOWN_IDENTIFIER",
            MissingStatAccess(_) => "FORMULA_MISSING_STAT_ACCESS",
            UnknownStat(_) => "FORMULA_UNKNOWN_STAT",
            UnknownFunction(_) => "FORMULA_UNKNOWN_FUNCTION",
            WrongArity { .. } => "FORMULA_WRONG_ARITY",
            UnboundSlot(_) => "FORMULA_UNBOUND_SLOT",
            MissingVariable(_) => "FORMULA_MISSING_VARIABLE",
            InvalidVariableIndex => "FORMULA_INVALID_VARIABLE_INDEX",
            NonFinite => "FORMULA_NON_FINITE",
        }
    }
}

// ============================================================================
// Expression AST
// ============================================================================

/// A combatant slot in the fixed binding alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// `a` - whoever invoked the skill.
    Invoker,
    /// `b` - the current target.
    Target,
    /// `c`..`l` - participant by 0-based tag order.
    Participant(usize),
}

impl Slot {
    /// Maps a one-letter identifier onto a slot, if it is in the alphabet.
    pub fn from_name(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        let letter = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match letter {
            'a' => Some(Self::Invoker),
            'b' => Some(Self::Target),
            'c'..='l' => Some(Self::Participant(letter as usize - 'c' as usize)),
            _ => None,
        }
    }

    /// The letter this slot binds to in formula source.
    pub fn letter(self) -> char {
        match self {
            Self::Invoker => 'a',
            Self::Target => 'b',
            // Participant indexes are constructed from `c`..`l` only, so the
            // cast back is total.
            Self::Participant(index) => {
                debug_assert!(index < MAX_PARTICIPANTS);
                (b'c' + index as u8) as char
            }
        }
    }
}

/// Prefix operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
}

/// Infix arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

/// Built-in function callable from formulas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Func {
    Min,
    Max,
    Floor,
    Abs,
}

impl Func {
    /// Resolves a function name, or `None` if unknown.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            "floor" => Some(Self::Floor),
            "abs" => Some(Self::Abs),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::Floor => "floor",
            Self::Abs => "abs",
        }
    }

    /// Returns true if the function accepts `count` arguments.
    ///
    /// `min`/`max` are variadic over two or more values; `floor`/`abs` take
    /// exactly one.
    pub const fn accepts_arity(self, count: usize) -> bool {
        match self {
            Self::Min | Self::Max => count >= 2,
            Self::Floor | Self::Abs => count == 1,
        }
    }
}

/// Parsed formula expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Numeric literal.
    Number(f64),
    /// Stat access on a bound slot, e.g. `c.mat`.
    Stat { slot: Slot, stat: StatKind },
    /// Variable-store read, e.g. `v[12]`; the index is itself an expression.
    Var(Box<Expr>),
    /// Prefix operation.
    Unary { op: UnaryOp, expr: Box<Expr> },
    /// Infix operation.
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// Built-in function call.
    Call { func: Func, args: Vec<Expr> },
}

/// Parses a stat identifier, mapping failures onto [`FormulaError`].
pub(crate) fn parse_stat(name: &str) -> Result<StatKind, FormulaError> {
    StatKind::from_str(name).map_err(|_| FormulaError::UnknownStat(name.to_string()))
}
