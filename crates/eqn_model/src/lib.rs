//! Shared data model for the equation engine.
//!
//! Everything that flows between the parser, the solvers, the didactic layer
//! and the session lives here: problem descriptions, solution sets, steps,
//! verification reports and the error type.

pub mod domain;
pub mod error;
pub mod graph;
pub mod numeric;
pub mod problem;
pub mod solution;
pub mod step;
pub mod verify;

pub use domain::{Bound, Complex, Interval, SolutionSet};
pub use error::SolveError;
pub use graph::GraphData;
pub use numeric::{fmt_num, is_zero, DISPLAY_PRECISION, TOLERANCE, VERIFY_TOLERANCE};
pub use problem::{Family, ParamValue, Params, Problem, ProblemType};
pub use solution::{Solution, SolutionDetail};
pub use step::{
    BridgeStep, EnhancedStep, Enhancement, ExplanationLevel, Step, StepEntry,
};
pub use verify::{Confidence, IntervalCheck, SubstitutionCheck, VerificationReport};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelOp {
    /// `=`
    Eq,
    /// `!=`
    Neq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Leq,
    /// `>=`
    Geq,
}

impl RelOp {
    /// Parse an operator token. Accepts both ASCII and the `≤ ≥ ≠` glyphs.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "=" | "==" => Some(RelOp::Eq),
            "!=" | "≠" => Some(RelOp::Neq),
            "<" => Some(RelOp::Lt),
            ">" => Some(RelOp::Gt),
            "<=" | "≤" => Some(RelOp::Leq),
            ">=" | "≥" => Some(RelOp::Geq),
            _ => None,
        }
    }

    /// Operator obtained by multiplying both sides by a negative number.
    pub fn flip(self) -> Self {
        match self {
            RelOp::Lt => RelOp::Gt,
            RelOp::Gt => RelOp::Lt,
            RelOp::Leq => RelOp::Geq,
            RelOp::Geq => RelOp::Leq,
            other => other,
        }
    }

    /// True when equality satisfies the relation.
    pub fn is_inclusive(self) -> bool {
        matches!(self, RelOp::Eq | RelOp::Leq | RelOp::Geq)
    }

    pub fn is_inequality(self) -> bool {
        !matches!(self, RelOp::Eq)
    }

    /// `lhs op rhs` with sides closer than [`TOLERANCE`] counted as equal.
    pub fn holds(self, lhs: f64, rhs: f64) -> bool {
        self.holds_within(lhs, rhs, TOLERANCE)
    }

    /// `lhs op rhs` with sides closer than `tolerance` counted as equal, so
    /// an inclusive relation accepts a rounding residual at its boundary
    /// and a strict one rejects it.
    pub fn holds_within(self, lhs: f64, rhs: f64, tolerance: f64) -> bool {
        let equal = (lhs - rhs).abs() < tolerance;
        match self {
            RelOp::Eq => equal,
            RelOp::Neq => !equal,
            RelOp::Lt => lhs < rhs && !equal,
            RelOp::Gt => lhs > rhs && !equal,
            RelOp::Leq => lhs < rhs || equal,
            RelOp::Geq => lhs > rhs || equal,
        }
    }

    /// Pretty glyph used in step text.
    pub fn symbol(self) -> &'static str {
        match self {
            RelOp::Eq => "=",
            RelOp::Neq => "≠",
            RelOp::Lt => "<",
            RelOp::Gt => ">",
            RelOp::Leq => "≤",
            RelOp::Geq => "≥",
        }
    }
}

impl std::fmt::Display for RelOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelOp::Eq => write!(f, "="),
            RelOp::Neq => write!(f, "!="),
            RelOp::Lt => write!(f, "<"),
            RelOp::Gt => write!(f, ">"),
            RelOp::Leq => write!(f, "<="),
            RelOp::Geq => write!(f, ">="),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_glyphs() {
        assert_eq!(RelOp::parse("≤"), Some(RelOp::Leq));
        assert_eq!(RelOp::parse(" >= "), Some(RelOp::Geq));
        assert_eq!(RelOp::parse("≠"), Some(RelOp::Neq));
        assert_eq!(RelOp::parse("=>"), None);
    }

    #[test]
    fn flip_swaps_direction_only() {
        assert_eq!(RelOp::Lt.flip(), RelOp::Gt);
        assert_eq!(RelOp::Geq.flip(), RelOp::Leq);
        assert_eq!(RelOp::Eq.flip(), RelOp::Eq);
        assert_eq!(RelOp::Neq.flip(), RelOp::Neq);
    }

    #[test]
    fn holds_uses_tolerance_for_equality() {
        assert!(RelOp::Eq.holds(1.0, 1.0 + 1e-12));
        assert!(!RelOp::Neq.holds(1.0, 1.0 + 1e-12));
        assert!(RelOp::Leq.holds(2.0, 2.0));
        assert!(!RelOp::Lt.holds(2.0, 2.0));
    }

    #[test]
    fn inclusive_relations_absorb_rounding_residue() {
        let residue = 0.49 - 0.98 + 0.49 + 5e-17;
        assert!(RelOp::Leq.holds(residue, 0.0));
        assert!(RelOp::Geq.holds(-1e-12, 0.0));
        assert!(!RelOp::Lt.holds(-1e-12, 0.0));
        assert!(!RelOp::Gt.holds(1e-12, 0.0));
        assert!(RelOp::Leq.holds_within(5e-10, 0.0, 1e-9));
        assert!(!RelOp::Leq.holds_within(5e-10, 0.0, 1e-10));
        assert!(RelOp::Gt.holds(1e-3, 0.0));
    }
}
