//! Error types for the solve pipeline.

use thiserror::Error;

/// Errors that can occur while classifying or solving a problem.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// No recognition pattern matched and no usable explicit parameters.
    #[error("unable to recognize problem type for input: {input:?}")]
    UnrecognizedProblem { input: String },

    #[error("leading coefficient must be non-zero (got {a})")]
    InvalidLeadingCoefficient { a: f64 },

    /// Exponential base must be positive and different from 1.
    #[error("invalid exponential base {base}: must be positive and not equal to 1")]
    InvalidBase { base: f64 },

    #[error("no solution: {0}")]
    NoSolution(String),

    /// An explicit problem type that is not in the catalog.
    #[error("no solver available for problem type '{0}'")]
    NoSolverAvailable(String),

    #[error("insufficient parameters for {problem_type}: {needed}")]
    InsufficientParameters {
        problem_type: &'static str,
        needed: String,
    },

    #[error("no active problem: solve a problem before regenerating steps")]
    NoActiveProblem,
}

impl SolveError {
    /// Stable machine-readable code for wire formats.
    pub fn code(&self) -> &'static str {
        match self {
            SolveError::UnrecognizedProblem { .. } => "E_UNRECOGNIZED",
            SolveError::InvalidLeadingCoefficient { .. } => "E_LEADING_COEFFICIENT",
            SolveError::InvalidBase { .. } => "E_INVALID_BASE",
            SolveError::NoSolution(_) => "E_NO_SOLUTION",
            SolveError::NoSolverAvailable(_) => "E_NO_SOLVER",
            SolveError::InsufficientParameters { .. } => "E_INSUFFICIENT_PARAMS",
            SolveError::NoActiveProblem => "E_NO_ACTIVE_PROBLEM",
        }
    }
}
