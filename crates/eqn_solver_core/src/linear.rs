//! Linear equations in one variable and 2×2 linear systems.

use crate::params::require;
use eqn_model::solution::{LinearDetail, SystemDetail};
use eqn_model::{is_zero, Params, ProblemType, Solution, SolutionDetail, SolutionSet, SolveError};

/// `m x + b = c`.
pub fn solve_simple(params: &Params) -> Result<Solution, SolveError> {
    let category = ProblemType::SimpleLinear;
    let m = require(params, "m", category)?;
    let b = params.number_or("b", 0.0);
    let c = params.number_or("c", 0.0);

    let (solution_type, set) = if is_zero(m) {
        if is_zero(b - c) {
            ("All real numbers (identity)", SolutionSet::AllReals)
        } else {
            ("No solution (contradiction)", SolutionSet::Empty)
        }
    } else {
        (
            "One solution",
            SolutionSet::Discrete {
                values: vec![(c - b) / m],
            },
        )
    };

    Ok(Solution {
        category,
        solution_type: solution_type.to_string(),
        set,
        fallback: false,
        notes: Vec::new(),
        detail: SolutionDetail::Linear(LinearDetail { m, b, c }),
    })
}

/// `a1 x + b1 y = c1`, `a2 x + b2 y = c2` by Cramer's rule.
pub fn solve_system(params: &Params) -> Result<Solution, SolveError> {
    let category = ProblemType::LinearSystem;
    let a1 = require(params, "a1", category)?;
    let b1 = require(params, "b1", category)?;
    let c1 = require(params, "c1", category)?;
    let a2 = require(params, "a2", category)?;
    let b2 = require(params, "b2", category)?;
    let c2 = require(params, "c2", category)?;

    let determinant = a1 * b2 - a2 * b1;
    let det_x = c1 * b2 - c2 * b1;
    let det_y = a1 * c2 - a2 * c1;

    let (solution_type, set) = if is_zero(determinant) {
        // parallel or coincident lines
        if is_zero(det_x) && is_zero(det_y) {
            ("Infinitely many solutions (dependent)", SolutionSet::Infinite)
        } else {
            ("No solution (inconsistent)", SolutionSet::Empty)
        }
    } else {
        (
            "Unique solution",
            SolutionSet::Point {
                x: det_x / determinant,
                y: det_y / determinant,
            },
        )
    };
    tracing::debug!(determinant, solution_type, "linear system");

    Ok(Solution {
        category,
        solution_type: solution_type.to_string(),
        set,
        fallback: false,
        notes: Vec::new(),
        detail: SolutionDetail::System(SystemDetail {
            a1,
            b1,
            c1,
            a2,
            b2,
            c2,
            determinant,
            det_x,
            det_y,
        }),
    })
}
