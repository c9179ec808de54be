//! Completing the square into vertex form.

use crate::params::quadratic_coefficients;
use eqn_model::numeric::{fmt_binomial, fmt_num, is_zero};
use eqn_model::solution::{CompletingSquareDetail, Point2, RootNature};
use eqn_model::{
    Complex, Params, ProblemType, Solution, SolutionDetail, SolutionSet, SolveError, TOLERANCE,
};

/// `a(x + h)² + k`, omitting unit factors and a zero `k`.
pub fn vertex_form(a: f64, half_b: f64, k: f64) -> String {
    let square = format!("({})²", fmt_binomial("x", half_b));
    let lead = if is_zero(a - 1.0) {
        square
    } else if is_zero(a + 1.0) {
        format!("-{}", square)
    } else {
        format!("{}{}", fmt_num(a), square)
    };
    if is_zero(k) {
        lead
    } else if k < 0.0 {
        format!("{} - {}", lead, fmt_num(-k))
    } else {
        format!("{} + {}", lead, fmt_num(k))
    }
}

pub fn solve(params: &Params) -> Result<Solution, SolveError> {
    let (a, b, c) = quadratic_coefficients(params, ProblemType::CompletingSquare)?;
    if a.abs() < TOLERANCE {
        return Err(SolveError::InvalidLeadingCoefficient { a });
    }
    let b_over_a = b / a;
    let c_over_a = c / a;
    let half_b = b_over_a / 2.0;
    let half_b_squared = half_b * half_b;
    let remainder = half_b_squared - c_over_a;
    let k = c - a * half_b_squared;

    let (nature, set) = if remainder > TOLERANCE {
        let root = remainder.sqrt();
        (
            RootNature::TwoReal,
            SolutionSet::Discrete {
                values: vec![-half_b - root, -half_b + root],
            },
        )
    } else if remainder.abs() <= TOLERANCE {
        (
            RootNature::OneReal,
            SolutionSet::Discrete {
                values: vec![-half_b],
            },
        )
    } else {
        let z = Complex::new(-half_b, (-remainder).sqrt());
        (
            RootNature::ComplexPair,
            SolutionSet::Complex {
                values: vec![z, z.conj()],
            },
        )
    };

    Ok(Solution {
        category: ProblemType::CompletingSquare,
        solution_type: nature.label().to_string(),
        set,
        fallback: false,
        notes: Vec::new(),
        detail: SolutionDetail::CompletingSquare(CompletingSquareDetail {
            a,
            b,
            c,
            b_over_a,
            c_over_a,
            half_b,
            half_b_squared,
            remainder,
            vertex_form: vertex_form(a, half_b, k),
            vertex: Point2 { x: -half_b, y: k },
        }),
    })
}
