//! Standard-form quadratic solving via the discriminant.

use crate::params::quadratic_coefficients;
use eqn_model::solution::{Point2, QuadraticDetail, RootNature};
use eqn_model::{
    Complex, Params, ProblemType, Solution, SolutionDetail, SolutionSet, SolveError, TOLERANCE,
};

/// Compute the quadratic discriminant `b^2 - 4ac`.
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadraticRoots {
    /// Ascending distinct real roots.
    Two(f64, f64),
    One(f64),
    /// `re + i·im` and its conjugate, `im > 0` first.
    Complex(Complex, Complex),
}

impl QuadraticRoots {
    pub fn nature(&self) -> RootNature {
        match self {
            QuadraticRoots::Two(..) => RootNature::TwoReal,
            QuadraticRoots::One(_) => RootNature::OneReal,
            QuadraticRoots::Complex(..) => RootNature::ComplexPair,
        }
    }

    pub fn real(&self) -> Vec<f64> {
        match *self {
            QuadraticRoots::Two(r1, r2) => vec![r1, r2],
            QuadraticRoots::One(r) => vec![r],
            QuadraticRoots::Complex(..) => Vec::new(),
        }
    }

    pub fn into_set(self) -> SolutionSet {
        match self {
            QuadraticRoots::Complex(z1, z2) => SolutionSet::Complex {
                values: vec![z1, z2],
            },
            real => SolutionSet::Discrete {
                values: real.real(),
            },
        }
    }
}

/// Roots of `ax² + bx + c`, classified with [`TOLERANCE`] on the discriminant.
///
/// Distinct real roots use the cancellation-free form
/// `q = -(b + sign(b)·√Δ)/2`, `x₁ = q/a`, `x₂ = c/q`.
pub fn quadratic_roots(a: f64, b: f64, c: f64) -> Result<(f64, QuadraticRoots), SolveError> {
    if a.abs() < TOLERANCE {
        return Err(SolveError::InvalidLeadingCoefficient { a });
    }
    let delta = discriminant(a, b, c);
    let roots = if delta > TOLERANCE {
        let sqrt_delta = delta.sqrt();
        let sign = if b >= 0.0 { 1.0 } else { -1.0 };
        let q = -0.5 * (b + sign * sqrt_delta);
        let (r1, r2) = (q / a, c / q);
        QuadraticRoots::Two(r1.min(r2), r1.max(r2))
    } else if delta.abs() <= TOLERANCE {
        QuadraticRoots::One(-b / (2.0 * a))
    } else {
        let re = -b / (2.0 * a);
        let im = (-delta).sqrt() / (2.0 * a).abs();
        let z = Complex::new(re, im);
        QuadraticRoots::Complex(z, z.conj())
    };
    Ok((delta, roots))
}

/// Vertex, intercepts and Vieta data for `ax² + bx + c`.
pub fn quadratic_detail(a: f64, b: f64, c: f64, delta: f64, nature: RootNature) -> QuadraticDetail {
    let h = -b / (2.0 * a);
    QuadraticDetail {
        a,
        b,
        c,
        discriminant: delta,
        nature,
        vertex: Point2 {
            x: h,
            y: a * h * h + b * h + c,
        },
        axis_of_symmetry: h,
        y_intercept: c,
        sum_of_roots: -b / a,
        product_of_roots: c / a,
    }
}

/// Solve directly from coefficients, tagging the result as `category`.
pub fn solve_coefficients(
    category: ProblemType,
    a: f64,
    b: f64,
    c: f64,
) -> Result<Solution, SolveError> {
    let (delta, roots) = quadratic_roots(a, b, c)?;
    let nature = roots.nature();
    Ok(Solution {
        category,
        solution_type: nature.label().to_string(),
        set: roots.into_set(),
        fallback: false,
        notes: Vec::new(),
        detail: SolutionDetail::Quadratic(quadratic_detail(a, b, c, delta, nature)),
    })
}

pub fn solve(category: ProblemType, params: &Params) -> Result<Solution, SolveError> {
    let (a, b, c) = quadratic_coefficients(params, category)?;
    solve_coefficients(category, a, b, c)
}
