//! Dispatch from problem type to solving algorithm.

use crate::{
    completing_square, exponential, factoring, growth, inequality, linear, projectile, quadratic_formula,
    vertex_analysis,
};
use eqn_model::{Problem, ProblemType, Solution, SolveError};

/// Solve `problem` with the algorithm registered for its type.
pub fn solve(problem: &Problem) -> Result<Solution, SolveError> {
    let kind = problem.problem_type;
    let params = &problem.parameters;
    tracing::info!(problem_type = kind.name(), "solving");

    let result = match kind {
        ProblemType::StandardQuadratic | ProblemType::QuadraticFormula => {
            quadratic_formula::solve(kind, params)
        }
        ProblemType::FactoringQuadratic => factoring::solve(params),
        ProblemType::CompletingSquare => completing_square::solve(params),
        ProblemType::QuadraticInequality => inequality::solve_quadratic(params),
        ProblemType::ProjectileMotion => projectile::solve(params),
        ProblemType::QuadraticOptimization => vertex_analysis::solve(params),
        ProblemType::LinearInequality => inequality::solve_linear(params),
        ProblemType::ExponentialInequality => exponential::solve_inequality(params),
        ProblemType::ExponentialQuadratic => exponential::solve_quadratic_form(params),
        ProblemType::SimpleExponential => exponential::solve_simple(params),
        ProblemType::NaturalExponential => exponential::solve_natural(params),
        ProblemType::LogarithmicEquation => exponential::solve_logarithmic(params),
        ProblemType::CompoundInterest
        | ProblemType::ExponentialGrowth
        | ProblemType::ExponentialDecay => growth::solve(kind, params),
        ProblemType::HalfLife => growth::solve_half_life(params),
        ProblemType::SimpleLinear => linear::solve_simple(params),
        ProblemType::LinearSystem => linear::solve_system(params),
    };

    match &result {
        Ok(solution) => tracing::debug!(solution_type = %solution.solution_type, fallback = solution.fallback, "solved"),
        Err(e) => tracing::warn!(code = e.code(), error = %e, "solver failed"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use eqn_model::{Params, SolutionSet};

    fn problem(kind: ProblemType, parameters: Params) -> Problem {
        Problem {
            original_input: String::new(),
            clean_input: String::new(),
            problem_type: kind,
            scenario: None,
            parameters,
            context: None,
        }
    }

    #[test]
    fn every_type_has_a_solver() {
        // an empty record never panics; it either solves or reports what is missing
        for kind in ProblemType::ALL {
            let _ = solve(&problem(kind, Params::new()));
        }
    }

    #[test]
    fn quadratic_variants_agree_on_roots() {
        let params = Params::new().with("a", 1.0).with("b", -5.0).with("c", 6.0);
        for kind in [
            ProblemType::StandardQuadratic,
            ProblemType::QuadraticFormula,
            ProblemType::FactoringQuadratic,
            ProblemType::CompletingSquare,
        ] {
            let s = solve(&problem(kind, params.clone())).unwrap();
            assert_eq!(s.category, kind);
            assert_eq!(s.set.real_values(), &[2.0, 3.0], "{:?}", kind);
        }
    }

    #[test]
    fn zero_leading_coefficient_is_an_error() {
        let params = Params::new().with("a", 0.0).with("b", 2.0).with("c", 1.0);
        let err = solve(&problem(ProblemType::StandardQuadratic, params)).unwrap_err();
        assert_eq!(err, SolveError::InvalidLeadingCoefficient { a: 0.0 });
    }

    #[test]
    fn routes_linear_system() {
        let params = Params::new()
            .with("a1", 1.0)
            .with("b1", 1.0)
            .with("c1", 3.0)
            .with("a2", 1.0)
            .with("b2", -1.0)
            .with("c2", 1.0);
        let s = solve(&problem(ProblemType::LinearSystem, params)).unwrap();
        assert_eq!(s.set, SolutionSet::Point { x: 2.0, y: 1.0 });
    }

    #[test]
    fn routes_word_problem_quadratics() {
        let thrown = Params::new().with("initial_velocity", 64.0).with("initial_height", 80.0);
        let s = solve(&problem(ProblemType::ProjectileMotion, thrown)).unwrap();
        assert_eq!(s.set.notation(), "maximum height = 144");

        let f = Params::new().with("a", -1.0).with("b", 4.0).with("c", 0.0);
        let s = solve(&problem(ProblemType::QuadraticOptimization, f)).unwrap();
        assert_eq!(s.set.notation(), "maximum value = 4");
    }
}
