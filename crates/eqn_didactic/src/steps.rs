//! Base step generation.

use crate::{exponential_steps, growth_steps, linear_steps, quadratic_steps};
use eqn_model::numeric::fmt_num;
use eqn_model::{Complex, Problem, Solution, SolutionDetail, Step};

/// `x = 2 or x = 3`.
pub(crate) fn solutions_text(values: &[f64]) -> String {
    if values.is_empty() {
        return "no real solutions".to_string();
    }
    values
        .iter()
        .map(|v| format!("x = {}", fmt_num(*v)))
        .collect::<Vec<_>>()
        .join(" or ")
}

pub(crate) fn complex_text(values: &[Complex]) -> String {
    values
        .iter()
        .map(|z| format!("x = {}", z))
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Ordered base steps for the strategy that produced `solution`.
///
/// Steps are numbered from 1 and the last one carries the final answer.
pub fn generate(problem: &Problem, solution: &Solution) -> Vec<Step> {
    let set = &solution.set;
    let mut steps = match &solution.detail {
        SolutionDetail::Quadratic(d) => quadratic_steps::formula(d, set),
        SolutionDetail::Factoring(d) => quadratic_steps::factoring(d, set),
        SolutionDetail::CompletingSquare(d) => quadratic_steps::completing_square(d, set),
        SolutionDetail::QuadraticInequality(d) => quadratic_steps::inequality(d, &solution.solution_type),
        SolutionDetail::Projectile(d) => quadratic_steps::projectile(d),
        SolutionDetail::VertexAnalysis(d) => quadratic_steps::vertex_analysis(d),
        SolutionDetail::LinearInequality(d) => linear_steps::inequality(d, &solution.solution_type),
        SolutionDetail::ExponentialInequality(d) => {
            exponential_steps::inequality(d, &solution.solution_type)
        }
        SolutionDetail::ExponentialQuadratic(d) => exponential_steps::quadratic_form(d, set),
        SolutionDetail::Exponential(d) => exponential_steps::simple(d, set),
        SolutionDetail::Logarithmic(d) => exponential_steps::logarithmic(d, set),
        SolutionDetail::Growth(d) => growth_steps::growth(problem.problem_type, d),
        SolutionDetail::HalfLife(d) => growth_steps::half_life(d),
        SolutionDetail::Linear(d) => linear_steps::simple(d, solution),
        SolutionDetail::System(d) => linear_steps::system(d, solution),
    };
    number(&mut steps);
    tracing::debug!(
        problem_type = problem.problem_type.name(),
        steps = steps.len(),
        "generated steps"
    );
    steps
}

fn number(steps: &mut [Step]) {
    for (i, step) in steps.iter_mut().enumerate() {
        step.step_number = i + 1;
        step.final_answer = false;
    }
    if let Some(last) = steps.last_mut() {
        last.final_answer = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names;
    use eqn_model::{Params, ProblemType};

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

    fn steps_for(kind: ProblemType, parameters: Params) -> Vec<Step> {
        let p = problem(kind, parameters);
        let s = eqn_solver_core::solve(&p).unwrap();
        generate(&p, &s)
    }

    fn names_of(steps: &[Step]) -> Vec<&str> {
        steps.iter().map(|s| s.name.as_str()).collect()
    }

    fn abc(a: f64, b: f64, c: f64) -> Params {
        Params::new().with("a", a).with("b", b).with("c", c)
    }

    #[test]
    fn two_real_roots_skeleton() {
        let steps = steps_for(ProblemType::StandardQuadratic, abc(1.0, -5.0, 6.0));
        assert_eq!(
            names_of(&steps),
            vec![
                names::GIVEN_EQUATION,
                names::IDENTIFY_COEFFICIENTS,
                names::CALCULATE_DISCRIMINANT,
                names::APPLY_QUADRATIC_FORMULA,
                names::SIMPLIFY_SQUARE_ROOT,
                names::CALCULATE_SOLUTIONS,
            ]
        );
        let numbers: Vec<usize> = steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
        assert!(steps.last().unwrap().final_answer);
        assert_eq!(steps.iter().filter(|s| s.final_answer).count(), 1);
        assert_eq!(steps[5].result_text(), Some("x = 2 or x = 3"));
    }

    #[test]
    fn repeated_and_complex_branches() {
        let steps = steps_for(ProblemType::QuadraticFormula, abc(1.0, 2.0, 1.0));
        assert_eq!(steps.last().unwrap().name, names::CALCULATE_SOLUTION);
        let steps = steps_for(ProblemType::QuadraticFormula, abc(1.0, 0.0, 1.0));
        assert_eq!(steps.last().unwrap().name, names::IDENTIFY_COMPLEX_SOLUTIONS);
        assert_eq!(steps.last().unwrap().result_text(), Some("x = 0 + 1i or x = 0 - 1i"));
    }

    #[test]
    fn factoring_with_common_factor() {
        let steps = steps_for(ProblemType::FactoringQuadratic, abc(2.0, -10.0, 12.0));
        assert_eq!(
            names_of(&steps),
            vec![
                names::GIVEN_EQUATION,
                names::FACTOR_OUT_COMMON,
                names::FIND_FACTOR_PAIR,
                names::FACTOR_QUADRATIC,
                names::ZERO_PRODUCT,
                names::SOLVE_FOR_X,
            ]
        );
        assert_eq!(steps[3].after_expression.as_deref(), Some("(x - 3)(x - 2) = 0"));
    }

    #[test]
    fn factoring_fallback_uses_formula_tail() {
        let steps = steps_for(ProblemType::FactoringQuadratic, abc(1.0, 1.0, -1.0));
        assert_eq!(steps[1].name, names::CANNOT_FACTOR);
        assert_eq!(steps[2].name, names::IDENTIFY_COEFFICIENTS);
    }

    #[test]
    fn completing_square_non_monic() {
        let steps = steps_for(ProblemType::CompletingSquare, abc(2.0, -8.0, 6.0));
        assert_eq!(steps[1].name, names::DIVIDE_LEADING);
        assert_eq!(steps[4].after_expression.as_deref(), Some("(x - 2)² = 1"));
        assert_eq!(steps.last().unwrap().result_text(), Some("x = 1 or x = 3"));
    }

    #[test]
    fn transforming_steps_carry_both_sides() {
        for kind in [
            ProblemType::StandardQuadratic,
            ProblemType::FactoringQuadratic,
            ProblemType::CompletingSquare,
        ] {
            for step in steps_for(kind, abc(1.0, 6.0, 5.0)) {
                assert_eq!(
                    step.before_expression.is_some(),
                    step.after_expression.is_some(),
                    "{}",
                    step.name
                );
            }
        }
    }

    #[test]
    fn inequality_has_interval_tests() {
        let steps = steps_for(
            ProblemType::QuadraticInequality,
            abc(1.0, 0.0, -4.0).with("operator", ">"),
        );
        assert_eq!(
            names_of(&steps),
            vec![
                names::GIVEN_INEQUALITY,
                names::SOLVE_RELATED_EQUATION,
                names::IDENTIFY_TEST_INTERVALS,
                names::TEST_EACH_INTERVAL,
                names::WRITE_SOLUTION,
            ]
        );
        assert_eq!(steps[4].expression.as_deref(), Some("(-∞, -2) ∪ (2, ∞)"));
    }

    #[test]
    fn projectile_target_skeleton() {
        let steps = steps_for(
            ProblemType::ProjectileMotion,
            Params::new()
                .with("initial_velocity", 64.0)
                .with("initial_height", 80.0)
                .with("target_height", 128.0),
        );
        assert_eq!(
            names_of(&steps),
            vec![
                names::WRITE_HEIGHT_FUNCTION,
                names::FIND_TIME_OF_MAX,
                names::COMPUTE_MAX_HEIGHT,
                names::SET_TARGET_HEIGHT,
                names::SOLVE_FOR_TIME,
                names::INTERPRET_TIMES,
            ]
        );
        assert_eq!(steps[0].expression.as_deref(), Some("h(t) = -16t² + 64t + 80"));
        assert_eq!(steps[2].after_expression.as_deref(), Some("h(2) = 144 ft"));
        assert_eq!(steps[3].after_expression.as_deref(), Some("-16t² + 64t - 48 = 0"));
        assert_eq!(
            steps[5].result_text(),
            Some("h = 128 ft at t = 1 s (on the way up) and t = 3 s (on the way down)")
        );
    }

    #[test]
    fn maximum_height_ends_at_the_peak() {
        let steps = steps_for(
            ProblemType::ProjectileMotion,
            Params::new().with("initial_velocity", 19.6).with("units", "metric"),
        );
        assert_eq!(steps.len(), 3);
        assert!(steps[2].final_answer);
        assert_eq!(steps[2].visual_hint.as_deref(), Some("It lands at t = 4 s"));
    }

    #[test]
    fn vertex_analysis_skeleton() {
        let steps = steps_for(
            ProblemType::QuadraticOptimization,
            abc(-2.0, 8.0, 3.0).with("goal", "maximize"),
        );
        assert_eq!(
            names_of(&steps),
            vec![
                names::GIVEN_FUNCTION,
                names::IDENTIFY_COEFFICIENTS,
                names::FIND_VERTEX,
                names::WRITE_VERTEX_FORM,
                names::DESCRIBE_GRAPH,
                names::STATE_RANGE,
                names::DETERMINE_EXTREMUM,
            ]
        );
        assert_eq!(steps[2].after_expression.as_deref(), Some("h = -8 / -4 = 2"));
        assert_eq!(steps[3].after_expression.as_deref(), Some("f(x) = -2(x - 2)² + 11"));
        assert_eq!(steps[5].expression.as_deref(), Some("Range: (-∞, 11]"));
        assert_eq!(steps[6].result_text(), Some("Maximum value f(2) = 11"));
    }
}
