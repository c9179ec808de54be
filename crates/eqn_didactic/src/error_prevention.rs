//! Common-mistake registry and per-step validation prompts.

use crate::names::*;
use eqn_model::step::{ErrorPrevention, Validation};
use eqn_model::{ProblemType, Step};

use ProblemType::*;

const QUADRATIC_EQUATIONS: &[ProblemType] = &[
    StandardQuadratic,
    QuadraticFormula,
    FactoringQuadratic,
    CompletingSquare,
];

/// `(types, step name, mistakes)`.
static MISTAKES: &[(&[ProblemType], &str, &[&str])] = &[
    (QUADRATIC_EQUATIONS, IDENTIFY_COEFFICIENTS, &[
        "Dropping the sign of a negative coefficient",
        "Forgetting that a missing term has coefficient 0",
        "Reading coefficients before moving every term to one side",
    ]),
    (QUADRATIC_EQUATIONS, CALCULATE_DISCRIMINANT, &[
        "Writing -b² instead of (-b)² when b is negative",
        "Forgetting the factor 4 in 4ac",
        "Subtracting 4ac with the wrong sign when a or c is negative",
    ]),
    (QUADRATIC_EQUATIONS, APPLY_QUADRATIC_FORMULA, &[
        "Dividing only the square root by 2a instead of the whole numerator",
        "Using b instead of -b in the numerator",
    ]),
    (QUADRATIC_EQUATIONS, CALCULATE_SOLUTIONS, &[
        "Computing only the + branch",
        "Arithmetic slips when combining -b with the root",
    ]),
    (&[FactoringQuadratic], FIND_FACTOR_PAIR, &[
        "Choosing a pair with the right product but the wrong sum",
        "Ignoring negative factor pairs",
    ]),
    (&[FactoringQuadratic], ZERO_PRODUCT, &[
        "Taking the factor shift as the root without changing its sign",
    ]),
    (&[CompletingSquare], COMPLETE_SQUARE, &[
        "Adding (b/2)² to one side only",
        "Squaring b instead of b/2",
    ]),
    (&[CompletingSquare], TAKE_SQUARE_ROOT, &[
        "Forgetting the negative square root",
    ]),
    (&[ProjectileMotion], WRITE_HEIGHT_FUNCTION, &[
        "Using the full acceleration 32 ft/s² (9.8 m/s²) instead of half of it",
        "Giving the initial velocity the wrong sign for a downward throw",
    ]),
    (&[ProjectileMotion], INTERPRET_TIMES, &[
        "Keeping a negative time from the quadratic formula",
    ]),
    (&[QuadraticOptimization], FIND_VERTEX, &[
        "Forgetting the minus sign in h = -b / 2a",
        "Reporting h as the extreme value instead of f(h)",
    ]),
    (&[QuadraticOptimization], DETERMINE_EXTREMUM, &[
        "Calling the vertex a maximum when the parabola opens upward",
    ]),
    (&[QuadraticInequality], SOLVE_RELATED_EQUATION, &[
        "Treating the roots as the final answer of the inequality",
    ]),
    (&[QuadraticInequality], TEST_EACH_INTERVAL, &[
        "Testing a critical point instead of a point inside the interval",
        "Including endpoints for a strict inequality",
    ]),
    (&[ExponentialInequality], SOLVE_FOR_X, &[
        "Keeping the inequality direction when dividing by a negative logarithm",
    ]),
    (&[ExponentialInequality], IDENTIFY_BASE_TYPE, &[
        "Assuming every exponential is increasing",
    ]),
    (&[SimpleExponential, ExponentialInequality], APPLY_LOG_POWER_RULE, &[
        "Writing ln(b^x) as ln(b)^x",
    ]),
    (&[SimpleExponential, NaturalExponential], ISOLATE_EXPONENTIAL, &[
        "Taking logarithms before dividing by the coefficient",
        "Writing ln(k·b^x) as k·ln(b^x)",
    ]),
    (&[ExponentialQuadratic], REJECT_INVALID, &[
        "Keeping a negative u and taking its logarithm",
    ]),
    (&[ExponentialQuadratic], MAKE_SUBSTITUTION, &[
        "Substituting u = b^(2x) instead of u = b^x",
    ]),
    (&[CompoundInterest, ExponentialGrowth, ExponentialDecay], SUBSTITUTE_VALUES, &[
        "Entering the rate as a percentage instead of a decimal",
        "Mixing up the number of periods n with the time t",
    ]),
    (&[CompoundInterest], CHOOSE_FORMULA, &[
        "Using the continuous formula for periodic compounding",
    ]),
    (&[LinearInequality], DIVIDE_COEFFICIENT, &[
        "Forgetting to flip the inequality when dividing by a negative number",
    ]),
    (&[SimpleLinear, LinearInequality], SUBTRACT_CONSTANT, &[
        "Subtracting the constant from one side only",
    ]),
    (&[LinearSystem], COMPUTE_DETERMINANT, &[
        "Multiplying along the wrong diagonal",
    ]),
];

/// Mistakes registered for `(problem_type, step_name)`; empty when unknown.
pub(crate) fn common_mistakes(problem_type: ProblemType, step_name: &str) -> Vec<String> {
    MISTAKES
        .iter()
        .filter(|(types, name, _)| *name == step_name && types.contains(&problem_type))
        .flat_map(|(_, _, mistakes)| mistakes.iter().map(|m| m.to_string()))
        .collect()
}

pub(crate) fn error_prevention(problem_type: ProblemType, step: &Step) -> ErrorPrevention {
    let common = common_mistakes(problem_type, &step.name);
    let prevention_tips = common
        .iter()
        .map(|m| format!("Watch out: {}", m.to_lowercase()))
        .collect();

    let mut check_points = Vec::new();
    if let Some(result) = step.result_text() {
        check_points.push(format!("Does '{}' follow from the previous line?", result));
    }
    if step.before_expression.is_some() {
        check_points.push("Was the same operation applied to both sides?".to_string());
    }

    let mut warnings = Vec::new();
    if problem_type.is_inequality() && step.algebraic_rule.as_deref().is_some_and(|r| r.contains("reverses")) {
        warnings.push("The inequality sign changes direction in this step".to_string());
    }
    if step.name == REJECT_INVALID || step.name == COMPARE_WITH_RANGE {
        warnings.push("Exponential expressions are always positive".to_string());
    }

    ErrorPrevention {
        common_mistakes: common,
        prevention_tips,
        check_points,
        warnings,
    }
}

pub(crate) fn validation(step: &Step) -> Validation {
    let expected = step
        .result_text()
        .map(str::to_string)
        .unwrap_or_else(|| step.description.clone());
    let self_check = if step.final_answer {
        "Substitute your answer into the original problem. Does it hold?".to_string()
    } else {
        format!("Can you explain why '{}' is the right move here?", step.name)
    };
    let mut troubleshooting = vec!["Redo the previous step and compare line by line".to_string()];
    if step.formula.is_some() {
        troubleshooting.push("Check that every value went into the right place in the formula".to_string());
    }
    Validation {
        self_check,
        expected_result: expected,
        troubleshooting,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_key_returns_mistakes() {
        let m = common_mistakes(StandardQuadratic, CALCULATE_DISCRIMINANT);
        assert_eq!(m.len(), 3);
        assert!(m[0].contains("(-b)²"));
    }

    #[test]
    fn unknown_key_is_empty() {
        assert!(common_mistakes(LinearSystem, CALCULATE_DISCRIMINANT).is_empty());
        assert!(common_mistakes(StandardQuadratic, "Nonexistent").is_empty());
    }

    #[test]
    fn flip_warning_on_inequalities() {
        let step = Step::new(DIVIDE_COEFFICIENT, "Divide")
            .transform("-2x < 6", "x > -3")
            .rule("Multiplying or dividing by a negative number reverses the inequality");
        let ep = error_prevention(LinearInequality, &step);
        assert_eq!(ep.warnings.len(), 1);
        assert_eq!(ep.common_mistakes.len(), 1);
        assert_eq!(ep.check_points.len(), 2);
    }

    #[test]
    fn projectile_gravity_mistake() {
        let m = common_mistakes(ProjectileMotion, WRITE_HEIGHT_FUNCTION);
        assert!(m[0].contains("half of it"));
        assert!(common_mistakes(StandardQuadratic, WRITE_HEIGHT_FUNCTION).is_empty());
    }
}
