//! Narrative transitions inserted between consecutive steps.

use crate::names::*;
use eqn_model::{BridgeStep, Family, Step};

/// `(why, benefit)` for moving on to a step, keyed by the step's name.
static PURPOSE: &[(&str, &str, &str)] = &[
    (IDENTIFY_COEFFICIENTS, "Every solution method works from the coefficients", "The numbers we need are in plain view"),
    (CALCULATE_DISCRIMINANT, "The discriminant tells us what kind of solutions to expect", "We know in advance how many answers to look for"),
    (APPLY_QUADRATIC_FORMULA, "The formula solves any quadratic once the discriminant is known", "The answer reduces to arithmetic"),
    (SIMPLIFY_SQUARE_ROOT, "A simplified root makes the two branches easy to compute", "Less chance of arithmetic slips"),
    (FIND_FACTOR_PAIR, "Factoring needs two numbers matching the product and the sum", "A factored form exposes the roots directly"),
    (ZERO_PRODUCT, "A product of factors is zero only when a factor is zero", "One hard equation becomes two easy ones"),
    (COMPLETE_SQUARE, "A perfect square can be undone with a single square root", "The equation takes vertex form"),
    (TAKE_SQUARE_ROOT, "The squared binomial stands alone", "The unknown is one step away"),
    (TEST_EACH_INTERVAL, "The sign is constant between critical points", "A single test value settles each interval"),
    (FIND_TIME_OF_MAX, "The peak of the flight is the vertex of the height function", "We learn when the object stops rising"),
    (SET_TARGET_HEIGHT, "The question asks when a particular height is reached", "The height function becomes a quadratic equation"),
    (INTERPRET_TIMES, "The equation knows nothing about the launch moment", "Only physically meaningful times remain"),
    (FIND_VERTEX, "The extreme value of a quadratic always occurs at its vertex", "The optimum is located exactly"),
    (WRITE_VERTEX_FORM, "The vertex gives the shifts of y = x²", "The whole graph can be read from one expression"),
    (DETERMINE_EXTREMUM, "The direction of opening decides what the vertex value means", "The question is answered with a maximum or a minimum"),
    (TAKE_LOGARITHM, "The unknown is stuck in an exponent", "Logarithms bring it down to ordinary algebra"),
    (TAKE_NATURAL_LOGARITHM, "The natural logarithm undoes base e", "The exponent appears directly"),
    (MAKE_SUBSTITUTION, "The powers form a hidden quadratic", "Known quadratic techniques apply"),
    (REJECT_INVALID, "An exponential can never be zero or negative", "Only meaningful candidates remain"),
    (BACK_SUBSTITUTE, "The values found are for u, not x", "We return to the original unknown"),
    (CHOOSE_FORMULA, "The situation matches a standard growth model", "The problem becomes substitution"),
    (SUBSTITUTE_VALUES, "The formula is general; our problem is specific", "Only one unknown remains"),
    (DIVIDE_COEFFICIENT, "x is still multiplied by a coefficient", "x ends up alone"),
    (COMPUTE_DETERMINANT, "The determinant decides whether a unique solution exists", "We know which case we are in"),
];

fn strategy(family: Family) -> &'static str {
    match family {
        Family::Quadratic => "Reduce the quadratic to simpler equations whose solutions can be read off",
        Family::Exponential => "Isolate the exponential, then use logarithms to reach the exponent",
        Family::Finance => "Match the situation to a model, substitute and solve for the unknown",
        Family::Linear => "Undo each operation on the unknown in reverse order",
    }
}

pub(crate) fn bridge(prev: &Step, next: &Step, total: usize, family: Family) -> BridgeStep {
    let (why, benefit) = PURPOSE
        .iter()
        .find(|(name, _, _)| *name == next.name)
        .map(|(_, why, benefit)| (why.to_string(), benefit.to_string()))
        .unwrap_or_else(|| {
            (
                format!("The result of '{}' sets up '{}'", prev.name, next.name),
                "Each step brings the problem closer to the answer".to_string(),
            )
        });
    let current = match prev.result_text() {
        Some(expr) => format!("After '{}' we have {}", prev.name, expr),
        None => format!("We have completed '{}'", prev.name),
    };
    BridgeStep {
        title: format!("From {} to {}", prev.name, next.name),
        current_state: current,
        next_goal: next.description.clone(),
        why,
        benefit,
        progression: format!("Step {} of {} done", prev.step_number, total),
        strategy: strategy(family).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_target_uses_table() {
        let prev = Step::new(IDENTIFY_COEFFICIENTS, "read").expression("a = 1, b = -5, c = 6");
        let next = Step::new(CALCULATE_DISCRIMINANT, "Compute the discriminant");
        let b = bridge(&prev, &next, 6, Family::Quadratic);
        assert_eq!(b.why, "The discriminant tells us what kind of solutions to expect");
        assert_eq!(b.current_state, "After 'Identify coefficients' we have a = 1, b = -5, c = 6");
        assert_eq!(b.next_goal, "Compute the discriminant");
    }

    #[test]
    fn unknown_target_falls_back() {
        let prev = Step::new("A", "first");
        let next = Step::new("B", "second");
        let b = bridge(&prev, &next, 2, Family::Linear);
        assert!(b.why.contains("'A'"));
        assert_eq!(b.current_state, "We have completed 'A'");
    }
}
