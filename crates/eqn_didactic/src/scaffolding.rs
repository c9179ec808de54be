//! Guided practice material for the scaffolded level.

use crate::names::*;
use eqn_model::step::{HintLadder, Metacognition, Scaffolding};
use eqn_model::{Family, ProblemType, Step};

fn guiding_questions(step: &Step) -> Vec<String> {
    let mut questions = match step.name.as_str() {
        IDENTIFY_COEFFICIENTS => vec![
            "Is every term on one side with 0 on the other?".to_string(),
            "Which number multiplies x², which multiplies x, and which stands alone?".to_string(),
        ],
        CALCULATE_DISCRIMINANT => vec![
            "What are b² and 4ac for this equation?".to_string(),
            "Is the result positive, zero or negative, and what does that predict?".to_string(),
        ],
        TAKE_LOGARITHM | TAKE_NATURAL_LOGARITHM => vec![
            "Is the exponential term alone on one side?".to_string(),
            "Which logarithm makes the next step simplest?".to_string(),
        ],
        DIVIDE_COEFFICIENT => vec![
            "Is the number you divide by positive or negative?".to_string(),
        ],
        FIND_VERTEX | FIND_TIME_OF_MAX => vec![
            "What are -b and 2a here?".to_string(),
            "Does the parabola open up or down?".to_string(),
        ],
        INTERPRET_TIMES => vec![
            "Which times happen before the launch?".to_string(),
        ],
        TEST_EACH_INTERVAL => vec![
            "Which point inside each interval is easiest to test?".to_string(),
        ],
        _ => Vec::new(),
    };
    questions.push(format!("What is the goal of '{}'?", step.name));
    if step.final_answer {
        questions.push("How can you check this answer?".to_string());
    }
    questions
}

fn sub_steps(step: &Step) -> Vec<String> {
    let mut parts = Vec::new();
    if let Some(before) = &step.before_expression {
        parts.push(format!("Start from {}", before));
    }
    if let Some(formula) = &step.formula {
        parts.push(format!("Recall {}", formula));
    }
    if let Some(op) = &step.operation {
        parts.push(format!("Apply {} to both sides", op));
    }
    match step.result_text() {
        Some(result) => parts.push(format!("Simplify to {}", result)),
        None => parts.push(step.description.clone()),
    }
    parts
}

fn hint_ladder(step: &Step) -> HintLadder {
    HintLadder {
        level1: format!("Think about the purpose: {}.", step.description.to_lowercase()),
        level2: step
            .algebraic_rule
            .clone()
            .or_else(|| step.formula.as_ref().map(|f| format!("Use {}", f)))
            .unwrap_or_else(|| "Keep both sides balanced.".to_string()),
        level3: step
            .operation
            .as_ref()
            .map(|op| format!("Apply {}", op))
            .unwrap_or_else(|| step.reasoning.clone()),
        level4: step
            .result_text()
            .map(|r| format!("The result is {}", r))
            .unwrap_or_else(|| step.description.clone()),
    }
}

fn practice_variation(family: Family) -> &'static str {
    match family {
        Family::Quadratic => "Try the same step on x² - 7x + 12 = 0.",
        Family::Exponential => "Try the same step on 3^x = 81.",
        Family::Finance => "Repeat with $500 at 4% for 5 years.",
        Family::Linear => "Try the same step on 3x - 4 = 11.",
    }
}

pub(crate) fn scaffolding(step: &Step, family: Family) -> Scaffolding {
    Scaffolding {
        guiding_questions: guiding_questions(step),
        sub_steps: sub_steps(step),
        hint_ladder: hint_ladder(step),
        practice_variation: practice_variation(family).to_string(),
    }
}

fn alternatives(problem_type: ProblemType) -> &'static [&'static str] {
    use ProblemType::*;
    match problem_type {
        StandardQuadratic | QuadraticFormula => &["Factoring", "Completing the square", "Graphing"],
        FactoringQuadratic => &["Quadratic formula", "Completing the square"],
        CompletingSquare => &["Quadratic formula", "Factoring"],
        QuadraticInequality => &["Sign chart", "Graph the parabola"],
        ProjectileMotion => &["Complete the square on h(t)", "Graph the height function"],
        QuadraticOptimization => &["Complete the square", "Average the x-intercepts"],
        ExponentialInequality => &["Rewrite both sides with a common base", "Graph both sides"],
        ExponentialQuadratic => &["Factor the quadratic in u"],
        SimpleExponential | NaturalExponential => {
            &["Rewrite both sides with a common base", "Use a different logarithm base"]
        }
        LogarithmicEquation => &["Use the change of base formula"],
        CompoundInterest | ExponentialGrowth | ExponentialDecay | HalfLife => {
            &["Build a table of values period by period", "Estimate from a graph"]
        }
        SimpleLinear | LinearInequality => &["Graph both sides and find where they meet"],
        LinearSystem => &["Substitution", "Elimination", "Graphing"],
    }
}

pub(crate) fn metacognition(step: &Step, problem_type: ProblemType) -> Metacognition {
    let mut decision_points = vec![format!("Why is '{}' the right move now?", step.name)];
    if step.algebraic_rule.is_some() {
        decision_points.push("Which rule justifies this transformation?".to_string());
    }
    Metacognition {
        thinking_process: format!(
            "I am solving a {} problem. Right now I need to {}.",
            problem_type.display_name().to_lowercase(),
            step.description.to_lowercase()
        ),
        decision_points,
        alternatives: alternatives(problem_type).iter().map(|a| a.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_climbs_to_the_result() {
        let step = Step::new(MOVE_CONSTANT, "Move the constant")
            .transform("x² - 4x + 3 = 0", "x² - 4x = -3")
            .operation("- 3");
        let ladder = hint_ladder(&step);
        assert_eq!(ladder.level3, "Apply - 3");
        assert_eq!(ladder.level4, "The result is x² - 4x = -3");
        assert_eq!(ladder.level2, "Keep both sides balanced.");
    }

    #[test]
    fn final_step_asks_for_check() {
        let mut step = Step::new(SOLVE_FOR_X, "Solve");
        step.final_answer = true;
        let q = guiding_questions(&step);
        assert_eq!(q.last().map(String::as_str), Some("How can you check this answer?"));
    }

    #[test]
    fn systems_offer_three_methods() {
        let step = Step::new(COMPUTE_DETERMINANT, "Compute D");
        let m = metacognition(&step, ProblemType::LinearSystem);
        assert_eq!(m.alternatives.len(), 3);
    }

    #[test]
    fn optimization_suggests_completing_the_square() {
        let step = Step::new(FIND_VERTEX, "Find the vertex");
        let m = metacognition(&step, ProblemType::QuadraticOptimization);
        assert_eq!(m.alternatives[0], "Complete the square");
        assert!(guiding_questions(&step)[0].contains("-b and 2a"));
    }
}
