//! Level-adaptive enhancement of base steps.
//!
//! The enhancer never inspects the algebra of a step. It looks steps up by
//! name in fixed tables and decorates them, so the same base steps always
//! produce the same output for a given level and option set.

use crate::bridges::bridge;
use crate::error_prevention::{error_prevention, validation};
use crate::names::*;
use crate::phrases::explanations;
use crate::scaffolding::{metacognition, scaffolding};
use crate::vocabulary::apply_vocabulary;
use eqn_model::step::{AdaptiveExplanation, Explanations, LearningSupport};
use eqn_model::{EnhancedStep, Enhancement, ExplanationLevel, ProblemType, Step, StepEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnhancerOptions {
    /// Insert a bridge between every pair of consecutive steps.
    pub include_conceptual_connections: bool,
    pub include_error_prevention: bool,
}

impl Default for EnhancerOptions {
    fn default() -> Self {
        Self {
            include_conceptual_connections: true,
            include_error_prevention: true,
        }
    }
}

/// `(step name, prerequisites, vocabulary)`.
static SUPPORT: &[(&str, &[&str], &[&str])] = &[
    (IDENTIFY_COEFFICIENTS, &["Standard form ax² + bx + c = 0"], &["coefficient", "constant term"]),
    (CALCULATE_DISCRIMINANT, &["Order of operations", "Squaring negative numbers"], &["discriminant"]),
    (APPLY_QUADRATIC_FORMULA, &["Square roots", "Fractions"], &["quadratic formula"]),
    (SIMPLIFY_SQUARE_ROOT, &["Perfect squares"], &["radical"]),
    (IDENTIFY_COMPLEX_SOLUTIONS, &["The imaginary unit i = √-1"], &["complex number", "conjugates"]),
    (FACTOR_OUT_COMMON, &["Greatest common divisor"], &["common factor"]),
    (FIND_FACTOR_PAIR, &["Multiplication facts", "Integer sums"], &["factor pair"]),
    (ZERO_PRODUCT, &["Factored form"], &["zero product property"]),
    (COMPLETE_SQUARE, &["Expanding (x + h)²"], &["perfect square"]),
    (TAKE_SQUARE_ROOT, &["Square roots of both signs"], &["principal root"]),
    (IDENTIFY_TEST_INTERVALS, &["The number line"], &["critical points", "interval notation"]),
    (WRITE_HEIGHT_FUNCTION, &["Function notation", "Acceleration due to gravity"], &["initial velocity", "initial height"]),
    (FIND_TIME_OF_MAX, &["Vertex of a parabola"], &["axis of symmetry"]),
    (FIND_VERTEX, &["Evaluating functions"], &["vertex", "axis of symmetry"]),
    (WRITE_VERTEX_FORM, &["Expanding (x - h)²"], &["vertex form"]),
    (DESCRIBE_GRAPH, &["Graph of y = x²"], &["stretch", "reflection", "shift"]),
    (STATE_RANGE, &["Interval notation"], &["range"]),
    (TEST_EACH_INTERVAL, &["Evaluating polynomials"], &["test point"]),
    (TAKE_LOGARITHM, &["Exponent rules"], &["logarithm"]),
    (TAKE_NATURAL_LOGARITHM, &["The number e"], &["natural logarithm"]),
    (APPLY_LOG_POWER_RULE, &["Logarithm properties"], &["power rule"]),
    (IDENTIFY_BASE_TYPE, &["Increasing and decreasing functions"], &["growth base", "decay base"]),
    (MAKE_SUBSTITUTION, &["Quadratic equations"], &["substitution"]),
    (CONVERT_TO_EXPONENTIAL, &["Definition of the logarithm"], &["exponential form"]),
    (CHOOSE_FORMULA, &["Percentages as decimals"], &["principal", "rate", "compounding"]),
    (COMPUTE_DECAY_CONSTANT, &["Natural logarithm"], &["half-life", "decay constant"]),
    (DIVIDE_COEFFICIENT, &["Inverse operations"], &["coefficient"]),
    (COMPUTE_DETERMINANT, &["2×2 arrays of numbers"], &["determinant"]),
    (APPLY_CRAMER, &["Determinants"], &["Cramer's rule"]),
];

fn learning_support(steps: &[Step], index: usize) -> LearningSupport {
    let step = &steps[index];
    let (prerequisites, vocabulary): (Vec<String>, Vec<String>) = SUPPORT
        .iter()
        .find(|(name, _, _)| *name == step.name)
        .map(|(_, pre, vocab)| {
            (
                pre.iter().map(|s| s.to_string()).collect(),
                vocab.iter().map(|s| s.to_string()).collect(),
            )
        })
        .unwrap_or_default();
    let previous_link = index
        .checked_sub(1)
        .map(|i| format!("Builds on step {}: {}", steps[i].step_number, steps[i].name));
    LearningSupport {
        prerequisites,
        vocabulary,
        previous_link,
    }
}

fn rewrite(e: Explanations, level: ExplanationLevel) -> Explanations {
    Explanations {
        conceptual: apply_vocabulary(&e.conceptual, level),
        procedural: apply_vocabulary(&e.procedural, level),
        visual: apply_vocabulary(&e.visual, level),
        algebraic: apply_vocabulary(&e.algebraic, level),
    }
}

fn enhancement(
    steps: &[Step],
    index: usize,
    problem_type: ProblemType,
    level: ExplanationLevel,
    options: &EnhancerOptions,
) -> Enhancement {
    let step = &steps[index];
    let family = problem_type.family();
    let explanations = rewrite(explanations(step, family), level);
    let highlighted_concept = matches!(level, ExplanationLevel::Detailed | ExplanationLevel::Scaffolded)
        .then(|| explanations.conceptual.clone());
    let scaffolded = level == ExplanationLevel::Scaffolded;

    Enhancement {
        adaptive: AdaptiveExplanation {
            level,
            description: apply_vocabulary(&step.description, level),
            reasoning: apply_vocabulary(&step.reasoning, level),
        },
        explanations,
        highlighted_concept,
        learning_support: learning_support(steps, index),
        error_prevention: options
            .include_error_prevention
            .then(|| error_prevention(problem_type, step)),
        validation: options.include_error_prevention.then(|| validation(step)),
        scaffolding: scaffolded.then(|| scaffolding(step, family)),
        metacognition: scaffolded.then(|| metacognition(step, problem_type)),
    }
}

/// Wrap `steps` for `level`.
///
/// At [`ExplanationLevel::Basic`] the steps pass through untouched. Every
/// other level attaches an [`Enhancement`] to each step and, when
/// conceptual connections are enabled, interleaves a bridge between each
/// consecutive pair.
pub fn enhance(
    steps: &[Step],
    problem_type: ProblemType,
    level: ExplanationLevel,
    options: &EnhancerOptions,
) -> Vec<StepEntry> {
    tracing::debug!(
        level = %level,
        problem_type = problem_type.name(),
        steps = steps.len(),
        "enhancing steps"
    );
    if level == ExplanationLevel::Basic {
        return steps
            .iter()
            .cloned()
            .map(|s| StepEntry::Step(EnhancedStep::plain(s)))
            .collect();
    }

    let family = problem_type.family();
    let mut entries = Vec::with_capacity(steps.len() * 2);
    for (i, step) in steps.iter().enumerate() {
        if i > 0 && options.include_conceptual_connections {
            entries.push(StepEntry::Bridge(bridge(&steps[i - 1], step, steps.len(), family)));
        }
        entries.push(StepEntry::Step(EnhancedStep {
            base: step.clone(),
            enhancement: Some(enhancement(steps, i, problem_type, level, options)),
        }));
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Step> {
        let mut steps = vec![
            Step::new(GIVEN_EQUATION, "Start with the equation").expression("x² - 5x + 6 = 0"),
            Step::new(IDENTIFY_COEFFICIENTS, "Read the coefficients").expression("a = 1, b = -5, c = 6"),
            Step::new(CALCULATE_DISCRIMINANT, "Compute the discriminant").expression("Δ = 1"),
        ];
        for (i, s) in steps.iter_mut().enumerate() {
            s.step_number = i + 1;
        }
        steps
    }

    #[test]
    fn basic_is_pass_through() {
        let entries = enhance(&sample(), ProblemType::StandardQuadratic, ExplanationLevel::Basic, &EnhancerOptions::default());
        assert_eq!(entries.len(), 3);
        assert!(entries
            .iter()
            .all(|e| e.as_step().is_some_and(|s| s.enhancement.is_none())));
    }

    #[test]
    fn bridges_sit_between_steps() {
        let entries = enhance(&sample(), ProblemType::StandardQuadratic, ExplanationLevel::Intermediate, &EnhancerOptions::default());
        let kinds: Vec<bool> = entries.iter().map(StepEntry::is_bridge).collect();
        assert_eq!(kinds, vec![false, true, false, true, false]);
    }

    #[test]
    fn connections_off_means_no_bridges() {
        let options = EnhancerOptions {
            include_conceptual_connections: false,
            ..EnhancerOptions::default()
        };
        let entries = enhance(&sample(), ProblemType::StandardQuadratic, ExplanationLevel::Detailed, &options);
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn detailed_highlights_and_rewrites() {
        let entries = enhance(&sample(), ProblemType::StandardQuadratic, ExplanationLevel::Detailed, &EnhancerOptions::default());
        let last = entries.last().and_then(StepEntry::as_step).and_then(|s| s.enhancement.as_ref());
        let e = last.expect("enhanced");
        assert!(e.highlighted_concept.is_some());
        assert_eq!(e.adaptive.description, "Compute the discriminant (Δ = b² - 4ac)");
        assert_eq!(
            e.learning_support.previous_link.as_deref(),
            Some("Builds on step 2: Identify coefficients")
        );
        assert!(e.scaffolding.is_none());
        assert!(e.metacognition.is_none());
    }

    #[test]
    fn intermediate_has_no_highlight() {
        let entries = enhance(&sample(), ProblemType::StandardQuadratic, ExplanationLevel::Intermediate, &EnhancerOptions::default());
        let first = entries[0].as_step().and_then(|s| s.enhancement.as_ref()).expect("enhanced");
        assert!(first.highlighted_concept.is_none());
        assert!(first.learning_support.previous_link.is_none());
    }

    #[test]
    fn scaffolded_carries_metacognition() {
        let entries = enhance(&sample(), ProblemType::StandardQuadratic, ExplanationLevel::Scaffolded, &EnhancerOptions::default());
        for s in entries.iter().filter_map(StepEntry::as_step) {
            let e = s.enhancement.as_ref().expect("enhanced");
            assert!(e.scaffolding.is_some());
            assert!(e.metacognition.is_some());
        }
    }

    #[test]
    fn error_prevention_can_be_disabled() {
        let options = EnhancerOptions {
            include_error_prevention: false,
            ..EnhancerOptions::default()
        };
        let entries = enhance(&sample(), ProblemType::StandardQuadratic, ExplanationLevel::Intermediate, &options);
        for s in entries.iter().filter_map(StepEntry::as_step) {
            let e = s.enhancement.as_ref().expect("enhanced");
            assert!(e.error_prevention.is_none());
            assert!(e.validation.is_none());
        }
    }
}
