//! End-to-end properties of step generation and enhancement.

use eqn_didactic::{enhance, generate, EnhancerOptions};
use eqn_model::{ExplanationLevel, Problem, ProblemType, Step, StepEntry};
use eqn_parser::{parse_problem, ProblemInput};
use proptest::prelude::*;

const CORPUS: &[&str] = &[
    "x^2 - 5x + 6 = 0",
    "x^2 + 1 = 0",
    "x^2 - 4 > 0",
    "2^x > 8",
    "0.5^x > 0.25",
    "2^(2x) - 6*2^x + 8 = 0",
    "3*2^x = 24",
    "log_2(x) = 3",
    "-2x + 4 < 10",
    "2x + 3y = 7, x - y = 1",
    "3x + 5 = 11",
];

fn solved(text: &str) -> (Problem, Vec<Step>) {
    let problem = parse_problem(&ProblemInput {
        equation: Some(text),
        ..Default::default()
    })
    .expect("recognized");
    let solution = eqn_solver_core::solve(&problem).expect("solvable");
    let steps = generate(&problem, &solution);
    (problem, steps)
}

fn level() -> impl Strategy<Value = ExplanationLevel> {
    prop::sample::select(ExplanationLevel::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn enhancing_twice_gives_the_same_entries(i in 0..CORPUS.len(), level in level()) {
        let (problem, steps) = solved(CORPUS[i]);
        let options = EnhancerOptions::default();
        let first = enhance(&steps, problem.problem_type, level, &options);
        let second = enhance(&steps, problem.problem_type, level, &options);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn bridges_never_open_or_close(i in 0..CORPUS.len(), level in level()) {
        let (problem, steps) = solved(CORPUS[i]);
        let entries = enhance(&steps, problem.problem_type, level, &EnhancerOptions::default());
        prop_assert!(!entries[0].is_bridge());
        prop_assert!(!entries[entries.len() - 1].is_bridge());
        let base: Vec<&Step> = entries.iter().filter_map(StepEntry::as_step).map(|s| &s.base).collect();
        prop_assert_eq!(base.len(), steps.len());
        for w in entries.windows(2) {
            prop_assert!(!(w[0].is_bridge() && w[1].is_bridge()));
        }
    }

    #[test]
    fn every_generated_sequence_ends_with_the_answer(i in 0..CORPUS.len()) {
        let (_, steps) = solved(CORPUS[i]);
        prop_assert!(!steps.is_empty());
        for (n, s) in steps.iter().enumerate() {
            prop_assert_eq!(s.step_number, n + 1);
            prop_assert_eq!(s.final_answer, n + 1 == steps.len());
        }
    }
}

#[test]
fn basic_level_adds_nothing() {
    let (problem, steps) = solved("x^2 - 5x + 6 = 0");
    let entries = enhance(&steps, problem.problem_type, ExplanationLevel::Basic, &EnhancerOptions::default());
    assert_eq!(entries.len(), steps.len());
    for (entry, step) in entries.iter().zip(&steps) {
        let s = entry.as_step().expect("no bridges at basic");
        assert_eq!(&s.base, step);
        assert!(s.enhancement.is_none());
    }
}

#[test]
fn unregistered_steps_get_empty_mistake_lists() {
    let (_, steps) = solved("3x + 5 = 11");
    let entries = enhance(&steps, ProblemType::SimpleLinear, ExplanationLevel::Intermediate, &EnhancerOptions::default());
    let given = entries[0].as_step().and_then(|s| s.enhancement.as_ref()).expect("enhanced");
    let prevention = given.error_prevention.as_ref().expect("enabled by default");
    assert!(prevention.common_mistakes.is_empty());
    assert!(given.validation.is_some());
}

#[test]
fn linear_inequality_flip_is_warned() {
    let (problem, steps) = solved("-2x + 4 < 10");
    let entries = enhance(&steps, problem.problem_type, ExplanationLevel::Intermediate, &EnhancerOptions::default());
    let warned = entries
        .iter()
        .filter_map(StepEntry::as_step)
        .filter_map(|s| s.enhancement.as_ref())
        .filter_map(|e| e.error_prevention.as_ref())
        .any(|p| !p.warnings.is_empty());
    assert!(warned);
}

#[test]
fn basic_vocabulary_reaches_descriptions() {
    let (problem, steps) = solved("x^2 - 5x + 6 = 0");
    let entries = enhance(&steps, problem.problem_type, ExplanationLevel::Scaffolded, &EnhancerOptions::default());
    let descriptions: Vec<&str> = entries
        .iter()
        .filter_map(StepEntry::as_step)
        .filter_map(|s| s.enhancement.as_ref())
        .map(|e| e.adaptive.description.as_str())
        .collect();
    assert!(descriptions.iter().all(|d| !d.to_lowercase().contains("discriminant")));
}
