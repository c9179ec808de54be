//! Recognition of problem shapes.
//!
//! The pipeline is `normalize` → `classify` → `extract`; [`parse_problem`]
//! runs all three and assembles the immutable [`Problem`] record.

pub mod classify;
pub mod coefficient;
pub mod extract;
pub mod normalize;
pub mod patterns;

pub use classify::{classify, Classification, MatchSource};
pub use coefficient::{parse_coefficient, parse_term};
pub use extract::extract;
pub use normalize::normalize;

use eqn_model::{Params, Problem, SolveError};

/// Raw, caller-supplied description of a problem.
#[derive(Debug, Clone, Default)]
pub struct ProblemInput<'a> {
    pub equation: Option<&'a str>,
    pub scenario: Option<&'a str>,
    pub explicit_type: Option<&'a str>,
    pub parameters: Option<&'a Params>,
    pub context: Option<&'a str>,
}

/// Classify the input and extract its parameters.
///
/// Explicit parameters override anything extracted from the text.
pub fn parse_problem(input: &ProblemInput<'_>) -> Result<Problem, SolveError> {
    let original = input.equation.unwrap_or_default();
    let clean = normalize(original);
    let scenario = input.scenario.map(normalize).filter(|s| !s.is_empty());
    let empty = Params::new();
    let explicit = input.parameters.unwrap_or(&empty);

    let classification = classify(&clean, scenario.as_deref(), input.explicit_type, explicit)?;
    let mut parameters = extract(classification.problem_type, &clean, scenario.as_deref());
    parameters.merge(explicit);

    tracing::debug!(
        problem_type = %classification.problem_type,
        source = ?classification.source,
        params = parameters.iter().count(),
        "parsed problem"
    );

    Ok(Problem {
        original_input: original.to_string(),
        clean_input: clean,
        problem_type: classification.problem_type,
        scenario,
        parameters,
        context: input.context.map(str::to_string),
    })
}
