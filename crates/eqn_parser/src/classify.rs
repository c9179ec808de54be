//! Problem classifier.

use crate::patterns::{library, mixed_exponential_bases};
use eqn_model::{Params, ProblemType, SolveError};

/// How a problem type was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    Explicit,
    /// Recognizer `index` of the type matched the equation or the scenario.
    Pattern { index: usize, on_scenario: bool },
    /// Nothing matched; picked from the explicit parameter keys.
    ParameterDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub problem_type: ProblemType,
    pub source: MatchSource,
}

/// Pick the problem type for normalized `text`.
///
/// An explicit catalog name always wins. Otherwise the first recognizer (in
/// library order) that matches `text` or `scenario` decides; failing that,
/// the explicit parameter keys pick a family default.
pub fn classify(
    text: &str,
    scenario: Option<&str>,
    explicit: Option<&str>,
    params: &Params,
) -> Result<Classification, SolveError> {
    if let Some(name) = explicit.map(str::trim).filter(|n| !n.is_empty()) {
        return match ProblemType::from_name(name) {
            Some(problem_type) => Ok(Classification {
                problem_type,
                source: MatchSource::Explicit,
            }),
            None => Err(SolveError::NoSolverAvailable(name.to_string())),
        };
    }

    for entry in library() {
        for (index, pattern) in entry.recognizers.iter().enumerate() {
            let on_text = !text.is_empty() && pattern.is_match(text);
            let on_scenario = !on_text && scenario.is_some_and(|s| pattern.is_match(s));
            if on_text || on_scenario {
                if entry.problem_type == ProblemType::ExponentialQuadratic {
                    if let Some((first, second)) = mixed_exponential_bases(text) {
                        tracing::warn!(%first, %second, "exponential quadratic with mixed bases");
                        return Err(SolveError::UnrecognizedProblem {
                            input: text.to_string(),
                        });
                    }
                }
                tracing::debug!(
                    problem_type = %entry.problem_type,
                    pattern = index,
                    on_scenario,
                    "classified"
                );
                return Ok(Classification {
                    problem_type: entry.problem_type,
                    source: MatchSource::Pattern { index, on_scenario },
                });
            }
        }
    }

    if let Some(problem_type) = default_for_params(params) {
        tracing::debug!(problem_type = %problem_type, "classified from parameter keys");
        return Ok(Classification {
            problem_type,
            source: MatchSource::ParameterDefault,
        });
    }

    Err(SolveError::UnrecognizedProblem {
        input: if text.is_empty() {
            scenario.unwrap_or_default().to_string()
        } else {
            text.to_string()
        },
    })
}

/// Family default for a parameter record with no recognizable text.
fn default_for_params(params: &Params) -> Option<ProblemType> {
    if !params.has_numbers() {
        return None;
    }
    if params.contains("a1") {
        Some(ProblemType::LinearSystem)
    } else if params.contains("initial_velocity") || params.contains("initial_height") {
        Some(ProblemType::ProjectileMotion)
    } else if params.contains("principal") {
        Some(ProblemType::CompoundInterest)
    } else if params.contains("base") {
        Some(ProblemType::SimpleExponential)
    } else if params.contains("m") {
        Some(ProblemType::SimpleLinear)
    } else if ["a", "b", "c"].iter().any(|k| params.contains(k)) {
        Some(ProblemType::StandardQuadratic)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;

    fn kind(text: &str) -> ProblemType {
        classify(&normalize(text), None, None, &Params::new())
            .unwrap()
            .problem_type
    }

    #[test]
    fn explicit_type_wins_without_validation() {
        let c = classify("2^x = 8", None, Some("completing_square"), &Params::new()).unwrap();
        assert_eq!(c.problem_type, ProblemType::CompletingSquare);
        assert_eq!(c.source, MatchSource::Explicit);
    }

    #[test]
    fn unknown_explicit_type_has_no_solver() {
        let err = classify("x^2 = 4", None, Some("cubic"), &Params::new()).unwrap_err();
        assert_eq!(err, SolveError::NoSolverAvailable("cubic".into()));
    }

    #[test]
    fn shapes_map_to_types() {
        assert_eq!(kind("x^2 - 5x + 6 = 0"), ProblemType::StandardQuadratic);
        assert_eq!(kind("x^2 - 4 > 0"), ProblemType::QuadraticInequality);
        assert_eq!(kind("2^x > 8"), ProblemType::ExponentialInequality);
        assert_eq!(kind("2^(2x) - 6*2^x + 8 = 0"), ProblemType::ExponentialQuadratic);
        assert_eq!(kind("3e^(2x) = 12"), ProblemType::NaturalExponential);
        assert_eq!(kind("3*2^x = 24"), ProblemType::SimpleExponential);
        assert_eq!(kind("log_2(x) = 5"), ProblemType::LogarithmicEquation);
        assert_eq!(kind("2x + 3 <= 7"), ProblemType::LinearInequality);
        assert_eq!(kind("2x + 3y = 7, x - y = 1"), ProblemType::LinearSystem);
        assert_eq!(kind("3x + 5 = 11"), ProblemType::SimpleLinear);
    }

    #[test]
    fn specific_types_shadow_general_ones() {
        // "2^x > 8" also contains the linear shape "x > 8".
        assert_eq!(kind("2^x > 8"), ProblemType::ExponentialInequality);
        // the exponential quadratic contains a simple exponential.
        assert_eq!(kind("4^(2x) + 4^x - 6 = 0"), ProblemType::ExponentialQuadratic);
    }

    #[test]
    fn mixed_bases_are_not_an_exponential_quadratic() {
        let err = classify(&normalize("2^(2x) + 3^x - 2 = 0"), None, None, &Params::new()).unwrap_err();
        assert!(matches!(err, SolveError::UnrecognizedProblem { .. }));
        assert_eq!(kind("3^(2x) - 4*3^x + 3 = 0"), ProblemType::ExponentialQuadratic);
    }

    #[test]
    fn projectile_and_optimization_shapes() {
        assert_eq!(kind("h(t) = -16t^2 + 64t + 80"), ProblemType::ProjectileMotion);
        assert_eq!(kind("f(x) = -2x^2 + 8x - 3"), ProblemType::QuadraticOptimization);
        assert_eq!(
            classify("", Some("A ball is thrown upward at 48 ft/s"), None, &Params::new())
                .unwrap()
                .problem_type,
            ProblemType::ProjectileMotion
        );
        assert_eq!(
            classify("x^2 - 6x + 5 = 0", Some("find the vertex of the parabola"), None, &Params::new())
                .unwrap()
                .problem_type,
            ProblemType::QuadraticOptimization
        );
        // vertex form still asks for completing the square
        assert_eq!(
            classify("x^2 - 6x + 5 = 0", Some("write in vertex form"), None, &Params::new())
                .unwrap()
                .problem_type,
            ProblemType::CompletingSquare
        );
        let projectile = Params::new().with("initial_velocity", 64.0);
        assert_eq!(
            classify("", None, None, &projectile).unwrap().problem_type,
            ProblemType::ProjectileMotion
        );
    }

    #[test]
    fn scenario_keywords_are_tested() {
        let c = classify(
            "x^2 - 5x + 6 = 0",
            Some("solve by factoring"),
            None,
            &Params::new(),
        )
        .unwrap();
        assert_eq!(c.problem_type, ProblemType::FactoringQuadratic);
        assert_eq!(
            c.source,
            MatchSource::Pattern {
                index: 0,
                on_scenario: true
            }
        );

        let c = classify(
            "",
            Some("$1000 invested at 5% compounded monthly for 10 years"),
            None,
            &Params::new(),
        )
        .unwrap();
        assert_eq!(c.problem_type, ProblemType::CompoundInterest);
    }

    #[test]
    fn parameter_keys_pick_family_default() {
        let quad = Params::new().with("b", 2.0).with("c", 1.0);
        let c = classify("", None, None, &quad).unwrap();
        assert_eq!(c.problem_type, ProblemType::StandardQuadratic);
        assert_eq!(c.source, MatchSource::ParameterDefault);

        let exp = Params::new().with("base", 2.0).with("result", 8.0);
        assert_eq!(
            classify("", None, None, &exp).unwrap().problem_type,
            ProblemType::SimpleExponential
        );
    }

    #[test]
    fn unrecognized_without_params() {
        let err = classify("hello world", None, None, &Params::new()).unwrap_err();
        assert!(matches!(err, SolveError::UnrecognizedProblem { .. }));
        // text-only parameters are not usable coefficients
        let text_only = Params::new().with("operator", ">");
        assert!(classify("", None, None, &text_only).is_err());
    }
}
