//! Full pipeline through a session: request in, enriched response out.

use eqn_model::{Confidence, ExplanationLevel, Params, ProblemType, SolutionSet, StepEntry};
use eqn_session::{Session, SessionConfig, SolveRequest};

#[test]
fn quadratic_request_end_to_end() {
    let mut session = Session::default();
    let response = session.solve(&SolveRequest::equation("x^2 - 5x + 6 = 0")).unwrap();

    assert_eq!(response.problem.problem_type, ProblemType::StandardQuadratic);
    assert_eq!(response.solution.set.real_values(), &[2.0, 3.0]);
    assert!(response.verification.all_valid);
    assert_eq!(response.verification.confidence, Confidence::High);
    assert!(response.graph.is_some());
    // intermediate by default: bridges between steps
    assert!(response.steps.iter().any(StepEntry::is_bridge));
}

#[test]
fn word_problem_from_scenario() {
    let mut session = Session::default();
    let request = SolveRequest {
        scenario: Some("$1,000 invested at 5% for 10 years compounded quarterly".to_string()),
        ..SolveRequest::default()
    };
    let response = session.solve(&request).unwrap();
    assert_eq!(response.problem.problem_type, ProblemType::CompoundInterest);
    match response.solution.set {
        SolutionSet::Quantity { value, .. } => assert!((value - 1643.619463).abs() < 1e-4),
        ref other => panic!("unexpected set {:?}", other),
    }
    assert!(response.verification.all_valid);
}

#[test]
fn explicit_type_and_parameters() {
    let mut session = Session::default();
    let request = SolveRequest {
        problem_type: Some("completing_square".to_string()),
        parameters: Some(Params::new().with("a", 1.0).with("b", -4.0).with("c", 3.0)),
        ..SolveRequest::default()
    };
    let response = session.solve(&request).unwrap();
    assert_eq!(response.problem.problem_type, ProblemType::CompletingSquare);
    assert_eq!(response.solution.set.real_values(), &[1.0, 3.0]);
}

#[test]
fn unknown_explicit_type_is_rejected() {
    let mut session = Session::default();
    let request = SolveRequest {
        problem_type: Some("quartic".to_string()),
        ..SolveRequest::equation("x^4 = 1")
    };
    let err = session.solve(&request).unwrap_err();
    assert_eq!(err.code(), "E_NO_SOLVER");
}

#[test]
fn regeneration_matches_a_fresh_solve() {
    let mut session = Session::new(SessionConfig {
        explanation_level: ExplanationLevel::Basic,
        ..SessionConfig::default()
    });
    session.solve(&SolveRequest::equation("2^x > 8")).unwrap();
    let regenerated = session.regenerate_steps(ExplanationLevel::Detailed).unwrap();

    let mut fresh = Session::default();
    let direct = fresh
        .solve(&SolveRequest {
            explanation_level: Some(ExplanationLevel::Detailed),
            ..SolveRequest::equation("2^x > 8")
        })
        .unwrap();
    assert_eq!(regenerated, direct.steps);
    assert_eq!(session.current().map(|c| c.level), Some(ExplanationLevel::Detailed));
}

#[test]
fn new_solve_replaces_the_cache() {
    let mut session = Session::default();
    session.solve(&SolveRequest::equation("x^2 - 5x + 6 = 0")).unwrap();
    session.solve(&SolveRequest::equation("3x + 5 = 11")).unwrap();
    let current = session.current().unwrap();
    assert_eq!(current.problem.problem_type, ProblemType::SimpleLinear);
    assert_eq!(current.solution.set.real_values(), &[2.0]);
}

#[test]
fn huge_integral_coefficients_skip_integer_factoring() {
    let mut session = Session::default();
    let response = session
        .solve(&SolveRequest {
            problem_type: Some("factoring_quadratic".to_string()),
            ..SolveRequest::equation("x^2 - 10000000000000000000 = 0")
        })
        .unwrap();
    assert!(response.solution.fallback);
    assert_eq!(response.solution.set.real_values().len(), 2);

    let response = session
        .solve(&SolveRequest {
            problem_type: Some("factoring_quadratic".to_string()),
            parameters: Some(Params::new().with("a", -1.0).with("b", -1e20).with("c", 0.0)),
            ..SolveRequest::default()
        })
        .unwrap();
    assert!(response.solution.fallback);
    assert_eq!(response.solution.set.real_values(), &[-1e20, 0.0]);
}

#[test]
fn text_parameters_use_coefficient_rules() {
    let mut session = Session::default();
    let response = session
        .solve(&SolveRequest {
            problem_type: Some("standard_quadratic".to_string()),
            parameters: Some(Params::new().with("a", "1/2").with("b", "-").with("c", "2")),
            ..SolveRequest::default()
        })
        .unwrap();
    let SolutionSet::Complex { values } = &response.solution.set else {
        panic!("expected complex roots, got {:?}", response.solution.set);
    };
    assert!((values[0].re - 1.0).abs() < 1e-9);
    assert!((values[0].im - 3f64.sqrt()).abs() < 1e-9);
    assert!((values[1].im + 3f64.sqrt()).abs() < 1e-9);
}

#[test]
fn projectile_word_problem_end_to_end() {
    let mut session = Session::default();
    let request = SolveRequest {
        scenario: Some(
            "A ball is thrown upward from a height of 80 feet with an initial velocity of 64 feet per second. When does it hit the ground?"
                .to_string(),
        ),
        ..SolveRequest::default()
    };
    let response = session.solve(&request).unwrap();
    assert_eq!(response.problem.problem_type, ProblemType::ProjectileMotion);
    assert_eq!(response.solution.set.real_values(), &[5.0]);
    assert_eq!(response.verification.confidence, Confidence::High);
    assert!(response.graph.is_some());
}

#[test]
fn maximum_of_a_quadratic_function() {
    let mut session = Session::default();
    let request = SolveRequest {
        scenario: Some("Find the maximum value".to_string()),
        ..SolveRequest::equation("f(x) = -2x^2 + 8x - 3")
    };
    let response = session.solve(&request).unwrap();
    assert_eq!(response.problem.problem_type, ProblemType::QuadraticOptimization);
    assert_eq!(response.solution.set.notation(), "maximum value = 5");
    assert_eq!(response.solution.solution_type, "Maximum at x = 2");
    assert!(response.verification.all_valid);
}
