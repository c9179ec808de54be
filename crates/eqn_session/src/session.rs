use crate::config::SessionConfig;
use eqn_didactic::{enhance, generate};
use eqn_model::{
    ExplanationLevel, GraphData, Params, Problem, Solution, SolveError, Step, StepEntry,
    VerificationReport,
};
use eqn_parser::{parse_problem, ProblemInput};
use serde::{Deserialize, Serialize};

/// A solve request as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveRequest {
    pub equation: Option<String>,
    pub scenario: Option<String>,
    pub parameters: Option<Params>,
    /// Explicit type name; bypasses recognition when set.
    pub problem_type: Option<String>,
    /// Falls back to the session's configured level.
    pub explanation_level: Option<ExplanationLevel>,
    pub context: Option<String>,
}

impl SolveRequest {
    pub fn equation(text: impl Into<String>) -> Self {
        Self {
            equation: Some(text.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveResponse {
    pub problem: Problem,
    pub solution: Solution,
    pub steps: Vec<StepEntry>,
    pub verification: VerificationReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<GraphData>,
}

/// The most recently solved problem.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentProblem {
    pub problem: Problem,
    pub solution: Solution,
    /// Un-enhanced steps, kept so a level change does not re-solve.
    pub base_steps: Vec<Step>,
    pub level: ExplanationLevel,
}

/// Single-slot session. Each successful solve replaces the cached problem.
#[derive(Debug, Default)]
pub struct Session {
    pub config: SessionConfig,
    current: Option<CurrentProblem>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            current: None,
        }
    }

    pub fn solve(&mut self, request: &SolveRequest) -> Result<SolveResponse, SolveError> {
        let input = ProblemInput {
            equation: request.equation.as_deref(),
            scenario: request.scenario.as_deref(),
            explicit_type: request.problem_type.as_deref(),
            parameters: request.parameters.as_ref(),
            context: request.context.as_deref(),
        };
        let problem = parse_problem(&input)?;
        let solution = eqn_solver_core::solve(&problem)?;
        let base_steps = generate(&problem, &solution);
        let level = request
            .explanation_level
            .unwrap_or(self.config.explanation_level);
        let steps = enhance(
            &base_steps,
            problem.problem_type,
            level,
            &self.config.enhancer_options(),
        );
        let verification = eqn_solver_core::verify(&problem, &solution);
        let graph = if self.config.include_graph {
            eqn_solver_core::graph_data(&solution)
        } else {
            None
        };

        if let Some(previous) = &self.current {
            tracing::debug!(
                previous = previous.problem.problem_type.name(),
                next = problem.problem_type.name(),
                "replacing current problem"
            );
        }
        self.current = Some(CurrentProblem {
            problem: problem.clone(),
            solution: solution.clone(),
            base_steps,
            level,
        });

        Ok(SolveResponse {
            problem,
            solution,
            steps,
            verification,
            graph,
        })
    }

    /// Re-enhance the current problem's steps at `level`.
    pub fn regenerate_steps(&mut self, level: ExplanationLevel) -> Result<Vec<StepEntry>, SolveError> {
        let options = self.config.enhancer_options();
        let current = self.current.as_mut().ok_or(SolveError::NoActiveProblem)?;
        tracing::debug!(from = %current.level, to = %level, "regenerating steps");
        current.level = level;
        Ok(enhance(
            &current.base_steps,
            current.problem.problem_type,
            level,
            &options,
        ))
    }

    pub fn current(&self) -> Option<&CurrentProblem> {
        self.current.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regenerate_without_problem_fails() {
        let mut session = Session::default();
        assert!(matches!(
            session.regenerate_steps(ExplanationLevel::Basic),
            Err(SolveError::NoActiveProblem)
        ));
    }

    #[test]
    fn failed_solve_keeps_previous_problem() {
        let mut session = Session::default();
        session.solve(&SolveRequest::equation("x^2 - 5x + 6 = 0")).unwrap();
        assert!(session.solve(&SolveRequest::equation("hello")).is_err());
        let current = session.current().expect("kept");
        assert_eq!(current.problem.clean_input, "x^2 - 5x + 6 = 0");
    }

    #[test]
    fn request_level_overrides_config() {
        let mut session = Session::default();
        let request = SolveRequest {
            explanation_level: Some(ExplanationLevel::Basic),
            ..SolveRequest::equation("x^2 - 5x + 6 = 0")
        };
        let response = session.solve(&request).unwrap();
        assert!(response.steps.iter().all(|e| !e.is_bridge()));
        assert_eq!(session.current().map(|c| c.level), Some(ExplanationLevel::Basic));
    }

    #[test]
    fn graph_can_be_disabled() {
        let mut session = Session::new(SessionConfig {
            include_graph: false,
            ..SessionConfig::default()
        });
        let response = session.solve(&SolveRequest::equation("x^2 - 5x + 6 = 0")).unwrap();
        assert!(response.graph.is_none());
    }

    #[test]
    fn clear_drops_the_cache() {
        let mut session = Session::default();
        session.solve(&SolveRequest::equation("3x + 5 = 11")).unwrap();
        session.clear();
        assert!(session.current().is_none());
    }
}
