//! Plain-text rendering of a solve response.

use std::fmt::Write;

use eqn_model::{Confidence, ProblemType, StepEntry};
use eqn_session::SolveResponse;

pub fn types_table(types: &[ProblemType]) -> String {
    let width = types.iter().map(|t| t.name().len()).max().unwrap_or(0);
    let mut out = String::new();
    for t in types {
        let _ = writeln!(out, "{:width$}  {}", t.name(), t.display_name(), width = width);
    }
    out
}

pub fn render(response: &SolveResponse) -> String {
    let mut out = String::new();
    let problem = &response.problem;
    let solution = &response.solution;

    let _ = writeln!(out, "Problem: {} ({})", problem.problem_type.display_name(), problem.problem_type.name());
    if !problem.original_input.is_empty() {
        let _ = writeln!(out, "Input:   {}", problem.original_input.trim());
    }
    if let Some(scenario) = &problem.scenario {
        let _ = writeln!(out, "Scenario: {}", scenario);
    }
    let _ = writeln!(out);

    for entry in &response.steps {
        match entry {
            StepEntry::Step(s) => {
                let step = &s.base;
                let _ = writeln!(out, "{}. {}: {}", step.step_number, step.name, step.description);
                match (&step.before_expression, &step.after_expression) {
                    (Some(before), Some(after)) => {
                        let _ = writeln!(out, "   {}  →  {}", before, after);
                    }
                    _ => {
                        if let Some(expr) = step.result_text() {
                            let _ = writeln!(out, "   {}", expr);
                        }
                    }
                }
                if let Some(concept) = s.enhancement.as_ref().and_then(|e| e.highlighted_concept.as_ref()) {
                    let _ = writeln!(out, "   Key idea: {}", concept);
                }
            }
            StepEntry::Bridge(b) => {
                let _ = writeln!(out, "   ↳ {}", b.why);
            }
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Solution: {} {}", solution.solution_type, solution.set.notation());
    for note in &solution.notes {
        let _ = writeln!(out, "Note: {}", note);
    }

    let report = &response.verification;
    let verdict = match report.confidence {
        Confidence::Low => "FAILED",
        _ => "ok",
    };
    let _ = writeln!(out, "Verification: {} (confidence {})", verdict, report.confidence);
    for check in &report.checks {
        let _ = writeln!(
            out,
            "   {}: |{} - {}| = {:e} {}",
            check.solution,
            check.left_side,
            check.right_side,
            check.difference,
            if check.is_valid { "✓" } else { "✗" }
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_are_aligned() {
        let table = types_table(&[ProblemType::HalfLife, ProblemType::SimpleLinear]);
        assert_eq!(table, "half_life      Half-Life and Doubling Time\nsimple_linear  Linear Equation\n");
    }
}
