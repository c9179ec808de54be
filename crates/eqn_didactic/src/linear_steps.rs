//! Step skeletons for linear equations, inequalities and 2×2 systems.

use crate::names::*;
use crate::steps::solutions_text;
use eqn_model::numeric::{fmt_linear, fmt_num, fmt_paren, fmt_terms, is_zero};
use eqn_model::solution::{LinearDetail, LinearInequalityDetail, SystemDetail};
use eqn_model::{RelOp, Solution, SolutionSet, Step};

fn relation(m: f64, b: f64, op: RelOp, c: f64) -> String {
    format!("{} {} {}", fmt_linear(m, b, "x"), op.symbol(), fmt_num(c))
}

/// Shared isolation: subtract `b`, then divide by `m`. Returns the steps and
/// the isolated relation text.
fn isolate(m: f64, b: f64, c: f64, op: RelOp, isolated_op: RelOp) -> (Vec<Step>, String) {
    let mut steps = Vec::new();
    let mut current = relation(m, b, op, c);
    let moved = relation(m, 0.0, op, c - b);
    if !is_zero(b) {
        steps.push(
            Step::new(SUBTRACT_CONSTANT, format!("Subtract {} from both sides", fmt_paren(b)))
                .transform(current, moved.clone())
                .operation(format!("- {}", fmt_paren(b))),
        );
        current = moved;
    }
    let isolated = format!("x {} {}", isolated_op.symbol(), fmt_num((c - b) / m));
    let mut divide = Step::new(DIVIDE_COEFFICIENT, format!("Divide both sides by {}", fmt_num(m)))
        .transform(current, isolated.clone())
        .operation(format!("÷ {}", fmt_paren(m)));
    if op != isolated_op {
        divide = divide
            .rule("Multiplying or dividing by a negative number reverses the inequality")
            .reasoning(format!("{} is negative, so {} becomes {}", fmt_num(m), op.symbol(), isolated_op.symbol()));
    }
    steps.push(divide);
    (steps, isolated)
}

pub(crate) fn simple(d: &LinearDetail, solution: &Solution) -> Vec<Step> {
    let given = relation(d.m, d.b, RelOp::Eq, d.c);
    let mut steps = vec![Step::new(GIVEN_EQUATION, "Start with the linear equation")
        .expression(given.clone())
        .reasoning("Undo each operation on x in reverse order")];
    if is_zero(d.m) {
        steps.push(
            Step::new(CLASSIFY_EQUATION, "The variable cancels, leaving a statement about numbers")
                .transform(given, solution.solution_type.clone())
                .reasoning(format!(
                    "{} = {} is {}",
                    fmt_num(d.b),
                    fmt_num(d.c),
                    if matches!(solution.set, SolutionSet::AllReals) { "always true" } else { "never true" }
                )),
        );
        return steps;
    }
    let (tail, _) = isolate(d.m, d.b, d.c, RelOp::Eq, RelOp::Eq);
    steps.extend(tail);
    if let Some(last) = steps.last_mut() {
        last.after_expression = Some(solutions_text(solution.set.real_values()));
    }
    steps
}

pub(crate) fn inequality(d: &LinearInequalityDetail, set_label: &str) -> Vec<Step> {
    let given = relation(d.m, d.b, d.operator, d.c);
    let mut steps = vec![Step::new(GIVEN_INEQUALITY, "Start with the linear inequality")
        .expression(given.clone())
        .reasoning("Isolate x as in an equation, watching the direction of the sign")];
    if d.boundary.is_none() {
        steps.push(
            Step::new(CLASSIFY_EQUATION, "The variable cancels, leaving a comparison of numbers")
                .transform(
                    given,
                    format!("{} {} {}", fmt_num(d.b), d.operator.symbol(), fmt_num(d.c)),
                ),
        );
    } else {
        let (tail, _) = isolate(d.m, d.b, d.c, d.operator, d.isolated_operator);
        steps.extend(tail);
    }
    steps.push(
        Step::new(WRITE_SOLUTION, "Write the solution in interval notation")
            .expression(set_label.to_string()),
    );
    steps
}

fn equation2(a: f64, b: f64, c: f64) -> String {
    format!("{} = {}", fmt_terms(&[(a, "x"), (b, "y")]), fmt_num(c))
}

pub(crate) fn system(d: &SystemDetail, solution: &Solution) -> Vec<Step> {
    let mut steps = vec![
        Step::new(GIVEN_SYSTEM, "Start with the system of two linear equations")
            .expression(format!(
                "{}, {}",
                equation2(d.a1, d.b1, d.c1),
                equation2(d.a2, d.b2, d.c2)
            )),
        Step::new(COMPUTE_DETERMINANT, "Compute the coefficient determinant")
            .formula("D = a₁b₂ - a₂b₁")
            .transform(
                "D = a₁b₂ - a₂b₁",
                format!(
                    "D = {}·{} - {}·{} = {}",
                    fmt_paren(d.a1),
                    fmt_paren(d.b2),
                    fmt_paren(d.a2),
                    fmt_paren(d.b1),
                    fmt_num(d.determinant)
                ),
            )
            .reasoning("A nonzero determinant means the lines cross at exactly one point"),
    ];
    let minors = format!("Dx = {}, Dy = {}", fmt_num(d.det_x), fmt_num(d.det_y));
    match solution.set {
        SolutionSet::Point { x, y } => steps.push(
            Step::new(APPLY_CRAMER, "Divide each replaced determinant by D")
                .formula("x = Dx / D, y = Dy / D")
                .transform(minors, format!("x = {}, y = {}", fmt_num(x), fmt_num(y))),
        ),
        _ => steps.push(
            Step::new(CLASSIFY_SYSTEM, "D = 0, so the lines are parallel or identical")
                .expression(minors)
                .reasoning(if matches!(solution.set, SolutionSet::Infinite) {
                    "Both replaced determinants vanish: the equations describe the same line"
                } else {
                    "A replaced determinant is nonzero: the lines are parallel and never meet"
                }),
        ),
    }
    steps.push(
        Step::new(WRITE_SOLUTION, "State the solution of the system").expression(match solution.set {
            SolutionSet::Point { x, y } => format!("(x, y) = ({}, {})", fmt_num(x), fmt_num(y)),
            _ => solution.solution_type.clone(),
        }),
    );
    steps
}
