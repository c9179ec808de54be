//! Vertex analysis of `f(x) = ax² + bx + c`: the extreme value, where it
//! occurs, the range and the graph as a transformation of `y = x²`.

use crate::completing_square::vertex_form;
use crate::params::quadratic_coefficients;
use crate::quadratic_formula::{quadratic_detail, quadratic_roots};
use eqn_model::numeric::{fmt_num, is_zero};
use eqn_model::solution::{Extremum, VertexAnalysisDetail};
use eqn_model::{
    Bound, Interval, Params, ProblemType, Solution, SolutionDetail, SolutionSet, SolveError,
};

fn requested(params: &Params) -> Option<Extremum> {
    let goal = params.text("goal")?.trim().to_ascii_lowercase();
    if goal.starts_with("max") {
        Some(Extremum::Maximum)
    } else if goal.starts_with("min") {
        Some(Extremum::Minimum)
    } else {
        None
    }
}

/// Steps taking `y = x²` to `y = a(x - h)² + k`.
pub fn transformations(a: f64, h: f64, k: f64) -> Vec<String> {
    let mut out = Vec::new();
    let scale = a.abs();
    if scale > 1.0 && !is_zero(scale - 1.0) {
        out.push(format!("Vertical stretch by a factor of {}", fmt_num(scale)));
    } else if scale < 1.0 && !is_zero(scale - 1.0) {
        out.push(format!("Vertical compression by a factor of {}", fmt_num(scale)));
    }
    if a < 0.0 {
        out.push("Reflection across the x-axis".to_string());
    }
    if !is_zero(h) {
        let dir = if h > 0.0 { "right" } else { "left" };
        out.push(format!("Shift {} by {}", dir, fmt_num(h.abs())));
    }
    if !is_zero(k) {
        let dir = if k > 0.0 { "up" } else { "down" };
        out.push(format!("Shift {} by {}", dir, fmt_num(k.abs())));
    }
    out
}

pub fn solve(params: &Params) -> Result<Solution, SolveError> {
    let category = ProblemType::QuadraticOptimization;
    let (a, b, c) = quadratic_coefficients(params, category)?;
    let (delta, roots) = quadratic_roots(a, b, c)?;
    let quadratic = quadratic_detail(a, b, c, delta, roots.nature());
    let (h, k) = (quadratic.vertex.x, quadratic.vertex.y);

    let extremum = if a > 0.0 { Extremum::Minimum } else { Extremum::Maximum };
    let range = match extremum {
        Extremum::Minimum => Interval::new(Bound::Closed(k), Bound::PosInfinity),
        Extremum::Maximum => Interval::new(Bound::NegInfinity, Bound::Closed(k)),
    };
    let requested = requested(params);
    let mut notes = Vec::new();
    if let Some(goal) = requested.filter(|g| *g != extremum) {
        notes.push(format!(
            "A parabola opening {} has no {}; its vertex is the {}",
            if a > 0.0 { "upward" } else { "downward" },
            goal.label(),
            extremum.label()
        ));
    }
    tracing::debug!(h, k, extremum = extremum.label(), "vertex analysis");

    let label = match extremum {
        Extremum::Minimum => "Minimum",
        Extremum::Maximum => "Maximum",
    };
    Ok(Solution {
        category,
        solution_type: format!("{} at x = {}", label, fmt_num(h)),
        set: SolutionSet::Quantity {
            name: format!("{} value", extremum.label()),
            value: k,
        },
        fallback: false,
        notes,
        detail: SolutionDetail::VertexAnalysis(VertexAnalysisDetail {
            vertex_form: vertex_form(a, -h, k),
            extremum,
            requested,
            range,
            x_intercepts: roots.real(),
            transformations: transformations(a, h, k),
            quadratic,
        }),
    })
}
