//! Interval solving for quadratic and linear inequalities.

use crate::params::{operator, quadratic_coefficients, require};
use crate::quadratic_formula::quadratic_roots;
use eqn_model::solution::{LinearInequalityDetail, QuadraticInequalityDetail, TestPoint};
use eqn_model::{
    is_zero, Bound, Interval, Params, ProblemType, RelOp, Solution, SolutionDetail,
    SolutionSet, SolveError,
};

/// Solution set of `x op rhs`.
pub fn isolated_var_solution(rhs: f64, op: RelOp) -> SolutionSet {
    let intervals = match op {
        RelOp::Eq => return SolutionSet::Discrete { values: vec![rhs] },
        RelOp::Neq => vec![
            Interval::new(Bound::NegInfinity, Bound::Open(rhs)),
            Interval::new(Bound::Open(rhs), Bound::PosInfinity),
        ],
        RelOp::Lt => vec![Interval::new(Bound::NegInfinity, Bound::Open(rhs))],
        RelOp::Gt => vec![Interval::new(Bound::Open(rhs), Bound::PosInfinity)],
        RelOp::Leq => vec![Interval::new(Bound::NegInfinity, Bound::Closed(rhs))],
        RelOp::Geq => vec![Interval::new(Bound::Closed(rhs), Bound::PosInfinity)],
    };
    SolutionSet::Intervals { intervals }
}

/// Normalize an interval list: the full line becomes `AllReals`, nothing becomes `Empty`.
pub fn intervals_to_set(intervals: Vec<Interval>) -> SolutionSet {
    match intervals.as_slice() {
        [] => SolutionSet::Empty,
        [only] if *only == Interval::all_reals() => SolutionSet::AllReals,
        _ => SolutionSet::Intervals { intervals },
    }
}

/// Label for an inequality solution set.
pub fn describe(set: &SolutionSet) -> String {
    match set {
        SolutionSet::AllReals => "All real numbers".to_string(),
        SolutionSet::Empty => "No solution".to_string(),
        other => other.notation(),
    }
}

/// Solve `f(x) op 0` where `f` changes sign only at `critical` (ascending).
///
/// Open pieces between critical points are decided by one test point each
/// (midpoint, or critical ∓ 1 at the unbounded ends). The critical points
/// themselves satisfy the relation iff it admits equality. Contiguous
/// satisfying pieces are merged.
pub fn solve_by_test_points(
    critical: &[f64],
    op: RelOp,
    f: impl Fn(f64) -> f64,
) -> (SolutionSet, Vec<TestPoint>) {
    if critical.is_empty() {
        let value = f(0.0);
        let satisfies = op.holds(value, 0.0);
        let tests = vec![TestPoint {
            interval: Interval::all_reals(),
            point: 0.0,
            value,
            satisfies,
        }];
        let set = if satisfies {
            SolutionSet::AllReals
        } else {
            SolutionSet::Empty
        };
        return (set, tests);
    }

    let at_critical = op.holds(0.0, 0.0);
    let mut tests = Vec::with_capacity(critical.len() + 1);
    let mut intervals = Vec::new();
    let mut run: Option<(Bound, Bound)> = None;

    let mut extend = |run: &mut Option<(Bound, Bound)>, lower: Bound, upper: Bound, ok: bool| {
        if ok {
            *run = Some(match run.take() {
                Some((start, _)) => (start, upper),
                None => (lower, upper),
            });
        } else if let Some((start, end)) = run.take() {
            intervals.push(Interval::new(start, end));
        }
    };

    for i in 0..=critical.len() {
        let lower = if i == 0 {
            Bound::NegInfinity
        } else {
            Bound::Open(critical[i - 1])
        };
        let upper = critical.get(i).map_or(Bound::PosInfinity, |c| Bound::Open(*c));
        let piece = Interval::new(lower, upper);
        let point = piece.sample();
        let value = f(point);
        let satisfies = op.holds(value, 0.0);
        tests.push(TestPoint {
            interval: piece,
            point,
            value,
            satisfies,
        });
        extend(&mut run, lower, upper, satisfies);

        if let Some(&c) = critical.get(i) {
            extend(&mut run, Bound::Closed(c), Bound::Closed(c), at_critical);
        }
    }
    if let Some((start, end)) = run {
        intervals.push(Interval::new(start, end));
    }

    (intervals_to_set(intervals), tests)
}

pub fn solve_quadratic(params: &Params) -> Result<Solution, SolveError> {
    let category = ProblemType::QuadraticInequality;
    let (a, b, c) = quadratic_coefficients(params, category)?;
    let op = operator(params, category)?;
    let (delta, roots) = quadratic_roots(a, b, c)?;
    let critical = roots.real();
    let (set, tests) = solve_by_test_points(&critical, op, |x| a * x * x + b * x + c);
    tracing::debug!(?critical, %op, tests = tests.len(), "quadratic inequality");

    Ok(Solution {
        category,
        solution_type: describe(&set),
        set,
        fallback: false,
        notes: Vec::new(),
        detail: SolutionDetail::QuadraticInequality(QuadraticInequalityDetail {
            a,
            b,
            c,
            operator: op,
            discriminant: delta,
            critical_points: critical,
            tests,
        }),
    })
}

/// `m x + b op c`.
pub fn solve_linear(params: &Params) -> Result<Solution, SolveError> {
    let category = ProblemType::LinearInequality;
    let m = require(params, "m", category)?;
    let b = params.number_or("b", 0.0);
    let c = params.number_or("c", 0.0);
    let op = operator(params, category)?;

    let (set, isolated_operator, boundary) = if is_zero(m) {
        let set = if op.holds(b, c) {
            SolutionSet::AllReals
        } else {
            SolutionSet::Empty
        };
        (set, op, None)
    } else {
        let boundary = (c - b) / m;
        let isolated = if m < 0.0 { op.flip() } else { op };
        (isolated_var_solution(boundary, isolated), isolated, Some(boundary))
    };

    Ok(Solution {
        category,
        solution_type: describe(&set),
        set,
        fallback: false,
        notes: Vec::new(),
        detail: SolutionDetail::LinearInequality(LinearInequalityDetail {
            m,
            b,
            c,
            operator: op,
            isolated_operator,
            boundary,
            flipped: m < 0.0 && !is_zero(m),
        }),
    })
}
