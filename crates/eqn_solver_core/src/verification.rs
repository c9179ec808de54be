//! Back-substitution and test-point checks of a computed solution.

use crate::{growth, projectile};
use eqn_model::numeric::fmt_num;
use eqn_model::solution::{GrowthDetail, ProjectileDetail, VertexAnalysisDetail};
use eqn_model::{
    Confidence, IntervalCheck, Interval, Problem, RelOp, Solution, SolutionDetail, SolutionSet,
    SubstitutionCheck, VerificationReport, VERIFY_TOLERANCE,
};

/// `lhs(x) op rhs` for a single-variable relation.
struct Relation {
    lhs: Box<dyn Fn(f64) -> f64>,
    rhs: f64,
    op: RelOp,
}

impl Relation {
    fn holds(&self, x: f64) -> bool {
        self.op.holds_within((self.lhs)(x), self.rhs, VERIFY_TOLERANCE)
    }

    fn substitute(&self, x: f64) -> SubstitutionCheck {
        check(format!("x = {}", fmt_num(x)), (self.lhs)(x), self.rhs, 1.0)
    }
}

fn check(solution: String, left_side: f64, right_side: f64, scale: f64) -> SubstitutionCheck {
    let difference = (left_side - right_side).abs();
    SubstitutionCheck {
        solution,
        left_side,
        right_side,
        difference,
        is_valid: difference / scale < VERIFY_TOLERANCE,
    }
}

fn quadratic(a: f64, b: f64, c: f64, op: RelOp) -> Relation {
    Relation {
        lhs: Box::new(move |x| a * x * x + b * x + c),
        rhs: 0.0,
        op,
    }
}

fn relation(detail: &SolutionDetail) -> Option<Relation> {
    Some(match detail {
        SolutionDetail::Quadratic(d) => quadratic(d.a, d.b, d.c, RelOp::Eq),
        SolutionDetail::Factoring(d) => quadratic(d.quadratic.a, d.quadratic.b, d.quadratic.c, RelOp::Eq),
        SolutionDetail::CompletingSquare(d) => quadratic(d.a, d.b, d.c, RelOp::Eq),
        SolutionDetail::QuadraticInequality(d) => quadratic(d.a, d.b, d.c, d.operator),
        SolutionDetail::LinearInequality(d) => {
            let (m, b) = (d.m, d.b);
            Relation {
                lhs: Box::new(move |x| m * x + b),
                rhs: d.c,
                op: d.operator,
            }
        }
        SolutionDetail::ExponentialInequality(d) => {
            let (k, base) = (d.coefficient, d.base);
            Relation {
                lhs: Box::new(move |x| k * base.powf(x)),
                rhs: d.bound,
                op: d.operator,
            }
        }
        SolutionDetail::ExponentialQuadratic(d) => {
            let (a, b, c, base) = (d.a, d.b, d.c, d.base);
            Relation {
                lhs: Box::new(move |x| {
                    let u = base.powf(x);
                    a * u * u + b * u + c
                }),
                rhs: 0.0,
                op: RelOp::Eq,
            }
        }
        SolutionDetail::Exponential(d) => {
            let (k, base, rate) = (d.coefficient, d.base, d.rate);
            Relation {
                lhs: Box::new(move |x| k * base.powf(rate * x)),
                rhs: d.result,
                op: RelOp::Eq,
            }
        }
        SolutionDetail::Logarithmic(d) => {
            let ln_base = d.base.ln();
            Relation {
                lhs: Box::new(move |x| x.ln() / ln_base),
                rhs: d.result,
                op: RelOp::Eq,
            }
        }
        SolutionDetail::Linear(d) => {
            let (m, b) = (d.m, d.b);
            Relation {
                lhs: Box::new(move |x| m * x + b),
                rhs: d.c,
                op: RelOp::Eq,
            }
        }
        SolutionDetail::Growth(_)
        | SolutionDetail::HalfLife(_)
        | SolutionDetail::System(_)
        | SolutionDetail::Projectile(_)
        | SolutionDetail::VertexAnalysis(_) => return None,
    })
}

/// Test points for an interval union: one inside each piece, then the first
/// candidate lying outside all of them.
fn sample_points(intervals: &[Interval]) -> Vec<f64> {
    let mut points: Vec<f64> = intervals.iter().map(Interval::sample).collect();
    let mut edges: Vec<f64> = intervals
        .iter()
        .flat_map(|i| [i.lower.value(), i.upper.value()])
        .filter(|v| v.is_finite())
        .collect();
    edges.sort_by(|a, b| a.total_cmp(b));
    edges.dedup();

    let mut candidates = Vec::new();
    for pair in edges.windows(2) {
        candidates.push((pair[0] + pair[1]) / 2.0);
    }
    for e in &edges {
        candidates.push(e - 1.0);
        candidates.push(e + 1.0);
    }
    if edges.is_empty() {
        candidates.push(0.0);
    }
    if let Some(outside) = candidates
        .into_iter()
        .find(|x| !intervals.iter().any(|i| i.contains(*x)))
    {
        points.push(outside);
    }
    points
}

fn interval_check(point: f64, inside: bool, relation: &Relation) -> IntervalCheck {
    let satisfies = relation.holds(point);
    IntervalCheck {
        point,
        inside,
        satisfies,
        is_valid: inside == satisfies,
    }
}

fn growth_check(d: &GrowthDetail) -> SubstitutionCheck {
    let predicted = d.principal * growth::factor(d.law, d.trend, d.rate, d.time);
    check(
        format!(
            "P = {}, r = {}, t = {}",
            fmt_num(d.principal),
            fmt_num(d.rate),
            fmt_num(d.time)
        ),
        predicted,
        d.final_amount,
        d.final_amount.abs().max(1.0),
    )
}

fn projectile_checks(d: &ProjectileDetail, set: &SolutionSet) -> Vec<SubstitutionCheck> {
    let h = |t: f64| projectile::height(d.gravity, d.initial_velocity, d.initial_height, t);
    match (set, d.target_height) {
        (SolutionSet::Discrete { values }, Some(target)) => values
            .iter()
            .map(|t| check(format!("t = {}", fmt_num(*t)), h(*t), target, target.abs().max(1.0)))
            .collect(),
        (SolutionSet::Quantity { value, .. }, _) => {
            let v0 = d.initial_velocity;
            let expected = if v0 > 0.0 {
                d.initial_height + v0 * v0 / (4.0 * d.gravity)
            } else {
                d.initial_height
            };
            vec![check(
                format!("t = {}", fmt_num(d.time_to_max_height)),
                *value,
                expected,
                expected.abs().max(1.0),
            )]
        }
        _ => Vec::new(),
    }
}

/// The vertex value, and equal heights one unit either side of the axis.
fn vertex_checks(d: &VertexAnalysisDetail, set: &SolutionSet) -> Vec<SubstitutionCheck> {
    let SolutionSet::Quantity { value, .. } = set else {
        return Vec::new();
    };
    let q = &d.quadratic;
    let f = |x: f64| q.a * x * x + q.b * x + q.c;
    let h = q.vertex.x;
    let scale = value.abs().max(1.0);
    vec![
        check(format!("x = {}", fmt_num(h)), f(h), *value, scale),
        check(
            format!("x = {} ± 1", fmt_num(h)),
            f(h - 1.0),
            f(h + 1.0),
            f(h + 1.0).abs().max(1.0),
        ),
    ]
}

/// Check `solution` against the relation it claims to solve.
pub fn verify(problem: &Problem, solution: &Solution) -> VerificationReport {
    let mut checks = Vec::new();
    let mut interval_checks = Vec::new();
    let mut notes = Vec::new();

    match (&solution.detail, &solution.set) {
        (SolutionDetail::Growth(d), _) => {
            checks.push(growth_check(d));
            notes.push("Recomputed the final amount from the model formula".to_string());
        }
        (SolutionDetail::Projectile(d), set) => {
            checks.extend(projectile_checks(d, set));
            if matches!(set, SolutionSet::Quantity { .. }) {
                notes.push("Recomputed the maximum height as h₀ + v₀²/(4g)".to_string());
            }
        }
        (SolutionDetail::VertexAnalysis(d), set) => checks.extend(vertex_checks(d, set)),
        (SolutionDetail::System(d), SolutionSet::Point { x, y }) => {
            let label = format!("(x, y) = ({}, {})", fmt_num(*x), fmt_num(*y));
            checks.push(check(label.clone(), d.a1 * x + d.b1 * y, d.c1, 1.0));
            checks.push(check(label, d.a2 * x + d.b2 * y, d.c2, 1.0));
        }
        (detail, set) => {
            if let Some(rel) = relation(detail) {
                match set {
                    SolutionSet::Discrete { values } => {
                        checks.extend(values.iter().map(|x| rel.substitute(*x)));
                    }
                    SolutionSet::Intervals { intervals } => {
                        for point in sample_points(intervals) {
                            let inside = intervals.iter().any(|i| i.contains(point));
                            interval_checks.push(interval_check(point, inside, &rel));
                        }
                    }
                    SolutionSet::AllReals => {
                        for point in [-10.0, 0.0, 10.0] {
                            interval_checks.push(interval_check(point, true, &rel));
                        }
                    }
                    // a contradiction or an unsatisfiable inequality fails everywhere
                    SolutionSet::Empty
                        if rel.op.is_inequality() || matches!(detail, SolutionDetail::Linear(_)) =>
                    {
                        for point in [-10.0, 0.0, 10.0] {
                            interval_checks.push(interval_check(point, false, &rel));
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    if !checks.is_empty() {
        notes.push("Direct substitution method used".to_string());
    }
    if !interval_checks.is_empty() {
        notes.push("Test points sampled inside and outside the solution set".to_string());
    }

    let all_valid = checks.iter().all(|c| c.is_valid) && interval_checks.iter().all(|c| c.is_valid);
    let any_checks = !checks.is_empty() || !interval_checks.is_empty();
    let confidence = if !all_valid {
        Confidence::Low
    } else if any_checks {
        Confidence::High
    } else if solution.set.is_structural() {
        notes.push(match solution.set {
            SolutionSet::Complex { .. } => "Complex solutions are not substituted on the real line",
            SolutionSet::Infinite => "Dependent system: every point of the shared line is a solution",
            _ => "No real solution to substitute",
        }
        .to_string());
        Confidence::Confirmed
    } else {
        notes.push(format!(
            "No dedicated check for {}",
            solution.category.display_name()
        ));
        Confidence::Medium
    };
    notes.push(format!("Numerical tolerance: {:e}", VERIFY_TOLERANCE));
    tracing::debug!(
        problem_type = problem.problem_type.name(),
        checks = checks.len(),
        interval_checks = interval_checks.len(),
        %confidence,
        "verified"
    );

    VerificationReport {
        checks,
        interval_checks,
        all_valid,
        confidence,
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::solve;
    use eqn_model::{Params, ProblemType};

    fn problem(kind: ProblemType, parameters: Params) -> Problem {
        Problem {
            original_input: String::new(),
            clean_input: String::new(),
            problem_type: kind,
            scenario: None,
            parameters,
            context: None,
        }
    }

    fn report(kind: ProblemType, parameters: Params) -> VerificationReport {
        let p = problem(kind, parameters);
        let s = solve(&p).unwrap();
        verify(&p, &s)
    }

    #[test]
    fn real_roots_are_high_confidence() {
        let r = report(
            ProblemType::StandardQuadratic,
            Params::new().with("a", 1.0).with("b", -5.0).with("c", 6.0),
        );
        assert_eq!(r.checks.len(), 2);
        assert!(r.all_valid);
        assert_eq!(r.confidence, Confidence::High);
        assert!(r.notes.iter().any(|n| n == "Numerical tolerance: 1e-9"));
    }

    #[test]
    fn complex_roots_are_confirmed() {
        let r = report(
            ProblemType::StandardQuadratic,
            Params::new().with("a", 1.0).with("c", 1.0),
        );
        assert!(r.checks.is_empty());
        assert_eq!(r.confidence, Confidence::Confirmed);
    }

    #[test]
    fn inequality_intervals_sampled() {
        let r = report(
            ProblemType::QuadraticInequality,
            Params::new()
                .with("a", 1.0)
                .with("c", -4.0)
                .with("operator", ">"),
        );
        assert_eq!(r.interval_checks.len(), 3);
        assert!(r.interval_checks.iter().any(|c| !c.inside));
        assert_eq!(r.confidence, Confidence::High);
    }

    #[test]
    fn wrong_claim_is_low_confidence() {
        let p = problem(
            ProblemType::StandardQuadratic,
            Params::new().with("a", 1.0).with("b", -5.0).with("c", 6.0),
        );
        let mut s = solve(&p).unwrap();
        s.set = SolutionSet::Discrete { values: vec![1.0] };
        let r = verify(&p, &s);
        assert!(!r.all_valid);
        assert_eq!(r.confidence, Confidence::Low);
    }

    #[test]
    fn growth_uses_relative_difference() {
        let r = report(
            ProblemType::CompoundInterest,
            Params::new()
                .with("principal", 1_000_000.0)
                .with("rate", 0.07)
                .with("time", 30.0),
        );
        assert_eq!(r.confidence, Confidence::High);
    }

    #[test]
    fn half_life_is_medium() {
        let r = report(ProblemType::HalfLife, Params::new().with("half_life", 4.0));
        assert_eq!(r.confidence, Confidence::Medium);
    }

    #[test]
    fn system_checks_both_equations() {
        let r = report(
            ProblemType::LinearSystem,
            Params::new()
                .with("a1", 2.0)
                .with("b1", 3.0)
                .with("c1", 7.0)
                .with("a2", 1.0)
                .with("b2", -1.0)
                .with("c2", 1.0),
        );
        assert_eq!(r.checks.len(), 2);
        assert_eq!(r.confidence, Confidence::High);
    }

    #[test]
    fn sampling_finds_outside_point() {
        let points = sample_points(&[Interval::open(-2.0, 2.0)]);
        assert_eq!(points, vec![0.0, -3.0]);
    }

    #[test]
    fn repeated_root_boundary_passes_inclusive_check() {
        let r = report(
            ProblemType::QuadraticInequality,
            Params::new()
                .with("a", 1.0)
                .with("b", 1.4)
                .with("c", 0.49)
                .with("operator", "<="),
        );
        let inside: Vec<_> = r.interval_checks.iter().filter(|c| c.inside).collect();
        assert_eq!(inside.len(), 1);
        assert!((inside[0].point + 0.7).abs() < 1e-9);
        assert!(inside[0].satisfies);
        assert!(r.all_valid);
        assert_eq!(r.confidence, Confidence::High);
    }

    #[test]
    fn strict_inequality_excludes_repeated_root() {
        let r = report(
            ProblemType::QuadraticInequality,
            Params::new()
                .with("a", 1.0)
                .with("b", 1.4)
                .with("c", 0.49)
                .with("operator", "<"),
        );
        assert!(r.all_valid);
    }

    #[test]
    fn projectile_times_are_substituted() {
        let r = report(
            ProblemType::ProjectileMotion,
            Params::new()
                .with("initial_velocity", 64.0)
                .with("initial_height", 80.0)
                .with("target_height", 128.0),
        );
        assert_eq!(r.checks.len(), 2);
        assert_eq!(r.checks[0].solution, "t = 1");
        assert_eq!(r.confidence, Confidence::High);
    }

    #[test]
    fn maximum_height_is_recomputed() {
        let r = report(
            ProblemType::ProjectileMotion,
            Params::new().with("initial_velocity", 19.6).with("units", "metric"),
        );
        assert_eq!(r.checks.len(), 1);
        assert!(r.all_valid);
        assert!(r.notes.iter().any(|n| n.contains("v₀²/(4g)")));
    }

    #[test]
    fn vertex_value_and_symmetry() {
        let p = problem(
            ProblemType::QuadraticOptimization,
            Params::new().with("a", -2.0).with("b", 8.0).with("c", 3.0),
        );
        let mut s = solve(&p).unwrap();
        let r = verify(&p, &s);
        assert_eq!(r.checks.len(), 2);
        assert_eq!(r.confidence, Confidence::High);

        s.set = SolutionSet::Quantity {
            name: "maximum value".to_string(),
            value: 12.0,
        };
        assert_eq!(verify(&p, &s).confidence, Confidence::Low);
    }
}
