//! Plot descriptions derived from a solution.

use crate::growth;
use eqn_model::numeric::{fmt_linear, fmt_num, fmt_quadratic, fmt_terms, is_zero};
use eqn_model::solution::{Point2, Trend};
use eqn_model::{GraphData, Interval, Solution, SolutionDetail, SolutionSet};

/// Half-width of the default viewing window.
const HALF_WINDOW: f64 = 10.0;

fn window(center: f64) -> (f64, f64) {
    (center - HALF_WINDOW, center + HALF_WINDOW)
}

fn shaded(set: &SolutionSet) -> Vec<Interval> {
    match set {
        SolutionSet::Intervals { intervals } => intervals.clone(),
        SolutionSet::AllReals => vec![Interval::all_reals()],
        SolutionSet::Discrete { values } => values.iter().map(|v| Interval::point(*v)).collect(),
        _ => Vec::new(),
    }
}

fn parabola(a: f64, b: f64, c: f64, set: &SolutionSet, shade: bool) -> GraphData {
    let h = -b / (2.0 * a);
    let mut x_intercepts = set.real_values().to_vec();
    if shade {
        // inequality sets are intervals; take the zeros from the boundaries
        x_intercepts = match crate::quadratic_formula::quadratic_roots(a, b, c) {
            Ok((_, roots)) => roots.real(),
            Err(_) => Vec::new(),
        };
    }
    GraphData::Parabola {
        function: format!("y = {}", fmt_quadratic(a, b, c, "x")),
        vertex: Point2 {
            x: h,
            y: a * h * h + b * h + c,
        },
        x_intercepts,
        y_intercept: c,
        axis_of_symmetry: h,
        opens_upward: a > 0.0,
        x_range: window(h),
        shaded: if shade { shaded(set) } else { Vec::new() },
    }
}

/// `y = k·base^exponent`, parenthesizing compound exponents.
fn exponential_function(k: f64, base: &str, exponent: &str) -> String {
    let power = if exponent == "x" {
        format!("{}^x", base)
    } else {
        format!("{}^({})", base, exponent)
    };
    if is_zero(k - 1.0) {
        format!("y = {}", power)
    } else if is_zero(k + 1.0) {
        format!("y = -{}", power)
    } else {
        format!("y = {}·{}", fmt_num(k), power)
    }
}

/// Graph for `solution`, or `None` for types without a natural plot.
pub fn graph_data(solution: &Solution) -> Option<GraphData> {
    let set = &solution.set;
    let graph = match &solution.detail {
        SolutionDetail::Quadratic(d) => parabola(d.a, d.b, d.c, set, false),
        SolutionDetail::Factoring(d) => parabola(d.quadratic.a, d.quadratic.b, d.quadratic.c, set, false),
        SolutionDetail::CompletingSquare(d) => parabola(d.a, d.b, d.c, set, false),
        SolutionDetail::QuadraticInequality(d) => parabola(d.a, d.b, d.c, set, true),
        SolutionDetail::Projectile(d) => {
            let landing = d.flight_time.unwrap_or(2.0 * d.time_to_max_height);
            GraphData::Parabola {
                function: format!(
                    "h(t) = {}",
                    fmt_quadratic(-d.gravity, d.initial_velocity, d.initial_height, "t")
                ),
                vertex: Point2 {
                    x: d.time_to_max_height,
                    y: d.max_height,
                },
                x_intercepts: d.flight_time.into_iter().collect(),
                y_intercept: d.initial_height,
                axis_of_symmetry: d.time_to_max_height,
                opens_upward: false,
                // time starts at launch
                x_range: (0.0, if landing > 0.0 { landing } else { HALF_WINDOW }),
                shaded: d.target_times.iter().map(|t| Interval::point(*t)).collect(),
            }
        }
        SolutionDetail::VertexAnalysis(d) => {
            let q = &d.quadratic;
            let zeros = SolutionSet::Discrete {
                values: d.x_intercepts.clone(),
            };
            parabola(q.a, q.b, q.c, &zeros, false)
        }
        SolutionDetail::ExponentialInequality(d) => GraphData::Exponential {
            function: exponential_function(d.coefficient, &fmt_num(d.base), "x"),
            base: d.base,
            horizontal_asymptote: 0.0,
            x_range: window(d.critical_value.unwrap_or(0.0)),
            marked_x: d.critical_value.into_iter().collect(),
            shaded: shaded(set),
        },
        SolutionDetail::ExponentialQuadratic(d) => {
            let marked_x = set.real_values().to_vec();
            let center = marked_x.first().copied().unwrap_or(0.0);
            GraphData::Exponential {
                function: format!(
                    "y = {}, u = {}^x",
                    fmt_quadratic(d.a, d.b, d.c, "u"),
                    fmt_num(d.base)
                ),
                base: d.base,
                horizontal_asymptote: d.c,
                x_range: window(center),
                marked_x,
                shaded: Vec::new(),
            }
        }
        SolutionDetail::Exponential(d) => {
            let exponent = fmt_linear(d.rate, 0.0, "x");
            let base = if d.natural { "e".to_string() } else { fmt_num(d.base) };
            let function = exponential_function(d.coefficient, &base, &exponent);
            let marked_x = set.real_values().to_vec();
            GraphData::Exponential {
                function,
                base: d.base,
                horizontal_asymptote: 0.0,
                x_range: window(marked_x.first().copied().unwrap_or(0.0)),
                marked_x,
                shaded: Vec::new(),
            }
        }
        SolutionDetail::Linear(d) => GraphData::Line {
            function: format!("y = {}", fmt_linear(d.m, d.b, "x")),
            slope: d.m,
            intercept: d.b,
            x_range: window(set.real_values().first().copied().unwrap_or(0.0)),
            shaded: Vec::new(),
        },
        SolutionDetail::LinearInequality(d) => GraphData::Line {
            function: format!("y = {}", fmt_linear(d.m, d.b, "x")),
            slope: d.m,
            intercept: d.b,
            x_range: window(d.boundary.unwrap_or(0.0)),
            shaded: shaded(set),
        },
        SolutionDetail::System(d) => GraphData::LinePair {
            first: format!("{} = {}", fmt_terms(&[(d.a1, "x"), (d.b1, "y")]), fmt_num(d.c1)),
            second: format!("{} = {}", fmt_terms(&[(d.a2, "x"), (d.b2, "y")]), fmt_num(d.c2)),
            intersection: match set {
                SolutionSet::Point { x, y } => Some(Point2 { x: *x, y: *y }),
                _ => None,
            },
        },
        SolutionDetail::Growth(d) => GraphData::GrowthCurve {
            function: d.formula.clone(),
            initial: d.principal,
            unit_factor: growth::factor(d.law, d.trend, d.rate, 1.0),
            horizon: d.time.max(1.0),
        },
        SolutionDetail::HalfLife(d) => {
            let sign = match d.trend {
                Trend::Growth => 1.0,
                Trend::Decay => -1.0,
            };
            GraphData::GrowthCurve {
                function: match d.trend {
                    Trend::Growth => "A = A₀·2^(t/d)".to_string(),
                    Trend::Decay => "A = A₀·(1/2)^(t/h)".to_string(),
                },
                initial: d.initial.unwrap_or(1.0),
                unit_factor: (sign * d.k).exp(),
                horizon: d.time.unwrap_or(4.0 * d.characteristic_time),
            }
        }
        SolutionDetail::Logarithmic(_) => return None,
    };
    Some(graph)
}
