//! Step skeletons for the quadratic family.

use crate::names::*;
use crate::steps::{complex_text, solutions_text};
use eqn_model::numeric::{fmt_binomial, fmt_num, fmt_paren, fmt_quadratic, fmt_terms, is_zero};
use eqn_model::solution::{
    CompletingSquareDetail, Extremum, FactoringDetail, ProjectileDetail, QuadraticDetail,
    QuadraticInequalityDetail, RootNature, VertexAnalysisDetail,
};
use eqn_model::{SolutionSet, Step};

pub(crate) fn equation(a: f64, b: f64, c: f64) -> String {
    format!("{} = 0", fmt_quadratic(a, b, c, "x"))
}

fn given(a: f64, b: f64, c: f64) -> Step {
    Step::new(GIVEN_EQUATION, "Start with the quadratic equation in standard form")
        .expression(equation(a, b, c))
        .reasoning("A quadratic equation has the form ax² + bx + c = 0 with a ≠ 0")
}

/// Standard-form solution from coefficient identification onward.
pub(crate) fn formula_tail(d: &QuadraticDetail, set: &SolutionSet) -> Vec<Step> {
    let (a, b, c, delta) = (d.a, d.b, d.c, d.discriminant);
    let mut steps = vec![
        Step::new(IDENTIFY_COEFFICIENTS, "Read off the coefficients of x², x and the constant")
            .expression(format!("a = {}, b = {}, c = {}", fmt_num(a), fmt_num(b), fmt_num(c)))
            .reasoning("Each coefficient is the number multiplying its power of x"),
        Step::new(CALCULATE_DISCRIMINANT, "Compute the discriminant")
            .formula("Δ = b² - 4ac")
            .transform(
                "Δ = b² - 4ac",
                format!(
                    "Δ = {}² - 4·{}·{} = {}",
                    fmt_paren(b),
                    fmt_paren(a),
                    fmt_paren(c),
                    fmt_num(delta)
                ),
            )
            .operation("substitute a, b and c")
            .reasoning(match d.nature {
                RootNature::TwoReal => "Δ > 0, so there are two distinct real solutions",
                RootNature::OneReal => "Δ = 0, so there is exactly one repeated real solution",
                RootNature::ComplexPair => "Δ < 0, so the solutions are complex conjugates",
            }),
    ];

    let minus_b = fmt_num(-b);
    let two_a = fmt_num(2.0 * a);
    match (d.nature, set) {
        (RootNature::OneReal, _) => {
            steps.push(
                Step::new(APPLY_QUADRATIC_FORMULA, "With Δ = 0 the ± term vanishes")
                    .formula("x = -b / 2a")
                    .transform("x = (-b ± √Δ) / 2a", format!("x = {} / {}", minus_b, two_a))
                    .rule("x = (-b ± √(b² - 4ac)) / 2a"),
            );
            steps.push(
                Step::new(CALCULATE_SOLUTION, "Divide to get the single solution")
                    .transform(
                        format!("x = {} / {}", minus_b, two_a),
                        solutions_text(set.real_values()),
                    )
                    .reasoning("The parabola touches the x-axis at its vertex"),
            );
        }
        (RootNature::ComplexPair, SolutionSet::Complex { values }) => {
            steps.push(
                Step::new(APPLY_QUADRATIC_FORMULA, "Substitute into the quadratic formula")
                    .formula("x = (-b ± √Δ) / 2a")
                    .transform(
                        "x = (-b ± √Δ) / 2a",
                        format!("x = ({} ± √({})) / {}", minus_b, fmt_num(delta), two_a),
                    )
                    .rule("x = (-b ± √(b² - 4ac)) / 2a"),
            );
            steps.push(
                Step::new(IDENTIFY_COMPLEX_SOLUTIONS, "Write the square root of the negative discriminant with i")
                    .transform(
                        format!("√({}) = {}i", fmt_num(delta), fmt_num((-delta).sqrt())),
                        complex_text(values),
                    )
                    .rule("√(-k) = i√k")
                    .reasoning("The parabola never crosses the x-axis, so there is no real solution"),
            );
        }
        _ => {
            let root = fmt_num(delta.max(0.0).sqrt());
            let applied = format!("x = ({} ± √{}) / {}", minus_b, fmt_num(delta), two_a);
            let simplified = format!("x = ({} ± {}) / {}", minus_b, root, two_a);
            steps.push(
                Step::new(APPLY_QUADRATIC_FORMULA, "Substitute into the quadratic formula")
                    .formula("x = (-b ± √Δ) / 2a")
                    .transform("x = (-b ± √Δ) / 2a", applied.clone())
                    .rule("x = (-b ± √(b² - 4ac)) / 2a"),
            );
            steps.push(
                Step::new(SIMPLIFY_SQUARE_ROOT, "Evaluate the square root of the discriminant")
                    .transform(applied, simplified.clone())
                    .operation(format!("√{} = {}", fmt_num(delta), root)),
            );
            steps.push(
                Step::new(CALCULATE_SOLUTIONS, "Take the + and - branches separately")
                    .transform(simplified, solutions_text(set.real_values()))
                    .reasoning("Each branch gives one point where the parabola crosses the x-axis"),
            );
        }
    }
    steps
}

pub(crate) fn formula(d: &QuadraticDetail, set: &SolutionSet) -> Vec<Step> {
    let mut steps = vec![given(d.a, d.b, d.c)];
    steps.extend(formula_tail(d, set));
    steps
}

pub(crate) fn factoring(d: &FactoringDetail, set: &SolutionSet) -> Vec<Step> {
    let q = &d.quadratic;
    let mut steps = vec![given(q.a, q.b, q.c)];
    let (Some((p, r)), Some(form)) = (d.pair, d.factored_form.as_deref()) else {
        steps.push(
            Step::new(CANNOT_FACTOR, "No integer pair multiplies to c and adds to b")
                .expression(equation(q.a, q.b, q.c))
                .reasoning("Switch to the quadratic formula, which always works"),
        );
        steps.extend(formula_tail(q, set));
        return steps;
    };

    let k = d.common_factor.unwrap_or(1.0);
    let (b, c) = (q.b / k, q.c / k);
    if d.common_factor.is_some() {
        steps.push(
            Step::new(FACTOR_OUT_COMMON, format!("Every coefficient is divisible by {}", fmt_num(k)))
                .transform(
                    equation(q.a, q.b, q.c),
                    format!("{}({}) = 0", fmt_num(k), fmt_quadratic(1.0, b, c, "x")),
                )
                .operation(format!("factor out {}", fmt_num(k)))
                .reasoning("A nonzero factor never makes the product zero, so it can be set aside"),
        );
    }
    steps.push(
        Step::new(FIND_FACTOR_PAIR, format!("Find two integers with product {} and sum {}", fmt_num(c), fmt_num(b)))
            .expression(format!("p = {}, q = {}", fmt_num(p), fmt_num(r)))
            .reasoning(format!(
                "{}·{} = {} and {} + {} = {}",
                fmt_paren(p),
                fmt_paren(r),
                fmt_num(p * r),
                fmt_paren(p),
                fmt_paren(r),
                fmt_num(p + r)
            )),
    );
    let reduced = if p == r {
        format!("({})²", fmt_binomial("x", p))
    } else {
        format!("({})({})", fmt_binomial("x", p), fmt_binomial("x", r))
    };
    steps.push(
        Step::new(FACTOR_QUADRATIC, "Write the quadratic as a product of binomials")
            .transform(equation(1.0, b, c), format!("{} = 0", reduced))
            .rule("x² + (p + q)x + pq = (x + p)(x + q)")
            .hint(format!("Fully factored: {}", form)),
    );
    let factors = if p == r {
        format!("{} = 0", fmt_binomial("x", p))
    } else {
        format!("{} = 0 or {} = 0", fmt_binomial("x", p), fmt_binomial("x", r))
    };
    steps.push(
        Step::new(ZERO_PRODUCT, "A product is zero exactly when one of its factors is zero")
            .transform(format!("{} = 0", reduced), factors.clone())
            .rule("AB = 0 ⇒ A = 0 or B = 0"),
    );
    steps.push(
        Step::new(SOLVE_FOR_X, "Solve each linear factor")
            .transform(factors, solutions_text(set.real_values())),
    );
    steps
}

pub(crate) fn completing_square(d: &CompletingSquareDetail, set: &SolutionSet) -> Vec<Step> {
    let mut steps = vec![given(d.a, d.b, d.c)];
    let monic = equation(1.0, d.b_over_a, d.c_over_a);
    if !is_zero(d.a - 1.0) {
        steps.push(
            Step::new(DIVIDE_LEADING, format!("Divide every term by {}", fmt_num(d.a)))
                .transform(equation(d.a, d.b, d.c), monic.clone())
                .operation(format!("÷ {}", fmt_num(d.a))),
        );
    }
    let variable_part = fmt_terms(&[(1.0, "x²"), (d.b_over_a, "x")]);
    let moved = format!("{} = {}", variable_part, fmt_num(-d.c_over_a));
    steps.push(
        Step::new(MOVE_CONSTANT, "Move the constant term to the right side")
            .transform(monic, moved.clone())
            .operation(format!("subtract {}", fmt_paren(d.c_over_a))),
    );
    let completed = format!(
        "{} + {} = {}",
        variable_part,
        fmt_num(d.half_b_squared),
        fmt_num(d.remainder)
    );
    steps.push(
        Step::new(COMPLETE_SQUARE, format!("Add (b/2)² = {} to both sides", fmt_num(d.half_b_squared)))
            .transform(moved, completed.clone())
            .formula("(b/2)²")
            .reasoning(format!("Half of {} is {}, and its square is {}", fmt_num(d.b_over_a), fmt_num(d.half_b), fmt_num(d.half_b_squared))),
    );
    let binomial = fmt_binomial("x", d.half_b);
    let square = format!("({})² = {}", binomial, fmt_num(d.remainder));
    steps.push(
        Step::new(FACTOR_PERFECT_SQUARE, "The left side is now a perfect square")
            .transform(completed, square.clone())
            .rule("x² + 2hx + h² = (x + h)²")
            .hint(format!("Vertex form: {}", d.vertex_form)),
    );
    match set {
        SolutionSet::Complex { values } => steps.push(
            Step::new(IDENTIFY_COMPLEX_SOLUTIONS, "A square cannot be negative for real x, so the roots are complex")
                .transform(square, complex_text(values))
                .rule("√(-k) = i√k"),
        ),
        _ => {
            let root = format!("{} = ±{}", binomial, fmt_num(d.remainder.max(0.0).sqrt()));
            steps.push(
                Step::new(TAKE_SQUARE_ROOT, "Take the square root of both sides")
                    .transform(square, root.clone())
                    .reasoning("Both the positive and the negative root square to the right side"),
            );
            steps.push(
                Step::new(SOLVE_FOR_X, format!("Subtract {} from both sides", fmt_paren(d.half_b)))
                    .transform(root, solutions_text(set.real_values())),
            );
        }
    }
    steps
}

pub(crate) fn inequality(
    d: &QuadraticInequalityDetail,
    set_label: &str,
) -> Vec<Step> {
    let relation = format!("{} {} 0", fmt_quadratic(d.a, d.b, d.c, "x"), d.operator.symbol());
    let mut steps = vec![
        Step::new(GIVEN_INEQUALITY, "Start with the quadratic inequality")
            .expression(relation)
            .reasoning("The sign of a quadratic can only change where it equals zero"),
        Step::new(SOLVE_RELATED_EQUATION, "Find the critical points from the related equation")
            .transform(
                equation(d.a, d.b, d.c),
                if d.critical_points.is_empty() {
                    "no real roots".to_string()
                } else {
                    solutions_text(&d.critical_points)
                },
            )
            .operation(format!("Δ = {}", fmt_num(d.discriminant))),
    ];
    if !d.critical_points.is_empty() {
        steps.push(
            Step::new(IDENTIFY_TEST_INTERVALS, "The critical points split the number line into intervals")
                .expression(
                    d.tests
                        .iter()
                        .map(|t| t.interval.to_string())
                        .collect::<Vec<_>>()
                        .join(", "),
                ),
        );
    }
    let lines = d
        .tests
        .iter()
        .map(|t| {
            format!(
                "x = {}: {} {} 0 {}",
                fmt_num(t.point),
                fmt_num(t.value),
                d.operator.symbol(),
                if t.satisfies { "✓" } else { "✗" }
            )
        })
        .collect::<Vec<_>>()
        .join("; ");
    steps.push(
        Step::new(TEST_EACH_INTERVAL, "Evaluate the quadratic at one test point per interval")
            .expression(lines)
            .reasoning(if d.operator.is_inclusive() {
                "The critical points are included because the relation allows equality"
            } else {
                "The critical points are excluded because the relation is strict"
            }),
    );
    steps.push(
        Step::new(WRITE_SOLUTION, "Collect the intervals that satisfy the inequality")
            .expression(set_label.to_string())
            .hint("Shade the parts of the parabola on the correct side of the x-axis"),
    );
    steps
}

fn times_text(times: &[f64]) -> String {
    times
        .iter()
        .map(|t| format!("t = {}", fmt_num(*t)))
        .collect::<Vec<_>>()
        .join(" or ")
}

pub(crate) fn projectile(d: &ProjectileDetail) -> Vec<Step> {
    let (g, v0, h0) = (d.gravity, d.initial_velocity, d.initial_height);
    let unit = d.units.length();
    let function = format!("h(t) = {}", fmt_quadratic(-g, v0, h0, "t"));
    let t_max = fmt_num(d.time_to_max_height);
    let peak = fmt_num(d.max_height);

    let mut steps = vec![
        Step::new(WRITE_HEIGHT_FUNCTION, "Model the height with the projectile formula")
            .formula("h(t) = -gt² + v₀t + h₀")
            .expression(function.clone())
            .reasoning(format!(
                "g = {} {}/s² is half the acceleration due to gravity, v₀ = {} {}/s and h₀ = {} {}",
                fmt_num(g),
                unit,
                fmt_num(v0),
                unit,
                fmt_num(h0),
                unit
            )),
    ];
    let time_step = Step::new(FIND_TIME_OF_MAX, "The maximum occurs at the vertex of the parabola")
        .formula("t = -b / 2a = v₀ / 2g");
    steps.push(if v0 > 0.0 {
        time_step
            .transform(
                "t = v₀ / 2g",
                format!("t = {} / {} = {}", fmt_num(v0), fmt_num(2.0 * g), t_max),
            )
            .operation("substitute v₀ and g")
    } else {
        time_step
            .expression("t = 0")
            .reasoning("With no upward velocity the object is highest at the moment of release")
    });

    let mut peak_step = Step::new(COMPUTE_MAX_HEIGHT, "Evaluate the height at the vertex time")
        .transform(format!("h({})", t_max), format!("h({}) = {} {}", t_max, peak, unit))
        .operation(format!("substitute t = {}", t_max));
    if let Some(flight) = d.flight_time {
        peak_step = peak_step.hint(format!("It lands at t = {} s", fmt_num(flight)));
    }
    steps.push(peak_step);

    let Some(target) = d.target_height else {
        return steps;
    };
    let equation = format!("{} = 0", fmt_quadratic(-g, v0, h0 - target, "t"));
    steps.push(
        Step::new(SET_TARGET_HEIGHT, format!("Set h(t) = {} and move every term to one side", fmt_num(target)))
            .transform(format!("{} = {}", function, fmt_num(target)), equation.clone())
            .operation(format!("subtract {}", fmt_paren(target))),
    );
    let delta = d.target_discriminant.unwrap_or(0.0);
    let roots = times_text(&d.target_times);
    steps.push(
        Step::new(SOLVE_FOR_TIME, "Solve the quadratic in t with the quadratic formula")
            .formula("t = (-b ± √Δ) / 2a")
            .transform(equation, roots.clone())
            .operation(format!("Δ = {}", fmt_num(delta)))
            .rule("t = (-b ± √(b² - 4ac)) / 2a"),
    );
    let moments = d
        .target_times
        .iter()
        .map(|t| {
            let phase = if (*t - d.time_to_max_height).abs() < 1e-9 {
                "at the peak"
            } else if *t < d.time_to_max_height {
                "on the way up"
            } else {
                "on the way down"
            };
            format!("t = {} s ({})", fmt_num(*t), phase)
        })
        .collect::<Vec<_>>()
        .join(" and ");
    steps.push(
        Step::new(INTERPRET_TIMES, "Keep the times after launch")
            .expression(format!("h = {} {} at {}", fmt_num(target), unit, moments))
            .reasoning("Negative times describe the moment before launch and are rejected"),
    );
    steps
}

pub(crate) fn vertex_analysis(d: &VertexAnalysisDetail) -> Vec<Step> {
    let q = &d.quadratic;
    let (a, b, c) = (q.a, q.b, q.c);
    let (h, k) = (fmt_num(q.vertex.x), fmt_num(q.vertex.y));
    let function = format!("f(x) = {}", fmt_quadratic(a, b, c, "x"));
    let opens = if a > 0.0 { "upward" } else { "downward" };

    let mut extremum = Step::new(DETERMINE_EXTREMUM, format!("The parabola opens {}, so the vertex is a {}", opens, d.extremum.label()))
        .expression(format!("{} value f({}) = {}", capitalized(d.extremum), h, k))
        .reasoning(match d.extremum {
            Extremum::Minimum => "a > 0: every other output is larger than k",
            Extremum::Maximum => "a < 0: every other output is smaller than k",
        });
    if let Some(goal) = d.requested.filter(|g| *g != d.extremum) {
        extremum = extremum.hint(format!("This function has no {}", goal.label()));
    }

    let mut describe = Step::new(DESCRIBE_GRAPH, "Describe the graph as a transformation of y = x²")
        .expression(if d.transformations.is_empty() {
            "Same as y = x²".to_string()
        } else {
            d.transformations.join("; ")
        });
    if !d.x_intercepts.is_empty() {
        describe = describe.hint(format!("x-intercepts: {}", solutions_text(&d.x_intercepts)));
    }

    vec![
        Step::new(GIVEN_FUNCTION, "Start with the quadratic function")
            .expression(function.clone())
            .reasoning("The graph of a quadratic function is a parabola"),
        Step::new(IDENTIFY_COEFFICIENTS, "Read off the coefficients of x², x and the constant")
            .expression(format!("a = {}, b = {}, c = {}", fmt_num(a), fmt_num(b), fmt_num(c))),
        Step::new(FIND_VERTEX, "Locate the vertex on the axis of symmetry")
            .formula("h = -b / 2a, k = f(h)")
            .transform(
                "h = -b / 2a",
                format!("h = {} / {} = {}", fmt_num(-b), fmt_num(2.0 * a), h),
            )
            .operation(format!("k = f({}) = {}", h, k))
            .hint(format!("Vertex ({}, {})", h, k)),
        Step::new(WRITE_VERTEX_FORM, "Rewrite the function around its vertex")
            .transform(function, format!("f(x) = {}", d.vertex_form))
            .rule("f(x) = a(x - h)² + k"),
        describe,
        Step::new(STATE_RANGE, "Every output lies on one side of the vertex value")
            .expression(format!("Range: {}", d.range)),
        extremum,
    ]
}

fn capitalized(extremum: Extremum) -> &'static str {
    match extremum {
        Extremum::Minimum => "Minimum",
        Extremum::Maximum => "Maximum",
    }
}
