//! Step skeletons for exponential and logarithmic equations.

use crate::names::*;
use crate::steps::solutions_text;
use eqn_model::numeric::{fmt_linear, fmt_num, fmt_quadratic, is_zero};
use eqn_model::solution::{
    ExponentialDetail, ExponentialInequalityDetail, ExponentialQuadraticDetail, LogarithmicDetail,
    Trend,
};
use eqn_model::{SolutionSet, Step};

fn power(base: &str, exponent: &str) -> String {
    if exponent == "x" {
        format!("{}^x", base)
    } else {
        format!("{}^({})", base, exponent)
    }
}

/// `k·power`, dropping a unit coefficient.
fn scaled(k: f64, term: &str) -> String {
    if is_zero(k - 1.0) {
        term.to_string()
    } else if is_zero(k + 1.0) {
        format!("-{}", term)
    } else {
        format!("{}·{}", fmt_num(k), term)
    }
}

/// Signed sum of `coefficient·term` pieces, skipping zero coefficients.
fn sum(terms: &[(f64, String)]) -> String {
    let mut out = String::new();
    for (k, term) in terms {
        if is_zero(*k) {
            continue;
        }
        let body = if term.is_empty() {
            fmt_num(k.abs())
        } else {
            scaled(k.abs(), term)
        };
        match (out.is_empty(), *k < 0.0) {
            (true, true) => out.push('-'),
            (true, false) => {}
            (false, true) => out.push_str(" - "),
            (false, false) => out.push_str(" + "),
        }
        out.push_str(&body);
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}

pub(crate) fn simple(d: &ExponentialDetail, set: &SolutionSet) -> Vec<Step> {
    let base = if d.natural { "e".to_string() } else { fmt_num(d.base) };
    let exponent = fmt_linear(d.rate, 0.0, "x");
    let bare = power(&base, &exponent);
    let given = format!("{} = {}", scaled(d.coefficient, &bare), fmt_num(d.result));
    let isolated = format!("{} = {}", bare, fmt_num(d.isolated));
    let answer = solutions_text(set.real_values());

    let mut steps = vec![Step::new(GIVEN_EQUATION, "Start with the exponential equation")
        .expression(given.clone())
        .reasoning("The unknown sits in the exponent, so logarithms will bring it down")];
    if !is_zero(d.coefficient - 1.0) {
        steps.push(
            Step::new(ISOLATE_EXPONENTIAL, format!("Divide both sides by {}", fmt_num(d.coefficient)))
                .transform(given, isolated.clone())
                .operation(format!("÷ {}", fmt_num(d.coefficient))),
        );
    }

    if d.natural {
        let taken = format!("{} = ln({})", exponent, fmt_num(d.isolated));
        steps.push(
            Step::new(TAKE_NATURAL_LOGARITHM, "Take the natural logarithm of both sides")
                .transform(isolated, taken.clone())
                .rule("ln(e^u) = u"),
        );
        steps.push(
            Step::new(SOLVE_FOR_X, format!("Divide by {}", fmt_num(d.rate)))
                .transform(taken, answer)
                .operation(format!("x = ln({}) / {}", fmt_num(d.isolated), fmt_num(d.rate))),
        );
        return steps;
    }

    let logged = format!("ln({}) = ln({})", bare, fmt_num(d.isolated));
    let brought_down = format!("x·ln({}) = ln({})", base, fmt_num(d.isolated));
    steps.push(
        Step::new(TAKE_LOGARITHM, "Apply ln to both sides")
            .transform(isolated, logged.clone())
            .reasoning("Equal positive numbers have equal logarithms"),
    );
    steps.push(
        Step::new(APPLY_LOG_POWER_RULE, "Move the exponent in front of the logarithm")
            .transform(logged, brought_down.clone())
            .rule("ln(aⁿ) = n·ln(a)"),
    );
    steps.push(
        Step::new(SOLVE_FOR_X, format!("Divide both sides by ln({})", base))
            .transform(brought_down, answer)
            .operation(format!("x = ln({}) / ln({})", fmt_num(d.isolated), base)),
    );
    steps
}

pub(crate) fn inequality(d: &ExponentialInequalityDetail, set_label: &str) -> Vec<Step> {
    let base = fmt_num(d.base);
    let bare = power(&base, "x");
    let given = format!("{} {} {}", scaled(d.coefficient, &bare), d.operator.symbol(), fmt_num(d.bound));
    let op = if d.coefficient < 0.0 { d.operator.flip() } else { d.operator };
    let q = d.bound / d.coefficient;
    let isolated = format!("{} {} {}", bare, op.symbol(), fmt_num(q));

    let mut steps = vec![
        Step::new(GIVEN_INEQUALITY, "Start with the exponential inequality")
            .expression(given.clone()),
        Step::new(
            IDENTIFY_BASE_TYPE,
            match d.behavior {
                Trend::Growth => "The base is greater than 1, so the exponential is increasing",
                Trend::Decay => "The base is between 0 and 1, so the exponential is decreasing",
            },
        )
        .expression(format!("ln({}) = {}", base, fmt_num(d.ln_base)))
        .reasoning(if d.reversed {
            "Dividing by the negative number ln(base) will reverse the inequality"
        } else {
            "Dividing by the positive number ln(base) keeps the inequality direction"
        }),
    ];
    if !is_zero(d.coefficient - 1.0) {
        steps.push(
            Step::new(ISOLATE_EXPONENTIAL, format!("Divide both sides by {}", fmt_num(d.coefficient)))
                .transform(given, isolated.clone())
                .reasoning(if d.coefficient < 0.0 {
                    "Dividing by a negative coefficient flips the inequality"
                } else {
                    "Dividing by a positive coefficient keeps the inequality"
                }),
        );
    }

    let Some(critical) = d.critical_value else {
        steps.push(
            Step::new(COMPARE_WITH_RANGE, "An exponential is always positive")
                .transform(isolated, set_label.to_string())
                .reasoning(format!(
                    "{} > 0 for every x, and {} is not positive",
                    bare,
                    fmt_num(q)
                )),
        );
        return steps;
    };

    let logged = format!("ln({}) {} ln({})", bare, op.symbol(), fmt_num(q));
    let brought_down = format!("x·ln({}) {} ln({})", base, op.symbol(), fmt_num(q));
    steps.push(
        Step::new(TAKE_LOGARITHM, "Apply ln to both sides")
            .transform(isolated, logged.clone())
            .reasoning("ln is increasing, so it preserves the inequality"),
    );
    steps.push(
        Step::new(APPLY_POWER_RULE, "Bring the exponent down")
            .transform(logged, brought_down.clone())
            .rule("ln(aⁿ) = n·ln(a)"),
    );
    steps.push(
        Step::new(SOLVE_FOR_X, format!("Divide both sides by ln({}) = {}", base, fmt_num(d.ln_base)))
            .transform(
                brought_down,
                format!("x {} {}", d.isolated_operator.symbol(), fmt_num(critical)),
            )
            .reasoning(if d.reversed {
                "ln(base) is negative, so the inequality sign reverses"
            } else {
                "ln(base) is positive, so the inequality sign stays"
            })
            .hint(format!("Solution set: {}", set_label)),
    );
    steps
}

pub(crate) fn quadratic_form(d: &ExponentialQuadraticDetail, set: &SolutionSet) -> Vec<Step> {
    let base = fmt_num(d.base);
    let u = power(&base, "x");
    let u2 = power(&base, "2x");
    let given = format!(
        "{} = 0",
        sum(&[(d.a, u2), (d.b, u.clone()), (d.c, String::new())])
    );
    let in_u = format!("{} = 0", fmt_quadratic(d.a, d.b, d.c, "u"));
    let u_text = |values: &[f64]| {
        values
            .iter()
            .map(|v| format!("u = {}", fmt_num(*v)))
            .collect::<Vec<_>>()
            .join(" or ")
    };

    let mut steps = vec![
        Step::new(GIVEN_EQUATION, "Start with the equation of quadratic type")
            .expression(given.clone())
            .reasoning(format!("{} is the square of {}", power(&base, "2x"), u)),
        Step::new(MAKE_SUBSTITUTION, format!("Let u = {}", u))
            .transform(given, in_u.clone())
            .rule("b^(2x) = (b^x)²"),
    ];

    if d.u_roots.is_empty() {
        steps.push(
            Step::new(SOLVE_QUADRATIC_EQUATION, "Solve the quadratic in u")
                .transform(in_u, "no real solutions")
                .operation(format!("Δ = {}", fmt_num(d.discriminant))),
        );
        return steps;
    }
    steps.push(
        Step::new(SOLVE_QUADRATIC_EQUATION, "Solve the quadratic in u")
            .transform(in_u, u_text(&d.u_roots))
            .operation(format!("Δ = {}", fmt_num(d.discriminant))),
    );

    let kept: Vec<f64> = d
        .u_roots
        .iter()
        .copied()
        .filter(|v| !d.rejected.contains(v))
        .collect();
    if !d.rejected.is_empty() {
        steps.push(
            Step::new(REJECT_INVALID, format!("{} is always positive", u))
                .transform(
                    u_text(&d.u_roots),
                    if kept.is_empty() {
                        "no valid solutions".to_string()
                    } else {
                        u_text(&kept)
                    },
                )
                .reasoning(format!("Discard {}", u_text(&d.rejected))),
        );
    }
    if kept.is_empty() {
        return steps;
    }

    let back = kept
        .iter()
        .map(|v| format!("{} = {}", u, fmt_num(*v)))
        .collect::<Vec<_>>()
        .join(" or ");
    steps.push(
        Step::new(BACK_SUBSTITUTE, format!("Replace u with {}", u))
            .transform(u_text(&kept), back.clone()),
    );
    steps.push(
        Step::new(SOLVE_EXPONENTIAL_EQUATIONS, "Solve each exponential equation with logarithms")
            .transform(back, solutions_text(set.real_values()))
            .formula(format!("x = ln(u) / ln({})", base)),
    );
    steps
}

pub(crate) fn logarithmic(d: &LogarithmicDetail, set: &SolutionSet) -> Vec<Step> {
    let base = if d.natural { "e".to_string() } else { fmt_num(d.base) };
    let given = if d.natural {
        format!("ln(x) = {}", fmt_num(d.result))
    } else if is_zero(d.base - 10.0) {
        format!("log(x) = {}", fmt_num(d.result))
    } else {
        format!("log_{}(x) = {}", base, fmt_num(d.result))
    };
    let exponential = format!("x = {}^{}", base, fmt_num(d.result));
    vec![
        Step::new(GIVEN_EQUATION, "Start with the logarithmic equation")
            .expression(given.clone())
            .reasoning("The argument of a logarithm must be positive"),
        Step::new(CONVERT_TO_EXPONENTIAL, "Rewrite the logarithm as an exponent")
            .transform(given, exponential.clone())
            .rule("log_b(x) = y ⇔ x = b^y"),
        Step::new(EVALUATE, "Evaluate the power")
            .transform(exponential, solutions_text(set.real_values())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_sum_of_powers() {
        let text = sum(&[
            (1.0, "2^(2x)".to_string()),
            (-6.0, "2^x".to_string()),
            (8.0, String::new()),
        ]);
        assert_eq!(text, "2^(2x) - 6·2^x + 8");
    }

    #[test]
    fn scaled_drops_unit() {
        assert_eq!(scaled(1.0, "e^x"), "e^x");
        assert_eq!(scaled(3.0, "2^x"), "3·2^x");
        assert_eq!(scaled(-1.0, "2^x"), "-2^x");
    }
}
