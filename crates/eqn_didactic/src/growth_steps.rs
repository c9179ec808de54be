//! Step skeletons for growth, decay, compound interest and half-life.

use crate::names::*;
use eqn_model::numeric::fmt_num;
use eqn_model::solution::{GrowthDetail, GrowthLaw, HalfLifeDetail, Quantity, Trend};
use eqn_model::{ProblemType, Step};

fn known(d: &GrowthDetail) -> String {
    let mut parts = Vec::new();
    for (q, v) in [
        (Quantity::Principal, d.principal),
        (Quantity::FinalAmount, d.final_amount),
        (Quantity::Rate, d.rate),
        (Quantity::Time, d.time),
    ] {
        if q != d.solved_for {
            parts.push(format!("{} = {}", q.symbol(), fmt_num(v)));
        }
    }
    match d.law {
        GrowthLaw::Periodic { periods_per_unit } if periods_per_unit != 1.0 => {
            parts.push(format!("n = {}", fmt_num(periods_per_unit)));
        }
        GrowthLaw::Continuous => parts.push("compounded continuously".to_string()),
        GrowthLaw::Periodic { .. } => {}
    }
    parts.join(", ")
}

fn substituted(category: ProblemType, d: &GrowthDetail) -> String {
    let show = |q: Quantity, v: f64| {
        if q == d.solved_for {
            q.symbol().to_string()
        } else {
            fmt_num(v)
        }
    };
    let (p, a, r, t) = (
        show(Quantity::Principal, d.principal),
        show(Quantity::FinalAmount, d.final_amount),
        show(Quantity::Rate, d.rate),
        show(Quantity::Time, d.time),
    );
    let sign = match d.trend {
        Trend::Growth => "+",
        Trend::Decay => "-",
    };
    match d.law {
        GrowthLaw::Continuous => {
            let minus = if d.trend == Trend::Decay { "-" } else { "" };
            format!("{} = {}·e^({}{}·{})", a, p, minus, r, t)
        }
        GrowthLaw::Periodic { periods_per_unit: n } if category == ProblemType::CompoundInterest => {
            let n = fmt_num(n);
            format!("{} = {}(1 {} {}/{})^({}·{})", a, p, sign, r, n, n, t)
        }
        GrowthLaw::Periodic { .. } => format!("{} = {}(1 {} {})^{}", a, p, sign, r, t),
    }
}

fn method(d: &GrowthDetail) -> &'static str {
    match (d.solved_for, d.law) {
        (Quantity::FinalAmount, _) => "evaluate the formula",
        (Quantity::Principal, _) => "divide the final amount by the growth factor",
        (Quantity::Time, GrowthLaw::Continuous) => "t = ln(A/P) / r",
        (Quantity::Time, GrowthLaw::Periodic { .. }) => "t = ln(A/P) / (n·ln(1 ± r/n))",
        (Quantity::Rate, GrowthLaw::Continuous) => "r = ln(A/P) / t",
        (Quantity::Rate, GrowthLaw::Periodic { .. }) => "r = n·((A/P)^(1/(nt)) - 1)",
    }
}

pub(crate) fn growth(category: ProblemType, d: &GrowthDetail) -> Vec<Step> {
    let value = match d.solved_for {
        Quantity::Principal => d.principal,
        Quantity::FinalAmount => d.final_amount,
        Quantity::Rate => d.rate,
        Quantity::Time => d.time,
    };
    let (name, description) = match d.solved_for {
        Quantity::FinalAmount => (CALCULATE, "Evaluate the formula".to_string()),
        other => (SOLVE_FOR_UNKNOWN, format!("Solve for the {}", other.label())),
    };
    let substitution = substituted(category, d);

    let mut last = Step::new(name, description)
        .transform(
            substitution.clone(),
            format!("{} = {}", d.solved_for.symbol(), fmt_num(value)),
        )
        .operation(method(d));
    if let Some(interest) = d.interest {
        last = last.reasoning(format!("Interest earned: {}", fmt_num(interest)));
    }
    if let Some(ct) = d.characteristic_time {
        let label = match d.trend {
            Trend::Growth => "Doubling time",
            Trend::Decay => "Half-life",
        };
        last = last.hint(format!("{}: {}", label, fmt_num(ct)));
    }

    vec![
        Step::new(IDENTIFY_GIVEN, "List the known quantities")
            .expression(known(d))
            .reasoning(format!("The unknown is the {}", d.solved_for.label())),
        Step::new(CHOOSE_FORMULA, format!("Use the {} model", d.trend.label()))
            .expression(d.formula.clone())
            .formula(d.formula.clone()),
        Step::new(SUBSTITUTE_VALUES, "Put the known values into the formula")
            .transform(d.formula.clone(), substitution),
        last,
    ]
}

pub(crate) fn half_life(d: &HalfLifeDetail) -> Vec<Step> {
    let h = fmt_num(d.characteristic_time);
    let (label, symbol) = match d.trend {
        Trend::Decay => ("half-life", "h"),
        Trend::Growth => ("doubling time", "d"),
    };
    let mut given = vec![format!("{} {} = {}", label, symbol, h)];
    if let Some(p) = d.initial {
        given.push(format!("A₀ = {}", fmt_num(p)));
    }
    if let Some(t) = d.time {
        given.push(format!("t = {}", fmt_num(t)));
    }

    let mut steps = vec![
        Step::new(IDENTIFY_GIVEN, "List the known quantities").expression(given.join(", ")),
        Step::new(COMPUTE_DECAY_CONSTANT, format!("The rate constant follows from the {}", label))
            .formula(format!("k = ln 2 / {}", symbol))
            .transform(
                format!("k = ln 2 / {}", symbol),
                format!("k = ln 2 / {} = {}", h, fmt_num(d.k)),
            ),
    ];
    if let (Some(p), Some(t), Some(amount)) = (d.initial, d.time, d.amount) {
        let minus = if d.trend == Trend::Decay { "-" } else { "" };
        steps.push(
            Step::new(COMPUTE_REMAINING, format!("Apply the continuous {} law", d.trend.label()))
                .formula(format!("A = A₀·e^({}kt)", minus))
                .transform(
                    format!("A = {}·e^({}{}·{})", fmt_num(p), minus, fmt_num(d.k), fmt_num(t)),
                    format!("A = {}", fmt_num(amount)),
                )
                .reasoning(format!(
                    "t covers {} periods of length {}",
                    fmt_num(t / d.characteristic_time),
                    h
                )),
        );
    }
    steps
}
