//! Growth, decay, compound interest and half-life models.
//!
//! All models share `A = P · F(r, t)`; given three of `P, A, r, t` the fourth
//! is recovered by division, logarithm or root.

use eqn_model::numeric::{fmt_num, is_zero};
use eqn_model::solution::{GrowthDetail, GrowthLaw, HalfLifeDetail, Quantity, Trend};
use eqn_model::{Params, ProblemType, Solution, SolutionDetail, SolutionSet, SolveError};
use std::f64::consts::LN_2;

/// Default compounding frequency when none is given.
pub const DEFAULT_PERIODS: f64 = 12.0;

fn sign(trend: Trend) -> f64 {
    match trend {
        Trend::Growth => 1.0,
        Trend::Decay => -1.0,
    }
}

/// Multiplier `F(r, t)` applied to the principal.
pub fn factor(law: GrowthLaw, trend: Trend, rate: f64, time: f64) -> f64 {
    let s = sign(trend);
    match law {
        GrowthLaw::Periodic { periods_per_unit: n } => (1.0 + s * rate / n).powf(n * time),
        GrowthLaw::Continuous => (s * rate * time).exp(),
    }
}

fn no_change() -> SolveError {
    SolveError::NoSolution("a zero rate never changes the amount".to_string())
}

fn ratio_error(ratio: f64) -> SolveError {
    SolveError::NoSolution(format!(
        "final amount and initial amount must both be positive (ratio {})",
        fmt_num(ratio)
    ))
}

/// Time for the amount to be multiplied by `ratio`.
pub fn solve_time(law: GrowthLaw, trend: Trend, ratio: f64, rate: f64) -> Result<f64, SolveError> {
    if ratio <= 0.0 {
        return Err(ratio_error(ratio));
    }
    let s = sign(trend);
    let per_unit = match law {
        GrowthLaw::Periodic { periods_per_unit: n } => {
            let step = 1.0 + s * rate / n;
            if step <= 0.0 {
                return Err(SolveError::NoSolution(format!(
                    "a decay rate of {} removes everything in one period",
                    fmt_num(rate)
                )));
            }
            n * step.ln()
        }
        GrowthLaw::Continuous => s * rate,
    };
    if is_zero(per_unit) {
        return Err(no_change());
    }
    Ok(ratio.ln() / per_unit)
}

/// Rate that multiplies the amount by `ratio` over `time`.
pub fn solve_rate(law: GrowthLaw, trend: Trend, ratio: f64, time: f64) -> Result<f64, SolveError> {
    if ratio <= 0.0 {
        return Err(ratio_error(ratio));
    }
    if is_zero(time) {
        return Err(SolveError::NoSolution(
            "no rate changes the amount in zero time".to_string(),
        ));
    }
    let s = sign(trend);
    Ok(match law {
        GrowthLaw::Periodic { periods_per_unit: n } => s * n * (ratio.powf(1.0 / (n * time)) - 1.0),
        GrowthLaw::Continuous => ratio.ln() / (s * time),
    })
}

pub fn formula(category: ProblemType, law: GrowthLaw, trend: Trend) -> String {
    match (category, law, trend) {
        (ProblemType::CompoundInterest, GrowthLaw::Periodic { .. }, _) => "A = P(1 + r/n)^(nt)",
        (_, GrowthLaw::Continuous, Trend::Growth) => "A = Pe^(rt)",
        (_, GrowthLaw::Continuous, Trend::Decay) => "A = Pe^(-rt)",
        (_, GrowthLaw::Periodic { .. }, Trend::Growth) => "A = P(1 + r)^t",
        (_, GrowthLaw::Periodic { .. }, Trend::Decay) => "A = P(1 - r)^t",
    }
    .to_string()
}

fn law_for(category: ProblemType, params: &Params) -> GrowthLaw {
    let continuous = |key: &str| {
        params
            .text(key)
            .is_some_and(|t| t.trim().to_ascii_lowercase().starts_with("continuous"))
    };
    match category {
        ProblemType::CompoundInterest if continuous("compounding") => GrowthLaw::Continuous,
        ProblemType::CompoundInterest => GrowthLaw::Periodic {
            periods_per_unit: params
                .number("frequency")
                .filter(|n| *n > 0.0)
                .unwrap_or(DEFAULT_PERIODS),
        },
        _ if continuous("model") => GrowthLaw::Continuous,
        _ => GrowthLaw::Periodic {
            periods_per_unit: 1.0,
        },
    }
}

fn first_number(params: &Params, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|k| params.number(k))
}

/// Compound interest, exponential growth and exponential decay.
pub fn solve(category: ProblemType, params: &Params) -> Result<Solution, SolveError> {
    let trend = match category {
        ProblemType::ExponentialDecay => Trend::Decay,
        _ => Trend::Growth,
    };
    let law = law_for(category, params);
    let principal = first_number(params, &["principal", "initial"]);
    let final_amount = first_number(params, &["final_amount", "final"]);
    let rate = params.number("rate");
    let time = params.number("time");

    let known = [principal, final_amount, rate, time]
        .iter()
        .filter(|v| v.is_some())
        .count();
    if known < 3 {
        return Err(SolveError::InsufficientParameters {
            problem_type: category.name(),
            needed: "three of principal, final_amount, rate, time".to_string(),
        });
    }

    let (solved_for, p, a, r, t) = match (principal, final_amount, rate, time) {
        (Some(p), Some(a), Some(r), None) => {
            (Quantity::Time, p, a, r, solve_time(law, trend, a / p, r)?)
        }
        (Some(p), Some(a), None, Some(t)) => {
            (Quantity::Rate, p, a, solve_rate(law, trend, a / p, t)?, t)
        }
        (None, Some(a), Some(r), Some(t)) => {
            let f = factor(law, trend, r, t);
            if is_zero(f) {
                return Err(no_change());
            }
            (Quantity::Principal, a / f, a, r, t)
        }
        (Some(p), _, Some(r), Some(t)) => {
            (Quantity::FinalAmount, p, p * factor(law, trend, r, t), r, t)
        }
        _ => {
            return Err(SolveError::InsufficientParameters {
                problem_type: category.name(),
                needed: "three of principal, final_amount, rate, time".to_string(),
            })
        }
    };
    if p <= 0.0 {
        return Err(ratio_error(a / p));
    }

    let characteristic_ratio = match trend {
        Trend::Growth => 2.0,
        Trend::Decay => 0.5,
    };
    let characteristic_time = solve_time(law, trend, characteristic_ratio, r).ok();
    let interest = (category == ProblemType::CompoundInterest).then_some(a - p);
    let value = match solved_for {
        Quantity::Principal => p,
        Quantity::FinalAmount => a,
        Quantity::Rate => r,
        Quantity::Time => t,
    };
    tracing::debug!(?solved_for, value, ?law, "growth model");

    Ok(Solution {
        category,
        solution_type: format!("Solved for {}", solved_for.label()),
        set: SolutionSet::Quantity {
            name: solved_for.symbol().to_string(),
            value,
        },
        fallback: false,
        notes: Vec::new(),
        detail: SolutionDetail::Growth(GrowthDetail {
            law,
            trend,
            principal: p,
            final_amount: a,
            rate: r,
            time: t,
            solved_for,
            factor: a / p,
            formula: formula(category, law, trend),
            interest,
            characteristic_time,
        }),
    })
}

/// Half-life or doubling time, with the amount after `time` when known.
pub fn solve_half_life(params: &Params) -> Result<Solution, SolveError> {
    let category = ProblemType::HalfLife;
    let (trend, h) = match (params.number("half_life"), params.number("doubling_time")) {
        (Some(h), _) => (Trend::Decay, h),
        (None, Some(d)) => (Trend::Growth, d),
        (None, None) => {
            return Err(SolveError::InsufficientParameters {
                problem_type: category.name(),
                needed: "half_life or doubling_time".to_string(),
            })
        }
    };
    if h <= 0.0 {
        return Err(SolveError::NoSolution(format!(
            "characteristic time must be positive (got {})",
            fmt_num(h)
        )));
    }
    let k = LN_2 / h;
    let initial = params.number("initial");
    let time = params.number("time");
    let amount = match (initial, time) {
        (Some(p), Some(t)) => Some(p * (sign(trend) * k * t).exp()),
        _ => None,
    };
    let set = match amount {
        Some(value) => SolutionSet::Quantity {
            name: "A".to_string(),
            value,
        },
        None => SolutionSet::Quantity {
            name: "k".to_string(),
            value: k,
        },
    };
    let solution_type = match amount {
        Some(_) => format!("Amount after {} time units", fmt_num(time.unwrap_or_default())),
        None => "Rate constant".to_string(),
    };

    Ok(Solution {
        category,
        solution_type,
        set,
        fallback: false,
        notes: Vec::new(),
        detail: SolutionDetail::HalfLife(HalfLifeDetail {
            trend,
            characteristic_time: h,
            k,
            initial,
            time,
            amount,
        }),
    })
}
