//! Exponential and logarithmic isolation.

use crate::inequality::{describe, isolated_var_solution};
use crate::params::{base, checked_ln_base, operator, require};
use crate::quadratic_formula::quadratic_roots;
use eqn_model::numeric::{fmt_num, is_zero};
use eqn_model::solution::{
    ExponentialDetail, ExponentialInequalityDetail, ExponentialQuadraticDetail,
    LogarithmicDetail, Trend,
};
use eqn_model::{
    Params, ProblemType, RelOp, Solution, SolutionDetail, SolutionSet, SolveError, TOLERANCE,
};

fn single(x: f64) -> SolutionSet {
    SolutionSet::Discrete { values: vec![x] }
}

fn leading(params: &Params, key: &str) -> Result<f64, SolveError> {
    let k = params.number_or(key, 1.0);
    if k.abs() < TOLERANCE {
        return Err(SolveError::InvalidLeadingCoefficient { a: k });
    }
    Ok(k)
}

/// `k · base^x = result`.
pub fn solve_simple(params: &Params) -> Result<Solution, SolveError> {
    let category = ProblemType::SimpleExponential;
    let k = leading(params, "coefficient")?;
    let b = base(params, "base", None).ok_or_else(|| SolveError::InsufficientParameters {
        problem_type: category.name(),
        needed: "missing parameter 'base'".to_string(),
    })?;
    let result = require(params, "result", category)?;
    let ln_base = checked_ln_base(b)?;
    let isolated = result / k;
    if isolated <= 0.0 {
        return Err(SolveError::NoSolution(format!(
            "{}^x is always positive and cannot equal {}",
            fmt_num(b),
            fmt_num(isolated)
        )));
    }
    let x = isolated.ln() / ln_base;
    Ok(Solution {
        category,
        solution_type: "One real solution".to_string(),
        set: single(x),
        fallback: false,
        notes: Vec::new(),
        detail: SolutionDetail::Exponential(ExponentialDetail {
            coefficient: k,
            base: b,
            rate: 1.0,
            result,
            isolated,
            natural: false,
        }),
    })
}

/// `k · e^(r x) = result`.
pub fn solve_natural(params: &Params) -> Result<Solution, SolveError> {
    let category = ProblemType::NaturalExponential;
    let k = leading(params, "coefficient")?;
    let rate = params.number_or("rate", 1.0);
    let result = require(params, "result", category)?;
    if is_zero(rate) {
        return Err(SolveError::NoSolution(
            "the exponent does not depend on x".to_string(),
        ));
    }
    let isolated = result / k;
    if isolated <= 0.0 {
        return Err(SolveError::NoSolution(format!(
            "e^({}x) is always positive and cannot equal {}",
            fmt_num(rate),
            fmt_num(isolated)
        )));
    }
    let x = isolated.ln() / rate;
    Ok(Solution {
        category,
        solution_type: "One real solution".to_string(),
        set: single(x),
        fallback: false,
        notes: Vec::new(),
        detail: SolutionDetail::Exponential(ExponentialDetail {
            coefficient: k,
            base: std::f64::consts::E,
            rate,
            result,
            isolated,
            natural: true,
        }),
    })
}

/// `k · base^x op bound`.
///
/// The direction of the inequality after taking logarithms follows the sign
/// of `ln(base)`; the growth/decay label is derived from the same sign.
pub fn solve_inequality(params: &Params) -> Result<Solution, SolveError> {
    let category = ProblemType::ExponentialInequality;
    let k = leading(params, "coefficient")?;
    let b = base(params, "base", None).ok_or_else(|| SolveError::InsufficientParameters {
        problem_type: category.name(),
        needed: "missing parameter 'base'".to_string(),
    })?;
    let bound = require(params, "bound", category)?;
    let op = operator(params, category)?;
    let ln_base = checked_ln_base(b)?;

    let isolated_bound = bound / k;
    // dividing by a negative coefficient flips the relation
    let op_after_division = if k < 0.0 { op.flip() } else { op };
    let behavior = if ln_base > 0.0 { Trend::Growth } else { Trend::Decay };
    let reversed = ln_base < 0.0;

    let (set, isolated_operator, critical_value) = if isolated_bound <= 0.0 {
        // base^x > 0 everywhere
        let always = matches!(op_after_division, RelOp::Gt | RelOp::Geq | RelOp::Neq);
        let set = if always {
            SolutionSet::AllReals
        } else {
            SolutionSet::Empty
        };
        (set, op_after_division, None)
    } else {
        let critical = isolated_bound.ln() / ln_base;
        let isolated = if reversed {
            op_after_division.flip()
        } else {
            op_after_division
        };
        (isolated_var_solution(critical, isolated), isolated, Some(critical))
    };
    tracing::debug!(base = b, ?behavior, reversed, ?critical_value, "exponential inequality");

    Ok(Solution {
        category,
        solution_type: describe(&set),
        set,
        fallback: false,
        notes: Vec::new(),
        detail: SolutionDetail::ExponentialInequality(ExponentialInequalityDetail {
            coefficient: k,
            base: b,
            bound,
            operator: op,
            isolated_operator,
            ln_base,
            critical_value,
            behavior,
            reversed,
        }),
    })
}

/// `a · base^(2x) + b · base^x + c = 0` through `u = base^x`.
pub fn solve_quadratic_form(params: &Params) -> Result<Solution, SolveError> {
    let category = ProblemType::ExponentialQuadratic;
    let a = params.number_or("a", 1.0);
    let bq = params.number_or("b", 0.0);
    let c = params.number_or("c", 0.0);
    let b = base(params, "base", None).ok_or_else(|| SolveError::InsufficientParameters {
        problem_type: category.name(),
        needed: "missing parameter 'base'".to_string(),
    })?;
    let ln_base = checked_ln_base(b)?;
    let (delta, roots) = quadratic_roots(a, bq, c)?;
    let u_roots = roots.real();

    let (kept, rejected): (Vec<f64>, Vec<f64>) =
        u_roots.iter().copied().partition(|u| *u > TOLERANCE);
    let mut values: Vec<f64> = kept.iter().map(|u| u.ln() / ln_base).collect();
    values.sort_by(|x, y| x.total_cmp(y));
    values.dedup();

    let mut notes = Vec::new();
    if !rejected.is_empty() {
        notes.push(format!(
            "Rejected u = {} because {}^x is always positive",
            rejected.iter().map(|u| fmt_num(*u)).collect::<Vec<_>>().join(", "),
            fmt_num(b)
        ));
    }

    let (solution_type, set) = if u_roots.is_empty() {
        ("No real solutions".to_string(), SolutionSet::Empty)
    } else if values.is_empty() {
        ("No valid solutions".to_string(), SolutionSet::Empty)
    } else if values.len() == 1 {
        ("One real solution".to_string(), SolutionSet::Discrete { values })
    } else {
        ("Two real solutions".to_string(), SolutionSet::Discrete { values })
    };

    Ok(Solution {
        category,
        solution_type,
        set,
        fallback: false,
        notes,
        detail: SolutionDetail::ExponentialQuadratic(ExponentialQuadraticDetail {
            a,
            b: bq,
            c,
            base: b,
            discriminant: delta,
            u_roots,
            rejected,
        }),
    })
}

/// `log_base(x) = result`.
pub fn solve_logarithmic(params: &Params) -> Result<Solution, SolveError> {
    let category = ProblemType::LogarithmicEquation;
    let natural = params.text("base").is_some_and(|t| t.trim() == "e");
    let b = base(params, "base", Some(10.0)).unwrap_or(10.0);
    checked_ln_base(b)?;
    let result = require(params, "result", category)?;
    let x = b.powf(result);
    Ok(Solution {
        category,
        solution_type: "One real solution".to_string(),
        set: single(x),
        fallback: false,
        notes: Vec::new(),
        detail: SolutionDetail::Logarithmic(LogarithmicDetail {
            base: b,
            result,
            natural,
        }),
    })
}
