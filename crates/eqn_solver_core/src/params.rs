//! Typed access to a problem's parameter record.

use eqn_model::{is_zero, Params, ProblemType, RelOp, SolveError};

pub(crate) fn require(params: &Params, key: &str, problem_type: ProblemType) -> Result<f64, SolveError> {
    params
        .number(key)
        .ok_or_else(|| SolveError::InsufficientParameters {
            problem_type: problem_type.name(),
            needed: format!("missing parameter '{}'", key),
        })
}

/// `(a, b, c)` with `a` defaulting to 1 and `b`, `c` to 0.
///
/// At least one coefficient must be present.
pub(crate) fn quadratic_coefficients(
    params: &Params,
    problem_type: ProblemType,
) -> Result<(f64, f64, f64), SolveError> {
    if !["a", "b", "c"].iter().any(|k| params.number(k).is_some()) {
        return Err(SolveError::InsufficientParameters {
            problem_type: problem_type.name(),
            needed: "coefficients a, b, c".to_string(),
        });
    }
    Ok((
        params.number_or("a", 1.0),
        params.number_or("b", 0.0),
        params.number_or("c", 0.0),
    ))
}

pub(crate) fn operator(params: &Params, problem_type: ProblemType) -> Result<RelOp, SolveError> {
    params
        .text("operator")
        .and_then(RelOp::parse)
        .ok_or_else(|| SolveError::InsufficientParameters {
            problem_type: problem_type.name(),
            needed: "comparison operator".to_string(),
        })
}

/// Base as a number; the text `e` stands for Euler's number.
pub(crate) fn base(params: &Params, key: &str, default: Option<f64>) -> Option<f64> {
    match params.text(key).map(str::trim) {
        Some("e") => Some(std::f64::consts::E),
        _ => params.number(key).or(default),
    }
}

/// `ln(base)`, rejecting bases that are non-positive or (numerically) one.
pub(crate) fn checked_ln_base(base: f64) -> Result<f64, SolveError> {
    if !base.is_finite() || base <= 0.0 {
        return Err(SolveError::InvalidBase { base });
    }
    let ln = base.ln();
    if is_zero(ln) {
        return Err(SolveError::InvalidBase { base });
    }
    Ok(ln)
}
