//! Integer factoring of monic quadratics, with formula fallback.

use crate::params::quadratic_coefficients;
use crate::quadratic_formula::{self, quadratic_detail, quadratic_roots};
use eqn_model::numeric::{fmt_binomial, fmt_num, is_integral};
use eqn_model::solution::FactoringDetail;
use eqn_model::{Params, ProblemType, Solution, SolutionDetail, SolutionSet, SolveError};
use num_integer::Integer;

/// Largest constant term searched for factor pairs.
const MAX_SEARCH: i64 = 1_000_000;

/// Coefficients beyond this magnitude skip the integer search entirely.
const MAX_INTEGER_COEFFICIENT: f64 = 1e12;

pub const FALLBACK_NOTE: &str = "Could not factor with integers, used quadratic formula instead";

/// Find `(p, q)` with `p·q = c` and `p + q = b`, `p <= q`.
pub fn find_factor_pair(b: i64, c: i64) -> Option<(i64, i64)> {
    if c == 0 {
        return Some((0.min(b), 0.max(b)));
    }
    let n = c.checked_abs()?;
    if n > MAX_SEARCH {
        return None;
    }
    let mut i = 1i64;
    while i * i <= n {
        if n % i == 0 {
            for p in [i, -i] {
                let q = c.checked_div(p)?;
                if p.checked_add(q) == Some(b) {
                    return Some((p.min(q), p.max(q)));
                }
            }
        }
        i += 1;
    }
    None
}

/// Common integer factor equal to the leading coefficient, if any.
fn leading_common_factor(a: i64, b: i64, c: i64) -> Option<i64> {
    let g = a.gcd(&b).gcd(&c);
    (g == a.abs() && a != 1).then_some(a)
}

fn factored_form(common: Option<f64>, p: f64, q: f64) -> String {
    let body = if p == q {
        format!("({})²", fmt_binomial("x", p))
    } else {
        format!("({})({})", fmt_binomial("x", p), fmt_binomial("x", q))
    };
    match common {
        Some(k) if k == -1.0 => format!("-{}", body),
        Some(k) => format!("{}{}", fmt_num(k), body),
        None => body,
    }
}

pub fn solve(params: &Params) -> Result<Solution, SolveError> {
    let category = ProblemType::FactoringQuadratic;
    let (a, b, c) = quadratic_coefficients(params, category)?;
    let (delta, roots) = quadratic_roots(a, b, c)?;
    let quadratic = quadratic_detail(a, b, c, delta, roots.nature());

    let searchable = [a, b, c]
        .iter()
        .all(|v| is_integral(*v) && v.abs() <= MAX_INTEGER_COEFFICIENT);
    let attempt = searchable.then(|| {
        let (ai, bi, ci) = (a.round() as i64, b.round() as i64, c.round() as i64);
        let common = leading_common_factor(ai, bi, ci);
        let k = common.unwrap_or(1);
        if k != ai {
            return None;
        }
        find_factor_pair(bi.checked_div(k)?, ci.checked_div(k)?).map(|pair| (common, pair))
    });

    match attempt.flatten() {
        Some((common, (p, q))) => {
            let (p, q) = (p as f64, q as f64);
            let common = common.map(|k| k as f64);
            let mut values = vec![-q, -p];
            values.dedup();
            tracing::debug!(p, q, ?common, "factored quadratic");
            Ok(Solution {
                category,
                solution_type: quadratic.nature.label().to_string(),
                set: SolutionSet::Discrete { values },
                fallback: false,
                notes: Vec::new(),
                detail: SolutionDetail::Factoring(FactoringDetail {
                    common_factor: common,
                    pair: Some((p, q)),
                    factored_form: Some(factored_form(common, p, q)),
                    quadratic,
                }),
            })
        }
        None => {
            tracing::debug!(a, b, c, "integer factoring failed, falling back to formula");
            let mut solution = quadratic_formula::solve_coefficients(category, a, b, c)?;
            solution.fallback = true;
            solution.notes.push(FALLBACK_NOTE.to_string());
            solution.detail = SolutionDetail::Factoring(FactoringDetail {
                common_factor: None,
                pair: None,
                factored_form: None,
                quadratic,
            });
            Ok(solution)
        }
    }
}
