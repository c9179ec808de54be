//! Numeric tolerances and the single display convention for numbers.

/// Values with smaller magnitude are treated as zero by the solvers.
pub const TOLERANCE: f64 = 1e-10;

/// Substitution checks accept residuals below this bound.
pub const VERIFY_TOLERANCE: f64 = 1e-9;

/// Decimal places kept when a number is shown to the learner.
pub const DISPLAY_PRECISION: usize = 6;

pub fn is_zero(value: f64) -> bool {
    value.abs() < TOLERANCE
}

/// True when `value` is an integer up to [`TOLERANCE`].
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && is_zero(value - value.round())
}

/// Parse coefficient text.
///
/// Empty text or a lone `+` is 1, a lone `-` is -1, `a/b` is a fraction
/// (zero denominator gives 0) and anything unparseable is 0.
pub fn parse_coefficient(text: &str) -> f64 {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    match compact.as_str() {
        "" | "+" => return 1.0,
        "-" => return -1.0,
        _ => {}
    }
    if let Some((num, den)) = compact.split_once('/') {
        let numerator = parse_coefficient(num);
        let denominator: f64 = den.parse().unwrap_or(0.0);
        if denominator == 0.0 {
            return 0.0;
        }
        return numerator / denominator;
    }
    let literal = compact.strip_prefix('+').unwrap_or(&compact);
    literal.parse().unwrap_or(0.0)
}

/// Render a number with [`DISPLAY_PRECISION`] decimals, trailing zeros trimmed.
///
/// `-0` renders as `0`, infinities as `∞`/`-∞`.
pub fn fmt_num(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    let text = format!("{:.*}", DISPLAY_PRECISION, value);
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    };
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}

/// Render `Σ coeff·monomial`, skipping zero terms and unit coefficients.
///
/// `terms` pairs a coefficient with its monomial text (`"x²"`, `"x"`, `""`).
pub fn fmt_terms(terms: &[(f64, &str)]) -> String {
    let mut out = String::new();
    for &(coeff, monomial) in terms {
        if is_zero(coeff) {
            continue;
        }
        let magnitude = coeff.abs();
        let body = if monomial.is_empty() {
            fmt_num(magnitude)
        } else if is_zero(magnitude - 1.0) {
            monomial.to_string()
        } else {
            format!("{}{}", fmt_num(magnitude), monomial)
        };
        if out.is_empty() {
            if coeff < 0.0 {
                out.push('-');
            }
        } else if coeff < 0.0 {
            out.push_str(" - ");
        } else {
            out.push_str(" + ");
        }
        out.push_str(&body);
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}

/// `ax² + bx + c` in the variable `var`.
pub fn fmt_quadratic(a: f64, b: f64, c: f64, var: &str) -> String {
    let square = format!("{}²", var);
    fmt_terms(&[(a, square.as_str()), (b, var), (c, "")])
}

/// `mx + b` in the variable `var`.
pub fn fmt_linear(m: f64, b: f64, var: &str) -> String {
    fmt_terms(&[(m, var), (b, "")])
}

/// `x + p` style binomial factor, printing `x` alone for `p = 0`.
pub fn fmt_binomial(var: &str, shift: f64) -> String {
    if is_zero(shift) {
        var.to_string()
    } else if shift < 0.0 {
        format!("{} - {}", var, fmt_num(-shift))
    } else {
        format!("{} + {}", var, fmt_num(shift))
    }
}

/// A number wrapped in parentheses when negative, for substitutions.
pub fn fmt_paren(value: f64) -> String {
    if value < 0.0 && !is_zero(value) {
        format!("({})", fmt_num(value))
    } else {
        fmt_num(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_num_trims_and_rounds() {
        assert_eq!(fmt_num(2.0), "2");
        assert_eq!(fmt_num(-2.5), "-2.5");
        assert_eq!(fmt_num(1.0 / 3.0), "0.333333");
        assert_eq!(fmt_num(-1e-12), "0");
        assert_eq!(fmt_num(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn quadratic_rendering_skips_units_and_zeros() {
        assert_eq!(fmt_quadratic(1.0, -5.0, 6.0, "x"), "x² - 5x + 6");
        assert_eq!(fmt_quadratic(-2.0, 0.0, 1.5, "x"), "-2x² + 1.5");
        assert_eq!(fmt_quadratic(0.0, 0.0, 0.0, "x"), "0");
    }

    #[test]
    fn binomial_and_paren() {
        assert_eq!(fmt_binomial("x", -3.0), "x - 3");
        assert_eq!(fmt_binomial("x", 2.0), "x + 2");
        assert_eq!(fmt_binomial("x", 0.0), "x");
        assert_eq!(fmt_paren(-4.0), "(-4)");
        assert_eq!(fmt_paren(4.0), "4");
    }

    #[test]
    fn implicit_unit_coefficients() {
        assert_eq!(parse_coefficient(""), 1.0);
        assert_eq!(parse_coefficient("+"), 1.0);
        assert_eq!(parse_coefficient("-"), -1.0);
        assert_eq!(parse_coefficient(" - "), -1.0);
    }

    #[test]
    fn coefficient_literals_and_signs() {
        assert_eq!(parse_coefficient("3"), 3.0);
        assert_eq!(parse_coefficient("- 5"), -5.0);
        assert_eq!(parse_coefficient("+ 2.5"), 2.5);
        assert_eq!(parse_coefficient(".5"), 0.5);
    }

    #[test]
    fn coefficient_fractions() {
        assert_eq!(parse_coefficient("1/2"), 0.5);
        assert_eq!(parse_coefficient("-3/4"), -0.75);
        assert_eq!(parse_coefficient("3/0"), 0.0);
    }

    #[test]
    fn garbage_coefficient_is_zero() {
        assert_eq!(parse_coefficient("abc"), 0.0);
        assert_eq!(parse_coefficient("2..3"), 0.0);
    }

    #[test]
    fn integral_detection() {
        assert!(is_integral(6.0));
        assert!(is_integral(-3.0 + 1e-12));
        assert!(!is_integral(2.5));
        assert!(!is_integral(f64::INFINITY));
    }
}
