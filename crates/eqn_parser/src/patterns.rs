//! Pattern library: recognition patterns per problem type and the capture
//! patterns used to pull parameters out of recognized text.
//!
//! All patterns are compiled once and shared process-wide.

use eqn_model::numeric::{is_zero, parse_coefficient};
use eqn_model::ProblemType;
use regex::Regex;
use std::sync::LazyLock;

/// Unsigned numeric literal.
const NUM: &str = r"(?:\d+(?:\.\d+)?|\.\d+)";

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex literal")
}

/// Optional-sign coefficient that may be empty (`""`, `"-"`, `"3"`, `"1/2"`).
fn coef() -> String {
    format!(r"[+-]?\s*{NUM}?(?:/\d+)?")
}

/// Signed literal that must contain digits.
fn signed() -> String {
    format!(r"[+-]?\s*{NUM}(?:/\d+)?")
}

/// Base of an exponential: a literal or Euler's `e`.
fn base() -> String {
    format!(r"(?:{NUM}|e)")
}

/// Recognition patterns of one problem type, tested in order.
pub struct TypePatterns {
    pub problem_type: ProblemType,
    pub recognizers: Vec<Regex>,
}

fn recognizers_for(problem_type: ProblemType) -> Vec<Regex> {
    let list: &[&str] = match problem_type {
        ProblemType::ExponentialInequality => &[
            r"(?:\d|\be)\s*\^\s*\(?\s*x\s*\)?\s*(?:<=|>=|<|>)",
            r"(?i)exponential\s+inequalit",
        ],
        ProblemType::ExponentialQuadratic => &[
            r"\^\s*\(\s*2\s*\*?\s*x\s*\)\s*[+-][^=<>]*\^\s*\(?\s*x",
            r"(?i)exponential.*quadratic|quadratic.*exponential",
            r"(?i)quadratic\s+form",
        ],
        ProblemType::QuadraticInequality => &[
            r"x\s*\^\s*2[^=<>!]*(?:<=|>=|!=|<|>)",
            r"(?i)quadratic\s+inequalit",
        ],
        ProblemType::ProjectileMotion => &[
            r"(?i)\bprojectile\b",
            r"(?i)\b(?:thrown|launched|tossed|fired|kicked)\b",
            r"(?i)\btrajector(?:y|ies)\b",
            r"(?i)initial\s+(?:upward\s+)?velocity",
            r"\bh\s*\(\s*t\s*\)\s*=",
        ],
        ProblemType::QuadraticOptimization => &[
            r"(?i)\b(?:maximi[sz]e|minimi[sz]e|optimi[sz]e)\b",
            r"(?i)\b(?:maximum|minimum)\s+(?:value|point)\b",
            r"(?i)\b(?:find|locate)\s+(?:the\s+)?vertex\b|\bvertex\s+of\b",
            r"(?i)\bparabola\b",
            r"(?i)analy[sz]e\s+(?:the\s+)?(?:quadratic\s+)?function",
            r"(?:\b[fgp]\s*\(\s*x\s*\)|\by)\s*=\s*[^=<>]*x\s*\^\s*2",
        ],
        ProblemType::FactoringQuadratic => &[r"(?i)\bfactor(?:ing|ise|ize)?\b"],
        ProblemType::CompletingSquare => &[
            r"(?i)complet(?:e|ing)\s+(?:the\s+)?square",
            r"(?i)vertex\s+form",
        ],
        ProblemType::QuadraticFormula => &[r"(?i)quadratic\s+formula"],
        ProblemType::StandardQuadratic => &[
            r"x\s*\^\s*2[^<>!]*=",
            r"(?i)quadratic\s+equation",
        ],
        ProblemType::NaturalExponential => &[r"(?:^|[^a-z])e\s*\^\s*\(?[^=<>]*x[^=<>]*="],
        ProblemType::SimpleExponential => &[
            r"\d\s*\^\s*\(?\s*x\s*\)?\s*=",
            r"(?i)exponential\s+equation",
        ],
        ProblemType::CompoundInterest => &[
            r"(?i)compound(?:ed)?\s+interest",
            r"(?i)compounded\s+(?:annually|semi-?annually|quarterly|monthly|weekly|daily|continuously)",
            r"(?i)\binvest(?:ed|ment|s)?\b",
            r"(?i)\binterest\s+rate\b",
        ],
        ProblemType::HalfLife => &[r"(?i)half[\s-]?life", r"(?i)doubling\s+time"],
        ProblemType::ExponentialGrowth => &[
            r"(?i)exponential\s+growth",
            r"(?i)population\s+grow",
            r"(?i)\bbacteria\b",
            r"(?i)growth\s+(?:rate|model)",
        ],
        ProblemType::ExponentialDecay => &[
            r"(?i)exponential\s+decay",
            r"(?i)radioactive",
            r"(?i)decay\s+(?:rate|model)",
            r"(?i)depreciat",
        ],
        ProblemType::LogarithmicEquation => &[
            r"\blog(?:_\d+(?:\.\d+)?)?\s*\(\s*x\s*\)\s*=",
            r"\bln\s*\(\s*x\s*\)\s*=",
            r"(?i)logarithmic\s+equation",
        ],
        ProblemType::LinearInequality => &[
            r"x\s*(?:[+-]\s*\d+(?:\.\d+)?\s*)?(?:<=|>=|<|>)",
            r"(?i)linear\s+inequalit",
        ],
        ProblemType::LinearSystem => &[
            r"x[^,;]*y\s*=[^,;]*[,;][^,;]*y",
            r"(?i)system\s+of\s+(?:linear\s+)?equations",
        ],
        ProblemType::SimpleLinear => &[
            r"x\s*(?:[+-]\s*\d+(?:\.\d+)?\s*)?=\s*[+-]?\s*\.?\d",
            r"(?i)linear\s+equation",
        ],
    };
    list.iter().map(|p| re(p)).collect()
}

static LIBRARY: LazyLock<Vec<TypePatterns>> = LazyLock::new(|| {
    ProblemType::ALL
        .into_iter()
        .map(|problem_type| TypePatterns {
            problem_type,
            recognizers: recognizers_for(problem_type),
        })
        .collect()
});

/// Every type with its recognizers, in classification order.
pub fn library() -> &'static [TypePatterns] {
    &LIBRARY
}

// ---------------------------------------------------------------------------
// Capture patterns
// ---------------------------------------------------------------------------

/// `a x^2 [b x] [c] op rhs`; groups: a, b, c, op, rhs.
pub static QUADRATIC: LazyLock<Regex> = LazyLock::new(|| {
    re(&format!(
        r"({coef})\s*\*?\s*x\s*\^\s*2\s*(?:([+-]\s*{NUM}?(?:/\d+)?)\s*\*?\s*x\b)?\s*(?:([+-]\s*{NUM}(?:/\d+)?))?\s*(<=|>=|!=|=|<|>)\s*({signed})",
        coef = coef(),
        signed = signed(),
    ))
});

/// `f(x) = a x^2 [b x] [c]` or `y = ...`; groups: a, b, c.
pub static QUADRATIC_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    re(&format!(
        r"(?:\b[fgp]\s*\(\s*x\s*\)|\by)\s*=\s*({coef})\s*\*?\s*x\s*\^\s*2\s*(?:([+-]\s*{NUM}?(?:/\d+)?)\s*\*?\s*x\b)?\s*(?:([+-]\s*{NUM}(?:/\d+)?))?",
        coef = coef(),
    ))
});

/// `h(t) = -g t^2 [v t] [h0]`; groups: t² coefficient, v, h0.
pub static HEIGHT_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    re(&format!(
        r"\bh\s*\(\s*t\s*\)\s*=\s*({signed})\s*\*?\s*t\s*\^\s*2\s*(?:([+-]\s*{NUM}?)\s*\*?\s*t\b)?\s*(?:([+-]\s*{NUM}))?",
        signed = signed(),
    ))
});

/// `[k*] base^x op bound`; groups: coefficient, base, op, bound.
pub static EXPONENTIAL_INEQUALITY: LazyLock<Regex> = LazyLock::new(|| {
    re(&format!(
        r"(?:({signed})\s*\*\s*)?({base})\s*\^\s*\(?\s*x\s*\)?\s*(<=|>=|<|>)\s*({signed})",
        signed = signed(),
        base = base(),
    ))
});

/// `a base^(2x) + b base^x + c = rhs`; groups: a, base, b, second base, c, rhs.
///
/// The regex engine has no backreferences, so both bases are captured and
/// [`mixed_exponential_bases`] compares them.
pub static EXPONENTIAL_QUADRATIC: LazyLock<Regex> = LazyLock::new(|| {
    re(&format!(
        r"({coef})\s*\*?\s*({base})\s*\^\s*\(\s*2\s*\*?\s*x\s*\)\s*([+-]\s*{NUM}?)\s*\*?\s*({base})\s*\^\s*\(?\s*x\s*\)?\s*([+-]\s*{NUM})?\s*=\s*({signed})",
        coef = coef(),
        base = base(),
        signed = signed(),
    ))
});

/// The two bases of an exponential quadratic when they differ in value.
pub fn mixed_exponential_bases(text: &str) -> Option<(String, String)> {
    let caps = EXPONENTIAL_QUADRATIC.captures(text)?;
    let (first, second) = (caps.get(2)?.as_str(), caps.get(4)?.as_str());
    let value = |b: &str| if b == "e" { std::f64::consts::E } else { parse_coefficient(b) };
    (!is_zero(value(first) - value(second))).then(|| (first.to_string(), second.to_string()))
}

/// `[k] e^(r x) = result`; groups: coefficient, rate, result.
pub static NATURAL_EXPONENTIAL: LazyLock<Regex> = LazyLock::new(|| {
    re(&format!(
        r"(?:({signed})\s*\*?\s*)?e\s*\^\s*\(?\s*({coef})\s*\*?\s*x\s*\)?\s*=\s*({signed})",
        signed = signed(),
        coef = coef(),
    ))
});

/// `[k*] base^x = result`; groups: coefficient, base, result.
pub static SIMPLE_EXPONENTIAL: LazyLock<Regex> = LazyLock::new(|| {
    re(&format!(
        r"(?:({signed})\s*\*\s*)?({NUM})\s*\^\s*\(?\s*x\s*\)?\s*=\s*({signed})",
        signed = signed(),
    ))
});

/// `log[_base](x) = result`; groups: base, result.
pub static LOGARITHM: LazyLock<Regex> = LazyLock::new(|| {
    re(&format!(
        r"\blog(?:_({NUM}))?\s*\(\s*x\s*\)\s*=\s*({signed})",
        signed = signed(),
    ))
});

/// `ln(x) = result`; group: result.
pub static NATURAL_LOGARITHM: LazyLock<Regex> = LazyLock::new(|| {
    re(&format!(r"\bln\s*\(\s*x\s*\)\s*=\s*({signed})", signed = signed()))
});

/// `m x [b] op c`; groups: m, b, op, c.
pub static LINEAR: LazyLock<Regex> = LazyLock::new(|| {
    re(&format!(
        r"({coef})\s*\*?\s*x\b\s*([+-]\s*{NUM}(?:/\d+)?)?\s*(<=|>=|!=|=|<|>)\s*({signed})",
        coef = coef(),
        signed = signed(),
    ))
});

/// One `a x + b y = c` equation of a system; groups: a, b, c.
pub static LINEAR_TWO_VAR: LazyLock<Regex> = LazyLock::new(|| {
    re(&format!(
        r"({coef})\s*\*?\s*x\s*([+-]\s*{NUM}?(?:/\d+)?)\s*\*?\s*y\s*=\s*({signed})",
        coef = coef(),
        signed = signed(),
    ))
});

// Word-problem quantities.

pub static MONEY: LazyLock<Regex> =
    LazyLock::new(|| re(r"\$\s*(\d[\d,]*(?:\.\d+)?)"));

pub static TARGET_MONEY: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?i)\b(?:to|reach|becomes?)\s+\$\s*(\d[\d,]*(?:\.\d+)?)"));

pub static PERCENT: LazyLock<Regex> = LazyLock::new(|| re(r"(\d+(?:\.\d+)?|\.\d+)\s*%"));

pub static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    re(r"(?i)\b(?:for|after|in|over)\s+(\d+(?:\.\d+)?)\s*(?:years?|yrs?|months?|days?|hours?|minutes?)\b")
});

pub static INITIAL_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    re(r"(?i)\b(?:initial(?:ly)?|starts?\s+with|starting\s+with|begins?\s+with)\D{0,24}?(\d[\d,]*(?:\.\d+)?)")
});

pub static HALF_LIFE: LazyLock<Regex> = LazyLock::new(|| {
    re(r"(?i)half[\s-]?life\s+(?:of\s+|is\s+)?(\d+(?:\.\d+)?)")
});

pub static DOUBLING_TIME: LazyLock<Regex> = LazyLock::new(|| {
    re(r"(?i)doubling\s+time\s+(?:of\s+|is\s+)?(\d+(?:\.\d+)?)")
});

pub static FREQUENCY: LazyLock<Regex> = LazyLock::new(|| {
    re(r"(?i)\b(semi-?annually|annually|yearly|quarterly|monthly|weekly|daily|continuous(?:ly)?)\b")
});

pub static INITIAL_VELOCITY: LazyLock<Regex> = LazyLock::new(|| {
    re(r"(?i)(?:velocity|speed)\s+(?:of\s+|is\s+)?(\d+(?:\.\d+)?)|\b(\d+(?:\.\d+)?)\s*(?:ft|feet|m|meters?|metres?)\s*(?:/\s*s(?:ec)?|per\s+second)\b")
});

pub static INITIAL_HEIGHT: LazyLock<Regex> = LazyLock::new(|| {
    re(r"(?i)initial\s+height\s+(?:of\s+|is\s+)?(\d+(?:\.\d+)?)|\b(?:from|off)\s+(?:a\s+|the\s+)?(?:height\s+of\s+)?(\d+(?:\.\d+)?)[\s-]*(?:ft|feet|foot|m|meters?|metres?)\b")
});

pub static TARGET_HEIGHT: LazyLock<Regex> = LazyLock::new(|| {
    re(r"(?i)\b(?:reach(?:es)?|at)\s+(?:a\s+)?height\s+of\s+(\d+(?:\.\d+)?)")
});

pub static HITS_GROUND: LazyLock<Regex> = LazyLock::new(|| {
    re(r"(?i)\b(?:hits?|reach(?:es)?|strikes?)\s+the\s+ground\b|\blands?\b")
});

pub static METRIC_UNITS: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?i)\bm/s\b|\bmet(?:er|re)s?\b|\d\s*m\b"));

pub static OPTIMIZATION_GOAL: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?i)\b(maxim|minim)(?:i[sz]e|um)\b"));

pub static CONTINUOUS: LazyLock<Regex> = LazyLock::new(|| re(r"(?i)\bcontinuous(?:ly)?\b"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_follows_catalog_order() {
        let order: Vec<_> = library().iter().map(|t| t.problem_type).collect();
        assert_eq!(order, ProblemType::ALL.to_vec());
        assert!(library().iter().all(|t| !t.recognizers.is_empty()));
    }

    #[test]
    fn quadratic_capture_groups() {
        let caps = QUADRATIC.captures("2x^2 - 5x + 6 = 0").unwrap();
        assert_eq!(caps.get(1).map(|m| m.as_str().trim()), Some("2"));
        assert_eq!(caps.get(2).map(|m| m.as_str()), Some("- 5"));
        assert_eq!(caps.get(3).map(|m| m.as_str()), Some("+ 6"));
        assert_eq!(caps.get(4).map(|m| m.as_str()), Some("="));
    }

    #[test]
    fn function_forms_capture_coefficients() {
        let caps = QUADRATIC_FUNCTION.captures("f(x) = -2x^2 + 8x - 3").unwrap();
        assert_eq!(caps.get(1).map(|m| m.as_str()), Some("-2"));
        assert_eq!(caps.get(2).map(|m| m.as_str()), Some("+ 8"));
        assert_eq!(caps.get(3).map(|m| m.as_str()), Some("- 3"));

        let caps = HEIGHT_FUNCTION.captures("h(t) = -16t^2 + 64t + 80").unwrap();
        assert_eq!(caps.get(1).map(|m| m.as_str()), Some("-16"));
        assert_eq!(caps.get(2).map(|m| m.as_str()), Some("+ 64"));
        assert_eq!(caps.get(3).map(|m| m.as_str()), Some("+ 80"));
    }

    #[test]
    fn projectile_quantities() {
        let text = "A ball is thrown upward from a height of 80 feet with an initial velocity of 64 feet per second";
        let v = INITIAL_VELOCITY.captures(text).unwrap();
        assert_eq!(v.get(1).map(|m| m.as_str()), Some("64"));
        let h = INITIAL_HEIGHT.captures(text).unwrap();
        assert_eq!(h.get(2).map(|m| m.as_str()), Some("80"));
        assert!(!METRIC_UNITS.is_match(text));
        assert!(METRIC_UNITS.is_match("launched at 19.6 m/s"));
        assert!(HITS_GROUND.is_match("when does it hit the ground?"));
        assert!(!HITS_GROUND.is_match("launched from the ground"));
    }

    #[test]
    fn quadratic_without_linear_term() {
        let caps = QUADRATIC.captures("x^2 - 4 > 0").unwrap();
        assert!(caps.get(2).is_none());
        assert_eq!(caps.get(3).map(|m| m.as_str()), Some("- 4"));
        assert_eq!(caps.get(4).map(|m| m.as_str()), Some(">"));
    }

    #[test]
    fn exponential_quadratic_groups() {
        let caps = EXPONENTIAL_QUADRATIC
            .captures("2^(2x) - 6*2^x + 8 = 0")
            .unwrap();
        assert_eq!(caps.get(1).map(|m| m.as_str()), Some(""));
        assert_eq!(caps.get(2).map(|m| m.as_str()), Some("2"));
        assert_eq!(caps.get(3).map(|m| m.as_str()), Some("- 6"));
        assert_eq!(caps.get(4).map(|m| m.as_str()), Some("2"));
        assert_eq!(caps.get(5).map(|m| m.as_str()), Some("+ 8"));
    }

    #[test]
    fn exponential_quadratic_bases_are_compared() {
        assert_eq!(mixed_exponential_bases("2^(2x) - 6*2^x + 8 = 0"), None);
        assert_eq!(mixed_exponential_bases("e^(2x) - 3e^x + 2 = 0"), None);
        assert_eq!(
            mixed_exponential_bases("2^(2x) + 3^x - 2 = 0"),
            Some(("2".to_string(), "3".to_string()))
        );
        assert_eq!(mixed_exponential_bases("3x + 5 = 11"), None);
    }

    #[test]
    fn simple_exponential_requires_explicit_product() {
        let caps = SIMPLE_EXPONENTIAL.captures("3*2^x = 24").unwrap();
        assert_eq!(caps.get(1).map(|m| m.as_str()), Some("3"));
        assert_eq!(caps.get(2).map(|m| m.as_str()), Some("2"));
        assert_eq!(caps.get(3).map(|m| m.as_str()), Some("24"));
    }
}
