//! Parameter extractor.
//!
//! Each problem type has one capture rule. The rule runs over the normalized
//! equation text (and, for word problems, the scenario) regardless of which
//! recognizer classified it.

use crate::coefficient::{parse_amount, parse_coefficient, parse_term};
use crate::patterns::{
    CONTINUOUS, DOUBLING_TIME, DURATION, EXPONENTIAL_INEQUALITY, EXPONENTIAL_QUADRATIC,
    FREQUENCY, HALF_LIFE, HEIGHT_FUNCTION, HITS_GROUND, INITIAL_AMOUNT, INITIAL_HEIGHT,
    INITIAL_VELOCITY, LINEAR, LINEAR_TWO_VAR, LOGARITHM, METRIC_UNITS, MONEY,
    NATURAL_EXPONENTIAL, NATURAL_LOGARITHM, OPTIMIZATION_GOAL, PERCENT, QUADRATIC,
    QUADRATIC_FUNCTION, SIMPLE_EXPONENTIAL, TARGET_HEIGHT, TARGET_MONEY,
};
use eqn_model::{Params, ProblemType};
use regex::Captures;

/// Extract the parameter record for `problem_type` from normalized text.
///
/// Missing shapes produce an empty record; solvers report what is missing.
pub fn extract(problem_type: ProblemType, text: &str, scenario: Option<&str>) -> Params {
    let params = match problem_type {
        ProblemType::QuadraticInequality
        | ProblemType::FactoringQuadratic
        | ProblemType::CompletingSquare
        | ProblemType::QuadraticFormula
        | ProblemType::StandardQuadratic => quadratic(text),
        ProblemType::ProjectileMotion => projectile(text, scenario),
        ProblemType::QuadraticOptimization => quadratic_function(text, scenario),
        ProblemType::ExponentialInequality => exponential_inequality(text),
        ProblemType::ExponentialQuadratic => exponential_quadratic(text),
        ProblemType::NaturalExponential => natural_exponential(text),
        ProblemType::SimpleExponential => simple_exponential(text),
        ProblemType::LogarithmicEquation => logarithm(text),
        ProblemType::CompoundInterest => compound_interest(text, scenario),
        ProblemType::ExponentialGrowth | ProblemType::ExponentialDecay => {
            growth(text, scenario)
        }
        ProblemType::HalfLife => half_life(text, scenario),
        ProblemType::LinearInequality | ProblemType::SimpleLinear => linear(text),
        ProblemType::LinearSystem => system(text),
    };
    tracing::trace!(problem_type = %problem_type, ?params, "extracted");
    params
}

fn group<'t>(caps: &Captures<'t>, i: usize) -> Option<&'t str> {
    caps.get(i).map(|m| m.as_str())
}

fn required(caps: &Captures<'_>, i: usize) -> f64 {
    parse_coefficient(group(caps, i).unwrap_or(""))
}

/// Parse a base capture, mapping `e` to Euler's number.
fn base_value(text: &str) -> f64 {
    if text.trim() == "e" {
        std::f64::consts::E
    } else {
        parse_coefficient(text)
    }
}

fn quadratic(text: &str) -> Params {
    let Some(caps) = QUADRATIC.captures(text) else {
        return Params::new();
    };
    let rhs = required(&caps, 5);
    let mut params = Params::new()
        .with("a", required(&caps, 1))
        .with("b", parse_term(group(&caps, 2)))
        .with("c", parse_term(group(&caps, 3)) - rhs);
    if let Some(op) = group(&caps, 4).filter(|op| *op != "=") {
        params.insert("operator", op);
    }
    params
}

/// First participating capture among `indices`.
fn first_group<'t>(caps: &Captures<'t>, indices: &[usize]) -> Option<&'t str> {
    indices.iter().find_map(|i| group(caps, *i))
}

/// `f(x) = ax² + bx + c`, falling back to an equation in standard form, plus
/// the maximize or minimize goal stated anywhere in the problem.
fn quadratic_function(text: &str, scenario: Option<&str>) -> Params {
    let mut params = match QUADRATIC_FUNCTION.captures(text) {
        Some(caps) => Params::new()
            .with("a", required(&caps, 1))
            .with("b", parse_term(group(&caps, 2)))
            .with("c", parse_term(group(&caps, 3))),
        None => quadratic(text),
    };
    let words = word_problem_text(text, scenario);
    if let Some(caps) = OPTIMIZATION_GOAL.captures(&words) {
        let goal = match group(&caps, 1).map(str::to_ascii_lowercase).as_deref() {
            Some("minim") => "minimize",
            _ => "maximize",
        };
        params.insert("goal", goal);
    }
    params
}

fn projectile(text: &str, scenario: Option<&str>) -> Params {
    let words = word_problem_text(text, scenario);
    let mut params = Params::new();

    if let Some(caps) = HEIGHT_FUNCTION.captures(text) {
        params.insert("gravity", -required(&caps, 1));
        params.insert("initial_velocity", parse_term(group(&caps, 2)));
        params.insert("initial_height", parse_term(group(&caps, 3)));
    } else {
        if let Some(v) = INITIAL_VELOCITY.captures(&words).and_then(|c| first_group(&c, &[1, 2])) {
            params.insert("initial_velocity", parse_coefficient(v));
        }
        if let Some(h) = INITIAL_HEIGHT.captures(&words).and_then(|c| first_group(&c, &[1, 2])) {
            params.insert("initial_height", parse_coefficient(h));
        }
    }

    if let Some(caps) = TARGET_HEIGHT.captures(&words) {
        params.insert("target_height", required(&caps, 1));
    } else if HITS_GROUND.is_match(&words) {
        params.insert("target_height", 0.0);
    }
    let units = if METRIC_UNITS.is_match(&words) { "metric" } else { "imperial" };
    params.insert("units", units);
    params
}

fn exponential_inequality(text: &str) -> Params {
    let Some(caps) = EXPONENTIAL_INEQUALITY.captures(text) else {
        return Params::new();
    };
    let mut params = Params::new()
        .with("base", base_value(group(&caps, 2).unwrap_or("")))
        .with("operator", group(&caps, 3).unwrap_or(">"))
        .with("bound", required(&caps, 4));
    if let Some(k) = group(&caps, 1) {
        params.insert("coefficient", parse_coefficient(k));
    }
    params
}

fn exponential_quadratic(text: &str) -> Params {
    let Some(caps) = EXPONENTIAL_QUADRATIC.captures(text) else {
        return Params::new();
    };
    Params::new()
        .with("a", required(&caps, 1))
        .with("base", base_value(group(&caps, 2).unwrap_or("")))
        .with("b", required(&caps, 3))
        .with("c", parse_term(group(&caps, 5)) - required(&caps, 6))
}

fn natural_exponential(text: &str) -> Params {
    let Some(caps) = NATURAL_EXPONENTIAL.captures(text) else {
        return Params::new();
    };
    let mut params = Params::new()
        .with("rate", required(&caps, 2))
        .with("result", required(&caps, 3));
    if let Some(k) = group(&caps, 1) {
        params.insert("coefficient", parse_coefficient(k));
    }
    params
}

fn simple_exponential(text: &str) -> Params {
    let Some(caps) = SIMPLE_EXPONENTIAL.captures(text) else {
        return Params::new();
    };
    let mut params = Params::new()
        .with("base", required(&caps, 2))
        .with("result", required(&caps, 3));
    if let Some(k) = group(&caps, 1) {
        params.insert("coefficient", parse_coefficient(k));
    }
    params
}

fn logarithm(text: &str) -> Params {
    if let Some(caps) = NATURAL_LOGARITHM.captures(text) {
        return Params::new()
            .with("base", "e")
            .with("result", required(&caps, 1));
    }
    let Some(caps) = LOGARITHM.captures(text) else {
        return Params::new();
    };
    let base = group(&caps, 1).map_or(10.0, parse_coefficient);
    Params::new()
        .with("base", base)
        .with("result", required(&caps, 2))
}

fn linear(text: &str) -> Params {
    let Some(caps) = LINEAR.captures(text) else {
        return Params::new();
    };
    let mut params = Params::new()
        .with("m", required(&caps, 1))
        .with("b", parse_term(group(&caps, 2)))
        .with("c", required(&caps, 4));
    if let Some(op) = group(&caps, 3).filter(|op| *op != "=") {
        params.insert("operator", op);
    }
    params
}

fn system(text: &str) -> Params {
    let mut params = Params::new();
    for (i, caps) in LINEAR_TWO_VAR.captures_iter(text).take(2).enumerate() {
        let n = i + 1;
        params.insert(&format!("a{n}"), required(&caps, 1));
        params.insert(&format!("b{n}"), required(&caps, 2));
        params.insert(&format!("c{n}"), required(&caps, 3));
    }
    params
}

/// Both the equation field and the scenario may hold the word problem.
fn word_problem_text(text: &str, scenario: Option<&str>) -> String {
    match scenario {
        Some(s) if !text.is_empty() => format!("{text} {s}"),
        Some(s) => s.to_string(),
        None => text.to_string(),
    }
}

fn rate_and_time(text: &str, params: &mut Params) {
    if let Some(caps) = PERCENT.captures(text) {
        params.insert("rate", parse_coefficient(group(&caps, 1).unwrap_or("")) / 100.0);
    }
    if let Some(caps) = DURATION.captures(text) {
        params.insert("time", parse_coefficient(group(&caps, 1).unwrap_or("")));
    }
}

fn compound_interest(text: &str, scenario: Option<&str>) -> Params {
    let text = word_problem_text(text, scenario);
    let mut params = Params::new();

    let target = TARGET_MONEY.captures(&text);
    let target_start = target.as_ref().and_then(|c| c.get(1)).map(|m| m.start());
    if let Some(value) = target.as_ref().and_then(|c| group(c, 1)) {
        params.insert("final_amount", parse_amount(value));
    }
    let principal = MONEY
        .captures_iter(&text)
        .filter_map(|c| c.get(1))
        .find(|m| Some(m.start()) != target_start);
    if let Some(m) = principal {
        params.insert("principal", parse_amount(m.as_str()));
    }

    rate_and_time(&text, &mut params);

    if let Some(caps) = FREQUENCY.captures(&text) {
        let word = group(&caps, 1).unwrap_or("").to_ascii_lowercase();
        match word.as_str() {
            "annually" | "yearly" => params.insert("frequency", 1.0),
            "semiannually" | "semi-annually" => params.insert("frequency", 2.0),
            "quarterly" => params.insert("frequency", 4.0),
            "monthly" => params.insert("frequency", 12.0),
            "weekly" => params.insert("frequency", 52.0),
            "daily" => params.insert("frequency", 365.0),
            _ => params.insert("compounding", "continuous"),
        }
    }
    params
}

fn growth(text: &str, scenario: Option<&str>) -> Params {
    let text = word_problem_text(text, scenario);
    let mut params = Params::new();
    if let Some(caps) = INITIAL_AMOUNT.captures(&text) {
        params.insert("initial", parse_amount(group(&caps, 1).unwrap_or("")));
    }
    rate_and_time(&text, &mut params);
    if CONTINUOUS.is_match(&text) {
        params.insert("model", "continuous");
    }
    params
}

fn half_life(text: &str, scenario: Option<&str>) -> Params {
    let text = word_problem_text(text, scenario);
    let mut params = Params::new();
    if let Some(caps) = HALF_LIFE.captures(&text) {
        params.insert("half_life", parse_coefficient(group(&caps, 1).unwrap_or("")));
    } else if let Some(caps) = DOUBLING_TIME.captures(&text) {
        params.insert("doubling_time", parse_coefficient(group(&caps, 1).unwrap_or("")));
    }
    if let Some(caps) = INITIAL_AMOUNT.captures(&text) {
        params.insert("initial", parse_amount(group(&caps, 1).unwrap_or("")));
    }
    if let Some(caps) = DURATION.captures(&text) {
        params.insert("time", parse_coefficient(group(&caps, 1).unwrap_or("")));
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;

    fn ex(t: ProblemType, text: &str) -> Params {
        extract(t, &normalize(text), None)
    }

    #[test]
    fn quadratic_coefficients_and_rhs_shift() {
        let p = ex(ProblemType::StandardQuadratic, "x^2 - 5x + 6 = 0");
        assert_eq!(p.number("a"), Some(1.0));
        assert_eq!(p.number("b"), Some(-5.0));
        assert_eq!(p.number("c"), Some(6.0));
        assert!(p.text("operator").is_none());

        let p = ex(ProblemType::StandardQuadratic, "2x^2 + 4x = 6");
        assert_eq!(p.number("c"), Some(-6.0));
    }

    #[test]
    fn quadratic_missing_terms_are_zero() {
        let p = ex(ProblemType::QuadraticInequality, "x^2 - 4 > 0");
        assert_eq!(p.number("b"), Some(0.0));
        assert_eq!(p.number("c"), Some(-4.0));
        assert_eq!(p.text("operator"), Some(">"));

        let p = ex(ProblemType::StandardQuadratic, "-x^2 + x = 0");
        assert_eq!(p.number("a"), Some(-1.0));
        assert_eq!(p.number("b"), Some(1.0));
        assert_eq!(p.number("c"), Some(0.0));
    }

    #[test]
    fn operator_kept_verbatim() {
        let p = ex(ProblemType::QuadraticInequality, "x^2 + 2x + 1 ≥ 0");
        assert_eq!(p.text("operator"), Some(">="));
    }

    #[test]
    fn exponential_shapes() {
        let p = ex(ProblemType::SimpleExponential, "3*2^x = 24");
        assert_eq!(p.number("coefficient"), Some(3.0));
        assert_eq!(p.number("base"), Some(2.0));
        assert_eq!(p.number("result"), Some(24.0));

        let p = ex(ProblemType::ExponentialInequality, "0.5^x > 0.25");
        assert_eq!(p.number("base"), Some(0.5));
        assert_eq!(p.number("bound"), Some(0.25));
        assert_eq!(p.text("operator"), Some(">"));
        assert!(!p.contains("coefficient"));

        let p = ex(ProblemType::NaturalExponential, "3e^(2x) = 12");
        assert_eq!(p.number("coefficient"), Some(3.0));
        assert_eq!(p.number("rate"), Some(2.0));
        assert_eq!(p.number("result"), Some(12.0));

        let p = ex(ProblemType::ExponentialQuadratic, "2^(2x) - 6*2^x + 8 = 0");
        assert_eq!(p.number("a"), Some(1.0));
        assert_eq!(p.number("b"), Some(-6.0));
        assert_eq!(p.number("c"), Some(8.0));
        assert_eq!(p.number("base"), Some(2.0));
    }

    #[test]
    fn projectile_word_problem() {
        let p = extract(
            ProblemType::ProjectileMotion,
            "",
            Some("A ball is thrown upward from a height of 80 feet with an initial velocity of 64 feet per second. When does it hit the ground?"),
        );
        assert_eq!(p.number("initial_velocity"), Some(64.0));
        assert_eq!(p.number("initial_height"), Some(80.0));
        assert_eq!(p.number("target_height"), Some(0.0));
        assert_eq!(p.text("units"), Some("imperial"));

        let p = extract(
            ProblemType::ProjectileMotion,
            "",
            Some("A rocket is launched at 19.6 m/s. When does it reach a height of 14.7 meters?"),
        );
        assert_eq!(p.number("initial_velocity"), Some(19.6));
        assert!(!p.contains("initial_height"));
        assert_eq!(p.number("target_height"), Some(14.7));
        assert_eq!(p.text("units"), Some("metric"));
    }

    #[test]
    fn height_function_sets_gravity() {
        let p = ex(ProblemType::ProjectileMotion, "h(t) = -16t^2 + 64t + 80");
        assert_eq!(p.number("gravity"), Some(16.0));
        assert_eq!(p.number("initial_velocity"), Some(64.0));
        assert_eq!(p.number("initial_height"), Some(80.0));
        assert!(!p.contains("target_height"));
    }

    #[test]
    fn quadratic_function_and_goal() {
        let p = extract(
            ProblemType::QuadraticOptimization,
            "f(x) = -2x^2 + 8x - 3",
            Some("Find the maximum value"),
        );
        assert_eq!(p.number("a"), Some(-2.0));
        assert_eq!(p.number("b"), Some(8.0));
        assert_eq!(p.number("c"), Some(-3.0));
        assert_eq!(p.text("goal"), Some("maximize"));

        let p = ex(ProblemType::QuadraticOptimization, "x^2 - 4x + 3 = 0");
        assert_eq!(p.number("b"), Some(-4.0));
        assert!(!p.contains("goal"));
    }

    #[test]
    fn logarithms() {
        let p = ex(ProblemType::LogarithmicEquation, "log_2(x) = 5");
        assert_eq!(p.number("base"), Some(2.0));
        assert_eq!(p.number("result"), Some(5.0));
        let p = ex(ProblemType::LogarithmicEquation, "log(x) = 2");
        assert_eq!(p.number("base"), Some(10.0));
        let p = ex(ProblemType::LogarithmicEquation, "ln(x) = 1");
        assert_eq!(p.text("base"), Some("e"));
    }

    #[test]
    fn linear_and_system() {
        let p = ex(ProblemType::SimpleLinear, "3x + 5 = 11");
        assert_eq!(
            (p.number("m"), p.number("b"), p.number("c")),
            (Some(3.0), Some(5.0), Some(11.0))
        );
        let p = ex(ProblemType::LinearInequality, "-2x + 4 < 10");
        assert_eq!(p.number("m"), Some(-2.0));
        assert_eq!(p.text("operator"), Some("<"));

        let p = ex(ProblemType::LinearSystem, "2x + 3y = 7, x - y = 1");
        assert_eq!(p.number("a1"), Some(2.0));
        assert_eq!(p.number("b1"), Some(3.0));
        assert_eq!(p.number("c1"), Some(7.0));
        assert_eq!(p.number("a2"), Some(1.0));
        assert_eq!(p.number("b2"), Some(-1.0));
        assert_eq!(p.number("c2"), Some(1.0));
    }

    #[test]
    fn compound_interest_scenario() {
        let p = extract(
            ProblemType::CompoundInterest,
            "",
            Some("$1,000 invested at 5% for 10 years compounded quarterly"),
        );
        assert_eq!(p.number("principal"), Some(1000.0));
        assert_eq!(p.number("rate"), Some(0.05));
        assert_eq!(p.number("time"), Some(10.0));
        assert_eq!(p.number("frequency"), Some(4.0));

        let p = extract(
            ProblemType::CompoundInterest,
            "",
            Some("How long until $500 grows to $1000 at 4% compounded continuously?"),
        );
        assert_eq!(p.number("principal"), Some(500.0));
        assert_eq!(p.number("final_amount"), Some(1000.0));
        assert_eq!(p.text("compounding"), Some("continuous"));
        assert!(!p.contains("time"));
    }

    #[test]
    fn half_life_scenario() {
        let p = extract(
            ProblemType::HalfLife,
            "",
            Some("A sample starts with 80 grams and has a half-life of 5 years. How much is left after 15 years?"),
        );
        assert_eq!(p.number("half_life"), Some(5.0));
        assert_eq!(p.number("initial"), Some(80.0));
        assert_eq!(p.number("time"), Some(15.0));
    }

    #[test]
    fn unmatched_shape_gives_empty_record() {
        assert!(ex(ProblemType::StandardQuadratic, "solve by factoring").is_empty());
    }
}
