//! Lenient numeric literal parsing for captured coefficients.

pub use eqn_model::numeric::parse_coefficient;

/// Coefficient of an optional term: a term that did not match is absent (0).
pub fn parse_term(capture: Option<&str>) -> f64 {
    capture.map_or(0.0, parse_coefficient)
}

/// Amount text such as `1,250.50`.
pub fn parse_amount(text: &str) -> f64 {
    let digits: String = text.chars().filter(|c| *c != ',').collect();
    digits.trim().parse().unwrap_or(0.0)
}
