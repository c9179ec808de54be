//! Problem catalog and the per-request problem record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Closed catalog of recognized problem shapes.
///
/// Declaration order is classification order: a type must appear before any
/// more general type whose patterns would also match its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemType {
    ExponentialInequality,
    ExponentialQuadratic,
    QuadraticInequality,
    ProjectileMotion,
    QuadraticOptimization,
    FactoringQuadratic,
    CompletingSquare,
    QuadraticFormula,
    StandardQuadratic,
    NaturalExponential,
    SimpleExponential,
    CompoundInterest,
    HalfLife,
    ExponentialGrowth,
    ExponentialDecay,
    LogarithmicEquation,
    LinearInequality,
    LinearSystem,
    SimpleLinear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Quadratic,
    Exponential,
    Finance,
    Linear,
}

impl ProblemType {
    /// Every type, in classification order.
    pub const ALL: [ProblemType; 19] = [
        ProblemType::ExponentialInequality,
        ProblemType::ExponentialQuadratic,
        ProblemType::QuadraticInequality,
        ProblemType::ProjectileMotion,
        ProblemType::QuadraticOptimization,
        ProblemType::FactoringQuadratic,
        ProblemType::CompletingSquare,
        ProblemType::QuadraticFormula,
        ProblemType::StandardQuadratic,
        ProblemType::NaturalExponential,
        ProblemType::SimpleExponential,
        ProblemType::CompoundInterest,
        ProblemType::HalfLife,
        ProblemType::ExponentialGrowth,
        ProblemType::ExponentialDecay,
        ProblemType::LogarithmicEquation,
        ProblemType::LinearInequality,
        ProblemType::LinearSystem,
        ProblemType::SimpleLinear,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ProblemType::ExponentialInequality => "exponential_inequality",
            ProblemType::ExponentialQuadratic => "exponential_quadratic",
            ProblemType::QuadraticInequality => "quadratic_inequality",
            ProblemType::ProjectileMotion => "projectile_motion",
            ProblemType::QuadraticOptimization => "quadratic_optimization",
            ProblemType::FactoringQuadratic => "factoring_quadratic",
            ProblemType::CompletingSquare => "completing_square",
            ProblemType::QuadraticFormula => "quadratic_formula",
            ProblemType::StandardQuadratic => "standard_quadratic",
            ProblemType::NaturalExponential => "natural_exponential",
            ProblemType::SimpleExponential => "simple_exponential",
            ProblemType::CompoundInterest => "compound_interest",
            ProblemType::ExponentialGrowth => "exponential_growth",
            ProblemType::ExponentialDecay => "exponential_decay",
            ProblemType::HalfLife => "half_life",
            ProblemType::LogarithmicEquation => "logarithmic_equation",
            ProblemType::LinearInequality => "linear_inequality",
            ProblemType::LinearSystem => "linear_system",
            ProblemType::SimpleLinear => "simple_linear",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim();
        Self::ALL.into_iter().find(|t| t.name() == wanted)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ProblemType::ExponentialInequality => "Exponential Inequality",
            ProblemType::ExponentialQuadratic => "Exponential Equation in Quadratic Form",
            ProblemType::QuadraticInequality => "Quadratic Inequality",
            ProblemType::ProjectileMotion => "Projectile Motion",
            ProblemType::QuadraticOptimization => "Quadratic Optimization and Vertex Analysis",
            ProblemType::FactoringQuadratic => "Quadratic by Factoring",
            ProblemType::CompletingSquare => "Completing the Square",
            ProblemType::QuadraticFormula => "Quadratic Formula",
            ProblemType::StandardQuadratic => "Standard Quadratic Equation",
            ProblemType::NaturalExponential => "Natural Exponential Equation",
            ProblemType::SimpleExponential => "Simple Exponential Equation",
            ProblemType::CompoundInterest => "Compound Interest",
            ProblemType::ExponentialGrowth => "Exponential Growth",
            ProblemType::ExponentialDecay => "Exponential Decay",
            ProblemType::HalfLife => "Half-Life and Doubling Time",
            ProblemType::LogarithmicEquation => "Logarithmic Equation",
            ProblemType::LinearInequality => "Linear Inequality",
            ProblemType::LinearSystem => "System of Two Linear Equations",
            ProblemType::SimpleLinear => "Linear Equation",
        }
    }

    pub fn family(self) -> Family {
        match self {
            ProblemType::QuadraticInequality
            | ProblemType::ProjectileMotion
            | ProblemType::QuadraticOptimization
            | ProblemType::FactoringQuadratic
            | ProblemType::CompletingSquare
            | ProblemType::QuadraticFormula
            | ProblemType::StandardQuadratic => Family::Quadratic,
            ProblemType::ExponentialInequality
            | ProblemType::ExponentialQuadratic
            | ProblemType::NaturalExponential
            | ProblemType::SimpleExponential
            | ProblemType::LogarithmicEquation => Family::Exponential,
            ProblemType::CompoundInterest
            | ProblemType::ExponentialGrowth
            | ProblemType::ExponentialDecay
            | ProblemType::HalfLife => Family::Finance,
            ProblemType::LinearInequality | ProblemType::LinearSystem | ProblemType::SimpleLinear => {
                Family::Linear
            }
        }
    }

    pub fn is_inequality(self) -> bool {
        matches!(
            self,
            ProblemType::ExponentialInequality
                | ProblemType::QuadraticInequality
                | ProblemType::LinearInequality
        )
    }
}

impl std::fmt::Display for ProblemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single named parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Text(String),
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Number(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Number(n) => f.write_str(&crate::numeric::fmt_num(*n)),
            ParamValue::Text(t) => f.write_str(t),
        }
    }
}

/// Named parameter record, ordered by key for deterministic output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<ParamValue>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Numeric value. Text is read with the coefficient rules of
    /// [`parse_coefficient`](crate::numeric::parse_coefficient), so `"1/2"` is
    /// 0.5, `"-"` is -1 and unparseable text is 0.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.0.get(key)? {
            ParamValue::Number(n) => Some(*n),
            ParamValue::Text(t) => Some(crate::numeric::parse_coefficient(t)),
        }
    }

    pub fn number_or(&self, key: &str, default: f64) -> f64 {
        self.number(key).unwrap_or(default)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.0.get(key)? {
            ParamValue::Text(t) => Some(t.as_str()),
            ParamValue::Number(_) => None,
        }
    }

    /// Insert `key` only when it is absent.
    pub fn set_default(&mut self, key: &str, value: impl Into<ParamValue>) {
        self.0.entry(key.to_string()).or_insert_with(|| value.into());
    }

    /// Overlay `other` on top of `self`; keys in `other` win.
    pub fn merge(&mut self, other: &Params) {
        for (k, v) in &other.0 {
            self.0.insert(k.clone(), v.clone());
        }
    }

    pub fn has_numbers(&self) -> bool {
        self.0.values().any(|v| matches!(v, ParamValue::Number(_)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// A classified problem. Created once per solve request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub original_input: String,
    pub clean_input: String,
    pub problem_type: ProblemType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    pub parameters: Params,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}
