//! Solver output: the solution set plus family-specific working data.

use crate::domain::{Interval, SolutionSet};
use crate::problem::ProblemType;
use crate::RelOp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Owning problem type.
    pub category: ProblemType,
    /// Human-readable label, e.g. "Two distinct real solutions".
    pub solution_type: String,
    pub set: SolutionSet,
    /// Set when the requested strategy failed and another one produced the answer.
    #[serde(default)]
    pub fallback: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    pub detail: SolutionDetail,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootNature {
    TwoReal,
    OneReal,
    ComplexPair,
}

impl RootNature {
    pub fn label(self) -> &'static str {
        match self {
            RootNature::TwoReal => "Two distinct real solutions",
            RootNature::OneReal => "One repeated real solution",
            RootNature::ComplexPair => "Two complex conjugate solutions",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadraticDetail {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub discriminant: f64,
    pub nature: RootNature,
    pub vertex: Point2,
    pub axis_of_symmetry: f64,
    pub y_intercept: f64,
    pub sum_of_roots: f64,
    pub product_of_roots: f64,
}

/// Measurement system of a projectile problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    Imperial,
    Metric,
}

impl UnitSystem {
    /// Half the gravitational acceleration: the `g` in `h(t) = -g·t² + v₀t + h₀`.
    pub fn gravity(self) -> f64 {
        match self {
            UnitSystem::Imperial => 16.0,
            UnitSystem::Metric => 4.9,
        }
    }

    pub fn length(self) -> &'static str {
        match self {
            UnitSystem::Imperial => "ft",
            UnitSystem::Metric => "m",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileDetail {
    pub units: UnitSystem,
    pub gravity: f64,
    pub initial_velocity: f64,
    pub initial_height: f64,
    pub target_height: Option<f64>,
    /// Discriminant of `-g·t² + v₀t + (h₀ - target) = 0`.
    pub target_discriminant: Option<f64>,
    /// Non-negative times at which the target height is reached.
    pub target_times: Vec<f64>,
    pub time_to_max_height: f64,
    pub max_height: f64,
    /// Positive time at which the height returns to 0, if it ever does.
    pub flight_time: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extremum {
    Minimum,
    Maximum,
}

impl Extremum {
    pub fn label(self) -> &'static str {
        match self {
            Extremum::Minimum => "minimum",
            Extremum::Maximum => "maximum",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexAnalysisDetail {
    pub quadratic: QuadraticDetail,
    pub vertex_form: String,
    /// What the vertex is, decided by the sign of `a`.
    pub extremum: Extremum,
    /// Goal stated by the problem (maximize or minimize), if any.
    pub requested: Option<Extremum>,
    pub range: Interval,
    pub x_intercepts: Vec<f64>,
    /// How the graph is obtained from y = x².
    pub transformations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactoringDetail {
    /// Integer common factor pulled out before the search, if any.
    pub common_factor: Option<f64>,
    /// `(p, q)` with `(x + p)(x + q)` equal to the reduced quadratic.
    pub pair: Option<(f64, f64)>,
    pub factored_form: Option<String>,
    pub quadratic: QuadraticDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletingSquareDetail {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub b_over_a: f64,
    pub c_over_a: f64,
    pub half_b: f64,
    pub half_b_squared: f64,
    /// `(b/2a)² - c/a`, the right side after completing the square.
    pub remainder: f64,
    pub vertex_form: String,
    pub vertex: Point2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestPoint {
    pub interval: Interval,
    pub point: f64,
    pub value: f64,
    pub satisfies: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadraticInequalityDetail {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub operator: RelOp,
    pub discriminant: f64,
    pub critical_points: Vec<f64>,
    pub tests: Vec<TestPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearInequalityDetail {
    pub m: f64,
    pub b: f64,
    pub c: f64,
    pub operator: RelOp,
    /// Operator after dividing by `m`.
    pub isolated_operator: RelOp,
    pub boundary: Option<f64>,
    pub flipped: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Growth,
    Decay,
}

impl Trend {
    pub fn label(self) -> &'static str {
        match self {
            Trend::Growth => "growth",
            Trend::Decay => "decay",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExponentialInequalityDetail {
    pub coefficient: f64,
    pub base: f64,
    pub bound: f64,
    pub operator: RelOp,
    pub isolated_operator: RelOp,
    pub ln_base: f64,
    pub critical_value: Option<f64>,
    pub behavior: Trend,
    pub reversed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExponentialQuadraticDetail {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub base: f64,
    pub discriminant: f64,
    /// Real roots of the substituted quadratic in `u`.
    pub u_roots: Vec<f64>,
    pub rejected: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExponentialDetail {
    pub coefficient: f64,
    pub base: f64,
    /// Coefficient of `x` in the exponent.
    pub rate: f64,
    pub result: f64,
    /// `result / coefficient`.
    pub isolated: f64,
    /// Natural base written as `e`.
    pub natural: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogarithmicDetail {
    pub base: f64,
    pub result: f64,
    pub natural: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "law")]
pub enum GrowthLaw {
    /// Compounded `periods_per_unit` times per time unit.
    Periodic { periods_per_unit: f64 },
    Continuous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Principal,
    FinalAmount,
    Rate,
    Time,
}

impl Quantity {
    pub fn label(self) -> &'static str {
        match self {
            Quantity::Principal => "initial amount",
            Quantity::FinalAmount => "final amount",
            Quantity::Rate => "rate",
            Quantity::Time => "time",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Quantity::Principal => "P",
            Quantity::FinalAmount => "A",
            Quantity::Rate => "r",
            Quantity::Time => "t",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthDetail {
    pub law: GrowthLaw,
    pub trend: Trend,
    pub principal: f64,
    pub final_amount: f64,
    pub rate: f64,
    pub time: f64,
    pub solved_for: Quantity,
    /// Multiplier applied to the principal over the whole period.
    pub factor: f64,
    pub formula: String,
    /// Interest earned, for compound interest.
    pub interest: Option<f64>,
    /// Doubling time (growth) or half-life (decay).
    pub characteristic_time: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HalfLifeDetail {
    pub trend: Trend,
    pub characteristic_time: f64,
    /// Continuous rate constant `ln 2 / h`.
    pub k: f64,
    pub initial: Option<f64>,
    pub time: Option<f64>,
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearDetail {
    pub m: f64,
    pub b: f64,
    pub c: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemDetail {
    pub a1: f64,
    pub b1: f64,
    pub c1: f64,
    pub a2: f64,
    pub b2: f64,
    pub c2: f64,
    pub determinant: f64,
    pub det_x: f64,
    pub det_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "detail")]
pub enum SolutionDetail {
    Quadratic(QuadraticDetail),
    Factoring(FactoringDetail),
    CompletingSquare(CompletingSquareDetail),
    QuadraticInequality(QuadraticInequalityDetail),
    Projectile(ProjectileDetail),
    VertexAnalysis(VertexAnalysisDetail),
    LinearInequality(LinearInequalityDetail),
    ExponentialInequality(ExponentialInequalityDetail),
    ExponentialQuadratic(ExponentialQuadraticDetail),
    Exponential(ExponentialDetail),
    Logarithmic(LogarithmicDetail),
    Growth(GrowthDetail),
    HalfLife(HalfLifeDetail),
    Linear(LinearDetail),
    System(SystemDetail),
}
