//! Declarative plot descriptions consumed by an external renderer.

use crate::domain::Interval;
use crate::solution::Point2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "graph")]
pub enum GraphData {
    Parabola {
        function: String,
        vertex: Point2,
        x_intercepts: Vec<f64>,
        y_intercept: f64,
        axis_of_symmetry: f64,
        opens_upward: bool,
        x_range: (f64, f64),
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        shaded: Vec<Interval>,
    },
    Exponential {
        function: String,
        base: f64,
        horizontal_asymptote: f64,
        x_range: (f64, f64),
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        marked_x: Vec<f64>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        shaded: Vec<Interval>,
    },
    Line {
        function: String,
        slope: f64,
        intercept: f64,
        x_range: (f64, f64),
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        shaded: Vec<Interval>,
    },
    LinePair {
        first: String,
        second: String,
        intersection: Option<Point2>,
    },
    GrowthCurve {
        function: String,
        initial: f64,
        /// Multiplier per time unit.
        unit_factor: f64,
        horizon: f64,
    },
}
