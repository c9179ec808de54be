//! Solution-set domain: interval bounds, intervals, complex numbers and the
//! [`SolutionSet`] union every solver returns.

use crate::numeric::fmt_num;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Bound {
    NegInfinity,
    PosInfinity,
    /// Excluded endpoint, written `(` or `)`.
    Open(f64),
    /// Included endpoint, written `[` or `]`.
    Closed(f64),
}

impl Bound {
    pub fn value(&self) -> f64 {
        match self {
            Bound::NegInfinity => f64::NEG_INFINITY,
            Bound::PosInfinity => f64::INFINITY,
            Bound::Open(v) | Bound::Closed(v) => *v,
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Bound::Closed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub lower: Bound,
    pub upper: Bound,
}

impl Interval {
    pub fn new(lower: Bound, upper: Bound) -> Self {
        Interval { lower, upper }
    }

    pub fn open(a: f64, b: f64) -> Self {
        Interval::new(Bound::Open(a), Bound::Open(b))
    }

    pub fn closed(a: f64, b: f64) -> Self {
        Interval::new(Bound::Closed(a), Bound::Closed(b))
    }

    pub fn point(v: f64) -> Self {
        Interval::closed(v, v)
    }

    pub fn all_reals() -> Self {
        Interval::new(Bound::NegInfinity, Bound::PosInfinity)
    }

    pub fn is_point(&self) -> bool {
        match (self.lower, self.upper) {
            (Bound::Closed(a), Bound::Closed(b)) => a == b,
            _ => false,
        }
    }

    pub fn contains(&self, x: f64) -> bool {
        let above = match self.lower {
            Bound::NegInfinity => true,
            Bound::PosInfinity => false,
            Bound::Open(a) => x > a,
            Bound::Closed(a) => x >= a,
        };
        let below = match self.upper {
            Bound::PosInfinity => true,
            Bound::NegInfinity => false,
            Bound::Open(b) => x < b,
            Bound::Closed(b) => x <= b,
        };
        above && below
    }

    /// A point strictly inside the interval, or the point itself if degenerate.
    pub fn sample(&self) -> f64 {
        match (self.lower, self.upper) {
            (Bound::NegInfinity, Bound::PosInfinity) => 0.0,
            (Bound::NegInfinity, upper) => upper.value() - 1.0,
            (lower, Bound::PosInfinity) => lower.value() + 1.0,
            (lower, upper) => (lower.value() + upper.value()) / 2.0,
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_point() {
            return write!(f, "{{{}}}", fmt_num(self.lower.value()));
        }
        let left = match self.lower {
            Bound::NegInfinity => "(-∞".to_string(),
            Bound::PosInfinity => "(∞".to_string(),
            Bound::Open(a) => format!("({}", fmt_num(a)),
            Bound::Closed(a) => format!("[{}", fmt_num(a)),
        };
        let right = match self.upper {
            Bound::PosInfinity => "∞)".to_string(),
            Bound::NegInfinity => "-∞)".to_string(),
            Bound::Open(b) => format!("{})", fmt_num(b)),
            Bound::Closed(b) => format!("{}]", fmt_num(b)),
        };
        write!(f, "{}, {}", left, right)
    }
}

/// Render a union of intervals, `∅` when empty.
pub fn interval_notation(intervals: &[Interval]) -> String {
    if intervals.is_empty() {
        return "∅".to_string();
    }
    intervals
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(" ∪ ")
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    pub fn conj(&self) -> Self {
        Complex::new(self.re, -self.im)
    }
}

impl std::fmt::Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.im < 0.0 { '-' } else { '+' };
        write!(f, "{} {} {}i", fmt_num(self.re), sign, fmt_num(self.im.abs()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SolutionSet {
    /// Real values in ascending order.
    Discrete { values: Vec<f64> },
    Complex { values: Vec<Complex> },
    /// Union of disjoint intervals in ascending order.
    Intervals { intervals: Vec<Interval> },
    AllReals,
    Empty,
    /// Unique solution of a two-variable system.
    Point { x: f64, y: f64 },
    /// Infinitely many solutions of a dependent system.
    Infinite,
    /// A single solved-for named quantity (e.g. final amount, time).
    Quantity { name: String, value: f64 },
}

impl SolutionSet {
    pub fn real_values(&self) -> &[f64] {
        match self {
            SolutionSet::Discrete { values } => values,
            _ => &[],
        }
    }

    /// True when the set has no real number a checker could substitute.
    pub fn is_structural(&self) -> bool {
        match self {
            SolutionSet::Complex { .. } | SolutionSet::Empty | SolutionSet::Infinite => true,
            SolutionSet::Discrete { values } => values.is_empty(),
            _ => false,
        }
    }

    pub fn notation(&self) -> String {
        match self {
            SolutionSet::Discrete { values } if values.is_empty() => "∅".to_string(),
            SolutionSet::Discrete { values } => format!(
                "{{{}}}",
                values.iter().map(|v| fmt_num(*v)).collect::<Vec<_>>().join(", ")
            ),
            SolutionSet::Complex { values } => format!(
                "{{{}}}",
                values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
            ),
            SolutionSet::Intervals { intervals } => interval_notation(intervals),
            SolutionSet::AllReals => "(-∞, ∞)".to_string(),
            SolutionSet::Empty => "∅".to_string(),
            SolutionSet::Point { x, y } => format!("({}, {})", fmt_num(*x), fmt_num(*y)),
            SolutionSet::Infinite => "infinitely many".to_string(),
            SolutionSet::Quantity { name, value } => format!("{} = {}", name, fmt_num(*value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_display_uses_bracket_types() {
        let left = Interval::new(Bound::NegInfinity, Bound::Open(-2.0));
        let right = Interval::new(Bound::Closed(2.0), Bound::PosInfinity);
        assert_eq!(interval_notation(&[left, right]), "(-∞, -2) ∪ [2, ∞)");
        assert_eq!(Interval::point(-1.0).to_string(), "{-1}");
        assert_eq!(interval_notation(&[]), "∅");
    }

    #[test]
    fn contains_respects_open_bounds() {
        let i = Interval::open(-2.0, 2.0);
        assert!(i.contains(0.0));
        assert!(!i.contains(2.0));
        assert!(Interval::closed(-2.0, 2.0).contains(2.0));
        assert!(Interval::all_reals().contains(1e12));
    }

    #[test]
    fn sample_points_are_inside() {
        let cases = [
            Interval::open(-2.0, 2.0),
            Interval::new(Bound::NegInfinity, Bound::Open(-2.0)),
            Interval::new(Bound::Closed(3.0), Bound::PosInfinity),
            Interval::point(5.0),
        ];
        for i in cases {
            assert!(i.contains(i.sample()), "{} should contain its sample", i);
        }
    }

    #[test]
    fn complex_display() {
        assert_eq!(Complex::new(0.0, 1.0).to_string(), "0 + 1i");
        assert_eq!(Complex::new(-1.0, 2.0).conj().to_string(), "-1 - 2i");
    }
}
