//! Vertical projectile motion, `h(t) = -g·t² + v₀t + h₀`.
//!
//! `g` is half the gravitational acceleration: 16 in feet, 4.9 in meters.
//! Without a target height the answer is the maximum height; with one it is
//! every non-negative time at which that height is reached.

use crate::quadratic_formula::quadratic_roots;
use eqn_model::numeric::fmt_num;
use eqn_model::solution::{ProjectileDetail, UnitSystem};
use eqn_model::{Params, ProblemType, Solution, SolutionDetail, SolutionSet, SolveError, TOLERANCE};

pub fn height(gravity: f64, initial_velocity: f64, initial_height: f64, t: f64) -> f64 {
    -gravity * t * t + initial_velocity * t + initial_height
}

fn units(params: &Params) -> UnitSystem {
    match params.text("units").map(|u| u.trim().to_ascii_lowercase()).as_deref() {
        Some("metric" | "meters" | "metres" | "m") => UnitSystem::Metric,
        _ => UnitSystem::Imperial,
    }
}

/// Non-negative roots of `-g·t² + v₀t + c = 0`, ascending.
fn times_at(gravity: f64, v0: f64, c: f64) -> Result<(f64, Vec<f64>), SolveError> {
    let (delta, roots) = quadratic_roots(-gravity, v0, c)?;
    let mut times: Vec<f64> = roots
        .real()
        .into_iter()
        .filter(|t| *t >= -TOLERANCE)
        .map(|t| t.max(0.0))
        .collect();
    times.dedup_by(|a, b| (*a - *b).abs() < TOLERANCE);
    Ok((delta, times))
}

pub fn solve(params: &Params) -> Result<Solution, SolveError> {
    let category = ProblemType::ProjectileMotion;
    let v0 = params.number("initial_velocity");
    let h0 = params.number("initial_height");
    if v0.is_none() && h0.is_none() {
        return Err(SolveError::InsufficientParameters {
            problem_type: category.name(),
            needed: "initial velocity or initial height".to_string(),
        });
    }
    let (v0, h0) = (v0.unwrap_or(0.0), h0.unwrap_or(0.0));
    let units = units(params);
    let gravity = params
        .number("gravity")
        .filter(|g| *g > TOLERANCE)
        .unwrap_or_else(|| units.gravity());

    // a downward launch is highest at release
    let time_to_max_height = (v0 / (2.0 * gravity)).max(0.0);
    let max_height = height(gravity, v0, h0, time_to_max_height);
    let flight_time = times_at(gravity, v0, h0)?
        .1
        .into_iter()
        .filter(|t| *t > TOLERANCE)
        .last();

    let target_height = params.number("target_height");
    let (target_discriminant, target_times) = match target_height {
        Some(target) => {
            let (delta, times) = times_at(gravity, v0, h0 - target)?;
            (Some(delta), times)
        }
        None => (None, Vec::new()),
    };
    tracing::debug!(
        gravity,
        v0,
        h0,
        max_height,
        ?target_height,
        times = target_times.len(),
        "projectile"
    );

    let (solution_type, set) = match target_height {
        Some(target) if target_times.is_empty() => {
            return Err(SolveError::NoSolution(format!(
                "the projectile never reaches a height of {} {}; its maximum height is {} {}",
                fmt_num(target),
                units.length(),
                fmt_num(max_height),
                units.length()
            )));
        }
        Some(_) => (
            match target_times.len() {
                1 => "Reaches the target height once",
                _ => "Reaches the target height twice, rising and falling",
            },
            SolutionSet::Discrete {
                values: target_times.clone(),
            },
        ),
        None => (
            "Maximum height",
            SolutionSet::Quantity {
                name: "maximum height".to_string(),
                value: max_height,
            },
        ),
    };

    Ok(Solution {
        category,
        solution_type: solution_type.to_string(),
        set,
        fallback: false,
        notes: Vec::new(),
        detail: SolutionDetail::Projectile(ProjectileDetail {
            units,
            gravity,
            initial_velocity: v0,
            initial_height: h0,
            target_height,
            target_discriminant,
            target_times,
            time_to_max_height,
            max_height,
            flight_time,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(s: &Solution) -> &ProjectileDetail {
        let SolutionDetail::Projectile(d) = &s.detail else {
            panic!("wrong detail");
        };
        d
    }

    #[test]
    fn maximum_height_in_feet() {
        let s = solve(&Params::new().with("initial_velocity", 64.0).with("initial_height", 80.0)).unwrap();
        assert_eq!(
            s.set,
            SolutionSet::Quantity {
                name: "maximum height".to_string(),
                value: 144.0
            }
        );
        let d = detail(&s);
        assert_eq!(d.gravity, 16.0);
        assert_eq!(d.time_to_max_height, 2.0);
        assert_eq!(d.flight_time, Some(5.0));
    }

    #[test]
    fn target_height_is_reached_twice() {
        let s = solve(
            &Params::new()
                .with("initial_velocity", 64.0)
                .with("initial_height", 80.0)
                .with("target_height", 128.0),
        )
        .unwrap();
        assert_eq!(s.set.real_values(), &[1.0, 3.0]);
    }

    #[test]
    fn ground_time_drops_the_negative_root() {
        let s = solve(
            &Params::new()
                .with("initial_velocity", 64.0)
                .with("initial_height", 80.0)
                .with("target_height", 0.0),
        )
        .unwrap();
        assert_eq!(s.set.real_values(), &[5.0]);
        assert_eq!(s.solution_type, "Reaches the target height once");
    }

    #[test]
    fn metric_units_use_4_9() {
        let s = solve(
            &Params::new()
                .with("initial_velocity", 19.6)
                .with("units", "metric")
                .with("target_height", 0.0),
        )
        .unwrap();
        let d = detail(&s);
        assert_eq!(d.gravity, 4.9);
        assert!((d.time_to_max_height - 2.0).abs() < 1e-12);
        assert!((d.max_height - 19.6).abs() < 1e-9);
        // launched from the ground: t = 0 and the landing time
        assert_eq!(s.set.real_values().len(), 2);
        assert!((s.set.real_values()[1] - 4.0).abs() < 1e-9);
    }

    #[test]
    fn unreachable_height_is_no_solution() {
        let err = solve(
            &Params::new()
                .with("initial_velocity", 32.0)
                .with("target_height", 100.0),
        )
        .unwrap_err();
        assert_eq!(err.code(), "E_NO_SOLUTION");
        assert!(err.to_string().contains("maximum height is 16 ft"));
    }

    #[test]
    fn needs_velocity_or_height() {
        let err = solve(&Params::new().with("target_height", 3.0)).unwrap_err();
        assert_eq!(err.code(), "E_INSUFFICIENT_PARAMS");
    }

    #[test]
    fn dropped_object() {
        let s = solve(&Params::new().with("initial_height", 64.0).with("target_height", 0.0)).unwrap();
        assert_eq!(s.set.real_values(), &[2.0]);
        assert_eq!(detail(&s).time_to_max_height, 0.0);
    }
}
