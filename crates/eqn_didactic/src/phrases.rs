//! Fixed explanation phrases keyed by family and step name.

use crate::names::*;
use eqn_model::step::Explanations;
use eqn_model::{Family, Step};

pub(crate) struct Phrases {
    pub conceptual: &'static str,
    pub procedural: Option<&'static str>,
    pub visual: &'static str,
    pub algebraic: &'static str,
}

const fn p(
    conceptual: &'static str,
    procedural: Option<&'static str>,
    visual: &'static str,
    algebraic: &'static str,
) -> Phrases {
    Phrases {
        conceptual,
        procedural,
        visual,
        algebraic,
    }
}

static SHARED: &[(&str, Phrases)] = &[
    (GIVEN_EQUATION, p(
        "An equation states that two expressions have the same value; solving means finding every value of the unknown that makes this true.",
        Some("Read the equation carefully and identify the unknown."),
        "Picture both sides as the two pans of a balance that must stay level.",
        "Any operation applied equally to both sides preserves the solutions.",
    )),
    (GIVEN_INEQUALITY, p(
        "An inequality describes a whole range of values rather than isolated points.",
        Some("Identify the unknown and the comparison operator."),
        "The answer will be a shaded region of the number line.",
        "Adding the same number to both sides preserves an inequality.",
    )),
    (GIVEN_SYSTEM, p(
        "A system asks for values that satisfy every equation at the same time.",
        Some("Write both equations in the form ax + by = c."),
        "Each equation is a line; the solution is where the lines meet.",
        "A common solution must satisfy each equation individually.",
    )),
    (SOLVE_FOR_X, p(
        "Isolating the unknown turns the equation into an explicit answer.",
        Some("Undo the remaining operation on x."),
        "The marked points are where the graph meets the target value.",
        "Inverse operations cancel: (x + a) - a = x.",
    )),
    (WRITE_SOLUTION, p(
        "The solution set collects every value that satisfies the original problem.",
        Some("Write the answer using interval or set notation."),
        "Shade exactly the region that works.",
        "Interval notation uses brackets for included endpoints and parentheses for excluded ones.",
    )),
];

static QUADRATIC: &[(&str, Phrases)] = &[
    (IDENTIFY_COEFFICIENTS, p(
        "The coefficients a, b and c completely determine the shape and position of the parabola.",
        Some("Match each term with ax² + bx + c and note the signs."),
        "a controls how wide the parabola opens and whether it opens up or down.",
        "Standard form: ax² + bx + c = 0.",
    )),
    (CALCULATE_DISCRIMINANT, p(
        "The discriminant predicts how many real solutions exist before solving.",
        Some("Compute b² - 4ac carefully, squaring b including its sign."),
        "Positive: the parabola crosses the x-axis twice; zero: it touches once; negative: it never reaches it.",
        "Δ = b² - 4ac.",
    )),
    (APPLY_QUADRATIC_FORMULA, p(
        "The quadratic formula solves every quadratic equation, whatever its coefficients.",
        Some("Substitute a, b and the discriminant into the formula."),
        "The ± produces the two symmetric crossings around the axis of symmetry.",
        "x = (-b ± √(b² - 4ac)) / 2a.",
    )),
    (SIMPLIFY_SQUARE_ROOT, p(
        "Simplifying the square root makes the two solutions easy to read off.",
        None,
        "√Δ is the horizontal distance between the two crossings, scaled by a.",
        "√(k²) = |k|.",
    )),
    (CALCULATE_SOLUTIONS, p(
        "Each sign choice gives one of the two solutions.",
        Some("Evaluate the + branch and the - branch separately."),
        "The two solutions are the x-intercepts of the parabola.",
        "x₁ + x₂ = -b/a and x₁·x₂ = c/a.",
    )),
    (CALCULATE_SOLUTION, p(
        "A zero discriminant means the two solutions coincide.",
        Some("Divide -b by 2a."),
        "The vertex of the parabola sits exactly on the x-axis.",
        "x = -b / 2a.",
    )),
    (IDENTIFY_COMPLEX_SOLUTIONS, p(
        "When the discriminant is negative, the solutions are complex numbers that come in conjugate pairs.",
        Some("Write √(-k) as i√k and split into real and imaginary parts."),
        "The parabola lies entirely above or below the x-axis.",
        "i² = -1.",
    )),
    (FACTOR_OUT_COMMON, p(
        "Pulling out a common factor leaves a simpler quadratic with the same roots.",
        Some("Divide every term by the greatest common factor."),
        "Scaling the parabola vertically does not move its x-intercepts.",
        "ka·x² + kb·x + kc = k(ax² + bx + c).",
    )),
    (FIND_FACTOR_PAIR, p(
        "Factoring reverses multiplication of two binomials.",
        Some("List factor pairs of c and choose the one adding to b."),
        "Each factor pair corresponds to a possible pair of intercepts.",
        "(x + p)(x + q) = x² + (p + q)x + pq.",
    )),
    (FACTOR_QUADRATIC, p(
        "A factored form exposes the solutions directly.",
        Some("Write the quadratic as (x + p)(x + q)."),
        "Each binomial factor marks one x-intercept.",
        "x² + (p + q)x + pq = (x + p)(x + q).",
    )),
    (ZERO_PRODUCT, p(
        "A product can only be zero if at least one factor is zero.",
        Some("Set each factor equal to zero."),
        "Each factor vanishes at one intercept.",
        "AB = 0 ⇒ A = 0 or B = 0.",
    )),
    (CANNOT_FACTOR, p(
        "Not every quadratic factors over the integers; the formula still works.",
        Some("Switch strategy to the quadratic formula."),
        "The intercepts exist but are not whole numbers.",
        "Integer factoring needs integers p, q with pq = c and p + q = b.",
    )),
    (DIVIDE_LEADING, p(
        "Completing the square is easiest when the x² term has coefficient 1.",
        Some("Divide every term by a."),
        "Dividing by a rescales the graph vertically but keeps the roots.",
        "ax² + bx + c = 0 ⇔ x² + (b/a)x + c/a = 0.",
    )),
    (MOVE_CONSTANT, p(
        "Separating the constant makes room to build a perfect square.",
        Some("Subtract the constant term from both sides."),
        "This shifts attention to the x terms only.",
        "x² + bx + c = 0 ⇔ x² + bx = -c.",
    )),
    (COMPLETE_SQUARE, p(
        "Adding (b/2)² turns x² + bx into a perfect square trinomial.",
        Some("Halve the x coefficient, square it, add it to both sides."),
        "Geometrically, the missing corner square completes a larger square.",
        "x² + bx + (b/2)² = (x + b/2)².",
    )),
    (FACTOR_PERFECT_SQUARE, p(
        "The perfect square reveals the vertex form of the parabola.",
        Some("Rewrite the left side as (x + b/2)²."),
        "The vertex is at x = -b/2.",
        "x² + 2hx + h² = (x + h)².",
    )),
    (TAKE_SQUARE_ROOT, p(
        "Taking a square root gives two possibilities, positive and negative.",
        Some("Take ± the square root of both sides."),
        "The two solutions are equally far from the axis of symmetry.",
        "u² = k ⇒ u = ±√k for k ≥ 0.",
    )),
    (SOLVE_RELATED_EQUATION, p(
        "The sign of a quadratic can only change at its roots, so they split the line into test regions.",
        Some("Solve the equation obtained by replacing the inequality with =."),
        "The roots are where the parabola crosses the x-axis.",
        "ax² + bx + c = 0.",
    )),
    (IDENTIFY_TEST_INTERVALS, p(
        "Between consecutive critical points the quadratic keeps one sign.",
        Some("List the intervals determined by the critical points."),
        "Each interval is a stretch of the x-axis where the parabola stays above or below.",
        "Critical points divide ℝ into open intervals.",
    )),
    (TEST_EACH_INTERVAL, p(
        "One test value is enough to know the sign on a whole interval.",
        Some("Substitute a test value from each interval."),
        "Check whether the parabola is above or below the axis there.",
        "The sign of f(t) equals the sign of f on the interval containing t.",
    )),
    (WRITE_HEIGHT_FUNCTION, p(
        "Under constant gravity the height of a thrown object is a quadratic function of time.",
        Some("Substitute g, v₀ and h₀ into h(t) = -gt² + v₀t + h₀."),
        "The path over time is a downward-opening parabola.",
        "h(t) = -½·a_g·t² + v₀t + h₀.",
    )),
    (FIND_TIME_OF_MAX, p(
        "The highest point is the vertex, where the upward speed runs out.",
        Some("Evaluate t = v₀ / 2g."),
        "The axis of symmetry splits the flight into a rising half and a falling half.",
        "t = -b / 2a for h(t) = at² + bt + c.",
    )),
    (COMPUTE_MAX_HEIGHT, p(
        "The peak height is the function's value at the vertex time.",
        None,
        "Read the height of the parabola's top point.",
        "k = h(-b / 2a).",
    )),
    (SET_TARGET_HEIGHT, p(
        "Asking when the object is at a given height turns the function into an equation.",
        Some("Set h(t) equal to the target and move everything to one side."),
        "Draw a horizontal line at the target height and look for crossings.",
        "h(t) = H ⇔ -gt² + v₀t + (h₀ - H) = 0.",
    )),
    (SOLVE_FOR_TIME, p(
        "A quadratic in t can have two, one or no real solutions.",
        Some("Apply the quadratic formula to the equation in t."),
        "Each crossing of the horizontal line is one time.",
        "t = (-b ± √(b² - 4ac)) / 2a.",
    )),
    (INTERPRET_TIMES, p(
        "Only times after launch describe the actual flight.",
        Some("Discard negative times and describe each remaining one."),
        "The earlier crossing is on the way up, the later one on the way down.",
        "t ≥ 0.",
    )),
    (GIVEN_FUNCTION, p(
        "A quadratic function assigns a parabola to its coefficients.",
        Some("Identify a, b and c in f(x) = ax² + bx + c."),
        "The sign of a decides whether the parabola opens up or down.",
        "f(x) = ax² + bx + c, a ≠ 0.",
    )),
    (FIND_VERTEX, p(
        "The vertex is the turning point of the parabola and the location of its extreme value.",
        Some("Compute h = -b / 2a, then k = f(h)."),
        "The vertex sits on the axis of symmetry.",
        "(h, k) = (-b / 2a, f(-b / 2a)).",
    )),
    (WRITE_VERTEX_FORM, p(
        "Vertex form shows the vertex and the stretch factor at a glance.",
        Some("Write f(x) = a(x - h)² + k."),
        "The graph of y = x² moved so its tip lands on (h, k).",
        "a(x - h)² + k = ax² - 2ahx + ah² + k.",
    )),
    (DESCRIBE_GRAPH, p(
        "Every parabola is the graph of y = x² after stretching, reflecting and shifting.",
        None,
        "Apply the transformations to y = x² one at a time.",
        "y = a(x - h)² + k.",
    )),
    (STATE_RANGE, p(
        "The extreme value bounds every output of the function.",
        Some("Start the range at k and extend it in the direction the parabola opens."),
        "Project the parabola onto the y-axis.",
        "a > 0 ⇒ f(x) ≥ k; a < 0 ⇒ f(x) ≤ k.",
    )),
    (DETERMINE_EXTREMUM, p(
        "An upward parabola has a lowest point and a downward one has a highest point, never both.",
        Some("Use the sign of a to name the vertex value."),
        "The vertex is the bottom of a cup or the top of a cap.",
        "f(h) = k is the minimum when a > 0 and the maximum when a < 0.",
    )),
];

static EXPONENTIAL: &[(&str, Phrases)] = &[
    (ISOLATE_EXPONENTIAL, p(
        "The exponential expression must stand alone before logarithms can be applied.",
        Some("Divide both sides by the coefficient."),
        "This rescales the curve so the target value is easier to read.",
        "k·b^x = r ⇔ b^x = r/k.",
    )),
    (TAKE_LOGARITHM, p(
        "Logarithms are the inverse of exponentials, so they bring the unknown out of the exponent.",
        Some("Apply ln to both sides."),
        "Taking logarithms straightens an exponential curve into a line.",
        "u = v ⇔ ln(u) = ln(v) for u, v > 0.",
    )),
    (TAKE_NATURAL_LOGARITHM, p(
        "The natural logarithm undoes e exactly.",
        Some("Apply ln to both sides and simplify ln(e^u) to u."),
        "ln reads off the exponent needed to reach a value.",
        "ln(e^u) = u.",
    )),
    (APPLY_LOG_POWER_RULE, p(
        "The power rule turns an exponent into an ordinary factor.",
        Some("Move the exponent in front of the logarithm."),
        "The unknown now multiplies a constant, like a line's slope.",
        "ln(aⁿ) = n·ln(a).",
    )),
    (APPLY_POWER_RULE, p(
        "The power rule turns an exponent into an ordinary factor.",
        Some("Move the exponent in front of the logarithm."),
        "The unknown now multiplies a constant, like a line's slope.",
        "ln(aⁿ) = n·ln(a).",
    )),
    (IDENTIFY_BASE_TYPE, p(
        "Whether the exponential grows or decays decides the direction of the final inequality.",
        Some("Compare the base with 1."),
        "Base above 1 rises to the right; base between 0 and 1 falls to the right.",
        "ln(b) > 0 ⇔ b > 1.",
    )),
    (COMPARE_WITH_RANGE, p(
        "An exponential with positive base only takes positive values.",
        Some("Compare the bound with the range (0, ∞)."),
        "The curve stays strictly above the x-axis.",
        "b^x > 0 for all real x.",
    )),
    (MAKE_SUBSTITUTION, p(
        "A substitution reveals a familiar quadratic hidden inside the exponential equation.",
        Some("Replace b^x with u and b^(2x) with u²."),
        "The exponential problem becomes a parabola in u.",
        "b^(2x) = (b^x)².",
    )),
    (SOLVE_QUADRATIC_EQUATION, p(
        "Solving the quadratic in u gives candidate values for b^x.",
        Some("Solve for u by factoring or the quadratic formula."),
        "Each root of the parabola in u is a candidate height of the exponential.",
        "au² + bu + c = 0.",
    )),
    (REJECT_INVALID, p(
        "An exponential is never zero or negative, so such values of u cannot occur.",
        Some("Discard every u ≤ 0."),
        "The exponential curve never dips to or below the axis.",
        "b^x > 0.",
    )),
    (BACK_SUBSTITUTE, p(
        "Each valid u gives an ordinary exponential equation.",
        Some("Replace u with b^x."),
        "Read off where the exponential reaches each valid height.",
        "u = b^x.",
    )),
    (SOLVE_EXPONENTIAL_EQUATIONS, p(
        "Logarithms finish each equation.",
        Some("Apply x = ln(u)/ln(b) for each valid u."),
        "Each solution is where the curve meets a horizontal line.",
        "b^x = u ⇔ x = ln(u)/ln(b).",
    )),
    (CONVERT_TO_EXPONENTIAL, p(
        "A logarithm answers the question 'what power gives this number?'.",
        Some("Rewrite log_b(x) = y as x = b^y."),
        "The logarithm and exponential graphs mirror each other across y = x.",
        "log_b(x) = y ⇔ x = b^y.",
    )),
    (EVALUATE, p(
        "Evaluating the power produces the final number.",
        Some("Compute the power."),
        "The solution is where the logarithm curve reaches the target height.",
        "b^y.",
    )),
];

static FINANCE: &[(&str, Phrases)] = &[
    (IDENTIFY_GIVEN, p(
        "Every growth model links an initial amount, a final amount, a rate and a time.",
        Some("List the known quantities and name the unknown."),
        "Locate the known point on the growth curve.",
        "Three of P, A, r, t determine the fourth.",
    )),
    (CHOOSE_FORMULA, p(
        "The model depends on how often growth is applied: in steps or continuously.",
        Some("Select the formula that matches the situation."),
        "Discrete compounding climbs in steps; continuous growth is smooth.",
        "A = P(1 + r/n)^(nt) or A = Pe^(rt).",
    )),
    (SUBSTITUTE_VALUES, p(
        "Substitution turns the general model into this particular situation.",
        Some("Replace each symbol with its value."),
        "This pins down one specific curve.",
        "Replace symbols by their values.",
    )),
    (CALCULATE, p(
        "Evaluating the model predicts the amount at the given time.",
        Some("Work out the growth factor, then multiply by the initial amount."),
        "Read the height of the curve at time t.",
        "A = P·F.",
    )),
    (SOLVE_FOR_UNKNOWN, p(
        "Inverse operations recover the missing quantity from the model.",
        None,
        "Find where on the curve the known values fit.",
        "Logarithms undo exponents; roots undo powers.",
    )),
    (COMPUTE_DECAY_CONSTANT, p(
        "The half-life and the continuous rate constant describe the same process.",
        Some("Divide ln 2 by the half-life."),
        "A fixed fraction disappears in every equal time interval.",
        "k = ln 2 / h.",
    )),
    (COMPUTE_REMAINING, p(
        "After each half-life, half of the amount remains.",
        Some("Evaluate A₀·e^(-kt)."),
        "The curve halves its height every half-life.",
        "A = A₀·(1/2)^(t/h) = A₀·e^(-kt).",
    )),
];

static LINEAR: &[(&str, Phrases)] = &[
    (SUBTRACT_CONSTANT, p(
        "Removing the constant term leaves only the variable term on one side.",
        Some("Subtract the constant from both sides."),
        "This shifts the line vertically.",
        "a + b = c ⇔ a = c - b.",
    )),
    (DIVIDE_COEFFICIENT, p(
        "Dividing by the coefficient leaves x alone.",
        Some("Divide both sides by the coefficient of x."),
        "The solution is where the line reaches the target height.",
        "mx = k ⇔ x = k/m for m ≠ 0.",
    )),
    (CLASSIFY_EQUATION, p(
        "When x cancels, the statement is either always true or never true.",
        Some("Decide whether the remaining numeric statement holds."),
        "The line is horizontal: it either coincides with the target or never reaches it.",
        "0·x = k has no solution for k ≠ 0 and every x for k = 0.",
    )),
    (COMPUTE_DETERMINANT, p(
        "The determinant tells whether the two lines meet at exactly one point.",
        Some("Compute a₁b₂ - a₂b₁."),
        "A zero determinant means the lines have the same slope.",
        "D = a₁b₂ - a₂b₁.",
    )),
    (APPLY_CRAMER, p(
        "Cramer's rule expresses each unknown as a ratio of determinants.",
        Some("Replace a column by the constants and divide by D."),
        "The answer is the intersection point of the two lines.",
        "x = Dx/D, y = Dy/D.",
    )),
    (CLASSIFY_SYSTEM, p(
        "With D = 0 the lines are parallel or the same line.",
        Some("Check whether the replaced determinants also vanish."),
        "Parallel lines never meet; identical lines meet everywhere.",
        "D = 0 and Dx = Dy = 0 ⇒ dependent system.",
    )),
];

fn table(family: Family) -> &'static [(&'static str, Phrases)] {
    match family {
        Family::Quadratic => QUADRATIC,
        Family::Exponential => EXPONENTIAL,
        Family::Finance => FINANCE,
        Family::Linear => LINEAR,
    }
}

pub(crate) fn lookup(family: Family, name: &str) -> Option<&'static Phrases> {
    table(family)
        .iter()
        .chain(SHARED.iter())
        .find(|(key, _)| *key == name)
        .map(|(_, phrases)| phrases)
}

fn procedural_template(step: &Step) -> String {
    match (&step.operation, &step.formula) {
        (Some(op), _) => format!("Apply the operation: {}.", op),
        (None, Some(formula)) => format!("Use the formula {}.", formula),
        (None, None) => "Carry out this step carefully and check each sign.".to_string(),
    }
}

/// Four explanation styles for `step`; unknown names get generic text.
pub(crate) fn explanations(step: &Step, family: Family) -> Explanations {
    match lookup(family, &step.name) {
        Some(phrases) => Explanations {
            conceptual: phrases.conceptual.to_string(),
            procedural: phrases
                .procedural
                .map_or_else(|| procedural_template(step), str::to_string),
            visual: phrases.visual.to_string(),
            algebraic: phrases.algebraic.to_string(),
        },
        None => Explanations {
            conceptual: "This step moves the problem closer to an explicit solution.".to_string(),
            procedural: procedural_template(step),
            visual: "Follow how the expression changes from the previous line.".to_string(),
            algebraic: step
                .algebraic_rule
                .clone()
                .unwrap_or_else(|| "Apply equivalent transformations to both sides.".to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_table_wins_then_shared() {
        assert!(lookup(Family::Quadratic, CALCULATE_DISCRIMINANT).is_some());
        assert!(lookup(Family::Linear, GIVEN_EQUATION).is_some());
        assert!(lookup(Family::Linear, CALCULATE_DISCRIMINANT).is_none());
    }

    #[test]
    fn unknown_step_falls_back() {
        let step = Step::new("Mystery step", "something").operation("double both sides");
        let e = explanations(&step, Family::Quadratic);
        assert_eq!(e.procedural, "Apply the operation: double both sides.");
        assert!(!e.conceptual.is_empty());
    }

    #[test]
    fn missing_procedural_uses_template() {
        let step = Step::new(SIMPLIFY_SQUARE_ROOT, "x").operation("√1 = 1");
        let e = explanations(&step, Family::Quadratic);
        assert_eq!(e.procedural, "Apply the operation: √1 = 1.");
    }
}
