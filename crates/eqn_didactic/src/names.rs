//! Step names. They double as lookup keys for every phrase table.

pub const GIVEN_EQUATION: &str = "Given equation";
pub const GIVEN_INEQUALITY: &str = "Given inequality";
pub const GIVEN_SYSTEM: &str = "Given system";

// quadratic formula
pub const IDENTIFY_COEFFICIENTS: &str = "Identify coefficients";
pub const CALCULATE_DISCRIMINANT: &str = "Calculate discriminant";
pub const APPLY_QUADRATIC_FORMULA: &str = "Apply quadratic formula";
pub const SIMPLIFY_SQUARE_ROOT: &str = "Simplify square root";
pub const CALCULATE_SOLUTIONS: &str = "Calculate solutions";
pub const CALCULATE_SOLUTION: &str = "Calculate solution";
pub const IDENTIFY_COMPLEX_SOLUTIONS: &str = "Identify complex solutions";

// factoring
pub const FACTOR_OUT_COMMON: &str = "Factor out common factor";
pub const FIND_FACTOR_PAIR: &str = "Find factor pair";
pub const FACTOR_QUADRATIC: &str = "Factor the quadratic";
pub const ZERO_PRODUCT: &str = "Apply zero product property";
pub const SOLVE_FOR_X: &str = "Solve for x";
pub const CANNOT_FACTOR: &str = "Cannot factor with integers";

// completing the square
pub const DIVIDE_LEADING: &str = "Divide by leading coefficient";
pub const MOVE_CONSTANT: &str = "Move constant term";
pub const COMPLETE_SQUARE: &str = "Complete the square";
pub const FACTOR_PERFECT_SQUARE: &str = "Factor perfect square";
pub const TAKE_SQUARE_ROOT: &str = "Take square root";

// projectile motion
pub const WRITE_HEIGHT_FUNCTION: &str = "Write height function";
pub const FIND_TIME_OF_MAX: &str = "Find time of maximum height";
pub const COMPUTE_MAX_HEIGHT: &str = "Compute maximum height";
pub const SET_TARGET_HEIGHT: &str = "Set height equal to target";
pub const SOLVE_FOR_TIME: &str = "Solve for time";
pub const INTERPRET_TIMES: &str = "Interpret the times";

// vertex analysis
pub const GIVEN_FUNCTION: &str = "Given function";
pub const FIND_VERTEX: &str = "Find vertex";
pub const WRITE_VERTEX_FORM: &str = "Write vertex form";
pub const DESCRIBE_GRAPH: &str = "Describe the graph";
pub const STATE_RANGE: &str = "State the range";
pub const DETERMINE_EXTREMUM: &str = "Determine maximum or minimum";

// inequalities
pub const SOLVE_RELATED_EQUATION: &str = "Solve related equation";
pub const IDENTIFY_TEST_INTERVALS: &str = "Identify test intervals";
pub const TEST_EACH_INTERVAL: &str = "Test each interval";
pub const WRITE_SOLUTION: &str = "Write solution";

// exponential
pub const ISOLATE_EXPONENTIAL: &str = "Isolate the exponential expression";
pub const TAKE_LOGARITHM: &str = "Take logarithm of both sides";
pub const TAKE_NATURAL_LOGARITHM: &str = "Take natural logarithm";
pub const APPLY_LOG_POWER_RULE: &str = "Apply logarithm power rule";
pub const IDENTIFY_BASE_TYPE: &str = "Identify base type";
pub const APPLY_POWER_RULE: &str = "Apply power rule";
pub const COMPARE_WITH_RANGE: &str = "Compare with exponential range";
pub const MAKE_SUBSTITUTION: &str = "Make substitution";
pub const SOLVE_QUADRATIC_EQUATION: &str = "Solve quadratic equation";
pub const REJECT_INVALID: &str = "Reject invalid values";
pub const BACK_SUBSTITUTE: &str = "Back-substitute";
pub const SOLVE_EXPONENTIAL_EQUATIONS: &str = "Solve exponential equations";
pub const CONVERT_TO_EXPONENTIAL: &str = "Convert to exponential form";
pub const EVALUATE: &str = "Evaluate";

// growth and finance
pub const IDENTIFY_GIVEN: &str = "Identify given information";
pub const CHOOSE_FORMULA: &str = "Choose appropriate formula";
pub const SUBSTITUTE_VALUES: &str = "Substitute values";
pub const CALCULATE: &str = "Calculate";
pub const SOLVE_FOR_UNKNOWN: &str = "Solve for the unknown";
pub const COMPUTE_DECAY_CONSTANT: &str = "Compute decay constant";
pub const COMPUTE_REMAINING: &str = "Compute remaining amount";

// linear
pub const SUBTRACT_CONSTANT: &str = "Subtract constant term";
pub const DIVIDE_COEFFICIENT: &str = "Divide by coefficient";
pub const CLASSIFY_EQUATION: &str = "Classify equation";
pub const COMPUTE_DETERMINANT: &str = "Compute determinant";
pub const APPLY_CRAMER: &str = "Apply Cramer's rule";
pub const CLASSIFY_SYSTEM: &str = "Classify system";
