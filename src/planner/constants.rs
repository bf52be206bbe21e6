/// Acceptable distance from a meal's calorie target before the portion
/// optimizer stops adjusting.
pub const CALORIE_TOLERANCE_KCAL: f64 = 50.0;

/// Maximum adjustment passes per meal. The optimizer is a heuristic, not a
/// solver; whatever it has after this many passes is the result.
pub const MAX_ADJUSTMENT_ITERATIONS: usize = 10;

/// Multiplicative step applied to the primary item when under target.
pub const PORTION_STEP_UP: f64 = 1.1;

/// Multiplicative step applied to the primary item when over target.
pub const PORTION_STEP_DOWN: f64 = 0.9;

/// Floor for the adjusted amount, in the food's native unit. Portions never
/// shrink below this even when the meal overshoots its target.
pub const MIN_PORTION_AMOUNT: f64 = 10.0;

/// Minimum Jaro-Winkler similarity for fuzzy food-name matching in prompts.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;
