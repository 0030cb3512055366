use crate::value::Value;

/// Tolerance for floating-point comparison.
pub const EPSILON: f64 = 1e-10;

/// How a pair of values gets compared. Selected per pair, independent of
/// the assertion kind that asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    NumericExact,
    NumericTolerant,
    StringExact,
    GenericFallback,
}

/// Picks the comparison strategy for a pair. Total; the precedence order
/// matters because the categories overlap.
pub fn classify(a: &Value, b: &Value) -> Strategy {
    if compare_as_numeric(a, b) {
        Strategy::NumericExact
    } else if compare_as_doubles(a, b) {
        Strategy::NumericTolerant
    } else if compare_as_strings(a, b) {
        Strategy::StringExact
    } else {
        Strategy::GenericFallback
    }
}

// Two numeric strings stay on the string path even though both parse.
fn compare_as_numeric(a: &Value, b: &Value) -> bool {
    a.is_numeric()
        && b.is_numeric()
        && !(a.is_float() || b.is_float())
        && !(a.is_str() && b.is_str())
}

fn compare_as_doubles(a: &Value, b: &Value) -> bool {
    (a.is_float() || b.is_float()) && a.is_numeric() && b.is_numeric()
}

fn compare_as_strings(a: &Value, b: &Value) -> bool {
    a.is_str() || b.is_str()
}

/// Exact numeric equality. Infinities compare equal to each other
/// regardless of sign; NaN never equals anything.
pub fn numeric_equal(expected: &Value, actual: &Value) -> bool {
    if actual.is_infinite() && expected.is_infinite() {
        return true;
    }
    if actual.is_infinite() != expected.is_infinite() {
        return false;
    }
    if actual.is_nan() || expected.is_nan() {
        return false;
    }
    // Two ints compare exactly; coercing through f64 would collapse
    // values past 2^53.
    if let (Value::Int(x), Value::Int(y)) = (expected, actual) {
        return x == y;
    }
    match (expected.as_f64(), actual.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Tolerant float equality. No infinity or NaN guards on this path.
pub fn double_equal(expected: &Value, actual: &Value) -> bool {
    match (expected.as_f64(), actual.as_f64()) {
        (Some(x), Some(y)) => (x - y).abs() < EPSILON,
        _ => false,
    }
}

/// Strict equality: same kind, same content, no coercion.
pub fn string_equal(expected: &Value, actual: &Value) -> bool {
    expected == actual
}

/// Coercive equality for pairs no other strategy claims: numbers compare
/// numerically, booleans compare truthiness, Null equals the empty
/// equivalents, opaque values equal only their own token.
pub fn loose_equals(a: &Value, b: &Value) -> bool {
    use Value::*;
    match (a, b) {
        (Null, Null) => true,
        (Bool(x), _) => *x == b.truthy(),
        (_, Bool(y)) => a.truthy() == *y,
        (Null, Int(n)) | (Int(n), Null) => *n == 0,
        (Null, Float(n)) | (Float(n), Null) => *n == 0.0,
        (Null, Str(s)) | (Str(s), Null) => s.is_empty(),
        (Null, Other(_)) | (Other(_), Null) => false,
        (Str(x), Str(y)) => {
            if a.is_numeric() && b.is_numeric() {
                a.as_f64() == b.as_f64()
            } else {
                x == y
            }
        }
        (Other(x), Other(y)) => x == y,
        (Other(_), _) | (_, Other(_)) => false,
        (Int(x), Int(y)) => x == y,
        _ => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
    }
}

/// Equality check behind Equals/NotEquals: classify, then run the chosen
/// comparator.
// TODO: structural comparator for composite values; they currently fall
// through to the generic fallback.
pub fn check_equals(expected: &Value, actual: &Value) -> bool {
    match classify(expected, actual) {
        Strategy::NumericExact => numeric_equal(expected, actual),
        Strategy::NumericTolerant => double_equal(expected, actual),
        Strategy::StringExact => string_equal(expected, actual),
        Strategy::GenericFallback => loose_equals(expected, actual),
    }
}

/// Identity check behind Same/NotSame. Not routed through the classifier:
/// two finite non-NaN floats compare with the tolerant rule, everything
/// else requires strict type-and-value identity.
pub fn check_identical(expected: &Value, actual: &Value) -> bool {
    let float_cmp = expected.is_float()
        && actual.is_float()
        && !expected.is_infinite()
        && !actual.is_infinite()
        && !expected.is_nan()
        && !actual.is_nan();
    if float_cmp {
        double_equal(expected, actual)
    } else {
        expected == actual
    }
}
