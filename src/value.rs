use serde::ser::{Serialize, Serializer};

/// A dynamically-typed operand as seen by the assertion engine.
///
/// The variant set is closed: composite values from the host arrive as
/// `Other` with an opaque identity token and are only ever compared under
/// the generic fallback. The derived `PartialEq` is the strict-identity
/// relation: same variant, same content, IEEE semantics on floats.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Null,
    Other(String),
}

impl Value {
    /// Numeric-looking: an Int, a Float, or a string whose full content
    /// parses as a decimal number.
    pub fn is_numeric(&self) -> bool {
        match self {
            Value::Int(_) | Value::Float(_) => true,
            Value::Str(s) => str_is_numeric(s),
            _ => false,
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Numeric coercion used by the comparators. None for anything that is
    /// not numeric-looking.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            Value::Str(s) if str_is_numeric(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Value::Float(n) if n.is_infinite())
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Float(n) if n.is_nan())
    }

    /// Loose boolean interpretation, used only by the generic fallback.
    /// The string "0" counts as false.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(n) => *n != 0.0,
            Value::Str(s) => !s.is_empty() && s != "0",
            Value::Null => false,
            Value::Other(_) => true,
        }
    }
}

// Plain decimal forms only; the word forms the float parser accepts
// ("inf", "NaN") are not numeric-looking.
fn str_is_numeric(s: &str) -> bool {
    let t = s.trim();
    if t.is_empty() {
        return false;
    }
    if !t
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return false;
    }
    t.parse::<f64>().is_ok()
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Null => serializer.serialize_unit(),
            Value::Other(tag) => serializer.serialize_str(tag),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}
