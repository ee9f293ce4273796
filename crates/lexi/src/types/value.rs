use std::collections::HashMap;
use std::fmt;

/// A value bag: placeholder identifier to the value supplied by the caller.
pub type Values = HashMap<String, Value>;

/// A runtime value that fills a message placeholder.
///
/// Simple placeholders use the value's display form. `select` constructs
/// compare the display form against option names, and `plural` constructs
/// coerce the value to a number with [`Value::as_plural_operand`].
///
/// # Example
///
/// ```
/// use lexi::Value;
///
/// let count: Value = 3.into();
/// let ratio: Value = 2.5.into();
/// let name: Value = "Alice".into();
///
/// assert_eq!(count.to_string(), "3");
/// assert_eq!(ratio.as_plural_operand(), Some(2.5));
/// assert_eq!(name.as_string(), Some("Alice"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string value.
    String(String),
}

impl Value {
    /// Get this value as an integer, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a float, widening integers.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Number(n) => Some(*n as f64),
            Value::String(_) => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Coerce this value to the number used for plural category selection.
    ///
    /// Strings are trimmed and parsed, and a blank string counts as `0`.
    /// Infinities are valid operands. Unparseable strings and NaN yield
    /// `None`.
    pub fn as_plural_operand(&self) -> Option<f64> {
        let n = match self {
            Value::Number(n) => *n as f64,
            Value::Float(f) => *f,
            Value::String(s) if s.trim().is_empty() => 0.0,
            Value::String(s) => s.trim().parse::<f64>().ok()?,
        };
        (!n.is_nan()).then_some(n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as i64)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::from(s.as_str())
    }
}
