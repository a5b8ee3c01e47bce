use std::fmt;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents the result of evaluating an expression.
///
/// Numeric expressions produce `Number`. A bare variable evaluates to its own
/// identifier text, since there is no environment to look names up in; that
/// case produces `Identifier`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// The text of an unbound identifier.
    Identifier(String),
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// # Parameters
    /// - `position`: Token position for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a number.
    /// - `Err(RuntimeError::TypeError)`: If the value is an identifier.
    ///
    /// # Example
    /// ```
    /// use shiftexpr::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(2.5).as_number(0).unwrap(), 2.5);
    /// assert!(Value::Identifier("x".into()).as_number(0).is_err());
    /// ```
    pub fn as_number(&self, position: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Identifier(name) => {
                Err(RuntimeError::TypeError { details: format!("expected a number, found identifier '{name}'"),
                                              position })
            },
        }
    }

    /// Returns the name of the value's type for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Identifier(_) => "identifier",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => f.write_str(name),
        }
    }
}
