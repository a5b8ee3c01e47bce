use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, eval},
        value::core::Value,
    },
};

/// Evaluates a binary operation.
///
/// The left operand is evaluated before the right one, and both complete
/// before they are combined.
///
/// # Parameters
/// - `left`: Left operand expression.
/// - `op`: The operator.
/// - `right`: Right operand expression.
/// - `position`: Position of the operator token for error reporting.
pub fn eval_binary_op(left: &Expr,
                      op: BinaryOperator,
                      right: &Expr,
                      position: usize)
                      -> EvalResult<Value> {
    let left = eval(left)?;
    let right = eval(right)?;

    eval_scalar_op(op, &left, &right, position)
}

/// Evaluates a scalar arithmetic operation.
///
/// Both operands must be numbers; an identifier operand is a type error.
/// Division is true floating-point division, and a zero divisor is rejected
/// instead of producing an infinity or NaN.
///
/// # Example
/// ```
/// use shiftexpr::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_scalar_op, value::core::Value},
/// };
///
/// let x = Value::Number(1.5);
/// let y = Value::Number(2.0);
///
/// let result = eval_scalar_op(BinaryOperator::Mul, &x, &y, 1).unwrap();
/// assert_eq!(result, Value::Number(3.0));
/// assert!(eval_scalar_op(BinaryOperator::Div, &x, &Value::Number(0.0), 1).is_err());
/// ```
pub fn eval_scalar_op(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      position: usize)
                      -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let (Value::Number(a), Value::Number(b)) = (left, right) else {
        return Err(RuntimeError::TypeError { details: format!("cannot apply '{op}' to {} and {}",
                                                              left.type_name(),
                                                              right.type_name()),
                                             position });
    };

    Ok(Value::Number(match op {
                         Add => a + b,
                         Sub => a - b,
                         Mul => a * b,
                         Div => {
                             if *b == 0.0 {
                                 return Err(RuntimeError::DivisionByZero { position });
                             }
                             a / b
                         },
                     }))
}
