use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{evaluator::binary::eval_binary_op, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression and returns the resulting value.
///
/// This is the main entry point for expression evaluation. Leaves produce a
/// value directly; a binary operation evaluates its left child, then its right
/// child, then combines them. The tree is only read, so evaluating it again
/// yields the same result.
///
/// # Errors
/// Returns the first `RuntimeError` raised anywhere in the tree; no partial
/// result is produced.
///
/// # Example
/// ```
/// use shiftexpr::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{evaluator::core::eval, value::core::Value},
/// };
///
/// let expr = Expr::BinaryOp { left:     Box::new(Expr::Number { value: 6.0, position: 0 }),
///                             op:       BinaryOperator::Div,
///                             right:    Box::new(Expr::Number { value: 4.0, position: 2 }),
///                             position: 1, };
/// assert_eq!(eval(&expr).unwrap(), Value::Number(1.5));
/// ```
pub fn eval(expr: &Expr) -> EvalResult<Value> {
    match expr {
        Expr::Number { value, .. } => Ok(Value::Number(*value)),
        Expr::Variable { name, .. } => Ok(Value::Identifier(name.clone())),
        Expr::BinaryOp { left,
                         op,
                         right,
                         position, } => eval_binary_op(left, *op, right, *position),
    }
}

/// Evaluates an expression that must produce a number.
///
/// # Errors
/// Propagates evaluation errors, and returns `RuntimeError::TypeError` when
/// the expression evaluates to an identifier.
pub fn eval_number(expr: &Expr) -> EvalResult<f64> {
    eval(expr)?.as_number(expr.position())
}

impl Expr {
    /// Evaluates this expression. See [`eval`].
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised while walking the tree.
    pub fn eval(&self) -> EvalResult<Value> {
        eval(self)
    }
}
