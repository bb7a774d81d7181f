//! Integer arithmetic over infix and postfix (RPN) expressions.
//!
//! ```
//! assert_eq!(intcalc::evaluate_infix("(4+2)*3"), Ok(18));
//! assert_eq!(intcalc::evaluate_postfix("4 2 + 3 *"), Ok(18));
//! assert_eq!(intcalc::to_postfix("5+(3*7)").unwrap().to_string(), "5 3 7 * +");
//! ```

// Build with the 'debug' feature to trace reductions on stderr
macro_rules! debug {
    ($($args:tt)*) => (if cfg!(feature="debug") { eprintln!($($args)*); })
}

mod error;
mod infix;
mod ops;
mod parens;
mod postfix;
mod rpn;

pub use error::{EvalErr, Result};
pub use infix::InfixEvaluator;
pub use ops::{apply_op, is_operator, precedence, Op};
pub use parens::{has_parentheses, validate_parentheses};
pub use postfix::evaluate_postfix;
pub use rpn::{RPNExpr, RPNToken};

/// Evaluates an infix expression with the default (lenient) evaluator.
pub fn evaluate_infix(expression: &str) -> Result<i64> {
    InfixEvaluator::new().eval(expression)
}

/// Converts an infix expression to postfix with the default evaluator.
pub fn to_postfix(expression: &str) -> Result<RPNExpr> {
    InfixEvaluator::new().to_postfix(expression)
}

#[cfg(test)]
mod infix_test;
