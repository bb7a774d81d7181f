use crate::error::{EvalErr, Result};

/// Checks that parentheses in `expression` are balanced and properly nested.
///
/// A `)` with nothing open reports its own position, a `(` left open at the
/// end reports the position of the innermost one.
pub fn validate_parentheses(expression: &str) -> Result<()> {
    let mut open = Vec::new();
    for (pos, ch) in expression.chars().enumerate() {
        match ch {
            '(' => open.push(pos),
            ')' => {
                if open.pop().is_none() {
                    return Err(EvalErr::UnmatchedClosing { pos });
                }
            }
            _ => (),
        }
    }
    match open.pop() {
        Some(pos) => Err(EvalErr::UnmatchedOpening { pos }),
        None => Ok(()),
    }
}

/// True when both an opening and a closing parenthesis are present.
pub fn has_parentheses(expression: &str) -> bool {
    expression.contains('(') && expression.contains(')')
}

///////////////////////////////////////////////////////////////////////////////
