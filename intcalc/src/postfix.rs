use crate::error::{EvalErr, Result};
use crate::ops::{self, Op};
use lexers::WordTokenizer;
use std::str::FromStr;

// -?[0-9]+ or +?[0-9]+
fn is_integer(word: &str) -> bool {
    let digits = word.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(word);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Evaluates whitespace separated postfix (RPN) notation, eg: `4 2 + 3 *`.
///
/// Integer literals may carry a sign (`-3`, `+3`), a lone `-` is always the
/// operator. Each operator pops its right operand first.
pub fn evaluate_postfix(expression: &str) -> Result<i64> {
    let mut operands = Vec::new();

    for (pos, word) in WordTokenizer::from_str(expression) {
        let mut chars = word.chars();
        let single = match (chars.next(), chars.next()) {
            (Some(ch), None) => Op::from_char(ch),
            _ => None,
        };
        if let Some(op) = single {
            ops::reduce(&mut operands, op, pos)?;
        } else if is_integer(&word) {
            let value = i64::from_str(&word)
                .map_err(|_| EvalErr::LiteralOutOfRange(word.clone()))?;
            operands.push(value);
        } else {
            return Err(EvalErr::InvalidToken { token: word, pos });
        }
    }
    match (operands.len(), operands.pop()) {
        (1, Some(value)) => Ok(value),
        (values, _) => Err(EvalErr::InvalidExpression { values }),
    }
}
