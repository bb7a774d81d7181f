use crate::error::{EvalErr, Result};
use std::fmt;

/// The binary operators understood by both notations.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl Op {
    pub fn from_char(ch: char) -> Option<Op> {
        match ch {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            '*' => Some(Op::Mul),
            '/' => Some(Op::Div),
            '%' => Some(Op::Rem),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
            Op::Rem => '%',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div | Op::Rem => 2,
        }
    }

    /// Computes `lhs op rhs`.
    ///
    /// Division truncates toward zero and the remainder takes the sign of
    /// the dividend, which is what `i64` does natively: `-7 / 2 == -3`,
    /// `-7 % 2 == -1`. Results that don't fit in an `i64` (including
    /// `i64::MIN / -1`) are reported as `Overflow`.
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64> {
        let checked = match self {
            Op::Add => lhs.checked_add(rhs),
            Op::Sub => lhs.checked_sub(rhs),
            Op::Mul => lhs.checked_mul(rhs),
            Op::Div if rhs == 0 => return Err(EvalErr::DivisionByZero),
            Op::Div => lhs.checked_div(rhs),
            Op::Rem if rhs == 0 => return Err(EvalErr::ModuloByZero),
            Op::Rem => lhs.checked_rem(rhs),
        };
        checked.ok_or(EvalErr::Overflow { op: self.symbol() })
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

pub fn is_operator(ch: char) -> bool {
    Op::from_char(ch).is_some()
}

/// Binding strength of `ch`; anything that isn't an operator ranks 0 so it
/// never forces a reduction.
pub fn precedence(ch: char) -> u8 {
    Op::from_char(ch).map_or(0, Op::precedence)
}

/// Character based entry point to `Op::apply`. Evaluators only ever hand it
/// classified operators, an unknown one fails with `UnknownOperator`.
pub fn apply_op(a: i64, b: i64, op: char) -> Result<i64> {
    Op::from_char(op)
        .ok_or(EvalErr::UnknownOperator(op))?
        .apply(a, b)
}

// pop rhs then lhs off 'operands' and push the result of applying 'op'
pub(crate) fn reduce(operands: &mut Vec<i64>, op: Op, pos: usize) -> Result<()> {
    let (b, a) = match (operands.pop(), operands.pop()) {
        (Some(b), Some(a)) => (b, a),
        _ => return Err(EvalErr::InsufficientOperands { op: op.symbol(), pos }),
    };
    let result = op.apply(a, b)?;
    debug!("reduce: {} {} {} = {}", a, op, b, result);
    operands.push(result);
    Ok(())
}

///////////////////////////////////////////////////////////////////////////////
