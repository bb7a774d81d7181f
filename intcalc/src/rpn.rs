use crate::error::{EvalErr, Result};
use crate::infix::Reduce;
use crate::ops::Op;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RPNToken {
    Number(i64),
    Op(Op),
}

/// An expression in postfix order. Displays as space separated tokens that
/// `evaluate_postfix` accepts back.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RPNExpr(pub Vec<RPNToken>);

impl fmt::Display for RPNToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RPNToken::Number(n) => write!(f, "{}", n),
            RPNToken::Op(op) => write!(f, "{}", op),
        }
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tokens = self.0.iter()
            .map(|t| t.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{}", tokens)
    }
}

// Collects tokens instead of applying them. 'depth' mirrors the size the
// operand stack would have so malformed input fails the same way evaluation does.
#[derive(Default)]
pub(crate) struct Emit {
    out: Vec<RPNToken>,
    depth: usize,
}

impl Reduce for Emit {
    type Output = RPNExpr;

    fn operand(&mut self, value: i64) {
        self.out.push(RPNToken::Number(value));
        self.depth += 1;
    }

    fn operator(&mut self, op: Op, pos: usize) -> Result<()> {
        if self.depth < 2 {
            return Err(EvalErr::InsufficientOperands { op: op.symbol(), pos });
        }
        self.out.push(RPNToken::Op(op));
        self.depth -= 1;
        Ok(())
    }

    fn finish(self) -> Result<RPNExpr> {
        match self.depth {
            1 => Ok(RPNExpr(self.out)),
            values => Err(EvalErr::InvalidExpression { values }),
        }
    }
}
