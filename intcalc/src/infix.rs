use crate::error::{EvalErr, Result};
use crate::ops::{self, Op};
use crate::parens;
use crate::rpn::{Emit, RPNExpr};
use lexers::{ArithToken, ArithTokenizer};
use std::str::FromStr;

// What the operator stack holds while scanning
#[derive(Clone, Copy, PartialEq, Debug)]
enum Pending {
    OParen,
    Op(Op),
}

impl Pending {
    // '(' ranks below every operator so it is never reduced implicitly
    fn precedence(self) -> u8 {
        match self {
            Pending::OParen => 0,
            Pending::Op(op) => op.precedence(),
        }
    }
}

/// Receives the output of a shunting-yard scan: operands as they're read and
/// operators in the order they must be applied.
pub(crate) trait Reduce {
    type Output;
    fn operand(&mut self, value: i64);
    fn operator(&mut self, op: Op, pos: usize) -> Result<()>;
    fn finish(self) -> Result<Self::Output>;
}

// Applies operators right away, ends up holding the value of the expression
#[derive(Default)]
pub(crate) struct Evaluate(Vec<i64>);

impl Reduce for Evaluate {
    type Output = i64;

    fn operand(&mut self, value: i64) {
        self.0.push(value);
    }

    fn operator(&mut self, op: Op, pos: usize) -> Result<()> {
        ops::reduce(&mut self.0, op, pos)
    }

    fn finish(mut self) -> Result<i64> {
        match (self.0.len(), self.0.pop()) {
            (1, Some(value)) => Ok(value),
            (values, _) => Err(EvalErr::InvalidExpression { values }),
        }
    }
}

fn parse_literal(digits: String) -> Result<i64> {
    i64::from_str(&digits).map_err(|_| EvalErr::LiteralOutOfRange(digits))
}

/// Single left to right shunting-yard pass over `expression`, feeding `sink`.
pub(crate) fn shunting<R: Reduce>(expression: &str, mut sink: R) -> Result<R::Output> {
    let mut stack: Vec<(Pending, usize)> = Vec::new();

    for (pos, token) in ArithTokenizer::from_str(expression) {
        match token {
            ArithToken::Integer(digits) => sink.operand(parse_literal(digits)?),
            ArithToken::Symbol('(') => stack.push((Pending::OParen, pos)),
            ArithToken::Symbol(')') => loop {
                match stack.pop() {
                    Some((Pending::OParen, _)) => break,
                    Some((Pending::Op(op), at)) => sink.operator(op, at)?,
                    None => return Err(EvalErr::MismatchedParentheses { pos }),
                }
            },
            ArithToken::Symbol(ch) | ArithToken::Unknown(ch) => {
                let op = Op::from_char(ch).ok_or(EvalErr::InvalidCharacter { ch, pos })?;
                // equal precedence reduces first: all operators are left associative
                while let Some(&(top, at)) = stack.last() {
                    match top {
                        Pending::Op(prev) if top.precedence() >= op.precedence() => {
                            stack.pop();
                            sink.operator(prev, at)?;
                        }
                        _ => break,
                    }
                }
                stack.push((Pending::Op(op), pos));
            }
        }
    }
    while let Some((top, at)) = stack.pop() {
        match top {
            Pending::OParen => return Err(EvalErr::MismatchedParentheses { pos: at }),
            Pending::Op(op) => sink.operator(op, at)?,
        }
    }
    sink.finish()
}

/// Infix evaluator configuration.
///
/// With `require_parentheses` set, expressions lacking a `(`..`)` pair are
/// rejected with `MissingParentheses` before anything else is looked at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InfixEvaluator {
    pub require_parentheses: bool,
}

impl InfixEvaluator {
    pub fn new() -> Self {
        InfixEvaluator { require_parentheses: false }
    }

    pub fn strict() -> Self {
        InfixEvaluator { require_parentheses: true }
    }

    fn precheck(&self, expression: &str) -> Result<()> {
        if self.require_parentheses && !parens::has_parentheses(expression) {
            return Err(EvalErr::MissingParentheses);
        }
        parens::validate_parentheses(expression)
    }

    pub fn eval(&self, expression: &str) -> Result<i64> {
        self.precheck(expression)?;
        shunting(expression, Evaluate::default())
    }

    /// Rewrites `expression` in postfix order without evaluating it, so
    /// arithmetic faults are left for whoever evaluates the result.
    pub fn to_postfix(&self, expression: &str) -> Result<RPNExpr> {
        self.precheck(expression)?;
        shunting(expression, Emit::default())
    }
}
