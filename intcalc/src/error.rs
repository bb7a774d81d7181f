use thiserror::Error;

/// Every way an evaluation can fail. Positions are char offsets into the
/// input expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalErr {
    #[error("invalid character '{ch}' at position {pos}")]
    InvalidCharacter { ch: char, pos: usize },

    #[error("invalid token '{token}' at position {pos}")]
    InvalidToken { token: String, pos: usize },

    #[error("unmatched opening parenthesis at position {pos}")]
    UnmatchedOpening { pos: usize },

    #[error("unmatched closing parenthesis at position {pos}")]
    UnmatchedClosing { pos: usize },

    #[error("mismatched parentheses at position {pos}")]
    MismatchedParentheses { pos: usize },

    #[error("operator '{op}' at position {pos} needs two operands")]
    InsufficientOperands { op: char, pos: usize },

    #[error("invalid expression: {values} values left after evaluation")]
    InvalidExpression { values: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("modulo by zero")]
    ModuloByZero,

    #[error("expression must contain parentheses")]
    MissingParentheses,

    #[error("integer overflow applying '{op}'")]
    Overflow { op: char },

    #[error("integer literal out of range: {0}")]
    LiteralOutOfRange(String),

    #[error("unknown operator '{0}'")]
    UnknownOperator(char),
}

pub type Result<T> = std::result::Result<T, EvalErr>;
