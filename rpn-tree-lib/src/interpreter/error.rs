use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExpressionError>;

/// Everything that can go wrong while converting, building or evaluating an expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExpressionError {
    #[error("mismatched parentheses")]
    MismatchedParentheses,
    #[error("invalid character in expression: '{0}'")]
    InvalidCharacter(char),
    #[error("invalid token: {0}")]
    InvalidToken(String),
    #[error("not enough operands for '{token}': expected {expected}, found {found}")]
    InsufficientOperands {
        token: String,
        expected: usize,
        found: usize,
    },
    #[error("invalid postfix expression: stack has {0} elements instead of 1")]
    MalformedPostfixResult(usize),
    #[error("undefined variable: {0}")]
    UndefinedVariable(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("square root of negative number")]
    NegativeSquareRoot,
    #[error("log of non-positive number")]
    NonPositiveLog,
    #[error("unknown function or wrong number of arguments: {name}/{arity}")]
    UnknownFunctionOrArity { name: String, arity: usize },
}
