use crate::interpreter::error::Result;
use crate::interpreter::token::Token;

/// Splits a space-separated postfix expression into its raw tokens.
///
/// Any run of whitespace separates two tokens; leading and trailing whitespace is ignored,
/// so the trailing space left by the infix converter is harmless.
pub fn tokenize(expression: &str) -> Vec<String> {
    expression.split_whitespace().map(str::to_string).collect()
}

/// Splits a postfix expression and classifies each token as it is reached.
pub fn classify(expression: &str) -> impl Iterator<Item = Result<Token>> + '_ {
    expression.split_whitespace().map(str::parse::<Token>)
}
