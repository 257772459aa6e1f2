use crate::interpreter::error::{ExpressionError, Result};
use crate::interpreter::function::Function;
use crate::interpreter::operator::Operator;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of a postfix expression
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Variable(String),
    Operator(Operator),
    Function(Function),
}

impl str::FromStr for Token {
    type Err = ExpressionError;

    /// Classifies a single postfix token. Shapes are tried in a fixed order:
    /// number, variable, operator and finally function name.
    fn from_str(input: &str) -> Result<Token> {
        if is_number(input) {
            let value = input
                .parse::<f64>()
                .map_err(|_| ExpressionError::InvalidToken(input.to_string()))?;
            Ok(Token::Number(value))
        } else if is_variable(input) {
            Ok(Token::Variable(input.to_string()))
        } else if let Ok(operator) = input.parse::<Operator>() {
            Ok(Token::Operator(operator))
        } else if let Ok(function) = input.parse::<Function>() {
            Ok(Token::Function(function))
        } else {
            Err(ExpressionError::InvalidToken(input.to_string()))
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Variable(name) => write!(f, "{}", name),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::Function(function) => write!(f, "{}", function),
        }
    }
}

/// An optional leading `-` followed by digits with at most one decimal point.
/// At least one digit is required, so a lone `-` or `.` is not a number.
pub fn is_number(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() {
        return false;
    }

    let mut has_decimal = false;
    let mut has_digit = false;
    for c in digits.chars() {
        match c {
            '.' if has_decimal => return false,
            '.' => has_decimal = true,
            c if c.is_ascii_digit() => has_digit = true,
            _ => return false,
        }
    }
    has_digit
}

/// A letter or underscore followed by letters, digits or underscores.
/// Names of built-in functions are reserved and never count as variables.
pub fn is_variable(text: &str) -> bool {
    let mut chars = text.chars();
    let starts_like_identifier = match chars.next() {
        Some(first) => first.is_ascii_alphabetic() || first == '_',
        None => false,
    };

    starts_like_identifier
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !is_function(text)
}

pub fn is_function(text: &str) -> bool {
    text.parse::<Function>().is_ok()
}

/// Characters that make up a single operand (number or name) in an infix expression.
pub(crate) fn is_operand_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
    use parameterized_macro::parameterized;

    #[parameterized(text = { "3", "-3", "3.25", "-0.5", ".5", "7." })]
    fn number_shaped_text_is_number(text: &str) {
        assert!(is_number(text));
    }

    #[parameterized(text = { "", "-", ".", "-.", "1.2.3", "1e5", "--1", "x1" })]
    fn other_text_is_not_number(text: &str) {
        assert!(!is_number(text));
    }

    #[parameterized(text = { "x", "_tmp", "rate_2", "Alpha" })]
    fn identifier_shaped_text_is_variable(text: &str) {
        assert!(is_variable(text));
    }

    #[parameterized(text = { "", "2x", "a-b", "sqrt", "max" })]
    fn other_text_is_not_variable(text: &str) {
        assert!(!is_variable(text));
    }

    #[test]
    fn lone_dash_is_subtraction_not_number() {
        let token: Token = "-".parse().unwrap();
        assert_eq!(token, Token::Operator(Operator::Binary(BinaryOperator::Subtract)));
    }

    #[test]
    fn negative_literal_is_number() {
        let token: Token = "-4.5".parse().unwrap();
        assert_eq!(token, Token::Number(-4.5));
    }

    #[test]
    fn tilde_is_unary_negation() {
        let token: Token = "~".parse().unwrap();
        assert_eq!(token, Token::Operator(Operator::Unary(UnaryOperator::Negative)));
    }

    #[test]
    fn function_name_is_function() {
        let token: Token = "sqrt".parse().unwrap();
        assert_eq!(token, Token::Function(Function::Sqrt));
    }

    #[parameterized(text = { "%", "(", "a+b", "$" })]
    fn unrecognised_text_is_invalid_token(text: &str) {
        let error = text.parse::<Token>().unwrap_err();
        assert_eq!(error, ExpressionError::InvalidToken(text.to_string()));
    }
}
