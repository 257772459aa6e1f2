use crate::interpreter::error::{ExpressionError, Result};
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

/// An unary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Negative,
}

/// Any operator that can appear as a token in a postfix expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Binary(BinaryOperator),
    Unary(UnaryOperator),
}

/// Binding strength of an operator when an expression tree is written back out in infix form.
pub trait Precedence {
    fn precedence(&self) -> u8;

    fn precedence_lt(&self, other: &impl Precedence) -> bool {
        self.precedence().lt(&other.precedence())
    }

    fn precedence_le(&self, other: &impl Precedence) -> bool {
        self.precedence().le(&other.precedence())
    }
}

impl BinaryOperator {
    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
            BinaryOperator::Power => '^',
        }
    }

    /// Applies the operator to already evaluated operands.
    ///
    /// Division fails only when the divisor is exactly zero. Powers that have no real result
    /// (such as a negative base with a fractional exponent) evaluate to NaN.
    pub fn apply(&self, left: f64, right: f64) -> Result<f64> {
        match self {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Subtract => Ok(left - right),
            BinaryOperator::Multiply => Ok(left * right),
            BinaryOperator::Divide => {
                if right == 0.0 {
                    return Err(ExpressionError::DivisionByZero);
                }
                Ok(left / right)
            }
            BinaryOperator::Power => Ok(left.powf(right)),
        }
    }
}

impl UnaryOperator {
    /// The symbol used when writing the operator in infix form.
    pub fn symbol(&self) -> char {
        match self {
            UnaryOperator::Negative => '-',
        }
    }

    /// The marker used for the operator in postfix token streams, where `-` is already taken
    /// by subtraction.
    pub fn postfix_symbol(&self) -> char {
        match self {
            UnaryOperator::Negative => '~',
        }
    }

    pub fn apply(&self, operand: f64) -> f64 {
        match self {
            UnaryOperator::Negative => -operand,
        }
    }
}

impl Precedence for BinaryOperator {
    fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
            BinaryOperator::Power => 4,
        }
    }
}

impl Precedence for UnaryOperator {
    fn precedence(&self) -> u8 {
        match self {
            UnaryOperator::Negative => 3,
        }
    }
}

impl Precedence for Operator {
    fn precedence(&self) -> u8 {
        match self {
            Operator::Binary(operator) => operator.precedence(),
            Operator::Unary(operator) => operator.precedence(),
        }
    }
}

impl FromStr for Operator {
    type Err = ExpressionError;

    fn from_str(input: &str) -> Result<Self> {
        match input {
            "+" => Ok(Operator::Binary(BinaryOperator::Add)),
            "-" => Ok(Operator::Binary(BinaryOperator::Subtract)),
            "*" => Ok(Operator::Binary(BinaryOperator::Multiply)),
            "/" => Ok(Operator::Binary(BinaryOperator::Divide)),
            "^" => Ok(Operator::Binary(BinaryOperator::Power)),
            "~" => Ok(Operator::Unary(UnaryOperator::Negative)),
            other => Err(ExpressionError::InvalidToken(other.to_string())),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Binary(operator) => write!(f, "{}", operator),
            Operator::Unary(operator) => write!(f, "{}", operator.postfix_symbol()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn multiplication_and_division_share_precedence() {
        let equal1 = BinaryOperator::Multiply;
        let equal2 = BinaryOperator::Divide;
        assert_eq!(equal1.precedence(), equal2.precedence())
    }

    #[test]
    fn operator_lt_correspond_with_precedence() {
        let greater = BinaryOperator::Power;
        let lesser = BinaryOperator::Subtract;
        assert!(lesser.precedence_lt(&greater))
    }

    #[test]
    fn operator_le_correspond_with_precedence() {
        let equal1 = BinaryOperator::Add;
        let equal2 = BinaryOperator::Subtract;
        assert!(equal1.precedence_le(&equal2))
    }

    #[test]
    fn negation_binds_tighter_than_multiplication_but_looser_than_power() {
        let negative = UnaryOperator::Negative;
        assert!(BinaryOperator::Multiply.precedence_lt(&negative));
        assert!(negative.precedence_lt(&BinaryOperator::Power));
    }

    #[test]
    fn division_by_exact_zero_fails() {
        let result = BinaryOperator::Divide.apply(5.0, 0.0);
        assert_eq!(result, Err(ExpressionError::DivisionByZero));
    }

    #[test]
    fn division_by_tiny_divisor_succeeds() {
        let result = BinaryOperator::Divide.apply(1.0, 1e-300).unwrap();
        assert!(result.is_finite());
    }

    #[test]
    fn negative_base_with_fractional_exponent_is_nan() {
        let result = BinaryOperator::Power.apply(-8.0, 0.5).unwrap();
        assert!(result.is_nan());
    }

    #[test]
    fn operators_parse_from_postfix_symbols() {
        assert_eq!(
            "^".parse::<Operator>(),
            Ok(Operator::Binary(BinaryOperator::Power))
        );
        assert_eq!(
            "~".parse::<Operator>(),
            Ok(Operator::Unary(UnaryOperator::Negative))
        );
        assert_eq!(
            "%".parse::<Operator>(),
            Err(ExpressionError::InvalidToken("%".into()))
        );
    }
}
