use crate::interpreter::error::{ExpressionError, Result};
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

/// A built-in function that may appear in a postfix expression.
///
/// Every name here is recognised when building a tree, but only the single-argument
/// functions `sin`, `cos`, `sqrt`, `log`, `exp` and `abs` can be evaluated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Log,
    Exp,
    Abs,
    Min,
    Max,
}

pub static FUNCTIONS: [Function; 9] = [
    Function::Sin,
    Function::Cos,
    Function::Tan,
    Function::Sqrt,
    Function::Log,
    Function::Exp,
    Function::Abs,
    Function::Min,
    Function::Max,
];

impl Function {
    pub fn name(&self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Sqrt => "sqrt",
            Function::Log => "log",
            Function::Exp => "exp",
            Function::Abs => "abs",
            Function::Min => "min",
            Function::Max => "max",
        }
    }

    /// Number of arguments the function takes off the operand stack when a tree is built.
    pub fn arity(&self) -> usize {
        1
    }

    /// Applies the function to its already evaluated arguments.
    pub fn apply(&self, arguments: &[f64]) -> Result<f64> {
        match (self, arguments) {
            (Function::Sin, [x]) => Ok(x.sin()),
            (Function::Cos, [x]) => Ok(x.cos()),
            (Function::Exp, [x]) => Ok(x.exp()),
            (Function::Abs, [x]) => Ok(x.abs()),
            (Function::Sqrt, [x]) => {
                if *x < 0.0 {
                    return Err(ExpressionError::NegativeSquareRoot);
                }
                Ok(x.sqrt())
            }
            (Function::Log, [x]) => {
                if *x <= 0.0 {
                    return Err(ExpressionError::NonPositiveLog);
                }
                Ok(x.ln())
            }
            _ => Err(ExpressionError::UnknownFunctionOrArity {
                name: self.name().to_string(),
                arity: arguments.len(),
            }),
        }
    }
}

impl FromStr for Function {
    type Err = ExpressionError;

    fn from_str(input: &str) -> Result<Self> {
        FUNCTIONS
            .iter()
            .find(|function| function.name() == input)
            .copied()
            .ok_or_else(|| ExpressionError::InvalidToken(input.to_string()))
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
