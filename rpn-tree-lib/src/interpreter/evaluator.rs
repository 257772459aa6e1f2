use crate::interpreter::error::{ExpressionError, Result};
use crate::interpreter::syntax::expression_tree::Node;
use std::collections::HashMap;

/// Values of the variables an expression tree is evaluated with.
pub type VariableMap = HashMap<String, f64>;

impl Node {
    /// Computes the value of the tree, looking variables up in `variables`.
    ///
    /// Evaluation stops at the first failure. Operands and arguments are evaluated left to
    /// right.
    pub fn evaluate(&self, variables: &VariableMap) -> Result<f64> {
        match self {
            Node::Number(value) => Ok(*value),
            Node::Variable(name) => variables
                .get(name)
                .copied()
                .ok_or_else(|| ExpressionError::UndefinedVariable(name.to_string())),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => {
                let left = left_operand.evaluate(variables)?;
                let right = right_operand.evaluate(variables)?;
                operator.apply(left, right)
            }
            Node::UnaryOperation { operator, operand } => {
                Ok(operator.apply(operand.evaluate(variables)?))
            }
            Node::FunctionCall {
                function,
                arguments,
            } => {
                let values = arguments
                    .iter()
                    .map(|argument| argument.evaluate(variables))
                    .collect::<Result<Vec<f64>>>()?;
                function.apply(&values)
            }
        }
    }

    /// Same as [`Node::evaluate`], with the variables given as `(name, value)` pairs.
    /// When a name appears more than once, the last value wins.
    pub fn evaluate_pairs<S: AsRef<str>>(&self, variables: &[(S, f64)]) -> Result<f64> {
        let variables: VariableMap = variables
            .iter()
            .map(|(name, value)| (name.as_ref().to_string(), *value))
            .collect();
        self.evaluate(&variables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::parser::new_tree_from_str;
    use parameterized_macro::parameterized;

    fn evaluate(postfix: &str, variables: &[(&str, f64)]) -> Result<f64> {
        new_tree_from_str(postfix).unwrap().evaluate_pairs(variables)
    }

    #[test]
    fn constant_expression_evaluates() {
        assert_eq!(evaluate("3 4 +", &[]), Ok(7.0));
    }

    #[test]
    fn variables_are_looked_up() {
        assert_eq!(evaluate("a b +", &[("a", 2.0), ("b", 3.0)]), Ok(5.0));
    }

    #[test]
    fn missing_variable_should_return_err() {
        assert_eq!(
            evaluate("a b +", &[("a", 2.0)]),
            Err(ExpressionError::UndefinedVariable("b".into()))
        );
    }

    #[test]
    fn power_then_product() {
        let result = evaluate("x y ^ z *", &[("x", 2.0), ("y", 3.0), ("z", 4.0)]);

        assert_eq!(result, Ok(32.0));
    }

    #[test]
    fn later_pair_overrides_earlier_pair() {
        assert_eq!(evaluate("a", &[("a", 1.0), ("a", 9.0)]), Ok(9.0));
    }

    #[test]
    fn evaluate_accepts_a_map() {
        let tree = new_tree_from_str("rate ~ 2 ^").unwrap();
        let variables = VariableMap::from([("rate".to_string(), 3.0)]);

        assert_eq!(tree.evaluate(&variables), Ok(9.0));
    }

    #[test]
    fn tree_can_be_evaluated_repeatedly() {
        let tree = new_tree_from_str("a b c d - * e / +").unwrap();

        let first =
            tree.evaluate_pairs(&[("a", 2.0), ("b", 3.0), ("c", 1.0), ("d", 4.0), ("e", 5.0)]);
        let second =
            tree.evaluate_pairs(&[("a", 0.0), ("b", 1.0), ("c", 10.0), ("d", 0.0), ("e", 2.0)]);

        assert_eq!(first, Ok(2.0 + 3.0 * (1.0 - 4.0) / 5.0));
        assert_eq!(second, Ok(5.0));
    }

    #[test]
    fn shared_tree_evaluates_from_several_threads() {
        let tree = new_tree_from_str("x 2 ^ 1 +").unwrap();

        let results: Vec<Result<f64>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|x| {
                    let tree = &tree;
                    scope.spawn(move || tree.evaluate_pairs(&[("x", x as f64)]))
                })
                .collect();
            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });

        assert_eq!(results, [Ok(1.0), Ok(2.0), Ok(5.0), Ok(10.0)]);
    }

    #[parameterized(
        postfix = { "5 0 /", "-1 sqrt", "0 log", "-2 log", "1 tan", "2 max" },
        expected = {
            ExpressionError::DivisionByZero,
            ExpressionError::NegativeSquareRoot,
            ExpressionError::NonPositiveLog,
            ExpressionError::NonPositiveLog,
            ExpressionError::UnknownFunctionOrArity { name: "tan".into(), arity: 1 },
            ExpressionError::UnknownFunctionOrArity { name: "max".into(), arity: 1 }
        }
    )]
    fn domain_errors_should_return_err(postfix: &str, expected: ExpressionError) {
        let result = new_tree_from_str(postfix).and_then(|tree| tree.evaluate(&VariableMap::new()));

        assert_eq!(result, Err(expected));
    }

    #[test]
    fn left_operand_fails_first() {
        let result = evaluate("a 0 / b +", &[]);

        assert_eq!(result, Err(ExpressionError::UndefinedVariable("a".into())));
    }

    #[test]
    fn negative_base_with_fractional_exponent_is_nan_not_err() {
        let result = evaluate("-8 0.5 ^", &[]).unwrap();

        assert!(result.is_nan());
    }

    #[test]
    fn functions_evaluate_their_argument() {
        let result = evaluate("x sin 2 ^ x cos 2 ^ +", &[("x", 0.7)]).unwrap();

        assert!((result - 1.0).abs() < 1e-12);
    }
}
