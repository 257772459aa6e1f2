pub mod error;
pub mod evaluator;
pub mod function;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod syntax;
pub mod token;

use crate::interpreter::evaluator::VariableMap;
use crate::interpreter::parser::{infix_to_postfix, new_tree_from_str};
use anyhow::{Context, Result};
use log::debug;
use syntax::expression_tree::Node;

/// Converts the given infix expression into an equivalent expression tree, going through
/// its postfix form.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// use rpn_tree::interpreter::convert;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tree = convert("a - (b - c)")?;
/// assert_eq!(tree.to_infix(), "a - (b - c)");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: &str) -> Result<Node> {
    let postfix = infix_to_postfix(expression)
        .with_context(|| format!("Failed to convert '{}' to postfix", expression))?;
    debug!("Postfix of '{}' is '{}'", expression, postfix);
    let tree = new_tree_from_str(&postfix)
        .with_context(|| format!("Failed to build a tree from '{}'", postfix))?;
    Ok(tree)
}

/// Evaluates an infix expression with the given variable values.
///
/// # Examples
///
/// ```
/// use rpn_tree::interpreter::evaluate_infix;
/// use rpn_tree::interpreter::evaluator::VariableMap;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let variables = VariableMap::from([("x".to_string(), 2.0)]);
/// let value = evaluate_infix("3 * x + 1", &variables)?;
/// assert_eq!(value, 7.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate_infix(expression: &str, variables: &VariableMap) -> Result<f64> {
    let tree = convert(expression)?;
    tree.evaluate(variables)
        .with_context(|| format!("Failed to evaluate '{}'", tree.to_infix()))
}

/// Evaluates a space-separated postfix expression with the given variable values.
pub fn evaluate_postfix(expression: &str, variables: &VariableMap) -> Result<f64> {
    let tree = new_tree_from_str(expression)
        .with_context(|| format!("Failed to build a tree from '{}'", expression))?;
    tree.evaluate(variables)
        .with_context(|| format!("Failed to evaluate '{}'", tree.to_infix()))
}
