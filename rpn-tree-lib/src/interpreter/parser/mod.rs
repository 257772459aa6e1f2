mod abstract_syntax_tree_generator;
mod infix_converter;

pub use abstract_syntax_tree_generator::{
    extract_variables, extract_variables_from_str, new_tree, new_tree_from_str,
    validate_variables, VariableValidation,
};
pub use infix_converter::{infix_to_postfix, infix_to_postfix_tokens};

use crate::interpreter::error::Result;
use crate::interpreter::syntax::expression_tree::Node;
use log::debug;

/// Parses the given infix expression into an equivalent expression tree,
/// which is easier to manipulate than the original string.
///
/// # Arguments
///
/// * `infix`: The expression to parse, in infix format.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// # use rpn_tree::interpreter::error::Result;
/// # fn main() -> Result<()> {
/// use rpn_tree::interpreter::parser::parse;
///
/// let tree = parse("x ^ 2")?;
/// assert_eq!(tree.to_infix(), "x ^ 2");
/// # Ok(()) }
/// ```
pub fn parse(infix: &str) -> Result<Node> {
    let postfix_tokens = infix_to_postfix_tokens(infix)?;
    debug!("Postfix tokens of '{}': {:?}", infix, postfix_tokens);
    let tree = new_tree(&postfix_tokens)?;
    Ok(tree)
}
