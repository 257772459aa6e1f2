use crate::interpreter::error::{ExpressionError, Result};
use crate::interpreter::lexer::{classify, tokenize};
use crate::interpreter::operator::Operator;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::{is_variable, Token};
use itertools::Itertools;
use log::{debug, warn};
use std::collections::HashSet;

/// Generates an expression tree based off of the given tokens.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens, ordered in postfix notation, to convert to an expression tree.
///
/// returns: The root of the generated expression tree.
pub fn new_tree<S: AsRef<str>>(postfix_tokens: &[S]) -> Result<Node> {
    build_tree(postfix_tokens.iter().map(|token| token.as_ref().parse::<Token>()))
}

/// Splits a space-separated postfix expression and generates its expression tree.
pub fn new_tree_from_str(postfix_expression: &str) -> Result<Node> {
    build_tree(classify(postfix_expression))
}

/// Each token is classified only once every token before it has been placed in the tree.
fn build_tree(tokens: impl IntoIterator<Item = Result<Token>>) -> Result<Node> {
    let mut operands: Vec<Node> = Vec::new();

    for token in tokens {
        match token? {
            Token::Number(value) => operands.push(Node::new_number(value)),
            Token::Variable(name) => operands.push(Node::new_variable(name)),
            token @ Token::Operator(Operator::Unary(operator)) => {
                let [operand] = take_fixed_operands(&mut operands, &token)?;
                operands.push(Node::new_unary_operation(operator, operand));
            }
            token @ Token::Operator(Operator::Binary(operator)) => {
                let [left_operand, right_operand] = take_fixed_operands(&mut operands, &token)?;
                operands.push(Node::new_binary_operation(
                    operator,
                    left_operand,
                    right_operand,
                ));
            }
            token @ Token::Function(function) => {
                let arguments = take_operands(&mut operands, &token, function.arity())?;
                operands.push(Node::new_function_call(function, arguments));
            }
        }
    }

    match <[Node; 1]>::try_from(operands) {
        Ok([root]) => {
            debug!("Built expression tree {}", root.to_infix());
            Ok(root)
        }
        Err(leftover) => Err(ExpressionError::MalformedPostfixResult(leftover.len())),
    }
}

/// Removes the topmost `count` operands, keeping them in the order they were pushed.
fn take_operands(operands: &mut Vec<Node>, token: &Token, count: usize) -> Result<Vec<Node>> {
    if operands.len() < count {
        return Err(ExpressionError::InsufficientOperands {
            token: token.to_string(),
            expected: count,
            found: operands.len(),
        });
    }
    Ok(operands.split_off(operands.len() - count))
}

fn take_fixed_operands<const N: usize>(
    operands: &mut Vec<Node>,
    token: &Token,
) -> Result<[Node; N]> {
    let found = operands.len();
    take_operands(operands, token, N)?
        .try_into()
        .map_err(|_| ExpressionError::InsufficientOperands {
            token: token.to_string(),
            expected: N,
            found,
        })
}

/// Names of all variable tokens among the given postfix tokens, sorted and without duplicates.
pub fn extract_variables<S: AsRef<str>>(postfix_tokens: &[S]) -> Vec<String> {
    postfix_tokens
        .iter()
        .map(|token| token.as_ref())
        .filter(|token| is_variable(token))
        .map(str::to_string)
        .sorted()
        .dedup()
        .collect()
}

pub fn extract_variables_from_str(postfix_expression: &str) -> Vec<String> {
    extract_variables(&tokenize(postfix_expression))
}

/// Outcome of comparing the variables of a tree against the values a caller intends to
/// evaluate it with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableValidation {
    /// Variables used by the tree that have no value, sorted.
    pub missing: Vec<String>,
    /// Provided names the tree never uses, in the order they were provided.
    pub unused: Vec<String>,
}

impl VariableValidation {
    /// True when every variable in the tree has a value. Unused values do not matter.
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn warnings(&self) -> Vec<String> {
        let missing = self.missing.iter().map(|name| {
            format!("Variable '{}' is not provided in the variables list", name)
        });
        let unused = self.unused.iter().map(|name| {
            format!("Variable '{}' is provided but not used in the expression", name)
        });
        missing.chain(unused).collect()
    }
}

/// Checks that every variable in the tree has a value in `variables`, and notes any values
/// the tree does not need.
///
/// This is advisory only: problems are logged as warnings and reported back, never raised.
/// Evaluation does its own lookup and fails on its own if a variable really is missing.
pub fn validate_variables<S: AsRef<str>>(
    tree: &Node,
    variables: &[(S, f64)],
) -> VariableValidation {
    let tree_variables = tree.collect_variables();
    let provided: HashSet<&str> = variables.iter().map(|(name, _)| name.as_ref()).collect();

    let missing = tree_variables
        .iter()
        .filter(|name| !provided.contains(name.as_str()))
        .cloned()
        .collect();
    let unused = variables
        .iter()
        .map(|(name, _)| name.as_ref())
        .filter(|name| !tree_variables.iter().any(|used| used == name))
        .unique()
        .map(str::to_string)
        .collect();

    let validation = VariableValidation { missing, unused };
    for warning in validation.warnings() {
        warn!("{}", warning);
    }
    validation
}
