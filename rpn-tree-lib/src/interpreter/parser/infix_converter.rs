use crate::interpreter::error::{ExpressionError, Result};
use crate::interpreter::token::is_operand_char;
use log::trace;
use std::iter::Peekable;
use std::str::Chars;

const OPEN_PARENTHESIS: char = '(';
const CLOSE_PARENTHESIS: char = ')';

/// Binding strength of the symbols the converter keeps on its operator stack.
///
/// `(` only ever sits on the stack, where it ranks below every real operator so that
/// nothing is popped past it.
fn precedence(symbol: char) -> Option<u8> {
    match symbol {
        '^' => Some(4),
        '*' | '/' | '%' => Some(3),
        '+' | '-' => Some(2),
        OPEN_PARENTHESIS => Some(1),
        _ => None,
    }
}

fn is_operator(symbol: char) -> bool {
    symbol != OPEN_PARENTHESIS && precedence(symbol).is_some()
}

/// Converts an infix expression into a space-separated postfix expression.
///
/// Every token in the output is followed by a single space, including the last one.
/// Operators of equal precedence are always resolved left to right, `^` included.
pub fn infix_to_postfix(infix: &str) -> Result<String> {
    let tokens = infix_to_postfix_tokens(infix)?;
    let mut output = String::with_capacity(infix.len() + tokens.len());
    for token in tokens {
        output.push_str(&token);
        output.push(' ');
    }
    Ok(output)
}

/// Converts an infix expression into postfix tokens using the shunting-yard algorithm.
pub fn infix_to_postfix_tokens(infix: &str) -> Result<Vec<String>> {
    let mut chars = infix.chars().peekable();
    let mut operators: Vec<char> = Vec::new();
    let mut output: Vec<String> = Vec::new();

    while let Some(&symbol) = chars.peek() {
        if symbol.is_whitespace() {
            chars.next();
        } else if is_operand_char(symbol) {
            output.push(take_operand(&mut chars));
        } else if symbol == OPEN_PARENTHESIS {
            chars.next();
            operators.push(symbol);
        } else if symbol == CLOSE_PARENTHESIS {
            chars.next();
            parse_closing_parenthesis(&mut operators, &mut output)?;
        } else if is_operator(symbol) {
            chars.next();
            parse_operator(&mut operators, &mut output, symbol);
        } else {
            return Err(ExpressionError::InvalidCharacter(symbol));
        }
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

/// Consumes the whole run of operand characters so that multi-digit numbers and
/// multi-character names become a single token.
fn take_operand(chars: &mut Peekable<Chars>) -> String {
    let mut operand = String::new();
    while let Some(&c) = chars.peek() {
        if !is_operand_char(c) {
            break;
        }
        operand.push(c);
        chars.next();
    }
    operand
}

fn parse_operator(operators: &mut Vec<char>, output: &mut Vec<String>, operator: char) {
    while let Some(&top_of_operator_stack) = operators.last() {
        if top_of_operator_stack == OPEN_PARENTHESIS
            || precedence(top_of_operator_stack) < precedence(operator)
        {
            break;
        }
        trace!("'{}' pops '{}'", operator, top_of_operator_stack);
        operators.pop();
        output.push(top_of_operator_stack.to_string());
    }

    operators.push(operator);
}

fn parse_closing_parenthesis(operators: &mut Vec<char>, output: &mut Vec<String>) -> Result<()> {
    loop {
        match operators.pop() {
            None => return Err(ExpressionError::MismatchedParentheses),
            // Discard the open parenthesis.
            Some(OPEN_PARENTHESIS) => return Ok(()),
            Some(operator) => output.push(operator.to_string()),
        }
    }
}

fn transfer_leftover_operators(operators: &mut Vec<char>, output: &mut Vec<String>) -> Result<()> {
    while let Some(operator) = operators.pop() {
        if operator == OPEN_PARENTHESIS {
            return Err(ExpressionError::MismatchedParentheses);
        }
        output.push(operator.to_string());
    }
    Ok(())
}
