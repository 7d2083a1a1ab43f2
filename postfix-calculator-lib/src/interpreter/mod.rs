pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::evaluator::evaluate_postfix;
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use itertools::Itertools;
use log::debug;
use string_builder::Builder;

/// Calculates the value of the given arithmetic expression.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The value of the expression, or the first error encountered.
///
/// # Examples
///
/// ```
/// use postfix_calculator::interpreter::evaluate;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let value = evaluate("(2 + 3) * 4")?;
/// assert_eq!(value, 20.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate(expression: &str) -> Result<f64> {
    let postfix_tokens = convert(expression)?;
    let value = evaluate_postfix(&postfix_tokens)?;
    debug!("{:?} = {}", expression, value);
    Ok(value)
}

/// Converts the given input string into the equivalent sequence of tokens in postfix
/// order.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The equivalent postfix tokens.
///
/// # Examples
///
/// ```
/// use postfix_calculator::interpreter::convert;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let postfix_tokens = convert("2 * -3")?;
/// assert_eq!(postfix_tokens.len(), 4);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: &str) -> Result<Vec<Token>> {
    let postfix_tokens = parser::parse(expression)?;
    debug!(
        "{:?} in postfix: {}",
        expression,
        postfix_tokens.iter().join(" ")
    );
    Ok(postfix_tokens)
}

/// Pretty-prints the given vector of tokens, separated by whitespace.
/// Unary operators are suffixed with `u` to tell them apart from binary ones.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use postfix_calculator::interpreter::{convert, tokens_to_string};
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let pretty_printed_tokens = tokens_to_string(&convert("2 * -3")?)?;
/// assert_eq!(pretty_printed_tokens, "2 3 -u *");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len() * 2);

    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.to_string());
    }

    builder.string().context("Failed to build token string")
}
