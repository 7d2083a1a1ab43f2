use crate::interpreter::error::CalculatorError;
use crate::interpreter::token::{Token, TokenKind};
use anyhow::{bail, Result};
use itertools::Itertools;
use log::trace;

/// Reduces a postfix token sequence to a single value.
///
/// # Arguments
///
/// * `postfix`: The tokens to evaluate, in postfix order.
///
/// returns: The value of the expression, or the first arithmetic error.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use postfix_calculator::interpreter::evaluator::evaluate_postfix;
/// use postfix_calculator::interpreter::parser::parse;
///
/// let value = evaluate_postfix(&parse("2^3^2")?)?;
/// assert_eq!(value, 512.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate_postfix(postfix: &[Token]) -> Result<f64> {
    let mut values: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token.kind() {
            TokenKind::IntegerLiteral | TokenKind::DecimalLiteral => {
                values.push(parse_operand(token)?)
            }
            TokenKind::Unary(operator) => {
                let operand = values.pop().ok_or(CalculatorError::InvalidOperation)?;
                values.push(operator.evaluate(operand));
            }
            TokenKind::Binary(operator) => {
                let (right, left) = match (values.pop(), values.pop()) {
                    (Some(right), Some(left)) => (right, left),
                    _ => bail!(CalculatorError::InvalidOperation),
                };
                values.push(operator.evaluate(left, right)?);
            }
            TokenKind::LeftParenthesis | TokenKind::RightParenthesis | TokenKind::Invalid => {
                bail!(CalculatorError::InvalidOperation)
            }
        }
        trace!("After {}: [{}]", token, values.iter().join(", "));
    }

    match values.as_slice() {
        [] => bail!(CalculatorError::EmptyExpression),
        [value] => Ok(*value),
        _ => bail!(CalculatorError::InvalidOperation),
    }
}

fn parse_operand(token: &Token) -> Result<f64> {
    let value = token
        .text()
        .parse::<f64>()
        .map_err(|source| CalculatorError::InvalidLiteral {
            text: token.text().to_string(),
            source,
        })?;
    Ok(value)
}
