mod infix_converter;
pub mod priority_stack;

use crate::interpreter::lexer::Lexer;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;
use anyhow::Result;

/// Parses the given infix expression into an equivalent sequence of tokens in postfix
/// order, which can be evaluated without regard to precedence or parentheses.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens in postfix order.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use postfix_calculator::interpreter::parser::parse;
///
/// let postfix_tokens = parse("(1 + 2) * 3")?;
/// let texts: Vec<&str> = postfix_tokens.iter().map(|token| token.text()).collect();
/// assert_eq!(texts, ["1", "2", "+", "3", "*"]);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn parse(expression: &str) -> Result<Vec<Token>> {
    infix_to_postfix(Lexer::new(expression))
}
