use crate::interpreter::error::CalculatorError;
use crate::interpreter::parser::priority_stack::PriorityStack;
use crate::interpreter::token::{Token, TokenKind};
use anyhow::{bail, Result};
use log::trace;

fn precedence_less(a: &Token, b: &Token) -> bool {
    a.precedence() < b.precedence()
}

/// Reorders a stream of infix tokens into postfix order using the shunting-yard algorithm.
///
/// The first error in the stream, lexical or structural, aborts the conversion.
pub(crate) fn infix_to_postfix<I>(tokens: I) -> Result<Vec<Token>>
where
    I: IntoIterator<Item = Result<Token>>,
{
    let mut operators: PriorityStack<Token> = PriorityStack::with_ordering(precedence_less);
    let mut output: Vec<Token> = vec![];
    for token in tokens {
        let token = token?;
        trace!("Converting {} with {} pending", token, operators.len());
        match token.kind() {
            TokenKind::IntegerLiteral | TokenKind::DecimalLiteral => output.push(token),
            TokenKind::LeftParenthesis => operators.push_unordered(token),
            TokenKind::RightParenthesis => {
                parse_closing_parenthesis_token(&mut operators, &mut output, &token)?
            }
            TokenKind::Binary(_) | TokenKind::Unary(_) => {
                parse_operator_token(&mut operators, &mut output, token)
            }
            // The lexer reports these as errors, but hand-built token streams may carry them.
            TokenKind::Invalid => bail!(CalculatorError::UndefinedToken {
                text: token.text().to_string(),
                position: token.position() + 1,
            }),
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut PriorityStack<Token>,
    output: &mut Vec<Token>,
) -> Result<()> {
    while let Some(operator) = operators.pop() {
        if operator.is_left_parenthesis() {
            bail!(CalculatorError::UnbalancedLeftParenthesis {
                position: operator.position(),
            });
        }
        output.push(operator);
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut PriorityStack<Token>,
    output: &mut Vec<Token>,
    closing: &Token,
) -> Result<()> {
    loop {
        match operators.pop() {
            None => {
                bail!(CalculatorError::UnbalancedRightParenthesis {
                    position: closing.position(),
                });
            }
            // Discard the open parenthesis.
            Some(operator) if operator.is_left_parenthesis() => break,
            Some(operator) => output.push(operator),
        }
    }
    Ok(())
}

/// Pops every pending operator that binds at least as tightly as `token`, except that an
/// equal-precedence right-associative operator stays put, then pushes `token`.
fn parse_operator_token(
    operators: &mut PriorityStack<Token>,
    output: &mut Vec<Token>,
    token: Token,
) {
    while let Some(top_of_operator_stack) = operators.peek() {
        if top_of_operator_stack.precedence() < token.precedence()
            || (top_of_operator_stack.precedence() == token.precedence()
                && token.is_right_associative())
        {
            break;
        }
        if let Some(other_operator) = operators.pop() {
            output.push(other_operator);
        }
    }

    operators.push(token);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::Lexer;
    use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
    use pretty_assertions::assert_eq;

    fn postfix_text(expression: &str) -> Vec<String> {
        infix_to_postfix(Lexer::new(expression))
            .unwrap()
            .iter()
            .map(Token::to_string)
            .collect()
    }

    fn conversion_error(expression: &str) -> CalculatorError {
        infix_to_postfix(Lexer::new(expression))
            .unwrap_err()
            .downcast::<CalculatorError>()
            .unwrap()
    }

    #[test]
    fn infix_to_postfix_simple_expression() {
        // 1 + 2
        let infix = vec![
            Token::new_integer("1", 0),
            Token::new_binary(BinaryOperator::Add, 2),
            Token::new_integer("2", 4),
        ];
        let postfix = vec![
            Token::new_integer("1", 0),
            Token::new_integer("2", 4),
            Token::new_binary(BinaryOperator::Add, 2),
        ];

        let actual = infix_to_postfix(infix.into_iter().map(Ok)).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_simple_parenthesised_expression() {
        assert_eq!(postfix_text("1 - (2 + 3)"), ["1", "2", "3", "+", "-"])
    }

    #[test]
    fn infix_to_postfix_complex_expression() {
        assert_eq!(
            postfix_text("1 + 2 * 3 / (4 - 5)^6^7"),
            ["1", "2", "3", "*", "4", "5", "-", "6", "7", "^", "^", "/", "+"]
        )
    }

    #[test]
    fn infix_to_postfix_multi_operator_expression() {
        assert_eq!(
            postfix_text("1 + 2 * 3 - 4"),
            ["1", "2", "3", "*", "+", "4", "-"]
        )
    }

    #[test]
    fn infix_to_postfix_nested_parenthesis_expression() {
        assert_eq!(
            postfix_text("1 + ((2 + 3) * 4)"),
            ["1", "2", "3", "+", "4", "*", "+"]
        )
    }

    #[test]
    fn exponentiation_groups_right_to_left() {
        assert_eq!(postfix_text("2^3^2"), ["2", "3", "2", "^", "^"])
    }

    #[test]
    fn root_groups_left_to_right() {
        assert_eq!(postfix_text("64 $ 2 $ 3"), ["64", "2", "$", "3", "$"])
    }

    #[test]
    fn exponentiation_after_root_stays_pending() {
        assert_eq!(postfix_text("8 $ 3 ^ 2"), ["8", "3", "2", "^", "$"])
    }

    #[test]
    fn unary_minus_follows_its_operand() {
        assert_eq!(postfix_text("2 * -3"), ["2", "3", "-u", "*"]);
        assert_eq!(postfix_text("-3 + 2"), ["3", "-u", "2", "+"]);
        assert_eq!(postfix_text("3 - -2"), ["3", "2", "-u", "-"]);
    }

    #[test]
    fn parentheses_are_not_emitted() {
        let postfix = infix_to_postfix(Lexer::new("((1))")).unwrap();
        assert_eq!(postfix, vec![Token::new_integer("1", 2)]);
    }

    #[test]
    fn unary_token_keeps_its_kind_in_the_output() {
        let postfix = infix_to_postfix(Lexer::new("-1")).unwrap();
        assert_eq!(
            postfix[1].kind(),
            TokenKind::Unary(UnaryOperator::Minus)
        );
    }

    #[test]
    fn unmatched_closing_parenthesis_reports_its_position() {
        assert_eq!(
            conversion_error("2 + 3)"),
            CalculatorError::UnbalancedRightParenthesis { position: 5 }
        );
    }

    #[test]
    fn unmatched_opening_parenthesis_reports_its_position() {
        assert_eq!(
            conversion_error("1 * (2 + 3"),
            CalculatorError::UnbalancedLeftParenthesis { position: 4 }
        );
    }

    #[test]
    fn infix_to_postfix_mismatched_parenthesis_should_return_err() {
        assert_eq!(
            conversion_error("(1 + 2))"),
            CalculatorError::UnbalancedRightParenthesis { position: 7 }
        );
    }

    #[test]
    fn lexical_error_aborts_conversion() {
        assert_eq!(
            conversion_error("(1 + a"),
            CalculatorError::UndefinedToken {
                text: "a".to_string(),
                position: 6,
            }
        );
    }

    #[test]
    fn invalid_token_in_the_stream_is_undefined() {
        let infix = vec![
            Token::new_integer("1", 0),
            Token::new_binary(BinaryOperator::Add, 2),
            Token::new(TokenKind::Invalid, "#", 4),
        ];

        let error = infix_to_postfix(infix.into_iter().map(Ok))
            .unwrap_err()
            .downcast::<CalculatorError>()
            .unwrap();

        assert_eq!(
            error,
            CalculatorError::UndefinedToken {
                text: "#".to_string(),
                position: 5,
            }
        );
    }

    #[test]
    fn empty_input_converts_to_nothing() {
        assert!(infix_to_postfix(Lexer::new("  ")).unwrap().is_empty());
    }
}
