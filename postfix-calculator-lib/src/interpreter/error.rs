use std::num::ParseFloatError;
use thiserror::Error;

/// Everything that can go wrong while lexing, converting or evaluating an expression.
///
/// Lexical positions are 1-based, parenthesis positions are 0-based offsets into the
/// original expression.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("undefined token at position {position}")]
    UndefinedToken { text: String, position: usize },

    #[error("not balanced right parenthesis at position {position}")]
    UnbalancedRightParenthesis { position: usize },

    #[error("not balanced left parenthesis at position {position}")]
    UnbalancedLeftParenthesis { position: usize },

    /// An operator did not find enough operands, or operands were left over.
    #[error("not valid operation")]
    InvalidOperation,

    #[error("division by zero undefined")]
    DivisionByZero,

    #[error("exponent zero root undefined")]
    ZeroExponentRoot,

    #[error("negative root base undefined")]
    NegativeRootBase,

    #[error("empty expression")]
    EmptyExpression,

    #[error("invalid numeric literal {text}")]
    InvalidLiteral {
        text: String,
        #[source]
        source: ParseFloatError,
    },
}
