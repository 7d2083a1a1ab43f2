use crate::interpreter::operator::{
    Associativity, BinaryOperator, UnaryOperator, PARENTHESIS_PRECEDENCE, UNDEFINED_PRECEDENCE,
};
use std::fmt;
use std::fmt::Formatter;

/// What a token is.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    IntegerLiteral,
    DecimalLiteral,
    LeftParenthesis,
    RightParenthesis,
    Binary(BinaryOperator),
    Unary(UnaryOperator),
    Invalid,
}

/// The coarse role a token plays, independent of the exact operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Operand,
    Operator,
    Parenthesis,
    Undefined,
}

impl TokenKind {
    pub fn category(&self) -> Category {
        match self {
            TokenKind::IntegerLiteral | TokenKind::DecimalLiteral => Category::Operand,
            TokenKind::LeftParenthesis | TokenKind::RightParenthesis => Category::Parenthesis,
            TokenKind::Binary(_) | TokenKind::Unary(_) => Category::Operator,
            TokenKind::Invalid => Category::Undefined,
        }
    }

    pub fn precedence(&self) -> i32 {
        match self {
            TokenKind::LeftParenthesis | TokenKind::RightParenthesis => PARENTHESIS_PRECEDENCE,
            TokenKind::Binary(operator) => operator.precedence(),
            TokenKind::Unary(operator) => operator.precedence(),
            TokenKind::IntegerLiteral | TokenKind::DecimalLiteral | TokenKind::Invalid => {
                UNDEFINED_PRECEDENCE
            }
        }
    }

    /// A token that leaves a value behind it, so a following `+` or `-` is binary.
    pub fn produces_operand(&self) -> bool {
        matches!(
            self,
            TokenKind::RightParenthesis | TokenKind::IntegerLiteral | TokenKind::DecimalLiteral
        )
    }
}

/// A discrete part of an expression, tagged with where it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    text: String,
    kind: TokenKind,
    position: usize,
    precedence: i32,
    category: Category,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Token {
        Token {
            text: text.into(),
            kind,
            position,
            precedence: kind.precedence(),
            category: kind.category(),
        }
    }

    pub fn new_integer(text: impl Into<String>, position: usize) -> Token {
        Token::new(TokenKind::IntegerLiteral, text, position)
    }

    pub fn new_decimal(text: impl Into<String>, position: usize) -> Token {
        Token::new(TokenKind::DecimalLiteral, text, position)
    }

    pub fn new_binary(operator: BinaryOperator, position: usize) -> Token {
        Token::new(
            TokenKind::Binary(operator),
            operator.symbol().to_string(),
            position,
        )
    }

    pub fn new_unary(operator: UnaryOperator, position: usize) -> Token {
        Token::new(
            TokenKind::Unary(operator),
            operator.symbol().to_string(),
            position,
        )
    }

    pub fn new_left_parenthesis(position: usize) -> Token {
        Token::new(TokenKind::LeftParenthesis, "(", position)
    }

    pub fn new_right_parenthesis(position: usize) -> Token {
        Token::new(TokenKind::RightParenthesis, ")", position)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn precedence(&self) -> i32 {
        self.precedence
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_operand(&self) -> bool {
        self.category == Category::Operand
    }

    pub fn is_left_parenthesis(&self) -> bool {
        self.kind == TokenKind::LeftParenthesis
    }

    pub fn is_right_associative(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Binary(operator) if operator.associativity() == Associativity::Right
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Unary(_) => write!(f, "{}u", self.text),
            _ => write!(f, "{}", self.text),
        }
    }
}
