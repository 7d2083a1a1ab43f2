use crate::interpreter::error::CalculatorError;
use crate::interpreter::token::TokenKind;
use anyhow::{bail, Result};
use std::fmt;
use std::fmt::Formatter;

pub const PARENTHESIS_PRECEDENCE: i32 = -5;
pub const UNDEFINED_PRECEDENCE: i32 = -1;
pub const ADDITIVE_PRECEDENCE: i32 = 7;
pub const MULTIPLICATIVE_PRECEDENCE: i32 = 9;
pub const EXPONENTIAL_PRECEDENCE: i32 = 10;
pub const UNARY_PRECEDENCE: i32 = 11;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
    Root,
}

/// An unary (prefix) mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Plus,
    Minus,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// One row of the operator table: the symbol, what it means after an operand,
/// and what it means anywhere else.
struct OperatorEntry {
    symbol: char,
    infix: BinaryOperator,
    prefix: Option<UnaryOperator>,
}

static OPERATOR_TABLE: [OperatorEntry; 6] = [
    OperatorEntry {
        symbol: '+',
        infix: BinaryOperator::Add,
        prefix: Some(UnaryOperator::Plus),
    },
    OperatorEntry {
        symbol: '-',
        infix: BinaryOperator::Subtract,
        prefix: Some(UnaryOperator::Minus),
    },
    OperatorEntry {
        symbol: '*',
        infix: BinaryOperator::Multiply,
        prefix: None,
    },
    OperatorEntry {
        symbol: '/',
        infix: BinaryOperator::Divide,
        prefix: None,
    },
    OperatorEntry {
        symbol: '^',
        infix: BinaryOperator::Exponentiate,
        prefix: None,
    },
    OperatorEntry {
        symbol: '$',
        infix: BinaryOperator::Root,
        prefix: None,
    },
];

pub fn is_operator_symbol(symbol: char) -> bool {
    OPERATOR_TABLE.iter().any(|entry| entry.symbol == symbol)
}

/// Looks up the operator kind for a symbol.
///
/// # Arguments
///
/// * `symbol`: The operator character.
/// * `follows_operand`: Whether the previous token produced a value,
///   in which case `+` and `-` are binary.
///
/// returns: The token kind, or `None` if the symbol is not an operator.
///
/// # Examples
///
/// ```
/// use postfix_calculator::interpreter::operator::{classify, UnaryOperator};
/// use postfix_calculator::interpreter::token::TokenKind;
///
/// assert_eq!(classify('-', false), Some(TokenKind::Unary(UnaryOperator::Minus)));
/// ```
pub fn classify(symbol: char, follows_operand: bool) -> Option<TokenKind> {
    let entry = OPERATOR_TABLE
        .iter()
        .find(|entry| entry.symbol == symbol)?;
    match entry.prefix {
        Some(prefix) if !follows_operand => Some(TokenKind::Unary(prefix)),
        _ => Some(TokenKind::Binary(entry.infix)),
    }
}

impl UnaryOperator {
    pub fn symbol(&self) -> char {
        match self {
            UnaryOperator::Plus => '+',
            UnaryOperator::Minus => '-',
        }
    }

    pub fn precedence(&self) -> i32 {
        UNARY_PRECEDENCE
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            UnaryOperator::Plus => x,
            UnaryOperator::Minus => -x,
        }
    }
}

impl BinaryOperator {
    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
            BinaryOperator::Exponentiate => '^',
            BinaryOperator::Root => '$',
        }
    }

    /// Only exponentiation groups right-to-left; root shares its precedence but not
    /// its associativity.
    pub fn associativity(&self) -> Associativity {
        match self {
            BinaryOperator::Add
            | BinaryOperator::Subtract
            | BinaryOperator::Multiply
            | BinaryOperator::Divide
            | BinaryOperator::Root => Associativity::Left,
            BinaryOperator::Exponentiate => Associativity::Right,
        }
    }

    pub fn precedence(&self) -> i32 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => ADDITIVE_PRECEDENCE,
            BinaryOperator::Multiply | BinaryOperator::Divide => MULTIPLICATIVE_PRECEDENCE,
            BinaryOperator::Exponentiate | BinaryOperator::Root => EXPONENTIAL_PRECEDENCE,
        }
    }

    /// Applies the operator to its operands.
    ///
    /// # Arguments
    ///
    /// * `left`: The earlier operand, pushed first.
    /// * `right`: The later operand, on top of the stack.
    ///
    /// returns: The result, or an arithmetic error when a guard is violated.
    ///
    /// # Examples
    ///
    /// ```
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// use postfix_calculator::interpreter::operator::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Subtract.evaluate(5.0, 3.0)?, 2.0);
    /// assert!(BinaryOperator::Divide.evaluate(1.0, 0.0).is_err());
    /// # Ok::<(), anyhow::Error>(()) }
    /// ```
    pub fn evaluate(&self, left: f64, right: f64) -> Result<f64> {
        let value = match self {
            BinaryOperator::Add => left + right,
            BinaryOperator::Subtract => left - right,
            BinaryOperator::Multiply => left * right,
            BinaryOperator::Divide => {
                if right == 0.0 {
                    bail!(CalculatorError::DivisionByZero);
                }
                left / right
            }
            BinaryOperator::Exponentiate => left.powf(right),
            BinaryOperator::Root => {
                if left < 0.0 {
                    bail!(CalculatorError::NegativeRootBase);
                }
                if right == 0.0 {
                    bail!(CalculatorError::ZeroExponentRoot);
                }
                left.powf(1.0 / right)
            }
        };
        Ok(value)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[test]
    fn plus_and_minus_are_unary_unless_they_follow_an_operand() {
        assert_eq!(
            classify('+', false),
            Some(TokenKind::Unary(UnaryOperator::Plus))
        );
        assert_eq!(
            classify('+', true),
            Some(TokenKind::Binary(BinaryOperator::Add))
        );
        assert_eq!(
            classify('-', true),
            Some(TokenKind::Binary(BinaryOperator::Subtract))
        );
    }

    #[test]
    fn multiplicative_and_exponential_symbols_are_always_binary() {
        assert_eq!(
            classify('*', false),
            Some(TokenKind::Binary(BinaryOperator::Multiply))
        );
        assert_eq!(
            classify('$', false),
            Some(TokenKind::Binary(BinaryOperator::Root))
        );
        assert_eq!(classify('#', true), None);
    }

    #[test]
    fn unary_operators_bind_tighter_than_any_binary_operator() {
        let binary = [
            BinaryOperator::Add,
            BinaryOperator::Multiply,
            BinaryOperator::Exponentiate,
            BinaryOperator::Root,
        ];
        for operator in binary {
            assert!(UnaryOperator::Minus.precedence() > operator.precedence());
            assert!(operator.precedence() > PARENTHESIS_PRECEDENCE);
        }
    }

    #[test]
    fn only_exponentiation_is_right_associative() {
        assert_eq!(
            BinaryOperator::Exponentiate.associativity(),
            Associativity::Right
        );
        assert_eq!(BinaryOperator::Root.associativity(), Associativity::Left);
        assert_eq!(
            BinaryOperator::Exponentiate.precedence(),
            BinaryOperator::Root.precedence()
        );
    }

    #[parameterized(
    operator = {
    BinaryOperator::Add,
    BinaryOperator::Subtract,
    BinaryOperator::Multiply,
    BinaryOperator::Divide,
    BinaryOperator::Exponentiate,
    BinaryOperator::Root,
    },
    expected = {
    18.0,
    14.0,
    32.0,
    8.0,
    256.0,
    4.0,
    }
    )]
    fn binary_operator_applies_left_then_right(operator: BinaryOperator, expected: f64) {
        assert_eq!(operator.evaluate(16.0, 2.0).unwrap(), expected)
    }

    #[test]
    fn root_checks_negative_base_before_zero_exponent() {
        let error = BinaryOperator::Root.evaluate(-8.0, 0.0).unwrap_err();
        assert_eq!(
            error.downcast_ref::<CalculatorError>(),
            Some(&CalculatorError::NegativeRootBase)
        );
    }

    #[test]
    fn root_with_zero_exponent_is_undefined() {
        let error = BinaryOperator::Root.evaluate(8.0, 0.0).unwrap_err();
        assert_eq!(error.to_string(), "exponent zero root undefined");
    }

    #[test]
    fn division_by_zero_is_undefined() {
        let error = BinaryOperator::Divide.evaluate(4.0, 0.0).unwrap_err();
        assert_eq!(error.to_string(), "division by zero undefined");
    }

    #[test]
    fn symbols_round_trip_through_the_table() {
        let binary = [
            BinaryOperator::Add,
            BinaryOperator::Subtract,
            BinaryOperator::Multiply,
            BinaryOperator::Divide,
            BinaryOperator::Exponentiate,
            BinaryOperator::Root,
        ];
        for operator in binary {
            assert_eq!(
                classify(operator.symbol(), true),
                Some(TokenKind::Binary(operator))
            );
        }
        assert_eq!(BinaryOperator::Root.to_string(), "$");
        assert_eq!(UnaryOperator::Minus.to_string(), "-");
        assert!(is_operator_symbol('^'));
        assert!(!is_operator_symbol('('));
    }
}
