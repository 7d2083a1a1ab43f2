use crate::interpreter::error::CalculatorError;
use crate::interpreter::operator::{classify, is_operator_symbol};
use crate::interpreter::token::{Token, TokenKind};
use anyhow::Result;
use log::trace;
use std::iter::Peekable;
use std::str::CharIndices;

/// Splits an expression into tokens on demand.
///
/// The lexer remembers the kind of the last token it produced, which decides
/// whether a `+` or `-` is unary or binary. The first error ends the sequence.
pub struct Lexer<'a> {
    source: &'a str,
    characters: Peekable<CharIndices<'a>>,
    previous: Option<TokenKind>,
    failed: bool,
}

fn is_whitespace(character: char) -> bool {
    matches!(character, ' ' | '\t' | '\n')
}

fn is_parenthesis(character: char) -> bool {
    matches!(character, '(' | ')')
}

/// Creates the error for an unexpected character. `start` is the 0-based offset of the
/// character, or of the literal it interrupts; the reported position is 1-based.
fn undefined_token(text: &str, start: usize) -> anyhow::Error {
    CalculatorError::UndefinedToken {
        text: text.to_string(),
        position: start + 1,
    }
    .into()
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            characters: source.char_indices().peekable(),
            previous: None,
            failed: false,
        }
    }

    /// Scans the next token, or returns `None` once the input is exhausted or an
    /// error has been reported.
    pub fn next_token(&mut self) -> Option<Result<Token>> {
        if self.failed {
            return None;
        }
        self.skip_whitespace();
        let (start, character) = self.characters.next()?;

        let scanned = match character {
            '(' => Ok(Token::new_left_parenthesis(start)),
            ')' => Ok(Token::new_right_parenthesis(start)),
            '0'..='9' => self.scan_number(start),
            _ => self.scan_operator(start, character),
        };

        match scanned {
            Ok(token) => {
                trace!("Scanned {:?} at {}", token.kind(), token.position());
                self.previous = Some(token.kind());
                Some(Ok(token))
            }
            Err(error) => {
                self.failed = true;
                Some(Err(error))
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while self
            .characters
            .next_if(|&(_, character)| is_whitespace(character))
            .is_some()
        {}
    }

    fn follows_operand(&self) -> bool {
        self.previous
            .map(|kind| kind.produces_operand())
            .unwrap_or(false)
    }

    fn scan_operator(&mut self, start: usize, character: char) -> Result<Token> {
        let text = &self.source[start..start + character.len_utf8()];
        match classify(character, self.follows_operand()) {
            Some(kind) => Ok(Token::new(kind, text, start)),
            None => {
                let invalid = Token::new(TokenKind::Invalid, text, start);
                Err(undefined_token(invalid.text(), invalid.position()))
            }
        }
    }

    fn scan_number(&mut self, start: usize) -> Result<Token> {
        self.skip_digits();
        let mut kind = TokenKind::IntegerLiteral;
        if self.characters.next_if(|&(_, c)| c == '.').is_some() {
            self.skip_digits();
            kind = TokenKind::DecimalLiteral;
        }

        let end = self
            .characters
            .peek()
            .map(|&(offset, _)| offset)
            .unwrap_or(self.source.len());
        let text = &self.source[start..end];

        if let Some(&(_, next)) = self.characters.peek() {
            if !(is_whitespace(next) || is_parenthesis(next) || is_operator_symbol(next)) {
                return Err(undefined_token(text, start));
            }
        }

        Ok(Token::new(kind, text, start))
    }

    fn skip_digits(&mut self) {
        while self
            .characters
            .next_if(|&(_, c)| c.is_ascii_digit())
            .is_some()
        {}
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Converts the given expression into a list of tokens, in infix order.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens, or the first lexical error.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use postfix_calculator::interpreter::lexer::tokenize;
///
/// let tokens = tokenize("2 * -3")?;
/// assert_eq!(tokens.len(), 4);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    Lexer::new(expression).collect()
}
