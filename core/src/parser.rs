use serde::{Deserialize, Serialize};

use crate::error::{Field, ParseError};
use crate::lexer::{Lexer, Token, TokenKind};

/// One occurrence of a term at a position within a document, decoded from
/// `{"token": "...", "pos": N}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEntry {
    pub text: String,
    pub position: usize,
}

impl TokenEntry {
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        Self { text: text.into(), position }
    }
}

/// Recursive-descent parser over one line of tokenizer output, with one token
/// of lookahead.
///
/// Grammar:
/// ```text
/// entries := '[' ( entry ( ',' entry )* )? ']'
/// entry   := '{' pair ',' pair '}'
/// pair    := STRING ':' ( STRING | NUMBER )
/// ```
/// Each entry has exactly two pairs, keyed `token` and `pos` in any order.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        Self { lexer, current }
    }

    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Consume the current token if it is of `kind`. On mismatch the parser
    /// does not advance and must not be used further.
    fn expect(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.current.kind() != kind {
            return Err(unexpected(kind, self.current));
        }
        self.advance();
        Ok(())
    }

    /// Parse the whole line as an array of entries, in source order.
    pub fn parse_entries(&mut self) -> Result<Vec<TokenEntry>, ParseError> {
        self.expect(TokenKind::LeftBracket)
            .map_err(|_| ParseError::ExpectedArrayStart)?;

        let mut entries = Vec::new();
        if self.current == Token::RightBracket {
            self.advance();
            return Ok(entries);
        }

        entries.push(self.parse_entry()?);
        while self.current == Token::Comma {
            self.advance();
            entries.push(self.parse_entry()?);
        }

        self.expect(TokenKind::RightBracket)
            .map_err(|_| ParseError::ExpectedArrayEnd)?;
        Ok(entries)
    }

    fn parse_entry(&mut self) -> Result<TokenEntry, ParseError> {
        self.expect(TokenKind::LeftBrace)?;

        let mut text: Option<String> = None;
        let mut position: Option<usize> = None;
        for i in 0..2 {
            if i > 0 {
                self.expect(TokenKind::Comma)?;
            }
            let key = match self.current {
                Token::String(key) => key,
                other => return Err(unexpected(TokenKind::String, other)),
            };
            self.advance();
            self.expect(TokenKind::Colon)?;

            // A repeated key overwrites the earlier value.
            match Field::from_key(key) {
                Some(Field::Token) => text = Some(self.string_value(Field::Token)?),
                Some(Field::Pos) => position = Some(self.position_value()?),
                None => return Err(ParseError::UnknownKey(key.to_string())),
            }
        }

        self.expect(TokenKind::RightBrace)?;

        let text = text.ok_or(ParseError::MissingField(Field::Token))?;
        let position = position.ok_or(ParseError::MissingField(Field::Pos))?;
        Ok(TokenEntry { text, position })
    }

    fn string_value(&mut self, field: Field) -> Result<String, ParseError> {
        match self.current {
            Token::String(s) => {
                self.advance();
                Ok(s.to_string())
            }
            other => Err(mismatch(field, TokenKind::String, other)),
        }
    }

    fn position_value(&mut self) -> Result<usize, ParseError> {
        match self.current {
            Token::Number(digits) => {
                let pos = digits
                    .parse::<usize>()
                    .map_err(|_| ParseError::InvalidPosition(digits.to_string()))?;
                self.advance();
                Ok(pos)
            }
            other => Err(mismatch(Field::Pos, TokenKind::Number, other)),
        }
    }
}

fn unexpected(expected: TokenKind, found: Token<'_>) -> ParseError {
    match found {
        Token::Error(c) => ParseError::UnrecognizedChar(c),
        other => ParseError::UnexpectedToken { expected, found: other.to_string() },
    }
}

fn mismatch(field: Field, expected: TokenKind, found: Token<'_>) -> ParseError {
    match found {
        Token::Error(c) => ParseError::UnrecognizedChar(c),
        other => ParseError::TypeMismatch { field, expected, found: other.to_string() },
    }
}

/// Decode one line of tokenizer output.
pub fn parse_line(line: &str) -> Result<Vec<TokenEntry>, ParseError> {
    Parser::new(line).parse_entries()
}
