use std::fmt;

use thiserror::Error;

use crate::lexer::TokenKind;

/// The two fields of a wire-format entry object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Token,
    Pos,
}

impl Field {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "token" => Some(Field::Token),
            "pos" => Some(Field::Pos),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Token => "token",
            Field::Pos => "pos",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a line of tokenizer output was rejected. Parsing stops at the first
/// one; no partial entries are returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected '[' at start")]
    ExpectedArrayStart,

    #[error("expected ']' at end")]
    ExpectedArrayEnd,

    #[error("unexpected token: expected {expected}, found {found}")]
    UnexpectedToken { expected: TokenKind, found: String },

    #[error("unrecognized character {0:?}")]
    UnrecognizedChar(char),

    #[error("unknown key \"{0}\"")]
    UnknownKey(String),

    #[error("field `{field}` expects a {expected} value, found {found}")]
    TypeMismatch {
        field: Field,
        expected: TokenKind,
        found: String,
    },

    #[error("invalid position number \"{0}\"")]
    InvalidPosition(String),

    #[error("missing required field `{0}`")]
    MissingField(Field),
}
