use std::fmt;

/// A primitive token of the tokenizer wire format.
///
/// String and number payloads borrow from the line being lexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Colon,
    Comma,
    String(&'a str),
    Number(&'a str),
    EndOfInput,
    Error(char),
}

/// Payload-free discriminant of a [`Token`], used by the parser's `expect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Colon,
    Comma,
    String,
    Number,
    EndOfInput,
    Error,
}

impl Token<'_> {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::LeftBracket => TokenKind::LeftBracket,
            Token::RightBracket => TokenKind::RightBracket,
            Token::LeftBrace => TokenKind::LeftBrace,
            Token::RightBrace => TokenKind::RightBrace,
            Token::Colon => TokenKind::Colon,
            Token::Comma => TokenKind::Comma,
            Token::String(_) => TokenKind::String,
            Token::Number(_) => TokenKind::Number,
            Token::EndOfInput => TokenKind::EndOfInput,
            Token::Error(_) => TokenKind::Error,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::LeftBracket => "'['",
            TokenKind::RightBracket => "']'",
            TokenKind::LeftBrace => "'{'",
            TokenKind::RightBrace => "'}'",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::EndOfInput => "end of input",
            TokenKind::Error => "invalid character",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::String(s) => write!(f, "string \"{s}\""),
            Token::Number(n) => write!(f, "number {n}"),
            Token::Error(c) => write!(f, "character {c:?}"),
            other => fmt::Display::fmt(&other.kind(), f),
        }
    }
}

/// Splits one line of tokenizer output into [`Token`]s.
///
/// Strings are copied verbatim up to the next `"`; escape sequences are not
/// interpreted. Numbers are runs of ASCII digits only.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Consume and return the next token. Returns [`Token::EndOfInput`] once
    /// the input is exhausted, on every subsequent call.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        let bytes = self.input.as_bytes();
        let Some(&ch) = bytes.get(self.pos) else {
            return Token::EndOfInput;
        };

        let single = match ch {
            b'[' => Some(Token::LeftBracket),
            b']' => Some(Token::RightBracket),
            b'{' => Some(Token::LeftBrace),
            b'}' => Some(Token::RightBrace),
            b':' => Some(Token::Colon),
            b',' => Some(Token::Comma),
            _ => None,
        };
        if let Some(tok) = single {
            self.pos += 1;
            return tok;
        }

        match ch {
            b'"' => self.read_string(),
            b'0'..=b'9' => self.read_number(),
            _ => {
                // pos is on a char boundary; step over the whole char
                let c = self.input[self.pos..].chars().next().unwrap_or('\u{FFFD}');
                self.pos += c.len_utf8();
                Token::Error(c)
            }
        }
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.input.as_bytes();
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = bytes.get(self.pos) {
            self.pos += 1;
        }
    }

    fn read_string(&mut self) -> Token<'a> {
        self.pos += 1; // opening quote
        let start = self.pos;
        let end = self.input[start..]
            .find('"')
            .map_or(self.input.len(), |i| start + i);
        // Unterminated strings run to end of input; the cursor still steps
        // past the (missing) closing quote.
        self.pos = end + 1;
        Token::String(&self.input[start..end])
    }

    fn read_number(&mut self) -> Token<'a> {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        while bytes.get(self.pos).is_some_and(u8::is_ascii_digit) {
            self.pos += 1;
        }
        Token::Number(&self.input[start..self.pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(input: &str) -> Vec<Token<'_>> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token();
            if tok == Token::EndOfInput {
                break;
            }
            out.push(tok);
        }
        out
    }

    #[test]
    fn punctuation_and_whitespace() {
        let toks = lex_all(" [ {\t}\r\n: , ] ");
        assert_eq!(
            toks,
            vec![
                Token::LeftBracket,
                Token::LeftBrace,
                Token::RightBrace,
                Token::Colon,
                Token::Comma,
                Token::RightBracket,
            ]
        );
    }

    #[test]
    fn strings_are_verbatim() {
        assert_eq!(lex_all(r#""café""#), vec![Token::String("café")]);
        // no escape handling: the backslash stays, the quote ends the string
        assert_eq!(
            lex_all(r#""a\"b""#),
            vec![Token::String("a\\"), Token::Error('b'), Token::String("")]
        );
    }

    #[test]
    fn unterminated_string_runs_to_end() {
        let mut lexer = Lexer::new(r#""abc"#);
        assert_eq!(lexer.next_token(), Token::String("abc"));
        assert_eq!(lexer.next_token(), Token::EndOfInput);
        assert_eq!(lexer.next_token(), Token::EndOfInput);
    }

    #[test]
    fn numbers_are_digit_runs() {
        assert_eq!(lex_all("007 42"), vec![Token::Number("007"), Token::Number("42")]);
        assert_eq!(lex_all("-1"), vec![Token::Error('-'), Token::Number("1")]);
        assert_eq!(
            lex_all("1.5"),
            vec![Token::Number("1"), Token::Error('.'), Token::Number("5")]
        );
    }

    #[test]
    fn unknown_characters_do_not_abort() {
        assert_eq!(
            lex_all("tré["),
            vec![Token::Error('t'), Token::Error('r'), Token::Error('é'), Token::LeftBracket]
        );
    }

    #[test]
    fn empty_input() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.next_token(), Token::EndOfInput);
    }
}
