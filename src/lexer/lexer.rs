use tracing::{debug, trace};

use crate::{errors::errors::ErrorImpl, MK_OPERATOR, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\r' | b'\n')
}

/// One scanning session over a borrowed source buffer.
///
/// Tokens are produced on demand by [`Lexer::scan_token`]; nothing is buffered
/// ahead. Once the end of input is reached every further call returns an
/// `EOF` token without moving the cursor.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    /// Start of the token being built.
    start: usize,
    /// Next unread byte.
    current: usize,
    line: u32,
    /// Set once the iterator has handed out the `EOF` token.
    exhausted: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        debug!(len = source.len(), "starting scan session");

        Lexer {
            source,
            start: 0,
            current: 0,
            line: 1,
            exhausted: false,
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn position(&self) -> usize {
        self.current
    }

    pub fn scan_token(&mut self) -> Token<'a> {
        self.skip_whitespace();
        self.start = self.current;

        if self.is_at_end() {
            return self.make_token(TokenKind::EOF);
        }

        let c = self.advance();
        let token = if is_alpha(c) {
            self.identifier()
        } else if is_digit(c) {
            self.number()
        } else {
            self.punctuation(c)
        };

        trace!(kind = %token.kind, line = token.line, "scanned token");
        token
    }

    fn punctuation(&mut self, c: u8) -> Token<'a> {
        match c {
            b'(' => self.make_token(TokenKind::OpenParen),
            b')' => self.make_token(TokenKind::CloseParen),
            b'[' => self.make_token(TokenKind::OpenBracket),
            b']' => self.make_token(TokenKind::CloseBracket),
            b'{' => self.make_token(TokenKind::OpenCurly),
            b'}' => self.make_token(TokenKind::CloseCurly),
            b',' => self.make_token(TokenKind::Comma),
            b';' => self.make_token(TokenKind::Semicolon),
            b'~' => self.make_token(TokenKind::Tilde),
            b'#' => self.make_token(TokenKind::Hash),
            b'.' => self.make_token(TokenKind::Dot),
            b':' => self.make_token(TokenKind::Colon),
            b'?' => self.make_token(TokenKind::Question),

            b'+' => MK_OPERATOR!(self, TokenKind::Plus;
                [b'+'] => TokenKind::PlusPlus,
                [b'='] => TokenKind::PlusEquals,
            ),
            b'-' => MK_OPERATOR!(self, TokenKind::Dash;
                [b'-'] => TokenKind::MinusMinus,
                [b'='] => TokenKind::MinusEquals,
                [b'>'] => TokenKind::Arrow,
            ),
            b'*' => MK_OPERATOR!(self, TokenKind::Star;
                [b'='] => TokenKind::StarEquals,
            ),
            b'/' => MK_OPERATOR!(self, TokenKind::Slash;
                [b'='] => TokenKind::SlashEquals,
            ),
            b'%' => MK_OPERATOR!(self, TokenKind::Percent;
                [b'='] => TokenKind::PercentEquals,
            ),
            b'&' => MK_OPERATOR!(self, TokenKind::Ampersand;
                [b'='] => TokenKind::AmpersandEquals,
                [b'&'] => TokenKind::And,
            ),
            b'|' => MK_OPERATOR!(self, TokenKind::Pipe;
                [b'='] => TokenKind::PipeEquals,
                [b'|'] => TokenKind::Or,
            ),
            b'^' => MK_OPERATOR!(self, TokenKind::Caret;
                [b'='] => TokenKind::CaretEquals,
            ),
            b'=' => MK_OPERATOR!(self, TokenKind::Assignment;
                [b'='] => TokenKind::Equals,
            ),
            b'!' => MK_OPERATOR!(self, TokenKind::Not;
                [b'='] => TokenKind::NotEquals,
            ),
            b'<' => MK_OPERATOR!(self, TokenKind::Less;
                [b'<', b'='] => TokenKind::ShiftLeftEquals,
                [b'='] => TokenKind::LessEquals,
                [b'<'] => TokenKind::ShiftLeft,
            ),
            b'>' => MK_OPERATOR!(self, TokenKind::Greater;
                [b'>', b'='] => TokenKind::ShiftRightEquals,
                [b'='] => TokenKind::GreaterEquals,
                [b'>'] => TokenKind::ShiftRight,
            ),

            b'"' => self.string(),
            b'\'' => self.character(),

            _ => {
                // Swallow the rest of a multi-byte sequence so the next token
                // starts on a char boundary.
                if !c.is_ascii() {
                    while !self.source.is_char_boundary(self.current) {
                        self.current += 1;
                    }
                }
                self.error_token(ErrorImpl::UnexpectedCharacter)
            }
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Callers must check `is_at_end` first.
    fn advance(&mut self) -> u8 {
        let c = self.source.as_bytes()[self.current];
        self.current += 1;
        c
    }

    fn peek(&self) -> u8 {
        self.byte_at(self.current)
    }

    fn peek_next(&self) -> u8 {
        self.byte_at(self.current + 1)
    }

    fn byte_at(&self, pos: usize) -> u8 {
        self.source.as_bytes().get(pos).copied().unwrap_or(b'\0')
    }

    fn match_byte(&mut self, expected: u8) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }

        self.current += 1;
        true
    }

    fn match_sequence(&mut self, expected: &[u8]) -> bool {
        let checkpoint = self.current;

        for &byte in expected {
            if !self.match_byte(byte) {
                self.current = checkpoint;
                return false;
            }
        }

        true
    }

    fn make_token(&self, kind: TokenKind) -> Token<'a> {
        MK_TOKEN!(kind, &self.source[self.start..self.current], self.line)
    }

    fn error_token(&self, error: ErrorImpl) -> Token<'a> {
        debug!(line = self.line, %error, "error token");
        MK_TOKEN!(TokenKind::Error, error.message(), self.line)
    }

    fn skip_whitespace(&mut self) {
        loop {
            match self.peek() {
                b' ' | b'\r' | b'\t' => {
                    self.advance();
                }
                b'\n' => {
                    self.advance();
                    self.line += 1;
                }
                b'/' if self.peek_next() == b'/' => {
                    while self.peek() != b'\n' && !self.is_at_end() {
                        self.advance();
                    }
                }
                _ => return,
            }
        }
    }

    fn identifier(&mut self) -> Token<'a> {
        while is_alpha(self.peek()) || is_digit(self.peek()) {
            self.advance();
        }

        let text = &self.source[self.start..self.current];
        let kind = RESERVED_LOOKUP
            .get(text)
            .copied()
            .unwrap_or(TokenKind::Identifier);

        self.make_token(kind)
    }

    fn number(&mut self) -> Token<'a> {
        while is_digit(self.peek()) {
            self.advance();
        }

        if self.peek() == b'.' {
            self.advance();

            if !is_digit(self.peek()) {
                // Resynchronise on the next whitespace so the rest of the
                // garbled literal does not turn into a run of tokens.
                while !self.is_at_end() && !is_whitespace(self.peek()) {
                    self.advance();
                }
                return self.error_token(ErrorImpl::MalformedNumber);
            }

            while is_digit(self.peek()) {
                self.advance();
            }
        }

        self.make_token(TokenKind::Number)
    }

    fn string(&mut self) -> Token<'a> {
        self.quoted(b'"', TokenKind::String, ErrorImpl::UnterminatedString)
    }

    fn character(&mut self) -> Token<'a> {
        self.quoted(b'\'', TokenKind::Character, ErrorImpl::UnterminatedCharacter)
    }

    /// Scans up to the closing `delimiter` on the same line. The newline that
    /// ends an unterminated literal is left for `skip_whitespace`.
    fn quoted(&mut self, delimiter: u8, kind: TokenKind, unterminated: ErrorImpl) -> Token<'a> {
        while self.peek() != delimiter && self.peek() != b'\n' && !self.is_at_end() {
            self.advance();
        }

        if !self.match_byte(delimiter) {
            return self.error_token(unterminated);
        }

        self.make_token(kind)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    /// Yields every token including a single trailing `EOF`, then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let token = self.scan_token();
        if token.is_eof() {
            self.exhausted = true;
        }

        Some(token)
    }
}

pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).collect()
}
