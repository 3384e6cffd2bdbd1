use std::{fmt::Display, path::PathBuf};

use thiserror::Error;

use crate::lexer::tokens::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: u32,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: u32) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    /// Builds the diagnostic for an error token, `None` for any other token.
    pub fn from_token(token: &Token<'_>) -> Option<Self> {
        token.error().map(|error_impl| Error::new(error_impl, token.line))
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter => "UnexpectedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedCharacter => "UnterminatedCharacter",
            ErrorImpl::MalformedNumber => "MalformedNumber",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter => ErrorTip::None,
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "strings cannot span lines, did you miss a closing `\"`?",
            )),
            ErrorImpl::UnterminatedCharacter => ErrorTip::Suggestion(String::from(
                "character literals cannot span lines, did you miss a closing `'`?",
            )),
            ErrorImpl::MalformedNumber => ErrorTip::Suggestion(String::from(
                "a `.` in a number must be followed by at least one digit",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] {}", self.line, self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Lexical failures. The `Display` text of each variant is the lexeme of the
/// error token the scanner produces for it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Unexpected character.")]
    UnexpectedCharacter,
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Unterminated character.")]
    UnterminatedCharacter,
    #[error("Malformed number.")]
    MalformedNumber,
}

impl ErrorImpl {
    pub const ALL: [ErrorImpl; 4] = [
        ErrorImpl::UnexpectedCharacter,
        ErrorImpl::UnterminatedString,
        ErrorImpl::UnterminatedCharacter,
        ErrorImpl::MalformedNumber,
    ];

    pub fn message(&self) -> &'static str {
        match self {
            ErrorImpl::UnexpectedCharacter => "Unexpected character.",
            ErrorImpl::UnterminatedString => "Unterminated string.",
            ErrorImpl::UnterminatedCharacter => "Unterminated character.",
            ErrorImpl::MalformedNumber => "Malformed number.",
        }
    }

    pub fn from_message(message: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|error| error.message() == message)
    }
}

/// Failures of the REPL and file front-ends around the scanner.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("Usage: clex [path]")]
    Usage,
    #[error("Could not read file {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("scanning failed with {count} error(s)")]
    ScanFailed { count: usize },
}
