use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::errors::errors::ErrorImpl;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("auto", TokenKind::Auto);
        map.insert("break", TokenKind::Break);
        map.insert("case", TokenKind::Case);
        map.insert("char", TokenKind::Char);
        map.insert("const", TokenKind::Const);
        map.insert("continue", TokenKind::Continue);
        map.insert("default", TokenKind::Default);
        map.insert("do", TokenKind::Do);
        map.insert("double", TokenKind::Double);
        map.insert("else", TokenKind::Else);
        map.insert("enum", TokenKind::Enum);
        map.insert("extern", TokenKind::Extern);
        map.insert("float", TokenKind::Float);
        map.insert("for", TokenKind::For);
        map.insert("goto", TokenKind::Goto);
        map.insert("if", TokenKind::If);
        map.insert("int", TokenKind::Int);
        map.insert("long", TokenKind::Long);
        map.insert("register", TokenKind::Register);
        map.insert("return", TokenKind::Return);
        map.insert("short", TokenKind::Short);
        map.insert("signed", TokenKind::Signed);
        map.insert("sizeof", TokenKind::Sizeof);
        map.insert("static", TokenKind::Static);
        map.insert("struct", TokenKind::Struct);
        map.insert("switch", TokenKind::Switch);
        map.insert("typedef", TokenKind::Typedef);
        map.insert("union", TokenKind::Union);
        map.insert("unsigned", TokenKind::Unsigned);
        map.insert("void", TokenKind::Void);
        map.insert("volatile", TokenKind::Volatile);
        map.insert("while", TokenKind::While);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Error,
    Identifier,
    Number,
    String,
    Character,

    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    Comma,
    Semicolon,
    Tilde,
    Hash,
    Dot,
    Colon,
    Question,

    Plus,
    PlusPlus,    // ++
    PlusEquals,  // +=
    Dash,
    MinusMinus,  // --
    MinusEquals, // -=
    Arrow,       // ->
    Star,
    StarEquals,
    Slash,
    SlashEquals,
    Percent,
    PercentEquals,

    Ampersand,       // &
    AmpersandEquals, // &=
    And,             // &&
    Pipe,            // |
    PipeEquals,      // |=
    Or,              // ||
    Caret,
    CaretEquals,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    ShiftLeft,
    ShiftLeftEquals,
    Greater,
    GreaterEquals,
    ShiftRight,
    ShiftRightEquals,

    // Reserved
    Auto,
    Break,
    Case,
    Char,
    Const,
    Continue,
    Default,
    Do,
    Double,
    Else,
    Enum,
    Extern,
    Float,
    For,
    Goto,
    If,
    Int,
    Long,
    Register,
    Return,
    Short,
    Signed,
    Sizeof,
    Static,
    Struct,
    Switch,
    Typedef,
    Union,
    Unsigned,
    Void,
    Volatile,
    While,
}

impl TokenKind {
    pub fn is_reserved(&self) -> bool {
        matches!(
            self,
            TokenKind::Auto
                | TokenKind::Break
                | TokenKind::Case
                | TokenKind::Char
                | TokenKind::Const
                | TokenKind::Continue
                | TokenKind::Default
                | TokenKind::Do
                | TokenKind::Double
                | TokenKind::Else
                | TokenKind::Enum
                | TokenKind::Extern
                | TokenKind::Float
                | TokenKind::For
                | TokenKind::Goto
                | TokenKind::If
                | TokenKind::Int
                | TokenKind::Long
                | TokenKind::Register
                | TokenKind::Return
                | TokenKind::Short
                | TokenKind::Signed
                | TokenKind::Sizeof
                | TokenKind::Static
                | TokenKind::Struct
                | TokenKind::Switch
                | TokenKind::Typedef
                | TokenKind::Union
                | TokenKind::Unsigned
                | TokenKind::Void
                | TokenKind::Volatile
                | TokenKind::While
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified, line-stamped view into the scanned source.
///
/// `lexeme` borrows from the source buffer the token was scanned from, except
/// for [`TokenKind::Error`] tokens where it holds the static diagnostic text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: &'a str,
    pub line: u32,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}' (line {})", self.kind, self.lexeme, self.line)
    }
}

impl<'a> Token<'a> {
    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }

    pub fn is_literal(&self) -> bool {
        self.is_one_of_many(&[TokenKind::Number, TokenKind::String, TokenKind::Character])
    }

    /// The failure an error token reports, `None` for every other kind.
    pub fn error(&self) -> Option<ErrorImpl> {
        if !self.is_error() {
            return None;
        }

        ErrorImpl::from_message(self.lexeme)
    }
}
