//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_OPERATOR!` - Resolves an operator by trying its extensions longest-first
//!
//! These macros keep the dispatch table in the lexer readable.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The borrowed lexeme
/// * `$line` - The 1-based line the lexeme starts on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42", 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $line:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            line: $line,
        }
    };
}

/// Resolves an operator whose first byte has already been consumed.
///
/// Each `[bytes] => kind` arm is tried in order with `match_byte`; a
/// multi-byte arm only matches when all of its bytes follow. Arms must be
/// listed longest-first. When nothing matches, `$fallback` is produced.
///
/// # Example
///
/// ```ignore
/// MK_OPERATOR!(self, TokenKind::Plus;
///     [b'+'] => TokenKind::PlusPlus,
///     [b'='] => TokenKind::PlusEquals,
/// )
/// ```
#[macro_export]
macro_rules! MK_OPERATOR {
    ($lexer:expr, $fallback:expr; $([$($byte:expr),+] => $kind:expr),+ $(,)?) => {{
        let kind = 'resolved: {
            $(
                if $lexer.match_sequence(&[$($byte),+]) {
                    break 'resolved $kind;
                }
            )+
            $fallback
        };
        $lexer.make_token(kind)
    }};
}
