#![allow(clippy::module_inception)]

use std::{
    fmt::{self, Write},
    fs,
    path::Path,
    sync::Once,
};

use crate::{
    errors::errors::{DriverError, Error, ErrorTip},
    lexer::{lexer::tokenize, tokens::Token},
};

pub mod errors;
pub mod lexer;
pub mod macros;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=clex=debug` or
/// `RUST_LOG=clex=trace`; logs go to stderr.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Scans `source` and renders one line per token, up to and including `EOF`.
///
/// ```text
///    1 Int              'int'
///    | Identifier       'x'
/// ```
pub fn render_tokens(source: &str) -> String {
    render_token_list(&tokenize(source))
}

/// Renders an already scanned token list in the same layout as
/// [`render_tokens`].
pub fn render_token_list(tokens: &[Token<'_>]) -> String {
    let mut output = String::new();
    let mut last_line = None;

    // Writing into a `String` cannot fail.
    for token in tokens {
        let _ = render_token(&mut output, token, &mut last_line);
    }

    output
}

fn render_token(
    output: &mut String,
    token: &Token<'_>,
    last_line: &mut Option<u32>,
) -> fmt::Result {
    if *last_line == Some(token.line) {
        output.push_str("   | ");
    } else {
        write!(output, "{:>4} ", token.line)?;
        *last_line = Some(token.line);
    }

    writeln!(output, "{:<16} '{}'", token.kind.to_string(), token.lexeme)
}

/// Collects the diagnostics for every error token in `tokens`.
pub fn scan_errors(tokens: &[Token<'_>]) -> Vec<Error> {
    tokens.iter().filter_map(Error::from_token).collect()
}

/// Returns the text of the 1-based `line` of `source`, without its newline.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    let index = (line as usize).checked_sub(1)?;
    source
        .split('\n')
        .nth(index)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

/// Reads a source file as raw bytes. Invalid UTF-8 sequences become U+FFFD,
/// which the scanner reports as an unexpected character outside comments and
/// literals.
pub fn read_source(path: &Path) -> Result<String, DriverError> {
    let bytes = fs::read(path).map_err(|source| DriverError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: UnterminatedString (strings cannot span lines, ...)
        -> main.c
           |
        20 | char *s = "abc;
           |
    */

    let mut output = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_error(&mut output, error, source, file);
    output
}

fn write_error(output: &mut String, error: &Error, source: &str, file: &str) -> fmt::Result {
    let line_string = error.get_line().to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        writeln!(output, "Error: {}", error.get_error_name())?;
    } else {
        writeln!(output, "Error: {} ({})", error.get_error_name(), error.get_tip())?;
    }
    writeln!(output, "-> {}", file)?;
    writeln!(output, "{:>padding$}", "|")?;

    let line_text = get_line(source, error.get_line()).unwrap_or_default();
    writeln!(output, "{} | {}", line_string, line_text.trim())?;
    writeln!(output, "{:>padding$}", "|")
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    eprint!("{}", format_error(error, source, file));
}
