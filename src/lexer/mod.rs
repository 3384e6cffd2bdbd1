//! Lexical analysis for C-like source.
//!
//! This module contains the hand-written scanner that turns a borrowed
//! source buffer into tokens, one call at a time. It handles:
//!
//! - Keywords, identifiers and numeric, string and character literals
//! - Single and multi-character operators, resolved longest-first
//! - Line tracking, whitespace and `//` comments
//! - Error tokens for malformed input, without aborting the scan

pub mod lexer;
pub mod tokens;
