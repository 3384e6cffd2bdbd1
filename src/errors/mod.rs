//! Error types and error reporting for the scanner.
//!
//! This module defines:
//!
//! - The lexical error taxonomy carried by `Error` tokens
//! - Line-stamped diagnostics with names and suggestions
//! - Errors raised by the REPL and file front-ends

pub mod errors;
