//! Lexical error types and the error reporter.
//!
//! This module defines:
//!
//! - Error structures carrying the position of the offending token
//! - The lexical error variants the scanner can raise
//! - Error formatting and suggestions
//! - `ErrorReporter`, which accumulates diagnostics across one scan

pub mod errors;
