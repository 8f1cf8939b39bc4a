//! Lexical analysis for MiniSquare source text.
//!
//! This module contains the tokenizer that turns a character stream into
//! the token list handed to the parser. It handles:
//!
//! - A rewindable character source with line/column tracking
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line (`!`, `//`) and block (`/* */`) comments and whitespace
//! - Error-tolerant scanning: malformed input becomes `Error` tokens plus
//!   diagnostics, never an aborted scan

pub mod lexer;
pub mod source;
pub mod tokens;
