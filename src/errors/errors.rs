use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnterminatedCharacterLiteral => "UnterminatedCharacterLiteral",
            ErrorImpl::InvalidCharacterLiteral { .. } => "InvalidCharacterLiteral",
            ErrorImpl::UnterminatedBlockComment => "UnterminatedBlockComment",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedCharacterLiteral => ErrorTip::Suggestion(String::from(
                "A character literal needs one character and a closing `'` on the same line",
            )),
            ErrorImpl::InvalidCharacterLiteral { character } => ErrorTip::Suggestion(format!(
                "Expected `'` after `'{}`, character literals hold exactly one character",
                character.escape_default()
            )),
            ErrorImpl::UnterminatedBlockComment => {
                ErrorTip::Suggestion(String::from("Close the comment with `*/`"))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lexical Error at {}: {}", self.position, self.internal_error)
    }
}

impl std::error::Error for Error {}

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

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised character {}", quoted(.character))]
    UnrecognisedCharacter { character: char },
    #[error("unterminated character literal")]
    UnterminatedCharacterLiteral,
    #[error("invalid character literal {}", quoted(.character))]
    InvalidCharacterLiteral { character: char },
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
}

fn quoted(character: &char) -> String {
    format!("'{}'", character.escape_default())
}

/// Collects lexical diagnostics for one scan. Adding never fails and never
/// stops the scan.
#[derive(Debug, Default, Clone)]
pub struct ErrorReporter {
    errors: Vec<Error>,
}

impl ErrorReporter {
    pub fn new() -> Self {
        ErrorReporter { errors: vec![] }
    }

    pub fn add_error(&mut self, error: Error) {
        tracing::warn!("{}", error);
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
