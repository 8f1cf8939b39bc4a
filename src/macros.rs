//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_ERROR!` - Creates a positioned lexical Error

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenType
/// * `$spelling` - The exact text the token was scanned from
/// * `$position` - Where the token's first character sits
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenType::IntLiteral, "42".to_string(), Position::new(1, 1));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $spelling:expr, $position:expr) => {
        Token {
            kind: $kind,
            spelling: $spelling,
            position: $position,
        }
    };
}

/// Creates a lexical Error at a position.
///
/// ```ignore
/// reporter.add_error(MK_ERROR!(ErrorImpl::UnterminatedBlockComment, start));
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($error_impl:expr, $position:expr) => {
        Error::new($error_impl, $position)
    };
}
