#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

/// A 1-based (line, column) location in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the line `position` points into, without its line break.
pub fn get_line_at_position(source: &str, position: Position) -> Option<String> {
    if position.line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(position.line as usize - 1)
        .map(|line| line.trim_end_matches('\r').to_string())
}

#[cfg(test)]
mod tests {
    use super::{get_line_at_position, Position};

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nsecond\n\n    Testing ( )\n";

        assert_eq!(
            get_line_at_position(source, Position::new(1, 10)).as_deref(),
            Some("Hello, world!")
        );
        assert_eq!(
            get_line_at_position(source, Position::new(4, 8)).as_deref(),
            Some("    Testing ( )")
        );
        assert_eq!(get_line_at_position(source, Position::new(3, 1)).as_deref(), Some(""));
        assert_eq!(get_line_at_position(source, Position::new(9, 1)), None);
        assert_eq!(get_line_at_position(source, Position::new(0, 1)), None);
    }

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(1, 9) < Position::new(2, 1));
        assert!(Position::new(2, 1) < Position::new(2, 2));
        assert_eq!(Position::start().to_string(), "1:1");
    }

    #[test]
    fn test_remove_starting_whitespace() {
        assert_eq!(
            super::remove_starting_whitespace("   let x"),
            (String::from("let x"), 3)
        );
        assert_eq!(super::remove_starting_whitespace("x"), (String::from("x"), 0));
    }
}

pub fn display_error(error: &Error, source: &str, file_name: &str) {
    /*
        error: message
        -> square.msq
           |
        20 | x := @;
           | -----^
    */

    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error);
    } else {
        eprintln!("Error: {} ({})", error, error.get_tip());
    }
    eprintln!("-> {}:{}", file_name, position);

    let Some(line_text) = get_line_at_position(source, *position) else {
        return;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    eprintln!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
