use crate::Position;

/// Returned by `current()` once the input is exhausted.
pub const END_OF_TEXT: char = '\0';

/// A rewindable cursor over the characters of one source text.
pub trait CharacterSource {
    fn current(&self) -> char;
    fn current_position(&self) -> Position;
    fn advance(&mut self);
    fn rewind_one(&mut self);
    fn skip_to_end_of_line(&mut self);
    fn close(&mut self);

    /// True once every character has been consumed. Authoritative over
    /// comparing `current()` with `END_OF_TEXT`, since the input itself may
    /// contain a NUL.
    fn is_at_end(&self) -> bool;
}

#[derive(Debug, Clone)]
pub struct SourceReader {
    chars: Vec<char>,
    // One entry per character plus one for the end of input.
    positions: Vec<Position>,
    pos: usize,
    closed: bool,
}

impl SourceReader {
    pub fn new(source: &str) -> SourceReader {
        let chars: Vec<char> = source.chars().collect();
        let mut positions = Vec::with_capacity(chars.len() + 1);
        let mut position = Position::start();

        for ch in &chars {
            positions.push(position);
            if *ch == '\n' {
                position = Position::new(position.line + 1, 1);
            } else {
                position = Position::new(position.line, position.column + 1);
            }
        }
        positions.push(position);

        SourceReader {
            chars,
            positions,
            pos: 0,
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl CharacterSource for SourceReader {
    fn current(&self) -> char {
        self.chars.get(self.pos).copied().unwrap_or(END_OF_TEXT)
    }

    fn current_position(&self) -> Position {
        self.positions[self.pos]
    }

    fn advance(&mut self) {
        if self.pos < self.chars.len() {
            self.pos += 1;
        }
    }

    fn rewind_one(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    fn skip_to_end_of_line(&mut self) {
        while !self.is_at_end() && self.current() != '\n' {
            self.advance();
        }
        self.advance();
    }

    fn close(&mut self) {
        tracing::debug!(characters = self.chars.len(), "closing source reader");
        self.closed = true;
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{CharacterSource, SourceReader, END_OF_TEXT};
    use crate::Position;

    #[test]
    fn test_positions_follow_lines() {
        let mut reader = SourceReader::new("ab\nc");

        assert_eq!(reader.current_position(), Position::new(1, 1));
        reader.advance();
        assert_eq!(reader.current_position(), Position::new(1, 2));
        reader.advance();
        assert_eq!(reader.current(), '\n');
        assert_eq!(reader.current_position(), Position::new(1, 3));
        reader.advance();
        assert_eq!(reader.current(), 'c');
        assert_eq!(reader.current_position(), Position::new(2, 1));
        reader.advance();
        assert!(reader.is_at_end());
        assert_eq!(reader.current_position(), Position::new(2, 2));
    }

    #[test]
    fn test_end_sentinel_is_stable() {
        let mut reader = SourceReader::new("x");
        reader.advance();

        for _ in 0..3 {
            assert_eq!(reader.current(), END_OF_TEXT);
            reader.advance();
        }
        assert!(reader.is_at_end());
    }

    #[test]
    fn test_rewind_is_exact() {
        let mut reader = SourceReader::new("a\nb");
        reader.advance();
        reader.advance();
        assert_eq!(reader.current_position(), Position::new(2, 1));

        reader.rewind_one();
        assert_eq!(reader.current(), '\n');
        assert_eq!(reader.current_position(), Position::new(1, 2));

        reader.rewind_one();
        reader.rewind_one();
        assert_eq!(reader.current(), 'a');
        assert_eq!(reader.current_position(), Position::start());
    }

    #[test]
    fn test_skip_to_end_of_line() {
        let mut reader = SourceReader::new("! comment\nnext");
        reader.skip_to_end_of_line();
        assert_eq!(reader.current(), 'n');
        assert_eq!(reader.current_position(), Position::new(2, 1));

        let mut reader = SourceReader::new("// no newline");
        reader.skip_to_end_of_line();
        assert!(reader.is_at_end());
    }

    #[test]
    fn test_embedded_nul_is_not_end() {
        let reader = SourceReader::new("\0x");

        assert_eq!(reader.current(), '\0');
        assert!(!reader.is_at_end());
    }

    #[test]
    fn test_close() {
        let mut reader = SourceReader::new("");
        assert!(reader.is_at_end());
        assert!(!reader.is_closed());
        reader.close();
        assert!(reader.is_closed());
    }
}
