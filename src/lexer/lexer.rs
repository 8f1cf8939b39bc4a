use tracing::{debug, trace};
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::{
    errors::errors::{Error, ErrorImpl, ErrorReporter},
    MK_ERROR, MK_TOKEN,
};

use super::{
    source::{CharacterSource, SourceReader, END_OF_TEXT},
    tokens::{Token, TokenType, KEYWORD_LOOKUP, SPECIAL_SYMBOL_LOOKUP},
};

/// Characters that begin an operator token. `!` is listed but never reaches
/// the operator rule: it always opens a line comment.
const OPERATOR_STARTS: &str = "+-*/<>=!";

/// Letters are the `L*` general categories only; letter-numbers such as
/// `Ⅻ` are not letters.
fn is_letter(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Decimal digits (`Nd`) of any script. `²` and other `No` numbers are not
/// digits.
fn is_digit(ch: char) -> bool {
    get_general_category(ch) == GeneralCategory::DecimalNumber
}

fn is_letter_or_digit(ch: char) -> bool {
    is_letter(ch) || is_digit(ch)
}

/// Class of the character a token starts with, in dispatch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Letter,
    Digit,
    OperatorStart,
    Colon,
    QuestionMark,
    Semicolon,
    Tilde,
    LeftBracket,
    RightBracket,
    Quote,
    EndOfText,
    Other,
}

pub struct Tokenizer<'a, R: CharacterSource> {
    reader: R,
    reporter: &'a mut ErrorReporter,
    spelling: String,
}

impl<'a, R: CharacterSource> Tokenizer<'a, R> {
    pub fn new(reader: R, reporter: &'a mut ErrorReporter) -> Tokenizer<'a, R> {
        Tokenizer {
            reader,
            reporter,
            spelling: String::new(),
        }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Scans the whole input. The result always ends with one `EndOfText`
    /// token; the reader is closed afterwards.
    pub fn scan_all(&mut self) -> Vec<Token> {
        let mut tokens = vec![];

        loop {
            let token = self.next_token();
            let finished = token.kind == TokenType::EndOfText;
            tokens.push(token);

            if finished {
                break;
            }
        }

        self.reader.close();
        debug!(
            tokens = tokens.len(),
            errors = self.reporter.error_count(),
            "scan finished"
        );
        tokens
    }

    fn next_token(&mut self) -> Token {
        self.skip_separators();

        let start = self.reader.current_position();
        let kind = match self.scan_token() {
            Ok(kind) => kind,
            Err(error) => {
                self.reporter.add_error(MK_ERROR!(error, start));
                TokenType::Error
            }
        };

        let token = MK_TOKEN!(kind, std::mem::take(&mut self.spelling), start);
        trace!("scanned {}", token);
        token
    }

    fn skip_separators(&mut self) {
        while !self.reader.is_at_end() {
            let current = self.reader.current();

            if current == '!' || (current == '/' && self.peek() == '/') {
                self.reader.skip_to_end_of_line();
            } else if current == '/' && self.peek() == '*' {
                self.skip_block_comment();
            } else if current.is_whitespace() {
                self.reader.advance();
            } else {
                break;
            }
        }
    }

    fn skip_block_comment(&mut self) {
        let start = self.reader.current_position();
        self.reader.advance();
        self.reader.advance();

        while !(self.reader.current() == '*' && self.peek() == '/') {
            if self.reader.is_at_end() {
                self.reporter
                    .add_error(MK_ERROR!(ErrorImpl::UnterminatedBlockComment, start));
                return;
            }
            self.reader.advance();
        }

        self.reader.advance();
        self.reader.advance();
    }

    fn classify(&self) -> CharClass {
        let current = self.reader.current();

        if is_letter(current) {
            CharClass::Letter
        } else if is_digit(current) {
            CharClass::Digit
        } else if OPERATOR_STARTS.contains(current) {
            CharClass::OperatorStart
        } else if current == ':' {
            CharClass::Colon
        } else if current == '?' {
            CharClass::QuestionMark
        } else if current == ';' {
            CharClass::Semicolon
        } else if current == '~' {
            CharClass::Tilde
        } else if current == '(' {
            CharClass::LeftBracket
        } else if current == ')' {
            CharClass::RightBracket
        } else if current == '\'' {
            CharClass::Quote
        } else if self.reader.is_at_end() {
            CharClass::EndOfText
        } else {
            CharClass::Other
        }
    }

    fn scan_token(&mut self) -> Result<TokenType, ErrorImpl> {
        self.spelling.clear();

        match self.classify() {
            CharClass::Letter => {
                self.take_it();
                while is_letter_or_digit(self.reader.current()) {
                    self.take_it();
                }

                Ok(KEYWORD_LOOKUP
                    .get(self.spelling.as_str())
                    .copied()
                    .unwrap_or(TokenType::Identifier))
            }
            CharClass::Digit => {
                self.take_it();
                while is_digit(self.reader.current()) {
                    self.take_it();
                }

                Ok(TokenType::IntLiteral)
            }
            CharClass::OperatorStart => {
                self.take_it();
                if self.reader.current() == '=' {
                    self.take_it();
                }

                Ok(SPECIAL_SYMBOL_LOOKUP
                    .get(self.spelling.as_str())
                    .copied()
                    .unwrap_or(TokenType::Operator))
            }
            CharClass::Colon => {
                self.take_it();
                if self.reader.current() == '=' {
                    self.take_it();
                    return Ok(TokenType::Becomes);
                }

                Ok(TokenType::Colon)
            }
            CharClass::QuestionMark => self.take_single(TokenType::QuestionMark),
            CharClass::Semicolon => self.take_single(TokenType::Semicolon),
            CharClass::Tilde => self.take_single(TokenType::Is),
            CharClass::LeftBracket => self.take_single(TokenType::LeftBracket),
            CharClass::RightBracket => self.take_single(TokenType::RightBracket),
            CharClass::Quote => self.scan_character_literal(),
            CharClass::EndOfText => {
                self.spelling.push(END_OF_TEXT);
                Ok(TokenType::EndOfText)
            }
            CharClass::Other => {
                let character = self.reader.current();
                self.take_it();

                Err(ErrorImpl::UnrecognisedCharacter { character })
            }
        }
    }

    fn scan_character_literal(&mut self) -> Result<TokenType, ErrorImpl> {
        self.take_it();

        if self.reader.is_at_end() || self.reader.current() == '\n' {
            return Err(ErrorImpl::UnterminatedCharacterLiteral);
        }

        let character = self.reader.current();
        self.take_it();

        // Not resynchronised: without a closing quote the stream stays
        // right after the content character.
        if !self.reader.is_at_end() && self.reader.current() == '\'' {
            self.take_it();
            return Ok(TokenType::CharLiteral);
        }

        Err(ErrorImpl::InvalidCharacterLiteral { character })
    }

    fn take_single(&mut self, kind: TokenType) -> Result<TokenType, ErrorImpl> {
        self.take_it();
        Ok(kind)
    }

    fn take_it(&mut self) {
        self.spelling.push(self.reader.current());
        self.reader.advance();
    }

    /// Looks one character ahead by advancing and rewinding the reader.
    fn peek(&mut self) -> char {
        if self.reader.is_at_end() {
            return END_OF_TEXT;
        }

        self.reader.advance();
        let next = self.reader.current();
        self.reader.rewind_one();
        next
    }
}

#[tracing::instrument(skip_all, fields(characters = source.len()), level = "debug")]
pub fn tokenize(source: &str, reporter: &mut ErrorReporter) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(SourceReader::new(source), reporter);
    tokenizer.scan_all()
}
