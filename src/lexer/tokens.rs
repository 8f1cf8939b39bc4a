use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, TokenType> = {
        let mut map = HashMap::new();
        map.insert("begin", TokenType::Begin);
        map.insert("const", TokenType::Const);
        map.insert("do", TokenType::Do);
        map.insert("else", TokenType::Else);
        map.insert("end", TokenType::End);
        map.insert("if", TokenType::If);
        map.insert("in", TokenType::In);
        map.insert("let", TokenType::Let);
        map.insert("loop", TokenType::Loop);
        map.insert("then", TokenType::Then);
        map.insert("var", TokenType::Var);
        map.insert("while", TokenType::While);
        map
    };

    pub static ref SPECIAL_SYMBOL_LOOKUP: HashMap<&'static str, TokenType> = {
        let mut map = HashMap::new();
        map.insert("<=", TokenType::LessEquals);
        map.insert(">=", TokenType::GreaterEquals);
        map.insert("==", TokenType::Equals);
        map.insert("!=", TokenType::NotEquals);
        map.insert("=>", TokenType::Arrow);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenType {
    EndOfText,
    Error,

    Identifier,
    IntLiteral,
    CharLiteral,

    Operator,

    LessEquals,    // <=
    GreaterEquals, // >=
    Equals,        // ==
    NotEquals,     // !=
    Arrow,         // =>

    Colon,
    Becomes, // :=
    QuestionMark,
    Semicolon,
    Is, // ~
    LeftBracket,
    RightBracket,

    // Reserved
    Begin,
    Const,
    Do,
    Else,
    End,
    If,
    In,
    Let,
    Loop,
    Then,
    Var,
    While,
}

impl TokenType {
    pub fn is_keyword(&self) -> bool {
        KEYWORD_LOOKUP.values().any(|kind| kind == self)
    }
}

impl Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenType,
    pub spelling: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?} at {}", self.kind, self.spelling, self.position)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenType]) -> bool {
        kinds.contains(&self.kind)
    }

    /// The line the command line listing shows for this token. Only classes
    /// whose spelling varies show it, escaped so control characters stay
    /// visible.
    pub fn listing_line(&self) -> String {
        if self.is_one_of_many(&[
            TokenType::Identifier,
            TokenType::IntLiteral,
            TokenType::CharLiteral,
            TokenType::Operator,
            TokenType::Error,
        ]) {
            format!(
                "{:>7} {} ({})",
                self.position.to_string(),
                self.kind,
                self.spelling.escape_debug()
            )
        } else {
            format!("{:>7} {} ()", self.position.to_string(), self.kind)
        }
    }

    pub fn debug(&self) {
        println!("{}", self.listing_line());
    }
}
