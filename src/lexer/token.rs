//! Token model produced by the lexer.

use std::fmt;

use crate::lexer::span::{ByteOffset, Span};

/// Closed set of token categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `.` clause terminator.
    Dot,
    /// `:-` rule neck.
    ColonDash,
    /// `,` argument separator.
    Comma,
    /// Lowercase-initial identifier.
    Atom,
    /// Uppercase-initial identifier.
    Variable,
    /// Reserved for numeric literals; never produced by the lexer yet.
    Number,
    /// Text that matches no token rule.
    Error,
    /// Terminal token, produced exactly once.
    EndOfInput,
}

impl TokenKind {
    /// Returns the label used when this kind is expected by the grammar.
    pub const fn expected_label(self) -> &'static str {
        match self {
            Self::OpenParen => "`(`",
            Self::CloseParen => "`)`",
            Self::Dot => "`.`",
            Self::ColonDash => "`:-`",
            Self::Comma => "`,`",
            Self::Atom => "an atom",
            Self::Variable => "a variable",
            Self::Number => "a number",
            Self::Error => "an invalid token",
            Self::EndOfInput => "end of input",
        }
    }
}

/// A lexical token with raw text and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token category.
    pub kind: TokenKind,
    /// Token text exactly as it appears in the source.
    pub lexeme: String,
    /// Byte-oriented source span.
    pub span: Span,
}

impl Token {
    /// Creates a token value.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Creates the terminal token positioned at `offset`.
    pub fn end_of_input(offset: ByteOffset) -> Self {
        Self::new(TokenKind::EndOfInput, String::new(), Span::empty_at(offset))
    }

    /// Byte offset of the token's first character.
    pub fn offset(&self) -> ByteOffset {
        self.span.start
    }

    /// Returns `true` for the terminal token.
    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Display width of the token in runes.
    pub fn rune_width(&self) -> usize {
        self.lexeme.chars().count()
    }
}

/// Human-readable token description used in diagnostics.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => f.write_str("end of input"),
            TokenKind::Error => write!(f, "invalid character `{}`", cut(&self.lexeme)),
            TokenKind::Atom => write!(f, "atom '{}'", cut(&self.lexeme)),
            TokenKind::Variable => write!(f, "variable {}", cut(&self.lexeme)),
            TokenKind::Number => write!(f, "number {}", cut(&self.lexeme)),
            _ => write!(f, "`{}`", self.lexeme),
        }
    }
}

fn cut(text: &str) -> String {
    if text.chars().count() > 10 {
        let head: String = text.chars().take(7).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
