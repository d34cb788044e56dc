//! Lexical error contract.

use thiserror::Error;

use crate::lexer::span::Span;
use crate::lexer::token::{Token, TokenKind};

/// Input text that matched no token rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected character `{text}`")]
pub struct LexError {
    /// Offending source text.
    pub text: String,
    /// Location of the offending text.
    pub span: Span,
}

impl LexError {
    /// Creates a lexical error value.
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    /// Extracts the error carried by an [`TokenKind::Error`] token.
    pub fn from_token(token: &Token) -> Option<Self> {
        (token.kind == TokenKind::Error).then(|| Self::new(token.lexeme.clone(), token.span))
    }
}
