//! Clause-language lexer.
//!
//! The lexer is a pull-based state machine: every call to
//! [`Lexer::next_token`] runs [`state::transition`] until one token is
//! complete. [`ChannelTokens`] runs the same machine on a producer thread
//! behind a rendezvous channel.

pub mod diagnostics;
pub mod span;
pub mod state;
pub mod token;

mod channel;
mod cursor;

use crate::lexer::cursor::Cursor;
use crate::lexer::state::{Action, LexState};

pub use channel::ChannelTokens;
pub use diagnostics::LexError;
pub use span::{ByteOffset, MAX_SOURCE_LEN, Span};
pub use token::{Token, TokenKind};

/// Anything that yields tokens in source order.
///
/// Implementations end with [`TokenKind::EndOfInput`] and keep returning it
/// on every later call.
pub trait TokenSource {
    /// Produces the next token.
    fn next_token(&mut self) -> Token;
}

/// Pull-based tokenizer over a borrowed source string.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    state: LexState,
    token_start: ByteOffset,
    cursor: Cursor,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `input`.
    ///
    /// Only the first [`MAX_SOURCE_LEN`] bytes are scanned; end of input is
    /// reported there for longer sources.
    pub fn new(input: &'a str) -> Self {
        Self {
            input: scannable_prefix(input, MAX_SOURCE_LEN),
            state: LexState::Start,
            token_start: ByteOffset::new(0),
            cursor: Cursor::new(),
        }
    }

    /// Returns the source this lexer scans.
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Returns `true` once the terminal token has been produced.
    pub fn is_finished(&self) -> bool {
        self.state == LexState::Finished
    }

    /// Scans and returns the next token.
    ///
    /// After [`TokenKind::EndOfInput`] has been returned, further calls keep
    /// returning it.
    pub fn next_token(&mut self) -> Token {
        loop {
            let rune = self.cursor.peek_char(self.input);
            let (next, action) = state::transition(self.state, rune);
            self.state = next;

            match action {
                Action::Skip => {
                    self.cursor.advance_char(self.input);
                    self.token_start = self.cursor.offset();
                }
                Action::Extend => {
                    self.cursor.advance_char(self.input);
                }
                Action::EmitWith(kind) => {
                    self.cursor.advance_char(self.input);
                    return self.emit(kind);
                }
                Action::EmitBefore(kind) => return self.emit(kind),
                Action::EmitEnd => return Token::end_of_input(self.cursor.offset()),
            }
        }
    }

    fn emit(&mut self, kind: TokenKind) -> Token {
        let span = Span::new(self.token_start, self.cursor.offset());
        let lexeme = &self.input[span.as_range()];
        self.token_start = self.cursor.offset();
        Token::new(kind, lexeme, span)
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        Lexer::next_token(self)
    }
}

/// Yields every token including the single trailing end-of-input token.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }
        Some(self.next_token())
    }
}

/// Longest prefix of `input` that fits in `limit` bytes and ends on a char
/// boundary.
pub(crate) fn scannable_prefix(input: &str, limit: usize) -> &str {
    if input.len() <= limit {
        return input;
    }
    let mut end = limit;
    while !input.is_char_boundary(end) {
        end -= 1;
    }
    &input[..end]
}

/// Tokenizes `input` eagerly.
///
/// The returned vector always ends with exactly one end-of-input token.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}
