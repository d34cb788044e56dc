//! Token stream with one token of lookahead.

use crate::lexer::{LexError, Token, TokenSource};

/// Single-slot lookahead buffer over a [`TokenSource`].
///
/// Error tokens never reach the grammar: they are recorded as [`LexError`]s
/// and skipped. Once end of input has been seen, [`Self::next`] and
/// [`Self::peek`] keep returning it without touching the source again.
#[derive(Debug)]
pub struct TokenStream<S> {
    source: S,
    lookahead: Option<Token>,
    end_of_input: Option<Token>,
    lex_errors: Vec<LexError>,
}

impl<S: TokenSource> TokenStream<S> {
    /// Creates a stream over `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            lookahead: None,
            end_of_input: None,
            lex_errors: Vec::new(),
        }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> &Token {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.pull(),
        };
        self.lookahead.insert(token)
    }

    /// Consumes and returns the next token.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Token {
        match self.lookahead.take() {
            Some(token) => token,
            None => self.pull(),
        }
    }

    /// Consumes tokens through end of input.
    ///
    /// Returns the number of tokens discarded, end of input excluded.
    pub fn drain(&mut self) -> usize {
        let mut discarded = 0;
        while !self.next().is_end_of_input() {
            discarded += 1;
        }
        discarded
    }

    /// Returns `true` once end of input has been pulled from the source.
    pub fn reached_end_of_input(&self) -> bool {
        self.end_of_input.is_some()
    }

    /// Takes lexical errors recorded since the previous call.
    pub fn take_lex_errors(&mut self) -> Vec<LexError> {
        std::mem::take(&mut self.lex_errors)
    }

    /// Consumes the stream and returns its source.
    pub fn into_source(self) -> S {
        self.source
    }

    fn pull(&mut self) -> Token {
        if let Some(end) = &self.end_of_input {
            return end.clone();
        }

        loop {
            let token = self.source.next_token();
            if let Some(error) = LexError::from_token(&token) {
                self.lex_errors.push(error);
                continue;
            }
            if token.is_end_of_input() {
                self.end_of_input = Some(token.clone());
            }
            return token;
        }
    }
}
