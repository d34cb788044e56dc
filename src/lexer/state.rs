//! Tokenizer state machine.
//!
//! The machine is data only: [`transition`] maps the current state and the
//! rune under the cursor to a successor state and an [`Action`]. The driving
//! loop in [`crate::lexer::Lexer`] applies actions to its cursor.

use crate::lexer::token::TokenKind;

/// Identifier flavour selected by the first rune of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordKind {
    /// Lowercase-initial word.
    Atom,
    /// Uppercase-initial word.
    Variable,
}

impl WordKind {
    /// Token kind emitted when the word ends.
    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::Atom => TokenKind::Atom,
            Self::Variable => TokenKind::Variable,
        }
    }
}

/// Scanner state between runes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexState {
    /// Between tokens.
    Start,
    /// Inside an identifier run.
    Word(WordKind),
    /// After a `:` waiting for `-`.
    Colon,
    /// End of input was emitted. Terminal.
    Finished,
}

/// Effect of one transition on the cursor and the pending token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Consume the rune without making it part of any token.
    Skip,
    /// Consume the rune into the pending token.
    Extend,
    /// Consume the rune, then emit the pending token.
    EmitWith(TokenKind),
    /// Emit the pending token and leave the rune for the next state.
    EmitBefore(TokenKind),
    /// Emit the terminal token.
    EmitEnd,
}

/// Pure transition function of the tokenizer.
pub fn transition(state: LexState, rune: Option<char>) -> (LexState, Action) {
    match state {
        LexState::Start => start(rune),
        LexState::Word(kind) => match rune {
            Some(ch) if is_identifier_continue(ch) => (state, Action::Extend),
            _ => (LexState::Start, Action::EmitBefore(kind.token_kind())),
        },
        LexState::Colon => match rune {
            Some('-') => (LexState::Start, Action::EmitWith(TokenKind::ColonDash)),
            _ => (LexState::Start, Action::EmitBefore(TokenKind::Error)),
        },
        LexState::Finished => (LexState::Finished, Action::EmitEnd),
    }
}

fn start(rune: Option<char>) -> (LexState, Action) {
    let Some(ch) = rune else {
        return (LexState::Finished, Action::EmitEnd);
    };

    if let Some(kind) = punctuation_kind(ch) {
        return (LexState::Start, Action::EmitWith(kind));
    }

    match ch {
        ':' => (LexState::Colon, Action::Extend),
        ch if ch.is_whitespace() => (LexState::Start, Action::Skip),
        ch if ch.is_uppercase() => (LexState::Word(WordKind::Variable), Action::Extend),
        ch if ch.is_lowercase() => (LexState::Word(WordKind::Atom), Action::Extend),
        _ => (LexState::Start, Action::EmitWith(TokenKind::Error)),
    }
}

fn punctuation_kind(ch: char) -> Option<TokenKind> {
    match ch {
        '(' => Some(TokenKind::OpenParen),
        ')' => Some(TokenKind::CloseParen),
        '.' => Some(TokenKind::Dot),
        ',' => Some(TokenKind::Comma),
        _ => None,
    }
}

/// Letters, decimal digits, and connector punctuation continue an identifier.
pub fn is_identifier_continue(ch: char) -> bool {
    ch.is_alphabetic() || ch.is_ascii_digit() || is_connector_punctuation(ch)
}

/// Unicode general category `Pc`.
fn is_connector_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '_' | '\u{203F}'
            | '\u{2040}'
            | '\u{2054}'
            | '\u{FE33}'
            | '\u{FE34}'
            | '\u{FE4D}'
            | '\u{FE4E}'
            | '\u{FE4F}'
            | '\u{FF3F}'
    )
}
