//! Parser diagnostic contracts.

use miette::Diagnostic;
use thiserror::Error;

use crate::diagnostics;
use crate::lexer::{LexError, Span, Token, TokenKind};

/// Stable diagnostic categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxErrorKind {
    /// Source text matched no token rule.
    Lexical,
    /// A token did not match the grammar at the current rule.
    UnexpectedToken,
    /// Terms nested beyond [`crate::parser::ParseOptions::max_depth`].
    NestingTooDeep,
    /// Diagnostic count reached [`crate::parser::ParseOptions::max_errors`].
    TooManyErrors,
    /// Source longer than [`crate::lexer::MAX_SOURCE_LEN`]; nothing was parsed.
    SourceTooLarge,
}

/// One located diagnostic, complete enough to print without the source.
#[allow(unused_assignments)]
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{location}: {message}")]
#[diagnostic(code(clausal::syntax))]
pub struct SyntaxError {
    /// Diagnostic category.
    pub kind: SyntaxErrorKind,
    /// `name:line:col`, one-based.
    pub location: String,
    /// Message text without location prefix.
    pub message: String,
    /// Innermost grammar rule active when the error was found.
    pub context: String,
    /// Source line followed by a tilde underline of the offending text.
    pub sample: String,
    /// Labels of the token kinds the grammar would have accepted.
    pub expected: Vec<String>,
    /// Description of the token actually found.
    pub found: String,
    /// Byte span of the offending text.
    #[label("here")]
    pub span: Span,
}

impl SyntaxError {
    /// Creates a diagnostic located at `span` within `source`.
    pub fn at(
        kind: SyntaxErrorKind,
        source_name: &str,
        source: &str,
        span: Span,
        message: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        let location = diagnostics::locate(source, span.start);
        Self {
            kind,
            location: diagnostics::format_location(source_name, &location),
            message: message.into(),
            context: context.into(),
            sample: diagnostics::sample(source, span),
            expected: Vec::new(),
            found: String::new(),
            span,
        }
    }

    /// Creates an `UnexpectedToken` diagnostic.
    pub fn unexpected_token(
        source_name: &str,
        source: &str,
        expected: &[TokenKind],
        rule: &str,
        found: &Token,
    ) -> Self {
        let expected_text = expected_list(expected);
        let message = format!("expected {expected_text} when parsing {rule}, got {found}");
        Self {
            expected: expected
                .iter()
                .map(|kind| kind.expected_label().to_string())
                .collect(),
            found: found.to_string(),
            ..Self::at(
                SyntaxErrorKind::UnexpectedToken,
                source_name,
                source,
                found.span,
                message,
                rule,
            )
        }
    }

    /// Creates a `Lexical` diagnostic from a lexer error.
    pub fn lexical(source_name: &str, source: &str, error: &LexError) -> Self {
        Self {
            found: error.text.clone(),
            ..Self::at(
                SyntaxErrorKind::Lexical,
                source_name,
                source,
                error.span,
                error.to_string(),
                "token",
            )
        }
    }

    /// Creates a `NestingTooDeep` diagnostic at the token that went too deep.
    pub fn nesting_too_deep(
        source_name: &str,
        source: &str,
        limit: usize,
        rule: &str,
        found: &Token,
    ) -> Self {
        Self {
            found: found.to_string(),
            ..Self::at(
                SyntaxErrorKind::NestingTooDeep,
                source_name,
                source,
                found.span,
                format!("terms nested deeper than {limit} levels when parsing {rule}"),
                rule,
            )
        }
    }

    /// Creates the final `TooManyErrors` diagnostic.
    ///
    /// It takes the place of the first diagnostic past the limit, at that
    /// diagnostic's span.
    pub fn too_many_errors(
        source_name: &str,
        source: &str,
        limit: usize,
        span: Span,
        found: impl Into<String>,
    ) -> Self {
        Self {
            found: found.into(),
            ..Self::at(
                SyntaxErrorKind::TooManyErrors,
                source_name,
                source,
                span,
                format!("too many errors ({limit}), giving up"),
                "program",
            )
        }
    }

    /// Creates the `SourceTooLarge` diagnostic, located at the start of the
    /// source.
    pub fn source_too_large(source_name: &str, source: &str, limit: usize) -> Self {
        Self::at(
            SyntaxErrorKind::SourceTooLarge,
            source_name,
            source,
            Span::default(),
            format!("source is {} bytes, over the {limit}-byte limit", source.len()),
            "program",
        )
    }

    /// Renders the three-line compiler-style text for this diagnostic.
    pub fn render(&self) -> String {
        diagnostics::render(self)
    }
}

/// Joins expected-kind labels with `or`.
pub fn expected_list(expected: &[TokenKind]) -> String {
    expected
        .iter()
        .map(|kind| kind.expected_label())
        .collect::<Vec<_>>()
        .join(" or ")
}
