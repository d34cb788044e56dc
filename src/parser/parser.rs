//! Recursive-descent parser and entrypoints.
//!
//! Grammar, LL(1):
//!
//! ```text
//! Program      = { ClauseOrFact } EndOfInput .
//! ClauseOrFact = ClauseHead ClauseBody .
//! ClauseHead   = Atom [ ArgList ] .
//! ArgList      = "(" Term { "," Term } ")" .
//! ClauseBody   = "." | ":-" Term "." .
//! Term         = Variable | ClauseHead .
//! ```

use tracing::{debug, error, warn};

use crate::lexer::{ChannelTokens, Lexer, MAX_SOURCE_LEN, Token, TokenKind, TokenSource};
use crate::parser::ast::{Clause, ClauseHead, Program, Term};
use crate::parser::error::SyntaxError;
use crate::parser::recovery::Recovery;
use crate::parser::token_stream::TokenStream;
use crate::parser::trace::RuleTrace;

/// Parser behavior options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    /// Emits `tracing` debug events for rule entry/exit and consumed tokens.
    pub debug: bool,
    /// Behavior after a diagnostic is recorded.
    pub recovery: Recovery,
    /// Diagnostics recorded before the parser gives up.
    pub max_errors: usize,
    /// Maximum nesting of terms inside argument lists.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            debug: false,
            recovery: Recovery::Synchronize,
            max_errors: 100,
            max_depth: 256,
        }
    }
}

type ParseResult<T> = Result<T, SyntaxError>;

/// Parses `source` with the pull-based lexer.
///
/// Always returns a program, possibly partial, together with every
/// diagnostic in source order. Sources longer than [`MAX_SOURCE_LEN`] are
/// rejected with a single `SourceTooLarge` diagnostic.
pub fn parse(
    source_name: &str,
    source: &str,
    options: ParseOptions,
) -> (Program, Vec<SyntaxError>) {
    if let Err(error) = check_source_len(source_name, source, MAX_SOURCE_LEN) {
        return (Program::default(), vec![error]);
    }
    let stream = TokenStream::new(Lexer::new(source));
    let mut parser = Parser::new(source_name, source, options, stream);
    let program = parser.parse_program();
    (program, parser.into_diagnostics())
}

/// Parses `source` with tokens produced on a separate thread.
///
/// Produces the same result as [`parse`].
pub fn parse_threaded(
    source_name: &str,
    source: &str,
    options: ParseOptions,
) -> (Program, Vec<SyntaxError>) {
    if let Err(error) = check_source_len(source_name, source, MAX_SOURCE_LEN) {
        return (Program::default(), vec![error]);
    }
    let stream = TokenStream::new(ChannelTokens::spawn(source));
    let mut parser = Parser::new(source_name, source, options, stream);
    let program = parser.parse_program();
    (program, parser.into_diagnostics())
}

fn check_source_len(source_name: &str, source: &str, limit: usize) -> ParseResult<()> {
    if source.len() > limit {
        return Err(SyntaxError::source_too_large(source_name, source, limit));
    }
    Ok(())
}

/// Clause parser over any token source.
pub struct Parser<'src, S> {
    source_name: &'src str,
    source: &'src str,
    options: ParseOptions,
    stream: TokenStream<S>,
    trace: RuleTrace,
    diagnostics: Vec<SyntaxError>,
    term_depth: usize,
    gave_up: bool,
}

impl<'src, S: TokenSource> Parser<'src, S> {
    /// Creates a parser. `source` must be the text `stream` was built from.
    pub fn new(
        source_name: &'src str,
        source: &'src str,
        options: ParseOptions,
        stream: TokenStream<S>,
    ) -> Self {
        Self {
            source_name,
            source,
            options,
            stream,
            trace: RuleTrace::new(options.debug),
            diagnostics: Vec::new(),
            term_depth: 0,
            gave_up: false,
        }
    }

    /// Parses clauses until end of input.
    ///
    /// Returns with the token source consumed through end of input on every
    /// path.
    pub fn parse_program(&mut self) -> Program {
        let mut clauses = Vec::new();

        loop {
            if self.gave_up {
                self.finish_early();
                break;
            }
            if self.options.recovery == Recovery::Abort && !self.diagnostics.is_empty() {
                self.finish_early();
                break;
            }
            if self.peek().is_end_of_input() {
                break;
            }

            match self.parse_clause() {
                Ok(clause) => clauses.push(clause),
                Err(error) => {
                    self.record(error);
                    if self.options.recovery == Recovery::Synchronize {
                        self.synchronize();
                    }
                }
            }
        }

        Program::new(clauses)
    }

    /// Diagnostics recorded so far, in source order.
    pub fn diagnostics(&self) -> &[SyntaxError] {
        &self.diagnostics
    }

    /// Consumes the parser and returns its diagnostics.
    pub fn into_diagnostics(self) -> Vec<SyntaxError> {
        self.diagnostics
    }

    // ClauseOrFact = ClauseHead ClauseBody .
    fn parse_clause(&mut self) -> ParseResult<Clause> {
        self.with_rule("clause", |parser| {
            let head = parser.parse_clause_head()?;
            parser.parse_clause_body(head)
        })
    }

    // ClauseHead = Atom [ ArgList ] .
    fn parse_clause_head(&mut self) -> ParseResult<ClauseHead> {
        self.with_rule("clause head", |parser| {
            let name = parser.expect(TokenKind::Atom)?.lexeme;
            let args = if parser.peek().kind == TokenKind::OpenParen {
                parser.parse_arg_list()?
            } else {
                Vec::new()
            };
            Ok(ClauseHead::new(name, args))
        })
    }

    // ArgList = "(" Term { "," Term } ")" .
    fn parse_arg_list(&mut self) -> ParseResult<Vec<Term>> {
        self.with_rule("argument list", |parser| {
            parser.expect(TokenKind::OpenParen)?;
            let mut args = Vec::new();
            loop {
                args.push(parser.parse_term()?);
                let separator = parser.peek().kind;
                match separator {
                    TokenKind::Comma => {
                        parser.next();
                    }
                    TokenKind::CloseParen => {
                        parser.next();
                        return Ok(args);
                    }
                    _ => {
                        return Err(
                            parser.unexpected(&[TokenKind::Comma, TokenKind::CloseParen])
                        );
                    }
                }
            }
        })
    }

    // ClauseBody = "." | ":-" Term "." .
    fn parse_clause_body(&mut self, head: ClauseHead) -> ParseResult<Clause> {
        self.with_rule("clause body", |parser| {
            let kind = parser.peek().kind;
            match kind {
                TokenKind::Dot => {
                    parser.next();
                    Ok(Clause::fact(head))
                }
                TokenKind::ColonDash => {
                    parser.next();
                    let body = parser.parse_term()?;
                    parser.expect(TokenKind::Dot)?;
                    Ok(Clause::rule(head, body))
                }
                _ => Err(parser.unexpected(&[TokenKind::Dot, TokenKind::ColonDash])),
            }
        })
    }

    // Term = Variable | ClauseHead .
    fn parse_term(&mut self) -> ParseResult<Term> {
        self.term_depth += 1;
        let result = if self.term_depth > self.options.max_depth {
            let found = self.peek().clone();
            Err(SyntaxError::nesting_too_deep(
                self.source_name,
                self.source,
                self.options.max_depth,
                self.trace.current(),
                &found,
            ))
        } else {
            self.with_rule("term", |parser| {
                let kind = parser.peek().kind;
                match kind {
                    TokenKind::Variable => Ok(Term::variable(parser.next().lexeme)),
                    TokenKind::Atom => Ok(parser.parse_clause_head()?.into_term()),
                    _ => Err(parser.unexpected(&[TokenKind::Variable, TokenKind::Atom])),
                }
            })
        };
        self.term_depth -= 1;
        result
    }

    fn with_rule<T>(
        &mut self,
        rule: &'static str,
        parse: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        self.trace.enter(rule);
        let result = parse(self);
        self.trace.exit(result.is_ok());
        result
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        if self.peek().kind == kind {
            Ok(self.next())
        } else {
            Err(self.unexpected(&[kind]))
        }
    }

    fn unexpected(&mut self, expected: &[TokenKind]) -> SyntaxError {
        let found = self.peek().clone();
        SyntaxError::unexpected_token(
            self.source_name,
            self.source,
            expected,
            self.trace.current(),
            &found,
        )
    }

    fn peek(&mut self) -> &Token {
        self.stream.peek();
        self.absorb_lex_errors();
        self.stream.peek()
    }

    fn next(&mut self) -> Token {
        let token = self.stream.next();
        self.absorb_lex_errors();
        if self.options.debug {
            debug!(
                kind = ?token.kind,
                lexeme = %token.lexeme,
                offset = token.offset().value(),
                rule = self.trace.current(),
                "consume token"
            );
        }
        token
    }

    // Skips through the next `.`, stopping early at end of input.
    fn synchronize(&mut self) {
        while !self.peek().is_end_of_input() {
            if self.next().kind == TokenKind::Dot {
                break;
            }
        }
    }

    // Drains the source so a producer thread can run to completion; lexical
    // errors past this point are dropped.
    fn finish_early(&mut self) {
        if self.stream.reached_end_of_input() {
            self.stream.take_lex_errors();
            return;
        }
        let discarded = self.stream.drain();
        let dropped = self.stream.take_lex_errors().len();
        if self.options.debug {
            debug!(discarded, dropped, "stopped parsing early");
        }
    }

    fn absorb_lex_errors(&mut self) {
        for lex_error in self.stream.take_lex_errors() {
            let error = SyntaxError::lexical(self.source_name, self.source, &lex_error);
            self.record(error);
        }
        if self.gave_up {
            self.finish_early();
        }
    }

    // Past `max_errors` the next diagnostic is replaced by a single
    // `TooManyErrors` and everything after it is dropped.
    fn record(&mut self, diagnostic: SyntaxError) {
        if self.gave_up {
            return;
        }
        let diagnostic = if self.diagnostics.len() >= self.options.max_errors {
            self.gave_up = true;
            SyntaxError::too_many_errors(
                self.source_name,
                self.source,
                self.options.max_errors,
                diagnostic.span,
                diagnostic.found,
            )
        } else {
            diagnostic
        };

        if self.options.debug {
            error!(location = %diagnostic.location, context = %diagnostic.context, "{}", diagnostic.message);
        } else {
            warn!(location = %diagnostic.location, "{}", diagnostic.message);
        }
        self.diagnostics.push(diagnostic);
    }
}
