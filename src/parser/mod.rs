//! Recursive-descent clause parser.
//!
//! The parser pulls tokens through a [`TokenStream`] with one token of
//! lookahead and collects [`SyntaxError`]s instead of aborting.

pub mod ast;
pub mod error;
pub mod parser;
pub mod recovery;
pub mod token_stream;
pub mod trace;

pub use ast::{Clause, ClauseHead, Program, Term};
pub use error::{SyntaxError, SyntaxErrorKind, expected_list};
pub use parser::{ParseOptions, Parser, parse, parse_threaded};
pub use recovery::Recovery;
pub use token_stream::TokenStream;
pub use trace::{RuleTrace, TOP_LEVEL_RULE};
