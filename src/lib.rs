//! Library entrypoint for `clausal`.
//!
//! The crate turns source text of a minimal clause language into tokens and
//! then into a [`Program`] of facts and rules, with located diagnostics.

pub mod diagnostics;
pub mod lexer;
pub mod parser;

pub use parser::{ParseOptions, Program, Recovery, SyntaxError, parse, parse_threaded};
