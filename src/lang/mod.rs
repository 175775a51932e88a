/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the BASIC language.

*/

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use parse::parse_expression;

pub mod ast;

/// Character range of a token within the statement text.
pub type Column = std::ops::Range<usize>;

/// Key of a stored program line. Always positive.
pub type LineNumber = u32;

#[cfg(test)]
mod tests;
