//! Motion language front end
//!
//! A small lexer produces words; the command parser recognizes the three
//! supported codes by their prefix word and field letter rather than by
//! fixed character offsets.

pub mod command;
pub mod lexer;

pub use command::{parse_line, try_parse_line, Command, ParseError};
pub use lexer::{LexError, Lexer, Word};
