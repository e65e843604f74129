//! Typed commands parsed from G-code lines
//!
//! Supported subset:
//!
//! | Line            | Command                          |
//! |-----------------|----------------------------------|
//! | `G1 <axis><n>`  | [`Command::Move`]                |
//! | `M104 S<n>`     | [`Command::SetExtruderTemp`]     |
//! | `M140 S<n>`     | [`Command::SetBedTemp`]          |
//!
//! Everything else, including malformed payloads, is
//! [`Command::Unrecognized`] and gets skipped.

use crate::motion::Axis;

use super::lexer::{LexError, Lexer, Word};

/// A parsed line
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Move one axis by a signed distance (units)
    Move { axis: Axis, distance: f32 },
    /// Switch the extruder heater relay (°C, > 0 means on)
    SetExtruderTemp { celsius: f32 },
    /// Switch the bed heater relay (°C, > 0 means on)
    SetBedTemp { celsius: f32 },
    /// Blank, comment, unsupported or malformed line
    Unrecognized,
}

impl Command {
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Command::Unrecognized)
    }
}

/// Why a line did not produce a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Nothing but whitespace or a comment
    Empty,
    Lex(LexError),
    /// First word is not `G1`, `M104` or `M140`
    UnsupportedCode,
    /// `G1` without an axis word
    MissingAxis,
    /// `M104`/`M140` without an `S` word
    MissingTemperature,
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError::Lex(e)
    }
}

/// Parse one line, reporting why it was rejected
pub fn try_parse_line(line: &str) -> Result<Command, ParseError> {
    let mut words = Lexer::new(line);
    let code = match words.next() {
        Some(word) => word?,
        None => return Err(ParseError::Empty),
    };

    match (code.letter, code.code()) {
        ('G', Some(1)) => parse_move(words),
        ('M', Some(104)) => Ok(Command::SetExtruderTemp {
            celsius: find_word(words, 'S')?
                .ok_or(ParseError::MissingTemperature)?
                .value(),
        }),
        ('M', Some(140)) => Ok(Command::SetBedTemp {
            celsius: find_word(words, 'S')?
                .ok_or(ParseError::MissingTemperature)?
                .value(),
        }),
        _ => Err(ParseError::UnsupportedCode),
    }
}

/// Parse one line; anything that is not a supported command is
/// [`Command::Unrecognized`]
pub fn parse_line(line: &str) -> Command {
    try_parse_line(line).unwrap_or(Command::Unrecognized)
}

/// The first axis word sets the move; feed rates and further axes are
/// ignored because axes never move together.
fn parse_move(words: Lexer<'_>) -> Result<Command, ParseError> {
    let (axis, distance) = find_map(words, |word| {
        Axis::from_letter(word.letter).map(|axis| (axis, word.value()))
    })?
    .ok_or(ParseError::MissingAxis)?;

    Ok(Command::Move { axis, distance })
}

fn find_word<'a>(words: Lexer<'a>, letter: char) -> Result<Option<Word<'a>>, ParseError> {
    find_map(words, |word| (word.letter == letter).then_some(*word))
}

/// First word `f` maps to `Some`
///
/// The whole line is lexed even after a match, so trailing garbage rejects
/// the line instead of being ignored.
fn find_map<'a, T>(
    words: Lexer<'a>,
    f: impl Fn(&Word<'a>) -> Option<T>,
) -> Result<Option<T>, ParseError> {
    let mut found = None;
    for word in words {
        let word = word?;
        if found.is_none() {
            found = f(&word);
        }
    }
    Ok(found)
}
