//! G-code word lexer
//!
//! Splits one line into `letter + number` words. Letters are
//! case-insensitive and `;` starts a comment that runs to end of line.
//!
//! Numbers are `[+-]digits[.digits]` with at least one digit. There is no
//! exponent form, so `G1E5` is the two words `G1` and `E5`.
//!
//! Only the first word may run straight into the next one, so `G1X10` and
//! `G1 X10` lex the same. After a parameter word the next word needs
//! whitespace in front of it: `G1X1e5` and `M104 S200xyz` are errors rather
//! than a short value followed by an extra word.

/// Errors produced while splitting a line into words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LexError {
    /// Byte offset of a character that cannot start a word
    UnexpectedChar(usize),
    /// A word letter with no number after it
    MissingNumber(char),
    /// Byte offset of a word glued to the end of a parameter word
    Unseparated(usize),
}

/// One `letter + number` word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Word<'a> {
    /// Upper-cased word letter
    pub letter: char,
    /// Raw number text
    pub number: &'a str,
}

impl Word<'_> {
    /// Numeric value of the word
    pub fn value(&self) -> f32 {
        // The lexer only yields well-formed decimals
        self.number.parse().unwrap_or(0.0)
    }

    /// Integer code number (`G1`, `G01`, `M104`), `None` for decimals
    pub fn code(&self) -> Option<u16> {
        self.number.parse().ok()
    }
}

/// Iterator over the words of one line
///
/// Stops after the first error.
pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    /// Words produced so far
    words: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(line: &'a str) -> Self {
        let code = match line.find(';') {
            Some(comment) => &line[..comment],
            None => line,
        };
        Self {
            src: code.trim(),
            pos: 0,
            words: 0,
        }
    }

    /// True if the line holds no words (blank or comment-only)
    pub fn is_empty(&self) -> bool {
        self.src.is_empty()
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn skip_digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - start
    }

    fn fail(&mut self, err: LexError) -> Option<Result<Word<'a>, LexError>> {
        self.pos = self.src.len();
        Some(Err(err))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Word<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let word_end = self.pos;
        self.skip_whitespace();
        let first = self.peek()?;

        if self.words > 1 && self.pos == word_end {
            let at = self.pos;
            return self.fail(LexError::Unseparated(at));
        }

        if !first.is_ascii_alphabetic() {
            let at = self.pos;
            return self.fail(LexError::UnexpectedChar(at));
        }
        let letter = (first as char).to_ascii_uppercase();
        self.pos += 1;

        let start = self.pos;
        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.pos += 1;
        }
        let mut digits = self.skip_digits();
        if self.peek() == Some(b'.') {
            self.pos += 1;
            digits += self.skip_digits();
        }
        if digits == 0 {
            return self.fail(LexError::MissingNumber(letter));
        }

        self.words += 1;
        Some(Ok(Word {
            letter,
            number: &self.src[start..self.pos],
        }))
    }
}
