mod constants;
mod cursor;
use constants::*;
use cursor::Cursor;

use crate::{path::Step, SubJsonError, SubJsonResult};

/// Forward-only walk over raw JSON text. Each operation skips just enough of the
/// document to reach the addressed child, nothing is decoded or validated
/// beyond the delimiters it has to find.
pub struct Scanner<'j> {
    cursor: Cursor<'j>,
}

impl<'j> Scanner<'j> {
    pub fn new(json: &'j str) -> Self {
        Scanner {
            cursor: Cursor::new(json),
        }
    }

    pub fn navigate(&mut self, step: Step<'_>) -> SubJsonResult<()> {
        match step {
            Step::Field(name) => self.descend_field(name),
            Step::Index(i) => self.descend_index(i),
        }
    }

    /// Leaves the cursor right before the value of member `name` of the object
    /// at the cursor. Members are compared by their raw, still-escaped key text.
    pub fn descend_field(&mut self, name: &str) -> SubJsonResult<()> {
        let name = name.as_bytes();
        self.cursor.expect_next(OPEN_BRACE)?;
        loop {
            self.cursor.expect_next(DOUBLE_QUOTE)?;
            if self.at_key(name) {
                self.cursor.advance_by(name.len() + 1);
                return self.cursor.expect_next(COLON);
            }
            // a prefix match like "a" against "ab" must not stop mid-key
            self.cursor.skip_string()?;
            self.cursor.expect_next(COLON)?;
            self.skip_one_value()?;
            self.cursor.expect_next(COMMA)?;
        }
    }

    /// Leaves the cursor right before element `index` of the array at the cursor.
    pub fn descend_index(&mut self, index: usize) -> SubJsonResult<()> {
        self.cursor.expect_next(OPEN_SQUARE_BRACKET)?;
        for _ in 0..index {
            self.skip_one_value()?;
            self.cursor.expect_next(COMMA)?;
        }
        Ok(())
    }

    /// The raw text of the value at the cursor, without leading whitespace.
    pub fn extract_value(&mut self) -> SubJsonResult<&'j str> {
        self.cursor.skip_whitespace();
        let start = self.cursor.pos();
        self.skip_one_value()?;
        self.cursor.slice_from(start)
    }

    fn skip_one_value(&mut self) -> SubJsonResult<()> {
        match self.cursor.next_significant()? {
            open @ (OPEN_BRACE | OPEN_SQUARE_BRACKET) => self.skip_container(open),
            DOUBLE_QUOTE => self.cursor.skip_string(),
            // an empty array or a dangling separator holds no value here
            CLOSE_BRACE | CLOSE_SQUARE_BRACKET | COMMA | COLON => Err(SubJsonError::PathNotFound),
            _ => self.cursor.skip_scalar(),
        }
    }

    /// Only the outermost bracket kind is tracked, so mismatched inner brackets
    /// such as `{[}` go unnoticed.
    fn skip_container(&mut self, open: u8) -> SubJsonResult<()> {
        let close = closing_bracket(open).ok_or(SubJsonError::PathNotFound)?;
        let mut depth = 0usize;
        loop {
            match self.cursor.next_byte()? {
                DOUBLE_QUOTE => self.cursor.skip_string()?,
                b if b == close => {
                    if depth == 0 {
                        return Ok(());
                    }
                    depth -= 1;
                }
                b if b == open => depth += 1,
                _ => {}
            }
        }
    }

    /// Whether the key at the cursor is exactly `name`, i.e. `name` is followed
    /// by the key's closing quote.
    fn at_key(&self, name: &[u8]) -> bool {
        let closes = match self.cursor.rest().strip_prefix(name) {
            Some(rest) => rest.first() == Some(&DOUBLE_QUOTE),
            None => false,
        };
        // a trailing unescaped backslash in `name` would escape that quote
        let trailing_escapes = name.iter().rev().take_while(|b| **b == ESCAPE).count();
        closes && trailing_escapes % 2 == 0
    }
}
