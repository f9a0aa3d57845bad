use crate::{SubJsonError, SubJsonResult};

use super::constants::{is_scalar_byte, DOUBLE_QUOTE, ESCAPE};

/// Read-only view over the document plus the single read position.
/// `pos` only moves forward and never exceeds the document length.
pub struct Cursor<'j> {
    json: &'j str,
    bytes: &'j [u8],
    pos: usize,
}

impl<'j> Cursor<'j> {
    pub fn new(json: &'j str) -> Self {
        Cursor {
            json,
            bytes: json.as_bytes(),
            pos: 0,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Unread tail of the document.
    pub fn rest(&self) -> &'j [u8] {
        &self.bytes[self.pos..]
    }

    pub fn advance_by(&mut self, n: usize) {
        self.pos = usize::min(self.pos + n, self.bytes.len());
    }

    pub fn next_byte(&mut self) -> SubJsonResult<u8> {
        let b = self.peek().ok_or(SubJsonError::PathNotFound)?;
        self.pos += 1;
        Ok(b)
    }

    pub fn drop_while<P>(&mut self, mut predicate: P)
    where
        P: FnMut(u8) -> bool,
    {
        while let Some(b) = self.peek() {
            if predicate(b) {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    pub fn skip_whitespace(&mut self) {
        self.drop_while(|b| b.is_ascii_whitespace());
    }

    pub fn next_significant(&mut self) -> SubJsonResult<u8> {
        self.skip_whitespace();
        self.next_byte()
    }

    pub fn expect_next(&mut self, expected: u8) -> SubJsonResult<()> {
        match self.next_significant()? {
            b if b == expected => Ok(()),
            _ => Err(SubJsonError::PathNotFound),
        }
    }

    /// Moves past the closing quote of a string whose opening quote was consumed.
    pub fn skip_string(&mut self) -> SubJsonResult<()> {
        let mut in_escape = false;
        loop {
            let b = self.next_byte()?;
            if in_escape {
                in_escape = false;
            } else if b == ESCAPE {
                in_escape = true;
            } else if b == DOUBLE_QUOTE {
                return Ok(());
            }
        }
    }

    /// Moves past a bare scalar whose first char was consumed. A scalar must be
    /// followed by something, running into the end of input is an error.
    pub fn skip_scalar(&mut self) -> SubJsonResult<()> {
        // the first char may have been the lead byte of a multi-byte char
        while !self.json.is_char_boundary(self.pos) {
            self.pos += 1;
        }
        self.drop_while(is_scalar_byte);
        match self.peek() {
            Some(_) => Ok(()),
            None => Err(SubJsonError::PathNotFound),
        }
    }

    pub fn slice_from(&self, start: usize) -> SubJsonResult<&'j str> {
        self.json
            .get(start..self.pos)
            .ok_or(SubJsonError::PathNotFound)
    }
}
