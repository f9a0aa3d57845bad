mod constants;
mod step;
use constants::*;
use peekmore::{PeekMore, PeekMoreIterator};
use std::{fmt::Display, iter::FusedIterator, str::CharIndices};
pub use step::*;

use crate::{scanner::Scanner, SubJsonError, SubJsonResult};

/// Lazily compiles a path expression such as `a.b[2].c` into [`Step`]s, left to
/// right. Nothing past the step being yielded is looked at, so a malformed tail
/// only surfaces once the scan gets there. The iterator stops after the first error.
pub struct PathSteps<'p> {
    path: &'p str,
    chars: PeekMoreIterator<CharIndices<'p>>,
    failed: bool,
}

impl<'p> PathSteps<'p> {
    pub fn new(path: &'p str) -> Self {
        PathSteps {
            path,
            chars: path.char_indices().peekmore(),
            failed: false,
        }
    }

    /// byte offset of the next unread char
    fn offset(&mut self) -> usize {
        match self.chars.peek() {
            Some((i, _)) => *i,
            None => self.path.len(),
        }
    }

    fn read_field(&mut self) -> Step<'p> {
        let path = self.path;
        let start = self.offset();
        while let Some(&(_, c)) = self.chars.peek() {
            if c == PERIOD || c == OPEN_SQUARE_BRACKET {
                break;
            }
            self.chars.next();
        }
        Step::Field(&path[start..self.offset()])
    }

    /// Reads `123]`, the opening bracket has been consumed already.
    fn read_index(&mut self) -> SubJsonResult<Step<'p>> {
        let path = self.path;
        let start = self.offset();

        let mut n = 0;
        let close = loop {
            match self.chars.peek_nth(n) {
                Some(&(i, CLOSE_SQUARE_BRACKET)) => break i,
                Some(_) => n += 1,
                None => return Err(SubJsonError::PathNotFound),
            }
        };
        self.chars.nth(n);

        let index = path[start..close]
            .parse::<usize>()
            .map_err(|_e| SubJsonError::PathNotFound)?;
        Ok(Step::Index(index))
    }
}

impl<'p> Iterator for PathSteps<'p> {
    type Item = SubJsonResult<Step<'p>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let &(_, c) = self.chars.peek()?;
        let step = match c {
            // a dot always introduces a field, possibly an empty one
            PERIOD => {
                self.chars.next();
                Ok(self.read_field())
            }
            OPEN_SQUARE_BRACKET => {
                self.chars.next();
                self.read_index()
            }
            _ => Ok(self.read_field()),
        };
        self.failed = step.is_err();
        Some(step)
    }
}

impl FusedIterator for PathSteps<'_> {}

/// A path compiled up front, for applying the same path to many documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPath<'p> {
    steps: Vec<Step<'p>>,
}

impl<'p> CompiledPath<'p> {
    pub fn parse(path: &'p str) -> SubJsonResult<Self> {
        let steps = PathSteps::new(path).collect::<SubJsonResult<Vec<_>>>()?;
        Ok(CompiledPath { steps })
    }

    pub fn steps(&self) -> &[Step<'p>] {
        &self.steps
    }

    pub fn extract<'j>(&self, json: &'j str) -> Option<&'j str> {
        self.try_extract(json).ok()
    }

    pub fn try_extract<'j>(&self, json: &'j str) -> SubJsonResult<&'j str> {
        let mut scanner = Scanner::new(json);
        for step in &self.steps {
            scanner.navigate(*step)?;
        }
        scanner.extract_value()
    }
}

impl Display for CompiledPath<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for step in &self.steps {
            step.fmt(f)?;
        }
        Ok(())
    }
}
