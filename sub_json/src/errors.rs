use std::{error::Error, fmt::Display};

pub type SubJsonResult<T> = Result<T, SubJsonError>;

/// Every failure of a path lookup, whether the path is malformed, the addressed
/// member is absent or the document is truncated, collapses into this one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubJsonError {
    PathNotFound,
}

impl Error for SubJsonError {}

impl Display for SubJsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubJsonError::PathNotFound => f.write_str("Path not found"),
        }
    }
}

