use std::fmt::Display;

/// One navigation step of a path expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'p> {
    /// Descend into the object member with this (raw, unescaped) name.
    Field(&'p str),
    /// Descend into the array element at this 0-based position.
    Index(usize),
}

impl Display for Step<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Field(name) => f.write_fmt(format_args!(".{}", name)),
            Step::Index(i) => f.write_fmt(format_args!("[{}]", i)),
        }
    }
}
