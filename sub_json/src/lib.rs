//! Pulls a sub-document out of raw JSON text by a path such as `a.b[2].c`,
//! without building a JSON tree. The result is the exact slice of the input
//! spanning the addressed value.
//!
//! ```
//! let json = r#"{"a": {"b": [10, 20, {"c": "x"}]}}"#;
//! assert_eq!(Some(r#""x""#), sub_json::extract(json, "a.b[2].c"));
//! assert_eq!(None, sub_json::extract(json, "a.b[3]"));
//! ```
mod errors;
pub mod path;
pub mod scanner;
pub use errors::*;
pub use path::{CompiledPath, PathSteps, Step};
use scanner::Scanner;

/// Returns the raw text of the value at `path`, or `None` when the path does
/// not resolve. Malformed paths and malformed documents count as not resolving.
pub fn extract<'j>(json: &'j str, path: &str) -> Option<&'j str> {
    try_extract(json, path).ok()
}

/// Same as [`extract`], with the failure as an error.
pub fn try_extract<'j>(json: &'j str, path: &str) -> SubJsonResult<&'j str> {
    let mut scanner = Scanner::new(json);
    for step in PathSteps::new(path) {
        scanner.navigate(step?)?;
    }
    scanner.extract_value()
}

pub trait SubJsonQuery {
    fn sub_json(&self, path: &str) -> Option<&str>;
}

impl SubJsonQuery for str {
    fn sub_json(&self, path: &str) -> Option<&str> {
        extract(self, path)
    }
}
