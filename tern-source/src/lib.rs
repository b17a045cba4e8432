//! Source code representation and diagnostics.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::ops::Range;

/// Represents source code.
pub struct Source<'a> {
    /// Original source code.
    pub content: &'a str,
    /// Accumulated non-fatal diagnostics.
    pub errors: ErrorReporter,
}

impl<'a> Source<'a> {
    /// Create a new `Source` with the specified `content`.
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            errors: ErrorReporter::new(),
        }
    }

    /// Returns `true` if `Source` has no accumulated errors. Returns `false` otherwise.
    pub fn has_no_errors(&self) -> bool {
        self.errors.is_empty()
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(content: &'a str) -> Self {
        Source::new(content)
    }
}

/// A diagnostic raised while scanning. Never aborts the pass that reported it.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    message: String,
    /// 1-based line the offending text starts on.
    line: usize,
    /// Byte range of the offending text.
    span: Range<usize>,
}

impl SyntaxError {
    /// Create a new syntax error with the specified `message`, `line` and `span`.
    pub fn new(message: impl ToString, line: usize, span: Range<usize>) -> Self {
        Self {
            message: message.to_string(),
            line,
            span,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ERROR: {message} at line {line}",
            message = self.message,
            line = self.line
        )
    }
}

/// Manages all the errors.
pub struct ErrorReporter {
    errors: RefCell<Vec<SyntaxError>>,
}

impl ErrorReporter {
    /// Create an empty `ErrorReporter`.
    pub fn new() -> Self {
        Self {
            errors: RefCell::new(Vec::new()),
        }
    }

    /// Adds an error to the `ErrorReporter`.
    /// This method uses the interior mutability pattern. This does not require mutability for ergonomics.
    pub fn add_error(&self, error: SyntaxError) {
        // This should be the only place where self.errors is borrowed mutably.
        self.errors.borrow_mut().push(error);
    }

    /// Borrows the errors reported so far, in report order.
    pub fn errors(&self) -> Ref<'_, Vec<SyntaxError>> {
        self.errors.borrow()
    }

    pub fn len(&self) -> usize {
        self.errors.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.borrow().is_empty()
    }
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in self.errors.borrow().iter() {
            writeln!(f, "{}", error)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_source_has_no_errors() {
        let source: Source = "1 + 1;".into();
        assert!(source.has_no_errors());
        assert_eq!(source.errors.to_string(), "");
    }

    #[test]
    fn test_reporter_keeps_report_order() {
        let source = Source::new("|\n~");
        source
            .errors
            .add_error(SyntaxError::new("Unexpected character `|`", 1, 0..1));
        source
            .errors
            .add_error(SyntaxError::new("Unexpected character `~`", 2, 2..3));

        assert!(!source.has_no_errors());
        assert_eq!(source.errors.len(), 2);
        assert_eq!(source.errors.errors()[1].line(), 2);
        assert_eq!(source.errors.errors()[1].span(), 2..3);
        assert_eq!(
            source.errors.to_string(),
            "ERROR: Unexpected character `|` at line 1\nERROR: Unexpected character `~` at line 2\n"
        );
    }
}
