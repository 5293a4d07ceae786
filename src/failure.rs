//! Shared failure behavior: the signal contract every descriptor
//! satisfies and the base type they embed.

use std::error;

use backtrace::Backtrace;

/// Contract satisfied by every assertion failure: a short title, a full
/// diagnostic message, and a stack trace for the point of failure.
///
/// `message` defaults to the `Display` rendering, so implementors only
/// provide `title` and `stack_trace`. Test infrastructure propagates
/// these as ordinary errors and reads the three members uniformly; the
/// collection descriptor also accepts any `Failure` for chaining.
pub trait Failure: error::Error {
    /// Short human label, e.g. `"Assert.Collection() Failure"`.
    fn title(&self) -> &str;

    /// Full diagnostic message.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Rendered stack trace for the point the failure was raised.
    fn stack_trace(&self) -> String;
}

/// A fixed title plus the platform stack trace captured at construction.
///
/// Descriptors embed one of these and delegate their title and trace
/// handling to it. Title-only failures render the title alone as their
/// whole message.
#[derive(Debug, Clone)]
pub struct BaseFailure {
    title: String,
    trace: Backtrace,
}

impl BaseFailure {
    /// Store `title` and capture the current stack. Cannot fail.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            trace: Backtrace::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The captured trace, rendered. Stable across repeated reads.
    pub fn stack_trace(&self) -> String {
        format!("{:?}", self.trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_failure_stores_title() {
        let base = BaseFailure::new("Assert.Single() Failure");
        assert_eq!(base.title(), "Assert.Single() Failure");
    }

    #[test]
    fn test_stack_trace_captures_frames() {
        let base = BaseFailure::new("Assert.Single() Failure");
        assert!(!base.stack_trace().is_empty());
    }

    #[test]
    fn test_stack_trace_is_stable_across_reads() {
        let base = BaseFailure::new("Assert.Single() Failure");
        assert_eq!(base.stack_trace(), base.stack_trace());
    }
}
