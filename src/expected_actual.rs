//! Two-value mismatches: an expected rendering paired with an actual one.

use std::fmt;

use thiserror::Error;

use crate::failure::{BaseFailure, Failure};
use crate::render::NEWLINE;

/// Compose the title/expected/actual layout shared by every two-value
/// mismatch. `Actual:` is padded so both values start in the same column.
pub(crate) fn compose_expected_actual(title: &str, expected: &str, actual: &str) -> String {
    format!(
        "{}{nl}Expected: {}{nl}Actual:   {}",
        title,
        expected,
        actual,
        nl = NEWLINE
    )
}

/// A mismatch between one expected value and one actual value, both
/// rendered by the caller before construction.
#[derive(Debug, Clone, Error)]
pub struct ExpectedActualMismatch {
    base: BaseFailure,
    expected: String,
    actual: String,
}

impl ExpectedActualMismatch {
    pub fn new(
        expected: impl Into<String>,
        actual: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            base: BaseFailure::new(title),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn actual(&self) -> &str {
        &self.actual
    }
}

impl fmt::Display for ExpectedActualMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&compose_expected_actual(
            self.base.title(),
            &self.expected,
            &self.actual,
        ))
    }
}

impl Failure for ExpectedActualMismatch {
    fn title(&self) -> &str {
        self.base.title()
    }

    fn stack_trace(&self) -> String {
        self.base.stack_trace()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_layout() {
        let mismatch = ExpectedActualMismatch::new("5", "7", "Assert.Equal() Failure");
        let expected = format!(
            "Assert.Equal() Failure{nl}Expected: 5{nl}Actual:   7",
            nl = NEWLINE
        );
        assert_eq!(mismatch.to_string(), expected);
    }

    #[test]
    fn test_actual_value_aligns_under_expected_value() {
        let message = ExpectedActualMismatch::new("a", "b", "t").to_string();
        let lines: Vec<&str> = message.split(NEWLINE).collect();
        assert_eq!(lines[1], "Expected: a");
        assert_eq!(lines[2], "Actual:   b");
    }

    #[test]
    fn test_message_matches_display() {
        let mismatch = ExpectedActualMismatch::new("5", "7", "Assert.Equal() Failure");
        assert_eq!(mismatch.message(), mismatch.to_string());
    }

    #[test]
    fn test_display_snapshot() {
        let mismatch =
            ExpectedActualMismatch::new("[1, 2]", "[1, 2, 3]", "Assert.Equal() Failure");
        insta::assert_snapshot!(mismatch.to_string(), @r###"
        Assert.Equal() Failure
        Expected: [1, 2]
        Actual:   [1, 2, 3]
        "###);
    }
}
