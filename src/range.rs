//! Range assertion failures.

use std::fmt;

use thiserror::Error;

use crate::failure::{BaseFailure, Failure};
use crate::render::NEWLINE;

/// A value that fell on the wrong side of a range check.
///
/// Inputs are converted with plain `Display` formatting at construction;
/// the value-formatter hook is not consulted. An absent `actual` renders
/// as the literal `(null)`, while absent bounds render as empty fields -
/// only the actual value gets the substitution.
#[derive(Debug, Clone, Error)]
pub struct RangeMismatch {
    base: BaseFailure,
    actual: Option<String>,
    low: Option<String>,
    high: Option<String>,
}

impl RangeMismatch {
    /// The value was inside `(low - high)` but was asserted not to be.
    pub fn not_in_range(
        actual: Option<&dyn fmt::Display>,
        low: Option<&dyn fmt::Display>,
        high: Option<&dyn fmt::Display>,
    ) -> Self {
        Self::with_title("Assert.NotInRange() Failure", actual, low, high)
    }

    /// The value was outside `(low - high)` but was asserted to be inside.
    pub fn in_range(
        actual: Option<&dyn fmt::Display>,
        low: Option<&dyn fmt::Display>,
        high: Option<&dyn fmt::Display>,
    ) -> Self {
        Self::with_title("Assert.InRange() Failure", actual, low, high)
    }

    fn with_title(
        title: &'static str,
        actual: Option<&dyn fmt::Display>,
        low: Option<&dyn fmt::Display>,
        high: Option<&dyn fmt::Display>,
    ) -> Self {
        Self {
            base: BaseFailure::new(title),
            actual: actual.map(|value| value.to_string()),
            low: low.map(|value| value.to_string()),
            high: high.map(|value| value.to_string()),
        }
    }

    pub fn actual(&self) -> Option<&str> {
        self.actual.as_deref()
    }

    pub fn low(&self) -> Option<&str> {
        self.low.as_deref()
    }

    pub fn high(&self) -> Option<&str> {
        self.high.as_deref()
    }
}

impl fmt::Display for RangeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{nl}Range:  ({} - {}){nl}Actual: {}",
            self.base.title(),
            self.low.as_deref().unwrap_or(""),
            self.high.as_deref().unwrap_or(""),
            self.actual.as_deref().unwrap_or("(null)"),
            nl = NEWLINE
        )
    }
}

impl Failure for RangeMismatch {
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
    fn test_not_in_range_message() {
        let mismatch = RangeMismatch::not_in_range(Some(&4), Some(&1), Some(&10));
        let expected = [
            "Assert.NotInRange() Failure",
            "Range:  (1 - 10)",
            "Actual: 4",
        ]
        .join(NEWLINE);
        assert_eq!(mismatch.to_string(), expected);
    }

    #[test]
    fn test_absent_actual_renders_null_literal() {
        let mismatch = RangeMismatch::not_in_range(None, Some(&1), Some(&10));
        let message = mismatch.to_string();
        assert!(message.contains("Range:  (1 - 10)"));
        assert!(message.ends_with("Actual: (null)"));
    }

    #[test]
    fn test_absent_bounds_render_as_empty_fields() {
        // no "(null)" for the bounds, only for the actual value
        let mismatch = RangeMismatch::not_in_range(Some(&5), None, None);
        let message = mismatch.to_string();
        assert!(message.contains("Range:  ( - )"));
        assert!(message.ends_with("Actual: 5"));
        assert!(!message.contains("(null)"));
    }

    #[test]
    fn test_all_absent() {
        let mismatch = RangeMismatch::not_in_range(None, None, None);
        let expected = [
            "Assert.NotInRange() Failure",
            "Range:  ( - )",
            "Actual: (null)",
        ]
        .join(NEWLINE);
        assert_eq!(mismatch.to_string(), expected);
    }

    #[test]
    fn test_in_range_shares_body_layout() {
        let outside = RangeMismatch::not_in_range(Some(&4), Some(&1), Some(&10));
        let inside = RangeMismatch::in_range(Some(&4), Some(&1), Some(&10));
        assert_eq!(inside.title(), "Assert.InRange() Failure");

        let outside_body = outside.to_string().split_off(outside.title().len());
        let inside_body = inside.to_string().split_off(inside.title().len());
        assert_eq!(outside_body, inside_body);
    }

    #[test]
    fn test_display_inputs_use_plain_conversion() {
        // Display formatting, not the Debug-based value formatter
        let low = String::from("a");
        let mismatch = RangeMismatch::not_in_range(None, Some(&low), Some(&low));
        assert!(mismatch.to_string().contains("Range:  (a - a)"));
    }

    #[test]
    fn test_message_is_idempotent() {
        let mismatch = RangeMismatch::not_in_range(Some(&4), Some(&1), Some(&10));
        assert_eq!(mismatch.to_string(), mismatch.to_string());
        assert_eq!(mismatch.stack_trace(), mismatch.stack_trace());
    }
}
