//! Emptiness assertion failures, in both directions.

use std::fmt;

use thiserror::Error;

use crate::expected_actual::ExpectedActualMismatch;
use crate::failure::{BaseFailure, Failure};
use crate::render::format_value;

/// A collection that was expected to be empty but held items.
///
/// The collection is rendered once, in the constructor; mutating it
/// afterwards does not change the message. (The collection descriptor
/// makes the opposite choice and re-renders on every read.)
#[derive(Debug, Clone, Error)]
pub struct EmptyMismatch {
    pair: ExpectedActualMismatch,
}

impl EmptyMismatch {
    pub fn new(collection: &dyn fmt::Debug) -> Self {
        Self {
            pair: ExpectedActualMismatch::new(
                "<empty>",
                format_value(Some(collection)),
                "Assert.Empty() Failure",
            ),
        }
    }

    /// The collection rendering captured at construction.
    pub fn actual(&self) -> &str {
        self.pair.actual()
    }
}

impl fmt::Display for EmptyMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.pair, f)
    }
}

impl Failure for EmptyMismatch {
    fn title(&self) -> &str {
        self.pair.title()
    }

    fn stack_trace(&self) -> String {
        self.pair.stack_trace()
    }
}

/// A collection that was expected to hold items but was empty.
///
/// Carries no payload; the message is the title alone.
#[derive(Debug, Clone, Error)]
pub struct NotEmptyMismatch {
    base: BaseFailure,
}

impl NotEmptyMismatch {
    pub fn new() -> Self {
        Self {
            base: BaseFailure::new("Assert.NotEmpty() Failure"),
        }
    }
}

impl Default for NotEmptyMismatch {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotEmptyMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base.title())
    }
}

impl Failure for NotEmptyMismatch {
    fn title(&self) -> &str {
        self.base.title()
    }

    fn stack_trace(&self) -> String {
        self.base.stack_trace()
    }
}
