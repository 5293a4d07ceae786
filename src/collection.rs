//! Collection assertion failures: count mismatches and per-item
//! comparison failures with chained inner failures.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::failure::{BaseFailure, Failure};
use crate::render::{format_value, NEWLINE};

/// Shared handle to the collection under assertion.
///
/// Held by reference, not copied: the message renders the collection's
/// state at read time, so a mutation between construction and read shows
/// up in the report.
pub type CollectionRef = Arc<dyn fmt::Debug + Send + Sync>;

/// A collection assertion that failed either on element count or while
/// comparing the item at one index.
///
/// The mode is selected by `index_failure_point` alone: `None` reports
/// the count mismatch, `Some(index)` reports the per-item failure with
/// the chained inner failure's message and trace folded in.
///
/// The public fields mirror what diff/equality harnesses overwrite after
/// construction; the message always reflects their current values. No
/// consistency between the counts and the index is enforced.
#[derive(Debug, Clone, Error)]
pub struct CollectionMismatch {
    base: BaseFailure,
    /// The collection under assertion, rendered fresh on every message
    /// read.
    pub collection: Option<CollectionRef>,
    pub expected_count: usize,
    pub actual_count: usize,
    /// Index of the item whose comparison failed; `None` for a count
    /// mismatch.
    pub index_failure_point: Option<usize>,
    inner_message: Option<String>,
    inner_stack_trace: Option<String>,
}

impl CollectionMismatch {
    /// Fully-general constructor.
    ///
    /// If `inner_failure` is given, its message is re-indented for
    /// embedding and its trace is copied verbatim, whether or not an
    /// index failure point is set. Contradictory inputs still construct
    /// and render best-effort.
    pub fn new(
        collection: Option<CollectionRef>,
        expected_count: usize,
        actual_count: usize,
        index_failure_point: Option<usize>,
        inner_failure: Option<&dyn Failure>,
    ) -> Self {
        Self {
            base: BaseFailure::new("Assert.Collection() Failure"),
            collection,
            expected_count,
            actual_count,
            index_failure_point,
            inner_message: inner_failure.map(|inner| reindent_inner_message(&inner.message())),
            inner_stack_trace: inner_failure.map(|inner| inner.stack_trace()),
        }
    }

    /// The collection held the wrong number of items.
    pub fn count_mismatch(
        collection: Option<CollectionRef>,
        expected_count: usize,
        actual_count: usize,
    ) -> Self {
        Self::new(collection, expected_count, actual_count, None, None)
    }

    /// Comparing the item at `index` raised `inner_failure`.
    pub fn item_failure(
        collection: Option<CollectionRef>,
        expected_count: usize,
        actual_count: usize,
        index: usize,
        inner_failure: &dyn Failure,
    ) -> Self {
        Self::new(
            collection,
            expected_count,
            actual_count,
            Some(index),
            Some(inner_failure),
        )
    }

    /// Re-indented copy of the inner failure's message, when one was
    /// chained.
    pub fn inner_message(&self) -> Option<&str> {
        self.inner_message.as_deref()
    }

    /// The inner failure's stack trace, verbatim, when one was chained.
    pub fn inner_stack_trace(&self) -> Option<&str> {
        self.inner_stack_trace.as_deref()
    }
}

impl fmt::Display for CollectionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let collection = format_value(self.collection.as_ref().map(|c| c as &dyn fmt::Debug));
        match self.index_failure_point {
            Some(index) => write!(
                f,
                "{}{nl}Collection: {}{nl}Error during comparison of item at index {}{nl}Inner exception: {}",
                self.base.title(),
                collection,
                index,
                self.inner_message.as_deref().unwrap_or(""),
                nl = NEWLINE
            ),
            None => write!(
                f,
                "{}{nl}Collection: {}{nl}Expected item count: {}{nl}Actual item count:   {}",
                self.base.title(),
                collection,
                self.expected_count,
                self.actual_count,
                nl = NEWLINE
            ),
        }
    }
}

impl Failure for CollectionMismatch {
    fn title(&self) -> &str {
        self.base.title()
    }

    fn stack_trace(&self) -> String {
        match &self.inner_stack_trace {
            Some(inner) => format!("{}{}{}", inner, NEWLINE, self.base.stack_trace()),
            None => self.base.stack_trace(),
        }
    }
}

/// Rebuild an inner failure's message so continuation lines sit eight
/// spaces deep under the `Inner exception:` label. Empty segments from
/// the split are dropped before the first-line check.
fn reindent_inner_message(message: &str) -> String {
    message
        .split(|c| c == '\r' || c == '\n')
        .filter(|segment| !segment.is_empty())
        .enumerate()
        .map(|(idx, segment)| {
            if idx > 0 {
                format!("        {}", segment)
            } else {
                segment.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(NEWLINE)
}
