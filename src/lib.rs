#![doc(html_root_url = "https://docs.rs/assert-failures/0.1.0")]

//! Diagnostic failure messages for a test-assertion library.
//!
//! When an assertion over a collection, an emptiness expectation, or a
//! value range fails, the code that detected it constructs one of the
//! descriptors in this crate; test infrastructure later reads
//! `message()` / `stack_trace()` (or just `Display`) to report it. The
//! descriptors own the exact formatting rules - line layout, null
//! handling, eight-space re-indentation of chained failures - so every
//! consumer sees byte-identical reports.
//!
//! ## Modules
//!
//! - [`failure`] - The `Failure` contract and the base title/trace pair
//! - [`expected_actual`] - Expected/actual two-value mismatches
//! - [`collection`] - Count mismatches and per-item comparison failures
//! - [`empty`] - Emptiness mismatches in both directions
//! - [`range`] - Range mismatches with explicit null handling
//! - [`render`] - Value rendering and the platform line separator

pub mod collection;
pub mod empty;
pub mod expected_actual;
pub mod failure;
pub mod range;
pub mod render;

// Re-exports for convenient access to core types
pub use collection::{CollectionMismatch, CollectionRef};
pub use empty::{EmptyMismatch, NotEmptyMismatch};
pub use expected_actual::ExpectedActualMismatch;
pub use failure::{BaseFailure, Failure};
pub use range::RangeMismatch;
pub use render::{
    debug_format, format_value, set_value_formatter, FormatterInstallError, ValueFormatter, NEWLINE,
};
