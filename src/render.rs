//! Value rendering for failure messages.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use thiserror::Error;

/// Line separator matching the host platform convention.
///
/// Every multi-line message in this crate joins its segments with this
/// constant; tests asserting exact message text must compose with it too.
pub const NEWLINE: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Renders a value, or its absence, for display inside a failure message.
///
/// Must be deterministic for a given value snapshot.
pub type ValueFormatter = Arc<dyn Fn(Option<&dyn fmt::Debug>) -> String + Send + Sync>;

static VALUE_FORMATTER: OnceCell<ValueFormatter> = OnceCell::new();

/// A value formatter was already installed for this process.
#[derive(Debug, Clone, Error)]
#[error("a value formatter is already installed for this process")]
pub struct FormatterInstallError;

/// Install the process-wide value formatter.
///
/// Succeeds at most once; later calls leave the existing formatter in
/// place and report [`FormatterInstallError`].
pub fn set_value_formatter(formatter: ValueFormatter) -> Result<(), FormatterInstallError> {
    VALUE_FORMATTER
        .set(formatter)
        .map_err(|_| FormatterInstallError)
}

/// Render `value` with the installed formatter, falling back to
/// [`debug_format`] when none has been installed.
pub fn format_value(value: Option<&dyn fmt::Debug>) -> String {
    match VALUE_FORMATTER.get() {
        Some(formatter) => formatter(value),
        None => debug_format(value),
    }
}

/// Default formatter: the `Debug` rendering for present values, the
/// token `null` for absent ones.
pub fn debug_format(value: Option<&dyn fmt::Debug>) -> String {
    match value {
        Some(value) => format!("{:?}", value),
        None => "null".to_string(),
    }
}
