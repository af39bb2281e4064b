//! Error types for the formatting pipeline.

use std::io;

use thiserror::Error;

/// Errors that abort formatting of one input buffer.
///
/// A failing re-format after a successful splice is deliberately not
/// represented here: the driver recovers from it by returning the spliced
/// buffer (see [`crate::format_source`]).
#[derive(Debug, Error)]
pub enum FormatError {
    /// The input is not valid Go source. The message is the canonical
    /// formatter's diagnostic, surfaced verbatim.
    #[error("{0}")]
    Syntax(String),

    /// The canonical formatter process could not be run at all.
    #[error("running {tool}: {source}")]
    Formatter {
        /// Name of the external tool that failed.
        tool: &'static str,
        /// Underlying process or I/O failure.
        #[source]
        source: io::Error,
    },
}
