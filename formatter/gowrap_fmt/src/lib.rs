//! gowrap formatting engine
//!
//! Post-processing line wrapper for Go source. After `gofmt` has
//! normalized a file, overlong comma-separated lists (call arguments,
//! composite-literal elements, parameter and result lists) are re-wrapped
//! with IDE-style greedy packing, and previously wrapped lists that fit
//! again are collapsed back onto one line.
//!
//! # Architecture
//!
//! One operation is a fixed pipeline over a single in-memory buffer:
//!
//! 1. **Canonical format**: the external formatter produces the baseline.
//! 2. **Discover**: tree-sitter parses the buffer; every candidate list is
//!    recorded as a value-typed descriptor of byte offsets ([`discover`]).
//! 3. **Decide and splice**: constructs are processed in descending
//!    opening-delimiter order; each either collapses to a single line or
//!    expands via the greedy packer, and its replacement is spliced into
//!    the buffer ([`packing`], [`splice`], [`wrap`]).
//! 4. **Canonical format again**: only if something changed, to restore
//!    residual spacing. A failure here is recovered by keeping the spliced
//!    output.
//!
//! The engine never re-derives indentation, never reflows comments or
//! string literals, and never changes semantics.
//!
//! # Modules
//!
//! - [`width`]: tab-aware visual width measurement
//! - [`discover`]: wrappable construct discovery
//! - [`extract`]: item slicing and whitespace normalization
//! - [`packing`]: collapse-vs-wrap decisions and greedy packing
//! - [`splice`]: offset-stable batch text replacement
//! - [`wrap`]: the wrap pass over one buffer
//! - [`gofmt`]: the canonical-formatter boundary

pub mod config;
pub mod discover;
pub mod error;
pub mod extract;
pub mod gofmt;
pub mod packing;
pub mod parse;
pub mod splice;
pub mod width;
pub mod wrap;

pub use config::{WrapConfig, MAX_LINE_WIDTH, TAB_WIDTH};
pub use error::FormatError;
pub use gofmt::{CanonicalFormatter, Gofmt};
pub use splice::Replacement;
pub use wrap::{wrap_long_lines, WrapOutcome};

/// Format Go source end to end: canonical format, wrap overlong lists,
/// canonical format again.
///
/// The second formatter pass runs only when the wrap pass changed the
/// buffer. If that pass fails even though the splice succeeded, the
/// spliced-but-unreformatted buffer is returned rather than failing the
/// whole operation; the wrap transformation itself did succeed.
///
/// # Errors
///
/// Returns [`FormatError::Syntax`] when the input does not parse, and
/// [`FormatError::Formatter`] when the canonical formatter cannot be run.
pub fn format_source(
    source: &str,
    config: &WrapConfig,
    formatter: &dyn CanonicalFormatter,
) -> Result<String, FormatError> {
    let formatted = formatter.format(source)?;

    let outcome = wrap_long_lines(&formatted, config)?;
    if !outcome.changed {
        return Ok(formatted);
    }

    match formatter.format(&outcome.text) {
        Ok(reformatted) => Ok(reformatted),
        Err(err) => {
            tracing::warn!(%err, "re-format after wrapping failed; keeping spliced output");
            Ok(outcome.text)
        }
    }
}
