//! Canonical formatter boundary.
//!
//! The engine never derives baseline formatting itself; it relies on an
//! external canonical formatter invoked twice per operation, before
//! discovery and after a successful splice. The trait seam keeps the
//! engine and driver testable without a Go toolchain on PATH.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use crate::error::FormatError;

/// An external canonical formatter for Go source.
pub trait CanonicalFormatter {
    /// Format `source`, returning canonical bytes or a syntax error.
    fn format(&self, source: &str) -> Result<String, FormatError>;
}

const GOFMT: &str = "gofmt";

/// The `gofmt` binary, invoked over stdin/stdout.
///
/// A nonzero exit maps to [`FormatError::Syntax`] carrying gofmt's stderr
/// verbatim; failure to run the process at all maps to
/// [`FormatError::Formatter`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Gofmt;

impl CanonicalFormatter for Gofmt {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        let mut child = Command::new(GOFMT)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| FormatError::Formatter {
                tool: GOFMT,
                source: err,
            })?;

        // gofmt reads all of stdin before writing anything, so write-then-
        // wait cannot deadlock; stdin must be closed for output to appear.
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(source.as_bytes())
                .map_err(|err| FormatError::Formatter {
                    tool: GOFMT,
                    source: err,
                })?;
        }

        let output = child
            .wait_with_output()
            .map_err(|err| FormatError::Formatter {
                tool: GOFMT,
                source: err,
            })?;

        if !output.status.success() {
            let message = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(FormatError::Syntax(message));
        }

        String::from_utf8(output.stdout).map_err(|err| FormatError::Formatter {
            tool: GOFMT,
            source: io::Error::new(io::ErrorKind::InvalidData, err),
        })
    }
}
