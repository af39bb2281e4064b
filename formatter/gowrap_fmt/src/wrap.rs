//! The wrap pass: discover constructs, decide each one, splice.

use tracing::{debug, trace};

use crate::config::WrapConfig;
use crate::discover::collect_wrappables;
use crate::error::FormatError;
use crate::packing::plan_replacement;
use crate::parse::parse_go;
use crate::splice::splice;

/// Result of one wrap pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapOutcome {
    /// The (possibly rewritten) buffer.
    pub text: String,
    /// Whether any replacement differed from the text it replaced.
    pub changed: bool,
}

/// Re-wrap overlong lists in canonically formatted Go source.
///
/// Constructs are processed in descending opening-delimiter order against
/// a single buffer, so a construct positioned before the current one is
/// never affected by the current splice. Inner constructs are always
/// spliced before the construct enclosing them; after each applied
/// replacement the recorded offsets of the not-yet-processed constructs
/// are shifted by the length delta, so an enclosing construct re-extracts
/// its item text from accurate coordinates in the post-splice buffer.
pub fn wrap_long_lines(source: &str, config: &WrapConfig) -> Result<WrapOutcome, FormatError> {
    let tree = parse_go(source)?;
    let mut constructs = collect_wrappables(&tree);

    if constructs.is_empty() {
        return Ok(WrapOutcome {
            text: source.to_string(),
            changed: false,
        });
    }

    constructs.sort_by(|a, b| b.open.cmp(&a.open));
    debug!(constructs = constructs.len(), "collected wrappable constructs");

    let mut buffer = source.to_string();
    let mut changed = false;

    for index in 0..constructs.len() {
        let Some(replacement) = plan_replacement(&buffer, &constructs[index], config) else {
            continue;
        };
        if replacement.is_noop(&buffer) {
            continue;
        }

        trace!(
            kind = constructs[index].kind.name(),
            open = constructs[index].open,
            "rewriting construct"
        );

        let delta = replacement.delta();
        let edit_end = replacement.end;
        buffer = splice(&buffer, std::slice::from_ref(&replacement));
        changed = true;

        for enclosing in &mut constructs[index + 1..] {
            enclosing.shift_past(edit_end, delta);
        }
    }

    Ok(WrapOutcome {
        text: buffer,
        changed,
    })
}
