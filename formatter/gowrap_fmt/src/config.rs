//! Line budget configuration.

/// Default maximum visual line width before a list is wrapped.
pub const MAX_LINE_WIDTH: usize = 120;

/// Default tab stop width.
pub const TAB_WIDTH: usize = 4;

/// Width budget for one formatting run.
///
/// The pair is applied uniformly to every construct in a buffer and is
/// passed explicitly into each entry point; the engine holds no global
/// state, so independent buffers can be formatted concurrently by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapConfig {
    /// Maximum visual line width before a list is wrapped.
    pub max_width: usize,

    /// Tab stop width used for visual width measurement.
    pub tab_width: usize,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            max_width: MAX_LINE_WIDTH,
            tab_width: TAB_WIDTH,
        }
    }
}

impl WrapConfig {
    /// Create a config with the specified max width.
    pub fn with_max_width(max_width: usize) -> Self {
        Self {
            max_width,
            ..Default::default()
        }
    }

    /// Create a config with the specified tab width.
    pub fn with_tab_width(tab_width: usize) -> Self {
        Self {
            tab_width,
            ..Default::default()
        }
    }
}
