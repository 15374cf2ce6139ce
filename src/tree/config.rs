//! Configuration types for the tree renderer

/// Default fan-out limit before a directory's contents are elided.
pub const DEFAULT_THRESHOLD: usize = 20;

/// Configuration for a single render.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Max number of counted children before the directory is elided.
    pub threshold: usize,
    /// Show entries whose name starts with `.`
    pub include_hidden: bool,
    /// Only non-directory children count toward `threshold`.
    pub count_files_only: bool,
    /// Order children directories-first, then by case-insensitive name.
    pub sort_entries: bool,
    /// Glob patterns matched against entry names; matches are dropped.
    pub ignore_patterns: Vec<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            include_hidden: false,
            count_files_only: false,
            sort_entries: true,
            ignore_patterns: Vec::new(),
        }
    }
}
