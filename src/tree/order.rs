//! Visibility filtering and sibling ordering

use std::cmp::Ordering;

use glob::Pattern;

use super::config::RenderConfig;
use super::entry::DirEntry;

/// Decides which scanned entries are visible.
#[derive(Debug, Clone)]
pub struct EntryFilter {
    include_hidden: bool,
    patterns: Vec<Pattern>,
}

impl EntryFilter {
    /// Build a filter from the render configuration.
    ///
    /// Patterns that fail to compile are dropped with a warning.
    pub fn new(config: &RenderConfig) -> Self {
        let patterns = config
            .ignore_patterns
            .iter()
            .filter_map(|p| match Pattern::new(p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    log::warn!("ignoring invalid pattern '{}': {}", p, e);
                    None
                }
            })
            .collect();

        Self {
            include_hidden: config.include_hidden,
            patterns,
        }
    }

    pub fn is_visible(&self, entry: &DirEntry) -> bool {
        if !self.include_hidden && entry.is_hidden() {
            return false;
        }
        !self.patterns.iter().any(|p| p.matches(&entry.name))
    }

    pub fn apply(&self, entries: Vec<DirEntry>) -> Vec<DirEntry> {
        entries.into_iter().filter(|e| self.is_visible(e)).collect()
    }
}

/// Directories first, then case-insensitive name order.
pub fn compare_entries(a: &DirEntry, b: &DirEntry) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| compare_names(&a.name, &b.name))
}

/// Case-insensitive name comparison using Unicode lowercase folding.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Stable sort, so names that fold equal keep scan order.
pub fn sort_entries(entries: &mut [DirEntry]) {
    entries.sort_by(compare_entries);
}
