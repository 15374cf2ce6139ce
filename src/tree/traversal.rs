//! The per-directory scan step shared by the sequential and parallel walks.
//!
//! A scan lists one directory, filters and sorts its children, and applies
//! the fan-out threshold. Both walkers call [`Traversal::scan`] so elision
//! and ordering decisions are made in exactly one place.

use std::path::Path;

use crate::error::ScanError;

use super::config::RenderConfig;
use super::entry::{DirEntry, scan_dir};
use super::order::{EntryFilter, sort_entries};

/// Result of scanning one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Visible children, in display order.
    Listed(Vec<DirEntry>),
    /// More counted children than the threshold allows.
    Elided { counted: usize },
    /// The directory could not be listed.
    Failed(ScanError),
}

/// Scan policy derived from a [`RenderConfig`].
#[derive(Debug, Clone)]
pub struct Traversal {
    threshold: usize,
    count_files_only: bool,
    sort_entries: bool,
    filter: EntryFilter,
}

impl Traversal {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            threshold: config.threshold,
            count_files_only: config.count_files_only,
            sort_entries: config.sort_entries,
            filter: EntryFilter::new(config),
        }
    }

    /// List, filter, sort and threshold-check the children of `path`.
    pub fn scan(&self, path: &Path) -> ScanOutcome {
        match scan_dir(path) {
            Ok(entries) => self.select(entries),
            Err(e) => {
                log::debug!("cannot list {}: {}", path.display(), e);
                ScanOutcome::Failed(e)
            }
        }
    }

    /// Apply filtering, ordering and the threshold to already-scanned entries.
    pub fn select(&self, entries: Vec<DirEntry>) -> ScanOutcome {
        let mut entries = self.filter.apply(entries);
        if self.sort_entries {
            sort_entries(&mut entries);
        }

        let counted = self.counted(&entries);
        if counted > self.threshold {
            return ScanOutcome::Elided { counted };
        }
        ScanOutcome::Listed(entries)
    }

    /// Number of entries that count toward the threshold.
    fn counted(&self, entries: &[DirEntry]) -> usize {
        if self.count_files_only {
            entries.iter().filter(|e| !e.is_dir).count()
        } else {
            entries.len()
        }
    }
}
