//! Directory tree rendering
//!
//! `TreeRenderer` turns a root path into an ordered sequence of display
//! lines: a header for the root, then a depth-first, pre-order listing of
//! its children with tree-drawing connectors.
//!
//! - `config` - render options (`RenderConfig`)
//! - `entry` - scanned directory entries and the scan primitive
//! - `order` - visibility filter and sibling ordering
//! - `traversal` - the per-directory scan step (filter, sort, threshold)
//! - `line` - typed output lines and their text form
//! - `renderer` - root validation and the walk itself

mod config;
mod entry;
mod line;
mod order;
mod renderer;
mod traversal;

pub use config::{DEFAULT_THRESHOLD, RenderConfig};
pub use entry::{DirEntry, scan_dir};
pub use line::{
    CONNECTOR_LAST, CONNECTOR_MIDDLE, ELISION_MARKER, Line, PREFIX_BLANK, PREFIX_CONTINUE,
    child_prefix,
};
pub use order::{EntryFilter, compare_entries, compare_names, sort_entries};
pub use renderer::{LineSink, TreeRenderer};
pub use traversal::{ScanOutcome, Traversal};
