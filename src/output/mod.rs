//! Tree formatting and display
//!
//! Line sinks for the tree renderer:
//! - Console output with colors (streaming)
//! - Markdown code fence
//! - JSON array of lines
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `streaming` - Streaming formatter for console output
//! - `markdown` - Markdown output formatter
//! - `json` - JSON output

mod config;
mod json;
mod markdown;
mod streaming;

pub use config::OutputConfig;
pub use json::{print_json, to_json, write_json};
pub use markdown::{MarkdownFormatter, print_markdown, write_markdown};
pub use streaming::StreamingFormatter;
