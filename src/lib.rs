//! Canopy - bounded directory trees that fit in a prompt

pub mod error;
pub mod models;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{RegistryError, ScanError, TreeError};
pub use models::{CustomModel, ModelInfo, ModelRegistry};
pub use output::{MarkdownFormatter, OutputConfig, StreamingFormatter, print_json, print_markdown};
pub use tree::{DirEntry, Line, LineSink, RenderConfig, TreeRenderer};
