//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Info string for the Markdown code fence.
    pub fence_language: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            fence_language: "text".to_string(),
        }
    }
}
