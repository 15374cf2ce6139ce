//! Model metadata registry
//!
//! A lookup service for model display names, providers and capability
//! flags. It is independent of tree rendering; callers that assemble prompts
//! hold a [`ModelRegistry`] and pass it where it is needed.

mod catalog;
mod heuristics;
mod registry;

use serde::{Deserialize, Serialize};

pub use heuristics::{bare_name, guess_extended_thinking, guess_reasoning, guess_streaming};
pub use registry::{CustomModel, ModelRegistry, RejectReason, Rejection, ReplaceReport};

/// Metadata for one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelInfo {
    pub display_name: String,
    pub provider: String,
    /// Provider-side model name, when it differs from the registry key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_name: Option<String>,
    pub reasoning: bool,
    pub streaming: bool,
    pub extended_thinking: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_window: Option<u64>,
    /// Token count at which a conversation should be compacted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compaction_threshold: Option<u64>,
}

impl Default for ModelInfo {
    fn default() -> Self {
        Self {
            display_name: String::new(),
            provider: String::new(),
            api_name: None,
            reasoning: false,
            streaming: true,
            extended_thinking: false,
            context_window: None,
            compaction_threshold: None,
        }
    }
}
