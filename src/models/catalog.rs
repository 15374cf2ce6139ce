//! Built-in model catalog

use super::ModelInfo;

struct Builtin {
    key: &'static str,
    display_name: &'static str,
    provider: &'static str,
    reasoning: bool,
    streaming: bool,
    extended_thinking: bool,
    context_window: Option<u64>,
    compaction_threshold: Option<u64>,
}

const BUILTINS: &[Builtin] = &[
    Builtin {
        key: "claude-opus-4-1",
        display_name: "Claude Opus 4.1",
        provider: "anthropic",
        reasoning: true,
        streaming: true,
        extended_thinking: true,
        context_window: Some(200_000),
        compaction_threshold: Some(160_000),
    },
    Builtin {
        key: "claude-sonnet-4-5",
        display_name: "Claude Sonnet 4.5",
        provider: "anthropic",
        reasoning: true,
        streaming: true,
        extended_thinking: true,
        context_window: Some(200_000),
        compaction_threshold: Some(160_000),
    },
    Builtin {
        key: "claude-3-5-haiku",
        display_name: "Claude Haiku 3.5",
        provider: "anthropic",
        reasoning: false,
        streaming: true,
        extended_thinking: false,
        context_window: Some(200_000),
        compaction_threshold: None,
    },
    Builtin {
        key: "gpt-4o",
        display_name: "GPT-4o",
        provider: "openai",
        reasoning: false,
        streaming: true,
        extended_thinking: false,
        context_window: Some(128_000),
        compaction_threshold: Some(100_000),
    },
    Builtin {
        key: "gpt-4.1",
        display_name: "GPT-4.1",
        provider: "openai",
        reasoning: false,
        streaming: true,
        extended_thinking: false,
        context_window: Some(1_047_576),
        compaction_threshold: None,
    },
    Builtin {
        key: "o3",
        display_name: "o3",
        provider: "openai",
        reasoning: true,
        streaming: true,
        extended_thinking: false,
        context_window: Some(200_000),
        compaction_threshold: None,
    },
    Builtin {
        key: "o1-pro",
        display_name: "o1 pro",
        provider: "openai",
        reasoning: true,
        streaming: false,
        extended_thinking: false,
        context_window: Some(200_000),
        compaction_threshold: None,
    },
    Builtin {
        key: "gemini-2.5-pro",
        display_name: "Gemini 2.5 Pro",
        provider: "google",
        reasoning: true,
        streaming: true,
        extended_thinking: false,
        context_window: Some(1_048_576),
        compaction_threshold: None,
    },
];

/// The built-in entries as `(key, info)` pairs.
pub fn builtin_models() -> impl Iterator<Item = (String, ModelInfo)> {
    BUILTINS.iter().map(|b| {
        (
            b.key.to_string(),
            ModelInfo {
                display_name: b.display_name.to_string(),
                provider: b.provider.to_string(),
                api_name: None,
                reasoning: b.reasoning,
                streaming: b.streaming,
                extended_thinking: b.extended_thinking,
                context_window: b.context_window,
                compaction_threshold: b.compaction_threshold,
            },
        )
    })
}
