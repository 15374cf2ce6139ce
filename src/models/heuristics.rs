//! Capability guesses for keys that are not registered.
//!
//! Model families tend to keep their naming scheme across releases, so a
//! prefix match on the bare model name is a usable default for models that
//! have not been cataloged yet. Provider qualifiers (`openrouter/`,
//! `anthropic/`, ...) are stripped before matching.

const REASONING_PREFIXES: &[&str] = &[
    "o1",
    "o3",
    "o4",
    "gpt-5",
    "claude-3-7",
    "claude-sonnet-4",
    "claude-opus-4",
    "claude-haiku-4",
    "deepseek-r1",
    "gemini-2.5",
];

const EXTENDED_THINKING_PREFIXES: &[&str] = &[
    "claude-3-7",
    "claude-sonnet-4",
    "claude-opus-4",
    "claude-haiku-4",
];

const NON_STREAMING_PREFIXES: &[&str] = &["o1-pro", "o1-preview"];

/// The model part of a possibly provider-qualified key.
pub fn bare_name(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

fn has_prefix(key: &str, prefixes: &[&str]) -> bool {
    let name = bare_name(key).to_ascii_lowercase();
    prefixes.iter().any(|p| name.starts_with(p))
}

pub fn guess_reasoning(key: &str) -> bool {
    has_prefix(key, REASONING_PREFIXES)
}

pub fn guess_extended_thinking(key: &str) -> bool {
    has_prefix(key, EXTENDED_THINKING_PREFIXES)
}

pub fn guess_streaming(key: &str) -> bool {
    !has_prefix(key, NON_STREAMING_PREFIXES)
}
