//! ModelRegistry - built-in catalog plus a replaceable set of custom models

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::error::RegistryError;

use super::ModelInfo;
use super::catalog::builtin_models;
use super::heuristics::{bare_name, guess_extended_thinking, guess_reasoning, guess_streaming};

/// A custom model definition, as read from a models file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CustomModel {
    pub key: String,
    #[serde(flatten)]
    pub info: ModelInfo,
}

impl CustomModel {
    pub fn new(key: impl Into<String>, info: ModelInfo) -> Self {
        Self {
            key: key.into(),
            info,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ModelsFile {
    #[serde(default, rename = "model")]
    models: Vec<CustomModel>,
}

/// Why a custom entry was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    BlankKey,
    BuiltinCollision,
    Duplicate,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::BlankKey => write!(f, "key is blank"),
            RejectReason::BuiltinCollision => write!(f, "key collides with a built-in model"),
            RejectReason::Duplicate => write!(f, "key was already defined in this update"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub key: String,
    pub reason: RejectReason,
}

/// Outcome of [`ModelRegistry::replace_custom`].
#[derive(Debug, Clone)]
pub struct ReplaceReport {
    /// Every key the registry now answers for, built-ins included.
    pub effective: BTreeMap<String, ModelInfo>,
    pub rejected: Vec<Rejection>,
}

/// Model metadata lookup.
///
/// Built-in entries are fixed for the life of the registry. Custom entries
/// are replaced as a whole by [`replace_custom`](Self::replace_custom); a
/// lookup never sees a half-applied update.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    builtin: BTreeMap<String, ModelInfo>,
    custom: BTreeMap<String, ModelInfo>,
}

impl ModelRegistry {
    /// An empty registry, with no built-ins.
    pub fn empty() -> Self {
        Self {
            builtin: BTreeMap::new(),
            custom: BTreeMap::new(),
        }
    }

    pub fn with_builtins() -> Self {
        Self {
            builtin: builtin_models().collect(),
            custom: BTreeMap::new(),
        }
    }

    pub fn lookup(&self, key: &str) -> Option<&ModelInfo> {
        self.builtin.get(key).or_else(|| self.custom.get(key))
    }

    /// Lookup that treats an unregistered key as an error.
    pub fn resolve(&self, key: &str) -> Result<&ModelInfo, RegistryError> {
        self.lookup(key)
            .ok_or_else(|| RegistryError::UnknownModel(key.to_string()))
    }

    pub fn is_builtin(&self, key: &str) -> bool {
        self.builtin.contains_key(key)
    }

    pub fn custom_keys(&self) -> impl Iterator<Item = &str> {
        self.custom.keys().map(String::as_str)
    }

    /// Built-in and custom entries merged into one map.
    pub fn effective(&self) -> BTreeMap<String, ModelInfo> {
        let mut all = self.custom.clone();
        all.extend(self.builtin.iter().map(|(k, v)| (k.clone(), v.clone())));
        all
    }

    /// Replace every custom entry with `entries`.
    ///
    /// Entries with a blank key, a key that names a built-in, or a key seen
    /// earlier in the same list are rejected; everything else becomes the new
    /// custom table. The previous custom entries are dropped either way.
    pub fn replace_custom(&mut self, entries: Vec<CustomModel>) -> ReplaceReport {
        let mut custom = BTreeMap::new();
        let mut seen = HashSet::new();
        let mut rejected = Vec::new();

        for CustomModel { key, mut info } in entries {
            let key = key.trim().to_string();
            let reason = if key.is_empty() {
                Some(RejectReason::BlankKey)
            } else if self.builtin.contains_key(&key) {
                Some(RejectReason::BuiltinCollision)
            } else if !seen.insert(key.clone()) {
                Some(RejectReason::Duplicate)
            } else {
                None
            };

            if let Some(reason) = reason {
                log::warn!("rejecting custom model '{}': {}", key, reason);
                rejected.push(Rejection { key, reason });
                continue;
            }

            if info.display_name.trim().is_empty() {
                info.display_name = key.clone();
            }
            custom.insert(key, info);
        }

        self.custom = custom;
        ReplaceReport {
            effective: self.effective(),
            rejected,
        }
    }

    /// Read `[[model]]` tables from a TOML file and apply them with
    /// [`replace_custom`](Self::replace_custom).
    pub fn load_custom(&mut self, path: &Path) -> Result<ReplaceReport, RegistryError> {
        let content = std::fs::read_to_string(path).map_err(|source| RegistryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed: ModelsFile = toml::from_str(&content).map_err(|source| RegistryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.replace_custom(parsed.models))
    }

    pub fn supports_reasoning(&self, key: &str) -> bool {
        match self.lookup(key) {
            Some(info) => info.reasoning,
            None => {
                log::debug!("guessing reasoning support for unregistered model '{}'", key);
                guess_reasoning(key)
            }
        }
    }

    pub fn supports_streaming(&self, key: &str) -> bool {
        match self.lookup(key) {
            Some(info) => info.streaming,
            None => guess_streaming(key),
        }
    }

    pub fn supports_extended_thinking(&self, key: &str) -> bool {
        match self.lookup(key) {
            Some(info) => info.extended_thinking,
            None => guess_extended_thinking(key),
        }
    }

    /// The name to send to the provider's API.
    ///
    /// Registered entries use their explicit `api_name`, or the key itself.
    /// Unregistered keys drop any `provider/` qualifier.
    pub fn api_name<'a>(&'a self, key: &'a str) -> &'a str {
        match self.lookup(key) {
            Some(info) => info.api_name.as_deref().unwrap_or(key),
            None => bare_name(key),
        }
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn info(name: &str) -> ModelInfo {
        ModelInfo {
            display_name: name.to_string(),
            provider: "ollama".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_builtin_lookup() {
        let registry = ModelRegistry::with_builtins();
        let sonnet = registry.lookup("claude-sonnet-4-5").unwrap();
        assert_eq!(sonnet.provider, "anthropic");
        assert!(sonnet.extended_thinking);
        assert!(registry.lookup("not-a-model").is_none());
        assert!(matches!(
            registry.resolve("not-a-model"),
            Err(RegistryError::UnknownModel(_))
        ));
    }

    #[test]
    fn test_replace_custom_rejects_collisions_and_blank_keys() {
        let mut registry = ModelRegistry::with_builtins();
        let report = registry.replace_custom(vec![
            CustomModel::new("llama-local", info("Llama")),
            CustomModel::new("gpt-4o", info("Shadow")),
            CustomModel::new("   ", info("Nameless")),
            CustomModel::new("llama-local", info("Again")),
        ]);

        let reasons: Vec<_> = report.rejected.iter().map(|r| r.reason).collect();
        assert_eq!(
            reasons,
            [
                RejectReason::BuiltinCollision,
                RejectReason::BlankKey,
                RejectReason::Duplicate
            ]
        );
        assert_eq!(registry.lookup("llama-local").unwrap().display_name, "Llama");
        assert_eq!(registry.lookup("gpt-4o").unwrap().display_name, "GPT-4o");
        assert!(report.effective.contains_key("llama-local"));
        assert!(report.effective.contains_key("gpt-4o"));
    }

    #[test]
    fn test_replace_custom_drops_previous_entries() {
        let mut registry = ModelRegistry::with_builtins();
        registry.replace_custom(vec![CustomModel::new("first", info("First"))]);
        registry.replace_custom(vec![CustomModel::new("second", info("Second"))]);

        assert!(registry.lookup("first").is_none());
        assert!(registry.lookup("second").is_some());
        assert_eq!(registry.custom_keys().collect::<Vec<_>>(), ["second"]);

        registry.replace_custom(Vec::new());
        assert_eq!(registry.custom_keys().count(), 0);
        assert!(registry.is_builtin("o3"));
    }

    #[test]
    fn test_blank_display_name_falls_back_to_key() {
        let mut registry = ModelRegistry::empty();
        registry.replace_custom(vec![CustomModel::new(" qwen ", info(""))]);
        assert_eq!(registry.lookup("qwen").unwrap().display_name, "qwen");
    }

    #[test]
    fn test_capabilities_prefer_registered_metadata() {
        let mut registry = ModelRegistry::with_builtins();
        registry.replace_custom(vec![CustomModel::new(
            "o3-custom-finetune",
            ModelInfo {
                reasoning: false,
                api_name: Some("ft:o3:acme".to_string()),
                ..info("Finetune")
            },
        )]);

        // Registered metadata wins over the o3 prefix
        assert!(!registry.supports_reasoning("o3-custom-finetune"));
        assert_eq!(registry.api_name("o3-custom-finetune"), "ft:o3:acme");

        assert!(!registry.supports_streaming("o1-pro"));
        assert!(registry.supports_reasoning("o3"));
        assert_eq!(registry.api_name("o3"), "o3");
    }

    #[test]
    fn test_capabilities_fall_back_to_prefixes() {
        let registry = ModelRegistry::with_builtins();
        assert!(registry.supports_reasoning("o4-mini"));
        assert!(registry.supports_extended_thinking("claude-opus-4-7"));
        assert!(!registry.supports_extended_thinking("gpt-4o-mini"));
        assert!(registry.supports_streaming("brand-new-model"));
        assert_eq!(registry.api_name("openai/gpt-4o-mini"), "gpt-4o-mini");
    }

    #[test]
    fn test_load_custom_from_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("models.toml");
        std::fs::write(
            &path,
            r#"
[[model]]
key = "llama-local"
display_name = "Llama 3 (local)"
provider = "ollama"
context_window = 8192

[[model]]
key = "claude-sonnet-4-5"
provider = "anthropic"
"#,
        )
        .unwrap();

        let mut registry = ModelRegistry::with_builtins();
        let report = registry.load_custom(&path).unwrap();

        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].key, "claude-sonnet-4-5");
        let llama = registry.lookup("llama-local").unwrap();
        assert_eq!(llama.context_window, Some(8192));
        assert!(llama.streaming);
        assert!(!llama.reasoning);
    }

    #[test]
    fn test_load_custom_errors() {
        let dir = TempDir::new().unwrap();
        let mut registry = ModelRegistry::with_builtins();

        let missing = registry.load_custom(&dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(RegistryError::Read { .. })));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[[model]]\nkey = 3\n").unwrap();
        assert!(matches!(
            registry.load_custom(&bad),
            Err(RegistryError::Parse { .. })
        ));
    }
}
