//! TOML-backed configuration shapes.

use crate::inference::client::InferenceConfig;
use serde::{Deserialize, Serialize};

/// Root configuration document.
///
/// # Example
///
/// ```toml
/// [inference]
/// endpoint = "https://my-resource.services.ai.azure.com/models"
/// api_key_env = "AZURE_AI_API_KEY"
/// model = "Phi-4"
///
/// [chat]
/// preamble = "You are the Contoso outlet's shopping assistant."
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion endpoint connection settings.
    pub inference: FileInferenceConfig,
    /// Chat behavior settings.
    pub chat: FileChatConfig,
}

/// `[inference]` section — connection settings for the completion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInferenceConfig {
    /// Endpoint URL. Leaving this unset runs the assistant in its
    /// unavailable mode.
    pub endpoint: Option<String>,
    /// Direct API key (not recommended — use the env var instead).
    pub api_key: Option<String>,
    /// Environment variable consulted when `api_key` is unset
    /// (default: "AZURE_AI_API_KEY").
    pub api_key_env: String,
    /// Model or deployment identifier. Unset falls back to the client
    /// default.
    pub model: Option<String>,
}

impl Default for FileInferenceConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            api_key_env: "AZURE_AI_API_KEY".to_string(),
            model: None,
        }
    }
}

impl FileInferenceConfig {
    /// Resolve the API key: the explicit value wins, then the environment
    /// variable named by `api_key_env`. Blank values count as unset.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                std::env::var(&self.api_key_env)
                    .ok()
                    .filter(|k| !k.trim().is_empty())
            })
    }

    /// Bridge into the inference client's connection settings.
    pub fn inference_config(&self) -> InferenceConfig {
        InferenceConfig {
            endpoint: self.endpoint.clone(),
            api_key: self.resolve_api_key(),
            model: self.model.clone(),
        }
    }
}

/// `[chat]` section — chat behavior settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Override of the built-in system preamble.
    pub preamble: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_unconfigured() {
        let config = FileConfig::default();
        assert!(config.inference.endpoint.is_none());
        assert!(config.inference.api_key.is_none());
        assert_eq!(config.inference.api_key_env, "AZURE_AI_API_KEY");
        assert!(config.inference.model.is_none());
        assert!(config.chat.preamble.is_none());
    }

    #[test]
    fn explicit_api_key_wins_over_env() {
        let config = FileInferenceConfig {
            api_key: Some("direct-key".to_string()),
            api_key_env: "SHOPCHAT_TEST_KEY_UNSET".to_string(),
            ..FileInferenceConfig::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("direct-key"));
    }

    #[test]
    fn env_var_is_consulted_when_no_direct_key() {
        // SAFETY: var name is unique to this test
        unsafe { std::env::set_var("SHOPCHAT_TEST_KEY_FROM_ENV", "env-key") };
        let config = FileInferenceConfig {
            api_key_env: "SHOPCHAT_TEST_KEY_FROM_ENV".to_string(),
            ..FileInferenceConfig::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("env-key"));
        unsafe { std::env::remove_var("SHOPCHAT_TEST_KEY_FROM_ENV") };
    }

    #[test]
    fn blank_direct_key_counts_as_unset() {
        let config = FileInferenceConfig {
            api_key: Some("  ".to_string()),
            api_key_env: "SHOPCHAT_TEST_KEY_ALSO_UNSET".to_string(),
            ..FileInferenceConfig::default()
        };
        assert_eq!(config.resolve_api_key(), None);
    }

    #[test]
    fn toml_sections_deserialize() {
        let config: FileConfig = toml::from_str(
            r#"
            [inference]
            endpoint = "https://models.example.com"
            model = "Phi-4"

            [chat]
            preamble = "Hats only."
            "#,
        )
        .unwrap();

        assert_eq!(
            config.inference.endpoint.as_deref(),
            Some("https://models.example.com")
        );
        assert_eq!(config.inference.model.as_deref(), Some("Phi-4"));
        assert_eq!(config.chat.preamble.as_deref(), Some("Hats only."));
    }
}
