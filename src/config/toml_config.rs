use crate::adapters::gemini::{
    GeminiSettings, DEFAULT_ENDPOINT, DEFAULT_EXCERPT_CHARS, DEFAULT_MODEL,
    DEFAULT_TIMEOUT_SECONDS,
};
use crate::utils::error::{Result, SeoError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

/// Environment variables consulted when no API key is configured.
pub const API_KEY_ENV_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
    #[serde(default)]
    pub audit: AuditConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub excerpt_chars: Option<usize>,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: None,
            model: None,
            endpoint: None,
            timeout_seconds: None,
            excerpt_chars: None,
        }
    }
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Replaces the simulated load time, for reproducible audits.
    pub fixed_load_time: Option<f64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SeoError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SeoError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Configured key, else the first non-empty key variable in the environment.
    pub fn api_key(&self) -> Option<String> {
        self.suggestions
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty() && !key.starts_with("${"))
            .or_else(|| {
                API_KEY_ENV_VARS
                    .iter()
                    .filter_map(|name| std::env::var(name).ok())
                    .find(|key| !key.trim().is_empty())
            })
    }

    /// `None` when suggestions are disabled or no key is available.
    pub fn gemini_settings(&self) -> Option<GeminiSettings> {
        if !self.suggestions.enabled {
            return None;
        }
        let api_key = self.api_key()?;

        Some(GeminiSettings {
            api_key,
            model: self
                .suggestions
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            endpoint: self
                .suggestions
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            timeout: Duration::from_secs(
                self.suggestions
                    .timeout_seconds
                    .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            ),
            excerpt_chars: self.suggestions.excerpt_chars.unwrap_or(DEFAULT_EXCERPT_CHARS),
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.suggestions.endpoint {
            validate_url("suggestions.endpoint", endpoint)?;
        }
        if let Some(model) = &self.suggestions.model {
            validate_non_empty_string("suggestions.model", model)?;
        }
        if let Some(timeout) = self.suggestions.timeout_seconds {
            validate_positive_number("suggestions.timeout_seconds", timeout, 1)?;
        }
        if let Some(chars) = self.suggestions.excerpt_chars {
            validate_positive_number("suggestions.excerpt_chars", chars as u64, 1)?;
        }
        if let Some(seconds) = self.audit.fixed_load_time {
            validate_range("audit.fixed_load_time", seconds, 0.0, 60.0)?;
        }
        Ok(())
    }
}
