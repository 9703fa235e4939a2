use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_provider() -> String {
    "anthropic".into()
}

fn default_model() -> String {
    "claude-3-5-sonnet-latest".into()
}

fn default_timeout_ms() -> u64 {
    30_000
}

impl AppConfig {
    /// Loads config from `path`. A missing file yields defaults so the
    /// offline value-bet command works without any setup.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = AppConfig::load("does-not-exist.toml").unwrap();
        assert_eq!(config.llm.provider, "anthropic");
        assert_eq!(config.llm.timeout_ms, 30_000);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: AppConfig = toml::from_str("[llm]\nmodel = \"claude-3-7-sonnet-latest\"\n").unwrap();
        assert_eq!(config.llm.model, "claude-3-7-sonnet-latest");
        assert_eq!(config.llm.provider, "anthropic");
    }
}
