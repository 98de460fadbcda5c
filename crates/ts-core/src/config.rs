use crate::error::{Result, TsError};
use crate::types::SimplifyParams;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifierConfig {
    pub server: ServerConfig,
    /// Parameters applied when a request leaves a field out.
    pub defaults: SimplifyParams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on input size; dedup and selection are quadratic in sentence count.
    pub max_text_chars: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            max_text_chars: 200_000,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SimplifierConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(TsError::InvalidConfig("server.port must be non-zero".into()));
        }
        if self.server.max_text_chars == 0 {
            return Err(TsError::InvalidConfig("server.max_text_chars must be positive".into()));
        }
        let ratio = self.defaults.compress_ratio;
        if !(0..=100).contains(&ratio) {
            return Err(TsError::InvalidConfig(format!(
                "defaults.compress_ratio must be within 0..=100, got {ratio}"
            )));
        }
        let threshold = self.defaults.dup_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(TsError::InvalidConfig(format!(
                "defaults.dup_threshold must be a non-negative number, got {threshold}"
            )));
        }
        Ok(())
    }
}
