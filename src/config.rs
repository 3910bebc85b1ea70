use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_bind_address() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_address: default_bind_address(),
            cors_origins: default_cors_origins(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HaremProviderConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DovizProviderConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExchangeRateConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub harem: Option<HaremProviderConfig>,
    pub doviz: Option<DovizProviderConfig>,
    pub exchange_rate: Option<ExchangeRateConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            harem: Some(HaremProviderConfig {
                base_url: "https://harem-altin-live-gold-price-data.p.rapidapi.com".to_string(),
            }),
            doviz: Some(DovizProviderConfig {
                base_url:
                    "https://gold-and-foreign-exchange-information-from-turkish-companies.p.rapidapi.com"
                        .to_string(),
            }),
            exchange_rate: Some(ExchangeRateConfig {
                base_url: "https://api.exchangerate-api.com".to_string(),
            }),
        }
    }
}

/// Which adapter strategy serves the live path.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceSourceKind {
    #[default]
    Harem,
    Doviz,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub source: PriceSourceKind,
    /// Upstream gateway key. Optional: without it authenticated calls fail
    /// upstream and the fallback snapshots are served.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub data_path: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::default().with_env_overrides());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "sarraf", "sarraf")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn default_data_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "sarraf", "sarraf")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config.with_env_overrides())
    }

    // The environment is consulted exactly once, here; adapters only ever
    // see the resolved config.
    fn with_env_overrides(mut self) -> Self {
        if self.api_key.is_none() {
            self.api_key = std::env::var("RAPIDAPI_KEY").ok();
        }
        self
    }

    pub fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
server:
  bind_address: "127.0.0.1:9000"
providers:
  harem:
    base_url: "http://example.com/harem"
  doviz:
    base_url: "http://example.com/doviz"
  exchange_rate:
    base_url: "http://example.com/rates"
source: doviz
api_key: "test-key"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.server.bind_address, "127.0.0.1:9000");
        assert_eq!(config.server.cors_origins, vec!["*".to_string()]);
        assert_eq!(
            config.providers.harem.unwrap().base_url,
            "http://example.com/harem"
        );
        assert_eq!(config.source, PriceSourceKind::Doviz);
        assert_eq!(config.api_key.as_deref(), Some("test-key"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").expect("Failed to deserialize");
        assert_eq!(config.server.bind_address, "0.0.0.0:8000");
        assert_eq!(config.source, PriceSourceKind::Harem);
        assert!(config.api_key.is_none());
        assert!(
            config
                .providers
                .harem
                .unwrap()
                .base_url
                .contains("rapidapi.com")
        );
    }

    #[test]
    fn test_missing_api_key_resolves_to_empty() {
        let config = AppConfig {
            api_key: None,
            ..Default::default()
        };
        assert_eq!(config.api_key(), "");
    }
}
