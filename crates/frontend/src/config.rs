use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub tenant_header: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AuthConfig {
    pub login_url: String,
    pub storage_key: String,
    pub redirect_delay_ms: u32,
}

/// Configuration compiled into the bundle
const EMBEDDED_CONFIG: &str = include_str!("../config.toml");

impl AppConfig {
    /// Parse the embedded config.toml
    pub fn load() -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(EMBEDDED_CONFIG)?;
        Ok(config)
    }

    /// Embedded config, or the built-in defaults when it does not parse
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => {
                log::info!("Using API at {}", config.api.base_url);
                config
            }
            Err(e) => {
                log::error!("Invalid config.toml, using defaults: {}", e);
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:3001/api".to_string(),
                tenant_header: "ruc".to_string(),
            },
            auth: AuthConfig {
                login_url: "http://localhost:8080/auth".to_string(),
                storage_key: "current_ruc".to_string(),
                redirect_delay_ms: 2000,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = AppConfig::load();
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), AppConfig::default());
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let config: Result<AppConfig, _> = toml::from_str("[api]\nbase_url = \"x\"\ntenant_header = \"ruc\"\n");
        assert!(config.is_err());
    }
}
