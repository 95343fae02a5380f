use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    #[serde(default)]
    pub gateway: GatewayConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "./logs".to_string(),
            log_file: "calc-api.log".to_string(),
            use_json: false,
            rotation: "daily".to_string(),
            gateway: GatewayConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `config/{env}.yaml`
    pub fn load(env: &str) -> anyhow::Result<Self> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config yaml: {}", config_path))
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default(env: &str) -> Self {
        match Self::load(env) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("⚠️  {:#}; using default config", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gateway_config() {
        let config = AppConfig::default();
        assert_eq!(config.gateway.host, "0.0.0.0");
        assert_eq!(config.gateway.port, 8000);
    }

    #[test]
    fn test_parse_yaml_config() {
        let yaml = r#"
log_level: debug
log_dir: ./logs
log_file: test.log
use_json: true
rotation: hourly
gateway:
  host: 127.0.0.1
  port: 9000
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.use_json);
        assert_eq!(config.gateway.port, 9000);
    }

    #[test]
    fn test_gateway_section_optional() {
        let yaml = r#"
log_level: info
log_dir: ./logs
log_file: test.log
use_json: false
rotation: never
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.gateway.port, 8000);
    }
}
