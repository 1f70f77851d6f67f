use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    /// Demo runner sizing
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Sizing for the demo transfer storm run by the binary.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DemoConfig {
    pub accounts: usize,
    pub initial_balance: u64,
    pub workers: usize,
    pub transfers_per_worker: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            accounts: 8,
            initial_balance: 10_000,
            workers: 4,
            transfers_per_worker: 2_000,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "./logs".to_string(),
            log_file: "fundcore.log".to_string(),
            use_json: false,
            rotation: "daily".to_string(),
            demo: DemoConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load `config/{env}.yaml`, falling back to defaults when absent.
    pub fn load(env: &str) -> Self {
        let config_path = format!("config/{}.yaml", env);
        if !Path::new(&config_path).exists() {
            return Self::default();
        }
        let content = fs::read_to_string(&config_path)
            .unwrap_or_else(|_| panic!("Failed to read config file: {}", config_path));
        serde_yaml::from_str(&content).expect("Failed to parse config yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_file_absent() {
        let config = AppConfig::load("no-such-env");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.demo.accounts, 8);
    }

    #[test]
    fn test_demo_section_defaults() {
        let config: AppConfig = serde_yaml::from_str(
            r#"
            log_level: "debug"
            log_dir: "./logs"
            log_file: "test.log"
            use_json: true
            rotation: "hourly"
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert!(config.use_json);
        assert_eq!(config.demo.workers, 4);
    }
}
