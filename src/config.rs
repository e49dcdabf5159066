use serde::{Deserialize, Serialize};
use std::fs;

use crate::claimer::ClaimerError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default)]
    pub use_json: bool,
    #[serde(default = "default_rotation")]
    pub rotation: String,
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub faucet: FaucetConfig,
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
            port: 8080,
        }
    }
}

/// Faucet endpoint configuration. Constant across attempts for the whole
/// process lifetime.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FaucetConfig {
    pub api_url: String,
    pub origin: String,
    pub referer: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub claim_interval_hours: u64,
    pub initial_delay_secs: u64,
}

impl Default for FaucetConfig {
    fn default() -> Self {
        Self {
            api_url: "https://faucet.morkie.xyz/api/monad".to_string(),
            origin: "https://faucet.morkie.xyz".to_string(),
            referer: "https://faucet.morkie.xyz/monad".to_string(),
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/139.0.0.0 Safari/537.36"
                .to_string(),
            timeout_secs: 30,
            claim_interval_hours: 4,
            initial_delay_secs: 60,
        }
    }
}

impl FaucetConfig {
    pub fn claim_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.claim_interval_hours * 3600)
    }

    pub fn initial_delay(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.initial_delay_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: default_log_dir(),
            log_file: default_log_file(),
            use_json: false,
            rotation: default_rotation(),
            gateway: GatewayConfig::default(),
            faucet: FaucetConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load `config/{env}.yaml`. A missing file is fine (defaults apply);
    /// a file that exists but does not parse is a startup error.
    pub fn load(env: &str) -> Result<Self, ClaimerError> {
        let config_path = format!("config/{}.yaml", env);
        match fs::read_to_string(&config_path) {
            Ok(content) => serde_yaml::from_str(&content).map_err(|e| {
                ClaimerError::Config(format!("failed to parse {}: {}", config_path, e))
            }),
            Err(_) => {
                eprintln!("config file {} not found, using defaults", config_path);
                Ok(Self::default())
            }
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_log_file() -> String {
    "claimer.log".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}
