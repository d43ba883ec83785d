//! Configuration management for Snapcap
//!
//! Supports environment variables, config files, and runtime overrides.
//! The defaults reproduce the constants of the web app and capture script
//! this launcher wraps.
//!
//! Config file location: ~/.config/snapcap/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::core::error::{Result, SnapcapError};

/// Main configuration for Snapcap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Web app server configuration
    pub server: ServerConfig,
    /// Liveness probe configuration
    #[serde(default)]
    pub probe: ProbeConfig,
    /// Screenshot capture tool configuration
    pub capture: CaptureConfig,
    /// Console behavior configuration
    #[serde(default)]
    pub console: ConsoleConfig,
}

/// Web app server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address (default: 127.0.0.1)
    pub host: String,
    /// Port number (default: 5102)
    pub port: u16,
    /// Executable used to start the server (default: python)
    pub command: String,
    /// Arguments for the server command (default: ["web/app.py"])
    pub args: Vec<String>,
    /// Fixed delay after starting the server, in seconds (default: 5)
    ///
    /// This is a best-effort heuristic, not a readiness check: the launcher
    /// sleeps this long and then proceeds whether or not the server is up.
    pub startup_delay_secs: u64,
}

/// Liveness probe configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Timeout for the single probe request, in seconds
    pub timeout_secs: u64,
}

/// Screenshot capture tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Executable used to run the capture tool (default: python)
    pub command: String,
    /// Arguments for the capture command (default: ["scripts/capture_screenshots.py"])
    ///
    /// The launcher's own CLI arguments are appended after these, verbatim.
    pub args: Vec<String>,
    /// Output directory reported in the completion message
    ///
    /// Owned by the capture tool; the launcher only names it.
    pub output_dir: String,
}

/// Console behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Whether to wait for a key press before exiting
    pub pause_on_exit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            probe: ProbeConfig::default(),
            capture: CaptureConfig::default(),
            console: ConsoleConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: env::var("SNAPCAP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("SNAPCAP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5102),
            command: "python".to_string(),
            args: vec!["web/app.py".to_string()],
            startup_delay_secs: 5,
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self { timeout_secs: 5 }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            command: "python".to_string(),
            args: vec!["scripts/capture_screenshots.py".to_string()],
            output_dir: "screenshots".to_string(),
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            pause_on_exit: !env::var("SNAPCAP_NO_PAUSE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("snapcap")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: env vars > config file > defaults
    pub fn load() -> Self {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        // Try to load from config file
        if let Ok(config) = Self::load_from_file() {
            return config;
        }

        // Fall back to defaults (which respect env vars)
        Self::default()
    }

    /// Load configuration from file only
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::config_file();

        if !config_path.exists() {
            return Err(SnapcapError::config("Config file not found"));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| SnapcapError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| SnapcapError::config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Get the base URL probed for liveness
    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Defaults read the process environment, so tests that touch or depend
    // on SNAPCAP_* vars serialize behind this lock
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let config = Config::default();
        assert_eq!(config.server.port, 5102);
        assert_eq!(config.server.startup_delay_secs, 5);
        assert_eq!(config.server.command, "python");
        assert_eq!(config.capture.args, vec!["scripts/capture_screenshots.py"]);
        assert_eq!(config.capture.output_dir, "screenshots");
        assert!(config.console.pause_on_exit);
    }

    #[test]
    fn test_server_url() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let config = Config::default();
        assert_eq!(config.server_url(), "http://127.0.0.1:5102");
    }

    #[test]
    fn test_env_overrides() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var("SNAPCAP_HOST", "0.0.0.0");
        env::set_var("SNAPCAP_PORT", "6210");
        env::set_var("SNAPCAP_NO_PAUSE", "1");

        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 6210);
        assert!(!config.console.pause_on_exit);
        assert_eq!(config.server_url(), "http://0.0.0.0:6210");

        env::remove_var("SNAPCAP_HOST");
        env::remove_var("SNAPCAP_PORT");
        env::remove_var("SNAPCAP_NO_PAUSE");
    }

    #[test]
    fn test_malformed_port_falls_back_to_default() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var("SNAPCAP_PORT", "not-a-port");

        let config = Config::default();
        assert_eq!(config.server.port, 5102);

        env::remove_var("SNAPCAP_PORT");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("startup_delay_secs"));
        assert!(toml_str.contains("output_dir"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.server.port, config.server.port);
        assert_eq!(parsed.capture.command, config.capture.command);
    }

    #[test]
    fn test_config_dir() {
        let dir = Config::config_dir();
        assert!(dir.to_string_lossy().contains("snapcap"));
    }
}
